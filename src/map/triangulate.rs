//! Turns a finished `HeightGrid` into an unshared-vertex triangle stream

use crate::prelude::*;

/// Vertex order of a triangle as seen from above (+Y), with X to the right and Z up the page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Winding {
	Clockwise,
	CounterClockwise,
	Degenerate
}

#[derive(Clone, PartialEq, Debug)]
pub struct Triangle {
	points: [P3; 3]
}

impl Triangle {
	pub fn new(a: P3, b: P3, c: P3) -> Self {
		Self {
			points: [a, b, c]
		}
	}
	pub fn points(&self) -> &[P3; 3] {
		&self.points
	}
	/// Not normalized, `(b - a) x (c - a)`
	pub fn normal(&self) -> V3 {
		let [a, b, c] = &self.points;
		(b - a).cross(&(c - a))
	}
	/// Only uses X and Z, so heights never change the result
	/// ```
	/// use fractal_landscape::prelude::{Triangle, Winding, P3};
	/// let t = Triangle::new(P3::new(0.0, 0.0, 1.0), P3::new(1.0, 0.0, 0.0), P3::new(0.0, 0.0, 0.0));
	/// assert_eq!(t.winding(), Winding::Clockwise);
	/// let t = Triangle::new(P3::new(0.0, 0.0, 0.0), P3::new(1.0, 0.0, 0.0), P3::new(0.0, 0.0, 1.0));
	/// assert_eq!(t.winding(), Winding::CounterClockwise);
	/// ```
	pub fn winding(&self) -> Winding {
		let [a, b, c] = &self.points;
		let signed_area_x2 = ((b.x - a.x) * (c.z - a.z)) - ((b.z - a.z) * (c.x - a.x));
		if signed_area_x2.abs() <= EPSILON {
			Winding::Degenerate
		}
		else if signed_area_x2 < 0.0 {
			Winding::Clockwise
		}
		else {
			Winding::CounterClockwise
		}
	}
}

/// Two triangles sharing a diagonal, covering one grid cell
#[derive(Clone, PartialEq, Debug)]
pub struct Face {
	triangles: [Triangle; 2]
}

impl Face {
	pub fn new(t1: Triangle, t2: Triangle) -> Self {
		Self {
			triangles: [t1, t2]
		}
	}
	pub fn triangles(&self) -> &[Triangle; 2] {
		&self.triangles
	}
	pub fn to_points(&self) -> Vec<P3> {
		self.triangles.iter().flat_map(|t| t.points().iter().copied()).collect()
	}
}

pub struct Triangulator;

impl Triangulator {
	/// Calls `f` with the two triangles of every cell, cells visited with ix outer and iz inner.
	/// Both triangles are split along the (ix, iz + 1) - (ix + 1, iz) diagonal and wind clockwise from above.
	fn for_each_cell<F: FnMut(Triangle, Triangle)>(grid: &HeightGrid, mut f: F) {
		let n = grid.point_count();
		// Indices are always in range here, point_at() is only used to copy points
		let p = |ix: usize, iz: usize| -> P3 {
			grid.point_at(ix, iz).unwrap_or_else(|e| panic!("Triangulator produced an invalid index: {}", e))
		};
		for i in 0..n - 1 {
			for j in 0..n - 1 {
				f(
					Triangle::new(p(i, j + 1), p(i + 1, j), p(i, j)),
					Triangle::new(p(i + 1, j + 1), p(i + 1, j), p(i, j + 1))
				);
			}
		}
	}
	fn cell_count(grid: &HeightGrid) -> usize {
		(grid.point_count() - 1).pow(2)
	}
	/// One face per cell
	pub fn faces(grid: &HeightGrid) -> Vec<Face> {
		let mut faces = Vec::<Face>::with_capacity(Self::cell_count(grid));
		Self::for_each_cell(grid, |t1, t2| faces.push(Face::new(t1, t2)));
		faces
	}
	/// Flat stream, three consecutive points per triangle, written straight into one buffer
	pub fn points(grid: &HeightGrid) -> Vec<P3> {
		let mut out = Vec::<P3>::with_capacity(6 * Self::cell_count(grid));
		Self::for_each_cell(grid, |t1, t2| {
			out.extend_from_slice(t1.points());
			out.extend_from_slice(t2.points());
		});
		out
	}
	/// Triangle `t` uses indices `[3t, 3t + 1, 3t + 2]`
	pub fn mesh(grid: &HeightGrid) -> BasicTriMesh {
		let vertices = Self::points(grid);
		let indices: Vec<[u32; 3]> = (0..(vertices.len() / 3) as u32)
			.map(|t| [3 * t, 3 * t + 1, 3 * t + 2])
			.collect();
		BasicTriMesh::new(vertices, indices)
	}
}
