//! The heightmap itself, a square lattice of points whose heights get filled in by a generator

use serde::{Serialize, Deserialize};

use crate::prelude::*;

/// Largest accepted resolution, (2^12 + 1)^2 points is already ~16.8 million
pub const MAX_RESOLUTION: Int = 12;

/// Square grid of `point_count` x `point_count` points, centered on the origin in the X-Z plane
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct HeightGrid {
	/// Number of halving subdivisions
	resolution: u32,
	/// Distance between adjacent points along X and Z
	cell_size: Float,
	/// point = points[ix][iz]
	points: Vec<Vec<P3>>
}

impl HeightGrid {
	/// Creates a flat grid, `point_count = 2^resolution + 1`
	/// ```
	/// use fractal_landscape::prelude::HeightGrid;
	/// assert_eq!(HeightGrid::new(3, 1.0).unwrap().point_count(), 9);
	/// assert!(HeightGrid::new(-1, 1.0).is_err());
	/// assert!(HeightGrid::new(2, 0.0).is_err());
	/// ```
	pub fn new(resolution: Int, cell_size: Float) -> Result<Self, TerrainError> {
		if resolution < 0 || resolution > MAX_RESOLUTION {
			return Err(TerrainError::InvalidConfiguration(format!("Resolution must be within [0, {}], instead it is {}", MAX_RESOLUTION, resolution)));
		}
		if !(cell_size.is_finite() && cell_size > 0.0) {
			return Err(TerrainError::InvalidConfiguration(format!("Cell size must be a positive number, instead it is {}", cell_size)));
		}
		let resolution = resolution as u32;
		let point_count = Self::point_count_for(resolution);
		// Shift so the middle point lands on the origin
		let translate = (point_count - 1) as Float * cell_size * 0.5;
		let mut points = Vec::<Vec<P3>>::with_capacity(point_count);
		for ix in 0..point_count {
			let mut column = Vec::<P3>::with_capacity(point_count);
			for iz in 0..point_count {
				column.push(P3::new(
					(ix as Float * cell_size) - translate,
					0.0,
					(iz as Float * cell_size) - translate
				));
			}
			points.push(column);
		}
		// Done
		Ok(Self {
			resolution,
			cell_size,
			points
		})
	}
	/// ```
	/// use fractal_landscape::prelude::HeightGrid;
	/// assert_eq!(HeightGrid::point_count_for(0), 2);
	/// assert_eq!(HeightGrid::point_count_for(4), 17);
	/// ```
	pub fn point_count_for(resolution: u32) -> usize {
		(1usize << resolution) + 1
	}
	pub fn point_count(&self) -> usize {
		self.points.len()
	}
	pub fn resolution(&self) -> u32 {
		self.resolution
	}
	pub fn cell_size(&self) -> Float {
		self.cell_size
	}
	/// Whether a (possibly negative) pair of indices lands on the grid
	pub fn contains(&self, ix: Int, iz: Int) -> bool {
		let n = self.point_count() as Int;
		0 <= ix && ix < n && 0 <= iz && iz < n
	}
	fn check_bounds(&self, ix: usize, iz: usize) -> Result<(), TerrainError> {
		let point_count = self.point_count();
		if ix >= point_count || iz >= point_count {
			return Err(TerrainError::IndexOutOfBounds {
				ix,
				iz,
				point_count
			});
		}
		Ok(())
	}
	pub fn set_height(&mut self, ix: usize, iz: usize, height: Float) -> Result<(), TerrainError> {
		self.check_bounds(ix, iz)?;
		self.points[ix][iz].y = height;
		Ok(())
	}
	pub fn get_height(&self, ix: usize, iz: usize) -> Result<Float, TerrainError> {
		self.check_bounds(ix, iz)?;
		Ok(self.points[ix][iz].y)
	}
	pub fn point_at(&self, ix: usize, iz: usize) -> Result<P3, TerrainError> {
		self.check_bounds(ix, iz)?;
		Ok(self.points[ix][iz])
	}
	/// (min, max) of all heights
	pub fn height_range(&self) -> (Float, Float) {
		let mut min = Float::INFINITY;
		let mut max = Float::NEG_INFINITY;
		for p in self.points.iter().flatten() {
			min = min.min(p.y);
			max = max.max(p.y);
		}
		(min, max)
	}
	/// All heights, ix-major
	pub fn heights(&self) -> Vec<Float> {
		self.points.iter().flatten().map(|p| p.y).collect()
	}
}
