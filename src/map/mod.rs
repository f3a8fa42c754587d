//! Map main module file

use std::fmt::Write;
use log::info;

use crate::prelude::*;

pub mod grid;
pub mod triangulate;
pub mod map_generation;

/// A finished heightmap plus the parameters that made it. The grid is read-only from here on.
#[derive(Clone, Debug)]
pub struct Landscape {
	params: FractalParameters,
	grid: HeightGrid
}

impl Landscape {
	/// Validate, build a flat grid, run the synthesizer over it
	pub fn generate(params: FractalParameters) -> Result<Self, TerrainError> {
		let synthesizer = FractalSynthesizer::new(params.clone())?;
		let mut grid = HeightGrid::new(params.resolution, params.cell_size)?;
		synthesizer.synthesize(&mut grid)?;
		let (min, max) = grid.height_range();
		info!(
			"Generated landscape: {:?}, {} points per side, heights within [{}, {}]",
			&params,
			grid.point_count(),
			min,
			max
		);
		Ok(Self {
			params,
			grid
		})
	}
	pub fn params(&self) -> &FractalParameters {
		&self.params
	}
	pub fn grid(&self) -> &HeightGrid {
		&self.grid
	}
	pub fn build_trimesh(&self) -> BasicTriMesh {
		let mesh = Triangulator::mesh(&self.grid);
		info!("Triangulated landscape into {} triangles", mesh.triangle_count());
		mesh
	}
	/// Heights as text, one line per ix
	pub fn height_table(&self) -> String {
		let n = self.grid.point_count();
		let heights = self.grid.heights();
		let mut out = String::new();
		for ix in 0..n {
			let row: Vec<String> = heights[ix * n..(ix + 1) * n].iter().map(|h| format!("{:8.3}", h)).collect();
			// Writing to a String can't fail
			let _ = writeln!(out, "{}", row.join(" "));
		}
		out
	}
}
