// Fractal terrain generation, diamond-square
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use log::{debug, error};

use crate::prelude::*;

/// Fills a `HeightGrid` in one pass: corners, then a diamond step and a square step for every level.
/// Owns its random source, so the same parameters and seed always produce the same heightmap.
pub struct FractalSynthesizer {
	params: FractalParameters,
	/// None when the seed is 0, every offset is then 0
	rng_opt: Option<ChaCha8Rng>
}

impl FractalSynthesizer {
	pub fn new(params: FractalParameters) -> Result<Self, TerrainError> {
		params.validate()?;
		let rng_opt = match params.randomness_disabled() {
			true => None,
			false => Some(ChaCha8Rng::seed_from_u64(params.seed))
		};
		Ok(Self {
			params,
			rng_opt
		})
	}
	pub fn params(&self) -> &FractalParameters {
		&self.params
	}
	/// Runs the whole algorithm on a flat grid, consumes `self` so the random stream can't be reused
	pub fn synthesize(mut self, grid: &mut HeightGrid) -> Result<(), TerrainError> {
		if grid.resolution() as Int != self.params.resolution {
			return Err(TerrainError::InvalidConfiguration(format!("Grid resolution ({}) does not match the parameters ({})", grid.resolution(), self.params.resolution)));
		}
		self.init_corners(grid)?;
		let mut amplitude = self.params.amplitude;
		for level in 1..=grid.resolution() {
			if let Err(e) = self.diamond_step(grid, level, amplitude) {
				error!("Diamond step failed at level {}: {}", level, e);
				return Err(e);
			}
			if let Err(e) = self.square_step(grid, level, amplitude) {
				error!("Square step failed at level {}: {}", level, e);
				return Err(e);
			}
			debug!("Level {} done with amplitude {}", level, amplitude);
			// Only decays between levels
			amplitude *= self.params.decay;
		}
		// Done
		Ok(())
	}
	/// Sets the four corners to exactly the initial amplitude
	pub fn init_corners(&self, grid: &mut HeightGrid) -> Result<(), TerrainError> {
		let last = grid.point_count() - 1;
		let corner_height = self.params.amplitude;
		grid.set_height(0, 0, corner_height)?;
		grid.set_height(last, 0, corner_height)?;
		grid.set_height(0, last, corner_height)?;
		grid.set_height(last, last, corner_height)?;
		Ok(())
	}
	/// Distance between already known points at the start of `level`
	/// ```
	/// use fractal_landscape::prelude::{FractalSynthesizer, HeightGrid};
	/// let grid = HeightGrid::new(3, 1.0).unwrap();
	/// assert_eq!(FractalSynthesizer::spacing(&grid, 1).unwrap(), 8);
	/// assert_eq!(FractalSynthesizer::spacing(&grid, 3).unwrap(), 2);
	/// assert!(FractalSynthesizer::spacing(&grid, 0).is_err());
	/// ```
	pub fn spacing(grid: &HeightGrid, level: u32) -> Result<usize, TerrainError> {
		Self::check_level(grid, level)?;
		Ok((grid.point_count() - 1) >> (level - 1))
	}
	fn check_level(grid: &HeightGrid, level: u32) -> Result<(), TerrainError> {
		if level == 0 || level > grid.resolution() {
			return Err(TerrainError::InvalidConfiguration(format!("Level must be within [1, {}], instead it is {}", grid.resolution(), level)));
		}
		Ok(())
	}
	/// Cell centers: average of the four corners (NW, NE, SE, SW) plus a random offset
	pub fn diamond_step(&mut self, grid: &mut HeightGrid, level: u32, amplitude: Float) -> Result<(), TerrainError> {
		let spacing = Self::spacing(grid, level)?;
		let half_spacing = spacing / 2;
		let n = grid.point_count();
		for i in (0..n - 1).step_by(spacing) {
			for j in (0..n - 1).step_by(spacing) {
				let height_nw = grid.get_height(i, j)?;
				let height_ne = grid.get_height(i, j + spacing)?;
				let height_se = grid.get_height(i + spacing, j + spacing)?;
				let height_sw = grid.get_height(i + spacing, j)?;
				let height = ((height_nw + height_ne + height_se + height_sw) / 4.0) + self.next_offset(amplitude);
				grid.set_height(i + half_spacing, j + half_spacing, height)?;
			}
		}
		Ok(())
	}
	/// Edge midpoints introduced at this level: average of the N, E, S and W neighbours that exist plus a random offset.
	/// On the grid border one neighbour is missing and the average is over three.
	pub fn square_step(&mut self, grid: &mut HeightGrid, level: u32, amplitude: Float) -> Result<(), TerrainError> {
		let spacing = Self::spacing(grid, level)?;
		let half_spacing = spacing / 2;
		let h = half_spacing as Int;
		let n = grid.point_count();
		for (row, i) in (0..n).step_by(half_spacing).enumerate() {
			// Rows on the cell corners have their midpoints staggered by half a cell
			let initial_j = match row % 2 {
				0 => half_spacing,
				_ => 0
			};
			for j in (initial_j..n).step_by(spacing) {
				let mut sum: Float = 0.0;
				let mut count: usize = 0;
				for (di, dj) in [(-h, 0), (0, h), (h, 0), (0, -h)] {// N, E, S, W
					let (ni, nj) = (i as Int + di, j as Int + dj);
					if grid.contains(ni, nj) {
						sum += grid.get_height(ni as usize, nj as usize)?;
						count += 1;
					}
				}
				let height = (sum / count as Float) + self.next_offset(amplitude);
				grid.set_height(i, j, height)?;
			}
		}
		Ok(())
	}
	/// Uniform in [-amplitude/2, amplitude/2], always 0 without a random source
	fn next_offset(&mut self, amplitude: Float) -> Float {
		match &mut self.rng_opt {
			Some(rng) => {
				let half = amplitude / 2.0;
				rng.gen_range(-half..=half)
			},
			None => 0.0
		}
	}
}
