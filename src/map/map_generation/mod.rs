// Seperate module for map generation

use serde::{Serialize, Deserialize};
use crate::prelude::*;

pub mod fractal;

/// Everything the fractal generator needs, usually loaded from a JSON file in `resource_interface::LANDSCAPES_DIR`
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct FractalParameters {
	/// Number of halving subdivisions, grid will have 2^resolution + 1 points along each side
	pub resolution: Int,
	/// World-unit distance between adjacent grid points
	pub cell_size: Float,
	/// Corner height and the range of the random offset at the first level
	pub amplitude: Float,
	/// Amplitude is multiplied by this after every level
	pub decay: Float,
	/// 0 disables randomness entirely
	pub seed: u64
}

impl FractalParameters {
	pub fn validate(&self) -> Result<(), TerrainError> {
		if self.resolution < 0 || self.resolution > MAX_RESOLUTION {
			return Err(TerrainError::InvalidConfiguration(format!("Resolution must be within [0, {}], instead it is {}", MAX_RESOLUTION, self.resolution)));
		}
		if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
			return Err(TerrainError::InvalidConfiguration(format!("Cell size must be a positive number, instead it is {}", self.cell_size)));
		}
		if !(self.amplitude.is_finite() && self.amplitude >= 0.0) {
			return Err(TerrainError::InvalidConfiguration(format!("Amplitude must be a non-negative number, instead it is {}", self.amplitude)));
		}
		if !(self.decay.is_finite() && 0.0 < self.decay && self.decay <= 1.0) {
			return Err(TerrainError::InvalidConfiguration(format!("Decay must be within (0, 1], instead it is {}", self.decay)));
		}
		Ok(())
	}
	/// Whether the random source is bypassed
	pub fn randomness_disabled(&self) -> bool {
		self.seed == 0
	}
}

impl Default for FractalParameters {
	fn default() -> Self {
		Self {
			resolution: 4,
			cell_size: 10.0,
			amplitude: 10.0,
			decay: 0.5,
			seed: 1
		}
	}
}
