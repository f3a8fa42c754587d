use approx::assert_relative_eq;
use crate::prelude::*;

mod resources;

/// Seed 0, so every offset is 0
fn flat_params(resolution: Int, amplitude: Float, decay: Float) -> FractalParameters {
	FractalParameters {
		resolution,
		cell_size: 1.0,
		amplitude,
		decay,
		seed: 0
	}
}

fn random_params(resolution: Int, seed: u64) -> FractalParameters {
	FractalParameters {
		resolution,
		cell_size: 2.5,
		amplitude: 10.0,
		decay: 0.5,
		seed
	}
}

fn synthesized(params: FractalParameters) -> HeightGrid {
	let mut grid = HeightGrid::new(params.resolution, params.cell_size).unwrap();
	FractalSynthesizer::new(params).unwrap().synthesize(&mut grid).unwrap();
	grid
}

mod misc {
	use super::*;
	#[test]
	#[should_panic]
	fn rel_eq_test() {
		assert_relative_eq!(EPSILON * 2.0, 0.0, epsilon = EPSILON);// Just to make sure I'm using this right
	}
	#[test]
	fn landscape_generate() {
		let landscape = Landscape::generate(FractalParameters::default()).unwrap();
		assert_eq!(landscape.grid().point_count(), 17);
		assert_eq!(landscape.params(), &FractalParameters::default());
		assert_eq!(landscape.height_table().lines().count(), 17);
		let mesh = landscape.build_trimesh();
		assert_eq!(mesh.triangle_count(), 2 * 16 * 16);
		assert!(mesh.is_valid().is_ok());
	}
	#[test]
	fn landscape_rejects_bad_params() {
		let mut params = FractalParameters::default();
		params.cell_size = -1.0;
		assert!(matches!(Landscape::generate(params), Err(TerrainError::InvalidConfiguration(_))));
	}
	#[test]
	fn parse_field_error_names_field() {
		let e = parse_field::<Int>("Resolution", "four").unwrap_err();
		assert!(e.to_string().contains("Resolution"));
	}
}
