//! Fractal landscape generator
//! Builds a square heightmap with the diamond-square algorithm and triangulates it into a vertex/index buffer pair ready for a renderer.

use std::{env, fs};
use serde::{Serialize, Deserialize};
use nalgebra::{Point3, Vector3};
use thiserror::Error;
use log::{info, error};

// Modules
pub mod map;
pub mod resource_interface;

// Tests
#[cfg(test)]
mod tests;

// Prelude
#[allow(unused)]
pub mod prelude {
	use super::*;
	// Name of this app
	pub const APP_NAME: &str = "Fractal Landscape";
	// Types
	pub type Float = f32;
	pub type Int = i64;
	pub type P3 = Point3<Float>;
	pub type V3 = Vector3<Float>;
	pub const EPSILON: Float = 1.0e-6;// Arbitrary
	// Misc
	pub use crate::{
		map::{
			Landscape,
			grid::{HeightGrid, MAX_RESOLUTION},
			map_generation::{FractalParameters, fractal::FractalSynthesizer},
			triangulate::{Triangle, Face, Triangulator, Winding}
		},
		TerrainError,
		BasicTriMesh,
		resource_interface
	};
	pub fn prompt(s: &str) -> Result<String, TerrainError> {
		dialoguer::Input::<String>::new()
			.with_prompt(s)
			.interact_text()
			.map_err(|e| TerrainError::InvalidConfiguration(format!("Could not read \"{}\": {}", s, e)))
	}
	/// Parses a prompted value, the prompt text is included in the error
	/// ```
	/// use fractal_landscape::prelude::parse_field;
	/// assert_eq!(parse_field::<i64>("Resolution", "4").unwrap(), 4);
	/// assert!(parse_field::<f32>("Cell size", "ten").is_err());
	/// ```
	pub fn parse_field<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, TerrainError>
	where
		T::Err: std::fmt::Display
	{
		raw.trim().parse::<T>().map_err(|e| TerrainError::InvalidConfiguration(format!("{}: \"{}\" ({})", name, raw, e)))
	}
}

use prelude::*;

/// Every fallible operation in this crate returns this
#[derive(Error, Debug)]
pub enum TerrainError {
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	#[error("Grid index ({ix}, {iz}) is out of bounds for a grid with {point_count} points per side")]
	IndexOutOfBounds {
		ix: usize,
		iz: usize,
		point_count: usize
	},

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Bincode error: {0}")]
	Bincode(#[from] bincode::Error)
}

/// Unshared-vertex triangle mesh, this is what gets handed to the rendering host
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct BasicTriMesh {
	pub vertices: Vec<P3>,
	pub indices: Vec<[u32; 3]>
}

impl BasicTriMesh {
	pub fn new(
		vertices: Vec<P3>,
		indices: Vec<[u32; 3]>
	) -> Self {
		Self {
			vertices,
			indices
		}
	}
	pub fn triangle_count(&self) -> usize {
		self.indices.len()
	}
	pub fn is_valid(&self) -> Result<(), TerrainError> {
		// Check that all indices are within limits
		for triangle in &self.indices {
			for index in triangle {
				if *index as usize >= self.vertices.len() {
					return Err(TerrainError::InvalidConfiguration(format!("BasicTriMesh::is_valid(): index {} out of bounds for {} vertices", index, self.vertices.len())));
				}
			}
		}
		// Done
		Ok(())
	}
	/// Index buffer in the same order the triangles are stored
	/// ```
	/// use fractal_landscape::prelude::{BasicTriMesh, P3};
	/// let mesh = BasicTriMesh::new(vec![P3::origin(); 6], vec![[0, 1, 2], [3, 4, 5]]);
	/// assert_eq!(mesh.flatten_indices(), vec![0, 1, 2, 3, 4, 5]);
	/// ```
	pub fn flatten_indices(&self) -> Vec<u32> {
		self.indices.iter().flatten().copied().collect()
	}
	/// Flattens and reverses triangles, for hosts that treat counter-clockwise as the front face
	/// ```
	/// use fractal_landscape::prelude::{BasicTriMesh, P3};
	/// let mesh = BasicTriMesh::new(
	/// 	vec![
	/// 		P3::new(1.0, 2.0, 3.0),
	/// 		P3::new(2.0, 3.0, 4.0),
	/// 		P3::new(3.0, 4.0, 5.0),
	/// 		P3::new(4.0, 5.0, 6.0),
	/// 		P3::new(5.0, 6.0, 7.0),
	/// 		P3::new(6.0, 7.0, 8.0)
	/// 	],
	/// 	vec![
	/// 		[0, 1, 2],
	/// 		[3, 4, 5]
	/// 	]
	/// );
	/// assert_eq!(
	/// 	mesh.flatten_and_reverse_indices(),
	/// 	vec![0, 2, 1, 3, 5, 4]
	/// );
	/// ```
	pub fn flatten_and_reverse_indices(&self) -> Vec<u32> {
		let mut out = Vec::<u32>::with_capacity(self.indices.len() * 3);
		for set in &self.indices {
			out.push(set[0]);
			out.push(set[2]);// Not a mistake
			out.push(set[1]);
		}
		out
	}
	/// One unit normal per triangle, `(b - a) x (c - a)`, zero for degenerate triangles
	pub fn face_normals(&self) -> Result<Vec<V3>, TerrainError> {
		self.is_valid()?;
		Ok(self.indices.iter().map(|[a, b, c]| {
			let a = self.vertices[*a as usize];
			let normal = (self.vertices[*b as usize] - a).cross(&(self.vertices[*c as usize] - a));
			normal.try_normalize(EPSILON).unwrap_or_else(V3::zeros)
		}).collect())
	}
}

impl Default for BasicTriMesh {
	fn default() -> Self {
		Self {
			vertices: Vec::new(),
			indices: Vec::new()
		}
	}
}

/// Command line entry point, see `bin.rs`
pub fn ui_main() -> Result<(), TerrainError> {
	// Parse arguments
	let args: Vec<String> = env::args().collect();
	if args.len() < 2 {
		let program = args.first().map(String::as_str).unwrap_or(APP_NAME);
		return Err(TerrainError::InvalidConfiguration(format!("Not enough arguments, usage: {} -generate <params.json> <out.json|out.bin> | -new-params | -print <params.json>", program)));
	}
	match &args[1][..] {
		"-generate" => {
			if args.len() < 4 {
				return Err(TerrainError::InvalidConfiguration("-generate needs a parameter file and an output file".to_owned()));
			}
			let params = resource_interface::load_params_from_path(&args[2])?;
			let landscape = Landscape::generate(params)?;
			let mesh = landscape.build_trimesh();
			resource_interface::save_mesh(&args[3], &mesh)?;
			info!("Saved {} triangles to \"{}\"", mesh.triangle_count(), &args[3]);
		},
		"-new-params" => {
			let name = prompt("Name")?;
			let params = FractalParameters {
				resolution: parse_field("Resolution", &prompt("Resolution (number of subdivisions)")?)?,
				cell_size: parse_field("Cell size", &prompt("Cell size")?)?,
				amplitude: parse_field("Amplitude", &prompt("Initial amplitude")?)?,
				decay: parse_field("Decay", &prompt("Decay factor")?)?,
				seed: parse_field("Seed", &prompt("Seed (0 disables randomness)")?)?
			};
			params.validate()?;
			fs::create_dir_all(resource_interface::LANDSCAPES_DIR)?;
			resource_interface::save_params(&name, &params)?;
			println!("Created landscape parameters \"{}\"", name);
		},
		"-print" => {
			if args.len() < 3 {
				return Err(TerrainError::InvalidConfiguration("-print needs a parameter file".to_owned()));
			}
			let params = resource_interface::load_params_from_path(&args[2])?;
			let landscape = Landscape::generate(params)?;
			print!("{}", landscape.height_table());
		},
		invalid => {
			error!("Invalid argument \"{}\"", invalid);
			return Err(TerrainError::InvalidConfiguration(format!("Invalid argument \"{}\"", invalid)));
		}
	}
	Ok(())
}
