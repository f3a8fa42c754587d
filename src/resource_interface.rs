//! For loading & saving resources

use std::{fs, path::Path};
use std::io::Error as IoError;
use serde_json;
use log::debug;

use crate::prelude::*;

// STATICS
pub static LANDSCAPES_DIR: &str = "resources/landscapes/";

pub static MESH_JSON_EXTENSION: &str = "json";

// Load
pub fn load_params(name: &str) -> Result<FractalParameters, TerrainError> {
	load_params_from_path(&(LANDSCAPES_DIR.to_owned() + name + ".json"))
}

pub fn load_params_from_path(path: &str) -> Result<FractalParameters, TerrainError> {
	let raw_string: String = load_file_with_better_error(path)?;
	let params: FractalParameters = serde_json::from_str(&raw_string)?;
	params.validate()?;
	debug!("Loaded landscape parameters from \"{}\"", path);
	Ok(params)
}

/// JSON if the extension is `.json`, bincode otherwise
pub fn load_mesh(path: &str) -> Result<BasicTriMesh, TerrainError> {
	let mesh: BasicTriMesh = match is_json(path) {
		true => serde_json::from_str(&load_file_with_better_error(path)?)?,
		false => bincode::deserialize(&read_with_better_error(path)?)?
	};
	mesh.is_valid()?;
	Ok(mesh)
}

// Save
pub fn save_params(name: &str, params: &FractalParameters) -> Result<(), TerrainError> {
	save_params_to_path(&(LANDSCAPES_DIR.to_owned() + name + ".json"), params)
}

pub fn save_params_to_path(path: &str, params: &FractalParameters) -> Result<(), TerrainError> {
	let raw_string = serde_json::to_string_pretty(params)?;
	fs::write(path, &raw_string)?;
	Ok(())
}

/// JSON if the extension is `.json`, bincode otherwise
pub fn save_mesh(path: &str, mesh: &BasicTriMesh) -> Result<(), TerrainError> {
	mesh.is_valid()?;
	match is_json(path) {
		true => fs::write(path, serde_json::to_string(mesh)?)?,
		false => fs::write(path, bincode::serialize(mesh)?)?
	}
	debug!("Saved mesh with {} vertices to \"{}\"", mesh.vertices.len(), path);
	Ok(())
}

// Misc
fn is_json(path: &str) -> bool {
	Path::new(path).extension().map_or(false, |ext| ext == MESH_JSON_EXTENSION)
}

pub fn load_file_with_better_error(path: &str) -> Result<String, TerrainError> {
	match fs::read_to_string(path) {
		Ok(contents) => Ok(contents),
		// Combine the error with the path information
		Err(err) => Err(IoError::new(err.kind(), format!("Error reading file '{}': {}", path, err)).into())
	}
}

fn read_with_better_error(path: &str) -> Result<Vec<u8>, TerrainError> {
	fs::read(path).map_err(|err| IoError::new(err.kind(), format!("Error reading file '{}': {}", path, err)).into())
}
