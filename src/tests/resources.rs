use std::{env, fs, process};
use super::*;

fn temp_path(name: &str) -> String {
	env::temp_dir()
		.join(format!("fractal_landscape_{}_{}", process::id(), name))
		.to_str()
		.expect("temp dir is not valid UTF-8")
		.to_owned()
}

#[test]
fn params_file() {
	let path = temp_path("params.json");
	let params = random_params(3, 99);
	resource_interface::save_params_to_path(&path, &params).unwrap();
	assert_eq!(resource_interface::load_params_from_path(&path).unwrap(), params);
	fs::remove_file(&path).unwrap();
}
#[test]
fn params_file_validated() {
	let path = temp_path("bad_params.json");
	fs::write(&path, r#"{"resolution": -2, "cell_size": 1.0, "amplitude": 1.0, "decay": 0.5, "seed": 0}"#).unwrap();
	assert!(matches!(resource_interface::load_params_from_path(&path), Err(TerrainError::InvalidConfiguration(_))));
	fs::write(&path, "not json").unwrap();
	assert!(matches!(resource_interface::load_params_from_path(&path), Err(TerrainError::Json(_))));
	fs::remove_file(&path).unwrap();
}
#[test]
fn missing_file_names_path() {
	let path = temp_path("does_not_exist.json");
	let e = resource_interface::load_params_from_path(&path).unwrap_err();
	assert!(matches!(e, TerrainError::Io(_)));
	assert!(e.to_string().contains(&path));
}
#[test]
fn mesh_files() {
	let mesh = Landscape::generate(random_params(2, 4)).unwrap().build_trimesh();
	for name in ["mesh.json", "mesh.bin"] {
		let path = temp_path(name);
		resource_interface::save_mesh(&path, &mesh).unwrap();
		assert_eq!(resource_interface::load_mesh(&path).unwrap(), mesh);
		fs::remove_file(&path).unwrap();
	}
}
