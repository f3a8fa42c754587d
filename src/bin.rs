use std::process;

fn main() {
	env_logger::init();
	if let Err(e) = fractal_landscape::ui_main() {
		eprintln!("{}", e);
		process::exit(1);
	}
}
