use icongen::GeneratorConfig;

fn main() {
    env_logger::init();

    let config = GeneratorConfig::default();
    match icongen::generate(&config) {
        Ok(path) => println!("icon written to {}", path.display()),
        Err(e) => {
            eprintln!("icon generation failed: {e}");
            std::process::exit(1);
        }
    }
}
