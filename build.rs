use std::env;
use std::fs;
use std::path::Path;

/// Claves de .env que se inyectan en el binario en tiempo de compilación.
const ENV_KEYS: &[&str] = &["BACKEND_URL"];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Solo claves conocidas, y sin pisar variables ya definidas
                    if ENV_KEYS.contains(&key) && env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using the localhost backend default.");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
