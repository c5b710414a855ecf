use std::env;

const VARS: &[&str] = &["KANSOU_BACKEND_URL", "KANSOU_BACKEND_ANON_KEY"];

// The browser has no process environment,
// so the backend settings are baked into the binary.
fn main() {
    println!("cargo:rerun-if-changed=.env");
    if let Err(err) = dotenvy::dotenv() {
        println!("cargo:warning=No .env file loaded: {err}");
    }
    for var in VARS {
        println!("cargo:rerun-if-env-changed={var}");
        if let Ok(value) = env::var(var) {
            println!("cargo:rustc-env={var}={value}");
        }
    }
}
