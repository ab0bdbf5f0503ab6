use std::{env, fs, path::Path};

fn main() {
    let version = env::var("CARGO_PKG_VERSION").expect("CARGO_PKG_VERSION is not set");
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    let out_dir = env::var("OUT_DIR").unwrap();

    let version_file_path = Path::new(&out_dir).join("version.rs");
    fs::write(
        &version_file_path,
        format!("pub const VERSION: &str = \"{version}\";\npub const PROFILE: &str = \"{profile}\";\n"),
    )
    .expect("Unable to write version file");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../Cargo.toml");
}
