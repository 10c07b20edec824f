//! Generates `include/fixarr.h` from the exported `fixarr_*` functions.

use std::env;
use std::path::{Path, PathBuf};

const HEADER: &str = "fixarr.h";

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let crate_dir = PathBuf::from(
        env::var_os("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"),
    );
    let header = include_dir(&crate_dir).join(HEADER);

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))
        .unwrap_or_else(|e| panic!("fixarr-ffi: invalid cbindgen.toml: {e}"));

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(&header);
        }
        Err(e) => panic!("fixarr-ffi: cannot generate {}: {e}", header.display()),
    }
}

/// `<crate>/include`, created on first build.
fn include_dir(crate_dir: &Path) -> PathBuf {
    let dir = crate_dir.join("include");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        panic!("fixarr-ffi: cannot create {}: {e}", dir.display());
    }
    dir
}
