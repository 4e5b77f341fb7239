// crates/kyuji-core/build.rs
//
// Packs data/joyo2010.json into the dictionary artifact that
// src/embedded.rs compiles in. Shares the codec with the library.

#![allow(dead_code)]

#[path = "src/error.rs"]
mod error;
#[path = "src/record.rs"]
mod record;
#[path = "src/source.rs"]
mod source;
#[path = "src/artifact.rs"]
mod artifact;

use std::path::PathBuf;

use anyhow::Context;

const SOURCE: &str = "data/joyo2010.json";
const OUT_NAME: &str = "joyo2010.kjd";

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");
    println!("cargo:rerun-if-changed=src/error.rs");
    println!("cargo:rerun-if-changed=src/record.rs");
    println!("cargo:rerun-if-changed=src/source.rs");
    println!("cargo:rerun-if-changed=src/artifact.rs");

    if let Err(e) = run() {
        panic!("kyuji-core build: {e:#}");
    }
}

fn run() -> anyhow::Result<()> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);

    let text = std::fs::read_to_string(manifest_dir.join(SOURCE))
        .with_context(|| format!("read {SOURCE}"))?;
    let records = source::parse_json(&text).with_context(|| format!("parse {SOURCE}"))?;
    if records.is_empty() {
        anyhow::bail!("{SOURCE} has no records");
    }

    let bytes = artifact::encode(&records, true, artifact::DEFAULT_LEVEL)?;
    std::fs::write(out_dir.join(OUT_NAME), bytes)?;
    Ok(())
}
