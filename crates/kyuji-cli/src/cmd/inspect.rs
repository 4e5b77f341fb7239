// crates/kyuji-cli/src/cmd/inspect.rs

use anyhow::Context;
use clap::Args;
use kyuji_core::artifact;

use crate::io::dict_file;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input .kjd path (default: the embedded artifact)
    #[arg(long)]
    pub r#in: Option<String>,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let name = args.r#in.as_deref().unwrap_or("<embedded>");
    let bytes = dict_file::read_artifact(args.r#in.as_deref())?;
    let info = artifact::inspect(&bytes).with_context(|| format!("inspect {name}"))?;

    eprintln!("--- inspect ---");
    eprintln!("file          = {name}");
    eprintln!("artifact_ok   = true (magic + crc32 + blake3 verified)");
    eprintln!("version       = {}", info.version);
    eprintln!("compressed    = {}", info.compressed);
    eprintln!("total_bytes   = {}", info.total_len);
    eprintln!("body_bytes    = {}", info.body_len);
    eprintln!("payload_bytes = {}", info.raw_len);
    eprintln!("records       = {}", info.records);
    eprintln!("with_obsolete = {}", info.with_obsolete);
    eprintln!("dictionary_id = {}", info.id_hex());
    Ok(())
}
