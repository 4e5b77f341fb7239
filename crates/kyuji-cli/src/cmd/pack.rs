// crates/kyuji-cli/src/cmd/pack.rs

use anyhow::Context;
use clap::Args;
use kyuji_core::{artifact, source};

use crate::io::out_file;

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Input JSON source dictionary (labeled records)
    #[arg(long)]
    pub r#in: String,

    /// Output .kjd artifact path (written atomically)
    #[arg(long)]
    pub out: String,

    /// zstd level
    #[arg(long, default_value_t = artifact::DEFAULT_LEVEL)]
    pub level: i32,

    /// Store the payload uncompressed
    #[arg(long, default_value_t = false)]
    pub no_compress: bool,
}

pub fn run(args: PackArgs) -> anyhow::Result<()> {
    let text = std::fs::read(&args.r#in).with_context(|| format!("read {}", args.r#in))?;
    let records = source::parse_slice(&text).with_context(|| format!("parse {}", args.r#in))?;
    if records.is_empty() {
        anyhow::bail!("{}: no records", args.r#in);
    }

    let bytes = artifact::encode(&records, !args.no_compress, args.level)
        .with_context(|| format!("encode {}", args.out))?;
    out_file::write_atomic(&args.out, &bytes)?;

    let with_obsolete = records.iter().filter(|r| r.obsolete.is_some()).count();
    let id = artifact::dictionary_id_hex(&bytes)?;
    eprintln!(
        "pack ok: records={} with_obsolete={} in_bytes={} out_bytes={} compressed={} id={}",
        records.len(),
        with_obsolete,
        text.len(),
        bytes.len(),
        !args.no_compress,
        id
    );
    Ok(())
}
