// crates/kyuji-cli/src/cmd/normalize.rs

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use clap::Args;
use kyuji_core::{Normalizer, StreamStats};

use crate::io::dict_file;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input file (default: stdin)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output file (default: stdout). Must not be the input file.
    #[arg(long)]
    pub out: Option<String>,

    /// Characters to leave unchanged, e.g. --ignore 邉邊
    #[arg(long)]
    pub ignore: Option<String>,

    /// Dictionary (.kjd artifact or JSON source). Default: embedded joyo 2010 list.
    #[arg(long)]
    pub dict: Option<String>,

    /// Do not print the summary line
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let dict = dict_file::load(args.dict.as_deref())?;
    let mut norm = Normalizer::new(&dict);
    if let Some(chars) = args.ignore.as_deref() {
        norm.ignore(chars.chars());
    }

    let stats = transform(&norm, args.r#in.as_deref(), args.out.as_deref())?;

    if !args.quiet {
        eprintln!(
            "normalize ok: chars={} replaced={} invalid_bytes={} ignored={} dict_records={}",
            stats.chars,
            stats.replaced,
            stats.invalid_bytes,
            norm.ignored().len(),
            norm.dictionary_size()
        );
    }
    Ok(())
}

fn transform(
    norm: &Normalizer<'_>,
    input: Option<&str>,
    output: Option<&str>,
) -> anyhow::Result<StreamStats> {
    let stats = match (input, output) {
        (Some(i), Some(o)) => norm
            .normalize_file(Path::new(i), Path::new(o))
            .with_context(|| format!("normalize {i} -> {o}"))?,
        (Some(i), None) => {
            let src = File::open(i).with_context(|| format!("open {i}"))?;
            norm.normalize_stream(src, std::io::stdout().lock())
                .with_context(|| format!("normalize {i} -> stdout"))?
        }
        (None, Some(o)) => {
            let dst = File::create(o).with_context(|| format!("create {o}"))?;
            norm.normalize_stream(std::io::stdin().lock(), BufWriter::new(dst))
                .with_context(|| format!("normalize stdin -> {o}"))?
        }
        (None, None) => norm
            .normalize_stream(std::io::stdin().lock(), std::io::stdout().lock())
            .context("normalize stdin -> stdout")?,
    };
    Ok(stats)
}
