// crates/kyuji-cli/src/cmd/export.rs

use anyhow::Context;
use clap::Args;

use crate::io::{dict_file, out_file};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Dictionary to export (.kjd artifact or JSON source). Default: embedded.
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output JSON path (default: stdout)
    #[arg(long)]
    pub out: Option<String>,

    /// Indent the JSON
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let dict = dict_file::load(args.r#in.as_deref())?;

    let mut json = if args.pretty {
        dict.to_source_json_pretty()
    } else {
        dict.to_source_json()
    }
    .context("serialize dictionary")?;
    json.push('\n');

    out_file::write_or_stdout(args.out.as_deref(), json.as_bytes())?;

    eprintln!(
        "export ok: records={} out={} bytes={}",
        dict.count(),
        args.out.as_deref().unwrap_or("<stdout>"),
        json.len()
    );
    Ok(())
}
