// crates/kyuji-cli/src/cmd/check.rs

use clap::Args;
use kyuji_core::{cjk, Normalizer};

use crate::io::dict_file;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Text to examine; one line is printed per character
    pub text: String,

    /// Characters to treat as exempt, as `normalize --ignore` would
    #[arg(long)]
    pub ignore: Option<String>,

    /// Dictionary (.kjd artifact or JSON source). Default: embedded joyo 2010 list.
    #[arg(long)]
    pub dict: Option<String>,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let dict = dict_file::load(args.dict.as_deref())?;
    let mut norm = Normalizer::new(&dict);
    if let Some(chars) = args.ignore.as_deref() {
        norm.ignore(chars.chars());
    }

    let mut chars = 0usize;
    let mut changed = 0usize;
    for c in args.text.chars() {
        let fixed = norm.normalize_char(c);
        chars += 1;
        if fixed != c {
            changed += 1;
        }

        println!(
            "U+{:04X} {} in_scope={} modern={} obsolete={} ignored={} -> {} on={} kun={} example={}",
            c as u32,
            c,
            cjk::is_in_scope(c),
            norm.is_modern_form(c),
            norm.is_obsolete_form(c),
            norm.ignored().contains(c),
            fixed,
            join(dict.on_readings(c)),
            join(dict.kun_readings(c)),
            join(dict.example_readings(c)),
        );
    }

    eprintln!("check ok: chars={chars} changed={changed}");
    Ok(())
}

fn join(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(",")
    }
}
