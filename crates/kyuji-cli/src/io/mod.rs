// crates/kyuji-cli/src/io/mod.rs

pub mod dict_file;
pub mod out_file;
