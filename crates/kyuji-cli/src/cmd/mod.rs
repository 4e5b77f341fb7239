// crates/kyuji-cli/src/cmd/mod.rs

pub mod check;
pub mod export;
pub mod inspect;
pub mod normalize;
pub mod pack;
