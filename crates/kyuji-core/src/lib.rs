// crates/kyuji-core/src/lib.rs

pub mod error;

pub mod record;
pub mod source;
pub mod artifact;

pub mod cjk;
pub mod supplemental;
pub mod dict;
pub mod ignore;
pub mod normalizer;
pub mod stream;
pub mod embedded;

pub use crate::dict::Dictionary;
pub use crate::error::{KyujiError, Result};
pub use crate::normalizer::Normalizer;
pub use crate::record::{CharRecord, Readings};
pub use crate::stream::StreamStats;
