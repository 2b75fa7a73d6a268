pub mod error;
pub mod validate;

pub mod checksum;
pub mod coord;
pub mod decode;
pub mod encode;
pub mod grid;
pub mod render;

pub use crate::coord::PackedCoord;
pub use crate::encode::{encode, encode_or_skip, encode_with, EncodeOptions, EncodedLevel, Outcome, SymbolPolicy};
pub use crate::error::{Result, SokoError};
pub use crate::grid::{Cell, LevelGrid};
pub use crate::render::DataBlock;
pub use crate::validate::{Eligibility, SkipReason};
