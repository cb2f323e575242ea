//! Read-only decoder for Minecraft's Named Binary Tag format, covering the
//! Java big-endian, Bedrock little-endian, and Bedrock network varint
//! dialects. No encoder, no SNBT/JSON, no CLI.

mod cursor;
mod decoder;
mod decompress;
mod driver;
pub mod error;
mod hints;
mod input;
mod kind;
mod mutf8;
pub mod value;

pub use driver::{read, DecodeOutcome};
pub use error::{Error, Result};
pub use hints::{Compression, Endian, Framing, Hints, RootNameHint, DEFAULT_MAX_DEPTH};
pub use input::Input;
pub use kind::{NBTKind, Width};
pub use value::{Compound, Value};
