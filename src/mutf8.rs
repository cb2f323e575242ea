//! Decodes a STRING tag's payload bytes. NBT's Modified UTF-8 differs from
//! standard UTF-8 in how it encodes the NUL byte and supplementary-plane
//! code points; `cesu8` already covers the CESU-8 superset Java/Minecraft
//! strings use.

use crate::error::{Error, Result};

pub fn decode(bytes: &[u8]) -> Result<String> {
    cesu8::from_java_cesu8(bytes)
        .map(|cow| cow.into_owned())
        .map_err(|err| Error::Mutf8(err.to_string()))
}
