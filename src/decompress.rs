use std::io::Read;

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};

use crate::error::Result;
use crate::hints::Compression;

pub fn decompress(bytes: &[u8], scheme: Compression) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    match scheme {
        Compression::None => out.extend_from_slice(bytes),
        Compression::Gzip => {
            GzDecoder::new(bytes).read_to_end(&mut out)?;
        }
        Compression::ZlibDeflate => {
            ZlibDecoder::new(bytes).read_to_end(&mut out)?;
        }
        Compression::RawDeflate => {
            DeflateDecoder::new(bytes).read_to_end(&mut out)?;
        }
    }
    Ok(out)
}
