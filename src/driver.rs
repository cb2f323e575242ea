//! Orchestrates compression/endianness/root-name detection, invokes
//! decompression, and invokes the grammar decoder. Each axis tries its
//! candidates in a fixed order and, on total failure, surfaces the first
//! candidate's error rather than the last.

use crate::cursor::ByteCursor;
use crate::decoder;
use crate::decompress::decompress;
use crate::error::{Error, Result};
use crate::hints::{Compression, Endian, Framing, Hints, RootNameHint};
use crate::input::Input;
use crate::kind::NBTKind;
use crate::value::Value;

// The final byte offset is only populated when `strict = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutcome {
    pub value: Value,
    pub framing: Framing,
    pub offset: Option<usize>,
}

fn detect<T, R>(candidates: &[T], mut attempt: impl FnMut(T) -> Result<R>) -> Result<R>
where
    T: Copy,
{
    let mut first_err = None;
    for &candidate in candidates {
        match attempt(candidate) {
            Ok(value) => return Ok(value),
            Err(err) => {
                if first_err.is_none() {
                    first_err = Some(err);
                }
            }
        }
    }
    Err(first_err.expect("candidates is non-empty"))
}

pub fn read<'a>(input: impl Into<Input<'a>>, hints: Hints) -> Result<DecodeOutcome> {
    let raw = input.into().materialize();
    resolve_compression(&raw, &hints)
}

fn resolve_compression(raw: &[u8], hints: &Hints) -> Result<DecodeOutcome> {
    match hints.compression {
        Some(scheme) => decompress_and_continue(raw, scheme, hints),
        None => {
            let peek = ByteCursor::new(raw, false, false);
            if peek.has_gzip_magic() {
                decompress_and_continue(raw, Compression::Gzip, hints)
            } else if peek.has_zlib_magic() {
                decompress_and_continue(raw, Compression::ZlibDeflate, hints)
            } else {
                detect(&[Compression::None, Compression::RawDeflate], |scheme| {
                    decompress_and_continue(raw, scheme, hints)
                })
            }
        }
    }
}

fn decompress_and_continue(
    raw: &[u8],
    scheme: Compression,
    hints: &Hints,
) -> Result<DecodeOutcome> {
    let decompressed = decompress(raw, scheme)?;
    resolve_endian(&decompressed, scheme, hints)
}

fn resolve_endian(data: &[u8], compression: Compression, hints: &Hints) -> Result<DecodeOutcome> {
    match hints.endian {
        Some(endian) => resolve_bedrock_level(data, endian, compression, hints),
        None => detect(&Endian::DETECTION_ORDER, |endian| {
            resolve_bedrock_level(data, endian, compression, hints)
        }),
    }
}

fn resolve_bedrock_level(
    data: &[u8],
    endian: Endian,
    compression: Compression,
    hints: &Hints,
) -> Result<DecodeOutcome> {
    let little = endian.little_endian();
    let bedrock_level = match hints.bedrock_level {
        Some(b) => b,
        None => ByteCursor::new(data, little, endian.varint()).has_bedrock_level_header(little),
    };

    let body = if bedrock_level {
        let mut header_cursor = ByteCursor::new(data, little, endian.varint());
        header_cursor.skip(8)?;
        &data[header_cursor.offset()..]
    } else {
        data
    };

    resolve_root_name(body, endian, compression, bedrock_level, hints)
}

fn resolve_root_name(
    body: &[u8],
    endian: Endian,
    compression: Compression,
    bedrock_level: bool,
    hints: &Hints,
) -> Result<DecodeOutcome> {
    match &hints.root_name {
        RootNameHint::Present => {
            decode_root(body, endian, compression, bedrock_level, true, None, hints)
        }
        RootNameHint::Absent => {
            decode_root(body, endian, compression, bedrock_level, false, None, hints)
        }
        RootNameHint::Exact(name) => decode_root(
            body,
            endian,
            compression,
            bedrock_level,
            true,
            Some(name.clone()),
            hints,
        ),
        RootNameHint::Auto => detect(&[true, false], |present| {
            decode_root(
                body,
                endian,
                compression,
                bedrock_level,
                present,
                None,
                hints,
            )
        }),
    }
}

// The Bedrock level header, if any, was sliced off before `body` got here.
// Reads the kind byte (must be LIST or COMPOUND), the root name if
// expected, the root body, then enforces the strict trailing-bytes rule.
#[allow(clippy::too_many_arguments)]
fn decode_root(
    body: &[u8],
    endian: Endian,
    compression: Compression,
    bedrock_level: bool,
    expect_name: bool,
    exact_name: Option<String>,
    hints: &Hints,
) -> Result<DecodeOutcome> {
    let mut cursor = ByteCursor::new(body, endian.little_endian(), endian.varint());

    let kind = decoder::read_kind(&mut cursor)?;
    if kind != NBTKind::List && kind != NBTKind::Compound {
        return Err(Error::InvalidOpeningTag);
    }

    let root_name = if expect_name {
        let name = decoder::read_name(&mut cursor)?;
        if let Some(expected) = &exact_name {
            if expected != &name {
                return Err(Error::UnexpectedRootName(expected.clone(), name));
            }
        }
        Some(name)
    } else {
        None
    };

    let value = decoder::read_payload(&mut cursor, kind, 0, hints.max_depth)?;

    let offset = cursor.offset();
    let total = cursor.len();
    if hints.strict && offset != total {
        return Err(Error::UnexpectedEndTag);
    }

    Ok(DecodeOutcome {
        value,
        framing: Framing {
            root_name,
            endian,
            compression,
            bedrock_level,
        },
        offset: if hints.strict { None } else { Some(offset) },
    })
}
