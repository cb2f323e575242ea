//! One recursive-descent routine per tag kind, dispatched by the kind byte
//! just read from the stream.

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::kind::{NBTKind, Width};
use crate::mutf8;
use crate::value::{Compound, Value};

pub fn read_kind(cursor: &mut ByteCursor) -> Result<NBTKind> {
    NBTKind::try_from(cursor.read_u8()?)
}

// A tag's name is always a STRING, regardless of dialect.
pub fn read_name(cursor: &mut ByteCursor) -> Result<String> {
    read_string_payload(cursor)
}

fn read_string_payload(cursor: &mut ByteCursor) -> Result<String> {
    let len = cursor.read_string_length()?;
    let bytes = cursor.read_bytes(len)?;
    mutf8::decode(&bytes)
}

fn check_depth(depth: usize, max_depth: usize) -> Result<()> {
    if depth > max_depth {
        return Err(Error::DepthLimitExceeded(max_depth));
    }
    Ok(())
}

// Reads the payload for `kind`, having already consumed its kind byte (and,
// for named tags, its name). `depth` counts compounds and lists entered so
// far; exceeding `max_depth` is a hard error instead of a stack overflow.
pub fn read_payload(
    cursor: &mut ByteCursor,
    kind: NBTKind,
    depth: usize,
    max_depth: usize,
) -> Result<Value> {
    check_depth(depth, max_depth)?;
    match kind {
        NBTKind::End => Err(Error::InvalidTag),
        NBTKind::Byte => Ok(Value::Integer(cursor.read_i8()? as i32)),
        NBTKind::Short => Ok(Value::Integer(cursor.read_i16()? as i32)),
        NBTKind::Int => Ok(Value::Integer(cursor.read_tag_int()?)),
        NBTKind::Long => Ok(Value::Long(cursor.read_tag_long()?)),
        NBTKind::Float => Ok(Value::Double(cursor.read_f32()? as f64)),
        NBTKind::Double => Ok(Value::Double(cursor.read_f64()?)),
        NBTKind::ByteArray => Ok(Value::Bytes(read_byte_array(cursor)?)),
        NBTKind::String => Ok(Value::String(read_string_payload(cursor)?)),
        NBTKind::List => read_list(cursor, depth, max_depth),
        NBTKind::Compound => Ok(Value::Compound(read_compound(cursor, depth, max_depth)?)),
        NBTKind::IntArray => Ok(Value::Ints(read_int_array(cursor)?)),
        NBTKind::LongArray => Ok(Value::Longs(read_long_array(cursor)?)),
    }
}

fn read_byte_array(cursor: &mut ByteCursor) -> Result<Vec<i8>> {
    let length = cursor.read_length()? as usize;
    let mut out = Vec::with_capacity(length);
    for _ in 0..length {
        out.push(cursor.read_i8()?);
    }
    Ok(out)
}

fn read_int_array(cursor: &mut ByteCursor) -> Result<Vec<i32>> {
    let length = cursor.read_length()? as usize;
    let mut out = Vec::with_capacity(length);
    for _ in 0..length {
        // Array elements always read fixed-width, even in varint mode —
        // only the length prefix is varint-encoded.
        out.push(cursor.read_i32()?);
    }
    Ok(out)
}

fn read_long_array(cursor: &mut ByteCursor) -> Result<Vec<i64>> {
    let length = cursor.read_length()? as usize;
    let mut out = Vec::with_capacity(length);
    for _ in 0..length {
        out.push(cursor.read_i64()?);
    }
    Ok(out)
}

fn read_list(cursor: &mut ByteCursor, depth: usize, max_depth: usize) -> Result<Value> {
    let element_kind = read_kind(cursor)?;
    let length = cursor.read_length()? as usize;

    // END with length 0 is the canonical empty list; END with a non-zero
    // length is malformed.
    if element_kind == NBTKind::End {
        return if length == 0 {
            Ok(Value::List(Vec::new()))
        } else {
            Err(Error::InvalidTag)
        };
    }

    match element_kind.natural_width() {
        Some(Width::I8) => {
            let mut out = Vec::with_capacity(length);
            for _ in 0..length {
                out.push(cursor.read_i8()?);
            }
            Ok(Value::Bytes(out))
        }
        Some(Width::I16) => {
            let mut out = Vec::with_capacity(length);
            for _ in 0..length {
                out.push(cursor.read_i16()?);
            }
            Ok(Value::Shorts(out))
        }
        Some(Width::I32) => {
            let mut out = Vec::with_capacity(length);
            for _ in 0..length {
                out.push(cursor.read_tag_int()?);
            }
            Ok(Value::Ints(out))
        }
        Some(Width::I64) => {
            let mut out = Vec::with_capacity(length);
            for _ in 0..length {
                out.push(cursor.read_tag_long()?);
            }
            Ok(Value::Longs(out))
        }
        Some(Width::F32) => {
            let mut out = Vec::with_capacity(length);
            for _ in 0..length {
                out.push(cursor.read_f32()?);
            }
            Ok(Value::Floats(out))
        }
        Some(Width::F64) => {
            let mut out = Vec::with_capacity(length);
            for _ in 0..length {
                out.push(cursor.read_f64()?);
            }
            Ok(Value::Doubles(out))
        }
        None => {
            let mut out = Vec::with_capacity(length);
            for _ in 0..length {
                out.push(read_payload(cursor, element_kind, depth + 1, max_depth)?);
            }
            Ok(Value::List(out))
        }
    }
}

fn read_compound(cursor: &mut ByteCursor, depth: usize, max_depth: usize) -> Result<Compound> {
    let mut map = Compound::new();
    loop {
        let kind = read_kind(cursor)?;
        if kind == NBTKind::End {
            return Ok(map);
        }
        let name = read_name(cursor)?;
        let value = read_payload(cursor, kind, depth + 1, max_depth)?;
        // Duplicate keys overwrite the earlier value in place, preserving
        // first-occurrence order — IndexMap::insert already does this.
        map.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(bytes: &[u8]) -> ByteCursor {
        ByteCursor::new(bytes, false, false)
    }

    #[test]
    fn empty_compound_root() {
        // COMPOUND, name "", immediate END.
        let bytes = [0x0A, 0x00, 0x00, 0x00];
        let mut c = cursor(&bytes);
        let kind = read_kind(&mut c).unwrap();
        assert_eq!(kind, NBTKind::Compound);
        let name = read_name(&mut c).unwrap();
        assert_eq!(name, "");
        let value = read_payload(&mut c, kind, 0, 512).unwrap();
        assert_eq!(value, Value::Compound(Compound::new()));
        assert_eq!(c.offset(), bytes.len());
    }

    #[test]
    fn compound_with_named_byte_child() {
        let bytes = [
            0x0A, 0x00, 0x03, b'f', b'o', b'o', 0x01, 0x00, 0x03, b'b', b'a', b'r', 0x7F, 0x00,
        ];
        let mut c = cursor(&bytes);
        let kind = read_kind(&mut c).unwrap();
        let name = read_name(&mut c).unwrap();
        assert_eq!(name, "foo");
        let value = read_payload(&mut c, kind, 0, 512).unwrap();
        let mut expected = Compound::new();
        expected.insert("bar".to_owned(), Value::Integer(127));
        assert_eq!(value, Value::Compound(expected));
    }

    #[test]
    fn packed_byte_list() {
        let bytes = [0x09, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x03, 0x01, 0x02, 0x03];
        let mut c = cursor(&bytes);
        let kind = read_kind(&mut c).unwrap();
        let _name = read_name(&mut c).unwrap();
        let value = read_payload(&mut c, kind, 0, 512).unwrap();
        assert_eq!(value, Value::Bytes(vec![1, 2, 3]));
    }

    #[test]
    fn list_with_end_kind_and_nonzero_length_is_invalid() {
        let bytes = [0x00u8, 0x00, 0x00, 0x00, 0x01];
        let mut c = cursor(&bytes);
        assert!(matches!(
            read_list(&mut c, 0, 512),
            Err(Error::InvalidTag)
        ));
    }

    #[test]
    fn list_with_end_kind_and_zero_length_is_empty() {
        let bytes = [0x00u8, 0x00, 0x00, 0x00, 0x00];
        let mut c = cursor(&bytes);
        assert_eq!(read_list(&mut c, 0, 512).unwrap(), Value::List(Vec::new()));
    }

    #[test]
    fn duplicate_compound_keys_retain_last_occurrence() {
        // COMPOUND "": BYTE "a" = 1, BYTE "a" = 2, END
        let bytes = [
            0x0A, 0x00, 0x00, 0x01, 0x00, 0x01, b'a', 0x01, 0x01, 0x00, 0x01, b'a', 0x02, 0x00,
        ];
        let mut c = cursor(&bytes);
        let kind = read_kind(&mut c).unwrap();
        let _name = read_name(&mut c).unwrap();
        let value = read_payload(&mut c, kind, 0, 512).unwrap();
        let map = match value {
            Value::Compound(map) => map,
            other => panic!("expected compound, got {:?}", other),
        };
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&Value::Integer(2)));
        // First-occurrence order is preserved even though the value changed.
        assert_eq!(map.get_index(0).unwrap().0, "a");
    }

    #[test]
    fn end_tag_outside_compound_is_invalid() {
        let bytes = [0x00];
        let mut c = cursor(&bytes);
        let kind = read_kind(&mut c).unwrap();
        assert!(matches!(
            read_payload(&mut c, kind, 0, 512),
            Err(Error::InvalidTag)
        ));
    }

    #[test]
    fn depth_limit_exceeded_on_deeply_nested_compounds() {
        // A chain of nested compounds: 0A (name "") ... each one containing
        // the next, deep enough to exceed a tiny limit.
        let mut bytes = Vec::new();
        for _ in 0..5 {
            bytes.push(0x0A);
            bytes.push(0x00);
            bytes.push(0x00);
        }
        bytes.push(0x00); // END for the innermost compound
        for _ in 0..5 {
            bytes.push(0x00); // END for each enclosing compound
        }
        let mut c = cursor(&bytes);
        let kind = read_kind(&mut c).unwrap();
        let _name = read_name(&mut c).unwrap();
        assert!(matches!(
            read_payload(&mut c, kind, 0, 2),
            Err(Error::DepthLimitExceeded(2))
        ));
    }
}
