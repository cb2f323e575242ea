use indexmap::IndexMap;

/// Insertion-ordered mapping from name to child value. Duplicate keys
/// overwrite the earlier value in place, keeping first-occurrence order.
pub type Compound = IndexMap<String, Value>;

/// A SHORT and an INT both surface as `Integer`; a FLOAT and a DOUBLE both
/// surface as `Double`. List and array payloads keep full element-width
/// fidelity instead: a LIST-of-INT and an INT_ARRAY both end up as `Ints`.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Integer(i32),
    Long(i64),
    Double(f64),
    /// NBT has no boolean wire kind; the decoder never produces this.
    Boolean(bool),
    String(String),
    Bytes(Vec<i8>),
    Shorts(Vec<i16>),
    Ints(Vec<i32>),
    Longs(Vec<i64>),
    Floats(Vec<f32>),
    Doubles(Vec<f64>),
    /// Non-numeric list elements, or the canonical empty list.
    List(Vec<Value>),
    Compound(Compound),
}

impl Value {
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_long_matches_long_and_rejects_other_variants() {
        assert_eq!(Value::Long(42).as_long(), Some(42));
        assert_eq!(Value::Integer(42).as_long(), None);
    }

    #[test]
    fn as_double_matches_double_and_rejects_other_variants() {
        assert_eq!(Value::Double(1.5).as_double(), Some(1.5));
        assert_eq!(Value::Long(1).as_double(), None);
    }

    #[test]
    fn as_str_matches_string_and_rejects_other_variants() {
        assert_eq!(Value::String("foo".to_owned()).as_str(), Some("foo"));
        assert_eq!(Value::Integer(0).as_str(), None);
    }

    #[test]
    fn as_list_matches_list_and_rejects_other_variants() {
        let items = vec![Value::Integer(1), Value::Integer(2)];
        assert_eq!(Value::List(items.clone()).as_list(), Some(items.as_slice()));
        assert_eq!(Value::Compound(Compound::new()).as_list(), None);
    }
}
