use crate::objects::Dictionary;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    number: u32,
    generation: u16,
}

impl ObjectId {
    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn generation(&self) -> u16 {
        self.generation
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// Literal string, written as `(...)`
    String(String),
    /// Raw bytes, written as `<...>`
    HexString(Vec<u8>),
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Reference(ObjectId),
}

impl Object {
    pub fn name(name: impl Into<String>) -> Self {
        Object::Name(name.into())
    }

    /// A document text string: a literal when ASCII, otherwise UTF-16BE with
    /// a byte order mark.
    pub fn text_string(text: &str) -> Self {
        if text.is_ascii() {
            return Object::String(text.to_string());
        }
        let mut bytes = vec![0xFE, 0xFF];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::HexString(bytes)
    }

}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Boolean(b)
    }
}

impl From<i32> for Object {
    fn from(i: i32) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<usize> for Object {
    fn from(i: usize) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<f64> for Object {
    fn from(f: f64) -> Self {
        Object::Real(f)
    }
}

impl From<String> for Object {
    fn from(s: String) -> Self {
        Object::String(s)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        Object::String(s.to_string())
    }
}

impl From<Vec<Object>> for Object {
    fn from(v: Vec<Object>) -> Self {
        Object::Array(v)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Object::Dictionary(d)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Reference(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_display() {
        assert_eq!(ObjectId::new(12, 0).to_string(), "12 0 R");
    }

    #[test]
    fn test_object_ids_order_by_number() {
        assert!(ObjectId::new(2, 0) < ObjectId::new(10, 0));
    }

    #[test]
    fn test_text_string_ascii_stays_literal() {
        assert_eq!(
            Object::text_string("94Cram"),
            Object::String("94Cram".to_string())
        );
    }

    #[test]
    fn test_text_string_unicode_is_utf16() {
        assert_eq!(
            Object::text_string("補"),
            Object::HexString(vec![0xFE, 0xFF, 0x88, 0xDC])
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Object::from(3usize), Object::Integer(3));
        assert_eq!(Object::from(2.5), Object::Real(2.5));
        assert_eq!(Object::name("Page"), Object::Name("Page".to_string()));
        assert_eq!(
            Object::from(ObjectId::new(4, 0)),
            Object::Reference(ObjectId::new(4, 0))
        );
        assert_eq!(
            Object::from(Dictionary::new()),
            Object::Dictionary(Dictionary::new())
        );
    }
}
