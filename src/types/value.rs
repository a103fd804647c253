//! Typed scalar values.

use std::fmt;

use super::TypeTag;
use crate::error::CodecError;

/// A scalar value that can cross the wire under one of the [`TypeTag`]s.
///
/// Integers are held at the widest native width and reduced to the declared
/// width of a tag only when encoded.
///
/// `Char(c)` compares equal to a `String` holding exactly `c`, since a
/// one-character string travels as CHAR and decodes as `Char`.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Int(i128),
    UInt(u128),
    F32(f32),
    F64(f64),
    Bool(bool),
    Char(char),
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Zero, empty and null are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Int(i) => *i != 0,
            Self::UInt(u) => *u != 0,
            Self::F32(f) => *f != 0.0,
            Self::F64(f) => *f != 0.0,
            Self::Bool(b) => *b,
            Self::Char(_) => true,
            Self::String(s) => !s.is_empty(),
            Self::Bytes(b) => !b.is_empty(),
        }
    }

    /// Returns the value as a string reference, if it is a `String` variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an i128, for either integer variant in range.
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(*i),
            Self::UInt(u) => i128::try_from(*u).ok(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Char(c), Self::String(s)) | (Self::String(s), Self::Char(c)) => {
                let mut chars = s.chars();
                chars.next() == Some(*c) && chars.next().is_none()
            }
            _ => false,
        }
    }
}

// -- Convenience conversions --

macro_rules! from_native {
    ($variant:ident <= $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::$variant(v.into())
                }
            }
        )+
    };
}

from_native!(Int <= i8, i16, i32, i64, i128);
from_native!(UInt <= u8, u16, u32, u64, u128);
from_native!(F32 <= f32);
from_native!(F64 <= f64);
from_native!(Bool <= bool);
from_native!(Char <= char);
from_native!(String <= String, &str);
from_native!(Bytes <= Vec<u8>, &[u8]);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

macro_rules! try_into_int {
    ($($t:ty => $tag:ident),+) => {
        $(
            impl TryFrom<Value> for $t {
                type Error = CodecError;

                fn try_from(v: Value) -> Result<Self, Self::Error> {
                    let converted = match &v {
                        Value::Int(i) => <$t>::try_from(*i).ok(),
                        Value::UInt(u) => <$t>::try_from(*u).ok(),
                        _ => None,
                    };
                    converted.ok_or(CodecError::Incompatible {
                        tag: TypeTag::$tag,
                        kind: v.kind(),
                    })
                }
            }
        )+
    };
}

try_into_int!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128
);

impl TryFrom<Value> for f32 {
    type Error = CodecError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::F32(f) => Ok(f),
            other => Err(CodecError::Incompatible {
                tag: TypeTag::F32,
                kind: other.kind(),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = CodecError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::F64(f) => Ok(f),
            Value::F32(f) => Ok(f64::from(f)),
            other => Err(CodecError::Incompatible {
                tag: TypeTag::F64,
                kind: other.kind(),
            }),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = CodecError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::Bool(b) => Ok(b),
            other => Err(CodecError::Incompatible {
                tag: TypeTag::Bool,
                kind: other.kind(),
            }),
        }
    }
}

impl TryFrom<Value> for char {
    type Error = CodecError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::Char(c) => Ok(c),
            other => Err(CodecError::Incompatible {
                tag: TypeTag::Char,
                kind: other.kind(),
            }),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = CodecError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::String(s) => Ok(s),
            Value::Char(c) => Ok(c.to_string()),
            other => Err(CodecError::Incompatible {
                tag: TypeTag::String,
                kind: other.kind(),
            }),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = CodecError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::Bytes(b) => Ok(b),
            other => Err(CodecError::Incompatible {
                tag: TypeTag::Bytes,
                kind: other.kind(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "'{c}'"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}
