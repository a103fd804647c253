//! Wire type tags and their declared widths.

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Numeric wire codes. These are part of the wire format and must not be
/// renumbered.
pub mod code {
    pub const NULL: u8 = 0;

    // Signed integers
    pub const I8: u8 = 1;
    pub const I16: u8 = 2;
    pub const I32: u8 = 3;
    pub const I64: u8 = 4;
    pub const I128: u8 = 5;

    // Unsigned integers
    pub const U8: u8 = 6;
    pub const U16: u8 = 7;
    pub const U32: u8 = 8;
    pub const U64: u8 = 9;
    pub const U128: u8 = 10;

    // 11 is reserved.

    // IEEE 754 floats
    pub const F32: u8 = 12;
    pub const F64: u8 = 13;

    // 14 is reserved.

    pub const BOOL: u8 = 15;
    pub const CHAR: u8 = 16;

    // Variable width, one length byte in array form.
    pub const STRING: u8 = 17;
    pub const BYTES: u8 = 18;
}

/// Declared encoded size of a [`TypeTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Fixed(usize),
    Variable,
}

/// A wire type.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Null = code::NULL,
    I8 = code::I8,
    I16 = code::I16,
    I32 = code::I32,
    I64 = code::I64,
    I128 = code::I128,
    U8 = code::U8,
    U16 = code::U16,
    U32 = code::U32,
    U64 = code::U64,
    U128 = code::U128,
    F32 = code::F32,
    F64 = code::F64,
    Bool = code::BOOL,
    Char = code::CHAR,
    String = code::STRING,
    Bytes = code::BYTES,
}

impl TypeTag {
    /// Every tag, in wire-code order.
    pub const ALL: [TypeTag; 17] = [
        Self::Null,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::F32,
        Self::F64,
        Self::Bool,
        Self::Char,
        Self::String,
        Self::Bytes,
    ];

    /// Returns the wire code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a tag by wire code. Unknown and reserved codes map to `Null`,
    /// which is what the decoders expect.
    pub const fn from_code(raw: u8) -> Self {
        match raw {
            code::I8 => Self::I8,
            code::I16 => Self::I16,
            code::I32 => Self::I32,
            code::I64 => Self::I64,
            code::I128 => Self::I128,
            code::U8 => Self::U8,
            code::U16 => Self::U16,
            code::U32 => Self::U32,
            code::U64 => Self::U64,
            code::U128 => Self::U128,
            code::F32 => Self::F32,
            code::F64 => Self::F64,
            code::BOOL => Self::Bool,
            code::CHAR => Self::Char,
            code::STRING => Self::String,
            code::BYTES => Self::Bytes,
            _ => Self::Null,
        }
    }

    /// Returns the declared encoded width.
    pub const fn width(self) -> Width {
        match self {
            Self::Null => Width::Fixed(0),
            Self::I8 | Self::U8 | Self::Bool | Self::Char => Width::Fixed(1),
            Self::I16 | Self::U16 => Width::Fixed(2),
            Self::I32 | Self::U32 | Self::F32 => Width::Fixed(4),
            Self::I64 | Self::U64 | Self::F64 => Width::Fixed(8),
            Self::I128 | Self::U128 => Width::Fixed(16),
            Self::String | Self::Bytes => Width::Variable,
        }
    }

    /// Returns the fixed width in bytes, or `None` for STRING and BYTES.
    pub const fn fixed_width(self) -> Option<usize> {
        match self.width() {
            Width::Fixed(n) => Some(n),
            Width::Variable => None,
        }
    }

    pub const fn is_signed_int(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128
        )
    }

    pub const fn is_unsigned_int(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::U128
        )
    }

    /// True for tags that carry a length byte in array form.
    pub const fn is_variable(self) -> bool {
        matches!(self.width(), Width::Variable)
    }

    /// Returns the upper-case name used in configuration and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::I128 => "I128",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::U128 => "U128",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::Bool => "BOOL",
            Self::Char => "CHAR",
            Self::String => "STRING",
            Self::Bytes => "BYTES",
        }
    }
}

/// Returns the declared width of `tag`.
pub const fn width_of(tag: TypeTag) -> Width {
    tag.width()
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag.code()
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = CodecError;

    /// Strict lookup: reserved and out-of-range codes are rejected.
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match Self::from_code(raw) {
            Self::Null if raw != code::NULL => Err(CodecError::UnknownTypeCode(raw)),
            tag => Ok(tag),
        }
    }
}

impl FromStr for TypeTag {
    type Err = CodecError;

    /// Parses a tag name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CodecError::UnknownTypeName(s.to_owned()))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
