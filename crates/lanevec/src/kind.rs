use std::{fmt, str::FromStr};

use crate::{Error, LaneLayout, REGISTER_SIZE, Result};

/// Numeric element kinds a lane can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaneKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl LaneKind {
    pub const ALL: [Self; 10] = [
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::F32,
        Self::F64,
    ];

    /// Element size in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }

    #[inline]
    pub const fn lane_count(self) -> usize {
        REGISTER_SIZE / self.size()
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        (self.size() * 8) as u32
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::F32 | Self::F64
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Layout of the primitive type of this kind.
    #[inline]
    pub fn layout(self) -> &'static LaneLayout {
        LaneLayout::for_kind(self)
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LaneKind {
    type Err = Error;

    /// Accepts Rust primitive names and the common C-family aliases.
    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "u8" | "byte" | "uint8" => Self::U8,
            "i8" | "sbyte" | "int8" => Self::I8,
            "u16" | "ushort" | "uint16" => Self::U16,
            "i16" | "short" | "int16" => Self::I16,
            "u32" | "uint" | "uint32" => Self::U32,
            "i32" | "int" | "int32" => Self::I32,
            "u64" | "ulong" | "uint64" => Self::U64,
            "i64" | "long" | "int64" => Self::I64,
            "f32" | "float" | "single" => Self::F32,
            "f64" | "double" => Self::F64,
            _ => return Err(Error::unsupported(s, 0)),
        };
        Ok(kind)
    }
}
