use crate::LaneKind;

/// A single lane value widened for formatting.
///
/// Integers keep their lane width so hex output can render two's complement of
/// the right size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Unsigned { value: u64, bits: u32 },
    Signed { value: i64, bits: u32 },
    F32(f32),
    F64(f64),
}

impl Scalar {
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32(_) | Self::F64(_))
    }

    #[inline]
    pub fn kind(&self) -> LaneKind {
        match *self {
            Self::Unsigned { bits: 8, .. } => LaneKind::U8,
            Self::Unsigned { bits: 16, .. } => LaneKind::U16,
            Self::Unsigned { bits: 32, .. } => LaneKind::U32,
            Self::Unsigned { .. } => LaneKind::U64,
            Self::Signed { bits: 8, .. } => LaneKind::I8,
            Self::Signed { bits: 16, .. } => LaneKind::I16,
            Self::Signed { bits: 32, .. } => LaneKind::I32,
            Self::Signed { .. } => LaneKind::I64,
            Self::F32(_) => LaneKind::F32,
            Self::F64(_) => LaneKind::F64,
        }
    }
}
