use std::fmt::Debug;

use crate::{LaneKind, Scalar};

/// Element type that can occupy a lane of a [`FixedVector`](crate::FixedVector).
///
/// Implemented for the 8/16/32/64-bit integers and for `f32`/`f64`.
/// Newtypes over those can use `#[derive(Lane)]` (feature `derive`).
///
/// Lanes are stored in native byte order and always copied byte-wise, so no
/// alignment is assumed for the slices passed to [`Lane::read_lane`] and
/// [`Lane::write_lane`].
pub trait Lane: Sized + Copy + Debug + Send + Sync + 'static {
    const KIND: LaneKind;

    /// Size in bytes of one lane. Must equal both `KIND.size()` and `size_of::<Self>()`.
    const SIZE: usize = Self::KIND.size();

    const ZERO: Self;
    const ONE: Self;

    /// Reads a value from exactly `SIZE` bytes.
    fn read_lane(bytes: &[u8]) -> Self;

    /// Writes the value into exactly `SIZE` bytes.
    fn write_lane(&self, dst: &mut [u8]);

    /// The element's own equality, made reflexive for floats.
    ///
    /// `NaN` equals `NaN` and `0.0` equals `-0.0`, so a vector of floats is a
    /// valid map key.
    fn lane_eq(&self, other: &Self) -> bool;

    /// Hash consistent with [`Lane::lane_eq`].
    fn lane_hash(&self) -> u32;

    fn to_scalar(&self) -> Scalar;

    /// Wrapping for integers.
    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
}

#[inline(always)]
const fn fold_u64(bits: u64) -> u32 {
    (bits ^ (bits >> 32)) as u32
}

macro_rules! impl_lane_for_integer {
    ($($t:ty => $kind:ident, $variant:ident, $wide:ty);* $(;)?) => {
        $(
            impl Lane for $t {
                const KIND: LaneKind = LaneKind::$kind;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn read_lane(bytes: &[u8]) -> Self {
                    let mut arr = [0u8; size_of::<$t>()];
                    arr.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(arr)
                }

                #[inline]
                fn write_lane(&self, dst: &mut [u8]) {
                    dst.copy_from_slice(&self.to_ne_bytes());
                }

                #[inline]
                fn lane_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn lane_hash(&self) -> u32 {
                    let wide = *self as $wide as u64;
                    if size_of::<$t>() == 8 {
                        fold_u64(wide)
                    } else {
                        wide as u32
                    }
                }

                #[inline]
                fn to_scalar(&self) -> Scalar {
                    Scalar::$variant {
                        value: *self as $wide,
                        bits: <$t>::BITS,
                    }
                }

                #[inline]
                fn lane_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn lane_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn lane_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
        )*
    };
}

impl_lane_for_integer!(
    u8 => U8, Unsigned, u64;
    i8 => I8, Signed, i64;
    u16 => U16, Unsigned, u64;
    i16 => I16, Signed, i64;
    u32 => U32, Unsigned, u64;
    i32 => I32, Signed, i64;
    u64 => U64, Unsigned, u64;
    i64 => I64, Signed, i64;
);

macro_rules! impl_lane_for_float {
    ($($t:ty => $kind:ident, $variant:ident);* $(;)?) => {
        $(
            impl Lane for $t {
                const KIND: LaneKind = LaneKind::$kind;
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn read_lane(bytes: &[u8]) -> Self {
                    let mut arr = [0u8; size_of::<$t>()];
                    arr.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(arr)
                }

                #[inline]
                fn write_lane(&self, dst: &mut [u8]) {
                    dst.copy_from_slice(&self.to_ne_bytes());
                }

                #[inline]
                fn lane_eq(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }

                #[inline]
                fn lane_hash(&self) -> u32 {
                    // Both zeros and every NaN payload must land on one hash.
                    let canonical = if *self == 0.0 {
                        0.0
                    } else if self.is_nan() {
                        <$t>::NAN
                    } else {
                        *self
                    };
                    fold_u64(canonical.to_bits() as u64)
                }

                #[inline]
                fn to_scalar(&self) -> Scalar {
                    Scalar::$variant(*self)
                }

                #[inline]
                fn lane_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn lane_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn lane_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_lane_for_float!(
    f32 => F32, F32;
    f64 => F64, F64;
);
