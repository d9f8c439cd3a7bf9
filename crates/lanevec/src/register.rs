use std::ops::{BitAnd, BitOr, BitXor, Not, Range};

use crate::{Error, REGISTER_SIZE, Result};

/// Untyped 16-byte storage block embedded by value in every vector.
///
/// The bytes carry no element type of their own. Lanes are only reachable through
/// [`Register::lane`] and [`Register::lane_mut`], which take the element size and
/// bounds-check the lane index, so callers never do pointer arithmetic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "zerocopy",
    derive(
        zerocopy::FromBytes,
        zerocopy::IntoBytes,
        zerocopy::Immutable,
        zerocopy::KnownLayout
    )
)]
#[repr(C, align(16))]
pub struct Register([u8; REGISTER_SIZE]);

impl Register {
    pub const ZERO: Self = Self([0; REGISTER_SIZE]);
    pub const ALL_BITS_SET: Self = Self([u8::MAX; REGISTER_SIZE]);

    #[inline]
    pub const fn from_bytes(bytes: [u8; REGISTER_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copies `REGISTER_SIZE` bytes starting at `offset`.
    pub fn from_slice(bytes: &[u8], offset: usize) -> Result<Self> {
        let src = offset
            .checked_add(REGISTER_SIZE)
            .and_then(|end| bytes.get(offset..end))
            .ok_or(Error::SourceTooShort {
                needed: REGISTER_SIZE,
                offset,
                len: bytes.len(),
            })?;

        let mut register = Self::ZERO;
        register.0.copy_from_slice(src);
        Ok(register)
    }

    /// Copies `REGISTER_SIZE` bytes from `ptr + offset` without any alignment requirement.
    ///
    /// # Safety
    /// `ptr + offset` must point to at least `REGISTER_SIZE` readable bytes.
    #[inline]
    pub unsafe fn from_ptr(ptr: *const u8, offset: usize) -> Self {
        let mut register = Self::ZERO;
        unsafe {
            std::ptr::copy_nonoverlapping(ptr.add(offset), register.0.as_mut_ptr(), REGISTER_SIZE);
        }
        register
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; REGISTER_SIZE] {
        &self.0
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; REGISTER_SIZE] {
        self.0
    }

    /// Byte range of lane `index` for lanes of `size` bytes, `None` past the end.
    #[inline]
    pub const fn lane_range(index: usize, size: usize) -> Option<Range<usize>> {
        if size == 0 || index >= REGISTER_SIZE / size {
            return None;
        }
        let start = index * size;
        Some(start..start + size)
    }

    #[inline]
    pub fn lane(&self, index: usize, size: usize) -> Option<&[u8]> {
        Self::lane_range(index, size).map(|range| &self.0[range])
    }

    #[inline]
    pub fn lane_mut(&mut self, index: usize, size: usize) -> Option<&mut [u8]> {
        Self::lane_range(index, size).map(move |range| &mut self.0[range])
    }

    /// Iterates over consecutive `size`-byte lanes.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    #[inline]
    pub fn lanes(&self, size: usize) -> std::slice::ChunksExact<'_, u8> {
        self.0.chunks_exact(size)
    }

    #[inline]
    pub fn lanes_mut(&mut self, size: usize) -> std::slice::ChunksExactMut<'_, u8> {
        self.0.chunks_exact_mut(size)
    }

    /// Writes `lane` into every `lane.len()`-byte slot.
    pub fn splat(lane: &[u8]) -> Self {
        let mut register = Self::ZERO;
        register
            .lanes_mut(lane.len())
            .for_each(|dst| dst.copy_from_slice(lane));
        register
    }

    /// Copies the whole block into `dst` at `offset`.
    pub fn copy_to_slice(&self, dst: &mut [u8], offset: usize) -> Result<()> {
        let len = dst.len();
        let dst = offset
            .checked_add(REGISTER_SIZE)
            .and_then(|end| dst.get_mut(offset..end))
            .ok_or(Error::SourceTooShort {
                needed: REGISTER_SIZE,
                offset,
                len,
            })?;
        dst.copy_from_slice(&self.0);
        Ok(())
    }

    #[inline]
    fn zip_with(self, rhs: Self, f: impl Fn(u8, u8) -> u8) -> Self {
        let mut out = self;
        out.0.iter_mut().zip(rhs.0).for_each(|(a, b)| *a = f(*a, b));
        out
    }
}

impl From<[u8; REGISTER_SIZE]> for Register {
    fn from(value: [u8; REGISTER_SIZE]) -> Self {
        Self(value)
    }
}

impl From<Register> for [u8; REGISTER_SIZE] {
    fn from(value: Register) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Register {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl BitAnd for Register {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a & b)
    }
}

impl BitOr for Register {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a | b)
    }
}

impl BitXor for Register {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a ^ b)
    }
}

impl Not for Register {
    type Output = Self;
    fn not(self) -> Self::Output {
        self.zip_with(Self::ZERO, |a, _| !a)
    }
}
