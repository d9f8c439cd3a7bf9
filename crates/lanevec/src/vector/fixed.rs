use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::{
    Error, HashCombiner, Lane, LaneLayout, Lanes, Locale, REGISTER_SIZE, Register, Result,
};

/// A 16-byte register viewed as `16 / size_of::<T>()` lanes of `T`.
///
/// Every operation runs on the portable scalar path: lanes are read and written
/// as byte slices at `index * size_of::<T>()`. The vector is a plain value,
/// copied on assignment, and owns its register.
///
/// Constructors resolve the [`LaneLayout`] of `T` and panic if `T` cannot tile
/// the register. For the built-in lane types that never happens.
#[derive(Clone, Copy)]
#[repr(transparent)]
#[must_use]
pub struct FixedVector<T> {
    register: Register,
    _lane: PhantomData<T>,
}

impl<T: Lane> FixedVector<T> {
    /// Number of lanes.
    pub const LANES: usize = REGISTER_SIZE / T::SIZE;

    /// Resolved layout of `T`.
    ///
    /// # Panics
    /// Panics with [`Error::UnsupportedElementType`] if `T` cannot be laid out.
    #[inline]
    #[track_caller]
    pub fn layout() -> &'static LaneLayout {
        LaneLayout::resolve::<T>().unwrap_or_else(|e| panic!("{e}"))
    }

    #[inline]
    pub(crate) const fn from_raw(register: Register) -> Self {
        Self {
            register,
            _lane: PhantomData,
        }
    }

    /// Broadcasts `value` into every lane.
    #[track_caller]
    pub fn splat(value: T) -> Self {
        Self::layout();
        let mut register = Register::ZERO;
        register
            .lanes_mut(T::SIZE)
            .for_each(|dst| value.write_lane(dst));
        Self::from_raw(register)
    }

    /// Wraps an existing register.
    #[track_caller]
    pub fn from_register(register: Register) -> Self {
        Self::layout();
        Self::from_raw(register)
    }

    /// Copies `REGISTER_SIZE` bytes verbatim from `bytes[offset..]`.
    pub fn from_slice(bytes: &[u8], offset: usize) -> Result<Self> {
        LaneLayout::resolve::<T>()?;
        Ok(Self::from_raw(Register::from_slice(bytes, offset)?))
    }

    /// Copies `REGISTER_SIZE` bytes verbatim from `ptr + offset`, unaligned.
    ///
    /// # Safety
    /// `ptr + offset` must point to at least `REGISTER_SIZE` readable bytes.
    #[track_caller]
    pub unsafe fn from_ptr(ptr: *const u8, offset: usize) -> Self {
        Self::layout();
        Self::from_raw(unsafe { Register::from_ptr(ptr, offset) })
    }

    /// Takes the first [`Self::LANES`] values of `values`.
    pub fn from_lanes(values: &[T]) -> Result<Self> {
        let layout = LaneLayout::resolve::<T>()?;
        let lanes = layout.lane_count();
        let values = values.get(..lanes).ok_or(Error::SourceTooShort {
            needed: lanes * T::SIZE,
            offset: 0,
            len: values.len() * T::SIZE,
        })?;

        let mut register = Register::ZERO;
        register
            .lanes_mut(T::SIZE)
            .zip(values)
            .for_each(|(dst, value)| value.write_lane(dst));
        Ok(Self::from_raw(register))
    }

    /// All bits zero.
    #[track_caller]
    pub fn zero() -> Self {
        Self::from_raw(Self::layout().zero())
    }

    /// Every lane holds `T::ONE`.
    #[track_caller]
    pub fn one() -> Self {
        Self::from_raw(Self::layout().one())
    }

    /// Every bit of the register set.
    ///
    /// This is a bit pattern, not a number: integer lanes read as `MAX` or `-1`,
    /// float lanes read as a NaN.
    #[track_caller]
    pub fn all_bits_set() -> Self {
        Self::from_raw(Self::layout().all_bits_set())
    }

    #[inline]
    pub const fn lane_count(&self) -> usize {
        Self::LANES
    }

    /// Reads lane `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        self.register
            .lane(index, T::SIZE)
            .map(T::read_lane)
            .ok_or(Error::IndexOutOfBounds {
                index,
                lanes: Self::LANES,
            })
    }

    /// Reads lane `index`.
    ///
    /// # Panics
    /// Panics with [`Error::IndexOutOfBounds`] if `index >= Self::LANES`.
    #[inline]
    #[track_caller]
    pub fn lane(&self, index: usize) -> T {
        self.get(index).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Overwrites lane `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let dst = self
            .register
            .lane_mut(index, T::SIZE)
            .ok_or(Error::IndexOutOfBounds {
                index,
                lanes: Self::LANES,
            })?;
        value.write_lane(dst);
        Ok(())
    }

    /// Copy with lane `index` replaced.
    pub fn with_lane(mut self, index: usize, value: T) -> Result<Self> {
        self.set(index, value)?;
        Ok(self)
    }

    #[inline]
    pub fn iter(&self) -> Lanes<'_, T> {
        Lanes::new(&self.register)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    #[inline]
    pub fn register(&self) -> &Register {
        &self.register
    }

    #[inline]
    pub fn into_register(self) -> Register {
        self.register
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; REGISTER_SIZE] {
        self.register.as_bytes()
    }

    /// Writes the raw register bytes into `dst[offset..]`.
    pub fn copy_to_slice(&self, dst: &mut [u8], offset: usize) -> Result<()> {
        self.register.copy_to_slice(dst, offset)
    }

    /// Views the same bytes as lanes of `U`.
    #[track_caller]
    pub fn reinterpret<U: Lane>(self) -> FixedVector<U> {
        FixedVector::from_register(self.register)
    }

    /// Applies `f` to every lane.
    pub fn map_lanes(self, f: impl Fn(T) -> T) -> Self {
        let mut register = self.register;
        register
            .lanes_mut(T::SIZE)
            .for_each(|lane| f(T::read_lane(lane)).write_lane(lane));
        Self::from_raw(register)
    }

    /// Combines lanes pairwise with `f`.
    pub fn zip_lanes(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut register = self.register;
        register
            .lanes_mut(T::SIZE)
            .zip(rhs.iter())
            .for_each(|(lane, b)| f(T::read_lane(lane), b).write_lane(lane));
        Self::from_raw(register)
    }

    /// Per-lane hashes folded with [`HashCombiner`], seeded by lane 0.
    pub fn hash_code(&self) -> u32 {
        HashCombiner::combine(self.iter().map(|lane| lane.lane_hash()))
    }

    /// Equality against an arbitrary value.
    ///
    /// `false` unless `other` is a `FixedVector` of the very same `T`.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// Renders `<lane0, lane1, ...>`, lanes separated by the locale's group
    /// separator and a space.
    pub fn to_string_with(&self, format: Option<&str>, locale: &Locale) -> Result<String> {
        Self::layout().format_register(&self.register, format, locale)
    }
}

impl<T: Lane> Default for FixedVector<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Lane> From<T> for FixedVector<T> {
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T: Lane> From<FixedVector<T>> for Register {
    fn from(value: FixedVector<T>) -> Self {
        value.register
    }
}

impl<T: Lane> PartialEq for FixedVector<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.lane_eq(&b))
    }
}

impl<T: Lane> Eq for FixedVector<T> {}

impl<T: Lane> Hash for FixedVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl<'a, T: Lane> IntoIterator for &'a FixedVector<T> {
    type Item = T;
    type IntoIter = Lanes<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Lane> fmt::Display for FixedVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .to_string_with(None, &Locale::current())
            .map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl<T: Lane> fmt::Debug for FixedVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FixedVector")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for FixedVector<T>
where
    T: Lane + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for FixedVector<T>
where
    T: Lane + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let lanes = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        if lanes.len() != Self::LANES {
            return Err(D::Error::invalid_length(lanes.len(), &"one value per lane"));
        }
        Self::from_lanes(&lanes).map_err(D::Error::custom)
    }
}
