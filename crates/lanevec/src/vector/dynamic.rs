use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    Error, FixedVector, Lane, LaneKind, LaneLayout, Locale, REGISTER_SIZE, Register, Result,
    Scalar,
};

/// Vector whose element type is chosen at runtime.
///
/// Carries its [`LaneLayout`] next to the register and dispatches every lane
/// operation through the layout's hooks. Hash codes and formatting match the
/// typed [`FixedVector`] holding the same bytes.
#[derive(Clone, Copy)]
pub struct DynVector {
    register: Register,
    layout: &'static LaneLayout,
}

impl DynVector {
    #[inline]
    pub fn new(layout: &'static LaneLayout, register: Register) -> Self {
        Self { register, layout }
    }

    pub fn zero(kind: LaneKind) -> Self {
        let layout = kind.layout();
        Self::new(layout, layout.zero())
    }

    pub fn one(kind: LaneKind) -> Self {
        let layout = kind.layout();
        Self::new(layout, layout.one())
    }

    pub fn all_bits_set(kind: LaneKind) -> Self {
        let layout = kind.layout();
        Self::new(layout, layout.all_bits_set())
    }

    /// Copies `REGISTER_SIZE` bytes verbatim from `bytes[offset..]`.
    pub fn from_slice(kind: LaneKind, bytes: &[u8], offset: usize) -> Result<Self> {
        Ok(Self::new(kind.layout(), Register::from_slice(bytes, offset)?))
    }

    #[inline]
    pub fn layout(&self) -> &'static LaneLayout {
        self.layout
    }

    #[inline]
    pub fn kind(&self) -> LaneKind {
        self.layout.kind()
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.layout.lane_count()
    }

    #[inline]
    pub fn register(&self) -> &Register {
        &self.register
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; REGISTER_SIZE] {
        self.register.as_bytes()
    }

    /// Lane `index` widened to a [`Scalar`].
    pub fn scalar(&self, index: usize) -> Result<Scalar> {
        self.register
            .lane(index, self.layout.element_size())
            .map(|lane| self.layout.scalar_lane(lane))
            .ok_or(Error::IndexOutOfBounds {
                index,
                lanes: self.lane_count(),
            })
    }

    pub fn hash_code(&self) -> u32 {
        self.layout.hash_register(&self.register)
    }

    pub fn to_string_with(&self, format: Option<&str>, locale: &Locale) -> Result<String> {
        self.layout.format_register(&self.register, format, locale)
    }

    /// Typed view, if the element type is exactly `T`.
    pub fn downcast<T: Lane>(&self) -> Option<FixedVector<T>> {
        (self.layout.type_id() == TypeId::of::<T>()).then(|| FixedVector::from_raw(self.register))
    }
}

impl<T: Lane> From<FixedVector<T>> for DynVector {
    fn from(value: FixedVector<T>) -> Self {
        Self::new(FixedVector::<T>::layout(), value.into_register())
    }
}

impl PartialEq for DynVector {
    fn eq(&self, other: &Self) -> bool {
        self.layout.type_id() == other.layout.type_id()
            && self.layout.eq_registers(&self.register, &other.register)
    }
}

impl Eq for DynVector {}

impl Hash for DynVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Display for DynVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .to_string_with(None, &Locale::current())
            .map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl fmt::Debug for DynVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynVector")
            .field("type_name", &self.layout.type_name())
            .field("bytes", self.register.as_bytes())
            .finish()
    }
}
