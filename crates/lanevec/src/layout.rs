use std::{
    any::{TypeId, type_name},
    collections::HashMap,
    fmt,
    ops::Range,
    sync::OnceLock,
};

use log::{debug, warn};
use parking_lot::RwLock;

use crate::{
    Error, FormatSpec, HashCombiner, Lane, LaneKind, Locale, REGISTER_SIZE, Register, Result,
    Scalar, format_scalar,
};

type Registry = RwLock<HashMap<TypeId, Option<&'static LaneLayout>>>;

/// Lane geometry and type-erased per-lane operations of one element type.
///
/// Obtained through [`LaneLayout::resolve`], which builds it once per type and
/// hands out the same `&'static` value afterwards. The hooks take lane byte
/// slices of exactly `element_size` bytes.
pub struct LaneLayout {
    type_id: TypeId,
    type_name: &'static str,
    kind: LaneKind,
    element_size: usize,
    lane_count: usize,
    one: Register,
    hash_lane: fn(&[u8]) -> u32,
    eq_lane: fn(&[u8], &[u8]) -> bool,
    scalar_lane: fn(&[u8]) -> Scalar,
}

impl LaneLayout {
    /// Resolves and caches the layout of `T`.
    ///
    /// Fails with [`Error::UnsupportedElementType`] when `T` cannot tile the
    /// register evenly or its declared size disagrees with its kind or with its
    /// in-memory size. Failures are cached too.
    pub fn resolve<T: Lane>() -> Result<&'static Self> {
        let id = TypeId::of::<T>();

        if let Some(entry) = registry().read().get(&id).copied() {
            return entry.ok_or_else(|| Error::unsupported(type_name::<T>(), T::SIZE));
        }

        let entry = *registry().write().entry(id).or_insert_with(|| {
            let built = Self::build::<T>();
            match &built {
                Some(layout) => debug!(
                    "Resolved lane layout for {}: {} lanes of {} bytes",
                    layout.type_name, layout.lane_count, layout.element_size
                ),
                None => warn!(
                    "Unsupported lane element type {} ({} bytes)",
                    type_name::<T>(),
                    T::SIZE
                ),
            }
            built.map(|layout| &*Box::leak(Box::new(layout)))
        });

        entry.ok_or_else(|| Error::unsupported(type_name::<T>(), T::SIZE))
    }

    /// Layout of the primitive type of `kind`.
    pub fn for_kind(kind: LaneKind) -> &'static Self {
        let resolved = match kind {
            LaneKind::U8 => Self::resolve::<u8>(),
            LaneKind::I8 => Self::resolve::<i8>(),
            LaneKind::U16 => Self::resolve::<u16>(),
            LaneKind::I16 => Self::resolve::<i16>(),
            LaneKind::U32 => Self::resolve::<u32>(),
            LaneKind::I32 => Self::resolve::<i32>(),
            LaneKind::U64 => Self::resolve::<u64>(),
            LaneKind::I64 => Self::resolve::<i64>(),
            LaneKind::F32 => Self::resolve::<f32>(),
            LaneKind::F64 => Self::resolve::<f64>(),
        };
        // Primitive impls always tile the register.
        resolved.unwrap_or_else(|e| panic!("{e}"))
    }

    /// Layout of the primitive named `name` (`"u32"`, `"double"`, ...).
    pub fn for_name(name: &str) -> Result<&'static Self> {
        Ok(Self::for_kind(name.parse()?))
    }

    fn build<T: Lane>() -> Option<Self> {
        let size = T::SIZE;
        if size == 0
            || REGISTER_SIZE % size != 0
            || size != T::KIND.size()
            || size != size_of::<T>()
        {
            return None;
        }

        let mut lane = vec![0u8; size];
        T::ONE.write_lane(&mut lane);

        Some(Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            kind: T::KIND,
            element_size: size,
            lane_count: REGISTER_SIZE / size,
            one: Register::splat(&lane),
            hash_lane: hash_lane::<T>,
            eq_lane: eq_lane::<T>,
            scalar_lane: scalar_lane::<T>,
        })
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn kind(&self) -> LaneKind {
        self.kind
    }

    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    #[inline]
    pub fn zero(&self) -> Register {
        Register::ZERO
    }

    /// Every lane holds the element's `ONE`.
    #[inline]
    pub fn one(&self) -> Register {
        self.one
    }

    /// Every bit set. For float lanes this is a NaN pattern, not a number.
    #[inline]
    pub fn all_bits_set(&self) -> Register {
        Register::ALL_BITS_SET
    }

    #[inline]
    pub fn lane_range(&self, index: usize) -> Option<Range<usize>> {
        Register::lane_range(index, self.element_size)
    }

    #[inline]
    pub fn hash_lane(&self, lane: &[u8]) -> u32 {
        (self.hash_lane)(lane)
    }

    #[inline]
    pub fn eq_lane(&self, a: &[u8], b: &[u8]) -> bool {
        (self.eq_lane)(a, b)
    }

    #[inline]
    pub fn scalar_lane(&self, lane: &[u8]) -> Scalar {
        (self.scalar_lane)(lane)
    }

    pub fn fmt_lane(
        &self,
        lane: &[u8],
        spec: &FormatSpec,
        locale: &Locale,
        out: &mut String,
    ) -> Result<()> {
        format_scalar(self.scalar_lane(lane), spec, locale, out)
    }

    /// Combined hash of every lane of `register`.
    pub fn hash_register(&self, register: &Register) -> u32 {
        HashCombiner::combine(
            register
                .lanes(self.element_size)
                .map(|lane| self.hash_lane(lane)),
        )
    }

    /// Lane-wise equality of two registers, stopping at the first mismatch.
    pub fn eq_registers(&self, a: &Register, b: &Register) -> bool {
        a.lanes(self.element_size)
            .zip(b.lanes(self.element_size))
            .all(|(a, b)| self.eq_lane(a, b))
    }

    /// `"<" lane0 sep lane1 ... ">"` with `sep` the group separator plus a space.
    pub fn format_register(
        &self,
        register: &Register,
        format: Option<&str>,
        locale: &Locale,
    ) -> Result<String> {
        let spec: FormatSpec = format.unwrap_or_default().parse()?;
        let mut out = String::with_capacity(self.lane_count * 8);
        out.push('<');
        for (i, lane) in register.lanes(self.element_size).enumerate() {
            if i > 0 {
                out.push_str(locale.group_separator());
                out.push(' ');
            }
            self.fmt_lane(lane, &spec, locale, &mut out)?;
        }
        out.push('>');
        Ok(out)
    }
}

impl fmt::Debug for LaneLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaneLayout")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .field("element_size", &self.element_size)
            .field("lane_count", &self.lane_count)
            .finish()
    }
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

fn hash_lane<T: Lane>(lane: &[u8]) -> u32 {
    T::read_lane(lane).lane_hash()
}

fn eq_lane<T: Lane>(a: &[u8], b: &[u8]) -> bool {
    T::read_lane(a).lane_eq(&T::read_lane(b))
}

fn scalar_lane<T: Lane>(lane: &[u8]) -> Scalar {
    T::read_lane(lane).to_scalar()
}
