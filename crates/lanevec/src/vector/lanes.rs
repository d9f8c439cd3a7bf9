use std::{iter::FusedIterator, marker::PhantomData, slice::ChunksExact};

use crate::{Lane, Register};

/// Iterator over the lanes of a vector, lane 0 first.
#[derive(Debug, Clone)]
pub struct Lanes<'a, T> {
    chunks: ChunksExact<'a, u8>,
    _lane: PhantomData<T>,
}

impl<'a, T: Lane> Lanes<'a, T> {
    #[inline]
    pub(crate) fn new(register: &'a Register) -> Self {
        Self {
            chunks: register.lanes(T::SIZE),
            _lane: PhantomData,
        }
    }
}

impl<T: Lane> Iterator for Lanes<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.chunks.next().map(T::read_lane)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.chunks.nth(n).map(T::read_lane)
    }
}

impl<T: Lane> DoubleEndedIterator for Lanes<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.chunks.next_back().map(T::read_lane)
    }
}

impl<T: Lane> ExactSizeIterator for Lanes<'_, T> {}

impl<T: Lane> FusedIterator for Lanes<'_, T> {}
