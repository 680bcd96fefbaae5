use std::iter::{FusedIterator, Flatten, Take};
use std::slice;
use std::vec;

use super::ArrayIndexedCollection;
use crate::util::option::OptionExtension;

impl<T> IntoIterator for ArrayIndexedCollection<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let size = self.size;
        IntoIter {
            inner: self.slots.into_iter().take(size).flatten(),
        }
    }
}

pub struct IntoIter<T> {
    pub(crate) inner: Flatten<Take<vec::IntoIter<Option<T>>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a ArrayIndexedCollection<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    pub(crate) inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // UNREACHABLE: the iterator only covers slots below size, which always hold a value.
        self.inner
            .next()
            .map(|slot| unsafe { slot.as_ref().unreachable() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}
