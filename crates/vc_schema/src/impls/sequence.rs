use alloc::boxed::Box;
use alloc::collections::{BTreeSet, LinkedList, VecDeque};
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use std::collections::HashSet;

use crate::{Error, Format, Kind, Pack, Unpack};

// -----------------------------------------------------------------------------
// Internal API

/// Packs `items` in iteration order, tagging failures with their index.
pub(super) fn pack_items<'a, F, T>(items: impl IntoIterator<Item = &'a T>) -> Result<F::Node, Error>
where
    F: Format,
    T: Pack + 'a,
{
    let nodes = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| item.pack::<F>().map_err(|err| err.at_index(index)))
        .collect::<Result<Vec<_>, Error>>()?;
    F::pack_seq(nodes)
}

/// Unpacks every element of a sequence node into `C`.
pub(super) fn unpack_items<F, T, C>(node: &F::Node) -> Result<C, Error>
where
    F: Format,
    T: Unpack,
    C: FromIterator<T>,
{
    F::unpack_seq(node)?
        .iter()
        .enumerate()
        .map(|(index, item)| T::unpack::<F>(item).map_err(|err| err.at_index(index)))
        .collect()
}

macro_rules! impl_sequence {
    ($ty:ident <T $(: $bound:ident $(+ $bounds:ident)*)?>) => {
        impl<T: Pack> Pack for $ty<T> {
            #[inline]
            fn pack<F: Format>(&self) -> Result<F::Node, Error> {
                pack_items::<F, T>(self)
            }
        }

        impl<T: Unpack $(+ $bound $(+ $bounds)*)?> Unpack for $ty<T> {
            const KIND: Kind = Kind::Sequence;

            #[inline]
            fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
                unpack_items::<F, T, Self>(node)
            }
        }
    };
}

impl_sequence!(Vec<T>);
impl_sequence!(VecDeque<T>);
impl_sequence!(LinkedList<T>);
impl_sequence!(BTreeSet<T: Ord>);

// -----------------------------------------------------------------------------
// Slices & arrays

impl<T: Pack> Pack for [T] {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        pack_items::<F, T>(self)
    }
}

impl<T: Unpack> Unpack for Box<[T]> {
    const KIND: Kind = Kind::Sequence;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        unpack_items::<F, T, Vec<T>>(node).map(Vec::into_boxed_slice)
    }
}

impl<T: Pack, const N: usize> Pack for [T; N] {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        pack_items::<F, T>(self)
    }
}

impl<T: Unpack, const N: usize> Unpack for [T; N] {
    const KIND: Kind = Kind::Sequence;

    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        let found = F::unpack_seq(node)?.len();
        if found != N {
            return Err(Error::length_mismatch(N, found));
        }

        let items = unpack_items::<F, T, Vec<T>>(node)?;
        items
            .try_into()
            .map_err(|items: Vec<T>| Error::length_mismatch(N, items.len()))
    }
}

// -----------------------------------------------------------------------------
// HashSet

impl<T: Pack, S> Pack for HashSet<T, S> {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        pack_items::<F, T>(self)
    }
}

impl<T, S> Unpack for HashSet<T, S>
where
    T: Unpack + Eq + Hash,
    S: BuildHasher + Default,
{
    const KIND: Kind = Kind::Sequence;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        unpack_items::<F, T, Self>(node)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::tests::Tree;
    use crate::{ErrorKind, Pack, Unpack};

    #[test]
    fn arrays_check_their_length() {
        let node = [1_u8, 2, 3].pack::<Tree>().unwrap();

        assert_eq!(<[u8; 3]>::unpack::<Tree>(&node).unwrap(), [1, 2, 3]);

        let err = <[u8; 2]>::unpack::<Tree>(&node).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(err.to_string(), "expected a sequence of 2 elements, found 3");
    }

    #[test]
    fn element_failures_carry_their_index() {
        let node = vec![1_i64, 300, 2].pack::<Tree>().unwrap();

        let err = Vec::<u8>::unpack::<Tree>(&node).unwrap_err();
        assert_eq!(err.to_string(), "[1]: 300 is out of range for `u8`");
    }
}
