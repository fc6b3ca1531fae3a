use alloc::vec;

use crate::{Error, Format, Kind, Pack, Unpack};

// Tuples are fixed-length sequences; element `i` sits at index `i`.
macro_rules! impl_tuple {
    ($len:literal => $(($index:tt, $name:ident)),+) => {
        impl<$($name: Pack),+> Pack for ($($name,)+) {
            fn pack<F: Format>(&self) -> Result<F::Node, Error> {
                F::pack_seq(vec![
                    $(self.$index.pack::<F>().map_err(|err| err.at_index($index))?,)+
                ])
            }
        }

        impl<$($name: Unpack),+> Unpack for ($($name,)+) {
            const KIND: Kind = Kind::Sequence;

            fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
                let items = F::unpack_seq(node)?;
                if items.len() != $len {
                    return Err(Error::length_mismatch($len, items.len()));
                }

                Ok(($(
                    $name::unpack::<F>(&items[$index]).map_err(|err| err.at_index($index))?,
                )+))
            }
        }
    };
}

impl_tuple!(1 => (0, P0));
impl_tuple!(2 => (0, P0), (1, P1));
impl_tuple!(3 => (0, P0), (1, P1), (2, P2));
impl_tuple!(4 => (0, P0), (1, P1), (2, P2), (3, P3));
impl_tuple!(5 => (0, P0), (1, P1), (2, P2), (3, P3), (4, P4));
impl_tuple!(6 => (0, P0), (1, P1), (2, P2), (3, P3), (4, P4), (5, P5));
impl_tuple!(7 => (0, P0), (1, P1), (2, P2), (3, P3), (4, P4), (5, P5), (6, P6));
impl_tuple!(8 => (0, P0), (1, P1), (2, P2), (3, P3), (4, P4), (5, P5), (6, P6), (7, P7));

// -----------------------------------------------------------------------------
// Tests
