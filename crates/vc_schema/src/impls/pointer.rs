use alloc::boxed::Box;

use crate::{Error, Format, Kind, Pack, Unpack};

impl<T: Pack + ?Sized> Pack for &T {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        (**self).pack::<F>()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Pack + ?Sized> Pack for Box<T> {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        (**self).pack::<F>()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: Unpack> Unpack for Box<T> {
    const KIND: Kind = T::KIND;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        T::unpack::<F>(node).map(Box::new)
    }

    #[inline]
    fn absent() -> Option<Self> {
        T::absent().map(Box::new)
    }
}
