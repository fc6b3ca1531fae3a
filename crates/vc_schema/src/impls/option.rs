use crate::{Error, Format, Kind, Pack, Unpack};

impl<T: Pack> Pack for Option<T> {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        match self {
            Some(value) => value.pack::<F>(),
            None => F::pack_null(),
        }
    }

    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Unpack> Unpack for Option<T> {
    const KIND: Kind = Kind::Optional;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        if F::is_null(node) {
            Ok(None)
        } else {
            T::unpack::<F>(node).map(Some)
        }
    }

    #[inline]
    fn absent() -> Option<Self> {
        Some(None)
    }
}
