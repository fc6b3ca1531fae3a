use alloc::string::String;
use core::time::Duration;

use crate::{Error, Format, Kind, Pack, Unpack};

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Pack for $ty {
            #[inline]
            fn pack<F: Format>(&self) -> Result<F::Node, Error> {
                F::pack_i64(*self as i64)
            }
        }

        impl Unpack for $ty {
            const KIND: Kind = Kind::Leaf;

            #[inline]
            fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
                let value = F::unpack_i64(node)?;
                <$ty>::try_from(value).map_err(|_| Error::out_of_range::<$ty>(value))
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Pack for $ty {
            #[inline]
            fn pack<F: Format>(&self) -> Result<F::Node, Error> {
                F::pack_u64(*self as u64)
            }
        }

        impl Unpack for $ty {
            const KIND: Kind = Kind::Leaf;

            #[inline]
            fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
                let value = F::unpack_u64(node)?;
                <$ty>::try_from(value).map_err(|_| Error::out_of_range::<$ty>(value))
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Floats

impl Pack for f64 {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        F::pack_f64(*self)
    }
}

impl Unpack for f64 {
    const KIND: Kind = Kind::Leaf;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        F::unpack_f64(node)
    }
}

impl Pack for f32 {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        F::pack_f64(f64::from(*self))
    }
}

impl Unpack for f32 {
    const KIND: Kind = Kind::Leaf;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        let value = F::unpack_f64(node)?;
        let narrowed = value as f32;
        if value.is_finite() && !narrowed.is_finite() {
            return Err(Error::out_of_range::<f32>(value));
        }
        Ok(narrowed)
    }
}

// -----------------------------------------------------------------------------
// Duration

/// Packed as a number of seconds, with the fraction for sub-second parts.
impl Pack for Duration {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        F::pack_f64(self.as_secs_f64())
    }
}

impl Unpack for Duration {
    const KIND: Kind = Kind::Leaf;

    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        let secs = F::unpack_f64(node)?;
        Duration::try_from_secs_f64(secs).map_err(|_| Error::out_of_range::<Duration>(secs))
    }
}

// -----------------------------------------------------------------------------
// bool

impl Pack for bool {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        F::pack_bool(*self)
    }
}

impl Unpack for bool {
    const KIND: Kind = Kind::Leaf;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        F::unpack_bool(node)
    }
}

// -----------------------------------------------------------------------------
// Strings

impl Pack for str {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        F::pack_str(self)
    }
}

impl Pack for String {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        F::pack_str(self)
    }
}

impl Unpack for String {
    const KIND: Kind = Kind::Leaf;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        F::unpack_str(node).map(|value| value.into_owned())
    }
}

impl Pack for char {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        F::pack_str(self.encode_utf8(&mut [0; 4]))
    }
}

impl Unpack for char {
    const KIND: Kind = Kind::Leaf;

    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        let value = F::unpack_str(node)?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::unexpected("a single character", &value)),
        }
    }
}

// -----------------------------------------------------------------------------
// Unit

impl Pack for () {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        F::pack_null()
    }

    #[inline]
    fn is_absent(&self) -> bool {
        true
    }
}

impl Unpack for () {
    const KIND: Kind = Kind::Leaf;

    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        if F::is_null(node) {
            Ok(())
        } else {
            Err(Error::unexpected("null", F::describe(node)))
        }
    }

    #[inline]
    fn absent() -> Option<Self> {
        Some(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::time::Duration;

    use crate::tests::{Node, Tree};
    use crate::{ErrorKind, Pack, Unpack};

    #[test]
    fn f32_rejects_overflow() {
        let err = f32::unpack::<Tree>(&Node::Float(1e300)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert!(err.to_string().ends_with(" is out of range for `f32`"));

        assert_eq!(f32::unpack::<Tree>(&Node::Float(0.5)).unwrap(), 0.5);
        assert!(f32::unpack::<Tree>(&Node::Float(f64::INFINITY)).unwrap().is_infinite());
        assert!(f32::unpack::<Tree>(&Node::Float(f64::NAN)).unwrap().is_nan());
    }

    #[test]
    fn durations_are_seconds() {
        let node = Duration::from_millis(1500).pack::<Tree>().unwrap();
        assert_eq!(node, Node::Float(1.5));
        assert_eq!(Duration::unpack::<Tree>(&node).unwrap(), Duration::from_millis(1500));
        assert_eq!(Duration::unpack::<Tree>(&Node::Int(2)).unwrap(), Duration::from_secs(2));

        let err = Duration::unpack::<Tree>(&Node::Float(-1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert!(err.to_string().starts_with("-1 is out of range for `"));
    }
}
