use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::{Error, Format, Kind, Pack, Unpack};

// -----------------------------------------------------------------------------
// Internal API

/// A printable label for a packed key, used in error paths.
fn entry_label<F: Format>(key: &F::Node) -> String {
    match F::unpack_str(key) {
        Ok(key) => key.into_owned(),
        Err(_) => format!("{key:?}"),
    }
}

fn pack_entries<'a, F, K, V>(
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> Result<F::Node, Error>
where
    F: Format,
    K: Pack + 'a,
    V: Pack + 'a,
{
    let nodes = entries
        .map(|(key, value)| {
            let key = key.pack::<F>()?;
            let value = value
                .pack::<F>()
                .map_err(|err| err.in_entry(entry_label::<F>(&key)))?;
            Ok::<_, Error>((key, value))
        })
        .collect::<Result<Vec<_>, Error>>()?;
    F::pack_map(nodes)
}

fn unpack_entries<F, K, V, C>(node: &F::Node) -> Result<C, Error>
where
    F: Format,
    K: Unpack,
    V: Unpack,
    C: FromIterator<(K, V)>,
{
    F::unpack_map(node)?
        .into_iter()
        .map(|(key, value)| {
            let wrap = |err: Error| err.in_entry(entry_label::<F>(&key));
            Ok::<_, Error>((
                K::unpack::<F>(&key).map_err(wrap)?,
                V::unpack::<F>(value).map_err(wrap)?,
            ))
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Maps

impl<K: Pack, V: Pack, S> Pack for HashMap<K, V, S> {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        pack_entries::<F, K, V>(self.iter())
    }
}

impl<K, V, S> Unpack for HashMap<K, V, S>
where
    K: Unpack + Eq + Hash,
    V: Unpack,
    S: BuildHasher + Default,
{
    const KIND: Kind = Kind::Map;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        unpack_entries::<F, K, V, Self>(node)
    }
}

impl<K: Pack, V: Pack> Pack for BTreeMap<K, V> {
    #[inline]
    fn pack<F: Format>(&self) -> Result<F::Node, Error> {
        pack_entries::<F, K, V>(self.iter())
    }
}

impl<K: Unpack + Ord, V: Unpack> Unpack for BTreeMap<K, V> {
    const KIND: Kind = Kind::Map;

    #[inline]
    fn unpack<F: Format>(node: &F::Node) -> Result<Self, Error> {
        unpack_entries::<F, K, V, Self>(node)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use crate::tests::Tree;
    use crate::{Pack, Unpack};

    #[test]
    fn value_failures_name_their_key() {
        let mut map = BTreeMap::new();
        map.insert(String::from("alpha"), -1_i32);
        let node = map.pack::<Tree>().unwrap();

        assert_eq!(BTreeMap::<String, i32>::unpack::<Tree>(&node).unwrap(), map);

        let err = BTreeMap::<String, u32>::unpack::<Tree>(&node).unwrap_err();
        assert_eq!(err.to_string(), "entry `alpha`: expected an unsigned integer, found integer");
    }
}
