use alloc::borrow::{Cow, ToOwned};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use ::toml::{Table, Value};
use vc_schema::{Error, Format, Member};

// -----------------------------------------------------------------------------
// Toml

/// TOML documents, backed by [`toml::Value`](::toml::Value).
///
/// TOML is narrower than the data model:
///
/// - there is no null, so absent optional fields are left out of tables;
/// - a document is always a table, so only maps and records render;
/// - keys are non-empty strings;
/// - integers are 64-bit signed.
///
/// Each limit is reported as [`Error::Structure`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_format::Toml;
/// use vc_schema::ErrorKind;
///
/// let by_id = BTreeMap::from([(1_i32, "one".to_string())]);
/// let err = vc_schema::to_string::<Toml, _>(&by_id).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Structure);
/// ```
pub enum Toml {}

fn unexpected(expected: &str, found: &Value) -> Error {
    Error::unexpected(expected, Toml::describe(found))
}

fn table_key(key: Value) -> Result<String, Error> {
    match key {
        Value::String(key) if key.is_empty() => Err(Error::structure("TOML keys must not be empty")),
        Value::String(key) => Ok(key),
        other => Err(Error::structure(format!(
            "TOML keys must be strings, found {}",
            Toml::describe(&other)
        ))),
    }
}

impl Format for Toml {
    const NAME: &'static str = "toml";
    const SUPPORTS_NULL: bool = false;

    type Node = Value;
    type Text = str;

    fn parse(text: &str) -> Result<Value, Error> {
        ::toml::from_str::<Table>(text)
            .map(Value::Table)
            .map_err(Error::parse)
    }

    fn render(node: &Value) -> Result<String, Error> {
        match node {
            Value::Table(table) => {
                ::toml::to_string(table).map_err(|err| Error::structure(err.to_string()))
            }
            other => Err(Error::structure(format!(
                "a TOML document must be a table, found {}",
                Self::describe(other)
            ))),
        }
    }

    fn describe(node: &Value) -> &'static str {
        match node {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Datetime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
        }
    }

    // --- leaves ---

    #[cold]
    fn pack_null() -> Result<Value, Error> {
        Err(Error::structure("TOML has no null value"))
    }

    #[inline]
    fn is_null(_: &Value) -> bool {
        false
    }

    #[inline]
    fn pack_bool(value: bool) -> Result<Value, Error> {
        Ok(Value::Boolean(value))
    }

    fn unpack_bool(node: &Value) -> Result<bool, Error> {
        node.as_bool().ok_or_else(|| unexpected("a boolean", node))
    }

    #[inline]
    fn pack_i64(value: i64) -> Result<Value, Error> {
        Ok(Value::Integer(value))
    }

    fn unpack_i64(node: &Value) -> Result<i64, Error> {
        node.as_integer().ok_or_else(|| unexpected("an integer", node))
    }

    fn pack_u64(value: u64) -> Result<Value, Error> {
        i64::try_from(value)
            .map(Value::Integer)
            .map_err(|_| Error::out_of_range::<i64>(value))
    }

    fn unpack_u64(node: &Value) -> Result<u64, Error> {
        let value = Self::unpack_i64(node)?;
        u64::try_from(value).map_err(|_| Error::out_of_range::<u64>(value))
    }

    #[inline]
    fn pack_f64(value: f64) -> Result<Value, Error> {
        Ok(Value::Float(value))
    }

    fn unpack_f64(node: &Value) -> Result<f64, Error> {
        match node {
            Value::Float(value) => Ok(*value),
            Value::Integer(value) => Ok(*value as f64),
            other => Err(unexpected("a number", other)),
        }
    }

    #[inline]
    fn pack_str(value: &str) -> Result<Value, Error> {
        Ok(Value::String(value.to_owned()))
    }

    fn unpack_str(node: &Value) -> Result<Cow<'_, str>, Error> {
        match node {
            Value::String(value) => Ok(Cow::Borrowed(value)),
            Value::Datetime(value) => Ok(Cow::Owned(value.to_string())),
            other => Err(unexpected("a string", other)),
        }
    }

    // --- containers ---

    #[inline]
    fn pack_seq(items: Vec<Value>) -> Result<Value, Error> {
        Ok(Value::Array(items))
    }

    fn unpack_seq(node: &Value) -> Result<&[Value], Error> {
        match node {
            Value::Array(items) => Ok(items),
            other => Err(unexpected("an array", other)),
        }
    }

    fn pack_map(entries: Vec<(Value, Value)>) -> Result<Value, Error> {
        entries
            .into_iter()
            .map(|(key, value)| Ok::<_, Error>((table_key(key)?, value)))
            .collect::<Result<Table, _>>()
            .map(Value::Table)
    }

    fn unpack_map(node: &Value) -> Result<Vec<(Value, &Value)>, Error> {
        match node {
            Value::Table(table) => Ok(table
                .iter()
                .map(|(key, value)| (Value::String(key.clone()), value))
                .collect()),
            other => Err(unexpected("a table", other)),
        }
    }

    // --- records ---

    fn pack_record(members: Vec<Member<Value>>) -> Result<Value, Error> {
        members
            .into_iter()
            .map(|member| {
                let (name, value) = member.into_parts()?;
                Ok::<_, Error>((name.to_owned(), value))
            })
            .collect::<Result<Table, _>>()
            .map(Value::Table)
    }

    #[inline]
    fn is_record(node: &Value) -> bool {
        node.is_table()
    }

    #[inline]
    fn record_field<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
        node.as_table()?.get(name)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use ::toml::Value;
    use vc_schema::{ErrorKind, Format, Pack, Unpack};

    use super::Toml;

    #[test]
    fn keys_must_be_non_empty_strings() {
        let by_id = BTreeMap::from([(1_i64, 2_i64)]);
        let err = by_id.pack::<Toml>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);
        assert_eq!(err.to_string(), "TOML keys must be strings, found integer");

        let unnamed = BTreeMap::from([(String::new(), 2_i64)]);
        let err = unnamed.pack::<Toml>().unwrap_err();
        assert_eq!(err.to_string(), "TOML keys must not be empty");
    }

    #[test]
    fn documents_are_tables() {
        let err = Toml::render(&Value::Integer(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);

        let node = Toml::parse("a = 1\nb = [true]\n").unwrap();
        assert!(Toml::is_record(&node));
        assert_eq!(Toml::record_field(&node, "a"), Some(&Value::Integer(1)));
    }

    #[test]
    fn integers_are_signed() {
        let err = u64::MAX.pack::<Toml>().unwrap_err();
        assert_eq!(err.to_string(), "18446744073709551615 is out of range for `i64`");

        let err = u32::unpack::<Toml>(&Value::Integer(-1)).unwrap_err();
        assert_eq!(err.to_string(), "-1 is out of range for `u64`");
    }

    #[test]
    fn null_is_unrepresentable() {
        let err = None::<u8>.pack::<Toml>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structure);

        let items = vec![1.5_f64, 2.0];
        let node = items.pack::<Toml>().unwrap();
        assert_eq!(Vec::<f64>::unpack::<Toml>(&node).unwrap(), items);
    }

    #[test]
    fn datetimes_read_as_strings() {
        let node = Toml::parse("at = 1979-05-27T07:32:00Z\n").unwrap();
        let at = Toml::record_field(&node, "at").unwrap();
        assert_eq!(String::unpack::<Toml>(at).unwrap(), "1979-05-27T07:32:00Z");
    }
}
