use alloc::borrow::{Cow, ToOwned};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde_yaml::{Mapping, Number, Value};
use vc_schema::{Error, Format, Member};

// -----------------------------------------------------------------------------
// Yaml

/// YAML documents, backed by [`serde_yaml::Value`].
///
/// Plain scalars are untyped in YAML, so booleans and numbers are read back
/// as their text wherever a string is expected.
///
/// Variants feel this first: an alternative holding a `String` accepts every
/// scalar, so any numeric or boolean alternative declared after it is never
/// reached. Declare those alternatives before the string one.
///
/// # Examples
///
/// ```
/// use vc_format::Yaml;
///
/// let port: String = vc_schema::from_string::<Yaml, _>("8080").unwrap();
/// assert_eq!(port, "8080");
/// ```
pub enum Yaml {}

fn unexpected(expected: &str, found: &Value) -> Error {
    Error::unexpected(expected, Yaml::describe(found))
}

impl Format for Yaml {
    const NAME: &'static str = "yaml";

    type Node = Value;
    type Text = str;

    fn parse(text: &str) -> Result<Value, Error> {
        serde_yaml::from_str(text).map_err(Error::parse)
    }

    fn render(node: &Value) -> Result<String, Error> {
        serde_yaml::to_string(node).map_err(|err| Error::structure(err.to_string()))
    }

    fn describe(node: &Value) -> &'static str {
        match node {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(number) if number.is_f64() => "float",
            Value::Number(_) => "integer",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Tagged(_) => "tagged value",
        }
    }

    // --- leaves ---

    #[inline]
    fn pack_null() -> Result<Value, Error> {
        Ok(Value::Null)
    }

    #[inline]
    fn is_null(node: &Value) -> bool {
        node.is_null()
    }

    #[inline]
    fn pack_bool(value: bool) -> Result<Value, Error> {
        Ok(Value::Bool(value))
    }

    fn unpack_bool(node: &Value) -> Result<bool, Error> {
        node.as_bool().ok_or_else(|| unexpected("a boolean", node))
    }

    #[inline]
    fn pack_i64(value: i64) -> Result<Value, Error> {
        Ok(Value::Number(Number::from(value)))
    }

    fn unpack_i64(node: &Value) -> Result<i64, Error> {
        match node {
            Value::Number(number) if number.is_u64() => number
                .as_i64()
                .ok_or_else(|| Error::out_of_range::<i64>(number)),
            Value::Number(number) => number
                .as_i64()
                .ok_or_else(|| unexpected("an integer", node)),
            other => Err(unexpected("an integer", other)),
        }
    }

    #[inline]
    fn pack_u64(value: u64) -> Result<Value, Error> {
        Ok(Value::Number(Number::from(value)))
    }

    fn unpack_u64(node: &Value) -> Result<u64, Error> {
        match node {
            Value::Number(number) if number.is_i64() => number
                .as_u64()
                .ok_or_else(|| Error::out_of_range::<u64>(number)),
            Value::Number(number) => number
                .as_u64()
                .ok_or_else(|| unexpected("an unsigned integer", node)),
            other => Err(unexpected("an unsigned integer", other)),
        }
    }

    #[inline]
    fn pack_f64(value: f64) -> Result<Value, Error> {
        Ok(Value::Number(Number::from(value)))
    }

    fn unpack_f64(node: &Value) -> Result<f64, Error> {
        node.as_f64().ok_or_else(|| unexpected("a number", node))
    }

    #[inline]
    fn pack_str(value: &str) -> Result<Value, Error> {
        Ok(Value::String(value.to_owned()))
    }

    fn unpack_str(node: &Value) -> Result<Cow<'_, str>, Error> {
        match node {
            Value::String(value) => Ok(Cow::Borrowed(value)),
            Value::Bool(value) => Ok(Cow::Owned(value.to_string())),
            Value::Number(value) => Ok(Cow::Owned(value.to_string())),
            other => Err(unexpected("a string", other)),
        }
    }

    // --- containers ---

    #[inline]
    fn pack_seq(items: Vec<Value>) -> Result<Value, Error> {
        Ok(Value::Sequence(items))
    }

    fn unpack_seq(node: &Value) -> Result<&[Value], Error> {
        match node {
            Value::Sequence(items) => Ok(items),
            other => Err(unexpected("a sequence", other)),
        }
    }

    fn pack_map(entries: Vec<(Value, Value)>) -> Result<Value, Error> {
        Ok(Value::Mapping(entries.into_iter().collect()))
    }

    fn unpack_map(node: &Value) -> Result<Vec<(Value, &Value)>, Error> {
        match node {
            Value::Mapping(mapping) => Ok(mapping
                .iter()
                .map(|(key, value)| (key.clone(), value))
                .collect()),
            other => Err(unexpected("a mapping", other)),
        }
    }

    // --- records ---

    fn pack_record(members: Vec<Member<Value>>) -> Result<Value, Error> {
        members
            .into_iter()
            .map(|member| {
                let (name, value) = member.into_parts()?;
                Ok::<_, Error>((Value::String(name.to_owned()), value))
            })
            .collect::<Result<Mapping, _>>()
            .map(Value::Mapping)
    }

    #[inline]
    fn is_record(node: &Value) -> bool {
        node.is_mapping()
    }

    #[inline]
    fn record_field<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
        node.as_mapping()?.get(name)
    }
}

// -----------------------------------------------------------------------------
// Tests
