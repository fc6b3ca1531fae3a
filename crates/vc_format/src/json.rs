use alloc::borrow::{Cow, ToOwned};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use serde_json::{Map, Number, Value};
use vc_schema::{Error, Format, Member};

// -----------------------------------------------------------------------------
// Json

/// JSON documents, backed by [`serde_json::Value`].
///
/// Objects keep their insertion order, so records render with their fields
/// in declaration order.
///
/// A map whose keys all pack to strings becomes an object. Any other map is
/// written as an array of `[key, value]` pairs; both shapes are accepted by
/// [`Format::unpack_map`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_format::Json;
///
/// let by_name = BTreeMap::from([("a".to_string(), 1_u8)]);
/// assert_eq!(vc_schema::to_string::<Json, _>(&by_name).unwrap(), r#"{"a":1}"#);
///
/// let by_id = BTreeMap::from([(7_i32, 1_u8)]);
/// assert_eq!(vc_schema::to_string::<Json, _>(&by_id).unwrap(), "[[7,1]]");
/// ```
pub enum Json {}

fn unexpected(expected: &str, found: &Value) -> Error {
    Error::unexpected(expected, Json::describe(found))
}

impl Format for Json {
    const NAME: &'static str = "json";

    type Node = Value;
    type Text = str;

    fn parse(text: &str) -> Result<Value, Error> {
        serde_json::from_str(text).map_err(Error::parse)
    }

    fn render(node: &Value) -> Result<String, Error> {
        serde_json::to_string(node).map_err(|err| Error::structure(err.to_string()))
    }

    fn describe(node: &Value) -> &'static str {
        match node {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(number) if number.is_f64() => "float",
            Value::Number(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
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
        Ok(Value::Number(value.into()))
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
        Ok(Value::Number(value.into()))
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

    fn pack_f64(value: f64) -> Result<Value, Error> {
        Number::from_f64(value)
            .map(Value::Number)
            .ok_or_else(|| Error::structure(format!("{value} has no JSON representation")))
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
        if !entries.iter().all(|(key, _)| key.is_string()) {
            let pairs = entries
                .into_iter()
                .map(|(key, value)| Value::Array(vec![key, value]))
                .collect();
            return Ok(Value::Array(pairs));
        }

        let object = entries
            .into_iter()
            .filter_map(|(key, value)| match key {
                Value::String(key) => Some((key, value)),
                _ => None,
            })
            .collect::<Map<_, _>>();
        Ok(Value::Object(object))
    }

    fn unpack_map(node: &Value) -> Result<Vec<(Value, &Value)>, Error> {
        match node {
            Value::Object(object) => Ok(object
                .iter()
                .map(|(key, value)| (Value::String(key.clone()), value))
                .collect()),
            Value::Array(pairs) => pairs
                .iter()
                .enumerate()
                .map(|(index, pair)| match pair.as_array().map(Vec::as_slice) {
                    Some([key, value]) => Ok((key.clone(), value)),
                    _ => Err(unexpected("a [key, value] pair", pair).at_index(index)),
                })
                .collect(),
            other => Err(unexpected("an object", other)),
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
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object)
    }

    #[inline]
    fn is_record(node: &Value) -> bool {
        node.is_object()
    }

    #[inline]
    fn record_field<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
        node.as_object()?.get(name)
    }
}

// -----------------------------------------------------------------------------
// Tests
