use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::marker::PhantomData;

use serde_json::Value;
use vc_schema::{Error, Format, Member};

use crate::Json;

// -----------------------------------------------------------------------------
// ByteCodec

/// A binary framing of the JSON document tree.
///
/// Implementors only convert between bytes and [`Value`]. [`Framed`] turns a
/// codec into a complete [`Format`].
pub trait ByteCodec: 'static {
    /// Human readable name, used in log lines.
    const NAME: &'static str;

    /// Decodes a whole document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed input.
    fn decode(bytes: &[u8]) -> Result<Value, Error>;

    /// Encodes a whole document.
    fn encode(value: &Value) -> Result<Vec<u8>, Error>;
}

// -----------------------------------------------------------------------------
// Framed

/// A binary [`Format`] sharing every structural rule with [`Json`].
///
/// Only parsing and rendering go through the codec `C`, so a value converts
/// to the same tree whichever member of the family carries it.
pub struct Framed<C: ByteCodec>(PhantomData<fn() -> C>);

impl<C: ByteCodec> Format for Framed<C> {
    const NAME: &'static str = C::NAME;

    type Node = Value;
    type Text = [u8];

    #[inline]
    fn parse(bytes: &[u8]) -> Result<Value, Error> {
        C::decode(bytes)
    }

    #[inline]
    fn render(node: &Value) -> Result<Vec<u8>, Error> {
        C::encode(node)
    }

    #[inline]
    fn describe(node: &Value) -> &'static str {
        Json::describe(node)
    }

    #[inline]
    fn pack_null() -> Result<Value, Error> {
        Json::pack_null()
    }

    #[inline]
    fn is_null(node: &Value) -> bool {
        Json::is_null(node)
    }

    #[inline]
    fn pack_bool(value: bool) -> Result<Value, Error> {
        Json::pack_bool(value)
    }

    #[inline]
    fn unpack_bool(node: &Value) -> Result<bool, Error> {
        Json::unpack_bool(node)
    }

    #[inline]
    fn pack_i64(value: i64) -> Result<Value, Error> {
        Json::pack_i64(value)
    }

    #[inline]
    fn unpack_i64(node: &Value) -> Result<i64, Error> {
        Json::unpack_i64(node)
    }

    #[inline]
    fn pack_u64(value: u64) -> Result<Value, Error> {
        Json::pack_u64(value)
    }

    #[inline]
    fn unpack_u64(node: &Value) -> Result<u64, Error> {
        Json::unpack_u64(node)
    }

    #[inline]
    fn pack_f64(value: f64) -> Result<Value, Error> {
        Json::pack_f64(value)
    }

    #[inline]
    fn unpack_f64(node: &Value) -> Result<f64, Error> {
        Json::unpack_f64(node)
    }

    #[inline]
    fn pack_str(value: &str) -> Result<Value, Error> {
        Json::pack_str(value)
    }

    #[inline]
    fn unpack_str(node: &Value) -> Result<Cow<'_, str>, Error> {
        Json::unpack_str(node)
    }

    #[inline]
    fn pack_seq(items: Vec<Value>) -> Result<Value, Error> {
        Json::pack_seq(items)
    }

    #[inline]
    fn unpack_seq(node: &Value) -> Result<&[Value], Error> {
        Json::unpack_seq(node)
    }

    #[inline]
    fn pack_map(entries: Vec<(Value, Value)>) -> Result<Value, Error> {
        Json::pack_map(entries)
    }

    #[inline]
    fn unpack_map(node: &Value) -> Result<Vec<(Value, &Value)>, Error> {
        Json::unpack_map(node)
    }

    #[inline]
    fn pack_record(members: Vec<Member<Value>>) -> Result<Value, Error> {
        Json::pack_record(members)
    }

    #[inline]
    fn is_record(node: &Value) -> bool {
        Json::is_record(node)
    }

    #[inline]
    fn record_field<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
        Json::record_field(node, name)
    }
}
