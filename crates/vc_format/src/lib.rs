#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "json")]
mod framed;

#[cfg(feature = "cbor")]
mod cbor;

#[cfg(feature = "msgpack")]
mod msgpack;

#[cfg(feature = "toml")]
mod toml;

#[cfg(feature = "yaml")]
mod yaml;

#[cfg(all(
    test,
    feature = "json",
    feature = "cbor",
    feature = "msgpack",
    feature = "toml",
    feature = "yaml"
))]

// -----------------------------------------------------------------------------
// Top-Level exports

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub use json::Json;

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub use framed::{ByteCodec, Framed};

#[cfg(feature = "cbor")]
#[cfg_attr(docsrs, doc(cfg(feature = "cbor")))]
pub use cbor::{Cbor, CborCodec};

#[cfg(feature = "msgpack")]
#[cfg_attr(docsrs, doc(cfg(feature = "msgpack")))]
pub use msgpack::{MsgPack, MsgPackCodec};

#[cfg(feature = "toml")]
#[cfg_attr(docsrs, doc(cfg(feature = "toml")))]
pub use self::toml::Toml;

#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
pub use yaml::Yaml;
