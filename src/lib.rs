#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_format as format;
pub use vc_schema as schema;

pub use vc_schema::{ConversionError, Schema, from_file, from_string, to_string};
