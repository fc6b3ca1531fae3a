use alloc::string::ToString;
use alloc::vec::Vec;

use serde_json::Value;
use vc_schema::Error;

use crate::{ByteCodec, Framed};

/// CBOR framing, through [`ciborium`].
pub enum CborCodec {}

impl ByteCodec for CborCodec {
    const NAME: &'static str = "cbor";

    fn decode(bytes: &[u8]) -> Result<Value, Error> {
        ciborium::from_reader(bytes).map_err(Error::parse)
    }

    fn encode(value: &Value) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::new();
        ciborium::into_writer(value, &mut bytes)
            .map_err(|err| Error::structure(err.to_string()))?;
        Ok(bytes)
    }
}

/// CBOR documents.
pub type Cbor = Framed<CborCodec>;
