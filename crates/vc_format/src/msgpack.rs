use alloc::string::ToString;
use alloc::vec::Vec;

use serde_json::Value;
use vc_schema::Error;

use crate::{ByteCodec, Framed};

/// MessagePack framing, through [`rmp_serde`].
pub enum MsgPackCodec {}

impl ByteCodec for MsgPackCodec {
    const NAME: &'static str = "msgpack";

    fn decode(bytes: &[u8]) -> Result<Value, Error> {
        rmp_serde::from_slice(bytes).map_err(Error::parse)
    }

    fn encode(value: &Value) -> Result<Vec<u8>, Error> {
        rmp_serde::to_vec(value).map_err(|err| Error::structure(err.to_string()))
    }
}

/// MessagePack documents.
pub type MsgPack = Framed<MsgPackCodec>;

#[cfg(test)]
mod tests {
    use vc_schema::{ErrorKind, Format};

    use super::MsgPack;

    #[test]
    fn small_maps_are_fixmaps() {
        let bytes = MsgPack::render(&serde_json::json!({ "a": 1 })).unwrap();
        assert_eq!(bytes, [0x81, 0xa1, b'a', 0x01]);
        assert_eq!(MsgPack::parse(&bytes).unwrap(), serde_json::json!({ "a": 1 }));
    }

    #[test]
    fn truncated_input_fails_to_parse() {
        let err = MsgPack::parse(&[0x81, 0xa1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
