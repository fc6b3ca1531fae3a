//! A minimal in-memory format and the types shared by the unit tests.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::{Error, ErrorKind, Format, Member, Pack, Record, Unpack, Variant};

// -----------------------------------------------------------------------------
// Tree

/// An in-memory format. Its text form is the `Debug` output of the node and
/// cannot be parsed back.
pub(crate) enum Tree {}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Node>),
    Map(Vec<(Node, Node)>),
    Record(Vec<(&'static str, Node)>),
}

impl Format for Tree {
    const NAME: &'static str = "tree";

    type Node = Node;
    type Text = str;

    fn parse(_: &str) -> Result<Node, Error> {
        Err(Error::parse("trees have no text form"))
    }

    fn render(node: &Node) -> Result<String, Error> {
        Ok(format!("{node:?}"))
    }

    fn describe(node: &Node) -> &'static str {
        match node {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Int(_) => "integer",
            Node::Float(_) => "float",
            Node::Str(_) => "string",
            Node::Seq(_) => "sequence",
            Node::Map(_) => "map",
            Node::Record(_) => "record",
        }
    }

    fn pack_null() -> Result<Node, Error> {
        Ok(Node::Null)
    }

    fn is_null(node: &Node) -> bool {
        matches!(node, Node::Null)
    }

    fn pack_bool(value: bool) -> Result<Node, Error> {
        Ok(Node::Bool(value))
    }

    fn unpack_bool(node: &Node) -> Result<bool, Error> {
        match node {
            Node::Bool(value) => Ok(*value),
            other => Err(Error::unexpected("a boolean", Self::describe(other))),
        }
    }

    fn pack_i64(value: i64) -> Result<Node, Error> {
        Ok(Node::Int(value))
    }

    fn unpack_i64(node: &Node) -> Result<i64, Error> {
        match node {
            Node::Int(value) => Ok(*value),
            other => Err(Error::unexpected("an integer", Self::describe(other))),
        }
    }

    fn pack_u64(value: u64) -> Result<Node, Error> {
        i64::try_from(value)
            .map(Node::Int)
            .map_err(|_| Error::out_of_range::<i64>(value))
    }

    fn unpack_u64(node: &Node) -> Result<u64, Error> {
        match node {
            Node::Int(value) if *value >= 0 => Ok(*value as u64),
            other => Err(Error::unexpected("an unsigned integer", Self::describe(other))),
        }
    }

    fn pack_f64(value: f64) -> Result<Node, Error> {
        Ok(Node::Float(value))
    }

    fn unpack_f64(node: &Node) -> Result<f64, Error> {
        match node {
            Node::Float(value) => Ok(*value),
            Node::Int(value) => Ok(*value as f64),
            other => Err(Error::unexpected("a number", Self::describe(other))),
        }
    }

    fn pack_str(value: &str) -> Result<Node, Error> {
        Ok(Node::Str(value.to_string()))
    }

    fn unpack_str(node: &Node) -> Result<Cow<'_, str>, Error> {
        match node {
            Node::Str(value) => Ok(Cow::Borrowed(value)),
            other => Err(Error::unexpected("a string", Self::describe(other))),
        }
    }

    fn pack_seq(items: Vec<Node>) -> Result<Node, Error> {
        Ok(Node::Seq(items))
    }

    fn unpack_seq(node: &Node) -> Result<&[Node], Error> {
        match node {
            Node::Seq(items) => Ok(items),
            other => Err(Error::unexpected("a sequence", Self::describe(other))),
        }
    }

    fn pack_map(entries: Vec<(Node, Node)>) -> Result<Node, Error> {
        Ok(Node::Map(entries))
    }

    fn unpack_map(node: &Node) -> Result<Vec<(Node, &Node)>, Error> {
        match node {
            Node::Map(entries) => Ok(entries.iter().map(|(k, v)| (k.clone(), v)).collect()),
            other => Err(Error::unexpected("a map", Self::describe(other))),
        }
    }

    fn pack_record(members: Vec<Member<Node>>) -> Result<Node, Error> {
        members
            .into_iter()
            .map(Member::into_parts)
            .collect::<Result<Vec<_>, _>>()
            .map(Node::Record)
    }

    fn is_record(node: &Node) -> bool {
        matches!(node, Node::Record(_))
    }

    fn record_field<'a>(node: &'a Node, name: &str) -> Option<&'a Node> {
        match node {
            Node::Record(fields) => fields.iter().find(|(key, _)| *key == name).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// A [`Tree`] without null, like formats that omit absent members.
pub(crate) enum NullFree {}

impl Format for NullFree {
    const NAME: &'static str = "null-free tree";
    const SUPPORTS_NULL: bool = false;

    type Node = Node;
    type Text = str;

    fn parse(text: &str) -> Result<Node, Error> {
        Tree::parse(text)
    }
    fn render(node: &Node) -> Result<String, Error> {
        Tree::render(node)
    }
    fn describe(node: &Node) -> &'static str {
        Tree::describe(node)
    }
    fn pack_null() -> Result<Node, Error> {
        Err(Error::structure("null is not representable"))
    }
    fn is_null(_: &Node) -> bool {
        false
    }
    fn pack_bool(value: bool) -> Result<Node, Error> {
        Tree::pack_bool(value)
    }
    fn unpack_bool(node: &Node) -> Result<bool, Error> {
        Tree::unpack_bool(node)
    }
    fn pack_i64(value: i64) -> Result<Node, Error> {
        Tree::pack_i64(value)
    }
    fn unpack_i64(node: &Node) -> Result<i64, Error> {
        Tree::unpack_i64(node)
    }
    fn pack_u64(value: u64) -> Result<Node, Error> {
        Tree::pack_u64(value)
    }
    fn unpack_u64(node: &Node) -> Result<u64, Error> {
        Tree::unpack_u64(node)
    }
    fn pack_f64(value: f64) -> Result<Node, Error> {
        Tree::pack_f64(value)
    }
    fn unpack_f64(node: &Node) -> Result<f64, Error> {
        Tree::unpack_f64(node)
    }
    fn pack_str(value: &str) -> Result<Node, Error> {
        Tree::pack_str(value)
    }
    fn unpack_str(node: &Node) -> Result<Cow<'_, str>, Error> {
        Tree::unpack_str(node)
    }
    fn pack_seq(items: Vec<Node>) -> Result<Node, Error> {
        Tree::pack_seq(items)
    }
    fn unpack_seq(node: &Node) -> Result<&[Node], Error> {
        Tree::unpack_seq(node)
    }
    fn pack_map(entries: Vec<(Node, Node)>) -> Result<Node, Error> {
        Tree::pack_map(entries)
    }
    fn unpack_map(node: &Node) -> Result<Vec<(Node, &Node)>, Error> {
        Tree::unpack_map(node)
    }
    fn pack_record(members: Vec<Member<Node>>) -> Result<Node, Error> {
        Tree::pack_record(members)
    }
    fn is_record(node: &Node) -> bool {
        Tree::is_record(node)
    }
    fn record_field<'a>(node: &'a Node, name: &str) -> Option<&'a Node> {
        Tree::record_field(node, name)
    }
}

fn record(fields: Vec<(&'static str, Node)>) -> Node {
    Node::Record(fields)
}

fn text(value: &str) -> Node {
    Node::Str(value.to_string())
}

// -----------------------------------------------------------------------------
// Shared types

#[derive(crate::Schema, Debug, Clone, PartialEq)]
#[schema(auto_register)]
pub(crate) struct Client {
    #[schema(default = String::from("127.0.0.1"))]
    pub address: String,
    #[schema(default = 8080)]
    pub port: u16,
    pub mode: Mode,
    pub timeout: Option<u32>,
    #[schema(default)]
    pub tags: Vec<String>,
}

#[derive(crate::Schema, Debug, Clone, Copy, PartialEq)]
pub(crate) enum Mode {
    Internal,
    External,
}

#[derive(crate::Schema, Debug, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Seq(Vec<i64>),
    Map(BTreeMap<i64, i64>),
}

#[derive(crate::Schema, Debug, PartialEq)]
pub(crate) enum Reordered {
    Map(BTreeMap<i64, i64>),
    Seq(Vec<i64>),
    Int(i64),
}

#[derive(crate::Schema, Debug, Clone, Copy, PartialEq)]
pub(crate) struct Port(pub u16);

#[derive(crate::Schema, Debug, PartialEq)]
struct Labeled<T> {
    label: String,
    value: T,
}

#[derive(crate::Schema, Debug, PartialEq)]
struct Renamed {
    #[schema(rename = "type")]
    kind: String,
    r#ref: u8,
}

// -----------------------------------------------------------------------------
// Records

#[test]
fn record_round_trip() {
    let client = Client {
        address: String::from("10.0.0.1"),
        port: 9000,
        mode: Mode::External,
        timeout: Some(30),
        tags: vec![String::from("edge")],
    };

    let node = client.pack::<Tree>().unwrap();
    assert_eq!(
        node,
        record(vec![
            ("address", text("10.0.0.1")),
            ("port", Node::Int(9000)),
            ("mode", text("External")),
            ("timeout", Node::Int(30)),
            ("tags", Node::Seq(vec![text("edge")])),
        ])
    );
    assert_eq!(Client::unpack::<Tree>(&node).unwrap(), client);
}

#[test]
fn defaults_fill_absent_fields() {
    let node = record(vec![("mode", text("Internal"))]);

    let client = Client::unpack::<Tree>(&node).unwrap();
    assert_eq!(
        client,
        Client {
            address: String::from("127.0.0.1"),
            port: 8080,
            mode: Mode::Internal,
            timeout: None,
            tags: Vec::new(),
        }
    );
}

#[test]
fn missing_required_field() {
    let node = record(vec![("port", Node::Int(1))]);

    let err = Client::unpack::<Tree>(&node).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingField);
    assert!(matches!(err, Error::MissingField { field: "mode", .. }));
}

#[test]
fn null_falls_back_to_default() {
    let node = record(vec![("port", Node::Null), ("mode", text("Internal"))]);
    assert_eq!(Client::unpack::<Tree>(&node).unwrap().port, 8080);
}

#[test]
fn field_errors_name_the_field() {
    let node = record(vec![("mode", text("Internal")), ("port", text("80"))]);

    let err = Client::unpack::<Tree>(&node).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structure);
    assert_eq!(
        err.to_string(),
        "field `port`: expected an unsigned integer, found string"
    );
}

#[test]
fn records_need_keyed_nodes() {
    let err = Client::unpack::<Tree>(&Node::Seq(Vec::new())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structure);
    assert!(err.to_string().ends_with("expects a keyed structure, found sequence"));
}

#[test]
fn null_free_formats_omit_absent_members() {
    let client = Client {
        address: String::from("::1"),
        port: 1,
        mode: Mode::Internal,
        timeout: None,
        tags: Vec::new(),
    };

    let node = client.pack::<NullFree>().unwrap();
    assert_eq!(NullFree::record_field(&node, "timeout"), None);
    assert_eq!(Client::unpack::<NullFree>(&node).unwrap(), client);

    let node = client.pack::<Tree>().unwrap();
    assert_eq!(Tree::record_field(&node, "timeout"), Some(&Node::Null));
}

#[test]
fn renamed_and_raw_fields() {
    assert_eq!(
        Renamed::schema().field_names().collect::<Vec<_>>(),
        ["type", "ref"]
    );

    let value = Renamed {
        kind: String::from("a"),
        r#ref: 3,
    };
    let node = value.pack::<Tree>().unwrap();
    assert_eq!(node, record(vec![("type", text("a")), ("ref", Node::Int(3))]));
    assert_eq!(Renamed::unpack::<Tree>(&node).unwrap(), value);
}

#[test]
fn generic_records_have_one_schema_per_instance() {
    let text_schema = Labeled::<String>::schema();
    let int_schema = Labeled::<i32>::schema();

    assert!(!core::ptr::eq(text_schema, int_schema));
    assert!(core::ptr::eq(int_schema, Labeled::<i32>::schema()));
    assert_eq!(int_schema.field("value").unwrap().type_name(), "i32");

    let value = Labeled {
        label: String::from("answer"),
        value: 42_i32,
    };
    let node = value.pack::<Tree>().unwrap();
    assert_eq!(Labeled::<i32>::unpack::<Tree>(&node).unwrap(), value);
}

// -----------------------------------------------------------------------------
// Enumerations

#[test]
fn enumerations_use_their_names() {
    assert_eq!(Mode::Internal.pack::<Tree>().unwrap(), text("Internal"));
    assert_eq!(Mode::unpack::<Tree>(&text("External")).unwrap(), Mode::External);

    let err = Mode::unpack::<Tree>(&text("internal")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownEnumName);

    let err = Mode::unpack::<Tree>(&Node::Int(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structure);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Partial {
    Listed,
    Unlisted,
}

impl crate::Enumeration for Partial {
    const DESCRIPTORS: &'static [crate::EnumDescriptor<Self>] =
        &[crate::EnumDescriptor::new("Listed", Self::Listed)];
}

#[test]
fn enumerator_without_descriptor_is_a_logic_error() {
    assert_eq!(crate::dispatch::pack_enum::<Tree, _>(&Partial::Listed).unwrap(), text("Listed"));

    let err = crate::dispatch::pack_enum::<Tree, _>(&Partial::Unlisted).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Logic);

    let err = crate::dispatch::unpack_enum::<Tree, Partial>(&text("Unlisted")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownEnumName);
}

// -----------------------------------------------------------------------------
// Variants

#[test]
fn variants_try_alternatives_in_order() {
    assert_eq!(Number::ALTERNATIVES, ["Int", "Seq", "Map"]);

    let empty_seq = Node::Seq(Vec::new());
    let empty_map = Node::Map(Vec::new());

    assert_eq!(Number::unpack::<Tree>(&Node::Int(4)).unwrap(), Number::Int(4));
    assert_eq!(Number::unpack::<Tree>(&empty_seq).unwrap(), Number::Seq(Vec::new()));
    assert_eq!(Number::unpack::<Tree>(&empty_map).unwrap(), Number::Map(BTreeMap::new()));

    assert_eq!(Reordered::unpack::<Tree>(&Node::Int(4)).unwrap(), Reordered::Int(4));
    assert_eq!(Reordered::unpack::<Tree>(&empty_seq).unwrap(), Reordered::Seq(Vec::new()));
}

#[test]
fn variant_without_match() {
    let err = Number::unpack::<Tree>(&text("four")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::VariantNoMatch);

    let Error::VariantNoMatch { failures, .. } = err else {
        panic!("expected a variant error");
    };
    let names: Vec<_> = failures.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["Int", "Seq", "Map"]);
}

#[test]
fn variants_pack_the_held_alternative() {
    let node = Number::Seq(vec![1, 2]).pack::<Tree>().unwrap();
    assert_eq!(node, Node::Seq(vec![Node::Int(1), Node::Int(2)]));
}

// -----------------------------------------------------------------------------
// Newtypes & leaves

#[test]
fn newtypes_are_transparent() {
    assert_eq!(Port(80).pack::<Tree>().unwrap(), Node::Int(80));
    assert_eq!(Port::unpack::<Tree>(&Node::Int(80)).unwrap(), Port(80));
    assert_eq!(<Port as Unpack>::KIND, crate::Kind::Leaf);
}

#[test]
fn narrowing_is_range_checked() {
    assert_eq!(i8::unpack::<Tree>(&Node::Int(-128)).unwrap(), -128);
    assert_eq!(
        i8::unpack::<Tree>(&Node::Int(128)).unwrap_err().kind(),
        ErrorKind::Structure
    );
    assert_eq!(
        u64::MAX.pack::<Tree>().unwrap_err().kind(),
        ErrorKind::Structure
    );
}

#[test]
fn chars_are_single_character_strings() {
    assert_eq!('é'.pack::<Tree>().unwrap(), text("é"));
    assert_eq!(char::unpack::<Tree>(&text("x")).unwrap(), 'x');
    assert!(char::unpack::<Tree>(&text("xy")).is_err());
    assert!(char::unpack::<Tree>(&text("")).is_err());
}

#[test]
fn options_round_trip_null() {
    let none: Option<Vec<u8>> = None;
    assert_eq!(none.pack::<Tree>().unwrap(), Node::Null);
    assert_eq!(Option::<Vec<u8>>::unpack::<Tree>(&Node::Null).unwrap(), None);
    assert_eq!(
        Option::<u8>::unpack::<Tree>(&Node::Int(3)).unwrap(),
        Some(3)
    );
}

// -----------------------------------------------------------------------------
// Top-level API

#[test]
fn api_errors_carry_their_phase() {
    let err = crate::from_string::<Tree, Client>("anything").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(
        err.to_string(),
        "vc_schema: on parsing string: malformed input: trees have no text form"
    );

    let err = crate::to_string::<Tree, _>(&u64::MAX).unwrap_err();
    assert_eq!(err.phase(), crate::Phase::EmittingToString);

    let err = crate::from_file::<Tree, Client>("/definitely/not/here.tree").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert!(err.to_string().starts_with("vc_schema: on parsing file: file not found: "));

    let path = std::env::temp_dir().join(format!("vc_schema_{}_client.tree", std::process::id()));
    std::fs::write(&path, "anything").unwrap();
    let err = crate::from_file::<Tree, Client>(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.phase(), crate::Phase::ParsingString);

    assert_eq!(crate::to_string::<Tree, _>(&Port(1)).unwrap(), "Int(1)");
}

#[test]
fn unset_members_are_rejected_by_backends() {
    let err = Tree::pack_record(vec![Member::unset("port")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Logic);
}
