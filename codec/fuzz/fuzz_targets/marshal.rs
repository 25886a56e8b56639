#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mathematica_codec::{marshal_cfg, Config, Error, Exponent, Sink, Write};
use std::collections::BTreeMap;

const MAX_DEPTH: usize = 32;

#[derive(Arbitrary, Debug)]
enum Node {
    Bool(bool),
    I64(i64),
    U128(u128),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    Bytes(Vec<u8>),
    Absent,
    Map(BTreeMap<u8, u8>),
    List(Vec<Node>),
    Record(Vec<(String, Node)>),
}

impl Write for Node {
    fn write(&self, sink: &mut Sink) -> Result<(), Error> {
        match self {
            Node::Bool(v) => v.write(sink),
            Node::I64(v) => v.write(sink),
            Node::U128(v) => v.write(sink),
            Node::F32(v) => v.write(sink),
            Node::F64(v) => v.write(sink),
            Node::Char(v) => v.write(sink),
            Node::Str(v) => v.write(sink),
            Node::Bytes(v) => v.write(sink),
            Node::Absent => None::<u8>.write(sink),
            Node::Map(v) => v.write(sink),
            Node::List(v) => v.write(sink),
            Node::Record(members) => {
                let mut record = sink.record()?;
                for (name, value) in members {
                    record.member(name, value)?;
                }
                record.end();
                Ok(())
            }
        }
    }
}

impl Node {
    fn encodable(&self) -> bool {
        match self {
            Node::Absent | Node::Map(_) => false,
            Node::List(items) => items.iter().all(Node::encodable),
            Node::Record(members) => members.iter().all(|(_, value)| value.encodable()),
            _ => true,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Bytes(_) => 1,
            Node::List(items) => 1 + items.iter().map(Node::depth).max().unwrap_or(0),
            Node::Record(members) => {
                1 + members
                    .iter()
                    .map(|(_, value)| value.depth())
                    .max()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }
}

// Checks that brackets outside string literals are balanced and properly nested.
fn assert_well_formed(encoded: &str) {
    let mut stack = Vec::new();
    let mut chars = encoded.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => loop {
                match chars.next().expect("unterminated string") {
                    '\\' => {
                        chars.next().expect("dangling escape");
                    }
                    '"' => break,
                    c => assert!(!c.is_control(), "unescaped control character"),
                }
            },
            '{' => stack.push('}'),
            '<' if chars.peek() == Some(&'|') => {
                chars.next();
                stack.push('>');
            }
            '}' => assert_eq!(stack.pop(), Some('}')),
            '|' if chars.peek() == Some(&'>') => {
                chars.next();
                assert_eq!(stack.pop(), Some('>'));
            }
            _ => {}
        }
    }
    assert!(stack.is_empty(), "unclosed delimiter");
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    node: Node,
    plain: bool,
}

fn fuzz(input: FuzzInput) {
    let cfg = Config {
        exponent: if input.plain {
            Exponent::Never
        } else {
            Exponent::Wolfram
        },
        max_depth: Some(MAX_DEPTH),
    };
    let first = marshal_cfg(&input.node, &cfg);
    let second = marshal_cfg(&input.node, &cfg);
    match (first, second) {
        (Ok(first), Ok(second)) => {
            assert_eq!(first, second);
            assert!(input.node.encodable());
            let text = std::str::from_utf8(&first).expect("output is not UTF-8");
            assert_well_formed(text);
        }
        (Err(Error::Unencodable(_)), Err(Error::Unencodable(_))) => {
            assert!(!input.node.encodable());
        }
        (Err(Error::DepthExceeded(max)), Err(Error::DepthExceeded(_))) => {
            assert_eq!(max, MAX_DEPTH);
            assert!(input.node.depth() > MAX_DEPTH);
        }
        (first, second) => panic!("unexpected results: {first:?}, {second:?}"),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
