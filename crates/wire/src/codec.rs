// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! XML-RPC codec: `methodCall` encoding and `methodResponse` decoding.
//!
//! Decoding first builds a small element tree with quick-xml, then walks it.
//! Text is collected raw (references included) and unescaped once per text
//! run, so it does not matter whether the reader reports entity references
//! inline or as separate events.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use quick_xml::escape::{escape, unescape};
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

use crate::{Method, Value};

/// Errors decoding an XML-RPC payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("malformed XML: {0}")]
    Xml(String),
    #[error("unexpected element <{found}>, expected {expected}")]
    UnexpectedElement { expected: &'static str, found: String },
    #[error("missing <{0}> element")]
    Missing(&'static str),
    #[error("invalid {kind} value '{text}'")]
    InvalidScalar { kind: &'static str, text: String },
    #[error("fault response is missing faultCode or faultString")]
    MalformedFault,
}

/// A decoded `methodResponse`
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    Fault { code: i64, message: String },
}

/// Encode a `methodCall` document.
pub fn encode_call(method: Method, params: &[Value]) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?><methodCall><methodName>");
    out.push_str(method.name());
    out.push_str("</methodName><params>");
    for param in params {
        out.push_str("<param>");
        write_value(&mut out, param);
        out.push_str("</param>");
    }
    out.push_str("</params></methodCall>");
    out
}

/// Encode a `methodResponse` document (what the server would send).
pub fn encode_response(response: &MethodResponse) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?><methodResponse>");
    match response {
        MethodResponse::Success(value) => {
            out.push_str("<params><param>");
            write_value(&mut out, value);
            out.push_str("</param></params>");
        }
        MethodResponse::Fault { code, message } => {
            let fault: Value = [
                ("faultCode", Value::Int(*code)),
                ("faultString", Value::String(message.clone())),
            ]
            .into_iter()
            .collect();
            out.push_str("<fault>");
            write_value(&mut out, &fault);
            out.push_str("</fault>");
        }
    }
    out.push_str("</methodResponse>");
    out
}

fn write_value(out: &mut String, value: &Value) {
    out.push_str("<value>");
    match value {
        Value::Int(i) if i32::try_from(*i).is_ok() => {
            out.push_str(&format!("<int>{}</int>", i));
        }
        Value::Int(i) => out.push_str(&format!("<i8>{}</i8>", i)),
        Value::Bool(b) => {
            out.push_str(if *b { "<boolean>1</boolean>" } else { "<boolean>0</boolean>" })
        }
        Value::String(s) => {
            out.push_str("<string>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</string>");
        }
        Value::Double(d) => out.push_str(&format!("<double>{}</double>", d)),
        Value::DateTime(s) => {
            out.push_str("<dateTime.iso8601>");
            out.push_str(&escape(s.as_str()));
            out.push_str("</dateTime.iso8601>");
        }
        Value::Base64(bytes) => {
            out.push_str("<base64>");
            out.push_str(&STANDARD.encode(bytes));
            out.push_str("</base64>");
        }
        Value::Array(items) => {
            out.push_str("<array><data>");
            for item in items {
                write_value(out, item);
            }
            out.push_str("</data></array>");
        }
        Value::Struct(members) => {
            out.push_str("<struct>");
            for (name, member) in members {
                out.push_str("<member><name>");
                out.push_str(&escape(name.as_str()));
                out.push_str("</name>");
                write_value(out, member);
                out.push_str("</member>");
            }
            out.push_str("</struct>");
        }
        Value::Nil => out.push_str("<nil/>"),
    }
    out.push_str("</value>");
}

/// Decode a `methodResponse` document.
pub fn decode_response(xml: &str) -> Result<MethodResponse, CodecError> {
    let root = parse_tree(xml)?;
    if root.name != "methodResponse" {
        return Err(CodecError::UnexpectedElement {
            expected: "<methodResponse>",
            found: root.name,
        });
    }
    let body = root.elements().next().ok_or(CodecError::Missing("params"))?;
    match body.name.as_str() {
        "params" => {
            let param = body.child("param")?;
            Ok(MethodResponse::Success(decode_value(param.child("value")?)?))
        }
        "fault" => decode_fault(body.child("value")?),
        other => Err(CodecError::UnexpectedElement {
            expected: "<params> or <fault>",
            found: other.to_string(),
        }),
    }
}

fn decode_fault(value: &Element) -> Result<MethodResponse, CodecError> {
    let fault = decode_value(value)?;
    let code = match fault.get("faultCode") {
        Some(Value::Int(code)) => *code,
        Some(Value::String(code)) => code.trim().parse().map_err(|_| CodecError::MalformedFault)?,
        _ => return Err(CodecError::MalformedFault),
    };
    let message = fault
        .get("faultString")
        .and_then(Value::as_str)
        .ok_or(CodecError::MalformedFault)?
        .to_string();
    Ok(MethodResponse::Fault { code, message })
}

fn decode_value(element: &Element) -> Result<Value, CodecError> {
    let Some(typed) = element.elements().next() else {
        // A bare <value> holds a string
        return Ok(Value::String(element.text()));
    };
    let text = typed.text();
    let invalid = |kind: &'static str| CodecError::InvalidScalar { kind, text: typed.text() };
    match typed.name.as_str() {
        "int" | "i4" | "i8" => text.trim().parse().map(Value::Int).map_err(|_| invalid("int")),
        "boolean" => match text.trim() {
            "1" | "true" => Ok(Value::Bool(true)),
            "0" | "false" => Ok(Value::Bool(false)),
            _ => Err(invalid("boolean")),
        },
        "string" => Ok(Value::String(text)),
        "double" => text.trim().parse().map(Value::Double).map_err(|_| invalid("double")),
        "dateTime.iso8601" => Ok(Value::DateTime(text.trim().to_string())),
        "base64" => {
            let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            STANDARD.decode(compact).map(Value::Base64).map_err(|_| invalid("base64"))
        }
        "nil" => Ok(Value::Nil),
        "array" => typed
            .child("data")?
            .elements()
            .map(|item| match item.name.as_str() {
                "value" => decode_value(item),
                other => Err(CodecError::UnexpectedElement {
                    expected: "<value>",
                    found: other.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        "struct" => {
            let mut members = BTreeMap::new();
            for member in typed.elements() {
                if member.name != "member" {
                    return Err(CodecError::UnexpectedElement {
                        expected: "<member>",
                        found: member.name.clone(),
                    });
                }
                let name = member.child("name")?.text();
                members.insert(name, decode_value(member.child("value")?)?);
            }
            Ok(Value::Struct(members))
        }
        other => Err(CodecError::UnexpectedElement {
            expected: "a value type",
            found: other.to_string(),
        }),
    }
}

#[derive(Debug)]
struct Element {
    name: String,
    children: Vec<Node>,
}

#[derive(Debug)]
enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    fn new(name: String) -> Self {
        Self { name, children: Vec::new() }
    }

    fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    fn child(&self, name: &'static str) -> Result<&Element, CodecError> {
        self.elements().find(|e| e.name == name).ok_or(CodecError::Missing(name))
    }

    fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

fn parse_tree(xml: &str) -> Result<Element, CodecError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut raw_text = String::new();

    loop {
        let event = reader.read_event().map_err(|e| CodecError::Xml(e.to_string()))?;
        match event {
            Event::Start(start) => {
                flush_text(&mut stack, &mut raw_text)?;
                stack.push(Element::new(utf8(start.name().as_ref())?.to_string()));
            }
            Event::Empty(start) => {
                flush_text(&mut stack, &mut raw_text)?;
                let element = Element::new(utf8(start.name().as_ref())?.to_string());
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                flush_text(&mut stack, &mut raw_text)?;
                let element =
                    stack.pop().ok_or_else(|| CodecError::Xml("unbalanced end tag".into()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => raw_text.push_str(utf8(&text)?),
            Event::CData(cdata) => raw_text.push_str(&escape(utf8(&cdata)?)),
            Event::GeneralRef(reference) => {
                raw_text.push('&');
                raw_text.push_str(utf8(&reference)?);
                raw_text.push(';');
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(CodecError::Xml("unexpected end of document".into()));
    }
    root.ok_or(CodecError::Missing("methodResponse"))
}

fn flush_text(stack: &mut [Element], raw_text: &mut String) -> Result<(), CodecError> {
    if raw_text.is_empty() {
        return Ok(());
    }
    let raw = std::mem::take(raw_text);
    // Whitespace between top-level markup has no parent to land in
    if let Some(parent) = stack.last_mut() {
        let text = unescape(&raw).map_err(|e| CodecError::Xml(e.to_string()))?;
        parent.children.push(Node::Text(text.into_owned()));
    }
    Ok(())
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), CodecError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(CodecError::Xml("multiple root elements".into())),
    }
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<&str, CodecError> {
    std::str::from_utf8(bytes).map_err(|e| CodecError::Xml(e.to_string()))
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
