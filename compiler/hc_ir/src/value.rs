//! Runtime values ("piths") checked against hints.
//!
//! Equality and representation follow the host language rather than Rust:
//! `py_eq` treats `True == 1` as equal, and `repr` renders `(1,)`, `'x'`
//! and `b'\x00'` the way the host prints them.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::{builtins, Class};

/// Instance of a user-defined class.
#[derive(Clone, Debug)]
pub struct Object {
    pub class: Class,
    /// Attribute values in definition order; used for repr and equality.
    pub fields: Vec<(String, Value)>,
}

impl Object {
    pub fn new(class: &Class) -> Self {
        Object {
            class: class.clone(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.push((name.into(), value));
        self
    }
}

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    FrozenSet(Vec<Value>),
    Dict(Vec<(Value, Value)>),
    Object(Object),
    /// A class used as a value (e.g. the argument of a `type[...]` parameter).
    Class(Class),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    /// Runtime class of this value.
    pub fn class(&self) -> Class {
        let b = builtins();
        match self {
            Value::None => b.none_type.clone(),
            Value::Bool(_) => b.bool_.clone(),
            Value::Int(_) => b.int.clone(),
            Value::Float(_) => b.float.clone(),
            Value::Str(_) => b.str_.clone(),
            Value::Bytes(_) => b.bytes.clone(),
            Value::List(_) => b.list.clone(),
            Value::Tuple(_) => b.tuple.clone(),
            Value::Set(_) => b.set.clone(),
            Value::FrozenSet(_) => b.frozenset.clone(),
            Value::Dict(_) => b.dict.clone(),
            Value::Object(object) => object.class.clone(),
            Value::Class(_) => b.type_.clone(),
        }
    }

    pub fn is_instance(&self, class: &Class) -> bool {
        self.class().is_subclass_of(class)
    }

    pub fn is_instance_any(&self, classes: &[Class]) -> bool {
        let own = self.class();
        classes.iter().any(|class| own.is_subclass_of(class))
    }

    /// Short type label used in messages (`int`, `list`, `pkg.Thing`).
    pub fn type_name(&self) -> String {
        self.class().display_name()
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Value::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Number of items, for sized values.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::Bytes(bytes) => Some(bytes.len()),
            Value::List(items)
            | Value::Tuple(items)
            | Value::Set(items)
            | Value::FrozenSet(items) => Some(items.len()),
            Value::Dict(pairs) => Some(pairs.len()),
            _ => None,
        }
    }

    /// Items of an indexable sequence, in index order.
    ///
    /// Strings yield one-character strings and bytes yield integers, as
    /// indexing them does in the host language.
    pub fn sequence_items(&self) -> Option<Cow<'_, [Value]>> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(Cow::Borrowed(items)),
            Value::Str(s) => Some(Cow::Owned(
                s.chars().map(|c| Value::Str(c.to_string())).collect(),
            )),
            Value::Bytes(bytes) => Some(Cow::Owned(
                bytes.iter().map(|&byte| Value::Int(i64::from(byte))).collect(),
            )),
            _ => None,
        }
    }

    /// Host-language equality.
    ///
    /// Numbers compare by value across `bool`, `int` and `float`; lists never
    /// equal tuples; sets compare without regard to order; classes compare by
    /// identity.
    pub fn py_eq(&self, other: &Value) -> bool {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return match (a, b) {
                (Number::Int(a), Number::Int(b)) => a == b,
                (a, b) => a.as_f64() == b.as_f64(),
            };
        }
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.py_eq(y))
            }
            (Value::Set(a) | Value::FrozenSet(a), Value::Set(b) | Value::FrozenSet(b)) => {
                a.len() == b.len() && a.iter().all(|x| b.iter().any(|y| x.py_eq(y)))
            }
            (Value::Dict(a), Value::Dict(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter()
                            .any(|(other_key, other_value)| {
                                key.py_eq(other_key) && value.py_eq(other_value)
                            })
                    })
            }
            (Value::Object(a), Value::Object(b)) => {
                a.class == b.class
                    && a.fields.len() == b.fields.len()
                    && a.fields
                        .iter()
                        .zip(&b.fields)
                        .all(|((name_a, a), (name_b, b))| name_a == name_b && a.py_eq(b))
            }
            (Value::Class(a), Value::Class(b)) => a == b,
            _ => false,
        }
    }

    fn as_number(&self) -> Option<Number> {
        match *self {
            Value::Bool(b) => Some(Number::Int(i64::from(b))),
            Value::Int(i) => Some(Number::Int(i)),
            Value::Float(f) => Some(Number::Float(f)),
            _ => None,
        }
    }

    /// Host-language representation.
    pub fn repr(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_repr(&mut out);
        out
    }

    fn write_repr(&self, out: &mut String) -> fmt::Result {
        match self {
            Value::None => out.push_str("None"),
            Value::Bool(true) => out.push_str("True"),
            Value::Bool(false) => out.push_str("False"),
            Value::Int(i) => write!(out, "{i}")?,
            Value::Float(f) => write_float(out, *f)?,
            Value::Str(s) => write_str_repr(out, s),
            Value::Bytes(bytes) => write_bytes_repr(out, bytes)?,
            Value::List(items) => write_items(out, "[", items, "]")?,
            Value::Tuple(items) if items.len() == 1 => {
                out.push('(');
                items[0].write_repr(out)?;
                out.push_str(",)");
            }
            Value::Tuple(items) => write_items(out, "(", items, ")")?,
            Value::Set(items) if items.is_empty() => out.push_str("set()"),
            Value::Set(items) => write_items(out, "{", items, "}")?,
            Value::FrozenSet(items) if items.is_empty() => out.push_str("frozenset()"),
            Value::FrozenSet(items) => write_items(out, "frozenset({", items, "})")?,
            Value::Dict(pairs) => {
                out.push('{');
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    key.write_repr(out)?;
                    out.push_str(": ");
                    value.write_repr(out)?;
                }
                out.push('}');
            }
            Value::Object(object) if object.fields.is_empty() => {
                write!(out, "<{}.{} object>", object.class.module(), object.class.qualname())?;
            }
            Value::Object(object) => {
                write!(out, "{}(", object.class.qualname())?;
                for (i, (name, value)) in object.fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write!(out, "{name}=")?;
                    value.write_repr(out)?;
                }
                out.push(')');
            }
            Value::Class(class) => out.push_str(&class.repr()),
        }
        Ok(())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

fn write_items(out: &mut String, open: &str, items: &[Value], close: &str) -> fmt::Result {
    out.push_str(open);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.write_repr(out)?;
    }
    out.push_str(close);
    Ok(())
}

fn write_float(out: &mut String, f: f64) -> fmt::Result {
    if f.is_nan() {
        out.push_str("nan");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "inf" } else { "-inf" });
    } else if f.fract() == 0.0 && f.abs() < 1e16 {
        write!(out, "{f:.1}")?;
    } else {
        write!(out, "{f}")?;
    }
    Ok(())
}

fn write_str_repr(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

fn write_bytes_repr(out: &mut String, bytes: &[u8]) -> fmt::Result {
    out.push_str("b'");
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(char::from(byte)),
            _ => write!(out, "\\x{byte:02x}")?,
        }
    }
    out.push('\'');
    Ok(())
}
