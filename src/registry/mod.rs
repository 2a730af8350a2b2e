//! Type registry: name-to-descriptor resolution and result conversion.

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use rhai::Dynamic;
use serde::{Deserialize, Serialize};

/// Canonical name the greeting shape is registered under.
pub const GREETING_TYPE: &str = "scriptrun::registry::Greeting";

/// The message-carrying result shape scripts build as an object map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// Typed value produced by converting an engine result, also used for
/// the parameter bindings pushed into the evaluation scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Greeting(Greeting),
}

impl Value {
    pub fn to_dynamic(&self) -> Dynamic {
        match self {
            Value::Int(i) => Dynamic::from(*i),
            Value::Float(f) => Dynamic::from(*f),
            Value::Bool(b) => Dynamic::from(*b),
            Value::Str(s) => Dynamic::from(s.clone()),
            Value::Greeting(greeting) => {
                let mut map = rhai::Map::new();
                map.insert("message".into(), greeting.message.clone().into());
                Dynamic::from_map(map)
            }
        }
    }
}

/// Registry entry: canonical fully-qualified name, accepted aliases, and
/// the conversion from the engine's dynamic value.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    name: &'static str,
    aliases: &'static [&'static str],
    convert: fn(Dynamic) -> Result<Value>,
}

impl TypeDescriptor {
    pub const fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        convert: fn(Dynamic) -> Result<Value>,
    ) -> Self {
        Self {
            name,
            aliases,
            convert,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, name: &str) -> bool {
        self.aliases.iter().any(|alias| *alias == name)
    }

    pub fn convert(&self, value: Dynamic) -> Result<Value> {
        (self.convert)(value)
    }
}

/// Maps type-name strings to descriptors, populated at startup.
pub struct TypeRegistry {
    types: BTreeMap<&'static str, TypeDescriptor>,
}

impl TypeRegistry {
    /// Registry pre-populated with the built-in result types.
    pub fn builtin() -> Self {
        let mut registry = Self {
            types: BTreeMap::new(),
        };
        registry.register(TypeDescriptor::new(
            "i64",
            &["int", "integer", "core::primitive::i64"],
            convert_int,
        ));
        registry.register(TypeDescriptor::new(
            "f64",
            &["float", "core::primitive::f64"],
            convert_float,
        ));
        registry.register(TypeDescriptor::new(
            "bool",
            &["boolean", "core::primitive::bool"],
            convert_bool,
        ));
        registry.register(TypeDescriptor::new(
            "String",
            &["string", "str", "alloc::string::String", "std::string::String"],
            convert_string,
        ));
        registry.register(TypeDescriptor::new(
            GREETING_TYPE,
            &["Greeting", "greeting"],
            convert_greeting,
        ));
        registry
    }

    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name, descriptor);
    }

    /// Direct lookup by canonical name; on a miss, scan every registered
    /// descriptor's aliases before giving up.
    pub fn resolve(&self, name: &str) -> Result<&TypeDescriptor> {
        if let Some(descriptor) = self.types.get(name) {
            return Ok(descriptor);
        }
        self.types
            .values()
            .find(|descriptor| descriptor.matches(name))
            .ok_or_else(|| {
                let known: Vec<&str> = self.types.keys().copied().collect();
                anyhow!(
                    "type '{}' is not registered (known types: {})",
                    name,
                    known.join(", ")
                )
            })
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn mismatch(actual: &'static str, target: &str) -> anyhow::Error {
    anyhow!("cannot convert script result of type {} to {}", actual, target)
}

fn convert_int(value: Dynamic) -> Result<Value> {
    value
        .as_int()
        .map(Value::Int)
        .map_err(|actual| mismatch(actual, "i64"))
}

fn convert_float(value: Dynamic) -> Result<Value> {
    if let Ok(f) = value.as_float() {
        return Ok(Value::Float(f));
    }
    value
        .as_int()
        .map(|i| Value::Float(i as f64))
        .map_err(|actual| mismatch(actual, "f64"))
}

fn convert_bool(value: Dynamic) -> Result<Value> {
    value
        .as_bool()
        .map(Value::Bool)
        .map_err(|actual| mismatch(actual, "bool"))
}

fn convert_string(value: Dynamic) -> Result<Value> {
    value
        .into_immutable_string()
        .map(|s| Value::Str(s.to_string()))
        .map_err(|actual| mismatch(actual, "String"))
}

fn convert_greeting(value: Dynamic) -> Result<Value> {
    let actual = value.type_name();
    rhai::serde::from_dynamic::<Greeting>(&value)
        .map(Value::Greeting)
        .map_err(|err| anyhow!("cannot convert script result of type {} to {}: {}", actual, GREETING_TYPE, err))
}
