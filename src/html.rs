use maud::{html, Markup};
use serde::Deserialize;
use serde_json::Value;

pub mod components;
pub mod pages;
mod wrappers;

/// An opaque user handed over by the identity layer.
///
/// None of its fields are read. Only whether it is truthy matters: `null`,
/// `false`, zero, the empty string, and empty arrays or objects are falsy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct User(Value);

impl User {
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }
}

impl From<Value> for User {
    fn from(value: Value) -> Self {
        User(value)
    }
}

/// The values available to a page at render time.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub user: Option<User>,
}

impl Context {
    pub fn new(user: Option<User>) -> Self {
        Context { user }
    }

    /// Whether the signed-in markup should be shown.
    pub fn signed_in(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_truthy)
    }
}
