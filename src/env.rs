//! The two lookup tables resolution reads from.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ast::Node;
use crate::value::Value;

/// Name lookups an evaluator's scope must answer. Resolution only reads.
pub trait Environment {
    type Operator;

    fn lookup_variable(&self, name: &str) -> Option<&Value>;
    fn lookup_operator(&self, name: &str) -> Option<&Self::Operator>;
}

/// A user-defined operator: parameter names and an unevaluated body.
#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub params: Vec<String>,
    pub body: Arc<Node>,
}

/// Map-backed environment with unique keys in each namespace.
#[derive(Debug, Default)]
pub struct Env {
    vars: HashMap<String, Value>,
    ops: HashMap<String, Method>,
}

impl Env {
    pub fn new() -> Self {
        Env::default()
    }

    /// Binds `name`, returning the value it replaced.
    pub fn bind<S: Into<String>>(&mut self, name: S, value: Value) -> Option<Value> {
        self.vars.insert(name.into(), value)
    }

    /// Defines an operator under its own name, returning the one it replaced.
    pub fn define(&mut self, method: Method) -> Option<Method> {
        self.ops.insert(method.name.clone(), method)
    }
}

impl Environment for Env {
    type Operator = Method;

    fn lookup_variable(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    fn lookup_operator(&self, name: &str) -> Option<&Method> {
        self.ops.get(name)
    }
}
