//! Literal classification and value coercion for the lambda expression
//! language.
//!
//! Raw tokens become typed [`Value`]s through a [`Classifier`]; variable
//! references are looked up with [`resolve`]; operands are aligned with
//! [`Value::convert`] or [`value::unify`] before an operator combines them.

extern crate num;
#[macro_use] extern crate quick_error;
#[macro_use] extern crate tracing;

pub mod ast;
pub mod classifier;
pub mod env;
mod number;
pub mod registry;
pub mod resolve;
pub mod value;

use std::sync::Arc;

pub use crate::ast::Node;
pub use crate::classifier::Classifier;
pub use crate::env::{Env, Environment, Method};
pub use crate::registry::TypeRegistry;
pub use crate::value::{Value, ValueType};

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Classify(err: classifier::Error) {
            from()
            display("{}", err)
            source(err)
        }
        Registry(err: registry::Error) {
            from()
            display("{}", err)
            source(err)
        }
        Value(err: value::Error) {
            from()
            display("{}", err)
            source(err)
        }
        Resolve(err: resolve::Error) {
            from()
            display("{}", err)
            source(err)
        }
    }
}

/// Classifies `token` with the builtin precedence.
pub fn classify(token: &str) -> Result<Value, Error> {
    Ok(Classifier::default().classify(token)?)
}

/// Resolves a variable reference against `env`.
pub fn resolve<E: Environment>(value: &Value, env: &E) -> Result<Value, Error> {
    Ok(resolve::resolve(value, env)?)
}

/// Captures the arguments of `parent` as an unevaluated value.
pub fn wrap_subtree(parent: &Arc<Node>) -> Value {
    Value::wrap_subtree(parent)
}
