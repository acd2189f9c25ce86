use crate::env::Environment;
use crate::value::{Value, ValueType};

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        UndefinedVariable(name: String) {
            display("Undefined variable: {}", name)
        }
        NotAReference(ty: ValueType) {
            display("Cannot resolve a {} value, only variables", ty)
        }
    }
}

/// Looks up a variable reference.
///
/// A bound variable yields its current value. A name that only denotes an
/// operator yields the reference itself, so the caller can dispatch on it.
pub fn resolve<E: Environment>(value: &Value, env: &E) -> Result<Value, Error> {
    let name = match value.var_name() {
        Some(name) => name,
        None => return Err(Error::NotAReference(value.value_type())),
    };

    if let Some(bound) = env.lookup_variable(name) {
        trace!(name, "resolved variable");
        return Ok(bound.clone());
    }
    if env.lookup_operator(name).is_some() {
        trace!(name, "name denotes an operator");
        return Ok(value.clone());
    }

    debug!(name, "undefined variable");
    Err(Error::UndefinedVariable(name.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::ast::Node;
    use crate::env::{Env, Method};
    use crate::value::{Value, ValueType};

    use super::{resolve, Error};

    fn env() -> Env {
        let mut env = Env::new();
        env.bind("x", Value::Int(5));
        env.define(Method {
            name: "+".to_string(),
            params: vec!["a".to_string(), "b".to_string()],
            body: Node::leaf("a"),
        });
        env
    }

    macro_rules! t {
        ($value: expr, $pat:pat, $result:expr) => ({
            match resolve(&$value, &env()) {
                $pat => $result,
                other => {
                    println!("ERROR {:?}", other);
                    assert!(false)
                },
            }
        })
    }

    #[test]
    fn test_bound_variable() {
        t!(Value::var("x"), Ok(Value::Int(5)), ());
    }

    #[test]
    fn test_operator_name() {
        t!(Value::var("+"), Ok(Value::Var(name)), assert_eq!(name, "+"));
    }

    #[test]
    fn test_variable_shadows_operator() {
        let mut env = env();
        env.bind("+", Value::Bool(true));
        assert_eq!(resolve(&Value::var("+"), &env).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_undefined() {
        t!(Value::var("y"), Err(Error::UndefinedVariable(name)), assert_eq!(name, "y"));
        let err = resolve(&Value::var("y"), &env()).unwrap_err();
        assert_eq!(err.to_string(), "Undefined variable: y");
    }

    #[test]
    fn test_not_a_reference() {
        t!(Value::Int(5), Err(Error::NotAReference(ValueType::Int)), ());
        t!(Value::string("x"), Err(Error::NotAReference(ValueType::String)), ());
        t!(Value::wrap_subtree(&Node::leaf("x")), Err(Error::NotAReference(ValueType::Ast)), ());
    }

    #[test]
    fn test_rebinding_is_observed() {
        let mut env = env();
        env.bind("x", Value::Float(0.5));
        assert_eq!(resolve(&Value::var("x"), &env).unwrap(), Value::Float(0.5));
    }
}
