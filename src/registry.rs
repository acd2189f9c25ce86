//! The ordered list of recognizers used for classification.
//!
//! Order is the whole ambiguity policy. `5` becomes an int rather than a
//! bigint or float only because `Int` comes first, and `true` becomes a bool
//! rather than a variable only because `Bool` precedes `Var`.

use std::borrow::Cow;

use crate::value::ValueType;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Empty {
            display("type registry is empty")
        }
        Duplicate(ty: ValueType) {
            display("type {} appears twice in the registry", ty)
        }
        Unclassifiable(ty: ValueType) {
            display("type {} cannot be built from a token", ty)
        }
    }
}

/// Most specific first.
pub const BUILTIN: &[ValueType] = &[
    ValueType::String,
    ValueType::Int,
    ValueType::BigInt,
    ValueType::Float,
    ValueType::Bool,
    ValueType::Var,
];

#[derive(Debug, Clone, PartialEq)]
pub struct TypeRegistry {
    order: Cow<'static, [ValueType]>,
}

impl TypeRegistry {
    pub fn builtin() -> Self {
        TypeRegistry {
            order: Cow::Borrowed(BUILTIN),
        }
    }

    /// A registry with a custom precedence. `Ast` is rejected since no token
    /// can ever become one.
    pub fn new(order: Vec<ValueType>) -> Result<Self, Error> {
        if order.is_empty() {
            return Err(Error::Empty);
        }
        for (i, &ty) in order.iter().enumerate() {
            if ty == ValueType::Ast {
                return Err(Error::Unclassifiable(ty));
            }
            if order[..i].contains(&ty) {
                return Err(Error::Duplicate(ty));
            }
        }
        Ok(TypeRegistry {
            order: Cow::Owned(order),
        })
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = ValueType> + 'a {
        self.order.iter().cloned()
    }

    pub fn contains(&self, ty: ValueType) -> bool {
        self.order.contains(&ty)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        TypeRegistry::builtin()
    }
}

#[cfg(test)]
mod tests {
    use crate::value::ValueType;

    use super::{Error, TypeRegistry, BUILTIN};

    #[test]
    fn test_builtin_order() {
        let order: Vec<ValueType> = TypeRegistry::builtin().iter().collect();
        assert_eq!(order, vec![
            ValueType::String,
            ValueType::Int,
            ValueType::BigInt,
            ValueType::Float,
            ValueType::Bool,
            ValueType::Var,
        ]);
        assert_eq!(TypeRegistry::default(), TypeRegistry::builtin());
    }

    #[test]
    fn test_builtin_excludes_ast() {
        assert!(!TypeRegistry::builtin().contains(ValueType::Ast));
        assert!(TypeRegistry::new(BUILTIN.to_vec()).is_ok());
    }

    #[test]
    fn test_rejects_invalid() {
        match TypeRegistry::new(vec![]) {
            Err(Error::Empty) => (),
            other => panic!("unexpected {:?}", other),
        }
        match TypeRegistry::new(vec![ValueType::Int, ValueType::Ast]) {
            Err(Error::Unclassifiable(ValueType::Ast)) => (),
            other => panic!("unexpected {:?}", other),
        }
        match TypeRegistry::new(vec![ValueType::Int, ValueType::Var, ValueType::Int]) {
            Err(Error::Duplicate(ValueType::Int)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
