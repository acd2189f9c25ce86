use crate::registry::TypeRegistry;
use crate::value::{self, Value};

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Unrecognized(token: String) {
            display("Could not get type for token: {}", token)
        }
        Construction(err: value::Error) {
            from()
            display("{}", err)
            source(err)
        }
    }
}

/// Assigns a type to raw tokens by walking a registry in order.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    registry: TypeRegistry,
}

impl Classifier {
    pub fn new(registry: TypeRegistry) -> Self {
        Classifier { registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Builds the value for `token` from the first type that recognizes it.
    pub fn classify(&self, token: &str) -> Result<Value, Error> {
        match self.registry.iter().find(|ty| ty.recognizes(token)) {
            Some(ty) => {
                trace!(token, ty = %ty, "classified token");
                Ok(ty.construct(token)?)
            },
            None => {
                debug!(token, "no type recognizes token");
                Err(Error::Unrecognized(token.to_string()))
            },
        }
    }
}
