use std::fmt;

/// Errors raised while building a method registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcRegistryError {
    /// A method with the same handler, name and parameter kinds already
    /// exists on the route.
    DuplicateMethod(String),
    /// The descriptor itself is malformed (empty name, repeated parameter
    /// names, required after optional).
    InvalidDescriptor(String),
}

impl fmt::Display for RpcRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcRegistryError::DuplicateMethod(msg) => write!(f, "Duplicate method: {}", msg),
            RpcRegistryError::InvalidDescriptor(msg) => write!(f, "Invalid descriptor: {}", msg),
        }
    }
}

impl std::error::Error for RpcRegistryError {}

/// Errors raised by [`crate::RpcPolicyAuthorizer`] while evaluating a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcAuthorizationError {
    UnknownPolicy(String),
}

impl fmt::Display for RpcAuthorizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcAuthorizationError::UnknownPolicy(name) => {
                write!(f, "No authorization policy named '{}' is registered", name)
            }
        }
    }
}

impl std::error::Error for RpcAuthorizationError {}
