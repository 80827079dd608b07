use crate::{
    RpcAuthorizeRequirement, RpcParamDescriptor, RpcParamKind, error::RpcRegistryError,
    method_key,
};
use std::collections::BTreeSet;
use std::fmt;

/// Immutable metadata for one callable method.
///
/// Built once at registration and shared (behind an `Arc`) by every request
/// that resolves to it. Holds no per-call state.
///
/// ```rust
/// use jrouter_rpc_service::{RpcAuthorizeRequirement, RpcMethodDescriptor, RpcParamKind};
///
/// let descriptor = RpcMethodDescriptor::new("Math", "add")
///     .param("a", RpcParamKind::Integer)
///     .param("b", RpcParamKind::Integer)
///     .optional_param("c", RpcParamKind::Integer)
///     .authorize(RpcAuthorizeRequirement::roles(["calculator"]));
///
/// assert_eq!(descriptor.required_param_count(), 2);
/// assert_eq!(descriptor.to_string(), "Math.add(a, b, c?)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcMethodDescriptor {
    handler_type: String,
    name: String,
    match_name: String,
    key: u64,
    params: Vec<RpcParamDescriptor>,
    authorization: BTreeSet<RpcAuthorizeRequirement>,
    allow_anonymous: bool,
}

impl RpcMethodDescriptor {
    pub fn new(handler_type: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            handler_type: handler_type.into(),
            match_name: name.to_lowercase(),
            key: method_key(&name),
            name,
            params: Vec::new(),
            authorization: BTreeSet::new(),
            allow_anonymous: false,
        }
    }

    /// Appends a required parameter.
    pub fn param(self, name: impl Into<String>, kind: RpcParamKind) -> Self {
        self.push_param(name.into(), kind, false)
    }

    /// Appends an optional parameter. Optional parameters must trail the
    /// required ones; [`Self::validate`] rejects any other order.
    pub fn optional_param(self, name: impl Into<String>, kind: RpcParamKind) -> Self {
        self.push_param(name.into(), kind, true)
    }

    fn push_param(mut self, name: String, kind: RpcParamKind, optional: bool) -> Self {
        let position = self.params.len();
        self.params
            .push(RpcParamDescriptor::new(name, position, kind, optional));
        self
    }

    /// Adds an authorization requirement. Requirements form a set; adding the
    /// same one twice has no effect.
    pub fn authorize(mut self, requirement: RpcAuthorizeRequirement) -> Self {
        self.authorization.insert(requirement);
        self
    }

    /// Admits every caller, even when requirements are present.
    pub fn allow_anonymous(mut self) -> Self {
        self.allow_anonymous = true;
        self
    }

    pub fn handler_type(&self) -> &str {
        &self.handler_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn params(&self) -> &[RpcParamDescriptor] {
        &self.params
    }

    pub fn authorization(&self) -> &BTreeSet<RpcAuthorizeRequirement> {
        &self.authorization
    }

    pub fn allows_anonymous(&self) -> bool {
        self.allow_anonymous
    }

    pub fn required_param_count(&self) -> usize {
        self.params.iter().filter(|p| !p.is_optional()).count()
    }

    /// Compares against a request method name that the caller has already
    /// lowercased and keyed with [`method_key`].
    pub fn matches_name(&self, lowercase_name: &str, key: u64) -> bool {
        self.key == key && self.match_name == lowercase_name
    }

    /// Two descriptors share a signature when they belong to the same handler,
    /// carry the same name and declare the same parameter kinds in order.
    /// Parameter names are not part of the signature.
    pub fn has_same_signature(&self, other: &RpcMethodDescriptor) -> bool {
        self.handler_type == other.handler_type
            && self.match_name == other.match_name
            && self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(other.params.iter())
                .all(|(a, b)| a.kind() == b.kind() && a.is_optional() == b.is_optional())
    }

    pub fn validate(&self) -> Result<(), RpcRegistryError> {
        if self.name.trim().is_empty() {
            return Err(RpcRegistryError::InvalidDescriptor(format!(
                "{}: method name is empty",
                self
            )));
        }

        let mut seen = BTreeSet::new();
        let mut saw_optional = false;
        for param in &self.params {
            if !seen.insert(param.name().to_lowercase()) {
                return Err(RpcRegistryError::InvalidDescriptor(format!(
                    "{}: parameter '{}' is declared more than once",
                    self,
                    param.name()
                )));
            }
            if param.is_optional() {
                saw_optional = true;
            } else if saw_optional {
                return Err(RpcRegistryError::InvalidDescriptor(format!(
                    "{}: required parameter '{}' follows an optional one",
                    self,
                    param.name()
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for RpcMethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.handler_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.name())?;
            if param.is_optional() {
                write!(f, "?")?;
            }
        }
        write!(f, ")")
    }
}
