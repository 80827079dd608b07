use serde_json::Value;

/// The JSON shape a declared parameter accepts.
///
/// Used when disambiguating overloads by positional parameters. Binding to a
/// concrete Rust type happens later, inside the handler, through
/// [`crate::RpcParams`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RpcParamKind {
    Any,
    Bool,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl RpcParamKind {
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            RpcParamKind::Any => true,
            RpcParamKind::Bool => value.is_boolean(),
            RpcParamKind::Integer => value.is_i64() || value.is_u64(),
            RpcParamKind::Number => value.is_number(),
            RpcParamKind::String => value.is_string(),
            RpcParamKind::Array => value.is_array(),
            RpcParamKind::Object => value.is_object(),
        }
    }
}

/// One declared parameter of a method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RpcParamDescriptor {
    name: String,
    position: usize,
    kind: RpcParamKind,
    optional: bool,
}

impl RpcParamDescriptor {
    pub fn new(name: impl Into<String>, position: usize, kind: RpcParamKind, optional: bool) -> Self {
        Self {
            name: name.into(),
            position,
            kind,
            optional,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> RpcParamKind {
        self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// `null` is accepted for optional parameters and for `Any`.
    pub fn accepts(&self, value: &Value) -> bool {
        if value.is_null() {
            return self.optional || self.kind == RpcParamKind::Any;
        }
        self.kind.accepts(value)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
