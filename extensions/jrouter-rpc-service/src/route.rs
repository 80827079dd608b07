use std::fmt;

/// A normalized route path.
///
/// Paths are compared case-insensitively and ignore surrounding slashes, so
/// `"/Admin/"` and `"admin"` name the same route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RpcPath(String);

impl RpcPath {
    /// Returns `None` for the base route (an empty path after trimming).
    pub fn parse(path: &str) -> Option<Self> {
        let normalized = path.trim().trim_matches('/').to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(RpcPath(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RpcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

/// Scopes which registered methods a request can see.
///
/// The default context is the base route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RpcRouteContext {
    path: Option<RpcPath>,
}

impl RpcRouteContext {
    pub fn base() -> Self {
        Self::default()
    }

    pub fn for_path(path: &str) -> Self {
        Self {
            path: RpcPath::parse(path),
        }
    }

    pub fn path(&self) -> Option<&RpcPath> {
        self.path.as_ref()
    }
}

impl fmt::Display for RpcRouteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}", path),
            None => write!(f, "/"),
        }
    }
}
