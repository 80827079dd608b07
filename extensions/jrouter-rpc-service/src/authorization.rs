use crate::{RpcHandlerError, error::RpcAuthorizationError};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::{fmt, sync::Arc};

/// The caller identity an authorization decision is made against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpcPrincipal {
    name: Option<String>,
    authenticated: bool,
    roles: BTreeSet<String>,
    claims: BTreeMap<String, String>,
}

impl RpcPrincipal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            authenticated: true,
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    pub fn with_claim(mut self, claim: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.insert(claim.into(), value.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn claim(&self, claim: &str) -> Option<&str> {
        self.claims.get(claim).map(String::as_str)
    }
}

/// One authorization requirement attached to a method.
///
/// A requirement always demands an authenticated caller. It may additionally
/// name a policy and/or a set of roles, any one of which satisfies it.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RpcAuthorizeRequirement {
    policy: Option<String>,
    roles: Vec<String>,
}

impl RpcAuthorizeRequirement {
    /// Only requires an authenticated caller.
    pub fn authenticated() -> Self {
        Self::default()
    }

    pub fn policy(name: impl Into<String>) -> Self {
        Self {
            policy: Some(name.into()),
            roles: Vec::new(),
        }
    }

    pub fn roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        roles.sort();
        roles.dedup();
        Self {
            policy: None,
            roles,
        }
    }

    pub fn policy_name(&self) -> Option<&str> {
        self.policy.as_deref()
    }

    pub fn role_names(&self) -> &[String] {
        &self.roles
    }
}

/// All of a method's requirements folded into one policy.
///
/// Every named policy must pass and every role set must be matched by at
/// least one of the principal's roles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpcAuthorizationPolicy {
    policies: Vec<String>,
    role_sets: Vec<Vec<String>>,
}

impl RpcAuthorizationPolicy {
    pub fn combine<'a, I>(requirements: I) -> Self
    where
        I: IntoIterator<Item = &'a RpcAuthorizeRequirement>,
    {
        let mut combined = Self::default();
        for requirement in requirements {
            if let Some(policy) = requirement.policy_name() {
                if !combined.policies.iter().any(|p| p == policy) {
                    combined.policies.push(policy.to_string());
                }
            }
            if !requirement.role_names().is_empty() {
                combined.role_sets.push(requirement.role_names().to_vec());
            }
        }
        combined
    }

    pub fn policies(&self) -> &[String] {
        &self.policies
    }

    pub fn role_sets(&self) -> &[Vec<String>] {
        &self.role_sets
    }
}

/// The external authorization decision maker.
///
/// The endpoint consults it only for methods that carry requirements and do
/// not allow anonymous callers. Both steps may suspend; a failure from
/// either is reported as an internal error, not as a denial.
#[async_trait::async_trait]
pub trait RpcAuthorizer: Send + Sync {
    async fn combine(
        &self,
        requirements: &[RpcAuthorizeRequirement],
    ) -> Result<RpcAuthorizationPolicy, RpcHandlerError> {
        Ok(RpcAuthorizationPolicy::combine(requirements))
    }

    async fn evaluate(
        &self,
        principal: &RpcPrincipal,
        policy: &RpcAuthorizationPolicy,
    ) -> Result<bool, RpcHandlerError>;
}

pub type RpcPolicyCheck = Arc<dyn Fn(&RpcPrincipal) -> bool + Send + Sync>;

/// Default [`RpcAuthorizer`]: roles are checked directly against the
/// principal, and named policies against a table of registered checks.
///
/// Naming a policy that was never registered is an evaluation failure.
#[derive(Clone, Default)]
pub struct RpcPolicyAuthorizer {
    policies: HashMap<String, RpcPolicyCheck>,
}

impl RpcPolicyAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy<F>(mut self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&RpcPrincipal) -> bool + Send + Sync + 'static,
    {
        self.policies.insert(name.into(), Arc::new(check));
        self
    }
}

impl fmt::Debug for RpcPolicyAuthorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcPolicyAuthorizer")
            .field("policies", &self.policies.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[async_trait::async_trait]
impl RpcAuthorizer for RpcPolicyAuthorizer {
    async fn evaluate(
        &self,
        principal: &RpcPrincipal,
        policy: &RpcAuthorizationPolicy,
    ) -> Result<bool, RpcHandlerError> {
        if !principal.is_authenticated() {
            return Ok(false);
        }

        for roles in policy.role_sets() {
            if !roles.iter().any(|role| principal.has_role(role)) {
                return Ok(false);
            }
        }

        for name in policy.policies() {
            let check = self
                .policies
                .get(name)
                .ok_or_else(|| RpcAuthorizationError::UnknownPolicy(name.clone()))?;
            if !check(principal) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}
