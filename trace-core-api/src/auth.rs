use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{TraceError, TraceResult};

/// Role carried by an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Operator,
}

impl Role {
    /// Parses a role name case-insensitively (`"admin"`, `"ADMIN"`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("admin") {
            Some(Role::Admin)
        } else if value.eq_ignore_ascii_case("operator") {
            Some(Role::Operator)
        } else {
            None
        }
    }
}

/// The authenticated caller as seen by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub subject: String,
    pub role: Role,
}

impl Actor {
    pub fn new(subject: impl Into<String>, role: Role) -> Self {
        Self {
            subject: subject.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Capability that turns a bearer credential into an [`Actor`].
///
/// The core never verifies passwords or issues tokens; it only consumes this
/// contract. Public trace lookups never go through a gate at all.
#[async_trait]
pub trait AuthGate: Send + Sync {
    /// Verify the credential and resolve the caller.
    ///
    /// # Returns
    /// * `Ok(Actor)` - The caller behind a valid credential
    /// * `Err(TraceError::Unauthenticated)` - Missing or invalid credential
    async fn authenticate(&self, credential: Option<&str>) -> TraceResult<Actor>;

    /// Authenticate and require the `ADMIN` role.
    ///
    /// Every admin-only operation goes through this single check.
    async fn authorize_admin(&self, credential: Option<&str>) -> TraceResult<Actor> {
        let actor = self.authenticate(credential).await?;
        if actor.is_admin() {
            Ok(actor)
        } else {
            Err(TraceError::Forbidden(format!(
                "'{}' is not an administrator",
                actor.subject
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGate(Option<Actor>);

    #[async_trait]
    impl AuthGate for FixedGate {
        async fn authenticate(&self, credential: Option<&str>) -> TraceResult<Actor> {
            credential.ok_or_else(|| TraceError::Unauthenticated("missing credential".into()))?;
            self.0
                .clone()
                .ok_or_else(|| TraceError::Unauthenticated("invalid credential".into()))
        }
    }

    #[test]
    fn role_parsing_ignores_case() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("OPERATOR"), Some(Role::Operator));
        assert_eq!(Role::parse("root"), None);
    }

    #[tokio::test]
    async fn admin_passes_admin_check() {
        let gate = FixedGate(Some(Actor::new("alice", Role::Admin)));
        let actor = gate.authorize_admin(Some("token")).await.unwrap();
        assert_eq!(actor.subject, "alice");
    }

    #[tokio::test]
    async fn operator_is_forbidden() {
        let gate = FixedGate(Some(Actor::new("bob", Role::Operator)));
        let err = gate.authorize_admin(Some("token")).await.unwrap_err();
        assert!(matches!(err, TraceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn missing_credential_is_unauthenticated() {
        let gate = FixedGate(Some(Actor::new("alice", Role::Admin)));
        let err = gate.authorize_admin(None).await.unwrap_err();
        assert!(matches!(err, TraceError::Unauthenticated(_)));
    }
}
