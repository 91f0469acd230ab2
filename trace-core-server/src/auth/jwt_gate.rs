use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use trace_core_api::{Actor, AuthGate, Role, TraceError, TraceResult};
use tracing::{debug, warn};

/// JWT claims accepted by the server.
///
/// Tokens are issued elsewhere; this side only verifies them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: administrator or operator name.
    pub sub: String,
    /// `"admin"` or `"operator"`, any case.
    pub role: String,
    /// Issued at (unix timestamp).
    #[serde(default)]
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

/// [`AuthGate`] backed by HS256-signed JWTs.
#[derive(Clone)]
pub struct JwtAuthGate {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtAuthGate {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    fn decode_claims(&self, token: &str) -> TraceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Rejected bearer token");
                TraceError::Unauthenticated(format!("invalid token: {e}"))
            })
    }
}

#[async_trait]
impl AuthGate for JwtAuthGate {
    async fn authenticate(&self, credential: Option<&str>) -> TraceResult<Actor> {
        let token = credential
            .filter(|token| !token.is_empty())
            .ok_or_else(|| TraceError::Unauthenticated("missing bearer token".to_string()))?;

        let claims = self.decode_claims(token)?;
        let role = Role::parse(&claims.role).ok_or_else(|| {
            warn!(subject = %claims.sub, role = %claims.role, "Token carries an unknown role");
            TraceError::Forbidden(format!("unknown role '{}'", claims.role))
        })?;

        Ok(Actor::new(claims.sub, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "unit-test-secret";

    fn token(secret: &str, role: &str, exp_offset_secs: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "alice".to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + exp_offset_secs,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_admin_token_is_authorized() {
        let gate = JwtAuthGate::new(SECRET);
        let actor = gate
            .authorize_admin(Some(&token(SECRET, "admin", 600)))
            .await
            .unwrap();
        assert_eq!(actor, Actor::new("alice", Role::Admin));
    }

    #[tokio::test]
    async fn test_role_is_case_insensitive() {
        let gate = JwtAuthGate::new(SECRET);
        let actor = gate
            .authenticate(Some(&token(SECRET, "ADMIN", 600)))
            .await
            .unwrap();
        assert!(actor.is_admin());
    }

    #[tokio::test]
    async fn test_operator_is_forbidden_on_admin_check() {
        let gate = JwtAuthGate::new(SECRET);
        let credential = token(SECRET, "operator", 600);

        let actor = gate.authenticate(Some(&credential)).await.unwrap();
        assert_eq!(actor.role, Role::Operator);

        let err = gate.authorize_admin(Some(&credential)).await.unwrap_err();
        assert!(matches!(err, TraceError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_missing_or_empty_token() {
        let gate = JwtAuthGate::new(SECRET);
        for credential in [None, Some("")] {
            let err = gate.authenticate(credential).await.unwrap_err();
            assert!(matches!(err, TraceError::Unauthenticated(_)));
        }
    }

    #[tokio::test]
    async fn test_wrong_signature_is_unauthenticated() {
        let gate = JwtAuthGate::new(SECRET);
        let err = gate
            .authenticate(Some(&token("another-secret", "admin", 600)))
            .await
            .unwrap_err();
        assert!(matches!(err, TraceError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthenticated() {
        let gate = JwtAuthGate::new(SECRET);
        // Well past the default 60s leeway.
        let err = gate
            .authenticate(Some(&token(SECRET, "admin", -3600)))
            .await
            .unwrap_err();
        assert!(matches!(err, TraceError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthenticated() {
        let gate = JwtAuthGate::new(SECRET);
        let err = gate.authenticate(Some("not-a-jwt")).await.unwrap_err();
        assert!(matches!(err, TraceError::Unauthenticated(_)));
    }

    #[tokio::test]
    async fn test_unknown_role_is_forbidden() {
        let gate = JwtAuthGate::new(SECRET);
        let err = gate
            .authenticate(Some(&token(SECRET, "auditor", 600)))
            .await
            .unwrap_err();
        assert!(matches!(err, TraceError::Forbidden(_)));
    }
}
