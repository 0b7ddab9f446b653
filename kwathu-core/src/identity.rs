use async_trait::async_trait;
use kwathu_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreResult;

/// Login form contents. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: Masked<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
    pub email: Option<String>,
    pub role: String,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Check the credentials and resolve who is signing in
    async fn sign_in(&self, credentials: &Credentials) -> CoreResult<Identity>;
}

/// Accepts any credentials and hands back a guest identity.
pub struct GuestIdentityProvider;

#[async_trait]
impl IdentityProvider for GuestIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> CoreResult<Identity> {
        // No account store exists; every attempt succeeds.
        tracing::info!("Login attempt: {:?}", credentials);

        let email = Some(credentials.email.trim().to_string()).filter(|e| !e.is_empty());
        Ok(Identity {
            subject: format!("guest-{}", Uuid::new_v4()),
            email,
            role: "GUEST".to_string(),
        })
    }
}
