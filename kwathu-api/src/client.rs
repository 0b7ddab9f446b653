use axum::{extract::FromRequestParts, http::request::Parts};
use kwathu_store::ClientStorage;
use std::convert::Infallible;

use crate::state::AppState;

pub const CLIENT_ID_HEADER: &str = "x-client-id";
const ANONYMOUS: &str = "anonymous";

/// Identifies whose local storage a request reads and writes.
///
/// Clients without the header all share the `anonymous` namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(pub String);

impl ClientId {
    pub fn storage(&self, state: &AppState) -> ClientStorage {
        ClientStorage::new(state.store.clone(), self.0.clone())
    }
}

impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(CLIENT_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(ANONYMOUS);

        Ok(ClientId(id.to_string()))
    }
}
