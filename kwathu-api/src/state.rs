use std::sync::Arc;
use kwathu_booking::{PaymentDesk, PaymentPresenter};
use kwathu_catalog::Catalog;
use kwathu_core::identity::IdentityProvider;
use kwathu_core::KeyValueStore;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    /// Shared handoff store; handlers scope it per client
    pub store: Arc<dyn KeyValueStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub presenter: PaymentPresenter,
    pub payments: Arc<PaymentDesk>,
    pub auth: AuthConfig,
}
