use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kwathu_shared::Masked;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::CoreResult;

/// Payment channels offered on the payment page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Mpamba,
    Airtel,
    Bank,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Mpamba => "TNM Mpamba",
            PaymentMethod::Airtel => "Airtel Money",
            PaymentMethod::Bank => "Bank Transfer",
        }
    }

    pub fn is_mobile_money(&self) -> bool {
        matches!(self, PaymentMethod::Mpamba | PaymentMethod::Airtel)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Details collected for one payment method. Nothing here is validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentDetails {
    Mpamba {
        #[serde(rename = "phoneNumber")]
        phone_number: Masked<String>,
    },
    Airtel {
        #[serde(rename = "phoneNumber")]
        phone_number: Masked<String>,
    },
    Bank {
        #[serde(rename = "accountName")]
        account_name: String,
        #[serde(rename = "accountNumber")]
        account_number: Masked<String>,
        #[serde(rename = "bankName", default)]
        bank_name: String,
    },
}

impl PaymentDetails {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentDetails::Mpamba { .. } => PaymentMethod::Mpamba,
            PaymentDetails::Airtel { .. } => PaymentMethod::Airtel,
            PaymentDetails::Bank { .. } => PaymentMethod::Bank,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub details: PaymentDetails,
    pub amount: u64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    NotProcessed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub status: PaymentStatus,
    pub method: PaymentMethod,
    pub received_at: DateTime<Utc>,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Hand a payment to the provider
    async fn submit(&self, request: &PaymentRequest) -> CoreResult<PaymentOutcome>;
}

/// Gateway that never moves money. Every submission is acknowledged as
/// `NotProcessed`.
pub struct NoopPaymentGateway;

#[async_trait]
impl PaymentGateway for NoopPaymentGateway {
    async fn submit(&self, request: &PaymentRequest) -> CoreResult<PaymentOutcome> {
        tracing::info!(
            "Payment via {} for {} {} not processed: no gateway configured",
            request.details.method(),
            request.amount,
            request.currency
        );

        Ok(PaymentOutcome {
            status: PaymentStatus::NotProcessed,
            method: request.details.method(),
            received_at: Utc::now(),
        })
    }
}
