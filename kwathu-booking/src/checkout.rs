use kwathu_core::payment::{PaymentDetails, PaymentGateway, PaymentMethod, PaymentOutcome, PaymentRequest};
use kwathu_core::KeyValueStore;
use kwathu_shared::Masked;
use std::sync::Arc;

use crate::presenter::PaymentPresenter;
use crate::BookingError;

/// Payment-method toggle and its fields. Fields for every method are kept
/// while switching; only the chosen method's fields are sent.
#[derive(Debug, Clone, Default)]
pub struct PaymentSelection {
    method: Option<PaymentMethod>,
    pub phone_number: Masked<String>,
    pub account_name: String,
    pub account_number: Masked<String>,
    pub bank_name: String,
}

impl PaymentSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choose(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    /// Input fields revealed by the current choice
    pub fn visible_fields(&self) -> &'static [&'static str] {
        match self.method {
            None => &[],
            Some(PaymentMethod::Mpamba) | Some(PaymentMethod::Airtel) => &["phoneNumber"],
            Some(PaymentMethod::Bank) => &["accountName", "accountNumber", "bankName"],
        }
    }

    pub fn details(&self) -> Option<PaymentDetails> {
        let details = match self.method? {
            PaymentMethod::Mpamba => PaymentDetails::Mpamba {
                phone_number: self.phone_number.clone(),
            },
            PaymentMethod::Airtel => PaymentDetails::Airtel {
                phone_number: self.phone_number.clone(),
            },
            PaymentMethod::Bank => PaymentDetails::Bank {
                account_name: self.account_name.clone(),
                account_number: self.account_number.clone(),
                bank_name: self.bank_name.clone(),
            },
        };
        Some(details)
    }
}

/// Routes the pay button to a gateway.
pub struct PaymentDesk {
    gateway: Arc<dyn PaymentGateway>,
    presenter: PaymentPresenter,
}

impl PaymentDesk {
    pub fn new(gateway: Arc<dyn PaymentGateway>, presenter: PaymentPresenter) -> Self {
        Self { gateway, presenter }
    }

    /// Submit the stored booking total through the chosen method. Field
    /// contents are passed along unchecked.
    pub async fn pay(
        &self,
        store: &dyn KeyValueStore,
        selection: &PaymentSelection,
    ) -> Result<PaymentOutcome, BookingError> {
        let summary = self
            .presenter
            .load_summary(store)
            .await?
            .ok_or(BookingError::NoBooking)?;
        let details = selection.details().ok_or(BookingError::NoPaymentMethod)?;

        let request = PaymentRequest {
            details,
            amount: summary.total,
            currency: "MWK".to_string(),
        };

        Ok(self.gateway.submit(&request).await?)
    }
}
