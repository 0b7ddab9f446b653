pub mod pii;
pub mod display;

pub use display::{format_display_date, format_mwk};
pub use pii::Masked;
