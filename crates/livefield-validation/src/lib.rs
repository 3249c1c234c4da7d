//! Livefield Validation
//!
//! Validators used by livefield forms. Every validator follows the same
//! contract: `Ok(())` when the value is acceptable, `Err(message)` with a
//! user-facing message otherwise. Empty input is accepted by the domain
//! validators; required-ness is decided by the form, not here.

pub mod email;
pub mod numeric;
pub mod phone;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use phone::*;
pub use string::*;
