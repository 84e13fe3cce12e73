//! Domain models for the quote wizard: the mutable form record and the
//! enumerated coverage and vehicle concepts it draws from.

pub mod coverage;
pub mod form;
pub mod vehicle;

pub use coverage::{Addon, InsuranceType};
pub use form::{QuoteForm, LOCATIONS};
pub use vehicle::{model_years, VehicleType, CAR_MAKES};
