//! Deterministic premium calculation.
//!
//! Pure functions over the form: same input, same breakdown. Display
//! formatting lives in [`crate::currency`] and never feeds back into these
//! numbers.

use serde::Serialize;

use crate::domain::{InsuranceType, QuoteForm};

/// Annual base premium for third-party cover, in whole currency units.
pub const THIRD_PARTY_BASE: f64 = 2500.0;
/// Floor for comprehensive cover; the value-derived premium never undercuts it.
pub const COMPREHENSIVE_BASE: f64 = 8500.0;
/// Fraction of the declared vehicle value charged under comprehensive cover.
pub const VALUE_RATE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PremiumBreakdown {
    pub base_premium: f64,
    pub addon_total: f64,
    pub total: f64,
}

/// Computes the annual premium breakdown from the coverage answers.
///
/// With no insurance type selected the base premium is zero; callers gate on
/// the coverage validator before showing a quote, so that case only arises in
/// intermediate states.
pub fn calculate_premium(form: &QuoteForm) -> PremiumBreakdown {
    let base_premium = match form.insurance_type {
        Some(InsuranceType::ThirdParty) => THIRD_PARTY_BASE,
        Some(InsuranceType::Comprehensive) => {
            let value = parse_vehicle_value(&form.vehicle_value);
            if value > 0.0 {
                COMPREHENSIVE_BASE.max(value * VALUE_RATE)
            } else {
                COMPREHENSIVE_BASE
            }
        }
        None => 0.0,
    };

    let addon_total: f64 = form.addons.iter().map(|addon| addon.annual_cost()).sum();

    PremiumBreakdown {
        base_premium,
        addon_total,
        total: base_premium + addon_total,
    }
}

/// Parses a free-text vehicle value: thousand separators and `K` scale
/// suffixes are stripped, then the leading run of digits is taken. Anything
/// unparsable degrades to zero rather than failing, so a malformed value
/// simply prices as worthless.
pub fn parse_vehicle_value(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | 'K' | 'k'))
        .collect();
    let digits: String = cleaned
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<f64>().unwrap_or(0.0)
}
