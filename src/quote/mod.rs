//! Immutable quote metadata, created once when the review step is finalized.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Addon, InsuranceType, QuoteForm, VehicleType};
use crate::errors::QuoteError;

/// Quotes are priced and persisted in Zambian Kwacha.
pub const QUOTE_CURRENCY: &str = "ZMK";
/// A generated quote stays valid for 30 days.
pub const VALIDITY_DAYS: i64 = 30;

const QUOTE_ID_PREFIX: &str = "MIQ-";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub national_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub year: String,
    pub engine_capacity: String,
    pub vehicle_type: VehicleType,
    pub vehicle_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageInfo {
    pub insurance_type: InsuranceType,
    pub addons: Vec<Addon>,
}

/// Snapshot persisted when the user finalizes the review step. Never mutated
/// or deleted once written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteMetadata {
    pub quote_id: String,
    pub timestamp: DateTime<Utc>,
    pub customer: CustomerInfo,
    pub vehicle: VehicleInfo,
    pub coverage: CoverageInfo,
    pub currency: String,
    pub valid_until: DateTime<Utc>,
}

impl QuoteMetadata {
    /// Builds a snapshot of the completed form, stamped with the current time.
    pub fn generate(form: &QuoteForm) -> Result<Self, QuoteError> {
        Self::generate_at(form, Utc::now())
    }

    /// Like [`Self::generate`] with an explicit creation instant; the quote id
    /// and validity window both derive from it.
    pub fn generate_at(form: &QuoteForm, now: DateTime<Utc>) -> Result<Self, QuoteError> {
        let vehicle_type = form
            .vehicle_type
            .ok_or_else(|| QuoteError::InvalidInput("vehicle type not selected".into()))?;
        let insurance_type = form
            .insurance_type
            .ok_or_else(|| QuoteError::InvalidInput("insurance type not selected".into()))?;

        Ok(Self {
            quote_id: quote_id_for(now),
            timestamp: now,
            customer: CustomerInfo {
                full_name: form.full_name.clone(),
                phone: form.phone.clone(),
                email: form.email.clone(),
                location: form.location.clone(),
                national_id: form.national_id.clone(),
            },
            vehicle: VehicleInfo {
                make: form.make.clone(),
                model: form.model.clone(),
                year: form.year.clone(),
                engine_capacity: form.engine_capacity.clone(),
                vehicle_type,
                vehicle_value: form.vehicle_value.clone(),
            },
            coverage: CoverageInfo {
                insurance_type,
                addons: form.addons.iter().copied().collect(),
            },
            currency: QUOTE_CURRENCY.to_string(),
            valid_until: now + Duration::days(VALIDITY_DAYS),
        })
    }

    /// Key under which this quote lives in the store.
    pub fn storage_key(&self) -> String {
        format!("quote_{}", self.quote_id)
    }
}

/// User-facing quote reference: `MIQ-` followed by the last six decimal
/// digits of the creation timestamp in milliseconds, unpadded. Two quotes
/// created within the same millisecond collide; the interactive flow makes
/// that window acceptable.
pub fn quote_id_for(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(6);
    format!("{}{}", QUOTE_ID_PREFIX, &millis[start..])
}
