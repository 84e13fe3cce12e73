use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::coverage::{Addon, InsuranceType};
use crate::domain::vehicle::VehicleType;

/// Cities offered by the personal-information step's location list.
pub const LOCATIONS: [&str; 10] = [
    "Lusaka",
    "Ndola",
    "Kitwe",
    "Kabwe",
    "Chingola",
    "Mufulira",
    "Livingstone",
    "Luanshya",
    "Kasama",
    "Chipata",
];

/// The single mutable record accumulating all answers across the wizard.
///
/// Free-form fields stay `String`s (empty = unanswered) so each screen can
/// mutate the record field by field; concepts with a fixed vocabulary hold
/// their typed value once selected. Created empty at session start, read but
/// never mutated by the calculator and metadata generator, and dropped with
/// the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuoteForm {
    // Personal information
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub national_id: String,
    pub location: String,

    // Vehicle details
    pub make: String,
    pub model: String,
    pub year: String,
    pub engine_capacity: String,
    pub vehicle_type: Option<VehicleType>,
    pub vehicle_value: String,

    // Coverage options
    pub insurance_type: Option<InsuranceType>,
    pub addons: BTreeSet<Addon>,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the addon when absent, removes it when present.
    pub fn toggle_addon(&mut self, addon: Addon) {
        if !self.addons.insert(addon) {
            self.addons.remove(&addon);
        }
    }

    pub fn has_addon(&self, addon: Addon) -> bool {
        self.addons.contains(&addon)
    }
}
