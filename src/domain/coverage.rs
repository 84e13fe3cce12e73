use serde::{Deserialize, Serialize};

/// Primary insurance product selected on the coverage step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InsuranceType {
    ThirdParty,
    Comprehensive,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 2] = [InsuranceType::ThirdParty, InsuranceType::Comprehensive];

    pub fn label(&self) -> &'static str {
        match self {
            InsuranceType::ThirdParty => "Third Party",
            InsuranceType::Comprehensive => "Comprehensive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InsuranceType::ThirdParty => "Legal minimum coverage for third-party damages",
            InsuranceType::Comprehensive => "Comprehensive coverage for your vehicle and third-party",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Optional supplementary coverage with a fixed annual cost.
///
/// The catalog is closed: exactly these five identifiers exist, and a form
/// stores them in a set, so duplicates are impossible by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Addon {
    Roadside,
    Theft,
    Windscreen,
    Flood,
    Enhanced,
}

impl Addon {
    pub const CATALOG: [Addon; 5] = [
        Addon::Roadside,
        Addon::Theft,
        Addon::Windscreen,
        Addon::Flood,
        Addon::Enhanced,
    ];

    /// Stable identifier used in persisted records and lookups.
    pub fn id(&self) -> &'static str {
        match self {
            Addon::Roadside => "roadside",
            Addon::Theft => "theft",
            Addon::Windscreen => "windscreen",
            Addon::Flood => "flood",
            Addon::Enhanced => "enhanced",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Addon::Roadside => "Roadside Assistance",
            Addon::Theft => "Theft Protection",
            Addon::Windscreen => "Windscreen Protection",
            Addon::Flood => "Flood & Natural Disaster",
            Addon::Enhanced => "Enhanced Third Party",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Addon::Roadside => "24/7 emergency roadside support, towing, and breakdown services",
            Addon::Theft => "Protection against vehicle theft and attempted theft damage",
            Addon::Windscreen => "Repair or replacement of damaged windscreens and windows",
            Addon::Flood => "Coverage for flood, storm, and other natural disaster damage",
            Addon::Enhanced => "Raised third-party liability limits beyond the legal minimum",
        }
    }

    /// Fixed annual cost in whole currency units.
    pub fn annual_cost(&self) -> f64 {
        match self {
            Addon::Roadside => 1000.0,
            Addon::Theft => 1750.0,
            Addon::Windscreen => 700.0,
            Addon::Flood => 1400.0,
            Addon::Enhanced => 850.0,
        }
    }

    /// Resolves a raw identifier; unknown identifiers resolve to nothing and
    /// therefore contribute nothing downstream.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::CATALOG
            .into_iter()
            .find(|candidate| candidate.id() == id.trim().to_ascii_lowercase())
    }
}
