use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Usage classification collected on the vehicle step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleType {
    Private,
    Commercial,
}

impl VehicleType {
    pub const ALL: [VehicleType; 2] = [VehicleType::Private, VehicleType::Commercial];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Private => "Private",
            VehicleType::Commercial => "Commercial",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Makes offered by the vehicle step's selection list.
pub const CAR_MAKES: [&str; 16] = [
    "Toyota",
    "Honda",
    "Nissan",
    "Hyundai",
    "Kia",
    "Mercedes-Benz",
    "BMW",
    "Audi",
    "Volkswagen",
    "Ford",
    "Chevrolet",
    "Peugeot",
    "Mazda",
    "Lexus",
    "Infiniti",
    "Acura",
];

/// Model years offered for selection: the current year back 30 years,
/// newest first.
pub fn model_years() -> Vec<i32> {
    let current = Utc::now().year();
    (0..30).map(|offset| current - offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_years_span_three_decades_newest_first() {
        let years = model_years();
        assert_eq!(years.len(), 30);
        assert_eq!(years[0], years[29] + 29);
        assert!(years.windows(2).all(|pair| pair[0] == pair[1] + 1));
    }

    #[test]
    fn vehicle_type_label_round_trip() {
        for kind in VehicleType::ALL {
            assert_eq!(VehicleType::from_label(kind.label()), Some(kind));
        }
        assert_eq!(VehicleType::from_label("Taxi"), None);
    }
}
