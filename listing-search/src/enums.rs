use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Bike,
    Van,
    Truck,
    Other,
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::Car => write!(f, "car"),
            VehicleType::Bike => write!(f, "bike"),
            VehicleType::Van => write!(f, "van"),
            VehicleType::Truck => write!(f, "truck"),
            VehicleType::Other => write!(f, "other"),
        }
    }
}

impl FromStr for VehicleType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(VehicleType::Car),
            "bike" | "motorbike" | "motorcycle" => Ok(VehicleType::Bike),
            "van" => Ok(VehicleType::Van),
            "truck" => Ok(VehicleType::Truck),
            "other" => Ok(VehicleType::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
    Lpg,
    Other,
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuelType::Petrol => write!(f, "petrol"),
            FuelType::Diesel => write!(f, "diesel"),
            FuelType::Electric => write!(f, "electric"),
            FuelType::Hybrid => write!(f, "hybrid"),
            FuelType::Lpg => write!(f, "lpg"),
            FuelType::Other => write!(f, "other"),
        }
    }
}

impl FromStr for FuelType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "petrol" | "gasoline" | "gas" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "electric" | "ev" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            "lpg" => Ok(FuelType::Lpg),
            "other" => Ok(FuelType::Other),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Transmission {
    Manual,
    Automatic,
    SemiAutomatic,
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transmission::Manual => write!(f, "manual"),
            Transmission::Automatic => write!(f, "automatic"),
            Transmission::SemiAutomatic => write!(f, "semi-automatic"),
        }
    }
}

impl FromStr for Transmission {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(Transmission::Manual),
            "automatic" | "auto" => Ok(Transmission::Automatic),
            "semi-automatic" | "semi_automatic" | "semiautomatic" | "semi-auto" => {
                Ok(Transmission::SemiAutomatic)
            }
            _ => Err(()),
        }
    }
}

/// Condition bucket derived from the model year, relative to the current year.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConditionBucket {
    New,
    Used,
}

impl ConditionBucket {
    /// Bucket for a model year: anything from last year onwards counts as new.
    pub fn for_year(year: i32, current_year: i32) -> Self {
        if year >= current_year.saturating_sub(1) {
            ConditionBucket::New
        } else {
            ConditionBucket::Used
        }
    }
}

impl std::fmt::Display for ConditionBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionBucket::New => write!(f, "new"),
            ConditionBucket::Used => write!(f, "used"),
        }
    }
}

impl FromStr for ConditionBucket {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" | "brand-new" | "brandnew" => Ok(ConditionBucket::New),
            "used" => Ok(ConditionBucket::Used),
            _ => Err(()),
        }
    }
}

/// Secondary ordering key, applied after promoted listings are moved to the front.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    #[serde(rename = "approvedAt")]
    ApprovalDate,
    #[serde(rename = "createdAt")]
    CreationDate,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "mileage")]
    Mileage,
    #[serde(rename = "isPromoted")]
    Promoted,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::ApprovalDate => write!(f, "approvedAt"),
            SortKey::CreationDate => write!(f, "createdAt"),
            SortKey::Price => write!(f, "price"),
            SortKey::Year => write!(f, "year"),
            SortKey::Mileage => write!(f, "mileage"),
            SortKey::Promoted => write!(f, "isPromoted"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approvedat" | "approved_at" | "approval-date" | "approval_date" | "approved" => {
                Ok(SortKey::ApprovalDate)
            }
            "createdat" | "created_at" | "creation-date" | "creation_date" | "created" => {
                Ok(SortKey::CreationDate)
            }
            "price" => Ok(SortKey::Price),
            "year" => Ok(SortKey::Year),
            "mileage" => Ok(SortKey::Mileage),
            "ispromoted" | "is_promoted" | "promoted" | "promoted-flag" | "promoted_flag" => {
                Ok(SortKey::Promoted)
            }
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(()),
        }
    }
}
