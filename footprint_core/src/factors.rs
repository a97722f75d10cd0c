//! # Emission Factors
//!
//! Per-category emission factors for tourism activities.
//!
//! ## Overview
//!
//! Each activity category has a closed set of subtypes, and each subtype
//! carries a constant emission rate. Emissions are obtained by multiplying
//! the rate by the activity quantity:
//!
//! ```text
//! flight     = distance_km × passengers × factor(class)
//! hotel      = nights × factor(tier)
//! transport  = distance_km × factor(mode)
//! activity   = days × factor(intensity)
//! ```
//!
//! ## Factor Summary
//!
//! | Category  | Subtype             | Rate                     |
//! |-----------|---------------------|--------------------------|
//! | Flight    | economy / business / first | 0.255 / 0.680 / 1.215 kg per passenger-km |
//! | Hotel     | budget / standard / luxury | 15.5 / 22.8 / 35.2 kg per night |
//! | Transport | car / train / bus / taxi   | 0.210 / 0.041 / 0.089 / 0.250 kg per km |
//! | Activity  | low / medium / high        | 2.1 / 6.2 / 12.5 kg per day |
//!
//! ## Label Normalization
//!
//! Frontends hand the calculator free-form subtype strings. Each enum
//! provides `from_label`, a case-insensitive parser that maps unrecognized
//! input to the category's default variant (marked `#[default]`) instead of
//! failing. The soft fallback is the API contract: a typo in a hotel tier
//! produces a standard-tier estimate, not an error.

use serde::{Deserialize, Serialize};

/// Cabin class for flight emissions, kg CO2 per passenger-kilometer.
///
/// Premium cabins occupy more floor area per seat, so their per-passenger
/// share of the aircraft's emissions is higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlightClass {
    /// Economy class: 0.255 kg/passenger-km
    #[default]
    Economy,
    /// Business class: 0.680 kg/passenger-km
    Business,
    /// First class: 1.215 kg/passenger-km
    First,
}

impl FlightClass {
    /// All cabin classes for UI selection
    pub const ALL: [FlightClass; 3] = [
        FlightClass::Economy,
        FlightClass::Business,
        FlightClass::First,
    ];

    /// Emission rate in kg CO2 per passenger-kilometer
    pub fn factor(&self) -> f64 {
        match self {
            FlightClass::Economy => 0.255,
            FlightClass::Business => 0.680,
            FlightClass::First => 1.215,
        }
    }

    /// Parse a free-form label, falling back to economy for unrecognized input
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "economy" => FlightClass::Economy,
            "business" => FlightClass::Business,
            "first" => FlightClass::First,
            _ => FlightClass::default(),
        }
    }

    /// Canonical lowercase label (e.g. for JSON payloads)
    pub fn label(&self) -> &'static str {
        match self {
            FlightClass::Economy => "economy",
            FlightClass::Business => "business",
            FlightClass::First => "first",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FlightClass::Economy => "Economy",
            FlightClass::Business => "Business",
            FlightClass::First => "First",
        }
    }
}

impl std::fmt::Display for FlightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Hotel tier for accommodation emissions, kg CO2 per night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HotelTier {
    /// Budget accommodation: 15.5 kg/night
    Budget,
    /// Standard hotel: 22.8 kg/night
    #[default]
    Standard,
    /// Luxury hotel: 35.2 kg/night
    Luxury,
}

impl HotelTier {
    /// All hotel tiers for UI selection
    pub const ALL: [HotelTier; 3] = [HotelTier::Budget, HotelTier::Standard, HotelTier::Luxury];

    /// Emission rate in kg CO2 per night
    pub fn factor(&self) -> f64 {
        match self {
            HotelTier::Budget => 15.5,
            HotelTier::Standard => 22.8,
            HotelTier::Luxury => 35.2,
        }
    }

    /// Parse a free-form label, falling back to standard for unrecognized input
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "budget" => HotelTier::Budget,
            "standard" => HotelTier::Standard,
            "luxury" => HotelTier::Luxury,
            _ => HotelTier::default(),
        }
    }

    /// Canonical lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            HotelTier::Budget => "budget",
            HotelTier::Standard => "standard",
            HotelTier::Luxury => "luxury",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            HotelTier::Budget => "Budget",
            HotelTier::Standard => "Standard",
            HotelTier::Luxury => "Luxury",
        }
    }
}

impl std::fmt::Display for HotelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ground transport mode, kg CO2 per kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Average passenger car: 0.210 kg/km
    #[default]
    Car,
    /// Rail: 0.041 kg/km
    Train,
    /// Coach/bus: 0.089 kg/km
    Bus,
    /// Taxi (includes empty running): 0.250 kg/km
    Taxi,
}

impl TransportMode {
    /// All transport modes for UI selection
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Train,
        TransportMode::Bus,
        TransportMode::Taxi,
    ];

    /// Emission rate in kg CO2 per kilometer
    pub fn factor(&self) -> f64 {
        match self {
            TransportMode::Car => 0.210,
            TransportMode::Train => 0.041,
            TransportMode::Bus => 0.089,
            TransportMode::Taxi => 0.250,
        }
    }

    /// Parse a free-form label, falling back to car for unrecognized input
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "car" => TransportMode::Car,
            "train" => TransportMode::Train,
            "bus" => TransportMode::Bus,
            "taxi" => TransportMode::Taxi,
            _ => TransportMode::default(),
        }
    }

    /// Canonical lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Taxi => "taxi",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Train => "Train",
            TransportMode::Bus => "Bus",
            TransportMode::Taxi => "Taxi",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Leisure activity intensity, kg CO2 per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityIntensity {
    /// Museum visits, local tours: 2.1 kg/day
    Low,
    /// Hiking, sightseeing: 6.2 kg/day
    #[default]
    Medium,
    /// Skiing, water sports: 12.5 kg/day
    High,
}

impl ActivityIntensity {
    /// All activity intensities for UI selection
    pub const ALL: [ActivityIntensity; 3] = [
        ActivityIntensity::Low,
        ActivityIntensity::Medium,
        ActivityIntensity::High,
    ];

    /// Emission rate in kg CO2 per day
    pub fn factor(&self) -> f64 {
        match self {
            ActivityIntensity::Low => 2.1,
            ActivityIntensity::Medium => 6.2,
            ActivityIntensity::High => 12.5,
        }
    }

    /// Parse a free-form label, falling back to medium for unrecognized input
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" => ActivityIntensity::Low,
            "medium" => ActivityIntensity::Medium,
            "high" => ActivityIntensity::High,
            _ => ActivityIntensity::default(),
        }
    }

    /// Canonical lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityIntensity::Low => "low",
            ActivityIntensity::Medium => "medium",
            ActivityIntensity::High => "high",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityIntensity::Low => "Low",
            ActivityIntensity::Medium => "Medium",
            ActivityIntensity::High => "High",
        }
    }
}

impl std::fmt::Display for ActivityIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
