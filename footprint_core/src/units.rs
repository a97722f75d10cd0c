//! # Unit Types
//!
//! Type-safe wrappers for the two quantities that flow through every
//! calculation. These provide compile-time safety against mixing up a
//! distance with an emission mass while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The calculator uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! Night, day, and passenger counts are plain `u32` values; only the
//! continuous quantities get wrappers.
//!
//! ## Example
//!
//! ```rust
//! use footprint_core::units::{KgCo2, Kilometers};
//!
//! let leg = Kilometers(1450.0);
//! let emissions = KgCo2(leg.0 * 0.255);
//! let round_trip = emissions + emissions;
//! assert_eq!(round_trip, KgCo2(739.5));
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Mass of carbon dioxide in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgCo2(pub f64);

impl Add for KgCo2 {
    type Output = KgCo2;

    fn add(self, rhs: KgCo2) -> KgCo2 {
        KgCo2(self.0 + rhs.0)
    }
}

impl AddAssign for KgCo2 {
    fn add_assign(&mut self, rhs: KgCo2) {
        self.0 += rhs.0;
    }
}

impl Sum for KgCo2 {
    fn sum<I: Iterator<Item = KgCo2>>(iter: I) -> KgCo2 {
        KgCo2(iter.map(|kg| kg.0).sum())
    }
}

impl std::fmt::Display for KgCo2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kg CO2", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_co2_sum() {
        let parts = [KgCo2(10.0), KgCo2(2.5), KgCo2(0.0)];
        let total: KgCo2 = parts.iter().copied().sum();
        assert_eq!(total, KgCo2(12.5));
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Kilometers(1250.0)).unwrap();
        assert_eq!(json, "1250.0");

        let back: KgCo2 = serde_json::from_str("31.0").unwrap();
        assert_eq!(back, KgCo2(31.0));
    }
}
