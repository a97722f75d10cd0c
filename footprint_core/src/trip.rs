//! # Trip Session
//!
//! The `TripCalculator` is the session object for one trip: it owns the
//! emission ledger and exposes one calculate method per activity category.
//! Callers construct it explicitly and pass it into every operation; there
//! is no process-wide singleton.
//!
//! ## Input Contract
//!
//! Subtype labels are free-form strings normalized through the closed enums
//! in [`crate::factors`]; unrecognized labels fall back to each category's
//! default factor rather than failing. Quantities are assumed non-negative:
//! counts are `u32` by construction, and distances are expected to be
//! validated by the frontend before they reach the calculator. The
//! calculator performs no sign checks of its own and will happily produce a
//! negative total from a negative distance.
//!
//! ## Example
//!
//! ```rust
//! use footprint_core::trip::TripCalculator;
//! use footprint_core::units::{KgCo2, Kilometers};
//!
//! let mut trip = TripCalculator::new();
//! let flight = trip.calculate_flight(Kilometers(1000.0), 2, "business");
//! assert_eq!(flight, KgCo2(1360.0));
//!
//! trip.calculate_hotel(2, "budget");
//! assert_eq!(trip.total_emissions(), KgCo2(1391.0));
//!
//! // Breakdown is sorted by emissions, highest first
//! let breakdown = trip.breakdown();
//! assert_eq!(breakdown[0].activity, "Flight");
//! ```

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::factors::{ActivityIntensity, FlightClass, HotelTier, TransportMode};
use crate::ledger::{Ledger, LineItem};
use crate::summary::{self, ComparisonToAverage};
use crate::units::{KgCo2, Kilometers};

/// Session identity for one trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripMeta {
    /// Unique session id
    pub id: Uuid,
    /// When the session was started
    pub created: DateTime<Utc>,
    /// Optional user-facing trip label (e.g. "Summer in Lisbon")
    pub label: Option<String>,
}

impl TripMeta {
    fn new(label: Option<String>) -> Self {
        TripMeta {
            id: Uuid::new_v4(),
            created: Utc::now(),
            label,
        }
    }
}

/// Per-trip emission calculator owning an append-only ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCalculator {
    /// Session metadata (id, start time, label)
    pub meta: TripMeta,
    ledger: Ledger,
}

impl TripCalculator {
    /// Create a calculator with an empty ledger.
    pub fn new() -> Self {
        TripCalculator {
            meta: TripMeta::new(None),
            ledger: Ledger::new(),
        }
    }

    /// Create a calculator with a user-facing trip label.
    pub fn with_label(label: impl Into<String>) -> Self {
        TripCalculator {
            meta: TripMeta::new(Some(label.into())),
            ledger: Ledger::new(),
        }
    }

    /// Calculate CO2 emissions for a flight leg.
    ///
    /// `emissions = distance × passengers × class factor`. Zero passengers
    /// is a valid input producing zero emissions. The class label is
    /// normalized per [`FlightClass::from_label`].
    pub fn calculate_flight(
        &mut self,
        distance: Kilometers,
        passengers: u32,
        class: &str,
    ) -> KgCo2 {
        let resolved = FlightClass::from_label(class);
        let emissions = KgCo2(distance.0 * f64::from(passengers) * resolved.factor());
        debug!(
            "flight: {} km x {} pax ({}) -> {}",
            distance.0, passengers, resolved, emissions
        );

        self.ledger.append(LineItem {
            activity: "Flight".to_string(),
            quantity: distance.0,
            unit: "km".to_string(),
            emissions_kg: emissions,
        });

        emissions
    }

    /// Calculate CO2 emissions for a hotel stay.
    pub fn calculate_hotel(&mut self, nights: u32, tier: &str) -> KgCo2 {
        let resolved = HotelTier::from_label(tier);
        let emissions = KgCo2(f64::from(nights) * resolved.factor());
        debug!("hotel: {} nights ({}) -> {}", nights, resolved, emissions);

        self.ledger.append(LineItem {
            activity: "Accommodation".to_string(),
            quantity: f64::from(nights),
            unit: "nights".to_string(),
            emissions_kg: emissions,
        });

        emissions
    }

    /// Calculate CO2 emissions for ground transport.
    ///
    /// The ledger label embeds the mode string as requested, even when the
    /// factor fell back to the default mode.
    pub fn calculate_transport(&mut self, distance: Kilometers, mode: &str) -> KgCo2 {
        let resolved = TransportMode::from_label(mode);
        let emissions = KgCo2(distance.0 * resolved.factor());
        debug!(
            "transport: {} km ({}) -> {}",
            distance.0, resolved, emissions
        );

        self.ledger.append(LineItem {
            activity: format!("Transport ({mode})"),
            quantity: distance.0,
            unit: "km".to_string(),
            emissions_kg: emissions,
        });

        emissions
    }

    /// Calculate CO2 emissions for leisure activities.
    ///
    /// Same requested-label rule as [`Self::calculate_transport`].
    pub fn calculate_activity(&mut self, days: u32, intensity: &str) -> KgCo2 {
        let resolved = ActivityIntensity::from_label(intensity);
        let emissions = KgCo2(f64::from(days) * resolved.factor());
        debug!("activity: {} days ({}) -> {}", days, resolved, emissions);

        self.ledger.append(LineItem {
            activity: format!("Activity ({intensity})"),
            quantity: f64::from(days),
            unit: "days".to_string(),
            emissions_kg: emissions,
        });

        emissions
    }

    /// Total emissions recorded so far. Zero for a fresh or reset session.
    pub fn total_emissions(&self) -> KgCo2 {
        self.ledger.total()
    }

    /// Line items sorted by emissions, highest first (stable on ties).
    pub fn breakdown(&self) -> Vec<LineItem> {
        self.ledger.sorted_by_emissions()
    }

    /// Trees needed to offset the current total within a year.
    pub fn offset_trees(&self) -> u64 {
        summary::offset_trees(self.total_emissions())
    }

    /// Compare the current total against the average-trip benchmark.
    pub fn comparison_to_average(&self) -> ComparisonToAverage {
        ComparisonToAverage::from_total(self.total_emissions())
    }

    /// Read-only view of the ledger in insertion order.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Clear the ledger for a new trip. Idempotent; session metadata is
    /// kept.
    pub fn reset(&mut self) {
        self.ledger.clear();
    }
}

impl Default for TripCalculator {
    fn default() -> Self {
        TripCalculator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_economy_formula() {
        let mut trip = TripCalculator::new();
        let emissions = trip.calculate_flight(Kilometers(1000.0), 1, "economy");
        assert_eq!(emissions, KgCo2(255.0));

        let two_pax = trip.calculate_flight(Kilometers(500.0), 2, "economy");
        assert_eq!(two_pax, KgCo2(255.0));
    }

    #[test]
    fn test_unknown_flight_class_falls_back_to_economy() {
        let mut trip = TripCalculator::new();
        let emissions = trip.calculate_flight(Kilometers(1000.0), 1, "bogus-class");
        assert_eq!(emissions, KgCo2(255.0));
        // fixed label regardless of class
        assert_eq!(trip.ledger().items()[0].activity, "Flight");
    }

    #[test]
    fn test_zero_passengers_is_zero_emissions() {
        let mut trip = TripCalculator::new();
        let emissions = trip.calculate_flight(Kilometers(1000.0), 0, "first");
        assert_eq!(emissions, KgCo2(0.0));
        assert_eq!(trip.ledger().len(), 1);
    }

    #[test]
    fn test_hotel_luxury() {
        let mut trip = TripCalculator::new();
        let emissions = trip.calculate_hotel(3, "luxury");
        assert!((emissions.0 - 105.6).abs() < 1e-9);

        let item = &trip.ledger().items()[0];
        assert_eq!(item.activity, "Accommodation");
        assert_eq!(item.quantity, 3.0);
        assert_eq!(item.unit, "nights");
    }

    #[test]
    fn test_transport_label_keeps_requested_mode() {
        let mut trip = TripCalculator::new();
        trip.calculate_transport(Kilometers(100.0), "train");
        trip.calculate_transport(Kilometers(100.0), "hovercraft");

        let items = trip.ledger().items();
        assert_eq!(items[0].activity, "Transport (train)");
        assert!((items[0].emissions_kg.0 - 4.1).abs() < 1e-9);

        // unrecognized mode keeps its label but uses the car factor
        assert_eq!(items[1].activity, "Transport (hovercraft)");
        assert!((items[1].emissions_kg.0 - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_activity_label_keeps_requested_intensity() {
        let mut trip = TripCalculator::new();
        let emissions = trip.calculate_activity(2, "extreme");
        // falls back to medium factor
        assert!((emissions.0 - 12.4).abs() < 1e-9);
        assert_eq!(trip.ledger().items()[0].activity, "Activity (extreme)");
        assert_eq!(trip.ledger().items()[0].unit, "days");
    }

    #[test]
    fn test_end_to_end_total_and_breakdown_order() {
        let mut trip = TripCalculator::new();
        let flight = trip.calculate_flight(Kilometers(1000.0), 2, "business");
        assert_eq!(flight, KgCo2(1360.0));

        let hotel = trip.calculate_hotel(2, "budget");
        assert_eq!(hotel, KgCo2(31.0));

        assert_eq!(trip.total_emissions(), KgCo2(1391.0));

        let breakdown = trip.breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].activity, "Flight");
        assert_eq!(breakdown[1].activity, "Accommodation");
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut trip = TripCalculator::new();
        trip.calculate_transport(Kilometers(50.0), "bus");
        trip.calculate_activity(3, "low");

        let first_total = trip.total_emissions();
        let first_breakdown = trip.breakdown();
        assert_eq!(trip.total_emissions(), first_total);
        assert_eq!(trip.breakdown(), first_breakdown);
    }

    #[test]
    fn test_reset_clears_ledger() {
        let mut trip = TripCalculator::new();
        trip.calculate_flight(Kilometers(2000.0), 1, "first");
        trip.calculate_hotel(5, "standard");
        assert!(!trip.ledger().is_empty());

        trip.reset();
        assert_eq!(trip.total_emissions(), KgCo2(0.0));
        assert!(trip.breakdown().is_empty());

        // idempotent
        trip.reset();
        assert_eq!(trip.total_emissions(), KgCo2(0.0));
    }

    #[test]
    fn test_derived_metrics_follow_the_ledger() {
        let mut trip = TripCalculator::new();
        assert_eq!(trip.offset_trees(), 0);

        trip.calculate_hotel(5, "luxury"); // 176.0 kg
        assert_eq!(trip.offset_trees(), 8); // ceil(176 / 25)

        let comparison = trip.comparison_to_average();
        assert_eq!(comparison.your_footprint_kg, 176.0);
        assert!(comparison.difference_kg < 0.0);
    }

    #[test]
    fn test_calculator_serializes_to_json() {
        let mut trip = TripCalculator::with_label("Weekend in Oslo");
        trip.calculate_hotel(2, "budget");

        let json = serde_json::to_string(&trip).unwrap();
        let back: TripCalculator = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_emissions(), KgCo2(31.0));
        assert_eq!(back.meta.label.as_deref(), Some("Weekend in Oslo"));
    }
}
