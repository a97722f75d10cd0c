//! # Derived Metrics
//!
//! Summary metrics derived from a trip's total emissions: the tree-offset
//! count, the comparison against an average trip, and the combined
//! [`TripSummary`] report struct frontends serialize directly.

use serde::{Deserialize, Serialize};

use crate::trip::TripCalculator;
use crate::units::KgCo2;

/// Annual CO2 absorption assumed per tree, in kg
pub const KG_OFFSET_PER_TREE: f64 = 25.0;

/// Footprint of an average tourist trip, in kg CO2
pub const AVERAGE_TRIP_KG: f64 = 2500.0;

/// Number of trees whose annual absorption would offset the given total.
///
/// Ceiling division: a total of 25.0 kg needs exactly one tree, 25.1 kg
/// needs two. Zero total needs zero trees.
pub fn offset_trees(total: KgCo2) -> u64 {
    (total.0 / KG_OFFSET_PER_TREE).ceil() as u64
}

/// Comparison of a trip's footprint to the average trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonToAverage {
    /// The trip's total emissions in kg CO2
    pub your_footprint_kg: f64,
    /// The fixed average-trip benchmark
    pub average_trip_kg: f64,
    /// Footprint minus benchmark (negative when below average)
    pub difference_kg: f64,
    /// Footprint as a percentage of the benchmark
    pub percentage_of_average: f64,
}

impl ComparisonToAverage {
    /// Compare a total against the fixed [`AVERAGE_TRIP_KG`] benchmark.
    pub fn from_total(total: KgCo2) -> Self {
        ComparisonToAverage {
            your_footprint_kg: total.0,
            average_trip_kg: AVERAGE_TRIP_KG,
            difference_kg: total.0 - AVERAGE_TRIP_KG,
            percentage_of_average: (total.0 / AVERAGE_TRIP_KG) * 100.0,
        }
    }
}

/// Combined summary report for one trip session.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_emissions_kg": 1391.0,
///   "trees_needed": 56,
///   "comparison": {
///     "your_footprint_kg": 1391.0,
///     "average_trip_kg": 2500.0,
///     "difference_kg": -1109.0,
///     "percentage_of_average": 55.64
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Total recorded emissions
    pub total_emissions_kg: KgCo2,
    /// Trees needed to offset the total within a year
    pub trees_needed: u64,
    /// Comparison against the average trip
    pub comparison: ComparisonToAverage,
}

impl TripSummary {
    /// Assemble the summary for a calculator's current ledger.
    pub fn from_calculator(trip: &TripCalculator) -> Self {
        let total = trip.total_emissions();
        TripSummary {
            total_emissions_kg: total,
            trees_needed: offset_trees(total),
            comparison: ComparisonToAverage::from_total(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Kilometers;

    #[test]
    fn test_offset_trees_ceiling_boundary() {
        assert_eq!(offset_trees(KgCo2(0.0)), 0);
        assert_eq!(offset_trees(KgCo2(24.9)), 1);
        assert_eq!(offset_trees(KgCo2(25.0)), 1);
        assert_eq!(offset_trees(KgCo2(25.1)), 2);
    }

    #[test]
    fn test_offset_trees_monotonic() {
        let totals = [0.0, 1.0, 25.0, 25.1, 100.0, 2500.0, 10_000.0];
        let trees: Vec<u64> = totals.iter().map(|&t| offset_trees(KgCo2(t))).collect();
        assert!(trees.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_comparison_at_exactly_average() {
        let comparison = ComparisonToAverage::from_total(KgCo2(2500.0));
        assert_eq!(comparison.difference_kg, 0.0);
        assert_eq!(comparison.percentage_of_average, 100.0);
        assert_eq!(comparison.average_trip_kg, 2500.0);
    }

    #[test]
    fn test_summary_from_calculator() {
        let mut trip = TripCalculator::new();
        trip.calculate_flight(Kilometers(1000.0), 2, "business");
        trip.calculate_hotel(2, "budget");

        let summary = TripSummary::from_calculator(&trip);
        assert_eq!(summary.total_emissions_kg, KgCo2(1391.0));
        assert_eq!(summary.trees_needed, 56); // ceil(1391 / 25)
        assert!((summary.comparison.difference_kg - (-1109.0)).abs() < 1e-9);
    }

    #[test]
    fn test_summary_json_field_names() {
        let summary = TripSummary::from_calculator(&TripCalculator::new());
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("total_emissions_kg").is_some());
        assert!(json.get("trees_needed").is_some());
        let comparison = json.get("comparison").unwrap();
        assert!(comparison.get("your_footprint_kg").is_some());
        assert!(comparison.get("percentage_of_average").is_some());
    }
}
