//! # Emission Ledger
//!
//! Ordered, append-only record of computed line items for one trip.
//! Aggregates (total, breakdown) are recomputed on demand from the items,
//! never cached.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::units::KgCo2;

/// One recorded emission computation.
///
/// Immutable once appended. For transport and activity entries the label
/// embeds the subtype the caller asked for (e.g. `"Transport (train)"`);
/// flight and accommodation entries use a fixed label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Activity label shown in breakdowns
    pub activity: String,
    /// Quantity the emission factor was applied to
    pub quantity: f64,
    /// Unit of the quantity ("km", "nights", "days")
    pub unit: String,
    /// Computed emissions for this item
    pub emissions_kg: KgCo2,
}

/// Ordered sequence of line items. Insertion order is meaningful only for
/// display; `sorted_by_emissions` is the canonical report ordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Append a line item
    pub fn append(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all recorded emissions. Zero for an empty ledger.
    pub fn total(&self) -> KgCo2 {
        self.items.iter().map(|item| item.emissions_kg).sum()
    }

    /// Items sorted by emissions, highest first. The sort is stable, so
    /// ties keep their insertion order.
    pub fn sorted_by_emissions(&self) -> Vec<LineItem> {
        let mut sorted = self.items.clone();
        sorted.sort_by(|a, b| {
            b.emissions_kg
                .partial_cmp(&a.emissions_kg)
                .unwrap_or(Ordering::Equal)
        });
        sorted
    }

    /// Remove all items
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(activity: &str, emissions: f64) -> LineItem {
        LineItem {
            activity: activity.to_string(),
            quantity: 1.0,
            unit: "km".to_string(),
            emissions_kg: KgCo2(emissions),
        }
    }

    #[test]
    fn test_empty_ledger_total_is_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.total(), KgCo2(0.0));
        assert!(ledger.sorted_by_emissions().is_empty());
    }

    #[test]
    fn test_total_recomputed_from_items() {
        let mut ledger = Ledger::new();
        ledger.append(item("Flight", 1360.0));
        ledger.append(item("Accommodation", 31.0));
        assert_eq!(ledger.total(), KgCo2(1391.0));

        ledger.clear();
        assert_eq!(ledger.total(), KgCo2(0.0));
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let mut ledger = Ledger::new();
        ledger.append(item("first-tie", 10.0));
        ledger.append(item("big", 50.0));
        ledger.append(item("second-tie", 10.0));

        let sorted = ledger.sorted_by_emissions();
        assert_eq!(sorted[0].activity, "big");
        assert_eq!(sorted[1].activity, "first-tie");
        assert_eq!(sorted[2].activity, "second-tie");

        // insertion order untouched
        assert_eq!(ledger.items()[0].activity, "first-tie");
    }
}
