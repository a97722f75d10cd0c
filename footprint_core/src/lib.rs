//! # footprint_core - Tourism Carbon Footprint Engine
//!
//! `footprint_core` is the computational heart of Footprint, estimating the
//! CO2 emissions of tourism activities with a clean, JSON-friendly API. All
//! inputs and outputs are serializable, so any frontend (CLI, HTTP layer,
//! GUI) gets its wire shapes for free.
//!
//! ## Design Philosophy
//!
//! - **Explicit sessions**: one `TripCalculator` per trip, no globals
//! - **Closed factor tables**: subtypes are enums; free-form labels
//!   normalize through a documented default instead of failing
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types for the record pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use footprint_core::trip::TripCalculator;
//! use footprint_core::summary::TripSummary;
//! use footprint_core::units::Kilometers;
//!
//! let mut trip = TripCalculator::new();
//! trip.calculate_flight(Kilometers(1400.0), 2, "economy");
//! trip.calculate_hotel(4, "standard");
//!
//! let summary = TripSummary::from_calculator(&trip);
//! let json = serde_json::to_string_pretty(&summary).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`factors`] - Emission factor tables (closed enums per category)
//! - [`ledger`] - Append-only ledger of computed line items
//! - [`trip`] - The per-trip calculator session
//! - [`summary`] - Derived metrics (offset trees, average comparison)
//! - [`records`] - Batch CSV import, cleaning, and aggregation
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod factors;
pub mod ledger;
pub mod records;
pub mod summary;
pub mod trip;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{FootprintError, FootprintResult};
pub use factors::{ActivityIntensity, FlightClass, HotelTier, TransportMode};
pub use ledger::{Ledger, LineItem};
pub use records::{CleanedRecords, Period, RecordSet, TripRecord};
pub use summary::{ComparisonToAverage, TripSummary};
pub use trip::{TripCalculator, TripMeta};
pub use units::{KgCo2, Kilometers};
