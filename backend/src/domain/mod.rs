//! # Domain Layer
//!
//! Business logic of the tracker, independent of how it is presented or
//! stored:
//!
//! - `models`: pets, owners, log entries and food catalogs
//! - `tracker`: the owner collection and the current selection
//! - `food_service`: catalog lookups, user foods and toxicity checks
//! - `report_service`: per-pet progress summaries
//! - `calculator`: the standalone calculator endpoint's arithmetic

pub mod calculator;
pub mod food_service;
pub mod models;
pub mod report_service;
pub mod tracker;

pub use food_service::{FoodError, FoodService, ListedFood};
pub use report_service::{PetReport, ReportService};
pub use tracker::{Selection, Tracker, TrackerError};
