//! Scoring engine for GitHub profile contribution timelines.
//!
//! Six independent calculators turn a yearly [`types::timeline::Timeline`]
//! into scored metrics, and [`analyze::categories`] folds those into the
//! OUTPUT, QUALITY and TRUST categories. Everything under [`analyze`] is pure;
//! file loading, configuration and rendering live at the edges.

pub mod analyze;
pub mod config;
pub mod error;
pub mod report;
pub mod types;

pub use analyze::{analyze, calculate_all, AllMetrics};
pub use error::{Result, ScoreError};
