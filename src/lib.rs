//! Rule-based client prioritization for CRM dashboards.
//!
//! [`services::priority_scorer::PriorityScorer`] is the pure core; the rest
//! of the crate validates input, calls the optional content analysis
//! service, persists results and ranks clients.

pub mod errors;
pub mod enums;
pub mod structs;
pub mod traits;
pub mod services;
pub mod helpers;
pub mod config;
pub mod logger;
pub mod workers;
