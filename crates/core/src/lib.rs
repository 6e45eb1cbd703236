//! issue-infographic-core - Dataset and view logic for the issue infographic
//!
//! This crate contains WASM-compatible code shared between the Dioxus
//! dashboard and the developer CLI.
//!
//! # Features
//!
//! - The fixed issue dataset and hero copy
//! - Severity filter state and toggle semantics
//! - Derived values (max mentions, filtered subset, bar widths)
//! - A view model carrying the full render contract
//! - Dataset validation

pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod validate;
pub mod view;

pub use config::{DashboardConfig, DEFAULT_HOST_ELEMENT_ID};
pub use data::{dataset_json, Hero, HeroFact, IssueRecord, SeverityTier, FOOTER, HERO, ISSUES};
pub use error::{Error, Result};
pub use filter::{
    bar_width_percent, filtered_issues, filtered_issues_by_key, max_mentions, toggle_filter,
    FilterState,
};
pub use validate::{validate_dataset, Notice};
pub use view::{BarRow, DashboardView, FilterButton, TableRow};
