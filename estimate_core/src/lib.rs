//! # estimate_core - Pre-Engineered Steel Building Estimation Engine
//!
//! `estimate_core` turns a structured building configuration into a priced
//! bill of materials: it resolves geometry from spacing patterns, selects
//! component sections from threshold tables, generates the full detail
//! line-item list, applies per-category markups, and projects the four
//! commercial report sheets. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: the same configuration always yields bit-identical
//!   line items and totals
//! - **Draft-friendly**: invalid sub-structure entries are skipped, never
//!   fatal; unknown catalog codes degrade to zero-weight placeholders
//! - **JSON-First**: every type implements Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use estimate_core::catalog::{builtin_reference_store, LookupService, ReferenceCache};
//! use estimate_core::config::BuildingConfiguration;
//! use estimate_core::costing::price_bill;
//! use estimate_core::detail::generate_bill;
//!
//! let config = BuildingConfiguration {
//!     bay_spacing: "4@8".to_string(),
//!     span_spacing: "1@24".to_string(),
//!     eave_front_m: 6.0,
//!     eave_back_m: 6.0,
//!     roof_panel_code: "MS45-250".to_string(),
//!     wall_panel_code: "MS45-250".to_string(),
//!     ..Default::default()
//! };
//!
//! let lookup = LookupService::new(
//!     Arc::new(builtin_reference_store()),
//!     Arc::new(ReferenceCache::with_default_ttl()),
//! );
//!
//! let bill = generate_bill(&config, &lookup).unwrap();
//! let priced = price_bill(bill, &config.markups, &config.freight_terms);
//! assert!(priced.bill.total_weight > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Building configuration input types and validation
//! - [`geometry`] - Spacing pattern resolution and derived dimensions
//! - [`catalog`] - Reference product catalogs, TTL cache, lookup service
//! - [`selection`] - Data-driven threshold tables for section selection
//! - [`detail`] - Detail generator orchestrator and component generators
//! - [`costing`] - Markup engine and contract split
//! - [`sheets`] - The four report sheet projections
//! - [`estimate`] - Estimate document container
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod config;
pub mod costing;
pub mod detail;
pub mod errors;
pub mod estimate;
pub mod geometry;
pub mod selection;
pub mod sheets;

// Re-export commonly used types at crate root for convenience
pub use catalog::{LookupService, ReferenceCache};
pub use config::BuildingConfiguration;
pub use costing::{price_bill, PricedBillOfMaterials};
pub use detail::{generate_bill, generate_detail, BillOfMaterials, LineItem};
pub use errors::{EstimateError, EstimateResult};
pub use estimate::{Estimate, EstimateMetadata};
