//! # Report Sheets
//!
//! Four read-only projections over a priced bill of materials. Each sheet
//! is a pure function of the [`PricedBillOfMaterials`] and, where noted,
//! a few [`BuildingConfiguration`] fields; rebuilding a sheet from the
//! same inputs always yields the same rows.
//!
//! - [`sales::sales_rollup`]: weight/cost/price per sales code with the
//!   realized markup ratio and a grand total row
//! - [`cost::cost_breakdown`]: cost and selling price per cost category
//! - [`raw_materials::raw_material_breakdown`]: items regrouped by
//!   material category with a header row ahead of each group
//! - [`acceptance::job_acceptance_summary`]: the commercial recap with
//!   the minimum delivery lead time

pub mod acceptance;
pub mod cost;
pub mod raw_materials;
pub mod sales;

pub use acceptance::{job_acceptance_summary, JobAcceptanceSummary};
pub use cost::{cost_breakdown, CostBreakdownRow};
pub use raw_materials::{raw_material_breakdown, RawMaterialRow};
pub use sales::{sales_rollup, SalesRollupRow};
