//! # Estimate Document
//!
//! The `Estimate` struct is the root container for one estimation job.
//! Estimates serialize to human-readable JSON; storage and retrieval of
//! the files is the caller's concern.
//!
//! ## Structure
//!
//! ```text
//! Estimate
//! ├── id: Uuid
//! ├── meta: EstimateMetadata (version, job info, timestamps)
//! └── building: BuildingConfiguration (the calculation input)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::estimate::Estimate;
//!
//! let estimate = Estimate::new("Q-2608-014", "Al Madar Trading", "R. Haddad");
//!
//! let json = serde_json::to_string_pretty(&estimate).unwrap();
//! let roundtrip: Estimate = serde_json::from_str(&json).unwrap();
//! assert_eq!(roundtrip.meta.job_number, "Q-2608-014");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::LookupService;
use crate::config::BuildingConfiguration;
use crate::costing::{price_bill, PricedBillOfMaterials};
use crate::detail::generate_bill;
use crate::errors::EstimateResult;

/// Current schema version for estimate files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root estimate container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    pub id: Uuid,

    /// Job metadata (version, client, estimator, timestamps)
    pub meta: EstimateMetadata,

    /// The calculation input
    pub building: BuildingConfiguration,
}

impl Estimate {
    /// Create a new empty estimate.
    ///
    /// # Arguments
    ///
    /// * `job_number` - Quotation/job number (e.g., "Q-2608-014")
    /// * `client` - Client name
    /// * `estimator` - Name of the responsible estimator
    pub fn new(
        job_number: impl Into<String>,
        client: impl Into<String>,
        estimator: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Estimate {
            id: Uuid::new_v4(),
            meta: EstimateMetadata {
                version: SCHEMA_VERSION.to_string(),
                job_number: job_number.into(),
                client: client.into(),
                estimator: estimator.into(),
                revision: 0,
                created: now,
                modified: now,
            },
            building: BuildingConfiguration::default(),
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Bump the revision counter, updating the modified timestamp.
    pub fn bump_revision(&mut self) {
        self.meta.revision += 1;
        self.touch();
    }

    /// Run the full pipeline for this estimate: generate the detail list,
    /// accumulate the bill, and price it with the document's markups.
    pub fn calculate(&self, lookup: &LookupService) -> EstimateResult<PricedBillOfMaterials> {
        let bill = generate_bill(&self.building, lookup)?;
        Ok(price_bill(
            bill,
            &self.building.markups,
            &self.building.freight_terms,
        ))
    }
}

impl Default for Estimate {
    fn default() -> Self {
        Estimate::new("", "", "")
    }
}

/// Estimate metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Quotation/job number
    pub job_number: String,

    /// Client name
    pub client: String,

    /// Name of the responsible estimator
    pub estimator: String,

    /// Revision counter, bumped on each re-issue
    pub revision: u32,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_reference_store, ReferenceCache};
    use std::sync::Arc;

    #[test]
    fn test_estimate_creation() {
        let estimate = Estimate::new("Q-2608-014", "Al Madar Trading", "R. Haddad");
        assert_eq!(estimate.meta.job_number, "Q-2608-014");
        assert_eq!(estimate.meta.client, "Al Madar Trading");
        assert_eq!(estimate.meta.version, SCHEMA_VERSION);
        assert_eq!(estimate.meta.revision, 0);
    }

    #[test]
    fn test_estimate_serialization() {
        let estimate = Estimate::new("Q-2608-020", "Test Client", "Estimator");
        let json = serde_json::to_string_pretty(&estimate).unwrap();

        assert!(json.contains("Q-2608-020"));

        let roundtrip: Estimate = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.id, estimate.id);
        assert_eq!(roundtrip.meta.client, "Test Client");
    }

    #[test]
    fn test_bump_revision() {
        let mut estimate = Estimate::default();
        let before = estimate.meta.modified;
        estimate.bump_revision();
        assert_eq!(estimate.meta.revision, 1);
        assert!(estimate.meta.modified >= before);
    }

    #[test]
    fn test_calculate_runs_pipeline() {
        let mut estimate = Estimate::new("Q-1", "C", "E");
        estimate.building.bay_spacing = "4@8".to_string();
        estimate.building.span_spacing = "1@24".to_string();
        estimate.building.eave_front_m = 6.0;
        estimate.building.eave_back_m = 6.0;
        estimate.building.roof_panel_code = "MS45-250".to_string();
        estimate.building.wall_panel_code = "MS45-250".to_string();

        let lookup = LookupService::new(
            Arc::new(builtin_reference_store()),
            Arc::new(ReferenceCache::with_default_ttl()),
        );
        let priced = estimate.calculate(&lookup).unwrap();
        assert!(priced.bill.total_weight > 0.0);
        assert!(priced.price_per_ton.is_some());
    }
}
