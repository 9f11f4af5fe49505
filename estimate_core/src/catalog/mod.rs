//! # Reference Catalogs
//!
//! Product/material reference data behind one normalized interface. Three
//! catalogs exist with overlapping attribute sets:
//!
//! - **General**: panels, fasteners, trim, drainage, accessories
//! - **Structural**: hot-rolled and built-up steel sections (priced by weight)
//! - **RawMaterial**: insulation and bulk materials
//!
//! Catalog content is loaded once by an external seed process and read-only
//! during calculation. A builtin seed ships for tests and the CLI demo.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use estimate_core::catalog::{builtin_reference_store, Catalog, LookupService, ReferenceCache};
//!
//! let lookup = LookupService::new(
//!     Arc::new(builtin_reference_store()),
//!     Arc::new(ReferenceCache::with_default_ttl()),
//! );
//!
//! let panel = lookup.get_by_code(Catalog::General, "MS45-250");
//! assert!(panel.weight_per_unit > 0.0);
//!
//! // Unknown codes never fail; they fall back to a zero-weight placeholder
//! let draft = lookup.get_by_code(Catalog::General, "TBD-PANEL");
//! assert_eq!(draft.description, "TBD-PANEL");
//! assert_eq!(draft.rate, 0.0);
//! ```

pub mod cache;
pub mod lookup;

pub use cache::ReferenceCache;
pub use lookup::LookupService;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::EstimateResult;

/// Which reference catalog a code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Catalog {
    /// Panels, fasteners, trim, accessories
    General,
    /// Hot-rolled and built-up steel sections
    Structural,
    /// Insulation and bulk raw materials
    RawMaterial,
}

impl Catalog {
    pub const ALL: [Catalog; 3] = [Catalog::General, Catalog::Structural, Catalog::RawMaterial];

    pub fn display_name(&self) -> &'static str {
        match self {
            Catalog::General => "General Products",
            Catalog::Structural => "Structural Steel",
            Catalog::RawMaterial => "Raw Materials",
        }
    }
}

/// How an item's total price is derived from its quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PricingBasis {
    /// total_price = quantity × unit_rate
    #[default]
    PerUnit,
    /// total_price = total_weight × unit_rate
    PerWeight,
}

/// One normalized catalog entry.
///
/// `weight_per_unit` is kg per catalog unit (kg/m for sections, kg/m² for
/// panels, kg/pc for discrete parts). `rate` is currency per unit for
/// [`PricingBasis::PerUnit`] products and currency per kg for
/// [`PricingBasis::PerWeight`] products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceProduct {
    pub catalog: Catalog,
    pub code: String,
    pub description: String,
    /// Quantity unit label ("m", "m²", "pcs", "kg")
    pub unit: String,
    /// Commercial sales code grouping ("ST", "PA", "SS", "AC", "RM")
    pub sales_code: String,
    pub weight_per_unit: f64,
    pub rate: f64,
    pub basis: PricingBasis,
    /// Covered surface area per unit, for sheeting products (m²/unit)
    pub surface_area: Option<f64>,
}

impl ReferenceProduct {
    /// Deterministic fallback for a code missing from every catalog.
    ///
    /// Unknown codes are common during draft input and must not abort a
    /// calculation; the placeholder carries zero weight and zero rate.
    pub fn placeholder(catalog: Catalog, code: &str) -> Self {
        ReferenceProduct {
            catalog,
            code: code.to_string(),
            description: code.to_string(),
            unit: "pcs".to_string(),
            sales_code: String::new(),
            weight_per_unit: 0.0,
            rate: 0.0,
            basis: PricingBasis::PerUnit,
            surface_area: None,
        }
    }
}

/// Backing-store capability consumed by the [`LookupService`].
///
/// `fetch` returning `Ok(None)` means the code is not in the catalog;
/// `Err` means the store itself failed. Both degrade to the placeholder at
/// the lookup layer; the engine never retries.
pub trait CatalogStore: Send + Sync {
    fn fetch(&self, catalog: Catalog, code: &str) -> EstimateResult<Option<ReferenceProduct>>;
}

/// In-memory catalog store, keyed case-insensitively by `(catalog, code)`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    products: HashMap<(Catalog, String), ReferenceProduct>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: ReferenceProduct) {
        self.products
            .insert((product.catalog, product.code.to_uppercase()), product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogStore for InMemoryStore {
    fn fetch(&self, catalog: Catalog, code: &str) -> EstimateResult<Option<ReferenceProduct>> {
        Ok(self.products.get(&(catalog, code.to_uppercase())).cloned())
    }
}

/// Builtin reference seed covering the codes the generators and selection
/// tables emit. Production deployments replace this with a store fed from
/// the administrative catalog tables.
pub fn builtin_reference_store() -> InMemoryStore {
    static BUILTIN: Lazy<InMemoryStore> = Lazy::new(build_builtin_store);
    BUILTIN.clone()
}

fn build_builtin_store() -> InMemoryStore {
    use Catalog::*;
    use PricingBasis::*;

    let mut store = InMemoryStore::new();

    // (catalog, code, description, unit, sales, kg/unit, rate, basis, m²/unit)
    let products: &[(
        Catalog,
        &str,
        &str,
        &str,
        &str,
        f64,
        f64,
        PricingBasis,
        Option<f64>,
    )] = &[
        // --- General: sheeting panels ---
        (General, "MS45-250", "Steel panel 0.45mm, 250 profile", "m²", "PA", 4.5, 6.50, PerUnit, Some(1.0)),
        (General, "MS50-250", "Steel panel 0.50mm, 250 profile", "m²", "PA", 5.0, 7.10, PerUnit, Some(1.0)),
        (General, "AL45-250", "Aluminium panel 0.45mm, 250 profile", "m²", "PA", 2.1, 9.80, PerUnit, Some(1.0)),
        (General, "PU-50", "PU sandwich panel 50mm core", "m²", "PA", 11.5, 24.00, PerUnit, Some(1.0)),
        (General, "PU-80", "PU sandwich panel 80mm core", "m²", "PA", 12.9, 29.50, PerUnit, Some(1.0)),
        (General, "LIN-30", "Liner sheet 0.30mm plain", "m²", "PA", 2.8, 4.20, PerUnit, Some(1.0)),
        // --- General: fasteners ---
        (General, "SCR-CS-25", "Self-drilling screw 25mm, carbon steel", "pcs", "PA", 0.012, 0.05, PerUnit, None),
        (General, "SCR-SS-25", "Self-drilling screw 25mm, stainless", "pcs", "PA", 0.012, 0.22, PerUnit, None),
        (General, "SCR-PU-85", "Panel screw 85mm, composite panel", "pcs", "PA", 0.030, 0.35, PerUnit, None),
        (General, "SCR-STCH-20", "Stitch screw 20mm", "pcs", "PA", 0.008, 0.04, PerUnit, None),
        // --- General: trim, drainage, misc ---
        (General, "FLSH-STD", "Flashing / trim, standard profile", "m", "PA", 1.9, 3.10, PerUnit, None),
        (General, "GUT-STD", "Eave gutter, standard", "m", "PA", 3.4, 5.80, PerUnit, None),
        (General, "DSP-PVC", "Downspout, PVC 110mm", "m", "PA", 1.1, 2.60, PerUnit, None),
        (General, "AB-M24", "Anchor bolt M24 c/w nuts", "pcs", "ST", 1.8, 3.90, PerUnit, None),
        (General, "DECK-50", "Mezzanine deck panel 50mm", "m²", "SS", 9.8, 14.20, PerUnit, Some(1.0)),
        (General, "STR-STD", "Stair flight c/w landing, standard", "pcs", "SS", 180.0, 420.00, PerUnit, None),
        (General, "HR-PIPE", "Handrail, pipe 42mm double rail", "m", "SS", 6.2, 11.50, PerUnit, None),
        (General, "CRS-END", "Crane runway end stopper", "pcs", "SS", 25.0, 85.00, PerUnit, None),
        // --- Structural: primary frames ---
        (Structural, "BU-250", "Built-up section, 250 deep", "m", "ST", 31.0, 0.85, PerWeight, None),
        (Structural, "BU-350", "Built-up section, 350 deep", "m", "ST", 42.0, 0.85, PerWeight, None),
        (Structural, "BU-450", "Built-up section, 450 deep", "m", "ST", 58.0, 0.85, PerWeight, None),
        // --- Structural: secondary members ---
        (Structural, "Z-150", "Z purlin/girt 150x1.5", "m", "ST", 4.3, 0.98, PerWeight, None),
        (Structural, "Z-180", "Z purlin/girt 180x1.8", "m", "ST", 5.1, 0.98, PerWeight, None),
        (Structural, "Z-200", "Z purlin/girt 200x2.0", "m", "ST", 6.0, 0.98, PerWeight, None),
        (Structural, "Z-250", "Z purlin/girt 250x2.5", "m", "ST", 7.9, 0.98, PerWeight, None),
        (Structural, "C-200", "C girt 200x2.0", "m", "ST", 5.8, 0.98, PerWeight, None),
        (Structural, "JMB-C150", "Opening jamb channel 150", "m", "ST", 5.8, 1.02, PerWeight, None),
        (Structural, "BRC-ROD16", "Bracing rod 16mm c/w hardware", "m", "ST", 1.58, 1.15, PerWeight, None),
        // --- Structural: tube posts ---
        (Structural, "TUB-100X50", "Tube post 100x50x2.5", "m", "ST", 6.9, 1.05, PerWeight, None),
        (Structural, "TUB-150X50", "Tube post 150x50x3.0", "m", "ST", 8.8, 1.05, PerWeight, None),
        (Structural, "TUB-200X60", "Tube post 200x60x4.0", "m", "ST", 12.4, 1.05, PerWeight, None),
        // --- Structural: crane components ---
        (Structural, "CRB-310UB", "Crane beam 310UB", "m", "SS", 46.2, 1.10, PerWeight, None),
        (Structural, "CRB-410UB", "Crane beam 410UB", "m", "SS", 59.7, 1.10, PerWeight, None),
        (Structural, "CRB-530UB", "Crane beam 530UB", "m", "SS", 82.0, 1.10, PerWeight, None),
        (Structural, "CRB-610UB", "Crane beam 610UB", "m", "SS", 101.0, 1.10, PerWeight, None),
        (Structural, "CRB-BU700", "Crane beam, built-up 700", "m", "SS", 137.0, 1.18, PerWeight, None),
        (Structural, "CBK-10", "Crane bracket, 10t class", "pcs", "SS", 35.0, 1.10, PerWeight, None),
        (Structural, "CBK-20", "Crane bracket, 20t class", "pcs", "SS", 58.0, 1.10, PerWeight, None),
        (Structural, "CBK-30", "Crane bracket, 30t class", "pcs", "SS", 86.0, 1.10, PerWeight, None),
        (Structural, "CBK-45", "Crane bracket, 45t class", "pcs", "SS", 120.0, 1.10, PerWeight, None),
        (Structural, "CBK-60", "Crane bracket, 60t class", "pcs", "SS", 165.0, 1.18, PerWeight, None),
        (Structural, "CRL-A45", "Crane rail A45", "m", "SS", 22.1, 1.25, PerWeight, None),
        (Structural, "CRL-A55", "Crane rail A55", "m", "SS", 31.8, 1.25, PerWeight, None),
        (Structural, "CRL-A65", "Crane rail A65", "m", "SS", 43.1, 1.25, PerWeight, None),
        (Structural, "CRL-A75", "Crane rail A75", "m", "SS", 56.2, 1.25, PerWeight, None),
        (Structural, "CRL-A100", "Crane rail A100", "m", "SS", 74.3, 1.32, PerWeight, None),
        (Structural, "RCL-STD", "Rail clip c/w pad, standard", "pcs", "SS", 1.4, 1.40, PerWeight, None),
        (Structural, "RCL-HVY", "Rail clip c/w pad, heavy", "pcs", "SS", 2.2, 1.40, PerWeight, None),
        // --- Structural: mezzanine members ---
        (Structural, "UB-250", "Universal beam 250UB", "m", "SS", 31.4, 1.05, PerWeight, None),
        (Structural, "UC-200", "Universal column 200UC", "m", "SS", 46.1, 1.05, PerWeight, None),
        (Structural, "ANG-75", "Edge angle 75x75x6", "m", "SS", 4.6, 1.02, PerWeight, None),
        (Structural, "CON-FAS", "Fascia connection plate assembly", "pcs", "ST", 8.5, 1.20, PerWeight, None),
        // --- Raw materials ---
        (RawMaterial, "INS-FG50", "Fiberglass insulation 50mm faced", "m²", "RM", 0.8, 2.10, PerUnit, Some(1.0)),
        (RawMaterial, "INS-FG100", "Fiberglass insulation 100mm faced", "m²", "RM", 1.5, 3.40, PerUnit, Some(1.0)),
        (RawMaterial, "SEAL-BUT", "Butyl sealant tape roll", "pcs", "RM", 1.2, 6.80, PerUnit, None),
    ];

    for &(catalog, code, description, unit, sales, weight, rate, basis, surface) in products {
        store.insert(ReferenceProduct {
            catalog,
            code: code.to_string(),
            description: description.to_string(),
            unit: unit.to_string(),
            sales_code: sales.to_string(),
            weight_per_unit: weight,
            rate,
            basis,
            surface_area: surface,
        });
    }

    store
}
