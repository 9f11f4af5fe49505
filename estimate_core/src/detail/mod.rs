//! # Detail Generation
//!
//! The orchestrator that assembles the full, ordered line-item list for a
//! building configuration, plus one generator module per optional
//! sub-structure type. Generation order is fixed and part of the contract
//! (report sheets display items in generation order):
//!
//! 1. base building-area items
//! 2. openings
//! 3. accessories
//! 4. cranes
//! 5. mezzanines
//! 6. partitions
//! 7. canopies / fascias
//! 8. liners
//! 9. imported items
//!
//! Every generator follows the same contract: it returns an empty sequence
//! for a structurally invalid entry (zero rail centers, zero canopy width,
//! and so on) rather than an error, and prefixes its output with exactly
//! one header row when it emits anything.

pub mod accessories;
pub mod base;
pub mod canopies;
pub mod cranes;
pub mod item;
pub mod liners;
pub mod mezzanines;
pub mod openings;
pub mod partitions;

pub use item::{BillOfMaterials, LineItem};

use crate::catalog::{Catalog, LookupService, ReferenceProduct};
use crate::config::BuildingConfiguration;
use crate::errors::EstimateResult;
use crate::geometry::BuildingGeometry;

/// Shared per-calculation context: the configuration, the resolved
/// geometry, and the catalog lookup capability.
pub struct BuildingContext<'a> {
    pub config: &'a BuildingConfiguration,
    pub geometry: BuildingGeometry,
    pub lookup: &'a LookupService,
}

impl<'a> BuildingContext<'a> {
    pub fn resolve(
        config: &'a BuildingConfiguration,
        lookup: &'a LookupService,
    ) -> EstimateResult<Self> {
        let geometry = BuildingGeometry::resolve(
            &config.bay_spacing,
            &config.span_spacing,
            config.eave_front_m,
            config.eave_back_m,
            config.slope_left,
            config.slope_right,
        )?;
        Ok(BuildingContext {
            config,
            geometry,
            lookup,
        })
    }

    pub fn structural(&self, code: &str) -> ReferenceProduct {
        self.lookup.get_by_code(Catalog::Structural, code)
    }

    pub fn general(&self, code: &str) -> ReferenceProduct {
        self.lookup.get_by_code(Catalog::General, code)
    }

    pub fn raw_material(&self, code: &str) -> ReferenceProduct {
        self.lookup.get_by_code(Catalog::RawMaterial, code)
    }
}

/// Append a generated component block, adding the trailing separator row
/// when the block is non-empty.
fn push_block(items: &mut Vec<LineItem>, block: Vec<LineItem>) {
    if !block.is_empty() {
        items.extend(block);
        items.push(LineItem::separator());
    }
}

/// Generate the complete ordered detail list for a configuration.
///
/// Validates first; a validation or spacing-parse failure means no items
/// are generated. Missing sub-structure lists are simply empty, so a bare
/// configuration yields only the base building-area items.
pub fn generate_detail(
    config: &BuildingConfiguration,
    lookup: &LookupService,
) -> EstimateResult<Vec<LineItem>> {
    config.validate()?;
    let ctx = BuildingContext::resolve(config, lookup)?;

    tracing::info!(
        length = ctx.geometry.length,
        width = ctx.geometry.width,
        "generating detail items"
    );

    let mut items = base::generate(&ctx);

    tracing::debug!("openings: {} entries", config.openings.len());
    for entry in &config.openings {
        push_block(&mut items, openings::generate(entry, &ctx));
    }

    tracing::debug!("accessories: {} entries", config.accessories.len());
    for entry in &config.accessories {
        push_block(&mut items, accessories::generate(entry, &ctx));
    }

    tracing::debug!("cranes: {} entries", config.cranes.len());
    for entry in &config.cranes {
        push_block(&mut items, cranes::generate(entry, &ctx));
    }

    tracing::debug!("mezzanines: {} entries", config.mezzanines.len());
    for entry in &config.mezzanines {
        push_block(&mut items, mezzanines::generate(entry, &ctx));
    }

    tracing::debug!("partitions: {} entries", config.partitions.len());
    for entry in &config.partitions {
        push_block(&mut items, partitions::generate(entry, &ctx));
    }

    tracing::debug!("canopies: {} entries", config.canopies.len());
    for entry in &config.canopies {
        push_block(&mut items, canopies::generate(entry, &ctx));
    }

    tracing::debug!("liners: {} entries", config.liners.len());
    for entry in &config.liners {
        push_block(&mut items, liners::generate(entry, &ctx));
    }

    if !config.imported_items.is_empty() {
        let mut block = vec![LineItem::header("IMPORTED ITEMS")];
        for imported in &config.imported_items {
            block.push(imported_line(imported));
        }
        push_block(&mut items, block);
    }

    tracing::info!(count = items.len(), "detail generation complete");
    Ok(items)
}

/// Convert an externally priced import into a line item verbatim.
fn imported_line(imported: &crate::config::ImportedItem) -> LineItem {
    use crate::catalog::PricingBasis;
    use crate::costing::CostCategory;

    let total_weight = imported.quantity * imported.unit_weight;
    let description = if imported.description.is_empty() {
        imported.code.clone()
    } else {
        imported.description.clone()
    };

    LineItem {
        line_no: 0,
        code: imported.code.clone(),
        sales_code: imported.sales_code.clone(),
        cost_code: CostCategory::from_sales_code(&imported.sales_code)
            .code()
            .to_string(),
        description,
        size: 1.0,
        unit: "pcs".to_string(),
        quantity: imported.quantity,
        unit_weight: imported.unit_weight,
        total_weight,
        unit_rate: imported.unit_rate,
        total_price: imported.quantity * imported.unit_rate,
        basis: PricingBasis::PerUnit,
        category: imported.sales_code.clone(),
        phase: imported.phase,
        is_header: false,
        is_separator: false,
    }
}

/// Run the full pipeline: detail generation followed by the accumulator.
pub fn generate_bill(
    config: &BuildingConfiguration,
    lookup: &LookupService,
) -> EstimateResult<BillOfMaterials> {
    Ok(BillOfMaterials::from_items(generate_detail(config, lookup)?))
}
