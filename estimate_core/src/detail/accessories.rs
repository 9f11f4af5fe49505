//! Accessories: pass-through code/quantity pairs. Weight and rate come
//! straight from the catalog; no engineering selection is involved.

use crate::catalog::Catalog;
use crate::config::AccessoryEntry;
use crate::detail::{BuildingContext, LineItem};

pub fn generate(entry: &AccessoryEntry, ctx: &BuildingContext) -> Vec<LineItem> {
    if entry.code.trim().is_empty() || entry.quantity <= 0.0 {
        return Vec::new();
    }

    let product = ctx.lookup.get_by_code(Catalog::General, &entry.code);
    let label = if entry.description.is_empty() {
        product.description.clone()
    } else {
        entry.description.clone()
    };

    let mut item = LineItem::from_product(&product, entry.quantity, 1.0, entry.phase);
    // Accessories roll up under their own sales code even when the catalog
    // entry carries none (draft placeholder).
    if item.sales_code.is_empty() {
        item.sales_code = "AC".to_string();
        item.category = "AC".to_string();
    }

    vec![LineItem::header(format!("ACCESSORY - {}", label)), item]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_reference_store, LookupService, ReferenceCache};
    use crate::config::BuildingConfiguration;
    use std::sync::Arc;

    fn ctx_fixture() -> (BuildingConfiguration, LookupService) {
        let config = BuildingConfiguration {
            bay_spacing: "2@8".to_string(),
            span_spacing: "1@18".to_string(),
            eave_front_m: 5.0,
            eave_back_m: 5.0,
            ..Default::default()
        };
        let lookup = LookupService::new(
            Arc::new(builtin_reference_store()),
            Arc::new(ReferenceCache::with_default_ttl()),
        );
        (config, lookup)
    }

    #[test]
    fn test_pass_through_with_catalog_rate() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let entry = AccessoryEntry {
            description: "ridge vents".to_string(),
            code: "GUT-STD".to_string(),
            quantity: 12.0,
            phase: 2,
        };
        let items = generate(&entry, &ctx);
        assert_eq!(items.len(), 2);
        assert!(items[0].is_header);
        assert_eq!(items[1].quantity, 12.0);
        assert_eq!(items[1].unit_rate, 5.80);
        assert_eq!(items[1].phase, 2);
    }

    #[test]
    fn test_unknown_code_yields_placeholder_item() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let entry = AccessoryEntry {
            description: String::new(),
            code: "VENT-TBD".to_string(),
            quantity: 3.0,
            phase: 1,
        };
        let items = generate(&entry, &ctx);
        assert_eq!(items[1].code, "VENT-TBD");
        assert_eq!(items[1].total_weight, 0.0);
        assert_eq!(items[1].sales_code, "AC");
    }

    #[test]
    fn test_invalid_entry_skipped() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();

        let no_code = AccessoryEntry {
            description: "x".to_string(),
            code: " ".to_string(),
            quantity: 2.0,
            phase: 1,
        };
        assert!(generate(&no_code, &ctx).is_empty());

        let no_qty = AccessoryEntry {
            description: "x".to_string(),
            code: "GUT-STD".to_string(),
            quantity: 0.0,
            phase: 1,
        };
        assert!(generate(&no_qty, &ctx).is_empty());
    }
}
