//! Liner panel packages: an inner sheet plus two fastener grades per
//! covered surface. Primary screws pin the sheet to structure at a sparse
//! grid; stitching screws close the laps at a much denser one. Areas can
//! be overridden per entry, otherwise they fall back to the resolved
//! building geometry.

use crate::config::LinerEntry;
use crate::detail::{BuildingContext, LineItem};
use crate::selection::{LINER_PRIMARY_SCREWS_PER_SQM, LINER_SECONDARY_SCREWS_PER_SQM};

/// Liner sheet used when the entry does not name one
const DEFAULT_LINER_CODE: &str = "LIN-30";
/// Structure fastener for liner sheets
const PRIMARY_SCREW_CODE: &str = "SCR-CS-25";
/// Lap stitching fastener for liner sheets
const SECONDARY_SCREW_CODE: &str = "SCR-STCH-20";

pub fn generate(entry: &LinerEntry, ctx: &BuildingContext) -> Vec<LineItem> {
    let sheet_code = if entry.sheeting_code.trim().is_empty() {
        DEFAULT_LINER_CODE
    } else {
        entry.sheeting_code.as_str()
    };

    let roof_area = if entry.scope.covers_roof() {
        if entry.roof_area > 0.0 {
            entry.roof_area
        } else {
            ctx.geometry.roof_area
        }
    } else {
        0.0
    };
    // A manual wall override is taken as the net covered area; the opening
    // deduction only applies to the auto-computed envelope figure.
    let wall_area = if entry.scope.covers_wall() {
        if entry.wall_area > 0.0 {
            entry.wall_area
        } else {
            let auto = ctx.geometry.side_wall_area + 2.0 * ctx.geometry.endwall_area;
            (auto - entry.opening_deduction).max(0.0)
        }
    } else {
        0.0
    };

    if roof_area <= 0.0 && wall_area <= 0.0 {
        return Vec::new();
    }

    let mut items = vec![LineItem::header(format!("LINER - {}", entry.description))];
    if roof_area > 0.0 {
        push_surface(&mut items, entry, ctx, sheet_code, roof_area);
    }
    if wall_area > 0.0 {
        push_surface(&mut items, entry, ctx, sheet_code, wall_area);
    }
    items
}

fn push_surface(
    items: &mut Vec<LineItem>,
    entry: &LinerEntry,
    ctx: &BuildingContext,
    sheet_code: &str,
    area: f64,
) {
    items.push(LineItem::from_product(
        &ctx.general(sheet_code),
        area,
        1.0,
        entry.phase,
    ));
    items.push(LineItem::from_product(
        &ctx.general(PRIMARY_SCREW_CODE),
        LINER_PRIMARY_SCREWS_PER_SQM * area,
        1.0,
        entry.phase,
    ));
    items.push(LineItem::from_product(
        &ctx.general(SECONDARY_SCREW_CODE),
        LINER_SECONDARY_SCREWS_PER_SQM * area,
        1.0,
        entry.phase,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_reference_store, LookupService, ReferenceCache};
    use crate::config::{BuildingConfiguration, LinerScope};
    use std::sync::Arc;

    fn ctx_fixture() -> (BuildingConfiguration, LookupService) {
        let config = BuildingConfiguration {
            bay_spacing: "4@8".to_string(),
            span_spacing: "1@24".to_string(),
            eave_front_m: 6.0,
            eave_back_m: 6.0,
            ..Default::default()
        };
        let lookup = LookupService::new(
            Arc::new(builtin_reference_store()),
            Arc::new(ReferenceCache::with_default_ttl()),
        );
        (config, lookup)
    }

    fn liner(scope: LinerScope) -> LinerEntry {
        LinerEntry {
            description: "ceiling liner".to_string(),
            scope,
            sheeting_code: String::new(),
            roof_area: 0.0,
            wall_area: 0.0,
            opening_deduction: 0.0,
            phase: 1,
        }
    }

    #[test]
    fn test_screw_densities_over_roof() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let mut entry = liner(LinerScope::Roof);
        entry.roof_area = 100.0;
        let items = generate(&entry, &ctx);

        assert!(items[0].is_header);
        assert_eq!(items[1].code, "LIN-30");
        assert_eq!(items[1].quantity, 100.0);
        let primary = items.iter().find(|i| i.code == PRIMARY_SCREW_CODE).unwrap();
        assert_eq!(primary.quantity, 50.0);
        let stitch = items.iter().find(|i| i.code == SECONDARY_SCREW_CODE).unwrap();
        assert_eq!(stitch.quantity, 400.0);
    }

    #[test]
    fn test_roof_area_falls_back_to_geometry() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let items = generate(&liner(LinerScope::Roof), &ctx);
        assert_eq!(items[1].quantity, ctx.geometry.roof_area);
    }

    #[test]
    fn test_both_scopes_emit_two_surfaces() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let mut entry = liner(LinerScope::Both);
        entry.roof_area = 50.0;
        entry.wall_area = 30.0;
        let items = generate(&entry, &ctx);

        // Header plus two sheet/primary/stitch triples
        assert_eq!(items.len(), 7);
        assert_eq!(items[1].quantity, 50.0);
        assert_eq!(items[4].quantity, 30.0);
    }

    #[test]
    fn test_opening_deduction_reduces_auto_wall_area() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let mut entry = liner(LinerScope::Wall);
        entry.opening_deduction = 50.0;
        let items = generate(&entry, &ctx);

        let auto = ctx.geometry.side_wall_area + 2.0 * ctx.geometry.endwall_area;
        assert!((items[1].quantity - (auto - 50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_opening_deduction_clamps_at_zero() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let mut entry = liner(LinerScope::Wall);
        entry.opening_deduction = 1.0e6;
        assert!(generate(&entry, &ctx).is_empty());
    }

    #[test]
    fn test_wall_override_is_net_of_openings() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let mut entry = liner(LinerScope::Wall);
        entry.wall_area = 20.0;
        entry.opening_deduction = 500.0;
        let items = generate(&entry, &ctx);

        // The override already accounts for openings; no second deduction
        assert_eq!(items[1].quantity, 20.0);
    }

    #[test]
    fn test_custom_sheet_code() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let mut entry = liner(LinerScope::Roof);
        entry.roof_area = 10.0;
        entry.sheeting_code = "AL45-250".to_string();
        let items = generate(&entry, &ctx);
        assert_eq!(items[1].code, "AL45-250");
    }
}
