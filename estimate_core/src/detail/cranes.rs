//! Crane runway systems: beams, brackets, rails, clips, and end stoppers.
//! Component sections come from the capacity threshold tables; quantities
//! follow the crane-run bay pattern. Entries with zero rail centers, or an
//! unparseable run pattern, are silently skipped.

use crate::config::CraneEntry;
use crate::detail::{BuildingContext, LineItem};
use crate::geometry::{resolve_spacing, total_length};
use crate::selection::{
    self, CRANE_BEAM_BANDS, CRANE_BRACKET_BANDS, CRANE_RAIL_BANDS, CRANE_RAIL_CLIP_BANDS,
};

/// Rail clip spacing along each runway (m)
const CLIP_SPACING: f64 = 0.5;
/// Stoppers: one pair at each runway end
const STOPPER_COUNT: f64 = 4.0;

pub fn generate(entry: &CraneEntry, ctx: &BuildingContext) -> Vec<LineItem> {
    if entry.rail_centers <= 0.0 || entry.capacity_t <= 0.0 {
        return Vec::new();
    }
    let runway_bays = match resolve_spacing(&entry.runway_pattern) {
        Ok(bays) => bays,
        // Draft entry without a usable run pattern: skip, not an error
        Err(_) => return Vec::new(),
    };

    let runway_length = total_length(&runway_bays);
    let bay_count = runway_bays.len() as f64;
    let avg_bay = runway_length / bay_count;

    let mut items = vec![LineItem::header(format!(
        "CRANE - {} ({}t {})",
        entry.description,
        entry.capacity_t,
        entry.duty.display_name()
    ))];

    // Runway beams, both sides
    let beam = ctx.structural(selection::select(CRANE_BEAM_BANDS, entry.capacity_t));
    items.push(LineItem::from_product(
        &beam,
        bay_count * 2.0,
        avg_bay,
        entry.phase,
    ));

    // Support brackets on every frame line, both sides
    let bracket = ctx.structural(selection::select(CRANE_BRACKET_BANDS, entry.capacity_t));
    items.push(LineItem::from_product(
        &bracket,
        (bay_count + 1.0) * 2.0,
        1.0,
        entry.phase,
    ));

    // Rails over the full runway, both sides
    let rail = ctx.structural(selection::select(CRANE_RAIL_BANDS, entry.capacity_t));
    items.push(LineItem::from_product(&rail, 2.0, runway_length, entry.phase));

    // Rail clips at fixed spacing
    let clip = ctx.structural(selection::select(CRANE_RAIL_CLIP_BANDS, entry.capacity_t));
    let clips_per_rail = (runway_length / CLIP_SPACING).ceil();
    items.push(LineItem::from_product(
        &clip,
        clips_per_rail * 2.0,
        1.0,
        entry.phase,
    ));

    // End stoppers
    items.push(LineItem::from_product(
        &ctx.general("CRS-END"),
        STOPPER_COUNT,
        1.0,
        entry.phase,
    ));

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_reference_store, LookupService, ReferenceCache};
    use crate::config::{BuildingConfiguration, CraneDuty};
    use std::sync::Arc;

    fn ctx_fixture() -> (BuildingConfiguration, LookupService) {
        let config = BuildingConfiguration {
            bay_spacing: "4@8".to_string(),
            span_spacing: "1@24".to_string(),
            eave_front_m: 8.0,
            eave_back_m: 8.0,
            ..Default::default()
        };
        let lookup = LookupService::new(
            Arc::new(builtin_reference_store()),
            Arc::new(ReferenceCache::with_default_ttl()),
        );
        (config, lookup)
    }

    fn crane(capacity_t: f64, rail_centers: f64, pattern: &str) -> CraneEntry {
        CraneEntry {
            description: "EOT crane".to_string(),
            capacity_t,
            duty: CraneDuty::Medium,
            rail_centers,
            runway_pattern: pattern.to_string(),
            phase: 1,
        }
    }

    #[test]
    fn test_zero_rail_centers_skipped() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        assert!(generate(&crane(10.0, 0.0, "4@8"), &ctx).is_empty());
    }

    #[test]
    fn test_bad_runway_pattern_skipped() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        assert!(generate(&crane(10.0, 20.0, ""), &ctx).is_empty());
        assert!(generate(&crane(10.0, 20.0, "banana"), &ctx).is_empty());
    }

    #[test]
    fn test_component_set_for_10t() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let items = generate(&crane(10.0, 20.0, "4@8"), &ctx);

        assert!(items[0].is_header);
        assert!(items[0].description.contains("10"));
        let codes: Vec<&str> = items[1..].iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["CRB-410UB", "CBK-20", "CRL-A55", "RCL-STD", "CRS-END"]);

        // 8 beams (4 bays × 2 runways) of 8 m
        assert_eq!(items[1].quantity, 8.0);
        assert_eq!(items[1].size, 8.0);
        // 10 brackets (5 frame lines × 2)
        assert_eq!(items[2].quantity, 10.0);
        // 2 rails over the 32 m runway
        assert_eq!(items[3].quantity, 2.0);
        assert_eq!(items[3].size, 32.0);
        // 64 clips per rail at 0.5 m, both rails
        assert_eq!(items[4].quantity, 128.0);
    }

    #[test]
    fn test_heavier_crane_selects_heavier_components() {
        let (config, lookup) = ctx_fixture();
        let ctx = BuildingContext::resolve(&config, &lookup).unwrap();
        let light = generate(&crane(5.0, 20.0, "4@8"), &ctx);
        let heavy = generate(&crane(30.0, 20.0, "4@8"), &ctx);

        assert_eq!(light[1].code, "CRB-310UB");
        assert_eq!(heavy[1].code, "CRB-BU700");
        assert!(heavy[1].total_weight > light[1].total_weight);
    }
}
