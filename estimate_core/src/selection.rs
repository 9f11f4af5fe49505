//! # Structural Selection Rules
//!
//! Pure, total functions from engineering parameters to product codes,
//! expressed as ordered threshold tables: first band whose `max_bound`
//! covers the input wins, and every table ends in an unbounded band so the
//! selection is exhaustive. Tables are plain data so they can be audited
//! and tested without touching generator control flow.
//!
//! These are *selection* rules (lookup and threshold), not structural
//! analysis; the bands encode pre-approved engineering decisions.

/// One band of an ordered threshold table. Bands are contiguous and sorted
/// ascending by `max_bound`; the last band uses `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBand {
    pub max_bound: f64,
    pub code: &'static str,
}

/// First-match-wins selection over an ordered band table.
///
/// Tables always terminate in an unbounded band, so this is total for any
/// finite input.
pub fn select(table: &[ThresholdBand], value: f64) -> &'static str {
    for band in table {
        if value <= band.max_bound {
            return band.code;
        }
    }
    // Unreachable for well-formed tables; the last band is unbounded.
    table.last().map(|b| b.code).unwrap_or("")
}

// ============================================================================
// Crane component selection (by rated capacity in metric tons)
// ============================================================================

/// Crane runway beam section by capacity. Duty class does not change the
/// selection; it rides along on the item for costing.
pub const CRANE_BEAM_BANDS: &[ThresholdBand] = &[
    ThresholdBand { max_bound: 5.0, code: "CRB-310UB" },
    ThresholdBand { max_bound: 10.0, code: "CRB-410UB" },
    ThresholdBand { max_bound: 15.0, code: "CRB-530UB" },
    ThresholdBand { max_bound: 20.0, code: "CRB-610UB" },
    ThresholdBand { max_bound: f64::INFINITY, code: "CRB-BU700" },
];

/// Crane bracket by capacity
pub const CRANE_BRACKET_BANDS: &[ThresholdBand] = &[
    ThresholdBand { max_bound: 5.0, code: "CBK-10" },
    ThresholdBand { max_bound: 10.0, code: "CBK-20" },
    ThresholdBand { max_bound: 15.0, code: "CBK-30" },
    ThresholdBand { max_bound: 20.0, code: "CBK-45" },
    ThresholdBand { max_bound: f64::INFINITY, code: "CBK-60" },
];

/// Crane rail by capacity
pub const CRANE_RAIL_BANDS: &[ThresholdBand] = &[
    ThresholdBand { max_bound: 5.0, code: "CRL-A45" },
    ThresholdBand { max_bound: 10.0, code: "CRL-A55" },
    ThresholdBand { max_bound: 15.0, code: "CRL-A65" },
    ThresholdBand { max_bound: 20.0, code: "CRL-A75" },
    ThresholdBand { max_bound: f64::INFINITY, code: "CRL-A100" },
];

/// Rail clip family by capacity
pub const CRANE_RAIL_CLIP_BANDS: &[ThresholdBand] = &[
    ThresholdBand { max_bound: 15.0, code: "RCL-STD" },
    ThresholdBand { max_bound: f64::INFINITY, code: "RCL-HVY" },
];

// ============================================================================
// Fascia selection (by post index = wind × (height + width) × bay width)
// ============================================================================

/// Fascia post section by post index
pub const FASCIA_POST_BANDS: &[ThresholdBand] = &[
    ThresholdBand { max_bound: 2500.0, code: "TUB-100X50" },
    ThresholdBand { max_bound: 6000.0, code: "TUB-150X50" },
    ThresholdBand { max_bound: f64::INFINITY, code: "TUB-200X60" },
];

/// Fascia girt section by the same wind index
pub const FASCIA_GIRT_BANDS: &[ThresholdBand] = &[
    ThresholdBand { max_bound: 2500.0, code: "Z-150" },
    ThresholdBand { max_bound: 6000.0, code: "Z-180" },
    ThresholdBand { max_bound: f64::INFINITY, code: "Z-200" },
];

/// Vertical girt spacing divisor used by the girt-line formula (m).
/// Fixed rule constant reproduced from the approved rule set.
pub const FASCIA_GIRT_SPACING: f64 = 1.7;

/// Post index for fascia member selection.
pub fn post_index(wind_speed: f64, height: f64, width: f64, bay_width: f64) -> f64 {
    wind_speed * (height + width) * bay_width
}

/// Number of girt lines on a fascia face: at least three, then one line
/// per [`FASCIA_GIRT_SPACING`] of combined height + width.
pub fn fascia_girt_lines(height: f64, width: f64) -> u32 {
    let computed = ((height + width) / FASCIA_GIRT_SPACING).floor() as u32 + 1;
    computed.max(3)
}

// ============================================================================
// Partition girts (by wind speed × partition height)
// ============================================================================

pub const PARTITION_GIRT_BANDS: &[ThresholdBand] = &[
    ThresholdBand { max_bound: 4.2, code: "Z-150" },
    ThresholdBand { max_bound: 7.0, code: "Z-180" },
    ThresholdBand { max_bound: f64::INFINITY, code: "Z-200" },
];

// ============================================================================
// Building secondary members (purlins/girts by bay length)
// ============================================================================

/// Primary frame (rafter/column) built-up section by the largest clear span
pub const FRAME_BANDS: &[ThresholdBand] = &[
    ThresholdBand { max_bound: 15.0, code: "BU-250" },
    ThresholdBand { max_bound: 24.0, code: "BU-350" },
    ThresholdBand { max_bound: f64::INFINITY, code: "BU-450" },
];

pub const PURLIN_BANDS: &[ThresholdBand] = &[
    ThresholdBand { max_bound: 6.0, code: "Z-150" },
    ThresholdBand { max_bound: 8.0, code: "Z-200" },
    ThresholdBand { max_bound: f64::INFINITY, code: "Z-250" },
];

// ============================================================================
// Fastener family (by sheeting-code prefix)
// ============================================================================

/// Prefix → fastener code. First matching prefix wins; carbon steel is the
/// unlisted default (aluminium sheets take stainless to avoid galvanic
/// corrosion, PU composite panels take long panel screws).
pub const FASTENER_PREFIX_TABLE: &[(&str, &str)] = &[
    ("AL", "SCR-SS-25"),
    ("PU", "SCR-PU-85"),
];

/// Default fastener for plain steel sheeting
pub const FASTENER_DEFAULT: &str = "SCR-CS-25";

/// Select the fastener family for a sheeting code.
pub fn fastener_for_sheeting(sheeting_code: &str) -> &'static str {
    let upper = sheeting_code.to_uppercase();
    for (prefix, fastener) in FASTENER_PREFIX_TABLE {
        if upper.starts_with(prefix) {
            return fastener;
        }
    }
    FASTENER_DEFAULT
}

// ============================================================================
// Liner fastening multipliers (fixed rule constants, per m² of liner)
// ============================================================================

/// Primary (structural) screws per m² of liner sheet
pub const LINER_PRIMARY_SCREWS_PER_SQM: f64 = 0.5;
/// Secondary (stitch) screws per m² of liner sheet
pub const LINER_SECONDARY_SCREWS_PER_SQM: f64 = 4.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_first_match_wins() {
        assert_eq!(select(CRANE_BEAM_BANDS, 0.5), "CRB-310UB");
        assert_eq!(select(CRANE_BEAM_BANDS, 5.0), "CRB-310UB");
        assert_eq!(select(CRANE_BEAM_BANDS, 5.01), "CRB-410UB");
        assert_eq!(select(CRANE_BEAM_BANDS, 25.0), "CRB-BU700");
        assert_eq!(select(CRANE_BEAM_BANDS, 80.0), "CRB-BU700");
    }

    #[test]
    fn test_crane_tables_monotonic_and_exhaustive() {
        for table in [
            CRANE_BEAM_BANDS,
            CRANE_BRACKET_BANDS,
            CRANE_RAIL_BANDS,
            CRANE_RAIL_CLIP_BANDS,
            FASCIA_POST_BANDS,
            FASCIA_GIRT_BANDS,
            PARTITION_GIRT_BANDS,
            FRAME_BANDS,
            PURLIN_BANDS,
        ] {
            // Bands sorted ascending, terminated by an unbounded band
            for pair in table.windows(2) {
                assert!(pair[0].max_bound < pair[1].max_bound);
            }
            assert_eq!(table.last().unwrap().max_bound, f64::INFINITY);
        }
    }

    #[test]
    fn test_crane_beam_severity_non_decreasing() {
        // Section weight must not decrease as capacity grows across bands
        use crate::catalog::{builtin_reference_store, Catalog, CatalogStore};
        let store = builtin_reference_store();
        let mut last_weight = 0.0;
        for capacity in [5.0, 10.0, 15.0, 20.0, 25.0] {
            let code = select(CRANE_BEAM_BANDS, capacity);
            let weight = store
                .fetch(Catalog::Structural, code)
                .unwrap()
                .unwrap()
                .weight_per_unit;
            assert!(weight >= last_weight, "beam weight decreased at {} t", capacity);
            last_weight = weight;
        }
    }

    #[test]
    fn test_crane_beam_codes_distinct_across_bands() {
        assert_ne!(select(CRANE_BEAM_BANDS, 5.0), select(CRANE_BEAM_BANDS, 10.0));
        assert_ne!(select(CRANE_BEAM_BANDS, 10.0), select(CRANE_BEAM_BANDS, 25.0));
    }

    #[test]
    fn test_fascia_post_bands() {
        // wind 0.7 × (2+1) × bay 6 = 12.6 → light post
        assert_eq!(select(FASCIA_POST_BANDS, post_index(0.7, 2.0, 1.0, 6.0)), "TUB-100X50");
        assert_eq!(select(FASCIA_POST_BANDS, 2500.0), "TUB-100X50");
        assert_eq!(select(FASCIA_POST_BANDS, 2500.1), "TUB-150X50");
        assert_eq!(select(FASCIA_POST_BANDS, 6000.1), "TUB-200X60");
    }

    #[test]
    fn test_fascia_girt_lines() {
        // Small fascia still gets the three-line minimum
        assert_eq!(fascia_girt_lines(1.0, 0.5), 3);
        // (2 + 1) / 1.7 = 1.76 → floor 1 + 1 = 2 → clamped to 3
        assert_eq!(fascia_girt_lines(2.0, 1.0), 3);
        // (5 + 2) / 1.7 = 4.11 → floor 4 + 1 = 5
        assert_eq!(fascia_girt_lines(5.0, 2.0), 5);
    }

    #[test]
    fn test_fastener_prefix_selection() {
        assert_eq!(fastener_for_sheeting("AL45-250"), "SCR-SS-25");
        assert_eq!(fastener_for_sheeting("al45-250"), "SCR-SS-25");
        assert_eq!(fastener_for_sheeting("PU-50"), "SCR-PU-85");
        assert_eq!(fastener_for_sheeting("MS45-250"), "SCR-CS-25");
        assert_eq!(fastener_for_sheeting(""), "SCR-CS-25");
    }

    #[test]
    fn test_liner_multipliers() {
        assert_eq!(LINER_PRIMARY_SCREWS_PER_SQM, 0.5);
        assert_eq!(LINER_SECONDARY_SCREWS_PER_SQM, 4.0);
    }
}
