//! Interior partitions: posts, wind-selected girts, and optional sheeting
//! with matching fasteners. A partition with zero height or zero length is
//! silently skipped.

use crate::config::PartitionEntry;
use crate::detail::{BuildingContext, LineItem};
use crate::selection::{self, PARTITION_GIRT_BANDS};

/// Partition post spacing along the wall (m)
const POST_SPACING: f64 = 6.0;
/// Girt line spacing up the partition (m)
const GIRT_SPACING: f64 = 1.5;
/// Sheeting fastener density (screws per m²)
const SHEET_SCREWS_PER_SQM: f64 = 4.0;

fn wants_sheeting(code: &str) -> bool {
    !code.trim().is_empty() && !code.trim().eq_ignore_ascii_case("none")
}

pub fn generate(entry: &PartitionEntry, ctx: &BuildingContext) -> Vec<LineItem> {
    if entry.height <= 0.0 || entry.length <= 0.0 {
        return Vec::new();
    }

    let wind = ctx.config.effective_wind(entry.wind_speed);
    let mut items = vec![LineItem::header(format!(
        "PARTITION - {}",
        entry.description
    ))];

    // Posts at fixed spacing, plus the closing post
    let post_count = (entry.length / POST_SPACING).floor() + 1.0;
    items.push(LineItem::from_product(
        &ctx.structural("TUB-150X50"),
        post_count,
        entry.height,
        entry.phase,
    ));

    // Girt section by wind exposure over the partition height
    let girt_code = selection::select(PARTITION_GIRT_BANDS, wind * entry.height);
    let girt_lines = (entry.height / GIRT_SPACING).floor() + 1.0;
    items.push(LineItem::from_product(
        &ctx.structural(girt_code),
        girt_lines,
        entry.length,
        entry.phase,
    ));

    if wants_sheeting(&entry.sheeting_code) {
        let area = entry.length * entry.height;
        items.push(LineItem::from_product(
            &ctx.general(&entry.sheeting_code),
            area,
            1.0,
            entry.phase,
        ));
        items.push(LineItem::from_product(
            &ctx.general(selection::fastener_for_sheeting(&entry.sheeting_code)),
            SHEET_SCREWS_PER_SQM * area,
            1.0,
            entry.phase,
        ));
    }

    items
}
