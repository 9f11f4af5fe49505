//! Mezzanine floors: column grid, primary beams and joists, deck panels,
//! stairs, and the perimeter handrail and edge angle. The floor plan comes
//! from the column (length-wise) and beam (width-wise) spacing patterns;
//! an entry with an unusable pattern is silently skipped.

use crate::config::MezzanineEntry;
use crate::detail::{BuildingContext, LineItem};
use crate::geometry::{resolve_spacing, total_length};

/// Clear height of mezzanine columns (m)
const COLUMN_HEIGHT: f64 = 3.0;
/// Joist spacing across the deck (m)
const JOIST_SPACING: f64 = 1.5;

pub fn generate(entry: &MezzanineEntry, ctx: &BuildingContext) -> Vec<LineItem> {
    let columns = match resolve_spacing(&entry.column_pattern) {
        Ok(spans) => spans,
        Err(_) => return Vec::new(),
    };
    let beams = match resolve_spacing(&entry.beam_pattern) {
        Ok(spans) => spans,
        Err(_) => return Vec::new(),
    };

    let length = total_length(&columns);
    let width = total_length(&beams);
    let area = length * width;
    let perimeter = 2.0 * (length + width);

    let mut items = vec![LineItem::header(format!(
        "MEZZANINE - {}",
        entry.description
    ))];

    // Columns on every grid intersection
    let column_count = ((columns.len() + 1) * (beams.len() + 1)) as f64;
    items.push(LineItem::from_product(
        &ctx.structural("UC-200"),
        column_count,
        COLUMN_HEIGHT,
        entry.phase,
    ));

    // Primary beams on every column line, full width
    items.push(LineItem::from_product(
        &ctx.structural("UB-250"),
        (columns.len() + 1) as f64,
        width,
        entry.phase,
    ));

    // Joists between primaries
    let joist_lines = (length / JOIST_SPACING).floor() + 1.0;
    items.push(LineItem::from_product(
        &ctx.structural("UB-250"),
        joist_lines,
        width,
        entry.phase,
    ));

    // Deck panels over the full area
    let deck_code = if entry.deck_code.trim().is_empty() {
        "DECK-50"
    } else {
        entry.deck_code.as_str()
    };
    items.push(LineItem::from_product(
        &ctx.general(deck_code),
        area,
        1.0,
        entry.phase,
    ));

    // Stairs
    if entry.stair_count > 0 {
        items.push(LineItem::from_product(
            &ctx.general("STR-STD"),
            entry.stair_count as f64,
            1.0,
            entry.phase,
        ));
    }

    // Perimeter handrail and deck edge angle
    items.push(LineItem::from_product(
        &ctx.general("HR-PIPE"),
        perimeter,
        1.0,
        entry.phase,
    ));
    items.push(LineItem::from_product(
        &ctx.structural("ANG-75"),
        1.0,
        perimeter,
        entry.phase,
    ));

    items
}
