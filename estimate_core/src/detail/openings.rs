//! Framed openings: jamb, purlin-support, and bracing members scaled by
//! the opening count. An entry with zero openings is silently skipped.

use crate::config::OpeningEntry;
use crate::detail::{BuildingContext, LineItem};

pub fn generate(entry: &OpeningEntry, ctx: &BuildingContext) -> Vec<LineItem> {
    if entry.count == 0 {
        return Vec::new();
    }

    let count = entry.count as f64;
    let mut items = vec![LineItem::header(format!("OPENINGS - {}", entry.description))];

    // Two jambs per opening, full height
    items.push(LineItem::from_product(
        &ctx.structural("JMB-C150"),
        count * 2.0,
        entry.height,
        entry.phase,
    ));

    // Purlin-support headers over and under the opening
    items.push(LineItem::from_product(
        &ctx.structural("JMB-C150"),
        count * 2.0,
        entry.width,
        entry.phase,
    ));

    // Diagonal bracing either side of the opening
    let diagonal = (entry.width * entry.width + entry.height * entry.height).sqrt();
    items.push(LineItem::from_product(
        &ctx.structural("BRC-ROD16"),
        count * 2.0,
        diagonal,
        entry.phase,
    ));

    items
}
