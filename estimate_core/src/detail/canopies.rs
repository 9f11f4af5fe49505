//! Canopies and fascias.
//!
//! Roof-extension and lean-to canopies get rafters, purlins, sheeting, and
//! drainage sized by width × spacing. The `Fascia` frame type takes a
//! distinct cladding-only pipeline: posts, girts, and connection hardware
//! are always emitted; the wall sheet, trim, and fasteners only when the
//! wall sheeting code is not "None".

use crate::config::{CanopyEntry, CanopyFrameType};
use crate::detail::{BuildingContext, LineItem};
use crate::geometry::{resolve_spacing, total_length};
use crate::selection::{
    self, FASCIA_GIRT_BANDS, FASCIA_POST_BANDS, FRAME_BANDS, PURLIN_BANDS,
};

/// Canopy purlin line spacing along the projection (m)
const PURLIN_SPACING: f64 = 1.5;
/// Sheeting fastener density for canopy roofs (screws per m²)
const SHEET_SCREWS_PER_SQM: f64 = 4.0;
/// Fascia fastener density (screws per m² of wall sheet)
const FASCIA_SCREWS_PER_SQM: f64 = 4.0;

fn wants_sheeting(code: &str) -> bool {
    !code.trim().is_empty() && !code.trim().eq_ignore_ascii_case("none")
}

pub fn generate(entry: &CanopyEntry, ctx: &BuildingContext) -> Vec<LineItem> {
    match entry.frame_type {
        CanopyFrameType::Fascia => generate_fascia(entry, ctx),
        _ => generate_canopy(entry, ctx),
    }
}

fn generate_canopy(entry: &CanopyEntry, ctx: &BuildingContext) -> Vec<LineItem> {
    if entry.width <= 0.0 {
        return Vec::new();
    }
    let bays = match resolve_spacing(&entry.spacing) {
        Ok(bays) => bays,
        Err(_) => return Vec::new(),
    };
    let length = total_length(&bays);
    let max_bay = bays.iter().cloned().fold(0.0, f64::max);

    let mut items = vec![LineItem::header(format!(
        "CANOPY - {} ({})",
        entry.description,
        entry.frame_type.display_name()
    ))];

    // Canopy rafters off every supported frame line
    let rafter = ctx.structural(selection::select(FRAME_BANDS, entry.width));
    items.push(LineItem::from_product(
        &rafter,
        (bays.len() + 1) as f64,
        entry.width,
        entry.phase,
    ));

    // Purlins along the canopy
    let purlin = ctx.structural(selection::select(PURLIN_BANDS, max_bay));
    let purlin_lines = (entry.width / PURLIN_SPACING).floor() + 1.0;
    items.push(LineItem::from_product(
        &purlin,
        purlin_lines,
        length,
        entry.phase,
    ));

    // Roof sheeting and matching fasteners
    if wants_sheeting(&entry.roof_sheeting_code) {
        let roof_area = length * entry.width;
        items.push(LineItem::from_product(
            &ctx.general(&entry.roof_sheeting_code),
            roof_area,
            1.0,
            entry.phase,
        ));
        items.push(LineItem::from_product(
            &ctx.general(selection::fastener_for_sheeting(&entry.roof_sheeting_code)),
            SHEET_SCREWS_PER_SQM * roof_area,
            1.0,
            entry.phase,
        ));
    }

    // Soffit / face sheeting when specified
    if wants_sheeting(&entry.wall_sheeting_code) && entry.height > 0.0 {
        items.push(LineItem::from_product(
            &ctx.general(&entry.wall_sheeting_code),
            length * entry.height,
            1.0,
            entry.phase,
        ));
    }

    // Drainage along the leading edge
    items.push(LineItem::from_product(
        &ctx.general("GUT-STD"),
        length,
        1.0,
        entry.phase,
    ));
    items.push(LineItem::from_product(
        &ctx.general("DSP-PVC"),
        (bays.len() + 1) as f64,
        ctx.config.eave_front_m,
        entry.phase,
    ));

    items
}

fn generate_fascia(entry: &CanopyEntry, ctx: &BuildingContext) -> Vec<LineItem> {
    if entry.width <= 0.0 && entry.height <= 0.0 {
        return Vec::new();
    }
    let bays = match resolve_spacing(&entry.spacing) {
        Ok(bays) => bays,
        Err(_) => return Vec::new(),
    };
    let length = total_length(&bays);
    let max_bay = bays.iter().cloned().fold(0.0, f64::max);
    let face = entry.height + entry.width;
    let wind = ctx.config.effective_wind(entry.wind_speed);
    let index = selection::post_index(wind, entry.height, entry.width, max_bay);

    let mut items = vec![LineItem::header(format!("FASCIA - {}", entry.description))];

    // Structural members are emitted regardless of sheeting selection
    let post = ctx.structural(selection::select(FASCIA_POST_BANDS, index));
    items.push(LineItem::from_product(
        &post,
        (bays.len() + 1) as f64,
        face,
        entry.phase,
    ));

    let girt = ctx.structural(selection::select(FASCIA_GIRT_BANDS, index));
    let girt_lines = selection::fascia_girt_lines(entry.height, entry.width) as f64;
    items.push(LineItem::from_product(
        &girt,
        girt_lines * bays.len() as f64,
        length / bays.len() as f64,
        entry.phase,
    ));

    items.push(LineItem::from_product(
        &ctx.structural("CON-FAS"),
        (bays.len() + 1) as f64,
        1.0,
        entry.phase,
    ));

    // Sheeting-dependent items
    if wants_sheeting(&entry.wall_sheeting_code) {
        let sheet_area = length * face;
        items.push(LineItem::from_product(
            &ctx.general(&entry.wall_sheeting_code),
            sheet_area,
            1.0,
            entry.phase,
        ));

        let trim_run = 2.0 * length + 4.0 * face;
        items.push(LineItem::from_product(
            &ctx.general("FLSH-STD"),
            trim_run,
            1.0,
            entry.phase,
        ));

        items.push(LineItem::from_product(
            &ctx.general(selection::fastener_for_sheeting(&entry.wall_sheeting_code)),
            FASCIA_SCREWS_PER_SQM * sheet_area,
            1.0,
            entry.phase,
        ));
    }

    items
}
