//! Base building-area items: primary frames, secondary members, sheeting,
//! trim, drainage, and fasteners for the main envelope. Always generated
//! first; never carries a component header.

use crate::detail::{BuildingContext, LineItem};
use crate::selection::{self, FRAME_BANDS, PURLIN_BANDS};

/// Purlin and girt line spacing along the slope / up the wall (m)
const SECONDARY_SPACING: f64 = 1.5;
/// Envelope fastening density (screws per m² of sheeting)
const SHEET_SCREWS_PER_SQM: f64 = 4.0;
/// Anchor bolts per column base
const BOLTS_PER_COLUMN: f64 = 4.0;

fn line_count(run: f64) -> f64 {
    (run / SECONDARY_SPACING).floor() + 1.0
}

/// Generate the building-area item block.
pub fn generate(ctx: &BuildingContext) -> Vec<LineItem> {
    let geom = &ctx.geometry;
    let config = ctx.config;
    let mut items = Vec::new();

    let frame_count = (geom.bays.len() + 1) as f64;
    let max_span = geom.spans.iter().cloned().fold(0.0, f64::max);
    let max_bay = geom.bays.iter().cloned().fold(0.0, f64::max);
    let avg_eave = (config.eave_front_m + config.eave_back_m) / 2.0;

    // Primary frames: one rafter line per frame, columns on every span line
    let frame_code = selection::select(FRAME_BANDS, max_span);
    let frame_section = ctx.structural(frame_code);
    items.push(LineItem::from_product(
        &frame_section,
        frame_count,
        geom.rafter,
        1,
    ));
    let column_count = frame_count * (geom.spans.len() + 1) as f64;
    items.push(LineItem::from_product(
        &frame_section,
        column_count,
        avg_eave,
        1,
    ));

    // Anchor bolts at every column base
    items.push(LineItem::from_product(
        &ctx.general("AB-M24"),
        column_count * BOLTS_PER_COLUMN,
        1.0,
        1,
    ));

    // Roof purlins and wall girts
    let secondary = ctx.structural(selection::select(PURLIN_BANDS, max_bay));
    items.push(LineItem::from_product(
        &secondary,
        line_count(geom.rafter),
        geom.length,
        1,
    ));
    let girt_run = 2.0 * (geom.length + geom.width);
    items.push(LineItem::from_product(
        &secondary,
        line_count(avg_eave),
        girt_run,
        1,
    ));

    // Longitudinal bracing rods in every bay, both side walls
    let brace_length = (max_bay * max_bay + avg_eave * avg_eave).sqrt();
    items.push(LineItem::from_product(
        &ctx.structural("BRC-ROD16"),
        geom.bays.len() as f64 * 2.0,
        brace_length,
        1,
    ));

    // Envelope sheeting
    let wall_sheet_area = geom.side_wall_area + 2.0 * geom.endwall_area;
    if !config.roof_panel_code.is_empty() {
        let roof_panel = ctx.general(&config.roof_panel_code);
        items.push(LineItem::from_product(&roof_panel, geom.roof_area, 1.0, 1));
        items.push(LineItem::from_product(
            &ctx.general(selection::fastener_for_sheeting(&config.roof_panel_code)),
            SHEET_SCREWS_PER_SQM * geom.roof_area,
            1.0,
            1,
        ));
    }
    if !config.wall_panel_code.is_empty() {
        let wall_panel = ctx.general(&config.wall_panel_code);
        items.push(LineItem::from_product(&wall_panel, wall_sheet_area, 1.0, 1));
        items.push(LineItem::from_product(
            &ctx.general(selection::fastener_for_sheeting(&config.wall_panel_code)),
            SHEET_SCREWS_PER_SQM * wall_sheet_area,
            1.0,
            1,
        ));
    }

    // Insulation under roof and walls when a core thickness is specified
    if config.core_thickness_mm > 0.0 {
        let insulation_code = if config.core_thickness_mm <= 50.0 {
            "INS-FG50"
        } else {
            "INS-FG100"
        };
        items.push(LineItem::from_product(
            &ctx.raw_material(insulation_code),
            geom.roof_area + wall_sheet_area,
            1.0,
            1,
        ));
    }

    // Trim and drainage
    let trim_run = 2.0 * geom.length + 2.0 * geom.width + 4.0 * geom.rafter;
    items.push(LineItem::from_product(&ctx.general("FLSH-STD"), trim_run, 1.0, 1));
    items.push(LineItem::from_product(
        &ctx.general("GUT-STD"),
        2.0 * geom.length,
        1.0,
        1,
    ));
    items.push(LineItem::from_product(
        &ctx.general("DSP-PVC"),
        frame_count,
        avg_eave,
        1,
    ));

    // Roof monitor framing and cladding
    if config.monitor_width_m > 0.0 {
        let monitor_frame = ctx.structural("Z-150");
        items.push(LineItem::from_product(
            &monitor_frame,
            frame_count,
            2.0 * config.monitor_height_m + config.monitor_width_m,
            1,
        ));
        if !config.roof_panel_code.is_empty() {
            let monitor_area =
                geom.length * (config.monitor_width_m + 2.0 * config.monitor_height_m);
            items.push(LineItem::from_product(
                &ctx.general(&config.roof_panel_code),
                monitor_area,
                1.0,
                1,
            ));
        }
    }

    items
}
