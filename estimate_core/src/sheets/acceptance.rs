//! Job-acceptance summary: the commercial recap signed off before an
//! estimate is released. Recomputes nothing new; it restates the contract
//! split and price per ton from the priced bill, recaps the headline
//! building parameters, and derives the minimum delivery lead time from
//! fixed rules.

use serde::{Deserialize, Serialize};

use crate::config::BuildingConfiguration;
use crate::costing::PricedBillOfMaterials;

/// Minimum production lead time for any job (weeks)
pub const LEAD_TIME_BASE_WEEKS: u32 = 6;
/// Added per full 100 t of fabricated weight
pub const LEAD_TIME_WEEKS_PER_100T: u32 = 2;
/// Added when the job carries any crane system
pub const LEAD_TIME_CRANE_WEEKS: u32 = 2;
/// Added when the job carries any mezzanine floor
pub const LEAD_TIME_MEZZANINE_WEEKS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAcceptanceSummary {
    pub frame_type: String,
    pub freight_terms: String,
    pub area_code: String,
    pub paint_system: String,
    pub eave_front_m: f64,
    pub eave_back_m: f64,
    pub total_weight_t: f64,
    pub total_cost: f64,
    pub total_selling: f64,
    /// `None` when the bill carries no weight
    pub price_per_ton: Option<f64>,
    pub supply: f64,
    pub erection: f64,
    pub contract: f64,
    pub delivery_weeks: u32,
}

/// Minimum delivery lead time in weeks.
pub fn delivery_weeks(weight_t: f64, has_cranes: bool, has_mezzanines: bool) -> u32 {
    let mut weeks = LEAD_TIME_BASE_WEEKS;
    weeks += (weight_t / 100.0).floor() as u32 * LEAD_TIME_WEEKS_PER_100T;
    if has_cranes {
        weeks += LEAD_TIME_CRANE_WEEKS;
    }
    if has_mezzanines {
        weeks += LEAD_TIME_MEZZANINE_WEEKS;
    }
    weeks
}

pub fn job_acceptance_summary(
    priced: &PricedBillOfMaterials,
    config: &BuildingConfiguration,
) -> JobAcceptanceSummary {
    let weight_t = priced.bill.total_weight_t();
    JobAcceptanceSummary {
        frame_type: config.frame_type.display_name().to_string(),
        freight_terms: config.freight_terms.clone(),
        area_code: config.area_code.clone(),
        paint_system: config.paint_system.clone(),
        eave_front_m: config.eave_front_m,
        eave_back_m: config.eave_back_m,
        total_weight_t: weight_t,
        total_cost: priced.total_cost,
        total_selling: priced.total_selling,
        price_per_ton: priced.price_per_ton,
        supply: priced.contract.supply,
        erection: priced.contract.erection,
        contract: priced.contract.contract,
        delivery_weeks: delivery_weeks(
            weight_t,
            !config.cranes.is_empty(),
            !config.mezzanines.is_empty(),
        ),
    }
}
