//! Cost-category breakdown: the priced category totals flattened into
//! display rows, zero-cost categories included so the sheet shape is
//! stable across estimates.

use serde::{Deserialize, Serialize};

use crate::costing::{CostCategory, PricedBillOfMaterials};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownRow {
    pub category: CostCategory,
    pub label: String,
    pub weight: f64,
    pub cost: f64,
    pub selling_price: f64,
}

pub fn cost_breakdown(priced: &PricedBillOfMaterials) -> Vec<CostBreakdownRow> {
    priced
        .category_totals
        .iter()
        .map(|t| CostBreakdownRow {
            category: t.category,
            label: t.category.display_name().to_string(),
            weight: t.weight,
            cost: t.cost,
            selling_price: t.selling_price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::{price_bill, Markups};
    use crate::detail::item::BillOfMaterials;

    #[test]
    fn test_all_categories_present() {
        let priced = price_bill(
            BillOfMaterials::from_items(Vec::new()),
            &Markups::default(),
            "FOB",
        );
        let rows = cost_breakdown(&priced);
        assert_eq!(rows.len(), CostCategory::ALL.len());
        assert_eq!(rows[0].category, CostCategory::Steel);
        assert!(rows.iter().all(|r| r.cost == 0.0));
    }
}
