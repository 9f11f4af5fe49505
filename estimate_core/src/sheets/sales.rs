//! Sales rollup: one row per sales code, in first-appearance order, plus
//! a grand total row. The realized markup ratio per group comes from the
//! priced category totals, so the sheet needs no access to the original
//! markup inputs.

use serde::{Deserialize, Serialize};

use crate::costing::{CostCategory, PricedBillOfMaterials};

/// One rollup row. The grand total row carries an empty sales code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRollupRow {
    pub sales_code: String,
    pub weight: f64,
    pub cost: f64,
    pub selling_price: f64,
    /// selling_price / cost; 1.0 when the group carries no cost
    pub markup_ratio: f64,
    pub is_total: bool,
}

pub fn sales_rollup(priced: &PricedBillOfMaterials) -> Vec<SalesRollupRow> {
    let mut rows: Vec<SalesRollupRow> = Vec::new();

    for item in priced.bill.items.iter().filter(|i| i.is_substantive()) {
        let ratio = category_ratio(priced, CostCategory::from_sales_code(&item.sales_code));
        let row = match rows.iter_mut().find(|r| r.sales_code == item.sales_code) {
            Some(row) => row,
            None => {
                rows.push(SalesRollupRow {
                    sales_code: item.sales_code.clone(),
                    weight: 0.0,
                    cost: 0.0,
                    selling_price: 0.0,
                    markup_ratio: ratio,
                    is_total: false,
                });
                rows.last_mut().expect("just pushed")
            }
        };
        row.weight += item.total_weight;
        row.cost += item.total_price;
        row.selling_price += item.total_price * ratio;
    }

    let total_weight: f64 = rows.iter().map(|r| r.weight).sum();
    let total_cost: f64 = rows.iter().map(|r| r.cost).sum();
    let total_selling: f64 = rows.iter().map(|r| r.selling_price).sum();
    rows.push(SalesRollupRow {
        sales_code: String::new(),
        weight: total_weight,
        cost: total_cost,
        selling_price: total_selling,
        markup_ratio: if total_cost > 0.0 {
            total_selling / total_cost
        } else {
            1.0
        },
        is_total: true,
    });

    rows
}

/// Realized ratio for a category in the priced bill.
fn category_ratio(priced: &PricedBillOfMaterials, category: CostCategory) -> f64 {
    priced
        .category_totals
        .iter()
        .find(|t| t.category == category)
        .filter(|t| t.cost > 0.0)
        .map(|t| t.selling_price / t.cost)
        .unwrap_or(1.0)
}
