//! # Costing & Markup Engine
//!
//! Converts a generated [`BillOfMaterials`] into priced totals: one markup
//! ratio per cost category (steel, panels, structural steel, finance)
//! applied to the material-cost basis, plus the derived commercial figures
//! (price per metric ton, contract value, FOB/erection split).
//!
//! Markup ratios are validated to [0, 5] upstream; the engine still clamps
//! out-of-range values so a bad ratio can never produce a negative price.

use serde::{Deserialize, Serialize};

use crate::detail::item::BillOfMaterials;

/// Valid markup ratio range (inclusive)
pub const MARKUP_MIN: f64 = 0.0;
pub const MARKUP_MAX: f64 = 5.0;

/// Share of the selling price allocated to erection when the freight terms
/// include site works
pub const ERECTION_SHARE: f64 = 0.12;

/// Cost category a line item's material cost is booked under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    Steel,
    Panels,
    StructuralSteel,
    Finance,
}

/// Sales code → cost category mapping. Unlisted codes book under Steel.
const SALES_CODE_TABLE: &[(&str, CostCategory)] = &[
    ("ST", CostCategory::Steel),
    ("PA", CostCategory::Panels),
    ("RM", CostCategory::Panels),
    ("AC", CostCategory::Panels),
    ("SS", CostCategory::StructuralSteel),
    ("FR", CostCategory::Finance),
];

impl CostCategory {
    pub const ALL: [CostCategory; 4] = [
        CostCategory::Steel,
        CostCategory::Panels,
        CostCategory::StructuralSteel,
        CostCategory::Finance,
    ];

    /// Resolve a commercial sales code to its cost category.
    pub fn from_sales_code(sales_code: &str) -> Self {
        let upper = sales_code.to_uppercase();
        for (code, category) in SALES_CODE_TABLE {
            if upper == *code {
                return *category;
            }
        }
        CostCategory::Steel
    }

    /// Short cost code used on line items and report sheets
    pub fn code(&self) -> &'static str {
        match self {
            CostCategory::Steel => "STL",
            CostCategory::Panels => "PNL",
            CostCategory::StructuralSteel => "SST",
            CostCategory::Finance => "FIN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CostCategory::Steel => "Steel",
            CostCategory::Panels => "Panels & Accessories",
            CostCategory::StructuralSteel => "Structural Steel",
            CostCategory::Finance => "Finance & Freight",
        }
    }
}

/// Per-category markup ratios (selling price = cost × ratio).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markups {
    pub steel: f64,
    pub panels: f64,
    pub structural_steel: f64,
    pub finance: f64,
}

impl Default for Markups {
    fn default() -> Self {
        Markups {
            steel: 1.0,
            panels: 1.0,
            structural_steel: 1.0,
            finance: 1.0,
        }
    }
}

impl Markups {
    /// Markup for one category, clamped to the valid range.
    pub fn ratio_for(&self, category: CostCategory) -> f64 {
        let raw = match category {
            CostCategory::Steel => self.steel,
            CostCategory::Panels => self.panels,
            CostCategory::StructuralSteel => self.structural_steel,
            CostCategory::Finance => self.finance,
        };
        raw.clamp(MARKUP_MIN, MARKUP_MAX)
    }
}

/// Cost, selling price, and weight booked under one cost category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub category: CostCategory,
    pub weight: f64,
    pub cost: f64,
    pub selling_price: f64,
}

/// Supply/erection split of the contract value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractSplit {
    /// Ex-works / FOB supply value
    pub supply: f64,
    /// Erection value (zero under FOB terms)
    pub erection: f64,
    /// Total contract value
    pub contract: f64,
}

/// The priced calculation output: the bill plus every derived commercial
/// figure the report sheets project from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedBillOfMaterials {
    pub bill: BillOfMaterials,
    /// Totals per cost category, in [`CostCategory::ALL`] order
    pub category_totals: Vec<CategoryTotals>,
    pub total_cost: f64,
    pub total_selling: f64,
    /// Selling price per metric ton; `None` when total weight is zero
    pub price_per_ton: Option<f64>,
    pub contract: ContractSplit,
}

/// Price a bill of materials.
///
/// Header and separator rows carry no cost and are ignored. `freight_terms`
/// of `"FOB"` (case-insensitive) keeps erection out of the contract split.
pub fn price_bill(bill: BillOfMaterials, markups: &Markups, freight_terms: &str) -> PricedBillOfMaterials {
    let mut category_totals: Vec<CategoryTotals> = CostCategory::ALL
        .iter()
        .map(|&category| CategoryTotals {
            category,
            weight: 0.0,
            cost: 0.0,
            selling_price: 0.0,
        })
        .collect();

    for item in bill.items.iter().filter(|i| i.is_substantive()) {
        let category = CostCategory::from_sales_code(&item.sales_code);
        let slot = category_totals
            .iter_mut()
            .find(|t| t.category == category)
            .expect("every category is pre-seeded");
        slot.weight += item.total_weight;
        slot.cost += item.total_price;
    }

    let mut total_cost = 0.0;
    let mut total_selling = 0.0;
    for totals in &mut category_totals {
        totals.selling_price = totals.cost * markups.ratio_for(totals.category);
        total_cost += totals.cost;
        total_selling += totals.selling_price;
    }

    let tons = bill.total_weight / 1000.0;
    let price_per_ton = if tons > 0.0 {
        Some(total_selling / tons)
    } else {
        None
    };

    let fob = freight_terms.eq_ignore_ascii_case("FOB");
    let erection = if fob { 0.0 } else { total_selling * ERECTION_SHARE };
    let contract = ContractSplit {
        supply: total_selling - erection,
        erection,
        contract: total_selling,
    };

    PricedBillOfMaterials {
        bill,
        category_totals,
        total_cost,
        total_selling,
        price_per_ton,
        contract,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, PricingBasis, ReferenceProduct};
    use crate::detail::item::LineItem;

    fn product(sales_code: &str, rate: f64) -> ReferenceProduct {
        ReferenceProduct {
            catalog: Catalog::General,
            code: format!("TEST-{}", sales_code),
            description: "test".to_string(),
            unit: "pcs".to_string(),
            sales_code: sales_code.to_string(),
            weight_per_unit: 10.0,
            rate,
            basis: PricingBasis::PerUnit,
            surface_area: None,
        }
    }

    fn sample_bill() -> BillOfMaterials {
        BillOfMaterials::from_items(vec![
            LineItem::from_product(&product("ST", 100.0), 2.0, 1.0, 1),
            LineItem::from_product(&product("PA", 50.0), 4.0, 1.0, 1),
            LineItem::header("marker"),
        ])
    }

    #[test]
    fn test_sales_code_mapping() {
        assert_eq!(CostCategory::from_sales_code("ST"), CostCategory::Steel);
        assert_eq!(CostCategory::from_sales_code("pa"), CostCategory::Panels);
        assert_eq!(CostCategory::from_sales_code("SS"), CostCategory::StructuralSteel);
        assert_eq!(CostCategory::from_sales_code("FR"), CostCategory::Finance);
        // Unknown codes book under steel
        assert_eq!(CostCategory::from_sales_code("??"), CostCategory::Steel);
    }

    #[test]
    fn test_markup_applied_per_category() {
        let markups = Markups {
            steel: 1.5,
            panels: 2.0,
            ..Default::default()
        };
        let priced = price_bill(sample_bill(), &markups, "FOB");

        // Steel: 2 × 100 = 200 cost → 300 selling
        // Panels: 4 × 50 = 200 cost → 400 selling
        assert!((priced.total_cost - 400.0).abs() < 1e-9);
        assert!((priced.total_selling - 700.0).abs() < 1e-9);

        let steel = &priced.category_totals[0];
        assert_eq!(steel.category, CostCategory::Steel);
        assert!((steel.selling_price - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_markups_clamped() {
        let markups = Markups {
            steel: -2.0,
            panels: 99.0,
            ..Default::default()
        };
        let priced = price_bill(sample_bill(), &markups, "FOB");

        let steel = &priced.category_totals[0];
        let panels = &priced.category_totals[1];
        // Negative ratio clamps to 0, oversized to 5
        assert_eq!(steel.selling_price, 0.0);
        assert!((panels.selling_price - 200.0 * MARKUP_MAX).abs() < 1e-9);
    }

    #[test]
    fn test_price_per_ton() {
        let priced = price_bill(sample_bill(), &Markups::default(), "FOB");
        // 60 kg = 0.06 t, 400 selling → 6666.67 / t
        let ppt = priced.price_per_ton.unwrap();
        assert!((ppt - 400.0 / 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_price_per_ton_sentinel_on_zero_weight() {
        let empty = BillOfMaterials::from_items(vec![LineItem::header("only a header")]);
        let priced = price_bill(empty, &Markups::default(), "FOB");
        assert!(priced.price_per_ton.is_none());
    }

    #[test]
    fn test_contract_split_fob_vs_erected() {
        let fob = price_bill(sample_bill(), &Markups::default(), "FOB");
        assert_eq!(fob.contract.erection, 0.0);
        assert!((fob.contract.supply - fob.total_selling).abs() < 1e-9);

        let erected = price_bill(sample_bill(), &Markups::default(), "DDP");
        assert!(erected.contract.erection > 0.0);
        assert!(
            (erected.contract.supply + erected.contract.erection - erected.contract.contract)
                .abs()
                < 1e-9
        );
    }
}
