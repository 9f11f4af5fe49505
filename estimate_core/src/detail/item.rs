//! Line items and the bill-of-materials accumulator.
//!
//! A [`LineItem`] is the atomic output of every generator. Header rows
//! (`is_header`) carry a category banner and no quantity; separator rows
//! (`is_separator`) are visual dividers. Everything else is substantive
//! and participates in the totals.

use serde::{Deserialize, Serialize};

use crate::catalog::{PricingBasis, ReferenceProduct};
use crate::costing::CostCategory;

/// One row of the detail list. 15 scalar fields plus the two marker flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// 1-based position in the generated sequence (assigned by the
    /// orchestrator after assembly)
    pub line_no: u32,
    pub code: String,
    pub sales_code: String,
    pub cost_code: String,
    pub description: String,
    /// Context-dependent size value (member length, panel area, ...)
    pub size: f64,
    pub unit: String,
    pub quantity: f64,
    pub unit_weight: f64,
    pub total_weight: f64,
    pub unit_rate: f64,
    pub total_price: f64,
    pub basis: PricingBasis,
    /// Category grouping key for report sheets (sales code by default)
    pub category: String,
    pub phase: u32,
    pub is_header: bool,
    pub is_separator: bool,
}

impl LineItem {
    /// Substantive item from a resolved catalog product.
    ///
    /// `size` scales per-unit weight for length/area-sized members (a 6 m
    /// purlin weighs 6 × kg/m); pass 1.0 for discrete parts. Totals follow
    /// the product's pricing basis.
    pub fn from_product(product: &ReferenceProduct, quantity: f64, size: f64, phase: u32) -> Self {
        let unit_weight = product.weight_per_unit * size;
        let total_weight = quantity * unit_weight;
        // PerUnit rates are per catalog unit, so size-scaled members price
        // by quantity × size units; PerWeight rates are per kg.
        let total_price = match product.basis {
            PricingBasis::PerUnit => quantity * size * product.rate,
            PricingBasis::PerWeight => total_weight * product.rate,
        };

        let cost_code = CostCategory::from_sales_code(&product.sales_code)
            .code()
            .to_string();

        LineItem {
            line_no: 0,
            code: product.code.clone(),
            sales_code: product.sales_code.clone(),
            cost_code,
            description: product.description.clone(),
            size,
            unit: product.unit.clone(),
            quantity,
            unit_weight,
            total_weight,
            unit_rate: product.rate,
            total_price,
            basis: product.basis,
            category: product.sales_code.clone(),
            phase,
            is_header: false,
            is_separator: false,
        }
    }

    /// Category banner row. Carries no quantity, weight, or price.
    pub fn header(label: impl Into<String>) -> Self {
        LineItem {
            line_no: 0,
            code: String::new(),
            sales_code: String::new(),
            cost_code: String::new(),
            description: label.into(),
            size: 0.0,
            unit: String::new(),
            quantity: 0.0,
            unit_weight: 0.0,
            total_weight: 0.0,
            unit_rate: 0.0,
            total_price: 0.0,
            basis: PricingBasis::PerUnit,
            category: String::new(),
            phase: 0,
            is_header: true,
            is_separator: false,
        }
    }

    /// Visual divider row.
    pub fn separator() -> Self {
        LineItem {
            is_header: false,
            is_separator: true,
            ..LineItem::header("")
        }
    }

    /// True for rows that carry quantity, weight, and price.
    pub fn is_substantive(&self) -> bool {
        !self.is_header && !self.is_separator
    }
}

/// Ordered item sequence plus derived aggregates. Constructed once per
/// calculation; a new calculation produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub items: Vec<LineItem>,
    /// Sum of total_weight over substantive items (kg)
    pub total_weight: f64,
    /// Sum of total_price over substantive items
    pub total_price: f64,
    /// Count of substantive items
    pub item_count: usize,
}

impl BillOfMaterials {
    /// Assemble from a generated item sequence, numbering rows 1..n and
    /// computing the aggregates.
    pub fn from_items(mut items: Vec<LineItem>) -> Self {
        let mut total_weight = 0.0;
        let mut total_price = 0.0;
        let mut item_count = 0;

        for (idx, item) in items.iter_mut().enumerate() {
            item.line_no = (idx + 1) as u32;
            if item.is_substantive() {
                total_weight += item.total_weight;
                total_price += item.total_price;
                item_count += 1;
            }
        }

        BillOfMaterials {
            items,
            total_weight,
            total_price,
            item_count,
        }
    }

    /// Total weight in metric tons.
    pub fn total_weight_t(&self) -> f64 {
        self.total_weight / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn per_weight_product() -> ReferenceProduct {
        ReferenceProduct {
            catalog: Catalog::Structural,
            code: "Z-200".to_string(),
            description: "Z purlin/girt 200x2.0".to_string(),
            unit: "m".to_string(),
            sales_code: "ST".to_string(),
            weight_per_unit: 6.0,
            rate: 0.98,
            basis: PricingBasis::PerWeight,
            surface_area: None,
        }
    }

    fn per_unit_product() -> ReferenceProduct {
        ReferenceProduct {
            catalog: Catalog::General,
            code: "MS45-250".to_string(),
            description: "Steel panel".to_string(),
            unit: "m²".to_string(),
            sales_code: "PA".to_string(),
            weight_per_unit: 4.5,
            rate: 6.5,
            basis: PricingBasis::PerUnit,
            surface_area: Some(1.0),
        }
    }

    #[test]
    fn test_per_weight_item_math() {
        // 8 purlins, 6 m each: weight = 8 × 6 × 6.0, price = weight × 0.98
        let item = LineItem::from_product(&per_weight_product(), 8.0, 6.0, 1);
        assert!((item.unit_weight - 36.0).abs() < 1e-9);
        assert!((item.total_weight - 288.0).abs() < 1e-9);
        assert!((item.total_price - 288.0 * 0.98).abs() < 1e-9);
    }

    #[test]
    fn test_per_unit_item_math() {
        // 120 m² of panel at 6.5/m²
        let item = LineItem::from_product(&per_unit_product(), 120.0, 1.0, 1);
        assert!((item.total_weight - 540.0).abs() < 1e-9);
        assert!((item.total_price - 780.0).abs() < 1e-9);
        assert_eq!(item.cost_code, "PNL");
    }

    #[test]
    fn test_header_and_separator_carry_nothing() {
        let header = LineItem::header("CRANES - 10t EOT");
        assert!(header.is_header);
        assert!(!header.is_substantive());
        assert_eq!(header.quantity, 0.0);

        let sep = LineItem::separator();
        assert!(sep.is_separator);
        assert!(!sep.is_substantive());
    }

    #[test]
    fn test_bill_totals_skip_markers() {
        let items = vec![
            LineItem::header("BUILDING"),
            LineItem::from_product(&per_weight_product(), 8.0, 6.0, 1),
            LineItem::separator(),
            LineItem::from_product(&per_unit_product(), 100.0, 1.0, 1),
        ];
        let bill = BillOfMaterials::from_items(items);

        assert_eq!(bill.item_count, 2);
        assert!((bill.total_weight - (288.0 + 450.0)).abs() < 1e-9);
        assert!((bill.total_price - (288.0 * 0.98 + 650.0)).abs() < 1e-9);

        // Rows are numbered in order, markers included
        let numbers: Vec<u32> = bill.items.iter().map(|i| i.line_no).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_weight_in_tons() {
        let bill = BillOfMaterials::from_items(vec![LineItem::from_product(
            &per_weight_product(),
            100.0,
            6.0,
            1,
        )]);
        assert!((bill.total_weight_t() - 3.6).abs() < 1e-9);
    }
}
