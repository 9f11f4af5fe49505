//! Raw-material breakdown: the detail items regrouped by material
//! category. The category comes from the product code prefix (first match
//! wins, unmatched codes fall to a general bucket). Each group is led by
//! a header row carrying the group's weight subtotal; the detail list's
//! own header and separator rows are not carried over.

use serde::{Deserialize, Serialize};

use crate::costing::PricedBillOfMaterials;
use crate::detail::item::LineItem;

/// Code prefix → material category, ordered, first match wins.
const MATERIAL_PREFIX_TABLE: &[(&str, &str)] = &[
    ("BU-", "Built-Up Plate Sections"),
    ("CRB-", "Hot-Rolled Sections"),
    ("CRL-", "Hot-Rolled Sections"),
    ("UB-", "Hot-Rolled Sections"),
    ("UC-", "Hot-Rolled Sections"),
    ("ANG-", "Hot-Rolled Sections"),
    ("HR-", "Hot-Rolled Sections"),
    ("Z-", "Cold-Formed Sections"),
    ("C-", "Cold-Formed Sections"),
    ("JMB-", "Cold-Formed Sections"),
    ("TUB-", "Cold-Formed Sections"),
    ("CBK-", "Cold-Formed Sections"),
    ("MS", "Sheeting & Panels"),
    ("AL", "Sheeting & Panels"),
    ("PU-", "Sheeting & Panels"),
    ("LIN-", "Sheeting & Panels"),
    ("DECK-", "Sheeting & Panels"),
    ("SCR-", "Fasteners & Fixings"),
    ("AB-", "Fasteners & Fixings"),
    ("BRC-", "Fasteners & Fixings"),
    ("RCL-", "Fasteners & Fixings"),
    ("CON-", "Fasteners & Fixings"),
    ("INS-", "Insulation & Sealants"),
    ("SEAL-", "Insulation & Sealants"),
];
const MATERIAL_DEFAULT: &str = "General & Accessories";

/// Material category for a product code.
pub fn material_category(code: &str) -> &'static str {
    let upper = code.to_uppercase();
    for (prefix, category) in MATERIAL_PREFIX_TABLE {
        if upper.starts_with(prefix) {
            return category;
        }
    }
    MATERIAL_DEFAULT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMaterialRow {
    pub category: String,
    pub code: String,
    pub description: String,
    pub quantity: f64,
    pub weight: f64,
    pub is_header: bool,
}

impl RawMaterialRow {
    fn header(category: &str, weight: f64) -> Self {
        RawMaterialRow {
            category: category.to_string(),
            code: String::new(),
            description: String::new(),
            quantity: 0.0,
            weight,
            is_header: true,
        }
    }

    fn item(category: &str, item: &LineItem) -> Self {
        RawMaterialRow {
            category: category.to_string(),
            code: item.code.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            weight: item.total_weight,
            is_header: false,
        }
    }
}

pub fn raw_material_breakdown(priced: &PricedBillOfMaterials) -> Vec<RawMaterialRow> {
    // Bucket in table order so the sheet layout does not depend on
    // generation order.
    let mut categories: Vec<&'static str> = Vec::new();
    for (_, category) in MATERIAL_PREFIX_TABLE {
        if !categories.contains(category) {
            categories.push(category);
        }
    }
    categories.push(MATERIAL_DEFAULT);

    let mut rows = Vec::new();
    for category in categories {
        let group: Vec<&LineItem> = priced
            .bill
            .items
            .iter()
            .filter(|i| i.is_substantive() && material_category(&i.code) == category)
            .collect();
        if group.is_empty() {
            continue;
        }
        let weight: f64 = group.iter().map(|i| i.total_weight).sum();
        rows.push(RawMaterialRow::header(category, weight));
        rows.extend(group.iter().map(|i| RawMaterialRow::item(category, i)));
    }
    rows
}
