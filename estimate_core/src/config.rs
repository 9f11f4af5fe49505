//! # Building Configuration
//!
//! The `BuildingConfiguration` struct is the single input to a calculation:
//! geometry patterns, design loads, finish/panel selections, markup ratios,
//! and the ordered lists of optional sub-structures (cranes, mezzanines,
//! partitions, canopies, liners, openings, accessories).
//!
//! Unknown JSON keys are ignored; missing optional fields fall back to the
//! documented defaults. The configuration is immutable for the duration of
//! one calculation and owned by the caller.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::config::BuildingConfiguration;
//!
//! let json = r#"{
//!     "bay_spacing": "4@8",
//!     "span_spacing": "1@24",
//!     "eave_front_m": 6.0,
//!     "eave_back_m": 6.0
//! }"#;
//!
//! let config: BuildingConfiguration = serde_json::from_str(json).unwrap();
//! assert_eq!(config.loads.wind_speed, 0.7); // documented default
//! config.validate().unwrap();
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::costing::Markups;
use crate::errors::{EstimateError, EstimateResult};
use crate::geometry::resolve_spacing;

/// Default dead load (kN/m²) when the caller omits it
pub const DEFAULT_DEAD_LOAD: f64 = 0.1;
/// Default live load (kN/m²)
pub const DEFAULT_LIVE_LOAD: f64 = 0.57;
/// Default wind speed value (caller-documented unit convention)
pub const DEFAULT_WIND_SPEED: f64 = 0.7;

fn default_dead_load() -> f64 {
    DEFAULT_DEAD_LOAD
}
fn default_live_load() -> f64 {
    DEFAULT_LIVE_LOAD
}
fn default_wind_speed() -> f64 {
    DEFAULT_WIND_SPEED
}
fn default_phase() -> u32 {
    1
}
fn default_quantity() -> f64 {
    1.0
}

/// Primary frame type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FrameType {
    /// Single clear span rigid frame
    #[default]
    ClearSpan,
    /// Multi-span frame with interior columns
    MultiSpan,
    /// Lean-to frame supported by an adjacent building
    LeanTo,
}

impl FrameType {
    /// All frame types for selector UIs
    pub const ALL: [FrameType; 3] = [FrameType::ClearSpan, FrameType::MultiSpan, FrameType::LeanTo];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FrameType::ClearSpan => "Clear Span",
            FrameType::MultiSpan => "Multi Span",
            FrameType::LeanTo => "Lean-To",
        }
    }
}

impl std::fmt::Display for FrameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Crane duty cycle classification.
///
/// Duty does not change component code selection in the current rule set,
/// but is retained on the generated items for downstream costing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CraneDuty {
    /// Light duty (occasional use)
    #[default]
    Light,
    /// Medium duty
    Medium,
    /// Heavy duty (continuous service)
    Heavy,
}

impl CraneDuty {
    pub const ALL: [CraneDuty; 3] = [CraneDuty::Light, CraneDuty::Medium, CraneDuty::Heavy];

    pub fn display_name(&self) -> &'static str {
        match self {
            CraneDuty::Light => "Light",
            CraneDuty::Medium => "Medium",
            CraneDuty::Heavy => "Heavy",
        }
    }
}

/// Canopy framing variant. `Fascia` selects the cladding-only pipeline
/// (no rafters, no roof sheeting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CanopyFrameType {
    /// Roof extension off the main frame
    #[default]
    RoofExtension,
    /// Lean-to canopy with its own posts
    LeanTo,
    /// Vertical fascia cladding, no roof structure
    Fascia,
}

impl CanopyFrameType {
    pub const ALL: [CanopyFrameType; 3] = [
        CanopyFrameType::RoofExtension,
        CanopyFrameType::LeanTo,
        CanopyFrameType::Fascia,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CanopyFrameType::RoofExtension => "Roof Extension",
            CanopyFrameType::LeanTo => "Lean-To",
            CanopyFrameType::Fascia => "Fascia",
        }
    }
}

/// Which faces a liner package covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LinerScope {
    /// Roof liner only
    Roof,
    /// Wall liner only
    Wall,
    /// Both roof and wall liners
    #[default]
    Both,
}

impl LinerScope {
    pub fn covers_roof(&self) -> bool {
        matches!(self, LinerScope::Roof | LinerScope::Both)
    }

    pub fn covers_wall(&self) -> bool {
        matches!(self, LinerScope::Wall | LinerScope::Both)
    }
}

/// Design load values. Units follow the caller's convention (kN/m² in the
/// reference data set); the engine treats them as opaque magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignLoads {
    #[serde(default = "default_dead_load")]
    pub dead: f64,
    #[serde(default = "default_live_load")]
    pub live: f64,
    /// Live load treated as permanent (storage, services)
    #[serde(default)]
    pub live_permanent: f64,
    /// Mezzanine floor live load
    #[serde(default)]
    pub live_floor: f64,
    #[serde(default)]
    pub additional: f64,
    #[serde(default)]
    pub collateral: f64,
    #[serde(default = "default_wind_speed")]
    pub wind_speed: f64,
}

impl Default for DesignLoads {
    fn default() -> Self {
        DesignLoads {
            dead: DEFAULT_DEAD_LOAD,
            live: DEFAULT_LIVE_LOAD,
            live_permanent: 0.0,
            live_floor: 0.0,
            additional: 0.0,
            collateral: 0.0,
            wind_speed: DEFAULT_WIND_SPEED,
        }
    }
}

// ============================================================================
// Sub-structure entries (one struct per component kind)
// ============================================================================

/// Framed opening (roller door, window, louvre) in a wall or roof
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningEntry {
    #[serde(default)]
    pub description: String,
    /// Number of identical openings
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default = "default_phase")]
    pub phase: u32,
}

/// Pass-through accessory: a catalog code and a quantity, no engineering
/// selection involved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryEntry {
    #[serde(default)]
    pub description: String,
    pub code: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default = "default_phase")]
    pub phase: u32,
}

/// Overhead crane system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CraneEntry {
    #[serde(default)]
    pub description: String,
    /// Rated capacity in metric tons
    #[serde(default)]
    pub capacity_t: f64,
    #[serde(default)]
    pub duty: CraneDuty,
    /// Distance between rail centerlines (m); zero disables generation
    #[serde(default)]
    pub rail_centers: f64,
    /// Spacing pattern for the crane runway bays, e.g. `"4@8"`
    #[serde(default)]
    pub runway_pattern: String,
    #[serde(default = "default_phase")]
    pub phase: u32,
}

/// Mezzanine floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MezzanineEntry {
    #[serde(default)]
    pub description: String,
    /// Column grid pattern along the mezzanine, e.g. `"3@6"`
    #[serde(default)]
    pub column_pattern: String,
    /// Beam grid pattern across the mezzanine, e.g. `"2@5"`
    #[serde(default)]
    pub beam_pattern: String,
    /// Deck panel catalog code
    #[serde(default)]
    pub deck_code: String,
    #[serde(default)]
    pub stair_count: u32,
    #[serde(default = "default_phase")]
    pub phase: u32,
}

/// Interior partition wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionEntry {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub length: f64,
    /// Partition height (m); zero disables generation
    #[serde(default)]
    pub height: f64,
    /// Wall sheeting catalog code
    #[serde(default)]
    pub sheeting_code: String,
    /// Override wind speed; zero means "use the building value"
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default = "default_phase")]
    pub phase: u32,
}

/// Canopy or fascia attached to the building envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanopyEntry {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub frame_type: CanopyFrameType,
    /// Projection width for canopies; fascia panel width for fascias (m)
    #[serde(default)]
    pub width: f64,
    /// Fascia height above eave (m); unused by roof-extension canopies
    #[serde(default)]
    pub height: f64,
    /// Spacing pattern of the supported bays, e.g. `"2@6"`
    #[serde(default)]
    pub spacing: String,
    #[serde(default)]
    pub roof_sheeting_code: String,
    /// Wall sheeting code; `"None"` drops the sheeting-dependent items
    #[serde(default)]
    pub wall_sheeting_code: String,
    /// Override wind speed; zero means "use the building value"
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default = "default_phase")]
    pub phase: u32,
}

/// Liner package (interior sheeting under roof and/or behind walls)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinerEntry {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scope: LinerScope,
    /// Liner sheet catalog code
    #[serde(default)]
    pub sheeting_code: String,
    /// Manual roof area override (m²); zero means auto from geometry
    #[serde(default)]
    pub roof_area: f64,
    /// Manual wall area override (m²); zero means auto from geometry
    #[serde(default)]
    pub wall_area: f64,
    /// Openings area deducted from the auto-computed wall area (m²);
    /// ignored when `wall_area` is supplied, since an override is already
    /// the net covered area
    #[serde(default)]
    pub opening_deduction: f64,
    #[serde(default = "default_phase")]
    pub phase: u32,
}

/// Externally priced item imported verbatim into the detail list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedItem {
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub unit_weight: f64,
    #[serde(default)]
    pub unit_rate: f64,
    #[serde(default)]
    pub sales_code: String,
    #[serde(default = "default_phase")]
    pub phase: u32,
}

// ============================================================================
// The configuration root
// ============================================================================

/// Complete calculation input: geometry, loads, finishes, markups, and the
/// optional sub-structure lists. Missing lists deserialize as empty; extra
/// keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BuildingConfiguration {
    /// Bay spacing pattern along the building, `N@D[+N@D]*`
    pub bay_spacing: String,
    /// Span spacing pattern across the building
    pub span_spacing: String,

    pub eave_front_m: f64,
    pub eave_back_m: f64,
    /// Roof slope, left side, rise/run ratio (0.1 = 1:10)
    pub slope_left: f64,
    /// Roof slope, right side, rise/run ratio
    pub slope_right: f64,

    pub loads: DesignLoads,

    pub frame_type: FrameType,
    /// Column base selector key, resolved against the design configuration
    pub base_type: String,
    /// Paint system selector key
    pub paint_system: String,
    /// Freight terms; `"FOB"` keeps erection out of the contract split
    pub freight_terms: String,
    /// Commercial area code for the job-acceptance recap
    pub area_code: String,

    /// Roof sheeting catalog code
    pub roof_panel_code: String,
    /// Wall sheeting catalog code
    pub wall_panel_code: String,
    /// Insulation core thickness (mm), zero when uninsulated
    pub core_thickness_mm: f64,

    /// Roof monitor width (m), zero when absent
    pub monitor_width_m: f64,
    /// Roof monitor throat height (m)
    pub monitor_height_m: f64,

    pub markups: Markups,

    pub openings: Vec<OpeningEntry>,
    pub accessories: Vec<AccessoryEntry>,
    pub cranes: Vec<CraneEntry>,
    pub mezzanines: Vec<MezzanineEntry>,
    pub partitions: Vec<PartitionEntry>,
    pub canopies: Vec<CanopyEntry>,
    pub liners: Vec<LinerEntry>,
    pub imported_items: Vec<ImportedItem>,
}

impl BuildingConfiguration {
    /// Structural sanity checks, run before generation starts.
    ///
    /// A failure here means generation never begins. Per-entry problems in
    /// the sub-structure lists are *not* validation errors; those entries
    /// are silently skipped by their generators (draft-friendly rule).
    pub fn validate(&self) -> EstimateResult<()> {
        let bays = resolve_spacing(&self.bay_spacing)?;
        let spans = resolve_spacing(&self.span_spacing)?;

        if bays.is_empty() {
            return Err(EstimateError::validation(
                "bay_spacing",
                &self.bay_spacing,
                "at least one bay is required",
            ));
        }
        if spans.iter().sum::<f64>() <= 0.0 {
            return Err(EstimateError::validation(
                "span_spacing",
                &self.span_spacing,
                "building width must be positive",
            ));
        }
        if self.eave_front_m <= 0.0 || self.eave_back_m <= 0.0 {
            return Err(EstimateError::validation(
                "eave_height",
                format!("{}/{}", self.eave_front_m, self.eave_back_m),
                "eave heights must be positive",
            ));
        }
        if self.core_thickness_mm < 0.0 {
            return Err(EstimateError::validation(
                "core_thickness_mm",
                self.core_thickness_mm.to_string(),
                "core thickness cannot be negative",
            ));
        }

        Ok(())
    }

    /// Wind speed for a sub-entry, honoring a per-entry override of zero
    /// meaning "inherit the building value".
    pub fn effective_wind(&self, entry_override: f64) -> f64 {
        if entry_override > 0.0 {
            entry_override
        } else {
            self.loads.wind_speed
        }
    }
}

// ============================================================================
// Design configuration lookups
// ============================================================================

/// Read-only `(category, key) -> (value, label)` table used to resolve
/// selector fields (frame type, paint system, freight code). Populated by
/// an external seed process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignConfig {
    entries: HashMap<String, DesignValue>,
}

/// One resolved design value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignValue {
    pub value: String,
    pub label: String,
}

impl DesignConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a `(category, key)` entry.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.entries.insert(
            Self::compose(&category.into(), &key.into()),
            DesignValue {
                value: value.into(),
                label: label.into(),
            },
        );
    }

    /// Resolve a selector key within a category.
    pub fn resolve(&self, category: &str, key: &str) -> Option<&DesignValue> {
        self.entries.get(&Self::compose(category, key))
    }

    fn compose(category: &str, key: &str) -> String {
        format!("{}\u{1f}{}", category, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: BuildingConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(config.loads.dead, DEFAULT_DEAD_LOAD);
        assert_eq!(config.loads.wind_speed, DEFAULT_WIND_SPEED);
        assert!(config.cranes.is_empty());
        assert!(config.liners.is_empty());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let json = r#"{"bay_spacing": "2@8", "some_future_field": 42}"#;
        let config: BuildingConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.bay_spacing, "2@8");
    }

    #[test]
    fn test_validate_ok() {
        let config = BuildingConfiguration {
            bay_spacing: "4@8".to_string(),
            span_spacing: "1@24".to_string(),
            eave_front_m: 6.0,
            eave_back_m: 6.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_eave() {
        let config = BuildingConfiguration {
            bay_spacing: "4@8".to_string(),
            span_spacing: "1@24".to_string(),
            eave_front_m: 0.0,
            eave_back_m: 6.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION");
    }

    #[test]
    fn test_validate_surfaces_parse_error() {
        let config = BuildingConfiguration {
            bay_spacing: "not a pattern".to_string(),
            span_spacing: "1@24".to_string(),
            eave_front_m: 6.0,
            eave_back_m: 6.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "SPACING_PARSE");
    }

    #[test]
    fn test_effective_wind() {
        let config = BuildingConfiguration {
            loads: DesignLoads {
                wind_speed: 0.9,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.effective_wind(0.0), 0.9);
        assert_eq!(config.effective_wind(1.2), 1.2);
    }

    #[test]
    fn test_crane_entry_defaults() {
        let json = r#"{"capacity_t": 10.0, "rail_centers": 18.0}"#;
        let crane: CraneEntry = serde_json::from_str(json).unwrap();
        assert_eq!(crane.duty, CraneDuty::Light);
        assert_eq!(crane.phase, 1);
    }

    #[test]
    fn test_liner_scope() {
        assert!(LinerScope::Both.covers_roof());
        assert!(LinerScope::Both.covers_wall());
        assert!(!LinerScope::Roof.covers_wall());
        assert!(!LinerScope::Wall.covers_roof());
    }

    #[test]
    fn test_design_config_resolve() {
        let mut dc = DesignConfig::new();
        dc.insert("paint", "P2", "ALKYD-2COAT", "Alkyd primer + 2 coats");
        let v = dc.resolve("paint", "P2").unwrap();
        assert_eq!(v.value, "ALKYD-2COAT");
        assert!(dc.resolve("paint", "P9").is_none());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = BuildingConfiguration {
            bay_spacing: "2@9+1@6".to_string(),
            span_spacing: "2@10".to_string(),
            eave_front_m: 6.0,
            eave_back_m: 6.0,
            cranes: vec![CraneEntry {
                description: "10t EOT".to_string(),
                capacity_t: 10.0,
                duty: CraneDuty::Medium,
                rail_centers: 18.0,
                runway_pattern: "3@8".to_string(),
                phase: 1,
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let roundtrip: BuildingConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }
}
