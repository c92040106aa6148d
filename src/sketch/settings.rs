use serde::{Deserialize, Serialize};

use crate::document::color::{rgba, white, Color};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BlueprintLayer {
    pub visible: bool,
    pub opacity: f64,
    /// Outer circle of the whole figure.
    pub cosmos: bool,
}

impl Default for BlueprintLayer {
    fn default() -> Self {
        Self {
            visible: false,
            opacity: 0.5,
            cosmos: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormLayer {
    pub visible: bool,
    pub opacity: f64,
}

impl Default for FormLayer {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 1.0,
        }
    }
}

/// Settings every sketch shares. Illustration specific settings live next to
/// each generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SketchSettings {
    pub scale: f64,
    pub opacity: f64,
    pub stroke_width: f64,
    pub stroke_color: Color,
    /// Color for guide lines that are switched on. Switched off guides are
    /// drawn transparent so construction order never changes.
    pub debug_stroke_color: Color,
    pub seed: u64,
    /// Opaque black background.
    pub darkness: bool,
    pub blueprint: BlueprintLayer,
    pub form: FormLayer,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            scale: 0.85,
            opacity: 1.0,
            stroke_width: 1.0,
            stroke_color: white(),
            debug_stroke_color: rgba(1.0, 0.0, 0.0, 1.0),
            seed: 0,
            darkness: false,
            blueprint: BlueprintLayer::default(),
            form: FormLayer::default(),
        }
    }
}

/// Grid overlay used by the molding and profile illustrations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridSettings {
    pub visible: bool,
    pub divisions: usize,
    pub opacity: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            divisions: 25,
            opacity: 0.1,
        }
    }
}
