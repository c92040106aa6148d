//! Parametric sacred-geometry illustrations for pen plotters and print.
//!
//! Every figure is built with ruler-and-compass steps on a shared canvas: the
//! construction guides land on a `blueprint` layer, the finished artwork on a
//! `form` layer, and the whole document exports to SVG. The figures range
//! from the Flower of Life family through the platonic solids to molding
//! profiles for columns and lathes.
//!
//! *Plotter output has only been checked on an AxiDraw; other pens may want
//! thinner strokes.*

/// A small vector document: styled paths in named, nestable groups.
pub mod document;

/// The illustrations themselves, and the [`elements::Illustration`] enum that
/// picks one.
pub mod elements;

/// Error types for geometry and sketch operations.
pub mod errors;

/// Extensions/Traits for geo_types geometry: boolean ops, splines, affine
/// transforms, intersections and SVG export.
pub mod geo_types;

/// Sketch settings, the draw context, config files and the layered document.
pub mod sketch;

/// Import prelude::* for the sketch, its settings and the document types.
pub mod prelude {
    pub use crate::document::color::Color;
    pub use crate::document::draw::Size;
    pub use crate::document::{Group, Path};
    pub use crate::elements::Illustration;
    pub use crate::errors::{GeometryError, SketchError};
    pub use crate::geo_types::PointOps;
    pub use crate::sketch::config::SketchConfig;
    pub use crate::sketch::{
        DrawContext, GeometryGenerator, GridSettings, Sketch, SketchSettings,
    };
}
