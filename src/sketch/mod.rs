//! The layered sketch. A [`Sketch`] owns the shared settings, one illustration
//! and the last drawn document. Every [`Sketch::draw`] throws the old document
//! away and rebuilds it from the settings: a background, then the `blueprint`
//! layer with the construction guides, then the `form` layer with the finished
//! artwork.
//!
//! ```
//! use sacred_plotty_rs::prelude::*;
//!
//! let mut sketch = Sketch::new("Flower of Life", Illustration::FlowerOfLife(Default::default()));
//! sketch.setup(false).unwrap();
//! assert!(sketch.form().path_count() > 0);
//! ```
use geo_types::{Point, Rect};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::{Path as FsPath, PathBuf};
use svg::node::element::Text;
use svg::Document;

use crate::document::color::{black, white};
use crate::document::draw::{create_rect, Size};
use crate::document::{Group, Path};
use crate::elements::Illustration;
use crate::errors::SketchError;
use crate::geo_types::svg::{Arrangement, ToSvg};

pub mod config;
pub mod generator;
pub mod settings;

pub use generator::{DrawContext, GeometryGenerator};
pub use settings::{BlueprintLayer, FormLayer, GridSettings, SketchSettings};

/// Canvas side before any export scaling.
pub const CANVAS_SIZE: f64 = 500.0;

/// Share of the canvas taken by the frame's corner marks.
const FRAME_MARK_SCALE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchState {
    /// Built but never set up. Drawing is refused.
    Uninitialized,
    Ready,
}

#[derive(Debug, Clone)]
pub struct Sketch {
    pub title: String,
    pub settings: SketchSettings,
    pub illustration: Illustration,
    pub frame_enabled: bool,
    state: SketchState,
    pixel_scale: f64,
    canvas: Size,
    root: Group,
}

impl Sketch {
    /// A new sketch with the base settings adjusted by the illustration.
    pub fn new(title: &str, illustration: Illustration) -> Sketch {
        let mut settings = SketchSettings::default();
        illustration.configure(&mut settings);
        Sketch::with_settings(title, settings, illustration)
    }

    /// A new sketch with explicit base settings, eg: loaded from a config file.
    pub fn with_settings(title: &str, settings: SketchSettings, illustration: Illustration) -> Sketch {
        Sketch {
            title: title.to_string(),
            settings,
            illustration,
            frame_enabled: true,
            state: SketchState::Uninitialized,
            pixel_scale: 1.0,
            canvas: Size::new(CANVAS_SIZE, CANVAS_SIZE),
            root: Group::new("root"),
        }
    }

    pub fn state(&self) -> SketchState {
        self.state
    }

    /// Size the canvas and draw once. Exporting draws at 3x (framed) or 5x, with
    /// the stroke width scaled to match.
    pub fn setup(&mut self, exporting: bool) -> Result<(), SketchError> {
        let export_scale = if self.frame_enabled { 3.0 } else { 5.0 };
        self.pixel_scale = if exporting { export_scale } else { 1.0 };
        self.settings.stroke_width = self.pixel_scale;
        self.canvas = Size::new(CANVAS_SIZE, CANVAS_SIZE);
        self.state = SketchState::Ready;
        debug!(
            "setup '{}' at {}x{} scale {}",
            self.title, self.canvas.width, self.canvas.height, self.pixel_scale
        );
        self.draw()
    }

    /// Full rebuild of the document from the current settings.
    pub fn draw(&mut self) -> Result<(), SketchError> {
        if self.state != SketchState::Ready {
            return Err(SketchError::NotReady);
        }
        let size = self.view_size();
        let center = self.center();
        let radius = self.radius();

        let mut root = Group::new("root");
        root.opacity(self.settings.opacity);
        if self.settings.darkness {
            root.add(create_rect(
                Point::new(0.0, 0.0),
                Point::new(size.width, size.height),
                &black(),
                None,
            ));
        }

        let mut blueprint = Group::new("blueprint");
        blueprint
            .visible(self.settings.blueprint.visible)
            .opacity(self.settings.blueprint.opacity);
        let mut form = Group::new("form");
        form.visible(self.settings.form.visible)
            .opacity(self.settings.form.opacity);

        let mut ctx = DrawContext {
            size,
            settings: &self.settings,
            rng: SmallRng::seed_from_u64(self.settings.seed),
        };
        // The old document stays in place if the construction fails.
        self.illustration
            .draw(&mut blueprint, &mut form, center, radius, &mut ctx)?;

        root.add_group(blueprint).add_group(form);
        debug!(
            "drew '{}' seed {}: {} path(s)",
            self.title,
            self.settings.seed,
            root.path_count()
        );
        self.root = root;
        Ok(())
    }

    /// Drawing area after export scaling.
    pub fn view_size(&self) -> Size {
        Size::new(
            self.canvas.width * self.pixel_scale,
            self.canvas.height * self.pixel_scale,
        )
    }

    pub fn pixel_scale(&self) -> f64 {
        self.pixel_scale
    }

    /// Canvas center moved by the illustration's offset.
    pub fn center(&self) -> Point<f64> {
        let size = self.view_size();
        let (dx, dy) = self.illustration.center_offset(self.radius());
        Point::new(size.width / 2.0 + dx, size.height / 2.0 + dy)
    }

    pub fn radius(&self) -> f64 {
        (self.view_size().width / 2.0) * self.settings.scale * self.illustration.radius_factor()
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn blueprint(&self) -> Option<&Group> {
        self.root.group("blueprint")
    }

    /// The finished artwork. Empty until the first successful draw.
    pub fn form(&self) -> Group {
        self.root.group("form").cloned().unwrap_or_else(|| Group::new("form"))
    }

    pub fn name(&self) -> &str {
        &self.title
    }

    /// Title with spaces turned into dashes, lowercased.
    pub fn file_name(&self) -> String {
        self.title.replace(' ', "-").to_lowercase()
    }

    /// Bump the seed and redraw.
    pub fn increment_seed(&mut self) -> Result<(), SketchError> {
        self.settings.seed += 1;
        self.draw()
    }

    fn frame(&self) -> Group {
        let size = self.view_size();
        let mark = size.width * FRAME_MARK_SCALE;
        let color = white();
        let width = self.settings.stroke_width / 2.0;
        let mut frame = Group::new("frame");
        frame.add(Path::rect(&Rect::new(
            (0.0, size.height - mark),
            (mark, size.height),
        ))
        .stroke(&color, width));
        frame.add(
            Path::rect(&Rect::new(
                (size.width - mark, size.height - mark),
                (size.width, size.height),
            ))
            .stroke(&color, width),
        );
        frame
    }

    /// The drawn document as an svg document sized to the view.
    pub fn to_svg(&self) -> Result<Document, SketchError> {
        if self.state != SketchState::Ready {
            return Err(SketchError::NotReady);
        }
        let size = self.view_size();
        let arrangement = Arrangement::canvas(size.width, size.height);
        let mut document = arrangement
            .create_svg_document()
            .add(self.root.to_svg(&arrangement));
        if self.frame_enabled {
            let mark = size.width * FRAME_MARK_SCALE;
            document = document.add(self.frame().to_svg(&arrangement)).add(
                Text::new(self.title.clone())
                    .set("x", size.width / 2.0)
                    .set("y", size.height - mark / 2.0)
                    .set("text-anchor", "middle")
                    .set("font-size", mark / 2.0)
                    .set("fill", "white"),
            );
        }
        Ok(document)
    }

    /// Write `<file_name>.svg` into `dir` and return the full path.
    pub fn save_svg(&self, dir: &FsPath) -> anyhow::Result<PathBuf> {
        let document = self.to_svg()?;
        let path = dir.join(format!("{}.svg", self.file_name()));
        svg::save(&path, &document)?;
        debug!("saved '{}' to {}", self.title, path.display());
        Ok(path)
    }
}
