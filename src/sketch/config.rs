use std::io::Read;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::elements::Illustration;
use crate::sketch::{GeometryGenerator, Sketch, SketchSettings};

/// A sketch's whole settings tree, stored as RON. Missing fields take their
/// defaults, so a config only has to name what it changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SketchConfig {
    pub title: Option<String>,
    pub sketch: SketchSettings,
    pub illustration: Illustration,
}

impl SketchConfig {
    /// Snapshot of a sketch's current settings.
    pub fn from_sketch(sketch: &Sketch) -> SketchConfig {
        SketchConfig {
            title: Some(sketch.title.clone()),
            sketch: sketch.settings.clone(),
            illustration: sketch.illustration.clone(),
        }
    }

    /// A fresh, not yet set up sketch. Untitled configs borrow the
    /// illustration's name.
    pub fn to_sketch(&self) -> Sketch {
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| self.illustration.name().to_string());
        Sketch::with_settings(&title, self.sketch.clone(), self.illustration.clone())
    }

    pub fn from_ron(data: &str) -> Result<SketchConfig> {
        Ok(ron::from_str(data)?)
    }

    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::to_string(self)?)
    }

    pub fn to_file(&self, path: &Path) -> Result<()> {
        let path = path.with_extension("ron");
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<SketchConfig> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        SketchConfig::from_ron(data.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::elements::vesica_piscis::VesicaPiscisSettings;

    #[test]
    fn test_ron_round_trip() {
        let mut config = SketchConfig::default();
        config.sketch.seed = 42;
        config.sketch.darkness = true;
        config.illustration = Illustration::VesicaPiscis(VesicaPiscisSettings::default());
        let text = config.to_ron().unwrap();
        assert_eq!(SketchConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_config() {
        let config =
            SketchConfig::from_ron("(sketch: (scale: 0.5), illustration: FlowerOfLife((dimensions: 4)))")
                .unwrap();
        assert!((config.sketch.scale - 0.5).abs() < 1e-12);
        assert_eq!(config.sketch.seed, 0);
        match &config.illustration {
            Illustration::FlowerOfLife(settings) => assert_eq!(settings.dimensions, 4),
            other => panic!("wrong illustration {:?}", other),
        }
        let sketch = config.to_sketch();
        assert_eq!(sketch.title, config.illustration.name());
    }

    #[test]
    fn test_bad_config_is_an_error() {
        assert!(SketchConfig::from_ron("(sketch: (scale: \"big\"))").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("sketch-config-{}", rand::random::<u32>()));
        let config = SketchConfig::default();
        config.to_file(&path).unwrap();
        let path = path.with_extension("ron");
        assert_eq!(SketchConfig::from_file(&path).unwrap(), config);
        std::fs::remove_file(path).unwrap();
    }
}
