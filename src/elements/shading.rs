//! Flat shading for the platonic solids. Each face carries a fixed normal
//! from the solid's 3D geometry; its fill is the face color scaled by how
//! directly the light hits it.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::document::color::{scale_rgb, Color};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Light {
    /// Direction the light comes from, y up. Need not be unit length.
    pub direction: [f64; 3],
    pub intensity: f64,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: [0.65, 1.0, 0.15],
            intensity: 1.0,
        }
    }
}

impl Light {
    fn unit_direction(&self) -> Vector3<f64> {
        let direction = Vector3::from(self.direction);
        direction.try_normalize(f64::EPSILON).unwrap_or(direction)
    }
}

/// Lambert term for one face: `clamp(n . l, 0, 1) * intensity`, both vectors
/// normalized first.
pub fn face_intensity(normal: [f64; 3], light: &Light) -> f64 {
    let normal = Vector3::from(normal);
    let normal = normal.try_normalize(f64::EPSILON).unwrap_or(normal);
    normal.dot(&light.unit_direction()).clamp(0.0, 1.0) * light.intensity
}

/// `color` darkened by `intensity`, alpha untouched.
pub fn shade(color: &Color, intensity: f64) -> Color {
    scale_rgb(color, intensity)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::document::color::{alpha, rgba};

    #[test]
    fn test_facing_the_light() {
        let light = Light {
            direction: [0.0, 2.0, 0.0],
            intensity: 0.8,
        };
        assert!((face_intensity([0.0, 1.0, 0.0], &light) - 0.8).abs() < 1e-12);
        // Turned away is black, not negative.
        assert_eq!(face_intensity([0.0, -1.0, 0.0], &light), 0.0);
        let tilted = face_intensity([1.0, 1.0, 0.0], &light);
        assert!((tilted - 0.8 * std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_light_direction() {
        let light = Light {
            direction: [0.0, 0.0, 0.0],
            intensity: 1.0,
        };
        assert_eq!(face_intensity([0.0, 0.0, 1.0], &light), 0.0);
    }

    #[test]
    fn test_shade_keeps_alpha() {
        let shaded = shade(&rgba(1.0, 0.5, 0.25, 0.5), 0.5);
        assert!((f64::from(shaded.r) - 0.5).abs() < 1e-6);
        assert!((f64::from(shaded.g) - 0.25).abs() < 1e-6);
        assert!((alpha(&shaded) - 0.5).abs() < 1e-6);
    }
}
