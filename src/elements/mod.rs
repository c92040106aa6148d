//! The illustrations. Each module holds one figure's settings struct, which
//! implements [`GeometryGenerator`], plus the free functions that draw it.
//! [`Illustration`] collects them into one serializable value a
//! [`crate::sketch::Sketch`] can own.
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::document::Group;
use crate::errors::GeometryError;
use crate::sketch::{DrawContext, GeometryGenerator, SketchSettings};

pub mod column;
pub mod column_base;
pub mod egg_of_life;
pub mod flower_of_life;
pub mod fruit_of_life;
pub mod germ_of_life;
pub mod golden_rectangle;
pub mod hypatia;
pub mod identity;
pub mod lathe;
pub mod merkaba;
pub mod metatrons_cube;
pub mod platonic;
pub mod profile;
pub mod quantum;
pub mod shading;
pub mod sri_yantra;
pub mod tetrahedron_64;
pub mod tetrahedron_64_star;
pub mod tree_of_life;
pub mod vector_equilibrium;
pub mod vector_equilibrium_spherical;
pub mod vesica_piscis;

use column::ColumnSettings;
use column_base::ColumnBaseSettings;
use egg_of_life::EggOfLifeSettings;
use flower_of_life::FlowerOfLifeSettings;
use fruit_of_life::FruitOfLifeSettings;
use germ_of_life::GermOfLifeSettings;
use golden_rectangle::GoldenRectangleSettings;
use hypatia::HypatiaSettings;
use identity::IdentitySettings;
use lathe::LatheSettings;
use merkaba::MerkabaSettings;
use metatrons_cube::MetatronsCubeSettings;
use platonic::PlatonicSettings;
use profile::PathProfileSettings;
use quantum::{QuantumInterferenceSettings, WaveGraphSettings};
use sri_yantra::SriYantraSettings;
use tetrahedron_64::Tetrahedron64Settings;
use tetrahedron_64_star::Tetrahedron64StarSettings;
use tree_of_life::TreeOfLifeSettings;
use vector_equilibrium::VectorEquilibriumSettings;
use vector_equilibrium_spherical::VectorEquilibriumSphericalSettings;
use vesica_piscis::VesicaPiscisSettings;

/// One variant per illustration, carrying its settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Illustration {
    FlowerOfLife(FlowerOfLifeSettings),
    FruitOfLife(FruitOfLifeSettings),
    EggOfLife(EggOfLifeSettings),
    GermOfLife(GermOfLifeSettings),
    VesicaPiscis(VesicaPiscisSettings),
    Merkaba(MerkabaSettings),
    VectorEquilibrium(VectorEquilibriumSettings),
    VectorEquilibriumSpherical(VectorEquilibriumSphericalSettings),
    MetatronsCube(MetatronsCubeSettings),
    Tetrahedron64(Tetrahedron64Settings),
    Tetrahedron64Star(Tetrahedron64StarSettings),
    SriYantra(SriYantraSettings),
    TreeOfLife(TreeOfLifeSettings),
    GoldenRectangle(GoldenRectangleSettings),
    Hypatia(HypatiaSettings),
    Platonic(PlatonicSettings),
    Column(ColumnSettings),
    ColumnBase(ColumnBaseSettings),
    PathProfile(PathProfileSettings),
    Lathe(LatheSettings),
    QuantumInterference(QuantumInterferenceSettings),
    WaveGraph(WaveGraphSettings),
    Identity(IdentitySettings),
}

impl Default for Illustration {
    fn default() -> Self {
        Illustration::FlowerOfLife(FlowerOfLifeSettings::default())
    }
}

impl Illustration {
    /// Every illustration with its default settings, in gallery order.
    pub fn all() -> Vec<Illustration> {
        vec![
            Illustration::FlowerOfLife(Default::default()),
            Illustration::FruitOfLife(Default::default()),
            Illustration::EggOfLife(Default::default()),
            Illustration::GermOfLife(Default::default()),
            Illustration::VesicaPiscis(Default::default()),
            Illustration::Merkaba(Default::default()),
            Illustration::VectorEquilibrium(Default::default()),
            Illustration::VectorEquilibriumSpherical(Default::default()),
            Illustration::MetatronsCube(Default::default()),
            Illustration::Tetrahedron64(Default::default()),
            Illustration::Tetrahedron64Star(Default::default()),
            Illustration::SriYantra(Default::default()),
            Illustration::TreeOfLife(Default::default()),
            Illustration::GoldenRectangle(Default::default()),
            Illustration::Hypatia(Default::default()),
            Illustration::Platonic(Default::default()),
            Illustration::Column(Default::default()),
            Illustration::ColumnBase(Default::default()),
            Illustration::PathProfile(Default::default()),
            Illustration::Lathe(Default::default()),
            Illustration::QuantumInterference(Default::default()),
            Illustration::WaveGraph(Default::default()),
            Illustration::Identity(Default::default()),
        ]
    }

    pub fn generator(&self) -> &dyn GeometryGenerator {
        match self {
            Illustration::FlowerOfLife(s) => s,
            Illustration::FruitOfLife(s) => s,
            Illustration::EggOfLife(s) => s,
            Illustration::GermOfLife(s) => s,
            Illustration::VesicaPiscis(s) => s,
            Illustration::Merkaba(s) => s,
            Illustration::VectorEquilibrium(s) => s,
            Illustration::VectorEquilibriumSpherical(s) => s,
            Illustration::MetatronsCube(s) => s,
            Illustration::Tetrahedron64(s) => s,
            Illustration::Tetrahedron64Star(s) => s,
            Illustration::SriYantra(s) => s,
            Illustration::TreeOfLife(s) => s,
            Illustration::GoldenRectangle(s) => s,
            Illustration::Hypatia(s) => s,
            Illustration::Platonic(s) => s,
            Illustration::Column(s) => s,
            Illustration::ColumnBase(s) => s,
            Illustration::PathProfile(s) => s,
            Illustration::Lathe(s) => s,
            Illustration::QuantumInterference(s) => s,
            Illustration::WaveGraph(s) => s,
            Illustration::Identity(s) => s,
        }
    }
}

impl GeometryGenerator for Illustration {
    fn name(&self) -> &str {
        self.generator().name()
    }

    fn radius_factor(&self) -> f64 {
        self.generator().radius_factor()
    }

    fn center_offset(&self, radius: f64) -> (f64, f64) {
        self.generator().center_offset(radius)
    }

    fn configure(&self, settings: &mut SketchSettings) {
        self.generator().configure(settings)
    }

    fn draw(
        &self,
        blueprint: &mut Group,
        form: &mut Group,
        center: Point<f64>,
        radius: f64,
        ctx: &mut DrawContext<'_>,
    ) -> Result<(), GeometryError> {
        self.generator().draw(blueprint, form, center, radius, ctx)
    }
}

/// A 500x500 context seeded from `settings.seed`, as a sketch would build it.
#[cfg(test)]
pub(crate) fn test_context(settings: &SketchSettings) -> DrawContext<'_> {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    DrawContext {
        size: crate::document::draw::Size::new(500.0, 500.0),
        settings,
        rng: SmallRng::seed_from_u64(settings.seed),
    }
}
