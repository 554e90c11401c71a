//! Sections carrying a material stiffness

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// A section paired with the elastic modulus its geometry is expressed
/// against.
///
/// Produced by the idealisation transform: the geometry is that of an
/// equivalent homogeneous section of the material with modulus `e`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialisedSection {
    /// Geometric properties of the equivalent section
    pub section: Section,
    /// Elastic modulus (Young's modulus) of the reference material
    pub e: f64,
}

impl MaterialisedSection {
    /// Pair a section with an elastic modulus
    pub fn new(section: Section, e: f64) -> Self {
        Self { section, e }
    }

    /// Get the axial rigidity E*A
    pub fn ea(&self) -> f64 {
        self.e * self.section.a
    }

    /// Get the flexural rigidity E*I about the y-axis
    pub fn ei_yy(&self) -> f64 {
        self.e * self.section.i_yy
    }

    /// Get the flexural rigidity E*I about the z-axis
    pub fn ei_zz(&self) -> f64 {
        self.e * self.section.i_zz
    }
}
