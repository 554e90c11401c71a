//! Section value type and closed-form shape generators

use serde::{Deserialize, Serialize};

use crate::error::{SectionError, SectionResult};

/// Geometric properties of a planar cross-section.
///
/// All second moments of area are taken about axes through the section's
/// own centroid, parallel to the reference frame's y and z axes. The
/// combination algorithms translate them to a different reference point
/// via the parallel-axis theorem; this type never stores moments about an
/// arbitrary external point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area
    pub a: f64,
    /// Centroid y coordinate in the shared reference frame
    pub y_c: f64,
    /// Centroid z coordinate in the shared reference frame
    pub z_c: f64,
    /// Second moment of area about the centroidal y-axis
    pub i_yy: f64,
    /// Second moment of area about the centroidal z-axis
    pub i_zz: f64,
    /// Product of inertia about the centroidal axes
    pub i_yz: f64,
}

impl Section {
    /// Create a section from explicit properties
    pub fn new(a: f64, y_c: f64, z_c: f64, i_yy: f64, i_zz: f64, i_yz: f64) -> Self {
        Self {
            a,
            y_c,
            z_c,
            i_yy,
            i_zz,
            i_yz,
        }
    }

    /// Place the section's centroid in the shared reference frame.
    ///
    /// Shape generators produce sections centred at the origin; the caller
    /// tells the section where it sits. Centroidal moments are unaffected.
    pub fn at(mut self, y_c: f64, z_c: f64) -> Self {
        self.y_c = y_c;
        self.z_c = z_c;
        self
    }

    /// Create a circular hollow section from outer diameter and wall thickness.
    ///
    /// A wall thickness of half the outer diameter yields a solid circle.
    /// The product of inertia of an axisymmetric shape about its centroidal
    /// axes is zero.
    pub fn ring(outer_diameter: f64, wall_thickness: f64) -> SectionResult<Self> {
        if wall_thickness <= 0.0 || outer_diameter < 2.0 * wall_thickness {
            return Err(SectionError::InvalidGeometry(format!(
                "ring with outer diameter {outer_diameter} and wall thickness {wall_thickness} has no positive area"
            )));
        }
        let r_out = outer_diameter / 2.0;
        let r_in = (outer_diameter - 2.0 * wall_thickness) / 2.0;

        let a = std::f64::consts::PI * (r_out.powi(2) - r_in.powi(2));
        let i = std::f64::consts::PI / 4.0 * (r_out.powi(4) - r_in.powi(4));

        Ok(Self::new(a, 0.0, 0.0, i, i, 0.0))
    }

    /// Create a solid circular section
    pub fn circular(diameter: f64) -> SectionResult<Self> {
        if diameter <= 0.0 {
            return Err(SectionError::InvalidGeometry(format!(
                "circle with diameter {diameter} has no positive area"
            )));
        }
        let r = diameter / 2.0;
        let a = std::f64::consts::PI * r.powi(2);
        let i = std::f64::consts::PI / 4.0 * r.powi(4);

        Ok(Self::new(a, 0.0, 0.0, i, i, 0.0))
    }

    /// Create a solid rectangular section, `width` along y and `depth` along z
    pub fn rectangular(width: f64, depth: f64) -> SectionResult<Self> {
        if width <= 0.0 || depth <= 0.0 {
            return Err(SectionError::InvalidGeometry(format!(
                "rectangle {width} x {depth} has no positive area"
            )));
        }
        let a = width * depth;
        let i_yy = width * depth.powi(3) / 12.0;
        let i_zz = depth * width.powi(3) / 12.0;

        Ok(Self::new(a, 0.0, 0.0, i_yy, i_zz, 0.0))
    }

    /// Create a hollow rectangular (box) section with constant wall thickness
    pub fn box_section(width: f64, depth: f64, wall_thickness: f64) -> SectionResult<Self> {
        if wall_thickness <= 0.0
            || width < 2.0 * wall_thickness
            || depth < 2.0 * wall_thickness
        {
            return Err(SectionError::InvalidGeometry(format!(
                "box {width} x {depth} with wall thickness {wall_thickness} has no positive area"
            )));
        }
        let bi = width - 2.0 * wall_thickness;
        let di = depth - 2.0 * wall_thickness;

        let a = width * depth - bi * di;
        let i_yy = (width * depth.powi(3) - bi * di.powi(3)) / 12.0;
        let i_zz = (depth * width.powi(3) - di * bi.powi(3)) / 12.0;

        Ok(Self::new(a, 0.0, 0.0, i_yy, i_zz, 0.0))
    }

    /// Get the radius of gyration about the y-axis
    pub fn ry(&self) -> f64 {
        (self.i_yy / self.a).sqrt()
    }

    /// Get the radius of gyration about the z-axis
    pub fn rz(&self) -> f64 {
        (self.i_zz / self.a).sqrt()
    }

    /// Get the polar second moment of area about the centroid
    pub fn ip(&self) -> f64 {
        self.i_yy + self.i_zz
    }
}
