//! Composite and idealised section aggregation

use log::debug;

use crate::error::{SectionError, SectionResult};
use crate::materialised::MaterialisedSection;
use crate::section::Section;

/// Combine sections into one equivalent section via the parallel-axis
/// theorem.
///
/// All inputs must share the same reference frame and must not overlap;
/// no overlap detection is performed. The result's moments of inertia are
/// taken about the combined centroid: each section contributes its own
/// centroidal moment plus a Steiner term for the offset between its
/// centroid and the combined one.
pub fn combine_sections(sections: &[Section]) -> SectionResult<Section> {
    if sections.is_empty() {
        return Err(SectionError::EmptyInput);
    }

    let a: f64 = sections.iter().map(|s| s.a).sum();
    let y_c = sections.iter().map(|s| s.a * s.y_c).sum::<f64>() / a;
    let z_c = sections.iter().map(|s| s.a * s.z_c).sum::<f64>() / a;

    let mut i_yy = 0.0;
    let mut i_zz = 0.0;
    let mut i_yz = 0.0;
    for s in sections {
        i_yy += s.i_yy + s.a * (z_c - s.z_c).powi(2);
        i_zz += s.i_zz + s.a * (y_c - s.y_c).powi(2);
        i_yz += s.i_yz + s.a * (y_c - s.y_c) * (z_c - s.z_c);
    }

    debug!(
        "combined {} sections: a={a}, centroid=({y_c}, {z_c})",
        sections.len()
    );

    Ok(Section::new(a, y_c, z_c, i_yy, i_zz, i_yz))
}

/// Transform paired (section, modulus) inputs into one equivalent
/// homogeneous section of the reference material.
///
/// Each section's area is scaled by its modular ratio
/// `n = youngs_modulus / reference_modulus`. The combined centroid is
/// weighted by the idealised areas; the Steiner terms use the raw areas
/// and are scaled together with the own moments by each modular ratio.
pub fn idealised_section(
    sections: &[Section],
    youngs_moduli: &[f64],
    reference_modulus: f64,
) -> SectionResult<MaterialisedSection> {
    if sections.len() != youngs_moduli.len() {
        return Err(SectionError::LengthMismatch {
            sections: sections.len(),
            moduli: youngs_moduli.len(),
        });
    }
    if sections.is_empty() {
        return Err(SectionError::EmptyInput);
    }
    if reference_modulus <= 0.0 {
        return Err(SectionError::InvalidReferenceModulus(reference_modulus));
    }

    let mut a_sum = 0.0;
    let mut y_c_weighted = 0.0;
    let mut z_c_weighted = 0.0;
    for (s, e) in sections.iter().zip(youngs_moduli) {
        let a_idealised = s.a * e / reference_modulus;
        a_sum += a_idealised;
        y_c_weighted += s.y_c * a_idealised;
        z_c_weighted += s.z_c * a_idealised;
    }
    let y_c = y_c_weighted / a_sum;
    let z_c = z_c_weighted / a_sum;

    let mut i_yy = 0.0;
    let mut i_zz = 0.0;
    let mut i_yz = 0.0;
    for (s, e) in sections.iter().zip(youngs_moduli) {
        let n = e / reference_modulus;
        i_yy += n * (s.i_yy + s.a * (z_c - s.z_c).powi(2));
        i_zz += n * (s.i_zz + s.a * (y_c - s.y_c).powi(2));
        i_yz += n * (s.i_yz + s.a * (y_c - s.y_c) * (z_c - s.z_c));
    }

    debug!(
        "idealised {} sections against reference modulus {reference_modulus}: a={a_sum}, centroid=({y_c}, {z_c})",
        sections.len()
    );

    Ok(MaterialisedSection::new(
        Section::new(a_sum, y_c, z_c, i_yy, i_zz, i_yz),
        reference_modulus,
    ))
}

/// Idealise sections that already carry their own modulus
pub fn idealised_from_materialised(
    sections: &[MaterialisedSection],
    reference_modulus: f64,
) -> SectionResult<MaterialisedSection> {
    let geometry: Vec<Section> = sections.iter().map(|ms| ms.section).collect();
    let moduli: Vec<f64> = sections.iter().map(|ms| ms.e).collect();
    idealised_section(&geometry, &moduli, reference_modulus)
}
