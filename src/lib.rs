//! Cross-section property calculations
//!
//! This library computes geometric properties of planar cross-sections -
//! area, centroid, and second moments of area including the product of
//! inertia - and combines multiple sections into one equivalent section:
//! - Closed-form shape generators (ring, circle, rectangle, box)
//! - Composite combination via the parallel-axis (Steiner) theorem
//! - Idealised (transformed) sections, normalizing dissimilar materials
//!   to a reference modulus for composite beam analysis
//!
//! All values are immutable; the algorithms are pure functions from
//! sections to sections. Inputs must share one consistent 2D reference
//! frame; no unit conversion is performed.
//!
//! ## Example
//! ```rust
//! use cross_section::prelude::*;
//!
//! // Two chords of a built-up column, 300 apart along z
//! let chord = Section::ring(100.0, 10.0).unwrap();
//! let built_up = combine_sections(&[chord.at(0.0, 150.0), chord.at(0.0, -150.0)]).unwrap();
//! assert!(built_up.i_yy > 2.0 * chord.i_yy);
//!
//! // Steel flitch plate in a timber beam, expressed as equivalent timber
//! let timber = Section::rectangular(200.0, 400.0).unwrap();
//! let plate = Section::rectangular(10.0, 400.0).unwrap();
//! let flitch = idealised_section(
//!     &[timber, plate],
//!     &[11_000.0, 210_000.0],
//!     11_000.0,
//! ).unwrap();
//! assert_eq!(flitch.e, 11_000.0);
//! assert!(flitch.section.a > timber.a + plate.a);
//! ```

pub mod composite;
pub mod error;
pub mod materialised;
pub mod section;

// Re-export common types
pub mod prelude {
    pub use crate::composite::{combine_sections, idealised_from_materialised, idealised_section};
    pub use crate::error::{SectionError, SectionResult};
    pub use crate::materialised::MaterialisedSection;
    pub use crate::section::Section;
}
