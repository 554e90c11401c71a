//! Error types for section property calculations

use thiserror::Error;

/// Main error type for section property calculations
#[derive(Error, Debug)]
pub enum SectionError {
    #[error("No sections provided - at least one section is required")]
    EmptyInput,

    #[error("Sections and moduli must be paired: got {sections} sections and {moduli} moduli")]
    LengthMismatch { sections: usize, moduli: usize },

    #[error("Reference modulus must be positive, got {0}")]
    InvalidReferenceModulus(f64),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type for section operations
pub type SectionResult<T> = Result<T, SectionError>;
