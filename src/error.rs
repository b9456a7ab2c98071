//! Error handling for hearth-atlas
//!
//! Construction errors mean no atlas was produced. Lookup errors are
//! returned before the cell cache is touched, so a failed lookup never
//! changes what later lookups see.

/// Main error type for atlas construction and lookup
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AtlasError {
    // Construction errors
    #[error("Division by zero: {context}")]
    DivideByZero { context: String },

    #[error("Atlas has no cells")]
    EmptyAtlas,

    #[error("Metadata parse error in {url}: {error}")]
    MetadataParseError { url: String, error: String },

    #[error("Duplicate sub-atlas: {name}")]
    DuplicateSubAtlas { name: String },

    #[error("Invalid rectangle at {index}: {reason}")]
    InvalidRectangle { index: usize, reason: String },

    #[error("Region out of bounds: {context} ({extent} > {limit})")]
    RegionOutOfBounds {
        context: String,
        extent: f32,
        limit: f32,
    },

    #[error("Config parse error: {error}")]
    ConfigParseError { error: String },

    // Lookup errors
    #[error("Cell index out of range: index {index} >= cell count {cell_count}")]
    IndexOutOfRange { index: usize, cell_count: usize },

    #[error("Unknown sub-atlas: {name}")]
    UnknownSubAtlas { name: String },

    #[error("Unsupported cell key for {scheme} atlas: {key}")]
    UnsupportedKey { scheme: &'static str, key: String },

    // Collaborator errors
    #[error("Resource not found: {resource_type} '{url}'")]
    ResourceNotFound {
        resource_type: &'static str,
        url: String,
    },
}

/// Type alias for Results in hearth-atlas
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Fail with `DivideByZero` unless `value` is a usable divisor
pub fn require_positive(value: f32, context: &str) -> AtlasResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AtlasError::DivideByZero {
            context: format!("{} = {}", context, value),
        })
    }
}

/// Fail with `IndexOutOfRange` unless `index < cell_count`
pub fn require_index(index: usize, cell_count: usize) -> AtlasResult<()> {
    if index < cell_count {
        Ok(())
    } else {
        Err(AtlasError::IndexOutOfRange { index, cell_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AtlasError::IndexOutOfRange {
            index: 8,
            cell_count: 8,
        };
        assert_eq!(
            err.to_string(),
            "Cell index out of range: index 8 >= cell count 8"
        );
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive(16.0, "width").is_ok());
        assert!(matches!(
            require_positive(0.0, "width"),
            Err(AtlasError::DivideByZero { .. })
        ));
        assert!(require_positive(f32::NAN, "width").is_err());
        assert!(require_positive(-4.0, "width").is_err());
    }

    #[test]
    fn test_require_index() {
        assert!(require_index(0, 1).is_ok());
        assert_eq!(
            require_index(1, 1),
            Err(AtlasError::IndexOutOfRange {
                index: 1,
                cell_count: 1
            })
        );
    }
}
