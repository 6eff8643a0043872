use thiserror::Error;

/// Error type for ease-grid-rs operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EaseError {
    /// The resolution is not a positive multiple of 3000 m.
    #[error("Invalid resolution: {0} m (must be a positive multiple of 3000 m)")]
    InvalidResolution(u32),
    /// The projection name is not NorthHemi, SouthHemi or Global.
    #[error("Unsupported projection {0}! (must be NorthHemi/SouthHemi/Global)")]
    InvalidProjection(String),
    /// A latitude is outside [-90, 90] or not finite.
    #[error("Invalid latitude: {0} (absolute value must not exceed 90 degrees)")]
    InvalidLatitude(f64),
    /// A projected coordinate is outside the grid's reference extent.
    #[error("Coordinate ({x}, {y}) is outside of the EASE grid validity range")]
    OutOfGridBounds { x: f64, y: f64 },
    /// Batch arguments have different lengths.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// Creating or running a coordinate transform failed.
    #[error("Projection error: {0}")]
    ProjectionError(String),
    /// Reading or parsing a grid configuration failed.
    #[error("Config error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EaseError::InvalidProjection("SH".into());
        assert_eq!(
            err.to_string(),
            "Unsupported projection SH! (must be NorthHemi/SouthHemi/Global)"
        );

        let err = EaseError::OutOfGridBounds { x: 1.0, y: -2.0 };
        assert!(err.to_string().contains("(1, -2)"));
    }
}
