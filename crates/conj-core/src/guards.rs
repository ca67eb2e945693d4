/// Numeric guard floors for the profile and surface evaluators.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Guards {
    /// Minimum magnitude for the profile-angle tangent (divisor floor)
    pub tangent_floor: f64,
    /// Minimum vector length accepted for normalization
    pub length_floor: f64,
}

impl Guards {
    pub const DEFAULT_TANGENT_FLOOR: f64 = 1e-6;
    pub const DEFAULT_LENGTH_FLOOR: f64 = 1e-5;

    pub fn new(tangent_floor: f64, length_floor: f64) -> Self {
        Self {
            tangent_floor,
            length_floor,
        }
    }

    /// Clamp a tangent value away from zero, preserving its sign.
    ///
    /// An exact zero is treated as positive, so the result is never zero
    /// and dividing by it is always finite.
    pub fn floor_tangent(self, t: f64) -> f64 {
        if t.abs() >= self.tangent_floor {
            t
        } else if t < 0.0 {
            -self.tangent_floor
        } else {
            self.tangent_floor
        }
    }

    /// Check whether a vector length is too small to normalize safely.
    pub fn is_degenerate_length(self, len: f64) -> bool {
        len < self.length_floor
    }
}

impl Default for Guards {
    fn default() -> Self {
        Self {
            tangent_floor: Self::DEFAULT_TANGENT_FLOOR,
            length_floor: Self::DEFAULT_LENGTH_FLOOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_tangent_passes_large_values() {
        let g = Guards::default();
        assert_eq!(g.floor_tangent(0.5), 0.5);
        assert_eq!(g.floor_tangent(-0.5), -0.5);
    }

    #[test]
    fn test_floor_tangent_preserves_sign() {
        let g = Guards::default();
        assert_eq!(g.floor_tangent(1e-9), 1e-6);
        assert_eq!(g.floor_tangent(-1e-9), -1e-6);
    }

    #[test]
    fn test_floor_tangent_exact_zero_is_positive() {
        let g = Guards::default();
        assert_eq!(g.floor_tangent(0.0), 1e-6);
    }

    #[test]
    fn test_degenerate_length() {
        let g = Guards::default();
        assert!(g.is_degenerate_length(1e-6));
        assert!(!g.is_degenerate_length(1e-4));
    }
}
