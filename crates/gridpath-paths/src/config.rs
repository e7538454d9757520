use gridpath_core::Point;

use crate::distance::{chebyshev, manhattan};
use crate::error::SearchError;

/// Edge weights and movement rules for a search.
///
/// The defaults give 8-way movement with orthogonal steps costing `1.0` and
/// diagonal steps costing `1.4`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub orthogonal_cost: f64,
    pub diagonal_cost: f64,
    pub allow_diagonal: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            orthogonal_cost: 1.0,
            diagonal_cost: 1.4,
            allow_diagonal: true,
        }
    }
}

impl SearchConfig {
    /// 4-way movement with the default orthogonal cost.
    pub fn orthogonal() -> Self {
        Self {
            allow_diagonal: false,
            ..Self::default()
        }
    }

    /// Check that both costs are finite and strictly positive.
    pub fn validate(&self) -> Result<(), SearchError> {
        for (name, cost) in [
            ("orthogonal_cost", self.orthogonal_cost),
            ("diagonal_cost", self.diagonal_cost),
        ] {
            if !cost.is_finite() || cost <= 0.0 {
                return Err(SearchError::InvalidConfig(format!(
                    "{name} must be finite and positive, got {cost}"
                )));
            }
        }
        Ok(())
    }

    /// Weight of the edge between `from` and `to`.
    ///
    /// Returns `f64::INFINITY` when the points are not adjacent under this
    /// config.
    pub fn step_cost(&self, from: Point, to: Point) -> f64 {
        match (manhattan(from, to), chebyshev(from, to)) {
            (1, 1) => self.orthogonal_cost,
            (2, 1) if self.allow_diagonal => self.diagonal_cost,
            _ => f64::INFINITY,
        }
    }
}
