use std::fmt::{Debug, Display};
use num_traits::PrimInt;

/// Numeric bound for link weights and path costs.
///
/// Any primitive integer works. The search assumes weights are
/// non-negative; signed types are accepted but negative weights give
/// undefined costs (see [`DirectedGraph::validate_non_negative`]).
///
/// [`DirectedGraph::validate_non_negative`]: crate::graph::DirectedGraph::validate_non_negative
pub trait Weight: PrimInt + Debug + Display {
    /// Adds a link weight to a path cost, clamping at the type's maximum
    fn accumulate(self, weight: Self) -> Self {
        self.saturating_add(weight)
    }
}

impl<T> Weight for T where T: PrimInt + Debug + Display {}
