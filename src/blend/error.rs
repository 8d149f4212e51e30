//! Error types for profile blending and isotope resolution.
//!
//! Errors are categorized by stage: transition validation while building a
//! profile, isotope resolution while folding it into a network, and
//! structural violations reported by the data model.

use crate::model::error::Error as ModelError;
use thiserror::Error;

/// Errors that can occur while building or folding a composition profile.
///
/// None of these are recovered from locally: an out-of-order transition
/// list is never re-sorted and an isotope with no home in the network is
/// never dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No transitions were given, so there is no core composition.
    #[error("at least one transition is required to define the core composition")]
    EmptyTransitions,

    /// A transition coordinate is not a finite value in `[0, 1]`.
    #[error("transition {index} at xq = {xq} is invalid: {detail}")]
    InvalidTransition {
        /// Position of the transition in the input list.
        index: usize,
        /// The offending coordinate.
        xq: f64,
        /// Description of the problem.
        detail: String,
    },

    /// Transition coordinates decrease.
    ///
    /// Transitions must be listed from the surface inward.
    #[error(
        "transition {index} at xq = {current} comes after a transition at xq = {previous}; transitions must be ordered by increasing xq"
    )]
    UnorderedTransitions {
        /// Position of the out-of-order transition.
        index: usize,
        /// Coordinate of the preceding transition.
        previous: f64,
        /// Coordinate of this transition.
        current: f64,
    },

    /// A transition's sample does not share the surface sample's fields.
    #[error("composition of transition {index} does not match the surface sample: {detail}")]
    SampleMismatch {
        /// Position of the transition in the input list.
        index: usize,
        /// Description of the difference.
        detail: String,
    },

    /// The relative steepness is negative or not finite.
    #[error("transition steepness must be a finite, non-negative number (got {0})")]
    InvalidSteepness(f64),

    /// No isotope can absorb the named one and fallback is disabled.
    #[error("isotope '{0}' is not in the network and has no suitable replacement")]
    UnresolvableIsotope(String),

    /// A data-model invariant was violated.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl Error {
    /// Creates an [`InvalidTransition`](Error::InvalidTransition) error.
    pub fn invalid_transition(index: usize, xq: f64, details: impl Into<String>) -> Self {
        Self::InvalidTransition {
            index,
            xq,
            detail: details.into(),
        }
    }

    /// Creates a [`SampleMismatch`](Error::SampleMismatch) error.
    pub fn sample_mismatch(index: usize, details: impl Into<String>) -> Self {
        Self::SampleMismatch {
            index,
            detail: details.into(),
        }
    }
}
