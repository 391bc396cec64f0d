//! Error types for list operations.
//!
//! Both failure kinds signal a precondition the caller broke: asking an
//! empty sequence for an element, or running a guard list in which no
//! condition holds. Operations that clamp out-of-range sizes (`take`, `drop`,
//! `zip_with`) never produce an error.

/// Represents the errors returned by foldkit operations.
///
/// # Examples
///
/// ```rust
/// use foldkit::error::ListError;
///
/// let error = ListError::EmptySequence { operation: "head" };
/// assert_eq!(format!("{error}"), "head: empty sequence");
///
/// let error = ListError::ExhaustedGuards { clauses: 3 };
/// assert_eq!(format!("{error}"), "guards: none of 3 clauses matched");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// An element was requested from a sequence with no elements.
    EmptySequence {
        /// The name of the operation that required a non-empty sequence.
        operation: &'static str,
    },
    /// No guard clause had a true condition.
    ExhaustedGuards {
        /// The number of clauses that were inspected.
        clauses: usize,
    },
}

impl ListError {
    /// Returns `true` if this is an [`EmptySequence`](Self::EmptySequence) error.
    #[must_use]
    pub const fn is_empty_sequence(&self) -> bool {
        matches!(self, Self::EmptySequence { .. })
    }

    /// Returns `true` if this is an [`ExhaustedGuards`](Self::ExhaustedGuards) error.
    #[must_use]
    pub const fn is_exhausted_guards(&self) -> bool {
        matches!(self, Self::ExhaustedGuards { .. })
    }
}

impl std::fmt::Display for ListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySequence { operation } => write!(formatter, "{operation}: empty sequence"),
            Self::ExhaustedGuards { clauses } => {
                write!(formatter, "guards: none of {clauses} clauses matched")
            }
        }
    }
}

impl std::error::Error for ListError {}

static_assertions::assert_impl_all!(ListError: Send, Sync, std::error::Error);
