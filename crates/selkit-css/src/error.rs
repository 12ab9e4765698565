//! Errors raised while building selectors.

use thiserror::Error;

use crate::selector::FragmentKind;

/// Error type for selector construction.
///
/// Both construction variants are programmer errors: the fragment calls were
/// made in an order no CSS compound selector can have. The builder that
/// produced the error has been consumed and cannot be reused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment was added after a fragment that must come later.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, \
         attribute, pseudo-class, pseudo-element (cannot add {attempted} after {after})"
    )]
    OrderViolation {
        /// The fragment kind that was rejected.
        attempted: FragmentKind,
        /// The highest fragment kind already recorded.
        after: FragmentKind,
    },

    /// `element`, `id` or `pseudo-element` was set a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the \
         selector (duplicate {kind})"
    )]
    DuplicateFragment {
        /// The single-valued fragment kind that was repeated.
        kind: FragmentKind,
    },

    /// A combinator glyph outside the supported set.
    #[error("unknown combinator {0:?}: expected one of \" \", \">\", \"+\", \"~\"")]
    UnknownCombinator(String),

    /// A fragment kind name that does not name any fragment.
    #[error("unknown selector fragment kind {0:?}")]
    UnknownFragment(String),
}
