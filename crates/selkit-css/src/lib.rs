//! CSS selector building for selkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - Canonical fragment order and single-valued fragments enforced on insertion
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling
//!   - Arbitrarily nested combinations
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Not Yet Implemented
//!
//! - Parsing selector text back into builders
//! - Validating fragment values (anything is accepted verbatim)

/// Selector construction errors.
pub mod error;
/// Compound selector builder and combinators.
pub mod selector;

pub use error::SelectorError;
pub use selector::{
    CombinedSelector, Combinator, CompoundSelector, FragmentKind, Selector, Specificity, attr,
    class, combine, element, id, pseudo_class, pseudo_element,
};
