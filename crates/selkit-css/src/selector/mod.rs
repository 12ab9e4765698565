//! CSS compound selector building
//!
//! This module builds compound selectors fragment by fragment, following the
//! ordering of simple selectors in
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/):
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!           \----/\----/\----------/
//!           can repeat
//! ```

mod combinator;

use std::fmt;
use std::ops::Add;

use selkit_common::warning::warn_once;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::SelectorError;

pub use combinator::{CombinedSelector, Combinator, Selector, combine};

/// The kinds of simple selector a compound selector is built from.
///
/// Variants are declared in canonical order, so the derived `Ord` is the
/// position a fragment must occupy: a fragment may only be added when no
/// greater kind has been recorded yet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `*`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl FragmentKind {
    /// Parse a kind name such as `element`, `attr` or `pseudo-class`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownFragment`] if `name` names no kind.
    pub fn parse(name: &str) -> Result<Self, SelectorError> {
        name.parse()
            .map_err(|_| SelectorError::UnknownFragment(name.to_string()))
    }

    /// Whether a compound selector may contain at most one fragment of this kind.
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the fragment value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the fragment value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Specificity contributed by one fragment of this kind.
    #[must_use]
    pub fn specificity(self, value: &str) -> Specificity {
        match self {
            Self::Id => Specificity(1, 0, 0),
            Self::Class | Self::Attribute | Self::PseudoClass => Specificity(0, 1, 0),
            // [§ 17] "ignore the universal selector"
            Self::Element if value == "*" => Specificity::default(),
            Self::Element | Self::PseudoElement => Specificity(0, 0, 1),
        }
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Add for Specificity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0, self.1 + other.1, self.2 + other.2)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Built through the fragment methods, each of which consumes the builder and
/// hands it back on success:
///
/// ```ignore
/// let selector = id("main").class("container")?.class("editable")?;
/// assert_eq!(selector.render(), "#main.container.editable");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompoundSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pseudo_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pseudo_element: Option<String>,
    /// Greatest kind recorded so far; `None` while empty.
    #[serde(skip)]
    highest: Option<FragmentKind>,
}

impl CompoundSelector {
    /// A selector holding exactly one fragment.
    #[must_use]
    pub fn with_fragment(kind: FragmentKind, value: impl Into<String>) -> Self {
        let mut selector = Self::default();
        selector.record(kind, value.into());
        selector
    }

    /// Add a fragment of any kind, enforcing canonical order and uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OrderViolation`] if a fragment of a later kind
    /// was already added, or [`SelectorError::DuplicateFragment`] if `kind` is
    /// single-valued and already present.
    pub fn push(
        mut self,
        kind: FragmentKind,
        value: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        if let Some(after) = self.highest.filter(|&highest| highest > kind) {
            return Err(SelectorError::OrderViolation { attempted: kind, after });
        }
        // Past the order check, an existing fragment of `kind` means it is the highest.
        if kind.is_single() && self.highest == Some(kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }
        self.record(kind, value.into());
        Ok(self)
    }

    /// Set the type selector.
    ///
    /// # Errors
    ///
    /// Fails if any fragment is already present; see [`Self::push`].
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Element, value)
    }

    /// Set the ID selector.
    ///
    /// # Errors
    ///
    /// Fails after an id, class, attribute, pseudo-class or pseudo-element.
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Id, value)
    }

    /// Append a class selector.
    ///
    /// # Errors
    ///
    /// Fails after an attribute, pseudo-class or pseudo-element.
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Class, value)
    }

    /// Append an attribute selector. `value` is the text between the brackets.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-class or pseudo-element.
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-element.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoClass, value)
    }

    /// Set the pseudo-element.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already set.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoElement, value)
    }

    /// Fragments in render order.
    pub fn fragments(&self) -> impl Iterator<Item = (FragmentKind, &str)> {
        single(FragmentKind::Element, self.element.as_deref())
            .chain(single(FragmentKind::Id, self.id.as_deref()))
            .chain(repeated(FragmentKind::Class, &self.classes))
            .chain(repeated(FragmentKind::Attribute, &self.attributes))
            .chain(repeated(FragmentKind::PseudoClass, &self.pseudo_classes))
            .chain(single(FragmentKind::PseudoElement, self.pseudo_element.as_deref()))
    }

    /// Whether no fragment has been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.highest.is_none()
    }

    /// The canonical string form, e.g. `a[href$=".png"]:focus`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Sum of the specificity of every fragment.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.fragments()
            .fold(Specificity::default(), |acc, (kind, value)| acc + kind.specificity(value))
    }

    fn record(&mut self, kind: FragmentKind, value: String) {
        if value.is_empty() {
            warn_once("Selector", &format!("empty {kind} value"));
        }
        match kind {
            FragmentKind::Element => self.element = Some(value),
            FragmentKind::Id => self.id = Some(value),
            FragmentKind::Class => self.classes.push(value),
            FragmentKind::Attribute => self.attributes.push(value),
            FragmentKind::PseudoClass => self.pseudo_classes.push(value),
            FragmentKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.highest = Some(kind);
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, value) in self.fragments() {
            write!(f, "{}{value}{}", kind.prefix(), kind.suffix())?;
        }
        Ok(())
    }
}

fn single(kind: FragmentKind, value: Option<&str>) -> impl Iterator<Item = (FragmentKind, &str)> {
    value.map(|v| (kind, v)).into_iter()
}

fn repeated(kind: FragmentKind, values: &[String]) -> impl Iterator<Item = (FragmentKind, &str)> {
    values.iter().map(move |v| (kind, v.as_str()))
}

/// Start a selector with a type selector, e.g. `element("div")`.
#[must_use]
pub fn element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_fragment(FragmentKind::Element, value)
}

/// Start a selector with an ID selector, e.g. `id("main")` renders `#main`.
#[must_use]
pub fn id(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_fragment(FragmentKind::Id, value)
}

/// Start a selector with a class selector, e.g. `class("nav")` renders `.nav`.
#[must_use]
pub fn class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_fragment(FragmentKind::Class, value)
}

/// Start a selector with an attribute selector, e.g. `attr("href")` renders `[href]`.
#[must_use]
pub fn attr(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_fragment(FragmentKind::Attribute, value)
}

/// Start a selector with a pseudo-class, e.g. `pseudo_class("hover")` renders `:hover`.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_fragment(FragmentKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element, e.g. `pseudo_element("after")` renders `::after`.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_fragment(FragmentKind::PseudoElement, value)
}
