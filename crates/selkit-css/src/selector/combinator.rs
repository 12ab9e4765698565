//! Combinators joining two selectors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{CompoundSelector, Specificity};
use crate::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The glyph placed between the two selectors.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts the glyphs `" "`, `">"`, `"+"`, `"~"` and the names
    /// `descendant`, `child`, `next-sibling`, `subsequent-sibling`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " | "descendant" => Ok(Self::Descendant),
            ">" | "child" => Ok(Self::Child),
            "+" | "next-sibling" => Ok(Self::NextSibling),
            "~" | "subsequent-sibling" => Ok(Self::SubsequentSibling),
            _ => Err(SelectorError::UnknownCombinator(s.to_string())),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Either side of a combinator: a compound selector or another combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Selector {
    /// A single compound selector such as `div#main`.
    Compound(CompoundSelector),
    /// A nested combination such as `table ~ tr`.
    Combined(Box<CombinedSelector>),
}

impl Selector {
    /// The canonical string form.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Specificity of every compound selector involved.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(compound) => compound.specificity(),
            Self::Combined(combined) => combined.specificity(),
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(Box::new(combined))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator. Immutable once built; operands are
/// moved in, so a combination can never refer back to itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedSelector {
    left: Selector,
    combinator: Combinator,
    right: Selector,
}

impl CombinedSelector {
    /// The selector before the combinator.
    #[must_use]
    pub const fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator joining both sides.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The selector after the combinator.
    #[must_use]
    pub const fn right(&self) -> &Selector {
        &self.right
    }

    /// `left + " " + symbol + " " + right`, e.g. `div#main + table#data ~ tr`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// [§ 17] Specificity of a complex selector is that of all its compound
    /// selectors taken together.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.left.specificity() + self.right.specificity()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// Join two selectors with a combinator.
///
/// Either side may itself be a combination, so arbitrarily deep selectors
/// can be built bottom-up:
///
/// ```ignore
/// let tail = combine(element("table").id("data")?, Combinator::SubsequentSibling, element("tr"));
/// let full = combine(element("div").id("main")?, Combinator::NextSibling, tail);
/// assert_eq!(full.render(), "div#main + table#data ~ tr");
/// ```
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: Combinator,
    right: impl Into<Selector>,
) -> CombinedSelector {
    CombinedSelector {
        left: left.into(),
        combinator,
        right: right.into(),
    }
}
