//! selkit CLI
//!
//! Builds CSS selectors from the command line and exposes the small
//! rectangle and ROT13 helpers.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use selkit_common::warning::warn_once;
use selkit_css::{Combinator, CompoundSelector, FragmentKind, Selector, combine};
use selkit_objects::{Rectangle, rot13, to_json};

const DEFAULT_ROT13_TEXT: &str = "Why did the chicken cross the road?";

#[derive(Parser)]
#[command(name = "selkit", version, about = "CSS selector builder and small helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a selector from KIND:VALUE fragments separated by combinators.
    ///
    /// Example: selkit selector element:div id:main + element:table '~' element:tr
    Selector {
        /// Fragments such as `element:a`, `attr:href$=".png"`, `pseudo-class:focus`,
        /// or combinators `>`, `+`, `~`, `descendant`.
        #[arg(required = true)]
        tokens: Vec<String>,

        /// Print the selector structure as JSON instead of CSS text.
        #[arg(long)]
        json: bool,

        /// Also print the selector's specificity.
        #[arg(long)]
        specificity: bool,
    },

    /// Print a rectangle as JSON together with its area.
    Rect {
        /// Horizontal extent.
        width: f64,
        /// Vertical extent.
        height: f64,
    },

    /// Apply ROT13 to some text.
    Rot13 {
        /// Text to transform.
        #[arg(default_value = DEFAULT_ROT13_TEXT)]
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Selector {
            tokens,
            json,
            specificity,
        } => {
            let selector = build_selector(&tokens)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&selector)?);
            } else {
                println!("{selector}");
            }
            if specificity {
                println!("{} {}", "specificity".dimmed(), selector.specificity());
            }
        }
        Command::Rect { width, height } => {
            if width < 0.0 || height < 0.0 {
                warn_once("Rect", "negative dimensions give a negative or inverted area");
            }
            let rect = Rectangle::new(width, height);
            println!("{}", to_json(&rect)?);
            println!("{} {}", "area".dimmed(), rect.area());
        }
        Command::Rot13 { text } => println!("{}", rot13(&text)),
    }

    Ok(())
}

/// Turn command-line tokens into a selector.
///
/// Fragments accumulate into the current compound selector; each combinator
/// starts a new one. The chain nests to the right, so `a + b ~ c` becomes
/// `a + (b ~ c)`.
fn build_selector(tokens: &[String]) -> Result<Selector> {
    let mut compounds = vec![CompoundSelector::default()];
    let mut combinators = Vec::new();

    for token in tokens {
        if let Ok(combinator) = token.parse::<Combinator>() {
            if compounds.last().is_some_and(CompoundSelector::is_empty) {
                bail!("combinator {token:?} must follow a selector");
            }
            combinators.push(combinator);
            compounds.push(CompoundSelector::default());
            continue;
        }

        let (kind, value) = token
            .split_once(':')
            .with_context(|| format!("expected KIND:VALUE or a combinator, got {token:?}"))?;
        let kind = FragmentKind::parse(kind)?;
        let current = compounds.pop().unwrap_or_default();
        compounds.push(
            current
                .push(kind, value)
                .with_context(|| format!("cannot add {token:?}"))?,
        );
    }

    if compounds.last().is_some_and(CompoundSelector::is_empty) {
        bail!("selector cannot end with a combinator");
    }

    let mut compounds = compounds.into_iter().rev();
    let last = compounds.next().context("no selector given")?;
    Ok(compounds
        .zip(combinators.into_iter().rev())
        .fold(Selector::from(last), |right, (left, combinator)| {
            combine(left, combinator, right).into()
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_single_compound() {
        let selector =
            build_selector(&tokens(&["element:a", "attr:href$=\".png\"", "pseudo-class:focus"]))
                .unwrap();
        assert_eq!(selector.render(), "a[href$=\".png\"]:focus");
    }

    #[test]
    fn test_combinators_nest_right() {
        let selector = build_selector(&tokens(&[
            "element:div",
            "id:main",
            "+",
            "element:table",
            "id:data",
            "~",
            "element:tr",
        ]))
        .unwrap();
        assert_eq!(selector.render(), "div#main + table#data ~ tr");
        let Selector::Combined(combined) = selector else {
            panic!("expected a combination");
        };
        assert_eq!(combined.left().render(), "div#main");
        assert_eq!(combined.right().render(), "table#data ~ tr");
    }

    #[test]
    fn test_descendant_word() {
        let selector = build_selector(&tokens(&["element:ul", "descendant", "class:item"])).unwrap();
        assert_eq!(selector.render(), "ul   .item");
    }

    #[test]
    fn test_order_violation_is_reported() {
        let err = build_selector(&tokens(&["class:a", "element:div"])).unwrap_err();
        assert!(format!("{err:#}").contains("should be arranged in the following order"));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(build_selector(&tokens(&["div"])).is_err());
        assert!(build_selector(&tokens(&["tag:div"])).is_err());
        assert!(build_selector(&tokens(&[">", "element:a"])).is_err());
        assert!(build_selector(&tokens(&["element:a", ">"])).is_err());
        assert!(build_selector(&tokens(&["element:a", ">", "+", "element:b"])).is_err());
    }
}
