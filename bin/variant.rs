use anyhow::{Context, Error as Anyhow};
use derive_more::{Deref, Display};
use lib::rules::RuleSet;
use std::{borrow::Cow, fs, str::FromStr};

/// The variants that ship with the binary.
const BUILTIN: [(&str, &str); 4] = [
    ("amethyst", include_str!("../variants/amethyst.ron")),
    ("orchid", include_str!("../variants/orchid.ron")),
    ("othello", include_str!("../variants/othello.ron")),
    ("tictactoe", include_str!("../variants/tictactoe.ron")),
];

/// A game variant, either built into the binary or read from a file.
#[derive(Debug, Display, Clone, Deref)]
#[display(fmt = "{}", "_0.name")]
pub struct Variant(RuleSet);

impl Variant {
    /// The names of the built-in variants.
    pub fn builtin() -> impl Iterator<Item = &'static str> {
        BUILTIN.into_iter().map(|(name, _)| name)
    }

    /// The rules of this variant.
    pub fn into_rules(self) -> RuleSet {
        self.0
    }
}

impl FromStr for Variant {
    type Err = Anyhow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = match BUILTIN.into_iter().find(|(name, _)| *name == s) {
            Some((_, text)) => Cow::Borrowed(text),
            None => Cow::Owned(
                fs::read_to_string(s).with_context(|| format!("failed to read variant `{s}`"))?,
            ),
        };

        let rules = text
            .parse::<RuleSet>()
            .with_context(|| format!("failed to load variant `{s}`"))?;

        Ok(Variant(rules))
    }
}
