//! Elemental types and the weakness/resistance chart.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{RESISTED_MULTIPLIER, SUPER_EFFECTIVE_MULTIPLIER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    #[default]
    Neutral,
    Fire,
    Water,
    Ice,
    Thunder,
    Earth,
}

impl Element {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Ice => "ice",
            Self::Thunder => "thunder",
            Self::Earth => "earth",
        }
    }
}

/// Chart cells accept either a single element or a list of elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "ElementSetRepr", into = "Vec<Element>")]
pub struct ElementSet(pub Vec<Element>);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ElementSetRepr {
    One(Element),
    Many(Vec<Element>),
}

impl From<ElementSetRepr> for ElementSet {
    fn from(repr: ElementSetRepr) -> Self {
        match repr {
            ElementSetRepr::One(element) => Self(vec![element]),
            ElementSetRepr::Many(elements) => Self(elements),
        }
    }
}

impl From<ElementSet> for Vec<Element> {
    fn from(set: ElementSet) -> Self {
        set.0
    }
}

impl ElementSet {
    #[must_use]
    pub fn contains(&self, element: Element) -> bool {
        self.0.contains(&element)
    }
}

/// Weakness and resistance sets for one defending element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Matchup {
    #[serde(default)]
    pub weak_to: ElementSet,
    #[serde(default)]
    pub resists: ElementSet,
}

/// Lookup table keyed by the defender's element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ElementChart(pub HashMap<Element, Matchup>);

impl ElementChart {
    /// Classify an attack element against a defender element.
    /// Elements absent from the chart resolve as neutral.
    #[must_use]
    pub fn effectiveness(&self, attack: Element, defender: Element) -> Effectiveness {
        let Some(matchup) = self.0.get(&defender) else {
            return Effectiveness::Neutral;
        };
        if matchup.weak_to.contains(attack) {
            Effectiveness::Super
        } else if matchup.resists.contains(attack) {
            Effectiveness::Resisted
        } else {
            Effectiveness::Neutral
        }
    }
}

/// How effective an attack element was against the defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    Super,
    Neutral,
    Resisted,
}

impl Effectiveness {
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Super => SUPER_EFFECTIVE_MULTIPLIER,
            Self::Neutral => 1.0,
            Self::Resisted => RESISTED_MULTIPLIER,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Super => "super",
            Self::Neutral => "neutral",
            Self::Resisted => "resisted",
        }
    }
}
