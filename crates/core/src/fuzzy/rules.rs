//! Cyclone rule base
//!
//! Every rule conjoins up to three antecedents (one slot per input variable)
//! and maps onto a single risk label. An `Any` slot is "don't care" and
//! contributes full membership to the conjunction.

use super::variable::{Label, LabelDegrees};
use serde::{Deserialize, Serialize};

/// Antecedent slot of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Low,
    Medium,
    High,
    /// Don't care
    Any,
}

impl Condition {
    /// Degree this condition contributes given a variable's degree table
    #[inline]
    pub fn degree(self, degrees: &LabelDegrees) -> f64 {
        match self.label() {
            Some(label) => degrees.get(label),
            None => 1.0,
        }
    }

    /// Label tested by this condition, `None` for `Any`
    pub fn label(self) -> Option<Label> {
        match self {
            Condition::Low => Some(Label::Low),
            Condition::Medium => Some(Label::Medium),
            Condition::High => Some(Label::High),
            Condition::Any => None,
        }
    }
}

/// Degree tables for the three inputs of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fuzzified {
    pub temperature: LabelDegrees,
    pub humidity: LabelDegrees,
    pub wind: LabelDegrees,
}

/// `temperature ∧ humidity ∧ wind → consequent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub temperature: Condition,
    pub humidity: Condition,
    pub wind: Condition,
    pub consequent: Label,
}

impl Rule {
    const fn new(temperature: Condition, humidity: Condition, wind: Condition, consequent: Label) -> Self {
        Self {
            temperature,
            humidity,
            wind,
            consequent,
        }
    }

    /// Fuzzy AND (minimum) of the antecedent degrees
    pub fn firing_strength(&self, fuzzified: &Fuzzified) -> f64 {
        self.temperature
            .degree(&fuzzified.temperature)
            .min(self.humidity.degree(&fuzzified.humidity))
            .min(self.wind.degree(&fuzzified.wind))
    }
}

/// The fixed rule base, in evaluation order
pub const RULE_BASE: [Rule; 8] = {
    use Condition::{Any, High as H, Low as L, Medium as M};
    [
        Rule::new(H, H, H, Label::High),
        Rule::new(H, H, M, Label::High),
        Rule::new(M, H, H, Label::Medium),
        Rule::new(H, M, H, Label::Medium),
        Rule::new(H, H, L, Label::Medium),
        Rule::new(L, Any, Any, Label::Low),
        Rule::new(Any, L, Any, Label::Low),
        Rule::new(Any, Any, L, Label::Low),
    ]
};

/// Fuzzy OR (maximum) of the firing strengths of every rule, per consequent
///
/// Labels no rule fires for keep activation 0.
pub fn activations(rules: &[Rule], fuzzified: &Fuzzified) -> LabelDegrees {
    let mut acc = LabelDegrees::ZERO;
    for rule in rules {
        let strength = rule.firing_strength(fuzzified);
        let slot = acc.get_mut(rule.consequent);
        *slot = slot.max(strength);
    }
    acc
}
