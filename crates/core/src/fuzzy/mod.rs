//! Fuzzy-logic building blocks
//!
//! - `membership` - triangular membership functions
//! - `variable` - linguistic variables and their fixed breakpoint tables
//! - `rules` - the cyclone rule base, firing strength and activation
//! - `defuzzify` - discretized output universe and centroid

pub mod defuzzify;
pub mod membership;
pub mod rules;
pub mod variable;

pub use defuzzify::{centroid, Universe};
pub use membership::{triangular, Triangle};
pub use rules::{activations, Condition, Fuzzified, Rule, RULE_BASE};
pub use variable::{Label, LabelDegrees, LinguisticVariable, HUMIDITY, RISK, TEMPERATURE, WIND};
