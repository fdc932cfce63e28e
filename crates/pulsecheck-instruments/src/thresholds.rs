//! Cutpoint tables that map a score onto an ordered tier.
//!
//! A table is a list of bands evaluated top-down; the first band whose bound
//! matches wins, and `otherwise` applies when none do. Bounds are inclusive.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Width of the rounding window around a cutpoint, in units of its
/// magnitude. A mean of category means that should equal 4.21 can land a
/// few ULPs below it; 4.20999 must not.
const ULPS: f64 = 4.0;

fn slack(cutpoint: f64) -> f64 {
    ULPS * f64::EPSILON * cutpoint.abs()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Bound {
    /// Matches scores `>= value`.
    AtLeast(f64),
    /// Matches scores `<= value`.
    AtMost(f64),
}

impl Bound {
    pub fn matches(self, score: f64) -> bool {
        match self {
            Bound::AtLeast(min) => score >= min - slack(min),
            Bound::AtMost(max) => score <= max + slack(max),
        }
    }

    fn value(self) -> f64 {
        match self {
            Bound::AtLeast(v) | Bound::AtMost(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band<T> {
    pub bound: Bound,
    pub tier: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThresholdTable<T> {
    pub bands: Vec<Band<T>>,
    pub otherwise: T,
}

impl<T: Copy> ThresholdTable<T> {
    /// All-`AtLeast` table, bands given from the highest cutpoint down.
    pub fn at_least(bands: &[(f64, T)], otherwise: T) -> Self {
        Self {
            bands: bands
                .iter()
                .map(|&(v, tier)| Band {
                    bound: Bound::AtLeast(v),
                    tier,
                })
                .collect(),
            otherwise,
        }
    }

    /// All-`AtMost` table, bands given from the lowest cutpoint up.
    pub fn at_most(bands: &[(f64, T)], otherwise: T) -> Self {
        Self {
            bands: bands
                .iter()
                .map(|&(v, tier)| Band {
                    bound: Bound::AtMost(v),
                    tier,
                })
                .collect(),
            otherwise,
        }
    }

    pub fn classify(&self, score: f64) -> T {
        self.bands
            .iter()
            .find(|band| band.bound.matches(score))
            .map(|band| band.tier)
            .unwrap_or(self.otherwise)
    }

    /// Check that the table is non-empty, uses a single bound kind, and that
    /// cutpoints are finite and strictly ordered in evaluation order.
    pub fn check(&self) -> Result<(), String> {
        let Some(first) = self.bands.first() else {
            return Err("threshold table has no bands".to_string());
        };
        let descending = matches!(first.bound, Bound::AtLeast(_));

        for band in &self.bands {
            if !band.bound.value().is_finite() {
                return Err(format!("non-finite cutpoint {:?}", band.bound));
            }
            if matches!(band.bound, Bound::AtLeast(_)) != descending {
                return Err("threshold table mixes at_least and at_most bounds".to_string());
            }
        }

        for pair in self.bands.windows(2) {
            let (a, b) = (pair[0].bound.value(), pair[1].bound.value());
            let ordered = if descending { a > b } else { a < b };
            if !ordered {
                return Err(format!(
                    "cutpoints {a} and {b} are out of order; later bands would never match"
                ));
            }
        }
        Ok(())
    }
}
