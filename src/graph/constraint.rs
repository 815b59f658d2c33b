//! Version constraint model and weighted random generation
//!
//! Two constraint shapes exist: an exact version match and a half-open
//! version range. Singleton constraints are the dominant source of conflicts
//! in resolver stress tests, so the kind weights are tuned to keep conflict
//! density high without eliminating satisfiable regions.

use std::fmt;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// A version requirement attached to a dependency edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Matches exactly one version
    Singleton(u32),

    /// Matches versions in `[lo, hi)`
    Range { lo: u32, hi: u32 },
}

impl Constraint {
    /// Check whether `version` satisfies this constraint
    pub fn matches(&self, version: u32) -> bool {
        match *self {
            Constraint::Singleton(v) => version == v,
            Constraint::Range { lo, hi } => lo <= version && version < hi,
        }
    }
}

impl fmt::Display for Constraint {
    /// The wire suffix of an edge token: `singleton:V` or `range:LO:HI`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Constraint::Singleton(v) => write!(f, "singleton:{}", v),
            Constraint::Range { lo, hi } => write!(f, "range:{}:{}", lo, hi),
        }
    }
}

// 30% singleton (tight), 40% narrow range, 30% wide range
const KIND_WEIGHTS: [u32; 3] = [3, 4, 3];

const NARROW_WIDTH: std::ops::RangeInclusive<u32> = 2..=4;
const WIDE_WIDTH: std::ops::RangeInclusive<u32> = 5..=10;

/// Draws constraints anchored at a version, clamped to the universe max
///
/// The weighted kind distribution is built once and reused for every edge.
#[derive(Debug, Clone)]
pub struct ConstraintSampler {
    kinds: WeightedIndex<u32>,
    max_version: u32,
}

impl ConstraintSampler {
    pub fn new(max_version: u32) -> Self {
        Self {
            kinds: WeightedIndex::new(&KIND_WEIGHTS).unwrap(),
            max_version,
        }
    }

    /// Produce one constraint anchored at `anchor`
    ///
    /// Range upper bounds are clamped to the universe max. A clamped range can
    /// never collapse: anchors are strictly below `max_version` and widths are
    /// at least 2, so `hi > lo` always holds. Degenerate one-wide ranges stay
    /// ranges rather than being rewritten to singletons.
    pub fn sample<R: Rng>(&self, rng: &mut R, anchor: u32) -> Constraint {
        match self.kinds.sample(rng) {
            0 => Constraint::Singleton(anchor),
            1 => self.range(rng.gen_range(NARROW_WIDTH), anchor),
            _ => self.range(rng.gen_range(WIDE_WIDTH), anchor),
        }
    }

    fn range(&self, width: u32, anchor: u32) -> Constraint {
        Constraint::Range {
            lo: anchor,
            hi: anchor.saturating_add(width).min(self.max_version),
        }
    }
}
