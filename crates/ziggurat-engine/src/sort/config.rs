use std::fmt;
use std::str::FromStr;

/// How a [`PaintList`](super::PaintList) turns the pairwise relation into a sequence.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PaintStrategy {
    /// Merge sort with the paint-order relation as less-than.
    #[default]
    Sort,
    /// Dependency graph over overlapping items, cycles broken, then topological order.
    Graph,
}

impl PaintStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            PaintStrategy::Sort => "sort",
            PaintStrategy::Graph => "graph",
        }
    }
}

impl fmt::Display for PaintStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    pub input: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown paint strategy {:?} (expected \"sort\" or \"graph\")", self.input)
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for PaintStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sort" => Ok(PaintStrategy::Sort),
            "graph" => Ok(PaintStrategy::Graph),
            _ => Err(ParseStrategyError { input: s.to_owned() }),
        }
    }
}

/// Per-list sorting options.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SortConfig {
    pub strategy: PaintStrategy,
    /// Mark items fully hidden behind a later opaque occluder.
    pub cull_occluded: bool,
    /// Scan every frame for intransitive triples and log them. O(n³); debugging only.
    pub check_transitivity: bool,
}

impl SortConfig {
    #[inline]
    pub fn with_strategy(mut self, strategy: PaintStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[inline]
    pub fn with_occlusion_culling(mut self, enabled: bool) -> Self {
        self.cull_occluded = enabled;
        self
    }

    #[inline]
    pub fn with_transitivity_check(mut self, enabled: bool) -> Self {
        self.check_transitivity = enabled;
        self
    }
}
