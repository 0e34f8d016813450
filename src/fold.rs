//! Brace matching and fold regions
//!
//! Brace lines are paired with a stack over the whole buffer. Each pair is
//! a foldable region anchored at its opening line. Collapse flags live in a
//! caller-owned [`FoldState`]; the regions themselves are recomputed only
//! when the buffer changes.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// A matched pair of brace lines (0-based, `start < end`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BracePair {
    pub start: usize,
    pub end: usize,
}

impl BracePair {
    /// Check if collapsing this pair hides `line`
    pub fn covers(&self, line: usize) -> bool {
        self.start < line && line <= self.end
    }
}

/// Pair brace lines across the whole source
///
/// Per line the open is handled before the close: a line containing `{`
/// pushes its index, then a line containing `}` pops the top of the stack.
/// A line holding both therefore pops itself; that self-pair is not a
/// region and is not recorded. Closers with an empty stack are ignored and
/// openers left on the stack never pair.
pub fn match_braces(source: &str) -> Vec<BracePair> {
    let mut stack = Vec::new();
    let mut pairs = Vec::new();

    for (index, line) in source.split('\n').enumerate() {
        if line.contains('{') {
            stack.push(index);
        }
        if line.contains('}') {
            if let Some(start) = stack.pop() {
                if start < index {
                    pairs.push(BracePair { start, end: index });
                }
            }
        }
    }

    pairs
}

/// Per-anchor collapse flags; absent means expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldState {
    collapsed: HashMap<usize, bool>,
}

impl FoldState {
    /// Create an empty state (everything expanded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the region anchored at `anchor` is collapsed
    pub fn is_collapsed(&self, anchor: usize) -> bool {
        self.collapsed.get(&anchor).copied().unwrap_or(false)
    }

    /// Set the collapse flag for `anchor`
    pub fn set_collapsed(&mut self, anchor: usize, collapsed: bool) {
        self.collapsed.insert(anchor, collapsed);
    }

    /// Flip the collapse flag for `anchor`, returning the new value
    pub fn toggle(&mut self, anchor: usize) -> bool {
        let flag = self.collapsed.entry(anchor).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Expand everything
    pub fn clear(&mut self) {
        self.collapsed.clear();
    }
}

/// The fold regions of one buffer
#[derive(Debug, Clone, Default)]
pub struct FoldRegions {
    /// anchor line -> end line
    by_anchor: BTreeMap<usize, usize>,
    line_count: usize,
}

impl FoldRegions {
    /// Compute the regions of `source`
    pub fn new(source: &str) -> Self {
        let by_anchor = match_braces(source)
            .into_iter()
            .map(|pair| (pair.start, pair.end))
            .collect();
        Self {
            by_anchor,
            line_count: source.split('\n').count(),
        }
    }

    /// All pairs, ordered by anchor
    pub fn pairs(&self) -> impl Iterator<Item = BracePair> + '_ {
        self.by_anchor
            .iter()
            .map(|(&start, &end)| BracePair { start, end })
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.by_anchor.len()
    }

    /// Check if the buffer has no regions
    pub fn is_empty(&self) -> bool {
        self.by_anchor.is_empty()
    }

    /// Check if `line` opens a region
    pub fn is_anchor(&self, line: usize) -> bool {
        self.by_anchor.contains_key(&line)
    }

    /// The region anchored at `line`, if any
    pub fn region_at(&self, line: usize) -> Option<BracePair> {
        self.by_anchor
            .get(&line)
            .map(|&end| BracePair { start: line, end })
    }

    /// Check if `line` is hidden by some collapsed region
    ///
    /// Any collapsed ancestor hides the line, whatever the flags of the
    /// regions nested inside it.
    pub fn is_hidden(&self, line: usize, state: &FoldState) -> bool {
        self.by_anchor
            .range(..line)
            .any(|(&start, &end)| line <= end && state.is_collapsed(start))
    }

    /// Visible line indices, in order
    ///
    /// Regions nest, so one pass tracking the furthest collapsed end is
    /// enough.
    pub fn visible_lines<'a>(&'a self, state: &'a FoldState) -> impl Iterator<Item = usize> + 'a {
        let mut hidden_through: Option<usize> = None;
        (0..self.line_count).filter(move |&line| {
            if hidden_through.map_or(false, |end| line <= end) {
                return false;
            }
            if let Some(&end) = self.by_anchor.get(&line) {
                if state.is_collapsed(line) {
                    hidden_through = Some(end);
                }
            }
            true
        })
    }
}
