//! Rank filtering over taxonomy trees.
//!
//! [`taxa_at_rank`] walks a tree depth-first and yields every node whose rank
//! equals the target. A node is reported once its whole subtree has been
//! visited (post-order), so descendants always come before their ancestors.
//! The root is treated like any other node. Nodes without a rank never match.
//!
//! The walk keeps its own stack, so tree depth is bounded by memory rather
//! than by the thread's call stack.

use crate::bio::{TaxonNode, TaxonomicRank};
use serde::Serialize;
use std::iter::FusedIterator;

/// The identifying fields of a matching taxon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaxonSummary<'a> {
    pub tax_id: u64,
    pub sci_name: &'a str,
    pub common_name: Option<&'a str>,
}

impl<'a> TaxonSummary<'a> {
    pub fn into_tuple(self) -> (u64, &'a str, Option<&'a str>) {
        (self.tax_id, self.sci_name, self.common_name)
    }
}

impl<'a> From<&'a TaxonNode> for TaxonSummary<'a> {
    fn from(node: &'a TaxonNode) -> Self {
        Self {
            tax_id: node.tax_id,
            sci_name: &node.sci_name,
            common_name: node.common_name(),
        }
    }
}

/// Lazy post-order iterator over the nodes of one rank.
///
/// Each stack frame holds a node and the index of its next unvisited child.
pub struct RankFilter<'a> {
    rank: TaxonomicRank,
    stack: Vec<(&'a TaxonNode, usize)>,
}

impl<'a> RankFilter<'a> {
    pub fn new(root: &'a TaxonNode, rank: TaxonomicRank) -> Self {
        Self {
            rank,
            stack: vec![(root, 0)],
        }
    }

    pub fn rank(&self) -> TaxonomicRank {
        self.rank
    }
}

impl<'a> Iterator for RankFilter<'a> {
    type Item = TaxonSummary<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.last_mut() {
            let (node, next_child) = *frame;
            if let Some(child) = node.children.get(next_child) {
                frame.1 += 1;
                self.stack.push((child, 0));
                continue;
            }

            self.stack.pop();
            if node.has_rank(self.rank) {
                return Some(TaxonSummary::from(node));
            }
        }
        None
    }
}

impl FusedIterator for RankFilter<'_> {}

/// Every node of `root`'s tree at `rank`, descendants before ancestors
pub fn taxa_at_rank(root: &TaxonNode, rank: TaxonomicRank) -> RankFilter<'_> {
    RankFilter::new(root, rank)
}

/// Shorthand for the species-level nodes of a tree
pub fn species(root: &TaxonNode) -> RankFilter<'_> {
    taxa_at_rank(root, TaxonomicRank::Species)
}
