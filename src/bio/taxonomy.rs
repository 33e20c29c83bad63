//! Taxonomy tree types as returned by taxonomy tree queries
use crate::utils::lenient::u64_from_any;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Taxonomic ranks from the NCBI controlled vocabulary, ordered from the top
/// of the hierarchy down. `Clade` and `NoRank` have no fixed position and sort last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaxonomicRank {
    Superkingdom,
    Domain,
    Kingdom,
    Subkingdom,
    Phylum,
    Subphylum,
    Class,
    Subclass,
    Infraclass,
    Superorder,
    Order,
    Suborder,
    Infraorder,
    Superfamily,
    Family,
    Subfamily,
    Tribe,
    Genus,
    Subgenus,
    SpeciesGroup,
    Species,
    Subspecies,
    Strain,
    Varietas,
    Forma,
    Clade,
    NoRank,
}

impl TaxonomicRank {
    pub const ALL: [TaxonomicRank; 27] = [
        Self::Superkingdom,
        Self::Domain,
        Self::Kingdom,
        Self::Subkingdom,
        Self::Phylum,
        Self::Subphylum,
        Self::Class,
        Self::Subclass,
        Self::Infraclass,
        Self::Superorder,
        Self::Order,
        Self::Suborder,
        Self::Infraorder,
        Self::Superfamily,
        Self::Family,
        Self::Subfamily,
        Self::Tribe,
        Self::Genus,
        Self::Subgenus,
        Self::SpeciesGroup,
        Self::Species,
        Self::Subspecies,
        Self::Strain,
        Self::Varietas,
        Self::Forma,
        Self::Clade,
        Self::NoRank,
    ];

    /// Parse a rank name, accepting API enum spelling (`SPECIES_GROUP`) and
    /// taxdump spelling (`species group`). Unknown names map to `NoRank`.
    pub fn from_ncbi(s: &str) -> Self {
        Self::lookup(s).unwrap_or_else(|| {
            tracing::debug!("Unrecognized rank '{}', treating as no rank", s);
            Self::NoRank
        })
    }

    fn lookup(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        let rank = match normalized.as_str() {
            "superkingdom" => Self::Superkingdom,
            "domain" | "realm" => Self::Domain,
            "kingdom" => Self::Kingdom,
            "subkingdom" => Self::Subkingdom,
            "phylum" => Self::Phylum,
            "subphylum" => Self::Subphylum,
            "class" => Self::Class,
            "subclass" => Self::Subclass,
            "infraclass" => Self::Infraclass,
            "superorder" => Self::Superorder,
            "order" => Self::Order,
            "suborder" => Self::Suborder,
            "infraorder" => Self::Infraorder,
            "superfamily" => Self::Superfamily,
            "family" => Self::Family,
            "subfamily" => Self::Subfamily,
            "tribe" => Self::Tribe,
            "genus" => Self::Genus,
            "subgenus" => Self::Subgenus,
            "species group" => Self::SpeciesGroup,
            "species" => Self::Species,
            "subspecies" => Self::Subspecies,
            "strain" => Self::Strain,
            "varietas" | "variety" => Self::Varietas,
            "forma" => Self::Forma,
            "clade" => Self::Clade,
            "no rank" | "norank" => Self::NoRank,
            _ => return None,
        };
        Some(rank)
    }

    /// Spelling used by the Datasets API enum
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Superkingdom => "SUPERKINGDOM",
            Self::Domain => "DOMAIN",
            Self::Kingdom => "KINGDOM",
            Self::Subkingdom => "SUBKINGDOM",
            Self::Phylum => "PHYLUM",
            Self::Subphylum => "SUBPHYLUM",
            Self::Class => "CLASS",
            Self::Subclass => "SUBCLASS",
            Self::Infraclass => "INFRACLASS",
            Self::Superorder => "SUPERORDER",
            Self::Order => "ORDER",
            Self::Suborder => "SUBORDER",
            Self::Infraorder => "INFRAORDER",
            Self::Superfamily => "SUPERFAMILY",
            Self::Family => "FAMILY",
            Self::Subfamily => "SUBFAMILY",
            Self::Tribe => "TRIBE",
            Self::Genus => "GENUS",
            Self::Subgenus => "SUBGENUS",
            Self::SpeciesGroup => "SPECIES_GROUP",
            Self::Species => "SPECIES",
            Self::Subspecies => "SUBSPECIES",
            Self::Strain => "STRAIN",
            Self::Varietas => "VARIETAS",
            Self::Forma => "FORMA",
            Self::Clade => "CLADE",
            Self::NoRank => "NO_RANK",
        }
    }

    /// Get rank depth (lower = higher in hierarchy)
    pub fn depth(&self) -> u32 {
        *self as u32
    }

    /// Whether this rank has a fixed place in the hierarchy
    pub fn is_ordered(&self) -> bool {
        !matches!(self, Self::Clade | Self::NoRank)
    }
}

impl fmt::Display for TaxonomicRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.as_api_str().to_lowercase().replace('_', " ");
        f.write_str(&name)
    }
}

impl FromStr for TaxonomicRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("Unknown taxonomic rank: {}", s))
    }
}

impl Serialize for TaxonomicRank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_api_str())
    }
}

impl<'de> Deserialize<'de> for TaxonomicRank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_ncbi(&raw))
    }
}

/// A node of a taxonomy tree; children are owned by their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonNode {
    #[serde(deserialize_with = "u64_from_any")]
    pub tax_id: u64,
    #[serde(default)]
    pub sci_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// `None` when the document carries no rank for this node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<TaxonomicRank>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaxonNode>,
}

impl TaxonNode {
    pub fn new(tax_id: u64, sci_name: impl Into<String>, rank: TaxonomicRank) -> Self {
        Self {
            tax_id,
            sci_name: sci_name.into(),
            common_name: None,
            rank: Some(rank),
            children: Vec::new(),
        }
    }

    /// Node without a rank field
    pub fn unranked(tax_id: u64, sci_name: impl Into<String>) -> Self {
        Self {
            tax_id,
            sci_name: sci_name.into(),
            common_name: None,
            rank: None,
            children: Vec::new(),
        }
    }

    pub fn with_common_name(mut self, common_name: impl Into<String>) -> Self {
        self.common_name = Some(common_name.into());
        self
    }

    pub fn with_child(mut self, child: TaxonNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TaxonNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Common name, skipping the empty strings some reports use for "none"
    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn has_rank(&self, rank: TaxonomicRank) -> bool {
        self.rank == Some(rank)
    }

    /// Pre-order iterator over this node and all descendants
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Number of nodes in the tree rooted here
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Always false: a tree has at least its root
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn find(&self, tax_id: u64) -> Option<&TaxonNode> {
        self.nodes().find(|node| node.tax_id == tax_id)
    }

    /// Maximum number of edges from this node to a leaf
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        max_depth
    }

    /// Tally of nodes per rank; unranked nodes are counted under `None`
    pub fn rank_counts(&self) -> BTreeMap<Option<TaxonomicRank>, usize> {
        let mut counts = BTreeMap::new();
        for node in self.nodes() {
            *counts.entry(node.rank).or_insert(0) += 1;
        }
        counts
    }
}

impl Drop for TaxonNode {
    // Descendants are released from a flat stack, never recursively
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Pre-order traversal driven by an explicit stack
pub struct Nodes<'a> {
    stack: Vec<&'a TaxonNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a TaxonNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primates() -> TaxonNode {
        TaxonNode::new(9604, "Hominidae", TaxonomicRank::Family).with_children([
            TaxonNode::new(9605, "Homo", TaxonomicRank::Genus).with_child(
                TaxonNode::new(9606, "Homo sapiens", TaxonomicRank::Species)
                    .with_common_name("human"),
            ),
            TaxonNode::new(9596, "Pan", TaxonomicRank::Genus),
        ])
    }

    #[test]
    fn test_rank_parsing_spellings() {
        assert_eq!(TaxonomicRank::from_ncbi("SPECIES"), TaxonomicRank::Species);
        assert_eq!(TaxonomicRank::from_ncbi("species"), TaxonomicRank::Species);
        assert_eq!(
            TaxonomicRank::from_ncbi("SPECIES_GROUP"),
            TaxonomicRank::SpeciesGroup
        );
        assert_eq!(
            TaxonomicRank::from_ncbi("species group"),
            TaxonomicRank::SpeciesGroup
        );
        assert_eq!(TaxonomicRank::from_ncbi("no rank"), TaxonomicRank::NoRank);
        assert_eq!(TaxonomicRank::from_ncbi("serotype"), TaxonomicRank::NoRank);
    }

    #[test]
    fn test_rank_strict_parse_rejects_unknown() {
        assert_eq!("Genus".parse::<TaxonomicRank>(), Ok(TaxonomicRank::Genus));
        assert!("serotype".parse::<TaxonomicRank>().is_err());
    }

    #[test]
    fn test_rank_display_and_api_spelling() {
        assert_eq!(TaxonomicRank::SpeciesGroup.to_string(), "species group");
        assert_eq!(TaxonomicRank::SpeciesGroup.as_api_str(), "SPECIES_GROUP");
        for rank in TaxonomicRank::ALL {
            assert_eq!(rank.to_string().parse::<TaxonomicRank>(), Ok(rank));
        }
    }

    #[test]
    fn test_rank_depth_order() {
        assert!(TaxonomicRank::Order.depth() < TaxonomicRank::Genus.depth());
        assert!(TaxonomicRank::Genus.depth() < TaxonomicRank::Species.depth());
        assert!(!TaxonomicRank::Clade.is_ordered());
        assert!(TaxonomicRank::Species.is_ordered());
    }

    #[test]
    fn test_node_deserialize_missing_rank() {
        let node: TaxonNode = serde_json::from_str(
            r#"{"tax_id": "9606", "sci_name": "Homo sapiens", "common_name": "human"}"#,
        )
        .unwrap();
        assert_eq!(node.tax_id, 9606);
        assert_eq!(node.rank, None);
        assert_eq!(node.common_name(), Some("human"));
        assert!(node.is_leaf());
    }

    #[test]
    fn test_empty_common_name_is_none() {
        let node = TaxonNode::new(1, "root", TaxonomicRank::NoRank).with_common_name("");
        assert_eq!(node.common_name(), None);
    }

    #[test]
    fn test_tree_queries() {
        let tree = primates();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.find(9606).map(|n| n.sci_name.as_str()), Some("Homo sapiens"));
        assert!(tree.find(10090).is_none());

        let order: Vec<u64> = tree.nodes().map(|n| n.tax_id).collect();
        assert_eq!(order, vec![9604, 9605, 9606, 9596]);
    }

    #[test]
    fn test_rank_counts() {
        let tree = primates().with_child(TaxonNode::unranked(1, "unplaced"));
        let counts = tree.rank_counts();
        assert_eq!(counts.get(&Some(TaxonomicRank::Genus)), Some(&2));
        assert_eq!(counts.get(&Some(TaxonomicRank::Species)), Some(&1));
        assert_eq!(counts.get(&Some(TaxonomicRank::Family)), Some(&1));
        assert_eq!(counts.get(&None), Some(&1));
    }

    #[test]
    fn test_deep_chain_builds_measures_and_drops() {
        let mut node = TaxonNode::new(0, "leaf", TaxonomicRank::Species);
        for id in 1..200_000u64 {
            node = TaxonNode::unranked(id, "link").with_child(node);
        }
        assert_eq!(node.height(), 199_999);
        assert_eq!(node.len(), 200_000);
        drop(node);
    }
}
