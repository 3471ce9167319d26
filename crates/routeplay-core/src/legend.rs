//! Map-legend grouping of point markers.
//!
//! Markers are grouped first by marker kind, then by exact tag set, and
//! tag-set groups nest: a group whose tag set is a strict subset of
//! another group's tag set is shown inside that larger group. Grouping is
//! a plain tree-building pass over an arena of group nodes keyed by the
//! canonical (sorted) tag set; the subset test is pure set containment.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::GeoPosition;

/// One annotated point marker, as supplied by the hosting application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    /// Identity
    pub id: u64,

    /// Marker kind (icon/category) this item belongs to
    pub marker_kind: u64,

    /// Tags attached to the item
    pub tags: BTreeSet<u64>,

    /// Marker position
    pub position: GeoPosition,

    /// Free-form comment, when present
    pub comment: Option<String>,
}

/// A group of items sharing one exact tag set, with subset groups nested
/// inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagGroup {
    /// Canonical tag set, ascending
    pub tags: Vec<u64>,

    /// Items carrying exactly this tag set
    pub items: Vec<LegendItem>,

    /// Groups whose tag set is a strict subset of this one
    pub sub_groups: Vec<TagGroup>,
}

/// All legend entries for one marker kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerGroup {
    /// Marker kind shared by every item in the group
    pub marker_kind: u64,

    /// Total item count across all nested tag groups
    pub total_items: usize,

    /// Top-level tag groups, largest tag sets first
    pub groups: Vec<TagGroup>,
}

/// Group legend items by marker kind and nested tag set.
///
/// Marker kinds appear in first-seen order; within a kind, top-level tag
/// groups are ordered by tag-set size descending with the untagged group
/// last. Because the empty set is contained in every set, untagged items
/// nest under the largest tagged group whenever one exists.
pub fn build_legend(items: &[LegendItem]) -> Vec<MarkerGroup> {
    let mut kinds: Vec<u64> = Vec::new();
    let mut by_kind: HashMap<u64, Vec<LegendItem>> = HashMap::new();

    for item in items {
        if !by_kind.contains_key(&item.marker_kind) {
            kinds.push(item.marker_kind);
        }
        by_kind.entry(item.marker_kind).or_default().push(item.clone());
    }

    kinds
        .into_iter()
        .map(|kind| {
            let bucket = by_kind.remove(&kind).unwrap_or_default();
            let total_items = bucket.len();
            MarkerGroup {
                marker_kind: kind,
                total_items,
                groups: build_tag_groups(bucket),
            }
        })
        .collect()
}

/// Arena node for one distinct tag set within a marker kind.
struct GroupNode {
    tags: Vec<u64>,
    items: Vec<LegendItem>,
    parent: Option<usize>,
}

fn build_tag_groups(items: Vec<LegendItem>) -> Vec<TagGroup> {
    // One arena node per distinct tag set, in first-seen order
    let mut nodes: Vec<GroupNode> = Vec::new();
    let mut index_by_key: HashMap<Vec<u64>, usize> = HashMap::new();

    for item in items {
        let key: Vec<u64> = item.tags.iter().copied().collect();
        let index = *index_by_key.entry(key.clone()).or_insert_with(|| {
            nodes.push(GroupNode {
                tags: key,
                items: Vec::new(),
                parent: None,
            });
            nodes.len() - 1
        });
        nodes[index].items.push(item);
    }

    // Larger tag sets first; the untagged group always sorts last
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| {
        let (a_len, b_len) = (nodes[a].tags.len(), nodes[b].tags.len());
        match (a_len == 0, b_len == 0) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => b_len.cmp(&a_len),
        }
    });

    // Nest each group under the first strictly larger group containing
    // all of its tags. Strict supersets always precede their subsets in
    // `order`, so scanning the prefix covers every candidate parent.
    for position in 0..order.len() {
        let index = order[position];
        for &candidate in &order[..position] {
            if nodes[candidate].tags.len() > nodes[index].tags.len()
                && is_subset(&nodes[index].tags, &nodes[candidate].tags)
            {
                nodes[index].parent = Some(candidate);
                break;
            }
        }
    }

    // Materialize bottom-up: every child sits after its parent in
    // `order`, so walking the order in reverse sees children first.
    let mut pending_children: HashMap<usize, Vec<TagGroup>> = HashMap::new();
    let mut roots: Vec<TagGroup> = Vec::new();

    for &index in order.iter().rev() {
        let mut sub_groups = pending_children.remove(&index).unwrap_or_default();
        sub_groups.reverse();

        let node = &mut nodes[index];
        let group = TagGroup {
            tags: node.tags.clone(),
            items: std::mem::take(&mut node.items),
            sub_groups,
        };

        match node.parent {
            Some(parent) => pending_children.entry(parent).or_default().push(group),
            None => roots.push(group),
        }
    }

    roots.reverse();
    roots
}

/// True when every element of `inner` appears in `outer`.
///
/// Both slices are canonical ascending tag lists.
fn is_subset(inner: &[u64], outer: &[u64]) -> bool {
    inner.iter().all(|tag| outer.binary_search(tag).is_ok())
}
