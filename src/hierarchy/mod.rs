//! Grouping engine
//!
//! Builds the five-level distribution hierarchy used by the network view:
//!
//! ```text
//! Root
//! +-- Supplier: S1
//!     +-- Cat: Orthopedic...
//!         +-- Lic: L1
//!             +-- Mod: M1
//!                 +-- Cust: C1   (count 2)
//!                 +-- Cust: C2   (count 1)
//! ```
//!
//! Each level partitions the records that reached its parent by the raw value
//! of one attribute, in first-seen order. Records missing an attribute fall
//! into the empty-key group. Leaf counts always add up to the number of
//! records that reached a node.

pub mod graph;
pub mod node;

pub use graph::{GraphLink, GraphNode, NetworkGraph};
pub use node::{GroupLevel, GroupNode, CATEGORY_LABEL_CHARS};

use crate::types::Record;
use std::collections::HashMap;

/// Group `records` into the supplier > category > license > model > customer tree
pub fn build_hierarchy(records: &[Record]) -> GroupNode {
    let all: Vec<&Record> = records.iter().collect();
    let root = GroupNode::branch(
        "Root".to_string(),
        GroupLevel::Root,
        build_level(&all, GroupLevel::Supplier),
    );

    tracing::debug!(
        "Built hierarchy over {} record(s): {} supplier(s), {} node(s)",
        records.len(),
        root.children().len(),
        root.descendants().len()
    );
    root
}

fn build_level(records: &[&Record], level: GroupLevel) -> Vec<GroupNode> {
    let Some(field) = level.attribute() else {
        return Vec::new();
    };

    group_stable(records, field)
        .into_iter()
        .map(|(key, members)| match level.child() {
            Some(next) => GroupNode::branch(key, level, build_level(&members, next)),
            None => GroupNode::leaf(key, level, members.len()),
        })
        .collect()
}

/// Partition by the string form of `field`, keeping first-seen key order
fn group_stable<'a>(records: &[&'a Record], field: &str) -> Vec<(String, Vec<&'a Record>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a Record>)> = Vec::new();

    for &record in records {
        let key = record.key(field);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    groups
}
