//! Grouping tree nodes.

use crate::types::{fields, truncate_label};
use serde::Serialize;

/// Maximum characters of a category shown in node labels
pub const CATEGORY_LABEL_CHARS: usize = 10;

/// Level of a node in the grouping hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupLevel {
    Root,
    Supplier,
    Category,
    License,
    Model,
    Customer,
}

impl GroupLevel {
    /// Attribute chain from the top level down to the leaves
    pub const CHAIN: [GroupLevel; 5] = [
        GroupLevel::Supplier,
        GroupLevel::Category,
        GroupLevel::License,
        GroupLevel::Model,
        GroupLevel::Customer,
    ];

    /// Numeric level: 0 for the root up to 5 for customers
    pub fn depth(&self) -> u8 {
        match self {
            GroupLevel::Root => 0,
            GroupLevel::Supplier => 1,
            GroupLevel::Category => 2,
            GroupLevel::License => 3,
            GroupLevel::Model => 4,
            GroupLevel::Customer => 5,
        }
    }

    /// Record field grouped on at this level
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            GroupLevel::Root => None,
            GroupLevel::Supplier => Some(fields::SUPPLIER_ID),
            GroupLevel::Category => Some(fields::CATEGORY),
            GroupLevel::License => Some(fields::LICENSE_NO),
            GroupLevel::Model => Some(fields::MODEL),
            GroupLevel::Customer => Some(fields::CUSTOMER_ID),
        }
    }

    /// The level below this one, `None` for customers (leaves)
    pub fn child(&self) -> Option<GroupLevel> {
        match self {
            GroupLevel::Root => Some(GroupLevel::Supplier),
            GroupLevel::Supplier => Some(GroupLevel::Category),
            GroupLevel::Category => Some(GroupLevel::License),
            GroupLevel::License => Some(GroupLevel::Model),
            GroupLevel::Model => Some(GroupLevel::Customer),
            GroupLevel::Customer => None,
        }
    }

    /// Label prefix used by the network view
    pub fn label_prefix(&self) -> &'static str {
        match self {
            GroupLevel::Root => "",
            GroupLevel::Supplier => "Supplier: ",
            GroupLevel::Category => "Cat: ",
            GroupLevel::License => "Lic: ",
            GroupLevel::Model => "Mod: ",
            GroupLevel::Customer => "Cust: ",
        }
    }
}

/// A node of the grouping tree
///
/// Branch nodes own their children; customer leaves carry the number of
/// records that fold into them instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupNode {
    key: String,
    level: GroupLevel,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<GroupNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

impl GroupNode {
    pub(crate) fn branch(key: String, level: GroupLevel, children: Vec<GroupNode>) -> Self {
        Self {
            key,
            level,
            children,
            count: None,
        }
    }

    pub(crate) fn leaf(key: String, level: GroupLevel, count: usize) -> Self {
        Self {
            key,
            level,
            children: Vec::new(),
            count: Some(count),
        }
    }

    /// Untruncated grouping value (empty when the records lacked the field)
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn level(&self) -> GroupLevel {
        self.level
    }

    /// Children in first-seen order
    pub fn children(&self) -> &[GroupNode] {
        &self.children
    }

    /// Number of records folded into this leaf, `None` for branches
    pub fn leaf_count(&self) -> Option<usize> {
        self.count
    }

    pub fn is_leaf(&self) -> bool {
        self.count.is_some()
    }

    /// Number of records beneath this node
    pub fn record_count(&self) -> usize {
        match self.count {
            Some(count) => count,
            None => self.children.iter().map(GroupNode::record_count).sum(),
        }
    }

    /// Child with the given untruncated key
    pub fn child(&self, key: &str) -> Option<&GroupNode> {
        self.children.iter().find(|c| c.key == key)
    }

    /// Follow a path of untruncated keys from this node
    pub fn find(&self, path: &[&str]) -> Option<&GroupNode> {
        path.iter().try_fold(self, |node, key| node.child(key))
    }

    /// Label shown by the network view
    ///
    /// Only category labels are shortened; [`key`](Self::key) stays intact
    /// for lookups.
    pub fn display_label(&self) -> String {
        match self.level {
            GroupLevel::Root => "Root".to_string(),
            GroupLevel::Category => format!(
                "{}{}",
                self.level.label_prefix(),
                truncate_label(&self.key, CATEGORY_LABEL_CHARS)
            ),
            level => format!("{}{}", level.label_prefix(), self.key),
        }
    }

    /// All nodes of the subtree in pre-order, starting with `self`
    pub fn descendants(&self) -> Vec<&GroupNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Leaves of the subtree in order
    pub fn leaves(&self) -> impl Iterator<Item = &GroupNode> {
        self.descendants().into_iter().filter(|n| n.is_leaf())
    }
}
