//! Flattened node/link form of the hierarchy for force-directed renderers.

use super::node::GroupNode;
use serde::Serialize;

/// A node as handed to the network renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Position in [`NetworkGraph::nodes`]
    pub index: usize,
    /// Display label (category labels are truncated)
    pub label: String,
    /// Untruncated grouping key
    pub full_id: String,
    /// 0 = root, 1 = supplier, ... 5 = customer
    pub level: u8,
    /// Record count for customer leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<usize>,
}

/// Parent -> child edge, by node index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
}

/// Nodes and links of a hierarchy in pre-order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl NetworkGraph {
    pub fn from_hierarchy(root: &GroupNode) -> Self {
        let mut graph = NetworkGraph::default();
        graph.push_subtree(root, None);
        graph
    }

    fn push_subtree(&mut self, node: &GroupNode, parent: Option<usize>) {
        let index = self.nodes.len();
        self.nodes.push(GraphNode {
            index,
            label: node.display_label(),
            full_id: node.key().to_string(),
            level: node.level().depth(),
            value: node.leaf_count(),
        });
        if let Some(source) = parent {
            self.links.push(GraphLink {
                source,
                target: index,
            });
        }
        for child in node.children() {
            self.push_subtree(child, Some(index));
        }
    }

    /// Look up a node by index (e.g. after a click in the renderer)
    pub fn node(&self, index: usize) -> Option<&GraphNode> {
        self.nodes.get(index)
    }
}
