//! Search-tree trace records
//!
//! When tracing is enabled the engine builds, per solve, a pure-data tree
//! mirroring the nodes the search visited, and emits the root through an
//! unbounded channel after the search returns. Emission never blocks and a
//! dropped receiver is ignored, so search values and timing are
//! independent of whether (or when) a consumer drains the channel.
//! Rendering the tree is an external concern.
//!
//! Two shapes are worth knowing when reading a trace: siblings skipped by
//! an alpha-beta cutoff are simply absent, and a subtree answered from the
//! memo table appears as a childless node carrying the cached value.

use serde::{Deserialize, Serialize};

/// Role of a node in the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// The AI chooses; children are minimized (or chance) layers
    Max,
    /// The opponent chooses
    Min,
    /// Probability-weighted landing perturbation between a chosen
    /// column and the positions it may actually produce
    Chance,
}

/// One visited search node: its backed-up value, role, and the children
/// that were actually explored, in visit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceNode {
    pub value: f64,
    pub kind: NodeKind,
    pub children: Vec<TraceNode>,
}

impl TraceNode {
    pub(crate) fn new(value: f64, kind: NodeKind, children: Vec<TraceNode>) -> Self {
        Self {
            value,
            kind,
            children,
        }
    }

    /// Total nodes in this subtree, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TraceNode::node_count).sum::<usize>()
    }

    /// Longest root-to-leaf path length, in edges.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_depth() {
        let leaf = |v| TraceNode::new(v, NodeKind::Max, Vec::new());
        let tree = TraceNode::new(
            1.0,
            NodeKind::Max,
            vec![
                TraceNode::new(2.0, NodeKind::Min, vec![leaf(3.0)]),
                TraceNode::new(4.0, NodeKind::Min, Vec::new()),
            ],
        );
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn serializes_for_external_renderers() {
        let tree = TraceNode::new(
            0.5,
            NodeKind::Chance,
            vec![TraceNode::new(1.0, NodeKind::Min, Vec::new())],
        );
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"value":0.5,"kind":"Chance","children":[{"value":1.0,"kind":"Min","children":[]}]}"#
        );
        let back: TraceNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
