//! Search trace
//!
//! An owned tree recording every explored position: each node exclusively
//! owns its children, and the engine hands the root back to the caller once
//! the search returns, after which it is read-only.

use serde_json::{json, Map, Value};

/// Layer role of a trace node, fixed when the owning recursive call creates
/// the node. `Max`/`Min` are layer roles, not literal sides; a node with no
/// children is a `Leaf` regardless of which layer reached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Max,
    Min,
    Chance,
    Leaf,
}

impl NodeKind {
    /// Presentation label. The root is always presented as a maximizing
    /// node, leaves as plain value nodes.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Root | NodeKind::Max => "MAX",
            NodeKind::Min => "MIN",
            NodeKind::Chance => "CHANCE",
            NodeKind::Leaf => "VALUE",
        }
    }
}

/// One explored position in the search tree.
#[derive(Clone, Debug)]
pub struct TraceNode {
    /// Column that led here; `None` at the root.
    pub mv: Option<usize>,
    pub kind: NodeKind,
    /// Running best (or leaf score); final once the owning call returns.
    pub value: f64,
    /// Final alpha bound, recorded only on pruning max/min layers.
    pub alpha: Option<f64>,
    /// Final beta bound, recorded only on pruning max/min layers.
    pub beta: Option<f64>,
    /// Outcome probability; 1.0 everywhere except chance-outcome children.
    pub prob: f64,
    /// Depth from the root.
    pub depth: u32,
    pub children: Vec<TraceNode>,
}

impl TraceNode {
    pub fn new(mv: Option<usize>, kind: NodeKind, depth: u32) -> Self {
        TraceNode {
            mv,
            kind,
            value: 0.0,
            alpha: None,
            beta: None,
            prob: 1.0,
            depth,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: TraceNode) {
        self.children.push(child);
    }

    /// Renders the tree for a react-d3-tree style consumer:
    /// `{"name", "attributes", "children"}`, numeric attributes as
    /// two-decimal strings, `col` only below the root, `prob` only when it
    /// differs from 1.0.
    pub fn to_json(&self) -> Value {
        let mut attributes = Map::new();
        attributes.insert("value".into(), Value::String(format!("{:.2}", self.value)));

        if self.depth != 0 {
            if let Some(mv) = self.mv {
                attributes.insert("col".into(), Value::String(mv.to_string()));
            }
        }
        if let Some(alpha) = self.alpha {
            attributes.insert("alpha".into(), Value::String(format!("{:.2}", alpha)));
        }
        if let Some(beta) = self.beta {
            attributes.insert("beta".into(), Value::String(format!("{:.2}", beta)));
        }
        if self.prob != 1.0 {
            attributes.insert("prob".into(), Value::String(format!("{:.2}", self.prob)));
        }

        json!({
            "name": self.kind.label(),
            "attributes": attributes,
            "children": self.children.iter().map(TraceNode::to_json).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod trace_tests;
