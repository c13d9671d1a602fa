use crate::HypothesisLink;
use hypograph_core::{Hypothesis, HypothesisId, LinkId, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One child or parent entry on a [`GraphNode`]: the neighbor's id plus the
/// link that produced it. Parallel links yield one entry each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRef {
    pub node: HypothesisId,
    pub link: LinkId,
    pub label: Option<String>,
}

/// A hypothesis wrapped with its adjacency, valid for one build call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub hypothesis: Hypothesis,
    pub children: Vec<LinkRef>,
    pub parents: Vec<LinkRef>,
}

impl GraphNode {
    fn new(hypothesis: Hypothesis) -> Self {
        Self {
            hypothesis,
            children: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// A node is a root iff nothing links into it.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// The built dependency graph: a flat id-keyed node map plus the root ids
/// in input-node order. Never persisted; rebuilt from a fresh snapshot on
/// every read.
#[derive(Debug, Clone)]
pub struct HypothesisGraph {
    nodes: HashMap<HypothesisId, GraphNode>,
    roots: Vec<HypothesisId>,
}

impl HypothesisGraph {
    pub fn get(&self, id: HypothesisId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: HypothesisId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[HypothesisId] {
        &self.roots
    }

    pub fn root_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.roots.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Total number of resolved edges (dangling links are not counted).
    pub fn link_count(&self) -> usize {
        self.nodes.values().map(|n| n.children.len()).sum()
    }

    /// Looks up a node, failing with `NodeNotFound` for unknown ids.
    pub fn require(&self, id: HypothesisId) -> Result<&GraphNode> {
        self.nodes
            .get(&id)
            .ok_or_else(|| hypograph_core::HypoGraphError::NodeNotFound(id.to_string()))
    }
}

/// Builds the adjacency structure from flat hypothesis and link rows.
///
/// Links whose endpoints are not both present are dropped: hypotheses are
/// deleted independently of their links, so a dangling reference is stale
/// data, not an error. Self-links are kept; the traversal layer reports
/// them as cycles. Runs in O(|nodes| + |links|).
pub fn build_graph(nodes: Vec<Hypothesis>, links: &[HypothesisLink]) -> HypothesisGraph {
    let mut order = Vec::with_capacity(nodes.len());
    let mut map: HashMap<HypothesisId, GraphNode> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        order.push(node.id);
        map.insert(node.id, GraphNode::new(node));
    }

    for link in links {
        if !map.contains_key(&link.from) || !map.contains_key(&link.to) {
            debug!(
                link_id = %link.id,
                from = %link.from,
                to = %link.to,
                "dropping link with missing endpoint"
            );
            continue;
        }
        if let Some(parent) = map.get_mut(&link.from) {
            parent.children.push(LinkRef {
                node: link.to,
                link: link.id,
                label: link.label.clone(),
            });
        }
        if let Some(child) = map.get_mut(&link.to) {
            child.parents.push(LinkRef {
                node: link.from,
                link: link.id,
                label: link.label.clone(),
            });
        }
    }

    let roots: Vec<HypothesisId> = order
        .into_iter()
        .filter(|id| map.get(id).map(|n| n.is_root()).unwrap_or(false))
        .collect();

    debug!(
        nodes = map.len(),
        roots = roots.len(),
        "built hypothesis graph"
    );

    HypothesisGraph { nodes: map, roots }
}
