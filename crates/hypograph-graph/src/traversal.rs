use crate::{GraphNode, HypothesisGraph};
use hypograph_core::{HypothesisId, Result};
use std::collections::HashSet;

/// Configuration for graph traversal.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Maximum depth to descend (None for unlimited)
    pub max_depth: Option<usize>,
    /// Maximum number of entries to yield (None for unlimited)
    pub max_nodes: Option<usize>,
    /// Whether to include the starting node in results
    pub include_start: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            max_nodes: None,
            include_start: true,
        }
    }
}

/// One row of a traversal: the node, its depth below the root, and whether
/// it closes a cycle. A cyclic entry is a terminal leaf; its children are
/// never expanded.
#[derive(Debug, Clone)]
pub struct TraversalEntry<'a> {
    pub node: &'a GraphNode,
    pub depth: usize,
    pub cyclic: bool,
}

struct Frame {
    id: HypothesisId,
    depth: usize,
    cyclic: bool,
    /// Ancestor ids on this frame's path, excluding the frame itself.
    /// Each frame owns its copy: sibling branches must not observe each
    /// other's descent.
    path: HashSet<HypothesisId>,
}

/// Depth-first descent through `children` edges with per-path cycle
/// guarding.
///
/// The same node reached via two non-overlapping paths is yielded once per
/// path: the structure is a forest presentation of a DAG, not a
/// single-owner tree. A child already present on the current path is
/// yielded with `cyclic = true` and not descended into, so the iterator
/// terminates on any input graph, cycles and self-links included. Sibling
/// branches are unaffected by a cycle elsewhere.
pub struct DfsIterator<'a> {
    graph: &'a HypothesisGraph,
    stack: Vec<Frame>,
    config: TraversalConfig,
    nodes_visited: usize,
}

impl<'a> DfsIterator<'a> {
    fn new(graph: &'a HypothesisGraph, start: HypothesisId, config: TraversalConfig) -> Self {
        let mut stack = Vec::new();
        if config.include_start {
            stack.push(Frame {
                id: start,
                depth: 0,
                cyclic: false,
                path: HashSet::new(),
            });
        } else if let Some(node) = graph.get(start) {
            let within_depth = config.max_depth.map(|max| 1 <= max).unwrap_or(true);
            if within_depth {
                let mut path = HashSet::new();
                path.insert(start);
                for child in node.children.iter().rev() {
                    stack.push(Frame {
                        id: child.node,
                        depth: 1,
                        cyclic: path.contains(&child.node),
                        path: path.clone(),
                    });
                }
            }
        }
        Self {
            graph,
            stack,
            config,
            nodes_visited: 0,
        }
    }
}

impl<'a> Iterator for DfsIterator<'a> {
    type Item = TraversalEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(max_nodes) = self.config.max_nodes {
            if self.nodes_visited >= max_nodes {
                return None;
            }
        }

        while let Some(frame) = self.stack.pop() {
            let Some(node) = self.graph.get(frame.id) else {
                continue;
            };

            if !frame.cyclic {
                let child_depth = frame.depth + 1;
                let within_depth = self
                    .config
                    .max_depth
                    .map(|max| child_depth <= max)
                    .unwrap_or(true);
                if within_depth && !node.children.is_empty() {
                    let mut path = frame.path.clone();
                    path.insert(frame.id);
                    // Reverse push keeps children in link order.
                    for child in node.children.iter().rev() {
                        self.stack.push(Frame {
                            id: child.node,
                            depth: child_depth,
                            cyclic: path.contains(&child.node),
                            path: path.clone(),
                        });
                    }
                }
            }

            self.nodes_visited += 1;
            return Some(TraversalEntry {
                node,
                depth: frame.depth,
                cyclic: frame.cyclic,
            });
        }

        None
    }
}

impl HypothesisGraph {
    /// Starts a fresh depth-first traversal from `root` with default
    /// configuration. Restartable: each call returns an independent
    /// iterator.
    pub fn traverse(&self, root: HypothesisId) -> Result<DfsIterator<'_>> {
        self.traverse_with_config(root, TraversalConfig::default())
    }

    /// Starts a traversal from `root` honoring the given limits.
    pub fn traverse_with_config(
        &self,
        root: HypothesisId,
        config: TraversalConfig,
    ) -> Result<DfsIterator<'_>> {
        self.require(root)?;
        Ok(DfsIterator::new(self, root, config))
    }
}
