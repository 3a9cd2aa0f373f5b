//! The immutable node table and its consistency checks.

use std::collections::{HashMap, HashSet, VecDeque};

use super::node::DialogueNode;
use crate::error::{ChatError, ChatResult};

/// Key of the node every conversation starts at.
pub const ENTRY_NODE: &str = "greeting";

/// A problem found by [`DialogueGraph::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// An option points at a key that is not in the graph.
    DanglingTarget {
        /// Node owning the option.
        node: String,
        /// Label of the broken option.
        label: String,
        /// The missing key.
        target: String,
    },
    /// No path leads from the entry node to this node.
    Unreachable {
        /// The orphaned node.
        node: String,
    },
}

impl GraphIssue {
    /// Dangling targets stall a conversation; unreachable nodes are only dead text.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::DanglingTarget { .. })
    }
}

impl std::fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingTarget {
                node,
                label,
                target,
            } => write!(f, "{node}: option '{label}' points at missing node '{target}'"),
            Self::Unreachable { node } => write!(f, "{node}: unreachable from the entry node"),
        }
    }
}

/// A static conversation graph: node key to node contents.
///
/// Built once and never mutated. Cycles are expected (every branch leads back
/// to a menu node). Nodes keep their authoring order for listing.
#[derive(Debug, Clone)]
pub struct DialogueGraph {
    nodes: Vec<DialogueNode>,
    index: HashMap<String, usize>,
    entry: usize,
}

impl DialogueGraph {
    /// Build a graph entered at [`ENTRY_NODE`].
    pub fn new(nodes: Vec<DialogueNode>) -> ChatResult<Self> {
        Self::with_entry(nodes, ENTRY_NODE)
    }

    /// Build a graph entered at `entry`.
    ///
    /// Duplicate keys and a missing entry node are rejected. Dangling option
    /// targets are accepted here and reported by [`Self::validate`].
    pub fn with_entry(nodes: Vec<DialogueNode>, entry: &str) -> ChatResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.key.clone(), i).is_some() {
                return Err(ChatError::DuplicateNode(node.key.clone()));
            }
        }
        let entry = *index
            .get(entry)
            .ok_or_else(|| ChatError::MissingEntry(entry.to_string()))?;
        Ok(Self {
            nodes,
            index,
            entry,
        })
    }

    /// The node every conversation starts at.
    pub fn entry(&self) -> &DialogueNode {
        &self.nodes[self.entry]
    }

    /// Look up a node by key.
    pub fn get(&self, key: &str) -> Option<&DialogueNode> {
        self.index.get(key).map(|&i| &self.nodes[i])
    }

    /// Whether a node with this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All nodes in authoring order.
    pub fn nodes(&self) -> &[DialogueNode] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a graph holds at least its entry node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes that end the conversation.
    pub fn terminal_nodes(&self) -> Vec<&DialogueNode> {
        self.nodes.iter().filter(|n| n.is_terminal()).collect()
    }

    /// Keys reachable from the entry node by following resolvable options.
    pub fn reachable(&self) -> HashSet<&str> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        let entry = self.entry();
        seen.insert(entry.key.as_str());
        queue.push_back(entry);

        while let Some(node) = queue.pop_front() {
            for next in node.options.iter().filter_map(|o| self.get(&o.target)) {
                if seen.insert(next.key.as_str()) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Check closure (every target resolves) and reachability.
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();
        for node in &self.nodes {
            for option in &node.options {
                if !self.contains(&option.target) {
                    issues.push(GraphIssue::DanglingTarget {
                        node: node.key.clone(),
                        label: option.label.clone(),
                        target: option.target.clone(),
                    });
                }
            }
        }

        issues.extend(self.unreachable_nodes().into_iter().map(|node| {
            GraphIssue::Unreachable {
                node: node.key.clone(),
            }
        }));
        issues
    }

    /// Nodes with no path from the entry node, in authoring order.
    pub fn unreachable_nodes(&self) -> Vec<&DialogueNode> {
        let reachable = self.reachable();
        self.nodes
            .iter()
            .filter(|n| !reachable.contains(n.key.as_str()))
            .collect()
    }

    /// Whether every option target resolves to a node.
    pub fn is_closed(&self) -> bool {
        self.validate().iter().all(|issue| !issue.is_error())
    }
}
