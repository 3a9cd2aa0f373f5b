//! Dialogue graph types and the built-in portfolio script.

mod graph;
mod node;
mod portfolio;

pub use graph::{DialogueGraph, ENTRY_NODE, GraphIssue};
pub use node::{ChatOption, DialogueNode};
pub use portfolio::{BOT_NAME, portfolio_graph, portfolio_nodes};
