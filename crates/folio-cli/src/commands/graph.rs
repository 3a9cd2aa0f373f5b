use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use folio_chat::{DialogueGraph, DialogueNode, portfolio_graph};

pub fn run(focus: Option<&str>, json: bool) -> Result<(), String> {
    let graph = portfolio_graph().map_err(|e| format!("invalid dialogue graph: {e}"))?;

    if json {
        let nodes: Vec<&DialogueNode> = match focus {
            Some(key) => vec![find(&graph, key)?],
            None => graph.nodes().iter().collect(),
        };
        let out = serde_json::to_string_pretty(&nodes)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    match focus {
        Some(key) => render_focused(&graph, find(&graph, key)?),
        None => render_table(&graph),
    }
    Ok(())
}

fn find<'g>(graph: &'g DialogueGraph, key: &str) -> Result<&'g DialogueNode, String> {
    graph
        .get(key)
        .ok_or_else(|| format!("node not found: \"{key}\""))
}

fn render_focused(graph: &DialogueGraph, node: &DialogueNode) {
    println!("  [{}]", node.key.bold());
    for line in node.text.lines() {
        println!("    {}", line.dimmed());
    }
    println!();

    if node.is_terminal() {
        println!("    (terminal: no options)");
        return;
    }
    for option in &node.options {
        let target = if graph.contains(&option.target) {
            format!("[{}]", option.target).green()
        } else {
            format!("[{}] (missing)", option.target).red()
        };
        println!("    --> {} --> {target}", option.label);
    }

    let incoming: Vec<&str> = graph
        .nodes()
        .iter()
        .filter(|n| n.options.iter().any(|o| o.target == node.key))
        .map(|n| n.key.as_str())
        .collect();
    if !incoming.is_empty() {
        println!();
        println!("    reached from: {}", incoming.join(", "));
    }
}

fn render_table(graph: &DialogueGraph) {
    let reachable = graph.reachable();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Node", "Options", "Leads to", "Reachable"]);

    for node in graph.nodes() {
        let targets: Vec<&str> = node.options.iter().map(|o| o.target.as_str()).collect();
        let key = if node.key == graph.entry().key {
            format!("{} (entry)", node.key)
        } else {
            node.key.clone()
        };
        table.add_row(vec![
            key,
            node.options.len().to_string(),
            if targets.is_empty() {
                "-".to_string()
            } else {
                targets.join(", ")
            },
            if reachable.contains(node.key.as_str()) {
                "yes".to_string()
            } else {
                "no".to_string()
            },
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} nodes, {} reachable from '{}'",
        graph.len(),
        reachable.len(),
        graph.entry().key
    );
}
