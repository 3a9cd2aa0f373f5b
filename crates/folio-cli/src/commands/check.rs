use colored::Colorize;

use folio_chat::portfolio_graph;
use folio_core::FolioConfig;

pub fn run() -> Result<(), String> {
    FolioConfig::default()
        .validate()
        .map_err(|e| format!("invalid default configuration: {e}"))?;

    let graph = portfolio_graph().map_err(|e| format!("invalid dialogue graph: {e}"))?;
    let issues = graph.validate();

    for issue in &issues {
        if issue.is_error() {
            eprintln!("  {} {issue}", "error:".red().bold());
        } else {
            eprintln!("  {} {issue}", "warning:".yellow().bold());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        return Err(format!(
            "dialogue graph has {errors} error{}",
            if errors == 1 { "" } else { "s" }
        ));
    }

    let options: usize = graph.nodes().iter().map(|n| n.options.len()).sum();
    println!("  All checks passed.");
    println!(
        "  {} nodes, {} options, {} terminal",
        graph.len(),
        options,
        graph.terminal_nodes().len()
    );
    Ok(())
}
