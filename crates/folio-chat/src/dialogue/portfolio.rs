//! The portfolio's built-in conversation script.

use super::graph::DialogueGraph;
use super::node::DialogueNode;
use crate::error::ChatResult;

/// Display name of the bot in transcripts.
pub const BOT_NAME: &str = "And-droid";

/// Nodes of the portfolio assistant, in authoring order.
pub fn portfolio_nodes() -> Vec<DialogueNode> {
    vec![
        DialogueNode::new(
            "greeting",
            "Hello. I'm And-droid, an interactive assistant for Andrea Berra's portfolio. \
             I can provide key highlights of his profile. How can I help you?",
        )
        .with_option("View Technical Skills", "skills_overview")
        .with_option("View Key Projects", "projects_overview")
        .with_option("View Contact Info", "contact"),
        DialogueNode::new(
            "skills_overview",
            "Core Skills: C++, Python, ROS/ROS2, PX4, Gazebo.\n\
             Focus: Full-stack development for autonomous aerial systems.",
        )
        .with_option("More on his C++/ROS work", "skills_core_tech")
        .with_option("Tell me about his projects", "projects_overview")
        .with_option("Return to main menu", "main_questions"),
        DialogueNode::new(
            "skills_core_tech",
            "He uses C++ within ROS2 for performance-critical tasks like control and \
             estimation, ensuring system reliability. The Omniquad project demonstrates \
             this application.",
        )
        .with_option("Tell me about Omniquad", "projects_omniquad")
        .with_option("Return to main menu", "main_questions"),
        DialogueNode::new(
            "projects_overview",
            "Key projects are Omniquad (advanced drone control) and GIN (AI perception). \
             Which would you like details on?",
        )
        .with_option("Omniquad Details", "projects_omniquad")
        .with_option("GIN Details", "projects_gin")
        .with_option("Return to main menu", "main_questions"),
        DialogueNode::new(
            "projects_omniquad",
            "Omniquad is a full framework for omnidirectional drones. It showcases his \
             management of a complex stack including C++, ROS2, PX4, and Gazebo simulation.",
        )
        .with_option("What about the GIN project?", "projects_gin")
        .with_option("Recap his skills", "skills_overview")
        .with_option("Return to main menu", "main_questions"),
        DialogueNode::new(
            "projects_gin",
            "GIN is a lightweight AI target tracker (Python/YOLO) for resource-constrained \
             hardware. It highlights his skill in deploying efficient perception systems.",
        )
        .with_option("Tell me about Omniquad again", "projects_omniquad")
        .with_option("How can I contact him?", "contact")
        .with_option("Return to main menu", "main_questions"),
        DialogueNode::new(
            "contact",
            "Contact via email (andrea.berra@outlook.com) or LinkedIn \
             (linkedin.com/in/andrea-berra/).",
        )
        .with_option("Ask another question", "main_questions")
        .with_option("That is all, thank you.", "end"),
        DialogueNode::new("main_questions", "Main menu. What is your next query?")
            .with_option("Technical Skills", "skills_overview")
            .with_option("Key Projects", "projects_overview")
            .with_option("Contact Info", "contact"),
        DialogueNode::new("end", "You're welcome. Session terminated."),
    ]
}

/// The portfolio script as a lookup table.
pub fn portfolio_graph() -> ChatResult<DialogueGraph> {
    DialogueGraph::new(portfolio_nodes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_resolves() {
        let graph = portfolio_graph().unwrap();
        for node in graph.nodes() {
            for option in &node.options {
                assert!(
                    graph.contains(&option.target),
                    "{} -> {} does not resolve",
                    node.key,
                    option.target
                );
            }
        }
        assert!(graph.validate().is_empty());
    }

    #[test]
    fn end_is_the_only_terminal_node() {
        let graph = portfolio_graph().unwrap();
        let terminals: Vec<_> = graph.terminal_nodes().iter().map(|n| n.key.as_str()).collect();
        assert_eq!(terminals, vec!["end"]);
    }

    #[test]
    fn greeting_offers_three_options() {
        let graph = portfolio_graph().unwrap();
        let labels: Vec<_> = graph
            .entry()
            .options
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["View Technical Skills", "View Key Projects", "View Contact Info"]
        );
    }

    #[test]
    fn texts_keep_line_breaks() {
        let graph = portfolio_graph().unwrap();
        assert_eq!(
            graph.get("skills_overview").unwrap().text,
            "Core Skills: C++, Python, ROS/ROS2, PX4, Gazebo.\n\
             Focus: Full-stack development for autonomous aerial systems."
        );
        assert!(graph.get("greeting").unwrap().text.contains("And-droid"));
    }

    #[test]
    fn main_menu_is_reachable_from_every_branch() {
        let graph = portfolio_graph().unwrap();
        let hubs: Vec<_> = graph
            .nodes()
            .iter()
            .filter(|n| n.options.iter().any(|o| o.target == "main_questions"))
            .map(|n| n.key.as_str())
            .collect();
        assert_eq!(hubs.len(), 6);
    }
}
