#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio() -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// chat
// ---------------------------------------------------------------------------

#[test]
fn chat_scripted_pick_by_number() {
    folio()
        .args(["chat", "--pick", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello. I'm And-droid"))
        .stdout(predicate::str::contains("You: View Technical Skills"))
        .stdout(predicate::str::contains("Core Skills: C++, Python"))
        .stdout(predicate::str::contains("[1] More on his C++/ROS work"));
}

#[test]
fn chat_pick_by_label_ignores_case() {
    folio()
        .args(["chat", "--pick", "view key projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key projects are Omniquad"));
}

#[test]
fn chat_walks_to_terminal_node() {
    folio()
        .args(["chat", "--pick", "3", "--pick", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session terminated."))
        .stdout(predicate::str::contains("(conversation ended)"));
}

#[test]
fn chat_pick_after_end_fails() {
    folio()
        .args(["chat", "--pick", "3", "--pick", "2", "--pick", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("conversation has ended"));
}

#[test]
fn chat_unknown_pick_fails() {
    folio()
        .args(["chat", "--pick", "xyzzy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot pick \"xyzzy\""));
}

#[test]
fn chat_unknown_pick_suggests_options() {
    folio()
        .args(["chat", "--pick", "skills"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot pick \"skills\""))
        .stderr(predicate::str::contains("did you mean: View Technical Skills"));
}

#[test]
fn chat_interactive_reads_stdin() {
    folio()
        .arg("chat")
        .write_stdin("1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Core Skills"));
}

#[test]
fn chat_interactive_reports_bad_input_and_continues() {
    folio()
        .arg("chat")
        .write_stdin("42\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no option matches: 42"))
        .stdout(predicate::str::contains("Key projects are Omniquad"));
}

#[test]
fn chat_markdown_transcript() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chat.md");

    folio()
        .args(["chat", "--pick", "3", "--transcript"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Transcript written to"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Chat Transcript"));
    assert!(content.contains("**And-droid**: Hello."));
    assert!(content.contains("> View Contact Info"));
    assert!(content.contains("andrea.berra@outlook.com"));
}

#[test]
fn chat_json_transcript() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chat.json");

    folio()
        .args(["chat", "--pick", "1", "--transcript"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let messages = value.as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["sender"], "user");
    assert_eq!(messages[1]["text"], "View Technical Skills");
}

#[test]
fn chat_transcript_to_missing_dir_fails() {
    folio()
        .args(["chat", "--pick", "1", "--transcript", "/nonexistent/dir/chat.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot write to"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_builtin_graph() {
    folio()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed."))
        .stdout(predicate::str::contains("9 nodes"))
        .stdout(predicate::str::contains("1 terminal"));
}

// ---------------------------------------------------------------------------
// graph
// ---------------------------------------------------------------------------

#[test]
fn graph_table_lists_every_node() {
    folio()
        .arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("greeting (entry)"))
        .stdout(predicate::str::contains("main_questions"))
        .stdout(predicate::str::contains("9 nodes, 9 reachable from 'greeting'"));
}

#[test]
fn graph_focus_shows_edges() {
    folio()
        .args(["graph", "--focus", "contact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("That is all, thank you. --> [end]"))
        .stdout(predicate::str::contains("reached from:"));
}

#[test]
fn graph_focus_terminal_node() {
    folio()
        .args(["graph", "--focus", "end"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(terminal: no options)"));
}

#[test]
fn graph_focus_unknown_node() {
    folio()
        .args(["graph", "--focus", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("node not found"));
}

#[test]
fn graph_json() {
    let output = folio().args(["graph", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let nodes = value.as_array().unwrap();
    assert_eq!(nodes.len(), 9);
    assert_eq!(nodes[0]["key"], "greeting");
    assert_eq!(nodes[0]["options"][0]["target"], "skills_overview");
}

// ---------------------------------------------------------------------------
// navigate
// ---------------------------------------------------------------------------

#[test]
fn navigate_single_section() {
    folio()
        .args(["navigate", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("home exiting"))
        .stdout(predicate::str::contains("about shown"))
        .stdout(predicate::str::contains("Showing 'about' after 900 ms"));
}

#[test]
fn navigate_chain_accumulates_time() {
    folio()
        .args(["navigate", "about", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 'projects' after 1800 ms"));
}

#[test]
fn navigate_current_section_is_noop() {
    folio()
        .args(["navigate", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(already on home)"))
        .stdout(predicate::str::contains("after 0 ms"));
}

#[test]
fn navigate_custom_durations() {
    folio()
        .args(["navigate", "--exit-ms", "100", "--enter-ms", "50", "contact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 'contact' after 150 ms"));
}

#[test]
fn navigate_deep_link_scrolls() {
    folio()
        .args(["navigate", "projects#omniquad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scroll to #omniquad"));
}

#[test]
fn navigate_unknown_section() {
    folio()
        .args(["navigate", "blog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown section: blog"));
}

#[test]
fn navigate_requires_a_section() {
    folio().arg("navigate").assert().failure();
}

// ---------------------------------------------------------------------------
// backdrop
// ---------------------------------------------------------------------------

#[test]
fn backdrop_stats() {
    folio()
        .args(["backdrop", "--frames", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30 frames, seed=42"))
        .stdout(predicate::str::contains("Particles"))
        .stdout(predicate::str::contains("80"))
        .stdout(predicate::str::contains("#00c896"));
}

#[test]
fn backdrop_is_reproducible() {
    let run = || {
        folio()
            .args(["backdrop", "--frames", "20", "--seed", "7"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn backdrop_rejects_empty_viewport() {
    folio()
        .args(["backdrop", "--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("viewport must be positive"));
}

// ---------------------------------------------------------------------------
// general
// ---------------------------------------------------------------------------

#[test]
fn verbose_logs_go_to_stderr() {
    folio()
        .args(["-vv", "navigate", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 'about'"))
        .stderr(predicate::str::contains("page loaded"));
}

#[test]
fn unknown_command_fails() {
    folio().arg("frobnicate").assert().failure();
}
