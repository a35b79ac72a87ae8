//! Help and catalog specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    let temp = Project::empty();
    temp.ew()
        .args(&["--help"])
        .passes()
        .stdout_has("signup")
        .stdout_has("withdraw")
        .stdout_has("shell");
}

#[test]
fn tasks_lists_catalog_without_a_store() {
    let temp = Project::empty();
    temp.ew()
        .args(&["tasks"])
        .passes()
        .stdout_has("watch-video")
        .stdout_has("+20")
        .stdout_has("Refer a Friend & Earn (+1 referrals)");

    assert!(!temp.store().exists());
}

#[test]
fn tasks_as_json() {
    let temp = Project::empty();
    let run = temp.ew().args(&["tasks", "--format", "json"]).passes();

    let tasks: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 7);
    assert_eq!(tasks[1]["name"], "watch-video");
    assert_eq!(tasks[1]["reward"], 20);
    assert_eq!(tasks[6]["counter"], "clicks");
}

#[test]
fn completions_generate_for_bash() {
    let temp = Project::empty();
    temp.ew()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("ew");
}
