//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_task_is_a_usage_error() {
    let temp = Project::empty();
    temp.ew()
        .args(&["task", "fly", "alice", "--password", "p1"])
        .fails()
        .stderr_has("unknown task 'fly'");
}

#[test]
fn missing_password_is_a_usage_error() {
    let temp = Project::empty();
    temp.ew()
        .args(&["login", "alice"])
        .fails()
        .stderr_has("--password");
}

#[test]
fn explicit_config_file_must_exist() {
    let temp = Project::empty();
    temp.ew()
        .args(&["--config", "missing.toml", "tasks"])
        .fails()
        .stderr_has("config file not found");
}

#[test]
fn unknown_config_key_is_rejected() {
    let temp = Project::empty();
    temp.file("ew.toml", "stor = \"elsewhere.json\"\n");
    temp.ew()
        .args(&["tasks"])
        .fails()
        .stderr_has("invalid config file");
}
