//! Interactive shell specs

use crate::prelude::*;

#[test]
fn shell_runs_a_whole_session() {
    let temp = Project::empty();
    temp.ew()
        .args(&["shell"])
        .stdin("signup alice p1\nlogin alice p1\ntask watch-video\ntask click-ads\nstatus\nlogout\nquit\n")
        .passes()
        .stdout_has("Account created successfully! Please log in now.")
        .stdout_has("Welcome, alice!")
        .stdout_has("You earned 20 coins! Balance: 20")
        .stdout_has("You earned 5 coins for clicking ads! Balance: 25")
        .stdout_has("Clicks: 1/5")
        .stdout_has("Logged out successfully!");

    let store = temp.store_json();
    assert_eq!(store["alice"]["coins"], 25);
    assert_eq!(store["alice"]["clicks"], 1);
}

#[test]
fn shell_prints_task_links_in_session() {
    let temp = Project::empty();
    temp.ew()
        .args(&["shell"])
        .stdin("signup alice p1\nlogin alice p1\ntask install-app\n")
        .passes()
        .stdout_has("Open: https://play.google.com/store/apps/details?id=com.spotify.music");
}

#[test]
fn shell_reports_mistakes_and_continues() {
    let temp = Project::empty();
    temp.ew()
        .args(&["shell"])
        .stdin("status\nlogin ghost nope\nsignup bob p\n")
        .passes()
        .stdout_has("Please log in first.")
        .stdout_has("Invalid username or password.")
        .stdout_has("Account created successfully!");
}

#[test]
fn shell_without_tty_has_no_prompt() {
    let temp = Project::empty();
    temp.ew()
        .args(&["shell"])
        .stdin("help\n")
        .passes()
        .stdout_has("signup <USERNAME> <PASSWORD>")
        .stdout_lacks("ew> ");
}
