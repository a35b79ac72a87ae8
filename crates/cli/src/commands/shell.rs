// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ew shell` - interactive session
//!
//! Reads one command per line. The session (who is logged in, which page is
//! showing, the theme) lives only as long as the shell does. User mistakes
//! are reported inline and the shell keeps going; storage failures end it.

use super::{account, task, withdraw, App};
use crate::error::EwError;
use crate::output::{self, OutputFormat};
use ew_core::{Page, PaymentMethod, Session, TaskKind, Theme};
use ew_storage::RecordStore;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  signup <USERNAME> <PASSWORD>   Create a new account
  login <USERNAME> <PASSWORD>    Log in
  logout                         Log out
  page task|settings             Switch page
  tasks                          List tasks
  task <KIND>                    Complete a task
  status                         Show balance and withdrawal standing
  theme light|dark|blue          Change theme
  withdraw <AMOUNT> <METHOD>     Request a withdrawal
  help                           Show this help
  quit                           Leave the shell";

enum Flow {
    Continue,
    Quit,
}

/// Run the shell until `quit` or end of input.
///
/// With `interactive` set a prompt is written before each line.
pub fn run<S, R, W>(
    app: &mut App<S>,
    input: R,
    out: &mut W,
    format: OutputFormat,
    interactive: bool,
) -> anyhow::Result<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();
    if interactive {
        writeln!(out, "Earn & Win. Type 'help' for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{}", prompt(&session))?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            continue;
        };

        match dispatch(app, &mut session, command, args, out, format) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => match e.downcast::<EwError>() {
                Ok(user_error) => write!(out, "{}", user_error)?,
                Err(e) => return Err(e),
            },
        }
    }
    Ok(())
}

fn prompt(session: &Session) -> String {
    match session.username() {
        Some(username) => format!("ew:{}/{}> ", username, session.page),
        None => "ew> ".to_string(),
    }
}

fn require_login(session: &Session) -> Result<String, EwError> {
    session
        .username()
        .map(str::to_string)
        .ok_or_else(EwError::login_required)
}

fn require_logout(session: &Session) -> Result<(), EwError> {
    match session.username() {
        Some(username) => Err(EwError::already_logged_in(username)),
        None => Ok(()),
    }
}

fn dispatch<S, W>(
    app: &mut App<S>,
    session: &mut Session,
    command: &str,
    args: &[&str],
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<Flow>
where
    S: RecordStore,
    W: Write,
{
    match command {
        "help" => writeln!(out, "{}", HELP)?,
        "quit" | "exit" => return Ok(Flow::Quit),

        "signup" => {
            require_logout(session)?;
            let &[username, password] = args else {
                return Err(EwError::usage("signup <USERNAME> <PASSWORD>").into());
            };
            account::signup(&mut app.ledger, username, password)?;
            writeln!(out, "Account created successfully! Please log in now.")?;
        }

        "login" => {
            require_logout(session)?;
            let &[username, password] = args else {
                return Err(EwError::usage("login <USERNAME> <PASSWORD>").into());
            };
            account::login(&app.ledger, username, password)?;
            session.login(username);
            writeln!(out, "Welcome, {}!", username)?;
        }

        "logout" => {
            require_login(session)?;
            session.logout();
            writeln!(out, "Logged out successfully!")?;
        }

        "page" => {
            let username = require_login(session)?;
            let &[name] = args else {
                return Err(EwError::usage("page task|settings").into());
            };
            let page = name.parse::<Page>().map_err(|e| EwError::new(format!("{}", e)))?;
            session.navigate(page);
            render_page(app, session, &username, out, format)?;
        }

        "tasks" => output::write_list(out, &task::catalog(), format)?,

        "task" => {
            let username = require_login(session)?;
            let &[name] = args else {
                return Err(EwError::usage("task <KIND>").into());
            };
            let kind = name.parse::<TaskKind>().map_err(|e| {
                EwError::new(format!("{}", e)).with_suggestion("List tasks: tasks")
            })?;
            let receipt = task::perform(app, &username, kind, out)?;
            output::write(out, &receipt, format)?;
        }

        "status" => {
            let username = require_login(session)?;
            let status = account::status(&app.ledger, &app.policy, &username)?;
            output::write(out, &status, format)?;
        }

        "theme" => {
            let &[name] = args else {
                return Err(EwError::usage("theme light|dark|blue").into());
            };
            let theme = name.parse::<Theme>().map_err(|e| EwError::new(format!("{}", e)))?;
            session.theme = theme;
            writeln!(out, "Theme changed to {}!", theme)?;
        }

        "withdraw" => {
            let username = require_login(session)?;
            let &[amount, method] = args else {
                return Err(EwError::usage("withdraw <AMOUNT> <METHOD>").into());
            };
            let amount = amount
                .parse::<u64>()
                .map_err(|_| EwError::new(format!("invalid amount '{}'", amount)))?;
            let method = method
                .parse::<PaymentMethod>()
                .map_err(|e| EwError::new(format!("{}", e)))?;
            let request = withdraw::request(app, &username, amount, method)?;
            output::write(out, &request, format)?;
        }

        other => {
            return Err(EwError::new(format!("Unknown command '{}'", other))
                .with_suggestion("Show commands: help")
                .into())
        }
    }
    Ok(Flow::Continue)
}

fn render_page<S, W>(
    app: &App<S>,
    session: &Session,
    username: &str,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    S: RecordStore,
    W: Write,
{
    match session.page {
        Page::Task => {
            writeln!(
                out,
                "Welcome, {}! Complete tasks below to earn coins:",
                username
            )?;
            output::write_list(out, &task::catalog(), format)?;
        }
        Page::Settings => {
            writeln!(out, "Theme: {}", session.theme)?;
            let status = account::status(&app.ledger, &app.policy, username)?;
            output::write(out, &status, format)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
