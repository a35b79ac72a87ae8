// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Link openers for task side effects

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Opens a task's link outside the ledger
///
/// Anything meant for the user is written to `out`.
pub trait LinkOpener {
    fn open(&self, url: &str, out: &mut dyn Write) -> io::Result<()>;
}

/// Writes the link for the user to follow
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOpener;

impl LinkOpener for PrintOpener {
    fn open(&self, url: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Open: {}", url)
    }
}

/// Hands the link to the platform's URL opener and waits for it to exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Opening {}", url)?;
        run_opener(Self::command(url))
    }
}

/// Run a platform opener to completion.
///
/// The openers hand the URL off and return promptly. A non-zero exit is an
/// error.
fn run_opener(mut cmd: Command) -> io::Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if !status.success() {
        return Err(io::Error::other(format!("{} exited with {}", program, status)));
    }
    Ok(())
}

/// Records links instead of opening them
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct FakeOpener {
    pub opened: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    pub fail: bool,
}

#[cfg(test)]
impl LinkOpener for FakeOpener {
    fn open(&self, url: &str, _out: &mut dyn Write) -> io::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no browser"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "opener_tests.rs"]
mod tests;
