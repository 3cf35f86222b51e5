//! Hand a file or folder to the desktop's default opener.
//!
//! A written gallery opens in the default browser; `open-output` opens the
//! output folder in the file manager. Both go through the platform's own
//! launcher, so there is nothing to configure.

use std::io;
use std::path::Path;
use std::process::{Child, Command};

/// Spawn the platform opener for `path`. Does not wait for it to exit.
pub fn open_path(path: &Path) -> io::Result<Child> {
    opener_command(path).spawn()
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
