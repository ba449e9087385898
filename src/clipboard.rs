// Clipboard integration for Recipe-Local
// Pipes text into the platform clipboard tool, when one is installed

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const CLIPBOARD_TOOLS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const CLIPBOARD_TOOLS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_TOOLS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Copy text to the system clipboard.
///
/// Tries the platform clipboard tools in preference order. Fails when none
/// is installed or all of them error; callers fall back to printing the
/// text instead of treating this as fatal.
pub fn copy(text: &str) -> Result<()> {
    for tool in CLIPBOARD_TOOLS {
        let (program, args) = (tool[0], &tool[1..]);

        let path = match which::which(program) {
            Ok(path) => path,
            Err(_) => continue,
        };

        match pipe_to(&path, args, text) {
            Ok(()) => {
                log::debug!("Copied {} bytes to clipboard via {}", text.len(), program);
                return Ok(());
            }
            Err(e) => log::warn!("Clipboard tool {} failed: {:#}", program, e),
        }
    }

    bail!("no clipboard tool available")
}

fn pipe_to(program: &std::path::Path, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("Failed to spawn clipboard tool")?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .context("Failed to write to clipboard tool")?;
    }

    let status = child.wait().context("Failed to wait for clipboard tool")?;
    if !status.success() {
        bail!("clipboard tool exited with {status}");
    }

    Ok(())
}
