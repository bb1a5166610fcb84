use anyhow::{Context, Result, bail};
use std::process::{Command, Stdio};

/// Copies text to the system clipboard by piping it to the platform's
/// clipboard utility.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip
pub fn copy(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        let mut pbcopy = Command::new("pbcopy");
        pipe_to(&mut pbcopy, text)
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        if pipe_to(&mut xclip, text).is_ok() {
            return Ok(());
        }
        let mut xsel = Command::new("xsel");
        xsel.args(["--clipboard", "--input"]);
        pipe_to(&mut xsel, text).context("install xclip or xsel for clipboard support")
    }

    #[cfg(target_os = "windows")]
    {
        let mut clip = Command::new("clip");
        pipe_to(&mut clip, text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        bail!("clipboard is not supported on this platform");
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(command: &mut Command, text: &str) -> Result<()> {
    use std::io::Write;

    let program = command.get_program().to_string_lossy().into_owned();
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write to {program}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {program}"))?;
    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}
