use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

/// Hand a URL to the platform opener and return without waiting for it.
/// The URL is not validated or fetched.
pub fn open_link(url: &str) -> std::io::Result<()> {
    spawn_detached(opener_command(url))?;
    tracing::info!(url, "opened link");
    Ok(())
}

/// Spawn `cmd` with null stdio. A background thread waits on the child so it
/// is reaped when it exits.
fn spawn_detached(mut cmd: Command) -> std::io::Result<JoinHandle<()>> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    let mut child = cmd.spawn()?;
    let pid = child.id();
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => tracing::debug!(pid, %status, "opener exited"),
        Err(e) => tracing::warn!(pid, error = %e, "could not wait on opener"),
    }))
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    use std::os::windows::process::CommandExt;

    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).raw_arg(quote_for_cmd(url));
    cmd
}

/// Quote a URL for `cmd /C start` so `&`, `|` and `^` are not interpreted.
/// A double quote cannot be escaped inside the quotes, so it is percent-encoded.
#[cfg(any(target_os = "windows", test))]
fn quote_for_cmd(url: &str) -> String {
    format!("\"{}\"", url.replace('"', "%22"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}
