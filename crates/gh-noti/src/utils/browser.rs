//! Opening notification links in the system browser

use tokio::process::Command;

/// Platform command that hands `url` to the default browser
fn launcher(url: &str) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    command
}

/// Open `url` and wait for the launcher to exit
pub async fn open_url(url: String) {
    if url.is_empty() {
        log::warn!("Notification has no link, nothing to open");
        return;
    }

    let status = match launcher(&url).status().await {
        Ok(status) => status,
        Err(e) => {
            log::error!("Failed to start browser for {}: {}", url, e);
            return;
        }
    };
    if !status.success() {
        log::warn!("Browser launcher exited with {} for {}", status, url);
    }
}
