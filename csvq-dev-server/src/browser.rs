use std::process::Command;

/// Opens `url` in the platform's default browser. Failure is logged and
/// otherwise ignored; the dev server keeps running either way.
pub fn open_browser(url: &str) {
    let result = spawn_opener(url);
    if let Err(e) = result {
        log::warn!("failed to open browser for {}: {}", url, e);
    }
}

#[cfg(target_os = "linux")]
fn spawn_opener(url: &str) -> std::io::Result<()> {
    Command::new("xdg-open").arg(url).spawn().map(|_| ())
}

#[cfg(target_os = "macos")]
fn spawn_opener(url: &str) -> std::io::Result<()> {
    Command::new("open").arg(url).spawn().map(|_| ())
}

#[cfg(target_os = "windows")]
fn spawn_opener(url: &str) -> std::io::Result<()> {
    Command::new("cmd").args(["/C", "start", url]).spawn().map(|_| ())
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn spawn_opener(_url: &str) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no browser opener for this platform",
    ))
}
