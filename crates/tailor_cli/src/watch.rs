//! Watch mode: regenerate whenever the theme file changes

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};

/// How long to keep draining events after the first one; editors tend to
/// emit a burst per save.
const SETTLE: Duration = Duration::from_millis(100);

/// Watch `theme_path` and call `on_change` after every settled burst of
/// events touching it. Only returns on watcher failure.
pub fn run(theme_path: &Path, mut on_change: impl FnMut()) -> Result<()> {
    let file_name = theme_path
        .file_name()
        .map(|name| name.to_os_string())
        .context("theme path has no file name")?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        let Ok(event) = res else { return };
        if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
            return;
        }
        if event.paths.iter().any(|p| p.file_name() == Some(file_name.as_os_str())) {
            let _ = tx.send(());
        }
    })
    .context("failed to create file watcher")?;

    // Watch the parent directory: editors often replace the file on save,
    // which drops a watch registered on the file itself.
    let dir = match theme_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", dir.display()))?;

    tracing::info!(path = %theme_path.display(), "watching for changes");

    loop {
        rx.recv().context("watch channel closed")?;
        while rx.recv_timeout(SETTLE).is_ok() {}
        on_change();
    }
}
