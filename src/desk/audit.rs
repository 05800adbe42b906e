use crate::desk::paths::DeskPaths;
use crate::desk::util::now_epoch_secs;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub at_epoch_secs: u64,
    pub op: String,
    pub subject: String,
    pub detail: String,
}

/// Append one JSONL event to the operation log. Every completed mutation of
/// the desk state gets exactly one entry.
pub fn append_event(paths: &DeskPaths, op: &str, subject: &str, detail: &str) -> Result<()> {
    fs::create_dir_all(&paths.logs_dir)
        .with_context(|| format!("failed to create {}", paths.logs_dir.display()))?;
    let event = AuditEvent {
        at_epoch_secs: now_epoch_secs()?,
        op: op.to_string(),
        subject: subject.to_string(),
        detail: detail.to_string(),
    };

    let line = format!("{}\n", serde_json::to_string(&event)?);
    use std::io::Write;
    let path = paths.logs_dir.join("audit.log");
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}
