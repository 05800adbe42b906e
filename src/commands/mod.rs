pub mod deliver;
pub mod doctor;
pub mod download;
pub mod files;
pub mod login;
pub mod logout;
pub mod notify;
pub mod register;
pub mod remove;
pub mod requests;
pub mod revise;
pub mod set_status;
pub mod submit;
pub mod whoami;

use anyhow::Result;
use serde::Serialize;

use crate::desk::config::load_config;
use crate::desk::model::{FileRequest, Role};
use crate::desk::paths::resolve_paths;
use crate::desk::state::Desk;
use crate::desk::status::RequestStatus;
use crate::error::DeskError;

#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub command: String,
    pub ok: bool,
    pub details: Vec<String>,
    pub issues: Vec<String>,
}

impl CommandReport {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ok: true,
            details: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn detail(&mut self, text: impl Into<String>) {
        self.details.push(text.into());
    }

    pub fn issue(&mut self, text: impl Into<String>) {
        self.ok = false;
        self.issues.push(text.into());
    }
}

pub fn open_desk() -> Result<Desk> {
    let paths = resolve_paths()?;
    let config = load_config()?;
    Desk::open(paths, config)
}

/// Route a core-operation failure: user-blocking `DeskError`s become report
/// issues; anything else (I/O, clock) propagates as a hard error.
pub fn domain_issue(report: &mut CommandReport, err: anyhow::Error) -> Result<()> {
    match err.downcast::<DeskError>() {
        Ok(domain) => {
            report.issue(domain.to_string());
            Ok(())
        }
        Err(other) => Err(other),
    }
}

/// The signed-in identity, or an issue when nobody is. Returns owned fields
/// so callers can keep mutating the desk.
pub fn signed_in_identity(desk: &Desk, report: &mut CommandReport) -> Option<(String, Role)> {
    match desk.authenticated_user() {
        Some(user) => Some((user.email.clone(), user.role)),
        None => {
            report.issue("not signed in; run `lingodesk login` first");
            None
        }
    }
}

pub fn require_role(
    desk: &Desk,
    report: &mut CommandReport,
    wanted: Role,
) -> Option<(String, Role)> {
    let (email, role) = signed_in_identity(desk, report)?;
    if role != wanted {
        report.issue(format!(
            "`{}` requires the {} role (signed in as {})",
            report.command,
            wanted.as_str(),
            role.as_str()
        ));
        return None;
    }
    Some((email, role))
}

/// The per-status tally the dashboards show above the request table.
pub fn status_tally<'a, I>(files: I) -> String
where
    I: IntoIterator<Item = &'a FileRequest>,
{
    let mut counts = [0usize; RequestStatus::ALL.len()];
    for file in files {
        for (slot, status) in counts.iter_mut().zip(RequestStatus::ALL) {
            if file.status == status {
                *slot += 1;
            }
        }
    }
    RequestStatus::ALL
        .iter()
        .zip(counts)
        .map(|(status, count)| format!("{status}: {count}"))
        .collect::<Vec<_>>()
        .join(" | ")
}
