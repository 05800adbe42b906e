use anyhow::Result;

use crate::commands::{CommandReport, open_desk, require_role};
use crate::desk::model::Role;
use crate::desk::registry;

pub struct ReviseArgs {
    pub id: u64,
    pub from: Option<String>,
    pub to: Option<String>,
    pub file_name: Option<String>,
    pub file_url: Option<String>,
    pub tat_hours: Option<u32>,
}

/// Edit a request's metadata. The full record, carrying the same id, goes
/// back through the registry's insert-or-replace path; status is preserved.
pub fn run(args: ReviseArgs) -> Result<CommandReport> {
    let mut report = CommandReport::new("revise");

    let mut desk = open_desk()?;
    let Some((email, _)) = require_role(&desk, &mut report, Role::Client) else {
        return Ok(report);
    };

    let Some(existing) = desk
        .user(&email)
        .and_then(|user| user.files.iter().find(|file| file.id == args.id))
    else {
        report.issue(format!("no request with id {}", args.id));
        return Ok(report);
    };

    let mut revised = existing.clone();
    if let Some(from) = args.from {
        revised.source_language = from;
    }
    if let Some(to) = args.to {
        revised.target_language = to;
    }
    if let Some(file_name) = args.file_name {
        revised.file_name = file_name;
    }
    if let Some(file_url) = args.file_url {
        revised.file_url = Some(file_url);
    }
    if let Some(tat) = args.tat_hours {
        revised.turnaround_hours = tat;
    }

    registry::upsert(&mut desk, &email, revised)?;
    report.detail(format!("request {} revised", args.id));
    Ok(report)
}
