use anyhow::Result;

use crate::commands::{CommandReport, open_desk, require_role};
use crate::desk::model::{RequestDraft, Role};
use crate::desk::registry;

pub struct SubmitArgs {
    pub from: String,
    pub to: String,
    pub file_name: String,
    pub file_url: Option<String>,
    pub tat_hours: Option<u32>,
}

pub fn run(args: SubmitArgs) -> Result<CommandReport> {
    let mut report = CommandReport::new("submit");

    let mut desk = open_desk()?;
    let Some((email, _)) = require_role(&desk, &mut report, Role::Client) else {
        return Ok(report);
    };

    let turnaround_hours = args
        .tat_hours
        .unwrap_or(desk.config.default_turnaround_hours);
    let draft = RequestDraft {
        source_language: args.from,
        target_language: args.to,
        turnaround_hours,
        file_name: args.file_name,
        file_url: args.file_url,
    };

    match registry::submit(&mut desk, &email, draft)? {
        Some(id) => report.detail(format!(
            "request {id} submitted (turnaround {turnaround_hours}h, status Uploaded)"
        )),
        None => report.issue(format!("account {email} vanished from the store")),
    }
    Ok(report)
}
