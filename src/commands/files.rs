use anyhow::Result;

use crate::commands::{CommandReport, open_desk, signed_in_identity, status_tally};
use crate::desk::ledger;

pub fn run() -> Result<CommandReport> {
    let mut report = CommandReport::new("files");

    let desk = open_desk()?;
    let Some((email, _)) = signed_in_identity(&desk, &mut report) else {
        return Ok(report);
    };

    let Some(user) = desk.user(&email) else {
        report.issue(format!("account {email} vanished from the store"));
        return Ok(report);
    };

    report.detail(status_tally(&user.files));
    for file in &user.files {
        let delivered = ledger::artifact_for_request(user, file.id)
            .map(|artifact| format!(" [translated: {}]", artifact.name))
            .unwrap_or_default();
        report.detail(format!(
            "{} | {} -> {} | {}h | {} | {}{delivered}",
            file.id,
            file.source_language,
            file.target_language,
            file.turnaround_hours,
            file.status,
            file.file_name,
        ));
    }
    Ok(report)
}
