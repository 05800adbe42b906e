use anyhow::Result;

use crate::commands::{CommandReport, open_desk, signed_in_identity};
use crate::desk::ledger;
use crate::desk::warn;
use crate::error::WarnCode;

pub fn run(id: u64) -> Result<CommandReport> {
    let mut report = CommandReport::new("download");

    let desk = open_desk()?;
    let Some((email, _)) = signed_in_identity(&desk, &mut report) else {
        return Ok(report);
    };

    let Some(user) = desk.user(&email) else {
        report.issue(format!("account {email} vanished from the store"));
        return Ok(report);
    };
    let Some(file) = user.files.iter().find(|file| file.id == id) else {
        report.issue(format!("no request with id {id}"));
        return Ok(report);
    };

    if !file.status.allows_download() {
        warn::emit(
            WarnCode::W003GuardRefused,
            "download",
            &email,
            &format!("status is {}", file.status),
        );
        report.issue(format!(
            "request {id} is not ready for download (status is {})",
            file.status
        ));
        return Ok(report);
    }

    match ledger::artifact_for_request(user, id) {
        Some(artifact) => {
            report.detail(format!(
                "{} (uploaded {})",
                artifact.name, artifact.uploaded_at
            ));
            report.detail(artifact.delivery.describe());
        }
        None => report.issue(format!(
            "request {id} is marked Completed but no translated file was delivered yet"
        )),
    }
    Ok(report)
}
