use anyhow::Result;

use crate::commands::{CommandReport, open_desk, signed_in_identity};
use crate::desk::registry;
use crate::desk::warn;
use crate::error::WarnCode;

pub fn run(id: u64) -> Result<CommandReport> {
    let mut report = CommandReport::new("remove");

    let mut desk = open_desk()?;
    let Some((email, _)) = signed_in_identity(&desk, &mut report) else {
        return Ok(report);
    };

    let Some(file) = desk
        .user(&email)
        .and_then(|user| user.files.iter().find(|file| file.id == id))
    else {
        report.issue(format!("no request with id {id}"));
        return Ok(report);
    };

    // Withdrawal is only offered while the request sits in Uploaded; the
    // registry itself would delete any status.
    if !file.status.allows_removal() {
        warn::emit(
            WarnCode::W003GuardRefused,
            "remove",
            &email,
            &format!("status is {}", file.status),
        );
        report.issue(format!(
            "request {id} can no longer be removed (status is {})",
            file.status
        ));
        return Ok(report);
    }

    registry::remove(&mut desk, &email, id)?;
    report.detail(format!("request {id} removed"));
    Ok(report)
}
