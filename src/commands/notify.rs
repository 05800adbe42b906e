use anyhow::Result;

use crate::commands::{CommandReport, open_desk, require_role};
use crate::desk::ledger;
use crate::desk::model::{Delivery, Role};
use crate::desk::warn;
use crate::error::WarnCode;

/// Render the ready-notification for a completed request. Mail transport is
/// outside this tool; the text is printed for the operator to send.
pub fn run(email: &str, id: u64) -> Result<CommandReport> {
    let mut report = CommandReport::new("notify");

    let desk = open_desk()?;
    if require_role(&desk, &mut report, Role::Admin).is_none() {
        return Ok(report);
    }

    let Some(user) = desk.user(email) else {
        report.issue(format!("no user with email {email}"));
        return Ok(report);
    };
    let Some(file) = user.files.iter().find(|file| file.id == id) else {
        report.issue(format!("user {email} has no request with id {id}"));
        return Ok(report);
    };

    if !file.status.allows_notify() {
        warn::emit(
            WarnCode::W003GuardRefused,
            "notify",
            email,
            &format!("status is {}", file.status),
        );
        report.issue(format!(
            "request {id} is not Completed yet (status is {})",
            file.status
        ));
        return Ok(report);
    }

    report.detail(format!("to: {email}"));
    report.detail("subject: Your Translated File is Ready!");
    report.detail(format!(
        "body: Hello, your translated file \"{}\" is ready.",
        file.file_name
    ));
    if let Some(artifact) = ledger::artifact_for_request(user, id)
        && let Delivery::Url(url) = &artifact.delivery
    {
        report.detail(format!("body: You can download it here: {url}"));
    }
    report.detail("body: Best Regards, Admin Team");
    Ok(report)
}
