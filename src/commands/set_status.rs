use anyhow::Result;

use crate::commands::{CommandReport, domain_issue, open_desk, require_role};
use crate::desk::model::Role;
use crate::desk::registry;
use crate::desk::status::RequestStatus;

pub fn run(email: &str, id: u64, status: &str) -> Result<CommandReport> {
    let mut report = CommandReport::new("set-status");

    let status = match RequestStatus::parse(status) {
        Ok(status) => status,
        Err(err) => {
            report.issue(err.to_string());
            return Ok(report);
        }
    };

    let mut desk = open_desk()?;
    if require_role(&desk, &mut report, Role::Admin).is_none() {
        return Ok(report);
    }

    // Resolve the target here so a typo surfaces as a command issue instead
    // of a silent registry no-op.
    if desk
        .user(email)
        .is_none_or(|user| !user.files.iter().any(|file| file.id == id))
    {
        report.issue(format!("user {email} has no request with id {id}"));
        return Ok(report);
    }

    let outcome = if desk.config.strict_transitions {
        registry::advance_status(&mut desk, email, id, status)
    } else {
        registry::set_status(&mut desk, email, id, status)
    };
    match outcome {
        Ok(()) => report.detail(format!("request {id} of {email} set to {status}")),
        Err(err) => domain_issue(&mut report, err)?,
    }
    Ok(report)
}
