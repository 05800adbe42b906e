use anyhow::Result;

use crate::commands::{CommandReport, open_desk, require_role, status_tally};
use crate::desk::model::Role;
use crate::desk::reconcile;

/// The admin dashboard: pull the latest store contents first, then render
/// every user's requests. The reload is what lets an admin see uploads made
/// from other sessions since this one started.
pub fn run() -> Result<CommandReport> {
    let mut report = CommandReport::new("requests");

    let mut desk = open_desk()?;
    if require_role(&desk, &mut report, Role::Admin).is_none() {
        return Ok(report);
    }

    reconcile::reload(&mut desk)?;

    let all: Vec<_> = desk
        .users
        .iter()
        .flat_map(|user| user.files.iter().map(move |file| (user, file)))
        .collect();
    report.detail(status_tally(all.iter().map(|(_, file)| *file)));
    for (owner, file) in all {
        report.detail(format!(
            "{} | {} | {} -> {} | {}h | {} | {}",
            owner.email,
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
