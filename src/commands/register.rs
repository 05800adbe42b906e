use anyhow::Result;

use crate::commands::{CommandReport, domain_issue, open_desk};
use crate::desk::model::Role;
use crate::desk::session;

pub fn run(name: &str, email: &str, password: &str, role: &str) -> Result<CommandReport> {
    let mut report = CommandReport::new("register");

    let role = match Role::parse(role) {
        Ok(role) => role,
        Err(err) => {
            report.issue(err.to_string());
            return Ok(report);
        }
    };

    let mut desk = open_desk()?;
    match session::register(&mut desk, name, email, password, role) {
        Ok(()) => report.detail(format!("registered {email} as {}", role.as_str())),
        Err(err) => domain_issue(&mut report, err)?,
    }
    Ok(report)
}
