use anyhow::Result;

use crate::commands::{CommandReport, domain_issue, open_desk};
use crate::desk::session;

pub fn run(email: &str, password: &str) -> Result<CommandReport> {
    let mut report = CommandReport::new("login");

    let mut desk = open_desk()?;
    match session::authenticate(&mut desk, email, password) {
        Ok(user) => report.detail(format!(
            "signed in as {} ({})",
            user.email,
            user.role.as_str()
        )),
        Err(err) => domain_issue(&mut report, err)?,
    }
    Ok(report)
}
