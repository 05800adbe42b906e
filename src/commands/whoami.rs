use anyhow::Result;

use crate::commands::{CommandReport, open_desk};

pub fn run() -> Result<CommandReport> {
    let mut report = CommandReport::new("whoami");

    let desk = open_desk()?;
    match desk.authenticated_user() {
        Some(user) => {
            report.detail(format!(
                "{} <{}> ({})",
                user.name,
                user.email,
                user.role.as_str()
            ));
            report.detail(format!(
                "requests={} translated_files={}",
                user.files.len(),
                user.artifacts.len()
            ));
        }
        None => report.detail("not signed in"),
    }
    Ok(report)
}
