use anyhow::Result;

use crate::commands::{CommandReport, open_desk};
use crate::desk::session;

pub fn run() -> Result<CommandReport> {
    let mut report = CommandReport::new("logout");

    let mut desk = open_desk()?;
    session::logout(&mut desk)?;
    report.detail("signed out");
    Ok(report)
}
