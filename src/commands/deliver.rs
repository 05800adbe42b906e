use anyhow::Result;

use crate::commands::{CommandReport, domain_issue, open_desk, require_role};
use crate::desk::ledger;
use crate::desk::model::{Delivery, Role};
use crate::desk::warn;
use crate::error::WarnCode;

pub struct DeliverArgs {
    pub email: String,
    pub request_id: u64,
    pub name: String,
    pub url: Option<String>,
    pub content: Option<String>,
}

pub fn run(args: DeliverArgs) -> Result<CommandReport> {
    let mut report = CommandReport::new("deliver");

    let delivery = match (args.url, args.content) {
        (Some(url), None) => Delivery::Url(url),
        (None, Some(content)) => Delivery::Content(content),
        _ => {
            report.issue("provide exactly one of --url or --content");
            return Ok(report);
        }
    };

    let mut desk = open_desk()?;
    if require_role(&desk, &mut report, Role::Admin).is_none() {
        return Ok(report);
    }

    let Some(file) = desk
        .user(&args.email)
        .and_then(|user| user.files.iter().find(|file| file.id == args.request_id))
    else {
        report.issue(format!(
            "user {} has no request with id {}",
            args.email, args.request_id
        ));
        return Ok(report);
    };

    if !file.status.allows_delivery() {
        warn::emit(
            WarnCode::W003GuardRefused,
            "deliver",
            &args.email,
            &format!("status is {}", file.status),
        );
        report.issue(format!(
            "request {} must be Completed before delivery (status is {})",
            args.request_id, file.status
        ));
        return Ok(report);
    }

    match ledger::attach(&mut desk, &args.email, args.request_id, &args.name, delivery) {
        Ok(Some(id)) => report.detail(format!(
            "artifact {id} delivered for request {} of {}",
            args.request_id, args.email
        )),
        Ok(None) => report.issue(format!("account {} vanished from the store", args.email)),
        Err(err) => domain_issue(&mut report, err)?,
    }
    Ok(report)
}
