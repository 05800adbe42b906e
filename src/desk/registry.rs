use anyhow::Result;

use crate::desk::model::{FileRequest, RequestDraft};
use crate::desk::state::Desk;
use crate::desk::status::RequestStatus;
use crate::desk::util::fresh_id;
use crate::desk::warn;
use crate::error::{DeskError, WarnCode};

/// Append a new request with a fresh id and status `Uploaded`. Returns the
/// id, or `None` (warn-logged) when the user is unknown — the caller is
/// expected to have resolved a valid account first.
pub fn submit(desk: &mut Desk, email: &str, draft: RequestDraft) -> Result<Option<u64>> {
    let Some(user) = desk.user_mut(email) else {
        warn::emit(WarnCode::W001NotFound, "submit", email, "no such user");
        return Ok(None);
    };

    let id = fresh_id(user.files.iter().map(|file| file.id))?;
    user.files.push(draft.into_request(id));
    desk.persist_for(email)?;
    desk.audit("submit", email, &id.to_string())?;
    Ok(Some(id))
}

/// Insert-or-replace keyed by the request id. Serves client edits and admin
/// pushes that carry a full record.
pub fn upsert(desk: &mut Desk, email: &str, request: FileRequest) -> Result<()> {
    let Some(user) = desk.user_mut(email) else {
        warn::emit(WarnCode::W001NotFound, "upsert", email, "no such user");
        return Ok(());
    };

    let id = request.id;
    match user.files.iter_mut().find(|file| file.id == id) {
        Some(slot) => *slot = request,
        None => user.files.push(request),
    }
    desk.persist_for(email)?;
    desk.audit("upsert", email, &id.to_string())?;
    Ok(())
}

/// Delete a request by id. The `Uploaded`-only eligibility rule lives in the
/// command layer; the registry deletes whatever id it is given. Absent user
/// or id is a warn-logged no-op.
pub fn remove(desk: &mut Desk, email: &str, id: u64) -> Result<()> {
    let Some(user) = desk.user_mut(email) else {
        warn::emit(WarnCode::W001NotFound, "remove", email, "no such user");
        return Ok(());
    };

    let before = user.files.len();
    user.files.retain(|file| file.id != id);
    if user.files.len() == before {
        warn::emit(WarnCode::W001NotFound, "remove", email, "no such request");
        return Ok(());
    }
    desk.persist_for(email)?;
    desk.audit("remove", email, &id.to_string())?;
    Ok(())
}

/// Overwrite the status field in place. Unconstrained: any of the three
/// values may be assigned, including backwards. Absent user or id is a
/// warn-logged no-op.
pub fn set_status(desk: &mut Desk, email: &str, id: u64, status: RequestStatus) -> Result<()> {
    let Some(user) = desk.user_mut(email) else {
        warn::emit(WarnCode::W001NotFound, "set-status", email, "no such user");
        return Ok(());
    };

    let Some(file) = user.files.iter_mut().find(|file| file.id == id) else {
        warn::emit(WarnCode::W001NotFound, "set-status", email, "no such request");
        return Ok(());
    };

    file.status = status;
    desk.persist_for(email)?;
    desk.audit("set-status", email, &format!("{id} -> {status}"))?;
    Ok(())
}

/// Guarded variant of `set_status`: refuses regressions against the forward
/// order Uploaded -> In Progress -> Completed. Self-transitions pass, so
/// repeating a set stays idempotent.
pub fn advance_status(desk: &mut Desk, email: &str, id: u64, status: RequestStatus) -> Result<()> {
    if let Some(user) = desk.user(email)
        && let Some(file) = user.files.iter().find(|file| file.id == id)
        && !file.status.can_advance_to(status)
    {
        return Err(DeskError::InvalidTransition {
            from: file.status,
            to: status,
        }
        .into());
    }
    set_status(desk, email, id, status)
}
