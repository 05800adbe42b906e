use anyhow::Result;

use crate::desk::model::{Artifact, Delivery, User};
use crate::desk::state::Desk;
use crate::desk::util::{fresh_id, now_rfc3339};
use crate::desk::warn;
use crate::error::{DeskError, WarnCode};

/// Append a translated artifact to the named user's ledger. The `request_id`
/// must name one of that user's requests, which keeps downloads unambiguous.
/// Returns the artifact id, or `None` (warn-logged) for an unknown user.
pub fn attach(
    desk: &mut Desk,
    email: &str,
    request_id: u64,
    name: &str,
    delivery: Delivery,
) -> Result<Option<u64>> {
    let Some(user) = desk.user_mut(email) else {
        warn::emit(WarnCode::W001NotFound, "deliver", email, "no such user");
        return Ok(None);
    };

    if !user.files.iter().any(|file| file.id == request_id) {
        return Err(DeskError::UnknownRequest {
            email: email.to_string(),
            id: request_id,
        }
        .into());
    }

    let id = fresh_id(user.artifacts.iter().map(|artifact| artifact.id))?;
    user.artifacts.push(Artifact {
        id,
        request_id,
        name: name.to_string(),
        delivery,
        uploaded_at: now_rfc3339(),
    });
    desk.persist_for(email)?;
    desk.audit("deliver", email, &format!("{id} for request {request_id}"))?;
    Ok(Some(id))
}

/// The newest artifact delivered against `request_id`.
pub fn artifact_for_request(user: &User, request_id: u64) -> Option<&Artifact> {
    user.artifacts
        .iter()
        .rev()
        .find(|artifact| artifact.request_id == request_id)
}

/// The most recently appended artifact, for callers that do not know a
/// request id. Prefer `artifact_for_request` where one is available.
pub fn latest_artifact(user: &User) -> Option<&Artifact> {
    user.artifacts.last()
}
