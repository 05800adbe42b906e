use anyhow::Result;

use crate::desk::state::Desk;
use crate::desk::store;

/// Discard the in-memory model and re-read both durable records. This is the
/// only bridge between independent sessions: pull-based and explicit. A view
/// that needs cross-session freshness (the admin dashboard) calls this before
/// rendering.
pub fn reload(desk: &mut Desk) -> Result<()> {
    desk.users = store::load_users(&desk.paths)?;
    desk.signed_in = store::load_session(&desk.paths)?.map(|user| user.email);
    Ok(())
}
