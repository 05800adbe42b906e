use anyhow::Result;

use crate::desk::model::{Role, User};
use crate::desk::state::Desk;
use crate::desk::store;
use crate::error::DeskError;

/// Create an account. Fails with `DuplicateIdentity` without touching any
/// state when the email is already taken.
pub fn register(
    desk: &mut Desk,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<()> {
    if desk.user(email).is_some() {
        return Err(DeskError::DuplicateIdentity(email.to_string()).into());
    }

    desk.users.push(User::new(name, email, password, role));
    store::save_users(&desk.paths, &desk.users)?;
    desk.audit("register", email, role.as_str())?;
    Ok(())
}

/// Exact (email, password) match against the collection. On success the
/// identity is recorded and the derived snapshot persisted; on mismatch
/// nothing changes.
pub fn authenticate<'a>(desk: &'a mut Desk, email: &str, password: &str) -> Result<&'a User> {
    let matched = desk
        .users
        .iter()
        .position(|user| user.email == email && user.password == password);
    let Some(index) = matched else {
        return Err(DeskError::InvalidCredentials.into());
    };

    desk.signed_in = Some(email.to_string());
    store::save_session(&desk.paths, &desk.users[index])?;
    desk.audit("login", email, "")?;
    Ok(&desk.users[index])
}

/// Clear the signed-in identity and its durable record. Idempotent.
pub fn logout(desk: &mut Desk) -> Result<()> {
    if desk.signed_in.is_none() && !desk.paths.session_file.exists() {
        return Ok(());
    }
    let email = desk.signed_in.take().unwrap_or_default();
    store::clear_session(&desk.paths)?;
    desk.audit("logout", &email, "")?;
    Ok(())
}
