use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::desk::model::User;
use crate::desk::paths::DeskPaths;
use crate::desk::warn;
use crate::error::WarnCode;

/// Read one durable record. A missing file yields the default; a file that
/// fails to parse is reported on the warn channel and replaced by the
/// default, never propagated. I/O failures other than not-found are real
/// errors.
fn load_record<T>(path: &Path, record: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }

    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    match serde_json::from_str(&raw) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            warn::emit(
                WarnCode::W002StateCorrupt,
                "load",
                record,
                &format!("{}: {err}", path.display()),
            );
            Ok(T::default())
        }
    }
}

fn save_record<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let data = serde_json::to_string_pretty(value)?;
    fs::write(path, format!("{data}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn load_users(paths: &DeskPaths) -> Result<Vec<User>> {
    load_record(&paths.users_file, "users")
}

pub fn save_users(paths: &DeskPaths, users: &[User]) -> Result<()> {
    save_record(&paths.users_file, &users)
}

pub fn load_session(paths: &DeskPaths) -> Result<Option<User>> {
    load_record(&paths.session_file, "session")
}

pub fn save_session(paths: &DeskPaths, user: &User) -> Result<()> {
    save_record(&paths.session_file, user)
}

/// Remove the durable session record. Idempotent.
pub fn clear_session(paths: &DeskPaths) -> Result<()> {
    match fs::remove_file(&paths.session_file) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| {
            format!("failed to remove {}", paths.session_file.display())
        }),
    }
}
