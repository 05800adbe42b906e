use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DeskPaths {
    pub desk_home: PathBuf,
    pub store_dir: PathBuf,
    pub users_file: PathBuf,
    pub session_file: PathBuf,
    pub logs_dir: PathBuf,
}

fn required_home_dir() -> Result<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        return Ok(home);
    }
    Err(anyhow::anyhow!("HOME directory could not be resolved"))
}

fn env_or_default_path(var: &str, fallback: PathBuf) -> PathBuf {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => fallback,
    }
}

pub fn resolve_paths() -> Result<DeskPaths> {
    let home = required_home_dir()?;
    let desk_home = env_or_default_path("LINGODESK_HOME", home.join(".lingodesk"));

    let store_dir = env_or_default_path("LINGODESK_STORE_DIR", desk_home.join("store"));
    let logs_dir = env_or_default_path("LINGODESK_LOGS_DIR", desk_home.join("logs"));
    let users_file = store_dir.join("users.json");
    let session_file = store_dir.join("session.json");

    Ok(DeskPaths {
        desk_home,
        store_dir,
        users_file,
        session_file,
        logs_dir,
    })
}
