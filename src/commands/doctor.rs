use anyhow::Result;
use std::env;
use std::fs;

use crate::commands::CommandReport;
use crate::desk::config::load_config;
use crate::desk::model::User;
use crate::desk::paths::resolve_paths;

include!(concat!(env!("OUT_DIR"), "/desk_env_allowlist.rs"));

/// Health check: store records parse, config validates, and the recognized
/// environment overrides currently in effect are listed.
pub fn run() -> Result<CommandReport> {
    let mut report = CommandReport::new("doctor");
    report.detail(format!("build={}", env!("BUILD_UUID")));

    let paths = resolve_paths()?;
    report.detail(format!("desk_home={}", paths.desk_home.display()));
    report.detail(format!("store_dir={}", paths.store_dir.display()));

    match load_config() {
        Ok(config) => report.detail(format!(
            "config: strict_transitions={} default_turnaround_hours={} audit_enabled={}",
            config.strict_transitions, config.default_turnaround_hours, config.audit_enabled
        )),
        Err(err) => report.issue(format!("config invalid: {err:#}")),
    }

    if paths.users_file.exists() {
        let raw = fs::read_to_string(&paths.users_file)?;
        match serde_json::from_str::<Vec<User>>(&raw) {
            Ok(users) => report.detail(format!("users.json: {} account(s)", users.len())),
            Err(err) => report.issue(format!("users.json does not parse: {err}")),
        }
    } else {
        report.detail("users.json: absent (fresh store)");
    }

    if paths.session_file.exists() {
        let raw = fs::read_to_string(&paths.session_file)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => report.detail(format!("session.json: signed in as {}", user.email)),
            Err(err) => report.issue(format!("session.json does not parse: {err}")),
        }
    } else {
        report.detail("session.json: absent (logged out)");
    }

    for key in GENERATED_DESK_ENV_ALLOWLIST {
        if let Ok(value) = env::var(key) {
            report.detail(format!("env override {key}={value}"));
        }
    }

    Ok(report)
}
