use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    /// When enabled, the admin status command uses the guarded forward-only
    /// transition instead of the raw setter.
    pub strict_transitions: bool,
    /// Turnaround applied when a submit omits `--tat`.
    pub default_turnaround_hours: u32,
    pub audit_enabled: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            strict_transitions: false,
            default_turnaround_hours: 24,
            audit_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct PartialDeskConfig {
    strict_transitions: Option<bool>,
    default_turnaround_hours: Option<u32>,
    audit_enabled: Option<bool>,
}

fn env_or_bool(var: &str, fallback: bool) -> bool {
    match env::var(var) {
        Ok(v) => {
            let trimmed = v.trim();
            match trimmed {
                "1" | "true" | "TRUE" | "yes" | "on" => true,
                "0" | "false" | "FALSE" | "no" | "off" => false,
                _ => fallback,
            }
        }
        Err(_) => fallback,
    }
}

fn env_or_u32(var: &str, fallback: u32) -> u32 {
    match env::var(var) {
        Ok(v) => v.trim().parse::<u32>().ok().unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn validate(cfg: &DeskConfig) -> Result<()> {
    if cfg.default_turnaround_hours == 0 {
        return Err(anyhow!(
            "invalid default turnaround: must be >= 1 hour"
        ));
    }
    Ok(())
}

fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(custom) = env::var("LINGODESK_CONFIG_PATH") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    let home = dirs::home_dir()?;
    Some(home.join(".lingodesk").join("lingodesk.toml"))
}

fn merge_file_config(base: &mut DeskConfig) -> Result<()> {
    let Some(path) = resolve_config_path() else {
        return Ok(());
    };
    if !path.exists() {
        return Ok(());
    }

    let raw = fs::read_to_string(&path)?;
    let parsed: PartialDeskConfig = toml::from_str(&raw)
        .map_err(|err| anyhow!("failed to parse desk config {}: {err}", path.display()))?;
    if let Some(strict) = parsed.strict_transitions {
        base.strict_transitions = strict;
    }
    if let Some(hours) = parsed.default_turnaround_hours {
        base.default_turnaround_hours = hours;
    }
    if let Some(audit) = parsed.audit_enabled {
        base.audit_enabled = audit;
    }
    Ok(())
}

pub fn load_config() -> Result<DeskConfig> {
    let mut cfg = DeskConfig::default();
    merge_file_config(&mut cfg)?;

    cfg.strict_transitions = env_or_bool("LINGODESK_STRICT_TRANSITIONS", cfg.strict_transitions);
    cfg.default_turnaround_hours = env_or_u32(
        "LINGODESK_DEFAULT_TAT_HOURS",
        cfg.default_turnaround_hours,
    );
    cfg.audit_enabled = env_or_bool("LINGODESK_AUDIT_ENABLED", cfg.audit_enabled);

    validate(&cfg)?;
    Ok(cfg)
}
