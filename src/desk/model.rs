use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::desk::status::RequestStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "admin" => Ok(Self::Admin),
            _ => Err(anyhow!("unknown role `{raw}`; expected `client` or `admin`")),
        }
    }
}

/// A registered account. Identity key is the email, case-sensitive and never
/// reused. Password and role are immutable after registration; accounts are
/// never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub files: Vec<FileRequest>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl User {
    pub fn new(name: &str, email: &str, password: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            files: Vec::new(),
            artifacts: Vec::new(),
        }
    }
}

/// A translation request submitted by a client. The id is a
/// millisecond-timestamp integer, unique within the owning user's file list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileRequest {
    pub id: u64,
    pub source_language: String,
    pub target_language: String,
    pub turnaround_hours: u32,
    pub status: RequestStatus,
    pub file_name: String,
    #[serde(default)]
    pub file_url: Option<String>,
}

/// The client-supplied fields of a request; the registry fills in the id and
/// the initial status.
#[derive(Debug, Clone)]
pub struct RequestDraft {
    pub source_language: String,
    pub target_language: String,
    pub turnaround_hours: u32,
    pub file_name: String,
    pub file_url: Option<String>,
}

impl RequestDraft {
    pub fn into_request(self, id: u64) -> FileRequest {
        FileRequest {
            id,
            source_language: self.source_language,
            target_language: self.target_language,
            turnaround_hours: self.turnaround_hours,
            status: RequestStatus::Uploaded,
            file_name: self.file_name,
            file_url: self.file_url,
        }
    }
}

/// How a delivered artifact is handed over: an external URL from the upload
/// service, or the file body inlined as a data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    Url(String),
    Content(String),
}

impl Delivery {
    pub fn describe(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Content(body) => format!("<inline content, {} bytes>", body.len()),
        }
    }
}

/// A translated file delivered by an administrator. Append-only: never
/// updated or deleted once attached. `request_id` names the request this
/// delivery fulfills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Artifact {
    pub id: u64,
    pub request_id: u64,
    pub name: String,
    pub delivery: Delivery,
    pub uploaded_at: String,
}

#[cfg(test)]
mod tests {
    use super::{Role, User};

    #[test]
    fn new_user_starts_with_empty_lists() {
        let user = User::new("Ada", "ada@example.com", "pw", Role::Client);
        assert!(user.files.is_empty());
        assert!(user.artifacts.is_empty());
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("Admin").unwrap(), Role::Admin);
        assert_eq!(Role::parse("client").unwrap(), Role::Client);
        assert!(Role::parse("owner").is_err());
    }

    #[test]
    fn user_rejects_unknown_fields() {
        let raw = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "password": "pw",
            "role": "client",
            "files": [],
            "artifacts": [],
            "surprise": true
        }"#;
        assert!(serde_json::from_str::<User>(raw).is_err());
    }

    #[test]
    fn user_tolerates_missing_lists() {
        let raw = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "password": "pw",
            "role": "admin"
        }"#;
        let user: User = serde_json::from_str(raw).expect("parse");
        assert!(user.files.is_empty());
        assert!(user.artifacts.is_empty());
    }
}
