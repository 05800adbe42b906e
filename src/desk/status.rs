use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a file request.
///
/// `Uploaded` is the initial state; the normal flow advances through
/// `InProgress` to `Completed`. The registry's raw setter accepts any value;
/// `can_advance_to` encodes the forward-only order for the guarded path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Uploaded,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uploaded => "Uploaded",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub const ALL: [RequestStatus; 3] = [Self::Uploaded, Self::InProgress, Self::Completed];

    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().replace(['-', '_'], " ").to_ascii_lowercase();
        match normalized.as_str() {
            "uploaded" => Ok(Self::Uploaded),
            "in progress" | "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(anyhow!(
                "unknown status `{raw}`; expected one of Uploaded, In Progress, Completed"
            )),
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Uploaded => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
        }
    }

    /// Forward-only order check. Self-transitions are allowed, which keeps
    /// repeated sets idempotent under the guard as well.
    pub fn can_advance_to(self, next: RequestStatus) -> bool {
        next.rank() >= self.rank()
    }

    /// The original file may be withdrawn only before work starts.
    pub fn allows_removal(self) -> bool {
        self == Self::Uploaded
    }

    /// Download, delivery of a translated artifact, and the ready
    /// notification are all gated on completion.
    pub fn allows_download(self) -> bool {
        self == Self::Completed
    }

    pub fn allows_delivery(self) -> bool {
        self == Self::Completed
    }

    pub fn allows_notify(self) -> bool {
        self == Self::Completed
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::RequestStatus;

    #[test]
    fn parse_accepts_display_forms_and_separators() {
        assert_eq!(
            RequestStatus::parse("Uploaded").unwrap(),
            RequestStatus::Uploaded
        );
        assert_eq!(
            RequestStatus::parse("In Progress").unwrap(),
            RequestStatus::InProgress
        );
        assert_eq!(
            RequestStatus::parse("in-progress").unwrap(),
            RequestStatus::InProgress
        );
        assert_eq!(
            RequestStatus::parse("completed").unwrap(),
            RequestStatus::Completed
        );
        assert!(RequestStatus::parse("done").is_err());
    }

    #[test]
    fn advance_order_is_forward_only() {
        use RequestStatus::*;
        assert!(Uploaded.can_advance_to(InProgress));
        assert!(InProgress.can_advance_to(Completed));
        assert!(Completed.can_advance_to(Completed));
        assert!(!Completed.can_advance_to(Uploaded));
        assert!(!InProgress.can_advance_to(Uploaded));
    }

    #[test]
    fn capability_gates_follow_status() {
        use RequestStatus::*;
        assert!(Uploaded.allows_removal());
        assert!(!InProgress.allows_removal());
        assert!(Completed.allows_download());
        assert!(!Uploaded.allows_download());
        assert!(Completed.allows_delivery());
        assert!(Completed.allows_notify());
        assert!(!InProgress.allows_delivery());
    }

    #[test]
    fn serde_uses_display_strings() {
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: RequestStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(back, RequestStatus::InProgress);
    }
}
