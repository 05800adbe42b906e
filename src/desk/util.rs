use anyhow::Result;
use std::collections::BTreeSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// Return the current Unix epoch in seconds.
///
/// This is the single, canonical implementation — **do not** duplicate
/// this helper in other modules.
pub fn now_epoch_secs() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

pub fn now_epoch_millis() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64)
}

/// Current wall-clock time as an RFC 3339 UTC string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Generate a millisecond-timestamp id that does not collide with any id in
/// `existing`. Two generations within the same millisecond bump forward until
/// free, so ids stay unique and monotonically increasing within one list.
pub fn fresh_id<I>(existing: I) -> Result<u64>
where
    I: IntoIterator<Item = u64>,
{
    let taken: BTreeSet<u64> = existing.into_iter().collect();
    let mut candidate = now_epoch_millis()?;
    while taken.contains(&candidate) {
        candidate += 1;
    }
    Ok(candidate)
}
