use crate::error::WarnCode;

fn sanitize_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_sep = false;
    for ch in value.chars() {
        if ch.is_ascii_whitespace() {
            if !out.is_empty() && !prev_sep {
                out.push('_');
                prev_sep = true;
            }
        } else if ch.is_ascii_graphic() {
            out.push(ch);
            prev_sep = false;
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "na".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Single-line structured warning on stderr. Used for recovered faults only:
/// not-found no-ops, corrupt store records, refused UI guards.
pub fn emit(code: WarnCode, op: &str, subject: &str, reason: &str) {
    eprintln!(
        "DESK_WARN code={} op={} subject={} reason={}",
        sanitize_value(code.as_str()),
        sanitize_value(op),
        sanitize_value(subject),
        sanitize_value(reason),
    );
}
