use snapshare_schema::Event;
use subtle::ConstantTimeEq;

/// True when the event has a non-empty password.
pub fn is_protected(event: &Event) -> bool {
    event.password.as_deref().is_some_and(|p| !p.is_empty())
}

/// Compares `candidate` against the stored plaintext password.
///
/// Unprotected events accept any candidate. There is no lockout or attempt
/// counting.
pub fn check_password(event: &Event, candidate: &str) -> bool {
    match event.password.as_deref() {
        Some(stored) if !stored.is_empty() => {
            stored.as_bytes().ct_eq(candidate.as_bytes()).into()
        }
        _ => true,
    }
}
