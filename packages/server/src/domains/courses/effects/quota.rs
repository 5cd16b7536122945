//! Quota policy - tier-gated course creation.

use crate::domains::auth::Tier;

/// Whether an identity on the given tier may create another course, given
/// how many it already owns.
///
/// The caller performs the count read and the subsequent insert separately;
/// the pair is not atomic, so quota enforcement is best-effort under
/// concurrent creation requests from the same identity.
pub fn may_create(tier: Tier, existing: i64) -> bool {
    match tier.course_limit() {
        None => true,
        Some(limit) => existing < limit,
    }
}
