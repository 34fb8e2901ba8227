// Normalized engine input.
//
// The scoring engine never sees platform-specific metric shapes. A
// ProfileInput is the flattened record every check reads from, produced by
// normalizing a generated profile (or, in principle, any other data source).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The normalized profile record consumed by the scoring engine.
///
/// All fields are always present. Platforms without a given count normalize
/// it to zero rather than leaving a hole for checks to trip over, and
/// `account_age_days` is pre-derived so every check shares the same clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub username: String,
    pub has_profile_pic: bool,
    /// Bio text, possibly empty.
    pub description: String,
    /// Possibly empty.
    pub location: String,
    pub has_external_url: bool,
    pub is_private: bool,
    pub is_verified: bool,
    pub display_name: String,
    pub followers: u64,
    pub following: u64,
    pub posts: u64,
    pub created_at: DateTime<Utc>,
    /// Derived: `now - created_at` in days, floored at zero.
    pub account_age_days: f64,
}

impl ProfileInput {
    /// Days elapsed between `created_at` and `now`, floored at zero.
    pub fn age_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        let secs = (now - created_at).num_seconds() as f64;
        (secs / 86_400.0).max(0.0)
    }
}
