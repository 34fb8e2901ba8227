// Synthetic profile generator.
//
// Stands in for a real platform data source. Given a platform and username
// it draws plausible metrics from the platform's parameter ranges — no
// network access, only the injected random source. Callers that need
// reproducible output pass a seeded rng and a pinned clock.
//
// The profile splits into two populations on a single coin flip: a
// high-risk profile (30% of draws) posts heavily and strips its identity
// signals (no bio, no location, private, placeholder name); a normal
// profile gets platform filler text and a name derived from the username.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::platform::Platform;
use crate::profile::{
    ActivityDetail, EngagementMetrics, GeneratedProfile, PlatformMetrics, ProfileAttributes,
};
use crate::scoring::input::ProfileInput;

/// Probability that a synthesized profile lands in the high-risk population.
const HIGH_RISK_PROBABILITY: f64 = 0.3;

/// Probability that a profile has a picture, independent of the risk flag.
const PROFILE_PIC_PROBABILITY: f64 = 0.8;

/// Probability that a profile is verified, independent of the risk flag.
const VERIFIED_PROBABILITY: f64 = 0.1;

/// Display name used for high-risk profiles.
const PLACEHOLDER_NAME: &str = "User123456";

/// Synthesize a profile using the current wall clock.
pub fn generate_profile(
    platform: Platform,
    username: &str,
    rng: &mut impl Rng,
) -> Result<GeneratedProfile> {
    generate_profile_at(platform, username, Utc::now(), rng)
}

/// Synthesize a profile against an explicit `now`.
///
/// The signup date is drawn from the platform's signup-year window, so the
/// account age (and with it the total post count) depends on `now`. Tests
/// pin `now` to get fully deterministic output from a seeded rng.
///
/// Fails fast on an empty username — that is a caller error, not a
/// condition to paper over with a default.
pub fn generate_profile_at(
    platform: Platform,
    username: &str,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<GeneratedProfile> {
    if username.trim().is_empty() {
        anyhow::bail!("Username must not be empty");
    }

    let params = platform.params();

    // Signup date: uniform month/day inside the platform's signup year.
    // Day is capped at 28 so every month is valid.
    let month = rng.random_range(1..=12u32);
    let day = rng.random_range(1..=28u32);
    let created_at = NaiveDate::from_ymd_opt(params.signup_year, month, day)
        .ok_or_else(|| anyhow::anyhow!("invalid synthetic signup date {month}/{day}"))?
        .and_time(NaiveTime::MIN)
        .and_utc();

    let account_age_days = ProfileInput::age_days(created_at, now);

    let is_high_risk = rng.random_bool(HIGH_RISK_PROBABILITY);

    let posts_per_day = if is_high_risk {
        rng.random_range(params.high_risk_posts_per_day.clone())
    } else {
        rng.random_range(params.normal_posts_per_day.clone())
    };
    let total_posts = (posts_per_day * account_age_days).floor() as u64;

    let metrics = match platform {
        Platform::Twitter => {
            let followers = rng.random_range(params.followers.clone());
            let following = draw_count(rng, params.following.clone());
            PlatformMetrics::Twitter {
                tweets: total_posts,
                followers,
                following,
            }
        }
        Platform::Instagram => {
            let followers = rng.random_range(params.followers.clone());
            let following = draw_count(rng, params.following.clone());
            PlatformMetrics::Instagram {
                posts: total_posts,
                stories: (posts_per_day * 2.0 * account_age_days).floor() as u64,
                reels: (posts_per_day * 0.5 * account_age_days).floor() as u64,
                followers,
                following,
            }
        }
        Platform::Facebook => {
            let friends = draw_count(rng, params.friends.clone());
            let followers = rng.random_range(params.followers.clone());
            let groups = draw_count(rng, params.groups.clone());
            PlatformMetrics::Facebook {
                posts: total_posts,
                friends,
                followers,
                groups,
            }
        }
    };

    let engagement = EngagementMetrics {
        posts_per_day,
        engagement_rate: rng.random_range(params.engagement_rate.clone()),
        activity_consistency: rng.random_range(params.activity_consistency.clone()),
        network_strength: rng.random_range(params.network_strength.clone()),
    };

    // Identity signals collapse together on the risk flag; picture and
    // verification are independent draws.
    let attributes = ProfileAttributes {
        has_profile_pic: rng.random_bool(PROFILE_PIC_PROBABILITY),
        description: if is_high_risk {
            String::new()
        } else {
            params.filler_bio.to_string()
        },
        location: if is_high_risk {
            String::new()
        } else {
            params.filler_location.to_string()
        },
        has_external_url: !is_high_risk,
        is_private: is_high_risk,
        is_verified: rng.random_bool(VERIFIED_PROBABILITY),
        display_name: if is_high_risk {
            PLACEHOLDER_NAME.to_string()
        } else {
            capitalize(username)
        },
    };

    let activity = match platform {
        Platform::Twitter => ActivityDetail::Twitter {
            peak_hours: if is_high_risk { "Automated" } else { "Natural" }.to_string(),
        },
        Platform::Instagram => ActivityDetail::Instagram {
            story_frequency: if is_high_risk { "Irregular" } else { "Regular" }.to_string(),
        },
        Platform::Facebook => ActivityDetail::Facebook {
            group_activity: if is_high_risk { "Inactive" } else { "Active" }.to_string(),
        },
    };

    debug!(
        platform = platform.as_str(),
        username,
        high_risk = is_high_risk,
        posts = total_posts,
        age_days = format!("{account_age_days:.0}"),
        "Synthesized profile"
    );

    Ok(GeneratedProfile {
        platform,
        username: username.to_string(),
        created_at,
        metrics,
        engagement,
        attributes,
        activity,
    })
}

/// Draw from an optional count range; platforms without the concept get 0.
fn draw_count(rng: &mut impl Rng, range: Option<std::ops::Range<u64>>) -> u64 {
    range.map(|r| rng.random_range(r)).unwrap_or(0)
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("janedoe"), "Janedoe");
        assert_eq!(capitalize("X"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_leaves_rest_untouched() {
        assert_eq!(capitalize("jANE"), "JANE");
        assert_eq!(capitalize("user_99"), "User_99");
    }
}
