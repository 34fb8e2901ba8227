// Unit tests for the synthetic profile generator.
//
// Everything runs against a seeded StdRng and a pinned clock, so these
// tests assert hard invariants (ranges, coupling, derivation rules) rather
// than golden values: they hold for every seed.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use veneer::platform::Platform;
use veneer::profile::generator::generate_profile_at;
use veneer::profile::{ActivityDetail, GeneratedProfile, PlatformMetrics};
use veneer::scoring::input::ProfileInput;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap()
}

fn generate(platform: Platform, seed: u64) -> GeneratedProfile {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_profile_at(platform, "janedoe", fixed_now(), &mut rng)
        .expect("generation succeeds for a non-empty username")
}

// ============================================================
// Determinism and preconditions
// ============================================================

#[test]
fn same_seed_same_profile() {
    for platform in Platform::all() {
        assert_eq!(generate(platform, 42), generate(platform, 42));
    }
}

#[test]
fn empty_username_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate_profile_at(Platform::Twitter, "", fixed_now(), &mut rng).unwrap_err();
    assert!(err.to_string().contains("Username"));

    let mut rng = StdRng::seed_from_u64(0);
    assert!(generate_profile_at(Platform::Twitter, "   ", fixed_now(), &mut rng).is_err());
}

// ============================================================
// Signup window
// ============================================================

#[test]
fn signup_date_falls_in_platform_year_window() {
    let expected_years = [
        (Platform::Twitter, 2021),
        (Platform::Instagram, 2020),
        (Platform::Facebook, 2019),
    ];
    for (platform, year) in expected_years {
        for seed in 0..50 {
            let profile = generate(platform, seed);
            assert_eq!(profile.created_at.year(), year);
            assert!((1..=12).contains(&profile.created_at.month()));
            assert!((1..=28).contains(&profile.created_at.day()));
        }
    }
}

// ============================================================
// Posting rates and derived counts
// ============================================================

#[test]
fn post_count_is_rate_times_age_floored() {
    for platform in Platform::all() {
        for seed in 0..50 {
            let profile = generate(platform, seed);
            let age = ProfileInput::age_days(profile.created_at, fixed_now());
            let expected = (profile.engagement.posts_per_day * age).floor() as u64;
            let posts = match profile.metrics {
                PlatformMetrics::Twitter { tweets, .. } => tweets,
                PlatformMetrics::Instagram { posts, .. } => posts,
                PlatformMetrics::Facebook { posts, .. } => posts,
            };
            assert_eq!(posts, expected);
        }
    }
}

#[test]
fn instagram_stories_and_reels_derive_from_rate() {
    for seed in 0..50 {
        let profile = generate(Platform::Instagram, seed);
        let age = ProfileInput::age_days(profile.created_at, fixed_now());
        let ppd = profile.engagement.posts_per_day;
        match profile.metrics {
            PlatformMetrics::Instagram { stories, reels, .. } => {
                assert_eq!(stories, (ppd * 2.0 * age).floor() as u64);
                assert_eq!(reels, (ppd * 0.5 * age).floor() as u64);
            }
            ref other => panic!("expected Instagram metrics, got {other:?}"),
        }
    }
}

#[test]
fn posting_rate_tracks_the_risk_population() {
    // The private/high-risk population posts from the upper band
    for seed in 0..200 {
        let profile = generate(Platform::Twitter, seed);
        let ppd = profile.engagement.posts_per_day;
        if profile.attributes.is_private {
            assert!((4.0..14.0).contains(&ppd), "high-risk rate out of band: {ppd}");
        } else {
            assert!((1.0..4.0).contains(&ppd), "normal rate out of band: {ppd}");
        }
    }
}

// ============================================================
// Audience ranges
// ============================================================

#[test]
fn twitter_audience_counts_in_range() {
    for seed in 0..100 {
        let profile = generate(Platform::Twitter, seed);
        match profile.metrics {
            PlatformMetrics::Twitter {
                followers,
                following,
                ..
            } => {
                assert!((100..600).contains(&followers));
                assert!((50..250).contains(&following));
            }
            ref other => panic!("expected Twitter metrics, got {other:?}"),
        }
    }
}

#[test]
fn facebook_audience_counts_in_range() {
    for seed in 0..100 {
        let profile = generate(Platform::Facebook, seed);
        match profile.metrics {
            PlatformMetrics::Facebook {
                friends,
                followers,
                groups,
                ..
            } => {
                assert!((50..350).contains(&friends));
                assert!((20..120).contains(&followers));
                assert!((2..10).contains(&groups));
            }
            ref other => panic!("expected Facebook metrics, got {other:?}"),
        }
    }
}

// ============================================================
// Attribute coupling
// ============================================================

#[test]
fn identity_signals_collapse_together_on_the_risk_flag() {
    for platform in Platform::all() {
        for seed in 0..200 {
            let profile = generate(platform, seed);
            let attrs = &profile.attributes;
            if attrs.is_private {
                assert!(attrs.description.is_empty());
                assert!(attrs.location.is_empty());
                assert!(!attrs.has_external_url);
                assert_eq!(attrs.display_name, "User123456");
            } else {
                assert!(!attrs.description.is_empty());
                assert!(!attrs.location.is_empty());
                assert!(attrs.has_external_url);
                assert_eq!(attrs.display_name, "Janedoe");
            }
        }
    }
}

#[test]
fn activity_detail_matches_platform_and_risk_flag() {
    for seed in 0..100 {
        let profile = generate(Platform::Twitter, seed);
        match &profile.activity {
            ActivityDetail::Twitter { peak_hours } => {
                let expected = if profile.attributes.is_private {
                    "Automated"
                } else {
                    "Natural"
                };
                assert_eq!(peak_hours, expected);
            }
            other => panic!("expected Twitter activity detail, got {other:?}"),
        }
    }
}

// ============================================================
// Normalization into engine input
// ============================================================

#[test]
fn normalization_flattens_platform_metrics() {
    for seed in 0..50 {
        let profile = generate(Platform::Twitter, seed);
        let input = profile.to_scoring_input(fixed_now());
        match profile.metrics {
            PlatformMetrics::Twitter {
                tweets,
                followers,
                following,
            } => {
                assert_eq!(input.posts, tweets);
                assert_eq!(input.followers, followers);
                assert_eq!(input.following, following);
            }
            ref other => panic!("expected Twitter metrics, got {other:?}"),
        }
    }
}

#[test]
fn facebook_following_normalizes_to_zero() {
    for seed in 0..50 {
        let profile = generate(Platform::Facebook, seed);
        let input = profile.to_scoring_input(fixed_now());
        assert_eq!(input.following, 0);
    }
}

#[test]
fn normalized_input_carries_profile_attributes() {
    let profile = generate(Platform::Instagram, 7);
    let input = profile.to_scoring_input(fixed_now());

    assert_eq!(input.username, profile.username);
    assert_eq!(input.has_profile_pic, profile.attributes.has_profile_pic);
    assert_eq!(input.description, profile.attributes.description);
    assert_eq!(input.location, profile.attributes.location);
    assert_eq!(input.has_external_url, profile.attributes.has_external_url);
    assert_eq!(input.is_private, profile.attributes.is_private);
    assert_eq!(input.is_verified, profile.attributes.is_verified);
    assert_eq!(input.display_name, profile.attributes.display_name);
    assert_eq!(input.created_at, profile.created_at);
}

#[test]
fn account_age_is_positive_and_consistent() {
    for platform in Platform::all() {
        let profile = generate(platform, 3);
        let input = profile.to_scoring_input(fixed_now());
        assert!(input.account_age_days > 0.0);
        assert_eq!(
            input.account_age_days,
            ProfileInput::age_days(profile.created_at, fixed_now())
        );
    }
}

#[test]
fn age_never_goes_negative() {
    // A clock earlier than the signup window floors the age at zero
    let profile = generate(Platform::Twitter, 1);
    let before_signup = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
    let input = profile.to_scoring_input(before_signup);
    assert_eq!(input.account_age_days, 0.0);
}
