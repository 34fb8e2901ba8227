// Supported platforms and their synthesis parameters.
//
// Each platform carries the parameter ranges the generator draws from:
// signup-year window, posting-rate ranges for the high-risk and normal
// populations, audience count ranges, and the filler text used for
// non-suspicious profiles.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A social platform we can simulate analysis for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Facebook,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
        }
    }

    /// Human-facing name, used in terminal output and error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter (X)",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
        }
    }

    pub fn all() -> [Platform; 3] {
        [Platform::Twitter, Platform::Instagram, Platform::Facebook]
    }

    /// The parameter set the generator draws from for this platform.
    pub fn params(&self) -> PlatformParams {
        match self {
            Platform::Twitter => PlatformParams {
                signup_year: 2021,
                high_risk_posts_per_day: 4.0..14.0,
                normal_posts_per_day: 1.0..4.0,
                followers: 100..600,
                following: Some(50..250),
                friends: None,
                groups: None,
                engagement_rate: 2.0..7.0,
                activity_consistency: 60.0..90.0,
                network_strength: 40.0..80.0,
                filler_bio: "Regular user description",
                filler_location: "New York, USA",
            },
            Platform::Instagram => PlatformParams {
                signup_year: 2020,
                high_risk_posts_per_day: 4.0..12.0,
                normal_posts_per_day: 0.5..2.5,
                followers: 200..1000,
                following: Some(100..500),
                friends: None,
                groups: None,
                engagement_rate: 3.0..10.0,
                activity_consistency: 50.0..90.0,
                network_strength: 30.0..80.0,
                filler_bio: "Photography enthusiast | Travel lover",
                filler_location: "Los Angeles, CA",
            },
            Platform::Facebook => PlatformParams {
                signup_year: 2019,
                high_risk_posts_per_day: 5.0..15.0,
                normal_posts_per_day: 0.5..2.5,
                followers: 20..120,
                following: None,
                friends: Some(50..350),
                groups: Some(2..10),
                engagement_rate: 2.0..8.0,
                activity_consistency: 40.0..90.0,
                network_strength: 35.0..80.0,
                filler_bio: "Living life to the fullest",
                filler_location: "Chicago, IL",
            },
        }
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(Platform::Twitter),
            "instagram" => Ok(Platform::Instagram),
            "facebook" => Ok(Platform::Facebook),
            other => anyhow::bail!(
                "Unknown platform '{other}'. Supported platforms: twitter, instagram, facebook"
            ),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-platform synthesis parameters.
///
/// Audience ranges are half-open (`low..high`). `following`, `friends`, and
/// `groups` are `None` on platforms where the concept doesn't exist —
/// normalization maps an absent count to zero before scoring.
pub struct PlatformParams {
    /// Calendar year the synthetic signup date is drawn from.
    pub signup_year: i32,
    pub high_risk_posts_per_day: Range<f64>,
    pub normal_posts_per_day: Range<f64>,
    pub followers: Range<u64>,
    pub following: Option<Range<u64>>,
    pub friends: Option<Range<u64>>,
    pub groups: Option<Range<u64>>,
    pub engagement_rate: Range<f64>,
    pub activity_consistency: Range<f64>,
    pub network_strength: Range<f64>,
    pub filler_bio: &'static str,
    pub filler_location: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_platforms() {
        assert_eq!("twitter".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!("x".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!("Instagram".parse::<Platform>().unwrap(), Platform::Instagram);
        assert_eq!("FACEBOOK".parse::<Platform>().unwrap(), Platform::Facebook);
    }

    #[test]
    fn parse_rejects_unknown_platform() {
        let err = "myspace".parse::<Platform>().unwrap_err();
        assert!(err.to_string().contains("myspace"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for platform in Platform::all() {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }
}
