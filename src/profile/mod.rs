// Synthetic profile model.
//
// These are the types the generator produces and the presentation layer
// renders. They keep each platform's native metric shape (tweets vs posts,
// friends vs following); `to_scoring_input` flattens that shape into the
// normalized record the scoring engine consumes.

pub mod generator;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::scoring::input::ProfileInput;

/// A fully synthesized profile for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProfile {
    pub platform: Platform,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub metrics: PlatformMetrics,
    pub engagement: EngagementMetrics,
    pub attributes: ProfileAttributes,
    pub activity: ActivityDetail,
}

/// Platform-native activity and audience counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformMetrics {
    Twitter {
        tweets: u64,
        followers: u64,
        following: u64,
    },
    Instagram {
        posts: u64,
        stories: u64,
        reels: u64,
        followers: u64,
        following: u64,
    },
    Facebook {
        posts: u64,
        friends: u64,
        followers: u64,
        groups: u64,
    },
}

/// Presentational percentages shown alongside the risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub posts_per_day: f64,
    pub engagement_rate: f64,
    pub activity_consistency: f64,
    pub network_strength: f64,
}

/// Profile attributes the heuristic checks read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAttributes {
    pub has_profile_pic: bool,
    pub description: String,
    pub location: String,
    pub has_external_url: bool,
    pub is_private: bool,
    pub is_verified: bool,
    pub display_name: String,
}

/// Platform-specific activity texture, shown in the activity summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityDetail {
    Twitter { peak_hours: String },
    Instagram { story_frequency: String },
    Facebook { group_activity: String },
}

/// Activity pattern label derived from the final risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityPattern {
    Normal,
    Suspicious,
}

impl ActivityPattern {
    /// Scores above 50 read as suspicious activity.
    pub fn from_risk_score(score: u32) -> Self {
        if score > 50 {
            ActivityPattern::Suspicious
        } else {
            ActivityPattern::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityPattern::Normal => "Normal",
            ActivityPattern::Suspicious => "Suspicious",
        }
    }
}

impl GeneratedProfile {
    /// Flatten the platform-native metrics into the normalized engine input.
    ///
    /// Defaults are applied here, not inside the checks: a platform without
    /// a "following" count (Facebook) normalizes to zero, and Twitter's
    /// tweet count becomes the generic post count.
    pub fn to_scoring_input(&self, now: DateTime<Utc>) -> ProfileInput {
        let (followers, following, posts) = match self.metrics {
            PlatformMetrics::Twitter {
                tweets,
                followers,
                following,
            } => (followers, following, tweets),
            PlatformMetrics::Instagram {
                posts,
                followers,
                following,
                ..
            } => (followers, following, posts),
            PlatformMetrics::Facebook {
                posts, followers, ..
            } => (followers, 0, posts),
        };

        ProfileInput {
            username: self.username.clone(),
            has_profile_pic: self.attributes.has_profile_pic,
            description: self.attributes.description.clone(),
            location: self.attributes.location.clone(),
            has_external_url: self.attributes.has_external_url,
            is_private: self.attributes.is_private,
            is_verified: self.attributes.is_verified,
            display_name: self.attributes.display_name.clone(),
            followers,
            following,
            posts,
            created_at: self.created_at,
            account_age_days: ProfileInput::age_days(self.created_at, now),
        }
    }
}

/// Deterministic avatar URL for a username (DiceBear, seeded by name).
pub fn avatar_url(username: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={username}&backgroundColor=b6e3f4")
}
