// The twelve heuristic checks.
//
// Each check is pure and independent: it reads one attribute or ratio from
// the normalized input and returns a CheckResult with a fixed penalty and
// factor text on failure. The evaluation order in `run_checks` is part of
// the output contract — `factors` and `test_results` inherit it.

use serde::{Deserialize, Serialize};

use crate::scoring::input::ProfileInput;

/// Penalty scores per check. Failed checks contribute these to the total.
const PENALTY_NO_PROFILE_PIC: u32 = 20;
const PENALTY_NUMERIC_USERNAME: u32 = 15;
const PENALTY_SHORT_BIO: u32 = 10;
const PENALTY_FOLLOWER_RATIO: u32 = 15;
const PENALTY_NEW_ACCOUNT: u32 = 20;
const PENALTY_POST_FREQUENCY: u32 = 20;
const PENALTY_NO_LOCATION: u32 = 5;
const PENALTY_NO_EXTERNAL_URL: u32 = 5;
const PENALTY_PRIVATE: u32 = 10;
const PENALTY_NAME_MISMATCH: u32 = 10;
const PENALTY_BIO_KEYWORDS: u32 = 15;
const PENALTY_UNVERIFIED: u32 = 5;

/// Digit fraction of the username above which it looks machine-generated.
const NUMERIC_RATIO_THRESHOLD: f64 = 0.3;

/// A bio shorter than this counts as effectively absent.
const MIN_BIO_CHARS: usize = 10;

/// Follower/following ratio bounds. Outside [low, high] is suspicious.
const FOLLOW_RATIO_LOW: f64 = 0.01;
const FOLLOW_RATIO_HIGH: f64 = 100.0;

/// Accounts younger than this many days are flagged as recently created.
const MIN_ACCOUNT_AGE_DAYS: f64 = 30.0;

/// Posts per day above which activity looks automated.
const MAX_POSTS_PER_DAY: f64 = 4.0;

/// Engagement-bait phrases that flag a bio regardless of its length.
const SUSPICIOUS_BIO_KEYWORDS: [&str; 5] = [
    "follow back",
    "follow 4 follow",
    "f4f",
    "l4l",
    "like for like",
];

/// Number of checks in the battery. `run_checks` always returns exactly this many.
pub const CHECK_COUNT: usize = 12;

/// The fixed category label of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckCategory {
    #[serde(rename = "Profile Picture")]
    ProfilePicture,
    Username,
    Bio,
    Network,
    #[serde(rename = "Account Age")]
    AccountAge,
    Activity,
    Location,
    #[serde(rename = "External Links")]
    ExternalLinks,
    Privacy,
    Identity,
    #[serde(rename = "Bio Content")]
    BioContent,
    Verification,
}

impl CheckCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCategory::ProfilePicture => "Profile Picture",
            CheckCategory::Username => "Username",
            CheckCategory::Bio => "Bio",
            CheckCategory::Network => "Network",
            CheckCategory::AccountAge => "Account Age",
            CheckCategory::Activity => "Activity",
            CheckCategory::Location => "Location",
            CheckCategory::ExternalLinks => "External Links",
            CheckCategory::Privacy => "Privacy",
            CheckCategory::Identity => "Identity",
            CheckCategory::BioContent => "Bio Content",
            CheckCategory::Verification => "Verification",
        }
    }
}

impl std::fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Passed,
    Failed,
}

/// The outcome of a single heuristic check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub category: CheckCategory,
    /// Penalty contributed to the risk score. Zero when passed.
    pub score: u32,
    pub status: CheckStatus,
    /// Human-readable reason. Present iff the check failed.
    pub factor: Option<String>,
}

impl CheckResult {
    fn passed(category: CheckCategory) -> Self {
        Self {
            category,
            score: 0,
            status: CheckStatus::Passed,
            factor: None,
        }
    }

    fn failed(category: CheckCategory, score: u32, factor: &str) -> Self {
        Self {
            category,
            score,
            status: CheckStatus::Failed,
            factor: Some(factor.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == CheckStatus::Failed
    }
}

/// Check 1: accounts without a profile picture.
pub fn check_profile_picture(has_profile_pic: bool) -> CheckResult {
    if !has_profile_pic {
        return CheckResult::failed(
            CheckCategory::ProfilePicture,
            PENALTY_NO_PROFILE_PIC,
            "No profile picture",
        );
    }
    CheckResult::passed(CheckCategory::ProfilePicture)
}

/// Check 2: usernames that are mostly digits.
///
/// An empty username has no digits and scores a ratio of zero, so it passes.
pub fn check_username(username: &str) -> CheckResult {
    let total = username.chars().count();
    let numeric_ratio = if total == 0 {
        0.0
    } else {
        let digits = username.chars().filter(char::is_ascii_digit).count();
        digits as f64 / total as f64
    };

    if numeric_ratio > NUMERIC_RATIO_THRESHOLD {
        return CheckResult::failed(
            CheckCategory::Username,
            PENALTY_NUMERIC_USERNAME,
            "High number of numeric characters in username",
        );
    }
    CheckResult::passed(CheckCategory::Username)
}

/// Check 3: missing or throwaway bio.
pub fn check_bio(description: &str) -> CheckResult {
    if description.chars().count() < MIN_BIO_CHARS {
        return CheckResult::failed(
            CheckCategory::Bio,
            PENALTY_SHORT_BIO,
            "Very short or no profile description",
        );
    }
    CheckResult::passed(CheckCategory::Bio)
}

/// Check 4: follower/following ratio outside the plausible band.
///
/// `following` is floored at 1 so an account following nobody doesn't
/// divide by zero.
pub fn check_network(followers: u64, following: u64) -> CheckResult {
    let ratio = followers as f64 / following.max(1) as f64;
    if ratio < FOLLOW_RATIO_LOW || ratio > FOLLOW_RATIO_HIGH {
        return CheckResult::failed(
            CheckCategory::Network,
            PENALTY_FOLLOWER_RATIO,
            "Suspicious follower/following ratio",
        );
    }
    CheckResult::passed(CheckCategory::Network)
}

/// Check 5: recently created accounts.
pub fn check_account_age(account_age_days: f64) -> CheckResult {
    if account_age_days < MIN_ACCOUNT_AGE_DAYS {
        return CheckResult::failed(
            CheckCategory::AccountAge,
            PENALTY_NEW_ACCOUNT,
            "Recently created account",
        );
    }
    CheckResult::passed(CheckCategory::AccountAge)
}

/// Check 6: posting frequency above the automated-activity threshold.
///
/// Age is floored at 1 day so brand-new accounts don't divide by zero.
pub fn check_activity(posts: u64, account_age_days: f64) -> CheckResult {
    let posts_per_day = posts as f64 / account_age_days.max(1.0);
    if posts_per_day > MAX_POSTS_PER_DAY {
        return CheckResult::failed(
            CheckCategory::Activity,
            PENALTY_POST_FREQUENCY,
            "Unusually high posting frequency",
        );
    }
    CheckResult::passed(CheckCategory::Activity)
}

/// Check 7: missing location.
pub fn check_location(location: &str) -> CheckResult {
    if location.is_empty() {
        return CheckResult::failed(
            CheckCategory::Location,
            PENALTY_NO_LOCATION,
            "No location information",
        );
    }
    CheckResult::passed(CheckCategory::Location)
}

/// Check 8: no external URL in the profile.
pub fn check_external_url(has_external_url: bool) -> CheckResult {
    if !has_external_url {
        return CheckResult::failed(
            CheckCategory::ExternalLinks,
            PENALTY_NO_EXTERNAL_URL,
            "No external URL in profile",
        );
    }
    CheckResult::passed(CheckCategory::ExternalLinks)
}

/// Check 9: private accounts.
pub fn check_privacy(is_private: bool) -> CheckResult {
    if is_private {
        return CheckResult::failed(CheckCategory::Privacy, PENALTY_PRIVATE, "Private account");
    }
    CheckResult::passed(CheckCategory::Privacy)
}

/// Check 10: display name unrelated to the username.
///
/// Passes when either string contains the other, case-insensitively. An
/// empty display name is contained in every username, so it passes.
pub fn check_identity(display_name: &str, username: &str) -> CheckResult {
    let name = display_name.to_lowercase();
    let user = username.to_lowercase();
    if !name.contains(&user) && !user.contains(&name) {
        return CheckResult::failed(
            CheckCategory::Identity,
            PENALTY_NAME_MISMATCH,
            "Name does not match username pattern",
        );
    }
    CheckResult::passed(CheckCategory::Identity)
}

/// Check 11: engagement-bait phrases in the bio.
pub fn check_bio_keywords(description: &str) -> CheckResult {
    let bio = description.to_lowercase();
    if SUSPICIOUS_BIO_KEYWORDS.iter().any(|kw| bio.contains(kw)) {
        return CheckResult::failed(
            CheckCategory::BioContent,
            PENALTY_BIO_KEYWORDS,
            "Suspicious keywords in bio",
        );
    }
    CheckResult::passed(CheckCategory::BioContent)
}

/// Check 12: unverified accounts.
pub fn check_verification(is_verified: bool) -> CheckResult {
    if !is_verified {
        return CheckResult::failed(
            CheckCategory::Verification,
            PENALTY_UNVERIFIED,
            "Unverified account",
        );
    }
    CheckResult::passed(CheckCategory::Verification)
}

/// Run the full battery in its fixed order.
///
/// Always returns exactly [`CHECK_COUNT`] results, one per check, in the
/// order the categories are documented.
pub fn run_checks(input: &ProfileInput) -> Vec<CheckResult> {
    vec![
        check_profile_picture(input.has_profile_pic),
        check_username(&input.username),
        check_bio(&input.description),
        check_network(input.followers, input.following),
        check_account_age(input.account_age_days),
        check_activity(input.posts, input.account_age_days),
        check_location(&input.location),
        check_external_url(input.has_external_url),
        check_privacy(input.is_private),
        check_identity(&input.display_name, &input.username),
        check_bio_keywords(&input.description),
        check_verification(input.is_verified),
    ]
}
