// Colored terminal output for analysis reports.
//
// This module handles all terminal-specific formatting: colors, the score
// bar, section layout. The main.rs display path delegates here.

use colored::Colorize;

use crate::profile::{avatar_url, ActivityDetail, ActivityPattern, GeneratedProfile, PlatformMetrics};
use crate::scoring::checks::{CheckResult, CheckStatus};
use crate::scoring::risk::{RiskAssessment, RiskLevel};

/// Render the full analysis report: profile card, metrics, check
/// breakdown, risk assessment, activity summary.
pub fn display_report(profile: &GeneratedProfile, assessment: &RiskAssessment) {
    display_profile_card(profile);
    display_metrics(profile);
    display_test_results(&assessment.test_results);
    display_assessment(assessment);
    display_activity(profile, assessment);
    println!();
}

/// Display the profile header: handle, display name, join date, bio.
pub fn display_profile_card(profile: &GeneratedProfile) {
    println!(
        "\n{}",
        format!(
            "=== @{} on {} ===",
            profile.username,
            profile.platform.display_name()
        )
        .bold()
    );

    let verified = if profile.attributes.is_verified {
        format!(" {}", "✓".blue())
    } else {
        String::new()
    };
    println!("  {}{}", profile.attributes.display_name.bold(), verified);
    println!("  Joined {}", profile.created_at.format("%B %Y"));

    if profile.attributes.has_profile_pic {
        println!("  Avatar: {}", avatar_url(&profile.username).dimmed());
    } else {
        println!("  Avatar: {}", "none".dimmed());
    }
    if !profile.attributes.description.is_empty() {
        println!("  Bio: {}", profile.attributes.description);
    }
    if !profile.attributes.location.is_empty() {
        println!("  Location: {}", profile.attributes.location);
    }
    if profile.attributes.is_private {
        println!("  {}", "Private account".yellow());
    }
}

/// Display the platform-native counts and presentational percentages.
pub fn display_metrics(profile: &GeneratedProfile) {
    println!("\n{}", "=== Account Overview ===".bold());

    match &profile.metrics {
        PlatformMetrics::Twitter {
            tweets,
            followers,
            following,
        } => {
            print_count("Tweets", *tweets);
            print_count("Followers", *followers);
            print_count("Following", *following);
        }
        PlatformMetrics::Instagram {
            posts,
            stories,
            reels,
            followers,
            following,
        } => {
            print_count("Posts", *posts);
            print_count("Stories", *stories);
            print_count("Reels", *reels);
            print_count("Followers", *followers);
            print_count("Following", *following);
        }
        PlatformMetrics::Facebook {
            posts,
            friends,
            followers,
            groups,
        } => {
            print_count("Posts", *posts);
            print_count("Friends", *friends);
            print_count("Followers", *followers);
            print_count("Groups", *groups);
        }
    }

    println!(
        "  {:<14} {:>8.2}%",
        "Engagement", profile.engagement.engagement_rate
    );
    println!(
        "  {:<14} {:>8.2}%",
        "Consistency", profile.engagement.activity_consistency
    );
    println!(
        "  {:<14} {:>8.2}%",
        "Network", profile.engagement.network_strength
    );
}

/// Display the per-check pass/fail breakdown.
pub fn display_test_results(results: &[CheckResult]) {
    println!("\n{}", "=== Security Checks ===".bold());
    for result in results {
        let status = match result.status {
            CheckStatus::Passed => "PASS".green().to_string(),
            CheckStatus::Failed => "FAIL".red().bold().to_string(),
        };
        println!("  {:<18} {}", result.category.as_str(), status);
        if let Some(factor) = &result.factor {
            println!("    {}", factor.dimmed());
        }
    }
}

/// Display the aggregate risk score, level, and factor list.
pub fn display_assessment(assessment: &RiskAssessment) {
    let level = assessment.level();

    println!("\n{}", "=== Risk Assessment ===".bold());
    println!(
        "  Risk score: {} ({})",
        colorize_by_level(&format!("{}%", assessment.risk_score), level),
        colorize_by_level(level.as_str(), level),
    );
    println!("  [{}]", risk_bar(assessment.risk_score, level));

    if assessment.factors.is_empty() {
        println!("  {}", "No risk factors detected.".green());
    } else {
        println!("  Risk factors:");
        for factor in &assessment.factors {
            println!("    {} {}", "!".red(), factor);
        }
    }
}

/// Display the activity pattern derived from the final score.
pub fn display_activity(profile: &GeneratedProfile, assessment: &RiskAssessment) {
    println!("\n{}", "=== Activity ===".bold());

    let pattern = ActivityPattern::from_risk_score(assessment.risk_score);
    let pattern_str = match pattern {
        ActivityPattern::Suspicious => pattern.as_str().red().to_string(),
        ActivityPattern::Normal => pattern.as_str().green().to_string(),
    };
    println!("  Pattern: {pattern_str}");
    println!(
        "  Posts per day: {:.1}",
        profile.engagement.posts_per_day
    );

    match &profile.activity {
        ActivityDetail::Twitter { peak_hours } => println!("  Peak hours: {peak_hours}"),
        ActivityDetail::Instagram { story_frequency } => {
            println!("  Story frequency: {story_frequency}")
        }
        ActivityDetail::Facebook { group_activity } => {
            println!("  Group activity: {group_activity}")
        }
    }
}

fn print_count(label: &str, value: u64) {
    println!("  {:<14} {:>8}", label, value);
}

fn risk_bar(score: u32, level: RiskLevel) -> String {
    const WIDTH: usize = 20;
    let filled = (score.min(100) as usize * WIDTH) / 100;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled));
    colorize_by_level(&bar, level)
}

fn colorize_by_level(text: &str, level: RiskLevel) -> String {
    match level {
        RiskLevel::High => text.red().bold().to_string(),
        RiskLevel::Medium => text.yellow().to_string(),
        RiskLevel::Low => text.green().to_string(),
    }
}
