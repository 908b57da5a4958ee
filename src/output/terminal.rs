// Colored terminal output for profile listings and the detail panel.
//
// This module handles all terminal-specific formatting. main.rs and the
// interactive browse loop delegate here.

use colored::Colorize;

use super::{format_count, format_engagement, format_post_date, truncate_chars};
use crate::controller::{Mode, ViewState};
use crate::fetch::detail::DetailView;
use crate::listing::sort::{SortField, SortSpec};
use crate::profiles::models::ProfileSummary;
use crate::scoring::engagement::EngagementMetrics;

/// Display the current result page in display order.
pub fn display_listing(state: &ViewState, rows: &[&ProfileSummary], sort: Option<SortSpec>) {
    if let Some(error) = &state.error {
        println!("\n  {} {}", "!".red().bold(), error.red());
    }
    if let Some(error) = &state.search_error {
        println!("  {} {}", "Search error:".red(), error);
    }

    match &state.mode {
        Mode::SemanticSearchActive { query } => {
            println!(
                "\n{}",
                format!("=== Semantic search: \"{query}\" ===").bold()
            );
            println!(
                "  Found {} profiles matching your search",
                state.results.total.to_string().green().bold()
            );
        }
        Mode::Filtered { criteria, .. } => {
            let filters = criteria.active_count();
            let suffix = if filters == 0 {
                String::new()
            } else {
                format!(", {filters} filter{} active", if filters > 1 { "s" } else { "" })
            };
            println!(
                "\n{}",
                format!("=== Profiles ({} total{suffix}) ===", state.results.total).bold()
            );
        }
    }
    println!();

    if rows.is_empty() {
        println!("  No profiles to show.");
        return;
    }

    println!(
        "  {:>4}  {:<32} {:>9}  {:>7}  {:>6}  {:<20}",
        "#".dimmed(),
        header("Profile", SortField::Username, sort).dimmed(),
        header("Followers", SortField::Followers, sort).dimmed(),
        header("Posts", SortField::Posts, sort).dimmed(),
        header("Eng.%", SortField::Engagement, sort).dimmed(),
        header("Category", SortField::Category, sort).dimmed(),
    );
    println!("  {}", "-".repeat(86).dimmed());

    for (i, profile) in rows.iter().enumerate() {
        let mut name = format!("@{}", truncate_chars(&profile.username, 28));
        if profile.is_verified {
            name.push_str(" ✓");
        }
        println!(
            "  {:>4}. {:<32} {:>9}  {:>7}  {:>6}  {:<20}",
            i + 1,
            name,
            format_count(profile.followers_count),
            format_count(profile.posts_count),
            format_engagement(profile.engagement_rate),
            profile.category_name.as_deref().unwrap_or("-"),
        );
    }

    println!();
    if state.mode.is_semantic() {
        println!("  {}", "Pagination is not available for search results.".dimmed());
    } else {
        println!(
            "  Page {} of {}",
            state.page(),
            state.total_pages().max(state.page())
        );
    }
}

fn header(label: &str, field: SortField, sort: Option<SortSpec>) -> String {
    match sort {
        Some(spec) if spec.field == field => format!("{label} {}", spec.order.arrow()),
        _ => label.to_string(),
    }
}

/// Display the detail panel for one profile.
pub fn display_detail(view: &DetailView) {
    let summary = view.summary();
    println!(
        "\n{}",
        format!("=== {} (@{}) ===", summary.display_name(), summary.username).bold()
    );

    let mut badges = Vec::new();
    if summary.is_verified {
        badges.push("verified".blue().to_string());
    }
    if summary.is_private {
        badges.push("private".yellow().to_string());
    }
    if summary.is_business {
        badges.push("business".green().to_string());
    }
    if !badges.is_empty() {
        println!("  {}", badges.join(" · "));
    }

    println!(
        "  Followers: {}  Following: {}  Posts: {}",
        format_count(summary.followers_count),
        format_count(summary.following_count),
        format_count(summary.posts_count),
    );
    if let Some(category) = &summary.category_name {
        println!("  Category: {category}");
    }

    match view {
        DetailView::Full(detail) => {
            if !detail.biography.is_empty() {
                println!("\n  {}", truncate_chars(&detail.biography, 200).dimmed());
            }
            if let Some(url) = &detail.external_url {
                println!("  Link: {url}");
            }
            if let Some(business) = &detail.business {
                for (label, value) in [
                    ("Email", &business.email),
                    ("Phone", &business.phone),
                    ("Address", &business.address),
                ] {
                    if let Some(value) = value {
                        println!("  {label}: {value}");
                    }
                }
            }
            for link in &detail.bio_links {
                println!("  {} {} ({})", "→".dimmed(), link.title, link.url);
            }
        }
        DetailView::Fallback(_) => {
            println!(
                "\n  {}",
                "Full profile details are unavailable; showing the listing record.".yellow()
            );
        }
    }

    match view.metrics() {
        Some(metrics) => display_metrics(&metrics),
        None => println!("\n  {}", "No recent posts to estimate engagement from.".dimmed()),
    }

    let posts = view.recent_posts();
    if !posts.is_empty() {
        println!("\n  Recent posts:");
        for post in posts.iter().take(12) {
            let kind = if post.is_video { "video" } else { "image" };
            println!(
                "    {}  {:<5}  {} likes  {} comments",
                format_post_date(post.timestamp),
                kind.dimmed(),
                format_count(post.likes),
                format_count(post.comments),
            );
        }
    }
}

fn display_metrics(m: &EngagementMetrics) {
    println!(
        "\n  {} (from {} recent posts)",
        "Engagement estimates".bold(),
        m.posts_count
    );
    println!("    Engagement rate:       {}%", format!("{:.2}", m.engagement_rate).green());
    println!("    Estimated reach:       {}", format_count(m.estimated_reach));
    println!("    Estimated impressions: {}", format_count(m.estimated_impressions));
    println!("    Average likes:         {}", format_count(m.average_likes));
    println!("    Average comments:      {}", format_count(m.average_comments));
    println!("    Average reel plays:    {}", format_count(m.average_reel_plays));
    println!("    Average shares:        {}", format_count(m.average_shares));
}
