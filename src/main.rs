use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use glimpse::api::client::ProfileApiClient;
use glimpse::api::ProfileSource;
use glimpse::browser::ProfileBrowser;
use glimpse::config::Config;
use glimpse::controller::{Completion, SearchModeController};
use glimpse::fetch::detail::{self, DetailOutcome};
use glimpse::fetch::listing;
use glimpse::fetch::search::{self, SearchOutcome};
use glimpse::listing::sort::{ListView, SortField, SortOrder, SortSpec};
use glimpse::output::terminal;
use glimpse::profiles::filters::{FilterCriteria, FollowerRange, PostRange};
use glimpse::profiles::models::ProfileSummary;
use glimpse::session::TokenSession;

/// Glimpse: browse profile collections and estimate engagement.
///
/// Narrow a large set of social-media profiles with structured filters or a
/// free-text semantic query, then inspect any profile's engagement estimates.
#[derive(Parser)]
#[command(name = "glimpse", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List profiles matching structured filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page to show (50 profiles per page)
        #[arg(long, default_value = "1")]
        page: u32,

        /// Sort the page by a column
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Sort order (defaults to descending for numeric columns)
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
    },

    /// Run a free-text semantic search (3-500 characters)
    Search {
        /// What to look for, e.g. "tech reviewers with high engagement"
        query: String,
    },

    /// Show one profile with engagement estimates
    Show {
        /// Profile id
        id: String,
    },

    /// Interactively browse, filter, search and open profiles
    Browse,
}

#[derive(clap::Args, Default)]
struct FilterArgs {
    /// Username contains
    #[arg(long)]
    username: Option<String>,

    /// Full name starts with
    #[arg(long)]
    name: Option<String>,

    /// Only verified (true) or only unverified (false) accounts
    #[arg(long)]
    verified: Option<bool>,

    /// Follower range preset: <1K, 1K-10K, 10K-50K, 50K-100K, 100K-500K, 500K+
    #[arg(long)]
    followers: Option<String>,

    /// Post range preset: <10, 10-50, 50-100, 100-500, 500+
    #[arg(long)]
    posts: Option<String>,

    #[arg(long)]
    min_followers: Option<u64>,
    #[arg(long)]
    max_followers: Option<u64>,
    #[arg(long)]
    min_posts: Option<u64>,
    #[arg(long)]
    max_posts: Option<u64>,

    /// Business category name
    #[arg(long)]
    category: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Username,
    Followers,
    Posts,
    Engagement,
    Category,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Username => SortField::Username,
            SortArg::Followers => SortField::Followers,
            SortArg::Posts => SortField::Posts,
            SortArg::Engagement => SortField::Engagement,
            SortArg::Category => SortField::Category,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

impl FilterArgs {
    fn to_criteria(&self) -> Result<FilterCriteria> {
        let mut criteria = FilterCriteria::new()
            .with_username(self.username.as_deref())
            .with_full_name(self.name.as_deref())
            .with_verified(self.verified)
            .with_followers(self.min_followers, self.max_followers)
            .with_posts(self.min_posts, self.max_posts)
            .with_category(self.category.as_deref());

        if let Some(label) = &self.followers {
            let range = FollowerRange::from_label(label)
                .with_context(|| format!("Unknown follower range: {label}"))?;
            criteria = criteria.with_follower_range(range);
        }
        if let Some(label) = &self.posts {
            let range = PostRange::from_label(label)
                .with_context(|| format!("Unknown post range: {label}"))?;
            criteria = criteria.with_post_range(range);
        }

        Ok(criteria)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("glimpse=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load()?;
    config.require_token()?;
    let session = Arc::new(TokenSession::new(config.token.clone()));
    let source: Arc<dyn ProfileSource> = Arc::new(ProfileApiClient::new(
        &config.api_url,
        config.timeout_secs,
        session.clone(),
    )?);
    info!(api = %config.api_url, "Using profile API");

    match cli.command {
        Commands::List {
            filters,
            page,
            sort,
            order,
        } => {
            let criteria = filters.to_criteria()?;

            // Only the last ticket is fetched; the page-1 ticket from
            // apply_filters is superseded before it ever runs.
            let mut controller = SearchModeController::new();
            let mut req = controller.apply_filters(criteria);
            if page > 1 {
                if let Some(paged) = controller.change_page(page) {
                    req = paged;
                }
            }

            let pb = spinner("Loading profiles...");
            let outcome =
                listing::fetch_listing(source.as_ref(), session.as_ref(), req.page, &req.criteria)
                    .await;
            pb.finish_and_clear();

            if controller.complete_listing(req.seq, outcome) == Completion::SessionExpired {
                return session_expired();
            }

            let view = match sort {
                Some(field) => {
                    let field = SortField::from(field);
                    let order = match order {
                        Some(OrderArg::Asc) => SortOrder::Ascending,
                        Some(OrderArg::Desc) => SortOrder::Descending,
                        None => field.default_order(),
                    };
                    ListView::with_sort(SortSpec::new(field, order))
                }
                None => ListView::new(),
            };

            let state = controller.state();
            let rows = view.project(&state.results.profiles);
            terminal::display_listing(state, &rows, view.sort());
        }

        Commands::Search { query } => {
            let mut controller = SearchModeController::new();
            let req = match controller.begin_search(&query) {
                Ok(req) => req,
                Err(e) => anyhow::bail!("{e}"),
            };

            let pb = spinner("Searching...");
            let outcome = search::fetch_search(source.as_ref(), session.as_ref(), &req.query).await;
            pb.finish_and_clear();

            if let SearchOutcome::Failed { message } = &outcome {
                anyhow::bail!("Search error: {message}");
            }
            if controller.complete_search(req.seq, &req.query, outcome)
                == Completion::SessionExpired
            {
                return session_expired();
            }

            let state = controller.state();
            let rows = ListView::new().project(&state.results.profiles);
            terminal::display_listing(state, &rows, None);
        }

        Commands::Show { id } => {
            // Without a listing row to fall back on, the fallback is a bare id.
            let summary = ProfileSummary {
                id: id.clone(),
                username: id,
                ..ProfileSummary::default()
            };

            let pb = spinner("Loading profile...");
            let outcome = detail::resolve_detail(source.as_ref(), session.as_ref(), &summary).await;
            pb.finish_and_clear();

            match outcome {
                DetailOutcome::Resolved(view) => terminal::display_detail(&view),
                DetailOutcome::SessionExpired => return session_expired(),
            }
        }

        Commands::Browse => {
            let mut browser = ProfileBrowser::new(source, session.clone());
            browse(&mut browser, session.as_ref()).await?;
        }
    }

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn session_expired() -> Result<()> {
    anyhow::bail!(
        "Your session has expired. Sign in again and update GLIMPSE_TOKEN in your .env file."
    )
}

const BROWSE_HELP: &str = "\
Commands:
  filter key=value ...   apply filters (username, name, verified, followers,
                         posts, min_followers, max_followers, min_posts,
                         max_posts, category)
  verified               show verified accounts only
  clear                  clear all filters
  page N                 go to page N
  search TEXT            semantic search (3-500 characters)
  refresh                reload the listing
  sort FIELD             sort by username|followers|posts|engagement|category
                         (repeat to toggle order)
  open N                 show row N in detail
  close                  close the detail panel
  dismiss                dismiss error messages
  help                   show this help
  quit                   exit";

/// The interactive loop. Each line is one user action.
async fn browse(browser: &mut ProfileBrowser, session: &TokenSession) -> Result<()> {
    println!("{}", "Glimpse profile browser. Type `help` for commands.".bold());

    browser.load().await;
    render(browser);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if session.is_expired() {
            return session_expired();
        }

        print!("{} ", ">".cyan());
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" => println!("{BROWSE_HELP}"),
            "filter" => match parse_filter_args(rest) {
                Ok(criteria) => {
                    browser.apply_filters(criteria).await;
                    render(browser);
                }
                Err(e) => println!("  {} {e}", "!".red()),
            },
            "verified" => {
                browser.apply_filters(FilterCriteria::verified_only()).await;
                render(browser);
            }
            "clear" => {
                browser.clear_filters().await;
                render(browser);
            }
            "page" => match rest.parse::<u32>() {
                Ok(n) => {
                    if browser.change_page(n).await.is_none() {
                        println!(
                            "  {}",
                            "Pagination is not available for search results.".dimmed()
                        );
                    } else {
                        render(browser);
                    }
                }
                Err(_) => println!("  {} usage: page N", "!".red()),
            },
            "search" => match browser.search(rest).await {
                Ok(_) => render(browser),
                Err(e) => println!("  {} {e}", "!".red()),
            },
            "refresh" => {
                browser.refresh().await;
                render(browser);
            }
            "sort" => match SortField::parse(rest) {
                Some(field) => {
                    browser.sort_by(field);
                    render(browser);
                }
                None => println!("  {} unknown sort field: {rest}", "!".red()),
            },
            "open" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => match browser.open_row(n - 1).await {
                    Some(Completion::Applied) => {
                        if let Some(view) = browser.detail() {
                            terminal::display_detail(view);
                        }
                    }
                    Some(_) => {}
                    None => println!("  {} no row {n} on this page", "!".red()),
                },
                _ => println!("  {} usage: open N", "!".red()),
            },
            "close" => browser.close_detail(),
            "dismiss" => {
                browser.dismiss_error();
                render(browser);
            }
            other => {
                warn!(command = other, "Unknown browse command");
                println!("  {} unknown command `{other}` (try `help`)", "!".red());
            }
        }
    }

    Ok(())
}

fn render(browser: &ProfileBrowser) {
    let rows = browser.rows();
    terminal::display_listing(browser.state(), &rows, browser.sort());
}

/// Split the browse prompt into `key=value` pairs.
///
/// A word without `=` continues the previous value, so
/// `category=Food & Cooking` is one pair. Values may also be quoted.
fn split_filter_pairs(input: &str) -> Result<Vec<(String, String)>> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for word in input.split_whitespace() {
        if let Some((key, value)) = word.split_once('=') {
            pairs.push((key.to_string(), value.to_string()));
        } else if let Some((_, value)) = pairs.last_mut() {
            value.push(' ');
            value.push_str(word);
        } else {
            anyhow::bail!("Expected key=value, got `{word}`");
        }
    }

    for (_, value) in &mut pairs {
        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
                *value = value[1..value.len() - 1].to_string();
                break;
            }
        }
    }
    Ok(pairs)
}

/// Parse `key=value` pairs from the browse prompt into criteria.
fn parse_filter_args(input: &str) -> Result<FilterCriteria> {
    let mut args = FilterArgs::default();
    for (key, value) in split_filter_pairs(input)? {
        let (key, value) = (key.as_str(), value.as_str());
        let number = || {
            value
                .parse::<u64>()
                .with_context(|| format!("`{key}` needs a number, got `{value}`"))
        };
        match key {
            "username" => args.username = Some(value.to_string()),
            "name" | "full_name" => args.name = Some(value.to_string()),
            "verified" | "is_verified" => {
                args.verified = Some(
                    value
                        .parse()
                        .with_context(|| format!("`verified` needs true or false, got `{value}`"))?,
                )
            }
            "followers" => args.followers = Some(value.to_string()),
            "posts" => args.posts = Some(value.to_string()),
            "min_followers" => args.min_followers = Some(number()?),
            "max_followers" => args.max_followers = Some(number()?),
            "min_posts" => args.min_posts = Some(number()?),
            "max_posts" => args.max_posts = Some(number()?),
            "category" | "category_name" => args.category = Some(value.to_string()),
            other => anyhow::bail!("Unknown filter `{other}`"),
        }
    }
    args.to_criteria()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_value_with_spaces() {
        let criteria = parse_filter_args("category=Food & Cooking verified=true").unwrap();
        assert_eq!(criteria.category_name(), Some("Food & Cooking"));
        assert_eq!(criteria.is_verified(), Some(true));
    }

    #[test]
    fn test_quoted_filter_value() {
        let criteria = parse_filter_args("name=\"Anna Cook\" followers=10K-50K").unwrap();
        assert_eq!(criteria.full_name(), Some("Anna Cook"));
        assert_eq!(criteria.followers(), (Some(10_000), Some(49_999)));
    }

    #[test]
    fn test_leading_word_without_key_is_rejected() {
        assert!(parse_filter_args("Food category=Art").is_err());
    }

    #[test]
    fn test_unknown_filter_is_rejected() {
        assert!(parse_filter_args("colour=red").is_err());
    }
}
