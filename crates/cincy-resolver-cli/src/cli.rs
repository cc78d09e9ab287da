use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use cincy_resolver::{
    ClockSource, DateRange, FixedClock, LocationCatalog, Resolver, SlotRequest, SystemClock,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "cincy",
    version,
    about = "Resolve crime-report date tokens, relative phrases, and neighborhood names"
)]
pub struct Cli {
    /// Pin "today" instead of reading the system clock
    #[arg(long, global = true, env = "CINCY_TODAY", value_name = "YYYY-MM-DD")]
    today: Option<String>,

    /// IANA timezone whose calendar day counts as "today"
    #[arg(
        long,
        global = true,
        env = "CINCY_TIMEZONE",
        default_value = "America/New_York"
    )]
    timezone: String,

    /// Location catalog file, one spelling per line (defaults to the built-in Cincinnati list)
    #[arg(long, global = true, env = "CINCY_CATALOG", value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Log filter for stderr diagnostics (e.g. "info", "cincy=debug")
    #[arg(long, global = true, env = "CINCY_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve an absolute date token (e.g. 2017-03, 2017-W23, PRESENT_REF)
    Date {
        token: String,
    },
    /// Resolve a relative phrase (e.g. last week, since friday)
    Phrase {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Find the canonical spelling of a location
    Location {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// List the location catalog in lookup order
    Locations {
        /// Print one comma-separated line instead of JSON
        #[arg(long)]
        spoken: bool,
    },
    /// Resolve a full request of date, phrase, and location slots
    Request(RequestArgs),
}

#[derive(Debug, Args)]
struct RequestArgs {
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    phrase: Option<String>,
    #[arg(long)]
    location: Option<String>,
}

#[derive(Serialize)]
struct DateOutput<'a> {
    token: &'a str,
    date: NaiveDate,
    range: DateRange,
}

#[derive(Serialize)]
struct PhraseOutput<'a> {
    phrase: &'a str,
    range: DateRange,
}

#[derive(Serialize)]
struct LocationOutput<'a> {
    query: &'a str,
    location: &'a str,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(&self.log_level)?;

        let clock = self.clock()?;
        let catalog = load_catalog(self.catalog.as_deref())?;
        let resolver = Resolver::new(clock, catalog);
        info!(timezone = %self.timezone, pinned = self.today.is_some(), "resolver ready");

        match self.command {
            Command::Date { token } => {
                let range = resolver.date_token(&token)?;
                print_json(&DateOutput {
                    token: &token,
                    date: range.start(),
                    range,
                })
            }
            Command::Phrase { words } => {
                let phrase = words.join(" ");
                let range = resolver.relative_phrase(&phrase)?;
                print_json(&PhraseOutput {
                    phrase: &phrase,
                    range,
                })
            }
            Command::Location { words } => {
                let query = words.join(" ");
                let found = resolver.location(&query)?;
                print_json(&LocationOutput {
                    query: &query,
                    location: found.as_str(),
                })
            }
            Command::Locations { spoken } => {
                if spoken {
                    print_line(&resolver.catalog().spoken_list())
                } else {
                    print_json(&resolver.catalog().entries())
                }
            }
            Command::Request(args) => {
                let request = SlotRequest {
                    date: args.date,
                    date_string: args.phrase,
                    location: args.location,
                };
                debug!(?request, "resolving request");
                let resolution = resolver.request(&request)?;
                print_json(&resolution)
            }
        }
    }

    fn clock(&self) -> Result<Box<dyn ClockSource>> {
        let tz: Tz = self
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid --timezone '{}'", self.timezone))?;
        if let Some(today) = &self.today {
            let day = NaiveDate::parse_from_str(today, "%Y-%m-%d")
                .with_context(|| format!("invalid --today '{today}': expected YYYY-MM-DD"))?;
            debug!(%day, "using fixed clock");
            return Ok(Box::new(FixedClock(day)));
        }
        debug!(%tz, "using system clock");
        Ok(Box::new(SystemClock::new(tz)))
    }
}

fn init_tracing(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid --log-level '{filter}'"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install log subscriber")
}

fn load_catalog(path: Option<&Path>) -> Result<Arc<LocationCatalog>> {
    let Some(path) = path else {
        return Ok(LocationCatalog::cincinnati_shared());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog '{}'", path.display()))?;
    let catalog = LocationCatalog::from_lines(&text);
    if catalog.is_empty() {
        bail!("catalog '{}' has no entries", path.display());
    }
    info!(path = %path.display(), entries = catalog.len(), "loaded catalog");
    Ok(Arc::new(catalog))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    print_line(&json)
}

fn print_line(line: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").context("failed to write to stdout")
}
