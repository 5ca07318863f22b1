//! Command-line interface.
//!
//! [`Cli`] is the clap definition; [`run`] executes a parsed command and
//! returns what should be printed, so tests can drive every subcommand
//! without touching stdout.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tiny_jira_render::tabular::{BorderStyle, Col, Table};
use tiny_jira_render::{OutputMode, Painter, RenderContext, Theme};
use tiny_jira_seeker::Filter;
use tracing::debug;

use crate::columns::{parse_columns, CATALOGUE};
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::env::EnvReader;
use crate::error::Result;
use crate::issue::{Issue, IssueRecord};
use crate::layout::allocate;
use crate::source::{IssueSource, JsonSource, DEFAULT_LIMIT};
use crate::table::build;
use crate::views::{render_comments, render_issue};

/// Printed by `list` when no issue survives filtering.
pub const NO_ISSUES: &str = "No issues found.";

#[derive(Debug, Parser)]
#[command(name = "tiny-jira", version, about = "Browse Jira issues in the terminal")]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Log pipeline steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List issues as a table
    List(ListArgs),
    /// Show one issue in detail
    Show(ShowArgs),
    /// Show the comments on one issue
    Comments(CommentsArgs),
    /// List the available columns
    Columns(DisplayArgs),
    /// Print the resolved configuration
    Config(ConfigArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List(_) => "list",
            Command::Show(_) => "show",
            Command::Comments(_) => "comments",
            Command::Columns(_) => "columns",
            Command::Config(_) => "config",
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Issue JSON file, or `-` for stdin
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    pub input: PathBuf,

    /// Comma-separated columns, e.g. `key,summary,status`
    #[arg(short, long, value_name = "LIST")]
    pub columns: Option<String>,

    /// Filter expression, e.g. `status:"In Progress",assignee:ada`
    #[arg(short, long, value_name = "EXPR")]
    pub filter: Option<String>,

    /// Maximum number of issues to read
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Print each issue in detail, with its description, instead of a table
    #[arg(short, long)]
    pub describe: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Issue key, e.g. PROJ-123
    pub key: String,

    /// Issue JSON file, or `-` for stdin
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    pub input: PathBuf,

    /// Leave out the description
    #[arg(long)]
    pub no_description: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Debug, Args)]
pub struct CommentsArgs {
    /// Issue key, e.g. PROJ-123
    pub key: String,

    /// Issue JSON file, or `-` for stdin
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    pub input: PathBuf,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Fail unless endpoint, user and token are all set
    #[arg(long)]
    pub check: bool,
}

/// Options shared by every drawing command.
#[derive(Debug, Clone, Args)]
pub struct DisplayArgs {
    /// Output width; defaults to the terminal width
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Output mode
    #[arg(short, long, value_enum, default_value_t = OutputArg::Auto)]
    pub output: OutputArg,

    /// Border style
    #[arg(short, long, value_enum, default_value_t = BorderArg::Light)]
    pub border: BorderArg,
}

impl DisplayArgs {
    pub fn mode(&self) -> OutputMode {
        self.output.into()
    }

    pub fn context(&self) -> RenderContext {
        RenderContext::new(self.mode(), self.width.map(usize::from))
            .with_border(self.border.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Auto,
    Term,
    Text,
    Json,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Auto => OutputMode::Auto,
            OutputArg::Term => OutputMode::Term,
            OutputArg::Text => OutputMode::Text,
            OutputArg::Json => OutputMode::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BorderArg {
    Light,
    Ascii,
    Rounded,
    None,
}

impl From<BorderArg> for BorderStyle {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Light => BorderStyle::Light,
            BorderArg::Ascii => BorderStyle::Ascii,
            BorderArg::Rounded => BorderStyle::Rounded,
            BorderArg::None => BorderStyle::None,
        }
    }
}

/// Executes `cli` and returns the text to print.
pub fn run(cli: &Cli, env: &dyn EnvReader) -> Result<String> {
    let config = Config::load(&cli.config, env)?;
    debug!(command = cli.command.name(), "running command");

    match &cli.command {
        Command::List(args) => list(args, &config),
        Command::Show(args) => show(args, &config),
        Command::Comments(args) => comments(args, &config),
        Command::Columns(display) => columns(display, &config),
        Command::Config(args) => show_config(args, &config),
    }
}

fn list(args: &ListArgs, config: &Config) -> Result<String> {
    let raw_columns = args.columns.as_deref().or(config.columns.as_deref());
    let columns = parse_columns(raw_columns)?.columns();
    let filter = Filter::parse(args.filter.as_deref());

    let issues = load_issues(&args.input, args.limit)?;
    let filtered = filter.apply(&issues);
    let mode = args.display.mode();

    if filtered.items.is_empty() && !mode.is_structured() {
        return Ok(NO_ISSUES.to_string());
    }

    let ctx = args.display.context();
    if args.describe && !mode.is_structured() {
        let theme = load_theme(config)?;
        let blocks: Vec<String> = filtered
            .items
            .iter()
            .map(|issue| render_issue(issue, true, &ctx, &theme))
            .collect();
        return Ok(blocks.join("\n\n"));
    }

    let widths = allocate(&columns, ctx.width);
    let table = build(filtered.items.iter().copied(), &columns, &widths)?;

    if mode.is_structured() {
        return Ok(serde_json::to_string_pretty(&table)?);
    }
    Ok(table.render(&ctx, &load_theme(config)?))
}

fn show(args: &ShowArgs, config: &Config) -> Result<String> {
    let issue = JsonSource::open(&args.input).issue(&args.key)?.into_issue();
    if args.display.mode().is_structured() {
        return Ok(serde_json::to_string_pretty(&issue)?);
    }
    let ctx = args.display.context();
    Ok(render_issue(
        &issue,
        !args.no_description,
        &ctx,
        &load_theme(config)?,
    ))
}

fn comments(args: &CommentsArgs, config: &Config) -> Result<String> {
    let issue = JsonSource::open(&args.input).issue(&args.key)?.into_issue();
    if args.display.mode().is_structured() {
        return Ok(serde_json::to_string_pretty(&issue.comments)?);
    }
    let ctx = args.display.context();
    Ok(render_comments(&issue, &ctx, &load_theme(config)?))
}

fn columns(display: &DisplayArgs, config: &Config) -> Result<String> {
    if display.mode().is_structured() {
        return Ok(serde_json::to_string_pretty(&CATALOGUE)?);
    }

    let ctx = display.context();
    let theme = load_theme(config)?;
    let painter = Painter::new(&theme, ctx.color_enabled);
    let table = Table::new(vec![
        Col::new("Name", 10).style("key"),
        Col::new("Header", 10),
        Col::new("Min", 5).right(),
        Col::new("Ideal", 5).right(),
    ])
    .border(ctx.border);

    let rows: Vec<Vec<String>> = CATALOGUE
        .iter()
        .map(|c| {
            vec![
                c.name.to_string(),
                c.header.to_string(),
                c.min_width.to_string(),
                c.ideal_width
                    .map_or_else(|| "flex".to_string(), |w| w.to_string()),
            ]
        })
        .collect();
    Ok(table.render(&rows, &painter))
}

fn show_config(args: &ConfigArgs, config: &Config) -> Result<String> {
    let mut out = config.describe();
    if args.check {
        config.credentials()?;
        out.push_str("\nConfiguration OK.");
    }
    Ok(out)
}

fn load_issues(input: &Path, limit: usize) -> Result<Vec<Issue>> {
    let records = JsonSource::open(input).search(limit)?;
    Ok(records.into_iter().map(IssueRecord::into_issue).collect())
}

/// The built-in theme, with the configured theme file layered on top.
fn load_theme(config: &Config) -> Result<Theme> {
    let base = Theme::base();
    match &config.theme {
        Some(path) => Ok(base.merge(Theme::from_file(path)?)),
        None => Ok(base),
    }
}
