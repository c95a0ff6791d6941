use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::RosterConfig;

pub mod add;
pub mod display;
pub mod select;

/// Контекст одного запуска: разрешённая конфигурация.
/// Логгер к этому моменту уже инициализирован (см. logging::init_logger).
#[derive(Clone, Debug)]
pub struct Context {
    pub cfg: RosterConfig,
}

impl Context {
    pub fn new(cfg: RosterConfig) -> Self {
        Self { cfg }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "students",
    version,
    about = "Student roster stored in a JSON file",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Add a new student
    Add(AddOpts),
    /// Display all students
    Display(DisplayOpts),
    /// Select the students with average grade >= 4.0
    Select(SelectOpts),
}

#[derive(Args, Debug, Clone)]
pub struct AddOpts {
    /// The data file name
    pub filename: PathBuf,
    /// The student's name
    #[arg(short = 'n', long)]
    pub name: String,
    /// The student's group
    #[arg(short = 'g', long)]
    pub group: Option<i64>,
    /// The student's grade (space-separated scores, e.g. "5 4 5")
    #[arg(long, visible_alias = "gr", allow_hyphen_values = true)]
    pub grade: String,
}

#[derive(Args, Debug, Clone)]
pub struct DisplayOpts {
    /// The data file name
    pub filename: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct SelectOpts {
    /// The data file name
    pub filename: PathBuf,
    /// The required select (accepted for compatibility, the filter is fixed)
    #[arg(short = 's', long = "select")]
    pub criterion: String,
}

impl Cmd {
    pub fn filename(&self) -> &Path {
        match self {
            Cmd::Add(o) => &o.filename,
            Cmd::Display(o) => &o.filename,
            Cmd::Select(o) => &o.filename,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Add(_) => "add",
            Cmd::Display(_) => "display",
            Cmd::Select(_) => "select",
        }
    }
}

/// Выполнить разобранную команду.
pub fn run(cli: Cli, ctx: &Context) -> Result<()> {
    log::info!(
        "command line parsed: {} {}",
        cli.cmd.name(),
        cli.cmd.filename().display()
    );
    match cli.cmd {
        Cmd::Add(opts) => add::exec(ctx, opts),
        Cmd::Display(opts) => display::exec(ctx, opts),
        Cmd::Select(opts) => select::exec(ctx, opts),
    }
}
