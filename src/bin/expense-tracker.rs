//! CLI front-end for the expense ledger.

use core::fmt::Write as _;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use expense_tracker_rs::aggregate::expense_shares;
use expense_tracker_rs::config::LedgerConfig;
use expense_tracker_rs::filter::ViewFilter;
use expense_tracker_rs::ledger::Ledger;
use expense_tracker_rs::models::{Totals, Transaction, TransactionId, TypeFilter};
use expense_tracker_rs::storage::{FileStorage, Storage};
use expense_tracker_rs::transfer::export_file_name;
use expense_tracker_rs::view::{
    EMPTY_CHART_MESSAGE, EMPTY_LIST_MESSAGE, NotificationKind, Presenter, RemoveOutcome, Tracker,
};
use owo_colors::OwoColorize;

/// Environment variable overriding the storage directory.
const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Environment variable holding a comma-separated category list.
const CATEGORIES_ENV: &str = "EXPENSE_TRACKER_CATEGORIES";

/// Environment variable holding log directives; also read from `.env`.
const LOG_ENV: &str = "RUST_LOG";

/// Log level used when `RUST_LOG` is absent.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Width of the widest bar in the chart view.
const CHART_WIDTH: f64 = 30.0;

/// Expense tracker: record transactions and review where money goes.
#[derive(Debug, Parser)]
#[command(name = "expense-tracker", version, about)]
struct Cli {
    /// Override the storage directory (default: XDG data dir).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Record a new transaction (negative amount for an expense).
    Add(AddArgs),
    /// List transactions, newest first.
    List(ListArgs),
    /// Delete one transaction.
    Remove {
        /// Identifier shown by `list`.
        id: u64,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Delete every transaction and reset ids.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Show balance, income, expense and the category breakdown.
    Summary,
    /// Show the expense breakdown by category.
    Chart,
    /// Replace all transactions with the contents of a JSON file.
    Import {
        /// File holding a JSON array of transactions.
        file: PathBuf,
    },
    /// Write all transactions to a JSON file.
    Export {
        /// Target file or directory (default: current directory).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Arguments for the `add` subcommand.
#[derive(Debug, Args)]
struct AddArgs {
    /// Description.
    text: String,
    /// Signed amount: positive is income, negative is expense.
    #[arg(long, allow_negative_numbers = true)]
    amount: f64,
    /// Category label.
    #[arg(long)]
    category: String,
    /// Date as YYYY-MM-DD (default: today).
    #[arg(long)]
    date: Option<String>,
}

/// Arguments for the `list` subcommand.
#[derive(Debug, Args)]
struct ListArgs {
    /// Category to show, or `all`.
    #[arg(long, default_value = "all")]
    category: String,
    /// Transaction type: all, income or expense.
    #[arg(long = "type", default_value_t = TypeFilter::All)]
    kind: TypeFilter,
}

// ── Presenter ────────────────────────────────────────────────────────

/// Which views a command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sections {
    /// Transaction list.
    list: bool,
    /// Balance, income and expense.
    totals: bool,
    /// Category breakdown.
    chart: bool,
}

impl Sections {
    /// Nothing but notifications.
    const NONE: Self = Self {
        list: false,
        totals: false,
        chart: false,
    };
    /// List only.
    const LIST: Self = Self {
        list: true,
        totals: false,
        chart: false,
    };
    /// Totals only.
    const TOTALS: Self = Self {
        list: false,
        totals: true,
        chart: false,
    };
    /// Chart only.
    const CHART: Self = Self {
        list: false,
        totals: false,
        chart: true,
    };
    /// Totals and chart.
    const SUMMARY: Self = Self {
        list: false,
        totals: true,
        chart: true,
    };
}

/// Presenter that buffers rendered output for stdout and prompts on
/// stdin/stderr.
#[derive(Debug)]
struct TerminalPresenter {
    /// Rendered text, flushed once the command finishes.
    out: String,
    /// Views to render; others are skipped.
    sections: Sections,
    /// Answer every confirmation with yes.
    assume_yes: bool,
}

impl TerminalPresenter {
    /// Creates a presenter showing the given sections.
    const fn new(sections: Sections, assume_yes: bool) -> Self {
        Self {
            out: String::new(),
            sections,
            assume_yes,
        }
    }

    /// Returns everything rendered so far.
    fn output(&self) -> &str {
        &self.out
    }
}

impl Presenter for TerminalPresenter {
    fn render_list(&mut self, view: &[&Transaction]) {
        if !self.sections.list {
            return;
        }
        if view.is_empty() {
            _ = writeln!(self.out, "{}", EMPTY_LIST_MESSAGE.dimmed());
            return;
        }
        _ = writeln!(
            self.out,
            "{} {}",
            "Transactions".green().bold(),
            format_args!("({})", view.len()).dimmed()
        );
        _ = writeln!(self.out);
        _ = writeln!(self.out, "{}", transactions_table(view));
    }

    fn render_totals(&mut self, totals: &Totals) {
        if !self.sections.totals {
            return;
        }
        let balance = format!("{:.2}", totals.balance);
        let balance_cell = if totals.balance >= 0.0_f64 {
            balance.bold().to_string()
        } else {
            balance.red().bold().to_string()
        };
        _ = writeln!(self.out, "{} {balance_cell}", "Balance:".bold());
        _ = writeln!(
            self.out,
            "{} {}",
            "Income: ".bold(),
            format_args!("+{:.2}", totals.income).green()
        );
        _ = writeln!(
            self.out,
            "{} {}",
            "Expense:".bold(),
            format_args!("-{:.2}", totals.expense).red()
        );
    }

    fn render_chart(&mut self, breakdown: &BTreeMap<String, f64>) {
        if !self.sections.chart {
            return;
        }
        let shares = expense_shares(breakdown);
        if shares.is_empty() {
            _ = writeln!(self.out, "{}", EMPTY_CHART_MESSAGE.dimmed());
            return;
        }
        let max_amount = shares.iter().map(|share| share.amount).fold(0.0_f64, f64::max);

        let mut table = Table::new();
        _ = table.load_preset(UTF8_FULL);
        _ = table.set_header(vec![
            Cell::new("Category").fg(Color::Cyan),
            Cell::new("Spent").fg(Color::Cyan),
            Cell::new("Share").fg(Color::Cyan),
            Cell::new("").fg(Color::Cyan),
        ]);
        for share in &shares {
            _ = table.add_row(vec![
                Cell::new(share.label()),
                Cell::new(format!("{:.2}", share.amount)).fg(Color::Red),
                Cell::new(format!("{:.1}%", share.percent)),
                Cell::new(bar(share.amount, max_amount)).fg(Color::Magenta),
            ]);
        }
        _ = writeln!(self.out, "{}", "Expenses by category".green().bold());
        _ = writeln!(self.out);
        _ = writeln!(self.out, "{table}");
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        let line = match kind {
            NotificationKind::Success => message.green().to_string(),
            NotificationKind::Info => message.cyan().to_string(),
        };
        _ = writeln!(self.out, "{line}");
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        ask(prompt, &mut io::stdin().lock(), &mut io::stderr().lock()).unwrap_or(false)
    }
}

/// Writes `prompt` and reads one answer line; only `y`/`yes` confirm.
fn ask<R: io::BufRead, W: io::Write>(
    prompt: &str,
    input: &mut R,
    prompt_out: &mut W,
) -> io::Result<bool> {
    write!(prompt_out, "{prompt} [y/N] ")?;
    prompt_out.flush()?;
    let mut line = String::new();
    let _read = input.read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Builds the transaction list table.
fn transactions_table(view: &[&Transaction]) -> Table {
    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Date").fg(Color::Cyan),
        Cell::new("Text").fg(Color::Cyan),
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Amount").fg(Color::Cyan),
    ]);
    for tx in view {
        let amount_color = if tx.is_expense() {
            Color::Red
        } else {
            Color::Green
        };
        _ = table.add_row(vec![
            Cell::new(tx.id),
            Cell::new(tx.date.format("%b %-d, %Y")),
            Cell::new(&tx.text),
            Cell::new(&tx.category),
            Cell::new(tx.signed_amount()).fg(amount_color),
        ]);
    }
    table
}

/// Renders a horizontal bar proportional to `amount / max`.
fn bar(amount: f64, max: f64) -> String {
    if max <= 0.0_f64 {
        return String::new();
    }
    let filled = (amount / max * CHART_WIDTH).round().clamp(1.0_f64, CHART_WIDTH);
    let mut cells = String::new();
    let mut drawn = 0.0_f64;
    while drawn < filled {
        cells.push('\u{2588}');
        drawn += 1.0_f64;
    }
    cells
}

// ── Configuration ────────────────────────────────────────────────────

/// Picks the storage directory: flag, then environment, then the
/// platform default.
fn resolve_data_dir(
    flag: Option<PathBuf>,
    env_value: Option<String>,
) -> expense_tracker_rs::error::Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    env_value
        .filter(|value| !value.trim().is_empty())
        .map_or_else(FileStorage::default_dir, |value| Ok(PathBuf::from(value)))
}

/// Builds the ledger configuration from the category environment value.
fn ledger_config(env_value: Option<String>) -> LedgerConfig {
    env_value.map_or_else(LedgerConfig::default, |list| {
        LedgerConfig::from_category_list(&list)
    })
}

/// Builds the log filter from `RUST_LOG`, falling back to `info` when it
/// is unset or unparsable.
fn log_filter(directives: Option<String>) -> tracing_subscriber::EnvFilter {
    directives
        .and_then(|value| tracing_subscriber::EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Reads a non-empty environment variable.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

// ── Commands ─────────────────────────────────────────────────────────

/// Runs the CLI, returning an appropriate exit code.
fn run() -> io::Result<ExitCode> {
    let _dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(env_var(LOG_ENV)))
        .init();

    let cli = Cli::parse();

    let storage = match resolve_data_dir(cli.data_dir, env_var(DATA_DIR_ENV))
        .and_then(FileStorage::new)
    {
        Ok(storage) => storage,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to initialize storage: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let ledger = Ledger::load_with_config(storage, ledger_config(env_var(CATEGORIES_ENV)));
    dispatch(ledger, cli.command)
}

/// Picks the presenter sections for a command and runs it, then prints
/// the rendered output.
fn dispatch<S: Storage>(ledger: Ledger<S>, command: Command) -> io::Result<ExitCode> {
    let (sections, assume_yes) = match command {
        Command::Add(_) | Command::Import { .. } => (Sections::TOTALS, false),
        Command::List(_) => (Sections::LIST, false),
        Command::Remove { yes, .. } | Command::Clear { yes } => (Sections::TOTALS, yes),
        Command::Summary => (Sections::SUMMARY, false),
        Command::Chart => (Sections::CHART, false),
        Command::Export { .. } => (Sections::NONE, false),
    };
    let mut tracker = Tracker::new(ledger, TerminalPresenter::new(sections, assume_yes));

    let code = match command {
        Command::Add(args) => cmd_add(&mut tracker, &args)?,
        Command::List(args) => cmd_list(&mut tracker, &args),
        Command::Remove { id, .. } => cmd_remove(&mut tracker, id)?,
        Command::Clear { .. } => cmd_clear(&mut tracker)?,
        Command::Summary | Command::Chart => {
            tracker.refresh();
            ExitCode::SUCCESS
        }
        Command::Import { file } => cmd_import(&mut tracker, &file)?,
        Command::Export { output } => cmd_export(&tracker, output.as_deref())?,
    };

    io::stdout()
        .lock()
        .write_all(tracker.presenter().output().as_bytes())?;
    Ok(code)
}

/// Prints an error line to stderr and returns a failure code.
fn fail(context: &str, err: &dyn core::fmt::Display) -> io::Result<ExitCode> {
    writeln!(
        io::stderr().lock(),
        "{} {context}: {err}",
        "error:".red().bold()
    )?;
    Ok(ExitCode::FAILURE)
}

/// Executes the `add` subcommand.
fn cmd_add<S: Storage>(
    tracker: &mut Tracker<S, TerminalPresenter>,
    args: &AddArgs,
) -> io::Result<ExitCode> {
    let date = args
        .date
        .clone()
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
    match tracker.add(&args.text, args.amount, &args.category, &date) {
        Ok(_tx) => Ok(ExitCode::SUCCESS),
        Err(err) => fail("could not add transaction", &err),
    }
}

/// Executes the `list` subcommand.
fn cmd_list<S: Storage>(tracker: &mut Tracker<S, TerminalPresenter>, args: &ListArgs) -> ExitCode {
    tracker.set_filter(ViewFilter::new().category(&args.category).kind(args.kind));
    ExitCode::SUCCESS
}

/// Executes the `remove` subcommand.
fn cmd_remove<S: Storage>(
    tracker: &mut Tracker<S, TerminalPresenter>,
    id: u64,
) -> io::Result<ExitCode> {
    match tracker.remove(TransactionId::new(id)) {
        RemoveOutcome::Removed => Ok(ExitCode::SUCCESS),
        RemoveOutcome::NotFound => fail(
            "could not remove transaction",
            &format!("no transaction with id {id}"),
        ),
        RemoveOutcome::Cancelled => {
            writeln!(io::stderr().lock(), "{}", "Aborted.".dimmed())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Executes the `clear` subcommand.
fn cmd_clear<S: Storage>(tracker: &mut Tracker<S, TerminalPresenter>) -> io::Result<ExitCode> {
    if !tracker.clear_all() {
        writeln!(io::stderr().lock(), "{}", "Aborted.".dimmed())?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the `import` subcommand.
fn cmd_import<S: Storage>(
    tracker: &mut Tracker<S, TerminalPresenter>,
    file: &Path,
) -> io::Result<ExitCode> {
    let json = match fs::read_to_string(file) {
        Ok(json) => json,
        Err(err) => return fail(&format!("could not read {}", file.display()), &err),
    };
    match tracker.import_json(&json) {
        Ok(_count) => Ok(ExitCode::SUCCESS),
        Err(err) => fail("import failed", &err),
    }
}

/// Executes the `export` subcommand.
fn cmd_export<S: Storage>(
    tracker: &Tracker<S, TerminalPresenter>,
    output: Option<&Path>,
) -> io::Result<ExitCode> {
    let json = match tracker.export_json() {
        Ok(json) => json,
        Err(err) => return fail("export failed", &err),
    };
    let path = export_path(output, &export_file_name(Local::now().date_naive()));
    if let Err(err) = fs::write(&path, json) {
        return fail(&format!("could not write {}", path.display()), &err);
    }
    writeln!(
        io::stdout().lock(),
        "{} {} {}",
        "Exported".green().bold(),
        format_args!("{} transactions to", tracker.ledger().len()),
        path.display()
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Resolves the export target: a directory gets the default file name,
/// anything else is used as the file path.
fn export_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

/// Entry point.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // Last-resort error output; if stderr itself failed there is
            // nothing left to report to.
            let _ignored = writeln!(io::stderr(), "fatal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}
