//! Lightweight command-line front end.
//!
//! Commands carry their values as arguments; missing values are prompted
//! for interactively. Script mode (`DAFTAR_CLI_SCRIPT=1`) disables prompts
//! and colored output so the binary can be driven from tests and shells.

use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::Input;

use daftar_core::{
    api_close_and_roll, api_current_period, api_get_reminder, api_preview_report, api_record_expense,
    api_record_purchase, api_record_sale, api_report, api_set_reminder, api_start_ledger, Clock,
    CoreError, ReminderService,
};

use crate::{
    app::App,
    errors::CliError,
    notify::TerminalNotifier,
    render::{format_amount, render_report},
};

/// Environment toggle for non-interactive use.
pub const SCRIPT_MODE_ENV: &str = "DAFTAR_CLI_SCRIPT";

/// Entry point for the `daftar_cli` binary.
pub fn run_cli() -> Result<(), CliError> {
    if script_mode() {
        colored::control::set_override(false);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");
    let rest = if args.is_empty() { &args[..] } else { &args[1..] };

    if matches!(command, "help" | "--help" | "-h") {
        print_help();
        return Ok(());
    }

    let app = App::bootstrap()?;
    match command {
        "start" => cmd_start(&app, rest),
        "sale" => cmd_sale(&app, rest),
        "purchase" => cmd_purchase(&app, rest),
        "expense" => cmd_expense(&app, rest),
        "report" => cmd_report(&app),
        "preview" => cmd_preview(&app, rest),
        "close" => cmd_close(&app, rest),
        "remind" => cmd_remind(&app),
        "reminder" => cmd_reminder(&app, rest),
        other => Err(CliError::Input(format!("unknown command `{other}`"))),
    }
}

fn cmd_start(app: &App, args: &[String]) -> Result<(), CliError> {
    let owner = app.owner();
    if let Some(period) = api_current_period(&app.store, &owner)? {
        println!(
            "A 15-day period is already open: {} -> {}",
            period.start_date, period.end_date
        );
        return Ok(());
    }

    let opening = amount_arg(args.first(), "Opening stock cost (0 if the stock is empty)")?;
    let period = api_start_ledger(&app.store, &owner, opening, app.clock.today())?;
    println!("{}", "Saved.".green());
    println!(
        "New 15-day period: {} -> {}",
        period.start_date, period.end_date
    );
    Ok(())
}

fn cmd_sale(app: &App, args: &[String]) -> Result<(), CliError> {
    let cash = amount_arg(args.first(), "Today's cash sales")?;
    let card = amount_arg(args.get(1), "Card sales")?;
    let date = date_arg(app, args.get(2))?;

    match api_record_sale(&app.store, &app.owner(), date, cash, card) {
        Ok(()) => {
            println!("{}", "Saved.".green());
            println!(
                "cash: {}  card: {}  total: {}",
                format_amount(cash),
                format_amount(card),
                format_amount(cash + card)
            );
            Ok(())
        }
        Err(CoreError::NoOpenPeriod) => {
            print_no_open_period();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_purchase(app: &App, args: &[String]) -> Result<(), CliError> {
    let total_cost = amount_arg(args.first(), "Purchase cost (total)")?;
    let note = note_arg(&args[args.len().min(1)..]);

    match api_record_purchase(&app.store, &app.owner(), app.clock.today(), total_cost, &note) {
        Ok(_) => {
            println!("{}", "Purchase saved.".green());
            Ok(())
        }
        Err(CoreError::NoOpenPeriod) => {
            print_no_open_period();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_expense(app: &App, args: &[String]) -> Result<(), CliError> {
    let amount = amount_arg(args.first(), "Expense amount")?;
    let note = note_arg(&args[args.len().min(1)..]);

    match api_record_expense(&app.store, &app.owner(), app.clock.today(), amount, &note) {
        Ok(_) => {
            println!("{}", "Expense saved.".green());
            Ok(())
        }
        Err(CoreError::NoOpenPeriod) => {
            print_no_open_period();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_report(app: &App) -> Result<(), CliError> {
    match api_report(&app.store, &app.owner()) {
        Ok(report) => {
            print!("{}", render_report(&report));
            Ok(())
        }
        Err(CoreError::NoOpenPeriod) => {
            print_no_open_period();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_preview(app: &App, args: &[String]) -> Result<(), CliError> {
    let closing = amount_arg(args.first(), "Hypothetical closing stock cost")?;
    match api_preview_report(&app.store, &app.owner(), closing) {
        Ok(report) => {
            println!("{}", "Preview only; the period stays open.".cyan());
            print!("{}", render_report(&report));
            Ok(())
        }
        Err(CoreError::NoOpenPeriod) => {
            print_no_open_period();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_close(app: &App, args: &[String]) -> Result<(), CliError> {
    let closing = amount_arg(args.first(), "Closing stock cost (remaining stock)")?;
    match api_close_and_roll(&app.store, &app.owner(), closing) {
        Ok((report, next)) => {
            print!("{}", render_report(&report));
            println!();
            println!(
                "{} {} -> {}",
                "New 15-day period opened:".green(),
                next.start_date,
                next.end_date
            );
            Ok(())
        }
        Err(CoreError::NoOpenPeriod) => {
            print_no_open_period();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn cmd_remind(app: &App) -> Result<(), CliError> {
    let decision = ReminderService::run_tick(
        &app.store,
        &app.clock,
        &TerminalNotifier,
        &app.owner(),
    )?;
    if decision.is_none() {
        println!("Reminders are disabled.");
    }
    Ok(())
}

fn cmd_reminder(app: &App, args: &[String]) -> Result<(), CliError> {
    let owner = app.owner();
    match args.first().map(String::as_str) {
        None | Some("show") => {
            let setting = api_get_reminder(&app.store, &owner)?;
            let state = if setting.enabled { "on" } else { "off" };
            println!(
                "Daily reminder: {state} at {:02}:{:02}",
                setting.hour, setting.minute
            );
            if setting.enabled {
                let next = ReminderService::next_fire_after(&setting, app.clock.now());
                println!("Next reminder: {}", next.format("%Y-%m-%d %H:%M"));
            }
            Ok(())
        }
        Some("set") => {
            let hour = number_arg(args.get(1), "reminder hour")?;
            let minute = number_arg(args.get(2), "reminder minute")?;
            let enabled = match args.get(3).map(String::as_str) {
                None | Some("on") => true,
                Some("off") => false,
                Some(other) => {
                    return Err(CliError::Input(format!(
                        "expected `on` or `off`, got `{other}`"
                    )))
                }
            };
            let setting = api_set_reminder(&app.store, &owner, hour, minute, enabled)?;
            let state = if setting.enabled { "on" } else { "off" };
            println!(
                "{} Daily reminder: {state} at {:02}:{:02}",
                "Saved.".green(),
                setting.hour,
                setting.minute
            );
            Ok(())
        }
        Some(other) => Err(CliError::Input(format!(
            "unknown reminder subcommand `{other}`"
        ))),
    }
}

fn print_help() {
    println!("daftar_cli: 15-day inventory-period shop ledger");
    println!();
    println!("Usage: daftar_cli <command> [values...]");
    println!();
    println!("Commands:");
    println!("  start [opening]            open the first period with an opening stock cost");
    println!("  sale [cash] [card] [date]  record (or correct) one day's sales");
    println!("  purchase [cost] [note]     record an inventory purchase at cost");
    println!("  expense [amount] [note]    record an operating expense");
    println!("  report                     show the running period report");
    println!("  preview [closing]          preview profit with a hypothetical closing stock");
    println!("  close [closing]            close the period and open the next one");
    println!("  remind                     run one reminder tick now");
    println!("  reminder [show|set H M on|off]  inspect or change the daily reminder");
}

fn print_no_open_period() {
    println!(
        "{}",
        "No open 15-day period. Run `daftar_cli start` and enter the opening stock cost."
            .yellow()
    );
}

fn script_mode() -> bool {
    std::env::var_os(SCRIPT_MODE_ENV).is_some()
}

/// Reads a monetary amount from the argument, or prompts for it. Spaces and
/// commas in the input are ignored (`1 200 000` and `1,200,000` both parse).
fn amount_arg(arg: Option<&String>, prompt: &str) -> Result<i64, CliError> {
    let raw = match arg {
        Some(value) => value.clone(),
        None => prompt_value(prompt)?,
    };
    parse_amount(&raw)
}

fn number_arg(arg: Option<&String>, field: &str) -> Result<u32, CliError> {
    let raw = arg.ok_or_else(|| CliError::Input(format!("missing {field}")))?;
    raw.parse()
        .map_err(|_| CliError::Input(format!("{field} must be a number, got `{raw}`")))
}

fn date_arg(app: &App, arg: Option<&String>) -> Result<NaiveDate, CliError> {
    match arg {
        Some(raw) => raw
            .parse()
            .map_err(|_| CliError::Input(format!("expected a date like 2024-01-31, got `{raw}`"))),
        None => Ok(app.clock.today()),
    }
}

fn note_arg(args: &[String]) -> String {
    let note = args.join(" ");
    if note.trim().is_empty() {
        "-".into()
    } else {
        note
    }
}

fn parse_amount(raw: &str) -> Result<i64, CliError> {
    let cleaned: String = raw.chars().filter(|c| *c != ' ' && *c != ',').collect();
    cleaned
        .parse()
        .map_err(|_| CliError::Input(format!("expected an amount like 1200000, got `{raw}`")))
}

fn prompt_value(prompt: &str) -> Result<String, CliError> {
    if script_mode() {
        return Err(CliError::Input(format!("missing value: {prompt}")));
    }
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|err| CliError::Input(err.to_string()))
}
