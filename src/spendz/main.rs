use chrono::{Local, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use spendz::api::{BudgetAction, CmdMessage, ConfigAction, MessageLevel, SpendzApi};
use spendz::error::Result;
use spendz::model::{RecordDraft, RecordPatch};
use spendz::settings::DisplaySettings;
use spendz::store::fs_backend::FsBackend;
use spendz::summary::SpendSummary;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let backend = FsBackend::new(data_dir);
    let mut api = SpendzApi::open(backend)?;

    if let Some(notice) = api.load_notice() {
        eprintln!("{}", format!("Warning: {}", notice).yellow());
    }

    match cli.command {
        Some(Commands::Add {
            description,
            amount,
            category,
            date,
        }) => handle_add(&mut api, description, amount, category, date),
        Some(Commands::List { search }) => handle_list(&api, search),
        Some(Commands::Edit {
            position,
            description,
            amount,
            category,
            date,
        }) => handle_edit(&mut api, position, description, amount, category, date),
        Some(Commands::Delete { positions }) => handle_delete(&mut api, positions),
        Some(Commands::Summary { days }) => handle_summary(&api, days),
        Some(Commands::Budget { value, clear }) => handle_budget(&api, value, clear),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_list(&api, None),
    }
}

fn default_data_dir() -> PathBuf {
    let proj_dirs =
        ProjectDirs::from("com", "spendz", "spendz").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_add(
    api: &mut SpendzApi<FsBackend>,
    description: String,
    amount: String,
    category: String,
    date: Option<String>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive().to_string());
    let result = api.add_record(RecordDraft {
        description,
        amount,
        category,
        date,
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &SpendzApi<FsBackend>, search: Option<String>) -> Result<()> {
    let settings = load_settings(api)?;
    let result = api.list_records(search.as_deref())?;

    if result.listed_records.is_empty() {
        if search.is_some() {
            println!("No matching expenses.");
        } else {
            println!("No expenses recorded.");
        }
        return Ok(());
    }

    let symbol = currency_symbol(&settings.base_currency);
    for lr in &result.listed_records {
        let description = truncate_to_width(&lr.record.description, DESCRIPTION_WIDTH);
        let padding = DESCRIPTION_WIDTH.saturating_sub(description.width());
        println!(
            "{:>3}. {}  {}{} {:>10}  {:<14} {}",
            lr.position,
            lr.record.date,
            description,
            " ".repeat(padding),
            format!("{}{:.2}", symbol, lr.record.amount),
            lr.record.category,
            format_time_ago(lr.record.created_at).dimmed()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    api: &mut SpendzApi<FsBackend>,
    position: usize,
    description: Option<String>,
    amount: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let result = api.edit_record(
        position,
        RecordPatch {
            description,
            amount,
            category,
            date,
        },
    )?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut SpendzApi<FsBackend>, positions: Vec<usize>) -> Result<()> {
    let result = api.delete_records(&positions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_summary(api: &SpendzApi<FsBackend>, days: u32) -> Result<()> {
    let settings = load_settings(api)?;
    let today = Local::now().date_naive();
    let result = api.summary(days, today)?;

    if let Some(summary) = &result.summary {
        print_summary(summary, &settings, result.budget);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_budget(api: &SpendzApi<FsBackend>, value: Option<f64>, clear: bool) -> Result<()> {
    let action = if clear {
        BudgetAction::Clear
    } else {
        match value {
            Some(threshold) => BudgetAction::Set(threshold),
            None => BudgetAction::Show,
        }
    };
    let result = api.budget(action)?;

    if result.messages.is_empty() {
        if let Some(threshold) = result.budget {
            let settings = load_settings(api)?;
            println!(
                "Budget: {}{:.2}",
                currency_symbol(&settings.base_currency),
                threshold
            );
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &SpendzApi<FsBackend>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (&key, value) {
        (None, _) => ConfigAction::ShowAll,
        // Showing a single key reuses the full view below
        (Some(_), None) => ConfigAction::ShowAll,
        (Some(k), Some(v)) => ConfigAction::Set(k.clone(), v),
    };
    let result = api.config(action)?;

    if let Some(settings) = &result.settings {
        let entries = [
            ("base-currency", settings.base_currency.clone()),
            ("rate-eur", format!("{}", settings.rate_eur)),
            ("rate-gbp", format!("{}", settings.rate_gbp)),
        ];
        for (name, rendered) in entries {
            if key.as_deref().map_or(true, |k| k == name) {
                println!("{} = {}", name, rendered);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn load_settings(api: &SpendzApi<FsBackend>) -> Result<DisplaySettings> {
    Ok(api
        .config(ConfigAction::ShowAll)?
        .settings
        .unwrap_or_default())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const DESCRIPTION_WIDTH: usize = 40;
const BAR_WIDTH: usize = 36;

fn print_summary(summary: &SpendSummary, settings: &DisplaySettings, budget: Option<f64>) {
    let symbol = currency_symbol(&settings.base_currency);

    println!(
        "Total spent:  {}",
        format!("{}{:.2}", symbol, summary.total_spent).bold()
    );
    if settings.base_currency != "EUR" && settings.rate_eur != 1.0 {
        println!("              ≈ {:.2} EUR", summary.total_spent * settings.rate_eur);
    }
    if settings.base_currency != "GBP" && settings.rate_gbp != 1.0 {
        println!("              ≈ {:.2} GBP", summary.total_spent * settings.rate_gbp);
    }
    println!(
        "Top category: {}",
        summary.top_category.as_deref().unwrap_or("None")
    );
    if let Some(threshold) = budget {
        println!("Budget:       {}{:.2}", symbol, threshold);
    }

    if summary.daily.is_empty() {
        return;
    }
    println!("\nLast {} days:", summary.daily.len());
    let max = summary
        .daily
        .iter()
        .map(|d| d.total)
        .fold(0.0_f64, f64::max);
    for day in &summary.daily {
        let bar_len = if max > 0.0 {
            ((day.total / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "▇".repeat(bar_len);
        println!(
            "  {}  {:<width$}  {}{:.2}",
            day.date,
            bar,
            symbol,
            day.total,
            width = BAR_WIDTH
        );
    }
}

fn currency_symbol(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{} ", other),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    format!(
        "{:>14}",
        formatter.convert(duration.to_std().unwrap_or_default())
    )
}
