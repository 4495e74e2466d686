mod chart;
mod cli;
mod config;
mod domain;
mod ledger;
mod report;

use anyhow::Result;
use clap::Parser;

use crate::cli::{AddArgs, ChartArgs, Cli, Command};
use crate::config::{AppConfig, load_or_init_config};
use crate::domain::build_record;
use crate::ledger::Ledger;
use crate::report::compute_report;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = config::app_paths(cli.home.clone())?;
    let (cfg, _cfg_path) = load_or_init_config(&paths)?;

    let ledger = Ledger::new(paths.ledger_file());

    match cli.command {
        Command::Add(args) => handle_add(&ledger, args),
        Command::List => handle_list(&ledger),
        Command::Summary => handle_summary(&ledger),
        Command::Chart(args) => handle_chart(&ledger, &cfg, args),
        Command::Categories => {
            handle_categories(&cfg);
            Ok(())
        }
    }
}

fn handle_add(ledger: &Ledger, args: AddArgs) -> Result<()> {
    if ledger.ensure_initialized()? {
        println!("Created new ledger file {}", ledger.path().display());
    }

    let record = build_record(
        args.date.as_deref(),
        args.category.as_deref(),
        &args.amount,
        args.note.as_deref(),
    )?;

    ledger.append(record.clone())?;
    println!(
        "Recorded: {} | {} | ${} | {}",
        record.date.format("%Y-%m-%d"),
        record.category,
        record.amount,
        record.note
    );
    Ok(())
}

fn handle_list(ledger: &Ledger) -> Result<()> {
    let records = ledger.read_all()?;
    if records.is_empty() {
        println!("(no expenses)");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.date.format("%Y-%m-%d").to_string(),
                r.category.clone(),
                format!("{:.2}", r.amount.round_dp(2)),
                r.note.clone(),
            ]
        })
        .collect();
    print_table(&["DATE", "CATEGORY", "AMOUNT", "NOTE"], &rows);

    let total: rust_decimal::Decimal = records.iter().map(|r| r.amount).sum();
    println!();
    println!("Total spent: ${:.2}", total.round_dp(2));
    Ok(())
}

fn handle_summary(ledger: &Ledger) -> Result<()> {
    let records = ledger.read_all()?;
    let report = compute_report(&records)?;

    for (category, total) in &report.category_totals {
        println!("{category}\t${:.2}", total.round_dp(2));
    }
    println!();
    println!("Total spent: ${:.2}", report.total_spent.round_dp(2));
    Ok(())
}

fn handle_chart(ledger: &Ledger, cfg: &AppConfig, args: ChartArgs) -> Result<()> {
    let records = ledger.read_all()?;
    let report = compute_report(&records)?;

    chart::render_two_panel(&report, &cfg.chart, &args.out)?;
    println!("Wrote chart to {}", args.out.display());

    println!();
    println!("total spent\t${:.2}", report.total_spent.round_dp(2));
    println!(
        "average per day\t${:.2}",
        report.average_per_day.round_dp(2)
    );
    println!(
        "top category\t{} (${:.2})",
        report.top_category,
        report.category_totals[&report.top_category].round_dp(2)
    );
    println!("records\t{}", report.record_count);
    Ok(())
}

fn handle_categories(cfg: &AppConfig) {
    for (i, category) in cfg.categories.iter().enumerate() {
        println!("{}. {category}", i + 1);
    }
}

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if headers.is_empty() {
        println!("(no columns)");
        return;
    }

    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    for row in rows {
        for (i, cell) in row.iter().take(cols).enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    fn print_row(cells: &[String], widths: &[usize]) {
        print!("|");
        for (i, w) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            print!(" {:width$} |", cell, width = *w);
        }
        println!();
    }

    fn print_sep(widths: &[usize]) {
        print!("|");
        for w in widths {
            print!("{}|", "-".repeat(w + 2));
        }
        println!();
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    print_row(&header_cells, &widths);
    print_sep(&widths);
    for row in rows {
        print_row(row, &widths);
    }
}
