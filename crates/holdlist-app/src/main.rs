// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Holdlist — turns a library "items on reservation" report into adult and
// junior pick lists.
//
// Entry point. Initialises logging, loads stored settings, and dispatches the
// sort / export / settings commands.

mod services;
mod state;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use holdlist_core::LayoutConfig;
use holdlist_core::error::Result;
use holdlist_core::human_errors::humanize_error;
use holdlist_core::types::Audience;
use tracing_subscriber::EnvFilter;

use services::app_services::{AppServices, write_list};
use state::{AppState, CachedSort};

#[derive(Parser)]
#[command(
    name = "holdlist",
    version,
    about = "Sort a reservation report into adult and junior pick lists",
    after_help = "EXAMPLES:\n  \
                  holdlist sort report.txt\n  \
                  holdlist export report.txt --out-dir lists --columns 1\n  \
                  holdlist settings --font Times --size 11 --save"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Parse and sort a report, then print a summary
    Sort {
        /// Report file, or "-" for standard input
        report: PathBuf,
    },

    /// Sort a report and write the PDF lists
    Export {
        /// Report file, or "-" for standard input
        report: PathBuf,

        /// Directory for "adult list.pdf" and "junior list.pdf"
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Which list(s) to write
        #[arg(long, value_enum, default_value_t = AudienceChoice::Both)]
        audience: AudienceChoice,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show or change the stored list settings
    Settings {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Store the resulting settings for later runs
        #[arg(long)]
        save: bool,
    },
}

/// Layout overrides for one run.
#[derive(Args, Debug, Default)]
struct LayoutArgs {
    /// Font family: Helvetica, Times or Courier
    #[arg(long)]
    font: Option<String>,

    /// Body text size in points (6-24)
    #[arg(long)]
    size: Option<f32>,

    /// Columns per page (1 or 2)
    #[arg(long)]
    columns: Option<u8>,
}

impl LayoutArgs {
    fn is_empty(&self) -> bool {
        self.font.is_none() && self.size.is_none() && self.columns.is_none()
    }

    fn apply(&self, config: &mut LayoutConfig) -> Result<()> {
        if let Some(font) = &self.font {
            config.set_font_name(font)?;
        }
        if let Some(size) = self.size {
            config.font_size = size;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        config.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AudienceChoice {
    Adult,
    Junior,
    Both,
}

impl AudienceChoice {
    fn audiences(self) -> &'static [Audience] {
        match self {
            Self::Adult => &[Audience::Adult],
            Self::Junior => &[Audience::Junior],
            Self::Both => &[Audience::Adult, Audience::Junior],
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = %err, "Command failed");
            let human = humanize_error(&err);
            eprintln!("{}", human.message);
            eprintln!("{}", human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    let services = AppServices::init();
    let mut layout = LayoutConfig::from_settings(&services.load_settings());

    match command {
        Command::Sort { report } => {
            let mut state = AppState::new(layout);
            state.set_input(read_report(&report)?);
            print_summary(state.run_sort()?);
            Ok(())
        }
        Command::Export {
            report,
            out_dir,
            audience,
            layout: overrides,
        } => {
            let mut state = AppState::new(layout.clone());
            overrides.apply(&mut layout)?;
            state.set_layout(layout);
            state.set_input(read_report(&report)?);
            state.run_sort()?;

            for &aud in audience.audiences() {
                let pdf = state.export(aud)?;
                let path = write_list(&out_dir, aud, &pdf)?;
                println!("Wrote {}", path.display());
            }
            Ok(())
        }
        Command::Settings {
            layout: overrides,
            save,
        } => {
            overrides.apply(&mut layout)?;
            let settings = layout.to_settings();
            println!("font:    {}", settings.font);
            println!("size:    {}", settings.text_size);
            println!("columns: {}", settings.columns);

            if save {
                services.save_settings(&settings)?;
                println!("Saved to {}", services.settings_path().display());
            } else if !overrides.is_empty() {
                println!("(not saved; add --save to keep these settings)");
            }
            Ok(())
        }
    }
}

fn read_report(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn print_summary(cached: &CachedSort) {
    let result = &cached.result;
    println!("Library: {}", cached.parsed.library_name);
    println!("Date:    {}", cached.parsed.report_date);
    println!(
        "Holds:   {} ({} adult, {} junior)",
        result.original_count, result.adult_count, result.junior_count
    );

    for audience in [Audience::Adult, Audience::Junior] {
        println!();
        println!("{} sections:", audience.label());
        for heading in result.document(audience).headings() {
            println!("  {}", heading.text());
        }
    }

    println!();
    if result.is_valid {
        println!("Integrity: ok (sorted {})", cached.sorted_at.format("%Y-%m-%d %H:%M:%S UTC"));
    } else {
        println!("Integrity: check failed, lists will not be exported");
    }
}
