//! # how-typed
//!
//! A CLI tool that reports how much of a JavaScript project is written in
//! TypeScript.
//!
//! ## Overview
//!
//! how-typed is built on top of howtypedlib. It walks a project directory,
//! counts JavaScript and TypeScript files and lines (including the script
//! blocks of Vue single-file components), and prints a rated report.
//!
//! ## Usage
//!
//! ```bash
//! # Analyse the current directory
//! how-typed
//!
//! # Analyse another project
//! how-typed ../my-app
//!
//! # Output the raw statistics as JSON
//! how-typed ../my-app --json
//! ```
//!
//! Paths matched by `**/node_modules`, `**/dist`, `**/build`, `**/.*` and by
//! the project's `.gitignore` are skipped. Set `RUST_LOG=debug` to see which
//! entries were skipped because they could not be read.

mod render;

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Term;
use howtypedlib::{count_directory, package_name, CountOptions, IgnorePatterns};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("how-typed")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calculates how much of a JavaScript/Vue codebase is written in TypeScript")
        .long_about(
            "Calculates and outputs TypeScript metrics for a given directory. It counts \
             JavaScript and TypeScript files and lines of code, and generates a report \
             with percentages, a weighted score and colour-coded ratings.",
        )
        .arg(
            Arg::new("directory")
                .help("The directory to analyse (defaults to the current directory)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output the report in JSON format"),
        )
}

/// Transient status line on stderr, shown only on an interactive terminal
struct Progress {
    term: Option<Term>,
}

impl Progress {
    fn start(enabled: bool, message: &str) -> Self {
        let term = Term::stderr();
        if !enabled || !term.is_term() {
            return Self { term: None };
        }
        let _ = term.write_line(message);
        Self { term: Some(term) }
    }

    fn update(&self, message: &str) {
        if let Some(term) = &self.term {
            let _ = term.clear_last_lines(1);
            let _ = term.write_line(message);
        }
    }

    fn finish(self) {
        if let Some(term) = &self.term {
            let _ = term.clear_last_lines(1);
        }
    }
}

/// Handler for the analysis: walk, derive scores, render
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let directory = match matches.get_one::<String>("directory") {
        Some(directory) => directory.clone(),
        None => env::current_dir()
            .context("failed to resolve the current directory")?
            .display()
            .to_string(),
    };
    let directory = directory.as_str();
    let json = matches.get_flag("json");

    let name = package_name(directory).unwrap_or_else(|| directory.to_string());
    let ignore = IgnorePatterns::resolve(directory);
    log::debug!("ignore patterns: {:?}", ignore.raw());

    let location = if name != directory {
        format!(" ({directory})")
    } else {
        String::new()
    };
    let progress = Progress::start(!json, &format!("Analyzing files in '{name}'{location}"));

    let counts = count_directory(directory, &CountOptions::new().ignore(ignore))
        .with_context(|| format!("failed to analyse '{directory}'"))?;

    progress.update("Calculating TypeScript percentage");
    let counts = counts.with_scores();
    progress.finish();

    let title = format!("How-Typed? TypeScript Percentage Report for '{name}'");
    Ok(render::render(&title, &counts, json)?)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
