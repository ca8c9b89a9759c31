// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Thread inspector - reconciles one contact's history file and prints the conversation
///
/// Reads the same JSON the backend returns for a contact (sent emails plus replies) and shows
/// the merged thread, the reply anchor and the subject the next message would use.
use clap::Parser;
use env_logger::Env;
use log::{debug, error};
use placement_pitcher::config::Settings;
use placement_pitcher::error::PitcherError;
use placement_pitcher::models::{ContactHistory, ThreadView};
use std::io::Read;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(version, about = "Reconcile a contact's sent emails and replies into one thread", long_about = None)]
struct Cli {
    /// Contact history JSON file, or `-` to read stdin.
    file: String,

    /// Subject to propose when the contact has no history yet.
    #[arg(long)]
    fallback_subject: Option<String>,

    /// Print the thread as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Path to the configuration file.
    #[arg(short, long, env = "PITCHER_CONFIG")]
    config: Option<String>,
}

fn read_input(file: &str) -> Result<String, PitcherError> {
    if file == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

fn run(cli: &Cli) -> Result<String, PitcherError> {
    let settings = Settings::new(cli.config.as_deref())?;
    let raw = read_input(&cli.file)?;
    let history: ContactHistory = serde_json::from_str(&raw)?;
    debug!("Loaded {} sent and {} received messages", history.sent.len(), history.received.len());

    let state = history.reconcile()?;
    let fallback_subject = cli
        .fallback_subject
        .as_deref()
        .unwrap_or(settings.threads.fallback_subject.as_str());
    let view = ThreadView::new(state, fallback_subject);

    if cli.json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(view.to_string())
    }
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            // 2 flags bad data rather than a bad invocation
            exit(if e.is_data_integrity() { 2 } else { 1 });
        }
    }
}
