//! times-drill: terminal front end for the multiplication drill.
//!
//! Reads one command per line from stdin. While selecting: a table number
//! toggles it, `list` shows the choices, `start` begins practice. While
//! practising: a number submits an answer, `back` returns to selection.
//! `quit` or end of input exits.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use times_drill::{
    event_message, practice_label, snapshot_message, AnswerOptionSet, DrillConfig, DrillSession,
    Feedback, Question, SessionError, SessionEvent, SessionObserver, SessionPhase,
    TableSelection,
};

#[derive(Parser)]
#[command(name = "times-drill", version, about = "Multiplication table drill")]
struct Cli {
    /// Tables to practise, comma-separated; practice starts right away
    #[arg(long, value_delimiter = ',')]
    tables: Vec<u32>,

    /// Seed for reproducible questions
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the feedback delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Override the maximum number of answer options
    #[arg(long)]
    max_options: Option<usize>,

    /// Print one JSON message per line instead of text
    #[arg(long)]
    json: bool,
}

/// Renders session events to stdout.
struct TerminalView {
    json: bool,
}

impl TerminalView {
    fn render(&self, event: SessionEvent) {
        if self.json {
            println!("{}", event_message(&event));
            return;
        }
        match event {
            SessionEvent::TableSelectionChanged { selection } => {
                if selection.is_empty() {
                    println!("No tables selected.");
                } else {
                    println!("Selected tables: {}", join(selection.iter()));
                }
            }
            SessionEvent::QuestionChanged { question } => println!("{question}"),
            SessionEvent::AnswerOptionsChanged { options } => {
                println!("Options: {}", options.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("  "));
            }
            SessionEvent::Feedback { feedback } => println!("{feedback}"),
            SessionEvent::PhaseChanged { phase: SessionPhase::Selecting } => {
                println!("Back to table selection. Type a table number, `list`, `start` or `quit`.");
            }
            SessionEvent::PhaseChanged { .. } => {}
        }
    }
}

impl SessionObserver for TerminalView {
    fn on_table_selection_changed(&mut self, selection: &TableSelection) {
        self.render(SessionEvent::TableSelectionChanged { selection: selection.clone() });
    }

    fn on_question_changed(&mut self, question: &Question) {
        self.render(SessionEvent::QuestionChanged { question: *question });
    }

    fn on_answer_options_changed(&mut self, options: &AnswerOptionSet) {
        self.render(SessionEvent::AnswerOptionsChanged { options: options.clone() });
    }

    fn on_feedback(&mut self, correct: bool) {
        let feedback = if correct { Feedback::Correct } else { Feedback::Incorrect };
        self.render(SessionEvent::Feedback { feedback });
    }

    fn on_phase_changed(&mut self, phase: SessionPhase) {
        self.render(SessionEvent::PhaseChanged { phase });
    }
}

fn join(values: impl Iterator<Item = u32>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

fn load_config(cli: &Cli) -> Result<DrillConfig> {
    let mut config = match &cli.config {
        Some(path) => DrillConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DrillConfig::default(),
    };
    if let Some(delay) = cli.delay_ms {
        config.feedback_delay_ms = delay;
    }
    if let Some(max) = cli.max_options {
        config.max_display_options = max;
    }
    config.validate()?;
    Ok(config)
}

fn report(json: bool, err: &SessionError) {
    if json {
        println!("{}", serde_json::json!({ "type": "rejected", "error": err.to_string() }));
    } else {
        println!("{err}");
    }
}

/// Start practice, printing the header above the first question in text
/// mode and a full snapshot after it in JSON mode.
fn start(session: &mut DrillSession, json: bool) -> Result<(), SessionError> {
    if !json && session.can_start() {
        println!("{}", practice_label(session.selection()));
    }
    session.start_session()?;
    if json {
        println!("{}", snapshot_message(&session.snapshot()));
    }
    Ok(())
}

fn print_tables(session: &DrillSession) {
    let config = session.config();
    println!(
        "Available tables: {}..={}. Selected: {}",
        config.table_min,
        config.table_max,
        if session.selection().is_empty() { "none".to_string() } else { join(session.selection().iter()) }
    );
}

/// Handle one input line. Returns `false` when the user asked to quit.
fn handle_line(session: &mut DrillSession, line: &str, json: bool) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return true;
    }
    if line == "quit" || line == "exit" {
        return false;
    }

    let result = match (session.phase(), line) {
        (SessionPhase::Selecting, "start") => start(session, json),
        (SessionPhase::Selecting, "list") => {
            print_tables(session);
            Ok(())
        }
        (SessionPhase::Selecting, cmd) => match cmd.parse::<u32>() {
            Ok(table) => session.toggle_table(table).map(|_| ()),
            Err(_) => {
                println!("Unknown command `{cmd}`. Type a table number, `list`, `start` or `quit`.");
                Ok(())
            }
        },
        (_, "back") => session.end_session(),
        (_, cmd) => match cmd.parse::<u32>() {
            Ok(value) => match session.submit_answer(value) {
                Ok(timer) => {
                    thread::sleep(Duration::from_millis(timer.delay_ms));
                    session.feedback_elapsed(timer).map(|_| ())
                }
                Err(err) => Err(err),
            },
            Err(_) => {
                println!("Type one of the numbers shown, `back` or `quit`.");
                Ok(())
            }
        },
    };

    if let Err(err) = result {
        report(json, &err);
    }
    true
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let mut session = DrillSession::new(config, cli.seed)?;
    session.subscribe(TerminalView { json: cli.json });

    if cli.tables.is_empty() {
        if !cli.json {
            println!("Type a table number to select it, `list`, `start` or `quit`.");
        }
    } else {
        let wanted: TableSelection = cli.tables.iter().copied().collect();
        for table in wanted.iter() {
            session.toggle_table(table).with_context(|| format!("selecting table {table}"))?;
        }
        start(&mut session, cli.json)?;
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if !handle_line(&mut session, &line, cli.json) {
            break;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("times_drill=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
