//! Mano CLI
//!
//! Usage:
//!   mano --text "your text here"            # Single mood check-in
//!   mano --interactive                      # Chat with the companion
//!   mano --serve                            # HTTP API server
//!   mano --stats                            # Profile stats from the journal
//!   mano --prompt                           # Journaling prompt
//!   mano --text "text" --json               # JSON output

use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use mano::config::EngineConfig;
use mano::core::{journaling_prompt, run_server, JournalStore, MoodStats, Session, TurnOutcome};
use mano::types::{Emotion, TurnOutput};
use mano::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "mano",
    version = VERSION,
    about = "Mano - rule-based mood check-ins and a supportive chat companion",
    long_about = "Mano reads a message, detects emotion, severity, intent and topics,\n\
                  and replies with a templated supportive response.\n\n\
                  Modes:\n  \
                  --text         One mood check-in\n  \
                  --interactive  Multi-turn conversation ('quit' to end)\n  \
                  --serve        HTTP API server mode\n  \
                  --stats        Streak, wellness score and mood distribution\n  \
                  --prompt       A journaling prompt for your latest mood\n\n\
                  Conversation stages:\n  \
                  INITIAL     - Nothing said yet\n  \
                  EXPLORING   - Getting to know what is going on\n  \
                  COPING      - Offering strategies\n  \
                  REFLECTION  - Looking back together\n  \
                  CLOSING     - Wrapping up\n\n\
                  If you are in crisis, contact your local emergency number."
)]
struct Args {
    /// Text to check in with (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive conversation - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show analysis breakdown
    #[arg(long)]
    verbose: bool,

    /// Fixed seed for response wording
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each reply (milliseconds)
    #[arg(long)]
    typing_delay_ms: Option<u64>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Journal file for check-ins (default: ./mood_history.json)
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Do not save check-ins to the journal
    #[arg(long)]
    no_save: bool,

    /// Show profile statistics from the journal
    #[arg(long)]
    stats: bool,

    /// Show a journaling prompt
    #[arg(long)]
    prompt: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    init_tracing(&config);

    if args.no_color {
        colored::control::set_override(false);
    }

    let journal = if args.no_save {
        None
    } else {
        Some(JournalStore::open(&config.history_path))
    };

    if args.serve {
        run_serve(&args, config, journal).await;
    } else if args.stats {
        run_stats(&config, &args);
    } else if args.prompt {
        run_prompt(&config);
    } else if args.interactive {
        run_interactive(&args, &config, journal.as_ref());
    } else if let Some(ref text) = args.text {
        run_single(text, &args, &config, journal.as_ref());
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args, &config, journal.as_ref());
    }
}

/// Config file first, then flag overrides
fn build_config(args: &Args) -> mano::error::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(delay) = args.typing_delay_ms {
        config.typing_delay_ms = delay;
    }
    if let Some(ref path) = args.history_file {
        config.history_path = path.clone();
    }
    config.validate()?;
    Ok(config)
}

/// RUST_LOG wins over the configured filter; logs go to stderr
fn init_tracing(config: &EngineConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run a single mood check-in
fn run_single(text: &str, args: &Args, config: &EngineConfig, journal: Option<&JournalStore>) {
    if text.trim().is_empty() {
        eprintln!("Nothing to check in with: text is empty");
        std::process::exit(2);
    }

    let mut session = Session::new(config);
    let outcome = session.respond(text);
    save_check_in(journal, &outcome);
    pause(config);

    if args.json {
        print_json(&outcome, true);
    } else {
        print_outcome(&outcome, args);
    }
}

/// Run interactive conversation
fn run_interactive(args: &Args, config: &EngineConfig, journal: Option<&JournalStore>) {
    let mut session = Session::new(config);

    print_header("Companion", args.no_color);
    println!("Tell me how you're feeling. Type '/prompt' for a journaling prompt, 'quit' to exit.");
    println!("If you are in danger, please contact your local emergency number.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(&session));
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Turns: {}", session.turn_count());
            session.end();
            break;
        }
        if line.is_empty() {
            continue;
        }
        if line == "/prompt" {
            println!("  {}", session.journaling_prompt().italic());
            continue;
        }

        let outcome = session.respond(line);
        save_check_in(journal, &outcome);
        pause(config);

        if args.json {
            print_json(&outcome, false);
        } else {
            print_outcome(&outcome, args);
        }
    }
}

/// Show profile statistics
fn run_stats(config: &EngineConfig, args: &Args) {
    let history = match JournalStore::open(&config.history_path).load() {
        Ok(history) => history,
        Err(e) => {
            eprintln!("Could not read journal {}: {}", config.history_path.display(), e);
            std::process::exit(1);
        }
    };
    let stats = MoodStats::from_history(&history);

    if args.json {
        print_json(&stats, true);
        return;
    }

    print_header("Profile", args.no_color);
    println!("Check-ins:        {}", stats.check_ins);
    println!("Current emotion:  {}", stats.current_emotion);
    println!("Most frequent:    {}", stats.most_frequent);
    println!("Positive:         {}%", stats.positive_percent);
    println!("Streak:           {} day(s)", stats.streak);
    println!("Wellness score:   {}/100", stats.wellness_score.to_string().bold());
    if !stats.distribution.is_empty() {
        println!();
        println!("Distribution:");
        for entry in &stats.distribution {
            println!("  {:<12} {}", entry.emotion, "#".repeat(entry.count));
        }
    }
    if !stats.weekly.is_empty() {
        println!();
        println!("Recent moods (1-7):");
        for point in &stats.weekly {
            println!(
                "  {} {:<12} {}",
                point.date.format("%Y-%m-%d"),
                point.emotion,
                "*".repeat(point.value as usize)
            );
        }
    }
}

/// Show a journaling prompt for the latest mood
fn run_prompt(config: &EngineConfig) {
    let emotion = JournalStore::open(&config.history_path)
        .load()
        .ok()
        .and_then(|history| history.first().and_then(|c| Emotion::from_key(&c.result.emotion)))
        .unwrap_or(Emotion::Neutral);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    println!("{}", journaling_prompt(emotion, &mut rng));
}

/// Run HTTP API server
async fn run_serve(args: &Args, config: EngineConfig, journal: Option<JournalStore>) {
    println!();
    println!("Mano API Server v{}", VERSION);
    println!();

    if let Err(e) = run_server(&args.addr, config, journal).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Persist a check-in; failures are reported, never fatal
fn save_check_in(journal: Option<&JournalStore>, outcome: &TurnOutcome) {
    if let Some(journal) = journal {
        if let Err(e) = journal.append(outcome.check_in.clone()) {
            tracing::warn!(error = %e, "Failed to save check-in");
        }
    }
}

/// Artificial typing delay
fn pause(config: &EngineConfig) {
    if config.typing_delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(config.typing_delay_ms));
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Could not serialize output: {}", e),
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    let title = format!("Mano v{} - {}", VERSION, mode);
    println!("========================================");
    if no_color {
        println!("  {}", title);
    } else {
        println!("  {}", title.bold());
    }
    println!("========================================");
    println!();
}

/// Prompt showing the current stage
fn format_prompt(session: &Session) -> String {
    let stage = session.state().conversation_stage;
    format!("[{}] > ", stage.to_string().color(stage.color()))
}

/// Status line, reply and quick replies
fn print_outcome(outcome: &TurnOutcome, args: &Args) {
    let status = TurnOutput::new(outcome.turn, &outcome.analysis, &outcome.state, &outcome.response);
    if args.no_color {
        println!("{}", status.to_parseable_string());
    } else {
        println!("{}", status.to_terminal_string());
    }
    if args.verbose {
        print_verbose(outcome);
    }

    println!();
    for line in outcome.response.text.lines() {
        println!("  {}", line);
    }
    println!();
    println!("  {} {}", ">".dimmed(), outcome.response.suggested_replies.join(" | ").dimmed());
    println!();
}

/// Print analysis breakdown and the reasons behind this turn
fn print_verbose(outcome: &TurnOutcome) {
    let analysis = &outcome.analysis;
    let hits: Vec<String> = analysis
        .emotion_hits
        .iter()
        .map(|h| format!("{}={}", h.emotion, h.count))
        .collect();
    let topics: Vec<&str> = analysis.topics.iter().map(|t| t.key()).collect();

    println!("┌─────────────────────────────────────");
    println!("│ Emotion: {} ({}/10)", analysis.emotion, analysis.intensity);
    println!("│ Hits:    {}", if hits.is_empty() { "none".to_string() } else { hits.join(", ") });
    println!("│ Severity: {} ({})", analysis.severity, analysis.severity_reason.code());
    println!("│ Intent:  {}", analysis.intent);
    println!("├─────────────────────────────────────");
    println!("│ Topics:   {}", topics.join(", "));
    println!("│ Context:  {}", analysis.context);
    println!("│ Keywords: {}", analysis.keywords.join(", "));
    if !analysis.mentioned_events.is_empty() {
        println!("│ Events:   {}", analysis.mentioned_events.join(" / "));
    }
    println!("├─────────────────────────────────────");
    println!("│ Stage:    {}", outcome.transition);
    println!("│ Reply:    {}", outcome.response.reason);
    println!("└─────────────────────────────────────");
}
