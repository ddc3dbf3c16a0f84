#![deny(missing_docs)]

//! Replay a recorded landmark capture through the recognition session.
//!
//! Stands in for the browser frame loop: every capture line becomes one
//! classifier invocation, announcements drain immediately, and the session
//! stats are printed at the end.

use std::path::PathBuf;
use std::process::ExitCode;

use handspeak::classifier::Prediction;
use handspeak::vocabulary::Sign;
use handspeak::{capture, config, logging, session::Session};
use tracing::info;

const USAGE: &str = "Usage: handspeak <capture.jsonl> [--user ID] [--seed N] [--config PATH]";

struct Args {
    capture: PathBuf,
    user: Option<String>,
    seed: Option<u64>,
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let user_id = args.user.unwrap_or_else(|| settings.user_id.clone());
    info!(
        user_id = %user_id,
        frame_interval_ms = settings.frame_interval_ms,
        "starting capture replay"
    );

    let frames = capture::read_capture(&args.capture)?;
    let mut session = match args.seed {
        Some(seed) => Session::with_seed(user_id, seed),
        None => Session::new(user_id),
    };
    session.start();

    for (index, frame) in frames.iter().enumerate() {
        let left = frame.left_hand();
        let right = frame.right_hand();
        let prediction = session.process_frame(left.as_ref(), right.as_ref());
        println!("frame {:>4}: {}", index + 1, describe(&prediction));
        drain_announcements(&mut session);
    }

    let stats = session.stats();
    println!("--");
    println!("signs detected:    {}", stats.signs_detected());
    println!("avg confidence:    {:.1}%", stats.average_confidence());
    println!("phrases completed: {}", stats.phrases_completed());
    if let Some(elapsed) = stats.elapsed() {
        println!("replay time:       {:.2}s", elapsed.as_secs_f64());
    }
    session.stop();
    Ok(())
}

fn describe(prediction: &Prediction) -> String {
    let mut text = format!("{} ({:.1}%)", prediction.label, prediction.confidence);
    if !prediction.alternatives.is_empty() {
        let alternatives: Vec<&str> = prediction.alternatives.iter().map(Sign::as_str).collect();
        text.push_str(&format!("  did you mean: {}", alternatives.join(", ")));
    }
    if let Some(phrase) = prediction.phrase_completion {
        text.push_str(&format!("  \"{phrase}\""));
    }
    text
}

/// Replay has no real synthesis engine, so every utterance completes
/// immediately and the queue drains within the frame.
fn drain_announcements(session: &mut Session) {
    while let Some(text) = session.speech().current().map(str::to_owned) {
        println!("    speak: {text}");
        session.speech().finish();
    }
}

fn parse_args() -> Result<Args, String> {
    let mut capture = None;
    let mut user = None;
    let mut seed = None;
    let mut config = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--user" => {
                user = Some(args.next().ok_or("--user requires a value")?);
            }
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid seed '{value}'"))?,
                );
            }
            "--config" => {
                config = Some(PathBuf::from(args.next().ok_or("--config requires a value")?));
            }
            "--help" | "-h" => {
                return Err("Replay a recorded landmark capture through the recognizer.".to_string());
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option '{other}'"));
            }
            other => {
                if capture.replace(PathBuf::from(other)).is_some() {
                    return Err("only one capture file may be given".to_string());
                }
            }
        }
    }

    Ok(Args {
        capture: capture.ok_or("missing capture file")?,
        user,
        seed,
        config,
    })
}
