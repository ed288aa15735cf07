//! prana: command-line front end for the remedy engine.
//!
//! Subcommands:
//!   compose   build one remedy package (JSON on stdout)
//!   classify  map free text to a known state
//!   validate  run the offline catalog checks
//!   config    print the effective configuration as TOML

use chrono::NaiveDateTime;
use prana_core::{
    classify_text, validate_catalog, BirthProfile, ComposeOptions, Composer, EngineConfig,
    EphemerisError, IntentOverrides, QuestionType, Theme,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult = Result<ExitCode, Box<dyn std::error::Error>>;

const USAGE: &str = "\
usage: prana <command> [options]

commands:
  compose   [--seed N] [--name S] [--date YYYY-MM-DD] [--time HH:MM] [--place S]
            [--text S] [--prefer STATE] [--avoid-states a,b] [--avoid-sacred a,b]
            [--theme T] [--question-type Q] [--question S] [--now YYYY-MM-DDTHH:MM]
            [--no-insight]
  classify  [--theme T] [--question-type Q] <text...>
  validate
  config
  help

environment:
  PRANA_CONFIG   config file (default config/prana.toml)
  PRANA__*       per-field overrides, e.g. PRANA__MAX_SUGGESTIONS=3
  RUST_LOG       log filter (default info)";

fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[prana] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => ("help", &[][..]),
    };

    let result = match command {
        "compose" => cmd_compose(rest),
        "classify" => cmd_classify(rest),
        "validate" => cmd_validate(),
        "config" => cmd_config(),
        "help" | "-h" | "--help" => {
            println!("{USAGE}");
            Ok(ExitCode::SUCCESS)
        }
        other => Err(format!("unknown command '{other}'\n\n{USAGE}").into()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[prana] {e}");
            ExitCode::from(2)
        }
    }
}

fn load_config() -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let config = EngineConfig::load()?;
    tracing::debug!(
        target: "prana::config",
        precise = config.precise_ephemeris,
        zodiac = config.zodiac.as_str(),
        hemisphere = config.hemisphere.as_str(),
        max_suggestions = config.max_suggestions,
        "config loaded"
    );
    Ok(config)
}

fn cmd_compose(args: &[String]) -> CliResult {
    let flags = Flags::parse(args, &["no-insight"])?;
    let config = load_config()?;

    let seed = match flags.value("seed") {
        Some(raw) => raw.parse::<u64>().map_err(|e| format!("--seed: {e}"))?,
        None => chrono::Utc::now().timestamp_millis().unsigned_abs(),
    };
    let now = flags
        .value("now")
        .map(|raw| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
                .map_err(|e| format!("--now: {e}"))
        })
        .transpose()?;

    let profile = BirthProfile {
        full_name: flags.value("name").map(str::to_string),
        birth_date: flags.value("date").map(str::to_string),
        birth_time: flags.value("time").map(str::to_string),
        birth_place: flags.value("place").map(str::to_string),
    };

    let options = ComposeOptions {
        seed,
        avoid_sacred_ids: flags.list("avoid-sacred"),
        avoid_state_keys: flags.list("avoid-states"),
        preferred_state_key: flags.value("prefer").map(str::to_string),
        theme: flags.tag("theme", Theme::from_str)?,
        question_type: flags.tag("question-type", QuestionType::from_str)?,
        question_text: flags.value("question").map(str::to_string),
        free_text: flags.value("text").map(str::to_string),
        now,
        enrich: !flags.switch("no-insight"),
    };

    tracing::info!(seed, personal = !profile.is_blank(), "composing");
    let composer = build_composer(config)?;
    let package = composer.compose(Some(&profile), &options)?;
    println!("{}", serde_json::to_string_pretty(&package)?);
    Ok(ExitCode::SUCCESS)
}

/// Composer with the Keplerian tables already warm, so every run resolves
/// through the same provider.
fn build_composer(config: EngineConfig) -> Result<Composer, EphemerisError> {
    if config.precise_ephemeris {
        prana_core::warm_up()?;
    }
    Ok(Composer::new(config))
}

fn cmd_classify(args: &[String]) -> CliResult {
    let flags = Flags::parse(args, &[])?;
    let text = flags.positional.join(" ");
    if text.trim().is_empty() {
        return Err("classify needs some text".into());
    }
    let overrides = IntentOverrides {
        theme: flags.tag("theme", Theme::from_str)?,
        question_type: flags.tag("question-type", QuestionType::from_str)?,
    };

    match classify_text(&text, &overrides) {
        Some(found) => {
            println!("{}", serde_json::to_string_pretty(&found)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("null");
            Ok(ExitCode::from(1))
        }
    }
}

fn cmd_validate() -> CliResult {
    let report = validate_catalog();
    println!("{}", serde_json::to_string_pretty(&report)?);
    if report.is_ok() {
        tracing::info!(
            states = report.remedy_states,
            sacred = report.sacred_entries,
            "catalogs valid"
        );
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::error!(problems = report.problems.len(), "catalog validation failed");
        Ok(ExitCode::from(1))
    }
}

fn cmd_config() -> CliResult {
    let config = load_config()?;
    print!("{}", config.to_toml()?);
    Ok(ExitCode::SUCCESS)
}

/// `--key value` pairs, bare `--switch` flags and positional words.
struct Flags {
    pairs: Vec<(String, String)>,
    switches: Vec<String>,
    positional: Vec<String>,
}

impl Flags {
    fn parse(args: &[String], switches: &[&str]) -> Result<Self, String> {
        let mut flags = Flags {
            pairs: Vec::new(),
            switches: Vec::new(),
            positional: Vec::new(),
        };
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.strip_prefix("--") {
                Some(key) if switches.contains(&key) => flags.switches.push(key.to_string()),
                Some(key) => {
                    let value = iter
                        .next()
                        .ok_or_else(|| format!("--{key} needs a value"))?;
                    flags.pairs.push((key.to_string(), value.clone()));
                }
                None => flags.positional.push(arg.clone()),
            }
        }
        Ok(flags)
    }

    /// Last value given for `key`.
    fn value(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn list(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .flat_map(|(_, v)| v.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn switch(&self, key: &str) -> bool {
        self.switches.iter().any(|s| s == key)
    }

    fn tag<T>(&self, key: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>, String> {
        match self.value(key) {
            Some(raw) => parse(raw)
                .map(Some)
                .ok_or_else(|| format!("--{key}: unknown value '{raw}'")),
            None => Ok(None),
        }
    }
}
