//! Santali translator command-line front-end
//!
//! Every command prints JSON on stdout; logs go to stderr.

mod args;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::json;
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use santali_translator_config::{load_settings_from, Settings};
use santali_translator_core::LookupDirection;
use santali_translator_text_processing::{pronounce, TranslationEngine};

use args::{CliArgs, Command};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Priority: env vars > config/{env} > config/default > defaults
    let mut settings = match load_settings_from(&args.config_dir, args.profile.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };
    if let Some(path) = &args.dictionary {
        settings.dictionary.path = path.clone();
        settings.dictionary.fallback_paths.clear();
    }
    if args.no_curated {
        settings.dictionary.apply_curated = false;
    }

    init_tracing(&settings);

    let engine = TranslationEngine::from_settings(&settings);
    run(&engine, &args)
}

fn run(engine: &TranslationEngine, args: &CliArgs) -> Result<()> {
    match &args.command {
        Command::Translate(t) => print(&engine.translate(&t.text, &t.from, &t.to), args.pretty),
        Command::Batch(b) => {
            let contents = fs::read_to_string(&b.input)
                .with_context(|| format!("Failed to read {}", b.input.display()))?;
            let texts: Vec<&str> = contents.lines().filter(|l| !l.trim().is_empty()).collect();
            tracing::info!(count = texts.len(), "Batch translating");
            print(&engine.batch_translate(&texts, &b.from, &b.to), args.pretty)
        }
        Command::Lookup(l) => {
            let direction = LookupDirection::from(l.direction);
            let found = engine.dictionary().lookup(&l.word, direction);
            print(
                &json!({ "word": l.word, "direction": direction, "translation": found }),
                args.pretty,
            )
        }
        Command::Search(s) => {
            let results = pairs_json(engine.dictionary().search(&s.query, s.direction.into()));
            print(&json!({ "query": s.query, "results": results }), args.pretty)
        }
        Command::Prefix(p) => {
            let results = pairs_json(engine.dictionary().search_prefix(&p.prefix, p.limit));
            print(&json!({ "prefix": p.prefix, "results": results }), args.pretty)
        }
        Command::Stats => print(&engine.dictionary().stats(), args.pretty),
        Command::Languages => {
            let pairs: Vec<String> = engine.supported_pairs().iter().map(ToString::to_string).collect();
            print(
                &json!({ "languages": engine.supported_languages(), "pairs": pairs }),
                args.pretty,
            )
        }
        Command::Export(e) => {
            engine
                .dictionary()
                .export_csv(&e.output)
                .with_context(|| format!("Failed to export to {}", e.output.display()))?;
            print(
                &json!({ "path": e.output, "pairs": engine.dictionary().len() }),
                args.pretty,
            )
        }
        Command::Pronounce(p) => print(
            &json!({ "text": p.text, "pronunciation": pronounce(&p.text) }),
            args.pretty,
        ),
    }
}

fn pairs_json(pairs: Vec<(&str, &str)>) -> Vec<serde_json::Value> {
    pairs
        .into_iter()
        .map(|(hindi, santali)| json!({ "hindi": hindi, "santali": santali }))
        .collect()
}

fn print<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("santali_translator={},warn", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
