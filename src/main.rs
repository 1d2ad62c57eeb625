//! bucketsync CLI
//!
//! Usage: bucketsync <COMMAND>
//!
//! Commands:
//!   manifest  Build the upload manifest for a directory
//!   classify  Print the content type each path would be uploaded with

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bucketsync::config::{self, Config};
use bucketsync::domain::value_objects::classify;
use bucketsync::{
    write_manifest, BucketError, ErrorKind, ManifestBuilder, PatternResolver, WalkLister,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    let result = match cli.command {
        Commands::Manifest {
            source,
            config,
            purge,
            no_purge,
            text_encoding,
            concurrency,
            output,
        } => {
            let overrides = ManifestOverrides {
                purge: purge_override(purge, no_purge),
                text_encoding,
                concurrency: concurrency.map(usize::from),
            };
            cmd_manifest(source, config, overrides, output).await
        }
        Commands::Classify {
            paths,
            text_encoding,
        } => cmd_classify(&paths, &text_encoding, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so the manifest on stdout stays machine-readable.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "bucketsync=info,warn",
        2 => "bucketsync=debug,info",
        _ => "bucketsync=trace,debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// CLI flags that win over config file and environment
struct ManifestOverrides {
    purge: Option<bool>,
    text_encoding: Option<String>,
    concurrency: Option<usize>,
}

fn purge_override(purge: bool, no_purge: bool) -> Option<bool> {
    match (purge, no_purge) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn apply_overrides(mut config: Config, overrides: ManifestOverrides) -> Config {
    if let Some(purge) = overrides.purge {
        config.purge = purge;
    }
    if let Some(text_encoding) = overrides.text_encoding {
        config.text_encoding = text_encoding;
    }
    if let Some(concurrency) = overrides.concurrency {
        config.concurrency = concurrency;
    }
    config
}

async fn cmd_manifest(
    source: Option<PathBuf>,
    config_path: Option<PathBuf>,
    overrides: ManifestOverrides,
    output: Option<PathBuf>,
) -> Result<()> {
    let (config, config_file) = config::load_discovered(config_path.as_deref(), source.as_deref())
        .context("failed to load configuration")?;
    let config = apply_overrides(config, overrides);

    let source = source
        .or_else(|| config.source.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut lister = WalkLister::new();
    if let Some(relative) = config_file
        .as_deref()
        .and_then(|file| config::config_exclusion(file, &source))
    {
        tracing::debug!(path = %relative.display(), "excluding config file from manifest");
        lister = lister.excluding(relative);
    }
    let resolver = PatternResolver::with_lister(lister).with_options(config.resolver_options());
    let builder = ManifestBuilder::with_resolver(resolver);
    let manifest = builder
        .build(&source, &config.rules(), config.purge)
        .await
        .with_context(|| format!("failed to build manifest for {}", source.display()))?;

    match output {
        Some(path) => write_manifest(&path, &manifest)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", manifest.to_json()?),
    }
    Ok(())
}

fn cmd_classify(paths: &[String], text_encoding: &str, json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = paths
            .iter()
            .map(|path| {
                let content_type = classify(path);
                serde_json::json!({
                    "path": path,
                    "contentType": content_type.header_value(text_encoding),
                    "isText": content_type.is_text(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for path in paths {
        println!("{}\t{}", path, classify(path).header_value(text_encoding));
    }
    Ok(())
}

fn report_error(err: &anyhow::Error, json: bool) {
    let kind = err.downcast_ref::<BucketError>().map(BucketError::kind);

    if json {
        let kind = match kind {
            Some(ErrorKind::Input) => "input",
            Some(ErrorKind::Io) => "io",
            Some(ErrorKind::Invariant) => "invariant",
            Some(ErrorKind::Config) => "config",
            None => "other",
        };
        let body = serde_json::json!({
            "error": format!("{err:#}"),
            "kind": kind,
            "retryable": kind == "io",
        });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
}
