use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use font_version_resolver::config::Config;
use font_version_resolver::logging;
use font_version_resolver::version::catalogs::JsonDirCatalog;
use font_version_resolver::version::lookup::{ResolvedPackage, VersionLookup};
use font_version_resolver::version::tag::parse_tag;

#[derive(Parser)]
#[command(name = "font-version")]
#[command(version, about = "Resolve font package version tags")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/font-version/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve `id@tag` specs to published versions
    Resolve {
        /// Specs such as roboto@latest, roboto@5, roboto@5.0.8
        #[arg(required = true)]
        specs: Vec<String>,

        /// Directory of `<id>.json` package listings
        #[arg(long)]
        catalog_dir: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a version tag without resolving it
    Parse { tag: String },
}

#[derive(Serialize)]
#[serde(untagged)]
enum ResolveOutput {
    Resolved(ResolvedPackage),
    Failed {
        spec: String,
        error: String,
        status: u16,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let _guard = logging::init(&config.log)?;

    match cli.command {
        Command::Resolve {
            specs,
            catalog_dir,
            json,
        } => {
            let catalog_dir = catalog_dir.or(config.catalog_dir).context(
                "No catalog directory configured; pass --catalog-dir or set catalogDir",
            )?;
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(run_resolve(specs, catalog_dir, json))
        }
        Command::Parse { tag } => {
            let parsed = parse_tag(&tag)?;
            println!("{}\t{}", parsed.kind(), parsed);
            Ok(())
        }
    }
}

async fn run_resolve(specs: Vec<String>, catalog_dir: PathBuf, json: bool) -> anyhow::Result<()> {
    let lookup = VersionLookup::new(Arc::new(JsonDirCatalog::new(catalog_dir)));
    let results = lookup.lookup_all(&specs).await;

    let outputs: Vec<ResolveOutput> = specs
        .into_iter()
        .zip(results)
        .map(|(spec, result)| match result {
            Ok(resolved) => ResolveOutput::Resolved(resolved),
            Err(e) => ResolveOutput::Failed {
                spec,
                status: e.status_code(),
                error: e.to_string(),
            },
        })
        .collect();

    let failed = outputs
        .iter()
        .filter(|output| matches!(output, ResolveOutput::Failed { .. }))
        .count();

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    } else {
        for output in &outputs {
            match output {
                ResolveOutput::Resolved(resolved) => {
                    println!("{}@{}", resolved.id, resolved.version)
                }
                ResolveOutput::Failed {
                    spec,
                    error,
                    status,
                } => eprintln!("{spec}: {error} ({status})"),
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} specs failed to resolve", failed, outputs.len());
    }
    Ok(())
}
