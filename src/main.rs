// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use docsearch::api::{ResponseStatus, SearchRequest, SearchService};
use docsearch::build::{build_from_collector, BuildOutcome};
use docsearch::cache::IndexCache;
use docsearch::clock::{Clock, SystemClock};
use docsearch::collect::{ManifestCollector, MANIFEST_FILE};
use docsearch::config::Settings;
use docsearch::{logging, FilterKind, ScoredResult, SearchConfig};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings =
        Settings::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init(&settings.logging, cli.verbose);

    match cli.command {
        Commands::Index { input } => {
            let dir = content_dir(input, &settings)?;
            run_index(&dir).await
        }
        Commands::Dump { input, pretty } => {
            let dir = content_dir(input, &settings)?;
            run_dump(&dir, &settings, pretty).await
        }
        Commands::Search {
            query,
            input,
            filter,
            limit,
            json,
        } => {
            let dir = content_dir(input, &settings)?;
            let mut config = settings.search_config();
            if limit.is_some() {
                config.max_results = limit;
            }
            run_search(&dir, &settings, config, &query, filter, json).await
        }
    }
}

fn content_dir(input: Option<PathBuf>, settings: &Settings) -> Result<PathBuf> {
    let dir = input.unwrap_or_else(|| settings.content.dir.clone());
    if !dir.join(MANIFEST_FILE).is_file() {
        bail!(
            "no {} in '{}' (pass --input or set content.dir)",
            MANIFEST_FILE,
            dir.display()
        );
    }
    Ok(dir)
}

fn spinner(message: &str) -> ProgressBar {
    if !atty::is(atty::Stream::Stderr) {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn service_for(dir: &Path, settings: &Settings, config: SearchConfig) -> SearchService {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let collector = Arc::new(ManifestCollector::new(dir));
    let cache = IndexCache::for_collector(collector, Arc::clone(&clock))
        .with_policy(settings.cache_policy());
    SearchService::new(Arc::new(cache), config)
        .with_form_limit(settings.search.form_limit)
        .with_clock(clock)
}

async fn run_index(dir: &Path) -> Result<()> {
    let collector = ManifestCollector::new(dir);
    let pb = spinner("collecting content...");
    let start = Instant::now();
    let outcome = build_from_collector(&collector, &SystemClock).await;
    pb.finish_and_clear();

    let outcome = outcome.with_context(|| format!("failed to build index from '{}'", dir.display()))?;
    print_summary(dir, &outcome, start.elapsed());
    Ok(())
}

fn print_summary(dir: &Path, outcome: &BuildOutcome, elapsed: Duration) {
    let index = &outcome.index;
    let mut by_kind: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for item in &index.items {
        *by_kind.entry(item.kind.to_string()).or_default() += 1;
        let category = item.category.clone().unwrap_or_else(|| "(none)".to_string());
        *by_category.entry(category).or_default() += 1;
    }

    section_top("INDEX");
    row(&format!(" Source      {}", dir.display()));
    row(&format!(
        " Items       {}",
        themed(Role::Count, &[BOLD], &index.len().to_string())
    ));
    row(&format!(" Generated   {}", index.generated_at.to_rfc3339()));
    row(&format!(" Built in    {:.1} ms", elapsed.as_secs_f64() * 1000.0));

    section_mid("BY TYPE");
    for (kind, count) in &by_kind {
        row(&format!(" {} {:>5}", pad_right(kind, 16), count));
    }

    section_mid("BY CATEGORY");
    for (category, count) in &by_category {
        row(&format!(" {} {:>5}", pad_right(&clip(category, 30), 32), count));
    }

    if !outcome.diagnostics.is_empty() {
        section_mid("SKIPPED");
        for diagnostic in &outcome.diagnostics {
            row(&format!(
                " #{:<4} {} {}",
                diagnostic.position,
                pad_right(&clip(&diagnostic.title, 30), 32),
                themed(Role::Warning, &[], &clip(&diagnostic.reason.to_string(), 38))
            ));
        }
    }
    section_bot();
}

async fn run_dump(dir: &Path, settings: &Settings, pretty: bool) -> Result<()> {
    let service = service_for(dir, settings, settings.search_config());
    let pb = spinner("collecting content...");
    let (status, dump) = service.dump().await;
    pb.finish_and_clear();

    if status == ResponseStatus::Unavailable {
        bail!("search index is unavailable");
    }
    let json = if pretty {
        serde_json::to_string_pretty(&dump)?
    } else {
        serde_json::to_string(&dump)?
    };
    println!("{}", json);
    Ok(())
}

async fn run_search(
    dir: &Path,
    settings: &Settings,
    config: SearchConfig,
    query: &str,
    filter: FilterKind,
    json: bool,
) -> Result<()> {
    let service = service_for(dir, settings, config);
    let pb = spinner("collecting content...");
    let snapshot = service.index().await;
    pb.finish_and_clear();

    if snapshot.is_degraded() {
        bail!("search index is unavailable");
    }

    if json {
        let (_, response) = service.query(SearchRequest::new(query, filter)).await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let start = Instant::now();
    let hits = service.engine().search(query, &snapshot.index, filter);
    let elapsed = start.elapsed();
    print_results(query, filter, &hits, elapsed);
    Ok(())
}

fn print_results(query: &str, filter: FilterKind, hits: &[ScoredResult], elapsed: Duration) {
    section_top(&format!("SEARCH \"{}\" in {}", clip(query, 40), filter));
    if hits.is_empty() {
        row(&themed(Role::Muted, &[DIM], " no results"));
    }
    for hit in hits {
        let result = &hit.result;
        row(&format!(
            " {} {} {}",
            score_value(hit.score),
            kind_badge(result.kind),
            themed(Role::Title, &[BOLD], &clip(&result.title, 56))
        ));
        row(&format!("        {}", themed(Role::Muted, &[], &clip(&result.url, 70))));
        if let Some(excerpt) = &result.excerpt {
            row(&format!("        {}", themed(Role::Muted, &[DIM], &clip(excerpt, 70))));
        }
    }
    section_mid("TIMING");
    row(&format!(
        " {} results in {:.3} ms",
        hits.len(),
        elapsed.as_secs_f64() * 1000.0
    ));
    section_bot();
}
