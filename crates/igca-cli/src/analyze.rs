//! Command runners: load inputs, invoke the pipeline, emit JSON.

use std::path::{Path, PathBuf};

use anyhow::Context;
use igca_analytics::{run_analysis, AnalysisBundle, AnalysisOptions};
use igca_core::{AppConfig, Brief};

pub fn run_analyze(
    config: &AppConfig,
    profiles: Option<PathBuf>,
    posts: Option<PathBuf>,
    brief: Option<PathBuf>,
    out: Option<PathBuf>,
    top_n: Option<usize>,
) -> anyhow::Result<()> {
    let profile_path = profiles.unwrap_or_else(|| config.profile_path.clone());
    let post_path = posts.unwrap_or_else(|| config.post_path.clone());
    let out_dir = out.unwrap_or_else(|| config.reports_path.clone());

    let profile_table = igca_loader::load_profiles(&profile_path)?;
    let post_table = igca_loader::load_posts(&post_path)?;

    let brief = load_brief_if_present(brief.as_deref(), &config.brief_path)?;
    if let Some(b) = &brief {
        tracing::info!(client = %b.client, competitors = b.competitors.len(), "brief loaded");
    }

    let options = AnalysisOptions {
        top_n: top_n.unwrap_or(config.top_n),
        highlight: brief.map(|b| b.client),
    };

    let bundle = run_analysis(&profile_table, &post_table, &options);

    let written = write_tables(&bundle, &out_dir)?;
    println!("wrote {written} tables to {}", out_dir.display());
    Ok(())
}

pub fn run_kpis(
    config: &AppConfig,
    profiles: Option<PathBuf>,
    posts: Option<PathBuf>,
) -> anyhow::Result<()> {
    let profile_path = profiles.unwrap_or_else(|| config.profile_path.clone());
    let post_path = posts.unwrap_or_else(|| config.post_path.clone());

    let profile_table = igca_loader::load_profiles(&profile_path)?;
    let post_table = igca_loader::load_posts(&post_path)?;

    let kpis = igca_analytics::summarize(&profile_table, &post_table);
    println!("{}", serde_json::to_string_pretty(&kpis)?);
    Ok(())
}

pub fn run_search(config: &AppConfig, input: Option<PathBuf>) -> anyhow::Result<()> {
    let search_path = input.unwrap_or_else(|| config.search_path.clone());

    let hits = igca_loader::load_search_results(&search_path)?;
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

/// Resolve the brief: an explicitly passed path must exist; the
/// config-default path is optional and silently skipped when absent.
fn load_brief_if_present(
    explicit: Option<&Path>,
    default: &Path,
) -> anyhow::Result<Option<Brief>> {
    let (path, required) = match explicit {
        Some(p) => (p, true),
        None => (default, false),
    };

    if !path.exists() {
        if required {
            anyhow::bail!("brief file {} not found", path.display());
        }
        tracing::debug!(path = %path.display(), "no brief file, rankings will not highlight");
        return Ok(None);
    }

    Ok(Some(igca_core::load_brief(path)?))
}

/// Write each top-level bundle table as `<name>.json` in `out_dir`.
/// Returns the number of files written.
fn write_tables(bundle: &AnalysisBundle, out_dir: &Path) -> anyhow::Result<usize> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let serde_json::Value::Object(tables) = serde_json::to_value(bundle)? else {
        anyhow::bail!("analysis bundle did not serialize to an object");
    };

    let mut written = 0;
    for (name, table) in &tables {
        let path = out_dir.join(format!("{name}.json"));
        std::fs::write(&path, serde_json::to_string_pretty(table)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(table = %name, path = %path.display(), "table written");
        written += 1;
    }

    Ok(written)
}
