use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use orthosample::api::{stratum_coverage, PointSampler, SamplingMethod, DEFAULT_SEED};
use orthosample::prelude::Vec2;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod io;
mod provenance;

use config::{GenerateConfig, Overrides};

#[derive(Parser)]
#[command(name = "orthosample")]
#[command(about = "Generate and check stratified sample point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate points and write them as CSV (or Parquet for `.parquet` paths)
    Generate {
        /// JSON config; flags below override its fields
        #[arg(long)]
        config: Option<PathBuf>,
        /// ortho | lhs | pure
        #[arg(long)]
        method: Option<String>,
        #[arg(long)]
        major: Option<usize>,
        #[arg(long)]
        runs: Option<usize>,
        /// Point count for pure/LHS (defaults to major²)
        #[arg(long)]
        samples: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Check range, count and (for ortho) per-run stratification of a point file
    Check {
        #[arg(long)]
        input: PathBuf,
        /// JSON config the file was generated from
        #[arg(long)]
        config: Option<PathBuf>,
        /// ortho | lhs | pure
        #[arg(long)]
        method: Option<String>,
        #[arg(long)]
        major: Option<usize>,
        #[arg(long)]
        runs: Option<usize>,
        #[arg(long)]
        samples: Option<usize>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            config,
            method,
            major,
            runs,
            samples,
            seed,
            out,
        } => {
            let overrides = Overrides {
                method,
                major,
                runs,
                samples,
                seed,
            };
            let cfg = GenerateConfig::resolve(config.as_deref(), overrides)?;
            generate(&cfg, &out).map(|_| ())
        }
        Action::Check {
            input,
            config,
            method,
            major,
            runs,
            samples,
        } => {
            let overrides = Overrides {
                method,
                major,
                runs,
                samples,
                ..Overrides::default()
            };
            check_with(&input, config.as_deref(), overrides).map(|_| ())
        }
        Action::Report => report(),
    }
}

fn generate(cfg: &GenerateConfig, out: &Path) -> Result<PathBuf> {
    let sampler = cfg.build()?;
    tracing::info!(
        method = %sampler.method(),
        points = sampler.point_count(),
        seed = sampler.seed(),
        out = %out.display(),
        "generate"
    );
    let points = sampler.generate()?;
    io::write_points(out, &points)?;
    let mut payload = provenance::Payload::new(
        sampler.method().name(),
        serde_json::to_value(cfg)?,
        &points,
    );
    if sampler.method() == SamplingMethod::Orthogonal {
        let coverage = stratum_coverage(&cfg.ortho_params()?, &points.re, &points.im)?;
        let stratified = coverage.iter().filter(|c| c.is_stratified()).count();
        payload = payload.with_stratified_runs(stratified);
    }
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(prov)
}

/// Summary of a passing check.
#[derive(Debug, PartialEq, Eq)]
struct CheckSummary {
    points: usize,
    runs_checked: usize,
}

/// Check a point file; any config file or layout flag enables the count check.
fn check_with(input: &Path, config: Option<&Path>, overrides: Overrides) -> Result<CheckSummary> {
    let counted = config.is_some()
        || overrides.method.is_some()
        || overrides.major.is_some()
        || overrides.runs.is_some()
        || overrides.samples.is_some();
    let cfg = GenerateConfig::resolve(config, overrides)?;
    check(input, &cfg, counted)
}

/// Range check always; with `counted`, the point count the config implies and,
/// for orthogonal sampling, stratification of every run.
fn check(input: &Path, cfg: &GenerateConfig, counted: bool) -> Result<CheckSummary> {
    let (re, im) = io::read_points(input)?;
    let region = cfg.region()?;
    let outside = re
        .iter()
        .zip(&im)
        .filter(|(x, y)| !region.contains(Vec2::new(**x, **y)))
        .count();
    if outside > 0 {
        bail!("{outside} of {} points lie outside the region", re.len());
    }
    let mut runs_checked = 0;
    if counted {
        let sampler = cfg.build()?;
        let expected = sampler.point_count();
        if re.len() != expected {
            bail!(
                "expected {expected} points for {} (major={} runs={} samples={:?}), found {}",
                sampler.method(),
                cfg.major,
                cfg.runs,
                cfg.samples,
                re.len()
            );
        }
        if sampler.method() == SamplingMethod::Orthogonal {
            let coverage = stratum_coverage(&cfg.ortho_params()?, &re, &im)?;
            let failing: Vec<_> = coverage.iter().filter(|c| !c.is_stratified()).collect();
            for c in &failing {
                tracing::warn!(
                    run = c.run,
                    missing_x = c.missing_x,
                    missing_y = c.missing_y,
                    "run_not_stratified"
                );
            }
            if !failing.is_empty() {
                bail!("{} of {} runs are not stratified", failing.len(), coverage.len());
            }
            runs_checked = coverage.len();
        }
    }
    tracing::info!(points = re.len(), runs_checked, "check_ok");
    Ok(CheckSummary {
        points: re.len(),
        runs_checked,
    })
}

fn report() -> Result<()> {
    let methods: Vec<_> = SamplingMethod::ALL
        .iter()
        .map(|m| serde_json::json!({"name": m.name(), "code": m.code()}))
        .collect();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "library_version": orthosample::VERSION,
        "default_seed": DEFAULT_SEED,
        "methods": methods
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cfg(method: &str, major: usize, runs: usize) -> GenerateConfig {
        GenerateConfig {
            method: method.to_string(),
            major,
            runs,
            ..GenerateConfig::default()
        }
    }

    #[test]
    fn generated_ortho_file_passes_check() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("run/points.csv");
        let c = cfg("ortho", 6, 3);
        let prov = generate(&c, &out).unwrap();
        assert!(prov.ends_with("points.provenance.json"));
        let summary = check(&out, &c, true).unwrap();
        assert_eq!(
            summary,
            CheckSummary {
                points: 108,
                runs_checked: 3
            }
        );
    }

    #[test]
    fn pure_file_fails_stratification() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("pure.csv");
        generate(&cfg("pure", 12, 1), &out).unwrap();
        // Range holds, stratification does not.
        assert!(check(&out, &cfg("ortho", 12, 1), false).is_ok());
        assert!(check(&out, &cfg("ortho", 12, 1), true).is_err());
    }

    #[test]
    fn count_mismatch_is_reported() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("p.parquet");
        generate(&cfg("ortho", 4, 1), &out).unwrap();
        assert!(check(&out, &cfg("ortho", 4, 2), true).is_err());
    }

    #[test]
    fn lhs_file_passes_against_its_own_config() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("lhs.csv");
        let c = GenerateConfig {
            samples: Some(100),
            ..cfg("lhs", 8, 1)
        };
        generate(&c, &out).unwrap();
        let summary = check(&out, &c, true).unwrap();
        assert_eq!(
            summary,
            CheckSummary {
                points: 100,
                runs_checked: 0
            }
        );
        let short = GenerateConfig {
            samples: Some(99),
            ..c
        };
        assert!(check(&out, &short, true).is_err());
    }

    #[test]
    fn pure_file_passes_via_config_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("pure.csv");
        let c = cfg("pure", 7, 1);
        generate(&c, &out).unwrap();
        let path = dir.path().join("pure.json");
        std::fs::write(&path, serde_json::to_vec(&c).unwrap()).unwrap();
        let summary = check_with(&out, Some(path.as_path()), Overrides::default()).unwrap();
        assert_eq!(summary.points, 49);
        assert_eq!(summary.runs_checked, 0);
    }

    #[test]
    fn runs_flag_alone_enables_the_count_check() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("two_runs.csv");
        generate(&cfg("ortho", 50, 2), &out).unwrap();
        let flags = |runs| Overrides {
            runs: Some(runs),
            ..Overrides::default()
        };
        let summary = check_with(&out, None, flags(2)).unwrap();
        assert_eq!(summary.runs_checked, 2);
        assert!(check_with(&out, None, flags(3)).is_err());
        // No layout flags: range only.
        let range_only = check_with(&out, None, Overrides::default()).unwrap();
        assert_eq!(range_only.runs_checked, 0);
    }

    #[test]
    fn ortho_sidecar_records_stratified_runs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("o.csv");
        let prov = generate(&cfg("ortho", 5, 3), &out).unwrap();
        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(prov).unwrap()).unwrap();
        assert_eq!(doc["output"]["stratified_runs"], 3);
        assert_eq!(doc["output"]["run_len"], 25);
    }
}
