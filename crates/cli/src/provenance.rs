use anyhow::{Context, Result};
use orthosample::api::PointSet;
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What was sampled and how the output is laid out.
pub struct Payload {
    pub method: String,
    pub params: Value,
    pub points: usize,
    pub run_len: usize,
    /// Runs that passed the stratum check; `None` for unstratified methods.
    pub stratified_runs: Option<usize>,
}

impl Payload {
    pub fn new(method: impl Into<String>, params: Value, points: &PointSet) -> Self {
        Self {
            method: method.into(),
            params,
            points: points.len(),
            run_len: points.run_len(),
            stratified_runs: None,
        }
    }

    pub fn with_stratified_runs(mut self, runs: usize) -> Self {
        self.stratified_runs = Some(runs);
        self
    }

    fn runs(&self) -> usize {
        self.points.checked_div(self.run_len).unwrap_or(0)
    }
}

/// Write `<stem>.provenance.json` beside the point file.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    if let Some(dir) = sidecar.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let at = Location::caller();
    let doc = json!({
        "sampler": {
            "method": payload.method,
            "params": payload.params,
        },
        "output": {
            "path": artifact.to_string_lossy(),
            "points": payload.points,
            "runs": payload.runs(),
            "run_len": payload.run_len,
            "stratified_runs": payload.stratified_runs,
        },
        "build": {
            "code_rev": current_git_rev(),
            "library_version": orthosample::VERSION,
            "callsite": format!("{}:{}", at.file(), at.line()),
        }
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse`, else `unknown`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status.success().then_some(())?;
            let rev = String::from_utf8(out.stdout).ok()?;
            Some(rev.trim().to_owned()).filter(|rev| !rev.is_empty())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}
