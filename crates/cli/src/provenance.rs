use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: subcommand, its parameters, and the files it
/// read and wrote.
#[derive(Debug)]
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub inputs: Vec<String>,
    /// Written files; defaults to the artifact itself when empty.
    pub outputs: Vec<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_inputs<I, P>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.inputs = inputs.into_iter().map(|p| display(p.as_ref())).collect();
        self
    }

    pub fn with_outputs<I, P>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.outputs = outputs.into_iter().map(|p| display(p.as_ref())).collect();
        self
    }
}

fn display(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

/// Write `<artifact stem>.provenance.json` next to `artifact` with the code
/// revision, library version, callsite, and payload.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, mut payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    if payload.outputs.is_empty() {
        payload.outputs.push(display(artifact));
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": supnet::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "inputs": payload.inputs,
        "outputs": payload.outputs
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from the build env, the runtime env, or `git`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/runs/witness.txt"));
        assert_eq!(derived, Path::new("/tmp/runs/witness.provenance.json"));
        let bare = provenance_path(Path::new("/tmp/runs/net"));
        assert_eq!(bare, Path::new("/tmp/runs/net.provenance.json"));
    }

    #[test]
    fn sidecar_defaults_outputs_to_artifact() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("witness.txt");
        fs::write(&artifact, "0 1\n").unwrap();
        let payload = Payload::new("exact", json!({"family": "minimal"}))
            .with_inputs([dir.path().join("net.txt")]);
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "exact");
        assert_eq!(parsed["version"], supnet::VERSION);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["family"], "minimal");
    }

    #[test]
    fn sidecar_keeps_explicit_outputs() {
        let dir = tempdir().unwrap();
        let prefix = dir.path().join("sub").join("net");
        let files = [dir.path().join("sub/net_0.txt"), dir.path().join("sub/net_1.txt")];
        let payload = Payload::new("generate", json!({})).with_outputs(&files);
        let prov_path = write_sidecar(&prefix, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"].as_array().unwrap().len(), 2);
    }
}
