//! Loading of compiled contract artifacts from the build output directory

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// A compiled contract artifact, produced by the contract build toolchain
/// and resolved by logical contract name
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The logical name of the contract
    pub contract_name: String,
    /// The contract ABI
    pub abi: Abi,
    /// The hex-encoded creation bytecode
    bytecode: String,
}

impl ContractArtifact {
    /// Load the artifact for the contract named `contract_name` from the
    /// artifacts directory.
    ///
    /// The artifact is the JSON file named `<contract_name>.json`, possibly
    /// nested in a per-source subdirectory of the artifacts directory.
    pub fn load(artifacts_dir: &str, contract_name: &str) -> Result<Self, ScriptError> {
        let file_name = format!("{contract_name}.{ARTIFACT_EXTENSION}");
        let file_path =
            find_artifact_file(Path::new(artifacts_dir), &file_name).ok_or_else(|| {
                ScriptError::ArtifactParsing(format!(
                    "no artifact named `{contract_name}` found under {artifacts_dir}"
                ))
            })?;

        let file_contents = fs::read_to_string(&file_path)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        serde_json::from_str(&file_contents)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }

    /// The creation bytecode of the contract
    pub fn bytecode(&self) -> Result<Bytes, ScriptError> {
        hex::decode(self.bytecode.trim_start_matches("0x"))
            .map(Bytes::from)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }
}

/// Search `dir` recursively for a file named `file_name`
fn find_artifact_file(dir: &Path, file_name: &str) -> Option<PathBuf> {
    for entry in fs::read_dir(dir).ok()?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if let Some(found) = find_artifact_file(&path, file_name) {
                return Some(found);
            }
        } else if path.file_name() == Some(OsStr::new(file_name)) {
            return Some(path);
        }
    }

    None
}
