// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Writes proof and public-input blobs to disk.

use std::fs;
use std::path::Path;

use ap_types::{SupportedCurve, Witness};
use tracing::debug;

use crate::codec::{encode_proof, encode_public_inputs};
use crate::error::{SdkError, SdkResult};

pub const PROOF_EXTENSION: &str = "proof";
pub const PUBLIC_INPUTS_EXTENSION: &str = "public_inputs";

pub fn write_blob(path: &Path, bytes: &[u8]) -> SdkResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| SdkError::Io { path: parent.to_path_buf(), bytes: bytes.len(), source })?;
    }
    fs::write(path, bytes).map_err(|source| SdkError::Io { path: path.to_path_buf(), bytes: bytes.len(), source })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote blob");
    Ok(())
}

/// Writes `<stem>.proof` and `<stem>.public_inputs` under `dir` and returns
/// their sizes.
pub fn export_proof_and_public_inputs<C: SupportedCurve>(
    dir: &Path,
    stem: &str,
    proof: &ap_types::Proof<C>,
    witness: &Witness<C::Fr>,
) -> SdkResult<(usize, usize)> {
    let proof_bytes = encode_proof(proof);
    let public_bytes = encode_public_inputs(witness)?;
    write_blob(&dir.join(format!("{stem}.{PROOF_EXTENSION}")), &proof_bytes)?;
    write_blob(&dir.join(format!("{stem}.{PUBLIC_INPUTS_EXTENSION}")), &public_bytes)?;
    Ok((proof_bytes.len(), public_bytes.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_blob_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.proof");
        write_blob(&path, &[1, 2, 3]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_io_error_names_path_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        let err = write_blob(&blocker.join("child.proof"), &[0u8; 32]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("32 bytes"), "{msg}");
        assert!(msg.contains("file"), "{msg}");
    }
}
