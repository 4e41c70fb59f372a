// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Ceremony blob storage and size slicing.
//!
//! Each ceremony is two blobs:
//!
//! - `pk.bin`: `[count: u32 BE]` followed by `count` compressed G1 powers.
//! - `vk.bin`: `[1]₂ ‖ [τ]₂ ‖ [1]₁`, compressed.
//!
//! Point encodings are arkworks' compressed form.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ap_types::Curve;
use tracing::debug;

use crate::error::{SetupError, SetupResult};

pub const PK_FILE: &str = "pk.bin";
pub const VK_FILE: &str = "vk.bin";
pub const COUNT_HEADER_LEN: usize = 4;

/// Known powers-of-tau ceremonies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SetupId {
    /// Perpetual Powers of Tau (BN254).
    PerpetualPowersOfTauBn254,
    /// Ethereum KZG ceremony (BLS12-381).
    EthereumKzgBls12_381,
    /// Dusk Network ceremony (BLS12-381).
    DuskBls12_381,
}

impl SetupId {
    pub const ALL: [SetupId; 3] = [
        SetupId::PerpetualPowersOfTauBn254,
        SetupId::EthereumKzgBls12_381,
        SetupId::DuskBls12_381,
    ];

    pub fn curve(self) -> Curve {
        match self {
            SetupId::PerpetualPowersOfTauBn254 => Curve::Bn254,
            SetupId::EthereumKzgBls12_381 | SetupId::DuskBls12_381 => Curve::Bls12_381,
        }
    }

    /// Directory name under a setup root.
    pub fn dir_name(self) -> &'static str {
        match self {
            SetupId::PerpetualPowersOfTauBn254 => "perpetual-powers-of-tau-bn254",
            SetupId::EthereumKzgBls12_381 => "ethereum-kzg-bls12-381",
            SetupId::DuskBls12_381 => "dusk-bls12-381",
        }
    }

    pub fn default_for(curve: Curve) -> Self {
        match curve {
            Curve::Bn254 => SetupId::PerpetualPowersOfTauBn254,
            Curve::Bls12_381 => SetupId::EthereumKzgBls12_381,
        }
    }
}

impl fmt::Display for SetupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for SetupId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SetupId::ALL
            .into_iter()
            .find(|id| id.dir_name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = SetupId::ALL.iter().map(|id| id.dir_name()).collect();
                format!("unknown setup `{s}`, expected one of: {}", known.join(", "))
            })
    }
}

/// The two blobs of one ceremony.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupBlobs {
    pub g1: Vec<u8>,
    pub g2: Vec<u8>,
}

impl SetupBlobs {
    /// Count declared by the G1 header.
    pub fn declared_count(&self) -> SetupResult<usize> {
        let header = self
            .g1
            .get(..COUNT_HEADER_LEN)
            .ok_or(SetupError::MissingHeader { len: self.g1.len() })?;
        let mut word = [0u8; COUNT_HEADER_LEN];
        word.copy_from_slice(header);
        Ok(u32::from_be_bytes(word) as usize)
    }
}

/// Read-only storage of ceremony blobs: an optional ceremony directory with
/// in-memory entries layered on top. Loading always returns a private copy;
/// the store itself is never modified by [`SetupStore::load`].
#[derive(Debug, Clone, Default)]
pub struct SetupStore {
    root: Option<PathBuf>,
    overlay: BTreeMap<SetupId, SetupBlobs>,
}

impl SetupStore {
    /// Blobs live at `<root>/<id>/pk.bin` and `<root>/<id>/vk.bin`.
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self { root: Some(root.into()), overlay: BTreeMap::new() }
    }

    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Adds blobs for `id`. They shadow the ceremony directory for that id
    /// only; other ids still load from disk.
    pub fn with_blobs(mut self, id: SetupId, blobs: SetupBlobs) -> Self {
        self.overlay.insert(id, blobs);
        self
    }

    /// On-disk location of a ceremony, unless it is held in memory.
    pub fn ceremony_dir(&self, id: SetupId) -> Option<PathBuf> {
        if self.overlay.contains_key(&id) {
            return None;
        }
        self.root.as_ref().map(|root| root.join(id.dir_name()))
    }

    fn raw(&self, id: SetupId) -> SetupResult<Cow<'_, SetupBlobs>> {
        if let Some(blobs) = self.overlay.get(&id) {
            return Ok(Cow::Borrowed(blobs));
        }
        let dir = self.ceremony_dir(id).ok_or(SetupError::Missing(id))?;
        Ok(Cow::Owned(SetupBlobs { g1: read_file(&dir.join(PK_FILE))?, g2: read_file(&dir.join(VK_FILE))? }))
    }

    /// Number of G1 powers the ceremony provides.
    pub fn available(&self, id: SetupId) -> SetupResult<usize> {
        let blobs = self.raw(id)?;
        let element = id.curve().parameters().compressed_g1_width;
        let actual = blobs.g1.len().saturating_sub(COUNT_HEADER_LEN) / element;
        Ok(blobs.declared_count()?.min(actual))
    }

    /// Slices the G1 blob down to `required` powers and rewrites its header.
    pub fn load(&self, id: SetupId, required: usize) -> SetupResult<SetupBlobs> {
        if required < 2 {
            return Err(SetupError::InvalidSize { required });
        }
        let blobs = self.raw(id)?;
        let element = id.curve().parameters().compressed_g1_width;

        let declared = blobs.declared_count()?;
        let available = (blobs.g1.len() - COUNT_HEADER_LEN) / element;
        if declared < required || available < required {
            return Err(SetupError::InsufficientParameters {
                required,
                declared,
                available: declared.min(available),
            });
        }

        let mut g1 = blobs.g1[..COUNT_HEADER_LEN + required * element].to_vec();
        g1[..COUNT_HEADER_LEN].copy_from_slice(&(required as u32).to_be_bytes());
        debug!(setup = %id, required, declared, bytes = g1.len(), "sliced setup");

        Ok(SetupBlobs { g1, g2: blobs.g2.clone() })
    }
}

fn read_file(path: &Path) -> SetupResult<Vec<u8>> {
    fs::read(path).map_err(|source| SetupError::Io { path: path.to_path_buf(), source })
}

pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> SetupResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| SetupError::Io { path: parent.to_path_buf(), source })?;
    }
    fs::write(path, bytes).map_err(|source| SetupError::Io { path: path.to_path_buf(), source })
}
