// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! KZG setup parameters.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`SetupStore::load`] | Slice a ceremony's G1 blob to the size a circuit needs |
//! | [`Srs::from_blobs`] | Decode sliced blobs into points |
//! | [`trusted_srs`] | Both of the above, with a curve check |
//! | [`insecure::generate`] | Random-τ SRS for tests (`insecure-setup` feature) |

pub mod error;
#[cfg(feature = "insecure-setup")]
pub mod insecure;
pub mod loader;
pub mod srs;

pub use error::{SetupError, SetupResult};
pub use loader::{SetupBlobs, SetupId, SetupStore};
pub use srs::{trusted_srs, Srs, POINT_ENCODING};

/// Extra G1 powers beyond the domain size, for blinding terms.
pub const SRS_PADDING: usize = 5;
