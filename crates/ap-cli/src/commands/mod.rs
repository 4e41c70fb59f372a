// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod abi;
pub mod compile;
pub mod config;
pub mod prove;
pub mod setup_info;
pub mod verify;
