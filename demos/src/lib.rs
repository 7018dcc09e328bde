// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the hoverslop crates.
//!
//! See the `examples/` directory of this package; each demo is a small
//! scripted scenario over the simulated environment.
