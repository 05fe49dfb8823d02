// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Compile-time configuration of the register access layer.
//!
//! As in the kernel, this is the only place where Cargo features are turned
//! into configuration. Everything else reads [`CONFIG`] so that every code
//! path is type-checked regardless of the enabled features.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether every register read and write is logged at trace level,
    /// including the page switches they cause.
    pub(crate) trace_register_access: bool,

    /// Number of bus failures after which an error is logged and the failure
    /// counter starts over. Individual failures are only logged as warnings.
    pub(crate) bus_error_limit: u32,
}

pub(crate) const CONFIG: Config = Config {
    trace_register_access: cfg!(feature = "trace_register_access"),
    bus_error_limit: 20,
};
