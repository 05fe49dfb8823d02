// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register access for the SchargerV600 (Hi6526) charger over I2C.
//!
//! [`PagedRegisters`] wraps an `embedded-hal-async` I2C bus and takes care of
//! the page select register, so callers address every register by its
//! flattened address from the `schargerv600` register map. On top of raw and
//! typed register access it provides the HKADC, soft-reset, payload window,
//! identification and trim helpers the charger drivers need.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! use capsules_schargerv600::PagedRegisters;
//! use schargerv600::{page1, pd};
//!
//! let mut regs = PagedRegisters::new(i2c, 0x6B);
//! let role = regs.read(&pd::PD_ROLE_CTRL).await?;
//! regs.modify(&page1::CHARGER_CFG_REG_8, page1::CHARGER_CFG_REG_8::VBUS_VSET::V9)
//!     .await?;
//! ```
//!
//! Bus errors are logged through the `log` facade. Enabling the
//! `trace_register_access` feature also logs every access at trace level.

#![no_std]
#![forbid(unsafe_code)]

mod config;
mod errorcode;

pub mod adc;
pub mod dump;
pub mod identity;
pub mod paged;
pub mod payload;
pub mod reset;

#[cfg(test)]
mod fake;

pub use crate::errorcode::ErrorCode;
pub use crate::paged::PagedRegisters;

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
