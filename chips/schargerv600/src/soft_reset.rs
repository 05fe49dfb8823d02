// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Magic-byte protocol of the `*_SOFT_RST_CTRL` registers.
//!
//! A block is held in reset from the moment `0x5A` is written until `0xAC`
//! is written to the same register. No other value has any effect.

use crate::page0;
use crate::regmap::RegisterInfo;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum SoftReset {
    Assert = 0x5A,
    Release = 0xAC,
}

impl SoftReset {
    pub const fn byte(self) -> u8 {
        self as u8
    }

    pub const fn from_byte(value: u8) -> Option<SoftReset> {
        match value {
            0x5A => Some(SoftReset::Assert),
            0xAC => Some(SoftReset::Release),
            _ => None,
        }
    }
}

/// Registers that follow the soft-reset protocol.
pub const SOFT_RESET_REGISTERS: [RegisterInfo; 2] =
    [page0::SOFT_RST_CTRL.info(), page0::FCP_SOFT_RST_CTRL.info()];

pub fn is_soft_reset_register(reg: &RegisterInfo) -> bool {
    SOFT_RESET_REGISTERS.iter().any(|r| r.addr == reg.addr)
}
