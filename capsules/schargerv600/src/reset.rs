// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Soft reset sequences.
//!
//! A soft-reset register is asserted by writing `0x5A` to it and released by
//! writing `0xAC`. Any other value leaves the block alone.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use log::debug;
use schargerv600::page0::{CNTL, FCP_SOFT_RST_CTRL, SOFT_RST_CTRL};
use schargerv600::soft_reset::is_soft_reset_register;
use schargerv600::{RegisterInfo, SoftReset};

use crate::errorcode::ErrorCode;
use crate::paged::PagedRegisters;

/// How long the FCP master is held in reset.
pub const FCP_RESET_HOLD_MS: u32 = 10;

impl<I: I2c> PagedRegisters<I> {
    /// Write the assert or release byte to a soft-reset register. Returns
    /// `INVAL` for any other register.
    pub async fn soft_reset(
        &mut self,
        reg: &RegisterInfo,
        action: SoftReset,
    ) -> Result<(), ErrorCode> {
        if !is_soft_reset_register(reg) {
            return Err(ErrorCode::INVAL);
        }
        self.write_byte(reg.addr, action.byte()).await
    }

    /// Assert a soft reset, hold it for `hold_ms` and release it again. The
    /// release is attempted even when the bus failed on the assert.
    pub async fn pulse_soft_reset<D: DelayNs>(
        &mut self,
        reg: &RegisterInfo,
        delay: &mut D,
        hold_ms: u32,
    ) -> Result<(), ErrorCode> {
        let asserted = self.soft_reset(reg, SoftReset::Assert).await;
        if asserted == Err(ErrorCode::INVAL) {
            return asserted;
        }
        if hold_ms > 0 {
            delay.delay_ms(hold_ms).await;
        }
        let released = self.soft_reset(reg, SoftReset::Release).await;
        asserted.and(released)
    }

    /// Reset the whole charger core. The page select register and the HKADC
    /// go back to their reset state too, so the cached page is dropped and
    /// loop mode counts as off.
    pub async fn reset_chip<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), ErrorCode> {
        debug!("schargerv600: chip soft reset");
        let result = self.pulse_soft_reset(&SOFT_RST_CTRL, delay, 0).await;
        self.invalidate_page();
        self.set_adc_loop(false);
        result
    }

    /// Reset the FCP master and leave it disabled.
    pub async fn reset_fcp_master<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), ErrorCode> {
        let pulsed = self
            .pulse_soft_reset(&FCP_SOFT_RST_CTRL, delay, FCP_RESET_HOLD_MS)
            .await;
        let cleared = self.set(&CNTL, 0).await;
        pulsed.and(cleared)
    }
}
