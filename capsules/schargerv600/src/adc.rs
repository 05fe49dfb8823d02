// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Housekeeping ADC helpers.
//!
//! The HKADC either converts the selected channels once per start request
//! (single mode) or keeps cycling through them (loop mode). In both cases a
//! sample is only meaningful once `HKADC_DATA_VALID` reports it, and a
//! pulse-charge pause can hide a finished conversion.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! regs.enable_adc().await?;
//! regs.select_adc_channel(AdcChannel::Vbus).await?;
//! regs.start_adc_conversion().await?;
//! regs.wait_adc_valid(&mut delay).await?;
//! let vbus = regs.read_adc_sample(AdcChannel::Vbus).await?;
//! ```

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use schargerv600::hkadc::{sample, AdcChannel, ChannelSet};
use schargerv600::page0::{
    HKADC_CTRL0, HKADC_CTRL1, HKADC_DATA_BASE, HKADC_DATA_VALID, HKADC_RD_SEQ, HKADC_SEQ_CH_H,
    HKADC_START,
};

use crate::errorcode::ErrorCode;
use crate::paged::PagedRegisters;

/// How often the valid flag is polled before giving up.
pub const ADC_VALID_POLLS: usize = 10;
const ADC_VALID_POLL_MS: u32 = 1;
/// Time the loop needs before the first result is readable.
const ADC_LOOP_SETTLE_MS: u32 = 2;
const ADC_DISABLE_MS: u32 = 1;

impl<I: I2c> PagedRegisters<I> {
    /// Convert only `ch` from now on.
    pub async fn select_adc_channel(&mut self, ch: AdcChannel) -> Result<(), ErrorCode> {
        let (low, high) = ch.select_bits();
        self.write_adc_selection(low, high).await
    }

    pub async fn select_adc_channels(&mut self, channels: ChannelSet) -> Result<(), ErrorCode> {
        if channels.is_empty() {
            return Err(ErrorCode::INVAL);
        }
        let (low, high) = channels.select_bits();
        self.write_adc_selection(low, high).await
    }

    async fn write_adc_selection(&mut self, low: u8, high: u8) -> Result<(), ErrorCode> {
        // HKADC_SEQ_CH_L directly follows HKADC_SEQ_CH_H.
        self.write_block(HKADC_SEQ_CH_H.addr, &[high, low]).await
    }

    /// Power the HKADC in single conversion mode.
    pub async fn enable_adc(&mut self) -> Result<(), ErrorCode> {
        self.write(&HKADC_START, HKADC_START::START::CLEAR).await?;
        self.set(&HKADC_CTRL1, HKADC_CTRL1.reset).await?;
        self.modify(&HKADC_CTRL0, HKADC_CTRL0::HKADC_SEL::SET).await?;
        self.write(&HKADC_CTRL0, HKADC_CTRL0::EN::SET + HKADC_CTRL0::HKADC_SEL::SET)
            .await?;
        self.set_adc_loop(false);
        Ok(())
    }

    pub async fn disable_adc<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), ErrorCode> {
        self.modify(&HKADC_CTRL0, HKADC_CTRL0::HKADC_SEL::CLEAR).await?;
        delay.delay_ms(ADC_DISABLE_MS).await;
        self.set(&HKADC_CTRL0, 0).await?;
        self.set_adc_loop(false);
        Ok(())
    }

    /// Request one conversion of the selected channels.
    pub async fn start_adc_conversion(&mut self) -> Result<(), ErrorCode> {
        self.write(&HKADC_START, HKADC_START::START::SET).await
    }

    /// Keep converting the channels the charger needs while it runs, and wait
    /// until the first results are in. Does nothing if the loop is already
    /// running, so the conversion is never interrupted.
    pub async fn enable_adc_loop<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), ErrorCode> {
        if self.adc_loop_enabled() {
            return Ok(());
        }
        self.set(&HKADC_CTRL1, HKADC_CTRL1.reset).await?;
        self.select_adc_channels(ChannelSet::charging_loop()).await?;
        self.write(&HKADC_CTRL0, HKADC_CTRL0::LOOP::SET + HKADC_CTRL0::HKADC_SEL::SET)
            .await?;
        self.write(
            &HKADC_CTRL0,
            HKADC_CTRL0::EN::SET + HKADC_CTRL0::LOOP::SET + HKADC_CTRL0::HKADC_SEL::SET,
        )
        .await?;
        self.start_adc_conversion().await?;
        self.set_adc_loop(true);
        delay.delay_ms(ADC_LOOP_SETTLE_MS).await;
        Ok(())
    }

    /// Stop loop mode. Does nothing unless [`Self::enable_adc_loop`] turned
    /// it on.
    pub async fn disable_adc_loop<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), ErrorCode> {
        if !self.adc_loop_enabled() {
            return Ok(());
        }
        self.write(&HKADC_START, HKADC_START::START::CLEAR).await?;
        self.modify(&HKADC_CTRL0, HKADC_CTRL0::HKADC_SEL::CLEAR).await?;
        self.modify(&HKADC_CTRL0, HKADC_CTRL0::LOOP::CLEAR).await?;
        delay.delay_ms(ADC_DISABLE_MS).await;
        self.set(&HKADC_CTRL0, 0).await?;
        self.set_adc_loop(false);
        Ok(())
    }

    /// Latch the latest loop results into the data registers.
    pub async fn request_adc_sequence(&mut self) -> Result<(), ErrorCode> {
        self.write(&HKADC_RD_SEQ, HKADC_RD_SEQ::RD_SEQ::SET).await
    }

    /// Whether the data registers hold a finished conversion. A pending
    /// pulse-charge pause counts as not valid.
    pub async fn adc_conversion_valid(&mut self) -> Result<bool, ErrorCode> {
        let status = self.read(&HKADC_DATA_VALID).await?;
        if status.is_set(HKADC_DATA_VALID::PULSE_NO_CHG) {
            return Ok(false);
        }
        Ok(status.is_set(HKADC_DATA_VALID::DATA_VALID))
    }

    /// Poll [`Self::adc_conversion_valid`] every millisecond. A failed read
    /// uses up a poll but is retried at once. Returns `BUSY` if the
    /// conversion never completes.
    pub async fn wait_adc_valid<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), ErrorCode> {
        for _ in 0..ADC_VALID_POLLS {
            match self.adc_conversion_valid().await {
                Ok(true) => return Ok(()),
                Ok(false) => delay.delay_ms(ADC_VALID_POLL_MS).await,
                Err(_) => continue,
            }
        }
        Err(ErrorCode::BUSY)
    }

    /// The 14-bit raw sample of `ch`.
    pub async fn read_adc_sample(&mut self, ch: AdcChannel) -> Result<u16, ErrorCode> {
        let mut data = [0; 2];
        self.read_block(ch.data_low(), &mut data).await?;
        Ok(sample(data[0], data[1]))
    }

    /// Raw samples of every channel, indexed by channel number, read in one
    /// burst so that they come from the same sequence.
    pub async fn read_adc_samples(&mut self) -> Result<[u16; AdcChannel::ALL.len()], ErrorCode> {
        let mut data = [0; 2 * AdcChannel::ALL.len()];
        self.read_block(HKADC_DATA_BASE, &mut data).await?;
        let mut samples = [0; AdcChannel::ALL.len()];
        for (out, pair) in samples.iter_mut().zip(data.chunks_exact(2)) {
            *out = sample(pair[0], pair[1]);
        }
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{block_on, FakeDelay, FakeScharger, ADDRESS};
    use schargerv600::page0;

    #[test]
    fn selection_writes_both_registers() {
        let mut regs = PagedRegisters::new(FakeScharger::new(), ADDRESS);
        block_on(async {
            regs.select_adc_channel(AdcChannel::Tsbat).await.unwrap();
            assert_eq!(regs.read_byte(page0::HKADC_SEQ_CH_H.addr).await, Ok(0x08));
            assert_eq!(regs.read_byte(page0::HKADC_SEQ_CH_L.addr).await, Ok(0x00));

            regs.select_adc_channels(ChannelSet::charging_loop())
                .await
                .unwrap();
            assert_eq!(regs.read_byte(page0::HKADC_SEQ_CH_H.addr).await, Ok(0x39));
            assert_eq!(regs.read_byte(page0::HKADC_SEQ_CH_L.addr).await, Ok(0x3F));

            assert_eq!(
                regs.select_adc_channels(ChannelSet::empty()).await,
                Err(ErrorCode::INVAL)
            );
        });
    }

    #[test]
    fn loop_mode_programming() {
        let mut regs = PagedRegisters::new(FakeScharger::new(), ADDRESS);
        let mut delay = FakeDelay::default();
        block_on(async {
            regs.enable_adc_loop(&mut delay).await.unwrap();
            assert_eq!(regs.read_byte(page0::HKADC_CTRL0.addr).await, Ok(0xB0));
            assert_eq!(regs.read_byte(page0::HKADC_START.addr).await, Ok(0x01));
            assert_eq!(regs.read_byte(page0::HKADC_CTRL1.addr).await, Ok(0x67));

            regs.disable_adc_loop(&mut delay).await.unwrap();
            assert_eq!(regs.read_byte(page0::HKADC_CTRL0.addr).await, Ok(0x00));
            assert_eq!(regs.read_byte(page0::HKADC_START.addr).await, Ok(0x00));

            regs.enable_adc().await.unwrap();
            assert_eq!(regs.read_byte(page0::HKADC_CTRL0.addr).await, Ok(0x90));
        });
        assert_eq!(delay.waited_ns, 3_000_000);
    }

    #[test]
    fn loop_mode_is_programmed_once() {
        let mut once = PagedRegisters::new(FakeScharger::new(), ADDRESS);
        let mut twice = PagedRegisters::new(FakeScharger::new(), ADDRESS);
        let mut delay = FakeDelay::default();
        block_on(async {
            // Nothing to stop yet.
            twice.disable_adc_loop(&mut delay).await.unwrap();
            once.enable_adc_loop(&mut delay).await.unwrap();
            twice.enable_adc_loop(&mut delay).await.unwrap();
            twice.enable_adc_loop(&mut delay).await.unwrap();
            assert!(twice.adc_loop_enabled());
        });
        assert_eq!(delay.waited_ns, 4_000_000);
        assert_eq!(twice.release().transfers, once.release().transfers);
    }

    #[test]
    fn single_mode_ends_loop_mode() {
        let mut regs = PagedRegisters::new(FakeScharger::new(), ADDRESS);
        let mut delay = FakeDelay::default();
        block_on(async {
            regs.enable_adc_loop(&mut delay).await.unwrap();
            regs.enable_adc().await.unwrap();
            assert!(!regs.adc_loop_enabled());
            regs.enable_adc_loop(&mut delay).await.unwrap();
            assert_eq!(regs.read_byte(page0::HKADC_CTRL0.addr).await, Ok(0xB0));
        });
        assert_eq!(delay.waited_ns, 4_000_000);
    }

    #[test]
    fn failed_status_reads_do_not_sleep() {
        let mut fake = FakeScharger::new();
        fake.nack = true;
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        let mut delay = FakeDelay::default();
        assert_eq!(block_on(regs.wait_adc_valid(&mut delay)), Err(ErrorCode::BUSY));
        assert_eq!(delay.waited_ns, 0);
        assert_eq!(regs.bus_errors(), ADC_VALID_POLLS as u32);
    }

    #[test]
    fn pulse_pause_hides_valid_data() {
        let mut fake = FakeScharger::new();
        fake.set_mem(page0::HKADC_DATA_VALID.addr, 0x11);
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        let mut delay = FakeDelay::default();
        block_on(async {
            assert_eq!(regs.adc_conversion_valid().await, Ok(false));
            assert_eq!(regs.wait_adc_valid(&mut delay).await, Err(ErrorCode::BUSY));
        });
        assert_eq!(delay.waited_ns, ADC_VALID_POLLS as u64 * 1_000_000);

        let mut fake = regs.release();
        fake.set_mem(page0::HKADC_DATA_VALID.addr, 0x01);
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        block_on(async {
            assert_eq!(regs.adc_conversion_valid().await, Ok(true));
            assert_eq!(regs.wait_adc_valid(&mut delay).await, Ok(()));
        });
    }

    #[test]
    fn samples_are_fourteen_bits() {
        let mut fake = FakeScharger::new();
        fake.set_mem(page0::VBUS_ADC_L.addr, 0x34);
        fake.set_mem(page0::VBUS_ADC_H.addr, 0xD2);
        fake.set_mem(page0::TSCHIP_ADC_L.addr, 0xFF);
        fake.set_mem(page0::TSCHIP_ADC_H.addr, 0xFF);
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        block_on(async {
            regs.request_adc_sequence().await.unwrap();
            assert_eq!(regs.read_adc_sample(AdcChannel::Vbus).await, Ok(0x1234));
            let all = regs.read_adc_samples().await.unwrap();
            assert_eq!(all[AdcChannel::Vbus.index() as usize], 0x1234);
            assert_eq!(all[AdcChannel::Tschip.index() as usize], 0x3FFF);
            assert_eq!(all[AdcChannel::Vusb.index() as usize], 0);
        });
        assert_eq!(regs.release().mem(page0::HKADC_RD_SEQ.addr), 0x01);
    }
}
