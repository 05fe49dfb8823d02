// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Housekeeping ADC channel map.
//!
//! Every channel owns a low/high pair of data registers in Page0. A sample is
//! 14 bits wide: all 8 bits of the low register and the bottom 6 bits of the
//! high register.
//!
//! ```rust,ignore
//! use schargerv600::hkadc::{sample, AdcChannel};
//!
//! let ch = AdcChannel::Vbus;
//! let (lo, hi) = (ch.data_low(), ch.data_high());
//! // ... read both bytes ...
//! let raw = sample(lo_byte, hi_byte);
//! ```

use crate::page0;
use crate::regmap::{Page, RegAddr};

/// Number of bits in one HKADC sample.
pub const SAMPLE_BITS: u32 = 14;

/// Mask applied to the high data register.
pub const SAMPLE_HIGH_MASK: u8 = 0x3F;

/// Channels `0..CHANNEL_SEL_L_MAX` are selected through `HKADC_SEQ_CH_L`,
/// the others through `HKADC_SEQ_CH_H`.
pub const CHANNEL_SEL_L_MAX: u8 = 8;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum AdcChannel {
    Vusb = 0,
    Ibus = 1,
    Vbus = 2,
    Vout = 3,
    Vbat = 4,
    Ibat = 5,
    Dpdm = 6,
    Acr = 7,
    IbusRef = 8,
    Vptat = 9,
    Vref = 10,
    Tsbat = 11,
    Tsbus = 12,
    Tschip = 13,
}

impl AdcChannel {
    pub const ALL: [AdcChannel; 14] = [
        AdcChannel::Vusb,
        AdcChannel::Ibus,
        AdcChannel::Vbus,
        AdcChannel::Vout,
        AdcChannel::Vbat,
        AdcChannel::Ibat,
        AdcChannel::Dpdm,
        AdcChannel::Acr,
        AdcChannel::IbusRef,
        AdcChannel::Vptat,
        AdcChannel::Vref,
        AdcChannel::Tsbat,
        AdcChannel::Tsbus,
        AdcChannel::Tschip,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Low byte of this channel's sample.
    pub const fn data_low(self) -> RegAddr {
        RegAddr::new(Page::Page0, page0::HKADC_DATA_BASE.page_offset() + 2 * self as u8)
    }

    /// High byte of this channel's sample, directly after the low byte.
    pub const fn data_high(self) -> RegAddr {
        RegAddr::new(Page::Page0, self.data_low().page_offset() + 1)
    }

    /// `(HKADC_SEQ_CH_L, HKADC_SEQ_CH_H)` values that select only this
    /// channel. The IBUS conversion needs its reference channel too, so
    /// selecting `Ibus` also sets the `IbusRef` bit.
    pub const fn select_bits(self) -> (u8, u8) {
        let ch = self as u8;
        let (low, mut high) = if ch < CHANNEL_SEL_L_MAX {
            (1 << ch, 0)
        } else {
            (0, 1 << (ch - CHANNEL_SEL_L_MAX))
        };
        if matches!(self, AdcChannel::Ibus) {
            high |= 1 << (AdcChannel::IbusRef as u8 - CHANNEL_SEL_L_MAX);
        }
        (low, high)
    }
}

impl TryFrom<u8> for AdcChannel {
    type Error = ();

    fn try_from(value: u8) -> Result<AdcChannel, ()> {
        AdcChannel::ALL.get(value as usize).copied().ok_or(())
    }
}

/// Combine the two data bytes of a channel into one 14-bit sample.
pub const fn sample(low: u8, high: u8) -> u16 {
    low as u16 | (((high & SAMPLE_HIGH_MASK) as u16) << 8)
}

/// A set of channels converted together in loop mode.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ChannelSet(u16);

impl ChannelSet {
    pub const fn empty() -> ChannelSet {
        ChannelSet(0)
    }

    /// The channels the charger keeps converting while it is running:
    /// `VUSB`, `IBUS`, `VBUS`, `VOUT`, `VBAT`, `IBAT`, `IBUS_REF` and the
    /// three temperature channels.
    pub const fn charging_loop() -> ChannelSet {
        ChannelSet::empty()
            .with(AdcChannel::Vusb)
            .with(AdcChannel::Ibus)
            .with(AdcChannel::Vbus)
            .with(AdcChannel::Vout)
            .with(AdcChannel::Vbat)
            .with(AdcChannel::Ibat)
            .with(AdcChannel::IbusRef)
            .with(AdcChannel::Tsbat)
            .with(AdcChannel::Tsbus)
            .with(AdcChannel::Tschip)
    }

    pub const fn with(self, ch: AdcChannel) -> ChannelSet {
        ChannelSet(self.0 | 1 << ch as u16)
    }

    pub const fn contains(self, ch: AdcChannel) -> bool {
        self.0 & (1 << ch as u16) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `(HKADC_SEQ_CH_L, HKADC_SEQ_CH_H)` for this set.
    pub const fn select_bits(self) -> (u8, u8) {
        ((self.0 & 0xFF) as u8, (self.0 >> CHANNEL_SEL_L_MAX) as u8)
    }

    pub fn iter(self) -> impl Iterator<Item = AdcChannel> {
        AdcChannel::ALL.into_iter().filter(move |&ch| self.contains(ch))
    }
}
