// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register tuning sequences.
//!
//! Production parts need a handful of trim registers reprogrammed away from
//! their reset values before the buck or the OTG boost is started. Each
//! sequence is a list of masked writes applied in order.

use crate::regmap::RegAddr;
use crate::{page0, page2};

/// Replace the bits of `mask` in the register at `addr` with `value`.
/// `value` is already shifted into position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TuningWrite {
    pub addr: RegAddr,
    pub mask: u8,
    pub value: u8,
}

impl TuningWrite {
    pub const fn full(addr: RegAddr, value: u8) -> TuningWrite {
        TuningWrite {
            addr,
            mask: 0xFF,
            value,
        }
    }

    pub const fn masked(addr: RegAddr, mask: u8, value: u8) -> TuningWrite {
        TuningWrite { addr, mask, value }
    }

    pub const fn is_full(&self) -> bool {
        self.mask == 0xFF
    }

    /// The register value after applying this write to `old`.
    pub const fn apply(&self, old: u8) -> u8 {
        (old & !self.mask) | (self.value & self.mask)
    }
}

/// Applied once after power-up.
pub const COMMON: &[TuningWrite] = &[
    TuningWrite::full(page0::HKADC_CTRL1.addr(), 0x63),
    TuningWrite::full(page2::BUCK_CFG_REG_18.addr(), 0x95),
    TuningWrite::full(page2::BUCK_CFG_REG_21.addr(), 0x58),
    TuningWrite::full(page2::LVC_TOP_CFG_REG_3.addr(), 0xA0),
    TuningWrite::full(page2::SC_TOP_CFG_REG_4.addr(), 0x08),
    TuningWrite::full(page2::SC_TOP_CFG_REG_7.addr(), 0x1C),
    TuningWrite::full(page2::SC_TOP_CFG_REG_0.addr(), 0x0D),
    TuningWrite::full(page2::PSEL_CFG_REG_12.addr(), 0x1E),
    TuningWrite::full(page2::LVC_TOP_CFG_REG_8.addr(), 0x01),
];

/// Applied before the buck is started. Also restores the HKADC helper
/// registers and the SC stage settings that direct charging changes.
pub const BUCK: &[TuningWrite] = &[
    TuningWrite::full(page0::ACR_CTRL.addr(), 0x01),
    TuningWrite::full(page0::SOH_CTRL.addr(), 0x10),
    TuningWrite::masked(page0::DC_TOP_CFG_REG_1.addr(), 0x02, 0x00),
    TuningWrite::masked(page2::SC_TOP_CFG_REG_1.addr(), 0xC0, 0x80),
    TuningWrite::full(page2::BUCK_CFG_REG_25.addr(), 0x1B),
    TuningWrite::full(page2::BUCK_CFG_REG_16.addr(), 0x3F),
    TuningWrite::full(page2::BUCK_CFG_REG_34.addr(), 0xA6),
    TuningWrite::full(page2::BUCK_CFG_REG_29.addr(), 0x27),
    TuningWrite::full(page2::BUCK_CFG_REG_3.addr(), 0x15),
    TuningWrite::full(page2::BUCK_CFG_REG_4.addr(), 0x97),
    TuningWrite::full(page2::BUCK_CFG_REG_17.addr(), 0x7D),
    TuningWrite::full(page2::BUCK_CFG_REG_19.addr(), 0x22),
    TuningWrite::full(page2::BUCK_CFG_REG_20.addr(), 0x3D),
    TuningWrite::full(page2::BUCK_CFG_REG_10.addr(), 0x8C),
    TuningWrite::full(page2::BUCK_CFG_REG_11.addr(), 0x94),
    TuningWrite::full(page2::BUCK_CFG_REG_6.addr(), 0x0F),
    TuningWrite::full(page2::BUCK_CFG_REG_9.addr(), 0x11),
    TuningWrite::full(page2::BUCK_CFG_REG_23.addr(), 0x6F),
    TuningWrite::full(page2::BUCK_CFG_REG_14.addr(), 0x1E),
    TuningWrite::full(page2::SC_TOP_CFG_REG_6.addr(), 0x06),
];

/// Applied after [`BUCK`] when the input is set to 12 V.
pub const BUCK_12V: &[TuningWrite] = &[TuningWrite::full(page2::BUCK_CFG_REG_23.addr(), 0xFF)];

/// Applied before the OTG boost is started.
pub const OTG: &[TuningWrite] = &[
    TuningWrite::full(page2::BUCK_CFG_REG_3.addr(), 0x08),
    TuningWrite::full(page2::BUCK_CFG_REG_4.addr(), 0x16),
    TuningWrite::full(page2::BUCK_CFG_REG_17.addr(), 0x5A),
    TuningWrite::full(page2::BUCK_CFG_REG_19.addr(), 0x20),
    TuningWrite::full(page2::BUCK_CFG_REG_20.addr(), 0x25),
    TuningWrite::full(page2::BUCK_CFG_REG_10.addr(), 0x91),
    TuningWrite::full(page2::BUCK_CFG_REG_11.addr(), 0x92),
    TuningWrite::full(page2::BUCK_CFG_REG_25.addr(), 0x1C),
    TuningWrite::full(page2::LVC_TOP_CFG_REG_4.addr(), 0x01),
    TuningWrite::masked(page2::BUCK_CFG_REG_30.addr(), 0xE7, 0x09),
    TuningWrite::masked(page0::DC_TOP_CFG_REG_0.addr(), 0x0F, 0x06),
    TuningWrite::full(page2::BUCK_CFG_REG_9.addr(), 0x10),
    TuningWrite::full(page2::BUCK_CFG_REG_14.addr(), 0x1C),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_hit_the_documented_bus_addresses() {
        let raw: std::vec::Vec<u16> = COMMON.iter().map(|w| w.addr.raw()).collect();
        assert_eq!(
            raw,
            [0x0AB, 0x2E2, 0x2E5, 0x293, 0x284, 0x287, 0x280, 0x2AC, 0x298]
        );
        let raw: std::vec::Vec<u16> = OTG.iter().map(|w| w.addr.raw()).collect();
        assert_eq!(
            raw,
            [
                0x2D3, 0x2D4, 0x2E1, 0x2E3, 0x2E4, 0x2DA, 0x2DB, 0x2E9, 0x294, 0x2EE, 0x0F0,
                0x2D9, 0x2DE
            ]
        );
        assert_eq!(BUCK[3].addr.raw(), 0x281);
        assert_eq!(BUCK[4].addr.raw(), 0x2E9);
    }

    #[test]
    fn masked_writes_only_touch_their_bits() {
        let w = TuningWrite::masked(page2::SC_TOP_CFG_REG_1.addr(), 0xC0, 0x80);
        assert_eq!(w.apply(0x3F), 0xBF);
        assert_eq!(w.apply(0xFF), 0xBF);
        assert!(!w.is_full());
        assert_eq!(TuningWrite::full(page0::ACR_CTRL.addr(), 0x01).apply(0xAA), 0x01);
    }

    #[test]
    fn masked_writes_stay_inside_defined_fields() {
        for w in BUCK.iter().chain(OTG).filter(|w| !w.is_full()) {
            let info = crate::by_addr(w.addr).unwrap();
            assert_eq!(info.defined_bits() & w.mask, w.mask, "{}", info.name);
        }
    }

    #[test]
    fn masked_writes_name_whole_fields() {
        for w in COMMON.iter().chain(BUCK).chain(OTG).filter(|w| !w.is_full()) {
            let info = crate::by_addr(w.addr).unwrap();
            let touched: u8 = info
                .fields
                .iter()
                .filter(|f| f.mask() & w.mask != 0)
                .inspect(|f| assert_ne!(f.name, "VALUE", "{} is opaque", info.name))
                .fold(0, |acc, f| acc | f.mask());
            assert_eq!(touched, w.mask, "{} splits a field", info.name);
        }
        let modes = crate::page0::DC_TOP_CFG_REG_2;
        assert!(modes.field("LVC_MODE").is_some());
        assert!(modes.field("SC_MODE").is_some());
    }
}
