// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Page1 (`0x180..=0x1FF`): buck charger, OTG boost, BC1.2 detection, USB
//! OVP, switched-capacitor and LVC configuration, and the efuse interface.
//!
//! Select with `VDM_PAGE_SELECT = 1`.

use crate::regmap::{scharger_registers, Page};

/// Input current limits selectable through `CHARGER_CFG_REG_6::ILIMIT`, in
/// mA, indexed by field value.
pub const ILIMIT_MA: [u16; 31] = [
    130, 200, 300, 400, 475, 600, 700, 800, 825, 1000, 1100, 1200, 1300, 1400, 1500, 1600, 1700,
    1800, 1900, 2000, 2100, 2200, 2300, 2400, 2500, 2600, 2700, 2800, 2900, 3000, 3100,
];

/// Fast charge current step. The programmed current is `(code + 1) * 100` mA.
pub const FAST_ICHG_STEP_MA: u16 = 100;

/// Fast charge voltage step, in uV.
pub const FAST_VCHG_STEP_UV: u32 = 16_600;

/// IR compensation step, in mOhm.
pub const IR_COMP_STEP_MOHM: u16 = 15;

/// IR compensation clamp step, in mV. The clamp saturates at 224 mV.
pub const IR_VCLAMP_STEP_MV: u16 = 32;

scharger_registers! { Page::Page1;
    CHARGER_CFG_REG_0 @ 0x00 : ReadWrite = 0x02 [
        CHG_EN OFFSET(0) NUMBITS(1) [],
        BATFET_CTRL OFFSET(1) NUMBITS(1) [],
        /// Disconnect the buck input (high impedance).
        HIZ_EN OFFSET(2) NUMBITS(1) []
    ],
    CHARGER_CFG_REG_1 @ 0x01 : ReadWrite = 0x04 [
        FAST_ICHG OFFSET(0) NUMBITS(5) [],
        EN_TERM OFFSET(7) NUMBITS(1) []
    ],
    CHARGER_CFG_REG_2 @ 0x02 : ReadWrite = 0x00 [
        FAST_VCHG OFFSET(0) NUMBITS(6) []
    ],
    CHARGER_CFG_REG_3 @ 0x03 : ReadWrite = 0x00 [
        TERM_ICHG OFFSET(0) NUMBITS(2) [
            Ma150 = 0,
            Ma200 = 1,
            Ma300 = 2,
            Ma400 = 3
        ],
        PRE_ICHG OFFSET(2) NUMBITS(2) [],
        PRE_VCHG OFFSET(4) NUMBITS(2) [
            Mv2800 = 0,
            Mv3000 = 1,
            Mv3100 = 2,
            Mv3200 = 3
        ],
        /// Recharge threshold below the termination voltage.
        RECHG OFFSET(6) NUMBITS(2) []
    ],
    CHARGER_CFG_REG_4 @ 0x04 : ReadWrite = 0x00 [
        FASTCHG_TIMER OFFSET(0) NUMBITS(2) [
            Hours5 = 0,
            Hours8 = 1,
            Hours12 = 2,
            Hours20 = 3
        ],
        TIMER_EN OFFSET(2) NUMBITS(1) []
    ],
    CHARGER_CFG_REG_5 @ 0x05 : ReadWrite = 0x00 [
        IR_COMP OFFSET(0) NUMBITS(3) [],
        IR_VCLAMP OFFSET(4) NUMBITS(3) []
    ],
    /// Input source control.
    CHARGER_CFG_REG_6 @ 0x06 : ReadWrite = 0x05 [
        ILIMIT OFFSET(0) NUMBITS(5) []
    ],
    CHARGER_CFG_REG_7 @ 0x07 : ReadWrite = 0x00 [
        DPM_SEL OFFSET(0) NUMBITS(4) [],
        DPM_MODE OFFSET(7) NUMBITS(1) [
            Manual = 0,
            Auto = 1
        ]
    ],
    CHARGER_CFG_REG_8 @ 0x08 : ReadWrite = 0x00 [
        VBUS_VSET OFFSET(0) NUMBITS(2) [
            V5 = 0,
            V9 = 1,
            V12 = 2
        ],
        BUCK_MODE_CFG OFFSET(4) NUMBITS(2) []
    ],
    CHARGER_CFG_REG_9 @ 0x09 : ReadWrite = 0x00 [
        BUCK_OVP_VOLTAGE OFFSET(0) NUMBITS(3) [],
        BUCK_UVP_VOLTAGE OFFSET(4) NUMBITS(3) []
    ],
    CHARGER_CFG_REG_10 @ 0x0A : ReadWrite = 0x00 [
        ANTI_REVERBST_EN OFFSET(0) NUMBITS(1) [],
        ACL_RPT_EN OFFSET(1) NUMBITS(1) []
    ],
    CHARGER_CFG_REG_11 @ 0x0B : ReadWrite = 0x00 [
        IBAT_OCP_TH OFFSET(0) NUMBITS(4) [],
        VBAT_LV_TH OFFSET(4) NUMBITS(2) []
    ],
    OTG_CFG_REG_0 @ 0x10 : ReadWrite = 0x00 [
        OTG_EN OFFSET(0) NUMBITS(1) [],
        OTG_LIM OFFSET(1) NUMBITS(2) [
            Ma500 = 0,
            Ma1000 = 1,
            Ma1500 = 2,
            Ma2000 = 3
        ],
        OTG_MODE OFFSET(3) NUMBITS(1) [],
        OTG_SWITCH OFFSET(4) NUMBITS(1) []
    ],
    OTG_CFG_REG_1 @ 0x11 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_CFG_REG_2 @ 0x12 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_CFG_REG_3 @ 0x13 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_CFG_REG_4 @ 0x14 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_CFG_REG_5 @ 0x15 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DET_TOP_CFG_REG_0 @ 0x20 : ReadWrite = 0x00 [
        APPDET_CHSEL OFFSET(0) NUMBITS(2) [
            Dp = 0,
            Dm = 1
        ],
        APPLE_DET_EN OFFSET(2) NUMBITS(1) [],
        DP_RES_DET OFFSET(3) NUMBITS(1) [],
        DPDM_PMID_SEL OFFSET(4) NUMBITS(1) []
    ],
    DET_TOP_CFG_REG_1 @ 0x21 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DET_TOP_CFG_REG_2 @ 0x22 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DET_TOP_CFG_REG_3 @ 0x23 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DET_TOP_CFG_REG_4 @ 0x24 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    USB_OVP_CFG_REG_0 @ 0x30 : ReadWrite = 0x00 [
        OVP_TH OFFSET(0) NUMBITS(2) [],
        OVP_EN OFFSET(7) NUMBITS(1) []
    ],
    USB_OVP_CFG_REG_1 @ 0x31 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    USB_OVP_CFG_REG_2 @ 0x32 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_CFG_REG_0 @ 0x40 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_CFG_REG_1 @ 0x41 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_CFG_REG_2 @ 0x42 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_CFG_REG_3 @ 0x43 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_CFG_REG_4 @ 0x44 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_CFG_REG_5 @ 0x45 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_CFG_REG_6 @ 0x46 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_CFG_REG_7 @ 0x47 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_CFG_REG_0 @ 0x48 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_CFG_REG_1 @ 0x49 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_CFG_REG_2 @ 0x4A : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_CFG_REG_3 @ 0x4B : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_CFG_REG_4 @ 0x4C : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_CFG_REG_5 @ 0x4D : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_CFG_REG_6 @ 0x4E : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_CFG_REG_7 @ 0x4F : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    EFUSE_SEL @ 0x60 : ReadWrite = 0x00 [
        EFUSE_ID OFFSET(0) NUMBITS(1) [],
        PDOB_SEL OFFSET(4) NUMBITS(1) [
            CaliDisabled = 0,
            CaliEnabled = 1
        ]
    ],
    EFUSE_CFG @ 0x61 : ReadWrite = 0x00 [
        RD_CTRL OFFSET(3) NUMBITS(1) [],
        RD_MODE OFFSET(7) NUMBITS(1) [
            BitFlush = 0,
            Flush64Bit = 1
        ]
    ],
    /// Byte select for `EFUSE1_RDATA`.
    EFUSE1_SEL @ 0x62 : ReadWrite = 0x00 [
        SEL OFFSET(0) NUMBITS(3) []
    ],
    EFUSE1_RDATA @ 0x63 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    EFUSE2_SEL @ 0x64 : ReadWrite = 0x00 [
        SEL OFFSET(0) NUMBITS(3) []
    ],
    EFUSE2_RDATA @ 0x65 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    EFUSE3_SEL @ 0x66 : ReadWrite = 0x00 [
        SEL OFFSET(0) NUMBITS(3) []
    ],
    EFUSE3_RDATA @ 0x67 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    EFUSE4_SEL @ 0x68 : ReadWrite = 0x00 [
        SEL OFFSET(0) NUMBITS(3) []
    ],
    EFUSE4_RDATA @ 0x69 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    EFUSE_PDOB_PRE_ADDR_WE @ 0x6A : ReadWrite = 0x00 [
        PRE_ADDR OFFSET(0) NUMBITS(6) [],
        PRE_WE OFFSET(7) NUMBITS(1) []
    ],
    EFUSE_PDOB_PRE_WDATA @ 0x6B : ReadWrite = 0x00 [
        WDATA OFFSET(0) NUMBITS(8) []
    ],
    EFUSE_EN @ 0x70 : ReadWrite = 0x00 [
        EN OFFSET(3) NUMBITS(1) [],
        TESTBUS_SEL OFFSET(7) NUMBITS(1) [
            Efuse3 = 0,
            Efuse4 = 1
        ]
    ],
}

/// `ILIMIT` code for the largest supported limit not above `limit_ma`,
/// together with that limit in mA. Requests below the table floor get 130 mA.
pub fn ilimit_code(limit_ma: u16) -> (u8, u16) {
    let mut code = 0;
    for (i, &ma) in ILIMIT_MA.iter().enumerate() {
        if ma <= limit_ma {
            code = i;
        }
    }
    (code as u8, ILIMIT_MA[code])
}

/// Fast charge current code for `ichg_ma`, clamped to the field range.
pub fn fast_ichg_code(ichg_ma: u16) -> u8 {
    let max = CHARGER_CFG_REG_1::FAST_ICHG.mask;
    let steps = (ichg_ma / FAST_ICHG_STEP_MA).max(1) - 1;
    (steps.min(max as u16)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page1_base() {
        assert_eq!(CHARGER_CFG_REG_0.addr().raw(), 0x180);
        assert_eq!(EFUSE_SEL.addr().raw(), 0x1E0);
        assert_eq!(EFUSE_EN.addr().bus_offset(), 0xF0);
    }

    #[test]
    fn ilimit_rounds_down() {
        assert_eq!(ilimit_code(0), (0, 130));
        assert_eq!(ilimit_code(475), (4, 475));
        assert_eq!(ilimit_code(999), (8, 825));
        assert_eq!(ilimit_code(5000), (30, 3100));
    }

    #[test]
    fn fast_ichg_codes() {
        assert_eq!(fast_ichg_code(100), 0);
        assert_eq!(fast_ichg_code(1000), 9);
        assert_eq!(fast_ichg_code(0), 0);
        assert_eq!(fast_ichg_code(10_000), 31);
    }

    #[test]
    fn vbus_vset_variants() {
        let mut reg = CHARGER_CFG_REG_8.reset_value();
        reg.modify(CHARGER_CFG_REG_8::VBUS_VSET::V12);
        assert_eq!(reg.read(CHARGER_CFG_REG_8::VBUS_VSET), 2);
        assert_eq!(
            reg.read_as_enum(CHARGER_CFG_REG_8::VBUS_VSET),
            Some(CHARGER_CFG_REG_8::VBUS_VSET::Value::V12)
        );
    }

    #[test]
    fn efuse_cfg_fields() {
        let mut reg = EFUSE_CFG.reset_value();
        reg.write(EFUSE_CFG::RD_MODE::Flush64Bit + EFUSE_CFG::RD_CTRL::SET);
        assert_eq!(reg.get(), 0x88);
    }
}
