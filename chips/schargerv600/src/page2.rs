// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Page2 (`0x280..=0x2FF`): analog trim for the switched-capacitor stage, the
//! LVC switch, power path selection, the buck converter and the OTG boost.
//!
//! Select with `VDM_PAGE_SELECT = 2`. Most of these registers are opaque
//! trim bytes that are programmed whole from the tuning tables in
//! [`crate::tuning`].

use crate::regmap::{scharger_registers, Page};

scharger_registers! { Page::Page2;
    SC_TOP_CFG_REG_0 @ 0x00 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    /// Charge pump flying capacitor selection lives in bits 6-7.
    SC_TOP_CFG_REG_1 @ 0x01 : ReadWrite = 0x80 [
        CFG OFFSET(0) NUMBITS(6) [],
        CHG_CAP3_SEL OFFSET(6) NUMBITS(2) []
    ],
    SC_TOP_CFG_REG_2 @ 0x02 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_TOP_CFG_REG_3 @ 0x03 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_TOP_CFG_REG_4 @ 0x04 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_TOP_CFG_REG_5 @ 0x05 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_TOP_CFG_REG_6 @ 0x06 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_TOP_CFG_REG_7 @ 0x07 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_TOP_CFG_REG_8 @ 0x08 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_TOP_CFG_REG_9 @ 0x09 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_TOP_CFG_REG_10 @ 0x0A : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    SC_TOP_CFG_REG_11 @ 0x0B : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_0 @ 0x10 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_1 @ 0x11 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_2 @ 0x12 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_3 @ 0x13 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_4 @ 0x14 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_5 @ 0x15 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_6 @ 0x16 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_7 @ 0x17 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_8 @ 0x18 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_9 @ 0x19 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_10 @ 0x1A : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    LVC_TOP_CFG_REG_11 @ 0x1B : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_0 @ 0x20 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_1 @ 0x21 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_2 @ 0x22 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_3 @ 0x23 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_4 @ 0x24 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_5 @ 0x25 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_6 @ 0x26 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_7 @ 0x27 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_8 @ 0x28 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_9 @ 0x29 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_10 @ 0x2A : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_11 @ 0x2B : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_12 @ 0x2C : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_13 @ 0x2D : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_14 @ 0x2E : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PSEL_CFG_REG_15 @ 0x2F : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_0 @ 0x50 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_1 @ 0x51 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_2 @ 0x52 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_3 @ 0x53 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_4 @ 0x54 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_5 @ 0x55 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_6 @ 0x56 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_7 @ 0x57 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_8 @ 0x58 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_9 @ 0x59 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_10 @ 0x5A : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_11 @ 0x5B : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_12 @ 0x5C : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_13 @ 0x5D : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_14 @ 0x5E : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_15 @ 0x5F : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_16 @ 0x60 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_17 @ 0x61 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_18 @ 0x62 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_19 @ 0x63 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_20 @ 0x64 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_21 @ 0x65 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_22 @ 0x66 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_23 @ 0x67 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_24 @ 0x68 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_25 @ 0x69 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_26 @ 0x6A : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_27 @ 0x6B : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_28 @ 0x6C : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_29 @ 0x6D : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_30 @ 0x6E : ReadWrite = 0x00 [
        CFG_L OFFSET(0) NUMBITS(3) [],
        CFG_H OFFSET(5) NUMBITS(3) []
    ],
    BUCK_CFG_REG_31 @ 0x6F : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_32 @ 0x70 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_33 @ 0x71 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_34 @ 0x72 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_35 @ 0x73 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_36 @ 0x74 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    BUCK_CFG_REG_37 @ 0x75 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_0 @ 0x76 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_1 @ 0x77 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_2 @ 0x78 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_3 @ 0x79 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_4 @ 0x7A : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_5 @ 0x7B : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_6 @ 0x7C : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_7 @ 0x7D : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_8 @ 0x7E : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    OTG_ANA_CFG_REG_9 @ 0x7F : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ]
}
