// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Page0 (`0x080..=0x0FF`): FCP/SCP protocol master, housekeeping ADC,
//! resets, watchdog, interrupt banks, status and chip identification.
//!
//! Select with `VDM_PAGE_SELECT = 0`.

use crate::regmap::{scharger_registers, Page, RegisterWindow};

/// Bytes the FCP master can return for one multi-byte read.
pub const FCP_RDATA_LEN: usize = 8;

scharger_registers! { Page::Page0;
    FCP_DET_CTRL @ 0x00 : ReadWrite = 0x00 [
        FCP_DET_EN OFFSET(0) NUMBITS(1) [],
        FCP_CMP_EN OFFSET(1) NUMBITS(1) []
    ],
    /// FCP master control (`SOC_SCHARGER_CNTL`).
    CNTL @ 0x01 : ReadWrite = 0x00 [
        /// Start the command programmed in `FCP_CMD`.
        SNDCMD OFFSET(0) NUMBITS(1) [],
        MSTR_RST OFFSET(2) NUMBITS(1) [],
        EN OFFSET(3) NUMBITS(1) []
    ],
    /// The slave is usable once both `ATTACH` and `DVC` read back set.
    FCP_STATUS @ 0x02 : ReadOnly = 0x00 [
        ATTACH OFFSET(0) NUMBITS(1) [],
        DVC OFFSET(1) NUMBITS(2) [
            NotDetected = 0,
            Detected = 3
        ]
    ],
    FCP_CMD @ 0x03 : ReadWrite = 0x00 [
        CMD OFFSET(0) NUMBITS(8) [
            SingleByteWrite = 0x0B,
            SingleByteRead = 0x0C,
            MultiByteWrite = 0x1B,
            MultiByteRead = 0x1C
        ]
    ],
    /// Adapter-side register address for the next command.
    FCP_ADDR @ 0x04 : ReadWrite = 0x00 [
        ADDR OFFSET(0) NUMBITS(8) []
    ],
    FCP_WDATA @ 0x05 : ReadWrite = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    FCP_LENGTH @ 0x06 : ReadWrite = 0x00 [
        LEN OFFSET(0) NUMBITS(4) []
    ],
    FCP_ADAP_CTRL @ 0x07 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    FCP_RDATA0 @ 0x08 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    FCP_RDATA1 @ 0x09 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    FCP_RDATA2 @ 0x0A : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    FCP_RDATA3 @ 0x0B : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    FCP_RDATA4 @ 0x0C : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    FCP_RDATA5 @ 0x0D : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    FCP_RDATA6 @ 0x0E : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    FCP_RDATA7 @ 0x0F : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    FCP_ISR1 @ 0x10 : WriteClear = 0x00 [
        CRCPAR OFFSET(3) NUMBITS(1) [],
        NACK OFFSET(4) NUMBITS(1) [],
        ACK OFFSET(6) NUMBITS(1) [],
        CMDCPL OFFSET(7) NUMBITS(1) []
    ],
    FCP_ISR2 @ 0x11 : WriteClear = 0x00 [
        PROTSTAT OFFSET(1) NUMBITS(1) [],
        PARRX OFFSET(3) NUMBITS(1) [],
        CRCRX OFFSET(4) NUMBITS(1) []
    ],
    FCP_IMR1 @ 0x12 : ReadWrite = 0xD8 [
        CRCPAR OFFSET(3) NUMBITS(1) [],
        NACK OFFSET(4) NUMBITS(1) [],
        ACK OFFSET(6) NUMBITS(1) [],
        CMDCPL OFFSET(7) NUMBITS(1) []
    ],
    FCP_IMR2 @ 0x13 : ReadWrite = 0x1A [
        PROTSTAT OFFSET(1) NUMBITS(1) [],
        PARRX OFFSET(3) NUMBITS(1) [],
        CRCRX OFFSET(4) NUMBITS(1) []
    ],
    FCP_IRQ3 @ 0x14 : WriteClear = 0x00 [
        TAIL_HAND_FAIL OFFSET(0) NUMBITS(1) [],
        INIT_HAND_FAIL OFFSET(1) NUMBITS(1) []
    ],
    FCP_IRQ4 @ 0x15 : WriteClear = 0x00 [
        ENABLE_HAND_FAIL OFFSET(0) NUMBITS(1) []
    ],
    FCP_IRQ3_MASK @ 0x16 : ReadWrite = 0x03 [
        TAIL_HAND_FAIL OFFSET(0) NUMBITS(1) [],
        INIT_HAND_FAIL OFFSET(1) NUMBITS(1) []
    ],
    FCP_IRQ4_MASK @ 0x17 : ReadWrite = 0x01 [
        ENABLE_HAND_FAIL OFFSET(0) NUMBITS(1) []
    ],
    /// Raised when the adapter acknowledges a voltage set request.
    FCP_IRQ5 @ 0x18 : WriteClear = 0x00 [
        FCP_SET OFFSET(0) NUMBITS(1) []
    ],
    FCP_IRQ5_MASK @ 0x19 : ReadWrite = 0x01 [
        FCP_SET OFFSET(0) NUMBITS(1) []
    ],
    FCP_PING_TIMING @ 0x1A : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    FCP_RESP_TIMEOUT @ 0x1B : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    FCP_RETRY_CTRL @ 0x1C : ReadWrite = 0x03 [
        RETRY OFFSET(0) NUMBITS(4) []
    ],
    /// FCP block reset. Write `Assert` then `Release`.
    FCP_SOFT_RST_CTRL @ 0x26 : ReadWrite = 0x00 [
        CMD OFFSET(0) NUMBITS(8) [
            Assert = 0x5A,
            Release = 0xAC
        ]
    ],
    HKADC_CTRL0 @ 0x29 : ReadWrite = 0x00 [
        HKADC_SEL OFFSET(4) NUMBITS(1) [],
        /// Convert the selected channels continuously.
        LOOP OFFSET(5) NUMBITS(1) [],
        EN OFFSET(7) NUMBITS(1) []
    ],
    HKADC_START @ 0x2A : ReadWrite = 0x00 [
        START OFFSET(0) NUMBITS(1) []
    ],
    HKADC_CTRL1 @ 0x2B : ReadWrite = 0x67 [
        CONV_TIME OFFSET(0) NUMBITS(3) [],
        DISCHG_EN OFFSET(3) NUMBITS(1) [],
        AVG_NUM OFFSET(4) NUMBITS(3) []
    ],
    /// Channel selection for channels 8 to 13.
    HKADC_SEQ_CH_H @ 0x2C : ReadWrite = 0x00 [
        IBUS_REF OFFSET(0) NUMBITS(1) [],
        VPTAT OFFSET(1) NUMBITS(1) [],
        VREF OFFSET(2) NUMBITS(1) [],
        TSBAT OFFSET(3) NUMBITS(1) [],
        TSBUS OFFSET(4) NUMBITS(1) [],
        TSCHIP OFFSET(5) NUMBITS(1) []
    ],
    /// Channel selection for channels 0 to 7.
    HKADC_SEQ_CH_L @ 0x2D : ReadWrite = 0x00 [
        VUSB OFFSET(0) NUMBITS(1) [],
        IBUS OFFSET(1) NUMBITS(1) [],
        VBUS OFFSET(2) NUMBITS(1) [],
        VOUT OFFSET(3) NUMBITS(1) [],
        VBAT OFFSET(4) NUMBITS(1) [],
        IBAT OFFSET(5) NUMBITS(1) [],
        DPDM OFFSET(6) NUMBITS(1) [],
        ACR OFFSET(7) NUMBITS(1) []
    ],
    SOH_CTRL @ 0x2E : ReadWrite = 0x10 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    /// Latch a consistent snapshot of every data register.
    HKADC_RD_SEQ @ 0x2F : ReadWrite = 0x00 [
        RD_SEQ OFFSET(0) NUMBITS(1) []
    ],
    ACR_CTRL @ 0x30 : ReadWrite = 0x01 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    HKADC_DATA_VALID @ 0x31 : ReadOnly = 0x00 [
        DATA_VALID OFFSET(0) NUMBITS(1) [],
        /// Set while a pulse-charge pause hides the conversion result.
        PULSE_NO_CHG OFFSET(4) NUMBITS(1) []
    ],
    VUSB_ADC_L @ 0x32 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    VUSB_ADC_H @ 0x33 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    IBUS_ADC_L @ 0x34 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    IBUS_ADC_H @ 0x35 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    VBUS_ADC_L @ 0x36 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    VBUS_ADC_H @ 0x37 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    VOUT_ADC_L @ 0x38 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    VOUT_ADC_H @ 0x39 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    VBAT_ADC_L @ 0x3A : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    VBAT_ADC_H @ 0x3B : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    IBAT_ADC_L @ 0x3C : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    IBAT_ADC_H @ 0x3D : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    DPDM_ADC_L @ 0x3E : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    DPDM_ADC_H @ 0x3F : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    ACR_ADC_L @ 0x40 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    ACR_ADC_H @ 0x41 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    IBUS_REF_ADC_L @ 0x42 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    IBUS_REF_ADC_H @ 0x43 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    VPTAT_ADC_L @ 0x44 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    VPTAT_ADC_H @ 0x45 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    VREF_ADC_L @ 0x46 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    VREF_ADC_H @ 0x47 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    TSBAT_ADC_L @ 0x48 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    TSBAT_ADC_H @ 0x49 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    TSBUS_ADC_L @ 0x4A : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    TSBUS_ADC_H @ 0x4B : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    TSCHIP_ADC_L @ 0x4C : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    TSCHIP_ADC_H @ 0x4D : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(6) []
    ],
    /// Global soft reset. Write `Assert` then `Release`.
    SOFT_RST_CTRL @ 0x4E : ReadWrite = 0x00 [
        CMD OFFSET(0) NUMBITS(8) [
            Assert = 0x5A,
            Release = 0xAC
        ]
    ],
    /// Write `WD_RST_N` to restart the watchdog countdown.
    WATCHDOG_SOFT_RST @ 0x4F : WriteOnly = 0x00 [
        WD_RST_N OFFSET(0) NUMBITS(1) []
    ],
    WATCHDOG_CTRL @ 0x50 : ReadWrite = 0x00 [
        WATCHDOG_TIMER OFFSET(0) NUMBITS(3) [
            Disabled = 0,
            Sec1 = 1,
            Sec2 = 2,
            Sec10 = 3,
            Sec20 = 4,
            Sec40 = 5,
            Sec80 = 6
        ]
    ],
    WATCHDOG_STATUS @ 0x51 : ReadOnly = 0x01 [
        WATCHDOG_OK OFFSET(0) NUMBITS(1) []
    ],
    IRQ_STATUS_0 @ 0x52 : ReadOnly = 0x00 [
        VBUS_UVP OFFSET(0) NUMBITS(1) [],
        VBUS_OVP OFFSET(1) NUMBITS(1) [],
        OTG_OVP OFFSET(2) NUMBITS(1) [],
        OTG_SCP OFFSET(3) NUMBITS(1) [],
        OTG_UVP OFFSET(4) NUMBITS(1) [],
        VBAT_OVP OFFSET(5) NUMBITS(1) [],
        WDT_TIMEOUT OFFSET(6) NUMBITS(1) [],
        TSHUT OFFSET(7) NUMBITS(1) []
    ],
    IRQ_FLAG_0 @ 0x53 : WriteClear = 0x00 [
        VBUS_UVP OFFSET(0) NUMBITS(1) [],
        VBUS_OVP OFFSET(1) NUMBITS(1) [],
        OTG_OVP OFFSET(2) NUMBITS(1) [],
        OTG_SCP OFFSET(3) NUMBITS(1) [],
        OTG_UVP OFFSET(4) NUMBITS(1) [],
        VBAT_OVP OFFSET(5) NUMBITS(1) [],
        WDT_TIMEOUT OFFSET(6) NUMBITS(1) [],
        TSHUT OFFSET(7) NUMBITS(1) []
    ],
    /// Direct-charge protection flags.
    IRQ_FLAG_1 @ 0x54 : WriteClear = 0x00 [
        IBUS_DC_OCP OFFSET(0) NUMBITS(1) [],
        IBUS_DC_UCP OFFSET(1) NUMBITS(1) [],
        IBUS_DC_RCP OFFSET(2) NUMBITS(1) [],
        VBUS_DC_OVP OFFSET(3) NUMBITS(1) [],
        VBAT_DC_OVP OFFSET(4) NUMBITS(1) [],
        IBAT_DC_OCP OFFSET(5) NUMBITS(1) [],
        VOUT_OVP OFFSET(6) NUMBITS(1) [],
        VDROP_OVP OFFSET(7) NUMBITS(1) []
    ],
    IRQ_FLAG_2 @ 0x55 : WriteClear = 0x00 [
        TSBAT_OTP OFFSET(0) NUMBITS(1) [],
        TSBUS_OTP OFFSET(1) NUMBITS(1) [],
        TDIE_OTP OFFSET(2) NUMBITS(1) [],
        CC_OVP OFFSET(3) NUMBITS(1) [],
        SBU_OVP OFFSET(4) NUMBITS(1) []
    ],
    IRQ_FLAG_3 @ 0x56 : WriteClear = 0x00 [
        BUCK_OCP OFFSET(0) NUMBITS(1) [],
        BUCK_SCP OFFSET(1) NUMBITS(1) [],
        PRE_TIMEOUT OFFSET(2) NUMBITS(1) [],
        FAST_TIMEOUT OFFSET(3) NUMBITS(1) [],
        CHG_DONE OFFSET(4) NUMBITS(1) [],
        RECHG OFFSET(5) NUMBITS(1) []
    ],
    IRQ_FLAG_4 @ 0x57 : WriteClear = 0x00 [
        FLAGS OFFSET(0) NUMBITS(8) []
    ],
    IRQ_FLAG_5 @ 0x58 : WriteClear = 0x00 [
        FLAGS OFFSET(0) NUMBITS(8) []
    ],
    IRQ_FLAG_6 @ 0x59 : WriteClear = 0x00 [
        FLAGS OFFSET(0) NUMBITS(8) []
    ],
    IRQ_FLAG_7 @ 0x5A : WriteClear = 0x00 [
        FLAGS OFFSET(0) NUMBITS(8) []
    ],
    IRQ_MASK_0 @ 0x5B : ReadWrite = 0xFF [
        VBUS_UVP OFFSET(0) NUMBITS(1) [],
        VBUS_OVP OFFSET(1) NUMBITS(1) [],
        OTG_OVP OFFSET(2) NUMBITS(1) [],
        OTG_SCP OFFSET(3) NUMBITS(1) [],
        OTG_UVP OFFSET(4) NUMBITS(1) [],
        VBAT_OVP OFFSET(5) NUMBITS(1) [],
        WDT_TIMEOUT OFFSET(6) NUMBITS(1) [],
        TSHUT OFFSET(7) NUMBITS(1) []
    ],
    IRQ_MASK_1 @ 0x5C : ReadWrite = 0xFF [
        IBUS_DC_OCP OFFSET(0) NUMBITS(1) [],
        IBUS_DC_UCP OFFSET(1) NUMBITS(1) [],
        IBUS_DC_RCP OFFSET(2) NUMBITS(1) [],
        VBUS_DC_OVP OFFSET(3) NUMBITS(1) [],
        VBAT_DC_OVP OFFSET(4) NUMBITS(1) [],
        IBAT_DC_OCP OFFSET(5) NUMBITS(1) [],
        VOUT_OVP OFFSET(6) NUMBITS(1) [],
        VDROP_OVP OFFSET(7) NUMBITS(1) []
    ],
    IRQ_MASK_2 @ 0x5D : ReadWrite = 0x1F [
        TSBAT_OTP OFFSET(0) NUMBITS(1) [],
        TSBUS_OTP OFFSET(1) NUMBITS(1) [],
        TDIE_OTP OFFSET(2) NUMBITS(1) [],
        CC_OVP OFFSET(3) NUMBITS(1) [],
        SBU_OVP OFFSET(4) NUMBITS(1) []
    ],
    IRQ_MASK_3 @ 0x5E : ReadWrite = 0x3F [
        BUCK_OCP OFFSET(0) NUMBITS(1) [],
        BUCK_SCP OFFSET(1) NUMBITS(1) [],
        PRE_TIMEOUT OFFSET(2) NUMBITS(1) [],
        FAST_TIMEOUT OFFSET(3) NUMBITS(1) [],
        CHG_DONE OFFSET(4) NUMBITS(1) [],
        RECHG OFFSET(5) NUMBITS(1) []
    ],
    IRQ_MASK_4 @ 0x5F : ReadWrite = 0xFF [
        MASK OFFSET(0) NUMBITS(8) []
    ],
    IRQ_MASK_5 @ 0x60 : ReadWrite = 0xFF [
        MASK OFFSET(0) NUMBITS(8) []
    ],
    IRQ_MASK_6 @ 0x61 : ReadWrite = 0xFF [
        MASK OFFSET(0) NUMBITS(8) []
    ],
    IRQ_MASK_7 @ 0x62 : ReadWrite = 0xFF [
        MASK OFFSET(0) NUMBITS(8) []
    ],
    BUCK_STATUS @ 0x63 : ReadOnly = 0x00 [
        BUCK_OK OFFSET(0) NUMBITS(1) [],
        OTG_ON OFFSET(1) NUMBITS(1) []
    ],
    CHG_STATUS @ 0x64 : ReadOnly = 0x00 [
        CHG_STAT OFFSET(3) NUMBITS(2) [
            NotCharging = 0,
            PreCharge = 1,
            FastCharge = 2,
            ChargeDone = 3
        ]
    ],
    CHG_STATUS_0 @ 0x65 : ReadOnly = 0x00 [
        IN_DPM OFFSET(4) NUMBITS(1) [],
        IN_ACL OFFSET(5) NUMBITS(1) []
    ],
    CHG_STATUS_2 @ 0x66 : ReadOnly = 0x00 [
        IN_THERM OFFSET(0) NUMBITS(1) []
    ],
    DC_STATUS @ 0x67 : ReadOnly = 0x00 [
        SC_ON OFFSET(0) NUMBITS(1) [],
        LVC_ON OFFSET(1) NUMBITS(1) []
    ],
    /// Chip ID, byte 0. `CHIP_VERSION_0..=3` hold the 32-bit ID.
    CHIP_VERSION_0 @ 0x68 : ReadOnly = 0x00 [
        ID OFFSET(0) NUMBITS(8) []
    ],
    CHIP_VERSION_1 @ 0x69 : ReadOnly = 0x00 [
        ID OFFSET(0) NUMBITS(8) []
    ],
    CHIP_VERSION_2 @ 0x6A : ReadOnly = 0x00 [
        ID OFFSET(0) NUMBITS(8) []
    ],
    CHIP_VERSION_3 @ 0x6B : ReadOnly = 0x00 [
        ID OFFSET(0) NUMBITS(8) []
    ],
    /// Silicon revision, low byte.
    CHIP_VERSION_4 @ 0x6C : ReadOnly = 0x00 [
        VERSION OFFSET(0) NUMBITS(8) []
    ],
    CHIP_VERSION_5 @ 0x6D : ReadOnly = 0x00 [
        VERSION OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_0 @ 0x70 : ReadWrite = 0x00 [
        /// Boost regulation mode used in OTG.
        OTG_MODE_CFG OFFSET(0) NUMBITS(4) []
    ],
    DC_TOP_CFG_REG_1 @ 0x71 : ReadWrite = 0x00 [
        SC_PULSE_EN OFFSET(0) NUMBITS(1) [],
        SC_PULSE_MODE_EN OFFSET(1) NUMBITS(1) []
    ],
    DC_TOP_CFG_REG_2 @ 0x72 : ReadWrite = 0x00 [
        LVC_MODE OFFSET(0) NUMBITS(1) [],
        SC_MODE OFFSET(1) NUMBITS(1) []
    ],
    DC_TOP_CFG_REG_3 @ 0x73 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_4 @ 0x74 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_5 @ 0x75 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_6 @ 0x76 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_7 @ 0x77 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_8 @ 0x78 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_9 @ 0x79 : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_10 @ 0x7A : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_11 @ 0x7B : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_12 @ 0x7C : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_13 @ 0x7D : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_14 @ 0x7E : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    DC_TOP_CFG_REG_15 @ 0x7F : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ]
}

/// `FCP_RDATA0 + k`: bytes returned by the last FCP read command.
pub const FCP_RDATA: RegisterWindow =
    RegisterWindow::new("FCP_RDATA0", FCP_RDATA0.addr(), FCP_RDATA_LEN);

/// Low byte of the first HKADC sample pair. Channel `n` occupies
/// `HKADC_DATA_BASE + 2n` (low) and the register after it (high).
pub const HKADC_DATA_BASE: crate::regmap::RegAddr = VUSB_ADC_L.addr();
