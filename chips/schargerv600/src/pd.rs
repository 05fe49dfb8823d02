// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! PD page (`0x00..=0x7F`), the USB Type-C port controller register file.
//!
//! The layout of `0x00..=0x79` follows the TCPC interface: identification,
//! alert and mask registers, role and power control, the receive buffer and
//! the transmit buffer. `0x7A..=0x7F` are vendor registers, ending with
//! `VDM_PAGE_SELECT` which banks the upper half of the address space.

use crate::regmap::{scharger_registers, Page, RegisterWindow};

/// Payload bytes carried by one PD message: seven 32-bit data objects.
pub const PD_PAYLOAD_MAX: usize = 28;

scharger_registers! { Page::Pd;
    /// Vendor ID, low byte.
    PD_VENDIDL @ 0x00 : ReadOnly = 0xD1 [
        VENDID OFFSET(0) NUMBITS(8) []
    ],
    /// Vendor ID, high byte.
    PD_VENDIDH @ 0x01 : ReadOnly = 0x12 [
        VENDID OFFSET(0) NUMBITS(8) []
    ],
    PD_PRODIDL @ 0x02 : ReadOnly = 0x26 [
        PRODID OFFSET(0) NUMBITS(8) []
    ],
    PD_PRODIDH @ 0x03 : ReadOnly = 0x65 [
        PRODID OFFSET(0) NUMBITS(8) []
    ],
    PD_DEVIDL @ 0x04 : ReadOnly = 0x00 [
        DEVID OFFSET(0) NUMBITS(8) []
    ],
    PD_DEVIDH @ 0x05 : ReadOnly = 0x00 [
        DEVID OFFSET(0) NUMBITS(8) []
    ],
    PD_TYPECREVL @ 0x06 : ReadOnly = 0x12 [
        MINOR OFFSET(0) NUMBITS(4) [],
        MAJOR OFFSET(4) NUMBITS(4) []
    ],
    PD_TYPECREVH @ 0x07 : ReadOnly = 0x00 [
        REV OFFSET(0) NUMBITS(8) []
    ],
    PD_USBPDVER @ 0x0A : ReadOnly = 0x11 [
        VERSION OFFSET(0) NUMBITS(8) []
    ],
    PD_USBPDREV @ 0x0B : ReadOnly = 0x30 [
        REVISION OFFSET(0) NUMBITS(8) []
    ],
    PD_PDIFREVL @ 0x0C : ReadOnly = 0x10 [
        VERSION OFFSET(0) NUMBITS(8) []
    ],
    PD_PDIFREVH @ 0x0D : ReadOnly = 0x10 [
        REVISION OFFSET(0) NUMBITS(8) []
    ],
    /// Alert flags, low byte. Write 1 to clear.
    PD_ALERT_L @ 0x10 : WriteClear = 0x00 [
        CC_STATUS OFFSET(0) NUMBITS(1) [],
        POWER_STATUS OFFSET(1) NUMBITS(1) [],
        RX_SOP_MSG_STATUS OFFSET(2) NUMBITS(1) [],
        RX_HARD_RESET OFFSET(3) NUMBITS(1) [],
        TX_FAIL OFFSET(4) NUMBITS(1) [],
        TX_DISCARD OFFSET(5) NUMBITS(1) [],
        TX_SUCCESS OFFSET(6) NUMBITS(1) [],
        VBUS_ALARM_HI OFFSET(7) NUMBITS(1) []
    ],
    /// Alert flags, high byte. Write 1 to clear.
    PD_ALERT_H @ 0x11 : WriteClear = 0x00 [
        VBUS_ALARM_LO OFFSET(0) NUMBITS(1) [],
        FAULT OFFSET(1) NUMBITS(1) [],
        RX_BUF_OVERFLOW OFFSET(2) NUMBITS(1) [],
        VBUS_SINK_DISCONNECT OFFSET(3) NUMBITS(1) []
    ],
    PD_ALERT_MSK_L @ 0x12 : ReadWrite = 0xFF [
        CC_STATUS OFFSET(0) NUMBITS(1) [],
        POWER_STATUS OFFSET(1) NUMBITS(1) [],
        RX_SOP_MSG_STATUS OFFSET(2) NUMBITS(1) [],
        RX_HARD_RESET OFFSET(3) NUMBITS(1) [],
        TX_FAIL OFFSET(4) NUMBITS(1) [],
        TX_DISCARD OFFSET(5) NUMBITS(1) [],
        TX_SUCCESS OFFSET(6) NUMBITS(1) [],
        VBUS_ALARM_HI OFFSET(7) NUMBITS(1) []
    ],
    PD_ALERT_MSK_H @ 0x13 : ReadWrite = 0x0F [
        VBUS_ALARM_LO OFFSET(0) NUMBITS(1) [],
        FAULT OFFSET(1) NUMBITS(1) [],
        RX_BUF_OVERFLOW OFFSET(2) NUMBITS(1) [],
        VBUS_SINK_DISCONNECT OFFSET(3) NUMBITS(1) []
    ],
    PD_PWRSTAT_MSK @ 0x14 : ReadWrite = 0xFF [
        SINK_VBUS OFFSET(0) NUMBITS(1) [],
        VCONN_PRESENT OFFSET(1) NUMBITS(1) [],
        VBUS_PRESENT OFFSET(2) NUMBITS(1) [],
        VBUS_DETECT_EN OFFSET(3) NUMBITS(1) [],
        SOURCE_VBUS OFFSET(4) NUMBITS(1) [],
        SOURCE_HV OFFSET(5) NUMBITS(1) [],
        TCPC_INIT OFFSET(6) NUMBITS(1) [],
        DEBUG_ACC OFFSET(7) NUMBITS(1) []
    ],
    PD_FAULTSTAT_MSK @ 0x15 : ReadWrite = 0xFF [
        I2C_ERR OFFSET(0) NUMBITS(1) [],
        VCONN_OC OFFSET(1) NUMBITS(1) [],
        VBUS_OV OFFSET(2) NUMBITS(1) [],
        VBUS_OC OFFSET(3) NUMBITS(1) [],
        FORCE_DISC_FAIL OFFSET(4) NUMBITS(1) [],
        AUTO_DISC_FAIL OFFSET(5) NUMBITS(1) [],
        FORCE_OFF_VBUS OFFSET(6) NUMBITS(1) [],
        VCONN_OV OFFSET(7) NUMBITS(1) []
    ],
    PD_TCPC_CTRL @ 0x19 : ReadWrite = 0x00 [
        PLUG_ORIENT OFFSET(0) NUMBITS(1) [
            Cc1 = 0,
            Cc2 = 1
        ],
        BIST_TEST_MODE OFFSET(1) NUMBITS(1) [],
        I2C_CLK_STRETCH OFFSET(2) NUMBITS(2) [],
        DEBUG_ACC_CTRL OFFSET(4) NUMBITS(1) []
    ],
    /// CC termination control. Resets to Rd on both CC pins.
    PD_ROLE_CTRL @ 0x1A : ReadWrite = 0x0A [
        PD_CC1_CFG OFFSET(0) NUMBITS(2) [
            Ra = 0,
            Rp = 1,
            Rd = 2,
            Open = 3
        ],
        PD_CC2_CFG OFFSET(2) NUMBITS(2) [
            Ra = 0,
            Rp = 1,
            Rd = 2,
            Open = 3
        ],
        RP_VALUE OFFSET(4) NUMBITS(2) [
            Default = 0,
            Current1A5 = 1,
            Current3A0 = 2
        ],
        DRP OFFSET(6) NUMBITS(1) []
    ],
    PD_FAULT_CTRL @ 0x1B : ReadWrite = 0x00 [
        VCONN_OC_DIS OFFSET(0) NUMBITS(1) [],
        VBUS_OV_DIS OFFSET(1) NUMBITS(1) [],
        VBUS_OC_DIS OFFSET(2) NUMBITS(1) [],
        VBUS_DISC_FAULT_DIS OFFSET(3) NUMBITS(1) [],
        FORCE_OFF_VBUS_DIS OFFSET(4) NUMBITS(1) []
    ],
    PD_POWER_CTRL @ 0x1C : ReadWrite = 0x60 [
        EN_VCONN OFFSET(0) NUMBITS(1) [],
        VCONN_POWER OFFSET(1) NUMBITS(1) [],
        FORCE_DISCHARGE OFFSET(2) NUMBITS(1) [],
        EN_BLEED_DISCHARGE OFFSET(3) NUMBITS(1) [],
        AUTO_DISCHARGE OFFSET(4) NUMBITS(1) [],
        DIS_VOLTAGE_ALARM OFFSET(5) NUMBITS(1) [],
        DIS_VBUS_MONITOR OFFSET(6) NUMBITS(1) [],
        FAST_ROLE_SWAP OFFSET(7) NUMBITS(1) []
    ],
    PD_CC_STATUS @ 0x1D : ReadOnly = 0x00 [
        CC1_STATE OFFSET(0) NUMBITS(2) [],
        CC2_STATE OFFSET(2) NUMBITS(2) [],
        CONNECT_RESULT OFFSET(4) NUMBITS(1) [
            PresentsRp = 0,
            PresentsRd = 1
        ],
        LOOKING4CONNECTION OFFSET(5) NUMBITS(1) []
    ],
    PD_PWRSTAT @ 0x1E : ReadOnly = 0x00 [
        SINK_VBUS OFFSET(0) NUMBITS(1) [],
        VCONN_PRESENT OFFSET(1) NUMBITS(1) [],
        VBUS_PRESENT OFFSET(2) NUMBITS(1) [],
        VBUS_DETECT_EN OFFSET(3) NUMBITS(1) [],
        SOURCE_VBUS OFFSET(4) NUMBITS(1) [],
        SOURCE_HV OFFSET(5) NUMBITS(1) [],
        TCPC_INIT OFFSET(6) NUMBITS(1) [],
        DEBUG_ACC OFFSET(7) NUMBITS(1) []
    ],
    /// Fault flags. Write 1 to clear. `ALL_REGS_RESET` is set after a reset.
    PD_FAULTSTAT @ 0x1F : WriteClear = 0x80 [
        I2C_ERR OFFSET(0) NUMBITS(1) [],
        VCONN_OC OFFSET(1) NUMBITS(1) [],
        VBUS_OV OFFSET(2) NUMBITS(1) [],
        VBUS_OC OFFSET(3) NUMBITS(1) [],
        FORCE_DISC_FAIL OFFSET(4) NUMBITS(1) [],
        AUTO_DISC_FAIL OFFSET(5) NUMBITS(1) [],
        FORCE_OFF_VBUS OFFSET(6) NUMBITS(1) [],
        ALL_REGS_RESET OFFSET(7) NUMBITS(1) []
    ],
    PD_COMMAND @ 0x23 : WriteOnly = 0x00 [
        CMD OFFSET(0) NUMBITS(8) [
            WakeI2c = 0x11,
            DisableVbusDetect = 0x22,
            EnableVbusDetect = 0x33,
            DisableSinkVbus = 0x44,
            SinkVbus = 0x55,
            DisableSourceVbus = 0x66,
            SourceVbusDefault = 0x77,
            SourceVbusHigh = 0x88,
            Look4Connection = 0x99,
            RxOneMore = 0xAA,
            I2cIdle = 0xFF
        ]
    ],
    PD_DEVCAP1L @ 0x24 : ReadOnly = 0x00 [
        CAP OFFSET(0) NUMBITS(8) []
    ],
    PD_DEVCAP1H @ 0x25 : ReadOnly = 0x00 [
        CAP OFFSET(0) NUMBITS(8) []
    ],
    PD_DEVCAP2L @ 0x26 : ReadOnly = 0x00 [
        CAP OFFSET(0) NUMBITS(8) []
    ],
    PD_DEVCAP2H @ 0x27 : ReadOnly = 0x00 [
        CAP OFFSET(0) NUMBITS(8) []
    ],
    PD_STDIN_CAP @ 0x28 : ReadOnly = 0x00 [
        CAP OFFSET(0) NUMBITS(8) []
    ],
    PD_STDOUT_CAP @ 0x29 : ReadOnly = 0x00 [
        CAP OFFSET(0) NUMBITS(8) []
    ],
    /// Header fields the port inserts into GoodCRC and transmitted messages.
    PD_MSG_HEADR @ 0x2E : ReadWrite = 0x02 [
        POWER_ROLE OFFSET(0) NUMBITS(1) [
            Sink = 0,
            Source = 1
        ],
        PD_REV OFFSET(1) NUMBITS(2) [
            Rev10 = 0,
            Rev20 = 1,
            Rev30 = 2
        ],
        DATA_ROLE OFFSET(3) NUMBITS(1) [
            Ufp = 0,
            Dfp = 1
        ],
        CABLE_PLUG OFFSET(4) NUMBITS(1) []
    ],
    PD_RXDETECT @ 0x2F : ReadWrite = 0x00 [
        EN_SOP OFFSET(0) NUMBITS(1) [],
        EN_SOP1 OFFSET(1) NUMBITS(1) [],
        EN_SOP2 OFFSET(2) NUMBITS(1) [],
        EN_SOP1_DBG OFFSET(3) NUMBITS(1) [],
        EN_SOP2_DBG OFFSET(4) NUMBITS(1) [],
        EN_HARD_RESET OFFSET(5) NUMBITS(1) [],
        EN_CABLE_RESET OFFSET(6) NUMBITS(1) []
    ],
    /// Received bytes, counting the frame type and header bytes.
    PD_RXBYTECNT @ 0x30 : ReadOnly = 0x00 [
        COUNT OFFSET(0) NUMBITS(8) []
    ],
    PD_RXTYPE @ 0x31 : ReadOnly = 0x00 [
        TYPE OFFSET(0) NUMBITS(3) [
            Sop = 0,
            SopPrime = 1,
            SopDoublePrime = 2,
            SopPrimeDebug = 3,
            SopDoublePrimeDebug = 4,
            CableReset = 6
        ]
    ],
    PD_RXHEADL @ 0x32 : ReadOnly = 0x00 [
        HEADER OFFSET(0) NUMBITS(8) []
    ],
    PD_RXHEADH @ 0x33 : ReadOnly = 0x00 [
        HEADER OFFSET(0) NUMBITS(8) []
    ],
    /// First byte of the receive payload, see [`PD_RXDATA`].
    PD_RXDATA_0 @ 0x34 : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    PD_TRANSMIT @ 0x50 : ReadWrite = 0x00 [
        TX_SOP OFFSET(0) NUMBITS(3) [
            Sop = 0,
            SopPrime = 1,
            SopDoublePrime = 2,
            SopPrimeDebug = 3,
            SopDoublePrimeDebug = 4,
            HardReset = 5,
            CableReset = 6,
            BistCarrier2 = 7
        ],
        RETRY_COUNTER OFFSET(4) NUMBITS(2) []
    ],
    /// Bytes to transmit, counting the header bytes.
    PD_TXBYTECNT @ 0x51 : ReadWrite = 0x00 [
        COUNT OFFSET(0) NUMBITS(8) []
    ],
    PD_TXHEADL @ 0x52 : ReadWrite = 0x00 [
        HEADER OFFSET(0) NUMBITS(8) []
    ],
    PD_TXHEADH @ 0x53 : ReadWrite = 0x00 [
        HEADER OFFSET(0) NUMBITS(8) []
    ],
    /// First byte of the transmit payload, see [`PD_TXDATA_WINDOW`].
    PD_TXDATA @ 0x54 : ReadWrite = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    /// VBUS voltage measurement, low byte. 25 mV per LSB before scaling.
    PD_VBUS_VOL_L @ 0x70 : ReadOnly = 0x00 [
        VOL OFFSET(0) NUMBITS(8) []
    ],
    PD_VBUS_VOL_H @ 0x71 : ReadOnly = 0x00 [
        VOL OFFSET(0) NUMBITS(2) [],
        SCALE OFFSET(2) NUMBITS(2) [
            Div1 = 0,
            Div2 = 1,
            Div4 = 2
        ]
    ],
    PD_VBUS_SNK_DISCL @ 0x72 : ReadWrite = 0x8C [
        THRESHOLD OFFSET(0) NUMBITS(8) []
    ],
    PD_VBUS_SNK_DISCH @ 0x73 : ReadWrite = 0x00 [
        THRESHOLD OFFSET(0) NUMBITS(2) []
    ],
    PD_VBUS_STOP_DISCL @ 0x74 : ReadWrite = 0x1C [
        THRESHOLD OFFSET(0) NUMBITS(8) []
    ],
    PD_VBUS_STOP_DISCH @ 0x75 : ReadWrite = 0x00 [
        THRESHOLD OFFSET(0) NUMBITS(2) []
    ],
    PD_VALARMH_CFGL @ 0x76 : ReadWrite = 0x00 [
        THRESHOLD OFFSET(0) NUMBITS(8) []
    ],
    PD_VALARMH_CFGH @ 0x77 : ReadWrite = 0x00 [
        THRESHOLD OFFSET(0) NUMBITS(2) []
    ],
    PD_VALARML_CFGL @ 0x78 : ReadWrite = 0x00 [
        THRESHOLD OFFSET(0) NUMBITS(8) []
    ],
    PD_VALARML_CFGH @ 0x79 : ReadWrite = 0x00 [
        THRESHOLD OFFSET(0) NUMBITS(2) []
    ],
    PD_VDM_CFG_0 @ 0x7A : ReadWrite = 0x00 [
        TX_DISCARD_EN OFFSET(0) NUMBITS(1) [],
        AUTO_GOODCRC OFFSET(1) NUMBITS(1) [],
        CC_DEBOUNCE OFFSET(2) NUMBITS(2) []
    ],
    PD_VDM_ENABLE @ 0x7B : ReadWrite = 0x00 [
        VDM_EN OFFSET(0) NUMBITS(1) []
    ],
    PD_VDM_CFG_1 @ 0x7C : ReadWrite = 0x00 [
        VALUE OFFSET(0) NUMBITS(8) []
    ],
    PD_DBG_RDATA_CFG @ 0x7D : ReadWrite = 0x00 [
        SEL OFFSET(0) NUMBITS(6) [],
        EN OFFSET(7) NUMBITS(1) []
    ],
    PD_DBG_RDATA @ 0x7E : ReadOnly = 0x00 [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    /// Selects which page answers at bus offsets `0x80..=0xFF`.
    VDM_PAGE_SELECT @ 0x7F : ReadWrite = 0x00 [
        PAGE_SEL OFFSET(0) NUMBITS(2) [
            Page0 = 0,
            Page1 = 1,
            Page2 = 2
        ]
    ]
}

/// `PD_RXDATA_0 + k`: received payload bytes.
pub const PD_RXDATA: RegisterWindow =
    RegisterWindow::new("PD_RXDATA_0", PD_RXDATA_0.addr(), PD_PAYLOAD_MAX);

/// `PD_TXDATA + k`: payload bytes to transmit.
pub const PD_TXDATA_WINDOW: RegisterWindow =
    RegisterWindow::new("PD_TXDATA", PD_TXDATA.addr(), PD_PAYLOAD_MAX);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regmap::Page;

    #[test]
    fn identification_offsets() {
        assert_eq!(PD_VENDIDL.addr().raw(), 0x00);
        assert_eq!(PD_VENDIDH.addr().raw(), 0x01);
        assert_eq!(VDM_PAGE_SELECT.addr().raw(), 0x7F);
        assert_eq!(VDM_PAGE_SELECT.addr().page(), Page::Pd);
    }

    #[test]
    fn role_ctrl_resets_to_rd() {
        let reg = PD_ROLE_CTRL.reset_value();
        assert_eq!(reg.get(), 0x0A);
        assert_eq!(reg.read(PD_ROLE_CTRL::PD_CC1_CFG), 0b10);
        assert_eq!(reg.read(PD_ROLE_CTRL::PD_CC2_CFG), 0b10);
        assert_eq!(
            reg.read_as_enum(PD_ROLE_CTRL::PD_CC1_CFG),
            Some(PD_ROLE_CTRL::PD_CC1_CFG::Value::Rd)
        );
        assert_eq!(
            reg.read_as_enum(PD_ROLE_CTRL::PD_CC2_CFG),
            Some(PD_ROLE_CTRL::PD_CC2_CFG::Value::Rd)
        );
        assert!(!reg.is_set(PD_ROLE_CTRL::DRP));
    }

    #[test]
    fn role_ctrl_field_table_matches_bitfields() {
        let cc1 = PD_ROLE_CTRL.field("PD_CC1_CFG").unwrap();
        let cc2 = PD_ROLE_CTRL.field("PD_CC2_CFG").unwrap();
        assert_eq!((cc1.offset, cc1.end()), (0, 1));
        assert_eq!((cc2.offset, cc2.end()), (2, 3));
        assert_eq!(cc1.read(PD_ROLE_CTRL.reset), 0b10);
        assert_eq!(cc2.read(PD_ROLE_CTRL.reset), 0b10);
    }

    #[test]
    fn page_select_encodes_pages() {
        let mut reg = VDM_PAGE_SELECT.reset_value();
        reg.modify(VDM_PAGE_SELECT::PAGE_SEL::Page2);
        assert_eq!(reg.get(), 0x02);
        assert_eq!(
            Page::from_select(reg.read(VDM_PAGE_SELECT::PAGE_SEL)),
            Some(Page::Page2)
        );
    }

    #[test]
    fn payload_windows() {
        assert_eq!(PD_RXDATA.at(0).map(|a| a.raw()), Some(0x34));
        assert_eq!(PD_RXDATA.at(PD_PAYLOAD_MAX - 1).map(|a| a.raw()), Some(0x4F));
        assert_eq!(PD_RXDATA.at(PD_PAYLOAD_MAX), None);
        assert_eq!(PD_TXDATA_WINDOW.at(0).map(|a| a.raw()), Some(0x54));
        assert_eq!(PD_TXDATA_WINDOW.at(PD_PAYLOAD_MAX - 1).map(|a| a.raw()), Some(0x6F));
        assert!(!PD_TXDATA_WINDOW.contains(PD_VBUS_VOL_L.addr()));
    }

    #[test]
    fn command_values() {
        let mut reg = PD_COMMAND.reset_value();
        reg.write(PD_COMMAND::CMD::Look4Connection);
        assert_eq!(reg.get(), 0x99);
    }
}
