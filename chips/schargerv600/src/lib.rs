// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register map of the SchargerV600 (Hi6526) USB-PD switched-capacitor
//! charger.
//!
//! <https://www.hisilicon.com/>
//!
//! The chip is a single I2C target with four register pages. The PD page is
//! always mapped. Page0, Page1 and Page2 share the upper half of the bus
//! address space and are switched through `VDM_PAGE_SELECT`.
//!
//! Every register is declared with `tock-registers` bitfields, so the usual
//! `Field` and `FieldValue` constants are available, and is described by a
//! [`regmap::Register`] constant of the same name that carries its address,
//! reset value and access kind:
//!
//! ```rust,ignore
//! use schargerv600::pd::{PD_ROLE_CTRL, VDM_PAGE_SELECT};
//!
//! let role = PD_ROLE_CTRL.reset_value();
//! assert_eq!(
//!     role.read_as_enum(PD_ROLE_CTRL::PD_CC1_CFG),
//!     Some(PD_ROLE_CTRL::PD_CC1_CFG::Value::Rd)
//! );
//! assert_eq!(VDM_PAGE_SELECT.addr().raw(), 0x7F);
//! ```
//!
//! The map is data only. Bus access lives in the `capsules-schargerv600`
//! crate.

#![no_std]
#![forbid(unsafe_code)]

pub use tock_registers;

pub mod regmap;

pub mod hkadc;
pub mod page0;
pub mod page1;
pub mod page2;
pub mod pd;
pub mod soft_reset;
pub mod tuning;

#[doc(inline)]
pub use crate::regmap::{
    Access, FieldInfo, Page, RegAddr, Register, RegisterInfo, RegisterWindow, PAGE0_BASE,
    PAGE1_BASE, PAGE2_BASE, PAGE_SIZE, PD_BASE,
};
#[doc(inline)]
pub use crate::soft_reset::SoftReset;

/// Prefix the datasheet puts in front of every register name.
pub const DATASHEET_PREFIX: &str = "SOC_SCHARGER_";

/// Register tables of every page, in address order.
pub const ALL_PAGES: [(Page, &[RegisterInfo]); 4] = [
    (Page::Pd, pd::REGISTERS),
    (Page::Page0, page0::REGISTERS),
    (Page::Page1, page1::REGISTERS),
    (Page::Page2, page2::REGISTERS),
];

/// Every register of the chip, PD page first.
pub fn registers() -> impl Iterator<Item = &'static RegisterInfo> {
    ALL_PAGES.iter().flat_map(|(_, regs)| regs.iter())
}

/// Look a register up by name. Datasheet names are accepted too: the
/// `SOC_SCHARGER_` prefix is optional and case is ignored.
pub fn find(name: &str) -> Option<&'static RegisterInfo> {
    let name = match name.get(..DATASHEET_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(DATASHEET_PREFIX) => {
            &name[DATASHEET_PREFIX.len()..]
        }
        _ => name,
    };
    registers().find(|r| r.name.eq_ignore_ascii_case(name))
}

pub fn by_addr(addr: RegAddr) -> Option<&'static RegisterInfo> {
    registers().find(|r| r.addr == addr)
}

// This is used to run the tests on a host
#[cfg(test)]
#[macro_use]
extern crate std;
