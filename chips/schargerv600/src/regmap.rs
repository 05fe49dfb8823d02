// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Pages, addresses and register descriptors shared by every page module.
//!
//! The SchargerV600 exposes a single byte-wide I2C register space of 256
//! offsets. The lower half (`0x00..=0x7F`) is always the PD page. The upper
//! half (`0x80..=0xFF`) is banked: `VDM_PAGE_SELECT` chooses which of Page0,
//! Page1 or Page2 answers there. Addresses in this crate are flattened into
//! one linear space so that every register has a unique [`RegAddr`]:
//!
//! ```text
//!   PD     0x000 ..= 0x07F
//!   PAGE0  0x080 ..= 0x0FF   (select 0)
//!   PAGE1  0x180 ..= 0x1FF   (select 1)
//!   PAGE2  0x280 ..= 0x2FF   (select 2)
//! ```
//!
//! The high byte of a flattened paged address is the page-select value and
//! the low byte is the offset that goes out on the bus.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Deref;

use tock_registers::{LocalRegisterCopy, RegisterLongName};

pub const PD_BASE: u16 = 0x000;
pub const PAGE0_BASE: u16 = 0x080;
pub const PAGE1_BASE: u16 = 0x180;
pub const PAGE2_BASE: u16 = 0x280;

/// Width of every page, in byte registers.
pub const PAGE_SIZE: u16 = 0x80;

/// Width of every register, in bits.
pub const REGISTER_BITS: u8 = 8;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Page {
    /// TCPC page, always addressable.
    Pd,
    Page0,
    Page1,
    Page2,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Pd, Page::Page0, Page::Page1, Page::Page2];

    pub const fn base(self) -> u16 {
        match self {
            Page::Pd => PD_BASE,
            Page::Page0 => PAGE0_BASE,
            Page::Page1 => PAGE1_BASE,
            Page::Page2 => PAGE2_BASE,
        }
    }

    /// Value to program into `VDM_PAGE_SELECT` to make this page
    /// addressable, or `None` for the PD page which never needs selecting.
    pub const fn select_value(self) -> Option<u8> {
        match self {
            Page::Pd => None,
            Page::Page0 => Some(0),
            Page::Page1 => Some(1),
            Page::Page2 => Some(2),
        }
    }

    pub const fn from_select(value: u8) -> Option<Page> {
        match value {
            0 => Some(Page::Page0),
            1 => Some(Page::Page1),
            2 => Some(Page::Page2),
            _ => None,
        }
    }

    pub const fn contains(self, raw: u16) -> bool {
        raw >= self.base() && raw < self.base() + PAGE_SIZE
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Page::Pd => write!(f, "PD"),
            Page::Page0 => write!(f, "PAGE0"),
            Page::Page1 => write!(f, "PAGE1"),
            Page::Page2 => write!(f, "PAGE2"),
        }
    }
}

/// A flattened register address, always inside one of the four pages.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RegAddr(u16);

impl RegAddr {
    /// Panics (at compile time when used in a `const`) if `offset` does not
    /// fit in a page.
    pub const fn new(page: Page, offset: u8) -> RegAddr {
        assert!((offset as u16) < PAGE_SIZE, "register offset outside of page");
        RegAddr(page.base() + offset as u16)
    }

    /// Validate a raw flattened address.
    ///
    /// Anything below `0x80` is the PD page. Above that the high byte must be
    /// a page-select value and the low byte must land in the banked half.
    pub const fn from_raw(raw: u16) -> Option<RegAddr> {
        if raw < PAGE0_BASE {
            return Some(RegAddr(raw));
        }
        if (raw >> 8) > 2 || (raw & 0xFF) < PAGE0_BASE {
            return None;
        }
        Some(RegAddr(raw))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn page(self) -> Page {
        if self.0 < PAGE0_BASE {
            return Page::Pd;
        }
        match self.0 >> 8 {
            0 => Page::Page0,
            1 => Page::Page1,
            _ => Page::Page2,
        }
    }

    /// Offset relative to the start of the page, `0..0x80`.
    pub const fn page_offset(self) -> u8 {
        (self.0 - self.page().base()) as u8
    }

    /// The register offset that is put on the I2C bus once the page is
    /// selected.
    pub const fn bus_offset(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// `ADDR(base)`: the register address relative to an arbitrary base.
    pub const fn addr(self, base: u16) -> u16 {
        base.wrapping_add(self.0)
    }

    /// The address `n` registers further on, if it is still in this page.
    pub const fn offset_by(self, n: usize) -> Option<RegAddr> {
        if self.page_offset() as usize + n < PAGE_SIZE as usize {
            Some(RegAddr(self.0 + n as u16))
        } else {
            None
        }
    }
}

impl fmt::Display for RegAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}

/// How software may touch a register.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Access {
    ReadOnly,
    ReadWrite,
    WriteOnly,
    /// Status flags that are cleared by writing 1 to them.
    WriteClear,
}

impl Access {
    pub const fn is_readable(self) -> bool {
        !matches!(self, Access::WriteOnly)
    }

    pub const fn is_writable(self) -> bool {
        !matches!(self, Access::ReadOnly)
    }
}

/// A named bit range `offset..=end()` inside an 8-bit register.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FieldInfo {
    pub name: &'static str,
    pub offset: u8,
    pub width: u8,
}

impl FieldInfo {
    /// Build the descriptor from the shift and (unshifted) mask that
    /// `register_bitfields!` generates for a field.
    pub const fn from_field(name: &'static str, shift: usize, mask: u8) -> FieldInfo {
        FieldInfo {
            name,
            offset: shift as u8,
            width: mask.count_ones() as u8,
        }
    }

    /// Last bit of the field, inclusive.
    pub const fn end(&self) -> u8 {
        self.offset + self.width - 1
    }

    /// Largest value the field can hold.
    pub const fn max_value(&self) -> u8 {
        ((1u16 << self.width) - 1) as u8
    }

    /// Shifted mask of the field within the register.
    pub const fn mask(&self) -> u8 {
        ((((1u16 << self.width) - 1) << self.offset) & 0xFF) as u8
    }

    pub const fn read(&self, raw: u8) -> u8 {
        (raw & self.mask()) >> self.offset
    }

    /// Replace the field in `raw` with `value`. Bits of `value` that do not
    /// fit are dropped.
    pub const fn write(&self, raw: u8, value: u8) -> u8 {
        (raw & !self.mask()) | (((value as u16) << self.offset) as u8 & self.mask())
    }
}

/// Untyped description of a register.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RegisterInfo {
    pub name: &'static str,
    pub addr: RegAddr,
    pub reset: u8,
    pub access: Access,
    pub fields: &'static [FieldInfo],
}

impl RegisterInfo {
    /// Case is ignored, so the datasheet's `pd_cc1_cfg` finds `PD_CC1_CFG`.
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Bits covered by at least one field.
    pub fn defined_bits(&self) -> u8 {
        self.fields.iter().fold(0, |acc, f| acc | f.mask())
    }
}

/// A register together with its `tock-registers` bitfield type.
///
/// Dereferences to its [`RegisterInfo`]. The typed accessors return a
/// [`LocalRegisterCopy`] so fields can be read with the generated `Field`
/// constants and decoded with `read_as_enum`.
pub struct Register<R: RegisterLongName> {
    info: RegisterInfo,
    associated_register: PhantomData<R>,
}

impl<R: RegisterLongName> Register<R> {
    pub const fn new(info: RegisterInfo) -> Register<R> {
        Register {
            info,
            associated_register: PhantomData,
        }
    }

    pub const fn info(&self) -> RegisterInfo {
        self.info
    }

    pub const fn addr(&self) -> RegAddr {
        self.info.addr
    }

    pub fn reset_value(&self) -> LocalRegisterCopy<u8, R> {
        LocalRegisterCopy::new(self.info.reset)
    }

    pub fn decode(&self, raw: u8) -> LocalRegisterCopy<u8, R> {
        LocalRegisterCopy::new(raw)
    }
}

impl<R: RegisterLongName> Clone for Register<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: RegisterLongName> Copy for Register<R> {}

impl<R: RegisterLongName> Deref for Register<R> {
    type Target = RegisterInfo;

    fn deref(&self) -> &RegisterInfo {
        &self.info
    }
}

impl<R: RegisterLongName> fmt::Debug for Register<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Register").field(&self.info).finish()
    }
}

/// A run of consecutive byte registers addressed as `base + k`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RegisterWindow {
    pub name: &'static str,
    pub base: RegAddr,
    pub len: usize,
}

impl RegisterWindow {
    /// Panics (at compile time when used in a `const`) if the window does not
    /// fit in the page of `base`.
    pub const fn new(name: &'static str, base: RegAddr, len: usize) -> RegisterWindow {
        assert!(len > 0 && base.offset_by(len - 1).is_some(), "window leaves its page");
        RegisterWindow { name, base, len }
    }

    /// Address of slot `k`, or `None` once `k` runs past the window.
    pub const fn at(&self, k: usize) -> Option<RegAddr> {
        if k < self.len {
            self.base.offset_by(k)
        } else {
            None
        }
    }

    /// `ADDR(base)` of slot `k`.
    pub fn addr(&self, base: u16, k: usize) -> Option<u16> {
        self.at(k).map(|a| a.addr(base))
    }

    pub fn contains(&self, addr: RegAddr) -> bool {
        addr >= self.base && (addr.raw() - self.base.raw()) < self.len as u16
    }
}

/// Declare the registers of one page.
///
/// Each entry names a register, its in-page offset, its access kind and its
/// reset value, followed by its fields in `register_bitfields!` syntax. For
/// every entry this expands to the bitfield module generated by
/// `tock-registers` and to a [`Register`] constant of the same name. It also
/// emits a `REGISTERS` table listing the page in declaration order.
macro_rules! scharger_registers {
    (
        $page:expr;
        $(
            $(#[$attr:meta])*
            $name:ident @ $offset:literal : $access:ident = $reset:literal [
                $(
                    $(#[$fattr:meta])*
                    $field:ident OFFSET($fshift:tt) NUMBITS($fbits:tt) $values:tt
                ),+ $(,)?
            ]
        ),+ $(,)?
    ) => {
        $crate::tock_registers::register_bitfields![u8,
            $(
                $(#[$attr])*
                pub $name [
                    $(
                        $(#[$fattr])*
                        $field OFFSET($fshift) NUMBITS($fbits) $values
                    ),+
                ]
            ),+
        ];

        $(
            $(#[$attr])*
            pub const $name: $crate::regmap::Register<$name::Register> =
                $crate::regmap::Register::new($crate::regmap::RegisterInfo {
                    name: stringify!($name),
                    addr: $crate::regmap::RegAddr::new($page, $offset),
                    reset: $reset,
                    access: $crate::regmap::Access::$access,
                    fields: &[$(
                        $crate::regmap::FieldInfo::from_field(
                            stringify!($field),
                            $name::$field.shift,
                            $name::$field.mask,
                        )
                    ),+],
                });
        )+

        /// Every register of this page, in address order.
        pub const REGISTERS: &[$crate::regmap::RegisterInfo] = &[$($name.info()),+];
    };
}

pub(crate) use scharger_registers;
