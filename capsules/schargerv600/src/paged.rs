// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Paged register access over I2C.
//!
//! The PD page is always visible at bus offsets `0x00..0x80`. Page0, Page1
//! and Page2 all live at bus offsets `0x80..0x100` and only one of them is
//! mapped at a time, chosen by writing its index to `VDM_PAGE_SELECT`.
//! [`PagedRegisters`] remembers the selected page and only writes the select
//! register when an access targets a different page.
//!
//! Every access takes `&mut self`, so a page switch and the access that
//! depends on it can never be interleaved with another user of the chip.

use embedded_hal_async::i2c::{Error as _, I2c, Operation};
use log::{error, trace, warn};
use schargerv600::pd::VDM_PAGE_SELECT;
use schargerv600::{Page, RegAddr, Register, RegisterInfo};
use tock_registers::fields::{Field, FieldValue};
use tock_registers::{LocalRegisterCopy, RegisterLongName};

use crate::config::CONFIG;
use crate::errorcode::ErrorCode;

pub struct PagedRegisters<I> {
    i2c: I,
    address: u8,
    /// Page last written to `VDM_PAGE_SELECT`, `None` if unknown.
    page: Option<Page>,
    bus_errors: u32,
    /// HKADC loop mode was programmed and has not been turned off since.
    adc_loop: bool,
}

impl<I: I2c> PagedRegisters<I> {
    /// `address` is the 7-bit I2C address of the charger. The selected page
    /// starts out unknown, so the first banked access always selects it.
    pub fn new(i2c: I, address: u8) -> PagedRegisters<I> {
        PagedRegisters {
            i2c,
            address,
            page: None,
            bus_errors: 0,
            adc_loop: false,
        }
    }

    /// Give the bus back.
    pub fn release(self) -> I {
        self.i2c
    }

    pub fn selected_page(&self) -> Option<Page> {
        self.page
    }

    /// Bus failures seen since the counter last wrapped.
    pub fn bus_errors(&self) -> u32 {
        self.bus_errors
    }

    pub fn adc_loop_enabled(&self) -> bool {
        self.adc_loop
    }

    pub(crate) fn set_adc_loop(&mut self, enabled: bool) {
        self.adc_loop = enabled;
    }

    /// Forget the selected page. Call this when something else may have
    /// written `VDM_PAGE_SELECT`, e.g. after a chip reset.
    pub fn invalidate_page(&mut self) {
        self.page = None;
    }

    /// Map `page` into the upper half of the bus address space. Selecting the
    /// PD page is a no-op since it is always mapped.
    pub async fn select_page(&mut self, page: Page) -> Result<(), ErrorCode> {
        let Some(value) = page.select_value() else {
            return Ok(());
        };
        if self.page == Some(page) {
            return Ok(());
        }

        let select = VDM_PAGE_SELECT.addr().bus_offset();
        let result = self.i2c.write(self.address, &[select, value]).await;
        match result {
            Ok(()) => {
                if CONFIG.trace_register_access {
                    trace!("schargerv600: select {}", page);
                }
                self.page = Some(page);
                Ok(())
            }
            Err(err) => {
                // The chip may or may not have taken the write.
                self.page = None;
                Err(self.bus_error(err.kind(), VDM_PAGE_SELECT.addr()))
            }
        }
    }

    pub async fn read_byte(&mut self, addr: RegAddr) -> Result<u8, ErrorCode> {
        let mut buf = [0];
        self.read_block(addr, &mut buf).await?;
        Ok(buf[0])
    }

    pub async fn write_byte(&mut self, addr: RegAddr, value: u8) -> Result<(), ErrorCode> {
        self.write_block(addr, &[value]).await
    }

    /// Read `buf.len()` consecutive registers starting at `addr`.
    ///
    /// Returns `SIZE` if the run would leave the page of `addr`; the chip
    /// does not carry an auto-incremented offset over into the next page.
    pub async fn read_block(&mut self, addr: RegAddr, buf: &mut [u8]) -> Result<(), ErrorCode> {
        if buf.is_empty() {
            return Ok(());
        }
        addr.offset_by(buf.len() - 1).ok_or(ErrorCode::SIZE)?;
        self.select_page(addr.page()).await?;

        let result = self
            .i2c
            .write_read(self.address, &[addr.bus_offset()], buf)
            .await;
        if let Err(err) = result {
            return Err(self.bus_error(err.kind(), addr));
        }
        if CONFIG.trace_register_access {
            trace!("schargerv600: read {} -> {:02x?}", addr, buf);
        }
        Ok(())
    }

    /// Write `data` to consecutive registers starting at `addr`.
    pub async fn write_block(&mut self, addr: RegAddr, data: &[u8]) -> Result<(), ErrorCode> {
        if data.is_empty() {
            return Ok(());
        }
        addr.offset_by(data.len() - 1).ok_or(ErrorCode::SIZE)?;
        self.select_page(addr.page()).await?;

        let offset = [addr.bus_offset()];
        let mut ops = [Operation::Write(&offset), Operation::Write(data)];
        let result = self.i2c.transaction(self.address, &mut ops).await;
        self.track_page_select(addr, data, result.is_ok());
        if let Err(err) = result {
            return Err(self.bus_error(err.kind(), addr));
        }
        if CONFIG.trace_register_access {
            trace!("schargerv600: write {} <- {:02x?}", addr, data);
        }
        Ok(())
    }

    /// Keep the cached page in step with a write that covered
    /// `VDM_PAGE_SELECT`. A failed write may or may not have reached the
    /// chip, so the page becomes unknown.
    fn track_page_select(&mut self, addr: RegAddr, data: &[u8], written: bool) {
        if addr.page() != Page::Pd {
            return;
        }
        let Some(index) = VDM_PAGE_SELECT.addr().raw().checked_sub(addr.raw()) else {
            return;
        };
        let Some(&value) = data.get(usize::from(index)) else {
            return;
        };
        self.page = if written {
            Page::from_select(VDM_PAGE_SELECT.decode(value).read(VDM_PAGE_SELECT::PAGE_SEL))
        } else {
            None
        };
    }

    /// Read a register and decode it with its bitfield type.
    pub async fn read<R: RegisterLongName>(
        &mut self,
        reg: &Register<R>,
    ) -> Result<LocalRegisterCopy<u8, R>, ErrorCode> {
        check_readable(reg)?;
        let raw = self.read_byte(reg.addr).await?;
        Ok(reg.decode(raw))
    }

    pub async fn read_field<R: RegisterLongName>(
        &mut self,
        reg: &Register<R>,
        field: Field<u8, R>,
    ) -> Result<u8, ErrorCode> {
        Ok(self.read(reg).await?.read(field))
    }

    /// Write `value` to a register. Bits not named by `value` are written as
    /// zero.
    pub async fn write<R: RegisterLongName>(
        &mut self,
        reg: &Register<R>,
        value: FieldValue<u8, R>,
    ) -> Result<(), ErrorCode> {
        let mut copy = reg.decode(0);
        copy.write(value);
        self.set(reg, copy.get()).await
    }

    /// Write a raw byte to a register.
    pub async fn set(&mut self, reg: &RegisterInfo, raw: u8) -> Result<(), ErrorCode> {
        check_writable(reg)?;
        self.write_byte(reg.addr, raw).await
    }

    /// Read-modify-write the fields named by `value`.
    ///
    /// Flag registers are refused with `NOSUPPORT`: writing back what was
    /// read would clear every pending flag.
    pub async fn modify<R: RegisterLongName>(
        &mut self,
        reg: &Register<R>,
        value: FieldValue<u8, R>,
    ) -> Result<(), ErrorCode> {
        if reg.access == schargerv600::Access::WriteClear {
            return Err(ErrorCode::NOSUPPORT);
        }
        check_writable(reg)?;
        let mut copy = self.read(reg).await?;
        copy.modify(value);
        self.write_byte(reg.addr, copy.get()).await
    }

    /// Read a write-one-to-clear flag register and acknowledge every flag
    /// that was set. Returns the flags as read.
    pub async fn clear_flags<R: RegisterLongName>(
        &mut self,
        reg: &Register<R>,
    ) -> Result<LocalRegisterCopy<u8, R>, ErrorCode> {
        if reg.access != schargerv600::Access::WriteClear {
            return Err(ErrorCode::NOSUPPORT);
        }
        let flags = self.read(reg).await?;
        if flags.get() != 0 {
            self.write_byte(reg.addr, flags.get()).await?;
        }
        Ok(flags)
    }

    fn bus_error(&mut self, kind: embedded_hal_async::i2c::ErrorKind, addr: RegAddr) -> ErrorCode {
        self.bus_errors += 1;
        if self.bus_errors >= CONFIG.bus_error_limit {
            error!(
                "schargerv600: {} bus errors, last at {}: {:?}",
                self.bus_errors, addr, kind
            );
            self.bus_errors = 0;
        } else {
            warn!("schargerv600: bus error at {}: {:?}", addr, kind);
        }
        ErrorCode::from(kind)
    }
}

fn check_readable(reg: &RegisterInfo) -> Result<(), ErrorCode> {
    if reg.access.is_readable() {
        Ok(())
    } else {
        Err(ErrorCode::NOSUPPORT)
    }
}

fn check_writable(reg: &RegisterInfo) -> Result<(), ErrorCode> {
    if reg.access.is_writable() {
        Ok(())
    } else {
        Err(ErrorCode::NOSUPPORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{block_on, FakeScharger, Transfer, ADDRESS};
    use schargerv600::{page0, page1, page2, pd};

    fn regs() -> PagedRegisters<FakeScharger> {
        PagedRegisters::new(FakeScharger::new(), ADDRESS)
    }

    #[test]
    fn pd_page_needs_no_select() {
        let mut regs = regs();
        block_on(async {
            assert_eq!(regs.read_byte(pd::PD_VENDIDL.addr).await, Ok(0xD1));
            regs.write_byte(pd::PD_ROLE_CTRL.addr, 0x05).await.unwrap();
        });
        assert_eq!(regs.selected_page(), None);
        let fake = regs.release();
        assert_eq!(fake.page_selects(), 0);
        assert_eq!(fake.mem(pd::PD_ROLE_CTRL.addr), 0x05);
    }

    #[test]
    fn page_selected_once_per_switch() {
        let mut regs = regs();
        block_on(async {
            regs.read_byte(page0::CNTL.addr).await.unwrap();
            regs.read_byte(page0::FCP_STATUS.addr).await.unwrap();
            regs.read_byte(pd::PD_VENDIDL.addr).await.unwrap();
            regs.read_byte(page0::CNTL.addr).await.unwrap();
            regs.read_byte(page1::CHARGER_CFG_REG_0.addr).await.unwrap();
            regs.read_byte(page2::SC_TOP_CFG_REG_1.addr).await.unwrap();
        });
        assert_eq!(regs.selected_page(), Some(Page::Page2));
        let fake = regs.release();
        assert_eq!(fake.page_selects(), 3);
        assert_eq!(fake.transfers[0], Transfer::Write(vec![0x7F, 0]));
        assert_eq!(fake.transfers[1], Transfer::Read(0x81, 1));
    }

    #[test]
    fn same_bus_offset_in_different_pages() {
        let mut regs = regs();
        block_on(async {
            regs.write_byte(page0::CNTL.addr, 0x11).await.unwrap();
            regs.write_byte(page1::CHARGER_CFG_REG_1.addr, 0x22).await.unwrap();
            regs.write_byte(page2::SC_TOP_CFG_REG_1.addr, 0x33).await.unwrap();
            assert_eq!(regs.read_byte(page0::CNTL.addr).await, Ok(0x11));
            assert_eq!(regs.read_byte(page1::CHARGER_CFG_REG_1.addr).await, Ok(0x22));
            assert_eq!(regs.read_byte(page2::SC_TOP_CFG_REG_1.addr).await, Ok(0x33));
        });
        let fake = regs.release();
        assert_eq!(fake.mem(page0::CNTL.addr), 0x11);
        assert_eq!(fake.mem(page1::CHARGER_CFG_REG_1.addr), 0x22);
        assert_eq!(fake.mem(page2::SC_TOP_CFG_REG_1.addr), 0x33);
    }

    #[test]
    fn failed_select_forgets_page() {
        let mut regs = regs();
        block_on(async {
            regs.read_byte(page0::CNTL.addr).await.unwrap();
            assert_eq!(regs.selected_page(), Some(Page::Page0));
            regs.i2c.nack = true;
            assert_eq!(
                regs.read_byte(page1::CHARGER_CFG_REG_0.addr).await,
                Err(ErrorCode::NOACK)
            );
            assert_eq!(regs.selected_page(), None);
            regs.i2c.nack = false;
            regs.read_byte(page0::CNTL.addr).await.unwrap();
        });
        // The retry has to select Page0 again.
        assert_eq!(regs.release().page_selects(), 2);
    }

    #[test]
    fn page_select_writes_update_cached_page() {
        let mut fake = FakeScharger::new();
        fake.set_mem(page0::CNTL.addr, 0x11);
        fake.set_mem(page2::SC_TOP_CFG_REG_1.addr, 0x33);
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        block_on(async {
            assert_eq!(regs.read_byte(page0::CNTL.addr).await, Ok(0x11));
            regs.write(&pd::VDM_PAGE_SELECT, pd::VDM_PAGE_SELECT::PAGE_SEL::Page2)
                .await
                .unwrap();
            assert_eq!(regs.selected_page(), Some(Page::Page2));
            assert_eq!(regs.read_byte(page2::SC_TOP_CFG_REG_1.addr).await, Ok(0x33));
            assert_eq!(regs.read_byte(page0::CNTL.addr).await, Ok(0x11));

            // A block ending on the select register counts too.
            let start = RegAddr::new(Page::Pd, 0x7E);
            regs.write_block(start, &[0x00, 0x01]).await.unwrap();
            assert_eq!(regs.selected_page(), Some(Page::Page1));

            // Reserved select value: the page is unknown.
            regs.write_byte(pd::VDM_PAGE_SELECT.addr, 0x03).await.unwrap();
            assert_eq!(regs.selected_page(), None);
            assert_eq!(regs.read_byte(page0::CNTL.addr).await, Ok(0x11));

            // Writes that stop short of the select register leave the cache alone.
            regs.write_block(start, &[0x00]).await.unwrap();
            assert_eq!(regs.selected_page(), Some(Page::Page0));
        });
    }

    #[test]
    fn failed_page_select_write_forgets_page() {
        let mut regs = regs();
        block_on(async {
            regs.read_byte(page1::CHARGER_CFG_REG_0.addr).await.unwrap();
            regs.i2c.nack = true;
            assert_eq!(
                regs.set(&pd::VDM_PAGE_SELECT, 0x00).await,
                Err(ErrorCode::NOACK)
            );
            assert_eq!(regs.selected_page(), None);
        });
    }

    #[test]
    fn blocks_stay_inside_one_page() {
        let mut regs = regs();
        block_on(async {
            let mut buf = [0; 2];
            assert_eq!(
                regs.read_block(pd::VDM_PAGE_SELECT.addr, &mut buf).await,
                Err(ErrorCode::SIZE)
            );
            let last = RegAddr::new(Page::Page1, 0x7F);
            assert_eq!(regs.write_block(last, &[1, 2]).await, Err(ErrorCode::SIZE));
            assert_eq!(regs.write_block(last, &[1]).await, Ok(()));
            assert_eq!(regs.read_block(last, &mut []).await, Ok(()));
        });
        assert_eq!(regs.release().transfers.len(), 2);
    }

    #[test]
    fn block_transfers_auto_increment() {
        let mut regs = regs();
        block_on(async {
            regs.write_block(page1::OTG_CFG_REG_0.addr, &[1, 2, 3]).await.unwrap();
            let mut buf = [0; 3];
            regs.read_block(page1::OTG_CFG_REG_0.addr, &mut buf).await.unwrap();
            assert_eq!(buf, [1, 2, 3]);
        });
        let fake = regs.release();
        assert_eq!(fake.mem(page1::OTG_CFG_REG_2.addr), 3);
        assert_eq!(fake.transfers[1], Transfer::Write(vec![0x90, 1, 2, 3]));
    }

    #[test]
    fn typed_access() {
        let mut regs = regs();
        block_on(async {
            let role = regs.read(&pd::PD_ROLE_CTRL).await.unwrap();
            assert_eq!(
                role.read_as_enum(pd::PD_ROLE_CTRL::PD_CC1_CFG),
                Some(pd::PD_ROLE_CTRL::PD_CC1_CFG::Value::Rd)
            );

            regs.write(&page1::CHARGER_CFG_REG_8, page1::CHARGER_CFG_REG_8::VBUS_VSET::V9)
                .await
                .unwrap();
            assert_eq!(
                regs.read(&page1::CHARGER_CFG_REG_8)
                    .await
                    .unwrap()
                    .read_as_enum(page1::CHARGER_CFG_REG_8::VBUS_VSET),
                Some(page1::CHARGER_CFG_REG_8::VBUS_VSET::Value::V9)
            );

            regs.modify(&pd::PD_ROLE_CTRL, pd::PD_ROLE_CTRL::PD_CC2_CFG::Rp)
                .await
                .unwrap();
            assert_eq!(
                regs.read_field(&pd::PD_ROLE_CTRL, pd::PD_ROLE_CTRL::PD_CC2_CFG)
                    .await,
                Ok(0b01)
            );
            assert_eq!(
                regs.read_field(&pd::PD_ROLE_CTRL, pd::PD_ROLE_CTRL::PD_CC1_CFG)
                    .await,
                Ok(0b10)
            );
        });
    }

    #[test]
    fn access_kind_is_enforced() {
        let mut regs = regs();
        block_on(async {
            assert_eq!(
                regs.write(&pd::PD_VENDIDL, pd::PD_VENDIDL::VENDID.val(1)).await,
                Err(ErrorCode::NOSUPPORT)
            );
            assert_eq!(
                regs.read(&page0::WATCHDOG_SOFT_RST).await.map(|r| r.get()),
                Err(ErrorCode::NOSUPPORT)
            );
            assert_eq!(
                regs.modify(&page0::IRQ_FLAG_0, page0::IRQ_FLAG_0::TSHUT::SET).await,
                Err(ErrorCode::NOSUPPORT)
            );
            assert_eq!(
                regs.clear_flags(&page0::CNTL).await.map(|r| r.get()),
                Err(ErrorCode::NOSUPPORT)
            );
        });
        assert!(regs.release().transfers.is_empty());
    }

    #[test]
    fn clear_flags_writes_back_what_was_set() {
        let mut fake = FakeScharger::new();
        fake.set_mem(page0::IRQ_FLAG_0.addr, 0x42);
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        block_on(async {
            let flags = regs.clear_flags(&page0::IRQ_FLAG_0).await.unwrap();
            assert!(flags.is_set(page0::IRQ_FLAG_0::WDT_TIMEOUT));
            assert!(flags.is_set(page0::IRQ_FLAG_0::VBUS_OVP));
            assert_eq!(regs.read_byte(page0::IRQ_FLAG_0.addr).await, Ok(0));
            // Nothing pending, nothing written.
            assert_eq!(regs.clear_flags(&page0::IRQ_FLAG_0).await.map(|r| r.get()), Ok(0));
        });
        let writes = regs
            .release()
            .transfers
            .iter()
            .filter(|t| matches!(t, Transfer::Write(w) if w[0] == 0xD3))
            .count();
        assert_eq!(writes, 1);
    }

    #[test]
    fn bus_error_counter_wraps() {
        let mut regs = regs();
        regs.i2c.nack = true;
        block_on(async {
            for n in 1..CONFIG.bus_error_limit {
                assert_eq!(regs.read_byte(pd::PD_VENDIDL.addr).await, Err(ErrorCode::NOACK));
                assert_eq!(regs.bus_errors(), n);
            }
            let _ = regs.read_byte(pd::PD_VENDIDL.addr).await;
        });
        assert_eq!(regs.bus_errors(), 0);
    }
}
