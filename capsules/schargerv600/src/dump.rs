// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Register dumps for debugging.

use embedded_hal_async::i2c::I2c;
use schargerv600::{Page, RegisterInfo};

use crate::errorcode::ErrorCode;
use crate::paged::PagedRegisters;

impl<I: I2c> PagedRegisters<I> {
    /// Read every readable register of `page` in address order and hand each
    /// result to `visit`. A failed read is reported and the dump goes on.
    pub async fn dump_page<F>(&mut self, page: Page, mut visit: F)
    where
        F: FnMut(&'static RegisterInfo, Result<u8, ErrorCode>),
    {
        let table: &'static [RegisterInfo] = schargerv600::ALL_PAGES
            .iter()
            .find(|(p, _)| *p == page)
            .map_or(&[], |(_, regs)| *regs);
        for reg in table.iter().filter(|r| r.access.is_readable()) {
            let value = self.read_byte(reg.addr).await;
            visit(reg, value);
        }
    }

    /// [`Self::dump_page`] over all four pages.
    pub async fn dump<F>(&mut self, mut visit: F)
    where
        F: FnMut(&'static RegisterInfo, Result<u8, ErrorCode>),
    {
        for page in Page::ALL {
            self.dump_page(page, &mut visit).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{block_on, FakeScharger, ADDRESS};
    use schargerv600::{pd, Access};
    use std::vec::Vec;

    #[test]
    fn dump_shows_reset_values() {
        let mut regs = PagedRegisters::new(FakeScharger::new(), ADDRESS);
        let mut seen = Vec::new();
        block_on(regs.dump(|reg, value| seen.push((reg.name, value))));

        let readable = schargerv600::registers()
            .filter(|r| r.access != Access::WriteOnly)
            .count();
        assert_eq!(seen.len(), readable);
        assert!(seen.contains(&("PD_ROLE_CTRL", Ok(0x0A))));
        assert!(seen.contains(&("HKADC_CTRL1", Ok(0x67))));
        assert!(!seen.iter().any(|(name, _)| *name == "WATCHDOG_SOFT_RST"));
        // Three page switches, one per banked page.
        assert_eq!(regs.release().page_selects(), 3);
    }

    #[test]
    fn dump_continues_past_errors() {
        let mut fake = FakeScharger::new();
        fake.nack = true;
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        let mut failures = 0;
        block_on(regs.dump_page(Page::Pd, |_, value| {
            assert_eq!(value, Err(ErrorCode::NOACK));
            failures += 1;
        }));
        let readable = pd::REGISTERS.iter().filter(|r| r.access.is_readable()).count();
        assert_eq!(failures, readable);
    }
}
