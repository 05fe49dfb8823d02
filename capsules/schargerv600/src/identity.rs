// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Chip identification and trim sequences.

use embedded_hal_async::i2c::I2c;
use log::info;
use schargerv600::page0::{CHIP_VERSION_0, CHIP_VERSION_4};
use schargerv600::tuning::TuningWrite;

use crate::errorcode::ErrorCode;
use crate::paged::PagedRegisters;

impl<I: I2c> PagedRegisters<I> {
    /// `CHIP_VERSION_0..=CHIP_VERSION_3` as one little-endian word.
    pub async fn read_chip_id(&mut self) -> Result<u32, ErrorCode> {
        let mut id = [0; 4];
        self.read_block(CHIP_VERSION_0.addr, &mut id).await?;
        let id = u32::from_le_bytes(id);
        info!("schargerv600: chip id {:#010x}", id);
        Ok(id)
    }

    /// Silicon revision from `CHIP_VERSION_4` and `CHIP_VERSION_5`.
    pub async fn read_chip_version(&mut self) -> Result<u16, ErrorCode> {
        let mut version = [0; 2];
        self.read_block(CHIP_VERSION_4.addr, &mut version).await?;
        Ok(u16::from_le_bytes(version))
    }

    /// Apply a trim sequence in order. Writes covering the whole register
    /// skip the read. Stops at the first failure.
    pub async fn apply_tuning(&mut self, sequence: &[TuningWrite]) -> Result<(), ErrorCode> {
        for write in sequence {
            let value = if write.is_full() {
                write.value
            } else {
                write.apply(self.read_byte(write.addr).await?)
            };
            self.write_byte(write.addr, value).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{block_on, FakeScharger, ADDRESS};
    use schargerv600::page0::{CHIP_VERSION_1, CHIP_VERSION_2, CHIP_VERSION_3, CHIP_VERSION_5};
    use schargerv600::{page2, tuning};

    #[test]
    fn chip_id_is_little_endian() {
        let mut fake = FakeScharger::new();
        fake.set_mem(CHIP_VERSION_0.addr, 0x36);
        fake.set_mem(CHIP_VERSION_1.addr, 0x32);
        fake.set_mem(CHIP_VERSION_2.addr, 0x35);
        fake.set_mem(CHIP_VERSION_3.addr, 0x36);
        fake.set_mem(CHIP_VERSION_4.addr, 0x00);
        fake.set_mem(CHIP_VERSION_5.addr, 0x01);
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        block_on(async {
            assert_eq!(regs.read_chip_id().await, Ok(0x3635_3236));
            assert_eq!(regs.read_chip_version().await, Ok(0x0100));
        });
    }

    #[test]
    fn masked_writes_keep_other_bits() {
        let addr = page2::BUCK_CFG_REG_30.addr;
        let mut fake = FakeScharger::new();
        fake.set_mem(addr, 0x18);
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        let sequence = [
            TuningWrite::masked(addr, 0xE7, 0x42),
            TuningWrite::full(page2::SC_TOP_CFG_REG_0.addr, 0x7F),
        ];
        block_on(regs.apply_tuning(&sequence)).unwrap();
        let fake = regs.release();
        assert_eq!(fake.mem(addr), 0x5A);
        assert_eq!(fake.mem(page2::SC_TOP_CFG_REG_0.addr), 0x7F);
    }

    #[test]
    fn stock_sequences_apply() {
        for sequence in [tuning::COMMON, tuning::BUCK, tuning::BUCK_12V, tuning::OTG] {
            let mut regs = PagedRegisters::new(FakeScharger::new(), ADDRESS);
            block_on(regs.apply_tuning(sequence)).unwrap();
            let fake = regs.release();

            let mut expected = FakeScharger::new();
            for write in sequence {
                let old = expected.mem(write.addr);
                expected.set_mem(write.addr, write.apply(old));
            }
            for write in sequence {
                assert_eq!(fake.mem(write.addr), expected.mem(write.addr), "{}", write.addr);
            }
        }
    }
}
