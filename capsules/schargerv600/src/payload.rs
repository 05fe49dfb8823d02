// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! USB-PD message payload windows.

use embedded_hal_async::i2c::I2c;
use schargerv600::pd::{PD_PAYLOAD_MAX, PD_RXDATA, PD_TXDATA_WINDOW};

use crate::errorcode::ErrorCode;
use crate::paged::PagedRegisters;

impl<I: I2c> PagedRegisters<I> {
    /// Read the first `buf.len()` bytes of the received payload,
    /// `PD_RXDATA_0 + 0` onwards.
    pub async fn read_rx_payload(&mut self, buf: &mut [u8]) -> Result<(), ErrorCode> {
        if buf.len() > PD_PAYLOAD_MAX {
            return Err(ErrorCode::SIZE);
        }
        self.read_block(PD_RXDATA.base, buf).await
    }

    /// Fill `PD_TXDATA + k` with `data`.
    pub async fn write_tx_payload(&mut self, data: &[u8]) -> Result<(), ErrorCode> {
        if data.len() > PD_PAYLOAD_MAX {
            return Err(ErrorCode::SIZE);
        }
        self.write_block(PD_TXDATA_WINDOW.base, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{block_on, FakeScharger, Transfer, ADDRESS};

    #[test]
    fn payload_windows() {
        let mut fake = FakeScharger::new();
        for k in 0..4 {
            let addr = PD_RXDATA.at(k).unwrap();
            fake.set_mem(addr, 0x10 + k as u8);
        }
        let mut regs = PagedRegisters::new(fake, ADDRESS);
        block_on(async {
            let mut buf = [0; 4];
            regs.read_rx_payload(&mut buf).await.unwrap();
            assert_eq!(buf, [0x10, 0x11, 0x12, 0x13]);

            let full = [0xA5; PD_PAYLOAD_MAX];
            regs.write_tx_payload(&full).await.unwrap();

            let mut big = [0; PD_PAYLOAD_MAX + 1];
            assert_eq!(regs.read_rx_payload(&mut big).await, Err(ErrorCode::SIZE));
            assert_eq!(regs.write_tx_payload(&big).await, Err(ErrorCode::SIZE));
        });
        assert_eq!(regs.selected_page(), None);
        let fake = regs.release();
        assert_eq!(fake.transfers[0], Transfer::Read(0x34, 4));
        assert_eq!(fake.mem(PD_TXDATA_WINDOW.at(PD_PAYLOAD_MAX - 1).unwrap()), 0xA5);
        assert_eq!(fake.transfers.len(), 2);
    }
}
