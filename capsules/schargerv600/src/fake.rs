// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Host-side stand-ins for the charger, its bus and a delay source.

use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use schargerv600::{Access, RegAddr, PAGE0_BASE};
use std::vec::Vec;

pub(crate) const ADDRESS: u8 = 0x6B;

/// Flattened size of the four pages.
const MEMORY_SIZE: usize = 0x300;

const PAGE_SELECT_OFFSET: u8 = 0x7F;

/// One bus transaction as the chip saw it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum Transfer {
    /// Register offset followed by the data bytes.
    Write(Vec<u8>),
    /// Register offset and number of bytes read.
    Read(u8, usize),
}

/// Behaves like the register file of the charger: an offset byte followed by
/// auto-incrementing data, with the upper half of the bus offsets banked by
/// the page select register. Flag registers clear the bits written to them.
pub(crate) struct FakeScharger {
    memory: [u8; MEMORY_SIZE],
    page_select: u8,
    pub(crate) transfers: Vec<Transfer>,
    /// NACK every transaction while set.
    pub(crate) nack: bool,
}

impl FakeScharger {
    /// A chip fresh out of reset.
    pub(crate) fn new() -> FakeScharger {
        let mut memory = [0; MEMORY_SIZE];
        for reg in schargerv600::registers() {
            memory[reg.addr.raw() as usize] = reg.reset;
        }
        FakeScharger {
            memory,
            page_select: 0,
            transfers: Vec::new(),
            nack: false,
        }
    }

    pub(crate) fn mem(&self, addr: RegAddr) -> u8 {
        self.memory[addr.raw() as usize]
    }

    pub(crate) fn set_mem(&mut self, addr: RegAddr, value: u8) {
        self.memory[addr.raw() as usize] = value;
    }

    /// How many times the page select register was written.
    pub(crate) fn page_selects(&self) -> usize {
        self.transfers
            .iter()
            .filter(|t| matches!(t, Transfer::Write(w) if w.len() > 1 && w[0] == PAGE_SELECT_OFFSET))
            .count()
    }

    fn index(&self, offset: u8) -> usize {
        if (offset as u16) < PAGE0_BASE {
            offset as usize
        } else {
            ((self.page_select as usize) << 8) | offset as usize
        }
    }

    fn load(&self, offset: u8) -> u8 {
        self.memory.get(self.index(offset)).copied().unwrap_or(0)
    }

    fn store(&mut self, offset: u8, value: u8) {
        if offset == PAGE_SELECT_OFFSET {
            self.page_select = value & 0x03;
        }
        let index = self.index(offset);
        let write_clear = RegAddr::from_raw(index as u16)
            .and_then(schargerv600::by_addr)
            .is_some_and(|reg| reg.access == Access::WriteClear);
        if let Some(slot) = self.memory.get_mut(index) {
            if write_clear {
                *slot &= !value;
            } else {
                *slot = value;
            }
        }
    }
}

impl ErrorType for FakeScharger {
    type Error = ErrorKind;
}

impl I2c for FakeScharger {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), ErrorKind> {
        if address != ADDRESS {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        if self.nack {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
        }

        let mut written = Vec::new();
        let mut pointer: Option<u8> = None;
        let mut read = 0;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    for &byte in bytes.iter() {
                        written.push(byte);
                        match pointer {
                            None => pointer = Some(byte),
                            Some(offset) => {
                                self.store(offset, byte);
                                pointer = Some(offset.wrapping_add(1));
                            }
                        }
                    }
                }
                Operation::Read(buf) => {
                    let mut offset = pointer.unwrap_or(0);
                    for slot in buf.iter_mut() {
                        *slot = self.load(offset);
                        offset = offset.wrapping_add(1);
                    }
                    read += buf.len();
                    pointer = Some(offset);
                }
            }
        }

        if read > 0 {
            let offset = written.first().copied().unwrap_or(0);
            self.transfers.push(Transfer::Read(offset, read));
        } else {
            self.transfers.push(Transfer::Write(written));
        }
        Ok(())
    }
}

/// Counts the time it was asked to wait instead of waiting.
#[derive(Default)]
pub(crate) struct FakeDelay {
    pub(crate) waited_ns: u64,
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waited_ns += u64::from(ns);
    }
}

/// Poll `fut` to completion. The fakes never return `Pending`.
pub(crate) fn block_on<F: Future>(fut: F) -> F::Output {
    let mut cx = Context::from_waker(Waker::noop());
    let mut fut = pin!(fut);
    loop {
        if let Poll::Ready(output) = fut.as_mut().poll(&mut cx) {
            return output;
        }
    }
}
