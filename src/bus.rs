//! Register-level bus transactions.
//!
//! - A register read writes the register pointer and then reads with a repeated start, so the
//!   bus is not released in between (`write_read`).
//! - A register write sends the register pointer followed by the payload in a single
//!   transaction.
//!
//! The chip increments the register pointer within a register pair, so multi-byte transfers
//! starting at a port 0 register also cover the port 1 register of the same family.
use crate::trace::{emit, Event, Trace};
use crate::{Error, Register};
use embedded_hal::i2c as hal_i2c;

pub(crate) trait I2cExt {
    type Error;

    fn read_regs<T: Trace + ?Sized>(
        &mut self,
        trace: &mut T,
        addr: u8,
        reg: Register,
        buf: &mut [u8],
    ) -> Result<(), Error<Self::Error>>;

    fn write_regs<T: Trace + ?Sized>(
        &mut self,
        trace: &mut T,
        addr: u8,
        reg: Register,
        data: &[u8],
    ) -> Result<(), Error<Self::Error>>;

    fn read_reg<T: Trace + ?Sized>(
        &mut self,
        trace: &mut T,
        addr: u8,
        reg: Register,
    ) -> Result<u8, Error<Self::Error>> {
        let mut buf = [0x00];
        self.read_regs(trace, addr, reg, &mut buf)?;
        Ok(buf[0])
    }

    fn write_reg<T: Trace + ?Sized>(
        &mut self,
        trace: &mut T,
        addr: u8,
        reg: Register,
        value: u8,
    ) -> Result<(), Error<Self::Error>> {
        self.write_regs(trace, addr, reg, &[value])
    }

    /// Read `reg`, clear the bits of `mask_clear`, then set the bits of `mask_set` and write the
    /// result back.  Returns the written value.
    ///
    /// Read and write are two separate bus transactions.  A write to the same register by another
    /// bus master in between is lost.
    fn update_reg<T: Trace + ?Sized>(
        &mut self,
        trace: &mut T,
        addr: u8,
        reg: Register,
        mask_set: u8,
        mask_clear: u8,
    ) -> Result<u8, Error<Self::Error>> {
        let mut value = self.read_reg(trace, addr, reg)?;
        value &= !mask_clear;
        value |= mask_set;
        self.write_reg(trace, addr, reg, value)?;
        Ok(value)
    }
}

impl<I2C: hal_i2c::I2c> I2cExt for I2C {
    type Error = I2C::Error;

    fn read_regs<T: Trace + ?Sized>(
        &mut self,
        trace: &mut T,
        addr: u8,
        reg: Register,
        buf: &mut [u8],
    ) -> Result<(), Error<Self::Error>> {
        if let Err(e) = self.write_read(addr, &[reg.into()], buf) {
            emit(
                trace,
                Event::ReadFailed {
                    addr,
                    reg,
                    len: buf.len(),
                },
            );
            return Err(Error::Read(e));
        }
        emit(trace, Event::Read { addr, reg, data: &*buf });
        Ok(())
    }

    fn write_regs<T: Trace + ?Sized>(
        &mut self,
        trace: &mut T,
        addr: u8,
        reg: Register,
        data: &[u8],
    ) -> Result<(), Error<Self::Error>> {
        let res = match *data {
            [value] => self.write(addr, &[reg.into(), value]),
            _ => self.transaction(
                addr,
                &mut [
                    hal_i2c::Operation::Write(&[reg.into()]),
                    hal_i2c::Operation::Write(data),
                ],
            ),
        };
        if let Err(e) = res {
            emit(
                trace,
                Event::WriteFailed {
                    addr,
                    reg,
                    len: data.len(),
                },
            );
            return Err(Error::Write(e));
        }
        emit(trace, Event::Write { addr, reg, data });
        Ok(())
    }
}
