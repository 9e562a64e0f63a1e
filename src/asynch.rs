//! Async variant of the `TCA6416A` driver, for buses implementing
//! [`embedded_hal_async::i2c::I2c`].
//!
//! This module is only built if the `"async"` feature is enabled.  It offers the per-pin
//! operations of [`Tca6416a`][crate::Tca6416a] with the same register sequences and errors.
//!
//! ```ignore
//! use tca6416a::{asynch::Tca6416aAsync, Direction};
//! use embedded_hal::digital::PinState;
//!
//! async fn blink(i2c: impl embedded_hal_async::i2c::I2c) {
//!     let mut dev = Tca6416aAsync::new(i2c, false);
//!     dev.pin_mode(9, Direction::Output).await.unwrap();
//!     dev.digital_write(9, PinState::High).await.unwrap();
//! }
//! ```
use crate::register::{Family, PinRef};
use crate::trace::{emit, Event, NoTrace, Trace};
use crate::{Address, Direction, Error, Polarity, Register};
use embedded_hal::digital::PinState;
use embedded_hal_async::i2c::I2c;

/// Async `TCA6416A` driver.
pub struct Tca6416aAsync<I2C, T = NoTrace> {
    i2c: I2C,
    addr: Address,
    trace: T,
}

impl<I2C: I2c> Tca6416aAsync<I2C> {
    /// Create a driver for the chip whose `ADDR` pin is at level `a0`.
    pub fn new(i2c: I2C, a0: bool) -> Self {
        Self {
            i2c,
            addr: Address::new(a0),
            trace: NoTrace,
        }
    }
}

impl<I2C: I2c, T: Trace> Tca6416aAsync<I2C, T> {
    /// Replace the diagnostic trace sink.
    pub fn with_trace<U: Trace>(self, trace: U) -> Tca6416aAsync<I2C, U> {
        Tca6416aAsync {
            i2c: self.i2c,
            addr: self.addr,
            trace,
        }
    }

    pub fn address(&self) -> Address {
        self.addr
    }

    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// Consume the driver and return the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Configure `pin` as input or output.
    pub async fn pin_mode(&mut self, pin: u8, mode: Direction) -> Result<(), Error<I2C::Error>> {
        self.update_pin(Family::Configuration, pin, mode == Direction::Input)
            .await
    }

    /// Drive output `pin` HIGH or LOW.
    pub async fn digital_write(
        &mut self,
        pin: u8,
        value: PinState,
    ) -> Result<(), Error<I2C::Error>> {
        self.update_pin(Family::Output, pin, value == PinState::High)
            .await
    }

    /// Read the level of `pin`, after polarity inversion.
    pub async fn digital_read(&mut self, pin: u8) -> Result<PinState, Error<I2C::Error>> {
        let (reg, bit) = Self::pin(pin)?.resolve(Family::Input);
        let value = self.read_register(reg).await?;
        Ok(PinState::from((value >> bit) & 0x01 != 0))
    }

    /// Set the input polarity of `pin`.
    pub async fn invert(&mut self, pin: u8, polarity: Polarity) -> Result<(), Error<I2C::Error>> {
        self.update_pin(Family::Polarity, pin, polarity == Polarity::Invert)
            .await
    }

    /// Restore the regular input polarity of `pin`.
    pub async fn revert(&mut self, pin: u8) -> Result<(), Error<I2C::Error>> {
        self.invert(pin, Polarity::Retain).await
    }

    /// Read one register.
    pub async fn read_register(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        let addr = self.addr.get();
        let mut buf = [0x00];
        if let Err(e) = self.i2c.write_read(addr, &[reg.into()], &mut buf).await {
            emit(&mut self.trace, Event::ReadFailed { addr, reg, len: 1 });
            return Err(Error::Read(e));
        }
        emit(&mut self.trace, Event::Read { addr, reg, data: &buf });
        Ok(buf[0])
    }

    /// Write one register.
    pub async fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        let addr = self.addr.get();
        if let Err(e) = self.i2c.write(addr, &[reg.into(), value]).await {
            emit(&mut self.trace, Event::WriteFailed { addr, reg, len: 1 });
            return Err(Error::Write(e));
        }
        emit(&mut self.trace, Event::Write { addr, reg, data: &[value] });
        Ok(())
    }

    fn pin(pin: u8) -> Result<PinRef, Error<I2C::Error>> {
        PinRef::new(pin).ok_or(Error::UndefinedPin(pin))
    }

    async fn update_pin(&mut self, family: Family, pin: u8, set: bool) -> Result<(), Error<I2C::Error>> {
        let pin = Self::pin(pin)?;
        let (reg, _) = pin.resolve(family);
        let mut value = self.read_register(reg).await?;
        value &= !pin.mask();
        if set {
            value |= pin.mask();
        }
        self.write_register(reg, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[tokio::test]
    async fn pin_operations() {
        let expectations = [
            // pin 9 output
            mock_i2c::Transaction::write_read(0x21, vec![0x07], vec![0xff]),
            mock_i2c::Transaction::write(0x21, vec![0x07, 0xfd]),
            // pin 9 high
            mock_i2c::Transaction::write_read(0x21, vec![0x03], vec![0x00]),
            mock_i2c::Transaction::write(0x21, vec![0x03, 0x02]),
            // pin 4 read
            mock_i2c::Transaction::write_read(0x21, vec![0x00], vec![0x10]),
            // pin 4 invert and revert
            mock_i2c::Transaction::write_read(0x21, vec![0x04], vec![0x00]),
            mock_i2c::Transaction::write(0x21, vec![0x04, 0x10]),
            mock_i2c::Transaction::write_read(0x21, vec![0x04], vec![0x10]),
            mock_i2c::Transaction::write(0x21, vec![0x04, 0x00]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416aAsync::new(bus.clone(), true);
        dev.pin_mode(9, Direction::Output).await.unwrap();
        dev.digital_write(9, PinState::High).await.unwrap();
        assert_eq!(dev.digital_read(4).await.unwrap(), PinState::High);
        dev.invert(4, Polarity::Invert).await.unwrap();
        dev.revert(4).await.unwrap();

        bus.done();
    }

    #[tokio::test]
    async fn errors() {
        let expectations = [
            mock_i2c::Transaction::write_read(0x20, vec![0x06], vec![0x00])
                .with_error(ErrorKind::Other),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416aAsync::new(bus.clone(), false);
        assert_eq!(
            dev.pin_mode(16, Direction::Input).await,
            Err(Error::UndefinedPin(16))
        );
        assert_eq!(
            dev.pin_mode(0, Direction::Input).await,
            Err(Error::Read(ErrorKind::Other))
        );

        bus.done();
    }
}
