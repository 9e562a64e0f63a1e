//! Typed pins for the `TCA6416A`.
//!
//! A [`Port`] owns a bound [`Tca6416a`] behind a [`PortMutex`] and hands out one [`Pin`] per
//! I/O line:
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c as mock_i2c;
//! # let expectations = [
//! #     mock_i2c::Transaction::write_read(0x20, vec![0x03], vec![0xff]),
//! #     mock_i2c::Transaction::write(0x20, vec![0x03, 0xfe]),
//! #     mock_i2c::Transaction::write_read(0x20, vec![0x07], vec![0xff]),
//! #     mock_i2c::Transaction::write(0x20, vec![0x07, 0xfe]),
//! #     mock_i2c::Transaction::write_read(0x20, vec![0x03], vec![0xfe]),
//! #     mock_i2c::Transaction::write(0x20, vec![0x03, 0xff]),
//! # ];
//! # let mut bus = mock_i2c::Mock::new(&expectations);
//! let mut port = tca6416a::Port::new(tca6416a::Tca6416a::new(bus.clone(), false));
//! let pins = port.split();
//! let mut led = pins.io1_0.into_output().unwrap();
//! led.set_high().unwrap();
//! # bus.done();
//! ```
//!
//! The pins have no cached state: every access goes to the chip.
use crate::register::Family;
use crate::trace::Trace;
use crate::{Direction, Error, Pin, PortMutex, Tca6416a};
use embedded_hal::i2c::I2c;

/// A [`Tca6416a`] shared between typed [`Pin`]s.
pub struct Port<M>(M);

impl<I2C, T> Port<core::cell::RefCell<Tca6416a<I2C, T>>>
where
    I2C: I2c,
    T: Trace,
{
    pub fn new(driver: Tca6416a<I2C, T>) -> Self {
        Self::with_mutex(driver)
    }
}

impl<I2C, T, M> Port<M>
where
    I2C: I2c,
    T: Trace,
    M: PortMutex<Port = Tca6416a<I2C, T>>,
{
    pub fn with_mutex(driver: Tca6416a<I2C, T>) -> Self {
        Self(PortMutex::create(driver))
    }

    /// Run `f` with exclusive access to the driver.
    pub fn lock<R, F: FnOnce(&mut Tca6416a<I2C, T>) -> R>(&self, f: F) -> R {
        self.0.lock(f)
    }

    pub fn split(&mut self) -> Parts<'_, M> {
        Parts {
            io0_0: Pin::new(0, &self.0),
            io0_1: Pin::new(1, &self.0),
            io0_2: Pin::new(2, &self.0),
            io0_3: Pin::new(3, &self.0),
            io0_4: Pin::new(4, &self.0),
            io0_5: Pin::new(5, &self.0),
            io0_6: Pin::new(6, &self.0),
            io0_7: Pin::new(7, &self.0),
            io1_0: Pin::new(8, &self.0),
            io1_1: Pin::new(9, &self.0),
            io1_2: Pin::new(10, &self.0),
            io1_3: Pin::new(11, &self.0),
            io1_4: Pin::new(12, &self.0),
            io1_5: Pin::new(13, &self.0),
            io1_6: Pin::new(14, &self.0),
            io1_7: Pin::new(15, &self.0),
        }
    }
}

/// All pins of a [`Port`].  The chip powers up with every pin configured as input.
pub struct Parts<'a, M> {
    pub io0_0: Pin<'a, crate::mode::Input, M>,
    pub io0_1: Pin<'a, crate::mode::Input, M>,
    pub io0_2: Pin<'a, crate::mode::Input, M>,
    pub io0_3: Pin<'a, crate::mode::Input, M>,
    pub io0_4: Pin<'a, crate::mode::Input, M>,
    pub io0_5: Pin<'a, crate::mode::Input, M>,
    pub io0_6: Pin<'a, crate::mode::Input, M>,
    pub io0_7: Pin<'a, crate::mode::Input, M>,
    pub io1_0: Pin<'a, crate::mode::Input, M>,
    pub io1_1: Pin<'a, crate::mode::Input, M>,
    pub io1_2: Pin<'a, crate::mode::Input, M>,
    pub io1_3: Pin<'a, crate::mode::Input, M>,
    pub io1_4: Pin<'a, crate::mode::Input, M>,
    pub io1_5: Pin<'a, crate::mode::Input, M>,
    pub io1_6: Pin<'a, crate::mode::Input, M>,
    pub io1_7: Pin<'a, crate::mode::Input, M>,
}

impl<I2C: I2c, T: Trace> crate::PortDriver for Tca6416a<I2C, T> {
    type Error = Error<I2C::Error>;

    fn set(&mut self, mask_high: u16, mask_low: u16) -> Result<(), Self::Error> {
        self.device()?
            .modify_mask(Family::Output, mask_high, mask_low & !mask_high)
    }

    fn is_set(&mut self, mask_high: u16, mask_low: u16) -> Result<u16, Self::Error> {
        let out = self.device()?.read_mask(Family::Output, mask_high | mask_low)?;
        Ok((out & mask_high) | (!out & mask_low))
    }

    fn get(&mut self, mask_high: u16, mask_low: u16) -> Result<u16, Self::Error> {
        let in_ = self.device()?.read_mask(Family::Input, mask_high | mask_low)?;
        Ok((in_ & mask_high) | (!in_ & mask_low))
    }
}

impl<I2C: I2c, T: Trace> crate::PortDriverTotemPole for Tca6416a<I2C, T> {
    fn set_direction(&mut self, mask: u16, dir: Direction, state: bool) -> Result<(), Self::Error> {
        // set state before switching direction to prevent glitch
        if dir == Direction::Output {
            use crate::PortDriver;
            if state {
                self.set(mask, 0)?;
            } else {
                self.set(0, mask)?;
            }
        }

        self.device()?
            .update_mask(Family::Configuration, mask, dir == Direction::Input)
    }
}

impl<I2C: I2c, T: Trace> crate::PortDriverPolarity for Tca6416a<I2C, T> {
    fn set_polarity(&mut self, mask: u16, inverted: bool) -> Result<(), Self::Error> {
        self.device()?.update_mask(Family::Polarity, mask, inverted)
    }
}
