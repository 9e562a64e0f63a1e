//! Support for the `TCA6416A` "Low-Voltage 16-Bit I2C and SMBus I/O Expander"
//!
//! [`Tca6416a`] is the device handle.  It is created unbound and becomes usable once an I2C bus
//! is bound to it.  All pin operations go through an [`Expander`], a short-lived view of the
//! bus targeting one device address.  The handle's own methods use the address it was bound
//! at; [`Tca6416a::select()`] talks to the second chip on the same bus instead.
//!
//! Each operation resolves its own register and bit and keeps no register state between calls.
//! Single-pin updates are a read-modify-write of one register, done as two bus transactions.
//! This is not atomic: when another bus master writes the same register in between, its change
//! is overwritten.
use crate::bus::I2cExt;
use crate::register::{Family, PinRef, PORT_WIDTH};
use crate::trace::{emit, Event, NoTrace, Trace};
use crate::{Direction, Error, Polarity, Register};
use embedded_hal::digital::PinState;
use embedded_hal::i2c::I2c;

/// 7-bit I2C address of the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u8);

impl Address {
    /// Base address, with the `ADDR` pin tied low.
    pub const DEFAULT: Address = Address(0x20);

    /// Address for the given level of the `ADDR` pin.
    pub const fn new(a0: bool) -> Self {
        Address(Self::DEFAULT.0 | a0 as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Address> for u8 {
    fn from(a: Address) -> u8 {
        a.0
    }
}

/// `TCA6416A` device handle.
pub struct Tca6416a<I2C, T = NoTrace> {
    i2c: Option<I2C>,
    addr: Address,
    trace: T,
}

impl<I2C> Tca6416a<I2C> {
    /// Create a handle without a bus.  Every operation fails with [`Error::InvalidAddress`]
    /// until [`bind()`][Self::bind] is called.
    pub fn unbound() -> Self {
        Self {
            i2c: None,
            addr: Address::DEFAULT,
            trace: NoTrace,
        }
    }

    /// Create a handle bound to `i2c`, addressing the chip whose `ADDR` pin is at level `a0`.
    pub fn new(i2c: I2C, a0: bool) -> Self {
        let mut dev = Self::unbound();
        dev.bind_at(i2c, a0);
        dev
    }
}

impl<I2C> Default for Tca6416a<I2C> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<I2C, T> Tca6416a<I2C, T> {
    /// Attach the bus and address the chip at the base address.
    ///
    /// Returns the previously bound bus, if any.
    pub fn bind(&mut self, i2c: I2C) -> Option<I2C> {
        self.bind_at(i2c, false)
    }

    /// Attach the bus and address the chip whose `ADDR` pin is at level `a0`.
    pub fn bind_at(&mut self, i2c: I2C, a0: bool) -> Option<I2C> {
        self.addr = Address::new(a0);
        self.i2c.replace(i2c)
    }

    /// Detach and return the bus.  The handle is unbound afterwards.
    pub fn release(&mut self) -> Option<I2C> {
        self.i2c.take()
    }

    pub fn is_bound(&self) -> bool {
        self.i2c.is_some()
    }

    /// Address the handle was bound at.
    pub fn address(&self) -> Address {
        self.addr
    }

    /// Replace the diagnostic trace sink.
    pub fn with_trace<U: Trace>(self, trace: U) -> Tca6416a<I2C, U> {
        Tca6416a {
            i2c: self.i2c,
            addr: self.addr,
            trace,
        }
    }

    pub fn trace(&self) -> &T {
        &self.trace
    }

    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }
}

impl<I2C: I2c, T: Trace> Tca6416a<I2C, T> {
    /// View of the bus targeting the chip this handle was bound at.
    pub fn device(&mut self) -> Result<Expander<'_, I2C, T>, Error<I2C::Error>> {
        let addr = self.addr;
        self.at(addr)
    }

    /// View of the bus targeting the chip whose `ADDR` pin is at level `a0`.
    ///
    /// Two chips can share a bus, differing only in the `ADDR` pin.  This allows controlling
    /// the second one without a second handle.
    pub fn select(&mut self, a0: bool) -> Result<Expander<'_, I2C, T>, Error<I2C::Error>> {
        self.at(Address::new(a0))
    }

    fn at(&mut self, addr: Address) -> Result<Expander<'_, I2C, T>, Error<I2C::Error>> {
        match self.i2c.as_mut() {
            Some(i2c) => Ok(Expander {
                i2c,
                trace: &mut self.trace,
                addr,
            }),
            None => {
                emit(&mut self.trace, Event::Unbound);
                Err(Error::InvalidAddress)
            }
        }
    }

    /// See [`Expander::pin_mode()`].
    pub fn pin_mode(&mut self, pin: u8, mode: Direction) -> Result<(), Error<I2C::Error>> {
        self.device()?.pin_mode(pin, mode)
    }

    /// See [`Expander::pin_modes()`].
    pub fn pin_modes(&mut self, mask: u16, mode: Direction) -> Result<(), Error<I2C::Error>> {
        self.device()?.pin_modes(mask, mode)
    }

    /// See [`Expander::port_mode()`].
    pub fn port_mode(&mut self, mode: Direction) -> Result<(), Error<I2C::Error>> {
        self.device()?.port_mode(mode)
    }

    /// See [`Expander::digital_write()`].
    pub fn digital_write(&mut self, pin: u8, value: PinState) -> Result<(), Error<I2C::Error>> {
        self.device()?.digital_write(pin, value)
    }

    /// Alias for [`digital_write()`][Self::digital_write].
    pub fn write(&mut self, pin: u8, value: PinState) -> Result<(), Error<I2C::Error>> {
        self.digital_write(pin, value)
    }

    /// See [`Expander::digital_port_write()`].
    pub fn digital_port_write(&mut self, value: u16) -> Result<(), Error<I2C::Error>> {
        self.device()?.digital_port_write(value)
    }

    /// See [`Expander::digital_read()`].
    pub fn digital_read(&mut self, pin: u8) -> Result<PinState, Error<I2C::Error>> {
        self.device()?.digital_read(pin)
    }

    /// Alias for [`digital_read()`][Self::digital_read].
    pub fn read(&mut self, pin: u8) -> Result<PinState, Error<I2C::Error>> {
        self.digital_read(pin)
    }

    /// See [`Expander::digital_port_read()`].
    pub fn digital_port_read(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.device()?.digital_port_read()
    }

    /// See [`Expander::invert()`].
    pub fn invert(&mut self, pin: u8, polarity: Polarity) -> Result<(), Error<I2C::Error>> {
        self.device()?.invert(pin, polarity)
    }

    /// See [`Expander::revert()`].
    pub fn revert(&mut self, pin: u8) -> Result<(), Error<I2C::Error>> {
        self.device()?.revert(pin)
    }

    /// See [`Expander::read_register()`].
    pub fn read_register(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        self.device()?.read_register(reg)
    }

    /// See [`Expander::read_input_register()`].
    pub fn read_input_register(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.device()?.read_input_register()
    }

    /// See [`Expander::write_register()`].
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.device()?.write_register(reg, value)
    }

    /// See [`Expander::read_registers()`].
    pub fn read_registers(
        &mut self,
        start: Register,
        buf: &mut [u8],
    ) -> Result<(), Error<I2C::Error>> {
        self.device()?.read_registers(start, buf)
    }

    /// See [`Expander::write_registers()`].
    pub fn write_registers(&mut self, start: Register, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.device()?.write_registers(start, data)
    }
}

/// A bus bound to one device address.
///
/// Obtained from [`Tca6416a::device()`] or [`Tca6416a::select()`].
pub struct Expander<'a, I2C, T> {
    i2c: &'a mut I2C,
    trace: &'a mut T,
    addr: Address,
}

impl<'a, I2C: I2c, T: Trace> Expander<'a, I2C, T> {
    pub fn address(&self) -> Address {
        self.addr
    }

    /// Configure `pin` as input or output.
    pub fn pin_mode(&mut self, pin: u8, mode: Direction) -> Result<(), Error<I2C::Error>> {
        self.update_pin(Family::Configuration, pin, mode == Direction::Input)
    }

    /// Configure all pins in `mask` (bit `n` is pin `n`) as input or output.
    ///
    /// Issues one read-modify-write per port that has pins in `mask`.
    pub fn pin_modes(&mut self, mask: u16, mode: Direction) -> Result<(), Error<I2C::Error>> {
        self.update_mask(Family::Configuration, mask, mode == Direction::Input)
    }

    /// Configure all 16 pins as input or output, in a single write.
    pub fn port_mode(&mut self, mode: Direction) -> Result<(), Error<I2C::Error>> {
        let value = match mode {
            Direction::Input => 0xff,
            Direction::Output => 0x00,
        };
        self.write_registers(Register::Configuration0, &[value, value])
    }

    /// Drive output `pin` HIGH or LOW.
    pub fn digital_write(&mut self, pin: u8, value: PinState) -> Result<(), Error<I2C::Error>> {
        self.update_pin(Family::Output, pin, value == PinState::High)
    }

    /// Set the output latch of all 16 pins at once, bit `n` being pin `n`.
    pub fn digital_port_write(&mut self, value: u16) -> Result<(), Error<I2C::Error>> {
        self.write_registers(Register::OutputPort0, &value.to_le_bytes())
    }

    /// Read the level of `pin`, after polarity inversion.
    pub fn digital_read(&mut self, pin: u8) -> Result<PinState, Error<I2C::Error>> {
        let (reg, bit) = Self::pin(pin)?.resolve(Family::Input);
        let value = self.read_register(reg)?;
        Ok(PinState::from((value >> bit) & 0x01 != 0))
    }

    /// Read the level of all 16 pins at once, bit `n` being pin `n`.
    pub fn digital_port_read(&mut self) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0x00; 2];
        self.read_registers(Register::InputPort0, &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Set the input polarity of `pin`.
    pub fn invert(&mut self, pin: u8, polarity: Polarity) -> Result<(), Error<I2C::Error>> {
        self.update_pin(Family::Polarity, pin, polarity == Polarity::Invert)
    }

    /// Restore the regular input polarity of `pin`.
    pub fn revert(&mut self, pin: u8) -> Result<(), Error<I2C::Error>> {
        self.invert(pin, Polarity::Retain)
    }

    /// Read one register.
    pub fn read_register(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        self.i2c.read_reg(&mut *self.trace, self.addr.get(), reg)
    }

    /// Read the input register of port 0 (pins 0-7).
    pub fn read_input_register(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_register(Register::InputPort0)
    }

    /// Write one register.
    pub fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write_reg(&mut *self.trace, self.addr.get(), reg, value)
    }

    /// Read `buf.len()` consecutive registers starting at `start`.
    ///
    /// The chip's register pointer wraps within a register pair, so reading two bytes from a port
    /// 0 register yields both ports of that family.
    pub fn read_registers(
        &mut self,
        start: Register,
        buf: &mut [u8],
    ) -> Result<(), Error<I2C::Error>> {
        self.i2c.read_regs(&mut *self.trace, self.addr.get(), start, buf)
    }

    /// Write `data` to consecutive registers starting at `start`, in a single transaction.
    pub fn write_registers(&mut self, start: Register, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c.write_regs(&mut *self.trace, self.addr.get(), start, data)
    }

    fn pin(pin: u8) -> Result<PinRef, Error<I2C::Error>> {
        PinRef::new(pin).ok_or(Error::UndefinedPin(pin))
    }

    fn update_pin(&mut self, family: Family, pin: u8, set: bool) -> Result<(), Error<I2C::Error>> {
        let pin = Self::pin(pin)?;
        let (reg, _) = pin.resolve(family);
        let mask = pin.mask();
        let mask_set = if set { mask } else { 0 };
        self.i2c
            .update_reg(&mut *self.trace, self.addr.get(), reg, mask_set, mask)?;
        Ok(())
    }

    /// Read-modify-write the registers of `family` for each port touched by `mask`.
    pub(crate) fn update_mask(
        &mut self,
        family: Family,
        mask: u16,
        set: bool,
    ) -> Result<(), Error<I2C::Error>> {
        for (port, mask) in port_masks(mask) {
            let mask_set = if set { mask } else { 0 };
            self.i2c.update_reg(
                &mut *self.trace,
                self.addr.get(),
                family.register(port),
                mask_set,
                mask,
            )?;
        }
        Ok(())
    }

    /// Read the registers of `family` for each port touched by `mask`, returning them as a
    /// 16-bit value.  Bytes of untouched ports are 0.
    pub(crate) fn read_mask(&mut self, family: Family, mask: u16) -> Result<u16, Error<I2C::Error>> {
        let mut value = 0;
        for (port, _) in port_masks(mask) {
            let byte = self.read_register(family.register(port))?;
            value |= (byte as u16) << (port * PORT_WIDTH);
        }
        Ok(value)
    }

    /// Set the bits of `mask_high` and clear the bits of `mask_low` in the registers of `family`.
    pub(crate) fn modify_mask(
        &mut self,
        family: Family,
        mask_high: u16,
        mask_low: u16,
    ) -> Result<(), Error<I2C::Error>> {
        let [high0, high1] = mask_high.to_le_bytes();
        let [low0, low1] = mask_low.to_le_bytes();
        for (port, high, low) in [(0, high0, low0), (1, high1, low1)] {
            if high | low != 0 {
                self.i2c
                    .update_reg(&mut *self.trace, self.addr.get(), family.register(port), high, low)?;
            }
        }
        Ok(())
    }
}

/// Split a 16-bit pin mask into `(port, mask)` pairs, skipping ports without pins in it.
fn port_masks(mask: u16) -> impl Iterator<Item = (u8, u8)> {
    let [port0, port1] = mask.to_le_bytes();
    [(0, port0), (1, port1)]
        .into_iter()
        .filter(|(_, m)| *m != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[test]
    fn address() {
        assert_eq!(Address::new(false).get(), 0x20);
        assert_eq!(Address::new(true).get(), 0x21);
        assert_eq!(Address::default(), Address::DEFAULT);
    }

    #[test]
    fn unbound_handle_issues_no_transactions() {
        let mut bus = mock_i2c::Mock::new(&[]);

        let mut dev: Tca6416a<mock_i2c::Mock> = Tca6416a::unbound();
        assert!(!dev.is_bound());
        assert_eq!(dev.pin_mode(0, Direction::Output), Err(Error::InvalidAddress));
        assert_eq!(dev.digital_write(3, PinState::High), Err(Error::InvalidAddress));
        assert_eq!(dev.digital_read(9), Err(Error::InvalidAddress));
        assert_eq!(dev.invert(15, Polarity::Invert), Err(Error::InvalidAddress));
        assert_eq!(dev.revert(15), Err(Error::InvalidAddress));
        assert_eq!(dev.read_input_register(), Err(Error::InvalidAddress));
        assert!(dev.select(true).is_err());

        // Released handles are unbound again.
        dev.bind(bus.clone());
        assert!(dev.release().is_some());
        assert_eq!(dev.port_mode(Direction::Input), Err(Error::InvalidAddress));

        bus.done();
    }

    #[test]
    fn undefined_pin() {
        let mut bus = mock_i2c::Mock::new(&[]);

        let mut dev = Tca6416a::new(bus.clone(), false);
        assert_eq!(dev.pin_mode(16, Direction::Input), Err(Error::UndefinedPin(16)));
        assert_eq!(dev.digital_write(16, PinState::Low), Err(Error::UndefinedPin(16)));
        assert_eq!(dev.digital_read(200), Err(Error::UndefinedPin(200)));
        assert_eq!(dev.invert(16, Polarity::Invert), Err(Error::UndefinedPin(16)));

        bus.done();
    }

    #[test]
    fn pin_mode_touches_only_the_pin() {
        let expectations = [
            // pin 0 input
            mock_i2c::Transaction::write_read(0x20, vec![0x06], vec![0b1010_0000]),
            mock_i2c::Transaction::write(0x20, vec![0x06, 0b1010_0001]),
            // pin 7 output
            mock_i2c::Transaction::write_read(0x20, vec![0x06], vec![0xff]),
            mock_i2c::Transaction::write(0x20, vec![0x06, 0x7f]),
            // pin 9 output
            mock_i2c::Transaction::write_read(0x20, vec![0x07], vec![0xff]),
            mock_i2c::Transaction::write(0x20, vec![0x07, 0xfd]),
            // pin 15 input, already set
            mock_i2c::Transaction::write_read(0x20, vec![0x07], vec![0x80]),
            mock_i2c::Transaction::write(0x20, vec![0x07, 0x80]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::new(bus.clone(), false);
        dev.pin_mode(0, Direction::Input).unwrap();
        dev.pin_mode(7, Direction::Output).unwrap();
        dev.pin_mode(9, Direction::Output).unwrap();
        dev.pin_mode(15, Direction::Input).unwrap();

        bus.done();
    }

    #[test]
    fn digital_write_touches_only_the_pin() {
        let expectations = [
            mock_i2c::Transaction::write_read(0x21, vec![0x02], vec![0b0100_0010]),
            mock_i2c::Transaction::write(0x21, vec![0x02, 0b0100_1010]),
            mock_i2c::Transaction::write_read(0x21, vec![0x02], vec![0b0100_1010]),
            mock_i2c::Transaction::write(0x21, vec![0x02, 0b0100_0010]),
            mock_i2c::Transaction::write_read(0x21, vec![0x03], vec![0x00]),
            mock_i2c::Transaction::write(0x21, vec![0x03, 0x40]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::new(bus.clone(), true);
        dev.digital_write(3, PinState::High).unwrap();
        dev.write(3, PinState::Low).unwrap();
        dev.digital_write(14, PinState::High).unwrap();

        bus.done();
    }

    #[test]
    fn digital_read_isolates_the_bit() {
        let expectations = [
            mock_i2c::Transaction::write_read(0x20, vec![0x00], vec![0b1111_1011]),
            mock_i2c::Transaction::write_read(0x20, vec![0x00], vec![0b0000_0100]),
            mock_i2c::Transaction::write_read(0x20, vec![0x01], vec![0b1000_0000]),
            mock_i2c::Transaction::write_read(0x20, vec![0x01], vec![0b0111_1111]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::new(bus.clone(), false);
        assert_eq!(dev.digital_read(2).unwrap(), PinState::Low);
        assert_eq!(dev.read(2).unwrap(), PinState::High);
        assert_eq!(dev.digital_read(15).unwrap(), PinState::High);
        assert_eq!(dev.digital_read(15).unwrap(), PinState::Low);

        bus.done();
    }

    #[test]
    fn invert_then_revert() {
        let expectations = [
            mock_i2c::Transaction::write_read(0x20, vec![0x05], vec![0x01]),
            mock_i2c::Transaction::write(0x20, vec![0x05, 0x11]),
            mock_i2c::Transaction::write_read(0x20, vec![0x05], vec![0x11]),
            mock_i2c::Transaction::write(0x20, vec![0x05, 0x01]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::new(bus.clone(), false);
        dev.invert(12, Polarity::Invert).unwrap();
        dev.revert(12).unwrap();

        bus.done();
    }

    #[test]
    fn raw_register_read_keeps_all_bits() {
        let expectations = [
            mock_i2c::Transaction::write_read(0x20, vec![0x00], vec![0xa5]),
            mock_i2c::Transaction::write_read(0x20, vec![0x06], vec![0xf0]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::new(bus.clone(), false);
        assert_eq!(dev.read_input_register().unwrap(), 0xa5);
        assert_eq!(dev.read_register(Register::Configuration0).unwrap(), 0xf0);

        bus.done();
    }

    #[test]
    fn port_wide_operations() {
        let expectations = [
            // all outputs
            mock_i2c::Transaction::transaction_start(0x20),
            mock_i2c::Transaction::write(0x20, vec![0x06]),
            mock_i2c::Transaction::write(0x20, vec![0x00, 0x00]),
            mock_i2c::Transaction::transaction_end(0x20),
            // output latch, low byte first
            mock_i2c::Transaction::transaction_start(0x20),
            mock_i2c::Transaction::write(0x20, vec![0x02]),
            mock_i2c::Transaction::write(0x20, vec![0xcd, 0xab]),
            mock_i2c::Transaction::transaction_end(0x20),
            // both inputs
            mock_i2c::Transaction::write_read(0x20, vec![0x00], vec![0x34, 0x12]),
            // pins 1 and 8 inputs
            mock_i2c::Transaction::write_read(0x20, vec![0x06], vec![0x00]),
            mock_i2c::Transaction::write(0x20, vec![0x06, 0x02]),
            mock_i2c::Transaction::write_read(0x20, vec![0x07], vec![0x00]),
            mock_i2c::Transaction::write(0x20, vec![0x07, 0x01]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::new(bus.clone(), false);
        dev.port_mode(Direction::Output).unwrap();
        dev.digital_port_write(0xabcd).unwrap();
        assert_eq!(dev.digital_port_read().unwrap(), 0x1234);
        dev.pin_modes(0x0102, Direction::Input).unwrap();

        bus.done();
    }

    #[test]
    fn select_targets_second_chip() {
        let expectations = [
            mock_i2c::Transaction::write_read(0x21, vec![0x07], vec![0xff]),
            mock_i2c::Transaction::write(0x21, vec![0x07, 0xfe]),
            mock_i2c::Transaction::write_read(0x20, vec![0x07], vec![0xff]),
            mock_i2c::Transaction::write(0x20, vec![0x07, 0xfe]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::new(bus.clone(), false);
        let mut other = dev.select(true).unwrap();
        assert_eq!(other.address().get(), 0x21);
        other.pin_mode(8, Direction::Output).unwrap();
        dev.pin_mode(8, Direction::Output).unwrap();

        bus.done();
    }

    #[test]
    fn bus_errors() {
        let expectations = [
            mock_i2c::Transaction::write_read(0x20, vec![0x02], vec![0x00])
                .with_error(ErrorKind::Other),
            mock_i2c::Transaction::write_read(0x20, vec![0x02], vec![0x00]),
            mock_i2c::Transaction::write(0x20, vec![0x02, 0x01]).with_error(ErrorKind::Other),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::new(bus.clone(), false);
        assert_eq!(
            dev.digital_write(0, PinState::High),
            Err(Error::Read(ErrorKind::Other))
        );
        assert_eq!(
            dev.digital_write(0, PinState::High),
            Err(Error::Write(ErrorKind::Other))
        );

        bus.done();
    }

    #[test]
    fn pin9_output_scenario() {
        let expectations = [
            // Configuration1 bit 1 cleared
            mock_i2c::Transaction::write_read(0x20, vec![0x07], vec![0xff]),
            mock_i2c::Transaction::write(0x20, vec![0x07, 0xfd]),
            // OutputPort1 bit 1 set
            mock_i2c::Transaction::write_read(0x20, vec![0x03], vec![0xff]),
            mock_i2c::Transaction::write(0x20, vec![0x03, 0xff]),
            mock_i2c::Transaction::write_read(0x20, vec![0x03], vec![0x00]),
            mock_i2c::Transaction::write(0x20, vec![0x03, 0x02]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::unbound();
        dev.bind(bus.clone());
        assert_eq!(dev.address(), Address::DEFAULT);
        dev.pin_mode(9, Direction::Output).unwrap();
        dev.digital_write(9, PinState::High).unwrap();
        dev.digital_write(9, PinState::High).unwrap();

        bus.done();
    }

    #[test]
    fn trace_transcript() {
        let expectations = [
            mock_i2c::Transaction::write_read(0x20, vec![0x04], vec![0x00]),
            mock_i2c::Transaction::write(0x20, vec![0x04, 0x08]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut dev = Tca6416a::new(bus.clone(), false).with_trace(crate::FmtTrace(String::new()));
        dev.invert(3, Polarity::Invert).unwrap();
        assert_eq!(
            dev.trace().0,
            "read 1 @ 0x04\n    0: 0x00\nwrite 1 @ 0x04\n    0: 0x08\n"
        );

        bus.done();
    }
}
