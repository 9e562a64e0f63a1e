//! Register map of the TCA6416A and the pin → (register, bit) resolution.
//!
//! The chip groups its 16 pins into two 8-bit ports.  Every register family (input, output,
//! polarity inversion, configuration) has one register per port, at adjacent addresses.

/// Number of pins on the chip.
pub const PIN_COUNT: u8 = 16;

/// Number of pins per port.
pub const PORT_WIDTH: u8 = 8;

/// One of the eight registers of the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    InputPort0 = 0x00,
    InputPort1 = 0x01,
    OutputPort0 = 0x02,
    OutputPort1 = 0x03,
    PolarityInversion0 = 0x04,
    PolarityInversion1 = 0x05,
    Configuration0 = 0x06,
    Configuration1 = 0x07,
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}

impl TryFrom<u8> for Register {
    type Error = u8;

    /// Fails with the offending offset if it does not name a register.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0x00 => Register::InputPort0,
            0x01 => Register::InputPort1,
            0x02 => Register::OutputPort0,
            0x03 => Register::OutputPort1,
            0x04 => Register::PolarityInversion0,
            0x05 => Register::PolarityInversion1,
            0x06 => Register::Configuration0,
            0x07 => Register::Configuration1,
            other => return Err(other),
        })
    }
}

impl Register {
    /// The family this register belongs to.
    pub fn family(self) -> Family {
        match self {
            Register::InputPort0 | Register::InputPort1 => Family::Input,
            Register::OutputPort0 | Register::OutputPort1 => Family::Output,
            Register::PolarityInversion0 | Register::PolarityInversion1 => Family::Polarity,
            Register::Configuration0 | Register::Configuration1 => Family::Configuration,
        }
    }

    /// The port (0 or 1) this register controls.
    pub fn port(self) -> u8 {
        self as u8 & 0x01
    }
}

/// A register family, i.e. a pair of registers with the same function for port 0 and port 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Family {
    Input,
    Output,
    Polarity,
    Configuration,
}

impl Family {
    /// Register of this family for `port`.  Any port other than 0 selects port 1.
    pub fn register(self, port: u8) -> Register {
        match (self, port) {
            (Family::Input, 0) => Register::InputPort0,
            (Family::Input, _) => Register::InputPort1,
            (Family::Output, 0) => Register::OutputPort0,
            (Family::Output, _) => Register::OutputPort1,
            (Family::Polarity, 0) => Register::PolarityInversion0,
            (Family::Polarity, _) => Register::PolarityInversion1,
            (Family::Configuration, 0) => Register::Configuration0,
            (Family::Configuration, _) => Register::Configuration1,
        }
    }
}

/// A validated pin number, split into its port and bit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinRef {
    port: u8,
    bit: u8,
}

impl PinRef {
    /// Split `pin` into port and bit.  Returns `None` for pins outside 0-15.
    pub fn new(pin: u8) -> Option<Self> {
        if pin >= PIN_COUNT {
            return None;
        }
        Some(if pin >= PORT_WIDTH {
            Self {
                port: 1,
                bit: pin - PORT_WIDTH,
            }
        } else {
            Self { port: 0, bit: pin }
        })
    }

    pub fn port(self) -> u8 {
        self.port
    }

    pub fn bit(self) -> u8 {
        self.bit
    }

    /// Mask of this pin within its port register.
    pub fn mask(self) -> u8 {
        1 << self.bit
    }

    /// Register of `family` holding this pin, together with the pin's bit offset in it.
    pub fn resolve(self, family: Family) -> (Register, u8) {
        (family.register(self.port), self.bit)
    }
}
