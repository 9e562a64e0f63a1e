//! Driver for the TI `TCA6416A` 16-bit I2C I/O expander.
//!
//! The chip has 16 I/O pins in two ports of eight.  Pin `n` lives in port `n / 8` at bit `n % 8`.
//! This driver offers three layers:
//!
//! - [`Tca6416a`]: per-pin operations (`pin_mode`, `digital_write`, `digital_read`, `invert`,
//!   `revert`) plus raw register access, built on `embedded-hal` 1.0 I2C.
//! - [`Port`] and [`Pin`]: typed pins implementing the `embedded-hal` digital traits.
//! - [`asynch::Tca6416aAsync`]: the per-pin operations for `embedded-hal-async` I2C buses
//!   (feature `async`).
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c as mock_i2c;
//! # let expectations = [
//! #     mock_i2c::Transaction::write_read(0x20, vec![0x07], vec![0xff]),
//! #     mock_i2c::Transaction::write(0x20, vec![0x07, 0xfd]),
//! #     mock_i2c::Transaction::write_read(0x20, vec![0x03], vec![0x00]),
//! #     mock_i2c::Transaction::write(0x20, vec![0x03, 0x02]),
//! # ];
//! # let mut bus = mock_i2c::Mock::new(&expectations);
//! use embedded_hal::digital::PinState;
//! use tca6416a::{Direction, Tca6416a};
//!
//! let mut dev = Tca6416a::unbound();
//! dev.bind(bus.clone());
//! dev.pin_mode(9, Direction::Output)?;
//! dev.digital_write(9, PinState::High)?;
//! # bus.done();
//! # Ok::<(), tca6416a::Error<embedded_hal::i2c::ErrorKind>>(())
//! ```
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

#[cfg(feature = "async")]
pub mod asynch;
mod bus;
mod common;
mod driver;
mod error;
mod mutex;
mod pin;
mod port;
pub mod register;
pub mod trace;

pub use common::mode;
pub use common::Direction;
pub use common::Polarity;
pub use common::{PortDriver, PortDriverPolarity, PortDriverTotemPole};
pub use driver::{Address, Expander, Tca6416a};
pub use error::Error;
pub use mutex::PortMutex;
pub use pin::Pin;
pub use port::{Parts, Port};
pub use register::Register;
pub use trace::{FmtTrace, NoTrace, Trace};
