//! Diagnostic tracing of bus transactions.
//!
//! Every register access the driver performs is reported as an [`Event`] to the driver's
//! [`Trace`] sink.  Tracing is purely observational: a sink cannot influence the transaction it
//! is told about.  The default sink, [`NoTrace`], discards everything.
//!
//! With the `log` or `defmt` features enabled, the same events are additionally emitted at trace
//! level through the respective logging framework, independent of the installed sink.
//!
//! To get a human readable transcript on any [`core::fmt::Write`] implementation (a UART, a
//! `String`, ...), wrap it in [`FmtTrace`]:
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c as mock_i2c;
//! # let expectations = [mock_i2c::Transaction::write_read(0x20, vec![0x00], vec![0xa5])];
//! # let mut bus = mock_i2c::Mock::new(&expectations);
//! let mut dev = tca6416a::Tca6416a::new(bus.clone(), false)
//!     .with_trace(tca6416a::FmtTrace(String::new()));
//! dev.read_input_register().unwrap();
//! assert_eq!(dev.trace().0, "read 1 @ 0x00\n    0: 0xa5\n");
//! # bus.done();
//! ```
use crate::Register;
use core::fmt;

/// A single observed bus transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// `data` was read starting at register `reg`.
    Read {
        addr: u8,
        reg: Register,
        data: &'a [u8],
    },
    /// `data` was written starting at register `reg`.
    Write {
        addr: u8,
        reg: Register,
        data: &'a [u8],
    },
    /// Reading `len` bytes starting at `reg` failed on the bus.
    ReadFailed { addr: u8, reg: Register, len: usize },
    /// Writing `len` bytes starting at `reg` failed on the bus.
    WriteFailed { addr: u8, reg: Register, len: usize },
    /// An access was attempted without a bus bound to the driver.
    Unbound,
}

/// Receiver for diagnostic [`Event`]s.
pub trait Trace {
    fn event(&mut self, event: Event<'_>);
}

/// Trace sink which discards all events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn event(&mut self, _event: Event<'_>) {}
}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn event(&mut self, event: Event<'_>) {
        (**self).event(event)
    }
}

/// Trace sink writing one line per transaction, plus one line per transferred byte, to a
/// [`core::fmt::Write`] implementation.
///
/// Formatting errors of the underlying writer are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FmtTrace<W>(pub W);

impl<W: fmt::Write> FmtTrace<W> {
    fn bytes(&mut self, data: &[u8]) -> fmt::Result {
        for (i, b) in data.iter().enumerate() {
            writeln!(self.0, "    {}: 0x{:02x}", i, b)?;
        }
        Ok(())
    }

    fn write_event(&mut self, event: Event<'_>) -> fmt::Result {
        match event {
            Event::Read { reg, data, .. } => {
                writeln!(self.0, "read {} @ 0x{:02x}", data.len(), u8::from(reg))?;
                self.bytes(data)
            }
            Event::Write { reg, data, .. } => {
                writeln!(self.0, "write {} @ 0x{:02x}", data.len(), u8::from(reg))?;
                self.bytes(data)
            }
            Event::ReadFailed { reg, len, .. } => writeln!(
                self.0,
                "    ERR: read {} @ 0x{:02x} failed",
                len,
                u8::from(reg)
            ),
            Event::WriteFailed { reg, len, .. } => writeln!(
                self.0,
                "    ERR: write {} @ 0x{:02x} failed",
                len,
                u8::from(reg)
            ),
            Event::Unbound => writeln!(self.0, "ERR: invalid address"),
        }
    }
}

impl<W: fmt::Write> Trace for FmtTrace<W> {
    fn event(&mut self, event: Event<'_>) {
        let _ = self.write_event(event);
    }
}

/// Hand `event` to the sink and to whichever logging framework is enabled.
pub(crate) fn emit<T: Trace + ?Sized>(sink: &mut T, event: Event<'_>) {
    #[cfg(feature = "log")]
    match event {
        Event::Read { addr, reg, data } => {
            log::trace!("0x{:02x}: read {:?}: {:02x?}", addr, reg, data)
        }
        Event::Write { addr, reg, data } => {
            log::trace!("0x{:02x}: write {:?}: {:02x?}", addr, reg, data)
        }
        Event::ReadFailed { addr, reg, len } => {
            log::trace!("0x{:02x}: read of {} bytes @ {:?} failed", addr, len, reg)
        }
        Event::WriteFailed { addr, reg, len } => {
            log::trace!("0x{:02x}: write of {} bytes @ {:?} failed", addr, len, reg)
        }
        Event::Unbound => log::trace!("access without bound bus"),
    }

    #[cfg(feature = "defmt")]
    match event {
        Event::Read { addr, reg, data } => {
            defmt::trace!("{=u8:#x}: read {}: {=[u8]:#x}", addr, reg, data)
        }
        Event::Write { addr, reg, data } => {
            defmt::trace!("{=u8:#x}: write {}: {=[u8]:#x}", addr, reg, data)
        }
        Event::ReadFailed { addr, reg, len } => {
            defmt::trace!("{=u8:#x}: read of {=usize} bytes @ {} failed", addr, len, reg)
        }
        Event::WriteFailed { addr, reg, len } => {
            defmt::trace!("{=u8:#x}: write of {=usize} bytes @ {} failed", addr, len, reg)
        }
        Event::Unbound => defmt::trace!("access without bound bus"),
    }

    sink.event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_trace_transcript() {
        let mut t = FmtTrace(String::new());
        t.event(Event::Read {
            addr: 0x20,
            reg: Register::Configuration1,
            data: &[0xff],
        });
        t.event(Event::Write {
            addr: 0x20,
            reg: Register::OutputPort0,
            data: &[0x01, 0x80],
        });
        t.event(Event::WriteFailed {
            addr: 0x20,
            reg: Register::OutputPort0,
            len: 1,
        });
        t.event(Event::Unbound);
        assert_eq!(
            t.0,
            "read 1 @ 0x07\n    0: 0xff\n\
             write 2 @ 0x02\n    0: 0x01\n    1: 0x80\n    \
             ERR: write 1 @ 0x02 failed\n\
             ERR: invalid address\n"
        );
    }
}
