use core::fmt;

/// Errors returned by the TCA6416A driver.
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Pin number outside of 0-15.
    UndefinedPin(u8),
    /// No bus is bound to the driver, so there is no device address to talk to.
    InvalidAddress,
    /// Register read transaction failed.
    Read(E),
    /// Register write transaction failed.
    Write(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UndefinedPin(pin) => write!(f, "pin {} is not defined", pin),
            Error::InvalidAddress => f.write_str("no bus bound to the device"),
            Error::Read(e) => write!(f, "register read failed: {:?}", e),
            Error::Write(e) => write!(f, "register write failed: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}
