pub trait PortDriver {
    type Error;

    /// Set all pins in `mask_high` to HIGH and all pins in `mask_low` to LOW.
    ///
    /// If a bit is set in both masks, the pin ends up HIGH.
    fn set(&mut self, mask_high: u16, mask_low: u16) -> Result<(), Self::Error>;

    /// Check whether pins in `mask_high` were set HIGH and pins in `mask_low` were set LOW.
    ///
    /// For each pin in either of the masks, the returned `u16` has a 1 if it meets the expected
    /// state and a 0 otherwise.  All other bits are 0.
    fn is_set(&mut self, mask_high: u16, mask_low: u16) -> Result<u16, Self::Error>;

    /// Check whether pins in `mask_high` are driven HIGH and pins in `mask_low` are driven LOW.
    ///
    /// Same result encoding as [`PortDriver::is_set`].
    fn get(&mut self, mask_high: u16, mask_low: u16) -> Result<u16, Self::Error>;

    fn toggle(&mut self, mask: u16) -> Result<(), Self::Error> {
        // for all pins which are currently low, make them high.
        let mask_high = self.is_set(0, mask)?;
        // for all pins which are currently high, make them low.
        let mask_low = self.is_set(mask, 0)?;
        self.set(mask_high, mask_low)
    }
}

pub trait PortDriverTotemPole: PortDriver {
    /// Set the direction for all pins in `mask` to direction `dir`.
    ///
    /// To prevent electrical glitches, when making pins outputs, the `state` can be either `true`
    /// or `false` to immediately put the pin HIGH or LOW upon switching.
    fn set_direction(&mut self, mask: u16, dir: Direction, state: bool) -> Result<(), Self::Error>;
}

pub trait PortDriverPolarity: PortDriver {
    /// Set the polarity of all pins in `mask` either `inverted` or not.
    fn set_polarity(&mut self, mask: u16, inverted: bool) -> Result<(), Self::Error>;
}

/// Pin direction.
///
/// Note that the chip encodes directions the opposite way of most GPIO peripherals: a set bit in
/// the configuration register makes the pin an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

/// Input polarity of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Input register reflects the pin level as-is.
    #[default]
    Retain,
    /// Input register reflects the inverted pin level.
    Invert,
}

/// Pin Modes
pub mod mode {
    /// Trait for pin-modes which can be used to set a logic level.
    pub trait HasOutput {}
    /// Trait for pin-modes which can be used to read a logic level.
    pub trait HasInput {}

    /// Pin configured as an input.
    pub struct Input;
    impl HasInput for Input {}

    /// Pin configured as an output.
    pub struct Output;
    impl HasOutput for Output {}
}
