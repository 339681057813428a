//! SPI link to the LED matrix board

use storey_hal::SpiBus;

/// Adapts any blocking `embedded-hal` SPI bus to the storey-hal trait
///
/// On the board this wraps `embassy_rp::spi::Spi` in blocking mode on
/// SPI0 (SCK GPIO18, TX GPIO19).
pub struct SpiLink<S> {
    spi: S,
}

impl<S: embedded_hal::spi::SpiBus> SpiLink<S> {
    pub fn new(spi: S) -> Self {
        Self { spi }
    }
}

impl<S: embedded_hal::spi::SpiBus> SpiBus for SpiLink<S> {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        embedded_hal::spi::SpiBus::write(&mut self.spi, data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        embedded_hal::spi::SpiBus::flush(&mut self.spi)
    }
}

/// Translate the board-agnostic SPI settings for `embassy_rp::spi::Spi`
pub fn spi_config(config: &storey_hal::spi::SpiConfig) -> embassy_rp::spi::Config {
    use storey_hal::spi::{Phase, Polarity};

    let (polarity, phase): (Polarity, Phase) = config.mode.into();
    let mut rp = embassy_rp::spi::Config::default();
    rp.frequency = config.frequency;
    rp.polarity = match polarity {
        Polarity::IdleLow => embassy_rp::spi::Polarity::IdleLow,
        Polarity::IdleHigh => embassy_rp::spi::Polarity::IdleHigh,
    };
    rp.phase = match phase {
        Phase::CaptureOnFirstTransition => embassy_rp::spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => embassy_rp::spi::Phase::CaptureOnSecondTransition,
    };
    rp
}
