//! SPI LED matrix board
//!
//! The board takes short command frames while chip select is low:
//!
//! ```text
//! 0x01 x y colour   set one pixel
//! 0x0F              clear all pixels
//! ```
//!
//! The board is mounted sideways, so elevator (column, row) becomes
//! matrix `x = row`, `y = 7 - column`.

use storey_hal::{OutputPin, SpiBus};

use super::{check_bounds, Colour, MatrixError, PixelSink, MATRIX_COLS};

const CMD_SET_PIXEL: u8 = 0x01;
const CMD_CLEAR: u8 = 0x0F;

/// LED matrix on an SPI bus with a dedicated chip select
pub struct SpiMatrix<B, CS> {
    bus: B,
    cs: CS,
}

impl<B: SpiBus, CS: OutputPin> SpiMatrix<B, CS> {
    /// Create the driver; chip select idles high
    pub fn new(bus: B, mut cs: CS) -> Self {
        cs.set_high();
        Self { bus, cs }
    }

    fn send(&mut self, frame: &[u8]) -> Result<(), MatrixError> {
        self.cs.set_low();
        let result = self
            .bus
            .write(frame)
            .and_then(|()| self.bus.flush())
            .map_err(|_| MatrixError::Bus);
        self.cs.set_high();
        result
    }

    pub fn release(self) -> (B, CS) {
        (self.bus, self.cs)
    }
}

impl<B: SpiBus, CS: OutputPin> PixelSink for SpiMatrix<B, CS> {
    fn set_pixel(&mut self, col: u8, row: u8, colour: Colour) -> Result<(), MatrixError> {
        check_bounds(col, row)?;
        let x = row;
        let y = MATRIX_COLS - 1 - col;
        self.send(&[CMD_SET_PIXEL, x, y, colour.0])
    }

    fn clear(&mut self) -> Result<(), MatrixError> {
        self.send(&[CMD_CLEAR])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Default)]
    struct MockBus {
        sent: Vec<u8, 64>,
        fail: bool,
    }

    impl SpiBus for MockBus {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.sent.extend_from_slice(data).map_err(|_| ())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    struct MockPin {
        high: bool,
        toggles: u8,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.toggles += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.toggles += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn matrix() -> SpiMatrix<MockBus, MockPin> {
        SpiMatrix::new(
            MockBus::default(),
            MockPin {
                high: false,
                toggles: 0,
            },
        )
    }

    #[test]
    fn test_pixel_frame_rotated() {
        let mut m = matrix();
        m.set_pixel(1, 5, Colour::ORANGE).unwrap();
        let (bus, cs) = m.release();
        assert_eq!(&bus.sent[..], &[0x01, 5, 6, 0x3F]);
        assert!(cs.is_set_high());
        // idle high, then low/high around the frame
        assert_eq!(cs.toggles, 3);
    }

    #[test]
    fn test_clear_frame() {
        let mut m = matrix();
        m.clear().unwrap();
        let (bus, _) = m.release();
        assert_eq!(&bus.sent[..], &[0x0F]);
    }

    #[test]
    fn test_bus_error_releases_cs() {
        let mut m = SpiMatrix::new(
            MockBus {
                sent: Vec::new(),
                fail: true,
            },
            MockPin {
                high: true,
                toggles: 0,
            },
        );
        assert_eq!(m.clear(), Err(MatrixError::Bus));
        let (_, cs) = m.release();
        assert!(cs.is_set_high());
    }

    #[test]
    fn test_out_of_bounds_not_sent() {
        let mut m = matrix();
        assert_eq!(
            m.set_pixel(8, 0, Colour::RED),
            Err(MatrixError::OutOfBounds)
        );
        let (bus, _) = m.release();
        assert!(bus.sent.is_empty());
    }
}
