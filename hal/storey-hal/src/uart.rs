//! UART serial communication abstractions
//!
//! The serial terminal is both the status panel output and a source of
//! single-character commands. Reads never block: the control loop asks
//! whether a byte is waiting and moves on if not.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Returns once all data has been queued for transmission.
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Take one received byte if one is available
    ///
    /// Returns `Ok(None)` when the receive buffer is empty.
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Discard everything currently waiting in the receive buffer
    fn drain(&mut self) -> Result<usize, Self::Error> {
        let mut count = 0;
        while self.try_read_byte()?.is_some() {
            count += 1;
        }
        Ok(count)
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            // Terminal link runs 8N1 at 19200
            baudrate: 19_200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct QueueRx {
        bytes: [u8; 4],
        pos: usize,
    }

    impl UartRx for QueueRx {
        type Error = ();

        fn try_read_byte(&mut self) -> Result<Option<u8>, ()> {
            if self.pos < self.bytes.len() {
                self.pos += 1;
                Ok(Some(self.bytes[self.pos - 1]))
            } else {
                Ok(None)
            }
        }
    }

    #[test]
    fn test_drain_consumes_all() {
        let mut rx = QueueRx {
            bytes: *b"12s3",
            pos: 0,
        };
        assert_eq!(rx.drain(), Ok(4));
        assert_eq!(rx.try_read_byte(), Ok(None));
    }

    #[test]
    fn test_default_baudrate() {
        assert_eq!(UartConfig::default().baudrate, 19_200);
    }
}
