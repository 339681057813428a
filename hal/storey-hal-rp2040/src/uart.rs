//! Serial terminal adapters
//!
//! The buffered UART halves implement the blocking `embedded-io` traits.
//! These adapters expose them as the storey-hal UART traits: transmit
//! blocks until the bytes are queued, receive never blocks.

use embedded_io::{Read, ReadReady, Write};
use storey_hal::{UartRx, UartTx};

/// Transmit half of the terminal link
pub struct SerialTx<W> {
    inner: W,
}

impl<W: Write> SerialTx<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> UartTx for SerialTx<W> {
    type Error = W::Error;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        Write::write_all(&mut self.inner, data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Write::flush(&mut self.inner)
    }
}

/// Receive half of the terminal link
pub struct SerialRx<R> {
    inner: R,
}

impl<R: Read + ReadReady> SerialRx<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read + ReadReady> UartRx for SerialRx<R> {
    type Error = R::Error;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.inner.read_ready()? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        let n = self.inner.read(&mut byte)?;
        Ok((n == 1).then_some(byte[0]))
    }
}

/// Translate the terminal settings for `embassy_rp::uart`
pub fn uart_config(config: &storey_hal::uart::UartConfig) -> embassy_rp::uart::Config {
    let mut rp = embassy_rp::uart::Config::default();
    rp.baudrate = config.baudrate;
    rp
}
