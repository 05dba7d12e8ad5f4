//! Blocking analog reads for the quiz gate.

use crate::Result;

/// A blocking analog-to-digital converter.
pub trait AnalogSampler {
    /// Bits in a raw reading.
    const RESOLUTION_BITS: u32;

    /// One blocking conversion on `channel`.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel is not wired or the conversion fails.
    fn read_channel(&mut self, channel: u8) -> Result<u16>;

    /// One reading scaled down to 8 bits.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel is not wired or the conversion fails.
    fn read_byte(&mut self, channel: u8) -> Result<u8> {
        let raw = self.read_channel(channel)?;
        Ok(scale_to_byte(raw, Self::RESOLUTION_BITS))
    }
}

/// Keeps the top eight bits of a `resolution_bits`-wide reading.
#[must_use]
pub fn scale_to_byte(raw: u16, resolution_bits: u32) -> u8 {
    let scaled = if resolution_bits > 8 {
        raw.checked_shr(resolution_bits.saturating_sub(8)).unwrap_or(0)
    } else {
        raw.checked_shl(8u32.saturating_sub(resolution_bits)).unwrap_or(0)
    };
    u8::try_from(scaled).unwrap_or(u8::MAX)
}

#[cfg(feature = "pico1")]
pub use rp::RpAnalog;

#[cfg(feature = "pico1")]
mod rp {
    use embassy_rp::adc::{Adc, Blocking, Channel};

    use super::AnalogSampler;
    use crate::{Error, Result};

    /// The RP2040's 12-bit ADC with one wired input.
    pub struct RpAnalog<'d> {
        adc: Adc<'d, Blocking>,
        channel: Channel<'d>,
        channel_id: u8,
    }

    impl<'d> RpAnalog<'d> {
        #[must_use]
        pub const fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>, channel_id: u8) -> Self {
            Self {
                adc,
                channel,
                channel_id,
            }
        }
    }

    impl AnalogSampler for RpAnalog<'_> {
        const RESOLUTION_BITS: u32 = 12;

        fn read_channel(&mut self, channel: u8) -> Result<u16> {
            if channel != self.channel_id {
                return Err(Error::AnalogRead(channel));
            }
            self.adc
                .blocking_read(&mut self.channel)
                .map_err(|_| Error::AnalogRead(channel))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_bit_readings_keep_the_top_byte() {
        assert_eq!(scale_to_byte(0x0FFF, 12), 0xFF);
        assert_eq!(scale_to_byte(101 << 4, 12), 101);
        assert_eq!(scale_to_byte(0, 12), 0);
    }

    #[test]
    fn narrow_readings_are_widened() {
        assert_eq!(scale_to_byte(0x3F, 6), 0xFC);
        assert_eq!(scale_to_byte(0xAB, 8), 0xAB);
    }

    #[test]
    fn extreme_resolutions_still_scale() {
        assert_eq!(scale_to_byte(0xFFFF, 16), 0xFF);
        assert_eq!(scale_to_byte(1, 1), 0x80);
        assert_eq!(scale_to_byte(0xFFFF, 40), 0);
    }
}
