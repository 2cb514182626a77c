//! Register map, configuration bits and conversion math of the HDC1008.

#[cfg(feature = "defmt")]
use defmt::Format;

/// Temperature result register; writing it triggers a conversion
pub(crate) const REG_TEMPERATURE: u8 = 0x00;
/// Humidity result register; writing it triggers a conversion
pub(crate) const REG_HUMIDITY: u8 = 0x01;
/// Configuration register
pub(crate) const REG_CONFIG: u8 = 0x02;
/// Serial ID, bits 40..25
pub(crate) const REG_SERIAL_ID_1: u8 = 0xFB;
/// Serial ID, bits 24..9
pub(crate) const REG_SERIAL_ID_2: u8 = 0xFC;
/// Serial ID, bits 8..0 (upper byte only)
pub(crate) const REG_SERIAL_ID_3: u8 = 0xFD;
pub(crate) const REG_MANUFACTURER_ID: u8 = 0xFE;
pub(crate) const REG_DEVICE_ID: u8 = 0xFF;

// Bits of the configuration register MSB. The LSB is reserved and always written as zero.
pub(crate) const CONFIG_SOFT_RESET: u8 = 0b1000_0000;
pub(crate) const CONFIG_HEATER_ON: u8 = 0b0010_0000;
pub(crate) const CONFIG_MODE_BOTH: u8 = 0b0001_0000;
pub(crate) const CONFIG_BATTERY_LOW: u8 = 0b0000_1000;
pub(crate) const CONFIG_TEMP_11BIT: u8 = 0b0000_0100;
pub(crate) const CONFIG_HUMID_8BIT: u8 = 0b0000_0010;
pub(crate) const CONFIG_HUMID_11BIT: u8 = 0b0000_0001;

/// Settling time after a software reset
pub const RESET_DELAY_MS: u32 = 20;
/// Settling time of a temperature-only conversion
pub const TEMPERATURE_DELAY_MS: u32 = 15;
/// Settling time of a humidity-only conversion
pub const HUMIDITY_DELAY_MS: u32 = 13;
/// Settling time of a combined temperature and humidity conversion
pub const TEMP_AND_HUMID_DELAY_MS: u32 = 20;

/// Manufacturer ID reported by Texas Instruments parts
pub const MANUFACTURER_ID_TEXAS_INSTRUMENTS: u16 = 0x5449;
/// Device ID reported by the HDC1008
pub const DEVICE_ID_HDC1008: u16 = 0x1000;

/// I²C address, selected by the ADR1 and ADR0 pins
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum I2cAddr {
    /// ADR1 = 0, ADR0 = 0
    #[default]
    Addr00,
    /// ADR1 = 0, ADR0 = 1
    Addr01,
    /// ADR1 = 1, ADR0 = 0
    Addr10,
    /// ADR1 = 1, ADR0 = 1
    Addr11,
}
impl I2cAddr {
    /// 7-bit bus address
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Addr00 => 0x40,
            Self::Addr01 => 0x41,
            Self::Addr10 => 0x42,
            Self::Addr11 => 0x43,
        }
    }
}

/// Conversion resolution.
///
/// Temperature conversions support [`Resolution::Bits11`] and [`Resolution::Bits14`];
/// humidity conversions support all three.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Resolution {
    /// 8-bit (humidity only)
    Bits8,
    /// 11-bit
    Bits11,
    /// 14-bit
    #[default]
    Bits14,
}
impl Resolution {
    /// Number of bits in the conversion result
    pub const fn bits(self) -> u8 {
        match self {
            Self::Bits8 => 8,
            Self::Bits11 => 11,
            Self::Bits14 => 14,
        }
    }

    /// Resolution bits of a temperature conversion, or `None` if unsupported.
    pub(crate) const fn temperature_bits(self) -> Option<u8> {
        match self {
            Self::Bits8 => None,
            Self::Bits11 => Some(CONFIG_TEMP_11BIT),
            Self::Bits14 => Some(0),
        }
    }

    /// Resolution bits of a humidity conversion.
    pub(crate) const fn humidity_bits(self) -> Option<u8> {
        match self {
            Self::Bits8 => Some(CONFIG_HUMID_8BIT),
            Self::Bits11 => Some(CONFIG_HUMID_11BIT),
            Self::Bits14 => Some(0),
        }
    }
}

/// Accepts a bit width of 8, 11 or 14.
impl TryFrom<u8> for Resolution {
    type Error = InvalidResolution;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(Self::Bits8),
            11 => Ok(Self::Bits11),
            14 => Ok(Self::Bits14),
            other => Err(InvalidResolution(other)),
        }
    }
}

/// A bit width that is not a supported [`Resolution`]
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidResolution(pub u8);

/// Acquisition mode of a measurement
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Acquisition {
    Temperature(Resolution),
    Humidity(Resolution),
    Both { temperature: Resolution, humidity: Resolution },
}
impl Acquisition {
    /// Configuration register MSB for this acquisition, without the heater bit.
    ///
    /// Fails if either resolution is not supported by its sensor.
    pub(crate) fn config_bits(self) -> Option<u8> {
        match self {
            Self::Temperature(res) => res.temperature_bits(),
            Self::Humidity(res) => res.humidity_bits(),
            Self::Both { temperature, humidity } => {
                Some(CONFIG_MODE_BOTH | temperature.temperature_bits()? | humidity.humidity_bits()?)
            }
        }
    }

    /// Register whose write starts the conversion
    pub(crate) fn trigger_register(self) -> u8 {
        match self {
            Self::Humidity(_) => REG_HUMIDITY,
            Self::Temperature(_) | Self::Both { .. } => REG_TEMPERATURE,
        }
    }

    pub(crate) fn delay_ms(self) -> u32 {
        match self {
            Self::Temperature(_) => TEMPERATURE_DELAY_MS,
            Self::Humidity(_) => HUMIDITY_DELAY_MS,
            Self::Both { .. } => TEMP_AND_HUMID_DELAY_MS,
        }
    }
}

/// Bytes written to the configuration register for the given MSB
pub(crate) const fn config_write(msb: u8, heater: bool) -> [u8; 3] {
    let msb = if heater { msb | CONFIG_HEATER_ON } else { msb };
    [REG_CONFIG, msb, 0x00]
}

/// Assemble the 40-bit serial number from the three ID registers
pub(crate) fn assemble_serial(id1: [u8; 2], id2: [u8; 2], id3: [u8; 2]) -> u64 {
    (id1[0] as u64) << 32 | (id1[1] as u64) << 24 | (id2[0] as u64) << 16 | (id2[1] as u64) << 8 | id3[0] as u64
}

/// Convert a raw temperature word to degrees centigrade
pub fn raw_temp_to_centigrade(raw: u16) -> f32 {
    (raw as f32 / 65536.0) * 165.0 - 40.0
}

/// Convert a raw temperature word to degrees fahrenheit
pub fn raw_temp_to_fahrenheit(raw: u16) -> f32 {
    raw_temp_to_centigrade(raw) * 1.8 + 32.0
}

/// Convert a raw humidity word to relative humidity in percent
pub fn raw_rel_humid_to_percent(raw: u16) -> f32 {
    (raw as f32 / 65536.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn temperature_conversion_limits() {
        assert!(approx_eq!(f32, raw_temp_to_centigrade(0x0000), -40.0, epsilon = 0.001));
        assert!(approx_eq!(f32, raw_temp_to_centigrade(0xFFFF), 124.997, epsilon = 0.001));
        assert!(raw_temp_to_centigrade(0xFFFF) < 125.0);
        assert!(approx_eq!(f32, raw_temp_to_fahrenheit(0x0000), -40.0, epsilon = 0.001));
    }

    #[test]
    fn humidity_conversion_limits() {
        assert!(approx_eq!(f32, raw_rel_humid_to_percent(0x0000), 0.0, epsilon = 0.001));
        assert!(approx_eq!(f32, raw_rel_humid_to_percent(0xFFFF), 99.998, epsilon = 0.001));
        assert!(approx_eq!(f32, raw_rel_humid_to_percent(0x8000), 50.0, epsilon = 0.001));
    }

    #[test]
    fn resolution_from_bit_width() {
        assert_eq!(Resolution::try_from(8), Ok(Resolution::Bits8));
        assert_eq!(Resolution::try_from(11), Ok(Resolution::Bits11));
        assert_eq!(Resolution::try_from(14), Ok(Resolution::Bits14));
        assert_eq!(Resolution::try_from(12), Err(InvalidResolution(12)));
        assert_eq!(Resolution::try_from(3), Err(InvalidResolution(3)));
    }

    #[test]
    fn acquisition_config_bits() {
        assert_eq!(Acquisition::Temperature(Resolution::Bits14).config_bits(), Some(0b0000_0000));
        assert_eq!(Acquisition::Temperature(Resolution::Bits11).config_bits(), Some(0b0000_0100));
        assert_eq!(Acquisition::Temperature(Resolution::Bits8).config_bits(), None);
        assert_eq!(Acquisition::Humidity(Resolution::Bits8).config_bits(), Some(0b0000_0010));
        assert_eq!(Acquisition::Humidity(Resolution::Bits11).config_bits(), Some(0b0000_0001));
        assert_eq!(Acquisition::Humidity(Resolution::Bits14).config_bits(), Some(0b0000_0000));
        assert_eq!(
            Acquisition::Both { temperature: Resolution::Bits11, humidity: Resolution::Bits8 }.config_bits(),
            Some(0b0001_0110)
        );
        assert_eq!(
            Acquisition::Both { temperature: Resolution::Bits8, humidity: Resolution::Bits14 }.config_bits(),
            None
        );
    }

    #[test]
    fn heater_bit_is_ored_into_config_write() {
        assert_eq!(config_write(0b0000_0100, false), [0x02, 0b0000_0100, 0x00]);
        assert_eq!(config_write(0b0000_0100, true), [0x02, 0b0010_0100, 0x00]);
    }

    #[test]
    fn serial_is_big_endian_over_five_bytes() {
        let serial = assemble_serial([0x12, 0x34], [0x56, 0x78], [0x9A, 0xFF]);
        assert_eq!(serial, 0x12_3456_789A);
    }
}
