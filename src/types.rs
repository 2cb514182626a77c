use crate::hw_def::*;

use core::fmt;

#[cfg(feature="defmt")]
use defmt::Format;

/// HDC1008 device driver, blocking flavour
#[cfg(feature = "blocking")]
#[derive(Debug)]
pub struct Hdc1008<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) i2c_addr: I2cAddr,
    pub(crate) heater: bool,
}

/// HDC1008 device driver, async flavour
#[cfg(feature = "async")]
#[derive(Debug)]
pub struct Hdc1008Async<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) i2c_addr: I2cAddr,
    pub(crate) heater: bool,
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug, Eq, PartialEq)]
pub enum Error<E> {
    /// I²C communication error
    I2c(E),
    /// Invalid input data provided, e.g. an unsupported resolution
    InvalidInputData,
}
impl<E> From<InvalidResolution> for Error<E> {
    fn from(_: InvalidResolution) -> Self {
        Error::InvalidInputData
    }
}
impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {e:?}"),
            Error::InvalidInputData => write!(f, "invalid input data"),
        }
    }
}
impl<E: fmt::Debug> core::error::Error for Error<E> {}

/// Raw (still in u16 format) temperature and relative humidity from the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawTempAndRelHumid {
    /// unprocessed temperature
    pub temperature: u16,
    /// unprocessed relative humidity
    pub humidity: u16,
}
impl RawTempAndRelHumid {
    /// Get temperature in Fahrenheit
    pub fn fahrenheit(&self) -> f32 {
        raw_temp_to_fahrenheit(self.temperature)
    }
    /// Get temperature in Centigrade
    pub fn centigrade(&self) -> f32 {
        raw_temp_to_centigrade(self.temperature)
    }
    /// Get relative humidity in percent
    pub fn humidity_percent(&self) -> f32 {
        raw_rel_humid_to_percent(self.humidity)
    }
}

/// Temp and relative humidity from the device after conversion
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TempAndRelHumid {
    /// degrees centigrade
    pub centigrade: f32,
    /// degrees fahrenheit
    pub fahrenheit: f32,
    /// relative humidity in percent
    pub humidity_percent: f32,
}
impl From<&RawTempAndRelHumid> for TempAndRelHumid {
    fn from(raw: &RawTempAndRelHumid) -> Self {
        Self {
            centigrade: raw.centigrade(),
            fahrenheit: raw.fahrenheit(),
            humidity_percent: raw.humidity_percent(),
        }
    }
}

/// Decoded configuration register
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConfigRegister {
    raw: u16,
    /// software reset in progress
    pub reset: bool,
    /// heater is enabled
    pub heater_enabled: bool,
    /// a temperature trigger acquires both temperature and humidity
    pub acquire_both: bool,
    /// supply voltage is below the battery threshold
    pub battery_low: bool,
    /// temperature resolution
    pub temperature_resolution: Resolution,
    /// humidity resolution
    pub humidity_resolution: Resolution,
}
impl From<u16> for ConfigRegister {
    fn from(raw: u16) -> Self {
        let msb = (raw >> 8) as u8;
        Self {
            raw,
            reset: msb & CONFIG_SOFT_RESET != 0,
            heater_enabled: msb & CONFIG_HEATER_ON != 0,
            acquire_both: msb & CONFIG_MODE_BOTH != 0,
            battery_low: msb & CONFIG_BATTERY_LOW != 0,
            temperature_resolution: if msb & CONFIG_TEMP_11BIT != 0 {
                Resolution::Bits11
            } else {
                Resolution::Bits14
            },
            // 0b11 is reserved by the device; treat the 8-bit flag as authoritative
            humidity_resolution: if msb & CONFIG_HUMID_8BIT != 0 {
                Resolution::Bits8
            } else if msb & CONFIG_HUMID_11BIT != 0 {
                Resolution::Bits11
            } else {
                Resolution::Bits14
            },
        }
    }
}
impl ConfigRegister {
    /// Get the raw register value
    pub fn raw(&self) -> u16 {
        self.raw
    }
}
impl fmt::Display for ConfigRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigRegister {{ 0x{:04x}; ", self.raw)?;
        if self.reset {
            write!(f, "reset ")?;
        }
        if self.heater_enabled {
            write!(f, "heater_enabled ")?;
        }
        if self.acquire_both {
            write!(f, "acquire_both ")?;
        }
        if self.battery_low {
            write!(f, "battery_low ")?;
        }
        write!(
            f,
            "temperature_{}bit humidity_{}bit }}",
            self.temperature_resolution.bits(),
            self.humidity_resolution.bits()
        )
    }
}

/// Serial number of the device (40 significant bits)
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SerialNumber(pub u64);
impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:010X}", self.0)
    }
}
impl From<SerialNumber> for u64 {
    fn from(serial: SerialNumber) -> u64 {
        serial.0
    }
}

/// Manufacturer ID of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ManufacturerId {
    /// Texas Instruments
    TexasInstruments,
    /// Other
    Other(u16),
}
impl From<u16> for ManufacturerId {
    fn from(raw: u16) -> Self {
        match raw {
            MANUFACTURER_ID_TEXAS_INSTRUMENTS => ManufacturerId::TexasInstruments,
            _ => ManufacturerId::Other(raw),
        }
    }
}
impl From<ManufacturerId> for u16 {
    fn from(id: ManufacturerId) -> u16 {
        match id {
            ManufacturerId::TexasInstruments => MANUFACTURER_ID_TEXAS_INSTRUMENTS,
            ManufacturerId::Other(id) => id,
        }
    }
}
impl fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mid_u16: u16 = (*self).into();
        match self {
            ManufacturerId::TexasInstruments => write!(f, "Texas Instruments (0x{mid_u16:04X})"),
            ManufacturerId::Other(_) => write!(f, "Unknown (0x{mid_u16:04X})"),
        }
    }
}

/// Device ID of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeviceId {
    /// HDC1008
    Hdc1008,
    /// Other
    Other(u16),
}
impl From<u16> for DeviceId {
    fn from(raw: u16) -> Self {
        match raw {
            DEVICE_ID_HDC1008 => DeviceId::Hdc1008,
            _ => DeviceId::Other(raw),
        }
    }
}
impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceId::Hdc1008 => write!(f, "HDC1008 (0x{DEVICE_ID_HDC1008:04X})"),
            DeviceId::Other(id) => write!(f, "Unknown (0x{id:04X})"),
        }
    }
}
