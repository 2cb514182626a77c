//! This is a platform-agnostic Rust driver for the HDC1008 low-power humidity and temperature
//! digital sensor using the [`embedded-hal`] or [`embedded-hal-async`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//! [`embedded-hal-async`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal-async
//!
//! This driver allows you to:
//! - Read the temperature at 11 or 14 bit resolution.
//! - Read the relative humidity at 8, 11 or 14 bit resolution.
//! - Read temperature and humidity with a single trigger.
//! - Enable/disable the heater for subsequent measurements.
//! - Check the battery (supply voltage) status.
//! - Read and decode the configuration register.
//! - Trigger a software reset.
//! - Read the manufacturer ID and device ID.
//! - Read the device serial number.
//! - blocking API support.
//! - async API support.
//!
//! Every measurement writes the configuration register, triggers a conversion, waits the
//! conversion's fixed settling delay and then reads the result.  The device has no data-ready
//! signal that the driver polls, and no operation is retried: a bus error is returned to the
//! caller unchanged.
//!
//! ## Features
//!
//! - `async`: Enables async API ([`Hdc1008Async`]).
//! - `blocking`: Enables blocking API ([`Hdc1008`]).
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## Supported devices: HDC1008
//!
//! Datasheet: [HDC1008](https://www.ti.com/lit/ds/symlink/hdc1008.pdf)
//!
//! To use this driver, import this crate and an `embedded_hal` or `embedded_hal_async`
//! implementation, then instantiate the device.
//!
//! ## Blocking Example:
//!
//! ```ignore
//! use hdc1008::{Hdc1008, I2cAddr, Resolution};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal::i2c::I2c instance */;
//! let delay = /* embedded_hal::delay::DelayNs instance */;
//!
//! let mut hdc1008 = Hdc1008::new(i2c, delay, I2cAddr::Addr00);
//! hdc1008.reset().unwrap();
//! println!("serial number: {}", hdc1008.read_serial_number().unwrap());
//!
//! let datum = hdc1008
//!     .read_temperature_and_humidity(Resolution::Bits14, Resolution::Bits14)
//!     .unwrap();
//! println!("{:0.1} °C, {:0.1} %RH", datum.centigrade, datum.humidity_percent);
//!
//! if hdc1008.read_battery_low().unwrap() {
//!     println!("supply voltage is low");
//! }
//! ```
//!
//! ## Async Example:
//!
//! ```ignore
//! use hdc1008::{Hdc1008Async, I2cAddr, Resolution};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal_async::i2c::I2c instance */;
//! let delay = /* embedded_hal_async::delay::DelayNs instance */;
//!
//! let mut hdc1008 = Hdc1008Async::new(i2c, delay, I2cAddr::Addr00);
//! hdc1008.set_heater(true);
//! let centigrade = hdc1008.read_temperature(Resolution::Bits11).await.unwrap();
//! let humidity = hdc1008.read_humidity(Resolution::Bits8).await.unwrap();
//! println!("{centigrade:0.1} °C, {humidity:0.1} %RH");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![no_std]

#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("At least one of \"async\" and \"blocking\" features must be enabled");

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

#[macro_use]
mod fmt;

mod device_impl;
mod hw_def;
mod types;

pub use crate::{hw_def::*, types::*};
