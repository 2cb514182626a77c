#[cfg(feature = "async")]
mod asynch;
#[cfg(feature = "blocking")]
mod blocking;

use crate::hw_def::I2cAddr;

// Bus-independent state handling, identical for both driver flavours.
macro_rules! impl_common {
    ($driver:ident) => {
        impl<I2C, Delay> crate::types::$driver<I2C, Delay> {
            /// Create a new driver instance with the heater disabled.  No bus traffic occurs.
            pub fn new(i2c: I2C, delay: Delay, i2c_addr: I2cAddr) -> Self {
                Self { i2c, delay, i2c_addr, heater: false }
            }

            /// Builder-style variant of [`Self::set_heater`]
            pub fn with_heater(mut self, enabled: bool) -> Self {
                self.set_heater(enabled);
                self
            }

            /// Enable or disable the heater for all following measurements.
            ///
            /// Only the next configuration write carries the change; the device is not accessed.
            pub fn set_heater(&mut self, enabled: bool) {
                debug!("hdc1008::set_heater(): {}", enabled);
                self.heater = enabled;
            }

            /// Whether the heater is requested for measurements
            pub fn heater_enabled(&self) -> bool {
                self.heater
            }

            /// Bus address in use
            pub fn i2c_addr(&self) -> I2cAddr {
                self.i2c_addr
            }

            /// Release the bus and delay
            pub fn destroy(self) -> (I2C, Delay) {
                (self.i2c, self.delay)
            }
        }
    };
}

#[cfg(feature = "async")]
impl_common!(Hdc1008Async);
#[cfg(feature = "blocking")]
impl_common!(Hdc1008);
