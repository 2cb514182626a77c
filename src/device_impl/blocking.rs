use crate::hw_def::*;
use crate::types::*;

use embedded_hal::{delay::DelayNs, i2c::I2c};

impl<I2C, Delay, E> Hdc1008<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error<E>> {
        self.i2c.write(self.i2c_addr.as_u8(), bytes).map_err(Error::I2c)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c.read(self.i2c_addr.as_u8(), buf).map_err(Error::I2c)
    }

    /// Point the register pointer at `reg` and read back one word
    fn read_register(&mut self, reg: u8) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.write(&[reg])?;
        self.read(&mut buf)?;
        trace!("hdc1008::read_register(): reg={:#x} value={:#x}", reg, u16::from_be_bytes(buf));
        Ok(u16::from_be_bytes(buf))
    }

    /// Configure, trigger, wait out the conversion and read the result into `buf`
    fn acquire(&mut self, acquisition: Acquisition, buf: &mut [u8]) -> Result<(), Error<E>> {
        let Some(bits) = acquisition.config_bits() else {
            warn!("hdc1008::acquire(): unsupported resolution");
            return Err(Error::InvalidInputData);
        };
        let config = config_write(bits, self.heater);
        trace!("hdc1008::acquire(): config={:#x}", config[1]);
        self.write(&config)?;
        self.write(&[acquisition.trigger_register()])?;
        self.delay.delay_ms(acquisition.delay_ms());
        self.read(buf)
    }

    /// Software reset; returns once the device is ready for new commands
    pub fn reset(&mut self) -> Result<(), Error<E>> {
        debug!("hdc1008::reset()");
        self.write(&[REG_CONFIG, CONFIG_SOFT_RESET, 0x00])?;
        self.delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    /// Trigger a temperature conversion and return the raw word
    pub fn read_raw_temperature(&mut self, resolution: Resolution) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.acquire(Acquisition::Temperature(resolution), &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Temperature in degrees centigrade.  `Bits8` is rejected with [`Error::InvalidInputData`].
    pub fn read_temperature(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        Ok(raw_temp_to_centigrade(self.read_raw_temperature(resolution)?))
    }

    /// Trigger a humidity conversion and return the raw word
    pub fn read_raw_humidity(&mut self, resolution: Resolution) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.acquire(Acquisition::Humidity(resolution), &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Relative humidity in percent
    pub fn read_humidity(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        Ok(raw_rel_humid_to_percent(self.read_raw_humidity(resolution)?))
    }

    /// Acquire both sensors with a single trigger and return the raw words
    pub fn read_raw_temperature_and_humidity(
        &mut self,
        temperature: Resolution,
        humidity: Resolution,
    ) -> Result<RawTempAndRelHumid, Error<E>> {
        let mut buf = [0u8; 4];
        self.acquire(Acquisition::Both { temperature, humidity }, &mut buf)?;
        Ok(RawTempAndRelHumid {
            temperature: u16::from_be_bytes([buf[0], buf[1]]),
            humidity: u16::from_be_bytes([buf[2], buf[3]]),
        })
    }

    /// Acquire both sensors with a single trigger.
    ///
    /// Gives the same values as separate [`Self::read_temperature`] and [`Self::read_humidity`]
    /// calls, with one configuration write and one settling delay less.
    pub fn read_temperature_and_humidity(
        &mut self,
        temperature: Resolution,
        humidity: Resolution,
    ) -> Result<TempAndRelHumid, Error<E>> {
        let raw = self.read_raw_temperature_and_humidity(temperature, humidity)?;
        Ok(TempAndRelHumid::from(&raw))
    }

    /// Read and decode the configuration register
    pub fn read_config(&mut self) -> Result<ConfigRegister, Error<E>> {
        Ok(ConfigRegister::from(self.read_register(REG_CONFIG)?))
    }

    /// Whether the supply voltage is below the battery threshold.
    ///
    /// The status bit is only refreshed by a conversion, so this runs a 14-bit temperature
    /// conversion and discards its result first.
    pub fn read_battery_low(&mut self) -> Result<bool, Error<E>> {
        self.read_raw_temperature(Resolution::Bits14)?;
        Ok(self.read_config()?.battery_low)
    }

    /// Read the factory-programmed 40-bit serial number
    pub fn read_serial_number(&mut self) -> Result<SerialNumber, Error<E>> {
        let id1 = self.read_register(REG_SERIAL_ID_1)?.to_be_bytes();
        let id2 = self.read_register(REG_SERIAL_ID_2)?.to_be_bytes();
        let id3 = self.read_register(REG_SERIAL_ID_3)?.to_be_bytes();
        let serial = SerialNumber(assemble_serial(id1, id2, id3));
        debug!("hdc1008::read_serial_number(): {:#x}", serial.0);
        Ok(serial)
    }

    /// Read the manufacturer ID
    pub fn read_manufacturer_id(&mut self) -> Result<ManufacturerId, Error<E>> {
        Ok(ManufacturerId::from(self.read_register(REG_MANUFACTURER_ID)?))
    }

    /// Read the device ID
    pub fn read_device_id(&mut self) -> Result<DeviceId, Error<E>> {
        Ok(DeviceId::from(self.read_register(REG_DEVICE_ID)?))
    }
}
