use crate::hw_def::*;
use crate::types::*;

use embedded_hal_async::{delay::DelayNs, i2c::I2c};

impl<I2C, Delay, E> Hdc1008Async<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    async fn write(&mut self, bytes: &[u8]) -> Result<(), Error<E>> {
        self.i2c.write(self.i2c_addr.as_u8(), bytes).await.map_err(Error::I2c)
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c.read(self.i2c_addr.as_u8(), buf).await.map_err(Error::I2c)
    }

    async fn read_register(&mut self, reg: u8) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.write(&[reg]).await?;
        self.read(&mut buf).await?;
        let value = u16::from_be_bytes(buf);
        trace!("hdc1008::read_register(): reg={:#x} value={:#x}", reg, value);
        Ok(value)
    }

    // The conversion cannot be interrupted once triggered; dropping the future during the
    // delay only abandons the read.
    async fn acquire(&mut self, acquisition: Acquisition, buf: &mut [u8]) -> Result<(), Error<E>> {
        let Some(bits) = acquisition.config_bits() else {
            warn!("hdc1008::acquire(): unsupported resolution");
            return Err(Error::InvalidInputData);
        };
        let config = config_write(bits, self.heater);
        trace!("hdc1008::acquire(): config={:#x}", config[1]);
        self.write(&config).await?;
        self.write(&[acquisition.trigger_register()]).await?;
        self.delay.delay_ms(acquisition.delay_ms()).await;
        self.read(buf).await
    }

    /// Software reset; returns once the device is ready for new commands
    pub async fn reset(&mut self) -> Result<(), Error<E>> {
        debug!("hdc1008::reset()");
        self.write(&[REG_CONFIG, CONFIG_SOFT_RESET, 0x00]).await?;
        self.delay.delay_ms(RESET_DELAY_MS).await;
        Ok(())
    }

    /// Trigger a temperature conversion and return the raw word
    pub async fn read_raw_temperature(&mut self, resolution: Resolution) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.acquire(Acquisition::Temperature(resolution), &mut buf).await?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Temperature in degrees centigrade.  `Bits8` is rejected with [`Error::InvalidInputData`].
    pub async fn read_temperature(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        Ok(raw_temp_to_centigrade(self.read_raw_temperature(resolution).await?))
    }

    /// Trigger a humidity conversion and return the raw word
    pub async fn read_raw_humidity(&mut self, resolution: Resolution) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.acquire(Acquisition::Humidity(resolution), &mut buf).await?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Relative humidity in percent
    pub async fn read_humidity(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        Ok(raw_rel_humid_to_percent(self.read_raw_humidity(resolution).await?))
    }

    /// Acquire both sensors with a single trigger and return the raw words
    pub async fn read_raw_temperature_and_humidity(
        &mut self,
        temperature: Resolution,
        humidity: Resolution,
    ) -> Result<RawTempAndRelHumid, Error<E>> {
        let mut buf = [0u8; 4];
        self.acquire(Acquisition::Both { temperature, humidity }, &mut buf).await?;
        Ok(RawTempAndRelHumid {
            temperature: u16::from_be_bytes([buf[0], buf[1]]),
            humidity: u16::from_be_bytes([buf[2], buf[3]]),
        })
    }

    /// Acquire both sensors with a single trigger, saving one configuration write and one
    /// settling delay over separate reads
    pub async fn read_temperature_and_humidity(
        &mut self,
        temperature: Resolution,
        humidity: Resolution,
    ) -> Result<TempAndRelHumid, Error<E>> {
        let raw = self.read_raw_temperature_and_humidity(temperature, humidity).await?;
        Ok(TempAndRelHumid::from(&raw))
    }

    /// Read and decode the configuration register
    pub async fn read_config(&mut self) -> Result<ConfigRegister, Error<E>> {
        Ok(ConfigRegister::from(self.read_register(REG_CONFIG).await?))
    }

    /// Whether the supply voltage is below the battery threshold.  Runs a throwaway
    /// temperature conversion first to refresh the status bit.
    pub async fn read_battery_low(&mut self) -> Result<bool, Error<E>> {
        self.read_raw_temperature(Resolution::Bits14).await?;
        Ok(self.read_config().await?.battery_low)
    }

    /// Read the factory-programmed 40-bit serial number
    pub async fn read_serial_number(&mut self) -> Result<SerialNumber, Error<E>> {
        let id1 = self.read_register(REG_SERIAL_ID_1).await?.to_be_bytes();
        let id2 = self.read_register(REG_SERIAL_ID_2).await?.to_be_bytes();
        let id3 = self.read_register(REG_SERIAL_ID_3).await?.to_be_bytes();
        let serial = SerialNumber(assemble_serial(id1, id2, id3));
        debug!("hdc1008::read_serial_number(): {:#x}", serial.0);
        Ok(serial)
    }

    /// Read the manufacturer ID
    pub async fn read_manufacturer_id(&mut self) -> Result<ManufacturerId, Error<E>> {
        Ok(ManufacturerId::from(self.read_register(REG_MANUFACTURER_ID).await?))
    }

    /// Read the device ID
    pub async fn read_device_id(&mut self) -> Result<DeviceId, Error<E>> {
        Ok(DeviceId::from(self.read_register(REG_DEVICE_ID).await?))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::device_impl::recorder::{Event, Log, RecordingDelay};
    use core::cell::RefCell;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
    use float_cmp::approx_eq;
    use futures::executor::block_on;
    use std::{rc::Rc, vec, vec::Vec};

    const ADDR: u8 = 0x40;

    fn device(expectations: &[Transaction]) -> (Hdc1008Async<I2cMock, RecordingDelay>, I2cMock, Log) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let i2c = I2cMock::new(expectations);
        (Hdc1008Async::new(i2c.clone(), RecordingDelay::new(&log), I2cAddr::Addr00), i2c, log)
    }

    #[test]
    fn combined_read_with_heater() {
        let (hdc, mut i2c, log) = device(&[
            Transaction::write(ADDR, vec![0x02, 0b0011_0101, 0x00]),
            Transaction::write(ADDR, vec![0x00]),
            Transaction::read(ADDR, vec![0x66, 0x66, 0x80, 0x00]),
        ]);
        let mut hdc = hdc.with_heater(true);
        let datum = block_on(hdc.read_temperature_and_humidity(Resolution::Bits11, Resolution::Bits11)).unwrap();
        assert!(approx_eq!(f32, datum.centigrade, 26.0, epsilon = 0.01));
        assert!(approx_eq!(f32, datum.humidity_percent, 50.0, epsilon = 0.001));
        assert_eq!(*log.borrow(), vec![Event::DelayNs(20_000_000)]);
        i2c.done();
    }

    #[test]
    fn humidity_waits_its_own_delay() {
        let (mut hdc, mut i2c, log) = device(&[
            Transaction::write(ADDR, vec![0x02, 0x00, 0x00]),
            Transaction::write(ADDR, vec![0x01]),
            Transaction::read(ADDR, vec![0x00, 0x00]),
        ]);
        let percent = block_on(hdc.read_humidity(Resolution::Bits14)).unwrap();
        assert!(approx_eq!(f32, percent, 0.0, epsilon = 0.001));
        assert_eq!(*log.borrow(), vec![Event::DelayNs(13_000_000)]);
        i2c.done();
    }

    #[test]
    fn unsupported_resolution_touches_no_bus() {
        let (mut hdc, mut i2c, log) = device(&[]);
        assert_eq!(block_on(hdc.read_raw_temperature(Resolution::Bits8)), Err(Error::InvalidInputData));
        assert!(log.borrow().is_empty());
        i2c.done();
    }

    #[test]
    fn reset_and_serial_number() {
        let (mut hdc, mut i2c, log) = device(&[
            Transaction::write(ADDR, vec![0x02, 0x80, 0x00]),
            Transaction::write(ADDR, vec![0xFB]),
            Transaction::read(ADDR, vec![0xAA, 0xBB]),
            Transaction::write(ADDR, vec![0xFC]),
            Transaction::read(ADDR, vec![0xCC, 0xDD]),
            Transaction::write(ADDR, vec![0xFD]),
            Transaction::read(ADDR, vec![0xEE, 0x00]),
        ]);
        block_on(hdc.reset()).unwrap();
        let serial = block_on(hdc.read_serial_number()).unwrap();
        assert_eq!(serial, SerialNumber(0xAA_BBCC_DDEE));
        assert_eq!(*log.borrow(), vec![Event::DelayNs(20_000_000)]);
        i2c.done();
    }

    #[test]
    fn battery_low_and_config() {
        let (mut hdc, mut i2c, _log) = device(&[
            Transaction::write(ADDR, vec![0x02, 0x00, 0x00]),
            Transaction::write(ADDR, vec![0x00]),
            Transaction::read(ADDR, vec![0x00, 0x00]),
            Transaction::write(ADDR, vec![0x02]),
            Transaction::read(ADDR, vec![0b0000_1000, 0x00]),
        ]);
        assert!(block_on(hdc.read_battery_low()).unwrap());
        i2c.done();
    }

    #[test]
    fn bus_error_propagates() {
        let (mut hdc, mut i2c, _log) = device(&[
            Transaction::write(ADDR, vec![0xFE]),
            Transaction::read(ADDR, vec![0x00, 0x00]).with_error(ErrorKind::Other),
        ]);
        assert_eq!(block_on(hdc.read_manufacturer_id()), Err(Error::I2c(ErrorKind::Other)));
        i2c.done();
    }
}
