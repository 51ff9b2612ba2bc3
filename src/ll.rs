//! Low-level register map and command-bit register access for the TCS34725

use embedded_hal::i2c::I2c;

use crate::Error;

/// Default 7-bit I2C address of the TCS34725
pub const I2C_ADDRESS: u8 = 0x29;

/// Set on every register address sent to the chip
pub const COMMAND_BIT: u8 = 0x80;

/// Special-function command that clears the ALS interrupt latch
pub const CLEAR_INTERRUPT_COMMAND: u8 = 0xE6;

/// Register addresses, before the command bit is applied
pub mod regs {
    /// Power, ALS and interrupt enables
    pub const ENABLE: u8 = 0x00;
    /// RGBC integration time
    pub const ATIME: u8 = 0x01;
    /// Clear channel low interrupt threshold (16-bit)
    pub const AILT: u8 = 0x04;
    /// Clear channel high interrupt threshold (16-bit)
    pub const AIHT: u8 = 0x06;
    /// Interrupt persistence filter
    pub const APERS: u8 = 0x0C;
    /// Gain control
    pub const CONTROL: u8 = 0x0F;
    /// Device identification
    pub const ID: u8 = 0x12;
    /// Device status
    pub const STATUS: u8 = 0x13;
    /// Clear channel data (16-bit)
    pub const CDATA: u8 = 0x14;
    /// Red channel data (16-bit)
    pub const RDATA: u8 = 0x16;
    /// Green channel data (16-bit)
    pub const GDATA: u8 = 0x18;
    /// Blue channel data (16-bit)
    pub const BDATA: u8 = 0x1A;
}

/// ENABLE register: power on
pub const ENABLE_PON: u8 = 0x01;
/// ENABLE register: RGBC enable
pub const ENABLE_AEN: u8 = 0x02;
/// ENABLE register: RGBC interrupt enable
pub const ENABLE_AIEN: u8 = 0x10;

/// STATUS register: RGBC cycle completed
pub const STATUS_AVALID: u8 = 0x01;
/// STATUS register: RGBC clear channel interrupt
pub const STATUS_AINT: u8 = 0x10;

/// APERS register: persistence filter field
pub const APERS_MASK: u8 = 0x0F;
/// CONTROL register: analog gain field
pub const CONTROL_AGAIN_MASK: u8 = 0x03;

/// Register access over an I2C bus using the command-bit convention.
///
/// 16-bit registers are little-endian: the low byte sits at the lower address.
#[derive(Debug)]
pub struct RegisterBus<I2C> {
    /// The I2C interface
    pub i2c: I2C,
    /// 7-bit device address
    pub address: u8,
}

impl<I2C> RegisterBus<I2C> {
    /// Wrap a bus for the device at `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterBus<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Read an 8-bit register
    pub fn read_u8(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut buffer = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register | COMMAND_BIT], &mut buffer)
            .map_err(Error::I2c)?;
        Ok(buffer[0])
    }

    /// Write an 8-bit register
    pub fn write_u8(&mut self, register: u8, value: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[register | COMMAND_BIT, value])
            .map_err(Error::I2c)
    }

    /// Read a little-endian 16-bit register pair
    pub fn read_u16(&mut self, register: u8) -> Result<u16, Error<E>> {
        let mut buffer = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register | COMMAND_BIT], &mut buffer)
            .map_err(Error::I2c)?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Write a little-endian 16-bit register pair
    pub fn write_u16(&mut self, register: u8, value: u16) -> Result<(), Error<E>> {
        let [low, high] = value.to_le_bytes();
        self.i2c
            .write(self.address, &[register | COMMAND_BIT, low, high])
            .map_err(Error::I2c)
    }

    /// Send bytes as-is, without a register address
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<(), Error<E>> {
        self.i2c.write(self.address, bytes).map_err(Error::I2c)
    }
}

#[cfg(feature = "async")]
impl<I2C, E> RegisterBus<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    /// Read an 8-bit register (async version)
    pub async fn read_u8_async(&mut self, register: u8) -> Result<u8, Error<E>> {
        let mut buffer = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register | COMMAND_BIT], &mut buffer)
            .await
            .map_err(Error::I2c)?;
        Ok(buffer[0])
    }

    /// Write an 8-bit register (async version)
    pub async fn write_u8_async(&mut self, register: u8, value: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[register | COMMAND_BIT, value])
            .await
            .map_err(Error::I2c)
    }

    /// Read a little-endian 16-bit register pair (async version)
    pub async fn read_u16_async(&mut self, register: u8) -> Result<u16, Error<E>> {
        let mut buffer = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register | COMMAND_BIT], &mut buffer)
            .await
            .map_err(Error::I2c)?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Write a little-endian 16-bit register pair (async version)
    pub async fn write_u16_async(&mut self, register: u8, value: u16) -> Result<(), Error<E>> {
        let [low, high] = value.to_le_bytes();
        self.i2c
            .write(self.address, &[register | COMMAND_BIT, low, high])
            .await
            .map_err(Error::I2c)
    }

    /// Send bytes as-is, without a register address (async version)
    pub async fn write_raw_async(&mut self, bytes: &[u8]) -> Result<(), Error<E>> {
        self.i2c.write(self.address, bytes).await.map_err(Error::I2c)
    }
}
