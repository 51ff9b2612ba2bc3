//! # TCS34725 Digital RGBC Color Sensor Driver
//!
//! This is a platform-agnostic Rust driver for the TCS34725 RGB and clear light sensor,
//! built using the [`embedded-hal`] traits for I2C communication.
//!
//! The TCS34725 provides:
//! - Red, Green, Blue and Clear (unfiltered) 16-bit channels
//! - Programmable gain (1x, 4x, 16x, 60x)
//! - Programmable integration time (2.4ms to 614.4ms in 2.4ms steps)
//! - Clear channel interrupt thresholds with a persistence filter
//! - I2C interface (address 0x29)
//!
//! ## Features
//!
//! - **Blocking acquisition** gated on the data-valid status bit, with an optional timeout
//! - **Async/await support** with feature gating (optional)
//! - **Color temperature and lux** estimation
//! - **Gamma-corrected display color** and hex formatting
//! - **Coarse color classification** (red, green, blue, dark, white, yellow)
//! - **Logging** through `log` or `defmt` (optional)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tcs34725::{ColorLabel, Tcs34725, DEFAULT_LIMIT};
//!
//! # fn main() {
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! # let delay = embedded_hal_mock::eh1::delay::NoopDelay::new();
//! // Probe the sensor; a wrong device id is reported as an error
//! let mut sensor = Tcs34725::new(i2c, delay).unwrap();
//!
//! // Configure measurement settings
//! sensor.set_gain(4).unwrap();
//! sensor.set_integration_time(50.0).unwrap();
//!
//! // Read raw counts, giving up after one second
//! let sample = sensor.read_raw(Some(1000)).unwrap();
//!
//! // Derive the color temperature, lux and display color
//! let estimate = sample.temperature_and_lux();
//! let color = sample.to_display_color();
//! let is_red = color.classify(DEFAULT_LIMIT) == ColorLabel::Red;
//! # let _ = (estimate, is_red);
//! # }
//! ```
//!
//! ## Async Usage
//!
//! Enable the `async` feature to use async/await patterns:
//!
//! ```toml
//! [dependencies]
//! tcs34725 = { version = "0.1", features = ["async"] }
//! ```
//!
//! ```rust,ignore
//! # #[cfg(feature = "async")]
//! # async fn example() {
//! use tcs34725::Tcs34725;
//!
//! let i2c = /* your async I2C implementation */;
//! let delay = /* your async delay implementation */;
//! let mut sensor = Tcs34725::new_async(i2c, delay).await.unwrap();
//!
//! sensor.set_gain_async(16).await.unwrap();
//! let sample = sensor.read_raw_async(Some(1000)).await.unwrap();
//! # }
//! ```
//!
//! ## Sharing the bus
//!
//! The driver takes the bus by value. Pass `&mut bus` (or a bus-sharing wrapper) to keep
//! ownership elsewhere. Dropping the driver writes nothing to the chip, so the sensor keeps
//! whatever power state it was last left in.
//!
//! [`embedded-hal`]: https://crates.io/crates/embedded-hal

#![no_std]
#![deny(missing_docs)]

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use heapless::String;

mod fmt;

pub mod classify;
pub mod color;
pub mod ll;

pub use classify::{classify, ColorLabel, DEFAULT_LIMIT};
pub use color::{DisplayColor, RawSample, TemperatureLux};
pub use ll::I2C_ADDRESS;

use crate::fmt::{debug, trace, warn};
use crate::ll::{regs, RegisterBus};

/// Device ids reported by the TCS34725 family
pub const VALID_DEVICE_IDS: [u8; 2] = [0x44, 0x10];

/// Shortest integration time in milliseconds (one cycle)
pub const MIN_INTEGRATION_TIME_MS: f64 = 2.4;

/// Longest integration time in milliseconds (256 cycles)
pub const MAX_INTEGRATION_TIME_MS: f64 = 614.4;

/// Length of one integration cycle in milliseconds
const INTEGRATION_CYCLE_MS: f64 = 2.4;

/// Oscillator warm-up after power on, in milliseconds
const POWER_ON_SETTLE_MS: u32 = 3;

/// Persistence filter values, indexed by their APERS register encoding
pub const PERSISTENCE_CYCLES: [u8; 16] = [0, 1, 2, 3, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60];

/// Analog gain settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Gain {
    /// 1x gain
    X1 = 0b00,
    /// 4x gain
    X4 = 0b01,
    /// 16x gain
    X16 = 0b10,
    /// 60x gain
    X60 = 0b11,
}

impl Gain {
    /// Gain multiplier
    pub const fn multiplier(self) -> u8 {
        match self {
            Gain::X1 => 1,
            Gain::X4 => 4,
            Gain::X16 => 16,
            Gain::X60 => 60,
        }
    }

    /// Gain for a multiplier of 1, 4, 16 or 60
    pub const fn from_multiplier(multiplier: u8) -> Option<Self> {
        match multiplier {
            1 => Some(Gain::X1),
            4 => Some(Gain::X4),
            16 => Some(Gain::X16),
            60 => Some(Gain::X60),
            _ => None,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits & ll::CONTROL_AGAIN_MASK {
            0b00 => Gain::X1,
            0b01 => Gain::X4,
            0b10 => Gain::X16,
            _ => Gain::X60,
        }
    }
}

/// Interrupt persistence filter setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Persistence {
    /// Interrupt generation disabled (AIEN clear)
    Disabled,
    /// Number of consecutive out-of-range cycles before the interrupt latches.
    ///
    /// Must be one of [`PERSISTENCE_CYCLES`].
    Cycles(u8),
}

impl Persistence {
    /// APERS register encoding, if the cycle count is supported
    pub fn register_index(self) -> Option<u8> {
        match self {
            Persistence::Disabled => None,
            Persistence::Cycles(cycles) => PERSISTENCE_CYCLES
                .iter()
                .position(|&c| c == cycles)
                .map(|index| index as u8),
        }
    }
}

/// Interrupt threshold configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ThresholdConfig {
    /// Persistence filter, or disabled
    pub persistence: Persistence,
    /// Clear channel low threshold
    pub low: u16,
    /// Clear channel high threshold
    pub high: u16,
}

/// All possible errors in this crate
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
    /// The device id register did not hold a TCS34725 id
    UnexpectedDeviceId {
        /// Found device ID
        found: u8,
    },
    /// Gain multiplier other than 1, 4, 16 or 60
    InvalidGain(u8),
    /// Persistence cycle count not in [`PERSISTENCE_CYCLES`]
    InvalidPersistenceCycles(u8),
    /// The interrupt latch can only be cleared, not set
    InvalidOperation,
    /// Measurement did not become valid in time
    Timeout,
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {e:?}"),
            Error::UnexpectedDeviceId { found } => write!(f, "wrong sensor id {found:#x}"),
            Error::InvalidGain(gain) => write!(f, "gain {gain} is not 1, 4, 16 or 60"),
            Error::InvalidPersistenceCycles(cycles) => {
                write!(f, "invalid persistence cycles {cycles}")
            }
            Error::InvalidOperation => f.write_str("interrupt can only be cleared"),
            Error::Timeout => f.write_str("timed out waiting for a valid measurement"),
        }
    }
}

/// High-level TCS34725 driver
pub struct Tcs34725<I2C, Delay> {
    bus: RegisterBus<I2C>,
    delay: Delay,
    // Last power state written to the chip
    active: bool,
    // Quantized integration time in milliseconds
    integration_time: f64,
}

/// Clamp and quantize an integration time to whole cycles.
///
/// Returns the cycle count (1..=256) and the ATIME register value.
fn integration_cycles(ms: f64) -> (u16, u8) {
    let ms = if ms.is_nan() {
        MIN_INTEGRATION_TIME_MS
    } else {
        ms.clamp(MIN_INTEGRATION_TIME_MS, MAX_INTEGRATION_TIME_MS)
    };
    let cycles = ((ms / INTEGRATION_CYCLE_MS) as u16).clamp(1, 256);
    (cycles, (256 - cycles) as u8)
}

impl<I2C, Delay> Tcs34725<I2C, Delay> {
    fn unprobed(i2c: I2C, delay: Delay, address: u8) -> Self {
        Self {
            bus: RegisterBus::new(i2c, address),
            delay,
            active: false,
            integration_time: MIN_INTEGRATION_TIME_MS,
        }
    }

    /// Whether the sensor was last powered on by this driver
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current quantized integration time in milliseconds
    pub fn integration_time(&self) -> f64 {
        self.integration_time
    }

    /// I2C address the driver talks to
    pub fn address(&self) -> u8 {
        self.bus.address
    }

    /// Destroy the driver and return the I2C interface and delay
    pub fn destroy(self) -> (I2C, Delay) {
        (self.bus.release(), self.delay)
    }

    // Sleep between validity polls: the integration time rounded up
    fn poll_interval_ms(&self) -> u32 {
        (self.integration_time + 0.9) as u32
    }
}

impl<I2C, E, Delay> Tcs34725<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    /// Create a driver at the default address and probe the device id
    pub fn new(i2c: I2C, delay: Delay) -> Result<Self, Error<E>> {
        Self::with_address(i2c, delay, I2C_ADDRESS)
    }

    /// Create a driver at `address` and probe the device id.
    ///
    /// The integration time is reset to its 2.4ms minimum before the probe. The sensor is
    /// left powered down.
    pub fn with_address(i2c: I2C, delay: Delay, address: u8) -> Result<Self, Error<E>> {
        let mut sensor = Self::unprobed(i2c, delay, address);
        sensor.set_integration_time(MIN_INTEGRATION_TIME_MS)?;

        let id = sensor.sensor_id()?;
        if !VALID_DEVICE_IDS.contains(&id) {
            warn!("unexpected TCS34725 id {:#x}", id);
            return Err(Error::UnexpectedDeviceId { found: id });
        }
        debug!("TCS34725 found, id {:#x}", id);

        Ok(sensor)
    }

    /// Read the device id register
    pub fn sensor_id(&mut self) -> Result<u8, Error<E>> {
        self.bus.read_u8(regs::ID)
    }

    /// Power the sensor on and start RGBC integration.
    ///
    /// Does nothing if already active.
    pub fn activate(&mut self) -> Result<(), Error<E>> {
        self.set_active(true)
    }

    /// Stop integration and power the sensor down.
    ///
    /// Does nothing if already inactive. Other enable bits are preserved.
    pub fn deactivate(&mut self) -> Result<(), Error<E>> {
        self.set_active(false)
    }

    /// Drive the power state machine
    pub fn set_active(&mut self, active: bool) -> Result<(), Error<E>> {
        if self.active == active {
            return Ok(());
        }

        let enable = self.bus.read_u8(regs::ENABLE)?;
        if active {
            self.bus.write_u8(regs::ENABLE, enable | ll::ENABLE_PON)?;
            self.delay.delay_ms(POWER_ON_SETTLE_MS);
            self.bus
                .write_u8(regs::ENABLE, enable | ll::ENABLE_PON | ll::ENABLE_AEN)?;
        } else {
            self.bus
                .write_u8(regs::ENABLE, enable & !(ll::ENABLE_PON | ll::ENABLE_AEN))?;
        }

        self.active = active;
        trace!("TCS34725 active: {}", active);
        Ok(())
    }

    /// Set the integration time in milliseconds.
    ///
    /// The value is clamped to 2.4..=614.4 and truncated to whole 2.4ms cycles.
    pub fn set_integration_time(&mut self, ms: f64) -> Result<(), Error<E>> {
        let (cycles, atime) = integration_cycles(ms);
        self.bus.write_u8(regs::ATIME, atime)?;
        self.integration_time = f64::from(cycles) * INTEGRATION_CYCLE_MS;
        debug!("integration time {} cycles, ATIME {}", cycles, atime);
        Ok(())
    }

    /// Set the analog gain multiplier: 1, 4, 16 or 60
    pub fn set_gain(&mut self, multiplier: u8) -> Result<(), Error<E>> {
        let gain = Gain::from_multiplier(multiplier).ok_or(Error::InvalidGain(multiplier))?;
        self.bus.write_u8(regs::CONTROL, gain as u8)?;
        debug!("gain {}x", multiplier);
        Ok(())
    }

    /// Read the analog gain back from the control register
    pub fn gain(&mut self) -> Result<Gain, Error<E>> {
        let control = self.bus.read_u8(regs::CONTROL)?;
        Ok(Gain::from_bits(control))
    }

    /// Read the interrupt thresholds and persistence filter
    pub fn threshold(&mut self) -> Result<ThresholdConfig, Error<E>> {
        let low = self.bus.read_u16(regs::AILT)?;
        let high = self.bus.read_u16(regs::AIHT)?;
        let persistence = if self.bus.read_u8(regs::ENABLE)? & ll::ENABLE_AIEN != 0 {
            let apers = self.bus.read_u8(regs::APERS)? & ll::APERS_MASK;
            Persistence::Cycles(PERSISTENCE_CYCLES[usize::from(apers)])
        } else {
            Persistence::Disabled
        };

        Ok(ThresholdConfig {
            persistence,
            low,
            high,
        })
    }

    /// Update any of the persistence filter, low threshold and high threshold.
    ///
    /// `None` leaves a field untouched. [`Persistence::Disabled`] clears the interrupt
    /// enable bit and leaves the APERS register alone. An unsupported cycle count is
    /// rejected before anything is written.
    pub fn set_threshold(
        &mut self,
        persistence: Option<Persistence>,
        low: Option<u16>,
        high: Option<u16>,
    ) -> Result<(), Error<E>> {
        let apers = match persistence {
            Some(Persistence::Cycles(cycles)) => Some(
                Persistence::Cycles(cycles)
                    .register_index()
                    .ok_or(Error::InvalidPersistenceCycles(cycles))?,
            ),
            _ => None,
        };

        if let Some(low) = low {
            self.bus.write_u16(regs::AILT, low)?;
        }
        if let Some(high) = high {
            self.bus.write_u16(regs::AIHT, high)?;
        }
        if persistence.is_some() {
            let enable = self.bus.read_u8(regs::ENABLE)?;
            match apers {
                Some(index) => {
                    self.bus.write_u8(regs::ENABLE, enable | ll::ENABLE_AIEN)?;
                    self.bus.write_u8(regs::APERS, index)?;
                }
                None => {
                    self.bus.write_u8(regs::ENABLE, enable & !ll::ENABLE_AIEN)?;
                }
            }
            debug!("interrupt persistence {:?}", persistence);
        }

        Ok(())
    }

    /// Check the clear channel interrupt flag in the status register
    pub fn interrupt_status(&mut self) -> Result<bool, Error<E>> {
        Ok(self.bus.read_u8(regs::STATUS)? & ll::STATUS_AINT != 0)
    }

    /// Clear the interrupt latch when `value` is false.
    ///
    /// The latch cannot be set from the host; `true` fails with
    /// [`Error::InvalidOperation`] without touching the bus.
    pub fn set_interrupt(&mut self, value: bool) -> Result<(), Error<E>> {
        if value {
            return Err(Error::InvalidOperation);
        }
        self.bus.write_raw(&[ll::CLEAR_INTERRUPT_COMMAND])?;
        trace!("interrupt cleared");
        Ok(())
    }

    /// Clear the interrupt latch
    pub fn clear_interrupt(&mut self) -> Result<(), Error<E>> {
        self.set_interrupt(false)
    }

    /// Check the data-valid bit in the status register
    pub fn is_data_valid(&mut self) -> Result<bool, Error<E>> {
        Ok(self.bus.read_u8(regs::STATUS)? & ll::STATUS_AVALID != 0)
    }

    /// Take one RGBC sample.
    ///
    /// Powers the sensor up if needed, polls the data-valid bit sleeping about one
    /// integration time between polls, reads red, green, blue and clear, then restores the
    /// previous power state. With `timeout_ms` set, polling stops with [`Error::Timeout`]
    /// once the accumulated sleep reaches it; `None` waits indefinitely.
    pub fn read_raw(&mut self, timeout_ms: Option<u32>) -> Result<RawSample, Error<E>> {
        let was_active = self.active;
        self.activate()?;

        let interval = self.poll_interval_ms();
        let mut waited: u32 = 0;
        while !self.is_data_valid()? {
            if timeout_ms.is_some_and(|timeout| waited >= timeout) {
                warn!("no valid measurement after {} ms", waited);
                self.set_active(was_active)?;
                return Err(Error::Timeout);
            }
            self.delay.delay_ms(interval);
            waited = waited.saturating_add(interval);
        }

        let sample = RawSample {
            red: self.bus.read_u16(regs::RDATA)?,
            green: self.bus.read_u16(regs::GDATA)?,
            blue: self.bus.read_u16(regs::BDATA)?,
            clear: self.bus.read_u16(regs::CDATA)?,
        };

        self.set_active(was_active)?;
        Ok(sample)
    }

    /// Take one sample and estimate color temperature and lux
    pub fn read_temperature_and_lux(
        &mut self,
        timeout_ms: Option<u32>,
    ) -> Result<TemperatureLux, Error<E>> {
        Ok(self.read_raw(timeout_ms)?.temperature_and_lux())
    }

    /// Take one sample and convert it to a gamma-corrected display color
    pub fn read_display_color(&mut self, timeout_ms: Option<u32>) -> Result<DisplayColor, Error<E>> {
        Ok(self.read_raw(timeout_ms)?.to_display_color())
    }

    /// Take one sample and format its display color as `rrggbb`
    pub fn read_hex(&mut self, timeout_ms: Option<u32>) -> Result<String<6>, Error<E>> {
        Ok(self.read_display_color(timeout_ms)?.to_hex())
    }

    /// Take one sample and check whether it classifies as `label`.
    ///
    /// [`ColorLabel::Other`] never matches.
    pub fn detect(
        &mut self,
        label: ColorLabel,
        limit: u16,
        timeout_ms: Option<u32>,
    ) -> Result<bool, Error<E>> {
        let found = self.read_display_color(timeout_ms)?.classify(limit);
        Ok(label != ColorLabel::Other && found == label)
    }
}

#[cfg(feature = "async")]
impl<I2C, E, Delay> Tcs34725<I2C, Delay>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
    Delay: embedded_hal_async::delay::DelayNs,
{
    /// Create a driver at the default address and probe the device id (async version)
    pub async fn new_async(i2c: I2C, delay: Delay) -> Result<Self, Error<E>> {
        Self::with_address_async(i2c, delay, I2C_ADDRESS).await
    }

    /// Create a driver at `address` and probe the device id (async version)
    pub async fn with_address_async(i2c: I2C, delay: Delay, address: u8) -> Result<Self, Error<E>> {
        let mut sensor = Self::unprobed(i2c, delay, address);
        sensor
            .set_integration_time_async(MIN_INTEGRATION_TIME_MS)
            .await?;

        let id = sensor.sensor_id_async().await?;
        if !VALID_DEVICE_IDS.contains(&id) {
            warn!("unexpected TCS34725 id {:#x}", id);
            return Err(Error::UnexpectedDeviceId { found: id });
        }
        debug!("TCS34725 found, id {:#x}", id);

        Ok(sensor)
    }

    /// Read the device id register (async version)
    pub async fn sensor_id_async(&mut self) -> Result<u8, Error<E>> {
        self.bus.read_u8_async(regs::ID).await
    }

    /// Power the sensor on and start RGBC integration (async version)
    pub async fn activate_async(&mut self) -> Result<(), Error<E>> {
        self.set_active_async(true).await
    }

    /// Stop integration and power the sensor down (async version)
    pub async fn deactivate_async(&mut self) -> Result<(), Error<E>> {
        self.set_active_async(false).await
    }

    /// Drive the power state machine (async version)
    pub async fn set_active_async(&mut self, active: bool) -> Result<(), Error<E>> {
        if self.active == active {
            return Ok(());
        }

        let enable = self.bus.read_u8_async(regs::ENABLE).await?;
        if active {
            self.bus
                .write_u8_async(regs::ENABLE, enable | ll::ENABLE_PON)
                .await?;
            self.delay.delay_ms(POWER_ON_SETTLE_MS).await;
            self.bus
                .write_u8_async(regs::ENABLE, enable | ll::ENABLE_PON | ll::ENABLE_AEN)
                .await?;
        } else {
            self.bus
                .write_u8_async(regs::ENABLE, enable & !(ll::ENABLE_PON | ll::ENABLE_AEN))
                .await?;
        }

        self.active = active;
        trace!("TCS34725 active: {}", active);
        Ok(())
    }

    /// Set the integration time in milliseconds (async version)
    pub async fn set_integration_time_async(&mut self, ms: f64) -> Result<(), Error<E>> {
        let (cycles, atime) = integration_cycles(ms);
        self.bus.write_u8_async(regs::ATIME, atime).await?;
        self.integration_time = f64::from(cycles) * INTEGRATION_CYCLE_MS;
        debug!("integration time {} cycles, ATIME {}", cycles, atime);
        Ok(())
    }

    /// Set the analog gain multiplier (async version)
    pub async fn set_gain_async(&mut self, multiplier: u8) -> Result<(), Error<E>> {
        let gain = Gain::from_multiplier(multiplier).ok_or(Error::InvalidGain(multiplier))?;
        self.bus.write_u8_async(regs::CONTROL, gain as u8).await?;
        debug!("gain {}x", multiplier);
        Ok(())
    }

    /// Read the analog gain back from the control register (async version)
    pub async fn gain_async(&mut self) -> Result<Gain, Error<E>> {
        let control = self.bus.read_u8_async(regs::CONTROL).await?;
        Ok(Gain::from_bits(control))
    }

    /// Read the interrupt thresholds and persistence filter (async version)
    pub async fn threshold_async(&mut self) -> Result<ThresholdConfig, Error<E>> {
        let low = self.bus.read_u16_async(regs::AILT).await?;
        let high = self.bus.read_u16_async(regs::AIHT).await?;
        let persistence = if self.bus.read_u8_async(regs::ENABLE).await? & ll::ENABLE_AIEN != 0 {
            let apers = self.bus.read_u8_async(regs::APERS).await? & ll::APERS_MASK;
            Persistence::Cycles(PERSISTENCE_CYCLES[usize::from(apers)])
        } else {
            Persistence::Disabled
        };

        Ok(ThresholdConfig {
            persistence,
            low,
            high,
        })
    }

    /// Update the persistence filter and thresholds (async version)
    pub async fn set_threshold_async(
        &mut self,
        persistence: Option<Persistence>,
        low: Option<u16>,
        high: Option<u16>,
    ) -> Result<(), Error<E>> {
        let apers = match persistence {
            Some(Persistence::Cycles(cycles)) => Some(
                Persistence::Cycles(cycles)
                    .register_index()
                    .ok_or(Error::InvalidPersistenceCycles(cycles))?,
            ),
            _ => None,
        };

        if let Some(low) = low {
            self.bus.write_u16_async(regs::AILT, low).await?;
        }
        if let Some(high) = high {
            self.bus.write_u16_async(regs::AIHT, high).await?;
        }
        if persistence.is_some() {
            let enable = self.bus.read_u8_async(regs::ENABLE).await?;
            match apers {
                Some(index) => {
                    self.bus
                        .write_u8_async(regs::ENABLE, enable | ll::ENABLE_AIEN)
                        .await?;
                    self.bus.write_u8_async(regs::APERS, index).await?;
                }
                None => {
                    self.bus
                        .write_u8_async(regs::ENABLE, enable & !ll::ENABLE_AIEN)
                        .await?;
                }
            }
            debug!("interrupt persistence {:?}", persistence);
        }

        Ok(())
    }

    /// Check the clear channel interrupt flag (async version)
    pub async fn interrupt_status_async(&mut self) -> Result<bool, Error<E>> {
        Ok(self.bus.read_u8_async(regs::STATUS).await? & ll::STATUS_AINT != 0)
    }

    /// Clear the interrupt latch when `value` is false (async version)
    pub async fn set_interrupt_async(&mut self, value: bool) -> Result<(), Error<E>> {
        if value {
            return Err(Error::InvalidOperation);
        }
        self.bus
            .write_raw_async(&[ll::CLEAR_INTERRUPT_COMMAND])
            .await?;
        trace!("interrupt cleared");
        Ok(())
    }

    /// Clear the interrupt latch (async version)
    pub async fn clear_interrupt_async(&mut self) -> Result<(), Error<E>> {
        self.set_interrupt_async(false).await
    }

    /// Check the data-valid bit in the status register (async version)
    pub async fn is_data_valid_async(&mut self) -> Result<bool, Error<E>> {
        Ok(self.bus.read_u8_async(regs::STATUS).await? & ll::STATUS_AVALID != 0)
    }

    /// Take one RGBC sample (async version)
    pub async fn read_raw_async(&mut self, timeout_ms: Option<u32>) -> Result<RawSample, Error<E>> {
        let was_active = self.active;
        self.activate_async().await?;

        let interval = self.poll_interval_ms();
        let mut waited: u32 = 0;
        while !self.is_data_valid_async().await? {
            if timeout_ms.is_some_and(|timeout| waited >= timeout) {
                warn!("no valid measurement after {} ms", waited);
                self.set_active_async(was_active).await?;
                return Err(Error::Timeout);
            }
            self.delay.delay_ms(interval).await;
            waited = waited.saturating_add(interval);
        }

        let sample = RawSample {
            red: self.bus.read_u16_async(regs::RDATA).await?,
            green: self.bus.read_u16_async(regs::GDATA).await?,
            blue: self.bus.read_u16_async(regs::BDATA).await?,
            clear: self.bus.read_u16_async(regs::CDATA).await?,
        };

        self.set_active_async(was_active).await?;
        Ok(sample)
    }

    /// Take one sample and estimate color temperature and lux (async version)
    pub async fn read_temperature_and_lux_async(
        &mut self,
        timeout_ms: Option<u32>,
    ) -> Result<TemperatureLux, Error<E>> {
        Ok(self.read_raw_async(timeout_ms).await?.temperature_and_lux())
    }

    /// Take one sample and convert it to a display color (async version)
    pub async fn read_display_color_async(
        &mut self,
        timeout_ms: Option<u32>,
    ) -> Result<DisplayColor, Error<E>> {
        Ok(self.read_raw_async(timeout_ms).await?.to_display_color())
    }

    /// Take one sample and format its display color as `rrggbb` (async version)
    pub async fn read_hex_async(&mut self, timeout_ms: Option<u32>) -> Result<String<6>, Error<E>> {
        Ok(self.read_display_color_async(timeout_ms).await?.to_hex())
    }

    /// Take one sample and check whether it classifies as `label` (async version)
    pub async fn detect_async(
        &mut self,
        label: ColorLabel,
        limit: u16,
        timeout_ms: Option<u32>,
    ) -> Result<bool, Error<E>> {
        let found = self
            .read_display_color_async(timeout_ms)
            .await?
            .classify(limit);
        Ok(label != ColorLabel::Other && found == label)
    }
}
