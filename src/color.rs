//! Conversions from raw RGBC counts to color temperature, lux and display color

use core::fmt::Write;

use heapless::String;

/// Raw RGBC channel counts as read from the data registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RawSample {
    /// Red channel count
    pub red: u16,
    /// Green channel count
    pub green: u16,
    /// Blue channel count
    pub blue: u16,
    /// Clear (unfiltered) channel count
    pub clear: u16,
}

/// Gamma-corrected 8-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct DisplayColor {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

/// Color temperature and illuminance estimate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct TemperatureLux {
    /// Correlated color temperature in kelvin.
    ///
    /// `None` when the chromaticity is undefined: the tristimulus sum is zero
    /// or the McCamy denominator vanishes.
    pub cct: Option<f64>,
    /// Illuminance estimate, the Y tristimulus value
    pub lux: f64,
}

impl RawSample {
    /// Estimate color temperature and lux from the red, green and blue counts.
    ///
    /// The clear channel is not used.
    pub fn temperature_and_lux(&self) -> TemperatureLux {
        let r = f64::from(self.red);
        let g = f64::from(self.green);
        let b = f64::from(self.blue);

        let x = -0.14282 * r + 1.54924 * g - 0.95641 * b;
        let y = -0.32466 * r + 1.57837 * g - 0.73191 * b;
        let z = -0.68202 * r + 0.77073 * g + 0.56332 * b;

        let sum = x + y + z;
        if sum == 0.0 {
            return TemperatureLux { cct: None, lux: y };
        }

        // McCamy's approximation
        let n = (x / sum - 0.3320) / (0.1858 - y / sum);
        let cct = 449.0 * n * n * n + 3525.0 * n * n + 6823.3 * n + 5520.33;

        TemperatureLux {
            cct: cct.is_finite().then_some(cct),
            lux: y,
        }
    }

    /// Normalize each color channel by the clear channel and apply a 2.5 gamma.
    ///
    /// A zero clear count yields black.
    pub fn to_display_color(&self) -> DisplayColor {
        if self.clear == 0 {
            return DisplayColor::default();
        }

        let clear = f64::from(self.clear);
        let gamma = |channel: u16| -> u8 {
            let scaled = ((f64::from(channel) / clear) * 256.0) as u32;
            let corrected = (libm::pow(f64::from(scaled) / 255.0, 2.5) * 255.0) as u32;
            corrected.min(255) as u8
        };

        DisplayColor {
            red: gamma(self.red),
            green: gamma(self.green),
            blue: gamma(self.blue),
        }
    }
}

impl DisplayColor {
    /// Lowercase `rrggbb` hex string
    pub fn to_hex(&self) -> String<6> {
        let mut hex = String::new();
        // six digits always fit
        let _ = write!(hex, "{:02x}{:02x}{:02x}", self.red, self.green, self.blue);
        hex
    }
}
