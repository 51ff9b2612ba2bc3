//! Color detection with an optional sensor
//!
//! This example demonstrates how to:
//! - Treat a missing sensor as "not present" instead of a fatal error
//! - Classify readings into coarse color labels

use embedded_hal::i2c::I2c;
use log::{info, warn};
use tcs34725::{ColorLabel, Error, Tcs34725, DEFAULT_LIMIT};

use linux_embedded_hal::{Delay, I2cdev};

/// Probe the sensor, logging instead of failing when it is absent
fn probe<I: I2c>(i2c: I) -> Option<Tcs34725<I, Delay>> {
    match Tcs34725::new(i2c, Delay) {
        Ok(sensor) => {
            info!("color sensor found");
            Some(sensor)
        }
        Err(Error::UnexpectedDeviceId { found }) => {
            warn!("color sensor not found (id {:#x})", found);
            None
        }
        Err(e) => {
            warn!("color sensor not found: {}", e);
            None
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let i2c = I2cdev::new("/dev/i2c-1")?;
    let Some(mut sensor) = probe(i2c) else {
        println!("No color sensor connected.");
        return Ok(());
    };

    loop {
        let color = sensor
            .read_display_color(Some(500))
            .map_err(|e| e.to_string())?;
        let label = color.classify(DEFAULT_LIMIT);

        println!(
            "({:3}, {:3}, {:3}) -> {:?}{}",
            color.red,
            color.green,
            color.blue,
            label,
            if label == ColorLabel::Other {
                " (unrecognized)"
            } else {
                ""
            }
        );

        std::thread::sleep(std::time::Duration::from_millis(500));
    }
}
