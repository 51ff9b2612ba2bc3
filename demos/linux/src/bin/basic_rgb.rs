//! Basic RGBC reading example
//!
//! This example demonstrates how to:
//! - Probe the TCS34725 sensor
//! - Configure gain and integration time
//! - Read raw RGBC counts with a timeout
//! - Derive color temperature, lux and display color

use tcs34725::{Tcs34725, DEFAULT_LIMIT};

// This example uses linux-embedded-hal for demonstration
// Replace with your platform's I2C implementation
use linux_embedded_hal::{Delay, I2cdev};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    // Initialize I2C interface
    let i2c = I2cdev::new("/dev/i2c-1")?;

    println!("Initializing TCS34725 sensor...");

    // Probe the sensor
    let mut sensor = Tcs34725::new(i2c, Delay).map_err(|e| e.to_string())?;
    println!("Device ID: 0x{:X}", sensor.sensor_id().map_err(|e| e.to_string())?);

    // Configure sensor settings
    sensor.set_gain(4).map_err(|e| e.to_string())?;
    sensor
        .set_integration_time(100.0)
        .map_err(|e| e.to_string())?;
    println!(
        "Sensor configured: gain 4x, integration {:.1}ms",
        sensor.integration_time()
    );

    // Keep the sensor powered between reads
    sensor.activate().map_err(|e| e.to_string())?;

    println!("Starting measurements...");
    println!("Press Ctrl+C to exit\n");

    loop {
        let sample = sensor.read_raw(Some(1000)).map_err(|e| e.to_string())?;
        let estimate = sample.temperature_and_lux();
        let color = sample.to_display_color();

        let cct = match estimate.cct {
            Some(cct) => format!("{:5.0}K", cct),
            None => "-----K".to_string(),
        };

        println!(
            "R: {:5} G: {:5} B: {:5} C: {:5} | Lux: {:8.2} | CCT: {} | #{} {:?}",
            sample.red,
            sample.green,
            sample.blue,
            sample.clear,
            estimate.lux,
            cct,
            color.to_hex(),
            color.classify(DEFAULT_LIMIT),
        );

        std::thread::sleep(std::time::Duration::from_millis(1000));
    }
}
