//! Threshold interrupt example
//!
//! This example demonstrates how to:
//! - Configure clear channel thresholds and the persistence filter
//! - Poll the interrupt flag and clear the latch

use tcs34725::{Persistence, Tcs34725};

// This example uses linux-embedded-hal for demonstration
use linux_embedded_hal::{Delay, I2cdev};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    // Initialize I2C interface
    let i2c = I2cdev::new("/dev/i2c-1")?;

    println!("Initializing TCS34725 sensor with interrupt support...");
    let mut sensor = Tcs34725::new(i2c, Delay).map_err(|e| e.to_string())?;

    sensor.set_gain(16).map_err(|e| e.to_string())?;
    sensor.set_integration_time(50.0).map_err(|e| e.to_string())?;

    // Latch when clear is below 100 or above 5000 for 5 consecutive cycles
    sensor
        .set_threshold(Some(Persistence::Cycles(5)), Some(100), Some(5000))
        .map_err(|e| e.to_string())?;
    let threshold = sensor.threshold().map_err(|e| e.to_string())?;
    println!("Threshold configuration: {:?}", threshold);

    sensor.activate().map_err(|e| e.to_string())?;

    println!("\nMonitoring for interrupt conditions...");
    println!("Press Ctrl+C to exit\n");

    let mut reading_count = 0;

    loop {
        let sample = sensor.read_raw(Some(1000)).map_err(|e| e.to_string())?;
        reading_count += 1;

        if sensor.interrupt_status().map_err(|e| e.to_string())? {
            println!(
                "INTERRUPT #{}: C: {:6} - Threshold exceeded!",
                reading_count, sample.clear
            );
            sensor.clear_interrupt().map_err(|e| e.to_string())?;
        } else {
            println!("Reading #{:3}: C: {:6} - Normal", reading_count, sample.clear);
        }

        std::thread::sleep(std::time::Duration::from_millis(1000));
    }
}
