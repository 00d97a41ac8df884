//! Lab session example.
//!
//! Walks through every helper the way a student would at the prompt:
//! help lookup, a short stepper move, a bounded measurement saved to CSV,
//! a boolean reading and a disco stopped by a timer.
//!
//! Pins and the ADC are simulated, so this runs on the host.

use std::thread;
use std::time::Duration;

use labkit::{
    console::StdoutConsole,
    lab,
    measure::{read_records, SystemClock},
    CancelFlag, Disco, LabConfig, Never, Sampler, Stepper,
};

static STOP: CancelFlag = CancelFlag::new();

/// Delay provider backed by the host scheduler.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns as u64));
    }
}

/// Simulated output pin for coils and LEDs.
struct SimPin {
    state: bool,
}

impl SimPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::StatefulOutputPin for SimPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.state)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.state)
    }
}

/// Simulated light sensor drifting across the threshold.
struct SimSensor {
    level: u16,
}

impl labkit::AnalogInput for SimSensor {
    type Error = core::convert::Infallible;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        self.level = (self.level + 700) % 4096;
        Ok(self.level)
    }
}

/// Raise the stop flag after `after`, like a user pressing the button.
fn press_stop_after(after: Duration) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(after);
        STOP.cancel();
    })
}

fn main() {
    let mut console = StdoutConsole;

    let config: LabConfig = labkit::config::parse_config(
        r#"
[stepper]
steps = -2
speed = 200

[measurement]
duration_ms = 1000
interval_ms = 250
file_name = "_demo"
results_dir = "./Results"

[disco]
period_ms = 100
"#,
    )
    .expect("Failed to parse config");

    println!("=== Help ===");
    lab::what(&mut console, "").expect("console");
    lab::what(&mut console, "move_stepper").expect("console");

    println!("\n=== Stepper ===");
    let coils = [SimPin::new(), SimPin::new(), SimPin::new(), SimPin::new()];
    let mut stepper = Stepper::new(coils, SleepDelay);
    let report = lab::move_stepper(&mut stepper, &config.stepper, &mut console, &Never)
        .expect("Stepper move failed");
    println!(
        "{:?} after {} phases ({:?})",
        report.outcome, report.phases_applied, report.direction
    );

    println!("\n=== Continuous measurement ===");
    let mut sampler = Sampler::new(SimSensor { level: 0 }, SleepDelay);
    let (path, report) = lab::start_continuous_measurement(
        &mut sampler,
        &config.measurement,
        &mut SystemClock,
        &mut console,
        &Never,
    )
    .expect("Measurement failed");
    println!("{} records saved to {}", report.records, path.display());
    for record in read_records(&path).expect("Failed to read results") {
        println!("  {}", record);
    }

    println!("\n=== Boolean measurement ===");
    let (mut sensor, _) = sampler.release();
    let state = lab::boolean_measurement(&mut sensor, &config.threshold)
        .expect("Boolean measurement failed");
    println!("State: {}", state);

    println!("\n=== Disco ===");
    let leds = [SimPin::new(), SimPin::new(), SimPin::new(), SimPin::new()];
    let mut disco = Disco::new(leds, SleepDelay);
    let timer = press_stop_after(Duration::from_millis(1000));
    let report = lab::disco(&mut disco, &config.disco, &STOP).expect("Disco failed");
    let _ = timer.join();
    STOP.reset();
    println!("{} toggles, last LED {:?}", report.toggles, report.last_led);

    println!("\n=== Session Complete ===");
}
