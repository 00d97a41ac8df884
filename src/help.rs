//! Inline documentation for the lab helpers.
//!
//! Help texts live in a static table keyed by helper name, so lookup is a
//! plain search and an unknown name is an ordinary [`HelpEntry::NotFound`].

use core::fmt::{self, Write};

/// Text shown by `what("")`.
pub const OVERVIEW: &str = "
Welcome to the lab board helpers!

The following helpers are available:
\tcls() - Clears the screen.
\tmove_stepper() - Control a stepper motor.
\tstart_continuous_measurement() - Collect data from a connected peripheral and save it to a CSV file.
\tboolean_measurement() - Measure the current state of a connected peripheral.
\tdisco() - Start the onboard LEDs in a disco fashion.
\twhat() - Get help about a helper or display this message.
";

const CLS: &str = "
cls()

Clears the screen from any artifacts.

Parameters
----------
\tNone
Returns
-------
\tNone
";

const MOVE_STEPPER: &str = "
move_stepper(steps = 10, speed = 100)

Moves the stepper motor a set amount of steps forward (positive steps value)
or backwards (negative steps value). Defaults to 10 steps forward, at 100
steps per second. Stop early with the cancel button; the motor coils are
always switched off at the end.

Parameters
----------
steps : int
\tAmount of steps the motor will move forward (positive) or backwards (negative).
speed : int
\tAmount of steps the motor will move per second. Must be above 0.
Returns
-------
\tHow the move ended and how many phases were applied.
";

const START_CONTINUOUS_MEASUREMENT: &str = "
start_continuous_measurement(measure_time = 0, measure_interval = 500, pin = 'X1', file_name = '')

Starts a continuous measurement of the connected peripheral and saves the
result to a CSV file under the 'Results' folder. Each line holds the elapsed
time in milliseconds and the raw reading. Press the cancel button to stop
the measurement at any time; the file is always closed.

Parameters
----------
measure_time : int
\tUpper limit for the measurement's length, in milliseconds. Defaults to 0,
\twhich means an infinite measurement.
measure_interval : int
\tTime interval between two consecutive measurements, in milliseconds.
\tDefaults to 500.
pin : str
\tName of the pin connected to your peripheral. Defaults to X1.
file_name : str
\tName for the saved file. The current clock is appended to avoid
\tduplicates and data loss.
Returns
-------
\tHow the measurement ended and how many records were written.
";

const BOOLEAN_MEASUREMENT: &str = "
boolean_measurement(pin = 'X1', threshold = 2730)

Measures the current state of the connected peripheral.

Parameters
----------
pin : str
\tName of the pin connected to your peripheral. Defaults to X1.
threshold : int
\tReadings strictly above this value return 1. Defaults to 2730, which is
\t2/3 of the maximum reading (4095).
Returns
-------
int : 1 if the reading is above the threshold, 0 otherwise.
";

const DISCO: &str = "
disco()

Starts the LEDs on the board in disco fashion. A neat way to check that you
are ready to start your experiment. Press the cancel button to stop; all
LEDs are switched off.

Parameters
----------
\tNone
Returns
-------
\tNumber of toggles performed.
";

const WHAT: &str = "
what(func_name = '')

Displays help for a helper.

Parameters
----------
func_name : str
\tThe name of the helper you require help with.
Returns
-------
\tNone
";

/// Helper name and its help text.
const TOPICS: &[(&str, &str)] = &[
    ("cls", CLS),
    ("move_stepper", MOVE_STEPPER),
    ("start_continuous_measurement", START_CONTINUOUS_MEASUREMENT),
    ("boolean_measurement", BOOLEAN_MEASUREMENT),
    // Spelling used on older lab sheets.
    ("boolean_measurment", BOOLEAN_MEASUREMENT),
    ("disco", DISCO),
    ("what", WHAT),
];

/// Result of a help lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpEntry<'a> {
    /// Empty name: the package overview.
    Overview(&'static str),
    /// Known helper.
    Topic {
        /// Helper name as listed in the table.
        name: &'static str,
        /// Help text.
        doc: &'static str,
    },
    /// No helper with the requested name.
    NotFound(&'a str),
}

/// Look up help for `name`. The empty name selects the overview.
pub fn what(name: &str) -> HelpEntry<'_> {
    let name = name.trim();
    if name.is_empty() {
        return HelpEntry::Overview(OVERVIEW);
    }
    // Tolerate `move_stepper()` as typed at the prompt.
    let bare = name.strip_suffix("()").unwrap_or(name);
    TOPICS
        .iter()
        .find(|(topic, _)| *topic == bare)
        .map(|&(name, doc)| HelpEntry::Topic { name, doc })
        .unwrap_or(HelpEntry::NotFound(name))
}

/// Names with help available, in display order.
pub fn topics() -> impl Iterator<Item = &'static str> {
    TOPICS.iter().map(|(name, _)| *name)
}

impl fmt::Display for HelpEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpEntry::Overview(text) => f.write_str(text),
            HelpEntry::Topic { name, doc } => {
                writeln!(f)?;
                writeln!(f, "Help for '{}'", name)?;
                writeln!(f, "--------------------")?;
                f.write_str(doc)
            }
            HelpEntry::NotFound(name) => writeln!(f, "No function named '{}'", name),
        }
    }
}

/// Print help for `name` on the console.
pub fn print_help<W: Write + ?Sized>(console: &mut W, name: &str) -> fmt::Result {
    write!(console, "{}", what(name))
}
