//! Console helpers.

use core::fmt::{self, Write};

/// ANSI sequence erasing the whole screen.
pub const CLEAR_SCREEN: &str = "\x1B[2J";

/// ANSI sequence moving the cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1B[H";

/// Clear the terminal and home the cursor.
pub fn cls<W: Write + ?Sized>(console: &mut W) -> fmt::Result {
    console.write_str(CLEAR_SCREEN)?;
    console.write_str(CURSOR_HOME)
}

/// Write one line to the console.
///
/// Console output never interrupts a helper; a failed write is traced and
/// dropped.
pub(crate) fn print_line<W: Write>(console: &mut W, args: fmt::Arguments<'_>) {
    if console.write_fmt(args).and_then(|()| console.write_char('\n')).is_err() {
        trace!("console: line dropped");
    }
}

/// Clear the console, then print one line.
pub(crate) fn redraw_line<W: Write>(console: &mut W, args: fmt::Arguments<'_>) {
    if cls(console).is_err() {
        trace!("console: clear dropped");
    }
    print_line(console, args);
}

/// Process stdout as a `core::fmt::Write` console (std only).
///
/// Every write is flushed so readings appear immediately.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

#[cfg(feature = "std")]
impl Write for StdoutConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        use std::io::Write as _;

        let mut out = std::io::stdout().lock();
        out.write_all(s.as_bytes()).map_err(|_| fmt::Error)?;
        out.flush().map_err(|_| fmt::Error)
    }
}
