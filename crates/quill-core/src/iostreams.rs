//! Terminal I/O abstraction layer.
//!
//! Handles TTY detection, color support and output capture for testing.
//! Commands write through [`IOStreams`] instead of `println!()` so that
//! their output can be asserted on.

use std::io::{self, IsTerminal, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use console::StyledObject;

type SharedBuf = Arc<Mutex<Vec<u8>>>;

fn lock<T: ?Sized>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer that appends into a buffer shared with a [`TestOutput`].
struct SharedWriter(SharedBuf);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.0).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Captured test output that can be inspected after command execution.
#[derive(Debug, Clone)]
pub struct TestOutput {
    out_buf: SharedBuf,
    err_buf: SharedBuf,
}

impl TestOutput {
    /// Get the captured stdout content as a string.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&lock(&self.out_buf)).to_string()
    }

    /// Get the captured stderr content as a string.
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&lock(&self.err_buf)).to_string()
    }
}

/// I/O streams for terminal interaction.
pub struct IOStreams {
    stdout_is_tty: bool,
    color_forced: Option<bool>,

    input: Mutex<Box<dyn Read + Send>>,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for IOStreams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IOStreams")
            .field("stdout_is_tty", &self.stdout_is_tty)
            .field("color_forced", &self.color_forced)
            .finish_non_exhaustive()
    }
}

impl IOStreams {
    /// Create `IOStreams` for the real terminal.
    pub fn system() -> Self {
        Self {
            stdout_is_tty: io::stdout().is_terminal(),
            color_forced: std::env::var_os("NO_COLOR").map(|_| false),
            input: Mutex::new(Box::new(io::stdin())),
            out: Mutex::new(Box::new(io::stdout())),
            err: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Create `IOStreams` for testing with output captured to buffers.
    ///
    /// Stdin is empty. Use [`IOStreams::test_with_input`] to feed it.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_core::iostreams::IOStreams;
    ///
    /// let (ios, output) = IOStreams::test_with_output();
    /// ios.println_out("hello");
    /// assert_eq!(output.stdout(), "hello\n");
    /// ```
    pub fn test_with_output() -> (Self, TestOutput) {
        Self::test_with_input("")
    }

    /// Like [`IOStreams::test_with_output`], with `input` readable from stdin.
    pub fn test_with_input(input: &str) -> (Self, TestOutput) {
        let out_buf: SharedBuf = Arc::default();
        let err_buf: SharedBuf = Arc::default();

        let ios = Self {
            stdout_is_tty: false,
            color_forced: Some(false),
            input: Mutex::new(Box::new(io::Cursor::new(input.as_bytes().to_vec()))),
            out: Mutex::new(Box::new(SharedWriter(Arc::clone(&out_buf)))),
            err: Mutex::new(Box::new(SharedWriter(Arc::clone(&err_buf)))),
        };

        (ios, TestOutput { out_buf, err_buf })
    }

    /// Set the stdout TTY state (for test configuration).
    pub fn set_stdout_tty(&mut self, is_tty: bool) {
        self.stdout_is_tty = is_tty;
    }

    /// Read stdin to the end.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin cannot be read or is not valid UTF-8.
    pub fn read_stdin(&self) -> io::Result<String> {
        let mut buf = String::new();
        lock(&self.input).read_to_string(&mut buf)?;
        Ok(buf)
    }

    /// Write a string to stdout followed by a newline.
    pub fn println_out(&self, s: &str) {
        let _ = writeln!(lock(&self.out), "{s}");
    }

    /// Write a string to stderr followed by a newline.
    pub fn println_err(&self, s: &str) {
        let _ = writeln!(lock(&self.err), "{s}");
    }

    /// Write formatted output to stdout with trailing newline.
    pub fn writeln_out(&self, args: std::fmt::Arguments<'_>) {
        let mut w = lock(&self.out);
        let _ = w.write_fmt(args);
        let _ = w.write_all(b"\n");
    }

    /// Write formatted output to stderr with trailing newline.
    pub fn writeln_err(&self, args: std::fmt::Arguments<'_>) {
        let mut w = lock(&self.err);
        let _ = w.write_fmt(args);
        let _ = w.write_all(b"\n");
    }

    /// Whether stdout is connected to a terminal.
    pub fn is_stdout_tty(&self) -> bool {
        self.stdout_is_tty
    }

    /// Whether color output is enabled.
    pub fn color_enabled(&self) -> bool {
        self.color_forced.unwrap_or(self.stdout_is_tty)
    }

    /// Create a `ColorScheme` based on the current color settings.
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            enabled: self.color_enabled(),
        }
    }
}

/// Terminal color scheme for themed output.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn paint<'a>(
        &self,
        text: &'a str,
        f: fn(StyledObject<&'a str>) -> StyledObject<&'a str>,
    ) -> String {
        if self.enabled {
            f(console::style(text)).to_string()
        } else {
            text.to_string()
        }
    }

    /// Apply bold styling.
    pub fn bold(&self, text: &str) -> String {
        self.paint(text, StyledObject::bold)
    }

    /// Apply success (green) styling.
    pub fn success(&self, text: &str) -> String {
        self.paint(text, StyledObject::green)
    }

    /// Apply warning (yellow) styling.
    pub fn warning(&self, text: &str) -> String {
        self.paint(text, StyledObject::yellow)
    }

    /// Apply dimmed/gray styling.
    pub fn gray(&self, text: &str) -> String {
        self.paint(text, StyledObject::dim)
    }

    /// Apply cyan styling (for links, emphasis).
    pub fn cyan(&self, text: &str) -> String {
        self.paint(text, StyledObject::cyan)
    }

    /// Style for successful icon.
    pub fn success_icon(&self) -> String {
        self.success("✓")
    }
}

/// Write to IOStreams stdout with newline, similar to `println!()`.
#[macro_export]
macro_rules! ios_println {
    ($ios:expr) => {
        $ios.println_out("")
    };
    ($ios:expr, $($arg:tt)*) => {
        $ios.writeln_out(format_args!($($arg)*))
    };
}

/// Write to IOStreams stderr with newline, similar to `eprintln!()`.
#[macro_export]
macro_rules! ios_eprintln {
    ($ios:expr) => {
        $ios.println_err("")
    };
    ($ios:expr, $($arg:tt)*) => {
        $ios.writeln_err(format_args!($($arg)*))
    };
}
