use std::io::{self, Write};

use rustyline::ExternalPrinter;

use super::message::{Message, MessageLog};
use super::ui::ChatUi;

pub type BoxedPrinter = Box<dyn ExternalPrinter + Send>;

/// Writer that hands each flushed chunk to a readline printer, which
/// prints it above the live prompt and redraws the prompt after.
pub struct PromptWriter {
    printer: BoxedPrinter,
    buf: Vec<u8>,
}

impl PromptWriter {
    pub fn new(printer: BoxedPrinter) -> Self {
        Self {
            printer,
            buf: Vec::new(),
        }
    }
}

impl Write for PromptWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let msg = String::from_utf8_lossy(&self.buf).into_owned();
        self.buf.clear();
        self.printer.print(msg).map_err(io::Error::other)
    }
}

/// Renders the chat to a terminal (or any writer). The readline
/// prompt plays the part of the input field: each line read is
/// staged with `set_input` before a send.
pub struct TerminalUi<W: Write> {
    input: String,
    log: MessageLog,
    out: W,
}

impl<W: Write> TerminalUi<W> {
    pub fn new(out: W) -> Self {
        Self {
            input: String::new(),
            log: MessageLog::new(),
            out,
        }
    }

    pub fn set_input(&mut self, line: &str) {
        self.input = line.to_string();
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChatUi for TerminalUi<W> {
    fn read_input(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn append_message(&mut self, message: Message) {
        if let Err(err) = writeln!(self.out, "{}: {}", message.sender(), message.text()) {
            tracing::warn!("Failed to render message: {}", err);
        }
        self.log.push(message);
    }

    fn scroll_to_bottom(&mut self) {
        if let Err(err) = self.out.flush() {
            tracing::warn!("Failed to flush output: {}", err);
        }
    }
}
