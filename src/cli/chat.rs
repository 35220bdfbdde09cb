use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::{mpsc, oneshot};

use crate::client::{BoxedPrinter, ChatSession, PromptWriter, QueryClient, TerminalUi, deliver};
use crate::core::init_tracing;

/// Logging is off unless `RUST_LOG` asks for it, stderr shares the
/// terminal with the transcript.
pub const DEFAULT_LOG_FILTER: &str = "off";

/// Feed prompt lines into `tx`. `readline` blocks, so this runs on
/// the blocking pool and ends on Ctrl-C or Ctrl-D. The editor's
/// printer is handed back through `printer_tx` so output can be
/// drawn above the prompt.
fn spawn_prompt(tx: mpsc::UnboundedSender<String>, printer_tx: oneshot::Sender<BoxedPrinter>) {
    tokio::task::spawn_blocking(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                tracing::error!("Failed to start prompt: {:?}", err);
                return;
            }
        };

        match rl.create_external_printer() {
            Ok(printer) => {
                let _ = printer_tx.send(Box::new(printer));
            }
            Err(err) => {
                tracing::debug!("No external printer, using stdout: {:?}", err);
                drop(printer_tx);
            }
        }

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    if let Err(err) = rl.add_history_entry(line.as_str()) {
                        tracing::debug!("Failed to record history: {:?}", err);
                    }
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => break,
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("Prompt failed: {:?}", err);
                    break;
                }
            }
        }
    });
}

pub async fn run() -> Result<()> {
    init_tracing(DEFAULT_LOG_FILTER);

    let client = QueryClient::default();
    let (session, mut replies) = ChatSession::new(Arc::new(client));

    let (tx, mut lines) = mpsc::unbounded_channel();
    let (printer_tx, printer_rx) = oneshot::channel();
    spawn_prompt(tx, printer_tx);

    // Fall back to plain stdout when the prompt has no printer
    let out: Box<dyn Write + Send> = match printer_rx.await {
        Ok(printer) => Box::new(PromptWriter::new(printer)),
        Err(_) => Box::new(io::stdout()),
    };
    let mut ui = TerminalUi::new(out);

    // Replies still in flight when the prompt closes are dropped
    loop {
        tokio::select! {
            line = lines.recv() => match line {
                Some(line) => {
                    ui.set_input(&line);
                    session.send(&mut ui);
                }
                None => break,
            },
            Some(reply) = replies.recv() => deliver(&mut ui, reply),
        }
    }

    Ok(())
}
