pub mod dispatch;
pub mod message;
pub mod session;
pub mod terminal;
pub mod ui;
pub use dispatch::*;
pub use message::*;
pub use session::*;
pub use terminal::{BoxedPrinter, PromptWriter, TerminalUi};
pub use ui::ChatUi;
