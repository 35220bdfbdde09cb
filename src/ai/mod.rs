pub mod answer;
pub mod context;
pub mod prompt;
pub use answer::*;
pub use context::*;
