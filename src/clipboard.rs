mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_suggestion, copy_to_clipboard};
