mod classifier;

pub use classifier::{Context, classify};
