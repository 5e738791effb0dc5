mod fallback;
mod template_set;
pub mod template_storage;
mod template_store;

pub use fallback::builtin_bundle;
pub use template_set::{AuxiliaryKey, TemplateBundle, TemplateSet};
pub use template_store::{TemplateSource, TemplateStore};
