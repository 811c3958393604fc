mod handles;
mod registry;
mod scope;

pub use handles::Binding;
pub use registry::{Deferred, EventHandler, HookRegistry};
pub use scope::Scope;
