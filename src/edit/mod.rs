mod registry;
mod state;
#[cfg(test)]
mod tests;

pub use registry::{EditFields, FieldWiring};
pub use state::{Action, EditState, ReturnButtonAction};
