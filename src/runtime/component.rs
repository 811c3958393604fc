use std::fmt;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::hooks::Scope;

use super::element::Element;

/// Identity of a component instance: the slot it occupies in the render tree
/// plus an optional caller-supplied key for rows that move between slots.
/// Binding stores and lifecycle pruning are both keyed by this.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComponentId {
    name: String,
    slot: String,
    key: Option<String>,
}

impl ComponentId {
    pub fn new(path: &[usize], name: &str, key: Option<&str>) -> Self {
        let mut slot = String::new();
        for (index, segment) in path.iter().enumerate() {
            if index > 0 {
                slot.push('.');
            }
            let _ = write!(slot, "{segment}");
        }
        Self {
            name: name.to_string(),
            slot,
            key: key.map(str::to_string),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.slot)?;
        if let Some(key) = &self.key {
            write!(f, "#{key}")?;
        }
        Ok(())
    }
}

pub type ComponentFn = Arc<dyn Fn(&mut Scope) -> Element + Send + Sync>;

/// A deferred subtree: a named render function the app loop invokes with a
/// scope bound to this position in the tree.
#[derive(Clone)]
pub struct ComponentElement {
    pub(crate) name: &'static str,
    pub(crate) key: Option<String>,
    pub(crate) build: ComponentFn,
}

impl ComponentElement {
    pub fn new<F>(name: &'static str, build: F) -> Self
    where
        F: Fn(&mut Scope) -> Element + Send + Sync + 'static,
    {
        Self {
            name,
            key: None,
            build: Arc::new(build),
        }
    }

    /// Keys keep a component's state attached when siblings are reordered;
    /// without one, identity follows the slot alone.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl From<ComponentElement> for Element {
    fn from(value: ComponentElement) -> Self {
        Element::Component(value)
    }
}

impl fmt::Debug for ComponentElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentElement")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish()
    }
}

pub fn component<F>(name: &'static str, build: F) -> ComponentElement
where
    F: Fn(&mut Scope) -> Element + Send + Sync + 'static,
{
    ComponentElement::new(name, build)
}
