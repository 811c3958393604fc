use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{info, trace, warn};

use crate::edit::EditFields;
use crate::events::{DEFAULT_TICK_RATE, EventBus};
use crate::hooks::{Deferred, EventHandler, HookRegistry, Scope};
use crate::renderer::Renderer;

use super::component::{ComponentElement, ComponentId};
use super::dispatcher::{AppMessage, Dispatcher};
use super::element::{Element, StackDirection};
use super::tasks::RuntimeTasks;
use super::view::{
    ButtonView, FieldView, SectionRowView, SectionView, SliderView, StackView, TextView, View,
};

#[derive(Clone, Copy)]
enum RendererMode {
    Interactive,
    Headless,
}

#[derive(Clone)]
pub struct App {
    name: &'static str,
    root: ComponentElement,
    hooks: Arc<HookRegistry>,
    event_bus: EventBus,
    config: AppConfig,
    renderer_mode: RendererMode,
}

#[derive(Clone, Copy)]
pub struct AppConfig {
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

/// Everything one render pass produces besides the view itself.
#[derive(Default)]
pub(crate) struct RenderPass {
    pub(crate) live_components: HashSet<ComponentId>,
    pub(crate) live_fields: HashSet<String>,
    pub(crate) deferred: Vec<Deferred>,
    pub(crate) handlers: Vec<EventHandler>,
}

impl App {
    pub fn new(name: &'static str, root: ComponentElement) -> Self {
        Self {
            name,
            root,
            hooks: Arc::new(HookRegistry::new()),
            event_bus: EventBus::new(64),
            config: AppConfig::default(),
            renderer_mode: RendererMode::Interactive,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn headless(mut self) -> Self {
        self.renderer_mode = RendererMode::Headless;
        self
    }

    pub async fn run(self) -> anyhow::Result<()> {
        info!(app = self.name, "starting runtime");
        let (tx, mut rx) = mpsc::channel(128);
        let dispatcher = Dispatcher::new(tx.clone(), self.event_bus.clone());
        let mut renderer = match self.renderer_mode {
            RendererMode::Interactive => Renderer::new(self.name).context("initialize renderer")?,
            RendererMode::Headless => Renderer::headless().context("initialize renderer")?,
        };
        let mut last_view: Option<View> = None;
        let mut handlers: Vec<EventHandler> = Vec::new();

        let tasks = RuntimeTasks::launch(&tx, self.config.tick_rate);

        if tx.send(AppMessage::RequestRender).await.is_err() {
            warn!(app = self.name, "failed to enqueue initial render request");
        }

        while let Some(message) = rx.recv().await {
            trace!(app = self.name, message = ?message, "processing app message");
            match message {
                AppMessage::RequestRender => {
                    let (view, pass) = self.render_root(&dispatcher);

                    let should_render =
                        last_view.as_ref().map(|prev| prev != &view).unwrap_or(true);
                    if should_render {
                        renderer.draw(&view).map_err(|err| {
                            warn!(app = self.name, error = ?err, "renderer draw failed");
                            err
                        })?;
                        trace!(app = self.name, "frame drawn");
                    }
                    last_view = Some(view);
                    handlers = pass.handlers;

                    // Derived-state recomputation happens strictly after the
                    // frame, never while the tree is being built.
                    trace!(
                        app = self.name,
                        deferred_count = pass.deferred.len(),
                        "running deferred tasks"
                    );
                    for task in pass.deferred {
                        task(&dispatcher);
                    }
                    self.hooks.prune(&pass.live_components);
                    EditFields::prune(&pass.live_fields);
                }
                AppMessage::ExternalEvent(event) => {
                    trace!(app = self.name, event = ?event, "dispatching external event");
                    EditFields::handle_event(&event, &dispatcher);
                    for handler in &handlers {
                        handler(&event);
                    }
                    self.event_bus.publish(event);
                }
                AppMessage::Shutdown => {
                    info!(app = self.name, "shutdown requested");
                    break;
                }
            }
        }

        drop(renderer);
        trace!(app = self.name, "tearing down runtime tasks");
        tasks.shutdown().await;
        info!(app = self.name, "runtime stopped");
        Ok(())
    }

    pub(crate) fn render_root(&self, dispatcher: &Dispatcher) -> (View, RenderPass) {
        let mut pass = RenderPass::default();
        let mut path = vec![0usize];
        let view = self
            .render_element(
                Element::from(self.root.clone()),
                dispatcher,
                &mut path,
                &mut pass,
            )
            .unwrap_or(View::Empty);
        (view, pass)
    }

    fn render_element(
        &self,
        element: Element,
        dispatcher: &Dispatcher,
        path: &mut Vec<usize>,
        pass: &mut RenderPass,
    ) -> Option<View> {
        match element {
            Element::Empty => Some(View::Empty),
            Element::Text(node) => Some(View::Text(TextView {
                content: node.content,
                color: node.color,
                mode: node.mode,
                bold: node.bold,
                dim: node.dim,
            })),
            Element::Stack(node) => {
                let mut children = Vec::new();
                for (index, child) in node.children.into_iter().enumerate() {
                    path.push(index);
                    if let Some(view) = self.render_element(child, dispatcher, path, pass) {
                        children.push(view);
                    }
                    path.pop();
                }
                if children.is_empty() {
                    Some(View::Empty)
                } else {
                    Some(View::Stack(StackView {
                        direction: node.direction,
                        children,
                    }))
                }
            }
            Element::Button(node) => Some(View::Button(ButtonView {
                id: node.id,
                label: node.label,
                accent: node.accent,
                filled: node.filled,
            })),
            Element::Slider(node) => Some(View::Slider(SliderView {
                ratio: node.ratio.clamp(0.0, 1.0),
                label: node.label,
                height: node.height.max(1),
                progress: node.progress,
                track: node.track,
                thumb: node.thumb,
                thumb_width: node.thumb_width.max(1),
                thumb_shadow: node.thumb_shadow,
                thumb_stroke: node.thumb_stroke,
            })),
            Element::Field(node) => {
                pass.live_fields.insert(node.id.clone());
                let cursor = EditFields::cursor(&node.id);
                Some(View::Field(FieldView {
                    cursor: cursor.min(node.value.len()),
                    id: node.id,
                    value: node.value,
                    placeholder: node.placeholder,
                    height: node.height,
                    content_spacing: node.content_spacing,
                    focused: node.focused,
                    search_icon: node.search_icon,
                    dim: node.dim,
                    background: node.background,
                    border: node.border,
                    text_color: node.text_color,
                    placeholder_color: node.placeholder_color,
                    icon_color: node.icon_color,
                    trailing: node.trailing,
                }))
            }
            Element::Section(node) => {
                let rows = node
                    .rows
                    .into_iter()
                    .map(|row| SectionRowView {
                        id: row.id,
                        title: row.title,
                        color: row.color,
                    })
                    .collect();
                Some(View::Section(SectionView {
                    title: node.title,
                    rows,
                    selected: node.selected,
                    accent: node.accent,
                }))
            }
            Element::Fragment(children) => {
                let mut views = Vec::new();
                for (index, child) in children.into_iter().enumerate() {
                    path.push(index);
                    if let Some(view) = self.render_element(child, dispatcher, path, pass) {
                        views.push(view);
                    }
                    path.pop();
                }
                if views.is_empty() {
                    Some(View::Empty)
                } else if views.len() == 1 {
                    views.pop()
                } else {
                    Some(View::Stack(StackView {
                        direction: StackDirection::Column,
                        children: views,
                    }))
                }
            }
            Element::Component(component) => {
                self.render_component(component, dispatcher, path, pass)
            }
        }
    }

    fn render_component(
        &self,
        component: ComponentElement,
        dispatcher: &Dispatcher,
        path: &mut Vec<usize>,
        pass: &mut RenderPass,
    ) -> Option<View> {
        let id = ComponentId::new(path, component.name, component.key.as_deref());
        pass.live_components.insert(id.clone());
        let store = self.hooks.store_for(&id);
        let mut scope = Scope::new(id, store, dispatcher.clone());
        let child = (component.build)(&mut scope);
        pass.deferred.extend(scope.take_deferred());
        pass.handlers.extend(scope.take_handlers());
        self.render_element(child, dispatcher, path, pass)
    }
}
