use std::io::{Stdout, stdout};

use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{Backend, CrosstermBackend, TestBackend};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

use crate::edit::EditFields;
use crate::interactions::reset_hitboxes;
use crate::runtime::View;

mod widgets;

use widgets::{
    render_button, render_field, render_section, render_slider, render_stack, render_text,
};

/// Terminal frontend for resolved views. The headless variant draws into an
/// in-memory buffer and is what integration tests run against.
pub enum Renderer {
    Interactive(Terminal<CrosstermBackend<Stdout>>),
    Headless(Terminal<TestBackend>),
}

impl Renderer {
    pub fn new(title: &str) -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            SetTitle(title)
        )
        .context("prepare terminal")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("build terminal")?;
        Ok(Self::Interactive(terminal))
    }

    pub fn headless() -> anyhow::Result<Self> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).context("build test terminal")?;
        Ok(Self::Headless(terminal))
    }

    pub fn draw(&mut self, view: &View) -> anyhow::Result<()> {
        reset_hitboxes();
        EditFields::reset_hitboxes();
        match self {
            Self::Interactive(terminal) => draw_on(terminal, view),
            Self::Headless(terminal) => draw_on(terminal, view),
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        if matches!(self, Self::Interactive(_)) {
            let _ = disable_raw_mode();
            let mut stdout = stdout();
            let _ = execute!(
                stdout,
                Show,
                DisableMouseCapture,
                LeaveAlternateScreen,
                SetTitle("Terminal")
            );
        }
    }
}

fn draw_on<B: Backend>(terminal: &mut Terminal<B>, view: &View) -> anyhow::Result<()> {
    terminal.draw(|frame| {
        let area = frame.size();
        render_view(frame, area, view);
    })?;
    Ok(())
}

fn render_view(frame: &mut Frame<'_>, area: Rect, view: &View) {
    match view {
        View::Empty => {}
        View::Text(text) => render_text(frame, area, text),
        View::Stack(stack) => render_stack(frame, area, stack, render_view),
        View::Button(button) => render_button(frame, area, button),
        View::Slider(slider) => render_slider(frame, area, slider),
        View::Field(field) => render_field(frame, area, field),
        View::Section(section) => render_section(frame, area, section),
    }
}
