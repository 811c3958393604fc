use std::time::Duration;

use crossterm::event::KeyCode;
use tracing::info;

use tuft::components::{TextFieldMisc, TextFieldStyle};
use tuft::runtime::{Alignment, AppConfig, Color};
use tuft::{
    App, CancelButtonAction, ClearButtonAction, EditState, Element, ReturnButtonAction, Scope,
    Section, SectionList, SectionRow, Slider, SliderState, TextField, TextFieldHighlight,
    TextFieldKind, Title, component, is_button_click,
};
use tuft::{ButtonNode, FrameworkEvent};

const APP_NAME: &str = "tuft demo";
const ROW_TITLES: &str = "demo:titles";
const ROW_SLIDER: &str = "demo:slider";
const ROW_TEXT_FIELDS: &str = "demo:text-fields";
const ROW_CREDITS: &str = "demo:credits";
const BACK_BUTTON: &str = "demo:back";
const SLIDER_MINUS_BUTTON: &str = "slider:minus";
const SLIDER_PLUS_BUTTON: &str = "slider:plus";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    App::new(APP_NAME, component("AppRoot", app_root))
        .with_config(AppConfig {
            tick_rate: Duration::from_millis(200),
        })
        .run()
        .await
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Screen {
    #[default]
    Home,
    Titles,
    Slider,
    TextFields,
    Credits,
}

fn app_root(ctx: &mut Scope) -> Element {
    let screen = ctx.use_binding(Screen::default);
    let current = screen.get();

    {
        let screen = screen.clone();
        ctx.on_event(move |event| {
            for (row, target) in [
                (ROW_TITLES, Screen::Titles),
                (ROW_SLIDER, Screen::Slider),
                (ROW_TEXT_FIELDS, Screen::TextFields),
                (ROW_CREDITS, Screen::Credits),
            ] {
                if is_button_click(event, row) {
                    screen.set(target);
                    return;
                }
            }
            if is_button_click(event, BACK_BUTTON) {
                screen.set(Screen::Home);
            }
        });
    }

    match current {
        Screen::Home => component("Home", home_screen).into(),
        Screen::Titles => detail("Titles", component("Titles", titles_screen).into()),
        Screen::Slider => detail("Slider", component("SliderDemo", slider_screen).into()),
        Screen::TextFields => detail(
            "Text Fields",
            component("TextFields", text_fields_screen).into(),
        ),
        Screen::Credits => detail("Credits", credits_screen()),
    }
}

fn detail(title: &str, body: Element) -> Element {
    Element::vstack(vec![
        Element::hstack(vec![
            Element::button(ButtonNode::new(BACK_BUTTON, "< Back").accent(Color::Cyan)),
            Title::new(title, Color::White).bold().into_element(),
        ]),
        body,
    ])
}

fn home_screen(_ctx: &mut Scope) -> Element {
    Element::vstack(vec![
        Title::new(APP_NAME, Color::Cyan).bold().into_element(),
        Element::colored_text("Click a row to open a demo, Ctrl+C to quit", Color::DarkGray),
        SectionList::new(vec![
            Section::new(
                "Components",
                vec![
                    SectionRow::new(ROW_TITLES, "Titles"),
                    SectionRow::new(ROW_SLIDER, "Slider"),
                    SectionRow::new(ROW_TEXT_FIELDS, "Text Fields"),
                ],
            ),
            Section::new("About", vec![SectionRow::new(ROW_CREDITS, "Credits")]),
        ])
        .accent(Color::Cyan)
        .into_element(),
    ])
}

fn titles_screen(_ctx: &mut Scope) -> Element {
    Element::vstack(vec![
        Title::new(
            "One-line titles truncate instead of wrapping, however long the text grows",
            Color::White,
        )
        .into_element(),
        Title::new(
            "Multi-line titles wrap at word boundaries and can cap the number of lines, \
             adding an ellipsis when content is dropped past the cap.",
            Color::Gray,
        )
        .multi_line(Some(2), Alignment::Left)
        .into_element(),
        Title::new("Centered, unlimited lines", Color::Gray)
            .multi_line(None, Alignment::Center)
            .into_element(),
    ])
}

fn slider_screen(ctx: &mut Scope) -> Element {
    let value = ctx.use_binding(|| 0.4f64);
    let current = value.get();

    {
        let value = value.clone();
        ctx.on_event(move |event| {
            let delta = if is_button_click(event, SLIDER_PLUS_BUTTON) || is_right_key(event) {
                0.1
            } else if is_button_click(event, SLIDER_MINUS_BUTTON) || is_left_key(event) {
                -0.1
            } else {
                return;
            };
            value.update(|v| *v = (*v + delta).clamp(0.0, 1.0));
        });
    }

    Element::vstack(vec![
        Element::colored_text("Keys: Left/Right or click the buttons", Color::DarkGray),
        Slider::new(value.clone())
            .label(format!("{:.0}%", current * 100.0))
            .into_element(),
        Slider::new(value.clone()).solid_thumb(true).into_element(),
        Slider::new(value)
            .state(SliderState::Disabled)
            .label("disabled")
            .into_element(),
        Element::hstack(vec![
            Element::button(ButtonNode::new(SLIDER_MINUS_BUTTON, "-").accent(Color::Red)),
            Element::button(
                ButtonNode::new(SLIDER_PLUS_BUTTON, "+")
                    .accent(Color::Cyan)
                    .filled(true),
            ),
        ]),
    ])
}

fn text_fields_screen(ctx: &mut Scope) -> Element {
    let email_state = ctx.use_binding(EditState::default);
    let email = ctx.use_binding(String::new);
    let password_state = ctx.use_binding(EditState::default);
    let password = ctx.use_binding(String::new);
    let search_state = ctx.use_binding(EditState::default);
    let search = ctx.use_binding(String::new);

    let email_highlight = email.with(|value| {
        if value.is_empty() {
            TextFieldHighlight::Default
        } else if value.contains('@') {
            TextFieldHighlight::Success
        } else {
            TextFieldHighlight::Error
        }
    });

    let search_style = TextFieldStyle {
        misc: TextFieldMisc {
            clear_button: true,
            cancel_label: Some(String::from("Cancel")),
        },
        ..TextFieldStyle::default()
    };

    Element::vstack(vec![
        Element::colored_text(
            "Click a field to edit, Esc blurs, Enter submits",
            Color::DarkGray,
        ),
        TextField::new("fields.email", email_state, email)
            .header("Email")
            .footer("Used for sign-in only")
            .placeholder("you@example.com")
            .highlight(email_highlight)
            .on_return(ReturnButtonAction::BlurAndCustom(std::sync::Arc::new(
                || info!("email submitted"),
            )))
            .into_element(ctx),
        TextField::new("fields.password", password_state, password)
            .kind(TextFieldKind::Secure)
            .header("Password")
            .placeholder("secret")
            .into_element(ctx),
        TextField::new("fields.search", search_state, search)
            .kind(TextFieldKind::Search)
            .placeholder("Search components")
            .style(search_style)
            .on_clear(ClearButtonAction::ClearAndCustom(std::sync::Arc::new(
                || info!("search cleared"),
            )))
            .on_cancel(CancelButtonAction::Clear)
            .into_element(ctx),
    ])
}

fn credits_screen() -> Element {
    Element::vstack(vec![
        Element::text("A declarative terminal component kit."),
        Element::colored_text("Built on ratatui, crossterm and tokio.", Color::DarkGray),
    ])
}

fn is_right_key(event: &FrameworkEvent) -> bool {
    matches!(event, FrameworkEvent::Key(key) if key.code == KeyCode::Right)
}

fn is_left_key(event: &FrameworkEvent) -> bool {
    matches!(event, FrameworkEvent::Key(key) if key.code == KeyCode::Left)
}
