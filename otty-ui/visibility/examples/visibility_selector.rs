use std::fs;

use iced::widget::{column, container, row, stack, text};
use iced::{Element, Length, Subscription, keyboard};
use otty_ui_visibility::{
    Catalog, Notification, PanelEdge, PanelPlacement, SelectorEvent,
    SelectorMetrics, SelectorState, Visibility, VisibilitySelector,
    dismiss_on_key,
};

const TOOLBAR_HEIGHT: f32 = 32.0;
const TOOLBAR_PADDING: f32 = 8.0;

#[derive(Debug, Clone)]
enum Message {
    Selector(SelectorEvent),
    Keyboard(keyboard::Event),
}

struct AppState {
    visibility: Visibility,
    selector: SelectorState,
    catalog: Catalog,
    history: Vec<Visibility>,
}

impl AppState {
    fn new() -> Self {
        Self {
            visibility: Visibility::Private,
            selector: SelectorState::new(),
            catalog: load_catalog(),
            history: Vec::new(),
        }
    }

    fn selector(&self) -> VisibilitySelector<'_, Message> {
        let placement = PanelPlacement {
            top: TOOLBAR_HEIGHT,
            edge: PanelEdge::Right(TOOLBAR_PADDING),
        };

        VisibilitySelector::new(
            &self.selector,
            self.visibility,
            &self.catalog,
            Message::Selector,
        )
        .metrics(SelectorMetrics::default().with_placement(placement))
    }
}

/// Optional first argument: path to a JSON locale document.
fn load_catalog() -> Catalog {
    let Some(path) = std::env::args().nth(1) else {
        return Catalog::default();
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            log::warn!("locale read failed for {path}: {err}");
            return Catalog::default();
        },
    };

    match Catalog::from_json(&source) {
        Ok(catalog) => catalog.with_fallback(Catalog::default()),
        Err(err) => {
            log::warn!("locale parse failed for {path}: {err}");
            Catalog::default()
        },
    }
}

fn update(state: &mut AppState, message: Message) {
    let event = match message {
        Message::Selector(event) => event,
        Message::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            match dismiss_on_key(&key) {
                Some(event) => event,
                None => return,
            }
        },
        Message::Keyboard(_) => return,
    };

    for notification in state.selector.update(event) {
        match notification {
            Notification::Changed(value) => {
                log::info!("visibility changed to {value}");
                state.visibility = value;
                state.history.push(value);
            },
            Notification::OpenChanged(open) => {
                log::debug!("visibility panel open={open}");
            },
        }
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    let toolbar = container(
        row![
            text("Memo draft").width(Length::Fill),
            state.selector().view(),
        ]
        .spacing(8),
    )
    .padding(TOOLBAR_PADDING)
    .width(Length::Fill);

    let history = state
        .history
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" → ");

    let content = column![toolbar, text(format!("History: {history}"))]
        .spacing(12)
        .width(Length::Fill)
        .height(Length::Fill);

    match state.selector().panel() {
        Some(panel) => stack![content, panel].into(),
        None => content.into(),
    }
}

fn subscription(_state: &AppState) -> Subscription<Message> {
    keyboard::listen().map(Message::Keyboard)
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application(AppState::new, update, view)
        .subscription(subscription)
        .run()
}
