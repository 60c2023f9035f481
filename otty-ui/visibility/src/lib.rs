//! Controlled visibility selector for [`iced`].
//!
//! The crate is split the same way as the other OTTY widgets:
//! - model helpers ([`Visibility`], [`visibility_options`], [`Translator`])
//!   that are UI-agnostic;
//! - interaction state ([`SelectorState`]) that owns only the open/closed
//!   flag and turns [`SelectorEvent`]s into ordered [`Notification`]s;
//! - view helpers ([`VisibilitySelector`], [`floating_panel`]) that render
//!   the trigger and the option panel.
//!
//! The selected value always lives in your app state. A selection never
//! changes what the trigger shows until you store the reported value and
//! render again.
//!
//! See `examples/visibility_selector.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::Element;
//! use iced::widget::{column, stack};
//! use otty_ui_visibility::{
//!     Catalog, Notification, SelectorEvent, SelectorState, Visibility,
//!     VisibilitySelector,
//! };
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Selector(SelectorEvent),
//! }
//!
//! struct State {
//!     visibility: Visibility,
//!     selector: SelectorState,
//!     catalog: Catalog,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::Selector(event) => {
//!             for notification in state.selector.update(event) {
//!                 if let Notification::Changed(value) = notification {
//!                     state.visibility = value;
//!                 }
//!             }
//!         },
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     let selector = || {
//!         VisibilitySelector::new(
//!             &state.selector,
//!             state.visibility,
//!             &state.catalog,
//!             Message::Selector,
//!         )
//!     };
//!
//!     let content = column![selector().view()];
//!     match selector().panel() {
//!         Some(panel) => stack![content, panel].into(),
//!         None => content.into(),
//!     }
//! }
//! ```

mod catalog;
mod errors;
mod glyph;
mod model;
mod panel;
mod settings;
mod state;
mod view;

pub use catalog::Catalog;
pub use errors::{CatalogError, VisibilityParseError};
pub use glyph::{icon_for, indicator_glyph, visibility_glyph};
pub use model::{
    Translator, Visibility, VisibilityOption, current_option,
    visibility_options,
};
pub use panel::{PanelEdge, PanelPlacement, floating_panel};
pub use settings::SelectorMetrics;
pub use state::{
    Notification, SelectorEvent, SelectorHandlers, SelectorState,
    dismiss_on_key,
};
pub use view::{
    RowStyle, TriggerStyle, VisibilitySelector, row_style, trigger_style,
};
