use iced::widget::svg;
use iced::{Color, Element, Length, Theme};

use crate::model::Visibility;

pub(crate) const LOCK: &[u8] = include_bytes!("../assets/svg/lock.svg");
pub(crate) const USERS: &[u8] = include_bytes!("../assets/svg/users.svg");
pub(crate) const GLOBE: &[u8] = include_bytes!("../assets/svg/globe.svg");
pub(crate) const HELP_CIRCLE: &[u8] =
    include_bytes!("../assets/svg/help-circle.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../assets/svg/chevron-down.svg");

const INDICATOR_OPACITY: f32 = 0.6;

/// Icon bytes for a visibility value. Values outside the selectable set
/// get a generic help glyph.
pub fn icon_for(value: Visibility) -> &'static [u8] {
    match value.canonical() {
        Visibility::Private => LOCK,
        Visibility::Protected => USERS,
        Visibility::Public => GLOBE,
        Visibility::Unspecified | Visibility::Unrecognized(_) => HELP_CIRCLE,
    }
}

/// Default glyph renderer.
pub fn visibility_glyph<'a, Message: 'a>(
    value: Visibility,
    size: f32,
) -> Element<'a, Message> {
    icon(icon_for(value), size, 1.0)
}

/// Static indicator shown at the end of the trigger.
pub fn indicator_glyph<'a, Message: 'a>(size: f32) -> Element<'a, Message> {
    icon(CHEVRON_DOWN, size, INDICATOR_OPACITY)
}

fn icon<'a, Message: 'a>(
    bytes: &'static [u8],
    size: f32,
    opacity: f32,
) -> Element<'a, Message> {
    svg::Svg::new(svg::Handle::from_memory(bytes))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |theme: &Theme, _| svg::Style {
            color: Some(glyph_color(theme, opacity)),
        })
        .into()
}

fn glyph_color(theme: &Theme, opacity: f32) -> Color {
    let text = theme.extended_palette().background.base.text;
    Color {
        a: text.a * opacity,
        ..text
    }
}
