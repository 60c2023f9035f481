use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Column, button, row, text};
use iced::{Background, Border, Element, Length, Theme, alignment};

use crate::glyph::{indicator_glyph, visibility_glyph};
use crate::model::{
    Translator, Visibility, VisibilityOption, current_option,
    visibility_options,
};
use crate::panel::floating_panel;
use crate::settings::SelectorMetrics;
use crate::state::{SelectorEvent, SelectorState};

/// Style hook for the trigger button.
pub type TriggerStyle = fn(&Theme, ButtonStatus) -> button::Style;
/// Style hook for option rows. The flag is `true` for the selected row.
pub type RowStyle = fn(&Theme, ButtonStatus, bool) -> button::Style;

type GlyphRenderer<'a> =
    dyn Fn(Visibility, f32) -> Element<'a, SelectorEvent> + 'a;
type EventMapper<'a, Message> = dyn Fn(SelectorEvent) -> Message + 'a;

/// View helper for the visibility selector.
///
/// The caller owns both the value and the [`SelectorState`]; the view only
/// reads them. Build it once for [`VisibilitySelector::view`] (the trigger)
/// and once for [`VisibilitySelector::panel`] (the overlay), and feed the
/// emitted [`SelectorEvent`]s back into [`SelectorState::update`].
pub struct VisibilitySelector<'a, Message: 'a> {
    state: &'a SelectorState,
    value: Visibility,
    translator: &'a dyn Translator,
    on_event: Box<EventMapper<'a, Message>>,
    glyph: Option<Box<GlyphRenderer<'a>>>,
    trigger_style: TriggerStyle,
    row_style: RowStyle,
    metrics: SelectorMetrics,
}

impl<'a, Message> VisibilitySelector<'a, Message>
where
    Message: Clone + 'a,
{
    pub fn new(
        state: &'a SelectorState,
        value: Visibility,
        translator: &'a dyn Translator,
        on_event: impl Fn(SelectorEvent) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            value,
            translator,
            on_event: Box::new(on_event),
            glyph: None,
            trigger_style,
            row_style,
            metrics: SelectorMetrics::default(),
        }
    }

    /// Replace the default SVG glyphs.
    pub fn glyph(
        mut self,
        glyph: impl Fn(Visibility, f32) -> Element<'a, SelectorEvent> + 'a,
    ) -> Self {
        self.glyph = Some(Box::new(glyph));
        self
    }

    pub fn trigger_style(mut self, style: TriggerStyle) -> Self {
        self.trigger_style = style;
        self
    }

    pub fn row_style(mut self, style: RowStyle) -> Self {
        self.row_style = style;
        self
    }

    pub fn metrics(mut self, metrics: SelectorMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Label shown by the trigger: the current option's label, or an empty
    /// string when `value` is not a selectable option.
    pub fn trigger_label(&self) -> String {
        let options = visibility_options(self.translator);
        current_option(&options, self.value)
            .map(|option| option.label.clone())
            .unwrap_or_default()
    }

    /// Options in render order, paired with their selected flag.
    pub fn rows(&self) -> Vec<(VisibilityOption, bool)> {
        visibility_options(self.translator)
            .into_iter()
            .map(|option| {
                let is_selected = option.value == self.value;
                (option, is_selected)
            })
            .collect()
    }

    /// Build the trigger element.
    pub fn view(self) -> Element<'a, Message> {
        let metrics = self.metrics;
        let style = self.trigger_style;

        let content = row![
            self.render_glyph(self.value),
            text(self.trigger_label()).size(metrics.font_size),
            indicator_glyph(metrics.glyph_size),
        ]
        .spacing(metrics.content_spacing)
        .align_y(alignment::Vertical::Center);

        let trigger: Element<'a, SelectorEvent> = button(content)
            .padding(metrics.trigger_padding)
            .on_press(SelectorEvent::TriggerPressed)
            .style(move |theme, status| style(theme, status))
            .into();

        trigger.map(self.on_event)
    }

    /// Build the floating panel, or `None` while the selector is closed.
    pub fn panel(self) -> Option<Element<'a, Message>> {
        if !self.state.is_open() {
            return None;
        }

        let metrics = self.metrics;
        let rows = self
            .rows()
            .into_iter()
            .fold(Column::new(), |column, (option, is_selected)| {
                column.push(self.option_row(option, is_selected))
            })
            .spacing(metrics.row_spacing)
            .width(Length::Fill);

        let panel = floating_panel(
            rows,
            metrics.placement,
            metrics.panel_width,
            metrics.panel_padding,
            SelectorEvent::Dismissed,
        );

        Some(panel.map(self.on_event))
    }

    fn option_row(
        &self,
        option: VisibilityOption,
        is_selected: bool,
    ) -> Element<'a, SelectorEvent> {
        let metrics = self.metrics;
        let style = self.row_style;

        let content = row![
            self.render_glyph(option.value),
            text(option.label).size(metrics.font_size),
        ]
        .spacing(metrics.content_spacing)
        .align_y(alignment::Vertical::Center);

        button(content)
            .padding(metrics.row_padding)
            .width(Length::Fill)
            .on_press(SelectorEvent::OptionPressed(option.value))
            .style(move |theme, status| style(theme, status, is_selected))
            .into()
    }

    fn render_glyph(&self, value: Visibility) -> Element<'a, SelectorEvent> {
        match self.glyph.as_ref() {
            Some(glyph) => glyph(value, self.metrics.glyph_size),
            None => visibility_glyph(value, self.metrics.glyph_size),
        }
    }
}

/// Default trigger style: transparent until hovered.
pub fn trigger_style(theme: &Theme, status: ButtonStatus) -> button::Style {
    let palette = theme.extended_palette();
    let background: Option<Background> = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => {
            Some(palette.background.weak.color.into())
        },
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Default row style: the selected row keeps the hover background.
pub fn row_style(
    theme: &Theme,
    status: ButtonStatus,
    is_selected: bool,
) -> button::Style {
    let palette = theme.extended_palette();
    let highlighted = is_selected
        || matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);
    let background: Option<Background> =
        highlighted.then(|| palette.background.weak.color.into());

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
