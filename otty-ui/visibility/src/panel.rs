use iced::widget::{container, mouse_area, opaque, stack, text};
use iced::{Border, Element, Length, Padding, Shadow, Theme, Vector, alignment};

/// Horizontal edge the panel is pinned to, with its distance from that
/// edge of the host area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEdge {
    Left(f32),
    Right(f32),
}

/// Where the floating panel is placed inside the host area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub top: f32,
    pub edge: PanelEdge,
}

impl Default for PanelPlacement {
    fn default() -> Self {
        Self {
            top: 0.0,
            edge: PanelEdge::Left(0.0),
        }
    }
}

impl PanelPlacement {
    fn padding(self) -> Padding {
        let (left, right) = match self.edge {
            PanelEdge::Left(offset) => (offset.max(0.0), 0.0),
            PanelEdge::Right(offset) => (0.0, offset.max(0.0)),
        };

        Padding {
            top: self.top.max(0.0),
            right,
            bottom: 0.0,
            left,
        }
    }

    fn align_x(self) -> alignment::Horizontal {
        match self.edge {
            PanelEdge::Left(_) => alignment::Horizontal::Left,
            PanelEdge::Right(_) => alignment::Horizontal::Right,
        }
    }
}

/// Overlay with a full-area dismiss layer under a positioned panel.
///
/// Any press that misses the panel emits `on_dismiss`. Presses on the panel
/// background or between its rows are absorbed. The result is meant to be
/// stacked over the host content, filling it.
pub fn floating_panel<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    placement: PanelPlacement,
    width: f32,
    padding: f32,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let panel = opaque(
        container(content)
            .padding(padding)
            .width(Length::Fixed(width))
            .style(panel_style),
    );

    let positioned = container(panel)
        .padding(placement.padding())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(placement.align_x())
        .align_y(alignment::Vertical::Top);

    let dismiss_layer =
        mouse_area(container(text("")).width(Length::Fill).height(Length::Fill))
            .on_press(on_dismiss.clone())
            .on_right_press(on_dismiss);

    stack!(dismiss_layer, positioned)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

pub(crate) fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: iced::Color {
                a: 0.2,
                ..iced::Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}
