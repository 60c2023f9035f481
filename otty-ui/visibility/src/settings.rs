use crate::panel::PanelPlacement;

const DEFAULT_FONT_SIZE: f32 = 12.0;
const DEFAULT_GLYPH_SIZE: f32 = 12.0;
const DEFAULT_CONTENT_SPACING: f32 = 4.0;
const DEFAULT_TRIGGER_PADDING: [f32; 2] = [1.0, 2.0];
const DEFAULT_ROW_PADDING: [f32; 2] = [4.0, 4.0];
const DEFAULT_ROW_SPACING: f32 = 2.0;
const DEFAULT_PANEL_WIDTH: f32 = 140.0;
const DEFAULT_PANEL_PADDING: f32 = 4.0;

/// Sizing used by the trigger, the option rows and the floating panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorMetrics {
    pub font_size: f32,
    pub glyph_size: f32,
    /// Gap between glyph, label and indicator in the trigger and the rows.
    pub content_spacing: f32,
    /// `[vertical, horizontal]`
    pub trigger_padding: [f32; 2],
    /// `[vertical, horizontal]`
    pub row_padding: [f32; 2],
    pub row_spacing: f32,
    pub panel_width: f32,
    pub panel_padding: f32,
    pub placement: PanelPlacement,
}

impl Default for SelectorMetrics {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            glyph_size: DEFAULT_GLYPH_SIZE,
            content_spacing: DEFAULT_CONTENT_SPACING,
            trigger_padding: DEFAULT_TRIGGER_PADDING,
            row_padding: DEFAULT_ROW_PADDING,
            row_spacing: DEFAULT_ROW_SPACING,
            panel_width: DEFAULT_PANEL_WIDTH,
            panel_padding: DEFAULT_PANEL_PADDING,
            placement: PanelPlacement::default(),
        }
    }
}

impl SelectorMetrics {
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size.max(1.0);
        self
    }

    pub fn with_glyph_size(mut self, size: f32) -> Self {
        self.glyph_size = size.max(1.0);
        self
    }

    pub fn with_panel_width(mut self, width: f32) -> Self {
        self.panel_width = width.max(0.0);
        self
    }

    pub fn with_placement(mut self, placement: PanelPlacement) -> Self {
        self.placement = placement;
        self
    }
}
