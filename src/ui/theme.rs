//! Color palette for the three charts, carried over from the source
//! dashboard: purple fills, an orange accent for selected records, muted
//! grays for default strokes.

use ratatui::style::Color;

/// Bar fill.
pub const COLOR_BAR: Color = Color::Rgb(0xb0, 0x9a, 0xec);

/// Fill of the bar matching the active gender filter.
pub const COLOR_BAR_ACTIVE: Color = Color::Rgb(0x6c, 0x5c, 0xe7);

/// Default-tier timeline stroke.
pub const COLOR_ARROW: Color = Color::Rgb(0x6e, 0x6e, 0x6e);

/// Hovered default-tier stroke and arrowhead.
pub const COLOR_ARROW_HOVER: Color = Color::Rgb(0xdd, 0xdd, 0xdd);

/// Highlighted-tier stroke (leaders of interest).
pub const COLOR_HIGHLIGHT: Color = Color::Rgb(0xb0, 0x9a, 0xec);

/// Selected-tier accent, shared by the timeline and the scatter.
pub const COLOR_SELECTED: Color = Color::Rgb(0xf8, 0xa6, 0x0e);

/// Scatter point fill.
pub const COLOR_POINT: Color = Color::Rgb(0x5d, 0x29, 0xea);

/// Hovered, unselected scatter point fill.
pub const COLOR_POINT_HOVER: Color = Color::Rgb(0x9d, 0x7b, 0xf5);

/// Off-gender scatter points (the low-opacity rendering of the source).
pub const COLOR_POINT_DIM: Color = Color::Rgb(0x2e, 0x24, 0x52);

/// Chart borders.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Chart titles and tab highlights.
pub const COLOR_ACCENT: Color = Color::White;

/// Axis annotations and secondary text.
pub const COLOR_DIM: Color = Color::DarkGray;
