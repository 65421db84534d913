// File: crates/plot-core/src/theme.rs
// Summary: Named color palettes for chart rendering.

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub bar_fill: Color,
    pub bar_stroke: Color,
    pub curve_fill: Color,
    pub curve_stroke: Color,
    pub pair_base_fill: Color,
    pub pair_value_fill: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub title: Color,
    pub legend: Color,
    /// Resting opacity of data shapes.
    pub shape_opacity: f64,
    /// Opacity applied to shapes dimmed by a hover on a sibling.
    pub dim_opacity: f64,
}

impl Theme {
    /// Mint palette used by the bar and comparison charts of the dashboard.
    pub fn mint() -> Self {
        Self {
            name: "mint",
            bar_fill: Color::from_argb(255, 0x20, 0xc9, 0x97),
            bar_stroke: Color::WHITE,
            curve_fill: Color::from_argb(255, 0x20, 0xc9, 0x97),
            curve_stroke: Color::WHITE,
            pair_base_fill: Color::WHITE,
            pair_value_fill: Color::from_argb(255, 0x20, 0xc9, 0x97),
            axis_line: Color::from_argb(255, 0x21, 0x25, 0x29),
            axis_label: Color::from_argb(255, 0x21, 0x25, 0x29),
            title: Color::from_argb(255, 0x21, 0x25, 0x29),
            legend: Color::from_argb(255, 0x21, 0x25, 0x29),
            shape_opacity: 0.8,
            dim_opacity: 0.2,
        }
    }

    /// Moss palette of the standalone age-density view.
    pub fn moss() -> Self {
        Self {
            name: "moss",
            bar_fill: Color::from_argb(255, 0x69, 0xb3, 0xa2),
            bar_stroke: Color::BLACK,
            curve_fill: Color::from_argb(255, 0x69, 0xb3, 0xa2),
            curve_stroke: Color::BLACK,
            pair_base_fill: Color::from_argb(255, 0xee, 0xee, 0xee),
            pair_value_fill: Color::from_argb(255, 0x69, 0xb3, 0xa2),
            axis_line: Color::from_argb(255, 0x21, 0x25, 0x29),
            axis_label: Color::from_argb(255, 0x21, 0x25, 0x29),
            title: Color::from_argb(255, 0x21, 0x25, 0x29),
            legend: Color::from_argb(255, 0x21, 0x25, 0x29),
            shape_opacity: 0.8,
            dim_opacity: 0.2,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::mint()
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::mint(), Theme::moss()]
}

/// Find a theme by its `name`, falling back to mint.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::mint()
}
