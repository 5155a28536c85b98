use ratatui::style::Color;

/// Colour roles used by the home screen and the dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub outline_variant: Color,
    pub primary: Color,
    pub highlight: Color,
    pub ripple: Color,
    pub text_dim: Color,
}

pub const DARK: Theme = Theme {
    background: Color::Rgb(20, 18, 24),       // #141218
    on_background: Color::Rgb(230, 224, 233), // #E6E0E9
    surface: Color::Rgb(33, 31, 38),          // #211F26
    on_surface: Color::Rgb(230, 224, 233),    // #E6E0E9
    outline_variant: Color::Rgb(73, 69, 79),  // #49454F
    primary: Color::Rgb(208, 188, 255),       // #D0BCFF
    highlight: Color::Rgb(54, 52, 59),        // #36343B
    ripple: Color::Rgb(98, 91, 113),          // #625B71
    text_dim: Color::Rgb(147, 143, 153),      // #938F99
};

pub const LIGHT: Theme = Theme {
    background: Color::Rgb(254, 247, 255),     // #FEF7FF
    on_background: Color::Rgb(29, 27, 32),     // #1D1B20
    surface: Color::Rgb(243, 237, 247),        // #F3EDF7
    on_surface: Color::Rgb(29, 27, 32),        // #1D1B20
    outline_variant: Color::Rgb(202, 196, 208), // #CAC4D0
    primary: Color::Rgb(103, 80, 164),         // #6750A4
    highlight: Color::Rgb(230, 224, 233),      // #E6E0E9
    ripple: Color::Rgb(204, 194, 220),         // #CCC2DC
    text_dim: Color::Rgb(121, 116, 126),       // #79747E
};

impl Default for Theme {
    fn default() -> Self {
        DARK
    }
}

impl Theme {
    /// Look up a theme by its config name. Unknown names fall back to dark.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => LIGHT,
            _ => DARK,
        }
    }
}

/// Mix `from` towards `to` by `t` (0.0 ..= 1.0).
///
/// Only RGB colours can be mixed; anything else switches over at the halfway point.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("light"), LIGHT);
        assert_eq!(Theme::by_name("Dark"), DARK);
        assert_eq!(Theme::by_name("solarized"), DARK);
    }

    #[test]
    fn test_blend() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(blend(black, white, 0.0), black);
        assert_eq!(blend(black, white, 1.0), white);
        assert_eq!(blend(black, white, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(blend(Color::Red, Color::Blue, 0.2), Color::Red);
        assert_eq!(blend(Color::Red, Color::Blue, 0.7), Color::Blue);
    }
}
