use ratatui::style::{Color, Modifier, Style};

/// Colours used by every view. All are `Rgb` so they can be faded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub kicker: Color,
    pub border: Color,
    pub selection: Color,
    pub code: Color,
    pub callout: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(18, 20, 28),
            foreground: Color::Rgb(226, 228, 236),
            muted: Color::Rgb(140, 146, 166),
            accent: Color::Rgb(122, 162, 247),
            kicker: Color::Rgb(187, 154, 247),
            border: Color::Rgb(60, 66, 88),
            selection: Color::Rgb(40, 44, 60),
            code: Color::Rgb(158, 206, 106),
            callout: Color::Rgb(224, 175, 104),
        }
    }
}

impl Theme {
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn text(&self, fg: Color) -> Style {
        Style::default().fg(fg)
    }

    pub fn bold(&self, fg: Color) -> Style {
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Blends `color` towards the background; `opacity` 0 is invisible.
    pub fn fade(&self, color: Color, opacity: f32) -> Color {
        blend(self.background, color, opacity)
    }

    /// Applies [`Theme::fade`] to the foreground and background of `style`.
    pub fn fade_style(&self, style: Style, opacity: f32) -> Style {
        if opacity >= 1.0 {
            return style;
        }
        let mut faded = style;
        if let Some(fg) = style.fg {
            faded = faded.fg(self.fade(fg, opacity));
        }
        if let Some(bg) = style.bg {
            faded = faded.bg(self.fade(bg, opacity));
        }
        faded
    }
}

fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
            mix(r0, r1, t),
            mix(g0, g1, t),
            mix(b0, b1, t),
        ),
        _ if t < 0.5 => from,
        _ => to,
    }
}

fn mix(from: u8, to: u8, t: f32) -> u8 {
    let value = f32::from(from) + (f32::from(to) - f32::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use ratatui::style::{Color, Style};

    use super::Theme;

    #[test]
    fn fade_interpolates_between_background_and_colour() {
        let theme = Theme {
            background: Color::Rgb(0, 0, 0),
            ..Theme::default()
        };
        let color = Color::Rgb(200, 100, 50);

        assert_eq!(theme.fade(color, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(theme.fade(color, 1.0), color);
        assert_eq!(theme.fade(color, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn named_colours_snap_at_half_opacity() {
        let theme = Theme::default();
        assert_eq!(theme.fade(Color::Red, 0.2), theme.background);
        assert_eq!(theme.fade(Color::Red, 0.8), Color::Red);
    }

    #[test]
    fn fully_opaque_style_is_untouched() {
        let theme = Theme::default();
        let style = Style::default().fg(Color::Red);
        assert_eq!(theme.fade_style(style, 1.0), style);
    }
}
