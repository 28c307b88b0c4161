use super::ThemeVariant;

/// Guesses light vs dark from the terminal background. Falls back to dark.
pub fn detect_terminal_theme() -> ThemeVariant {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => ThemeVariant::Light,
        _ => ThemeVariant::Dark,
    }
}
