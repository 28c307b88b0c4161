use super::{ResolvedTheme, Theme, ThemeColor, ThemeColors, ThemeVariant};

pub fn all_themes() -> Vec<Theme> {
    vec![default_dark(), default_light(), monokai(), nord()]
}

pub fn by_name(name: &str) -> Option<Theme> {
    all_themes().into_iter().find(|t| t.name == name)
}

pub fn default_for_variant(variant: ThemeVariant) -> ResolvedTheme {
    match variant {
        ThemeVariant::Dark => default_dark().into(),
        ThemeVariant::Light => default_light().into(),
    }
}

fn named(s: &str) -> ThemeColor {
    ThemeColor::Named(s.to_string())
}

fn hex(s: &str) -> ThemeColor {
    ThemeColor::Hex(s.to_string())
}

pub fn default_dark() -> Theme {
    Theme {
        name: "default-dark".to_string(),
        variant: ThemeVariant::Dark,
        colors: ThemeColors {
            foreground: named("white"),
            foreground_dim: hex("#8A8A8A"),
            border: hex("#6A6A6A"),
            selection_bg: named("darkgray"),
            primary: hex("#FF4E45"),
            error: named("red"),
            video_title: named("white"),
            video_channel: named("cyan"),
            view_count: hex("#FF8C42"),
            gold: hex("#FFD700"),
            silver: hex("#C0C0C0"),
            bronze: hex("#CD7F32"),
            status_bar_bg: hex("#CC0000"),
            status_bar_fg: named("white"),
            spinner: hex("#FF8C42"),
        },
    }
}

pub fn default_light() -> Theme {
    Theme {
        name: "default-light".to_string(),
        variant: ThemeVariant::Light,
        colors: ThemeColors {
            foreground: named("black"),
            foreground_dim: hex("#6B6B6B"),
            border: hex("#A0A0A0"),
            selection_bg: hex("#E4E4E4"),
            primary: hex("#CC0000"),
            error: hex("#B00020"),
            video_title: named("black"),
            video_channel: hex("#005F87"),
            view_count: hex("#C05600"),
            gold: hex("#B8860B"),
            silver: hex("#707070"),
            bronze: hex("#8B4513"),
            status_bar_bg: hex("#CC0000"),
            status_bar_fg: named("white"),
            spinner: hex("#C05600"),
        },
    }
}

pub fn monokai() -> Theme {
    Theme {
        name: "monokai".to_string(),
        variant: ThemeVariant::Dark,
        colors: ThemeColors {
            foreground: hex("#F8F8F2"),
            foreground_dim: hex("#75715E"),
            border: hex("#75715E"),
            selection_bg: hex("#49483E"),
            primary: hex("#F92672"),
            error: hex("#F92672"),
            video_title: hex("#F8F8F2"),
            video_channel: hex("#66D9EF"),
            view_count: hex("#A6E22E"),
            gold: hex("#E6DB74"),
            silver: hex("#CFCFC2"),
            bronze: hex("#FD971F"),
            status_bar_bg: hex("#49483E"),
            status_bar_fg: hex("#F8F8F2"),
            spinner: hex("#E6DB74"),
        },
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        variant: ThemeVariant::Dark,
        colors: ThemeColors {
            foreground: hex("#ECEFF4"),
            foreground_dim: hex("#4C566A"),
            border: hex("#4C566A"),
            selection_bg: hex("#3B4252"),
            primary: hex("#88C0D0"),
            error: hex("#BF616A"),
            video_title: hex("#ECEFF4"),
            video_channel: hex("#81A1C1"),
            view_count: hex("#A3BE8C"),
            gold: hex("#EBCB8B"),
            silver: hex("#D8DEE9"),
            bronze: hex("#D08770"),
            status_bar_bg: hex("#3B4252"),
            status_bar_fg: hex("#ECEFF4"),
            spinner: hex("#EBCB8B"),
        },
    }
}
