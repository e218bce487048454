use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text styled with a name the theme does not know, so typos in templates show up.
const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named `console` styles looked up by the `style` template filter.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Same lookup as [`Theme::apply`] without emitting ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

pub static TODOZ_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("heading", Style::new().bold())
        .add("id", Style::new().yellow())
        .add("check_done", Style::new().green())
        .add("check_open", Style::new())
        .add("title_done", Style::new().dim().strikethrough())
        .add("title_open", Style::new())
        .add("time", Style::new().color256(247).italic())
        .add("label", Style::new().dim())
        .add("value", Style::new().bold())
        .add("usage", Style::new().cyan())
        .add("muted", Style::new().dim())
        .add("info", Style::new().dim())
        .add("success", Style::new().green())
        .add("warning", Style::new().yellow())
        .add("error", Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_style_applies_ansi() {
        let theme = Theme::new().add("bold", Style::new().bold().force_styling(true));
        let out = theme.apply("bold", "hi");
        assert!(out.contains("\x1b["));
        assert!(out.contains("hi"));
    }

    #[test]
    fn plain_mode_passes_text_through() {
        assert_eq!(TODOZ_THEME.apply_plain("success", "done"), "done");
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(TODOZ_THEME.apply_plain("nope", "x"), "(!?) x");
        assert!(TODOZ_THEME.apply("nope", "x").starts_with("(!?)"));
    }
}
