use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Colors {
    pub primary_base: String,
    pub text: String,
    pub background: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary_base: String::from("#0c7fe7"),
            text: String::from("#1b1f24"),
            background: String::from("#ffffff"),
        }
    }
}

/// CSS declarations, sorted by property name.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<P: Into<String>, V: Into<String>>(mut self, property: P, value: V) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Later declarations win on conflicting properties.
    pub fn merged(&self, other: &Style) -> Style {
        let mut merged = self.clone();
        merged.0.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    pub fn to_css(&self) -> String {
        self.0.iter().fold(String::new(), |mut css, (property, value)| {
            if !css.is_empty() {
                css.push(' ');
            }
            let _ = write!(css, "{property}: {value};");
            css
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub colors: Colors,
    pub breakpoints: Vec<String>,
    /// Pixel sizes, indexed by scale step.
    pub font_sizes: Vec<u32>,
    /// Pixel sizes, indexed by scale step.
    pub space: Vec<u32>,
    /// Named link variants, looked up as `links.<name>`.
    pub links: BTreeMap<String, Style>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Colors::default(),
            breakpoints: vec![
                String::from("40em"),
                String::from("52em"),
                String::from("64em"),
            ],
            font_sizes: vec![12, 14, 16, 20, 24, 32, 48, 64, 96],
            space: vec![0, 4, 8, 16, 32, 64, 128, 256, 512],
            links: BTreeMap::from([(
                String::from("topNav"),
                Style::new()
                    .with("color", "inherit")
                    .with("text-decoration", "none")
                    .with("letter-spacing", "0.05em"),
            )]),
        }
    }
}

impl Theme {
    pub fn from_toml(raw: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let theme = Self::from_toml(&std::fs::read_to_string(path)?)?;
        tracing::debug!("Loaded theme from {}", path.display());
        Ok(theme)
    }

    /// Resolves a dotted variant name such as `links.topNav`.
    pub fn variant(&self, name: &str) -> Option<&Style> {
        match name.split_once('.') {
            Some(("links", key)) => self.links.get(key),
            _ => None,
        }
    }

    pub fn font_size(&self, step: usize) -> Option<String> {
        self.font_sizes.get(step).map(|px| format!("{px}px"))
    }

    pub fn space(&self, step: usize) -> Option<String> {
        self.space.get(step).map(|px| format!("{px}px"))
    }
}

/// Builds CSS for one property whose value changes with the viewport.
///
/// `values[0]` is the base value and `values[i]` applies from `breakpoints[i - 1]`
/// upward. `None` skips that step. Values past the last breakpoint are ignored.
pub fn responsive_css(
    theme: &Theme,
    selector: &str,
    property: &str,
    values: &[Option<String>],
) -> String {
    let mut css = String::new();
    for (step, value) in values.iter().enumerate() {
        let Some(value) = value else { continue };
        if step == 0 {
            let _ = writeln!(css, "{selector} {{ {property}: {value}; }}");
        } else if let Some(breakpoint) = theme.breakpoints.get(step - 1) {
            let _ = writeln!(
                css,
                "@media screen and (min-width: {breakpoint}) {{ {selector} {{ {property}: {value}; }} }}"
            );
        }
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_top_nav_variant() {
        let theme = Theme::default();
        assert!(theme.variant("links.topNav").is_some());
        assert!(theme.variant("links.missing").is_none());
        assert!(theme.variant("buttons.topNav").is_none());
        assert!(theme.variant("topNav").is_none());
    }

    #[test]
    fn parses_camel_case_toml() {
        let theme = Theme::from_toml(
            r##"
breakpoints = ["30em"]
fontSizes = [10, 20]

[colors]
primaryBase = "#ff0066"

[links.topNav]
color = "black"
"text-transform" = "none"
"##,
        )
        .unwrap();
        assert_eq!(theme.colors.primary_base, "#ff0066");
        assert_eq!(theme.colors.text, Colors::default().text);
        assert_eq!(theme.breakpoints, ["30em"]);
        assert_eq!(theme.font_size(1).as_deref(), Some("20px"));
        assert_eq!(theme.space, Theme::default().space);
        assert_eq!(
            theme.variant("links.topNav").unwrap().to_css(),
            "color: black; text-transform: none;"
        );
    }

    #[test]
    fn bad_toml_is_reported() {
        assert!(matches!(
            Theme::from_toml("breakpoints = 3"),
            Err(AppError::Toml(_))
        ));
    }

    #[test]
    fn merged_style_overrides_conflicts() {
        let base = Style::new().with("color", "inherit").with("font-weight", "bold");
        let active = Style::new().with("color", "#0c7fe7");
        let merged = base.merged(&active);
        assert_eq!(merged.to_css(), "color: #0c7fe7; font-weight: bold;");
    }

    #[test]
    fn responsive_values_follow_breakpoints() {
        let theme = Theme::default();
        let css = responsive_css(
            &theme,
            ".top-nav",
            "display",
            &[Some(String::from("none")), Some(String::from("flex"))],
        );
        assert_eq!(
            css,
            ".top-nav { display: none; }\n\
             @media screen and (min-width: 40em) { .top-nav { display: flex; } }\n"
        );
    }

    #[test]
    fn responsive_skips_missing_steps() {
        let theme = Theme::default();
        let css = responsive_css(
            &theme,
            "li",
            "padding-right",
            &[None, theme.space(5), theme.space(6), Some(String::from("1px")), Some(String::from("2px"))],
        );
        assert!(!css.starts_with("li {"));
        assert!(css.contains("(min-width: 40em) { li { padding-right: 64px; } }"));
        assert!(css.contains("(min-width: 52em) { li { padding-right: 128px; } }"));
        assert!(css.contains("(min-width: 64em) { li { padding-right: 1px; } }"));
        assert!(!css.contains("2px"));
    }
}
