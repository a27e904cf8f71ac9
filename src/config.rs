use anyhow::Context;
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use xdg::BaseDirectories;

use crate::canvas::{Align, EllipseConfig, QuickPlacement, TextConfig, VAlign};
use crate::editor::{CommitPolicy, SliderSettings, INPUT_PADDING};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub commit_policy: CommitPolicy,
    pub input_padding: u16,
    pub theme: ThemeConfig,
    pub title: TextConfig<String, String>,
    pub preview: PreviewConfig,
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub primary: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_primary: Option<Color>,
    #[serde(deserialize_with = "deserialize_color")]
    pub rail: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub text_primary: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub text_disabled: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
}

/// One slider editor on the options panel
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FieldConfig {
    pub name: String,
    /// Initial value; the range minimum is used when absent
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub settings: SliderSettings,
}

/// Ellipse preview drawn below the editors
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    #[serde(flatten)]
    pub ellipse: EllipseConfig<String, String>,
    pub placement: QuickPlacement,
    /// Name of the field whose value drives the ellipse width
    pub bind: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            commit_policy: CommitPolicy::default(),
            input_padding: INPUT_PADDING,
            theme: ThemeConfig::default(),
            title: TextConfig {
                text: Some("Panel options".to_string()),
                color: Some("cyan".to_string()),
                size: None,
                align: Align::Center,
                valign: VAlign::Middle,
            },
            preview: PreviewConfig::default(),
            fields: default_fields(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            primary: Color::Rgb(255, 165, 0), // Orange
            unfocused_primary: None,
            rail: Color::DarkGray,
            text_primary: Color::White,
            text_disabled: Color::Gray,
            error_fg: Color::Red,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            ellipse: EllipseConfig {
                text: TextConfig {
                    text: Some("Preview".to_string()),
                    color: Some("white".to_string()),
                    size: None,
                    align: Align::Center,
                    valign: VAlign::Middle,
                },
                background_color: None,
                border_color: Some("orange".to_string()),
                width: None,
            },
            placement: QuickPlacement::HorizontalCenter,
            bind: Some("Width".to_string()),
        }
    }
}

fn default_fields() -> Vec<FieldConfig> {
    let field = |name: &str, value: Option<f64>, settings: SliderSettings| FieldConfig {
        name: name.to_string(),
        value,
        settings,
    };

    vec![
        field("Opacity", Some(0.8), SliderSettings {
            min: Some(0.0),
            max: Some(1.0),
            step: Some(0.01),
            ..Default::default()
        }),
        field("Width", Some(24.0), SliderSettings {
            min: Some(4.0),
            max: Some(60.0),
            step: Some(1.0),
            aria_label_for_handle: Some("Ellipse width".to_string()),
            ..Default::default()
        }),
        field("Rotation", Some(0.0), SliderSettings {
            min: Some(-180.0),
            max: Some(180.0),
            step: Some(15.0),
            marks: Some(
                [("-180", "-180°"), ("0", "0°"), ("180", "180°")]
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            included: Some(false),
            ..Default::default()
        }),
        field("Threshold", Some(2500.0), SliderSettings {
            min: Some(0.0),
            max: Some(100000.0),
            ..Default::default()
        }),
        field("Fixed", None, SliderSettings {
            min: Some(7.0),
            max: Some(7.0),
            ..Default::default()
        }),
    ]
}

impl ThemeConfig {
    /// Get the unfocused primary color, calculating 50% darker if not explicitly set
    pub fn unfocused_primary(&self) -> Color {
        self.unfocused_primary.unwrap_or_else(|| darken_color(self.primary, 0.5))
    }
}

impl Config {
    /// Log configuration problems that the editors tolerate at runtime
    pub fn validate(&self) {
        for field in &self.fields {
            if let (Some(min), Some(max)) = (field.settings.min, field.settings.max) {
                if min > max {
                    warn!("Field '{}' has min {} above max {}", field.name, min, max);
                }
            }
        }
        if let Some(bind) = &self.preview.bind {
            if !self.fields.iter().any(|f| &f.name == bind) {
                warn!("Preview is bound to unknown field '{}'", bind);
            }
        }
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Deserialize an optional color from a string
fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

static NAMED_COLORS: phf::Map<&'static str, Color> = phf::phf_map! {
    "black" => Color::Black,
    "red" => Color::Red,
    "green" => Color::Green,
    "yellow" => Color::Yellow,
    "blue" => Color::Blue,
    "magenta" => Color::Magenta,
    "cyan" => Color::Cyan,
    "gray" => Color::Gray,
    "grey" => Color::Gray,
    "darkgray" => Color::DarkGray,
    "darkgrey" => Color::DarkGray,
    "lightred" => Color::LightRed,
    "lightgreen" => Color::LightGreen,
    "lightyellow" => Color::LightYellow,
    "lightblue" => Color::LightBlue,
    "lightmagenta" => Color::LightMagenta,
    "lightcyan" => Color::LightCyan,
    "white" => Color::White,
    "orange" => Color::Rgb(255, 165, 0),
};

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(color) = NAMED_COLORS.get(s.as_str()) {
        return Some(*color);
    }

    // Hex colors (#FF6600 or #f60)
    if let Some(hex) = s.strip_prefix('#') {
        // Lengths below are byte counts; only ASCII can be sliced safely
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    // RGB tuples "255,165,0"
    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Load and parse a config file
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Read the user config, falling back to defaults when it is missing or invalid
pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let config = match load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{:#}; using default configuration", e);
            Config::default()
        }
    };
    config.validate();
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("blue"), Some(Color::Blue));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("grey"), Some(Color::Gray));
    }

    #[test]
    fn test_parse_color_case_insensitive() {
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color(" Cyan "), Some(Color::Cyan));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_non_ascii_hex() {
        assert_eq!(parse_color("#aéaaa"), None);
        assert_eq!(parse_color("#éa"), None);
        assert_eq!(parse_color("#日本"), None);
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
    }

    #[test]
    fn test_unfocused_primary_darkens_by_default() {
        let theme = ThemeConfig {
            primary: Color::Rgb(200, 100, 50),
            ..ThemeConfig::default()
        };
        assert_eq!(theme.unfocused_primary(), Color::Rgb(100, 50, 25));

        let explicit = ThemeConfig {
            unfocused_primary: Some(Color::Blue),
            ..ThemeConfig::default()
        };
        assert_eq!(explicit.unfocused_primary(), Color::Blue);
    }

    #[test]
    fn test_config_default_fields() {
        let config = Config::default();
        let names: Vec<_> = config.fields.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["Opacity", "Width", "Rotation", "Threshold", "Fixed"]);
        assert_eq!(config.commit_policy, CommitPolicy::Passthrough);
        assert_eq!(config.preview.bind.as_deref(), Some("Width"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
log_level = "debug"
commit_policy = "clamp"
input_padding = 2

[theme]
primary = "#00FFFF"
rail = "128,0,128"

[title]
text = "Gauge"
align = "right"

[preview]
placement = "left"
bind = "Size"
border_color = "red"

[[fields]]
name = "Size"
value = 12
min = 1
max = 50
step = 0.5
aria_label_for_handle = "Size handle"

[fields.marks]
"1" = "small"
"50" = "large"

[[fields]]
name = "Free"
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.commit_policy, CommitPolicy::Clamp);
        assert_eq!(config.input_padding, 2);
        assert_eq!(config.theme.primary, Color::Rgb(0, 255, 255));
        assert_eq!(config.theme.rail, Color::Rgb(128, 0, 128));
        assert_eq!(config.theme.text_primary, Color::White);
        assert_eq!(config.title.text.as_deref(), Some("Gauge"));
        assert_eq!(config.title.align, Align::Right);
        assert_eq!(config.preview.placement, QuickPlacement::Left);
        assert_eq!(config.preview.ellipse.border_color.as_deref(), Some("red"));

        assert_eq!(config.fields.len(), 2);
        let size = &config.fields[0];
        assert_eq!(size.value, Some(12.0));
        assert_eq!(size.settings.min, Some(1.0));
        assert_eq!(size.settings.step, Some(0.5));
        assert_eq!(size.settings.aria_label_for_handle.as_deref(), Some("Size handle"));
        assert_eq!(size.settings.marks.as_ref().map(|m| m.len()), Some(2));

        let free = &config.fields[1];
        assert_eq!(free.value, None);
        assert_eq!(free.settings, SliderSettings::default());
    }

    #[test]
    fn test_config_rejects_bad_color() {
        let result: Result<Config, _> = toml::from_str("[theme]\nprimary = \"nope\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_non_ascii_hex_color() {
        let result: Result<Config, _> = toml::from_str("[theme]\nprimary = \"#aéaaa\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load(Path::new("/nonexistent/fieldslider/config.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/fieldslider/config.toml"));
    }
}
