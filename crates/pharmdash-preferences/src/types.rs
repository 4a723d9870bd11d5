//! Preference types and defaults
//!
//! Every field persists; nothing here is transient. Defaults are the
//! documented first-run values [`PreferencesManager::reset_to_defaults`]
//! restores.
//!
//! [`PreferencesManager::reset_to_defaults`]: crate::manager::PreferencesManager::reset_to_defaults

use serde::{Deserialize, Serialize};

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating environment
    #[default]
    System,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::System => write!(f, "system"),
        }
    }
}

/// Base font scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontScale {
    Small,
    #[default]
    Medium,
    Large,
}

/// Table row density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableDensity {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

/// Page shown after sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LandingPage {
    #[default]
    Dashboard,
    Inventory,
    Batches,
    Quality,
    Reports,
}

/// Sidebar behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SidebarMode {
    #[default]
    Expanded,
    Collapsed,
    /// Collapse automatically on narrow viewports
    Auto,
}

/// Date presentation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// 2026-08-05
    #[default]
    Iso,
    /// 05.08.2026
    Eu,
    /// 08/05/2026
    Us,
}

/// Time presentation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeStyle {
    /// 14:30
    #[default]
    H24,
    /// 2:30 PM
    H12,
}

/// Appearance settings (all side-effectful except table density)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
    pub font_scale: FontScale,
    pub table_density: TableDensity,
}

/// Layout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutSettings {
    pub landing_page: LandingPage,
    pub sidebar: SidebarMode,
}

/// Date/time formatting settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeSettings {
    pub date_style: DateStyle,
    pub time_style: TimeStyle,
    /// IANA zone name used for display formatting
    pub timezone: String,
}

impl Default for DateTimeSettings {
    fn default() -> Self {
        Self {
            date_style: DateStyle::default(),
            time_style: TimeStyle::default(),
            timezone: "UTC".to_string(),
        }
    }
}

/// Data-display defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataDisplaySettings {
    /// Rows per table page
    pub page_size: u32,
    /// Pre-selected warehouse filter, if any
    pub default_warehouse: Option<String>,
    /// Batches expiring within this many days are highlighted
    pub expiry_warning_days: u32,
}

impl Default for DataDisplaySettings {
    fn default() -> Self {
        Self {
            page_size: 25,
            default_warehouse: None,
            expiry_warning_days: 90,
        }
    }
}

/// Accessibility flags (both side-effectful)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AccessibilitySettings {
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// The full persisted preference record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Preferences {
    pub appearance: AppearanceSettings,
    pub layout: LayoutSettings,
    pub datetime: DateTimeSettings,
    pub data: DataDisplaySettings,
    pub accessibility: AccessibilitySettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.appearance.theme, ThemeMode::System);
        assert_eq!(prefs.appearance.font_scale, FontScale::Medium);
        assert_eq!(prefs.appearance.table_density, TableDensity::Comfortable);
        assert_eq!(prefs.layout.landing_page, LandingPage::Dashboard);
        assert_eq!(prefs.layout.sidebar, SidebarMode::Expanded);
        assert_eq!(prefs.datetime.date_style, DateStyle::Iso);
        assert_eq!(prefs.datetime.time_style, TimeStyle::H24);
        assert_eq!(prefs.datetime.timezone, "UTC");
        assert_eq!(prefs.data.page_size, 25);
        assert_eq!(prefs.data.default_warehouse, None);
        assert_eq!(prefs.data.expiry_warning_days, 90);
        assert!(!prefs.accessibility.high_contrast);
        assert!(!prefs.accessibility.reduced_motion);
    }

    #[test]
    fn serde_round_trip() {
        let mut prefs = Preferences::default();
        prefs.appearance.theme = ThemeMode::Dark;
        prefs.data.default_warehouse = Some("WH-OSLO-01".to_string());
        prefs.accessibility.high_contrast = true;

        let json = serde_json::to_string(&prefs).unwrap();
        let restored: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, prefs);
    }

    #[test]
    fn partial_blob_fills_with_defaults() {
        // Older blobs missing newer groups load as defaults, not errors.
        let restored: Preferences =
            serde_json::from_str(r#"{"appearance":{"theme":"dark"}}"#).unwrap();
        assert_eq!(restored.appearance.theme, ThemeMode::Dark);
        assert_eq!(restored.data.page_size, 25);
        assert_eq!(restored.layout.sidebar, SidebarMode::Expanded);
    }

    #[test]
    fn theme_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }
}
