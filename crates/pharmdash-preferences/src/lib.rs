//! PharmDash Preferences Module
//!
//! Per-device presentation settings: appearance, layout, date/time
//! formatting, data-display defaults, and accessibility flags. Preferences
//! are independent of the session — they persist in their own storage
//! namespace and carry no identity.
//!
//! Theme, font scale, high contrast, and reduced motion are
//! side-effectful: changing one must change the active rendering
//! environment, not merely store the value. The state transition is pure;
//! effects are computed from the old/new pair and applied as an explicit
//! post-commit step through a [`PresentationSink`].

pub mod effects;
pub mod error;
pub mod manager;
pub mod store;
pub mod types;

pub use effects::{
    full_presentation, presentation_effects, AppliedPresentation, PresentationEffect,
    PresentationSink,
};
pub use error::{PreferencesError, PreferencesResult};
pub use manager::PreferencesManager;
pub use store::PreferencesStore;
pub use types::{
    AccessibilitySettings, AppearanceSettings, DataDisplaySettings, DateStyle, DateTimeSettings,
    FontScale, LandingPage, LayoutSettings, Preferences, SidebarMode, TableDensity, ThemeMode,
    TimeStyle,
};
