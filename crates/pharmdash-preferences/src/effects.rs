//! Presentation side effects
//!
//! Four settings change the rendering environment, not just stored state:
//! theme, font scale, high contrast, and reduced motion. Effect computation
//! is a pure function of the old/new record pair; applying effects goes
//! through the [`PresentationSink`] seam so the transition logic stays
//! testable without an environment.

use parking_lot::Mutex;

use crate::types::{FontScale, Preferences, ThemeMode};

/// A single environment mutation derived from a preference change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationEffect {
    Theme(ThemeMode),
    FontScale(FontScale),
    HighContrast(bool),
    ReducedMotion(bool),
}

/// Effects needed to move the environment from `old` to `new`.
///
/// Pure: no environment access, no ordering dependence between the
/// returned effects. Unchanged settings produce no effect.
pub fn presentation_effects(old: &Preferences, new: &Preferences) -> Vec<PresentationEffect> {
    let mut effects = Vec::new();
    if old.appearance.theme != new.appearance.theme {
        effects.push(PresentationEffect::Theme(new.appearance.theme));
    }
    if old.appearance.font_scale != new.appearance.font_scale {
        effects.push(PresentationEffect::FontScale(new.appearance.font_scale));
    }
    if old.accessibility.high_contrast != new.accessibility.high_contrast {
        effects.push(PresentationEffect::HighContrast(
            new.accessibility.high_contrast,
        ));
    }
    if old.accessibility.reduced_motion != new.accessibility.reduced_motion {
        effects.push(PresentationEffect::ReducedMotion(
            new.accessibility.reduced_motion,
        ));
    }
    effects
}

/// Every side-effectful setting of a record, unconditionally.
///
/// Used on restore and on reset, where the environment must be brought in
/// line with the record regardless of what it showed before.
pub fn full_presentation(prefs: &Preferences) -> Vec<PresentationEffect> {
    vec![
        PresentationEffect::Theme(prefs.appearance.theme),
        PresentationEffect::FontScale(prefs.appearance.font_scale),
        PresentationEffect::HighContrast(prefs.accessibility.high_contrast),
        PresentationEffect::ReducedMotion(prefs.accessibility.reduced_motion),
    ]
}

/// Receiver of presentation effects — the active rendering environment
pub trait PresentationSink: Send + Sync {
    /// Apply one effect to the environment
    fn apply(&self, effect: PresentationEffect);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Applied {
    theme: ThemeMode,
    font_scale: FontScale,
    high_contrast: bool,
    reduced_motion: bool,
}

/// Default sink: records the currently applied presentation state.
///
/// Pages read the applied values from here; tests assert against them.
#[derive(Debug, Default)]
pub struct AppliedPresentation {
    state: Mutex<Applied>,
}

impl AppliedPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently applied theme
    pub fn theme(&self) -> ThemeMode {
        self.state.lock().theme
    }

    /// Currently applied font scale
    pub fn font_scale(&self) -> FontScale {
        self.state.lock().font_scale
    }

    /// Whether high contrast is applied
    pub fn high_contrast(&self) -> bool {
        self.state.lock().high_contrast
    }

    /// Whether reduced motion is applied
    pub fn reduced_motion(&self) -> bool {
        self.state.lock().reduced_motion
    }
}

impl PresentationSink for AppliedPresentation {
    fn apply(&self, effect: PresentationEffect) {
        let mut state = self.state.lock();
        match effect {
            PresentationEffect::Theme(theme) => state.theme = theme,
            PresentationEffect::FontScale(scale) => state.font_scale = scale,
            PresentationEffect::HighContrast(on) => state.high_contrast = on,
            PresentationEffect::ReducedMotion(on) => state.reduced_motion = on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_records_produce_no_effects() {
        let prefs = Preferences::default();
        assert!(presentation_effects(&prefs, &prefs).is_empty());
    }

    #[test]
    fn theme_change_produces_exactly_one_effect() {
        let old = Preferences::default();
        let mut new = old.clone();
        new.appearance.theme = ThemeMode::Dark;

        let effects = presentation_effects(&old, &new);
        assert_eq!(effects, vec![PresentationEffect::Theme(ThemeMode::Dark)]);
    }

    #[test]
    fn non_effectful_fields_produce_nothing() {
        let old = Preferences::default();
        let mut new = old.clone();
        new.data.page_size = 100;
        new.layout.sidebar = crate::types::SidebarMode::Collapsed;
        new.appearance.table_density = crate::types::TableDensity::Compact;

        assert!(presentation_effects(&old, &new).is_empty());
    }

    #[test]
    fn full_presentation_covers_all_four_settings() {
        let mut prefs = Preferences::default();
        prefs.appearance.theme = ThemeMode::Dark;
        prefs.accessibility.reduced_motion = true;

        let effects = full_presentation(&prefs);
        assert_eq!(effects.len(), 4);
        assert!(effects.contains(&PresentationEffect::Theme(ThemeMode::Dark)));
        assert!(effects.contains(&PresentationEffect::ReducedMotion(true)));
    }

    #[test]
    fn applied_presentation_tracks_effects() {
        let sink = AppliedPresentation::new();
        assert_eq!(sink.theme(), ThemeMode::System);

        sink.apply(PresentationEffect::Theme(ThemeMode::Dark));
        sink.apply(PresentationEffect::HighContrast(true));

        assert_eq!(sink.theme(), ThemeMode::Dark);
        assert!(sink.high_contrast());
        assert!(!sink.reduced_motion());
        assert_eq!(sink.font_scale(), FontScale::Medium);
    }
}
