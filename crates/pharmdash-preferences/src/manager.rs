//! Preference lifecycle management
//!
//! One getter/setter pair per settings field. A setter commits the new
//! record in memory, persists it, and then applies whatever presentation
//! effects the change implies — in that order, so effect application is a
//! post-commit step and never interleaves with the transition itself.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::effects::{full_presentation, presentation_effects, PresentationSink};
use crate::error::PreferencesResult;
use crate::store::PreferencesStore;
use crate::types::{
    DateStyle, FontScale, LandingPage, Preferences, SidebarMode, TableDensity, ThemeMode,
    TimeStyle,
};

/// Manages the device's preference record
#[derive(Clone)]
pub struct PreferencesManager {
    current: Arc<Mutex<Preferences>>,
    store: PreferencesStore,
    sink: Arc<dyn PresentationSink>,
}

impl std::fmt::Debug for PreferencesManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferencesManager")
            .field("current", &self.current.lock())
            .finish()
    }
}

impl PreferencesManager {
    /// Create a manager starting from defaults
    pub fn new(store: PreferencesStore, sink: Arc<dyn PresentationSink>) -> Self {
        Self {
            current: Arc::new(Mutex::new(Preferences::default())),
            store,
            sink,
        }
    }

    /// Restore the stored record at startup and apply its presentation
    /// settings once, so a returning user sees their theme without a flash
    /// of defaults. A missing or unreadable record restores defaults.
    /// Returns whether a stored record was found.
    pub fn restore(&self) -> PreferencesResult<bool> {
        let stored = self.store.load()?;
        let found = stored.is_some();
        let record = stored.unwrap_or_default();

        *self.current.lock() = record.clone();
        for effect in full_presentation(&record) {
            self.sink.apply(effect);
        }
        debug!(found, "preferences restored");
        Ok(found)
    }

    /// Restore every field to its documented default, persist, and
    /// re-apply the environment side effects
    pub fn reset_to_defaults(&self) -> PreferencesResult<()> {
        let defaults = Preferences::default();
        *self.current.lock() = defaults.clone();
        self.store.save(&defaults)?;
        for effect in full_presentation(&defaults) {
            self.sink.apply(effect);
        }
        info!("preferences reset to defaults");
        Ok(())
    }

    /// Clone of the full record
    pub fn preferences(&self) -> Preferences {
        self.current.lock().clone()
    }

    // Appearance

    pub fn theme(&self) -> ThemeMode {
        self.current.lock().appearance.theme
    }

    pub fn set_theme(&self, theme: ThemeMode) -> PreferencesResult<()> {
        self.update(|p| p.appearance.theme = theme)
    }

    pub fn font_scale(&self) -> FontScale {
        self.current.lock().appearance.font_scale
    }

    pub fn set_font_scale(&self, scale: FontScale) -> PreferencesResult<()> {
        self.update(|p| p.appearance.font_scale = scale)
    }

    pub fn table_density(&self) -> TableDensity {
        self.current.lock().appearance.table_density
    }

    pub fn set_table_density(&self, density: TableDensity) -> PreferencesResult<()> {
        self.update(|p| p.appearance.table_density = density)
    }

    // Layout

    pub fn landing_page(&self) -> LandingPage {
        self.current.lock().layout.landing_page
    }

    pub fn set_landing_page(&self, page: LandingPage) -> PreferencesResult<()> {
        self.update(|p| p.layout.landing_page = page)
    }

    pub fn sidebar(&self) -> SidebarMode {
        self.current.lock().layout.sidebar
    }

    pub fn set_sidebar(&self, mode: SidebarMode) -> PreferencesResult<()> {
        self.update(|p| p.layout.sidebar = mode)
    }

    // Date/time

    pub fn date_style(&self) -> DateStyle {
        self.current.lock().datetime.date_style
    }

    pub fn set_date_style(&self, style: DateStyle) -> PreferencesResult<()> {
        self.update(|p| p.datetime.date_style = style)
    }

    pub fn time_style(&self) -> TimeStyle {
        self.current.lock().datetime.time_style
    }

    pub fn set_time_style(&self, style: TimeStyle) -> PreferencesResult<()> {
        self.update(|p| p.datetime.time_style = style)
    }

    pub fn timezone(&self) -> String {
        self.current.lock().datetime.timezone.clone()
    }

    /// Out-of-range values are the caller's problem by contract; see the
    /// validation helpers in pharmdash-common.
    pub fn set_timezone(&self, timezone: impl Into<String>) -> PreferencesResult<()> {
        let timezone = timezone.into();
        self.update(|p| p.datetime.timezone = timezone)
    }

    // Data display

    pub fn page_size(&self) -> u32 {
        self.current.lock().data.page_size
    }

    pub fn set_page_size(&self, page_size: u32) -> PreferencesResult<()> {
        self.update(|p| p.data.page_size = page_size)
    }

    pub fn default_warehouse(&self) -> Option<String> {
        self.current.lock().data.default_warehouse.clone()
    }

    pub fn set_default_warehouse(&self, warehouse: Option<String>) -> PreferencesResult<()> {
        self.update(|p| p.data.default_warehouse = warehouse)
    }

    pub fn expiry_warning_days(&self) -> u32 {
        self.current.lock().data.expiry_warning_days
    }

    pub fn set_expiry_warning_days(&self, days: u32) -> PreferencesResult<()> {
        self.update(|p| p.data.expiry_warning_days = days)
    }

    // Accessibility

    pub fn high_contrast(&self) -> bool {
        self.current.lock().accessibility.high_contrast
    }

    pub fn set_high_contrast(&self, on: bool) -> PreferencesResult<()> {
        self.update(|p| p.accessibility.high_contrast = on)
    }

    pub fn reduced_motion(&self) -> bool {
        self.current.lock().accessibility.reduced_motion
    }

    pub fn set_reduced_motion(&self, on: bool) -> PreferencesResult<()> {
        self.update(|p| p.accessibility.reduced_motion = on)
    }

    /// Pure transition, persist, then effects — in that order
    fn update(&self, mutate: impl FnOnce(&mut Preferences)) -> PreferencesResult<()> {
        let (old, new) = {
            let mut current = self.current.lock();
            let old = current.clone();
            mutate(&mut current);
            (old, current.clone())
        };

        if old == new {
            return Ok(());
        }

        self.store.save(&new)?;
        for effect in presentation_effects(&old, &new) {
            self.sink.apply(effect);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::AppliedPresentation;
    use pharmdash_storage::BlobStore;
    use tempfile::TempDir;

    fn manager() -> (TempDir, PreferencesManager, Arc<AppliedPresentation>) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blobs = BlobStore::new(temp_dir.path().to_path_buf());
        blobs.initialize().expect("Failed to initialize storage");
        let sink = Arc::new(AppliedPresentation::new());
        let manager = PreferencesManager::new(PreferencesStore::new(blobs), sink.clone());
        (temp_dir, manager, sink)
    }

    #[test]
    fn setter_persists_and_applies_effect() {
        let (_guard, manager, sink) = manager();

        manager.set_theme(ThemeMode::Dark).expect("set_theme");

        assert_eq!(manager.theme(), ThemeMode::Dark);
        assert_eq!(sink.theme(), ThemeMode::Dark);
        assert!(manager.store.exists());
    }

    #[test]
    fn pure_fields_do_not_touch_the_sink() {
        let (_guard, manager, sink) = manager();

        manager.set_page_size(100).expect("set_page_size");
        manager
            .set_landing_page(LandingPage::Quality)
            .expect("set_landing_page");

        assert_eq!(manager.page_size(), 100);
        assert_eq!(sink.theme(), ThemeMode::System);
        assert!(!sink.high_contrast());
    }

    #[test]
    fn no_op_setter_skips_persistence() {
        let (_guard, manager, _sink) = manager();
        manager.set_theme(ThemeMode::System).expect("set_theme");
        assert!(!manager.store.exists());
    }

    #[test]
    fn reset_restores_defaults_and_reapplies_effects() {
        let (_guard, manager, sink) = manager();
        manager.set_theme(ThemeMode::Dark).expect("set_theme");
        manager.set_high_contrast(true).expect("set_high_contrast");
        manager.set_page_size(200).expect("set_page_size");

        manager.reset_to_defaults().expect("reset");

        assert_eq!(manager.preferences(), Preferences::default());
        assert_eq!(sink.theme(), ThemeMode::System);
        assert!(!sink.high_contrast());
    }

    #[test]
    fn restore_applies_stored_presentation() {
        let (guard, manager, _sink) = manager();
        manager.set_theme(ThemeMode::Dark).expect("set_theme");
        manager.set_reduced_motion(true).expect("set_reduced_motion");

        // Fresh manager over the same storage simulates a restart.
        let blobs = BlobStore::new(guard.path().to_path_buf());
        let sink = Arc::new(AppliedPresentation::new());
        let restarted = PreferencesManager::new(PreferencesStore::new(blobs), sink.clone());

        let found = restarted.restore().expect("restore");
        assert!(found);
        assert_eq!(restarted.theme(), ThemeMode::Dark);
        assert_eq!(sink.theme(), ThemeMode::Dark);
        assert!(sink.reduced_motion());
    }

    #[test]
    fn restore_without_a_record_yields_defaults() {
        let (_guard, manager, sink) = manager();
        let found = manager.restore().expect("restore");
        assert!(!found);
        assert_eq!(manager.preferences(), Preferences::default());
        assert_eq!(sink.theme(), ThemeMode::System);
    }

    #[test]
    fn every_field_round_trips_through_storage() {
        let (guard, manager, _sink) = manager();
        manager.set_theme(ThemeMode::Light).unwrap();
        manager.set_font_scale(FontScale::Large).unwrap();
        manager.set_table_density(TableDensity::Compact).unwrap();
        manager.set_landing_page(LandingPage::Inventory).unwrap();
        manager.set_sidebar(SidebarMode::Auto).unwrap();
        manager.set_date_style(DateStyle::Eu).unwrap();
        manager.set_time_style(TimeStyle::H12).unwrap();
        manager.set_timezone("Europe/Oslo").unwrap();
        manager.set_page_size(50).unwrap();
        manager
            .set_default_warehouse(Some("WH-OSLO-01".to_string()))
            .unwrap();
        manager.set_expiry_warning_days(30).unwrap();
        manager.set_high_contrast(true).unwrap();
        manager.set_reduced_motion(true).unwrap();
        let written = manager.preferences();

        let blobs = BlobStore::new(guard.path().to_path_buf());
        let restarted = PreferencesManager::new(
            PreferencesStore::new(blobs),
            Arc::new(AppliedPresentation::new()),
        );
        restarted.restore().expect("restore");

        assert_eq!(restarted.preferences(), written);
    }
}
