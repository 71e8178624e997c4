//! JSON settings file backend.
//!
//! Stores preferences in `<config dir>/CoverStory/prefs.json`.
//!
//! Uses a process-wide in-memory cache so repeated reads and
//! settings-window writes do not hit the disk; writes from any thread land
//! in the same cache. Call `flush_prefs()` to persist changes.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::error::PrefsError;
use crate::model::constants::*;
use crate::model::{CoveragePrefs, LineClassification, LineColor};

struct PrefsCache {
    prefs: Option<CoveragePrefs>,
    dirty: bool,
}

// In-memory preference cache. Loaded once, written on flush. A single
// process-wide mutex so a write made off the main thread is still seen by
// the flush at exit.
static CACHE: Mutex<PrefsCache> = Mutex::new(PrefsCache {
    prefs: None,
    dirty: false,
});

/// Settings file path: `$APPDATA` on Windows, `$XDG_CONFIG_HOME` (or
/// `~/.config`) elsewhere, then `CoverStory/prefs.json`.
fn settings_path() -> PathBuf {
    let base = if cfg!(target_os = "windows") {
        env::var("APPDATA").unwrap_or_else(|_| ".".to_string())
    } else {
        env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            format!("{home}/.config")
        })
    };
    PathBuf::from(base).join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Load preferences from disk, returning defaults if missing or invalid.
fn load_from_disk() -> CoveragePrefs {
    let path = settings_path();
    let mut prefs = match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "settings file unreadable, using defaults");
            CoveragePrefs::default()
        }),
        Err(_) => CoveragePrefs::default(),
    };
    prefs.validate();
    prefs
}

fn save_to_disk(prefs: &CoveragePrefs) -> Result<(), PrefsError> {
    let path = settings_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(&path, json)?;
    Ok(())
}

/// Get the cached preferences, loading from disk if needed.
fn cached_prefs() -> CoveragePrefs {
    let mut cache = CACHE.lock().expect("prefs cache mutex poisoned");
    if cache.prefs.is_none() {
        cache.prefs = Some(load_from_disk());
    }
    cache.prefs.clone().unwrap()
}

/// Update the cached preferences and mark them dirty.
fn set_cached_prefs(prefs: CoveragePrefs) {
    let mut cache = CACHE.lock().expect("prefs cache mutex poisoned");
    cache.prefs = Some(prefs);
    cache.dirty = true;
}

/// Drop the cache so the next read goes back to disk. Test-only.
#[cfg(test)]
fn reset_cache() {
    let mut cache = CACHE.lock().expect("prefs cache mutex poisoned");
    cache.prefs = None;
    cache.dirty = false;
}

/// Flush cached preferences to disk if dirty.
///
/// Call this when the settings window closes or the app exits. Disk
/// failures are logged, never fatal; the cache stays dirty so the next
/// flush retries.
pub fn flush_prefs() {
    let mut cache = CACHE.lock().expect("prefs cache mutex poisoned");
    if !cache.dirty {
        return;
    }
    if let Some(ref prefs) = cache.prefs {
        if let Err(e) = save_to_disk(prefs) {
            warn!(error = %e, "failed to write settings file");
            return;
        }
    }
    cache.dirty = false;
}

/// Load the complete preference state.
pub fn load_prefs() -> CoveragePrefs {
    cached_prefs()
}

/// Replace the complete preference state.
///
/// Updates the cache immediately; the disk write happens on
/// `flush_prefs()`.
pub fn save_prefs(prefs: &CoveragePrefs) {
    set_cached_prefs(prefs.clone());
}

/// Read a boolean preference by settings key.
pub fn prefs_get_bool(key: &str, default: bool) -> bool {
    let prefs = cached_prefs();
    match key {
        PREF_HIDE_SYSTEM_SOURCES => prefs.hide_system_sources,
        PREF_SHOW_COMPLEXITY => prefs.show_complexity,
        _ => default,
    }
}

/// Write a boolean preference by settings key.
pub fn prefs_set_bool(key: &str, val: bool) {
    let mut prefs = cached_prefs();
    match key {
        PREF_HIDE_SYSTEM_SOURCES => prefs.hide_system_sources = val,
        PREF_SHOW_COMPLEXITY => prefs.show_complexity = val,
        _ => return,
    }
    set_cached_prefs(prefs);
}

/// Read an integer preference by settings key.
pub fn prefs_get_int(key: &str, default: i32) -> i32 {
    let prefs = cached_prefs();
    match key {
        PREF_FILTER_STRING_TYPE => prefs.filter_string_type.as_raw(),
        _ => default,
    }
}

/// Write an integer preference by settings key.
pub fn prefs_set_int(key: &str, val: i32) {
    let mut prefs = cached_prefs();
    match key {
        PREF_FILTER_STRING_TYPE => {
            prefs.filter_string_type = crate::model::FilterStringType::from_raw(val)
        }
        _ => return,
    }
    set_cached_prefs(prefs);
}

/// Read a line color by settings key, `None` for non-color keys.
pub fn prefs_get_color(key: &str) -> Option<LineColor> {
    let prefs = cached_prefs();
    LineClassification::ALL
        .into_iter()
        .find(|class| class.pref_key() == key)
        .map(|class| prefs.color_for(class))
}

/// Write a line color by settings key. Non-color keys are ignored.
pub fn prefs_set_color(key: &str, color: LineColor) {
    let Some(class) = LineClassification::ALL
        .into_iter()
        .find(|class| class.pref_key() == key)
    else {
        return;
    };
    let mut prefs = cached_prefs();
    prefs.set_color_for(class, color);
    set_cached_prefs(prefs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterStringType;
    use std::path::Path;
    use std::sync::MutexGuard;

    // The cache is process-wide, so tests that touch it (or the settings
    // path env var) serialize on this lock and start from a fresh temp
    // config dir plus an empty cache.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    fn isolated(name: &str) -> (MutexGuard<'static, ()>, PathBuf) {
        let guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = env::temp_dir().join(format!("coverstory-prefs-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        env::set_var("XDG_CONFIG_HOME", &dir);
        reset_cache();
        (guard, dir)
    }

    fn settings_file(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_DIR).join(SETTINGS_FILE)
    }

    #[test]
    fn bool_accessors_dispatch_on_key() {
        let (_guard, _dir) = isolated("bool-keys");

        prefs_set_bool(PREF_SHOW_COMPLEXITY, true);
        assert!(prefs_get_bool(PREF_SHOW_COMPLEXITY, false));
        // Unknown keys return the caller's default and never write.
        prefs_set_bool("someOtherKey", true);
        assert!(!prefs_get_bool("someOtherKey", false));
    }

    #[test]
    fn int_accessor_roundtrips_filter_type() {
        let (_guard, _dir) = isolated("int-keys");

        prefs_set_int(PREF_FILTER_STRING_TYPE, FILTER_TYPE_REGEX);
        assert_eq!(
            prefs_get_int(PREF_FILTER_STRING_TYPE, FILTER_TYPE_WILDCARD),
            FILTER_TYPE_REGEX
        );
        // Unknown raw values decode to the wildcard default.
        prefs_set_int(PREF_FILTER_STRING_TYPE, 42);
        assert_eq!(
            load_prefs().filter_string_type,
            FilterStringType::WildcardPattern
        );
    }

    #[test]
    fn color_accessors_cover_all_classifications() {
        let (_guard, _dir) = isolated("color-keys");

        let custom = LineColor::new(0.1, 0.2, 0.3, 1.0);
        for class in LineClassification::ALL {
            prefs_set_color(class.pref_key(), custom);
            assert_eq!(prefs_get_color(class.pref_key()), Some(custom));
        }
        assert_eq!(prefs_get_color(PREF_SHOW_COMPLEXITY), None);
    }

    #[test]
    fn save_prefs_updates_cache() {
        let (_guard, _dir) = isolated("save-prefs");

        let mut prefs = CoveragePrefs::default();
        prefs.hide_system_sources = false;
        save_prefs(&prefs);
        assert!(!prefs_get_bool(PREF_HIDE_SYSTEM_SOURCES, true));
        assert_eq!(load_prefs(), prefs);
    }

    #[test]
    fn writes_from_other_threads_survive_flush() {
        let (_guard, dir) = isolated("cross-thread");

        std::thread::spawn(|| {
            prefs_set_bool(PREF_SHOW_COMPLEXITY, true);
        })
        .join()
        .unwrap();

        // The flush (main thread at exit, in the app) must see the other
        // thread's write.
        flush_prefs();

        let contents =
            fs::read_to_string(settings_file(&dir)).expect("settings file written on flush");
        assert!(contents.contains("\"show_complexity\": true"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn flush_without_changes_writes_nothing() {
        let (_guard, dir) = isolated("clean-flush");

        let _ = load_prefs();
        flush_prefs();
        assert!(!settings_file(&dir).exists());
    }

    #[test]
    fn missing_settings_file_loads_defaults() {
        let (_guard, _dir) = isolated("missing-file");

        assert_eq!(load_prefs(), CoveragePrefs::default());
    }

    #[test]
    fn corrupt_settings_file_loads_defaults() {
        let (_guard, dir) = isolated("corrupt-file");

        let path = settings_file(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ this is not json").unwrap();

        assert_eq!(load_prefs(), CoveragePrefs::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn flush_roundtrips_through_disk() {
        let (_guard, dir) = isolated("disk-roundtrip");

        let mut prefs = CoveragePrefs::default();
        prefs.filter_string_type = FilterStringType::RegularExpression;
        prefs.missed_line_color = LineColor::new(1.0, 0.5, 0.0, 1.0);
        save_prefs(&prefs);
        flush_prefs();

        reset_cache();
        assert_eq!(load_prefs(), prefs);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut prefs = CoveragePrefs::default();
        prefs.show_complexity = true;
        prefs.filter_string_type = FilterStringType::RegularExpression;
        prefs.missed_line_color = LineColor::new(1.0, 0.5, 0.0, 1.0);

        let json = serde_json::to_string(&prefs).unwrap();
        let loaded: CoveragePrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn filter_type_persists_as_raw_integer() {
        let prefs = CoveragePrefs {
            filter_string_type: FilterStringType::RegularExpression,
            ..Default::default()
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"filter_string_type\":1"));
    }

    #[test]
    fn missing_fields_load_as_defaults() {
        let loaded: CoveragePrefs = serde_json::from_str("{\"show_complexity\":true}").unwrap();
        assert!(loaded.show_complexity);
        assert_eq!(loaded.hide_system_sources, DEFAULT_HIDE_SYSTEM_SOURCES);
        assert_eq!(
            loaded.missed_line_color,
            LineColor::from(DEFAULT_MISSED_COLOR)
        );
    }
}
