//! NSUserDefaults backend for macOS.
//!
//! The native settings store on macOS. Booleans and the filter-type integer
//! are stored natively; colors are stored as hex strings. Key literals are
//! shared with the JSON backend, so boolean and integer preferences written
//! by earlier releases of the application are picked up as-is.

use std::ffi::CString;

use objc2::msg_send;
use objc2::runtime::{AnyClass, AnyObject, Bool};
use objc2_foundation::NSString;

use crate::model::constants::*;
use crate::model::{CoveragePrefs, FilterStringType, LineClassification, LineColor};

/// Objective-C object pointer.
type Id = *mut AnyObject;

fn user_defaults_class() -> &'static AnyClass {
    let name = CString::new("NSUserDefaults").expect("valid class name");
    AnyClass::get(&name).expect("NSUserDefaults class not found")
}

/// The shared `standardUserDefaults` instance.
///
/// # Safety
/// Must be called with a valid autorelease pool.
unsafe fn standard_defaults() -> Id {
    msg_send![user_defaults_class(), standardUserDefaults]
}

/// Reads a boolean from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str, default: bool) -> bool {
    let ud = standard_defaults();
    let k = NSString::from_str(key);
    let obj: Id = msg_send![ud, objectForKey: &*k];
    if obj.is_null() {
        default
    } else {
        let val: Bool = msg_send![ud, boolForKey: &*k];
        val.as_bool()
    }
}

/// Saves a boolean to NSUserDefaults.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn prefs_set_bool(key: &str, val: bool) {
    let ud = standard_defaults();
    let k = NSString::from_str(key);
    let _: () = msg_send![ud, setBool: Bool::new(val), forKey: &*k];
}

/// Reads an integer from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn prefs_get_int(key: &str, default: i32) -> i32 {
    let ud = standard_defaults();
    let k = NSString::from_str(key);
    let obj: Id = msg_send![ud, objectForKey: &*k];
    if obj.is_null() {
        default
    } else {
        // NSInteger is i64 on 64-bit macOS
        let val: i64 = msg_send![ud, integerForKey: &*k];
        val as i32
    }
}

/// Saves an integer to NSUserDefaults.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn prefs_set_int(key: &str, val: i32) {
    let ud = standard_defaults();
    let k = NSString::from_str(key);
    // NSInteger is i64 on 64-bit macOS
    let _: () = msg_send![ud, setInteger: val as i64, forKey: &*k];
}

/// Reads a string from NSUserDefaults, `None` if absent or not a string.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn prefs_get_string(key: &str) -> Option<String> {
    let ud = standard_defaults();
    let k = NSString::from_str(key);
    let s: *mut NSString = msg_send![ud, stringForKey: &*k];
    if s.is_null() {
        None
    } else {
        Some((*s).to_string())
    }
}

/// Saves a string to NSUserDefaults.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn prefs_set_string(key: &str, val: &str) {
    let ud = standard_defaults();
    let k = NSString::from_str(key);
    let v = NSString::from_str(val);
    let _: () = msg_send![ud, setObject: &*v, forKey: &*k];
}

/// A stored line color, falling back to the classification default when the
/// key is absent or holds something unparseable (e.g. an archived NSColor
/// written by very old releases).
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
unsafe fn color_or_default(class: LineClassification) -> LineColor {
    match prefs_get_string(class.pref_key()) {
        Some(hex) => LineColor::from_hex(&hex).unwrap_or_else(|_| class.default_color()),
        None => class.default_color(),
    }
}

/// Loads the complete preference state from NSUserDefaults.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn load_prefs() -> CoveragePrefs {
    let mut prefs = CoveragePrefs {
        hide_system_sources: prefs_get_bool(PREF_HIDE_SYSTEM_SOURCES, DEFAULT_HIDE_SYSTEM_SOURCES),
        show_complexity: prefs_get_bool(PREF_SHOW_COMPLEXITY, DEFAULT_SHOW_COMPLEXITY),
        filter_string_type: FilterStringType::from_raw(prefs_get_int(
            PREF_FILTER_STRING_TYPE,
            FILTER_TYPE_WILDCARD,
        )),
        missed_line_color: color_or_default(LineClassification::Missed),
        unexecutable_line_color: color_or_default(LineClassification::Unexecutable),
        non_feasible_line_color: color_or_default(LineClassification::NonFeasible),
        executed_line_color: color_or_default(LineClassification::Executed),
    };
    prefs.validate();
    prefs
}

/// Saves the complete preference state to NSUserDefaults.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn save_prefs(prefs: &CoveragePrefs) {
    prefs_set_bool(PREF_HIDE_SYSTEM_SOURCES, prefs.hide_system_sources);
    prefs_set_bool(PREF_SHOW_COMPLEXITY, prefs.show_complexity);
    prefs_set_int(PREF_FILTER_STRING_TYPE, prefs.filter_string_type.as_raw());
    for class in LineClassification::ALL {
        prefs_set_string(class.pref_key(), &prefs.color_for(class).to_hex());
    }
}
