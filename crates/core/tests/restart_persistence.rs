// tests/restart_persistence.rs

use console_core::prefs::{PreferencesStore, Rgb};

#[test]
fn restart_persistence_set_reload_read() {
    // Keep the tempdir alive for the whole test.
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");

    // ----- First run -----
    let store1 = PreferencesStore::open(&path);
    store1.set_font_size(14.0);
    store1.set_font_name("Monaco");
    store1.set_background_color(Rgb::new(0.1, 0.1, 0.1));
    store1.touch_last_start();
    let last_start = store1.last_start().expect("last_start stamped");

    // ----- "Restart": new store, same backing file -----
    drop(store1);

    let store2 = PreferencesStore::open(&path);
    assert_eq!(store2.font_size(), 14.0);
    assert_eq!(store2.font_name(), "Monaco");
    assert_eq!(store2.background_color(), Rgb::new(0.1, 0.1, 0.1));
    assert_eq!(
        store2.last_start().map(|t| t.timestamp()),
        Some(last_start.timestamp()),
        "last_start should survive the restart"
    );
}

#[test]
fn restart_persistence_each_setter_is_durable_independently() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.toml");

    // Each setter persists the full blob on its own; a later reload must
    // see the last value written per field, regardless of write order.
    let store1 = PreferencesStore::open(&path);
    store1.set_font_size(9.0);
    store1.set_font_size(11.0);
    store1.set_foreground_color(Rgb::new(0.2, 0.4, 0.6));
    drop(store1);

    let store2 = PreferencesStore::open(&path);
    assert_eq!(store2.font_size(), 11.0);
    assert_eq!(store2.foreground_color(), Rgb::new(0.2, 0.4, 0.6));
}
