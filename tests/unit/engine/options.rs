use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("options_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn in_memory_store_round_trips() {
    let mut o = InMemoryOptions::default();
    assert_eq!(o.load_mask_setting(), None);
    o.store_mask_setting(2).unwrap();
    assert_eq!(o.load_mask_setting(), Some(2));
    assert_eq!(InMemoryOptions::with_mask_setting(4).load_mask_setting(), Some(4));
}

#[test]
fn json_store_starts_empty_and_persists_changes() {
    let path = scratch("persist.json");
    let mut o = JsonFileOptions::open(&path).unwrap();
    assert_eq!(o.load_mask_setting(), None);
    assert!(!path.exists());

    o.store_mask_setting(1).unwrap();
    let reopened = JsonFileOptions::open(&path).unwrap();
    assert_eq!(reopened.load_mask_setting(), Some(1));
}

#[test]
fn json_store_keeps_foreign_keys() {
    let path = scratch("foreign.json");
    std::fs::write(&path, r#"{"brightness": 7, "button_waves_mask_setting": 0}"#).unwrap();

    let mut o = JsonFileOptions::open(&path).unwrap();
    assert_eq!(o.load_mask_setting(), Some(0));
    o.store_mask_setting(3).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["brightness"], 7);
    assert_eq!(raw["button_waves_mask_setting"], 3);
}

#[test]
fn corrupt_json_is_rejected() {
    let path = scratch("corrupt.json");
    std::fs::write(&path, "[[[").unwrap();
    assert!(matches!(
        JsonFileOptions::open(&path).unwrap_err(),
        WaveError::Serde(_)
    ));
}

#[test]
fn mutable_references_forward_to_the_store() {
    fn bump<S: OptionsStore>(mut store: S) -> Option<i32> {
        store.store_mask_setting(3).unwrap();
        store.load_mask_setting()
    }

    let mut o = InMemoryOptions::default();
    assert_eq!(bump(&mut o), Some(3));
    assert_eq!(o.mask_setting, Some(3));
}
