use showcase_core::catalog::{
    entry_by_id, entry_by_name, validate_catalog, AppEntry, CatalogError, IconKind, APP_CATALOG,
};
use showcase_core::launch::{launch_url, LAUNCH_TARGETS};

fn entry(id: u32, name: &'static str, color: &'static str) -> AppEntry {
    AppEntry {
        id,
        name,
        title: "",
        description: "",
        icon: IconKind::Calculator,
        color,
        features: &[],
    }
}

#[test]
fn reference_catalog_validates() {
    assert_eq!(validate_catalog(APP_CATALOG), Ok(()));
    assert_eq!(APP_CATALOG.len(), 6);
}

#[test]
fn empty_catalog_is_rejected() {
    assert_eq!(validate_catalog(&[]), Err(CatalogError::Empty));
}

#[test]
fn duplicate_ids_are_rejected() {
    let entries = [
        entry(1, "one", "blue-purple"),
        entry(1, "two", "green-teal"),
    ];
    assert_eq!(
        validate_catalog(&entries),
        Err(CatalogError::DuplicateId { id: 1 })
    );
}

#[test]
fn unknown_color_token_is_rejected() {
    let entries = [entry(1, "one", "mauve")];
    assert_eq!(
        validate_catalog(&entries),
        Err(CatalogError::UnknownColor {
            id: 1,
            color: "mauve".to_string()
        })
    );
}

#[test]
fn blank_name_is_rejected() {
    let entries = [entry(7, "  ", "blue-purple")];
    assert_eq!(
        validate_catalog(&entries),
        Err(CatalogError::EmptyName { id: 7 })
    );
}

#[test]
fn lookups_find_reference_entries() {
    assert_eq!(entry_by_id(3).map(|e| e.name), Some("MACE GUI"));
    assert!(entry_by_id(99).is_none());
    assert_eq!(entry_by_name("xrdlicious").map(|e| e.id), Some(1));
    assert!(entry_by_name("nope").is_none());
}

#[test]
fn screenshot_paths_follow_the_id_convention() {
    let entry = entry_by_id(5).unwrap();
    assert_eq!(entry.screenshot_src(), "assets/app-5.png");
}

#[test]
fn every_catalog_entry_has_a_launch_target() {
    // The reference data ships a URL for all six; the design only requires
    // that missing ones fall through to None.
    for entry in APP_CATALOG {
        assert!(entry.launch_url().is_some(), "{} has no target", entry.name);
    }
    assert_eq!(LAUNCH_TARGETS.len(), APP_CATALOG.len());
}

#[test]
fn unknown_launch_name_is_none() {
    assert!(launch_url("Coming Soon App").is_none());
    assert_eq!(
        launch_url(" XRDlicious "),
        Some("https://rdf-xrd-calculator.streamlit.app/")
    );
}
