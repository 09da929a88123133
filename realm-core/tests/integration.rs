//! Integration Tests — End-to-End Archive Flows
//!
//! These tests chain the core pieces the way a front end does:
//! export text → records → filter engine → detail lookup → saved state.

use realm_core::archive;
use realm_core::carousel::{Carousel, CarouselAction};
use realm_core::catalog::CatalogEngine;
use realm_core::error::RealmError;
use realm_core::navigation::{NavState, View};
use realm_core::persistence::StateStore;
use realm_core::tabular;
use realm_core::types::{Category, Rarity};

const EXPORT: &str = "\
Category,Name,Nickname,Rarity,Main Image URL,Extra Image 1,Extra Image 2,Extra Image 3,Tags,Story
Monster,Slime,The Goo,C,slime.png,s1.png,s2.png,s3.png,Slow,Jiggles.
Monster,Wyvern,,A,wyvern.png,w1.png,,,Fire,Soars.
Monster,Fire Imp,,B,imp.png,,,,Fire,Cackles.
Pet,Ember Fox,Kit,S,fox.png,f1.png,f2.png,,Fire,Warm.
Magic,Frost Nova,,S,nova.png,,,,Ice,Cold.
";

// ---------------------------------------------------------------------------
// Export → engine → detail
// ---------------------------------------------------------------------------

#[test]
fn export_drives_browsing_and_detail() {
    let records = tabular::parse_records(EXPORT);
    assert_eq!(records.len(), 5);

    let mut engine = CatalogEngine::new(records, Category::Character);
    assert!(engine.visible_records().is_empty());
    assert!(engine.facet_tags().is_empty());

    // Open the monster grid.
    engine.set_category(Category::Monster);
    assert_eq!(engine.visible_records().len(), 3);
    let facets: Vec<_> = engine.facet_tags().iter().map(String::as_str).collect();
    assert_eq!(facets, vec!["Fire", "Slow"]);

    // Narrow by tag then rarity.
    engine.toggle_tag("Fire");
    let names: Vec<_> = engine.visible_records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Wyvern", "Fire Imp"]);
    engine.toggle_rarity(Rarity::B);
    let names: Vec<_> = engine.visible_records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Fire Imp"]);

    // Detail view and its carousel.
    let slime = engine.find_by_name("Slime").expect("slime");
    assert_eq!(slime.nickname.as_deref(), Some("The Goo"));
    let mut carousel = Carousel::new(slime.extra_images.iter().cloned());
    assert_eq!(carousel.active(), Some("s2.png"));
    assert_eq!(carousel.click(0), CarouselAction::Rotated);
    assert_eq!(carousel.click(1), CarouselAction::OpenViewer("s1.png".to_string()));

    // Jumping from a detail tag replaces the tag selection.
    engine.focus_tag("Slow");
    assert_eq!(engine.filters().rarity, Some(Rarity::B));
    assert!(engine.visible_records().is_empty());
    engine.toggle_rarity(Rarity::B);
    let names: Vec<_> = engine.visible_records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Slime"]);

    // Unknown names are NotFound, never a panic.
    assert!(matches!(engine.find_by_name("Lich"), Err(RealmError::NotFound(_))));
}

// ---------------------------------------------------------------------------
// Placeholder archive behaves like any other record set
// ---------------------------------------------------------------------------

#[test]
fn placeholder_archive_is_browsable() {
    let mut engine = CatalogEngine::new(archive::placeholder_archive(3), Category::Item);
    assert_eq!(engine.visible_records().len(), 3);

    let facets: Vec<_> = engine.facet_tags().iter().map(String::as_str).collect();
    assert_eq!(facets, vec!["Ancient", "Item", "Power"]);

    engine.set_search("legend 2");
    let names: Vec<_> = engine.visible_records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Item Legend 2"]);

    engine.set_category(Category::Magic);
    assert_eq!(engine.filters().search, "");
    assert_eq!(engine.visible_records().len(), 3);
}

// ---------------------------------------------------------------------------
// Navigation state survives a reopen of the file-backed store
// ---------------------------------------------------------------------------

#[test]
fn nav_state_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("realm_state.db");

    {
        let store = StateStore::open(&db_path, "navigation").expect("open");
        store
            .save_nav(&NavState {
                view: View::Detail,
                category: Some(Category::Pet),
            })
            .expect("save");
    }

    let store = StateStore::open(&db_path, "navigation").expect("reopen");
    let restored = NavState::resolve(store.load_nav().expect("load"));
    assert_eq!(restored.view, View::Detail);
    assert_eq!(restored.category, Some(Category::Pet));
}
