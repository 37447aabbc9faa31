//! End-to-end classification scenarios for authoring forms and filters.

use newsdesk::{
    Catalog, Category, DisabledReason, Engine, GroupResolver, MainGroup, Selection, Toggle,
};

/// Politics ids 10-14, sports ids 20-21.
fn newsroom_catalog() -> Catalog {
    let categories = vec![
        Category::new(10, "Parliament", "parliament").with_parent("politics"),
        Category::new(11, "Elections", "elections").with_parent("politics"),
        Category::new(12, "Devolution", "devolution").with_parent("politics"),
        Category::new(13, "Diplomacy", "diplomacy").with_parent("politics"),
        Category::new(14, "Courts", "courts").with_parent("politics"),
        Category::new(20, "Football", "football").with_parent("sports"),
        Category::new(21, "Athletics", "athletics").with_parent("sports"),
    ];
    Catalog::new(categories, &GroupResolver::new()).expect("valid catalog")
}

/// Apply a toggle and return the resulting selection, asserting it succeeded.
fn toggle_ok(catalog: &Catalog, selection: Selection, id: i64) -> Selection {
    let outcome = Engine::new(catalog, &selection).toggle_sub_category(id);
    assert!(outcome.is_applied(), "toggle {} should succeed: {:?}", id, outcome);
    outcome.apply_to(selection)
}

// =============================================================================
// Authoring (edit mode)
// =============================================================================

#[test]
fn test_first_toggle_becomes_primary() {
    let catalog = newsroom_catalog();
    let selection = Selection::edit(Some(MainGroup::Politics));
    let engine = Engine::new(&catalog, &selection);

    let result = engine.toggle_sub_category(10).into_result();
    assert!(result.success);
    assert_eq!(result.new_selected_ids, Some(vec![10]));

    let selection = toggle_ok(&catalog, selection, 10);
    let primary = Engine::new(&catalog, &selection).primary_category().unwrap();
    assert_eq!(primary.category_id, 10);
}

#[test]
fn test_fifth_sub_category_is_rejected() {
    let catalog = newsroom_catalog();
    let mut selection = Selection::edit(Some(MainGroup::Politics));
    for id in [10, 11, 12, 13] {
        selection = toggle_ok(&catalog, selection, id);
    }
    assert_eq!(selection.len(), 4);

    let engine = Engine::new(&catalog, &selection);
    let outcome = engine.toggle_sub_category(14);
    assert_eq!(
        outcome,
        Toggle::Rejected {
            reason: DisabledReason::LimitReached
        }
    );

    let result = outcome.into_result();
    assert!(!result.success);
    assert_eq!(
        result.message.as_deref(),
        Some("Maximum of 4 sub-categories already selected")
    );
    assert_eq!(selection.ids(), &[10, 11, 12, 13]);
}

#[test]
fn test_removing_frees_a_slot() {
    let catalog = newsroom_catalog();
    let mut selection = Selection::edit(Some(MainGroup::Politics));
    for id in [10, 11, 12, 13] {
        selection = toggle_ok(&catalog, selection, id);
    }

    selection = toggle_ok(&catalog, selection, 11);
    assert!(!Engine::new(&catalog, &selection).is_disabled(14));

    selection = toggle_ok(&catalog, selection, 14);
    assert_eq!(selection.ids(), &[10, 12, 13, 14]);
}

#[test]
fn test_switching_main_group_clears_selection() {
    let catalog = newsroom_catalog();
    let selection = Selection::edit_with(MainGroup::Politics, [10, 11]);
    let engine = Engine::new(&catalog, &selection);

    let change = engine.select_main_group(MainGroup::Sports);
    assert!(change.clone().into_result().success);

    let selection = change.selection;
    assert!(selection.is_empty());
    assert_eq!(selection.group(), Some(MainGroup::Sports));

    let selection = toggle_ok(&catalog, selection, 20);
    assert_eq!(selection.ids(), &[20]);
}

#[test]
fn test_cross_group_rejection_has_its_own_message() {
    let catalog = newsroom_catalog();
    let selection = Selection::edit_with(MainGroup::Politics, [10]);
    let engine = Engine::new(&catalog, &selection);

    assert!(engine.is_disabled(20));
    let reason = engine.disabled_reason(20).unwrap();
    assert_eq!(reason, DisabledReason::OtherGroup);
    assert_ne!(reason.message(), DisabledReason::LimitReached.message());
}

#[test]
fn test_disabled_reason_none_when_selectable() {
    let catalog = newsroom_catalog();
    let selection = Selection::edit_with(MainGroup::Politics, [10]);
    let engine = Engine::new(&catalog, &selection);

    assert_eq!(engine.disabled_reason(11), None);
    assert_eq!(engine.disabled_reason(10), None);
}

#[test]
fn test_sub_categories_listing() {
    let catalog = newsroom_catalog();
    let selection = Selection::edit(Some(MainGroup::Politics));
    let engine = Engine::new(&catalog, &selection);

    assert_eq!(engine.main_groups().len(), 9);
    assert_eq!(engine.main_groups()[2], MainGroup::Politics);

    let ids: Vec<_> = engine
        .sub_categories_for(MainGroup::Politics)
        .iter()
        .map(|c| c.category_id)
        .collect();
    assert_eq!(ids, vec![10, 11, 12, 13, 14]);
    assert_eq!(
        engine.all_categories_for(MainGroup::Sports).len(),
        engine.sub_categories_for(MainGroup::Sports).len()
    );
    assert!(engine.sub_categories_for(MainGroup::Opinion).is_empty());
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn test_filter_never_disables() {
    let catalog = newsroom_catalog();
    let selection = Selection::from_parts([10, 20], None);
    let engine = Engine::new(&catalog, &selection);

    for category in catalog.categories() {
        assert!(!engine.is_disabled(category.category_id));
        assert!(engine.disabled_reason(category.category_id).is_none());
    }
    assert!(!engine.is_disabled(9999));

    let mut selection = selection;
    for id in [11, 12, 13, 14, 21] {
        selection = toggle_ok(&catalog, selection, id);
    }
    assert_eq!(selection.len(), 7);

    selection = toggle_ok(&catalog, selection, 20);
    assert_eq!(selection.ids(), &[10, 11, 12, 13, 14, 21]);
}

// =============================================================================
// Primary category
// =============================================================================

#[test]
fn test_primary_follows_selection() {
    let catalog = newsroom_catalog();
    let selection = Selection::edit(Some(MainGroup::Sports));
    assert!(Engine::new(&catalog, &selection).primary_category().is_none());

    let selection = toggle_ok(&catalog, selection, 21);
    let selection = toggle_ok(&catalog, selection, 20);
    assert_eq!(
        Engine::new(&catalog, &selection)
            .primary_category()
            .map(|c| c.category_id),
        Some(21)
    );

    // Dropping the first pick promotes the next one.
    let selection = toggle_ok(&catalog, selection, 21);
    assert_eq!(
        Engine::new(&catalog, &selection)
            .primary_category()
            .map(|c| c.category_id),
        Some(20)
    );
}

#[test]
fn test_inconsistent_snapshot_is_not_repaired() {
    let catalog = newsroom_catalog();
    // Cross-group ids while a main group is set: trusted as given.
    let selection = Selection::edit_with(MainGroup::Politics, [20, 10]);
    let engine = Engine::new(&catalog, &selection);

    assert_eq!(engine.selected_ids(), &[20, 10]);
    assert_eq!(engine.primary_category().map(|c| c.category_id), Some(20));

    // Removal still works for the out-of-group id.
    let selection = toggle_ok(&catalog, selection, 20);
    assert_eq!(selection.ids(), &[10]);
}
