//! Snapshot tests for the selected-items panel model.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use fruitpicker::catalog::Catalog;
use fruitpicker::engine::SelectionEngine;
use fruitpicker::panel::PanelModel;

#[test]
fn snapshot_empty_panel() {
    let engine = SelectionEngine::new(Catalog::shared_fruits());
    insta::assert_json_snapshot!(PanelModel::from_engine(&engine), @r###"
    {
      "entries": [],
      "visible": false,
      "show_clear": false,
      "show_select_all": true
    }
    "###);
}

#[test]
fn snapshot_panel_in_selection_order() {
    let mut engine = SelectionEngine::new(Catalog::shared_fruits());
    engine.toggle_item(799);
    engine.toggle_item(0);

    insta::assert_json_snapshot!(PanelModel::from_engine(&engine), @r###"
    {
      "entries": [
        {
          "identity": "huge black pineapple",
          "color_tag": "black"
        },
        {
          "identity": "tiny navy apple",
          "color_tag": "navy"
        }
      ],
      "visible": true,
      "show_clear": true,
      "show_select_all": true
    }
    "###);
}

#[test]
fn test_everything_selected_hides_select_all() {
    let mut engine = SelectionEngine::new(Catalog::shared_fruits());
    engine.select_all();

    let model = PanelModel::from_engine(&engine);
    assert_eq!(model.entries.len(), 800);
    assert!(model.show_clear);
    assert!(!model.show_select_all);
}

#[test]
fn test_panel_removal_updates_model() {
    let mut engine = SelectionEngine::new(Catalog::shared_fruits());
    engine.toggle_item(0);
    engine.toggle_item(1);
    engine.toggle_item(2);

    assert!(engine.remove_entry("tiny navy apple"));
    let model = PanelModel::from_engine(&engine);
    let identities: Vec<&str> = model.entries.iter().map(|e| e.identity.as_str()).collect();
    assert_eq!(identities, vec!["tiny blue apple", "tiny aqua apple"]);
}

#[test]
fn test_panel_hidden_again_after_last_removal() {
    let mut engine = SelectionEngine::new(Catalog::shared_fruits());
    engine.toggle_item(3);
    assert!(PanelModel::from_engine(&engine).visible);

    assert!(engine.remove_entry("tiny teal apple"));
    let model = PanelModel::from_engine(&engine);
    assert!(!model.visible);
    assert!(model.entries.is_empty());
}
