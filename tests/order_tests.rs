//! Tests for the Order Engine
//!
//! These tests verify:
//! - End-to-end ordering scenarios against a loaded catalog
//! - Capacity, duplicate and model-selection rules
//! - Pricing for every model trim

use car_dealer::{Catalog, Model, ModelSelection, Order, OrderRejection, OrderState, MAX_OPTIONS};
use std::io::Cursor;

fn load(text: &str) -> Catalog {
    Catalog::from_reader(Cursor::new(text.to_string())).expect("catalog should load")
}

fn eight_option_catalog() -> Catalog {
    load(
        "500 Sunroof\n1200 Leather Seats\n300 Floor Mats\n800 Navigation\n\
         450 Heated Mirrors\n650 Alloy Wheels\n900 Premium Audio\n250 Tow Hitch\n",
    )
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_full_ordering_scenario() {
    let catalog = load("500 Sunroof\n1200 Leather Seats\n");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find("SUNROOF"), Some(0));

    let mut order = Order::new();
    order.select_model(Model::L);
    assert_eq!(order.total_price(&catalog), 12_000);

    order.add_option(&catalog, "sunroof").unwrap();
    assert_eq!(order.selected_indices(), &[0]);
    assert_eq!(order.total_price(&catalog), 12_500);

    order.add_option(&catalog, "leather seats").unwrap();
    assert_eq!(order.selected_indices(), &[0, 1]);
    assert_eq!(order.total_price(&catalog), 13_700);

    order.remove_option(&catalog, "SUNROOF").unwrap();
    assert_eq!(order.selected_indices(), &[1]);
    assert_eq!(order.total_price(&catalog), 13_200);

    order.reset();
    assert_eq!(order.model(), ModelSelection::Unselected);
    assert!(order.selected_indices().is_empty());
    assert_eq!(order.total_price(&catalog), 0);
}

#[test]
fn test_model_e_with_two_options() {
    let catalog = load("500 Sunroof\n750 Floor Mats\n");
    let mut order = Order::new();
    order.select_model(Model::E);
    order.add_option(&catalog, "Sunroof").unwrap();
    order.add_option(&catalog, "Floor Mats").unwrap();
    assert_eq!(order.total_price(&catalog), 11_250);
}

#[test]
fn test_base_price_per_model() {
    let catalog = Catalog::default();
    let mut order = Order::new();
    for (model, price) in [(Model::E, 10_000), (Model::L, 12_000), (Model::X, 18_000)] {
        order.select_model(model);
        assert_eq!(order.total_price(&catalog), price);
    }
}

// =============================================================================
// Capacity Tests
// =============================================================================

#[test]
fn test_seventh_option_is_rejected() {
    let catalog = eight_option_catalog();
    let mut order = Order::new();
    order.select_model(Model::X);

    let names: Vec<String> = catalog.iter().map(|o| o.name().to_string()).collect();
    for name in &names[..MAX_OPTIONS] {
        order.add_option(&catalog, name).unwrap();
    }
    let before = order.selected_indices().to_vec();

    assert_eq!(
        order.add_option(&catalog, &names[6]),
        Err(OrderRejection::CapacityExceeded)
    );
    assert_eq!(order.selected_indices(), before.as_slice());
    assert_eq!(order.len(), MAX_OPTIONS);
}

#[test]
fn test_removing_frees_a_slot() {
    let catalog = eight_option_catalog();
    let mut order = Order::new();
    order.select_model(Model::E);
    for option in catalog.iter().take(MAX_OPTIONS) {
        order.add_option(&catalog, option.name()).unwrap();
    }
    order.remove_option(&catalog, "navigation").unwrap();
    assert_eq!(order.add_option(&catalog, "tow hitch"), Ok(7));
    assert_eq!(order.len(), MAX_OPTIONS);
}

// =============================================================================
// Ordering and Duplicate Tests
// =============================================================================

#[test]
fn test_remove_then_add_moves_entry_to_end() {
    let catalog = eight_option_catalog();
    let mut order = Order::new();
    order.select_model(Model::L);
    order.add_option(&catalog, "Sunroof").unwrap();
    order.add_option(&catalog, "Navigation").unwrap();
    order.add_option(&catalog, "Floor Mats").unwrap();

    order.remove_option(&catalog, "sunroof").unwrap();
    order.add_option(&catalog, "SUNROOF").unwrap();

    assert_eq!(order.selected_indices(), &[3, 2, 0]);
    assert_eq!(
        order.describe_selection(&catalog),
        vec!["Navigation", "Floor Mats", "Sunroof"]
    );
}

#[test]
fn test_duplicate_in_any_case_adds_once() {
    let catalog = eight_option_catalog();
    let mut order = Order::new();
    order.select_model(Model::L);
    order.add_option(&catalog, "alloy wheels").unwrap();
    assert_eq!(
        order.add_option(&catalog, "ALLOY WHEELS"),
        Err(OrderRejection::AlreadySelected)
    );
    assert_eq!(order.selected_indices(), &[5]);
}

#[test]
fn test_colliding_names_resolve_to_first_entry() {
    let catalog = load("100 Mats\n900 MATS\n");
    let mut order = Order::new();
    order.select_model(Model::E);
    assert_eq!(order.add_option(&catalog, "mats"), Ok(0));
    assert_eq!(
        order.add_option(&catalog, "Mats"),
        Err(OrderRejection::AlreadySelected)
    );
    assert_eq!(order.total_price(&catalog), 10_100);
}

// =============================================================================
// Model Selection Tests
// =============================================================================

#[test]
fn test_remove_before_model_selected_is_noop() {
    let catalog = eight_option_catalog();
    let mut order = Order::new();
    assert_eq!(
        order.remove_option(&catalog, "Sunroof"),
        Err(OrderRejection::NotFound)
    );
    assert_eq!(order.state(), OrderState::NoModel);
    assert!(order.is_empty());
}

#[test]
fn test_add_after_reset_requires_model_again() {
    let catalog = eight_option_catalog();
    let mut order = Order::new();
    order.select_model(Model::X);
    order.add_option(&catalog, "Sunroof").unwrap();
    order.reset();
    assert_eq!(
        order.add_option(&catalog, "Sunroof"),
        Err(OrderRejection::NoModelSelected)
    );
}
