use super::*;

#[test]
fn adding_the_same_line_increments_quantity() {
    let mut cart = Cart::new();
    cart.add("lotus", Size::Mediana, 2900);
    cart.add("lotus", Size::Mediana, 2900);
    cart.add("lotus", Size::Grande, 3400);

    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.items()[0].quantity, 2);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.subtotal_cents(), 2 * 2900 + 3400);
}

#[test]
fn add_quantity_merges_into_the_existing_line() {
    let mut cart = Cart::new();
    cart.add_quantity("lotus", Size::Grande, 3400, 2);
    cart.add_quantity("lotus", Size::Grande, 9999, 3);
    cart.add_quantity("lotus", Size::Mediana, 2900, 0);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 5);
    assert_eq!(cart.items()[0].unit_price_cents, 3400);
    assert_eq!(cart.subtotal_cents(), 5 * 3400);
}

#[test]
fn update_quantity_to_zero_removes_the_line() {
    let mut cart = Cart::new();
    cart.add("oreo", Size::Grande, 3400);
    cart.update_quantity("oreo", Size::Grande, 4);
    assert_eq!(cart.items()[0].quantity, 4);

    cart.update_quantity("oreo", Size::Grande, 0);
    assert!(cart.is_empty());

    cart.add("oreo", Size::Grande, 3400);
    cart.update_quantity("oreo", Size::Grande, -3);
    assert!(cart.is_empty());
}

#[test]
fn update_quantity_ignores_unknown_lines() {
    let mut cart = Cart::new();
    cart.add("oreo", Size::Grande, 3400);
    cart.update_quantity("oreo", Size::Mediana, 5);
    assert_eq!(cart.total_items(), 1);
}

#[test]
fn remove_and_clear() {
    let mut cart = Cart::new();
    cart.add("oreo", Size::Grande, 3400);
    cart.add("pistachio", Size::Mediana, 3300);
    cart.remove("oreo", Size::Grande);
    assert_eq!(cart.items()[0].product_id, "pistachio");
    cart.clear();
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.subtotal_cents(), 0);
}

#[test]
fn items_serialize_in_camel_case() {
    let mut cart = Cart::new();
    cart.add("lotus", Size::Mediana, 2900);
    let v = serde_json::to_value(&cart.items()[0]).unwrap();
    assert_eq!(v["productId"], "lotus");
    assert_eq!(v["size"], "Mediana");
    assert_eq!(v["unitPriceCents"], 2900);
}
