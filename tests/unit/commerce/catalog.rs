use super::*;

#[test]
fn builtin_catalog_has_seven_unique_products() {
    let all = builtin();
    assert_eq!(all.len(), 7);
    for p in all {
        assert_eq!(all.iter().filter(|q| q.id == p.id).count(), 1);
        assert_eq!(all.iter().filter(|q| q.slug == p.slug).count(), 1);
        assert!(p.preview_image().is_some());
    }
}

#[test]
fn lookup_by_id_and_slug() {
    assert_eq!(by_slug("original").map(|p| p.id), Some("classic-new-york"));
    assert_eq!(by_id("lotus").map(|p| p.name), Some("Lotus"));
    assert!(by_id("cheesecake-de-queso").is_none());
    assert!(matches!(require("nope"), Err(MuxuError::Validation(_))));
}

#[test]
fn special_and_default_size_prices() {
    let cents = |id: &str| {
        pricing_options(by_id(id).unwrap())
            .iter()
            .map(|o| o.price_cents)
            .collect::<Vec<_>>()
    };
    assert_eq!(cents("pistachio"), vec![3300, 3800]);
    assert_eq!(cents("lotus"), vec![2900, 3400]);
    assert_eq!(cents("classic-new-york"), vec![2900, 3400]);
    assert_eq!(cents("turron-cheesecake"), vec![3300, 3800]);
    assert_eq!(cents("suchard-cheesecake"), vec![3300, 3800]);
}

#[test]
fn products_without_special_pricing_use_regular_prices() {
    let plain = Product {
        id: "new-flavour",
        limited_edition: false,
        ..by_id("oreo").unwrap().clone()
    };
    assert_eq!(size_price(&plain, Size::Mediana), 3000);
    assert_eq!(size_price(&plain, Size::Grande), 3400);
}

#[test]
fn size_options_carry_labels() {
    let opts = pricing_options(by_id("oreo").unwrap());
    assert_eq!(opts[0].size, Size::Mediana);
    assert_eq!(opts[0].subtitle, "8 trozos");
    assert_eq!(opts[0].price_label, "29€");
    assert_eq!(opts[1].subtitle, "12 trozos");
    assert_eq!(opts[1].price_label, "34€");
}

#[test]
fn size_parses_case_insensitively() {
    assert_eq!("Mediana".parse::<Size>().unwrap(), Size::Mediana);
    assert_eq!(" grande ".parse::<Size>().unwrap(), Size::Grande);
    assert!("XL".parse::<Size>().is_err());
}

#[test]
fn prices_round_to_whole_euros() {
    assert_eq!(format_price(2900), "29€");
    assert_eq!(format_price(2950), "30€");
    assert_eq!(format_price(2949), "29€");
    assert_eq!(format_price(0), "0€");
}
