//! Catalog ids to checkout-backend ids.

use crate::commerce::catalog::Size;

type SizedIds = &'static [(Size, &'static str)];

/// Card-processor product ids per catalog product. Limited editions are sold only through
/// the hosted checkout.
const CARD_PRODUCTS: &[(&str, SizedIds)] = &[
    (
        "classic-new-york",
        &[
            (Size::Mediana, "prod_U0HHNXDULeXr1b"),
            (Size::Grande, "prod_U0HifPKFWdVVJh"),
        ],
    ),
    (
        "white-chocolate",
        &[
            (Size::Mediana, "prod_U0HkOsSXXldAoP"),
            (Size::Grande, "prod_U0HmFHVuXVUSJk"),
        ],
    ),
    (
        "lotus",
        &[
            (Size::Mediana, "prod_U0HnHsBK0HmfDY"),
            (Size::Grande, "prod_U0HnRKZa3jjjBc"),
        ],
    ),
    (
        "oreo",
        &[
            (Size::Mediana, "prod_U0HpZTONZrWEaT"),
            (Size::Grande, "prod_U0HqVmxHpcsHZw"),
        ],
    ),
    (
        "pistachio",
        &[
            (Size::Mediana, "prod_U0HsrrZAeTWZ9G"),
            (Size::Grande, "prod_U0HsGAjt2FBKrb"),
        ],
    ),
];

/// Hosted-checkout variant ids per catalog product.
const HOSTED_VARIANTS: &[(&str, SizedIds)] = &[
    (
        "turron-cheesecake",
        &[
            (Size::Mediana, "gid://shopify/ProductVariant/62782335484253"),
            (Size::Grande, "gid://shopify/ProductVariant/62782335517021"),
        ],
    ),
    (
        "suchard-cheesecake",
        &[
            (Size::Mediana, "gid://shopify/ProductVariant/62783265145181"),
            (Size::Grande, "gid://shopify/ProductVariant/62783265177949"),
        ],
    ),
    (
        "classic-new-york",
        &[
            (Size::Mediana, "gid://shopify/ProductVariant/62783394021725"),
            (Size::Grande, "gid://shopify/ProductVariant/62783394054493"),
        ],
    ),
    (
        "white-chocolate",
        &[
            (Size::Mediana, "gid://shopify/ProductVariant/62800560619869"),
            (Size::Grande, "gid://shopify/ProductVariant/62800560652637"),
        ],
    ),
    (
        "lotus",
        &[
            (Size::Mediana, "gid://shopify/ProductVariant/62789588812125"),
            (Size::Grande, "gid://shopify/ProductVariant/62789588844893"),
        ],
    ),
    (
        "oreo",
        &[
            (Size::Mediana, "gid://shopify/ProductVariant/62800608985437"),
            (Size::Grande, "gid://shopify/ProductVariant/62800609018205"),
        ],
    ),
    (
        "pistachio",
        &[
            (Size::Mediana, "gid://shopify/ProductVariant/62789783093597"),
            (Size::Grande, "gid://shopify/ProductVariant/62789783126365"),
        ],
    ),
];

/// Ids still carrying a setup placeholder are treated as unmapped.
pub fn is_placeholder(id: &str) -> bool {
    id.contains("YOUR_") || id.contains("PLACEHOLDER")
}

/// Look `product_id` up in `table`. Without a size the first entry wins.
pub fn lookup(
    table: &[(&str, SizedIds)],
    product_id: &str,
    size: Option<Size>,
) -> Option<&'static str> {
    let (_, ids) = table.iter().find(|(id, _)| *id == product_id)?;
    let id = match size {
        Some(size) => ids.iter().find(|(s, _)| *s == size)?.1,
        None => ids.first()?.1,
    };
    (!is_placeholder(id)).then_some(id)
}

pub fn card_product_id(product_id: &str, size: Option<Size>) -> Option<&'static str> {
    lookup(CARD_PRODUCTS, product_id, size)
}

pub fn hosted_variant_id(product_id: &str, size: Option<Size>) -> Option<&'static str> {
    lookup(HOSTED_VARIANTS, product_id, size)
}

#[cfg(test)]
#[path = "../../tests/unit/commerce/mapping.rs"]
mod tests;
