//! Built-in product catalog and size pricing.

use std::str::FromStr;

use crate::foundation::error::{MuxuError, MuxuResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: &'static str,
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    /// Base price shown on cards.
    pub price_cents: u32,
    /// Gallery images; the first one is the card preview.
    pub images: &'static [&'static str],
    pub limited_edition: bool,
    pub bestseller: bool,
    pub flavors: &'static [&'static str],
}

impl Product {
    pub fn preview_image(&self) -> Option<&'static str> {
        self.images.first().copied()
    }
}

static PRODUCTS: [Product; 7] = [
    Product {
        id: "turron-cheesecake",
        slug: "turron-cheesecake",
        name: "Christmas Kisscake · Turrón de Xixona",
        tagline: "El turrón de siempre, en un bocado suave y cremoso",
        description: "Un abrazo de Navidad en cada bocado.",
        full_description: "Un abrazo de Navidad en cada bocado. Nuestra cheesecake más cremosa se fusiona con el inconfundible sabor del turrón blando de Xixona para crear un postre suave, cálido y profundamente navideño.",
        price_cents: 3300,
        images: &[
            "/turron-preview.jpeg",
            "/turron-2.jpeg",
            "/turron-3.jpeg",
            "/turron-4.jpeg",
        ],
        limited_edition: true,
        bestseller: false,
        flavors: &["Almond Turrón", "Honey", "Citrus"],
    },
    Product {
        id: "suchard-cheesecake",
        slug: "suchard-cheesecake",
        name: "Christmas Kisscake · Suchard",
        tagline: "Chocolate Suchard convertido en cheesecake cremoso",
        description: "Chocolate Suchard convertido en cheesecake cremoso.",
        full_description: "Chocolate Suchard convertido en cheesecake cremoso. El sabor inconfundible del chocolate suizo se funde con nuestra base de cheesecake más delicada para crear un postre navideño intenso, sedoso y profundamente reconfortante.",
        price_cents: 3300,
        images: &[
            "/suchard-5.jpeg",
            "/suchard-preview.jpeg",
            "/suchard-2.jpeg",
            "/suchard-3.jpeg",
            "/suchard-4.jpeg",
        ],
        limited_edition: true,
        bestseller: false,
        flavors: &["Swiss Chocolate", "Cocoa", "Cream"],
    },
    Product {
        id: "classic-new-york",
        slug: "original",
        name: "Original",
        tagline: "Clásico, suave y perfecto para todos",
        description: "Clásico, suave y perfecto para todos.",
        full_description: "Clásico, suave y perfecto para todos. Nuestra receta original, horneada con la tradición de siempre. Un sabor que nunca pasa de moda, cremoso y delicado, perfecto para compartir en cualquier momento.",
        price_cents: 2900,
        images: &[
            "/original-3.jpeg",
            "/original-preview.jpeg",
            "/original-2.jpeg",
            "/original-4.jpeg",
            "/original-5.jpeg",
        ],
        limited_edition: false,
        bestseller: true,
        flavors: &["Original"],
    },
    Product {
        id: "white-chocolate",
        slug: "chocolate-blanco",
        name: "Chocolate blanco",
        tagline: "Cremoso y delicado",
        description: "Cremoso y delicado.",
        full_description: "Cremoso y delicado. El chocolate blanco más suave se encuentra con nuestra base de cheesecake para crear una experiencia dulce y elegante. Perfecto para los amantes de los sabores sutiles y refinados.",
        price_cents: 2900,
        images: &[
            "/chocolate-blanco-1.png",
            "/chocolate-blanco-2.png",
            "/chocolate-blanco-3.png",
        ],
        limited_edition: false,
        bestseller: false,
        flavors: &["White Chocolate"],
    },
    Product {
        id: "lotus",
        slug: "lotus",
        name: "Lotus",
        tagline: "Dulce y especiado",
        description: "Dulce y especiado.",
        full_description: "Dulce y especiado. La galleta Lotus más icónica se transforma en una cheesecake irresistible. Caramelo, canela y especias se funden en cada bocado, creando un sabor único que despierta los sentidos.",
        price_cents: 2900,
        images: &["/lotus-1.jpeg", "/lotus-2.jpeg", "/lotus-3.jpeg"],
        limited_edition: false,
        bestseller: false,
        flavors: &["Lotus", "Caramel"],
    },
    Product {
        id: "oreo",
        slug: "oreo",
        name: "Oreo",
        tagline: "Nostalgia en cada bocado",
        description: "Nostalgia en cada bocado.",
        full_description: "Nostalgia en cada bocado. Las galletas Oreo más queridas se convierten en una cheesecake cremosa y deliciosa. Chocolate y vainilla se unen para recordarnos los sabores de la infancia, con un toque elegante y sofisticado.",
        price_cents: 2900,
        images: &["/oreo-1.png"],
        limited_edition: false,
        bestseller: false,
        flavors: &["Oreo", "Chocolate"],
    },
    Product {
        id: "pistachio",
        slug: "pistachio",
        name: "Pistaccio",
        tagline: "Elegante y único",
        description: "Elegante y único.",
        full_description: "Elegante y único. El sabor distintivo del pistacho se combina con nuestra cheesecake más refinada. Un postre sofisticado que sorprende con su textura cremosa y su sabor intenso, perfecto para ocasiones especiales.",
        price_cents: 3300,
        images: &[
            "/pistaccio-1.jpeg",
            "/pistaccio-2.jpeg",
            "/pistaccio-3.jpeg",
            "/pistaccio-4.jpeg",
        ],
        limited_edition: false,
        bestseller: false,
        flavors: &["Pistachio", "Cream"],
    },
];

/// Every product, limited editions first.
pub fn builtin() -> &'static [Product] {
    &PRODUCTS
}

pub fn by_id(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

pub fn by_slug(slug: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.slug == slug)
}

/// Like [`by_id`] but a missing product is an error.
pub fn require(id: &str) -> MuxuResult<&'static Product> {
    by_id(id).ok_or_else(|| MuxuError::validation(format!("unknown product '{id}'")))
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Size {
    Mediana,
    Grande,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Mediana, Size::Grande];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mediana => "Mediana",
            Self::Grande => "Grande",
        }
    }

    pub fn slices(self) -> u32 {
        match self {
            Self::Mediana => 8,
            Self::Grande => 12,
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = MuxuError;

    fn from_str(s: &str) -> MuxuResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mediana" => Ok(Self::Mediana),
            "grande" => Ok(Self::Grande),
            other => Err(MuxuError::validation(format!(
                "unknown size '{other}' (expected Mediana or Grande)"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
    pub size: Size,
    /// `"8 trozos"`.
    pub subtitle: String,
    pub price_label: String,
    pub price_cents: u32,
}

impl SizeOption {
    fn new(size: Size, price_cents: u32) -> Self {
        Self {
            size,
            subtitle: format!("{} trozos", size.slices()),
            price_label: format_price(price_cents),
            price_cents,
        }
    }
}

/// `(mediana, grande)` prices in cents.
fn size_prices(product: &Product) -> (u32, u32) {
    match product.id {
        "pistachio" => (3300, 3800),
        "lotus" | "classic-new-york" | "white-chocolate" | "oreo" => (2900, 3400),
        _ if product.limited_edition => (3300, 3800),
        _ => (3000, 3400),
    }
}

pub fn pricing_options(product: &Product) -> Vec<SizeOption> {
    let (mediana, grande) = size_prices(product);
    vec![
        SizeOption::new(Size::Mediana, mediana),
        SizeOption::new(Size::Grande, grande),
    ]
}

pub fn size_price(product: &Product, size: Size) -> u32 {
    let (mediana, grande) = size_prices(product);
    match size {
        Size::Mediana => mediana,
        Size::Grande => grande,
    }
}

/// Whole euros, rounded half away from zero: `2950 -> "30€"`.
pub fn format_price(cents: u32) -> String {
    format!("{}€", (f64::from(cents) / 100.0).round())
}

#[cfg(test)]
#[path = "../../tests/unit/commerce/catalog.rs"]
mod tests;
