use super::*;

fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        title: title.to_owned(),
        description: format!("{title} description"),
        price: 19.99,
        rating: 4.2,
        images: vec![format!("https://cdn.example.com/{id}/1.png")],
    }
}

fn catalog() -> CatalogState {
    CatalogState {
        products: vec![product(1, "Mascara"), product(2, "Eyeshadow"), product(7, "Powder")],
        error: None,
        loading: false,
    }
}

// =============================================================
// CatalogState defaults
// =============================================================

#[test]
fn catalog_state_default_is_empty() {
    let state = CatalogState::default();
    assert!(state.products.is_empty());
    assert!(state.error.is_none());
    assert!(!state.loading);
}

// =============================================================
// find
// =============================================================

#[test]
fn find_returns_matching_product() {
    let state = catalog();
    let found = state.find(2).expect("product 2");
    assert_eq!(found.title, "Eyeshadow");
}

#[test]
fn find_misses_unknown_id() {
    let state = catalog();
    assert!(state.find(3).is_none());
}

#[test]
fn find_on_empty_catalog_misses() {
    let state = CatalogState::default();
    assert!(state.find(1).is_none());
}

// =============================================================
// parse_product_id
// =============================================================

#[test]
fn parse_product_id_accepts_decimal() {
    assert_eq!(parse_product_id("3"), Some(3));
    assert_eq!(parse_product_id("42"), Some(42));
}

#[test]
fn parse_product_id_trims_whitespace() {
    assert_eq!(parse_product_id(" 7 "), Some(7));
}

#[test]
fn parse_product_id_rejects_non_numeric() {
    assert_eq!(parse_product_id("abc"), None);
    assert_eq!(parse_product_id("3a"), None);
    assert_eq!(parse_product_id(""), None);
}

#[test]
fn parse_product_id_rejects_negative() {
    assert_eq!(parse_product_id("-1"), None);
}
