//! Listing search.
//!
//! A term matches a product when the product's name, description or id
//! contains it as a case-insensitive substring. An empty term matches
//! everything.

use crate::product::Product;

/// Normalize raw search input into the stored term (lower-cased).
pub fn normalize_term(raw: &str) -> String {
    raw.to_lowercase()
}

/// Whether `product` matches an already-normalized `term`.
pub fn matches(product: &Product, term: &str) -> bool {
    term.is_empty()
        || product.name.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
        || product.id.to_lowercase().contains(term)
}

/// Products matching `term`, in their original order.
pub fn filter_products(products: &[Product], term: &str) -> Vec<Product> {
    let term = normalize_term(term);
    products
        .iter()
        .filter(|p| matches(p, &term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str, name: &str, description: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            logo_url: String::new(),
            release_date: Utc::now(),
            revision_date: Utc::now(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("p1", "Producto Uno", "Cuenta de ahorro"),
            product("p2", "Producto Dos", "Tarjeta de credito"),
            product("tc-01", "Visa Oro", "Linea de credito rotativa"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize_term("PRODUCTO"), "producto");
        assert_eq!(normalize_term("Ñandú"), "ñandú");
    }

    #[test]
    fn empty_term_keeps_all_in_order() {
        assert_eq!(ids(&filter_products(&catalog(), "")), vec!["p1", "p2", "tc-01"]);
    }

    #[test]
    fn matches_name_case_insensitively() {
        assert_eq!(ids(&filter_products(&catalog(), "visa")), vec!["tc-01"]);
    }

    #[test]
    fn matches_description() {
        assert_eq!(ids(&filter_products(&catalog(), "credito")), vec!["p2", "tc-01"]);
    }

    #[test]
    fn matches_id() {
        assert_eq!(ids(&filter_products(&catalog(), "P1")), vec!["p1"]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_products(&catalog(), "hipoteca").is_empty());
    }

    #[test]
    fn result_is_subset_of_input() {
        let all = catalog();
        for term in ["", "o", "de", "zz", "p"] {
            let filtered = filter_products(&all, term);
            assert!(filtered.iter().all(|f| all.iter().any(|p| p.id == f.id)));
        }
    }
}
