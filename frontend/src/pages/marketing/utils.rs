use crate::models::Product;

/// Marketing-enabled products whose name or category contains `term`.
pub fn marketing_products(products: &[Product], term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| p.marketing_enabled)
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::marketing::repository::MarketingRepository;

    fn names(products: Vec<Product>) -> Vec<String> {
        products.into_iter().map(|p| p.name).collect()
    }

    #[test]
    fn only_enabled_products_are_listed() {
        let products = MarketingRepository::new().products();
        assert_eq!(
            names(marketing_products(&products, "")),
            vec!["Smartphone Galaxy S23", "Notebook Dell XPS"]
        );
        assert!(marketing_products(&products, "mouse").is_empty());
    }

    #[test]
    fn search_matches_name_or_category() {
        let products = MarketingRepository::new().products();
        assert_eq!(names(marketing_products(&products, "COMPUTA")), vec!["Notebook Dell XPS"]);
        assert_eq!(names(marketing_products(&products, "galaxy")), vec!["Smartphone Galaxy S23"]);
        assert!(marketing_products(&products, "SMG-S23").is_empty());
    }
}
