//! # Sample Data
//!
//! The six groceries of the checkout demo, plus a deterministic generator
//! for larger development catalogs.
//!
//! Generated items get 14-digit UPCs starting with `590`, which none of the
//! demo items use, so a generated catalog never shadows a demo price.

use cartwheel_core::GroceryItem;

/// `(upc, brand, product, price)`, lightest first.
///
/// The lightest item belongs on top of a cart so heavier ones don't crush it.
pub const DEMO_ITEMS: [(&str, &str, &str, f64); 6] = [
    ("00688267039317", "any brand", "eggs", 2.75),
    ("00835841005255", "any brand", "bread", 1.49),
    ("09073649000493", "any brand", "apple pie", 5.99),
    ("00025317533003", "Applegate", "hotdogs", 7.59),
    ("00038000291210", "Kellogg's", "rice krispies", 4.29),
    ("00075457129000", "any brand", "milk", 3.19),
];

/// Demo items, lightest first.
pub fn demo_items() -> Vec<GroceryItem> {
    DEMO_ITEMS
        .iter()
        .map(|&(upc, brand, name, price)| GroceryItem::new(upc, brand, name, price))
        .collect()
}

/// Product lines for generated data
const PRODUCTS: &[(&str, &[&str])] = &[
    (
        "Morton",
        &["Kosher Salt Coarse", "Iodized Salt", "Sea Salt Fine", "Lite Salt"],
    ),
    (
        "Nature's Way",
        &["Forskohlii - 60 Ct", "Echinacea", "Elderberry Gummies", "Fenugreek"],
    ),
    (
        "Smart Living",
        &[
            "10.5\" X 8\" 3 Subject Notebook College Ruled",
            "Index Cards",
            "Sticky Notes",
            "Binder Clips",
        ],
    ),
    (
        "Kellogg's",
        &["Corn Flakes", "Frosted Flakes", "Raisin Bran", "Special K"],
    ),
    (
        "Applegate",
        &["Turkey Bacon", "Chicken Sausage", "Roast Beef", "Genoa Salami"],
    ),
];

/// Size variants with their price addon in cents
const SIZES: &[(&str, u64)] = &[("Small", 0), ("Medium", 100), ("Large", 200), ("Family", 450)];

/// Deterministic sample catalog: the demo items followed by `count`
/// generated ones.
///
/// Generation cycles through the product lines, so every UPC is unique.
pub fn sample_items(count: usize) -> Vec<GroceryItem> {
    let variants = PRODUCTS
        .iter()
        .flat_map(|(brand, names)| names.iter().map(move |name| (*brand, *name)))
        .flat_map(|(brand, name)| SIZES.iter().map(move |size| (brand, name, *size)));

    let generated = variants
        .cycle()
        .take(count)
        .enumerate()
        .map(|(seed, (brand, name, (size, addon)))| generate_item(seed, brand, name, size, addon));

    demo_items().into_iter().chain(generated).collect()
}

fn generate_item(seed: usize, brand: &str, name: &str, size: &str, addon_cents: u64) -> GroceryItem {
    let upc = format!("590{:011}", seed);

    // $1.99 - $9.98 + size addon
    let cents = 199 + (seed as u64 * 17) % 800 + addon_cents;
    let price = cents as f64 / 100.0;

    let product = format!("{brand} {name} {size}");
    GroceryItem::new(upc, brand, product, price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_core::validation::{validate_price, validate_upc};
    use std::collections::HashSet;

    #[test]
    fn test_demo_items_come_first() {
        let items = sample_items(3);
        assert_eq!(items.len(), 9);
        assert_eq!(items[0].product_name(), "eggs");
        assert_eq!(items[5].product_name(), "milk");
    }

    #[test]
    fn test_generated_items_are_valid_and_unique() {
        let items = sample_items(250);
        let upcs: HashSet<&str> = items.iter().map(GroceryItem::upc_code).collect();
        assert_eq!(upcs.len(), items.len());

        for item in &items {
            assert!(validate_upc(item.upc_code()).is_ok(), "{item}");
            assert!(validate_price(item.price()).is_ok(), "{item}");
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a: Vec<String> = sample_items(20).iter().map(ToString::to_string).collect();
        let b: Vec<String> = sample_items(20).iter().map(ToString::to_string).collect();
        assert_eq!(a, b);
    }
}
