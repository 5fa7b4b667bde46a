//! Scenario: Storefront with Restful Sections
//!
//! Journey: A shop mounted under `/shop` lists its sections in a
//! configurable order and highlights the section of any product page.
//!
//! Steps:
//! 1. Load configuration enabling restful activation with a `shop` base
//! 2. Register sections with an `order` value
//! 3. Sort by that value and mark the active section for screen readers
//! 4. Render for a deep product URL
//!
//! Success Criteria:
//! - A product sub-page activates its section
//! - Sections render in `order`, not registration order
//! - Batch attribute updates reach only the selected items

use std::fs;
use std::sync::Arc;

use menus::{
    Attributes, ItemOptions, MenuRegistry, SortDirection, StaticRequest, TomlConfigProvider,
};
use serde_json::Value;
use tempfile::tempdir;

use crate::common::*;
use crate::{assert_active, assert_inactive};

/// SCENARIO: Shopper reads the reviews of a product
#[test]
fn scenario_storefront_highlights_section_of_product_page() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("menus.toml"),
        r#"
[menus.shop]
restful = true
rest_base = "shop"
"#,
    )
    .unwrap();

    let provider = TomlConfigProvider::load_or_default(Some(dir.path()));
    let mut registry = MenuRegistry::new(Arc::new(provider))
        .with_request(Arc::new(StaticRequest::new("/shop/products/42/reviews")));

    let menu = registry
        .menu("shop", |menu| {
            menu.push("Catalog", ItemOptions::from("products").with_id("catalog"))?
                .set_data("order", 2);
            menu.push("Cart", ItemOptions::from("cart").with_id("cart"))?
                .set_data("order", 1);
            menu.raw("Help", ItemOptions::new().with_id("help"))?
                .set_data("order", 3);
            Ok(())
        })
        .unwrap();

    assert_active!(menu, "catalog");
    assert_inactive!(menu, "cart");
    assert_inactive!(menu, "help");

    menu.sort_by("order", SortDirection::Ascending);
    let order: Vec<&str> = menu.all().iter().map(|item| item.title()).collect();
    assert_eq!(order, vec!["Cart", "Catalog", "Help"]);

    let mut current = menu.select_where("is_active", &Value::Bool(true), false);
    assert_eq!(current.len(), 1);
    current.set_attr("aria-current", "page");

    assert_eq!(
        menu.as_unordered_list(&Attributes::new(), &Attributes::new()),
        concat!(
            "<ul>",
            r#"<li><a href="/cart">Cart</a></li>"#,
            r#"<li class="active" aria-current="page"><a href="/products">Catalog</a></li>"#,
            "<li>Help</li>",
            "</ul>",
        )
    );
}
