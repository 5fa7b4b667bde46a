//! Test fixtures - reusable menus for tests.

use std::sync::Arc;

use menus::{Attributes, ItemOptions, MenuConfig, MenuTree, StaticRequest};

/// Empty menu with the default configuration, rendered for `url`
pub fn menu_for(url: &str, config: MenuConfig) -> MenuTree {
    MenuTree::new("main", config).with_request(Arc::new(StaticRequest::new(url)))
}

/// A small public site:
///
/// ```text
/// home      /
/// about     /about
///   team    /about/team
///   history /about/history
/// contact   /contact      (followed by a divider)
/// social    raw content
/// ```
pub fn site_menu(url: &str) -> MenuTree {
    let mut menu = menu_for(url, MenuConfig::default());
    populate_site(&mut menu);
    menu
}

pub fn populate_site(menu: &mut MenuTree) {
    menu.push("Home", ItemOptions::from("/").with_id("home"))
        .unwrap();

    let mut about = menu
        .push("About", ItemOptions::from("about").with_id("about"))
        .unwrap();
    about
        .push("Team", ItemOptions::from("about/team").with_id("team"))
        .unwrap();
    about
        .push("History", ItemOptions::from("about/history").with_id("history"))
        .unwrap();

    menu.push("Contact", ItemOptions::from("contact").with_id("contact"))
        .unwrap();
    menu.divide(Attributes::new()).unwrap();
    menu.raw("Follow us", ItemOptions::new().with_id("social"))
        .unwrap();
}

pub fn nav() -> Attributes {
    Attributes::from([("class", "nav")])
}

pub fn sub() -> Attributes {
    Attributes::from([("class", "sub")])
}
