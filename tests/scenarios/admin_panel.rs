//! Scenario: Admin Panel Filtered by Permission
//!
//! Journey: An admin area groups its pages under `/admin`, tags sections
//! with the permission they need, and hides sections the viewer lacks.
//!
//! Steps:
//! 1. Register a dashboard and a grouped `admin` section
//! 2. Tag sections with a `permission` value that cascades to sub-pages
//! 3. Drop sections the viewer may not see
//! 4. Render for the current request
//!
//! Success Criteria:
//! - Group prefix and class apply to every item inside the group
//! - Sub-pages inherit their section's permission
//! - The requested page is active and hidden sections are gone

use std::sync::Arc;

use menus::{Group, ItemId, ItemOptions, MenuConfig, MenuResult, MenuTree, StaticRequest};

use crate::common::*;
use crate::{assert_active, assert_inactive};

/// SCENARIO: Viewer without billing access opens the users page
#[test]
fn scenario_admin_panel_hides_sections_without_permission() {
    let mut menu = MenuTree::new("admin", MenuConfig::default())
        .with_request(Arc::new(StaticRequest::new("/admin/users")));

    menu.push("Dashboard", ItemOptions::from("admin").with_id("dashboard"))
        .unwrap();
    menu.group(
        Group::prefixed("admin").with_attr("class", "admin"),
        |m| -> MenuResult<()> {
            let mut users = m.push("Users", ItemOptions::from("users").with_id("users"))?;
            users.push("Invite", ItemOptions::from("users/invite").with_id("invite"))?;
            users.set_data("permission", "manage-users");

            m.push("Billing", ItemOptions::from("billing").with_id("billing"))?
                .set_data("permission", "billing");
            Ok(())
        },
    )
    .unwrap();
    assert_eq!(menu.current_prefix(), None);

    let invite = menu.find(&ItemId::from("invite")).unwrap();
    assert_eq!(
        invite.data("permission").and_then(|v| v.as_str()),
        Some("manage-users")
    );

    menu.filter(|item| {
        item.data("permission").and_then(|v| v.as_str()) != Some("billing")
    });
    assert!(menu.find(&ItemId::from("billing")).is_none());

    assert_active!(menu, "users");
    assert_inactive!(menu, "dashboard");

    assert_eq!(
        menu.as_unordered_list(&nav(), &sub()),
        concat!(
            r#"<ul class="nav">"#,
            r#"<li><a href="/admin">Dashboard</a></li>"#,
            r#"<li class="admin active"><a href="/admin/users">Users</a>"#,
            r#"<ul class="sub"><li class="admin"><a href="/admin/users/invite">Invite</a></li></ul>"#,
            r#"</li></ul>"#,
        )
    );
}
