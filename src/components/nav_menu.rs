//! Navigation Menu Component
//!
//! Fixed top bar with the brand mark and a single expandable menu button.
//! The bar elevates once the page scrolls and slides away while scrolling
//! down, unless the menu is open.

use std::time::Duration;

use dioxus::prelude::*;
use emptynest_core::site::{MenuState, NavChrome};

use crate::context::use_site;

/// An in-page menu destination
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MenuLink {
    pub label: &'static str,
    /// Target element selector, e.g. `#codes`
    pub target: &'static str,
}

/// Menu links of the full brand page
pub const HOME_LINKS: [MenuLink; 4] = [
    MenuLink { label: "Shop", target: "#storefronts" },
    MenuLink { label: "Partners", target: "#partnerships" },
    MenuLink { label: "Member Codes", target: "#codes" },
    MenuLink { label: "Highlights", target: "#highlights" },
];

/// Delay between closing the menu and scrolling to the target
const SCROLL_AFTER_CLOSE: Duration = Duration::from_millis(300);

const SCROLL_LISTENER: &str = r#"
window.addEventListener('scroll', () => dioxus.send(window.scrollY), { passive: true });
"#;

const KEY_LISTENER: &str = r#"
document.addEventListener('keydown', (e) => dioxus.send(e.key));
"#;

#[derive(Props, Clone, PartialEq)]
pub struct NavMenuProps {
    /// Dropdown destinations
    pub links: Vec<MenuLink>,
}

/// Navigation bar with expandable menu
#[component]
pub fn NavMenu(props: NavMenuProps) -> Element {
    let site = use_site();
    let mut menu = use_signal(MenuState::default);
    let mut chrome = use_signal(NavChrome::default);

    // Scroll offset drives the bar's look
    let scroll_config = site.config.clone();
    use_effect(move || {
        let config = scroll_config.clone();
        spawn(async move {
            let mut listener = document::eval(SCROLL_LISTENER);
            while let Ok(y) = listener.recv::<f64>().await {
                let menu_open = menu.peek().is_open();
                chrome.write().on_scroll(y, menu_open, &config);
            }
        });
    });

    // Escape closes the menu
    use_effect(move || {
        spawn(async move {
            let mut listener = document::eval(KEY_LISTENER);
            while let Ok(key) = listener.recv::<String>().await {
                if menu.peek().is_open() {
                    menu.write().handle_key(&key);
                }
            }
        });
    });

    let state = menu();
    let nav_class = chrome().class();
    let button_class = if state.is_open() { "menu-button open" } else { "menu-button" };
    let dropdown_class = if state.is_open() { "menu-dropdown active" } else { "menu-dropdown" };

    rsx! {
        nav { class: "{nav_class}",
            a { class: "brand-mark", href: "#top", "Empty Nest" }

            button {
                id: "menuButton",
                class: "{button_class}",
                r#type: "button",
                "aria-label": "Menu",
                "aria-controls": "menuDropdown",
                "aria-expanded": state.aria_expanded(),
                onclick: move |e| {
                    e.stop_propagation();
                    menu.write().toggle();
                },
                span { class: "menu-bar" }
                span { class: "menu-bar" }
                span { class: "menu-bar" }
            }

            div {
                id: "menuDropdown",
                class: "{dropdown_class}",
                "aria-hidden": state.aria_hidden(),
                for link in props.links.iter().copied() {
                    a {
                        key: "{link.target}",
                        class: "dropdown-link",
                        href: "{link.target}",
                        onclick: move |e| {
                            e.prevent_default();
                            menu.write().close();
                            spawn(async move {
                                tokio::time::sleep(SCROLL_AFTER_CLOSE).await;
                                scroll_to(link.target);
                            });
                        },
                        "{link.label}"
                    }
                }
            }
        }

        if state.is_open() {
            div {
                class: "menu-backdrop",
                onclick: move |_| menu.write().handle_outside_click(),
            }
        }
    }
}

/// Smooth-scroll to an element, leaving room for the nav bar
fn scroll_to(selector: &'static str) {
    let script = format!(
        r#"
        const target = document.querySelector('{selector}');
        const nav = document.querySelector('.navigation');
        if (target) {{
            const offset = nav ? nav.offsetHeight : 0;
            window.scrollTo({{ top: target.offsetTop - offset - 20, behavior: 'smooth' }});
        }}
        "#
    );
    let _ = document::eval(&script);
}
