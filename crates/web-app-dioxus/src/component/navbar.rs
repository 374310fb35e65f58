use dioxus::prelude::*;

use enisey_domain::{self as domain, Property};
use enisey_web_app as web_app;

use crate::component::element::{Color, Icon};

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let config = use_context::<web_app::SiteConfig>();
    let home = domain::Section::Home;

    rsx! {
        nav {
            class: "navbar is-fixed-top has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand",
                    a {
                        class: "navbar-item is-size-4",
                        href: "#{home.anchor()}",
                        onclick: move |event| {
                            event.prevent_default();
                            web_app::scroll::scroll_to_section(home);
                        },
                        Icon { name: "dumbbell", px: 2, color: Color::Primary }
                        span { class: "brand", "{config.brand}" }
                    }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        for section in domain::Section::iter().copied() {
                            a {
                                key: "{section.anchor()}",
                                class: "navbar-item",
                                href: "#{section.anchor()}",
                                onclick: move |event| {
                                    event.prevent_default();
                                    web_app::scroll::scroll_to_section(section);
                                    *menu_visible.write() = false;
                                },
                                "{section.name()}"
                            }
                        }
                        div {
                            class: "navbar-item",
                            // Login is not available, the button is decorative.
                            button { class: "button is-primary", "Войти" }
                        }
                    }
                }
            }
        }
    }
}
