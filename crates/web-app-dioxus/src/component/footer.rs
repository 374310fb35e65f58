use dioxus::prelude::*;

use enisey_domain::{self as domain, Property};
use enisey_web_app as web_app;

use crate::component::element::{Icon, IconText};

#[component]
pub fn Footer() -> Element {
    let config = use_context::<web_app::SiteConfig>();
    let version = web_app::SiteConfig::version();

    rsx! {
        footer {
            class: "footer has-background-dark has-text-light",
            div {
                class: "container",
                div {
                    class: "columns",
                    div {
                        class: "column",
                        p {
                            class: "title is-5 has-text-light",
                            Icon { name: "dumbbell" }
                            " {config.brand}"
                        }
                        p { class: "has-text-grey-light", "{config.blurb}" }
                    }
                    div {
                        class: "column",
                        p { class: "title is-6 has-text-light", "Навигация" }
                        ul {
                            for section in domain::Section::iter().copied() {
                                li {
                                    key: "{section.anchor()}",
                                    a {
                                        class: "has-text-grey-light",
                                        href: "#{section.anchor()}",
                                        onclick: move |event| {
                                            event.prevent_default();
                                            web_app::scroll::scroll_to_section(section);
                                        },
                                        "{section.name()}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "column",
                        p { class: "title is-6 has-text-light", "Контакты" }
                        ul {
                            class: "has-text-grey-light",
                            for contact in config.contacts {
                                li {
                                    key: "{contact.text}",
                                    IconText { icon: contact.icon, text: contact.text }
                                }
                            }
                        }
                    }
                }
                hr { class: "has-background-grey-dark" }
                div {
                    class: "has-text-centered has-text-grey",
                    p { "{config.copyright()}" }
                    p { class: "is-size-7", "v{version}" }
                }
            }
        }
    }
}
