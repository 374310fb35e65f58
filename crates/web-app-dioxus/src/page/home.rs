use dioxus::prelude::*;

use enisey_domain as domain;
use enisey_web_app as web_app;

use crate::component::element::{Container, Icon};

#[component]
pub fn Hero() -> Element {
    let config = use_context::<web_app::SiteConfig>();

    rsx! {
        section {
            id: domain::Section::Home.anchor(),
            class: "hero is-medium hero-gradient",
            div {
                class: "hero-body",
                Container {
                    has_text_centered: true,
                    span { class: "tag is-warning is-light mb-4", "{config.badge}" }
                    h1 {
                        class: "title is-1",
                        "{config.headline} "
                        span { class: "has-text-primary", "{config.brand}" }
                    }
                    p { class: "subtitle is-5 lead", "{config.lead}" }
                    div {
                        class: "buttons is-centered",
                        button {
                            class: "button is-primary is-medium",
                            onclick: move |_| {
                                web_app::scroll::scroll_to_section(domain::Section::Equipment);
                            },
                            Icon { name: "dumbbell" }
                            span { "Классификатор тренажеров" }
                        }
                        // Video playback is not available, the button is decorative.
                        button {
                            class: "button is-primary is-outlined is-medium",
                            Icon { name: "play" }
                            span { "Видео-инструкции" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Partners() -> Element {
    let config = use_context::<web_app::SiteConfig>();

    rsx! {
        section {
            class: "section has-background-light",
            Container {
                h2 { class: "title is-4 has-text-centered", "Наши партнеры" }
                div {
                    class: "columns is-mobile is-multiline is-centered",
                    for partner in config.partners {
                        div {
                            key: "{partner.name}",
                            class: "column is-half-mobile is-one-quarter-tablet",
                            div {
                                class: "box has-text-centered",
                                p { class: "is-size-2", "{partner.logo}" }
                                p { class: "has-text-weight-semibold", "{partner.name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
