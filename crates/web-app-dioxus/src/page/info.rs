use dioxus::prelude::*;

use enisey_domain::{self as domain, InfoTab, Property};

use crate::component::element::{Color, Container, Tag, Title};

#[component]
pub fn InfoSection() -> Element {
    let mut active_tab = use_signal(InfoTab::default);
    let content = active_tab().content();

    rsx! {
        section {
            id: domain::Section::Info.anchor(),
            class: "section",
            Container {
                Title { title: "Дополнительная информация" }
                div {
                    class: "tabs is-centered is-boxed is-fullwidth",
                    ul {
                        for tab in InfoTab::iter().copied() {
                            li {
                                key: "{tab.name()}",
                                class: if active_tab() == tab { "is-active" },
                                a {
                                    onclick: move |_| *active_tab.write() = tab,
                                    "{tab.name()}"
                                }
                            }
                        }
                    }
                }
                div {
                    class: "card",
                    header {
                        class: "card-header",
                        div {
                            class: "card-header-title is-block",
                            p { class: "title is-5", "{content.title}" }
                            p { class: "subtitle is-6 has-text-grey", "{content.subtitle}" }
                        }
                    }
                    div {
                        class: "card-content content",
                        for (i, paragraph) in content.paragraphs.iter().enumerate() {
                            p { key: "{i}", "{paragraph}" }
                        }
                        if !content.badges.is_empty() {
                            div {
                                class: "tags pt-4",
                                for badge in content.badges {
                                    Tag { key: "{badge}", text: *badge, color: Color::Primary }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
