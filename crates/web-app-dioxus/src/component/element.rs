use dioxus::prelude::*;
use strum::Display;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "success")]
    Success,
}

#[component]
pub fn Block(children: Element) -> Element {
    rsx! {
        div {
            class: "block",
            {children}
        }
    }
}

#[component]
pub fn Container(children: Element, has_text_centered: Option<bool>) -> Element {
    rsx! {
        div {
            class: "container px-3",
            class: if has_text_centered.unwrap_or_default() { "has-text-centered" },
            {children}
        }
    }
}

#[component]
pub fn Title(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "block has-text-centered mb-6",
            h2 { class: "title is-3", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "subtitle is-6 has-text-grey", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn Icon(
    name: String,
    is_small: Option<bool>,
    is_large: Option<bool>,
    px: Option<u8>,
    color: Option<Color>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            class: if is_large.unwrap_or_default() { "is-large" },
            class: if let Some(px) = px { "px-{px}" },
            class: if let Some(color) = color { "has-text-{color}" },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn IconText(icon: String, text: String, color: Option<Color>) -> Element {
    rsx! {
        span {
            class: "icon-text",
            class: if let Some(color) = color { "has-text-{color}" },
            Icon { name: icon }
            span { {text} }
        }
    }
}

#[component]
pub fn Tag(text: String, color: Option<Color>) -> Element {
    rsx! {
        span {
            class: "tag",
            class: if let Some(color) = color { "is-{color} is-light" },
            "{text}"
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    subtitle: Option<String>,
    close_event: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-primary mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-primary mb-2",
                                {title}
                            }
                        }
                        if let Some(subtitle) = subtitle {
                            div {
                                class: "subtitle is-6 has-text-grey",
                                "{subtitle}"
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "{message}"
                }
            }
        }
    }
}
