use dioxus::prelude::*;

use crate::{Route, component::element::ErrorMessage};

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        section {
            class: "section",
            ErrorMessage { message: "Страница не найдена: /{path}" }
            div {
                class: "has-text-centered",
                Link { class: "button is-primary", to: Route::Index {}, "На главную" }
            }
        }
    }
}
