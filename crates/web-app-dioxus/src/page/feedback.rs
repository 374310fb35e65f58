use dioxus::prelude::*;

use enisey_domain::{self as domain, FeedbackField, Property};

use crate::{
    component::{
        element::{Container, Icon, Title},
        form::{InputField, TextAreaField},
    },
    notify,
};

#[component]
pub fn FeedbackSection() -> Element {
    let mut form = use_signal(domain::FeedbackForm::default);
    let is_complete = form.read().is_complete();

    rsx! {
        section {
            id: domain::Section::Feedback.anchor(),
            class: "section has-background-light",
            Container {
                div {
                    class: "feedback",
                    Title {
                        title: "Обратная связь",
                        subtitle: "Оставьте свой отзыв о работе информационного ресурса",
                    }
                    div {
                        class: "box",
                        form {
                            onsubmit: move |event| {
                                event.prevent_default();
                                let acknowledgment = form.write().submit();
                                notify(acknowledgment);
                            },
                            for field in FeedbackField::iter().copied() {
                                {view_field(field, form)}
                            }
                            button {
                                class: "button is-primary is-fullwidth",
                                class: if !is_complete { "is-outlined" },
                                r#type: "submit",
                                Icon { name: "paper-plane" }
                                span { "Отправить отзыв" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn view_field(field: FeedbackField, mut form: Signal<domain::FeedbackForm>) -> Element {
    let value = form.read().field(field).to_string();
    let oninput = move |event: FormEvent| form.write().set_field(field, event.value());

    match field {
        FeedbackField::Name => rsx! {
            InputField {
                key: "{field:?}",
                label: field.name(),
                name: "name",
                placeholder: field.placeholder(),
                left_icon: rsx! { i { class: "fas fa-user" } },
                value,
                is_required: true,
                oninput,
            }
        },
        FeedbackField::Email => rsx! {
            InputField {
                key: "{field:?}",
                label: field.name(),
                name: "email",
                r#type: "email",
                placeholder: field.placeholder(),
                left_icon: rsx! { i { class: "fas fa-envelope" } },
                value,
                is_required: true,
                oninput,
            }
        },
        FeedbackField::Message => rsx! {
            TextAreaField {
                key: "{field:?}",
                label: field.name(),
                name: "message",
                placeholder: field.placeholder(),
                rows: 5,
                value,
                is_required: true,
                oninput,
            }
        },
    }
}
