use dioxus::prelude::*;

#[component]
pub fn InputField(
    label: String,
    name: String,
    r#type: Option<String>,
    placeholder: Option<String>,
    left_icon: Option<Element>,
    value: String,
    is_required: Option<bool>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", r#for: "{name}", "{label}" }
            div {
                class: "control",
                class: if left_icon.is_some() { "has-icons-left" },
                input {
                    class: "input",
                    id: "{name}",
                    name: "{name}",
                    r#type: if let Some(r#type) = r#type { r#type } else { "text" },
                    placeholder: if let Some(placeholder) = placeholder { placeholder },
                    required: is_required.unwrap_or_default(),
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
                if let Some(ref left_icon) = left_icon {
                    span {
                        class: "icon is-left",
                        {left_icon}
                    }
                }
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    label: String,
    name: String,
    placeholder: Option<String>,
    rows: Option<usize>,
    value: String,
    is_required: Option<bool>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", r#for: "{name}", "{label}" }
            div {
                class: "control",
                textarea {
                    class: "textarea",
                    id: "{name}",
                    name: "{name}",
                    rows: rows.unwrap_or(5),
                    placeholder: if let Some(placeholder) = placeholder { placeholder },
                    required: is_required.unwrap_or_default(),
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}
