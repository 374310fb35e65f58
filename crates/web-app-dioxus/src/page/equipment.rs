use dioxus::prelude::*;

use enisey_domain as domain;

use crate::component::element::{Block, Color, Container, Dialog, Icon, IconText, Tag, Title};

#[component]
pub fn EquipmentSection() -> Element {
    let mut catalog_filter = use_signal(domain::CatalogFilter::default);
    let detail = use_signal(|| None::<domain::EquipmentID>);

    let options = catalog_filter.read().options();
    let equipment = catalog_filter.read().filtered_view();

    rsx! {
        section {
            id: domain::Section::Equipment.anchor(),
            class: "section",
            Container {
                Title {
                    title: "Классификатор тренажеров",
                    subtitle: "Полная информация об оборудовании с видео-инструкциями и правилами безопасности",
                }
                div {
                    class: "buttons is-centered mb-5",
                    for (selection, is_selected) in options {
                        button {
                            key: "{selection}",
                            class: "button",
                            class: if is_selected { "is-primary" } else { "is-primary is-outlined" },
                            onclick: move |_| catalog_filter.write().select_category(selection),
                            "{selection}"
                        }
                    }
                }
                div {
                    class: "columns is-multiline",
                    for e in equipment {
                        div {
                            key: "{e.id}",
                            class: "column is-half-tablet is-one-third-desktop",
                            {view_equipment_card(e, detail)}
                        }
                    }
                }
            }
            {view_detail_dialog(detail)}
        }
    }
}

fn view_equipment_card(
    equipment: &'static domain::Equipment,
    mut detail: Signal<Option<domain::EquipmentID>>,
) -> Element {
    let id = equipment.id;
    rsx! {
        div {
            class: "card equipment-card",
            div {
                class: "card-image equipment-image",
                Icon { name: "dumbbell fa-3x", is_large: true, color: Color::Primary }
            }
            div {
                class: "card-content",
                div {
                    class: "is-flex is-justify-content-space-between is-align-items-flex-start mb-2",
                    p { class: "title is-5", "{equipment.name}" }
                    Tag { text: equipment.category.to_string(), color: Color::Info }
                }
                p { class: "has-text-grey", "{equipment.description}" }
            }
            footer {
                class: "card-footer",
                a {
                    class: "card-footer-item",
                    onclick: move |_| *detail.write() = Some(id),
                    IconText { icon: "circle-info", text: "Подробнее" }
                }
            }
        }
    }
}

fn view_detail_dialog(mut detail: Signal<Option<domain::EquipmentID>>) -> Element {
    let Some(equipment) = detail().and_then(domain::equipment) else {
        return rsx! {};
    };

    rsx! {
        Dialog {
            title: rsx! { "{equipment.name}" },
            subtitle: equipment.category.to_string(),
            close_event: move |_| *detail.write() = None,
            Block {
                h4 { class: "title is-6 mb-2", "Описание" }
                p { class: "has-text-grey", "{equipment.description}" }
            }
            Block {
                h4 {
                    class: "title is-6 mb-2",
                    IconText { icon: "shield-halved", text: "Техника безопасности", color: Color::Primary }
                }
                ul {
                    for (i, rule) in equipment.safety.iter().enumerate() {
                        li {
                            key: "{i}",
                            class: "mb-1",
                            IconText { icon: "circle-check", text: *rule, color: Color::Success }
                        }
                    }
                }
            }
            // Video playback is not available, the button is decorative.
            button {
                class: "button is-primary is-fullwidth",
                Icon { name: "play" }
                span { "Смотреть видео-инструкцию" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_section_renders() {
        let mut dom = VirtualDom::new(EquipmentSection);
        dom.rebuild_in_place();
    }
}
