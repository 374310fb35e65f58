use dioxus::prelude::*;

use crate::page::{
    equipment::EquipmentSection,
    feedback::FeedbackSection,
    home::{Hero, Partners},
    info::InfoSection,
};

#[component]
pub fn Index() -> Element {
    rsx! {
        Hero {}
        Partners {}
        EquipmentSection {}
        FeedbackSection {}
        InfoSection {}
    }
}
