use std::slice::Iter;

use crate::Property;

/// Anchor-addressable regions of the page, in page order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Section {
    Home,
    Equipment,
    Feedback,
    Info,
}

impl Property for Section {
    fn iter() -> Iter<'static, Section> {
        static SECTIONS: [Section; 4] = [
            Section::Home,
            Section::Equipment,
            Section::Feedback,
            Section::Info,
        ];
        SECTIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Equipment => "Тренажеры",
            Section::Feedback => "Обратная связь",
            Section::Info => "Информация",
        }
    }
}

impl Section {
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Equipment => "equipment",
            Section::Feedback => "feedback",
            Section::Info => "info",
        }
    }
}
