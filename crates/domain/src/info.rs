use std::slice::Iter;

use crate::Property;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum InfoTab {
    #[default]
    Privacy,
    Terms,
    About,
}

impl Property for InfoTab {
    fn iter() -> Iter<'static, InfoTab> {
        static TABS: [InfoTab; 3] = [InfoTab::Privacy, InfoTab::Terms, InfoTab::About];
        TABS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            InfoTab::Privacy => "Конфиденциальность",
            InfoTab::Terms => "Условия",
            InfoTab::About => "О проекте",
        }
    }
}

impl InfoTab {
    #[must_use]
    pub fn content(self) -> &'static InfoContent {
        match self {
            InfoTab::Privacy => &PRIVACY,
            InfoTab::Terms => &TERMS,
            InfoTab::About => &ABOUT,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InfoContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paragraphs: &'static [&'static str],
    pub badges: &'static [&'static str],
}

static PRIVACY: InfoContent = InfoContent {
    title: "Политика конфиденциальности",
    subtitle: "Обработка персональных данных",
    paragraphs: &[
        "Информационный ресурс обеспечивает защиту персональных данных пользователей в \
         соответствии с действующим законодательством РФ.",
        "Мы собираем только необходимую информацию для предоставления качественных услуг и не \
         передаем данные третьим лицам без вашего согласия.",
        "Все данные хранятся в защищенном виде на серверах, соответствующих требованиям \
         информационной безопасности.",
    ],
    badges: &[],
};

static TERMS: InfoContent = InfoContent {
    title: "Общие условия и требования",
    subtitle: "Правила использования информационного ресурса",
    paragraphs: &[
        "Доступ партнеров к информационному ресурсу осуществляется на недискриминационной основе.",
        "Партнеры обязуются предоставлять актуальную информацию о своих услугах и соблюдать \
         правила размещения контента.",
        "Пользователи обязуются соблюдать технику безопасности при работе с оборудованием, \
         представленным в классификаторе.",
    ],
    badges: &[],
};

static ABOUT: InfoContent = InfoContent {
    title: "О проекте",
    subtitle: "Информационный ресурс спортивного зала Енисей",
    paragraphs: &[
        "Информационный ресурс представляет собой современную платформу для информирования \
         пользователей о возможностях спортивной площадки.",
        "Сервис предоставляет полную информацию о тренажерах и оборудовании, включая технику \
         безопасности и видео-инструкции.",
        "Ресурс поддерживает работу на всех устройствах (компьютеры, планшеты, мобильные \
         устройства) и операционных системах, включая российские ОС.",
    ],
    badges: &["Мультиплатформенность", "Доступность", "Безопасность"],
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_info_tab_default() {
        assert_eq!(InfoTab::default(), InfoTab::Privacy);
    }

    #[test]
    fn test_info_tab_name() {
        let mut names = HashSet::new();

        for tab in InfoTab::iter() {
            let name = tab.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_info_tab_content() {
        let mut titles = HashSet::new();

        for tab in InfoTab::iter() {
            let content = tab.content();

            assert!(titles.insert(content.title));
            assert!(!content.subtitle.is_empty());
            assert_eq!(content.paragraphs.len(), 3);
        }

        assert_eq!(InfoTab::About.content().badges.len(), 3);
        assert!(InfoTab::Privacy.content().badges.is_empty());
    }
}
