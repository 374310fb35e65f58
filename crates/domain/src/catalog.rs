use crate::{Category, Equipment, EquipmentID};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub(crate) static EQUIPMENT: [Equipment; 6] = [
    Equipment {
        id: EquipmentID(1),
        name: "Беговая дорожка",
        category: Category::Cardio,
        description: "Профессиональная беговая дорожка с регулируемой скоростью и углом наклона. \
                      Идеальна для разминки и кардиотренировок.",
        safety: &[
            "Начинайте с низкой скорости",
            "Используйте страховочный трос",
            "Не спрыгивайте с движущейся ленты",
        ],
        image: PLACEHOLDER_IMAGE,
    },
    Equipment {
        id: EquipmentID(2),
        name: "Силовая рама",
        category: Category::Strength,
        description: "Многофункциональная силовая рама для приседаний, жима и подтягиваний. \
                      Максимальная нагрузка 300 кг.",
        safety: &[
            "Всегда используйте страховочные упоры",
            "Проверяйте крепление грифа",
            "Не превышайте максимальный вес",
        ],
        image: PLACEHOLDER_IMAGE,
    },
    Equipment {
        id: EquipmentID(3),
        name: "Велотренажер",
        category: Category::Cardio,
        description: "Вертикальный велотренажер с электронным дисплеем и программируемыми \
                      режимами тренировок.",
        safety: &[
            "Отрегулируйте высоту сиденья",
            "Начинайте с легкого сопротивления",
            "Держите спину прямо",
        ],
        image: PLACEHOLDER_IMAGE,
    },
    Equipment {
        id: EquipmentID(4),
        name: "Гантельный ряд",
        category: Category::Strength,
        description: "Набор гантелей от 2 до 50 кг. Подходит для всех уровней подготовки.",
        safety: &[
            "Выбирайте адекватный вес",
            "Контролируйте движения",
            "Ставьте гантели на стойку после использования",
        ],
        image: PLACEHOLDER_IMAGE,
    },
    Equipment {
        id: EquipmentID(5),
        name: "Эллиптический тренажер",
        category: Category::Cardio,
        description: "Эллипсоид с минимальной нагрузкой на суставы. 20 уровней сопротивления.",
        safety: &[
            "Держитесь за поручни при старте",
            "Ставьте ноги полностью на педали",
            "Останавливайтесь плавно",
        ],
        image: PLACEHOLDER_IMAGE,
    },
    Equipment {
        id: EquipmentID(6),
        name: "Скамья для жима",
        category: Category::Strength,
        description: "Регулируемая скамья для жима под разными углами. Максимальная нагрузка 250 кг.",
        safety: &[
            "Используйте страховочные стойки",
            "Не работайте без страхующего с большим весом",
            "Проверяйте фиксацию угла наклона",
        ],
        image: PLACEHOLDER_IMAGE,
    },
];
