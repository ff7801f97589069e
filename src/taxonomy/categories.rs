/// Built-in auto-repair taxonomy: category name and its keyword hints.
pub const REPAIR_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Кузовные работы и детейлинг",
        &["кузов", "крыло", "бампер", "покраска", "вмятина", "царапина", "полировка", "детейлинг"],
    ),
    (
        "Ремонт/замена двигателя и навесного",
        &[
            "двигатель", "мотор", "троит", "стук", "перегрев", "масло", "свечи", "цилиндр",
            "поршень", "ремень грм", "навесного",
        ],
    ),
    (
        "Автоэлектрики/компьют.диагностика",
        &[
            "электрика", "проводка", "аккумулятор", "фары", "лампочки", "генератор", "стартер",
            "бортовой компьютер", "диагностика",
        ],
    ),
    (
        "Ремонт ходовой/подвески/геометрия",
        &[
            "ходовая", "подвеска", "амортизаторы", "рессоры", "стойки", "стабилизатор",
            "стук при езде", "вибрация", "геометрия",
        ],
    ),
    (
        "Трансмиссия АКПП/МКПП/Вариатор",
        &["коробка", "трансмиссия", "сцепление", "акпп", "мкпп", "вариатор", "передачи", "переключение"],
    ),
    (
        "Ремонт печка/кондиционер/радиатор",
        &["печка", "кондиционер", "радиатор", "отопитель", "климат"],
    ),
    (
        "Ремонт топливной системы",
        &["топливо", "бензин", "инжектор", "карбюратор", "бензонасос", "форсунки"],
    ),
    ("Рулевой механизм", &["руль", "рулевая рейка", "гур", "гидроусилитель"]),
    ("Сварочные/токарные работы", &["сварка", "сварочные", "токарные"]),
    ("Ремонт стекол", &["стекло", "лобовое", "заднее", "боковое", "трещина"]),
    ("Выхлопная система/Ремонт турбин", &["выхлоп", "глушитель", "катализатор", "турбина"]),
    ("Чип тюнинг", &["чип", "тюнинг", "прошивка", "мощность"]),
    ("Ремонт стартера / генератора", &["стартер", "генератор"]),
    (
        "Замена масла и жидкостей",
        &["масло", "антифриз", "тормозная жидкость", "жидкость гур", "замена масла", "фильтр"],
    ),
    ("Установка газа на авто", &["газ", "гбо", "газобаллонное", "метан", "пропан"]),
];

/// Example requests shown to users, keyed by the category they belong to.
pub const SAMPLE_REQUESTS: &[(&str, &[&str])] = &[
    (
        "Кузовные работы и детейлинг",
        &["У меня вмятина на переднем крыле после парковки", "Нужна полировка и детейлинг салона"],
    ),
    (
        "Ремонт/замена двигателя и навесного",
        &["Двигатель троит и плохо заводится", "Стук в двигателе при ускорении"],
    ),
    (
        "Автоэлектрики/компьют.диагностика",
        &["Не работают фары и бортовой компьютер", "Аккумулятор разряжается за ночь"],
    ),
    (
        "Ремонт ходовой/подвески/геометрия",
        &["Стук в подвеске при проезде неровностей", "Машину ведет в сторону при движении"],
    ),
    (
        "Замена масла и жидкостей",
        &["Нужно поменять масло и фильтры", "Хочу заменить антифриз и тормозную жидкость"],
    ),
];

pub fn sample_requests_for(category: &str) -> &'static [&'static str] {
    SAMPLE_REQUESTS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, samples)| *samples)
        .unwrap_or(&[])
}
