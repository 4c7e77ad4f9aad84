//! "Развитие Москвы": five periods from the 19th century to today.

use crate::domain::entities::{
    ChartKind, ChartSpec, Slide, SlideCatalog, SlideId, SlideLayout, SlideStats,
};
use crate::domain::errors::DeckError;

pub const TITLE: &str = "Развитие Москвы";
pub const SUBTITLE: &str = "XIX–XXI век: История великого города";

fn slides() -> Vec<Slide> {
    vec![
        Slide::new(1, "19 век", "Москва Империи")
            .description(
                "Эпоха классицизма и промышленного развития. \
                 Строительство железных дорог и первых заводов.",
            )
            .image("https://images.unsplash.com/photo-1513326738677-b964603b136d?w=800&h=600&fit=crop")
            .stats(SlideStats::new("~270 тыс.", "~70 км²").with_events([
                "1812 - Пожар Москвы",
                "1851 - Николаевская ж/д",
                "1862 - Политехнический музей",
            ])),
        Slide::new(2, "1900-1917", "Серебряный век")
            .description(
                "Культурный расцвет и модернизация. \
                 Появление трамваев, электричества и первых автомобилей.",
            )
            .image("https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=600&fit=crop")
            .stats(SlideStats::new("~1,8 млн", "~180 км²").with_events([
                "1903 - Первый трамвай",
                "1908 - МХТ",
                "1912 - Музей изящных искусств",
            ])),
        Slide::new(3, "1917-1991", "Советская Москва")
            .description(
                "Столица СССР. Масштабная реконструкция, \
                 строительство метро и сталинских высоток.",
            )
            .image("https://images.unsplash.com/photo-1547036967-23d11aacaee0?w=800&h=600&fit=crop")
            .stats(SlideStats::new("~8,9 млн", "~1000 км²").with_events([
                "1935 - Метрополитен",
                "1947-1957 - Сталинские высотки",
                "1980 - Олимпиада",
            ])),
        Slide::new(4, "1991-2010", "Новая Россия")
            .description(
                "Рыночная экономика и архитектурный бум. \
                 Строительство Москва-Сити и реновация центра.",
            )
            .image("https://images.unsplash.com/photo-1520637836862-4d197d17c46a?w=800&h=600&fit=crop")
            .stats(SlideStats::new("~11,5 млн", "~2500 км²").with_events([
                "1996 - Проект Москва-Сити",
                "2002 - Новая кольцевая",
                "2010 - Расширение границ",
            ])),
        Slide::new(5, "2010-2024", "Цифровая Москва")
            .description(
                "Умный город и технологическая трансформация. \
                 МЦК, МЦД и цифровые сервисы.",
            )
            .image("https://images.unsplash.com/photo-1512495039889-523d9de5b7fd?w=800&h=600&fit=crop")
            .stats(SlideStats::new("~12,7 млн", "~2600 км²").with_events([
                "2016 - МЦК",
                "2019 - МЦД",
                "2024 - Цифровая экосистема",
            ])),
    ]
}

fn soviet_charts() -> SlideLayout {
    SlideLayout::ChartPanel {
        charts: vec![
            ChartSpec::new("Население, млн", ChartKind::Line)
                .y_label("млн")
                .points([
                    ("1926", 2.0),
                    ("1939", 4.1),
                    ("1959", 6.0),
                    ("1970", 7.1),
                    ("1979", 7.9),
                    ("1989", 8.9),
                ]),
        ],
    }
}

fn new_russia_charts() -> SlideLayout {
    SlideLayout::ChartPanel {
        charts: vec![
            ChartSpec::new("Население, млн", ChartKind::Line)
                .y_label("млн")
                .points([("1991", 8.9), ("2002", 10.4), ("2010", 11.5)]),
            ChartSpec::new("Площадь, км²", ChartKind::Bar)
                .y_label("км²")
                .points([("1991", 1000.0), ("2002", 1080.0), ("2010", 2500.0)]),
        ],
    }
}

fn digital_charts() -> SlideLayout {
    SlideLayout::ChartPanel {
        charts: vec![
            ChartSpec::new("Население, млн", ChartKind::Area)
                .y_label("млн")
                .points([
                    ("2010", 11.5),
                    ("2014", 12.1),
                    ("2018", 12.5),
                    ("2021", 12.6),
                    ("2024", 12.7),
                ]),
            ChartSpec::new("Площадь, км²", ChartKind::Bar)
                .y_label("км²")
                .points([("2010", 2500.0), ("2012", 2550.0), ("2024", 2600.0)]),
        ],
    }
}

/// The Moscow deck with chart panels on the three most recent periods.
///
/// # Errors
///
/// Never fails for the built-in slides; the signature follows
/// [`SlideCatalog::new`].
pub fn moscow_catalog() -> Result<SlideCatalog, DeckError> {
    Ok(SlideCatalog::new(slides())?
        .with_layout(SlideId::new(3), soviet_charts())
        .with_layout(SlideId::new(4), new_russia_charts())
        .with_layout(SlideId::new(5), digital_charts()))
}
