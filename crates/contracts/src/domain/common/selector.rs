use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Закрытое перечисление, по которому фильтруется список
/// (статус или категория записи).
pub trait SelectorValue: Copy + Eq + Debug + Send + Sync + 'static {
    /// Все значения в порядке отображения в выпадающем списке
    fn all() -> &'static [Self];

    /// Машинное имя для URL и `<option value>`
    fn slug(&self) -> &'static str;

    /// Подпись для UI
    fn label(&self) -> &'static str;

    fn from_slug(slug: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.slug() == slug)
    }
}

/// Значение фильтра по статусу/категории: "All" или конкретное значение
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Selector<S> {
    #[default]
    All,
    Only(S),
}

impl<S: SelectorValue> Selector<S> {
    pub const ALL_SLUG: &'static str = "all";

    pub fn matches(&self, value: &S) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Selector::All => Self::ALL_SLUG,
            Selector::Only(v) => v.slug(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Selector::All => "All",
            Selector::Only(v) => v.label(),
        }
    }

    /// Неизвестное значение трактуется как "All"
    pub fn from_slug(slug: &str) -> Self {
        S::from_slug(slug).map(Selector::Only).unwrap_or(Selector::All)
    }

    /// "All" и затем все значения перечисления
    pub fn options() -> Vec<Self> {
        std::iter::once(Selector::All)
            .chain(S::all().iter().copied().map(Selector::Only))
            .collect()
    }
}

/// Реализует [`SelectorValue`] для перечисления без данных.
///
/// ```rust,ignore
/// selector_value!(PostStatus {
///     Draft => ("draft", "Draft"),
///     Published => ("published", "Published"),
/// });
/// ```
#[macro_export]
macro_rules! selector_value {
    ($ty:ident { $($variant:ident => ($slug:literal, $label:literal)),+ $(,)? }) => {
        impl $crate::domain::common::SelectorValue for $ty {
            fn all() -> &'static [Self] {
                &[$($ty::$variant),+]
            }

            fn slug(&self) -> &'static str {
                match self {
                    $($ty::$variant => $slug),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Green,
    }

    selector_value!(Color {
        Red => ("red", "Red"),
        Green => ("green", "Green"),
    });

    #[test]
    fn test_all_matches_everything() {
        let sel: Selector<Color> = Selector::All;
        assert!(sel.matches(&Color::Red));
        assert!(sel.matches(&Color::Green));
    }

    #[test]
    fn test_only_matches_equal_value() {
        let sel = Selector::Only(Color::Red);
        assert!(sel.matches(&Color::Red));
        assert!(!sel.matches(&Color::Green));
    }

    #[test]
    fn test_unknown_slug_falls_back_to_all() {
        assert_eq!(Selector::<Color>::from_slug("green"), Selector::Only(Color::Green));
        assert_eq!(Selector::<Color>::from_slug("purple"), Selector::All);
        assert_eq!(Selector::<Color>::from_slug("all"), Selector::All);
    }

    #[test]
    fn test_options_start_with_all() {
        let opts = Selector::<Color>::options();
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0], Selector::All);
        assert_eq!(opts[2].slug(), "green");
    }
}
