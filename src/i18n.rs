//! Internationalization (i18n) support for LunchSpin
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - ko.rs: Korean translations (the app's home locale)
//! - en.rs: English translations

mod en;
mod ko;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Korean,
    English,
}

impl Language {
    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::Korean, Language::English]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Header
    AppTitle,
    AppSubtitle,

    // Spin controls
    SpinStart,
    Spinning,
    SpinAgain,
    ResultTitle,

    // Roster management
    AddRestaurant,
    AddDialogTitle,
    AddDialogNameLabel,
    AddDialogPlaceholder,
    AddDialogConfirm,
    ManageRestaurants,
    ManageDialogTitle,
    ManageEmpty,

    // Common
    Cancel,
}

impl Key {
    /// Every key, for coverage checks
    pub fn all() -> &'static [Key] {
        &[
            Key::AppTitle,
            Key::AppSubtitle,
            Key::SpinStart,
            Key::Spinning,
            Key::SpinAgain,
            Key::ResultTitle,
            Key::AddRestaurant,
            Key::AddDialogTitle,
            Key::AddDialogNameLabel,
            Key::AddDialogPlaceholder,
            Key::AddDialogConfirm,
            Key::ManageRestaurants,
            Key::ManageDialogTitle,
            Key::ManageEmpty,
            Key::Cancel,
        ]
    }
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Korean => ko::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_translated_in_every_language() {
        for &lang in Language::all() {
            for &key in Key::all() {
                let value = t(lang, key);
                assert_ne!(value, "???", "{key:?} missing for {lang:?}");
                assert!(!value.is_empty());
            }
        }
    }

    #[test]
    fn default_locale_is_korean() {
        let locale = Locale::default();
        assert_eq!(locale.language, Language::Korean);
        assert_eq!(locale.get(Key::AppTitle), "점심 메뉴 뽑기");
    }
}
