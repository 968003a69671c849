//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Header
    m.insert(Key::AppTitle, "Lunch Picker");
    m.insert(Key::AppSubtitle, "Dareesoft payday restaurant selector");

    // Spin controls
    m.insert(Key::SpinStart, "Start Picking");
    m.insert(Key::Spinning, "Picking...");
    m.insert(Key::SpinAgain, "Pick Again");
    m.insert(Key::ResultTitle, "🎉 Selected Restaurant 🎉");

    // Roster management
    m.insert(Key::AddRestaurant, "Add Restaurant");
    m.insert(Key::AddDialogTitle, "Add a New Restaurant");
    m.insert(Key::AddDialogNameLabel, "Restaurant name");
    m.insert(Key::AddDialogPlaceholder, "Enter the restaurant name");
    m.insert(Key::AddDialogConfirm, "Add");
    m.insert(Key::ManageRestaurants, "Manage Restaurants");
    m.insert(Key::ManageDialogTitle, "Manage the Restaurant List");
    m.insert(Key::ManageEmpty, "No restaurants registered yet.");

    // Common
    m.insert(Key::Cancel, "Cancel");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
