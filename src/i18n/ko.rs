//! Korean translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Header
    m.insert(Key::AppTitle, "점심 메뉴 뽑기");
    m.insert(Key::AppSubtitle, "Dareesoft 페이코 식당 선택기");

    // Spin controls
    m.insert(Key::SpinStart, "뽑기 시작");
    m.insert(Key::Spinning, "뽑는 중...");
    m.insert(Key::SpinAgain, "다시 뽑기");
    m.insert(Key::ResultTitle, "🎉 선택된 레스토랑 🎉");

    // Roster management
    m.insert(Key::AddRestaurant, "레스토랑 추가");
    m.insert(Key::AddDialogTitle, "새 레스토랑 추가");
    m.insert(Key::AddDialogNameLabel, "레스토랑 이름");
    m.insert(Key::AddDialogPlaceholder, "레스토랑 이름을 입력하세요");
    m.insert(Key::AddDialogConfirm, "추가");
    m.insert(Key::ManageRestaurants, "레스토랑 관리");
    m.insert(Key::ManageDialogTitle, "레스토랑 목록 관리");
    m.insert(Key::ManageEmpty, "등록된 레스토랑이 없습니다.");

    // Common
    m.insert(Key::Cancel, "취소");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
