//! Restaurant roster - the user-editable list of candidate names
//!
//! Invariant: every stored name is non-empty, trimmed, and unique
//! (case-sensitive exact match). Insertion order is preserved for
//! rendering; it has no influence on the selection itself.

/// Default roster shipped with the app (the Dareesoft lunch circuit).
pub const DEFAULT_RESTAURANTS: &[&str] = &[
    "장수본가해장국",
    "샐러드박스",
    "고기를 굽다",
    "김밥나라",
    "먹보집",
    "이여사나무김밥",
    "자연식당(구도로)",
    "전주콩나루콩나물국밥",
    "에콥샐러드",
    "더빨강",
    "오리랑돼지랑(할매오삼구이)",
    "삼다옥1947",
    "긴자료코",
    "마루돈가",
    "엘에이북창동순두부",
    "밥식구",
    "할매순대국",
    "단청김치찜김치찌개",
    "제주몬트락",
    "담소소사골순대육개장",
    "깡우동",
    "바다애",
    "매취랑",
    "장홍규중화요리",
    "김영희동태찜&코다리냉면",
    "써브웨이",
    "정통마라탕",
    "맘스터치",
    "맘맘테이블",
    "정샤브",
    "메콩타이",
    "서울미트볼",
    "단가마감자탕",
    "홍콩반점",
    "옥된장",
    "산골밥상족발",
    "인사동",
    "청년다방",
    "후토루",
    "하오마라",
    "월선네",
    "봉추찜닭",
    "샐러디",
    "본죽&비빔밥",
    "진짜장짬뽕",
    "전주현대옥",
];

/// Outcome of an [`Roster::add`] attempt
///
/// Rejections are soft: the roster is left untouched and no error
/// propagates, the caller just gets told why nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Name was appended to the roster
    Added,
    /// Input was empty (or whitespace only) after trimming
    Empty,
    /// An identical name is already present
    Duplicate,
}

/// Ordered list of unique restaurant names
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Create a roster seeded with the default restaurant list
    pub fn with_defaults() -> Self {
        Self {
            names: DEFAULT_RESTAURANTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Try to append a name, trimming it first
    pub fn add(&mut self, raw: &str) -> AddOutcome {
        let name = raw.trim();
        if name.is_empty() {
            return AddOutcome::Empty;
        }
        if self.names.iter().any(|n| n == name) {
            return AddOutcome::Duplicate;
        }
        self.names.push(name.to_string());
        AddOutcome::Added
    }

    /// Remove a name; returns whether anything was removed
    pub fn remove(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Read-only view of the names, in insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_input() {
        let mut roster = Roster::new();
        assert_eq!(roster.add("  김밥나라  "), AddOutcome::Added);
        assert_eq!(roster.names(), ["김밥나라"]);
    }

    #[test]
    fn add_rejects_empty_and_whitespace() {
        let mut roster = Roster::new();
        assert_eq!(roster.add(""), AddOutcome::Empty);
        assert_eq!(roster.add("   "), AddOutcome::Empty);
        assert!(roster.is_empty());
    }

    #[test]
    fn add_rejects_duplicates_without_changing_length() {
        let mut roster = Roster::new();
        roster.add("써브웨이");
        assert_eq!(roster.add("써브웨이"), AddOutcome::Duplicate);
        assert_eq!(roster.add(" 써브웨이 "), AddOutcome::Duplicate);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn add_then_remove_round_trips() {
        let mut roster = Roster::with_defaults();
        let before = roster.names().to_vec();
        assert_eq!(roster.add("새로운식당"), AddOutcome::Added);
        assert!(roster.remove("새로운식당"));
        assert_eq!(roster.names(), before.as_slice());
    }

    #[test]
    fn remove_of_absent_name_is_a_no_op() {
        let mut roster = Roster::with_defaults();
        let len = roster.len();
        assert!(!roster.remove("없는식당"));
        assert_eq!(roster.len(), len);
    }

    #[test]
    fn default_roster_is_unique_and_trimmed() {
        let roster = Roster::with_defaults();
        assert!(!roster.is_empty());
        for (i, name) in roster.names().iter().enumerate() {
            assert_eq!(name.trim(), name);
            assert!(!name.is_empty());
            assert!(!roster.names()[..i].contains(name));
        }
    }
}
