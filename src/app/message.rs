//! Application messages

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Spin ============
    /// User asked for a spin
    SpinStart,
    /// One animation frame elapsed (from `iced::window::frames`)
    FrameTick,
    /// User dismissed the result
    SpinReset,
    /// The decoration lifetime for the given spin session elapsed
    DecorationExpired(u64),

    // ============ Roster ============
    OpenAddDialog,
    CloseAddDialog,
    AddInputChanged(String),
    AddSubmit,
    OpenManageDialog,
    CloseManageDialog,
    RemoveRestaurant(String),

    // ============ Window ============
    WindowResized(iced::Size),
}
