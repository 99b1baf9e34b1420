pub mod scroll_spy;
pub mod theme;
