pub mod navigation;
pub mod theme;
