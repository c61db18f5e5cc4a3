//! Shared UI constants such as colors and panel sizing.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_TASK: &str = "#3b82f6";
pub const ACCENT_SUMMARY: &str = "#22c55e";
pub const ACCENT_PLACEHOLDER: &str = "#f97316";

// Chart layout
pub const TASK_COLUMN_WIDTH: f64 = 240.0;
pub const ROW_HEIGHT: f64 = 32.0;
pub const PRIMARY_HEADER_HEIGHT: f64 = 24.0;
pub const SECONDARY_HEADER_HEIGHT: f64 = 24.0;
pub const BAR_VERTICAL_INSET: f64 = 6.0;
pub const ROW_INDENT_PX: f64 = 16.0;
