#![cfg(feature = "gui")]

/// Light theme tokens for the drive window
pub mod theme {
    pub const WHITE: u32 = 0xFFFFFF;

    // Gray scale
    pub const GRAY_50: u32 = 0xF9FAFB;
    pub const GRAY_100: u32 = 0xF3F4F6; // Muted fill (usage track, avatar)
    pub const GRAY_200: u32 = 0xE5E7EB; // Border
    pub const GRAY_500: u32 = 0x6B7280; // Muted text
    pub const GRAY_600: u32 = 0x4B5563;
    pub const GRAY_900: u32 = 0x111827;

    pub const BG: u32 = WHITE;
    pub const BG_HOVER: u32 = GRAY_100;
    pub const FG: u32 = GRAY_900;
    pub const FG_SECONDARY: u32 = GRAY_500;
    pub const MUTED_BG: u32 = GRAY_100;
    pub const BORDER: u32 = GRAY_200;

    // Primary button
    pub const PRIMARY: u32 = GRAY_900;
    pub const PRIMARY_HOVER: u32 = 0x1F2937;
    pub const PRIMARY_FG: u32 = WHITE;

    // Links and storage bar
    pub const LINK: u32 = GRAY_900;
    pub const USAGE: u32 = 0x22C55E; // green-500
}
