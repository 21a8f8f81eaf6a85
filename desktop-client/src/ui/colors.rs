use eframe::egui::Color32;

pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub const FOOD: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const SNAKE_BODY: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const SNAKE_HEAD: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99);
pub const GAME_OVER_TEXT: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);
pub const PAUSED_TEXT: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24);
pub const HINT_TEXT: Color32 = Color32::GRAY;
