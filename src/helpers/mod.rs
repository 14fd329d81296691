pub mod config_helper;
pub mod terminal_color;
