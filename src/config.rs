// src/config.rs

pub const MAX_LEVEL: u32 = 10;
pub const POINTS_PER_ANSWER: u32 = 10;
pub const STARS_PER_ANSWER: u32 = 1;
pub const SPLASH_DELAY_SECS: f64 = 3.0;

/// Parámetros de la partida. No se guardan entre sesiones.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub max_level: u32,
    pub points_per_answer: u32,
    pub stars_per_answer: u32,
    pub splash_delay_secs: f64,
    pub sound_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            points_per_answer: POINTS_PER_ANSWER,
            stars_per_answer: STARS_PER_ANSWER,
            splash_delay_secs: SPLASH_DELAY_SECS,
            sound_enabled: true,
        }
    }
}
