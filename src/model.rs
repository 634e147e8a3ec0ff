use serde::{Deserialize, Serialize};

pub type ShopId = u32;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShopDefinition {
    pub id: ShopId,
    pub name: String,
    pub unlock_level: u32, // 1..=10
    #[serde(default)]
    pub icon: String,
    // Solo para pintar la tarjeta de la tienda
    #[serde(default = "default_accent")]
    pub accent: [u8; 3],
}

fn default_accent() -> [u8; 3] {
    [168, 85, 247]
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemDefinition {
    pub shop_id: ShopId,
    pub name: String,
    pub price: u32,
    pub required_quantity: u32,
    pub riddle_text: String,
    pub accepted_answers: Vec<String>,
    pub reward_coins: u32,
    #[serde(default)]
    pub emoji_tag: String,
}

impl ItemDefinition {
    /// La respuesta se compara tal cual tras quitar espacios: "05" no vale por "5".
    pub fn accepts(&self, raw_input: &str) -> bool {
        let answer = raw_input.trim();
        self.accepted_answers.iter().any(|a| a == answer)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Story,
    LevelSelect,
    ShopSelect,
    Shopping,
    LevelComplete,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Splash
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Click,
    Success,
    Error,
    Coin,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apples() -> ItemDefinition {
        ItemDefinition {
            shop_id: 1,
            name: "Apples".into(),
            price: 5,
            required_quantity: 2,
            riddle_text: "If one costs 5Rs, what's the price?".into(),
            accepted_answers: vec!["5".into()],
            reward_coins: 10,
            emoji_tag: "🍎".into(),
        }
    }

    #[test]
    fn accepts_trims_surrounding_whitespace() {
        assert!(apples().accepts("5"));
        assert!(apples().accepts("  5 \n"));
    }

    #[test]
    fn accepts_is_exact_string_match() {
        let item = apples();
        assert!(!item.accepts("05"));
        assert!(!item.accepts("5.0"));
        assert!(!item.accepts(""));
        assert!(!item.accepts("five"));
    }

    #[test]
    fn accepts_any_of_several_answers() {
        let mut item = apples();
        item.accepted_answers.push("five".into());
        assert!(item.accepts("five"));
        assert!(item.accepts("5"));
    }

    #[test]
    fn screen_defaults_to_splash() {
        assert_eq!(Screen::default(), Screen::Splash);
    }
}
