// src/view_models.rs

use crate::model::ShopId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelTile {
    pub number: u32,
    pub unlocked: bool,
    pub frontier: bool, // el nivel más alto desbloqueado
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopCard {
    pub id: ShopId,
    pub name: String,
    pub icon: String,
    pub accent: [u8; 3],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRow {
    pub name: String,
    pub emoji: String,
    pub quantity: u32,
    pub price: u32,
    pub reward_coins: u32,
    pub in_cart: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudInfo {
    pub score: u32,
    pub stars: u32,
    pub coins: u32,
    pub cart_len: usize,
    pub highest_level: u32,
    pub max_level: u32,
    pub sound_enabled: bool,
}

impl LevelTile {
    pub fn label(&self) -> String {
        if !self.unlocked {
            format!("🔒 {}", self.number)
        } else if self.frontier {
            format!("{} ✨", self.number)
        } else {
            format!("{} ⭐", self.number)
        }
    }
}

impl ShopCard {
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.name.clone()
        } else {
            format!("{}  {}", self.icon, self.name)
        }
    }
}

impl ItemRow {
    /// El precio solo se enseña cuando el acertijo está resuelto.
    pub fn price_label(&self) -> Option<String> {
        self.in_cart.then(|| format!("Rs: {} ✔", self.price))
    }

    pub fn reward_label(&self) -> String {
        format!("🪙 +{}", self.reward_coins)
    }

    pub fn button_label(&self) -> &'static str {
        if self.in_cart { "✔ Added!" } else { "Add 🛒" }
    }
}

impl HudInfo {
    pub fn progress_label(&self) -> String {
        format!("Level {} / {}", self.highest_level, self.max_level)
    }

    pub fn is_market_master(&self) -> bool {
        self.highest_level >= self.max_level
    }

    pub fn sound_label(&self) -> &'static str {
        if self.sound_enabled { "🔊" } else { "🔇" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_tile_labels() {
        let locked = LevelTile {
            number: 4,
            unlocked: false,
            frontier: false,
        };
        let open = LevelTile {
            number: 1,
            unlocked: true,
            frontier: false,
        };
        let newest = LevelTile {
            number: 2,
            unlocked: true,
            frontier: true,
        };
        assert_eq!(locked.label(), "🔒 4");
        assert_eq!(open.label(), "1 ⭐");
        assert_eq!(newest.label(), "2 ✨");
    }

    #[test]
    fn price_is_hidden_until_bought() {
        let mut row = ItemRow {
            name: "Apples".into(),
            emoji: "🍎".into(),
            quantity: 2,
            price: 5,
            reward_coins: 10,
            in_cart: false,
        };
        assert_eq!(row.price_label(), None);
        assert_eq!(row.button_label(), "Add 🛒");
        row.in_cart = true;
        assert_eq!(row.price_label().as_deref(), Some("Rs: 5 ✔"));
        assert_eq!(row.button_label(), "✔ Added!");
    }

    #[test]
    fn hud_progress_and_master_badge() {
        let mut hud = HudInfo {
            score: 0,
            stars: 0,
            coins: 0,
            cart_len: 0,
            highest_level: 3,
            max_level: 10,
            sound_enabled: true,
        };
        assert_eq!(hud.progress_label(), "Level 3 / 10");
        assert!(!hud.is_market_master());
        hud.highest_level = 10;
        assert!(hud.is_market_master());
    }
}
