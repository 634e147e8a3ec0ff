use super::*;

impl GameSession {
    pub fn level_tiles(&self) -> Vec<LevelTile> {
        let highest = self.progress.highest_unlocked();
        (1..=self.progress.max_level())
            .map(|number| LevelTile {
                number,
                unlocked: self.progress.is_unlocked(number),
                frontier: number == highest,
            })
            .collect()
    }

    pub fn shop_cards(&self) -> Vec<ShopCard> {
        self.shops_for_current_level()
            .into_iter()
            .map(|shop| ShopCard {
                id: shop.id,
                name: shop.name.clone(),
                icon: shop.icon.clone(),
                accent: shop.accent,
            })
            .collect()
    }

    pub fn item_rows(&self) -> Vec<ItemRow> {
        self.current_items()
            .into_iter()
            .map(|item| ItemRow {
                name: item.name.clone(),
                emoji: item.emoji_tag.clone(),
                quantity: item.required_quantity,
                price: item.price,
                reward_coins: item.reward_coins,
                in_cart: self.cart.contains(&item.name),
            })
            .collect()
    }

    pub fn hud(&self) -> HudInfo {
        HudInfo {
            score: self.rewards.total_score,
            stars: self.rewards.stars,
            coins: self.rewards.coins,
            cart_len: self.cart.len(),
            highest_level: self.progress.highest_unlocked(),
            max_level: self.progress.max_level(),
            sound_enabled: self.sound_enabled,
        }
    }
}
