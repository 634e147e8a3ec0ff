use crate::model::{ShopDefinition, ShopId};
use std::collections::BTreeSet;

/// Niveles desbloqueados y selección actual (nivel + tienda).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    unlocked: BTreeSet<u32>,
    max_level: u32,
    pub current_level: Option<u32>,
    pub current_shop: Option<ShopId>,
}

impl ProgressTracker {
    pub fn new(max_level: u32) -> Self {
        Self {
            unlocked: BTreeSet::from([1]), // el nivel 1 siempre está abierto
            max_level,
            current_level: None,
            current_shop: None,
        }
    }

    /// Desbloquea `level`. Devuelve `true` solo si el nivel era nuevo.
    pub fn unlock(&mut self, level: u32) -> bool {
        if level == 0 || level > self.max_level {
            return false;
        }
        self.unlocked.insert(level)
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        self.unlocked.contains(&level)
    }

    pub fn unlocked_levels(&self) -> &BTreeSet<u32> {
        &self.unlocked
    }

    pub fn highest_unlocked(&self) -> u32 {
        self.unlocked.last().copied().unwrap_or(1)
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn select_level(&mut self, level: u32) -> bool {
        if !self.is_unlocked(level) {
            return false;
        }
        self.current_level = Some(level);
        true
    }

    /// Solo se entra en tiendas del nivel seleccionado.
    pub fn select_shop(&mut self, shop: &ShopDefinition) -> bool {
        match self.current_level {
            Some(level) if level == shop.unlock_level => {
                self.current_shop = Some(shop.id);
                true
            }
            _ => false,
        }
    }
}
