use super::*;
use crate::model::{ItemDefinition, ShopDefinition};

impl GameSession {
    pub fn current_shop(&self) -> Option<&ShopDefinition> {
        self.progress.current_shop.and_then(|id| self.catalog.shop(id))
    }

    /// Productos de la tienda actual, en el orden del catálogo
    pub fn current_items(&self) -> Vec<&ItemDefinition> {
        self.progress
            .current_shop
            .map(|id| self.catalog.items_for_shop(id))
            .unwrap_or_default()
    }

    /// Tiendas del nivel seleccionado
    pub fn shops_for_current_level(&self) -> Vec<&ShopDefinition> {
        self.progress
            .current_level
            .map(|level| self.catalog.shops_for_level(level))
            .unwrap_or_default()
    }

    /// La visita se puede cerrar cuando todo lo del catálogo está en el carrito.
    /// Una tienda sin productos está completa desde el principio.
    pub fn is_shop_complete(&self) -> bool {
        if self.cart.active_shop().is_none() {
            return false;
        }
        self.current_items()
            .iter()
            .all(|item| self.cart.contains(&item.name))
    }
}
