use crate::model::{ItemDefinition, ShopId};

/// Acertijo abierto sobre la tienda: el producto y lo que lleva escrito el jugador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRiddle {
    pub item: ItemDefinition,
    pub answer_input: String,
}

/// Carrito de la visita actual a una tienda.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartSession {
    active_shop: Option<ShopId>,
    items: Vec<ItemDefinition>,
    pending: Option<PendingRiddle>,
}

impl CartSession {
    /// Entrar en una tienda siempre empieza con el carrito vacío.
    pub fn enter_shop(&mut self, shop_id: ShopId) {
        self.active_shop = Some(shop_id);
        self.items.clear();
        self.pending = None;
    }

    pub fn active_shop(&self) -> Option<ShopId> {
        self.active_shop
    }

    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    pub fn pending(&self) -> Option<&PendingRiddle> {
        self.pending.as_ref()
    }

    pub fn is_riddle_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Abre el acertijo. Falla si ya hay uno abierto o el producto ya está en el carrito.
    pub fn open_riddle(&mut self, item: ItemDefinition) -> bool {
        if self.pending.is_some() || self.contains(&item.name) {
            return false;
        }
        self.pending = Some(PendingRiddle {
            item,
            answer_input: String::new(),
        });
        true
    }

    pub fn set_answer(&mut self, text: String) -> bool {
        match self.pending.as_mut() {
            Some(p) => {
                p.answer_input = text;
                true
            }
            None => false,
        }
    }

    /// Cierra el acertijo y devuelve lo que había.
    pub fn take_pending(&mut self) -> Option<PendingRiddle> {
        self.pending.take()
    }

    pub fn push(&mut self, item: ItemDefinition) -> bool {
        if self.contains(&item.name) {
            return false;
        }
        self.items.push(item);
        true
    }
}
