//! Estado reactivo de los items de obra con sus recursos asignados.

use contracts::domain::a002_item_obra::ItemObra;
use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct ItemsObraState {
    pub items: Vec<ItemObra>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ItemsObraState {
    pub fn set_items(&mut self, items: Vec<ItemObra>) {
        self.items = items;
    }

    pub fn upsert_item(&mut self, item: ItemObra) {
        match self
            .items
            .iter()
            .position(|i| i.id_item_obra == item.id_item_obra)
        {
            Some(pos) => self.items[pos] = item,
            None => self.items.push(item),
        }
    }

    /// Precondición de la generación de costos: todos los items con
    /// meses operario cargados.
    pub fn todos_completos(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.is_complete())
    }

    /// Incorpora los totales derivados por el motor de costos sin tocar
    /// el resto de cada item.
    pub fn merge_items_actualizados(&mut self, actualizados: &[ItemObra]) {
        for actualizado in actualizados {
            if let Some(item) = self
                .items
                .iter_mut()
                .find(|i| i.id_item_obra == actualizado.id_item_obra)
            {
                item.costo_total = actualizado.costo_total;
            }
        }
    }
}

pub fn create_state() -> RwSignal<ItemsObraState> {
    RwSignal::new(ItemsObraState::default())
}
