//! Estado reactivo del listado de obras.

use contracts::domain::a001_obra::Obra;
use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct ObraState {
    pub obras: Vec<Obra>,
    pub selected_obra_id: Option<i64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ObraState {
    pub fn set_obras(&mut self, obras: Vec<Obra>) {
        self.obras = obras;
    }

    pub fn select_obra(&mut self, id: i64) {
        if self.obras.iter().any(|o| o.id_obra == Some(id)) {
            self.selected_obra_id = Some(id);
        }
    }

    pub fn selected_obra(&self) -> Option<&Obra> {
        let id = self.selected_obra_id?;
        self.obras.iter().find(|o| o.id_obra == Some(id))
    }

    pub fn upsert_obra(&mut self, obra: Obra) {
        match self
            .obras
            .iter()
            .position(|o| o.id_obra.is_some() && o.id_obra == obra.id_obra)
        {
            Some(pos) => self.obras[pos] = obra,
            None => self.obras.push(obra),
        }
    }
}

pub fn create_state() -> RwSignal<ObraState> {
    RwSignal::new(ObraState::default())
}
