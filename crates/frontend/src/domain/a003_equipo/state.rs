//! Catálogo de equipos en memoria.

use contracts::domain::a003_equipo::Equipo;
use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct EquipoState {
    pub equipos: Vec<Equipo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EquipoState {
    pub fn set_equipos(&mut self, equipos: Vec<Equipo>) {
        self.equipos = equipos;
    }

    pub fn equipo(&self, id_equipo: i64) -> Option<&Equipo> {
        self.equipos.iter().find(|e| e.id_equipo == id_equipo)
    }
}

pub fn create_state() -> RwSignal<EquipoState> {
    RwSignal::new(EquipoState::default())
}
