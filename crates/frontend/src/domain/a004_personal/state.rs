//! Catálogo de personal en memoria.

use contracts::domain::a004_personal::Personal;
use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct PersonalState {
    pub personal: Vec<Personal>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PersonalState {
    pub fn set_personal(&mut self, personal: Vec<Personal>) {
        self.personal = personal;
    }

    pub fn persona(&self, id_personal: i64) -> Option<&Personal> {
        self.personal.iter().find(|p| p.id_personal == id_personal)
    }
}

pub fn create_state() -> RwSignal<PersonalState> {
    RwSignal::new(PersonalState::default())
}
