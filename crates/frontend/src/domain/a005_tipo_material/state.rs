//! Estado reactivo de la vista de materiales por tipo.

use contracts::domain::a005_tipo_material::{Material, TipoMaterial};
use leptos::prelude::*;

use super::desde_tipo::headers_desde_tipo;
use super::draft::{recalcular, CampoDraft, MaterialDraft};
use super::headers::HeaderDraft;

#[derive(Debug, Clone, Default)]
pub struct TipoMaterialState {
    pub tipos: Vec<TipoMaterial>,
    pub materiales: Vec<Material>,
    pub selected_tipo_id: Option<i64>,
    pub headers: Vec<HeaderDraft>,
    pub draft: MaterialDraft,
    pub loading: bool,
    pub error: Option<String>,
}

impl TipoMaterialState {
    /// Reemplaza el catálogo de tipos conservando la selección si sigue
    /// existiendo; si no, selecciona el primero.
    pub fn set_tipos(&mut self, tipos: Vec<TipoMaterial>) {
        let seleccion_valida = self
            .selected_tipo_id
            .map(|id| tipos.iter().any(|t| t.id_tipo_material == id))
            .unwrap_or(false);
        if !seleccion_valida {
            self.selected_tipo_id = tipos.first().map(|t| t.id_tipo_material);
        }
        self.tipos = tipos;
        self.rebuild_headers();
    }

    pub fn select_tipo(&mut self, id: i64) {
        if self.tipos.iter().any(|t| t.id_tipo_material == id) {
            self.selected_tipo_id = Some(id);
            self.materiales.clear();
            self.rebuild_headers();
        }
    }

    pub fn selected_tipo(&self) -> Option<&TipoMaterial> {
        let id = self.selected_tipo_id?;
        self.tipos.iter().find(|t| t.id_tipo_material == id)
    }

    fn rebuild_headers(&mut self) {
        self.headers = self
            .selected_tipo()
            .map(headers_desde_tipo)
            .unwrap_or_default();
        self.draft = MaterialDraft::vacio_para(&self.headers);
    }

    pub fn set_materiales(&mut self, materiales: Vec<Material>) {
        self.materiales = materiales;
    }

    /// Inserta al principio; si el id ya existe, lo reemplaza en su lugar.
    pub fn add_material(&mut self, material: Material) {
        match self
            .materiales
            .iter()
            .position(|m| m.id_material == material.id_material)
        {
            Some(pos) => self.materiales[pos] = material,
            None => self.materiales.insert(0, material),
        }
    }

    pub fn update_material(&mut self, material: Material) {
        if let Some(existing) = self
            .materiales
            .iter_mut()
            .find(|m| m.id_material == material.id_material)
        {
            *existing = material;
        }
    }

    pub fn remove_material(&mut self, id_material: i64) {
        self.materiales.retain(|m| m.id_material != id_material);
    }

    pub fn update_draft_field(&mut self, campo: CampoDraft, valor: String) {
        self.draft.set_campo(campo, valor);
        self.recalcular_draft();
    }

    pub fn update_draft_atributo(&mut self, header_id: &str, valor: String) {
        self.draft.atributos.insert(header_id.to_string(), valor);
        self.recalcular_draft();
    }

    pub fn recalcular_draft(&mut self) {
        self.draft = recalcular(&self.headers, &self.draft);
    }
}

pub fn create_state() -> RwSignal<TipoMaterialState> {
    RwSignal::new(TipoMaterialState::default())
}
