//! Almacén de costos de la oferta en curso, persistido en localStorage.

use contracts::domain::a002_item_obra::ItemObra;
use contracts::domain::a006_costo::{Costo, TipoCosto};
use contracts::shared::format::round2;
use leptos::prelude::*;

use crate::shared::storage;

pub const KEY_TIPOS_COSTO: &str = "oferta_tipos_costo";
pub const KEY_COSTOS: &str = "oferta_costos";
pub const KEY_ITEMS_COSTOS: &str = "oferta_items_costos";
pub const KEY_COSTOS_READY: &str = "oferta_costos_ready";

/// Recalcula los totales de cada bucket y de sus resúmenes por item a
/// partir de las líneas. Es la única vía de actualización de esos campos.
pub fn recompute_tipos_costo(tipos: &mut [TipoCosto], costos: &[Costo]) {
    for bucket in tipos.iter_mut() {
        let lineas: Vec<&Costo> = costos
            .iter()
            .filter(|c| c.id_tipo_costo == bucket.id_tipo_costo)
            .collect();
        bucket.costo_total = round2(lineas.iter().map(|c| c.costo_total).sum());
        for resumen in &mut bucket.items {
            resumen.costo_total = round2(
                lineas
                    .iter()
                    .flat_map(|c| c.items_obra.iter())
                    .filter(|a| a.id_item == resumen.id)
                    .map(|a| a.total)
                    .sum(),
            );
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CostoStore {
    pub tipos_costo: Vec<TipoCosto>,
    pub costos: Vec<Costo>,
    pub loading: bool,
    pub error: Option<String>,
    /// `true` cuando hay estructuras generadas para la oferta en curso.
    pub ready: bool,
}

impl CostoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehidrata el almacén desde localStorage.
    pub fn load_from_storage() -> Self {
        Self {
            tipos_costo: storage::read_json(KEY_TIPOS_COSTO, Vec::new()),
            costos: storage::read_json(KEY_COSTOS, Vec::new()),
            loading: false,
            error: None,
            ready: storage::read_flag(KEY_COSTOS_READY),
        }
    }

    /// Reemplaza las estructuras generadas y las persiste.
    pub fn set_cost_data(&mut self, mut tipos_costo: Vec<TipoCosto>, costos: Vec<Costo>) {
        recompute_tipos_costo(&mut tipos_costo, &costos);
        self.tipos_costo = tipos_costo;
        self.costos = costos;
        self.error = None;
        storage::write_json(KEY_TIPOS_COSTO, &self.tipos_costo);
        storage::write_json(KEY_COSTOS, &self.costos);
    }

    /// Persiste los items de obra con sus totales derivados.
    pub fn set_items_costos(&self, items: &[ItemObra]) {
        storage::write_json(KEY_ITEMS_COSTOS, &items.to_vec());
    }

    pub fn items_costos(&self) -> Vec<ItemObra> {
        storage::read_json(KEY_ITEMS_COSTOS, Vec::new())
    }

    /// Borra todo lo generado; se usa al cambiar de oferta.
    pub fn clear_cost_data(&mut self) {
        self.tipos_costo.clear();
        self.costos.clear();
        self.ready = false;
        self.error = None;
        storage::remove_key(KEY_TIPOS_COSTO);
        storage::remove_key(KEY_COSTOS);
        storage::remove_key(KEY_ITEMS_COSTOS);
        storage::remove_key(KEY_COSTOS_READY);
    }

    pub fn mark_ready(&mut self, ready: bool) {
        self.ready = ready;
        storage::write_flag(KEY_COSTOS_READY, ready);
    }

    /// Edita una línea y propaga los totales a su bucket.
    pub fn update_costo(&mut self, id_costo: i64, editar: impl FnOnce(&mut Costo)) {
        let Some(costo) = self.costos.iter_mut().find(|c| c.id_costo == id_costo) else {
            return;
        };
        editar(costo);
        costo.costo_total = round2(costo.costo_unitario * costo.cantidad);
        recompute_tipos_costo(&mut self.tipos_costo, &self.costos);
        storage::write_json(KEY_TIPOS_COSTO, &self.tipos_costo);
        storage::write_json(KEY_COSTOS, &self.costos);
    }
}

pub fn create_state() -> RwSignal<CostoStore> {
    RwSignal::new(CostoStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_costo::{CostoItemObra, TipoCostoItem};

    #[test]
    fn recompute_reagrega_buckets_y_resumenes() {
        let mut tipos = vec![TipoCosto {
            id_tipo_costo: 1,
            tipo: "equipo".to_string(),
            descripcion: "Inmuebles , rodados y equipos".to_string(),
            costo_total: 999.0,
            items: vec![
                TipoCostoItem {
                    id: 1,
                    tipo: None,
                    desc: "Item 1".to_string(),
                    costo_total: 999.0,
                },
                TipoCostoItem {
                    id: 2,
                    tipo: None,
                    desc: "Item 2".to_string(),
                    costo_total: 999.0,
                },
            ],
        }];
        let costos = vec![Costo {
            id_costo: 1,
            id_tipo_costo: 1,
            detalle: "Retro".to_string(),
            values: Vec::new(),
            afectacion: None,
            unidad: "mes".to_string(),
            costo_unitario: 100.0,
            cantidad: 3.0,
            costo_total: 300.0,
            items_obra: vec![
                CostoItemObra {
                    id_item: 1,
                    cantidad: 2.0,
                    total: 200.0,
                    porcentaje: 66.67,
                },
                CostoItemObra {
                    id_item: 2,
                    cantidad: 1.0,
                    total: 100.0,
                    porcentaje: 33.33,
                },
            ],
        }];

        recompute_tipos_costo(&mut tipos, &costos);
        assert_eq!(tipos[0].costo_total, 300.0);
        assert_eq!(tipos[0].items[0].costo_total, 200.0);
        assert_eq!(tipos[0].items[1].costo_total, 100.0);
    }
}
