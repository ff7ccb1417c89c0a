//! Editor del esquema de columnas: altas, bajas con archivado,
//! restauración y sesiones de selección de operandos.

use std::collections::{HashMap, HashSet};

use contracts::domain::a005_tipo_material::OperadorCalculo;

use super::calculo::{header_seleccionable, header_soporta_calculo, introduce_ciclo, valor_placeholder};
use super::headers::{
    base_header_label, normalize_headers, ColumnKind, HeaderDraft, OperacionCalculo, ValorCalculo,
    BASE_CANTIDAD, BASE_DETALLE, BASE_TOTAL, BASE_UNIDAD, BASE_UNITARIO, ORDEN_TOTAL,
};

/// Sesión activa de selección de operando: el usuario está eligiendo qué
/// columna ocupa el slot (`operation_index`, `value_index`) del header
/// objetivo. `exclude_headers` lista las columnas vedadas para esta sesión.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub target_header_id: String,
    pub operation_index: usize,
    pub value_index: usize,
    pub exclude_headers: HashSet<String>,
}

/// Copia de las operaciones de un header tomada al iniciar su edición,
/// para poder deshacer al cancelar.
#[derive(Debug, Clone, PartialEq)]
struct SelectionBackup {
    header_id: String,
    backup: Vec<OperacionCalculo>,
}

/// Estado completo de la edición de columnas de un tipo de material.
#[derive(Debug, Clone, Default)]
pub struct HeaderEditor {
    pub headers: Vec<HeaderDraft>,
    /// Columnas custom quitadas con contenido, disponibles para restaurar.
    pub removidos: Vec<HeaderDraft>,
    pub seleccion: Option<SelectionState>,
    respaldo: Option<SelectionBackup>,
}

impl HeaderEditor {
    pub fn new(headers: Vec<HeaderDraft>) -> Self {
        Self {
            headers: normalize_headers(headers),
            removidos: Vec::new(),
            seleccion: None,
            respaldo: None,
        }
    }

    fn siguiente_orden(&self) -> i64 {
        self.headers
            .iter()
            .filter(|h| h.orden != ORDEN_TOTAL)
            .map(|h| h.orden)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Agrega una columna custom al final (antes de $Total). Devuelve su id.
    /// Con `es_cantidad` la columna nace con la semántica de cantidad ya
    /// definida; si no, queda pendiente la pregunta de cantidad.
    pub fn agregar_header(&mut self, titulo: &str, es_cantidad: bool) -> String {
        let mut header = HeaderDraft::nuevo_custom(titulo, self.siguiente_orden());
        if es_cantidad {
            header.es_cantidad = true;
            header.cantidad_definida = true;
            header.pregunta_cantidad = false;
        }
        let id = header.id.clone();
        self.headers.push(header);
        self.headers = normalize_headers(std::mem::take(&mut self.headers));
        id
    }

    /// Registra la respuesta a la pregunta de cantidad de una columna custom.
    pub fn responder_cantidad(&mut self, header_id: &str, es_cantidad: bool) {
        if let Some(header) = self.headers.iter_mut().find(|h| h.id == header_id) {
            header.es_cantidad = es_cantidad;
            header.cantidad_definida = true;
            header.pregunta_cantidad = false;
        }
    }

    /// Quita una columna. Las bases obligatorias (Detalle, $Unitario, $Total)
    /// no se pueden quitar. Las referencias de cálculo hacia la columna
    /// quitada se eliminan en cascada; las custom con contenido se archivan.
    pub fn quitar_header(&mut self, id: &str) -> bool {
        let Some(pos) = self.headers.iter().position(|h| h.id == id) else {
            return false;
        };
        if let Some(base_id) = self.headers[pos].base_header_id {
            if let Some(def) = super::headers::base_header_def(base_id) {
                if !def.opcional {
                    return false;
                }
            }
        }
        let quitado = self.headers.remove(pos);

        // Cascada: ningún cálculo puede seguir apuntando a la columna quitada.
        for header in &mut self.headers {
            for op in &mut header.operaciones {
                op.valores.retain(|v| v.header_ref.as_deref() != Some(id));
            }
            header.operaciones.retain(|op| !op.valores.is_empty());
        }

        // Archivado: solo custom con algo que valga la pena restaurar.
        if !quitado.es_base() && !es_vacuo(&quitado) {
            self.removidos.retain(|h| h.id != quitado.id);
            self.removidos.push(quitado);
        }

        if self
            .seleccion
            .as_ref()
            .map(|s| s.target_header_id == id)
            .unwrap_or(false)
        {
            self.seleccion = None;
        }
        if let Some(sel) = &mut self.seleccion {
            sel.exclude_headers.remove(id);
        }
        if self
            .respaldo
            .as_ref()
            .map(|b| b.header_id == id)
            .unwrap_or(false)
        {
            self.respaldo = None;
        }
        true
    }

    /// Reincorpora una columna base opcional (Cantidad o Unidad). Al volver
    /// Cantidad también vuelve a participar del cálculo de $Total: se suma
    /// como operando de su primera operación, o se crea
    /// Cantidad × $Unitario si $Total no tenía cálculo.
    pub fn restaurar_header_base(&mut self, base_id: u8) {
        if !matches!(base_id, BASE_CANTIDAD | BASE_UNIDAD) {
            return;
        }
        if self.headers.iter().any(|h| h.base_header_id == Some(base_id)) {
            return;
        }
        self.headers.push(HeaderDraft::base(base_id));

        if base_id == BASE_CANTIDAD {
            if let Some(total) = self
                .headers
                .iter_mut()
                .find(|h| h.base_header_id == Some(BASE_TOTAL))
            {
                let ya_referencia = total.operaciones.iter().any(|op| {
                    op.valores
                        .iter()
                        .any(|v| v.header_ref.as_deref() == Some("base-2"))
                });
                if !ya_referencia {
                    match total.operaciones.first_mut() {
                        Some(op) => op.valores.push(valor_base(BASE_CANTIDAD)),
                        None => total.operaciones.push(OperacionCalculo {
                            operador: OperadorCalculo::Multiplicacion,
                            valores: vec![valor_base(BASE_CANTIDAD), valor_base(BASE_UNITARIO)],
                        }),
                    }
                }
            }
        }
        self.headers = normalize_headers(std::mem::take(&mut self.headers));
    }

    /// Reordena las columnas editables según `ordered_ids`. Detalle queda
    /// primero, las editables no mencionadas conservan su orden relativo,
    /// $Unitario va antes de $Total y $Total cierra la tabla.
    pub fn reordenar_headers(&mut self, ordered_ids: &[String]) {
        if ordered_ids.is_empty() {
            return;
        }
        let mut asignados: HashMap<String, i64> = HashMap::new();
        let mut cursor: i64 = 1;

        if let Some(detalle) = self
            .headers
            .iter()
            .find(|h| h.base_header_id == Some(BASE_DETALLE))
        {
            asignados.insert(detalle.id.clone(), cursor);
            cursor += 1;
        }

        for id in ordered_ids {
            if !asignados.contains_key(id) {
                asignados.insert(id.clone(), cursor);
                cursor += 1;
            }
        }

        let fija = |h: &HeaderDraft| {
            matches!(
                h.base_header_id,
                Some(BASE_DETALLE) | Some(BASE_UNITARIO) | Some(BASE_TOTAL)
            )
        };

        let mut sin_mencionar: Vec<(String, i64)> = self
            .headers
            .iter()
            .filter(|h| h.editable && !fija(h) && !ordered_ids.contains(&h.id))
            .map(|h| (h.id.clone(), h.orden))
            .collect();
        sin_mencionar.sort_by_key(|(_, orden)| *orden);
        let mut no_editables: Vec<(String, i64)> = self
            .headers
            .iter()
            .filter(|h| !h.editable && !fija(h))
            .map(|h| (h.id.clone(), h.orden))
            .collect();
        no_editables.sort_by_key(|(_, orden)| *orden);

        for (id, _) in sin_mencionar.into_iter().chain(no_editables) {
            if !asignados.contains_key(&id) {
                asignados.insert(id, cursor);
                cursor += 1;
            }
        }

        if let Some(unitario) = self
            .headers
            .iter()
            .find(|h| h.base_header_id == Some(BASE_UNITARIO))
        {
            asignados.insert(unitario.id.clone(), cursor);
        }
        if let Some(total) = self
            .headers
            .iter()
            .find(|h| h.base_header_id == Some(BASE_TOTAL))
        {
            asignados.insert(total.id.clone(), ORDEN_TOTAL);
        }

        for header in &mut self.headers {
            if let Some(orden) = asignados.get(&header.id) {
                header.orden = *orden;
            }
        }
        self.headers = normalize_headers(std::mem::take(&mut self.headers));
    }

    /// Reincorpora una columna custom archivada, tal cual se archivó
    /// (conserva su orden original).
    pub fn restaurar_header_custom(&mut self, id: &str) {
        let Some(pos) = self.removidos.iter().position(|h| h.id == id) else {
            return;
        };
        let header = self.removidos.remove(pos);
        self.headers.push(header);
        self.headers = normalize_headers(std::mem::take(&mut self.headers));
    }

    /// Descarta definitivamente una columna custom archivada.
    pub fn descartar_header_custom(&mut self, id: &str) {
        self.removidos.retain(|h| h.id != id);
    }

    /// Agrega una operación al cálculo de la columna. La primera operación
    /// lleva dos operandos; las siguientes, uno (encadenan sobre el
    /// resultado acumulado).
    pub fn agregar_operacion(&mut self, header_id: &str, operador: OperadorCalculo) {
        if let Some(sel) = &self.seleccion {
            if sel.target_header_id != header_id {
                self.cancelar_seleccion();
            }
        }
        let Some(header) = self.headers.iter_mut().find(|h| h.id == header_id) else {
            return;
        };
        if !header_soporta_calculo(header) {
            return;
        }
        if self
            .respaldo
            .as_ref()
            .map(|b| b.header_id != header_id)
            .unwrap_or(true)
        {
            self.respaldo = Some(SelectionBackup {
                header_id: header_id.to_string(),
                backup: header.operaciones.clone(),
            });
        }
        let slots = if header.operaciones.is_empty() { 2 } else { 1 };
        let kind = if header.es_base() {
            ColumnKind::Base
        } else {
            ColumnKind::Atributo
        };
        header.operaciones.push(OperacionCalculo {
            operador,
            valores: (0..slots).map(|_| valor_placeholder(kind)).collect(),
        });
    }

    /// Abre la selección de operando para un slot concreto. Las columnas ya
    /// usadas por el cálculo (salvo la del propio slot) y la columna objetivo
    /// quedan excluidas.
    pub fn iniciar_seleccion(&mut self, header_id: &str, op_idx: usize, val_idx: usize) {
        let Some(header) = self.headers.iter().find(|h| h.id == header_id) else {
            return;
        };
        let Some(op) = header.operaciones.get(op_idx) else {
            return;
        };
        if op.valores.get(val_idx).is_none() {
            return;
        }

        if self
            .respaldo
            .as_ref()
            .map(|b| b.header_id != header_id)
            .unwrap_or(true)
        {
            self.respaldo = Some(SelectionBackup {
                header_id: header_id.to_string(),
                backup: header.operaciones.clone(),
            });
        }

        let mut exclude: HashSet<String> = HashSet::new();
        exclude.insert(header.id.clone());
        for (i, operacion) in header.operaciones.iter().enumerate() {
            for (j, valor) in operacion.valores.iter().enumerate() {
                if i == op_idx && j == val_idx {
                    continue;
                }
                if let Some(referencia) = &valor.header_ref {
                    exclude.insert(referencia.clone());
                }
            }
        }

        self.seleccion = Some(SelectionState {
            target_header_id: header_id.to_string(),
            operation_index: op_idx,
            value_index: val_idx,
            exclude_headers: exclude,
        });
    }

    /// Asigna la columna elegida al slot de la sesión activa y avanza al
    /// siguiente operando sin asignar, o cierra la sesión si no queda
    /// ninguno.
    pub fn seleccionar_columna(&mut self, columna_id: &str) -> bool {
        let Some(sel) = self.seleccion.clone() else {
            return false;
        };
        if sel.exclude_headers.contains(columna_id) {
            return false;
        }
        let Some(candidata) = self.headers.iter().find(|h| h.id == columna_id) else {
            return false;
        };
        if !header_seleccionable(candidata) {
            return false;
        }
        if introduce_ciclo(&self.headers, &sel.target_header_id, columna_id) {
            log::warn!("selección rechazada: crearía un ciclo de cálculo");
            return false;
        }
        let titulo = candidata.titulo_visible();
        let kind = if candidata.es_base() {
            ColumnKind::Base
        } else {
            ColumnKind::Atributo
        };

        let Some(header) = self
            .headers
            .iter_mut()
            .find(|h| h.id == sel.target_header_id)
        else {
            return false;
        };
        let Some(valor) = header
            .operaciones
            .get_mut(sel.operation_index)
            .and_then(|op| op.valores.get_mut(sel.value_index))
        else {
            return false;
        };
        valor.header_ref = Some(columna_id.to_string());
        valor.header_title = Some(titulo);
        valor.tipo = kind;

        // Avanza al próximo slot vacío, si lo hay.
        let siguiente = proximo_slot_vacio(header, sel.operation_index, sel.value_index);
        match siguiente {
            Some((op_idx, val_idx)) => {
                let mut exclude = sel.exclude_headers;
                exclude.insert(columna_id.to_string());
                self.seleccion = Some(SelectionState {
                    target_header_id: sel.target_header_id,
                    operation_index: op_idx,
                    value_index: val_idx,
                    exclude_headers: exclude,
                });
            }
            None => {
                self.seleccion = None;
                self.respaldo = None;
            }
        }
        true
    }

    /// Cancela la edición en curso. Si hay respaldo restaura las operaciones
    /// previas; si no, poda los operandos sin asignar y las operaciones que
    /// quedaron vacías.
    pub fn cancelar_seleccion(&mut self) {
        let target = self
            .seleccion
            .as_ref()
            .map(|s| s.target_header_id.clone())
            .or_else(|| self.respaldo.as_ref().map(|b| b.header_id.clone()));
        if let Some(target_id) = target {
            if let Some(header) = self.headers.iter_mut().find(|h| h.id == target_id) {
                match self.respaldo.take() {
                    Some(backup) if backup.header_id == target_id => {
                        header.operaciones = backup.backup;
                    }
                    otro => {
                        self.respaldo = otro;
                        for op in &mut header.operaciones {
                            op.valores.retain(|v| v.header_ref.is_some());
                        }
                        header.operaciones.retain(|op| !op.valores.is_empty());
                    }
                }
            }
        }
        self.seleccion = None;
        self.respaldo = None;
    }

    /// Quita un operando ya asignado. La operación se elimina si queda vacía.
    pub fn quitar_valor(&mut self, header_id: &str, op_idx: usize, val_idx: usize) {
        let Some(header) = self.headers.iter_mut().find(|h| h.id == header_id) else {
            return;
        };
        if let Some(op) = header.operaciones.get_mut(op_idx) {
            if val_idx < op.valores.len() {
                op.valores.remove(val_idx);
            }
        }
        if header
            .operaciones
            .get(op_idx)
            .map(|op| op.valores.is_empty())
            .unwrap_or(false)
        {
            header.operaciones.remove(op_idx);
        }
        if self
            .seleccion
            .as_ref()
            .map(|s| s.target_header_id == header_id)
            .unwrap_or(false)
        {
            self.seleccion = None;
        }
        if self
            .respaldo
            .as_ref()
            .map(|b| b.header_id == header_id)
            .unwrap_or(false)
        {
            self.respaldo = None;
        }
    }

    /// Borra el cálculo completo de una columna.
    pub fn quitar_operaciones(&mut self, header_id: &str) {
        if let Some(header) = self.headers.iter_mut().find(|h| h.id == header_id) {
            header.operaciones.clear();
        }
        if self
            .seleccion
            .as_ref()
            .map(|s| s.target_header_id == header_id)
            .unwrap_or(false)
        {
            self.seleccion = None;
        }
        if self
            .respaldo
            .as_ref()
            .map(|b| b.header_id == header_id)
            .unwrap_or(false)
        {
            self.respaldo = None;
        }
    }

    /// Bases opcionales actualmente ausentes de la tabla.
    pub fn headers_base_disponibles(&self) -> Vec<u8> {
        [BASE_CANTIDAD, BASE_UNIDAD]
            .into_iter()
            .filter(|base_id| {
                !self
                    .headers
                    .iter()
                    .any(|h| h.base_header_id == Some(*base_id))
            })
            .collect()
    }

    pub fn opciones_custom_removidos(&self) -> &[HeaderDraft] {
        &self.removidos
    }

    /// Columnas ofrecidas como operando durante una sesión de selección.
    pub fn columnas_elegibles(&self) -> Vec<&HeaderDraft> {
        let Some(sel) = &self.seleccion else {
            return Vec::new();
        };
        self.headers
            .iter()
            .filter(|h| header_seleccionable(h) && !sel.exclude_headers.contains(&h.id))
            .collect()
    }

    pub fn mostrar_barra_restauracion(&self) -> bool {
        !self.headers_base_disponibles().is_empty() || !self.removidos.is_empty()
    }
}

fn es_vacuo(header: &HeaderDraft) -> bool {
    header.titulo.trim().is_empty() && header.operaciones.is_empty()
}

/// Operando ya ligado a una columna base.
fn valor_base(base_id: u8) -> ValorCalculo {
    ValorCalculo {
        id: uuid::Uuid::new_v4().to_string(),
        header_ref: Some(format!("base-{base_id}")),
        header_title: Some(base_header_label(base_id).to_string()),
        tipo: ColumnKind::Base,
    }
}

fn proximo_slot_vacio(
    header: &HeaderDraft,
    desde_op: usize,
    desde_val: usize,
) -> Option<(usize, usize)> {
    for (i, op) in header.operaciones.iter().enumerate().skip(desde_op) {
        for (j, valor) in op.valores.iter().enumerate() {
            if i == desde_op && j <= desde_val {
                continue;
            }
            if valor.header_ref.is_none() {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_base() -> HeaderEditor {
        HeaderEditor::new(vec![
            HeaderDraft::base(BASE_DETALLE),
            HeaderDraft::base(BASE_CANTIDAD),
            HeaderDraft::base(BASE_UNIDAD),
            HeaderDraft::base(BASE_UNITARIO),
            HeaderDraft::base(BASE_TOTAL),
        ])
    }

    #[test]
    fn los_custom_se_insertan_antes_del_total() {
        let mut editor = editor_base();
        editor.agregar_header("Flete", false);
        let ultimo = editor.headers.last().unwrap();
        assert_eq!(ultimo.base_header_id, Some(BASE_TOTAL));
        let penultimo = &editor.headers[editor.headers.len() - 2];
        assert_eq!(penultimo.titulo, "Flete");
        assert!(penultimo.orden < ORDEN_TOTAL);
    }

    #[test]
    fn bases_obligatorias_no_se_quitan() {
        let mut editor = editor_base();
        assert!(!editor.quitar_header("base-1"));
        assert!(!editor.quitar_header("base-4"));
        assert!(!editor.quitar_header("base-5"));
        assert!(editor.quitar_header("base-2"));
        assert!(editor.quitar_header("base-3"));
        assert_eq!(editor.headers.len(), 3);
    }

    #[test]
    fn quitar_header_limpia_referencias_en_cascada() {
        let mut editor = editor_base();
        let flete_id = editor.agregar_header("Flete", true);

        // $Total = Flete + $Unitario
        editor.agregar_operacion("base-5", OperadorCalculo::Suma);
        editor.iniciar_seleccion("base-5", 0, 0);
        assert!(editor.seleccionar_columna(&flete_id));
        assert!(editor.seleccionar_columna("base-4"));

        assert!(editor.quitar_header(&flete_id));
        let total = editor.headers.iter().find(|h| h.id == "base-5").unwrap();
        let refs: Vec<_> = total
            .operaciones
            .iter()
            .flat_map(|op| op.valores.iter())
            .filter_map(|v| v.header_ref.as_deref())
            .collect();
        assert_eq!(refs, vec!["base-4"]);
    }

    #[test]
    fn custom_con_contenido_se_archiva_y_restaura_identico() {
        let mut editor = editor_base();
        let flete_id = editor.agregar_header("Flete", false);
        let snapshot = editor
            .headers
            .iter()
            .find(|h| h.id == flete_id)
            .cloned()
            .unwrap();

        assert!(editor.quitar_header(&flete_id));
        assert_eq!(editor.opciones_custom_removidos().len(), 1);
        assert!(editor.mostrar_barra_restauracion());

        editor.restaurar_header_custom(&flete_id);
        assert!(editor.removidos.is_empty());
        let restaurado = editor.headers.iter().find(|h| h.id == flete_id).unwrap();
        assert_eq!(*restaurado, snapshot);
    }

    #[test]
    fn custom_vacuo_no_se_archiva() {
        let mut editor = editor_base();
        let id = editor.agregar_header("  ", false);
        assert!(editor.quitar_header(&id));
        assert!(editor.opciones_custom_removidos().is_empty());
    }

    #[test]
    fn bases_opcionales_se_restauran_en_su_posicion() {
        let mut editor = editor_base();
        editor.quitar_header("base-2");
        assert_eq!(editor.headers_base_disponibles(), vec![BASE_CANTIDAD]);

        editor.restaurar_header_base(BASE_CANTIDAD);
        assert!(editor.headers_base_disponibles().is_empty());
        assert_eq!(editor.headers[1].base_header_id, Some(BASE_CANTIDAD));

        // Restaurar algo ya presente no duplica.
        editor.restaurar_header_base(BASE_CANTIDAD);
        assert_eq!(editor.headers.len(), 5);
    }

    #[test]
    fn restaurar_cantidad_religa_el_calculo_del_total() {
        let mut editor = editor_base();
        editor.quitar_header("base-2");

        editor.restaurar_header_base(BASE_CANTIDAD);
        let total = editor.headers.iter().find(|h| h.id == "base-5").unwrap();
        assert_eq!(total.operaciones.len(), 1);
        assert_eq!(total.operaciones[0].operador, OperadorCalculo::Multiplicacion);
        let refs: Vec<_> = total.operaciones[0]
            .valores
            .iter()
            .filter_map(|v| v.header_ref.as_deref())
            .collect();
        assert_eq!(refs, vec!["base-2", "base-4"]);
    }

    #[test]
    fn restaurar_cantidad_suma_el_operando_a_un_calculo_existente() {
        let mut editor = editor_base();
        editor.quitar_header("base-2");

        // $Total = Flete + $Unitario, armado sin Cantidad en la tabla.
        let flete_id = editor.agregar_header("Flete", true);
        editor.agregar_operacion("base-5", OperadorCalculo::Suma);
        editor.iniciar_seleccion("base-5", 0, 0);
        assert!(editor.seleccionar_columna(&flete_id));
        assert!(editor.seleccionar_columna("base-4"));

        editor.restaurar_header_base(BASE_CANTIDAD);
        let total = editor.headers.iter().find(|h| h.id == "base-5").unwrap();
        assert_eq!(total.operaciones.len(), 1);
        let refs: Vec<_> = total.operaciones[0]
            .valores
            .iter()
            .filter_map(|v| v.header_ref.as_deref())
            .collect();
        assert_eq!(refs, vec![flete_id.as_str(), "base-4", "base-2"]);

        // Si Cantidad ya participa, restaurar de nuevo no duplica el operando.
        editor.restaurar_header_base(BASE_CANTIDAD);
        let total = editor.headers.iter().find(|h| h.id == "base-5").unwrap();
        assert_eq!(total.operaciones[0].valores.len(), 3);
    }

    #[test]
    fn reordenar_respeta_columnas_fijas() {
        let mut editor = editor_base();
        let flete_id = editor.agregar_header("Flete", false);
        let seguro_id = editor.agregar_header("Seguro", false);

        let antes: Vec<String> = editor.headers.iter().map(|h| h.id.clone()).collect();
        editor.reordenar_headers(&[]);
        let despues: Vec<String> = editor.headers.iter().map(|h| h.id.clone()).collect();
        assert_eq!(antes, despues);

        editor.reordenar_headers(&[
            seguro_id.clone(),
            "base-3".to_string(),
            flete_id.clone(),
            "base-2".to_string(),
        ]);

        let ids: Vec<_> = editor.headers.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "base-1",
                seguro_id.as_str(),
                "base-3",
                flete_id.as_str(),
                "base-2",
                "base-4",
                "base-5",
            ]
        );
        assert_eq!(editor.headers.last().unwrap().orden, ORDEN_TOTAL);
    }

    #[test]
    fn reordenar_conserva_el_orden_relativo_de_las_no_mencionadas() {
        let mut editor = editor_base();
        let flete_id = editor.agregar_header("Flete", false);
        let seguro_id = editor.agregar_header("Seguro", false);

        editor.reordenar_headers(&[seguro_id.clone()]);

        let ids: Vec<_> = editor.headers.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "base-1",
                seguro_id.as_str(),
                "base-2",
                "base-3",
                flete_id.as_str(),
                "base-4",
                "base-5",
            ]
        );
    }

    #[test]
    fn la_primera_operacion_lleva_dos_operandos() {
        let mut editor = editor_base();
        editor.agregar_operacion("base-5", OperadorCalculo::Multiplicacion);
        let total = editor.headers.iter().find(|h| h.id == "base-5").unwrap();
        assert_eq!(total.operaciones[0].valores.len(), 2);

        editor.agregar_operacion("base-5", OperadorCalculo::Suma);
        let total = editor.headers.iter().find(|h| h.id == "base-5").unwrap();
        assert_eq!(total.operaciones[1].valores.len(), 1);
    }

    #[test]
    fn la_seleccion_excluye_objetivo_y_ya_usados() {
        let mut editor = editor_base();
        editor.agregar_operacion("base-5", OperadorCalculo::Multiplicacion);
        editor.iniciar_seleccion("base-5", 0, 0);
        assert!(editor.seleccionar_columna("base-2"));

        // La sesión avanzó al segundo slot; base-2 y base-5 quedan excluidos.
        let elegibles: Vec<_> = editor.columnas_elegibles().iter().map(|h| h.id.clone()).collect();
        assert!(!elegibles.contains(&"base-2".to_string()));
        assert!(!elegibles.contains(&"base-5".to_string()));
        assert!(elegibles.contains(&"base-4".to_string()));
        assert!(!editor.seleccionar_columna("base-2"));
    }

    #[test]
    fn completar_la_seleccion_cierra_la_sesion() {
        let mut editor = editor_base();
        editor.agregar_operacion("base-5", OperadorCalculo::Multiplicacion);
        editor.iniciar_seleccion("base-5", 0, 0);
        assert!(editor.seleccionar_columna("base-2"));
        assert!(editor.seleccion.is_some());
        assert!(editor.seleccionar_columna("base-4"));
        assert!(editor.seleccion.is_none());
    }

    #[test]
    fn cancelar_restaura_el_calculo_previo() {
        let mut editor = editor_base();
        editor.agregar_operacion("base-5", OperadorCalculo::Multiplicacion);
        editor.iniciar_seleccion("base-5", 0, 0);
        editor.seleccionar_columna("base-2");
        editor.seleccionar_columna("base-4");

        // Segunda ronda de edición sobre un cálculo ya completo.
        editor.agregar_operacion("base-5", OperadorCalculo::Suma);
        editor.cancelar_seleccion();

        let total = editor.headers.iter().find(|h| h.id == "base-5").unwrap();
        assert_eq!(total.operaciones.len(), 1);
        assert_eq!(total.operaciones[0].valores.len(), 2);
    }

    #[test]
    fn seleccionar_rechaza_ciclos() {
        let mut editor = editor_base();
        let flete_id = editor.agregar_header("Flete", false);
        let seguro_id = editor.agregar_header("Seguro", false);
        editor.responder_cantidad(&flete_id, true);
        editor.responder_cantidad(&seguro_id, true);

        // seguro = flete + $Unitario
        editor.agregar_operacion(&seguro_id, OperadorCalculo::Suma);
        editor.iniciar_seleccion(&seguro_id, 0, 0);
        assert!(editor.seleccionar_columna(&flete_id));
        assert!(editor.seleccionar_columna("base-4"));

        // flete no puede referirse a seguro: cerraría el ciclo.
        editor.agregar_operacion(&flete_id, OperadorCalculo::Suma);
        editor.iniciar_seleccion(&flete_id, 0, 0);
        assert!(!editor.seleccionar_columna(&seguro_id));
        assert!(editor.seleccionar_columna("base-2"));
    }

    #[test]
    fn quitar_valor_poda_operaciones_vacias() {
        let mut editor = editor_base();
        editor.agregar_operacion("base-5", OperadorCalculo::Multiplicacion);
        editor.iniciar_seleccion("base-5", 0, 0);
        editor.seleccionar_columna("base-2");
        editor.seleccionar_columna("base-4");

        editor.quitar_valor("base-5", 0, 0);
        editor.quitar_valor("base-5", 0, 0);
        let total = editor.headers.iter().find(|h| h.id == "base-5").unwrap();
        assert!(total.operaciones.is_empty());
    }
}
