//! Reglas de cálculo: qué columnas admiten o pueden integrar un cálculo,
//! presentación de expresiones y evaluación de la cadena de operaciones.

use std::collections::HashSet;

use contracts::domain::a005_tipo_material::OperadorCalculo;

use super::headers::{ColumnKind, HeaderDraft, OperacionCalculo, ValorCalculo, BASE_CANTIDAD, BASE_TOTAL, BASE_UNITARIO};

/// Operando aún sin columna asignada.
pub fn valor_placeholder(kind: ColumnKind) -> ValorCalculo {
    ValorCalculo {
        id: uuid::Uuid::new_v4().to_string(),
        header_ref: None,
        header_title: None,
        tipo: kind,
    }
}

/// Una columna puede llevar su propio cálculo si es $Total, si es la
/// columna Cantidad con la semántica de cantidad definida, si es una
/// columna custom declarada cantidad, o si ya tiene operaciones (edición
/// de un cálculo existente).
pub fn header_soporta_calculo(header: &HeaderDraft) -> bool {
    if !header.operaciones.is_empty() {
        return true;
    }
    match header.base_header_id {
        Some(BASE_TOTAL) => true,
        Some(BASE_CANTIDAD) => header.cantidad_definida && header.es_cantidad,
        Some(_) => false,
        None => header.cantidad_definida && header.es_cantidad,
    }
}

/// Una columna puede ser operando de un cálculo ajeno si ya tiene
/// operaciones, si es $Unitario, o si es una columna de cantidad con la
/// semántica definida (base o custom). La autorreferencia se veda en la
/// sesión de selección.
pub fn header_seleccionable(header: &HeaderDraft) -> bool {
    if !header.operaciones.is_empty() {
        return true;
    }
    match header.base_header_id {
        Some(BASE_UNITARIO) => true,
        Some(BASE_CANTIDAD) => header.cantidad_definida && header.es_cantidad,
        Some(_) => false,
        None => header.cantidad_definida && header.es_cantidad,
    }
}

/// Expresión legible de las operaciones de una columna, con "---" en los
/// operandos sin asignar. Ej.: "Cantidad × $Unitario".
pub fn formatear_expresion(operaciones: &[OperacionCalculo]) -> String {
    let mut partes: Vec<String> = Vec::new();
    for op in operaciones {
        for valor in &op.valores {
            if !partes.is_empty() {
                partes.push(op.operador.simbolo().to_string());
            }
            let nombre = valor
                .header_title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "---".to_string());
            partes.push(nombre);
        }
    }
    partes.join(" ")
}

/// Resultado de evaluar una cadena de operaciones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluacion {
    pub valor: f64,
    /// `false` si algún operando no pudo resolverse a un número
    /// o si hubo una división por cero.
    pub completa: bool,
}

/// Evalúa las operaciones en cadena, de izquierda a derecha y sin
/// precedencia. `resolver` devuelve el valor numérico de una columna por su
/// id, o `None` si la celda está vacía o no es numérica. Un operando sin
/// resolver toma el elemento neutro del operador y marca el resultado como
/// incompleto; una división por cero omite el paso y también lo marca.
pub fn evaluar_operaciones<F>(operaciones: &[OperacionCalculo], mut resolver: F) -> Evaluacion
where
    F: FnMut(&str) -> Option<f64>,
{
    let mut acumulado: Option<f64> = None;
    let mut completa = true;

    for op in operaciones {
        for valor in &op.valores {
            let resuelto = valor
                .header_ref
                .as_deref()
                .and_then(|referencia| resolver(referencia));
            let operando = match resuelto {
                Some(v) => v,
                None => {
                    completa = false;
                    match op.operador {
                        OperadorCalculo::Suma | OperadorCalculo::Resta => 0.0,
                        OperadorCalculo::Multiplicacion | OperadorCalculo::Division => 1.0,
                    }
                }
            };

            acumulado = Some(match acumulado {
                None => operando,
                Some(actual) => match op.operador {
                    OperadorCalculo::Suma => actual + operando,
                    OperadorCalculo::Resta => actual - operando,
                    OperadorCalculo::Multiplicacion => actual * operando,
                    OperadorCalculo::Division => {
                        if operando == 0.0 {
                            completa = false;
                            actual
                        } else {
                            actual / operando
                        }
                    }
                },
            });
        }
    }

    Evaluacion {
        valor: acumulado.unwrap_or(0.0),
        completa: completa && acumulado.is_some(),
    }
}

/// `true` si asignar `candidato_id` como operando de `target_id` crearía un
/// ciclo de referencias. Recorre en profundidad las referencias ya ligadas
/// partiendo del candidato.
pub fn introduce_ciclo(headers: &[HeaderDraft], target_id: &str, candidato_id: &str) -> bool {
    if target_id == candidato_id {
        return true;
    }
    let mut visitados: HashSet<String> = HashSet::new();
    let mut pendientes = vec![candidato_id.to_string()];
    while let Some(actual) = pendientes.pop() {
        if actual == target_id {
            return true;
        }
        if !visitados.insert(actual.clone()) {
            continue;
        }
        if let Some(header) = headers.iter().find(|h| h.id == actual) {
            for op in &header.operaciones {
                for valor in &op.valores {
                    if let Some(referencia) = &valor.header_ref {
                        pendientes.push(referencia.clone());
                    }
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_tipo_material::headers::{BASE_CANTIDAD, BASE_TOTAL, BASE_UNITARIO};

    fn operando(referencia: &str, titulo: &str) -> ValorCalculo {
        ValorCalculo {
            id: uuid::Uuid::new_v4().to_string(),
            header_ref: Some(referencia.to_string()),
            header_title: Some(titulo.to_string()),
            tipo: ColumnKind::Base,
        }
    }

    #[test]
    fn reglas_de_soporte_de_calculo() {
        use crate::domain::a005_tipo_material::headers::{BASE_DETALLE, BASE_UNIDAD};

        assert!(!header_soporta_calculo(&HeaderDraft::base(BASE_DETALLE)));
        assert!(!header_soporta_calculo(&HeaderDraft::base(BASE_UNIDAD)));
        assert!(header_soporta_calculo(&HeaderDraft::base(BASE_CANTIDAD)));
        assert!(!header_soporta_calculo(&HeaderDraft::base(BASE_UNITARIO)));
        assert!(header_soporta_calculo(&HeaderDraft::base(BASE_TOTAL)));

        // Custom sin la pregunta de cantidad respondida: no soporta cálculo.
        let mut custom = HeaderDraft::nuevo_custom("Kg", 6);
        assert!(!header_soporta_calculo(&custom));
        custom.es_cantidad = true;
        custom.cantidad_definida = true;
        assert!(header_soporta_calculo(&custom));

        // Con operaciones ya cargadas siempre se puede seguir editando.
        let mut unitario = HeaderDraft::base(BASE_UNITARIO);
        unitario.operaciones.push(OperacionCalculo {
            operador: OperadorCalculo::Suma,
            valores: vec![valor_placeholder(ColumnKind::Base)],
        });
        assert!(header_soporta_calculo(&unitario));
    }

    #[test]
    fn reglas_de_elegibilidad_como_operando() {
        use crate::domain::a005_tipo_material::headers::{BASE_DETALLE, BASE_UNIDAD};

        assert!(header_seleccionable(&HeaderDraft::base(BASE_CANTIDAD)));
        assert!(header_seleccionable(&HeaderDraft::base(BASE_UNITARIO)));
        assert!(!header_seleccionable(&HeaderDraft::base(BASE_DETALLE)));
        assert!(!header_seleccionable(&HeaderDraft::base(BASE_UNIDAD)));
        assert!(!header_seleccionable(&HeaderDraft::base(BASE_TOTAL)));

        let mut custom = HeaderDraft::nuevo_custom("Kg", 6);
        assert!(!header_seleccionable(&custom));
        custom.es_cantidad = true;
        custom.cantidad_definida = true;
        assert!(header_seleccionable(&custom));
    }

    #[test]
    fn formatea_expresion_con_placeholders() {
        let operaciones = vec![OperacionCalculo {
            operador: OperadorCalculo::Multiplicacion,
            valores: vec![
                operando("base-2", "Cantidad"),
                valor_placeholder(ColumnKind::Base),
            ],
        }];
        assert_eq!(formatear_expresion(&operaciones), "Cantidad × ---");
    }

    #[test]
    fn formatea_cantidad_por_unitario() {
        let operaciones = vec![OperacionCalculo {
            operador: OperadorCalculo::Multiplicacion,
            valores: vec![
                operando("base-2", "Cantidad"),
                operando("base-4", "$Unitario"),
            ],
        }];
        assert_eq!(formatear_expresion(&operaciones), "Cantidad × $Unitario");
    }

    #[test]
    fn evalua_cadena_sin_precedencia() {
        // 2 + 3, luego × 4 = 20 (izquierda a derecha)
        let operaciones = vec![
            OperacionCalculo {
                operador: OperadorCalculo::Suma,
                valores: vec![operando("a", "A"), operando("b", "B")],
            },
            OperacionCalculo {
                operador: OperadorCalculo::Multiplicacion,
                valores: vec![operando("c", "C")],
            },
        ];
        let resultado = evaluar_operaciones(&operaciones, |id| match id {
            "a" => Some(2.0),
            "b" => Some(3.0),
            "c" => Some(4.0),
            _ => None,
        });
        assert_eq!(resultado.valor, 20.0);
        assert!(resultado.completa);
    }

    #[test]
    fn operando_sin_resolver_marca_incompleto() {
        let operaciones = vec![OperacionCalculo {
            operador: OperadorCalculo::Multiplicacion,
            valores: vec![operando("a", "A"), valor_placeholder(ColumnKind::Base)],
        }];
        let resultado = evaluar_operaciones(&operaciones, |id| (id == "a").then_some(5.0));
        assert_eq!(resultado.valor, 5.0);
        assert!(!resultado.completa);
    }

    #[test]
    fn division_por_cero_omite_el_paso() {
        let operaciones = vec![OperacionCalculo {
            operador: OperadorCalculo::Division,
            valores: vec![operando("a", "A"), operando("b", "B")],
        }];
        let resultado = evaluar_operaciones(&operaciones, |id| match id {
            "a" => Some(10.0),
            "b" => Some(0.0),
            _ => None,
        });
        assert_eq!(resultado.valor, 10.0);
        assert!(!resultado.completa);
    }

    #[test]
    fn detecta_ciclos_directos_e_indirectos() {
        let mut flete = HeaderDraft::nuevo_custom("Flete", 6);
        let mut seguro = HeaderDraft::nuevo_custom("Seguro", 7);
        let flete_id = flete.id.clone();
        let seguro_id = seguro.id.clone();

        // seguro referencia a flete
        seguro.operaciones.push(OperacionCalculo {
            operador: OperadorCalculo::Suma,
            valores: vec![operando(&flete_id, "Flete")],
        });
        // flete aún no referencia a nadie
        flete.operaciones.clear();

        let headers = vec![flete.clone(), seguro.clone()];
        assert!(introduce_ciclo(&headers, &flete_id, &flete_id));
        assert!(introduce_ciclo(&headers, &flete_id, &seguro_id));
        assert!(!introduce_ciclo(&headers, &seguro_id, &flete_id));
        assert!(!introduce_ciclo(&headers, &seguro_id, "base-2"));
    }
}
