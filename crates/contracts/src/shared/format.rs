//! Utilidades numéricas compartidas entre los módulos de costos y materiales.

/// Redondeo monetario a 2 decimales.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Interpreta el texto de una celda como número.
///
/// Acepta coma como separador decimal (entrada habitual de los usuarios)
/// y degrada a 0.0 ante texto vacío o no numérico.
pub fn parse_numeric(value: &str) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => 0.0,
    }
}

/// Representación textual de un valor calculado para volcarlo en un campo
/// de formulario. Los no finitos se representan como "0".
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    // Sin ceros de relleno: 12.50 se muestra como 12.5, 3.0 como 3.
    format!("{}", value)
}
