pub mod a001_obra;
pub mod a002_item_obra;
pub mod a003_equipo;
pub mod a004_personal;
pub mod a005_tipo_material;
pub mod a006_costo;
