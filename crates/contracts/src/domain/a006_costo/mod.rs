pub mod aggregate;

pub use aggregate::{Costo, CostoItemObra, CostoValue, TipoCosto, TipoCostoItem};
