pub mod engine;
pub mod store;

pub use engine::{generar_estructuras_costo, GenerateCostInput, GenerateCostOutput};
pub use store::{create_state, CostoStore};
