pub mod aggregate;

pub use aggregate::{EquipoAsignado, ItemObra, PersonalAsignado};
