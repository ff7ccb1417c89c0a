pub mod aggregate;

pub use aggregate::{
    Calculo, CalculoOperacion, HeaderAtributo, HeaderBase, Material, MaterialAtributo,
    OperadorCalculo, OrderHeader, TipoMaterial,
};
