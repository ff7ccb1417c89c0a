pub mod aggregate;

pub use aggregate::Equipo;
