pub mod aggregate;

pub use aggregate::Obra;
