pub mod api;
pub mod calculo;
pub mod desde_tipo;
pub mod draft;
pub mod editor;
pub mod headers;
pub mod state;

pub use editor::HeaderEditor;
pub use headers::HeaderDraft;
pub use state::{create_state, TipoMaterialState};
