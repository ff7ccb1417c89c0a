pub mod domain;
pub mod shared;

/// Inicializa logging y el panic hook del cliente. Debe llamarse una única
/// vez desde el punto de entrada wasm antes de montar la aplicación.
pub fn init() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
