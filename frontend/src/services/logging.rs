use log::Level;

/// Component-tagged logging on top of the `log` facade.
///
/// Records are routed to the browser console by the logger installed in
/// `main`.
pub struct Logger;

impl Logger {
    /// Install the console logger, once at startup
    pub fn init() {
        wasm_logger::init(wasm_logger::Config::new(Level::Debug));
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, message, component);
    }

    fn log(level: Level, message: &str, component: &str) {
        log::log!(level, "[{}] {}", component, message);
    }
}
