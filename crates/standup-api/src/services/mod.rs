// Services layer for business logic
// Services own validation and ownership checks, calling storage directly

pub mod log;

pub use log::LogService;
