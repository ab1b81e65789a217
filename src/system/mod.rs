mod env;
mod logs;

pub use env::load_config;
pub use logs::init_logs;
