pub mod constants;
pub mod logger;
pub mod settings;

pub use logger::Logger;
pub use settings::Settings;
