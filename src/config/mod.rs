mod load;
mod types;

pub use load::LoadedConfig;
pub use types::ShapesConfig;
