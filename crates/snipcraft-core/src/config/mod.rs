//! Presentation configuration
//!
//! Consumed by the terminal layer only; the store, flow and generator never
//! read it.

pub mod locale;
pub mod palette;
pub mod settings;

pub use locale::{fill, Locale, Messages};
pub use palette::Palette;
pub use settings::{
    ColorMode, ConfigSource, ResolvedSettings, Settings, CONFIG_ENV, CONFIG_FILE,
};
