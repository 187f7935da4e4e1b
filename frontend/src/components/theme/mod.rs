mod styles;
pub mod themes;

pub use styles::ThemeStyles;
