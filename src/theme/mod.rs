//! Page-level CSS. Colors and type come from the core `ThemeConfig`
//! as inline styles; this only covers what inline styles cannot.

mod styles;

pub use styles::GLOBAL_STYLES;
