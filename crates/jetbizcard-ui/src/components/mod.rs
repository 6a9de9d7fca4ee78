//! Components that render a card view tree.

mod asset_urls;
mod node_view;

pub use asset_urls::*;
pub use node_view::*;
