//! JetBizCard Core Library
//!
//! Everything about the business card that does not depend on a UI toolkit.
//!
//! ## Overview
//!
//! The card is a profile picture, three lines of text, a "Portfolio"
//! button and a panel listing projects that the button shows and hides.
//! Rendering is a set of pure functions from ([`CardContent`],
//! [`RevealState`], [`ThemeConfig`]) to a [`ViewNode`] tree.
//!
//! The one piece of mutable state lives in a [`RevealStore`]. A mounted
//! [`Screen`] subscribes to it and re-renders once per toggle, producing
//! a [`Patch`] list that hosts can use to decide what to redraw.
//!
//! ## Quick Start
//!
//! ```
//! use jetbizcard_core::{Action, CardContent, Role, Screen};
//!
//! let screen = Screen::mount(CardContent::default());
//! assert!(!screen.tree().contains(Role::PortfolioList));
//!
//! screen.dispatch(Action::ToggleReveal);
//! let tree = screen.tree();
//! assert_eq!(tree.find_all(Role::PortfolioRow).len(), 10);
//! ```

pub mod asset;
pub mod components;
pub mod content;
pub mod error;
pub mod reveal;
pub mod screen;
pub mod theme;
pub mod view;

// Re-exports
pub use asset::{resolve_or_placeholder, AssetRef, AssetResolver, BundledAssets, ResolvedAsset};
pub use components::{
    biz_card, image_avatar, info_block, portfolio_list, portfolio_row, reveal_panel, root_screen,
    ROW_CAPTION, TOGGLE_LABEL,
};
pub use content::{default_portfolio, CardContent, Person, PortfolioItem};
pub use error::{CardError, CardResult};
pub use reveal::{CardPhase, RevealState, RevealStore, Subscription};
pub use screen::Screen;
pub use theme::{ThemeColors, ThemeConfig, ThemeMode, TextStyle, Typography, FORCED_THEME_MODE};
pub use view::{diff, Action, NodeKind, Patch, Role, Style, ViewNode};
