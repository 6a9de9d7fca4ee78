//! Render functions for every part of the card.
//!
//! Each function is pure: the same inputs always give the same tree.
//! Theme values come from the [`ThemeConfig`] argument only.

use crate::asset::AssetRef;
use crate::content::{CardContent, Person, PortfolioItem};
use crate::reveal::{CardPhase, RevealState};
use crate::theme::ThemeConfig;
use crate::view::{Action, Role, ViewNode};

/// Avatar frame size when none is given
pub const DEFAULT_AVATAR_SIZE: u32 = 150;
/// Image size inside a default-sized avatar frame
pub const DEFAULT_AVATAR_IMAGE_SIZE: u32 = 135;
/// Avatar size on portfolio rows
pub const ROW_AVATAR_SIZE: u32 = 100;

pub const CARD_WIDTH: u32 = 200;
pub const CARD_HEIGHT: u32 = 390;

/// Caption shown under every project title
pub const ROW_CAPTION: &str = "A great Project";
/// Label of the reveal toggle
pub const TOGGLE_LABEL: &str = "Portfolio";

const ELEVATION_SHADOW: &str = "0 2px 4px rgba(0, 0, 0, 0.24), 0 1px 2px rgba(0, 0, 0, 0.12)";

fn px(value: u32) -> String {
    format!("{}px", value)
}

/// Circular, bordered, cropped image. `None` gives the large profile size.
pub fn image_avatar(asset: &AssetRef, size: Option<u32>, theme: &ThemeConfig) -> ViewNode {
    let (frame, image) = match size {
        Some(size) => (size, size),
        None => (DEFAULT_AVATAR_SIZE, DEFAULT_AVATAR_IMAGE_SIZE),
    };

    ViewNode::boxed()
        .role(Role::Avatar)
        .class("avatar")
        .style("width", px(frame))
        .style("height", px(frame))
        .style("flex-shrink", "0")
        .style("padding", "5px")
        .style("border-radius", "50%")
        .style("border", format!("0.5px solid {}", theme.colors.outline))
        .style("box-shadow", ELEVATION_SHADOW)
        .style("background", theme.colors.avatar_tint.clone())
        .style("overflow", "hidden")
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", "center")
        .child(
            ViewNode::image(asset.clone(), "Image Profile")
                .style("width", px(image))
                .style("height", px(image))
                .style("max-width", "100%")
                .style("max-height", "100%")
                .style("border-radius", "50%")
                .style("object-fit", "cover"),
        )
}

/// Name, profession and handle, top to bottom.
pub fn info_block(person: &Person, theme: &ThemeConfig) -> ViewNode {
    let type_scale = &theme.typography;

    ViewNode::column()
        .role(Role::InfoBlock)
        .style("padding", "5px")
        .child(
            ViewNode::text(person.name.clone())
                .role(Role::Name)
                .styles(type_scale.h4.css())
                .style("color", theme.colors.primary_variant.clone()),
        )
        .child(
            ViewNode::text(person.profession.clone())
                .role(Role::Profession)
                .styles(type_scale.body1.css())
                .style("color", theme.colors.on_surface.clone())
                .style("padding-top", "8px"),
        )
        .child(
            ViewNode::text(person.handle.clone())
                .role(Role::Handle)
                .styles(type_scale.subtitle1.css())
                .style("color", theme.colors.on_surface.clone())
                .style("padding-top", "8px"),
        )
}

/// One project: thumbnail beside a bold title and the fixed caption.
pub fn portfolio_row(item: &PortfolioItem, avatar: &AssetRef, theme: &ThemeConfig) -> ViewNode {
    let type_scale = &theme.typography;

    ViewNode::boxed()
        .role(Role::PortfolioRow)
        .class("portfolio-row")
        .style("margin", "13px")
        .style("box-shadow", ELEVATION_SHADOW)
        .style("background", theme.colors.surface.clone())
        .child(
            ViewNode::row()
                .style("padding", "7px")
                .style("margin", "8px")
                .style("background", theme.colors.surface.clone())
                .style("align-items", "center")
                .child(image_avatar(avatar, Some(ROW_AVATAR_SIZE), theme))
                .child(
                    ViewNode::column()
                        .style("padding", "8px")
                        .child(
                            ViewNode::text(item.title.clone())
                                .role(Role::RowTitle)
                                .styles(type_scale.body1.css())
                                .style("font-weight", "700")
                                .style("color", theme.colors.on_surface.clone()),
                        )
                        .child(
                            ViewNode::text(ROW_CAPTION)
                                .role(Role::RowCaption)
                                .styles(type_scale.body2.css())
                                .style("color", theme.colors.on_surface.clone()),
                        ),
                ),
        )
}

/// Scrollable column of rows, one per item, in input order.
pub fn portfolio_list(items: &[PortfolioItem], avatar: &AssetRef, theme: &ThemeConfig) -> ViewNode {
    ViewNode::scroll()
        .role(Role::PortfolioList)
        .style("height", "100%")
        .children(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| portfolio_row(item, avatar, theme).key(format!("project-{}", i))),
        )
}

/// Bordered frame around `child`, or nothing when hidden.
///
/// `child` is only called when the panel is visible.
pub fn reveal_panel(
    visible: bool,
    child: impl FnOnce() -> ViewNode,
    theme: &ThemeConfig,
) -> Option<ViewNode> {
    if !visible {
        return None;
    }
    Some(
        ViewNode::boxed()
            .role(Role::RevealPanel)
            .class("reveal-panel")
            .style("flex", "1")
            .style("min-height", "0")
            .style("width", "100%")
            .style("padding", "5px")
            .child(
                ViewNode::boxed()
                    .style("height", "100%")
                    .style("margin", "3px")
                    .style("border", format!("2px solid {}", theme.colors.outline))
                    .style("border-radius", "6px")
                    .style("background", theme.colors.surface.clone())
                    .style("overflow", "hidden")
                    .child(child()),
            ),
    )
}

/// The card: avatar, divider, info, toggle and, when expanded, the portfolio.
pub fn biz_card(content: &CardContent, state: &RevealState, theme: &ThemeConfig) -> ViewNode {
    let toggle = ViewNode::button(Action::ToggleReveal)
        .role(Role::ToggleButton)
        .class("toggle-button")
        .styles(theme.typography.button.css())
        .style("background", theme.colors.primary.clone())
        .style("color", theme.colors.on_primary.clone())
        .style("border", "none")
        .style("border-radius", "4px")
        .style("padding", "8px 16px")
        .style("box-shadow", ELEVATION_SHADOW)
        .child(ViewNode::text(TOGGLE_LABEL));

    let expanded = state.phase() == CardPhase::Expanded;
    let panel = reveal_panel(
        expanded,
        || portfolio_list(&content.projects, &content.avatar, theme),
        theme,
    );

    ViewNode::boxed()
        .role(Role::Card)
        .class("biz-card")
        .style("width", px(CARD_WIDTH))
        .style("height", px(CARD_HEIGHT))
        .style("margin", "12px")
        .style("border-radius", "15px")
        .style("box-shadow", ELEVATION_SHADOW)
        .style("background", theme.colors.card.clone())
        .style("overflow", "hidden")
        .child(
            ViewNode::column()
                .style("height", "100%")
                .style("align-items", "center")
                .style("justify-content", "flex-start")
                .child(image_avatar(&content.avatar, None, theme))
                .child(
                    ViewNode::divider()
                        .style("width", "100%")
                        .style("border", "none")
                        .style("border-top", format!("1px solid {}", theme.colors.divider)),
                )
                .child(info_block(&content.person, theme))
                .child(toggle)
                .children(panel),
        )
}

/// Full-size surface in the theme background holding the card.
pub fn root_screen(content: &CardContent, state: &RevealState, theme: &ThemeConfig) -> ViewNode {
    ViewNode::boxed()
        .role(Role::Screen)
        .class("root-screen")
        .style("width", "100%")
        .style("height", "100%")
        .style("background", theme.colors.background.clone())
        .style("font-family", theme.typography.font_family.clone())
        .child(biz_card(content, state, theme))
}
