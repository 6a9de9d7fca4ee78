//! Node View Component
//!
//! Renders one view node and, recursively, its children.

use dioxus::prelude::*;
use jetbizcard_core::{Action, NodeKind, ViewNode};

use super::AssetUrls;

/// Properties for the NodeView component
#[derive(Clone, PartialEq, Props)]
pub struct NodeViewProps {
    /// Subtree to render
    pub node: ViewNode,
    /// Image sources for `Image` nodes
    pub assets: AssetUrls,
    /// Called when a button node is clicked
    pub on_action: EventHandler<Action>,
}

/// Class attribute for a node, empty when it has none
pub fn class_attr(node: &ViewNode) -> &'static str {
    node.class.unwrap_or("")
}

/// Key used to keep sibling identity stable across renders
pub fn child_key(node: &ViewNode, index: usize) -> String {
    match &node.key {
        Some(key) => key.clone(),
        None => format!("{:?}-{}", node.role, index),
    }
}

/// Renders a core view tree as webview elements
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NodeView {
///         node: screen.tree(),
///         assets: assets.clone(),
///         on_action: move |action| screen.dispatch(action),
///     }
/// }
/// ```
#[component]
pub fn NodeView(props: NodeViewProps) -> Element {
    let node = props.node;
    let assets = props.assets;
    let on_action = props.on_action;

    let class = class_attr(&node);
    let style = node.style.to_css();

    let children = node.children.iter().enumerate().map(|(index, child)| {
        let key = child_key(child, index);
        rsx! {
            NodeView {
                key: "{key}",
                node: child.clone(),
                assets: assets.clone(),
                on_action: on_action,
            }
        }
    });

    match &node.kind {
        NodeKind::Box | NodeKind::Column | NodeKind::Row | NodeKind::Scroll => rsx! {
            div { class: "{class}", style: "{style}", {children} }
        },
        NodeKind::Divider => rsx! {
            hr { class: "{class}", style: "{style}" }
        },
        // span is valid inside buttons; block layout comes from the style
        NodeKind::Text(content) => rsx! {
            span { class: "{class}", style: "{style}", "{content}" }
        },
        NodeKind::Image { asset, alt } => {
            let src = assets.url(asset);
            rsx! {
                img { class: "{class}", style: "{style}", src: "{src}", alt: "{alt}" }
            }
        }
        NodeKind::Button { action } => {
            let action = *action;
            rsx! {
                button {
                    class: "{class}",
                    style: "{style}",
                    r#type: "button",
                    onclick: move |_| on_action.call(action),
                    {children}
                }
            }
        }
    }
}
