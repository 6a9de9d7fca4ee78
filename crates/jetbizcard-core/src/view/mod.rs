//! Virtual view tree produced by the render functions.
//!
//! A [`ViewNode`] is plain data: comparing two trees is comparing what
//! would be drawn. Hosts walk the tree to build real widgets and forward
//! [`Action`]s from buttons back to the [`Screen`](crate::Screen).

mod diff;

use std::collections::BTreeSet;

pub use diff::{diff, Patch};

use crate::asset::AssetRef;

/// What activating a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleReveal,
}

/// The part of the card a node renders. Used for lookup and diff identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Layout,
    Screen,
    Card,
    Avatar,
    Divider,
    InfoBlock,
    Name,
    Profession,
    Handle,
    ToggleButton,
    RevealPanel,
    PortfolioList,
    PortfolioRow,
    RowTitle,
    RowCaption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Box,
    Column,
    Row,
    /// Vertically scrollable column
    Scroll,
    Divider,
    Text(String),
    Image { asset: AssetRef, alt: String },
    Button { action: Action },
}

impl NodeKind {
    fn same_variant(&self, other: &NodeKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Ordered CSS declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style(Vec<(&'static str, String)>);

impl Style {
    /// Sets a property, replacing an earlier value for the same property.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.0.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub kind: NodeKind,
    pub role: Role,
    pub key: Option<String>,
    pub class: Option<&'static str>,
    pub style: Style,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            role: Role::Layout,
            key: None,
            class: None,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn boxed() -> Self {
        Self::new(NodeKind::Box)
    }

    pub fn column() -> Self {
        Self::new(NodeKind::Column)
            .style("display", "flex")
            .style("flex-direction", "column")
    }

    pub fn row() -> Self {
        Self::new(NodeKind::Row)
            .style("display", "flex")
            .style("flex-direction", "row")
    }

    pub fn scroll() -> Self {
        Self::new(NodeKind::Scroll)
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("overflow-y", "auto")
    }

    /// Text renders as an inline element; `display: block` keeps it on its own line.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(content.into())).style("display", "block")
    }

    pub fn image(asset: AssetRef, alt: impl Into<String>) -> Self {
        Self::new(NodeKind::Image { asset, alt: alt.into() })
    }

    pub fn button(action: Action) -> Self {
        Self::new(NodeKind::Button { action })
    }

    pub fn divider() -> Self {
        Self::new(NodeKind::Divider).role(Role::Divider)
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn styles(mut self, decls: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        for (property, value) in decls {
            self.style.set(property, value);
        }
        self
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Text content if this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(content) => Some(content),
            _ => None,
        }
    }

    /// All text in the subtree, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Some(text) = node.text_content() {
                out.push(text);
            }
        });
        out
    }

    /// First node with `role`, depth first.
    pub fn find(&self, role: Role) -> Option<&ViewNode> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(role))
    }

    pub fn find_all(&self, role: Role) -> Vec<&ViewNode> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if node.role == role {
                out.push(node);
            }
        });
        out
    }

    pub fn contains(&self, role: Role) -> bool {
        self.find(role).is_some()
    }

    /// Every asset referenced in the subtree.
    pub fn assets(&self) -> BTreeSet<AssetRef> {
        let mut out = BTreeSet::new();
        self.walk(&mut |node| {
            if let NodeKind::Image { asset, .. } = &node.kind {
                out.insert(asset.clone());
            }
        });
        out
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a ViewNode)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}
