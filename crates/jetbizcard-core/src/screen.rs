//! Headless runtime that mounts the root screen.
//!
//! A [`Screen`] owns the card's [`RevealStore`] and the current view tree.
//! It subscribes to the store, so every state transition re-renders the
//! tree exactly once and diffs it against the previous one. Hosts listen
//! with [`Screen::on_render`] and redraw from [`Screen::tree`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::root_screen;
use crate::content::CardContent;
use crate::reveal::{RevealState, RevealStore, Subscription};
use crate::theme::ThemeConfig;
use crate::view::{diff, Action, Patch, ViewNode};

type RenderListener = Rc<dyn Fn(&[Patch])>;

struct ScreenInner {
    content: CardContent,
    theme: ThemeConfig,
    tree: ViewNode,
    renders: u64,
    last_patches: Vec<Patch>,
    listeners: Vec<RenderListener>,
}

/// A mounted card. Clones share the same mount.
#[derive(Clone)]
pub struct Screen {
    store: RevealStore,
    subscription: Subscription,
    inner: Rc<RefCell<ScreenInner>>,
}

impl Screen {
    /// Mount with the theme the root screen always uses.
    pub fn mount(content: CardContent) -> Self {
        Self::mount_with_theme(content, ThemeConfig::forced())
    }

    pub fn mount_with_theme(content: CardContent, theme: ThemeConfig) -> Self {
        let store = RevealStore::new();
        let tree = root_screen(&content, &store.get(), &theme);
        tracing::debug!(nodes = tree.node_count(), "Mounted card");

        let inner = Rc::new(RefCell::new(ScreenInner {
            content,
            theme,
            tree,
            renders: 1,
            last_patches: Vec::new(),
            listeners: Vec::new(),
        }));

        let weak = Rc::downgrade(&inner);
        let subscription = store.subscribe(move |state| {
            if let Some(inner) = weak.upgrade() {
                rerender(&inner, state);
            }
        });

        Self { store, subscription, inner }
    }

    /// Handle a user action from the host.
    pub fn dispatch(&self, action: Action) {
        match action {
            Action::ToggleReveal => {
                self.store.toggle();
            }
        }
    }

    /// Call `f` after every re-render with the patches it produced.
    pub fn on_render(&self, f: impl Fn(&[Patch]) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(f));
    }

    pub fn tree(&self) -> ViewNode {
        self.inner.borrow().tree.clone()
    }

    pub fn state(&self) -> RevealState {
        self.store.get()
    }

    /// Renders so far, counting the initial mount.
    pub fn render_count(&self) -> u64 {
        self.inner.borrow().renders
    }

    pub fn last_patches(&self) -> Vec<Patch> {
        self.inner.borrow().last_patches.clone()
    }

    /// Render the current state without committing it.
    pub fn render(&self) -> ViewNode {
        let inner = self.inner.borrow();
        root_screen(&inner.content, &self.store.get(), &inner.theme)
    }

    /// Stop reacting to state changes. The last tree stays readable.
    pub fn unmount(self) {
        self.store.unsubscribe(self.subscription);
        tracing::debug!("Unmounted card");
    }
}

fn rerender(inner: &Rc<RefCell<ScreenInner>>, state: RevealState) {
    let (patches, listeners) = {
        let mut inner = inner.borrow_mut();
        let next = root_screen(&inner.content, &state, &inner.theme);
        let patches = diff(&inner.tree, &next);
        inner.tree = next;
        inner.renders += 1;
        inner.last_patches = patches.clone();
        tracing::debug!(
            visible = state.visible,
            render = inner.renders,
            patches = patches.len(),
            "Re-rendered card"
        );
        (patches, inner.listeners.clone())
    };
    for listener in listeners {
        listener(&patches);
    }
}
