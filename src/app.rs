use dioxus::prelude::*;
use jetbizcard_core::{Action, BundledAssets, Screen};
use jetbizcard_ui::{AssetUrls, NodeView};

use crate::context::launch_settings;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Mounts the card in the forced light theme and redraws once per
/// re-render of the mounted [`Screen`].
#[component]
pub fn RootScreen() -> Element {
    let settings = launch_settings();

    let screen = use_hook(|| Screen::mount(settings.content.clone()));

    // Resolve images once. Rows reuse the profile avatar, so the
    // collapsed tree already references every asset.
    let assets = use_hook(|| {
        let resolver = BundledAssets::new(&settings.assets_dir);
        AssetUrls::resolve(&resolver, screen.tree().assets())
    });

    // Screen re-renders drive Dioxus updates
    use_hook({
        let screen = screen.clone();
        move || {
            let update = schedule_update();
            screen.on_render(move |patches| {
                tracing::trace!(patches = patches.len(), "Scheduling redraw");
                update();
            });
        }
    });

    let tree = screen.tree();
    let dispatcher = screen.clone();

    rsx! {
        style { {GLOBAL_STYLES} }
        NodeView {
            node: tree,
            assets: assets,
            on_action: move |action: Action| dispatcher.dispatch(action),
        }
    }
}
