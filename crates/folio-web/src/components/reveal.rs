//! Reveal hooks: drive a [`RevealController`] from the browser.

use folio_config::schema::RevealPolicy;
use folio_motion::{RevealController, RevealState};
use leptos::html::Section;
use leptos::prelude::*;
use tracing::warn;

use crate::browser::ViewportObserver;

/// Reveal when `target` first scrolls into view.
///
/// If the observer cannot be created the section is shown immediately.
pub fn use_viewport_reveal(target: NodeRef<Section>, policy: RevealPolicy) -> ReadSignal<RevealState> {
    let (state, set_state) = signal(RevealState::Hidden);
    let controller = StoredValue::new_local(RevealController::new(policy));
    let observer = StoredValue::new_local(None::<ViewportObserver>);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if observer.with_value(Option::is_some) {
            return;
        }

        let watcher = ViewportObserver::observe(&element, move |intersecting| {
            if let Some(Some(next)) = controller.try_update_value(|c| c.observe(intersecting)) {
                set_state.set(next);
            }
        });
        match watcher {
            Ok(watcher) => observer.update_value(|slot| *slot = Some(watcher)),
            Err(e) => {
                warn!("viewport observer unavailable, revealing immediately: {e}");
                set_state.set(RevealState::Visible);
            }
        }
    });

    on_cleanup(move || {
        let _ = observer.try_update_value(|slot| slot.take());
    });

    state
}

/// Reveal on the first frame after mount.
pub fn use_mount_reveal() -> ReadSignal<RevealState> {
    let (state, set_state) = signal(RevealState::Hidden);
    let controller = StoredValue::new_local(RevealController::default());

    Effect::new(move |_| {
        request_animation_frame(move || {
            if let Some(Some(next)) = controller.try_update_value(|c| c.reveal_now()) {
                set_state.set(next);
            }
        });
    });

    state
}
