//! Animated halo background.

use folio_config::schema::BackgroundConfig;
use folio_motion::{EffectLifecycle, EffectPhase, ScriptPlan};
use leptos::html::Div;
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::browser::{scripts, VantaBackend};

fn log_phase(step: &'static str, phase: Option<EffectPhase>) {
    if let Some(phase) = phase {
        debug!(step, ?phase, "background effect");
    }
}

/// Bind the halo effect to `mount` once its scripts have loaded.
///
/// With the background disabled an inert lifecycle stands in, so no
/// scripts are fetched. Either way the effect is torn down when the owning
/// component unmounts.
pub fn use_background_effect(mount: NodeRef<Div>, config: BackgroundConfig) {
    if !config.enabled {
        let lifecycle = StoredValue::new_local(EffectLifecycle::inert(config.halo));
        log_phase("disabled", lifecycle.try_with_value(EffectLifecycle::phase));
        on_cleanup(move || {
            log_phase("teardown", lifecycle.try_update_value(|fx| fx.teardown()));
        });
        return;
    }

    let plan = ScriptPlan::from_config(&config);
    let lifecycle = StoredValue::new_local(EffectLifecycle::new(VantaBackend, config.halo));

    let injected = scripts::inject(&plan, move || {
        log_phase("ready", lifecycle.try_update_value(|fx| fx.mark_dependencies_ready()));
    });
    if let Err(e) = injected {
        warn!("background scripts not injected: {e}");
    }

    Effect::new(move |_| {
        if let Some(element) = mount.get() {
            log_phase("mount", lifecycle.try_update_value(|fx| fx.attach_mount(element.into())));
        }
    });

    on_cleanup(move || {
        log_phase("teardown", lifecycle.try_update_value(|fx| fx.teardown()));
    });
}
