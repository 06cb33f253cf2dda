use folio_common::SectionId;
use folio_motion::{Navigator, ScrollRequest};
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::browser::dom;
use crate::model::nav_class;

fn scroll(request: ScrollRequest) {
    if let Err(e) = dom::scroll_to(&request) {
        warn!(anchor = request.anchor, "scroll failed: {e}");
    }
}

/// Fixed top bar. Clicking an entry highlights it and smooth-scrolls to
/// its section. A `#section` fragment in the URL is honoured on load.
#[component]
pub fn NavBar() -> impl IntoView {
    let navigator = RwSignal::new(Navigator::new());

    Effect::new(move |_| {
        let fragment = match dom::location_hash() {
            Ok(fragment) if !fragment.is_empty() => fragment,
            Ok(_) => return,
            Err(e) => {
                debug!("no location fragment: {e}");
                return;
            }
        };
        match navigator.try_update(|nav| nav.restore(&fragment)) {
            Some(Ok(request)) => scroll(request),
            Some(Err(e)) => debug!(%fragment, "fragment ignored: {e}"),
            None => {}
        }
    });

    view! {
        <nav class="nav">
            <ul class="nav-links">
                {SectionId::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class=move || navigator.with(|nav| nav_class(section, nav.active()))
                                    on:click=move |_| {
                                        if let Some(request) = navigator.try_update(|nav| nav.select(section)) {
                                            scroll(request);
                                        }
                                    }
                                >
                                    {section.as_str()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
