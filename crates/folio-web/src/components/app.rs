use folio_config::FolioConfig;
use leptos::html::Div;
use leptos::prelude::*;

use super::about::About;
use super::background::use_background_effect;
use super::contact::Contact;
use super::footer::Footer;
use super::hero::Hero;
use super::nav::NavBar;
use super::projects::Projects;
use super::skills::Skills;

/// The whole page. The outer container doubles as the halo mount.
#[component]
pub fn Portfolio(config: FolioConfig) -> impl IntoView {
    let FolioConfig {
        profile,
        hero,
        background,
        reveal,
        skills,
        projects,
        contact,
        footer,
        ..
    } = config;

    let halo_mount = NodeRef::<Div>::new();
    use_background_effect(halo_mount, background);

    view! {
        <div class="shell" node_ref=halo_mount>
            <NavBar />
            <main class="container">
                <Hero config=hero reveal=reveal.clone() />
                <About profile=profile reveal=reveal.clone() />
                <Skills skills=skills reveal=reveal.clone() />
                <Projects projects=projects reveal=reveal.clone() />
                <Contact contact=contact reveal=reveal />
            </main>
            <Footer footer=footer />
        </div>
    }
}
