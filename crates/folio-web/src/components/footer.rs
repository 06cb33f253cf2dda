use folio_config::schema::FooterConfig;
use leptos::prelude::*;

#[component]
pub fn Footer(footer: FooterConfig) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{footer.copyright}</p>
            </div>
        </footer>
    }
}
