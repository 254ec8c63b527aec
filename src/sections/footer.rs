use leptos::prelude::*;

use crate::content::ContactLink;

#[component]
pub fn Footer(#[prop(into)] copyright: String, links: Vec<ContactLink>) -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="muted">{copyright}</p>
            <div class="footer-links">
                {links
                    .into_iter()
                    .map(|link| {
                        let external = link.kind.is_external();
                        view! {
                            <a
                                href=link.href
                                class="footer-link"
                                aria-label=link.label
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                            >
                                {link.kind.icon()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
