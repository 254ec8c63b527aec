use leptos::prelude::*;

use crate::content::ContactLink;

#[component]
pub fn ContactChip(link: ContactLink) -> impl IntoView {
    let external = link.kind.is_external();
    view! {
        <a
            href=link.href
            class=link.kind.css_class()
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            <span class="contact-icon">{link.kind.icon()}</span>
            <span>{link.label}</span>
        </a>
    }
}

#[component]
pub fn HeroSection(
    #[prop(into)] name: String,
    #[prop(into)] tagline: String,
    #[prop(into)] address: String,
    contacts: Vec<ContactLink>,
) -> impl IntoView {
    view! {
        <section id="home" class="section hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-content">
                <h1 class="hero-name">{name}</h1>
                <p class="hero-tagline">{tagline}</p>

                <div class="contact-row">
                    {contacts
                        .into_iter()
                        .map(|link| view! { <ContactChip link=link /> })
                        .collect_view()}
                </div>

                <div class="hero-address">
                    <span class="contact-icon">"\u{1F4CD}"</span>
                    <span>{address}</span>
                </div>
            </div>
            <div class="scroll-cue" aria-hidden="true">"\u{2304}"</div>
        </section>
    }
}
