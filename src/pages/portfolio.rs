use leptos::prelude::*;
use leptos_router::hooks::use_location;
use log::{debug, error};

use crate::browser;
use crate::components::navbar::Navbar;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::Profile;
use crate::scroll_spy::{find_section, ScrollSpyContext};
use crate::sections::about::AboutSection;
use crate::sections::certifications::CertificationsSection;
use crate::sections::education::EducationSection;
use crate::sections::experience::ExperienceSection;
use crate::sections::footer::Footer;
use crate::sections::hero::HeroSection;
use crate::sections::personal::PersonalSection;
use crate::sections::skills::SkillsSection;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let nav = expect_context::<ScrollSpyContext>();
    let location = use_location();

    // Honor a deep link (#skills, ...) once the anchors exist
    Effect::new(move |_| {
        let fragment = browser::decode_fragment(&location.hash.get_untracked());
        if let Some(section) = find_section(&fragment) {
            debug!("Deep link to #{}", section.id);
            nav.navigate_to(section.id);
        }
    });

    let profile = match Profile::bundled() {
        Ok(profile) => profile,
        Err(e) => {
            error!("Failed to load profile content: {}", e);
            return view! {
                <div class="page">
                    <ThemeToggle />
                    <p class="content-error">"Content unavailable"</p>
                </div>
            }
            .into_any();
        }
    };

    let footer_links = profile.footer_contacts().cloned().collect::<Vec<_>>();
    let brand = profile.name.clone();

    view! {
        <div class="page">
            <ThemeToggle />
            <Navbar name=brand />
            <main>
                <HeroSection
                    name=profile.name
                    tagline=profile.tagline
                    address=profile.address
                    contacts=profile.contacts
                />
                <AboutSection objective=profile.objective />
                <SkillsSection skill_groups=profile.skill_groups soft_skills=profile.soft_skills />
                <EducationSection records=profile.education />
                <CertificationsSection certifications=profile.certifications />
                <ExperienceSection entries=profile.experience />
                <PersonalSection details=profile.personal_details />
            </main>
            <Footer copyright=profile.copyright links=footer_links />
        </div>
    }
    .into_any()
}
