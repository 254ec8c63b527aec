use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::section_header::SectionHeader;
use crate::content::SkillGroup;

#[component]
pub fn SkillsSection(skill_groups: Vec<SkillGroup>, soft_skills: Vec<String>) -> impl IntoView {
    view! {
        <section id="skills" class="section">
            <div class="container">
                <SectionHeader title="Skills & Expertise" />
                <div class="grid-2">
                    <div class="card">
                        <h3 class="card-title">"\u{2328} Technical Proficiencies"</h3>
                        {skill_groups
                            .into_iter()
                            .map(|group| {
                                view! {
                                    <div class="skill-group">
                                        <h4>{group.category}</h4>
                                        <div class="badge-row">
                                            {group
                                                .skills
                                                .into_iter()
                                                .map(|skill| view! { <Badge label=skill /> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="card">
                        <h3 class="card-title">"\u{1F9E0} Soft Skills"</h3>
                        <ul class="bullet-list">
                            {soft_skills
                                .into_iter()
                                .map(|skill| view! { <li>{skill}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
