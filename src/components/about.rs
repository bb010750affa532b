use yew::prelude::*;

use super::stats_panel::StatsPanel;
use crate::model::{About, Skill, Stat};

#[derive(Properties, PartialEq, Clone)]
pub struct AboutSectionProps {
    pub anchor: NodeRef,
    pub about: Option<About>,
    pub skills: Vec<Skill>,
    pub stats: Vec<Stat>,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    let about = props.about.as_ref();
    let title = about.map(|a| a.title.clone()).unwrap_or_default();
    let skills_title = about.map(|a| a.skills_title.clone()).unwrap_or_default();
    let paragraphs = about.and_then(|a| a.paragraphs.as_ref());

    html! {
        <section id="about" class="about" ref={props.anchor.clone()}>
            <div class="container">
                <h2 id="about-title" class="section-title fade-in">{ title }</h2>
                <div class="about-content">
                    <div class="about-text slide-in-left">
                        <div id="about-paragraphs">
                            if let Some(paragraphs) = paragraphs {
                                { for paragraphs.iter().map(|p| html! { <p>{ p.clone() }</p> }) }
                            }
                        </div>
                        <h3 id="skills-title" class="skills-title">{ skills_title }</h3>
                        <div id="skills-grid" class="skills-grid">
                            { for props.skills.iter().map(|skill| html! {
                                <div class="skill-item">
                                    <i class={skill.icon.clone()}></i>
                                    <span>{ skill.name.clone() }</span>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="about-stats slide-in-right">
                        <StatsPanel stats={props.stats.clone()} />
                    </div>
                </div>
            </div>
        </section>
    }
}
