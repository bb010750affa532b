use yew::prelude::*;

use crate::model::PersonalInfo;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroSectionProps {
    pub anchor: NodeRef,
    pub info: Option<PersonalInfo>,
}

/// Skill highlights as a quoted list, one entry per line, aligned under `skills: [`.
pub fn code_skills_literal(skills: &[String]) -> String {
    skills
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", \n           ")
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let content = match &props.info {
        Some(info) => html! {
            <>
                <div class="hero-content slide-in-left">
                    <h1 class="hero-title">
                        <span class="greeting">{"Hi, I'm "}</span>
                        <span id="hero-name" class="name">{ info.name.clone() }</span>
                    </h1>
                    <h2 id="hero-title" class="hero-subtitle">{ info.title.clone() }</h2>
                    <p id="hero-description" class="hero-description">{ info.description.clone() }</p>
                    <div class="hero-buttons">
                        <a href="#projects" class="btn btn-primary">{"View My Work"}</a>
                        <a href="#contact" class="btn btn-secondary">{"Get In Touch"}</a>
                    </div>
                </div>
                <div class="hero-image slide-in-right">
                    <div class="code-window">
                        <div class="code-header">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                        </div>
                        <pre class="code-content"><code>
                            <span class="keyword">{"const "}</span>{"developer = {\n    name: "}
                            <span id="hero-code-name" class="string">{ format!("\"{}\"", info.name) }</span>{",\n    skills: ["}
                            if let Some(skills) = &info.skills {
                                <span id="hero-code-skills" class="string">{ code_skills_literal(skills) }</span>
                            }
                            {"],\n    passion: "}
                            if let Some(passion) = &info.passion {
                                <span id="hero-code-passion" class="string">{ format!("\"{passion}\"") }</span>
                            }
                            {"\n};"}
                        </code></pre>
                    </div>
                </div>
            </>
        },
        None => html! {},
    };
    html! {
        <section id="home" class="hero" ref={props.anchor.clone()}>
            <div class="container hero-container">{ content }</div>
        </section>
    }
}
