use yew::prelude::*;

use crate::config::TRANSITION_TICK_MS;
use crate::model::{Project, ProjectMedia};
use crate::state::{FilterAction, Phase, ProjectFilter, filter_keys};
use crate::util::Interval;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectsSectionProps {
    pub anchor: NodeRef,
    pub projects: Vec<Project>,
}

fn filter_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn phase_class(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Hidden => Some("is-hidden"),
        Phase::Visible => Some("visible"),
        Phase::Appearing | Phase::Disappearing => None,
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ProjectCardProps {
    project: Project,
    phase: Phase,
}

#[function_component]
fn ProjectCard(props: &ProjectCardProps) -> Html {
    let p = &props.project;
    let media = match p.media() {
        Some(ProjectMedia::Image(src)) => html! { <img src={src.to_string()} alt={p.title.clone()} /> },
        Some(ProjectMedia::Icon(icon)) => html! { <i class={icon.to_string()}></i> },
        None => html! {},
    };
    html! {
        <div class={classes!("project-card", phase_class(props.phase))} data-category={p.category.clone()}>
            <div class="project-image">{ media }</div>
            <div class="project-content">
                <h3 class="project-title">{ p.title.clone() }</h3>
                <p class="project-description">{ p.description.clone() }</p>
                <div class="project-tags">
                    { for p.tags.iter().map(|tag| html! { <span class="project-tag">{ tag.clone() }</span> }) }
                </div>
                <div class="project-links">
                    <a href={p.github_url.clone()} class="project-link" target="_blank" rel="noopener noreferrer">
                        <i class="fab fa-github"></i>{" Source Code"}
                    </a>
                    if let Some(live) = p.live_link() {
                        <a href={live.to_string()} class="project-link" target="_blank" rel="noopener noreferrer">
                            <i class="fas fa-external-link-alt"></i>{" Live Demo"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    let categories: Vec<String> = props.projects.iter().map(|p| p.category.clone()).collect();
    let filter = {
        let categories = categories.clone();
        use_reducer(move || ProjectFilter::new(categories))
    };

    // Cards are fixed per data set; a new set restarts the filter at "all".
    {
        let filter = filter.dispatcher();
        use_effect_with(categories, move |cats| {
            filter.dispatch(FilterAction::Reset(cats.clone()));
            || ()
        });
    }
    // Scheduler tick, running only while some card is mid-transition.
    {
        let dispatcher = filter.dispatcher();
        use_effect_with(filter.is_animating(), move |animating| {
            let ticker = animating.then(web_sys::window).flatten().map(|win| {
                Interval::start(&win, TRANSITION_TICK_MS, move || {
                    dispatcher.dispatch(FilterAction::Advance { dt_ms: TRANSITION_TICK_MS })
                })
            });
            move || drop(ticker)
        });
    }

    let buttons = if props.projects.is_empty() {
        html! {}
    } else {
        html! {
            <div class="project-filters">
                { for filter_keys(&props.projects).into_iter().map(|key| {
                    let active = (filter.active() == key).then_some("active");
                    let onclick = {
                        let filter = filter.clone();
                        let key = key.clone();
                        Callback::from(move |_| filter.dispatch(FilterAction::Select(key.clone())))
                    };
                    html! {
                        <button class={classes!("filter-btn", active)} data-filter={key.clone()} {onclick}>
                            { filter_label(&key) }
                        </button>
                    }
                }) }
            </div>
        }
    };

    let cards = props.projects.iter().enumerate().map(|(i, project)| {
        let phase = filter
            .cards()
            .get(i)
            .map(|c| c.transition.phase())
            .unwrap_or(Phase::Appearing);
        html! { <ProjectCard key={i} project={project.clone()} {phase} /> }
    });

    html! {
        <section id="projects" class="projects" ref={props.anchor.clone()}>
            <div class="container">
                <h2 class="section-title fade-in">{"Featured Projects"}</h2>
                { buttons }
                <div id="projects-grid" class="projects-grid">{ for cards }</div>
            </div>
        </section>
    }
}
