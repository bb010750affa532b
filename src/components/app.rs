use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    about::AboutSection, anchors::SectionAnchors, back_to_top::BackToTop, contact::ContactSection,
    footer::FooterSection, hero::HeroSection, navbar::Navbar, notice_overlay::NoticeOverlay,
    page_effects::PageEffects, projects::ProjectsSection,
};
use crate::config::{LOAD_FAILURE_ALERT, TRANSITION_TICK_MS};
use crate::loader::{DataSource, fetch_portfolio, load_portfolio};
use crate::model::PortfolioData;
use crate::state::{NavState, NoticeAction, NoticeBoard};
use crate::util::Interval;

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(Rc<PortfolioData>),
    Failed,
}

#[function_component(App)]
pub fn app() -> Html {
    let load_state = use_state(|| LoadState::Loading);
    let nav = use_reducer(NavState::default);
    let notices = use_reducer(NoticeBoard::default);
    let anchors = (*use_state(SectionAnchors::default)).clone();

    // Load portfolio data once; every section renders from the result.
    {
        let load_state = load_state.clone();
        let notices = notices.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_portfolio(fetch_portfolio).await {
                    Ok(loaded) => {
                        if loaded.source == DataSource::Fallback {
                            notices.dispatch(NoticeAction::ShowDataNotice);
                        }
                        load_state.set(LoadState::Ready(Rc::new(loaded.data)));
                    }
                    Err(err) => {
                        log::error!("failed to load portfolio data: {err}");
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message(LOAD_FAILURE_ALERT);
                        }
                        load_state.set(LoadState::Failed);
                    }
                }
            });
            || ()
        });
    }

    let data = match &*load_state {
        LoadState::Ready(data) => Some(data.clone()),
        LoadState::Loading | LoadState::Failed => None,
    };
    let info = data.as_ref().and_then(|d| d.personal_info.clone());

    // Page title follows the portfolio owner.
    {
        let name = info.as_ref().map(|i| i.name.clone());
        use_effect_with(name, |name| {
            if let Some(name) = name {
                if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                    doc.set_title(&format!("{name} - Portfolio"));
                }
            }
            || ()
        });
    }
    // Scheduler tick, running only while a notice is on screen.
    {
        let dispatcher = notices.dispatcher();
        use_effect_with(!notices.is_empty(), move |showing| {
            let ticker = showing.then(web_sys::window).flatten().map(|win| {
                Interval::start(&win, TRANSITION_TICK_MS, move || {
                    dispatcher.dispatch(NoticeAction::Advance { dt_ms: TRANSITION_TICK_MS })
                })
            });
            move || drop(ticker)
        });
    }

    let dismiss_notice = {
        let notices = notices.dispatcher();
        Callback::from(move |_| notices.dispatch(NoticeAction::DismissDataNotice))
    };

    html! {
        <>
            <Navbar nav={nav.clone()} brand={info.as_ref().map(|i| i.name.clone())} />
            <main>
                <HeroSection anchor={anchors.home.clone()} info={info.clone()} />
                <AboutSection
                    anchor={anchors.about.clone()}
                    about={data.as_ref().and_then(|d| d.about.clone())}
                    skills={data.as_ref().map(|d| d.skills.clone()).unwrap_or_default()}
                    stats={data.as_ref().map(|d| d.stats.clone()).unwrap_or_default()}
                />
                <ProjectsSection
                    anchor={anchors.projects.clone()}
                    projects={data.as_ref().map(|d| d.projects.clone()).unwrap_or_default()}
                />
                <ContactSection
                    anchor={anchors.contact.clone()}
                    contact={data.as_ref().and_then(|d| d.contact.clone())}
                    info={info.clone()}
                    notices={notices.dispatcher()}
                />
            </main>
            <FooterSection
                footer={data.as_ref().and_then(|d| d.footer.clone())}
                social={info.as_ref().and_then(|i| i.social_links.clone())}
            />
            <BackToTop visible={nav.show_back_to_top} />
            <NoticeOverlay board={(*notices).clone()} on_dismiss_data_notice={dismiss_notice} />
            <PageEffects nav={nav.dispatcher()} anchors={anchors.clone()} ready={data.is_some()} />
        </>
    }
}
