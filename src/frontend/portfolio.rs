use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use super::reveal::use_reveal;
use crate::filter::{Filter, ItemPhase, FADE_OUT_MS};
use crate::reveal::{REVEALED_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

const FILTERS: [(&str, &str); 4] = [
    ("all", "All"),
    ("web", "Web"),
    ("mobile", "Mobile"),
    ("ai", "AI"),
];

#[derive(Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "J.A.R.V.I.S. Console",
        category: "ai",
        summary: "Conversational operations assistant for the workshop.",
    },
    Project {
        title: "Stark Industries Portal",
        category: "web",
        summary: "Investor and press site with live product telemetry.",
    },
    Project {
        title: "Suit Diagnostics",
        category: "mobile",
        summary: "Field app for armor health checks and repair tickets.",
    },
    Project {
        title: "F.R.I.D.A.Y. Threat Model",
        category: "ai",
        summary: "Anomaly detection over satellite and sensor feeds.",
    },
    Project {
        title: "Arc Reactor Dashboard",
        category: "web",
        summary: "Realtime output monitoring for the clean-energy grid.",
    },
    Project {
        title: "Stark Expo Guide",
        category: "mobile",
        summary: "Venue map, schedule and ticketing for the Expo.",
    },
];

pub enum PhaseAction {
    Filter(bool),
    FadeElapsed,
}

#[derive(Clone, Copy, PartialEq, Default)]
struct PhaseState(ItemPhase);

impl Reducible for PhaseState {
    type Action = PhaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            PhaseAction::Filter(matches) => self.0.on_filter(matches),
            PhaseAction::FadeElapsed => self.0.on_fade_elapsed(),
        };
        Rc::new(Self(next))
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioItemProps {
    project: Project,
    matches: bool,
}

#[function_component(PortfolioItem)]
fn portfolio_item(props: &PortfolioItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN);
    let phase = use_reducer_eq(PhaseState::default);

    {
        let dispatcher = phase.dispatcher();
        use_effect_with(props.matches, move |matches| {
            dispatcher.dispatch(PhaseAction::Filter(*matches));
            || ()
        });
    }

    {
        let dispatcher = phase.dispatcher();
        use_effect_with(phase.0, move |phase| {
            let timeout = (*phase == ItemPhase::FadingOut).then(|| {
                Timeout::new(FADE_OUT_MS, move || dispatcher.dispatch(PhaseAction::FadeElapsed))
            });
            move || drop(timeout)
        });
    }

    let style = match phase.0.animation() {
        Some(animation) => format!("display: {}; animation: {animation};", phase.0.display()),
        None => format!("display: {};", phase.0.display()),
    };

    html! {
        <div
            ref={node}
            class={classes!("portfolio-item", revealed.then_some(REVEALED_CLASS))}
            data-category={props.project.category}
            aria-hidden={(!phase.0.is_visible()).to_string()}
            {style}
        >
            <div class="portfolio-content">
                <h3>{ props.project.title }</h3>
                <p>{ props.project.summary }</p>
            </div>
        </div>
    }
}

#[function_component(PortfolioSection)]
pub fn portfolio_section() -> Html {
    let filter = use_state_eq(Filter::default);

    html! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <h2 class="section-title">{"Portfolio"}</h2>
                <div class="portfolio-filters">
                    { for FILTERS.iter().map(|(value, label)| {
                        let selected = Filter::parse(value);
                        let active = *filter == selected;
                        let data_filter = selected.as_str().to_string();
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(selected.clone()))
                        };
                        html! {
                            <button
                                class={classes!("filter-btn", active.then_some("active"))}
                                type="button"
                                data-filter={data_filter}
                                {onclick}
                            >
                                { *label }
                            </button>
                        }
                    }) }
                </div>
                <div class="portfolio-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <PortfolioItem
                            key={project.title}
                            project={*project}
                            matches={filter.matches(project.category)}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
