use yew::prelude::*;

use super::bootstrap::use_page_loaded;
use super::contact::ContactSection;
use super::dom::use_scroll_y;
use super::effects::{CursorFollower, SparkleLayer, TypedText};
use super::nav::Navbar;
use super::portfolio::PortfolioSection;
use super::reveal::{RevealBox, SkillBar, StatCounter};
use super::theme::use_theme;
use super::toast::ToastProvider;
use crate::scroll::parallax_transform;

const STATS: [(&str, &str); 3] = [
    ("15+", "Years Innovating"),
    ("250+", "Patents Filed"),
    ("99%", "Mission Success"),
];

const SKILLS: [(&str, u8); 5] = [
    ("Mechanical Engineering", 98),
    ("Artificial Intelligence", 95),
    ("Clean Energy Systems", 92),
    ("Rust & Embedded Firmware", 88),
    ("Public Speaking", 80),
];

const SKILL_TAGS: [&str; 6] = ["Nanotech", "Robotics", "Propulsion", "Holography", "Wasm", "Leadership"];

const AWARDS: [(&str, &str); 3] = [
    ("Howard Stark Medal", "Lifetime contribution to applied physics."),
    ("Clean Energy Prize", "Arc reactor grid deployment."),
    ("Expo Innovator of the Year", "Stark Expo keynote build."),
];

#[function_component(Hero)]
fn hero() -> Html {
    let scroll_y = use_scroll_y();
    let loaded = use_page_loaded();

    html! {
        <section id="home" class="hero">
            <div class="container hero-layout">
                <RevealBox class={classes!("hero-content")}>
                    <h1 class="hero-title">{"Tony Stark"}</h1>
                    <TypedText class={classes!("hero-role")} text="Genius. Engineer. Philanthropist." />
                    <p class="hero-description">
                        {"Building the armor, the reactor and the software that keeps them flying."}
                    </p>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#portfolio">{"View Work"}</a>
                        <a class="btn btn-secondary" href="#contact">{"Contact"}</a>
                    </div>
                </RevealBox>
                <RevealBox
                    class={classes!("hero-avatar")}
                    floating=true
                    style={AttrValue::from(format!("transform: {};", parallax_transform(scroll_y)))}
                >
                    <div class="avatar-ring" aria-hidden="true">{"◎"}</div>
                </RevealBox>
            </div>
            if loaded {
                <SparkleLayer />
            }
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">{"About"}</h2>
                <RevealBox class={classes!("about-content")}>
                    <p>
                        {"Inventor and CEO of Stark Industries. I design hardware that has to work the \
                          first time and software that keeps it honest in the field."}
                    </p>
                </RevealBox>
                <div class="stats">
                    { for STATS.iter().map(|(value, label)| html! {
                        <StatCounter value={*value} label={*label} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    html! {
        <section id="skills" class="skills">
            <div class="container">
                <h2 class="section-title">{"Skills"}</h2>
                <div class="skills-grid">
                    { for SKILLS.iter().map(|(name, percent)| html! {
                        <SkillBar name={*name} percent={*percent} />
                    }) }
                </div>
                <div class="skill-tags">
                    { for SKILL_TAGS.iter().map(|tag| html! {
                        <span class="skill-tag">{ *tag }</span>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Awards)]
fn awards() -> Html {
    html! {
        <section id="awards" class="awards">
            <div class="container">
                <h2 class="section-title">{"Awards"}</h2>
                <div class="awards-grid">
                    { for AWARDS.iter().map(|(title, detail)| html! {
                        <RevealBox class={classes!("award-item")}>
                            <h3>{ *title }</h3>
                            <p>{ *detail }</p>
                        </RevealBox>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let (theme, on_toggle_theme) = use_theme();

    html! {
        <ToastProvider>
            <CursorFollower />
            <Navbar {theme} {on_toggle_theme} />
            <main>
                <Hero />
                <About />
                <PortfolioSection />
                <Skills />
                <Awards />
                <ContactSection />
            </main>
            <footer class="footer">
                <p>{"© Stark Industries. Built with Rust and WebAssembly."}</p>
            </footer>
        </ToastProvider>
    }
}
