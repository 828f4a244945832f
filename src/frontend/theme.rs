use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::dom::{apply_theme, LocalThemeStore};
use crate::theme::{IconVisibility, Theme, ThemeController, ICON_SWAP_DELAY_MS, LOGO_GLITCH_MS};

/// Active theme plus the callback that flips and persists it.
#[hook]
pub fn use_theme() -> (Theme, Callback<MouseEvent>) {
    let controller = use_mut_ref(|| ThemeController::init(LocalThemeStore));
    let theme = {
        let controller = controller.clone();
        use_state_eq(move || controller.borrow().current())
    };

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = controller.borrow_mut().toggle();
            theme.set(next);
        })
    };

    (*theme, on_toggle)
}

/// `true` for a short window after every theme change, including the first.
#[hook]
pub fn use_glitch(theme: Theme) -> bool {
    let glitching = use_state_eq(|| false);
    {
        let glitching = glitching.clone();
        use_effect_with(theme, move |_| {
            glitching.set(true);
            let reset = glitching.clone();
            let timeout = Timeout::new(LOGO_GLITCH_MS, move || reset.set(false));
            move || drop(timeout)
        });
    }
    *glitching
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let shown = use_state_eq(|| props.theme);
    let swapping = use_state_eq(|| false);

    {
        let shown = shown.clone();
        let swapping = swapping.clone();
        use_effect_with(props.theme, move |theme| {
            let theme = *theme;
            swapping.set(true);
            let timeout = Timeout::new(ICON_SWAP_DELAY_MS, move || {
                shown.set(theme);
                swapping.set(false);
            });
            move || drop(timeout)
        });
    }

    let icons = IconVisibility::for_theme(*shown);
    let icon_style = if *swapping {
        "transform: scale(0);"
    } else {
        "transform: scale(1);"
    };
    let display = |visible: bool| if visible { "display: block;" } else { "display: none;" };

    html! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-label={props.theme.toggle_label()}
            aria-pressed={matches!(props.theme, Theme::Dark).to_string()}
            onclick={props.onclick.clone()}
        >
            <span class="theme-icon" style={icon_style} aria-hidden="true">
                <span class="moon-icon" style={display(icons.moon)}>{"☾"}</span>
                <span class="sun-icon" style={display(icons.sun)}>{"☀"}</span>
            </span>
        </button>
    }
}
