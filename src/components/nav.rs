//! Top navigation: brand, section links, theme toggle, and the mobile menu.

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::section::Section;
use crate::config;
use crate::hooks::use_theme::use_theme;
use crate::Route;

/// Mobile navigation drawer state. Lives for the page session; there is no
/// terminal state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Selecting a navigation link always lands here, open or not.
    pub fn dismissed(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    section: Section,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    html! {
        <a class="nav-link" href={props.section.nav_href()}>
            { props.section.nav_label() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct MobileNavLinkProps {
    section: Section,
    /// Fired before the browser follows the link; closes the drawer.
    on_select: Callback<()>,
}

#[function_component(MobileNavLink)]
fn mobile_nav_link(props: &MobileNavLinkProps) -> Html {
    let on_select = props.on_select.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(()));
    html! {
        <a class="mobile-nav-link" href={props.section.nav_href()} {onclick}>
            { props.section.nav_label() }
        </a>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let theme = use_theme();
    let menu = use_state(MenuState::default);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set((*theme).toggled()))
    };

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).toggled()))
    };

    // Selecting any link forces the drawer closed before the browser scrolls.
    let on_select = {
        let menu = menu.clone();
        Callback::from(move |_| menu.set((*menu).dismissed()))
    };

    html! {
        <nav class="top-nav">
            <div class="nav-inner">
                <div class="nav-row">
                    <Link<Route> to={Route::Home} classes="brand">
                        <span class="brand-mark"><i class="fas fa-cut"></i></span>
                        <span class="brand-name">{ config::BRAND }</span>
                    </Link<Route>>

                    <div class="nav-links">
                        { for Section::ALL.iter().map(|section| html! {
                            <NavLink section={*section} />
                        }) }
                        <button class="download-button">{"Download"}</button>
                        <button
                            class="icon-button"
                            onclick={on_toggle_theme.clone()}
                            aria-label="Toggle theme"
                        >
                            <i class={format!("fas {}", theme.icon())}></i>
                        </button>
                    </div>

                    <div class="nav-mobile-controls">
                        <button
                            class="icon-button"
                            onclick={on_toggle_theme}
                            aria-label="Toggle theme"
                        >
                            <i class={format!("fas {}", theme.icon())}></i>
                        </button>
                        <button
                            class="icon-button"
                            onclick={on_toggle_menu}
                            aria-label={if menu.is_open() { "Close menu" } else { "Open menu" }}
                        >
                            <i class={format!(
                                "fas {}",
                                if menu.is_open() { "fa-times" } else { "fa-bars" }
                            )}></i>
                        </button>
                    </div>
                </div>

                if menu.is_open() {
                    <div class="mobile-menu">
                        { for Section::ALL.iter().map(|section| html! {
                            <MobileNavLink section={*section} on_select={on_select.clone()} />
                        }) }
                        <button class="download-button wide">{"Download"}</button>
                    </div>
                }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_flips_and_round_trips() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
        assert_eq!(MenuState::Closed.toggled().toggled(), MenuState::Closed);
    }

    #[test]
    fn selecting_a_link_closes_an_open_menu() {
        assert_eq!(MenuState::Open.dismissed(), MenuState::Closed);
        assert_eq!(MenuState::Closed.dismissed(), MenuState::Closed);
    }
}
