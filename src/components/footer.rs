//! Page footer.

use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="page-footer">
            <div class="section-inner footer-row">
                <div class="brand">
                    <span class="brand-mark small"><i class="fas fa-cut"></i></span>
                    <span class="brand-name">{ config::BRAND }</span>
                </div>
                <div class="footer-note">
                    <p>{ format!("© 2025 {} - open source project", config::BRAND) }</p>
                    <p>{ config::TAGLINE }</p>
                </div>
            </div>
        </footer>
    }
}
