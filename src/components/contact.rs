//! Contact block.

use yew::prelude::*;

use crate::components::section::{RevealSection, Section};
use crate::config;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <RevealSection section={Section::Contact} class="contact">
            <div class="section-inner">
                <div class="contact-panel stagger">
                    <div class="section-header">
                        <h2>{"Get in touch"}</h2>
                        <div class="header-rule"></div>
                        <p>{"Questions, suggestions, or collaboration ideas are always welcome."}</p>
                    </div>
                    <div class="contact-author">
                        <div class="contact-avatar">
                            <i class="fas fa-user"></i>
                        </div>
                        <div class="contact-details">
                            <h3>{ config::AUTHOR_NAME }</h3>
                            <div class="contact-links">
                                <a href={config::mailto_href()}>
                                    <i class="fas fa-envelope"></i>
                                    {" "}{ config::CONTACT_EMAIL }
                                </a>
                                <a href={config::wechat_href()}>
                                    <i class="fab fa-weixin"></i>
                                    {" "}{ config::CONTACT_WECHAT }
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
