//! Hero section.

use yew::prelude::*;

use crate::components::section::{RevealSection, Section};
use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <RevealSection section={Section::Hero} class="hero">
            <div class="section-inner hero-layout stagger">
                <div class="hero-copy">
                    <h1>
                        <span class="gradient-text">{"AI-powered background removal"}</span>
                        <br />
                        {"that keeps image editing simple"}
                    </h1>
                    <p>
                        {"Advanced segmentation models detect the subject and lift the \
                          background automatically, with studio-grade edges. Everything \
                          runs on your own machine, so your photos never leave it."}
                    </p>
                    <div class="hero-actions">
                        <button class="download-button large">
                            <i class="fas fa-download"></i>{" Download"}
                        </button>
                        <a class="ghost-button" href="#features">
                            <i class="fas fa-info-circle"></i>{" Learn more"}
                        </a>
                    </div>
                </div>
                <div class="hero-art">
                    <div class="hero-glow"></div>
                    <img src={config::images::HERO} alt="AI Cutout in action" />
                </div>
            </div>
        </RevealSection>
    }
}
