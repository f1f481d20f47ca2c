//! Core feature grid.

use yew::prelude::*;

use crate::components::section::{RevealSection, Section, SectionHeader};
use crate::config;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    icon: String,
    title: String,
    description: String,
    image: String,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="card feature-card">
            <div class="card-media">
                <div class="card-media-shade"></div>
                <img src={props.image.clone()} alt={props.title.clone()} loading="lazy" />
            </div>
            <div class="card-body">
                <div class="card-glyph">
                    <i class={format!("fas {}", props.icon)}></i>
                </div>
                <h3>{ props.title.clone() }</h3>
                <p>{ props.description.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <RevealSection section={Section::Features} class="features band">
            <div class="section-inner">
                <SectionHeader
                    title="Core features"
                    blurb="A complete set of background removal tools, built to cover \
                           everything from a single portrait to a whole shoot."
                />
                <div class="card-grid stagger">
                    <FeatureCard
                        icon="fa-magic"
                        title="Smart cutout"
                        description="The model picks out the subject and removes the \
                                     background on its own, keeping fine detail intact."
                        image={config::images::FEATURE_CUTOUT}
                    />
                    <FeatureCard
                        icon="fa-user-edit"
                        title="Portrait refinement"
                        description="Tuned for people: hair, fur, and semi-transparent \
                                     edges come out clean."
                        image={config::images::FEATURE_PORTRAIT}
                    />
                    <FeatureCard
                        icon="fa-file-image"
                        title="Broad format support"
                        description="Reads JPG, PNG, BMP, GIF, and WebP sources, so any \
                                     library fits straight in."
                        image={config::images::FEATURE_FORMATS}
                    />
                    <FeatureCard
                        icon="fa-eye"
                        title="Live preview"
                        description="Results show up as you adjust parameters, with \
                                     immediate feedback on every change."
                        image={config::images::FEATURE_PREVIEW}
                    />
                    <FeatureCard
                        icon="fa-download"
                        title="One-click export"
                        description="Save processed images in the format and quality you \
                                     want, in one step."
                        image={config::images::FEATURE_EXPORT}
                    />
                    <FeatureCard
                        icon="fa-box"
                        title="Batch packaging"
                        description="Batch jobs are bundled into a single archive when \
                                     they finish, so every result downloads at once."
                        image={config::images::FEATURE_BATCH}
                    />
                </div>
            </div>
        </RevealSection>
    }
}
