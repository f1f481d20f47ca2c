//! Technical highlights grid.

use yew::prelude::*;

use crate::components::section::{RevealSection, Section, SectionHeader};

#[derive(Properties, PartialEq)]
struct TechCardProps {
    icon: String,
    title: String,
    description: String,
}

#[function_component(TechCard)]
fn tech_card(props: &TechCardProps) -> Html {
    html! {
        <div class="card tech-card">
            <div class="card-glyph">
                <i class={format!("fas {}", props.icon)}></i>
            </div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}

#[function_component(Technical)]
pub fn technical() -> Html {
    html! {
        <RevealSection section={Section::Technical} class="technical">
            <div class="section-inner">
                <SectionHeader
                    title="Under the hood"
                    blurb="Engineered for fast, private, and stable image processing."
                />
                <div class="card-grid stagger">
                    <TechCard
                        icon="fa-shield-alt"
                        title="Fully local"
                        description="All processing happens on-device. No image ever \
                                     touches a server, so your work stays private."
                    />
                    <TechCard
                        icon="fa-microchip"
                        title="GPU acceleration"
                        description="CUDA support shortens heavy jobs dramatically and \
                                     keeps complex edits fluid."
                    />
                    <TechCard
                        icon="fa-memory"
                        title="Memory-aware"
                        description="Careful memory management handles very large images \
                                     without running the machine out."
                    />
                    <TechCard
                        icon="fa-exclamation-triangle"
                        title="Resilient"
                        description="Thorough error handling and recovery keep the app \
                                     stable through bad inputs and interrupted jobs."
                    />
                    <TechCard
                        icon="fa-chart-line"
                        title="Performance monitoring"
                        description="Watches system load in real time and adapts the \
                                     processing strategy to your hardware."
                    />
                </div>
            </div>
        </RevealSection>
    }
}
