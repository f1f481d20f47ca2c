//! Interface showcase grid.

use yew::prelude::*;

use crate::components::section::{RevealSection, Section, SectionHeader};

#[derive(Properties, PartialEq)]
struct UiCardProps {
    icon: String,
    title: String,
    description: String,
}

#[function_component(UiCard)]
fn ui_card(props: &UiCardProps) -> Html {
    html! {
        <div class="card ui-card">
            <div class="card-glyph round">
                <i class={format!("fas {}", props.icon)}></i>
            </div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}

#[function_component(UiShowcase)]
pub fn ui_showcase() -> Html {
    html! {
        <RevealSection section={Section::Ui} class="ui-showcase band">
            <div class="section-inner">
                <SectionHeader
                    title="The interface"
                    blurb="A clean, focused interface that stays out of your way."
                />
                <div class="card-grid stagger">
                    <UiCard
                        icon="fa-language"
                        title="Localized"
                        description="A fully translated interface that follows your \
                                     language's conventions end to end."
                    />
                    <UiCard
                        icon="fa-tablet-alt"
                        title="Responsive layout"
                        description="Adapts to any screen, from a desktop monitor down \
                                     to a tablet or phone."
                    />
                    <UiCard
                        icon="fa-mouse-pointer"
                        title="Intuitive controls"
                        description="A straightforward flow anyone can pick up, with no \
                                     editing experience required."
                    />
                    <UiCard
                        icon="fa-images"
                        title="Sample images"
                        description="Bundled samples let you try the tool and judge the \
                                     results right away."
                    />
                    <UiCard
                        icon="fa-bell"
                        title="Clear status"
                        description="Progress and results are always visible, so you \
                                     know exactly where a job stands."
                    />
                </div>
            </div>
        </RevealSection>
    }
}
