//! Page sections and the scroll-reveal wrapper around them.

use yew::prelude::*;

use crate::hooks::use_in_view::{use_in_view, VIEW_THRESHOLD};

/// The five animated regions of the landing page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Hero,
    Features,
    Technical,
    Ui,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Features,
        Section::Technical,
        Section::Ui,
        Section::Contact,
    ];

    /// Fragment id rendered on the section element. The hero is the page top
    /// and carries none.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Hero => None,
            Section::Features => Some("features"),
            Section::Technical => Some("technical"),
            Section::Ui => Some("ui"),
            Section::Contact => Some("contact"),
        }
    }

    /// Href the navigation links point at.
    pub fn nav_href(self) -> &'static str {
        match self {
            Section::Hero => "/",
            Section::Features => "#features",
            Section::Technical => "#technical",
            Section::Ui => "#ui",
            Section::Contact => "#contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Features => "Features",
            Section::Technical => "Technology",
            Section::Ui => "Interface",
            Section::Contact => "About",
        }
    }
}

/// Whether a section's entrance animation has fired.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Visible,
}

impl RevealPhase {
    /// The only transition: `Hidden` becomes `Visible` once the section has
    /// been seen. A visible section stays visible.
    pub fn advance(self, in_view: bool) -> Self {
        match self {
            RevealPhase::Hidden if in_view => RevealPhase::Visible,
            phase => phase,
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            RevealPhase::Hidden => None,
            RevealPhase::Visible => Some("is-visible"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub section: Section,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps one landing page region and flips it to `is-visible` the first time
/// it scrolls into view. Elements inside `stagger` groups get the fade+rise
/// entrance with a per-child delay, driven by the page stylesheet.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let seen = use_in_view(node.clone(), VIEW_THRESHOLD);
    // The flag is write-once, so the phase never goes back to hidden.
    let phase = RevealPhase::default().advance(seen);

    html! {
        <section
            id={props.section.anchor()}
            ref={node}
            class={classes!("page-section", phase.class(), props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    pub blurb: String,
}

/// Centered heading block shared by the three showcase grids.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header stagger">
            <h2>{ props.title.clone() }</h2>
            <div class="header-rule"></div>
            <p>{ props.blurb.clone() }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_sections_with_unique_anchors() {
        assert_eq!(Section::ALL.len(), 5);
        let anchors: Vec<_> = Section::ALL.iter().filter_map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["features", "technical", "ui", "contact"]);
    }

    #[test]
    fn nav_hrefs_match_anchors() {
        for section in Section::ALL {
            match section.anchor() {
                Some(anchor) => assert_eq!(section.nav_href(), format!("#{anchor}")),
                None => assert_eq!(section.nav_href(), "/"),
            }
        }
    }

    #[test]
    fn reveal_starts_hidden() {
        assert_eq!(RevealPhase::default(), RevealPhase::Hidden);
        assert_eq!(RevealPhase::default().class(), None);
    }

    #[test]
    fn reveal_fires_once_and_never_reverses() {
        let phase = RevealPhase::Hidden;
        assert_eq!(phase.advance(false), RevealPhase::Hidden);

        let fired = phase.advance(true);
        assert_eq!(fired, RevealPhase::Visible);
        assert_eq!(fired.class(), Some("is-visible"));

        // Once visible, the flag going stale cannot undo the transition.
        assert_eq!(fired.advance(false), RevealPhase::Visible);
        assert_eq!(fired.advance(true), RevealPhase::Visible);
    }
}
