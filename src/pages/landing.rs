//! The landing page: section composition, deep-link scrolling, and the page
//! stylesheet.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::section::Section;
use crate::components::technical::Technical;
use crate::components::ui_showcase::UiShowcase;
use crate::hooks::use_theme::use_theme;

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_theme();

    // Scroll to the top on initial mount, unless the URL deep-links to a
    // section, in which case jump there once the content has mounted.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                let hash = window.location().hash().unwrap_or_default();
                let target = Section::ALL
                    .iter()
                    .find_map(|s| s.anchor().filter(|a| hash == format!("#{a}")));
                match target {
                    Some(anchor) => {
                        let timeout = Timeout::new(100, move || {
                            if let Some(element) = web_sys::window()
                                .and_then(|w| w.document())
                                .and_then(|doc| doc.get_element_by_id(anchor))
                            {
                                element.scroll_into_view_with_bool(true);
                            }
                        });
                        timeout.forget();
                    }
                    None => window.scroll_to_with_x_and_y(0.0, 0.0),
                }
            }
            || ()
        },
        (),
    );

    let styles = r#"
        .landing-page {
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            background: #f9fafb;
            color: #111827;
            font-family: system-ui, -apple-system, sans-serif;
            overflow-x: hidden;
            box-sizing: border-box;
        }
        .landing-page.dark {
            background: linear-gradient(to bottom, #030712, #111827);
            color: #f3f4f6;
        }
        .landing-page *, .landing-page *::before, .landing-page *::after {
            box-sizing: inherit;
        }
        .section-inner {
            max-width: 1120px;
            margin: 0 auto;
            width: 100%;
        }

        /* Navigation */
        .top-nav {
            position: sticky;
            top: 0;
            z-index: 50;
            background: rgba(255, 255, 255, 0.9);
            backdrop-filter: blur(12px);
            border-bottom: 1px solid #e5e7eb;
            box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        }
        .dark .top-nav {
            background: rgba(17, 24, 39, 0.8);
            border-bottom-color: #1f2937;
        }
        .nav-inner {
            max-width: 1120px;
            margin: 0 auto;
            padding: 1rem;
        }
        .nav-row {
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .brand {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            text-decoration: none;
        }
        .brand-mark {
            width: 2.5rem;
            height: 2.5rem;
            border-radius: 10px;
            background: linear-gradient(to right, #3b82f6, #9333ea);
            color: white;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.1rem;
        }
        .brand-mark.small {
            width: 2rem;
            height: 2rem;
            font-size: 0.9rem;
        }
        .brand-name {
            font-size: 1.25rem;
            font-weight: 700;
            background: linear-gradient(to right, #3b82f6, #9333ea);
            -webkit-background-clip: text;
            background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .nav-links {
            display: none;
        }
        .nav-mobile-controls {
            display: flex;
            align-items: center;
            gap: 1rem;
        }
        @media (min-width: 768px) {
            .nav-links {
                display: flex;
                align-items: center;
                gap: 2rem;
            }
            .nav-mobile-controls {
                display: none;
            }
        }
        .nav-link {
            font-weight: 500;
            color: #374151;
            text-decoration: none;
            padding: 0.25rem 0;
            border-bottom: 2px solid transparent;
            transition: all 0.3s ease;
        }
        .nav-link:hover {
            color: #3b82f6;
            border-bottom-color: #3b82f6;
        }
        .dark .nav-link {
            color: #d1d5db;
        }
        .dark .nav-link:hover {
            color: #60a5fa;
            border-bottom-color: #60a5fa;
        }
        .download-button {
            padding: 0.5rem 1.5rem;
            border: none;
            border-radius: 9999px;
            background: linear-gradient(to right, #3b82f6, #9333ea);
            color: white;
            font-weight: 500;
            font-size: 1rem;
            cursor: pointer;
            transition: all 0.3s ease;
        }
        .download-button:hover {
            box-shadow: 0 10px 20px rgba(59, 130, 246, 0.2);
            transform: translateY(-1px);
        }
        .download-button.large {
            padding: 0.75rem 2rem;
            font-size: 1.1rem;
        }
        .download-button.wide {
            width: 100%;
            padding: 0.75rem 1.5rem;
        }
        .icon-button {
            padding: 0.5rem;
            width: 2.5rem;
            height: 2.5rem;
            border: none;
            border-radius: 9999px;
            background: transparent;
            color: inherit;
            font-size: 1rem;
            cursor: pointer;
            transition: background 0.3s ease;
        }
        .icon-button:hover {
            background: #e5e7eb;
        }
        .dark .icon-button:hover {
            background: #374151;
        }
        .mobile-menu {
            display: flex;
            flex-direction: column;
            gap: 1rem;
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid #e5e7eb;
        }
        .dark .mobile-menu {
            border-top-color: #1f2937;
        }
        .mobile-nav-link {
            font-weight: 500;
            color: #374151;
            text-decoration: none;
            padding: 0.5rem 0 0.5rem 0.5rem;
            border-left: 4px solid transparent;
            transition: all 0.3s ease;
        }
        .mobile-nav-link:hover {
            color: #3b82f6;
            border-left-color: #3b82f6;
        }
        .dark .mobile-nav-link {
            color: #d1d5db;
        }
        .dark .mobile-nav-link:hover {
            color: #60a5fa;
            border-left-color: #60a5fa;
        }

        /* Sections and the reveal transition */
        .page-section {
            padding: 5rem 1rem;
        }
        .page-section.band {
            background: #ffffff;
        }
        .dark .page-section.band {
            background: rgba(31, 41, 55, 0.5);
            backdrop-filter: blur(4px);
        }
        .stagger > * {
            opacity: 0;
            transform: translateY(30px);
            transition: opacity 0.8s ease, transform 0.8s ease;
        }
        .page-section.is-visible .stagger > * {
            opacity: 1;
            transform: translateY(0);
        }
        .page-section.is-visible .stagger > *:nth-child(2) { transition-delay: 0.2s; }
        .page-section.is-visible .stagger > *:nth-child(3) { transition-delay: 0.4s; }
        .page-section.is-visible .stagger > *:nth-child(4) { transition-delay: 0.6s; }
        .page-section.is-visible .stagger > *:nth-child(5) { transition-delay: 0.8s; }
        .page-section.is-visible .stagger > *:nth-child(6) { transition-delay: 1.0s; }
        @media (prefers-reduced-motion: reduce) {
            .stagger > * {
                transition: none;
                transform: none;
            }
        }
        .section-header {
            text-align: center;
            margin-bottom: 4rem;
        }
        .section-header h2 {
            font-size: 2.25rem;
            font-weight: 700;
            margin: 0 0 1rem;
        }
        .header-rule {
            width: 6rem;
            height: 4px;
            margin: 0 auto 1.5rem;
            background: linear-gradient(to right, #3b82f6, #9333ea);
        }
        .section-header p {
            font-size: 1.1rem;
            color: #4b5563;
            max-width: 48rem;
            margin: 0 auto;
        }
        .dark .section-header p {
            color: #d1d5db;
        }

        /* Hero */
        .hero {
            flex: 1;
            padding-top: 5rem;
            padding-bottom: 4rem;
        }
        .hero-layout {
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 3rem;
        }
        @media (min-width: 1024px) {
            .hero-layout {
                flex-direction: row;
            }
            .hero-copy, .hero-art {
                width: 50%;
            }
        }
        .hero-copy h1 {
            font-size: clamp(2.5rem, 5vw, 3.75rem);
            font-weight: 700;
            line-height: 1.15;
            margin: 0 0 1.5rem;
        }
        .gradient-text {
            background: linear-gradient(to right, #3b82f6, #9333ea);
            -webkit-background-clip: text;
            background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero-copy p {
            font-size: 1.2rem;
            color: #4b5563;
            margin: 0 0 2rem;
        }
        .dark .hero-copy p {
            color: #d1d5db;
        }
        .hero-actions {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
        }
        .ghost-button {
            display: inline-flex;
            align-items: center;
            padding: 0.75rem 2rem;
            border: 2px solid #d1d5db;
            border-radius: 9999px;
            color: inherit;
            font-weight: 500;
            font-size: 1.1rem;
            text-decoration: none;
            transition: all 0.3s ease;
        }
        .ghost-button:hover {
            border-color: #3b82f6;
            color: #3b82f6;
        }
        .dark .ghost-button {
            border-color: #374151;
        }
        .dark .ghost-button:hover {
            border-color: #60a5fa;
            color: #60a5fa;
        }
        .hero-art {
            position: relative;
        }
        .hero-art img {
            position: relative;
            width: 100%;
            height: auto;
            object-fit: cover;
            border-radius: 16px;
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
            transition: box-shadow 0.5s ease;
        }
        .hero-art img:hover {
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        }
        .hero-glow {
            position: absolute;
            inset: -1rem;
            background: linear-gradient(to right, rgba(59, 130, 246, 0.2), rgba(147, 51, 234, 0.2));
            border-radius: 16px;
            filter: blur(32px);
            animation: glow-pulse 3s ease-in-out infinite;
        }
        @keyframes glow-pulse {
            0%, 100% { opacity: 1; }
            50% { opacity: 0.5; }
        }

        /* Cards */
        .card-grid {
            display: grid;
            grid-template-columns: 1fr;
            gap: 2rem;
        }
        @media (min-width: 768px) {
            .card-grid {
                grid-template-columns: repeat(2, 1fr);
            }
        }
        @media (min-width: 1024px) {
            .card-grid {
                grid-template-columns: repeat(3, 1fr);
            }
        }
        .card {
            background: #ffffff;
            border: 1px solid #f3f4f6;
            border-radius: 16px;
            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
            overflow: hidden;
        }
        .dark .card {
            background: rgba(31, 41, 55, 0.8);
            border-color: #374151;
        }
        /* transform on staggered children belongs to the reveal transition */
        .card:hover {
            box-shadow: 0 16px 32px rgba(0, 0, 0, 0.14);
            border-color: #dbeafe;
        }
        .dark .card:hover {
            border-color: #4b5563;
        }
        .card h3 {
            font-size: 1.25rem;
            font-weight: 700;
            margin: 0 0 0.5rem;
        }
        .card p {
            color: #4b5563;
            margin: 0;
            line-height: 1.6;
        }
        .dark .card p {
            color: #d1d5db;
        }
        .card-glyph {
            width: 3rem;
            height: 3rem;
            border-radius: 9999px;
            background: linear-gradient(to right, rgba(59, 130, 246, 0.1), rgba(147, 51, 234, 0.1));
            color: #3b82f6;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.25rem;
            margin-bottom: 1rem;
        }
        .dark .card-glyph {
            background: linear-gradient(to right, rgba(59, 130, 246, 0.2), rgba(147, 51, 234, 0.2));
        }
        .card-glyph.round {
            width: 4rem;
            height: 4rem;
            font-size: 1.5rem;
        }
        .card-media {
            position: relative;
            height: 12rem;
            overflow: hidden;
        }
        .card-media img {
            width: 100%;
            height: 100%;
            object-fit: cover;
            transition: transform 0.5s ease;
        }
        .card-media:hover img {
            transform: scale(1.05);
        }
        .card-media-shade {
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
            opacity: 0;
            transition: opacity 0.3s ease;
            z-index: 1;
        }
        .card-media:hover .card-media-shade {
            opacity: 1;
        }
        .card-body {
            padding: 1.5rem;
        }
        .tech-card {
            padding: 1.5rem;
            border-left: 4px solid #3b82f6;
        }
        .ui-card {
            padding: 1.5rem;
            display: flex;
            flex-direction: column;
            align-items: center;
            text-align: center;
        }

        /* Contact */
        .contact-panel {
            background: #ffffff;
            border: 1px solid #f3f4f6;
            border-radius: 24px;
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
            padding: 3rem 2rem;
        }
        .dark .contact-panel {
            background: rgba(31, 41, 55, 0.8);
            border-color: #374151;
            backdrop-filter: blur(4px);
        }
        .contact-panel .section-header {
            margin-bottom: 2.5rem;
        }
        .contact-author {
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 2rem;
            text-align: center;
        }
        @media (min-width: 768px) {
            .contact-author {
                flex-direction: row;
                text-align: left;
            }
        }
        .contact-avatar {
            width: 6rem;
            height: 6rem;
            border-radius: 9999px;
            background: linear-gradient(to right, #3b82f6, #9333ea);
            color: white;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 2rem;
            flex-shrink: 0;
        }
        .contact-details h3 {
            font-size: 1.5rem;
            font-weight: 700;
            margin: 0 0 0.5rem;
        }
        .contact-links {
            display: flex;
            flex-direction: column;
            gap: 1rem;
            justify-content: center;
        }
        @media (min-width: 768px) {
            .contact-links {
                flex-direction: row;
                justify-content: flex-start;
            }
        }
        .contact-links a {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            color: #4b5563;
            text-decoration: none;
            transition: color 0.3s ease;
        }
        .contact-links a:hover {
            color: #3b82f6;
        }
        .dark .contact-links a {
            color: #d1d5db;
        }
        .dark .contact-links a:hover {
            color: #60a5fa;
        }

        /* Footer */
        .page-footer {
            padding: 2.5rem 1rem;
            background: #f3f4f6;
            border-top: 1px solid #e5e7eb;
        }
        .dark .page-footer {
            background: rgba(3, 7, 18, 0.9);
            border-top-color: #111827;
        }
        .footer-row {
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 1rem;
        }
        @media (min-width: 768px) {
            .footer-row {
                flex-direction: row;
                justify-content: space-between;
            }
            .footer-note {
                text-align: right;
            }
        }
        .footer-row .brand-name {
            font-size: 1.1rem;
        }
        .footer-note {
            color: #6b7280;
            text-align: center;
        }
        .dark .footer-note {
            color: #9ca3af;
        }
        .footer-note p {
            margin: 0.25rem 0;
        }
    "#;

    html! {
        <div class={classes!("landing-page", theme.class())}>
            <link
                rel="stylesheet"
                href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css"
                integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A=="
                crossorigin="anonymous"
                referrerpolicy="no-referrer"
            />
            <Nav />
            <Hero />
            <Features />
            <Technical />
            <UiShowcase />
            <Contact />
            <Footer />
            <style>{styles}</style>
        </div>
    }
}
