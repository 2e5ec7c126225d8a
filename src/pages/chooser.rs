use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::ScrollRevealSection;
use crate::config;
use crate::content::PRODUCTS;
use crate::Route;

#[function_component(Chooser)]
pub fn chooser() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="chooser-page">
            <style>
                {r#"
                .chooser-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                    font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
                }
                .chooser-hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(to bottom, rgba(227, 25, 55, 0.1), #000 40%);
                    text-align: center;
                }
                .chooser-hero-inner { max-width: 56rem; margin: 0 auto; padding: 5rem 1rem 0; }
                .chooser-kicker {
                    color: #E31937;
                    font-weight: 700;
                    letter-spacing: 0.5em;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }
                .chooser-hero h1 {
                    font-size: clamp(3.5rem, 10vw, 8rem);
                    font-weight: 900;
                    letter-spacing: -0.02em;
                    line-height: 1;
                    margin: 0 0 1.5rem;
                }
                .chooser-hero h1 span { color: #E31937; }
                .chooser-tagline { font-size: 1.4rem; color: #9ca3af; font-weight: 300; margin-bottom: 1rem; }
                .chooser-sub { color: #6b7280; max-width: 36rem; margin: 0 auto 4rem; }
                .scroll-line {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    width: 1px;
                    height: 4rem;
                    background: linear-gradient(to bottom, #E31937, transparent);
                }
                .theme-grid-section { padding: 8rem 1rem; }
                .theme-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                .theme-card {
                    display: block;
                    text-decoration: none;
                    border: 2px solid #1f2937;
                    background: #0a0a0a;
                    overflow: hidden;
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .theme-card:hover { border-color: #E31937; transform: translateY(-4px); }
                .theme-card.light { background: #fff; border-color: #e5e7eb; }
                .theme-card.light:hover { border-color: #000; }
                .theme-card-preview {
                    aspect-ratio: 4 / 5;
                    position: relative;
                    overflow: hidden;
                    background-size: cover;
                    background-position: center;
                }
                .theme-card-preview.cyberpunk { filter: brightness(0.4) saturate(1.5); }
                .theme-card-preview.editorial { filter: brightness(0.9) grayscale(100%); }
                .theme-card-preview.brutalist { filter: brightness(0.6) contrast(1.3); }
                .theme-card-body { padding: 1.5rem; position: relative; }
                .theme-card-body h2 {
                    font-size: 1.8rem;
                    font-weight: 900;
                    margin: 0 0 0.5rem;
                    color: #fff;
                }
                .theme-card.light .theme-card-body h2 { color: #000; }
                .theme-card-body p { color: #9ca3af; font-size: 0.9rem; margin: 0; }
                .theme-card.light .theme-card-body p { color: #4b5563; }
                .theme-card-cta {
                    margin-top: 1rem;
                    color: #E31937;
                    font-weight: 700;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .theme-card.light .theme-card-cta { color: #000; }
                .quick-info {
                    padding: 6rem 1rem;
                    background: #fff;
                    color: #000;
                    text-align: center;
                }
                .quick-info h2 { font-size: 2.8rem; font-weight: 900; margin: 0 0 1rem; }
                .quick-info > p { font-size: 1.25rem; margin-bottom: 2rem; }
                .quick-info-grid {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    text-align: left;
                }
                .quick-info-card { padding: 1.5rem; border: 2px solid #000; }
                .quick-info-card h3 { font-weight: 900; font-size: 1.1rem; margin: 0 0 0.5rem; }
                .quick-info-card p { font-size: 0.9rem; margin: 0; }
                .chooser-footer {
                    padding: 3rem 1rem;
                    background: #000;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                }
                .chooser-footer p { color: #6b7280; font-size: 0.85rem; margin: 0; }
                .reveal-section .reveal-item {
                    opacity: 0;
                    transform: translateY(var(--reveal-offset, 40px));
                    transition: opacity var(--reveal-duration, 600ms) var(--reveal-ease, ease-out),
                                transform var(--reveal-duration, 600ms) var(--reveal-ease, ease-out);
                }
                .reveal-section.revealed .reveal-item {
                    opacity: 1;
                    transform: translateY(0);
                }
                "#}
            </style>

            <section class="chooser-hero">
                <div class="chooser-hero-inner">
                    <p class="chooser-kicker">
                        {config::PARENT_COMPANY}{" • "}{config::HQ_CITY}
                    </p>
                    <h1>
                        {"CHOOSE YOUR"}<br />
                        <span>{"DESIGN"}</span>
                    </h1>
                    <p class="chooser-tagline">{config::TAGLINE}</p>
                    <p class="chooser-sub">
                        {"Select a design aesthetic below to preview the HOOGA dealer landing \
                          page in different visual styles."}
                    </p>
                </div>
                <div class="scroll-line"></div>
            </section>

            <ScrollRevealSection class="theme-grid-section">
                <div class="theme-grid">
                    <Link<Route> to={Route::Cyberpunk} classes="theme-card reveal-item">
                        <div
                            class="theme-card-preview cyberpunk"
                            style={format!("background-image: url({});", config::HERO_IMAGE)}
                        ></div>
                        <div class="theme-card-body">
                            <h2>{"CYBERPUNK"}</h2>
                            <p>{"Neon red on black, glitch effects, sci-fi HUD aesthetic"}</p>
                            <div class="theme-card-cta">{"Explore →"}</div>
                        </div>
                    </Link<Route>>
                    <Link<Route> to={Route::Editorial} classes="theme-card light reveal-item">
                        <div
                            class="theme-card-preview editorial"
                            style={format!("background-image: url({});", config::HERO_IMAGE)}
                        ></div>
                        <div class="theme-card-body">
                            <h2>{"EDITORIAL"}</h2>
                            <p>{"Clean magazine layout, big typography, generous whitespace"}</p>
                            <div class="theme-card-cta">{"Explore →"}</div>
                        </div>
                    </Link<Route>>
                    <Link<Route> to={Route::Brutalist} classes="theme-card reveal-item">
                        <div
                            class="theme-card-preview brutalist"
                            style={format!("background-image: url({});", config::HERO_IMAGE)}
                        ></div>
                        <div class="theme-card-body">
                            <h2>{"BRUTALIST"}</h2>
                            <p>{"Raw, bold, unconventional, heavy contrast"}</p>
                            <div class="theme-card-cta">{"Explore →"}</div>
                        </div>
                    </Link<Route>>
                </div>
            </ScrollRevealSection>

            <ScrollRevealSection class="quick-info">
                <h2 class="reveal-item">{config::BRAND}{" "}{config::BRAND_SUFFIX}</h2>
                <p class="reveal-item">{"The future of electric motorcycles"}</p>
                <div class="quick-info-grid">
                    {
                        PRODUCTS.iter().map(|product| {
                            let summary = format!(
                                "{} • {} • {} range • {}",
                                product.specs[2].value,
                                product.specs[0].value,
                                product.specs[1].value,
                                product.specs[3].value,
                            );
                            html! {
                                <div class="quick-info-card reveal-item" key={product.model_code}>
                                    <h3>{product.name}</h3>
                                    <p>{summary}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <div class="quick-info-card reveal-item">
                        <h3>{"CONTACT"}</h3>
                        <p>
                            {config::CONTACT_PHONE}<br />
                            {config::SITE_DOMAIN}<br />
                            {config::HQ_CITY}
                        </p>
                    </div>
                </div>
            </ScrollRevealSection>

            <footer class="chooser-footer">
                <p>{config::COPYRIGHT}</p>
            </footer>
        </main>
    }
}
