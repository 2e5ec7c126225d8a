use yew::prelude::*;

use crate::components::inquiry_form::InquiryForm;
use crate::components::reveal::ScrollRevealSection;
use crate::config;
use crate::content::{BENEFITS, BODY_STYLES, FEATURES, PRODUCTS, RIDING_MODES, VARIANTS};
use crate::theme::{Theme, BRUTALIST};

#[function_component(BrutalistPage)]
pub fn brutalist_page() -> Html {
    let theme: &'static Theme = &BRUTALIST;

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
        <main class="brutalist-page" style={theme.css_vars()}>
            <style>
                {r#"
                .brutalist-page {
                    min-height: 100vh;
                    background: var(--bg);
                    color: #fff;
                    font-family: var(--font-body);
                    text-transform: uppercase;
                }
                .brutalist-page section { padding: 6rem 1.5rem; }
                .brutalist-page .section-inner { max-width: 80rem; margin: 0 auto; }
                .brutalist-page .heading-bar { width: 6rem; height: 0.5rem; background: var(--accent); }
                .brutalist-page h2 {
                    font-family: var(--font-display);
                    font-size: clamp(4rem, 12vw, 9rem);
                    font-weight: 900;
                    letter-spacing: -0.04em;
                    line-height: 0.9;
                    margin: 1rem 0 0;
                }
                .bru-hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    position: relative;
                    overflow: hidden;
                }
                .bru-hero video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: contrast(1.2) brightness(0.8) sepia(20%) saturate(0.8);
                }
                .bru-hero::before {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                }
                .bru-hero::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: repeating-linear-gradient(45deg, transparent, transparent 10px,
                        rgba(227, 25, 55, 0.05) 10px, rgba(227, 25, 55, 0.05) 20px);
                }
                .bru-hero-content { position: relative; z-index: 10; max-width: 72rem; margin: 0 auto; width: 100%; }
                .bru-kicker {
                    border-left: 8px solid var(--accent);
                    padding: 0.5rem 0 0.5rem 1.5rem;
                    margin-bottom: 2rem;
                    color: var(--accent);
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    font-size: 0.85rem;
                }
                .bru-hero h1 {
                    font-family: var(--font-display);
                    font-size: clamp(5rem, 12vw, 10rem);
                    font-weight: 900;
                    line-height: 0.85;
                    letter-spacing: -0.04em;
                    margin: 0;
                }
                .bru-hero .brand-suffix {
                    font-family: var(--font-display);
                    color: var(--accent);
                    font-size: clamp(2rem, 6vw, 3.2rem);
                    font-weight: 900;
                    letter-spacing: -0.04em;
                    line-height: 1;
                    margin: 0;
                }
                .bru-tagline { font-size: clamp(1.5rem, 4vw, 2.4rem); font-weight: 700; margin-top: 2rem; max-width: 42rem; }
                .bru-cta-row { display: flex; flex-wrap: wrap; margin-top: 3rem; }
                .bru-cta-row a {
                    padding: 1.5rem 2.5rem;
                    font-weight: 900;
                    font-size: 1.2rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .bru-cta-primary { background: var(--accent); color: #000; border: 4px solid var(--accent); }
                .bru-cta-primary:hover { background: #fff; }
                .bru-cta-secondary { background: #000; color: #fff; border: 4px solid #fff; }
                .bru-cta-secondary:hover { background: var(--accent); color: #000; }
                .bru-down {
                    position: absolute;
                    bottom: 2rem;
                    right: 2rem;
                    color: var(--accent);
                    font-size: 5rem;
                    font-weight: 900;
                    opacity: 0.3;
                }
                .bru-lineup { background: var(--surface); color: var(--ink); }
                .bru-product-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); border-top: 8px solid #000; margin-top: 4rem; }
                .bru-product { padding: 3rem 2rem; border-bottom: 8px solid #000; }
                .bru-product.flagship { background: var(--accent); }
                .bru-product.alternate { background: #000; color: #fff; }
                .bru-flag { display: inline-block; background: #fff; color: #000; padding: 0.5rem 1rem; font-weight: 900; font-size: 0.85rem; margin-bottom: 1.5rem; }
                .bru-product-image {
                    width: 100%;
                    height: 16rem;
                    margin-bottom: 2rem;
                    border: 4px solid currentColor;
                    background-size: cover;
                    background-position: center;
                }
                .bru-product h3 {
                    font-family: var(--font-display);
                    font-size: clamp(3.5rem, 8vw, 6rem);
                    font-weight: 900;
                    letter-spacing: -0.04em;
                    margin: 0 0 0.5rem;
                }
                .bru-product .tagline { font-weight: 700; font-size: 1.1rem; opacity: 0.8; margin-bottom: 2rem; }
                .bru-spec-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-bottom: 2rem; font-weight: 900; }
                .bru-spec { border-left: 4px solid currentColor; padding-left: 1rem; }
                .bru-spec .label { font-size: 0.7rem; opacity: 0.7; margin: 0; }
                .bru-spec .value { font-size: 1.3rem; margin: 0; }
                .bru-color-row { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-bottom: 2rem; }
                .bru-color-row span { padding: 0.5rem 1rem; border: 2px solid currentColor; font-size: 0.85rem; font-weight: 700; }
                .bru-modes { padding-top: 2rem; border-top: 4px solid currentColor; }
                .bru-modes .label { font-weight: 900; font-size: 0.85rem; margin-bottom: 1rem; }
                .bru-mode-row { display: flex; }
                .bru-mode-row span { flex: 1; text-align: center; padding: 1rem 1.5rem; font-weight: 900; font-size: 0.85rem; }
                .bru-mode-row span.hot { background: #fff; color: #000; }
                .bru-mode-row span.mid { background: rgba(255, 255, 255, 0.2); }
                .bru-variants { background: #000; }
                .bru-variant-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); border: 8px solid var(--accent); margin-top: 4rem; }
                .bru-variant { padding: 2rem; background: #000; transition: background 0.2s ease, color 0.2s ease; border-bottom: 8px solid var(--accent); }
                .bru-variant:last-child { border-bottom: none; }
                .bru-variant:hover { background: var(--accent); color: #000; }
                .bru-wheel { width: 100%; height: 8rem; margin-bottom: 1.5rem; background: var(--accent); display: flex; align-items: center; justify-content: center; }
                .bru-wheel span { font-family: var(--font-display); font-size: 3rem; font-weight: 900; color: #000; }
                .bru-variant h3 { font-size: 2.2rem; font-weight: 900; margin: 0 0 1rem; }
                .bru-variant .desc { font-weight: 700; font-size: 0.85rem; margin-bottom: 1.5rem; }
                .bru-variant ul { list-style: none; margin: 0; padding: 0; }
                .bru-variant li { display: flex; align-items: center; gap: 0.75rem; font-weight: 900; font-size: 0.85rem; margin-bottom: 0.75rem; }
                .bru-variant li::before { content: ''; width: 1rem; height: 1rem; background: var(--accent); flex-shrink: 0; }
                .bru-variant:hover li::before { background: #000; }
                .bru-bodies h3 { font-size: 2.2rem; font-weight: 900; color: var(--accent); margin: 4rem 0 2rem; }
                .bru-body-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); border: 8px solid #fff; }
                .bru-body { padding: 2rem; }
                .bru-body.first { background: #fff; color: #000; border-right: 8px solid #000; }
                .bru-body.second { background: var(--accent); color: #000; }
                .bru-body h4 { font-size: 1.8rem; font-weight: 900; margin: 0 0 0.5rem; }
                .bru-body p { font-weight: 700; margin: 0; }
                .bru-features { background: var(--accent); color: #000; }
                .bru-features .heading-bar { background: #000; }
                .bru-feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); border: 8px solid #000; margin-top: 4rem; }
                .bru-feature { padding: 2rem; border: 1px solid #000; transition: background 0.2s ease, color 0.2s ease; }
                .bru-feature:hover { background: #000; color: var(--accent); }
                .bru-feature .index { font-family: var(--font-display); font-size: 2.4rem; font-weight: 900; margin-bottom: 1rem; }
                .bru-feature h3 { font-weight: 900; font-size: 1.2rem; margin: 0 0 0.5rem; }
                .bru-feature p { font-weight: 700; font-size: 0.85rem; margin: 0; }
                .bru-partner { background: #000; }
                .bru-benefit-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); border: 8px solid var(--accent); margin-top: 4rem; }
                .bru-benefit { padding: 2rem; text-align: center; border-right: 4px solid var(--accent); transition: background 0.2s ease, color 0.2s ease; }
                .bru-benefit:hover { background: var(--accent); color: #000; }
                .bru-benefit .stat { font-family: var(--font-display); font-size: 3.5rem; font-weight: 900; margin-bottom: 0.5rem; }
                .bru-benefit .label { font-size: 0.7rem; font-weight: 900; opacity: 0.6; margin-bottom: 1rem; }
                .bru-benefit h3 { font-weight: 900; font-size: 1.1rem; margin: 0 0 0.5rem; }
                .bru-benefit p { font-weight: 700; font-size: 0.85rem; opacity: 0.7; margin: 0; }
                .bru-ready { margin-top: 4rem; padding: 3rem; background: var(--accent); border: 8px solid #fff; color: #000; }
                .bru-ready h3 { font-family: var(--font-display); font-size: clamp(3rem, 8vw, 4.5rem); font-weight: 900; margin: 0 0 1rem; }
                .bru-ready p { font-weight: 700; font-size: 1.2rem; margin-bottom: 2rem; max-width: 36rem; }
                .bru-ready a {
                    display: inline-block;
                    padding: 1.5rem 3rem;
                    background: #000;
                    color: var(--accent);
                    font-weight: 900;
                    font-size: 1.2rem;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }
                .bru-ready a:hover { background: #fff; }
                .bru-dealer { background: var(--surface); color: var(--ink); }
                .bru-dealer .section-inner { max-width: 48rem; }
                .bru-dealer .lead { font-size: 1.2rem; font-weight: 700; margin-top: 1rem; }
                .brutalist-page .inquiry-form { border: 8px solid #000; margin-top: 4rem; }
                .brutalist-page .field-row { display: grid; grid-template-columns: 1fr 1fr; }
                .brutalist-page .field { padding: 1.5rem; border-bottom: 4px solid #000; }
                .brutalist-page .field-row .field:first-child { border-right: 4px solid #000; }
                .brutalist-page .field label {
                    display: block;
                    font-weight: 900;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    margin-bottom: 0.5rem;
                }
                .brutalist-page .field input,
                .brutalist-page .field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: #f3f4f6;
                    border: 2px solid #000;
                    color: #000;
                    font-weight: 700;
                    font-family: var(--font-body);
                    text-transform: none;
                    outline: none;
                    resize: none;
                }
                .brutalist-page .field input:focus,
                .brutalist-page .field textarea:focus { background: var(--accent); }
                .brutalist-page .submit-button {
                    width: 100%;
                    padding: 2rem;
                    background: var(--accent);
                    color: #000;
                    border: none;
                    font-family: var(--font-display);
                    font-weight: 900;
                    font-size: 1.5rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .brutalist-page .submit-button:hover { background: #000; color: var(--accent); }
                .brutalist-page .form-error { padding: 1rem 1.5rem; background: #000; color: var(--accent); font-weight: 900; }
                .brutalist-page .inquiry-confirmation { margin-top: 4rem; padding: 3rem; background: var(--accent); border: 8px solid #000; }
                .brutalist-page .confirmation-glyph { font-size: 5rem; font-weight: 900; margin-bottom: 1.5rem; }
                .brutalist-page .inquiry-confirmation h3 { font-family: var(--font-display); font-size: 3rem; font-weight: 900; margin: 0 0 1rem; }
                .brutalist-page .inquiry-confirmation p { font-weight: 700; font-size: 1.2rem; margin: 0; }
                .bru-footer { padding: 5rem 1.5rem; background: #000; border-top: 8px solid var(--accent); }
                .bru-footer-grid { max-width: 80rem; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 3rem; }
                .bru-footer h3 { font-family: var(--font-display); font-size: 2.2rem; font-weight: 900; margin: 0 0 1rem; }
                .bru-footer h4 { font-weight: 900; font-size: 1.1rem; color: var(--accent); margin: 0 0 1rem; }
                .bru-footer p, .bru-footer li { font-weight: 700; }
                .bru-footer ul { list-style: none; margin: 0; padding: 0; }
                .bru-footer li { margin-bottom: 0.75rem; }
                .bru-footer a { color: #fff; text-decoration: none; }
                .bru-footer a:hover { color: var(--accent); }
                .bru-footer .legal {
                    max-width: 80rem;
                    margin: 3rem auto 0;
                    padding-top: 3rem;
                    border-top: 4px solid #1f2937;
                    text-align: center;
                    font-weight: 900;
                }
                .brutalist-page .reveal-section .reveal-item {
                    opacity: 0;
                    transform: translateY(var(--reveal-offset, 20px));
                    transition: opacity var(--reveal-duration, 400ms) var(--reveal-ease, ease),
                                transform var(--reveal-duration, 400ms) var(--reveal-ease, ease);
                }
                .brutalist-page .reveal-section.revealed .reveal-item {
                    opacity: 1;
                    transform: translateY(0);
                }
                @media (max-width: 768px) {
                    .brutalist-page .field-row { grid-template-columns: 1fr; }
                    .brutalist-page .field-row .field:first-child { border-right: none; }
                }
                "#}
            </style>

            { hero(theme) }
            { lineup(theme) }
            { variants(theme) }
            { features(theme) }
            { partnership(theme) }
            { dealer(theme) }
            { footer() }
        </main>
    }
}

fn hero(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection class="bru-hero" settings={theme.reveal}>
            <video autoplay=true muted=true loop=true playsinline=true>
                <source src={config::HERO_VIDEO} type="video/mp4" />
            </video>
            <div class="bru-hero-content">
                <div class="bru-kicker reveal-item">
                    {config::PARENT_COMPANY}{" — "}{config::HQ_CITY}
                </div>
                <h1 class="reveal-item">{config::BRAND}</h1>
                <p class="brand-suffix reveal-item">{config::BRAND_SUFFIX}</p>
                <p class="bru-tagline reveal-item">{config::TAGLINE}</p>
                <div class="bru-cta-row reveal-item">
                    <a href="#dealer-form" class="bru-cta-primary">{"BECOME A DEALER"}</a>
                    <a href="#products" class="bru-cta-secondary">{"VIEW LINEUP"}</a>
                </div>
            </div>
            <div class="bru-down reveal-item">{"↓"}</div>
        </ScrollRevealSection>
    }
}

fn lineup(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection id="products" class="bru-lineup" settings={theme.reveal}>
            <div class="section-inner">
                <div class="reveal-item">
                    <div class="heading-bar"></div>
                    <h2>{"LINEUP"}</h2>
                    <p class="lead">{"TWO MODELS. ONE MISSION. ZERO COMPROMISES."}</p>
                </div>
                <div class="bru-product-grid">
                    {
                        PRODUCTS.iter().map(|product| {
                            let panel = if product.featured { "flagship" } else { "alternate" };
                            html! {
                                <div class={classes!("bru-product", panel, "reveal-item")} key={product.model_code}>
                                    {
                                        if product.featured {
                                            html! { <div class="bru-flag">{"★ FLAGSHIP"}</div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <div
                                        class="bru-product-image"
                                        style={format!("background-image: url({});", product.image)}
                                    ></div>
                                    <h3>{product.model_code}</h3>
                                    <p class="tagline">{product.tagline}</p>
                                    <div class="bru-spec-grid">
                                        {
                                            product.specs.iter().map(|spec| html! {
                                                <div class="bru-spec" key={spec.label}>
                                                    <p class="label">{spec.label}</p>
                                                    <p class="value">{spec.value}</p>
                                                </div>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                    <div class="bru-color-row">
                                        {
                                            product.colors.iter().map(|color| html! {
                                                <span key={*color}>{color}</span>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                    <div class="bru-modes">
                                        <p class="label">{"RIDING MODES"}</p>
                                        <div class="bru-mode-row">
                                            {
                                                RIDING_MODES.iter().map(|mode| {
                                                    let tone = match *mode {
                                                        "BEAST" => Some("hot"),
                                                        "SPORTS" => Some("mid"),
                                                        _ => None,
                                                    };
                                                    html! { <span class={classes!(tone)} key={*mode}>{mode}</span> }
                                                }).collect::<Html>()
                                            }
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </ScrollRevealSection>
    }
}

fn variants(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection class="bru-variants" settings={theme.reveal}>
            <div class="section-inner">
                <div class="reveal-item">
                    <div class="heading-bar"></div>
                    <h2>{"VARIANTS"}</h2>
                </div>
                <div class="bru-variant-grid">
                    {
                        VARIANTS.iter().map(|variant| html! {
                            <div class="bru-variant reveal-item" key={variant.name}>
                                <div class="bru-wheel"><span>{variant.wheel}</span></div>
                                <h3>{variant.name}</h3>
                                <p class="desc">{variant.description}</p>
                                <ul>
                                    {
                                        variant.highlights.iter().map(|highlight| html! {
                                            <li key={*highlight}>{highlight}</li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="bru-bodies reveal-item">
                    <h3>{"BODY STYLES"}</h3>
                    <div class="bru-body-grid">
                        {
                            BODY_STYLES.iter().enumerate().map(|(index, style)| {
                                let position = if index == 0 { "first" } else { "second" };
                                html! {
                                    <div class={classes!("bru-body", position)} key={style.name}>
                                        <h4>{style.name}</h4>
                                        <p>{style.description}</p>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </ScrollRevealSection>
    }
}

fn features(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection class="bru-features" settings={theme.reveal}>
            <div class="section-inner">
                <div class="reveal-item">
                    <div class="heading-bar"></div>
                    <h2>{"FEATURES"}</h2>
                </div>
                <div class="bru-feature-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div class="bru-feature reveal-item" key={feature.title}>
                                <div class="index">{index + 1}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.blurb}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </ScrollRevealSection>
    }
}

fn partnership(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection class="bru-partner" settings={theme.reveal}>
            <div class="section-inner">
                <div class="reveal-item">
                    <div class="heading-bar"></div>
                    <h2>{"WHY US"}</h2>
                </div>
                <div class="bru-benefit-grid">
                    {
                        BENEFITS.iter().map(|benefit| html! {
                            <div class="bru-benefit reveal-item" key={benefit.title}>
                                <div class="stat">{benefit.stat}</div>
                                <div class="label">{benefit.label}</div>
                                <h3>{benefit.title}</h3>
                                <p>{benefit.blurb}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="bru-ready reveal-item">
                    <h3>{"READY?"}</h3>
                    <p>{"LIMITED DEALER SPOTS FOR 2026. SECURE YOUR TERRITORY TODAY."}</p>
                    <a href="#dealer-form">{"APPLY NOW →"}</a>
                </div>
            </div>
        </ScrollRevealSection>
    }
}

fn dealer(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection id="dealer-form" class="bru-dealer" settings={theme.reveal}>
            <div class="section-inner">
                <div class="reveal-item">
                    <div class="heading-bar"></div>
                    <h2>{"DEALER"}</h2>
                    <p class="lead">{"JOIN THE WAITLIST. GET IN TOUCH."}</p>
                </div>
                <div class="reveal-item">
                    <InquiryForm theme={theme} />
                </div>
            </div>
        </ScrollRevealSection>
    }
}

fn footer() -> Html {
    html! {
        <footer class="bru-footer">
            <div class="bru-footer-grid">
                <div>
                    <h3>{config::BRAND}</h3>
                    <p>
                        {"BY "}{config::PARENT_COMPANY}<br />
                        {config::HQ_ADDRESS}
                    </p>
                </div>
                <div>
                    <h4>{"CONTACT"}</h4>
                    <ul>
                        <li><a href={config::CONTACT_PHONE_HREF}>{config::CONTACT_PHONE}</a></li>
                        <li><a href={config::CONTACT_EMAIL_HREF}>{config::CONTACT_EMAIL}</a></li>
                        <li>
                            <a href={config::SITE_URL} target="_blank" rel="noopener noreferrer">
                                {config::SITE_DOMAIN}
                            </a>
                        </li>
                    </ul>
                </div>
                <div>
                    <h4>{"LINKS"}</h4>
                    <ul>
                        <li><a href="#products">{"→ PRODUCTS"}</a></li>
                        <li><a href="#dealer-form">{"→ BECOME DEALER"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="legal">{config::COPYRIGHT}</div>
        </footer>
    }
}
