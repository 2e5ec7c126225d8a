use yew::prelude::*;

use crate::components::inquiry_form::InquiryForm;
use crate::components::reveal::ScrollRevealSection;
use crate::config;
use crate::content::{BENEFITS, BODY_STYLES, FEATURES, PRODUCTS, RIDING_MODES, VARIANTS};
use crate::theme::{Theme, EDITORIAL};

#[function_component(EditorialPage)]
pub fn editorial_page() -> Html {
    let theme: &'static Theme = &EDITORIAL;

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
        <main class="editorial-page" style={theme.css_vars()}>
            <style>
                {r#"
                .editorial-page {
                    min-height: 100vh;
                    background: var(--bg);
                    color: var(--ink);
                    font-family: var(--font-body);
                }
                .editorial-page section { padding: 8rem 1.5rem; }
                .editorial-page .section-inner { max-width: 72rem; margin: 0 auto; }
                .ed-header { text-align: center; margin-bottom: 5rem; }
                .ed-kicker {
                    font-size: 0.75rem;
                    font-weight: 500;
                    letter-spacing: 0.3em;
                    color: var(--muted);
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .ed-header h2 {
                    font-family: var(--font-display);
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    margin: 0 0 1.5rem;
                }
                .ed-header h2 .accent { color: var(--accent); }
                .ed-header .sub { font-size: 1.25rem; color: #4b5563; font-weight: 300; max-width: 36rem; margin: 0 auto; }
                .ed-hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    text-align: center;
                    background: #000;
                    color: #fff;
                }
                .ed-hero video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(100%) brightness(0.7);
                }
                .ed-hero::before { content: ''; position: absolute; inset: 0; background: rgba(0, 0, 0, 0.5); }
                .ed-hero-content { position: relative; z-index: 10; max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; }
                .ed-hero .kicker {
                    font-size: 0.75rem;
                    font-weight: 500;
                    letter-spacing: 0.4em;
                    color: rgba(255, 255, 255, 0.8);
                    text-transform: uppercase;
                    margin-bottom: 2rem;
                }
                .ed-hero h1 {
                    font-family: var(--font-display);
                    font-size: clamp(4.5rem, 12vw, 10rem);
                    font-weight: 700;
                    line-height: 1;
                    margin: 0 0 2rem;
                    letter-spacing: -0.02em;
                }
                .ed-hero .subtitle {
                    font-family: var(--font-display);
                    font-size: clamp(2.2rem, 6vw, 4.5rem);
                    font-weight: 300;
                    line-height: 1;
                    margin: 0 0 2rem;
                }
                .ed-hero .tagline { font-size: 1.25rem; color: rgba(255, 255, 255, 0.7); font-weight: 300; font-style: italic; margin-bottom: 3rem; }
                .ed-cta-row { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; }
                .ed-cta-row a {
                    padding: 1.25rem 2.5rem;
                    font-weight: 700;
                    font-size: 1.1rem;
                    letter-spacing: 0.02em;
                    text-decoration: none;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .ed-cta-primary { background: #fff; color: #000; }
                .ed-cta-primary:hover { background: #e5e7eb; }
                .ed-cta-secondary { border: 1px solid #fff; color: #fff; }
                .ed-cta-secondary:hover { background: #fff; color: #000; }
                .ed-scroll-line {
                    position: absolute;
                    bottom: 3rem;
                    left: 50%;
                    width: 1px;
                    height: 4rem;
                    background: rgba(255, 255, 255, 0.3);
                }
                .ed-lineup { background: var(--bg); }
                .ed-product-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 4rem; }
                .ed-product.flagship { border-left: 4px solid var(--accent); padding-left: 2rem; }
                .ed-flag {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    color: var(--accent);
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .ed-product-image {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    margin-bottom: 2rem;
                    background-color: var(--surface);
                    background-size: cover;
                    background-position: center;
                }
                .ed-product h3 { font-family: var(--font-display); font-size: 3rem; font-weight: 700; margin: 0 0 0.5rem; }
                .ed-product .tagline { font-size: 1.25rem; color: var(--muted); font-weight: 300; margin-bottom: 2rem; }
                .ed-spec-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-bottom: 2rem; }
                .ed-spec .label {
                    font-size: 0.7rem;
                    font-weight: 500;
                    color: #9ca3af;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin: 0 0 0.25rem;
                }
                .ed-spec .value { font-size: 1.1rem; font-weight: 600; margin: 0; }
                .ed-color-row { display: flex; gap: 0.75rem; flex-wrap: wrap; margin-bottom: 2rem; }
                .ed-color-row span { padding: 0.5rem 1rem; background: var(--surface); color: #4b5563; font-size: 0.85rem; font-weight: 500; }
                .ed-modes { padding-top: 2rem; border-top: 1px solid #e5e7eb; }
                .ed-modes .label {
                    font-size: 0.7rem;
                    font-weight: 500;
                    color: #9ca3af;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }
                .ed-mode-row { display: flex; gap: 1rem; }
                .ed-mode-row span { padding: 0.75rem 1.5rem; font-size: 0.85rem; font-weight: 700; letter-spacing: 0.1em; }
                .ed-mode-row span.hot { background: var(--accent); color: #fff; }
                .ed-mode-row span.mid { background: var(--surface); color: #000; }
                .ed-mode-row span.eco { border: 1px solid #d1d5db; color: var(--muted); }
                .ed-variants { background: var(--surface); }
                .ed-variant-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; margin-bottom: 4rem; }
                .ed-variant { padding: 2.5rem; background: #fff; }
                .ed-wheel {
                    width: 100%;
                    height: 10rem;
                    margin-bottom: 2rem;
                    background: var(--surface);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.9rem;
                    font-weight: 300;
                    color: #9ca3af;
                }
                .ed-variant h3 { font-size: 1.9rem; font-weight: 700; margin: 0 0 0.75rem; }
                .ed-variant .desc { color: var(--muted); font-weight: 300; line-height: 1.6; margin-bottom: 1.5rem; }
                .ed-variant ul { list-style: none; margin: 0; padding: 0; }
                .ed-variant li { display: flex; align-items: center; gap: 0.75rem; color: #4b5563; margin-bottom: 0.75rem; }
                .ed-variant li::before { content: ''; width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--accent); flex-shrink: 0; }
                .ed-bodies { text-align: center; padding-top: 4rem; border-top: 1px solid #e5e7eb; }
                .ed-bodies h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 2rem; }
                .ed-body-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; max-width: 48rem; margin: 0 auto; }
                .ed-body { padding: 2rem; background: #fff; }
                .ed-body h4 { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.5rem; }
                .ed-body p { color: var(--muted); font-weight: 300; margin: 0; }
                .ed-features { background: var(--bg); }
                .ed-feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 2rem; }
                .ed-feature { padding: 2rem; background: var(--surface); }
                .ed-feature .index {
                    width: 3rem;
                    height: 3rem;
                    border: 2px solid var(--accent);
                    margin-bottom: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--accent);
                    font-weight: 700;
                }
                .ed-feature h3 { font-size: 1.1rem; font-weight: 700; margin: 0 0 0.5rem; }
                .ed-feature p { color: var(--muted); font-weight: 300; font-size: 0.9rem; line-height: 1.6; margin: 0; }
                .ed-partner { background: var(--surface); }
                .ed-benefit-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; }
                .ed-benefit { padding: 2rem; background: #fff; text-align: center; }
                .ed-benefit .stat { font-size: 2.8rem; font-weight: 700; color: var(--accent); margin-bottom: 0.5rem; }
                .ed-benefit .label {
                    font-size: 0.7rem;
                    font-weight: 500;
                    color: #9ca3af;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }
                .ed-benefit h3 { font-size: 1.1rem; font-weight: 700; margin: 0 0 0.5rem; }
                .ed-benefit p { color: var(--muted); font-weight: 300; font-size: 0.9rem; margin: 0; }
                .ed-ready { margin-top: 5rem; text-align: center; padding: 4rem; background: #fff; }
                .ed-ready h3 { font-size: 1.9rem; font-weight: 700; margin: 0 0 1rem; }
                .ed-ready p { color: var(--muted); font-weight: 300; max-width: 28rem; margin: 0 auto 2rem; }
                .ed-ready a {
                    display: inline-block;
                    padding: 1.25rem 2.5rem;
                    background: var(--accent);
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.1rem;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .ed-ready a:hover { background: #c41530; }
                .ed-dealer { background: var(--bg); }
                .ed-dealer .section-inner { max-width: 42rem; }
                .editorial-page .inquiry-form {
                    padding: 2.5rem;
                    background: var(--surface);
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .editorial-page .field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                .editorial-page .field label {
                    display: block;
                    font-size: 0.7rem;
                    font-weight: 500;
                    color: var(--muted);
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 0.75rem;
                }
                .editorial-page .field input,
                .editorial-page .field textarea {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    color: #000;
                    font-size: 1.1rem;
                    font-family: var(--font-body);
                    outline: none;
                    resize: none;
                }
                .editorial-page .field input:focus,
                .editorial-page .field textarea:focus { border-color: var(--accent); }
                .editorial-page .submit-button {
                    width: 100%;
                    padding: 1.25rem;
                    background: var(--accent);
                    color: #fff;
                    border: none;
                    font-family: var(--font-body);
                    font-weight: 700;
                    font-size: 1.1rem;
                    letter-spacing: 0.02em;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .editorial-page .submit-button:hover { background: #c41530; }
                .editorial-page .fine-print { text-align: center; color: #9ca3af; font-size: 0.85rem; font-weight: 300; margin: 0; }
                .editorial-page .form-error { padding: 1rem 1.5rem; background: #fff; border-left: 4px solid var(--accent); color: var(--accent); }
                .editorial-page .inquiry-confirmation { text-align: center; padding: 4rem; background: var(--surface); }
                .editorial-page .confirmation-glyph { font-size: 3.5rem; color: var(--accent); margin-bottom: 1.5rem; }
                .editorial-page .inquiry-confirmation h3 { font-size: 1.9rem; font-weight: 700; margin: 0 0 1rem; }
                .editorial-page .inquiry-confirmation p { color: var(--muted); font-weight: 300; margin: 0; }
                .ed-footer { padding: 5rem 1.5rem; background: #000; color: #fff; }
                .ed-footer-grid { max-width: 72rem; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 4rem; }
                .ed-footer h3 { font-size: 1.5rem; font-weight: 700; margin: 0 0 1rem; }
                .ed-footer h3 .accent { color: var(--accent); }
                .ed-footer h4 {
                    font-size: 0.85rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                    margin: 0 0 1rem;
                }
                .ed-footer p { color: #9ca3af; font-weight: 300; }
                .ed-footer ul { list-style: none; margin: 0; padding: 0; }
                .ed-footer li { margin-bottom: 0.75rem; }
                .ed-footer a { color: #d1d5db; font-weight: 300; text-decoration: none; transition: color 0.2s ease; }
                .ed-footer a:hover { color: var(--accent); }
                .ed-footer .legal {
                    max-width: 72rem;
                    margin: 3rem auto 0;
                    padding-top: 3rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                    color: #6b7280;
                    font-weight: 300;
                    font-size: 0.85rem;
                }
                .editorial-page .reveal-section .reveal-item {
                    opacity: 0;
                    transform: translateY(var(--reveal-offset, 40px));
                    transition: opacity var(--reveal-duration, 600ms) var(--reveal-ease, ease-out),
                                transform var(--reveal-duration, 600ms) var(--reveal-ease, ease-out);
                }
                .editorial-page .reveal-section.revealed .reveal-item {
                    opacity: 1;
                    transform: translateY(0);
                }
                @media (max-width: 768px) {
                    .editorial-page .field-row { grid-template-columns: 1fr; }
                    .ed-spec-grid { grid-template-columns: 1fr 1fr; }
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
        <ScrollRevealSection class="ed-hero" settings={theme.reveal}>
            <video autoplay=true muted=true loop=true playsinline=true>
                <source src={config::HERO_VIDEO} type="video/mp4" />
            </video>
            <div class="ed-hero-content">
                <p class="kicker reveal-item">
                    {"By "}{config::PARENT_COMPANY}{" — "}{config::HQ_CITY}
                </p>
                <h1 class="reveal-item">{config::BRAND}</h1>
                <p class="subtitle reveal-item">{"E-Powersports"}</p>
                <p class="tagline reveal-item">{config::TAGLINE}</p>
                <div class="ed-cta-row reveal-item">
                    <a href="#dealer-form" class="ed-cta-primary">{"Become a Dealer"}</a>
                    <a href="#products" class="ed-cta-secondary">{"View Lineup"}</a>
                </div>
            </div>
            <div class="ed-scroll-line reveal-item"></div>
        </ScrollRevealSection>
    }
}

fn lineup(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection id="products" class="ed-lineup" settings={theme.reveal}>
            <div class="section-inner">
                <div class="ed-header reveal-item">
                    <p class="ed-kicker">{"Introducing"}</p>
                    <h2>{"Our "}<span class="accent">{"Lineup"}</span></h2>
                    <p class="sub">
                        {"Two exceptional models engineered for different riding styles. \
                          Both delivering uncompromising performance."}
                    </p>
                </div>
                <div class="ed-product-grid">
                    {
                        PRODUCTS.iter().map(|product| html! {
                            <div
                                class={classes!("ed-product", product.featured.then_some("flagship"), "reveal-item")}
                                key={product.model_code}
                            >
                                {
                                    if product.featured {
                                        html! { <p class="ed-flag">{"Flagship Model"}</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div
                                    class="ed-product-image"
                                    style={format!("background-image: url({});", product.image)}
                                ></div>
                                <h3>{product.name}</h3>
                                <p class="tagline">{product.tagline}</p>
                                <div class="ed-spec-grid">
                                    {
                                        product.specs.iter().map(|spec| html! {
                                            <div class="ed-spec" key={spec.label}>
                                                <p class="label">{spec.label}</p>
                                                <p class="value">{spec.value}</p>
                                            </div>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <div class="ed-color-row">
                                    {
                                        product.colors.iter().map(|color| html! {
                                            <span key={*color}>{color}</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <div class="ed-modes">
                                    <p class="label">{"Riding Modes"}</p>
                                    <div class="ed-mode-row">
                                        {
                                            RIDING_MODES.iter().map(|mode| {
                                                let tone = match *mode {
                                                    "BEAST" => "hot",
                                                    "SPORTS" => "mid",
                                                    _ => "eco",
                                                };
                                                html! { <span class={tone} key={*mode}>{mode}</span> }
                                            }).collect::<Html>()
                                        }
                                    </div>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </ScrollRevealSection>
    }
}

fn variants(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection class="ed-variants" settings={theme.reveal}>
            <div class="section-inner">
                <div class="ed-header reveal-item">
                    <p class="ed-kicker">{"Configuration"}</p>
                    <h2>{"Choose Your "}<span class="accent">{"Variant"}</span></h2>
                    <p class="sub">{"Three distinct variants. Two body styles. Infinite possibilities."}</p>
                </div>
                <div class="ed-variant-grid">
                    {
                        VARIANTS.iter().map(|variant| html! {
                            <div class="ed-variant reveal-item" key={variant.name}>
                                <div class="ed-wheel">{variant.wheel}</div>
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
                <div class="ed-bodies reveal-item">
                    <h3>{"Body Styles"}</h3>
                    <div class="ed-body-grid">
                        {
                            BODY_STYLES.iter().map(|style| html! {
                                <div class="ed-body" key={style.name}>
                                    <h4>{style.name}</h4>
                                    <p>{style.description}</p>
                                </div>
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
        <ScrollRevealSection class="ed-features" settings={theme.reveal}>
            <div class="section-inner">
                <div class="ed-header reveal-item">
                    <p class="ed-kicker">{"Engineering"}</p>
                    <h2>{"Key "}<span class="accent">{"Features"}</span></h2>
                    <p class="sub">
                        {"Engineering excellence in every component. Built to perform, designed to last."}
                    </p>
                </div>
                <div class="ed-feature-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div class="ed-feature reveal-item" key={feature.title}>
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
        <ScrollRevealSection class="ed-partner" settings={theme.reveal}>
            <div class="section-inner">
                <div class="ed-header reveal-item">
                    <p class="ed-kicker">{"Partnership"}</p>
                    <h2>{"Why Partner "}<span class="accent">{"With HOOGA"}</span></h2>
                    <p class="sub">
                        {"Join the electric revolution. Partner with a brand defining the future \
                          of powersports."}
                    </p>
                </div>
                <div class="ed-benefit-grid">
                    {
                        BENEFITS.iter().map(|benefit| html! {
                            <div class="ed-benefit reveal-item" key={benefit.title}>
                                <div class="stat">{benefit.stat}</div>
                                <div class="label">{benefit.label}</div>
                                <h3>{benefit.title}</h3>
                                <p>{benefit.blurb}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="ed-ready reveal-item">
                    <h3>{"Ready to Join?"}</h3>
                    <p>{"Limited dealer spots available for 2026. Secure your territory today."}</p>
                    <a href="#dealer-form">{"Apply Now"}</a>
                </div>
            </div>
        </ScrollRevealSection>
    }
}

fn dealer(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection id="dealer-form" class="ed-dealer" settings={theme.reveal}>
            <div class="section-inner">
                <div class="ed-header reveal-item">
                    <p class="ed-kicker">{"Application"}</p>
                    <h2>{"Dealer "}<span class="accent">{"Waitlist"}</span></h2>
                    <p class="sub">
                        {"Join the waitlist to become an authorized HOOGA dealer. We'll be in \
                          touch with next steps."}
                    </p>
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
        <footer class="ed-footer">
            <div class="ed-footer-grid">
                <div>
                    <h3>{config::BRAND}{" "}<span class="accent">{config::BRAND_SUFFIX}</span></h3>
                    <p>
                        {"By "}{config::PARENT_COMPANY}<br />
                        {config::HQ_ADDRESS}
                    </p>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
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
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        <li><a href="#products">{"Products"}</a></li>
                        <li><a href="#dealer-form">{"Become a Dealer"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="legal">{config::COPYRIGHT}</div>
        </footer>
    }
}
