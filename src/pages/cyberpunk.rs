use yew::prelude::*;

use crate::components::inquiry_form::InquiryForm;
use crate::components::reveal::ScrollRevealSection;
use crate::config;
use crate::content::{BENEFITS, BODY_STYLES, FEATURES, PRODUCTS, RIDING_MODES, VARIANTS};
use crate::theme::{Theme, CYBERPUNK};

// HUD register: SHOUTING_SNAKE_CASE rendering of the shared catalog copy.
fn hud(text: &str) -> String {
    text.to_uppercase().replace(", ", "_").replace(' ', "_")
}

fn glitch_text(text: &str) -> Html {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            let mut style = format!("animation-delay: {}ms;", index * 20);
            if index % 2 == 0 {
                style.push_str(" text-shadow: 2px 0 #E31937, -2px 0 #00ffff;");
            }
            let glyph = if ch == ' ' { '\u{a0}'.to_string() } else { ch.to_string() };
            html! { <span class="glitch-char" style={style} key={index}>{glyph}</span> }
        })
        .collect::<Html>()
}

#[function_component(CyberpunkPage)]
pub fn cyberpunk_page() -> Html {
    let theme: &'static Theme = &CYBERPUNK;

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
        <main class="cyberpunk-page" style={theme.css_vars()}>
            <style>
                {r#"
                .cyberpunk-page {
                    min-height: 100vh;
                    background: var(--bg);
                    color: var(--ink);
                    font-family: var(--font-body);
                }
                .cyberpunk-page section { padding: 6rem 1rem; }
                .cyberpunk-page .section-inner { max-width: 72rem; margin: 0 auto; }
                .cyb-tag {
                    display: inline-block;
                    padding: 0.25rem 1rem;
                    border: 1px solid var(--accent);
                    color: var(--accent);
                    font-size: 0.75rem;
                    margin-bottom: 1rem;
                }
                .cyb-header { text-align: center; margin-bottom: 4rem; }
                .cyb-header h2 { font-size: clamp(2.2rem, 6vw, 3.2rem); font-weight: 700; margin: 0 0 1rem; }
                .cyb-header h2 .accent { color: var(--accent); }
                .cyb-header .sub { color: var(--muted); font-size: 1.1rem; max-width: 42rem; margin: 0 auto; }
                .cyb-hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                    text-align: center;
                }
                .cyb-hero video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: brightness(0.3) saturate(1.5);
                }
                .cyb-scanlines {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: repeating-linear-gradient(0deg, rgba(0, 0, 0, 0.1) 0px,
                        rgba(0, 0, 0, 0.1) 1px, transparent 1px, transparent 2px);
                }
                .cyb-grid-overlay {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    background-image: linear-gradient(rgba(227, 25, 55, 0.5) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(227, 25, 55, 0.5) 1px, transparent 1px);
                    background-size: 40px 40px;
                }
                .cyb-corner { position: absolute; width: 5rem; height: 5rem; border-color: var(--accent); border-style: solid; border-width: 0; }
                .cyb-corner.tl { top: 2.5rem; left: 2.5rem; border-left-width: 2px; border-top-width: 2px; }
                .cyb-corner.tr { top: 2.5rem; right: 2.5rem; border-right-width: 2px; border-top-width: 2px; }
                .cyb-corner.bl { bottom: 2.5rem; left: 2.5rem; border-left-width: 2px; border-bottom-width: 2px; }
                .cyb-corner.br { bottom: 2.5rem; right: 2.5rem; border-right-width: 2px; border-bottom-width: 2px; }
                .cyb-hero-content { position: relative; z-index: 10; max-width: 64rem; margin: 0 auto; padding: 0 1rem; }
                .cyb-hero h1 {
                    font-size: clamp(3rem, 9vw, 6rem);
                    font-weight: 900;
                    letter-spacing: -0.02em;
                    margin: 0 0 1.5rem;
                    line-height: 1.05;
                }
                .cyb-hero h1 .neon {
                    color: var(--accent);
                    text-shadow: 0 0 10px #E31937, 0 0 20px #E31937, 0 0 40px #E31937;
                }
                .glitch-char { display: inline-block; opacity: 0; animation: cyb-char-in 0.3s forwards; }
                @keyframes cyb-char-in { to { opacity: 1; } }
                .cyb-hero .prompt { color: var(--accent); font-size: 1.4rem; margin-bottom: 2rem; }
                .cyb-cta-row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                .cyb-cta-row a { padding: 1rem 2rem; font-weight: 700; font-size: 1.1rem; text-decoration: none; transition: background 0.2s ease, color 0.2s ease; }
                .cyb-cta-primary { background: var(--accent); color: #000; box-shadow: 0 0 20px rgba(227, 25, 55, 0.5); }
                .cyb-cta-primary:hover { background: #ff3366; }
                .cyb-cta-secondary { border: 1px solid var(--accent); color: var(--accent); }
                .cyb-cta-secondary:hover { background: var(--accent); color: #000; }
                .cyb-stats-hud {
                    position: absolute;
                    left: 1rem;
                    top: 50%;
                    transform: translateY(-50%);
                    font-size: 0.75rem;
                    color: var(--accent);
                    text-align: left;
                }
                .cyb-stats-hud .entry { border-left: 2px solid var(--accent); padding-left: 0.5rem; margin-bottom: 1rem; }
                .cyb-stats-hud .entry .key { opacity: 0.5; margin: 0; }
                .cyb-stats-hud .entry .val { margin: 0; }
                @media (max-width: 1024px) { .cyb-stats-hud { display: none; } }
                .cyb-scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: var(--accent);
                    font-size: 0.75rem;
                    animation: cyb-bob 1s ease-in-out infinite;
                }
                @keyframes cyb-bob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }
                .cyb-lineup { background: var(--bg); }
                .cyb-product-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 2rem; }
                .cyb-product { position: relative; padding: 2rem; background: var(--surface); border: 1px solid rgba(227, 25, 55, 0.3); }
                .cyb-product.flagship {
                    border-color: var(--accent);
                    box-shadow: 0 0 30px rgba(227, 25, 55, 0.2) inset;
                }
                .cyb-flag {
                    position: absolute;
                    top: -0.75rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: var(--accent);
                    color: #000;
                    padding: 0.25rem 1rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .cyb-product-image {
                    width: 100%;
                    height: 12rem;
                    margin-bottom: 1.5rem;
                    border: 1px solid #333;
                    background-size: cover;
                    background-position: center;
                }
                .cyb-product.flagship .cyb-product-image { border-color: var(--accent); }
                .cyb-product h3 { font-size: 1.9rem; font-weight: 700; margin: 0 0 0.25rem; }
                .cyb-product .tagline { color: var(--accent); font-size: 0.85rem; margin-bottom: 1.5rem; }
                .cyb-spec-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-bottom: 1.5rem; }
                .cyb-spec { border-left: 2px solid var(--accent); padding-left: 0.75rem; }
                .cyb-spec .label { color: var(--accent); font-size: 0.7rem; opacity: 0.7; margin: 0; }
                .cyb-spec .value { font-weight: 700; margin: 0; }
                .cyb-color-row { display: flex; gap: 0.5rem; flex-wrap: wrap; }
                .cyb-color-row span { padding: 0.25rem 0.75rem; border: 1px solid rgba(227, 25, 55, 0.5); color: var(--accent); font-size: 0.75rem; }
                .cyb-modes { margin-top: 1.5rem; padding-top: 1.5rem; border-top: 1px solid rgba(227, 25, 55, 0.3); }
                .cyb-modes .label { color: var(--muted); font-size: 0.75rem; margin-bottom: 0.5rem; }
                .cyb-mode-row { display: flex; gap: 0.75rem; }
                .cyb-mode-row span { padding: 0.5rem 1rem; font-size: 0.85rem; font-weight: 700; }
                .cyb-mode-row span.hot { background: var(--accent); color: #000; }
                .cyb-mode-row span.mid { border: 1px solid var(--accent); color: var(--accent); }
                .cyb-mode-row span.eco { border: 1px solid #374151; color: #6b7280; }
                .cyb-variants { background: #050505; }
                .cyb-variant-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; margin-bottom: 3rem; }
                .cyb-variant { padding: 1.5rem; background: var(--surface); border: 1px solid rgba(227, 25, 55, 0.3); transition: border-color 0.2s ease; }
                .cyb-variant:hover { border-color: var(--accent); }
                .cyb-wheel {
                    width: 100%;
                    height: 8rem;
                    margin-bottom: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to bottom right, rgba(227, 25, 55, 0.1), transparent);
                    border: 1px solid rgba(227, 25, 55, 0.3);
                    color: var(--accent);
                    font-size: 1.3rem;
                }
                .cyb-variant h3 { font-size: 1.5rem; font-weight: 700; margin: 0 0 0.5rem; }
                .cyb-variant .desc { color: var(--accent); font-size: 0.85rem; margin-bottom: 1rem; }
                .cyb-variant ul { list-style: none; margin: 0; padding: 0; }
                .cyb-variant li { display: flex; align-items: center; gap: 0.5rem; color: var(--muted); font-size: 0.75rem; margin-bottom: 0.5rem; }
                .cyb-variant li::before { content: ''; width: 0.5rem; height: 0.5rem; background: var(--accent); flex-shrink: 0; }
                .cyb-hud-line {
                    height: 1px;
                    background: linear-gradient(to right, transparent, var(--accent), transparent);
                    opacity: 0.5;
                    margin: 3rem 0;
                }
                .cyb-bodies { text-align: center; }
                .cyb-bodies h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 2rem; }
                .cyb-body-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; max-width: 48rem; margin: 0 auto; }
                .cyb-body { padding: 1.5rem; background: var(--surface); border: 1px solid rgba(227, 25, 55, 0.3); text-align: left; }
                .cyb-body h4 { color: var(--accent); font-size: 1.25rem; font-weight: 700; margin: 0 0 0.5rem; }
                .cyb-body p { color: var(--muted); font-size: 0.85rem; margin: 0; }
                .cyb-feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; }
                .cyb-feature { padding: 1rem; background: var(--surface); border: 1px solid rgba(227, 25, 55, 0.2); transition: border-color 0.2s ease; }
                .cyb-feature:hover { border-color: var(--accent); }
                .cyb-feature .index { color: var(--accent); margin-bottom: 0.75rem; }
                .cyb-feature h3 { font-size: 0.9rem; font-weight: 700; margin: 0 0 0.25rem; }
                .cyb-feature p { color: #6b7280; font-size: 0.75rem; margin: 0; }
                .cyb-partner { background: #050505; }
                .cyb-benefit-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
                .cyb-benefit { padding: 1.5rem; background: var(--surface); border: 1px solid rgba(227, 25, 55, 0.3); text-align: center; }
                .cyb-benefit .stat { font-size: 2.4rem; font-weight: 900; color: var(--accent); margin-bottom: 0.5rem; }
                .cyb-benefit .label { color: #6b7280; font-size: 0.75rem; margin-bottom: 1rem; }
                .cyb-benefit h3 { font-size: 0.9rem; font-weight: 700; margin: 0 0 0.5rem; }
                .cyb-benefit p { color: #6b7280; font-size: 0.75rem; margin: 0; }
                .cyb-territory { margin-top: 4rem; text-align: center; padding: 2rem; border: 1px solid rgba(227, 25, 55, 0.5); }
                .cyb-territory h3 { font-size: 1.25rem; font-weight: 700; margin: 0 0 1rem; }
                .cyb-territory p { color: var(--muted); margin-bottom: 1.5rem; }
                .cyb-territory a {
                    display: inline-block;
                    padding: 1rem 2rem;
                    background: var(--accent);
                    color: #000;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 0 20px rgba(227, 25, 55, 0.5);
                }
                .cyb-territory a:hover { background: #ff3366; }
                .cyb-dealer .section-inner { max-width: 48rem; }
                .cyberpunk-page .inquiry-form {
                    padding: 2rem;
                    background: var(--surface);
                    border: 1px solid rgba(227, 25, 55, 0.3);
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .cyberpunk-page .field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                .cyberpunk-page .field label {
                    display: block;
                    color: var(--accent);
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    margin-bottom: 0.5rem;
                }
                .cyberpunk-page .field input,
                .cyberpunk-page .field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: #000;
                    border: 1px solid rgba(227, 25, 55, 0.3);
                    color: #fff;
                    font-family: var(--font-body);
                    outline: none;
                    resize: none;
                }
                .cyberpunk-page .field input:focus,
                .cyberpunk-page .field textarea:focus { border-color: var(--accent); }
                .cyberpunk-page .submit-button {
                    width: 100%;
                    padding: 1rem;
                    background: var(--accent);
                    color: #000;
                    border: none;
                    font-family: var(--font-body);
                    font-weight: 700;
                    font-size: 1.1rem;
                    cursor: pointer;
                    box-shadow: 0 0 30px rgba(227, 25, 55, 0.3);
                    transition: background 0.2s ease;
                }
                .cyberpunk-page .submit-button:hover { background: #ff3366; }
                .cyberpunk-page .fine-print { text-align: center; color: #4b5563; font-size: 0.75rem; margin: 0; }
                .cyberpunk-page .form-error { padding: 0.75rem 1rem; border: 1px solid var(--accent); color: var(--accent); font-size: 0.85rem; }
                .cyberpunk-page .inquiry-confirmation { text-align: center; padding: 3rem; border: 1px solid var(--accent); }
                .cyberpunk-page .confirmation-glyph { font-size: 3.5rem; color: var(--accent); margin-bottom: 1rem; }
                .cyberpunk-page .inquiry-confirmation h3 { font-size: 1.5rem; font-weight: 700; margin: 0 0 1rem; }
                .cyberpunk-page .inquiry-confirmation p { color: var(--muted); margin: 0; }
                .cyb-footer { padding: 4rem 1rem; background: var(--bg); border-top: 1px solid rgba(227, 25, 55, 0.3); }
                .cyb-footer-grid { max-width: 72rem; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 3rem; }
                .cyb-footer h3 { font-size: 1.25rem; font-weight: 700; margin: 0 0 1rem; }
                .cyb-footer h3 .accent { color: var(--accent); }
                .cyb-footer h4 { color: var(--accent); font-size: 0.85rem; font-weight: 700; margin: 0 0 1rem; }
                .cyb-footer p, .cyb-footer li { color: #6b7280; font-size: 0.75rem; }
                .cyb-footer ul { list-style: none; margin: 0; padding: 0; }
                .cyb-footer li { margin-bottom: 0.5rem; }
                .cyb-footer a { color: #6b7280; text-decoration: none; transition: color 0.2s ease; }
                .cyb-footer a:hover { color: var(--accent); }
                .cyb-footer .legal {
                    max-width: 72rem;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(227, 25, 55, 0.2);
                    text-align: center;
                    color: #4b5563;
                    font-size: 0.75rem;
                }
                .cyberpunk-page .reveal-section .reveal-item {
                    opacity: 0;
                    transform: translateY(var(--reveal-offset, 60px));
                    transition: opacity var(--reveal-duration, 600ms) var(--reveal-ease, ease-out),
                                transform var(--reveal-duration, 600ms) var(--reveal-ease, ease-out);
                }
                .cyberpunk-page .reveal-section.revealed .reveal-item {
                    opacity: 1;
                    transform: translateY(0);
                }
                @media (max-width: 768px) { .cyberpunk-page .field-row { grid-template-columns: 1fr; } }
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
        <ScrollRevealSection class="cyb-hero" settings={theme.reveal}>
            <video autoplay=true muted=true loop=true playsinline=true>
                <source src={config::HERO_VIDEO} type="video/mp4" />
            </video>
            <div class="cyb-scanlines"></div>
            <div class="cyb-grid-overlay"></div>
            <div class="cyb-corner tl"></div>
            <div class="cyb-corner tr"></div>
            <div class="cyb-corner bl"></div>
            <div class="cyb-corner br"></div>
            <div class="cyb-hero-content">
                <div class="reveal-item">
                    <span class="cyb-tag">{"SYSTEM ONLINE"}</span>
                </div>
                <h1 class="reveal-item">
                    {config::BRAND}
                    <br />
                    <span class="neon">{ glitch_text(config::BRAND_SUFFIX) }</span>
                </h1>
                <p class="prompt reveal-item">{"> "}{config::TAGLINE.to_uppercase()}</p>
                <div class="cyb-cta-row reveal-item">
                    <a href="#dealer-form" class="cyb-cta-primary">{"[ CLAIM_TERRITORY ]"}</a>
                    <a href="#products" class="cyb-cta-secondary">{"> ACCESS LINEUP"}</a>
                </div>
            </div>
            <div class="cyb-stats-hud reveal-item">
                <div class="entry">
                    <p class="key">{"SYS_STATUS"}</p>
                    <p class="val">{"ONLINE"}</p>
                </div>
                <div class="entry">
                    <p class="key">{"RENDER_MODE"}</p>
                    <p class="val">{"CYBERPUNK"}</p>
                </div>
                <div class="entry">
                    <p class="key">{"THEME"}</p>
                    <p class="val">{"NEON_RED"}</p>
                </div>
            </div>
            <div class="cyb-scroll-hint reveal-item">{"▼ SCROLL_NEXT"}</div>
        </ScrollRevealSection>
    }
}

fn lineup(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection id="products" class="cyb-lineup" settings={theme.reveal}>
            <div class="section-inner">
                <div class="cyb-header reveal-item">
                    <div class="cyb-tag">{"// SYSTEM_OUTPUT: LINEUP"}</div>
                    <h2>{"OUR "}<span class="accent">{"LINEUP"}</span></h2>
                    <p class="sub">{"> The 8850 for raw power. The 7270 for all-day range."}</p>
                </div>
                <div class="cyb-product-grid">
                    {
                        PRODUCTS.iter().map(|product| html! {
                            <div
                                class={classes!("cyb-product", product.featured.then_some("flagship"), "reveal-item")}
                                key={product.model_code}
                            >
                                {
                                    if product.featured {
                                        html! { <div class="cyb-flag">{"[FLAGSHIP]"}</div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div
                                    class="cyb-product-image"
                                    style={format!("background-image: url({});", product.image)}
                                ></div>
                                <h3>{product.name}</h3>
                                <p class="tagline">{">> "}{ hud(product.tagline) }</p>
                                <div class="cyb-spec-grid">
                                    {
                                        product.specs.iter().map(|spec| html! {
                                            <div class="cyb-spec" key={spec.label}>
                                                <p class="label">{ hud(spec.label) }</p>
                                                <p class="value">{spec.value}</p>
                                            </div>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <div class="cyb-color-row">
                                    {
                                        product.colors.iter().map(|color| html! {
                                            <span key={*color}>{ hud(color) }</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <div class="cyb-modes">
                                    <p class="label">{"// RIDING_MODES"}</p>
                                    <div class="cyb-mode-row">
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
        <ScrollRevealSection class="cyb-variants" settings={theme.reveal}>
            <div class="section-inner">
                <div class="cyb-header reveal-item">
                    <div class="cyb-tag">{"// CONFIG_SELECT"}</div>
                    <h2>{"CHOOSE "}<span class="accent">{"VARIANT"}</span></h2>
                </div>
                <div class="cyb-variant-grid">
                    {
                        VARIANTS.iter().map(|variant| html! {
                            <div class="cyb-variant reveal-item" key={variant.name}>
                                <div class="cyb-wheel">{variant.wheel}</div>
                                <h3>{ hud(variant.name) }</h3>
                                <p class="desc">{"> "}{variant.description}</p>
                                <ul>
                                    {
                                        variant.highlights.iter().map(|highlight| html! {
                                            <li key={*highlight}>{ hud(highlight) }</li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="cyb-hud-line"></div>
                <div class="cyb-bodies reveal-item">
                    <h3>{"// BODY_STYLES"}</h3>
                    <div class="cyb-body-grid">
                        {
                            BODY_STYLES.iter().map(|style| html! {
                                <div class="cyb-body" key={style.name}>
                                    <h4>{ hud(style.name) }</h4>
                                    <p>{"> "}{style.description}</p>
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
        <ScrollRevealSection class="cyb-features" settings={theme.reveal}>
            <div class="section-inner">
                <div class="cyb-header reveal-item">
                    <div class="cyb-tag">{"// SPECIFICATIONS"}</div>
                    <h2>{"BUILT_TO "}<span class="accent">{"SELL"}</span></h2>
                </div>
                <div class="cyb-feature-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div class="cyb-feature reveal-item" key={feature.title}>
                                <div class="index">{format!("[{:02}]", index + 1)}</div>
                                <h3>{ hud(feature.title) }</h3>
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
        <ScrollRevealSection class="cyb-partner" settings={theme.reveal}>
            <div class="section-inner">
                <div class="cyb-header reveal-item">
                    <div class="cyb-tag">{"// PARTNERSHIP_PROTOCOL"}</div>
                    <h2>{"WHY "}<span class="accent">{"PARTNER"}</span></h2>
                </div>
                <div class="cyb-benefit-grid">
                    {
                        BENEFITS.iter().map(|benefit| html! {
                            <div class="cyb-benefit reveal-item" key={benefit.title}>
                                <div class="stat">{benefit.stat}</div>
                                <div class="label">{ hud(benefit.label) }</div>
                                <h3>{ hud(benefit.title) }</h3>
                                <p>{benefit.blurb}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="cyb-territory reveal-item">
                    <h3>{"// 2026_TERRITORIES_FILLING"}</h3>
                    <p>{"> Limited dealers per region. Once your area is claimed, it is closed."}</p>
                    <a href="#dealer-form">{"[ RESERVE_TERRITORY ]"}</a>
                </div>
            </div>
        </ScrollRevealSection>
    }
}

fn dealer(theme: &'static Theme) -> Html {
    html! {
        <ScrollRevealSection id="dealer-form" class="cyb-dealer" settings={theme.reveal}>
            <div class="section-inner">
                <div class="cyb-header reveal-item">
                    <div class="cyb-tag">{"// DEALER_WAITLIST"}</div>
                    <h2>{"LOCK_IN "}<span class="accent">{"REGION"}</span></h2>
                    <p class="sub">
                        {"> Submit details to reserve dealer rights. Response within 2-3 business days."}
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
        <footer class="cyb-footer">
            <div class="cyb-footer-grid">
                <div>
                    <h3>{config::BRAND}{" "}<span class="accent">{config::BRAND_SUFFIX}</span></h3>
                    <p>
                        { hud(config::PARENT_COMPANY) }
                        <br />
                        { hud(config::HQ_ADDRESS) }
                    </p>
                </div>
                <div>
                    <h4>{"// CONTACTS"}</h4>
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
                    <h4>{"// NAV_LINKS"}</h4>
                    <ul>
                        <li><a href="#products">{"> PRODUCTS"}</a></li>
                        <li><a href="#dealer-form">{"> DEALER_ACCESS"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="legal">{"© 2026 HOOGA E-POWERSPORTS // ALL_RIGHTS_RESERVED"}</div>
        </footer>
    }
}
