use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use log::warn;

/// One-shot visibility state of a revealed section. Transitions
/// `Hidden -> Visible` at most once per mounted instance and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl Default for RevealState {
    fn default() -> Self {
        RevealState::Hidden
    }
}

impl RevealState {
    /// Feeds one intersection observation into the trigger. Returns true
    /// only on the single `Hidden -> Visible` transition; leaving the
    /// viewport afterwards does not revert it.
    pub fn observe(&mut self, entered: bool) -> bool {
        match (*self, entered) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Visible)
    }
}

/// Per-child entrance delays: child `n` animates at
/// `base_delay_ms + child_delay_ms * n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerConfig {
    pub base_delay_ms: u32,
    pub child_delay_ms: u32,
}

impl StaggerConfig {
    pub const fn new(base_delay_ms: u32, child_delay_ms: u32) -> Self {
        Self { base_delay_ms, child_delay_ms }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        self.base_delay_ms + self.child_delay_ms.saturating_mul(index as u32)
    }
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self::new(0, 100)
    }
}

/// Animation timing contract a theme hands to every revealed section.
/// Offset, duration and easing are applied uniformly as CSS custom
/// properties; the theme stylesheet consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSettings {
    /// Root margin for the intersection observation, CSS margin syntax.
    pub margin: &'static str,
    pub duration_ms: u32,
    pub offset_px: i32,
    pub easing: &'static str,
    pub stagger: StaggerConfig,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            margin: "-50px",
            duration_ms: 600,
            offset_px: 40,
            easing: "ease-out",
            stagger: StaggerConfig::default(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub children: Children,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub settings: RevealSettings,
}

/// Wraps a content section and defers its entrance animation until the
/// section scrolls into view. Descendants carrying the `reveal-item`
/// class cascade in with staggered transition delays.
#[function_component(ScrollRevealSection)]
pub fn scroll_reveal_section(props: &ScrollRevealProps) -> Html {
    let node_ref = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let state = state.clone();
        let node_ref = node_ref.clone();
        let settings = props.settings;
        use_effect_with_deps(
            move |_| {
                let watch = match node_ref.cast::<Element>() {
                    Some(element) => match watch_intersection(&element, &settings, state.clone()) {
                        Ok(watch) => Some(watch),
                        Err(_) => {
                            // Fail open: content must never stay hidden.
                            warn!("viewport observation unavailable, revealing immediately");
                            state.set(RevealState::Visible);
                            None
                        }
                    },
                    None => {
                        state.set(RevealState::Visible);
                        None
                    }
                };
                move || drop(watch)
            },
            (),
        );
    }

    let style = format!(
        "--reveal-offset: {}px; --reveal-duration: {}ms; --reveal-ease: {};",
        props.settings.offset_px, props.settings.duration_ms, props.settings.easing
    );

    html! {
        <section
            ref={node_ref}
            id={props.id.clone()}
            class={classes!("reveal-section", state.is_visible().then_some("revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </section>
    }
}

// Owns the observation; dropping it on unmount deregisters the callback.
struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn watch_intersection(
    element: &Element,
    settings: &RevealSettings,
    state: UseStateHandle<RevealState>,
) -> Result<IntersectionWatch, JsValue> {
    let target = element.clone();
    let stagger = settings.stagger;
    let mut trigger = RevealState::default();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entered = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if trigger.observe(entered) {
                apply_stagger(&target, &stagger);
                state.set(RevealState::Visible);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(settings.margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(IntersectionWatch { observer, _callback: callback })
}

fn apply_stagger(root: &Element, stagger: &StaggerConfig) {
    if let Ok(items) = root.query_selector_all(".reveal-item") {
        for index in 0..items.length() {
            if let Some(node) = items.item(index) {
                if let Ok(item) = node.dyn_into::<HtmlElement>() {
                    let delay = stagger.delay_for(index as usize);
                    let _ = item
                        .style()
                        .set_property("transition-delay", &format!("{delay}ms"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let state = RevealState::default();
        assert_eq!(state, RevealState::Hidden);
        assert!(!state.is_visible());
    }

    #[test]
    fn first_entry_fires_the_transition() {
        let mut state = RevealState::default();
        assert!(state.observe(true));
        assert!(state.is_visible());
    }

    #[test]
    fn observations_outside_the_viewport_do_nothing() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn leaving_the_viewport_never_reverts() {
        let mut state = RevealState::default();
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(state.is_visible());
        // Re-entering is not a second transition either.
        assert!(!state.observe(true));
        assert!(state.is_visible());
    }

    #[test]
    fn stagger_delays_scale_with_child_index() {
        let stagger = StaggerConfig::new(200, 150);
        assert_eq!(stagger.delay_for(0), 200);
        assert_eq!(stagger.delay_for(1), 350);
        assert_eq!(stagger.delay_for(4), 800);
    }

    #[test]
    fn default_stagger_starts_immediately() {
        let stagger = StaggerConfig::default();
        assert_eq!(stagger.delay_for(0), 0);
    }
}
