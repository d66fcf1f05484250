use gloo::console::warn;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::behavior::{Reveal, RootMargin};
use crate::browser::GeometryWatch;
use crate::error::DomError;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live IntersectionObserver on one element; disconnected on drop.
struct Observation {
    observer: IntersectionObserver,
    target: Element,
    _callback: EntriesCallback,
}

impl Observation {
    fn start(
        target: Element,
        margin: RootMargin,
        on_change: impl Fn(bool) + 'static,
    ) -> Result<Self, DomError> {
        let callback: EntriesCallback = Closure::new(move |entries: Array, _: IntersectionObserver| {
            if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                on_change(entry.is_intersecting());
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&margin.to_string());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| DomError::Observer(format!("{e:?}")))?;
        observer.observe(&target);

        Ok(Self {
            observer,
            target,
            _callback: callback,
        })
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

/// Whichever mechanism is currently tracking the element.
enum Watch {
    Observer { _observation: Observation },
    Geometry { _geometry: GeometryWatch },
}

fn start_watch(
    target: Element,
    margin: RootMargin,
    visible: UseStateHandle<bool>,
) -> Option<Watch> {
    let setter = visible.clone();
    match Observation::start(target.clone(), margin, move |v| setter.set(v)) {
        Ok(observation) => Some(Watch::Observer {
            _observation: observation,
        }),
        Err(e) => {
            warn!(format!("visibility: {e}; falling back to scroll/resize measuring"));
            match GeometryWatch::start(target, margin, move |v| visible.set(v)) {
                Ok(geometry) => Some(Watch::Geometry {
                    _geometry: geometry,
                }),
                Err(e) => {
                    warn!(format!("visibility: {e}"));
                    None
                }
            }
        }
    }
}

/// Whether the element behind `node` intersects the viewport grown/shrunk by `margin`.
///
/// `false` until the element is mounted and observed. When IntersectionObserver
/// is unavailable the element is re-measured on window scroll and resize.
#[hook]
pub fn use_on_screen(node: NodeRef, margin: RootMargin) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with((node, margin), move |(node, margin)| {
            let watch = node
                .cast::<Element>()
                .and_then(|target| start_watch(target, *margin, visible));
            move || drop(watch)
        });
    }
    *visible
}

/// Latched [`use_on_screen`]: becomes `true` the first time the element is
/// visible and stays `true` until unmount.
#[hook]
pub fn use_revealed(node: NodeRef, margin: RootMargin) -> bool {
    let on_screen = use_on_screen(node, margin);
    let reveal = use_state_eq(Reveal::default);
    {
        let reveal = reveal.clone();
        use_effect_with(on_screen, move |&on_screen| {
            reveal.set((*reveal).observe(on_screen));
            || ()
        });
    }
    (*reveal).observe(on_screen).is_revealed()
}
