use leptos::{html::Div, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::visibility::{Observation, VisibilityLatch, DEFAULT_THRESHOLD};

const HIDDEN: &str = "opacity-0 translate-y-10 transition-all duration-1000";

/// Classes for an element that slides up the first time it is seen.
pub fn entrance_class(entered: bool, extra: &str) -> String {
    let mut class = format!("{extra} {HIDDEN}");
    if entered {
        class.push_str(" animate-slide-up");
    }
    class.trim_start().to_string()
}

pub fn use_entrance(target: NodeRef<Div>) -> Signal<bool> {
    use_entrance_with_threshold(target, DEFAULT_THRESHOLD)
}

/// Watches `target` until it first crosses `threshold`, then stops observing.
///
/// The observer is owned by the calling component and released with it.
pub fn use_entrance_with_threshold(target: NodeRef<Div>, threshold: f64) -> Signal<bool> {
    let latch = StoredValue::new(VisibilityLatch::new(threshold));
    let (entered, set_entered) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                if latch.try_update_value(|l| l.observe(ratio)) == Some(Observation::Entered) {
                    set_entered.set(true);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![latch.get_value().threshold()]),
    );

    Effect::new(move |_| {
        if entered.get() {
            stop();
        }
    });

    entered.into()
}
