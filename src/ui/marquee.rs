//! Endless logo strip
//!
//! The first copy of the logo set is measured against the container. Enough
//! extra copies are appended to keep the strip full while it scrolls by one
//! set width, then the CSS animation loops.

use leptos::html;
use leptos::prelude::*;

use crate::core::MarqueeSizer;

const SET_CLASS: &str = "flex items-center gap-8 pr-8";

#[component]
fn LogoPills(logos: &'static [&'static str]) -> impl IntoView {
    logos
        .iter()
        .map(|logo| {
            view! {
                <div class="flex shrink-0 items-center justify-center rounded-full bg-[#0000d8] px-6 py-3 text-center text-[11px] font-semibold uppercase tracking-[0.18em] text-[#f8fafc]">
                    {*logo}
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn LogoMarquee(logos: &'static [&'static str]) -> impl IntoView {
    let sizer = RwSignal::new(MarqueeSizer::new());
    let container_ref = NodeRef::<html::Div>::new();
    let set_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::ui::dom::{SendWrapper, SizeWatch};

        let measure = move || {
            let (Some(container), Some(set)) = (container_ref.get_untracked(), set_ref.get_untracked())
            else {
                return;
            };
            let container_width = f64::from(container.client_width());
            let set_width = f64::from(set.scroll_width());
            sizer.try_maybe_update(|sizer| (sizer.update(container_width, set_width), ()));
        };

        Effect::new(move |_| {
            let (Some(container), Some(set)) = (container_ref.get(), set_ref.get()) else {
                return;
            };
            measure();

            let targets: [&leptos::web_sys::Element; 2] = [&container, &set];
            let watch = SizeWatch::new(&targets, measure).map(SendWrapper::new);
            let resize = window_event_listener(leptos::ev::resize, move |_| measure());
            on_cleanup(move || {
                drop(watch);
                resize.remove();
            });
        });
    }

    let is_animating = move || sizer.get().is_animating();
    let strip_style = move || {
        sizer
            .get()
            .layout()
            .map(|layout| layout.animation_style())
            .unwrap_or_default()
    };
    let extra_copies = move || sizer.get().copies().saturating_sub(1);

    view! {
        <div node_ref=container_ref class="overflow-hidden">
            <div
                class="flex w-max items-center"
                class=("mld-marquee", is_animating)
                style=strip_style
            >
                <div node_ref=set_ref class=SET_CLASS>
                    <LogoPills logos=logos />
                </div>
                {move || {
                    (0..extra_copies())
                        .map(|_| {
                            view! {
                                <div class=SET_CLASS aria-hidden="true">
                                    <LogoPills logos=logos />
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
