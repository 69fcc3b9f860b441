//! Tools grid that plays the hero sequence and reveals the tilting logo

use futures::future::AbortHandle;
use leptos::html;
use leptos::prelude::*;

use crate::core::LogoTilt;
use crate::core::hero::{EASE_OUT, HeroPhase, HeroTimeline};

#[cfg(feature = "hydrate")]
mod stage {
    use futures::FutureExt;
    use futures::future::LocalBoxFuture;
    use gloo_timers::future::TimeoutFuture;
    use leptos::prelude::*;

    use crate::core::{HeroPhase, HeroStage};

    /// Publishes phases to a signal and sleeps on browser timers
    pub struct SignalStage {
        pub phase: RwSignal<HeroPhase>,
    }

    impl HeroStage for SignalStage {
        fn show(&mut self, phase: HeroPhase) {
            self.phase.try_set(phase);
        }

        fn wait(&mut self, ms: u32) -> LocalBoxFuture<'static, ()> {
            TimeoutFuture::new(ms).boxed_local()
        }
    }
}

fn logo_style(revealed: bool, tilt: LogoTilt, reveal_ms: u32) -> String {
    let (opacity, scale) = if revealed { (1.0, 1.0) } else { (0.0, 0.6) };
    format!(
        "opacity: {opacity}; transform: {}; transition: opacity {reveal_ms}ms {EASE_OUT}, transform {reveal_ms}ms {EASE_OUT};",
        tilt.transform(scale),
    )
}

#[component]
pub fn ToolsReveal(tools: &'static [&'static str]) -> impl IntoView {
    let timeline = HeroTimeline::default();
    let tile_count = tools.len();
    let phase = RwSignal::new(HeroPhase::Idle);
    let tilt = RwSignal::new(LogoTilt::NEUTRAL);
    // Pointer and visibility both track the padded wrapper
    let area_ref = NodeRef::<html::Div>::new();

    // Teardown aborts whatever phase is pending
    let (abort, registration) = AbortHandle::new_pair();
    on_cleanup(move || abort.abort());

    #[cfg(feature = "hydrate")]
    {
        use crate::core::hero::VISIBILITY_ROOT_MARGIN;
        use crate::ui::dom::{SendWrapper, VisibilityWatch};

        let registration = StoredValue::new(Some(registration));
        Effect::new(move |_| {
            let Some(area) = area_ref.get() else {
                return;
            };
            let Some(registration) = registration.try_update_value(Option::take).flatten() else {
                return;
            };
            let watch = VisibilityWatch::once(&area, VISIBILITY_ROOT_MARGIN, move || {
                play(phase, timeline, tile_count, registration)
            })
            .map(SendWrapper::new);
            on_cleanup(move || drop(watch));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = registration;

    let on_pointer_move = move |ev: leptos::ev::MouseEvent| {
        if !phase.get_untracked().is_revealed() {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(area) = area_ref.get_untracked() {
            let bounds = area.get_bounding_client_rect();
            let rect = crate::core::Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            tilt.try_set(LogoTilt::from_pointer(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                rect,
            ));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div
            node_ref=area_ref
            class="relative px-10 py-10"
            on:mousemove=on_pointer_move
            on:mouseleave=move |_| {
                tilt.try_set(LogoTilt::NEUTRAL);
            }
        >
            // Large blue glow behind tools
            <div class="pointer-events-none absolute -inset-x-16 -inset-y-10 z-0 rounded-[60px] bg-[#0000d8] opacity-90 blur-3xl"></div>

            <div class="relative z-10 grid grid-cols-4 gap-5 text-xs text-[#f8fafc] sm:text-sm"
            >
                {tools
                    .iter()
                    .enumerate()
                    .map(|(index, label)| {
                        let style = move || {
                            timeline.tile_frame(index, tile_count, phase.get()).style()
                        };
                        view! {
                            <div
                                class="flex h-16 w-16 items-center justify-center rounded-2xl bg-[#0a0e27]"
                                style=style
                            >
                                <span class="text-[11px] font-semibold uppercase tracking-[0.16em] text-[#e5e7eb]">
                                    {*label}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}

                <div
                    class="pointer-events-none absolute inset-0 flex items-center justify-center"
                    style=move || logo_style(phase.get().is_revealed(), tilt.get(), timeline.reveal_ms)
                    aria-hidden=move || (!phase.get().is_revealed()).to_string()
                >
                    <div class="relative flex h-full w-full items-center justify-center overflow-hidden rounded-2xl bg-[#0000d8]">
                        <span class="text-[28px] font-black tracking-[0.3em] text-white sm:text-[36px]">
                            "MLD"
                        </span>
                        <div
                            class="absolute inset-0 transition-[background] duration-200 ease-out"
                            style=move || tilt.get().glow_style()
                        ></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Run the sequence until the reveal, unless the component goes away first
#[cfg(feature = "hydrate")]
fn play(
    phase: RwSignal<HeroPhase>,
    timeline: HeroTimeline,
    tile_count: usize,
    registration: futures::future::AbortRegistration,
) {
    use futures::future::Abortable;
    use leptos::logging::log;

    use crate::core::{HeroSequencer, run_sequence};

    leptos::task::spawn_local(async move {
        let mut sequencer = HeroSequencer::new();
        sequencer.trigger();
        let mut stage = stage::SignalStage { phase };
        let run = run_sequence(&mut sequencer, &timeline, tile_count, &mut stage);
        if Abortable::new(run, registration).await.is_err() {
            log!("hero sequence stopped at {:?}", sequencer.phase());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_hidden_until_revealed() {
        let hidden = logo_style(false, LogoTilt::NEUTRAL, 280);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("scale(0.6)"));

        let shown = logo_style(true, LogoTilt::NEUTRAL, 280);
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("scale(1)"));
        assert!(shown.contains("280ms"));
    }

    #[test]
    fn test_logo_style_uses_tilt_pose() {
        let tilt = LogoTilt {
            rotate_x: -2.0,
            rotate_y: 1.25,
            ..LogoTilt::NEUTRAL
        };
        let style = logo_style(true, tilt, 280);
        assert!(style.contains(&format!("transform: {};", tilt.transform(1.0))));
        assert!(style.contains("rotateX(-2.00deg) rotateY(1.25deg)"));
    }
}
