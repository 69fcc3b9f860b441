use leptos::prelude::*;

const PILL_ACTIVE: &str = "bg-[#0000d8] text-white";
const PILL_IDLE: &str = "bg-[#f1f5f9] text-[#475569] hover:bg-[#e2e8f0]";

/// Tab item definition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabItem {
    /// Unique identifier for the tab
    pub id: &'static str,
    /// Display label for the tab
    pub label: &'static str,
}

impl TabItem {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Row of rounded pill buttons, exactly one of which is active
#[component]
pub fn PillTabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    #[prop(into)]
    active: Signal<&'static str>,
    /// Callback when tab is changed
    on_change: Callback<&'static str>,
    /// Additional CSS classes for the container
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex flex-wrap gap-3 {class}") role="tablist">
            {tabs
                .into_iter()
                .map(|tab| {
                    let is_active = Signal::derive(move || active.get() == tab.id);
                    let tab_class = move || {
                        format!(
                            "rounded-full px-5 py-2.5 text-[13px] font-semibold uppercase tracking-[0.16em] transition-all {}",
                            if is_active.get() { PILL_ACTIVE } else { PILL_IDLE },
                        )
                    };

                    view! {
                        <button
                            type="button"
                            class=tab_class
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                            on:click=move |_| on_change.run(tab.id)
                        >
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Tab panel content component
#[component]
pub fn TabPanel(
    /// Tab ID this panel belongs to, also the panel element id
    tab_id: &'static str,
    /// Currently active tab ID
    #[prop(into)]
    active: Signal<&'static str>,
    /// Panel content
    children: ChildrenFn,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let is_active = move || active.get() == tab_id;

    view! {
        <Show when=is_active>
            <div class=format!("mld-fade-up {class}") role="tabpanel" id=tab_id>
                {children()}
            </div>
        </Show>
    }
}
