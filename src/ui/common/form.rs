use leptos::prelude::*;

/// Labelled input on the dark auth panel. The value stays in the DOM.
#[component]
pub fn FormField(
    /// Element id, also ties the label to the input
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autofill hint
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label
                for=id
                class="mb-2 block text-[13px] font-semibold uppercase tracking-[0.14em] text-[#94a3b8]"
            >
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                class="w-full rounded-xl border border-[#1e293b] bg-[#020617] px-4 py-3.5 text-[15px] text-white outline-none transition-all placeholder:text-[#475569] focus:border-[#0000d8]"
            />
        </div>
    }
}
