use leptos::prelude::*;

/// Eyebrow, headline and lead paragraph at the top of a content page
#[component]
pub fn PageIntro(
    /// Small uppercase label above the headline
    eyebrow: &'static str,
    /// Headline text
    title: &'static str,
    /// Trailing headline words rendered in the brand color
    #[prop(optional)]
    accent: Option<&'static str>,
    /// Lead paragraph, or the "last updated" line on legal pages
    #[prop(optional)]
    lead: Option<&'static str>,
    #[prop(default = true)]
    centered: bool,
    /// Extra controls under the lead paragraph
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let wrapper = if centered {
        "pt-28 text-center sm:pt-36"
    } else {
        "pt-28 sm:pt-36"
    };
    let lead_class = if centered {
        "mld-fade-up mx-auto mt-6 max-w-2xl text-[17px] leading-relaxed text-[#475569] sm:text-[20px]"
    } else {
        "mld-fade-up mt-6 max-w-2xl text-[17px] leading-relaxed text-[#475569] sm:text-[20px]"
    };

    view! {
        <section class="bg-white pb-16 pt-6 shadow-[0_40px_120px_rgba(10,14,39,0.45)]">
            <div class="mx-auto max-w-6xl px-4 sm:px-8 lg:px-12">
                <div class=wrapper>
                    <p class="mld-fade-up text-[14px] font-semibold uppercase tracking-[0.25em] text-[#0000d8]">
                        {eyebrow}
                    </p>
                    <h1 class="mld-fade-up mt-4 text-[36px] font-black leading-[1.04] tracking-tight text-[#0a0e27] sm:text-[56px] md:text-[72px]">
                        {title}
                        {accent.map(|accent| view! { " " <span class="text-[#0000d8]">{accent}</span> })}
                    </h1>
                    {lead.map(|lead| view! { <p class=lead_class>{lead}</p> })}
                    {children.map(|children| children())}
                </div>
            </div>
        </section>
    }
}
