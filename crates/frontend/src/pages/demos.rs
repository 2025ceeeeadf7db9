use crate::shared::links::SiteLink;
use crate::shared::reveal::Reveal;
use content::DEMOS;
use leptos::prelude::*;

#[component]
pub fn DemosPage() -> impl IntoView {
    view! {
        <div class="page page--demos">
            <p class="page__intro">
                "Short recordings of the tools doing real work. Every cast is \
                 plain text, so you can copy commands straight out of the \
                 player."
            </p>
            <section class="demo-grid">
                {DEMOS
                    .iter()
                    .map(|demo| {
                        view! {
                            <Reveal>
                                <div class="demo-card">
                                    <h3>{demo.title}</h3>
                                    <code class="demo-card__tool">{demo.tool}</code>
                                    <p>{demo.description}</p>
                                    <SiteLink href=demo.cast_url>"Watch recording"</SiteLink>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
