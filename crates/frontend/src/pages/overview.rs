use crate::shared::reveal::Reveal;
use content::{FEATURES, SITE};
use leptos::prelude::*;

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="page page--overview">
            <section class="hero">
                <h2>{SITE.tagline}</h2>
                <p>
                    "A small family of terminal UIs that share one philosophy: \
                     start instantly, stay out of the way, and play well with \
                     the rest of your shell."
                </p>
            </section>
            <section class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <Reveal>
                                <div class="feature-card">
                                    <span class="feature-card__icon">{feature.icon}</span>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
