use crate::shared::code_block::CodeBlock;
use crate::shared::links::SiteLink;
use crate::shared::reveal::Reveal;
use crate::shared::scroll::AnchorLink;
use content::{Tool, TOOLS};
use leptos::prelude::*;

#[component]
fn ToolCard(tool: &'static Tool) -> impl IntoView {
    view! {
        <Reveal>
            <article class="tool-card" id=tool.slug>
                <header class="tool-card__header">
                    <h3>{tool.name}</h3>
                    <code class="tool-card__bin">{tool.bin}</code>
                </header>
                <p class="tool-card__tagline">{tool.tagline}</p>
                <p>{tool.description}</p>
                <ul class="tool-card__highlights">
                    {tool
                        .highlights
                        .iter()
                        .map(|highlight| view! { <li>{*highlight}</li> })
                        .collect_view()}
                </ul>
                <CodeBlock command=tool.install />
                <SiteLink href=tool.repo_url>"Repository"</SiteLink>
            </article>
        </Reveal>
    }
}

#[component]
pub fn ToolsPage() -> impl IntoView {
    view! {
        <div class="page page--tools">
            <nav class="jump-list">
                {TOOLS
                    .iter()
                    .map(|tool| {
                        view! {
                            <AnchorLink href=format!("#{}", tool.slug)>{tool.name}</AnchorLink>
                        }
                    })
                    .collect_view()}
            </nav>
            {TOOLS
                .iter()
                .map(|tool| view! { <ToolCard tool=tool /> })
                .collect_view()}
        </div>
    }
}
