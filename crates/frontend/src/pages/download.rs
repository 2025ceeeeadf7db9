use crate::shared::code_block::CodeBlock;
use crate::shared::links::SiteLink;
use crate::shared::reveal::Reveal;
use content::{INSTALL_CHANNELS, RELEASES_URL};
use leptos::prelude::*;

#[component]
pub fn DownloadPage() -> impl IntoView {
    view! {
        <div class="page page--download">
            <p class="page__intro">
                "Pick whichever channel fits your machine; the binaries are \
                 identical."
            </p>
            {INSTALL_CHANNELS
                .iter()
                .map(|channel| {
                    view! {
                        <Reveal>
                            <section class="install-channel">
                                <h3>{channel.title}</h3>
                                <p>{channel.description}</p>
                                <CodeBlock command=channel.command />
                                {(!channel.note.is_empty())
                                    .then(|| {
                                        view! { <p class="install-channel__note">{channel.note}</p> }
                                    })}
                            </section>
                        </Reveal>
                    }
                })
                .collect_view()}
            <p>
                "All release archives and checksums live on "
                <SiteLink href=RELEASES_URL>"the releases page"</SiteLink> "."
            </p>
        </div>
    }
}
