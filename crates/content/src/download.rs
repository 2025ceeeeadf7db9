use serde::Serialize;

/// One way to install the tools, shown on the download panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallChannel {
    pub title: &'static str,
    pub description: &'static str,
    /// Command shown in the panel's code block, one line per step.
    pub command: &'static str,
    /// Extra note rendered under the block, empty when there is none.
    pub note: &'static str,
}

pub const RELEASES_URL: &str = "https://github.com/Hiro-Chiba/fileview/releases";

pub const INSTALL_CHANNELS: &[InstallChannel] = &[
    InstallChannel {
        title: "Cargo",
        description: "Build from source with a stable Rust toolchain.",
        command: "cargo install fileview gitview logview",
        note: "Requires Rust 1.90 or newer.",
    },
    InstallChannel {
        title: "Homebrew",
        description: "Prebuilt bottles for macOS and Linux.",
        command: "brew tap hiro-chiba/tap\nbrew install fileview",
        note: "",
    },
    InstallChannel {
        title: "Prebuilt binaries",
        description: "Static binaries for x86_64 and aarch64, attached to \
                      every tagged release.",
        command: "curl -LO https://github.com/Hiro-Chiba/fileview/releases/latest/download/fv-x86_64-unknown-linux-musl.tar.gz\ntar xzf fv-x86_64-unknown-linux-musl.tar.gz",
        note: "Checksums are published next to each archive.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_have_commands() {
        for channel in INSTALL_CHANNELS {
            assert!(!channel.command.is_empty());
            assert!(!channel.title.is_empty());
        }
    }

    #[test]
    fn releases_url_is_absolute() {
        assert!(RELEASES_URL.starts_with("https://"));
    }
}
