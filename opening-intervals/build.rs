use rustc_version::{version_meta, Channel};

fn detect_build_channel() {
    let channel = match version_meta().map(|meta| meta.channel) {
        Ok(Channel::Stable) => "CHANNEL_STABLE",
        Ok(Channel::Beta) => "CHANNEL_BETA",
        Ok(Channel::Nightly) => "CHANNEL_NIGHTLY",
        Ok(Channel::Dev) => "CHANNEL_DEV",
        Err(_) => return,
    };

    println!("cargo:rustc-cfg={}", channel)
}

fn main() {
    detect_build_channel();
}
