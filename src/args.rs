// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 The Frontier Framework Authors

// Argument Translation Module
//
// Maps a BuildConfig onto the Pake CLI argument vector. The emission order
// below is part of the output contract; keep new options appended in the
// order they are declared in BuildOptions.

use std::path::Path;

use crate::config::{BuildConfig, BuildOptions};

/// Build the full argument vector: entry script, URL, required options, then
/// every enabled optional flag.
pub fn translate(config: &BuildConfig, entry: &Path, arch: &str) -> Vec<String> {
    let mut args = vec![
        entry.to_string_lossy().into_owned(),
        config.url.clone(),
        "--name".into(),
        config.name.clone(),
        "--icon".into(),
        config.icon.clone(),
        "--width".into(),
        config.width.to_string(),
        "--height".into(),
        config.height.to_string(),
        "--targets".into(),
        arch.to_string(),
    ];

    push_options(&mut args, &config.options);
    args
}

fn push_options(args: &mut Vec<String>, o: &BuildOptions) {
    value(args, "--title", &o.title);
    if o.resizable == Some(false) {
        args.push("--no-resizable".into());
    }
    flag(args, "--fullscreen", o.fullscreen);
    flag(args, "--maximize", o.maximize);
    flag(args, "--hide-title-bar", o.hide_title_bar);
    flag(args, "--always-on-top", o.always_on_top);
    flag(args, "--dark-mode", o.dark_mode);
    flag(args, "--disabled-web-shortcuts", o.disabled_web_shortcuts);
    value(args, "--activation-shortcut", &o.activation_shortcut);
    value(args, "--user-agent", &o.user_agent);
    flag(args, "--show-system-tray", o.show_system_tray);
    value(args, "--system-tray-icon", &o.system_tray_icon);
    flag(args, "--use-local-file", o.use_local_file);
    flag(args, "--multi-arch", o.multi_arch);
    flag(args, "--debug", o.debug);
    if let Some(inject) = o.inject.as_ref().filter(|files| !files.is_empty()) {
        args.push("--inject".into());
        args.push(inject.join(","));
    }
    value(args, "--proxy-url", &o.proxy_url);
    value(args, "--installer-language", &o.installer_language);
    flag(args, "--hide-on-close", o.hide_on_close);
    flag(args, "--incognito", o.incognito);
    flag(args, "--wasm", o.wasm);
    flag(args, "--enable-drag-drop", o.enable_drag_drop);
    flag(args, "--keep-binary", o.keep_binary);
    flag(args, "--multi-instance", o.multi_instance);
    flag(args, "--start-to-tray", o.start_to_tray);
    value(args, "--app-version", &o.app_version);
}

fn flag(args: &mut Vec<String>, name: &str, enabled: Option<bool>) {
    if enabled == Some(true) {
        args.push(name.into());
    }
}

// Empty strings count as unset.
fn value(args: &mut Vec<String>, name: &str, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        args.push(name.into());
        args.push(v.to_string());
    }
}
