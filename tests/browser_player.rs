//! Browser tests for the generated player page.
//!
//! Run with: `cargo test --test browser_player -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn work_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn run(args: &[&str]) {
    let status = Command::new(env!("CARGO_BIN_EXE_webgallery"))
        .current_dir(work_dir())
        .args(args)
        .status()
        .expect("failed to run webgallery");
    assert!(status.success(), "webgallery {:?} failed", args);
}

/// Build one gallery page with every field and action enabled.
fn gallery_page() -> &'static PathBuf {
    static PAGE: OnceLock<PathBuf> = OnceLock::new();
    PAGE.get_or_init(|| {
        let dir = work_dir();
        if dir.exists() {
            std::fs::remove_dir_all(&dir).expect("failed to clean work dir");
        }
        std::fs::create_dir_all(dir.join("media")).unwrap();
        for name in ["one.mp3", "two.mp4", r#"it's "quoted".wav"#, "track #1 50%.mp3"] {
            std::fs::write(dir.join("media").join(name), b"placeholder").unwrap();
        }

        run(&["register", "--user", "tester", "--password", "pw"]);
        run(&[
            "generate",
            "--user",
            "tester",
            "--password",
            "pw",
            "--field",
            "duration,path",
            "--action",
            "Play,Pause,Download,Like",
            "--no-open",
            "media",
        ]);

        std::fs::read_dir(dir.join("output"))
            .unwrap()
            .map(|e| e.unwrap().path())
            .find(|p| p.extension().is_some_and(|e| e == "html"))
            .expect("no gallery page written")
    })
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_gallery() -> Arc<Tab> {
    let page = gallery_page();
    let tab = browser().new_tab().unwrap();
    tab.navigate_to(&format!("file://{}", page.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

/// JS expression yielding the button labelled `label` inside `item`.
fn button_js(item: &str, label: &str) -> String {
    format!(
        "Array.from({item}.querySelectorAll('button')).find(b => b.textContent.includes('{label}'))"
    )
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn one_item_per_media_file() {
    let tab = load_gallery();
    let val = eval(&tab, "document.querySelectorAll('#gallery .item').length");
    assert_eq!(val.as_u64(), Some(4));
}

#[test]
#[ignore]
fn handlers_are_defined() {
    let tab = load_gallery();
    let val = eval(
        &tab,
        "[playMedia, pauseMedia, downloadFile, like].every(f => typeof f === 'function')",
    );
    assert_eq!(val.as_bool(), Some(true));
}

#[test]
#[ignore]
fn like_marks_button_and_disables_it() {
    let tab = load_gallery();
    let val = eval(
        &tab,
        r#"(function() {
            const btn = Array.from(document.querySelectorAll('button'))
                .find(b => b.textContent.includes('Like'));
            btn.click();
            return btn.textContent + '|' + btn.disabled;
        })()"#,
    );
    assert_eq!(val.as_str(), Some("💖 Liked!|true"));
}

#[test]
#[ignore]
fn quoted_path_reaches_handler_intact() {
    let tab = load_gallery();
    let val = eval(
        &tab,
        r#"(function() {
            const item = Array.from(document.querySelectorAll('.item'))
                .find(i => i.querySelector('h3').textContent.includes('quoted'));
            let seen = null;
            window.downloadFile = src => { seen = decodeURIComponent(src); };
            Array.from(item.querySelectorAll('button'))
                .find(b => b.textContent.includes('Download'))
                .click();
            return seen;
        })()"#,
    );
    let src = val.as_str().expect("handler was not called");
    assert!(src.ends_with(r#"it's "quoted".wav"#), "src was {}", src);
}

#[test]
#[ignore]
fn hash_and_percent_in_filename_stay_in_path() {
    let tab = load_gallery();
    let val = eval(
        &tab,
        r#"(function() {
            const item = Array.from(document.querySelectorAll('.item'))
                .find(i => i.querySelector('h3').textContent.includes('track'));
            const url = new URL(item.querySelector('audio').src);
            return url.protocol + '|' + url.hash + '|' + decodeURIComponent(url.pathname);
        })()"#,
    );
    let parts: Vec<&str> = val.as_str().expect("no source url").split('|').collect();
    assert_eq!(parts[0], "file:");
    assert_eq!(parts[1], "", "filename leaked into the fragment");
    assert!(parts[2].ends_with("/media/track #1 50%.mp3"), "path was {}", parts[2]);
}

#[test]
#[ignore]
fn play_replaces_previous_player() {
    let tab = load_gallery();
    let first = "document.querySelectorAll('.item')[0]";
    let second = "document.querySelectorAll('.item')[1]";
    let js = format!(
        r#"(function() {{
            const log = [];
            let made = 0;
            window.Audio = class {{
                constructor(src) {{ this.id = made++; log.push('new' + this.id); }}
                play() {{ log.push('play' + this.id); return Promise.resolve(); }}
                pause() {{ log.push('pause' + this.id); }}
            }};
            {}.click();
            {}.click();
            {}.click();
            return log.join(',');
        }})()"#,
        button_js(first, "Play"),
        button_js(second, "Play"),
        button_js(second, "Pause"),
    );
    let val = eval(&tab, &js);
    assert_eq!(
        val.as_str(),
        Some("new0,play0,pause0,new1,play1,pause1"),
        "the first player must stop before the second starts, and Pause must hit only the second"
    );
}
