use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=style/tailwind.css");

    let site_pkg_dir = Path::new("target/site/pkg");
    if !site_pkg_dir.exists() {
        fs::create_dir_all(site_pkg_dir).expect("Failed to create site/pkg directory");
    }

    // cargo-leptos writes the compiled stylesheet to target/tmp; the shell
    // links it as /pkg/navbar.css.
    let css_source = Path::new("target/tmp/tailwind.css");
    let css_dest = site_pkg_dir.join("navbar.css");
    if css_source.exists() {
        fs::copy(css_source, &css_dest).expect("Failed to copy CSS file");
        println!("Copied CSS from {css_source:?} to {css_dest:?}");
    } else {
        println!("Source CSS file not found at {css_source:?}");
    }

    // The navbar references its logo, overlay background and audio loop by
    // absolute path; warn early when any of them is missing from public/.
    for asset in ["img/logo.png", "img/overlay-bg.jpg", "audio/loop.mp3"] {
        let path = Path::new("public").join(asset);
        println!("cargo:rerun-if-changed={}", path.display());
        if !path.exists() {
            println!("cargo:warning=navbar asset missing: {}", path.display());
        }
    }
}
