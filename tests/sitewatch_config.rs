use std::sync::Mutex;

use tempfile::NamedTempFile;

use sitewatch_kernel::config::SitewatchConfig;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in [
        "SITEWATCH_CONFIG",
        "SITEWATCH_BACKEND",
        "SITEWATCH_CONF_THRESHOLD",
        "SITEWATCH_BOX_THICKNESS",
        "SITEWATCH_LABEL_SCALE",
        "SITEWATCH_OUT_DIR",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn loads_config_from_file_and_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = NamedTempFile::new().expect("temp config");
    let json = r#"{
        "backend": "stub",
        "confidence_threshold": 0.4,
        "annotate": {
            "box_thickness": 3,
            "label_scale": 20.0
        },
        "out_dir": "site_frames"
    }"#;
    std::io::Write::write_all(&mut file, json.as_bytes()).expect("write config");

    std::env::set_var("SITEWATCH_CONFIG", file.path());
    std::env::set_var("SITEWATCH_CONF_THRESHOLD", "0.6");
    std::env::set_var("SITEWATCH_OUT_DIR", "override_frames");

    let cfg = SitewatchConfig::load().expect("load config");

    assert_eq!(cfg.backend, "stub");
    assert_eq!(cfg.confidence_threshold, 0.6);
    assert_eq!(cfg.annotate.box_thickness, 3);
    assert_eq!(cfg.annotate.label_scale, 20.0);
    assert_eq!(cfg.out_dir, "override_frames");

    clear_env();
}

#[test]
fn defaults_apply_without_file_or_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = SitewatchConfig::load().expect("load config");

    assert_eq!(cfg.backend, "stub");
    assert_eq!(cfg.confidence_threshold, 0.25);
    assert_eq!(cfg.annotate.box_thickness, 2);
    assert_eq!(cfg.out_dir, "sitewatch_out");

    clear_env();
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    std::env::set_var("SITEWATCH_CONF_THRESHOLD", "1.5");
    let err = SitewatchConfig::load();
    assert!(err.is_err());

    clear_env();
}
