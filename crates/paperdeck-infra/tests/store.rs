use paperdeck_core::config::{Config, SkipReason, WallpaperEntry};
use paperdeck_core::error::ConfigError;
use paperdeck_core::monitor::MonitorTarget;
use paperdeck_infra::store;

#[test]
fn missing_file_is_not_found_and_defaults_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hypr/hyprpaper.conf");

    let err = store::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));

    let parsed = store::load_or_default(&path).unwrap();
    assert!(parsed.config.is_empty());
    assert!(parsed.skipped.is_empty());
}

#[test]
fn unreadable_path_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    // A directory where the file should be.
    let err = store::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }), "{err:?}");
    assert!(store::load_or_default(dir.path()).is_err());
}

#[test]
fn save_creates_parent_dirs_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/hypr/hyprpaper.conf");

    let mut cfg = Config::default();
    cfg.assign(&MonitorTarget::Named("DP-1".into()), "/pics/a.png");
    cfg.assign(&MonitorTarget::Named("HDMI-A-1".into()), "/pics/b c.webp");
    cfg.set_splash(true);
    cfg.set_ipc_off(true);

    store::save(&path, &cfg).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "preload = /pics/a.png\n\
         preload = /pics/b c.webp\n\
         wallpaper = DP-1,/pics/a.png\n\
         wallpaper = HDMI-A-1,/pics/b c.webp\n\
         splash = true\n\
         ipc = off\n"
    );

    let back = store::load(&path).unwrap();
    assert!(back.skipped.is_empty());
    assert_eq!(back.config, cfg);

    // No temp file left behind.
    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, [std::ffi::OsString::from("hyprpaper.conf")]);
}

#[test]
fn save_overwrites_comments_and_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hyprpaper.conf");
    std::fs::write(
        &path,
        "# my wallpapers\nwallpaper = onlyonefield\nwallpaper = DP-1, /a.png\nfoo = bar\n",
    )
    .unwrap();

    let parsed = store::load(&path).unwrap();
    assert_eq!(
        parsed.config.wallpapers(),
        [WallpaperEntry::new("DP-1", "/a.png")]
    );
    let reasons: Vec<_> = parsed.skipped.iter().map(|s| s.reason.clone()).collect();
    assert_eq!(
        reasons,
        [SkipReason::MissingComma, SkipReason::UnknownKey("foo".into())]
    );

    store::save(&path, &parsed.config).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "wallpaper = DP-1,/a.png\n"
    );
}

#[test]
fn save_into_unwritable_location_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("hypr");
    std::fs::write(&blocker, b"a file, not a dir").unwrap();

    let err = store::save(&blocker.join("hyprpaper.conf"), &Config::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Write { .. }), "{err:?}");
}

#[test]
fn save_writes_through_symlinked_config() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("dotfiles/hyprpaper.conf");
    let link = dir.path().join("hypr/hyprpaper.conf");
    std::fs::create_dir_all(real.parent().unwrap()).unwrap();
    std::fs::create_dir_all(link.parent().unwrap()).unwrap();
    std::fs::write(&real, "wallpaper = ,/old.png\n").unwrap();
    std::fs::set_permissions(&real, std::fs::Permissions::from_mode(0o600)).unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let mut cfg = store::load(&link).unwrap().config;
    cfg.assign(&MonitorTarget::All, "/new.png");
    store::save(&link, &cfg).unwrap();

    let meta = std::fs::symlink_metadata(&link).unwrap();
    assert!(meta.file_type().is_symlink());
    assert_eq!(
        std::fs::read_to_string(&real).unwrap(),
        "preload = /new.png\nwallpaper = ,/new.png\n"
    );
    let mode = std::fs::metadata(&real).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    for d in [real.parent().unwrap(), link.parent().unwrap()] {
        let names: Vec<_> = std::fs::read_dir(d)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, [std::ffi::OsString::from("hyprpaper.conf")]);
    }
}

#[test]
fn save_through_dangling_symlink_creates_the_target() {
    let dir = tempfile::tempdir().unwrap();
    let link = dir.path().join("hyprpaper.conf");
    std::os::unix::fs::symlink("dotfiles/hypr.conf", &link).unwrap();

    let mut cfg = Config::default();
    cfg.assign(&MonitorTarget::Named("DP-1".into()), "/a.png");
    store::save(&link, &cfg).unwrap();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("dotfiles/hypr.conf")).unwrap(),
        "preload = /a.png\nwallpaper = DP-1,/a.png\n"
    );
}

#[test]
fn failed_rename_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    // A non-empty directory where the config should be makes the rename fail.
    let path = dir.path().join("hyprpaper.conf");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), b"x").unwrap();

    let err = store::save(&path, &Config::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Write { .. }), "{err:?}");

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, [std::ffi::OsString::from("hyprpaper.conf")]);
}
