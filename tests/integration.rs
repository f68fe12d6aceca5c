// SPDX-License-Identifier: MPL-2.0
use og_dashboard::app::{App, FilePreferences};
use og_dashboard::application::port::{MemoryPreferences, PreferenceStore};
use og_dashboard::config::{self, Config, MissingKeyMode};
use og_dashboard::error::{Error, RouteError};
use og_dashboard::i18n::LocaleTag;
use og_dashboard::infrastructure::ConsoleHost;
use og_dashboard::plugins::{Nut, Plugin, PluginSet};
use tempfile::tempdir;

fn app_with(preferences: &dyn PreferenceStore) -> App {
    App::bootstrap(Config::default(), preferences, PluginSet::default()).expect("bootstrap")
}

#[test]
fn each_locale_can_be_selected_after_bootstrap() {
    let mut preferences = MemoryPreferences::default();
    let mut app = app_with(&preferences);
    for tag in LocaleTag::ALL {
        app.switch_locale(tag, &mut preferences).expect("switch");
        assert_eq!(app.i18n().current_locale(), Some(tag));
    }
}

#[test]
fn absent_preference_selects_english() {
    let app = app_with(&MemoryPreferences::default());
    assert_eq!(app.i18n().current_locale(), Some(LocaleTag::EnUs));
    assert_eq!(app.i18n().translate("buttons.submit"), "Submit");
}

#[test]
fn simplified_chinese_preference_is_honoured() {
    let app = app_with(&MemoryPreferences::from([("LOCALE", "zh-Hans")]));
    assert_eq!(app.i18n().current_locale(), Some(LocaleTag::ZhHans));
}

#[test]
fn unsupported_preference_falls_back_to_english() {
    let app = app_with(&MemoryPreferences::from([("LOCALE", "fr-FR")]));
    assert_eq!(app.i18n().current_locale(), Some(LocaleTag::EnUs));
}

#[test]
fn nut_contributes_home_and_sign_in() {
    let routes = Nut.routes();
    let entries: Vec<(&str, &str)> = routes
        .iter()
        .map(|r| (r.path.as_str(), r.name.as_str()))
        .collect();
    assert_eq!(entries, [("/", "home"), ("/users/sign-in", "users.sign-in")]);

    let app = app_with(&MemoryPreferences::default());
    assert_eq!(app.routes(), routes.as_slice());
}

#[test]
fn language_change_survives_restart() {
    let data_dir = tempdir().expect("Failed to create temporary directory");

    // 1. First run: no stored preference, switch to zh-Hant
    let (mut preferences, warning) = FilePreferences::load_from(Some(data_dir.path().to_path_buf()));
    assert!(warning.is_none());
    let mut app = app_with(&preferences);
    assert_eq!(app.i18n().current_locale(), Some(LocaleTag::EnUs));
    app.switch_locale(LocaleTag::ZhHant, &mut preferences)
        .expect("switch and persist");

    // 2. Second run reads the stored preference
    let (preferences, warning) = FilePreferences::load_from(Some(data_dir.path().to_path_buf()));
    assert!(warning.is_none());
    let app = app_with(&preferences);
    assert_eq!(app.i18n().current_locale(), Some(LocaleTag::ZhHant));
    assert_eq!(app.i18n().translate("routes.users.sign-in"), "登入");
}

#[test]
fn settings_file_controls_missing_key_rendering() {
    let config_dir = tempdir().expect("Failed to create temporary directory");
    let mut settings = Config::default();
    settings.i18n.missing_key = MissingKeyMode::Placeholder;
    settings.i18n.missing_placeholder = "[[{key}]]".into();
    config::save_with_override(&settings, Some(config_dir.path().to_path_buf()))
        .expect("save settings");

    let (loaded, warning) = config::load_with_override(Some(config_dir.path().to_path_buf()));
    assert!(warning.is_none());
    let app = App::bootstrap(loaded, &MemoryPreferences::default(), PluginSet::default())
        .expect("bootstrap");
    assert_eq!(app.i18n().translate("nope.nothing"), "[[nope.nothing]]");
    assert_eq!(app.i18n().translate("vux.search.placeholder"), "Search");
}

#[test]
fn mounting_on_console_renders_localized_route_table() {
    let app = app_with(&MemoryPreferences::from([("LOCALE", "zh-Hant")]));
    let mut host = ConsoleHost::new(Vec::new());
    app.mount(&mut host).expect("mount");

    let output = String::from_utf8(host.into_inner()).expect("utf8 output");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "component application-layout -> Application");
    assert!(lines[1].contains("#app"));
    assert!(lines[2].contains("/") && lines[2].contains("首頁"));
    assert!(lines[3].contains("/users/sign-in") && lines[3].contains("登入"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn bundled_locales_report_no_missing_keys() {
    let app = app_with(&MemoryPreferences::default());
    for tag in app.i18n().available_locales() {
        assert!(app.i18n().missing_keys(tag).is_empty(), "{tag} has gaps");
    }
    assert_eq!(app.i18n().language_name(LocaleTag::ZhHans), "简体中文");
}

#[test]
fn argument_values_are_inserted_verbatim() {
    let app = app_with(&MemoryPreferences::default());
    assert_eq!(
        app.i18n().translate_with(
            "site.mounted",
            &[("title", "{target}"), ("target", "#app"), ("count", "2")]
        ),
        "{target} mounted at #app with 2 routes"
    );
}

#[test]
fn errors_are_described_in_the_active_locale() {
    let err = Error::from(RouteError::DuplicateName {
        name: "home".into(),
        first_path: "/".into(),
        second_path: "/home".into(),
    });

    let english = app_with(&MemoryPreferences::default());
    let message = english.i18n().describe_error(&err);
    assert!(message.starts_with("Two pages share the same name: "));
    assert!(message.contains("'home'"));

    let chinese = app_with(&MemoryPreferences::from([("LOCALE", "zh-Hans")]));
    assert!(chinese
        .i18n()
        .describe_error(&err)
        .starts_with("两个页面使用了相同的名称: "));
}
