use indexmap::IndexMap;
use ml_alternates::{
    AlternateLanguage, AlternateVersion, BuildConfig, PageRequest, derive_alternate_urls,
    parse_list,
};
use pretty_assertions::assert_eq;

fn names(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn remote_config() -> BuildConfig {
    BuildConfig {
        current_version: Some("14.0".to_owned()),
        canonical_version: Some("15.0".to_owned()),
        current_language: Some("fr".to_owned()),
        canonical_language: Some("en".to_owned()),
        published_versions: parse_list("14.0,15.0"),
        published_languages: parse_list("fr,en"),
        is_remote_build: true,
        remote_root: Some("https://docs.x.com".to_owned()),
        version_display_names: names(&[("14.0", "Odoo 14"), ("15.0", "Odoo 15")]),
        language_display_names: names(&[("en", "English"), ("fr", "Français")]),
    }
}

fn local_config() -> BuildConfig {
    BuildConfig {
        canonical_version: None,
        is_remote_build: false,
        remote_root: None,
        ..remote_config()
    }
}

#[test]
fn remote_build_scenario() {
    let page = PageRequest::new("intro", "/build/html/14.0/fr");
    let urls = derive_alternate_urls(&page, &remote_config());

    assert_eq!(urls.canonical_url, "https://docs.x.com/15.0/intro.html");
    assert_eq!(
        urls.alternate_versions,
        vec![AlternateVersion {
            label: "Odoo 15".to_owned(),
            url: "https://docs.x.com/15.0/fr/intro.html".to_owned(),
        }]
    );
    assert_eq!(
        urls.alternate_languages,
        vec![AlternateLanguage {
            label: "English".to_owned(),
            hreflang: "x-default".to_owned(),
            url: "https://docs.x.com/14.0/intro.html".to_owned(),
        }]
    );
    assert_eq!(urls.version_display_label.as_deref(), Some("Odoo 14"));
    assert_eq!(urls.language_display_label.as_deref(), Some("Français"));
}

#[test]
fn remote_build_older_version_alternate_keeps_language() {
    let config = BuildConfig {
        current_version: Some("15.0".to_owned()),
        ..remote_config()
    };
    let page = PageRequest::new("intro", "/build/html/15.0/fr");
    let urls = derive_alternate_urls(&page, &config);

    assert_eq!(urls.alternate_versions.len(), 1);
    assert_eq!(
        urls.alternate_versions[0].url,
        "https://docs.x.com/14.0/fr/intro.html"
    );
}

#[test]
fn local_build_scenario() {
    let page = PageRequest::new("intro", "/build/html/14.0/fr");
    let urls = derive_alternate_urls(&page, &local_config());

    assert_eq!(urls.canonical_url, "/build/html/14.0/intro.html");
    assert_eq!(urls.alternate_versions[0].url, "/build/html/15.0/fr/intro.html");
    assert_eq!(urls.alternate_languages[0].url, "/build/html/14.0/intro.html");
}

#[test]
fn index_page_remote_strips_filename() {
    let page = PageRequest::new("index", "/build/html/14.0/fr");
    let urls = derive_alternate_urls(&page, &remote_config());

    assert_eq!(urls.canonical_url, "https://docs.x.com/15.0/");
    assert_eq!(
        urls.alternate_languages[0].url,
        "https://docs.x.com/14.0/"
    );
}

#[test]
fn index_page_local_keeps_filename() {
    let page = PageRequest::new("index", "/build/html/14.0/fr");
    let urls = derive_alternate_urls(&page, &local_config());

    assert_eq!(urls.canonical_url, "/build/html/14.0/index.html");
}

#[test]
fn canonical_has_no_language_segment_for_canonical_language() {
    let config = BuildConfig {
        current_language: Some("en".to_owned()),
        ..remote_config()
    };
    let page = PageRequest::new("guides/intro", "/build/html/14.0");
    let urls = derive_alternate_urls(&page, &config);

    assert_eq!(urls.canonical_url, "https://docs.x.com/15.0/guides/intro.html");
    assert_eq!(
        urls.alternate_languages,
        vec![AlternateLanguage {
            label: "Français".to_owned(),
            hreflang: "fr".to_owned(),
            url: "https://docs.x.com/14.0/fr/guides/intro.html".to_owned(),
        }]
    );
}

#[test]
fn single_version_project_has_no_version_segment() {
    let config = BuildConfig {
        published_versions: Vec::new(),
        ..remote_config()
    };
    let page = PageRequest::new("intro", "/build/html/fr");
    let urls = derive_alternate_urls(&page, &config);

    assert_eq!(urls.canonical_url, "https://docs.x.com/intro.html");
    assert!(urls.alternate_versions.is_empty());
    assert_eq!(urls.alternate_languages[0].url, "https://docs.x.com/intro.html");
}

#[test]
fn empty_config_degrades_to_single_page() {
    let page = PageRequest::new("intro", "/build/html");
    let urls = derive_alternate_urls(&page, &BuildConfig::default());

    assert_eq!(urls.canonical_url, "/build/html/intro.html");
    assert!(urls.alternate_versions.is_empty());
    assert!(urls.alternate_languages.is_empty());
    assert_eq!(urls.version_display_label, None);
    assert_eq!(urls.language_display_label, None);
}

#[test]
fn current_variants_are_excluded() {
    let config = BuildConfig {
        published_languages: parse_list("en,fr,nl"),
        language_display_names: names(&[("en", "English"), ("fr", "Français"), ("nl", "Nederlands")]),
        ..remote_config()
    };
    let page = PageRequest::new("intro", "/build/html/14.0/fr");
    let urls = derive_alternate_urls(&page, &config);

    assert!(urls.alternate_versions.iter().all(|v| v.label != "Odoo 14"));
    assert!(urls.alternate_languages.iter().all(|l| l.label != "Français"));
    assert_eq!(urls.alternate_languages.len(), 2);
}

#[test]
fn unsupported_entries_are_skipped() {
    let config = BuildConfig {
        published_versions: parse_list("13.0,14.0,15.0"),
        published_languages: parse_list("fr,en,pt_BR"),
        ..remote_config()
    };
    let page = PageRequest::new("intro", "/build/html/14.0/fr");
    let urls = derive_alternate_urls(&page, &config);

    let versions: Vec<&str> = urls.alternate_versions.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(versions, vec!["Odoo 15"]);
    let languages: Vec<&str> = urls.alternate_languages.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(languages, vec!["English"]);
}

#[test]
fn unsupported_current_language_still_builds_urls() {
    let config = BuildConfig {
        current_language: Some("de".to_owned()),
        ..remote_config()
    };
    let page = PageRequest::new("intro", "/build/html/14.0/de");
    let urls = derive_alternate_urls(&page, &config);

    assert_eq!(urls.language_display_label, None);
    assert_eq!(urls.alternate_versions[0].url, "https://docs.x.com/15.0/de/intro.html");
}

#[test]
fn regional_locale_uses_primary_subtag() {
    let config = BuildConfig {
        published_languages: parse_list("fr,pt_BR"),
        language_display_names: names(&[("fr", "Français"), ("pt_BR", "Português (BR)")]),
        ..remote_config()
    };
    let page = PageRequest::new("intro", "/build/html/14.0/fr");
    let urls = derive_alternate_urls(&page, &config);

    assert_eq!(
        urls.alternate_languages,
        vec![AlternateLanguage {
            label: "Português (BR)".to_owned(),
            hreflang: "pt".to_owned(),
            url: "https://docs.x.com/14.0/pt_BR/intro.html".to_owned(),
        }]
    );
}

#[test]
fn version_alternates_follow_display_name_order() {
    let config = BuildConfig {
        current_version: Some("14.0".to_owned()),
        published_versions: parse_list("14.0,16.0,15.0"),
        version_display_names: names(&[("15.0", "Odoo 15"), ("14.0", "Odoo 14"), ("16.0", "Odoo 16")]),
        ..remote_config()
    };
    let page = PageRequest::new("intro", "/build/html/14.0/fr");
    let urls = derive_alternate_urls(&page, &config);

    let labels: Vec<&str> = urls.alternate_versions.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, vec!["Odoo 15", "Odoo 16"]);
}

#[test]
fn language_alternates_follow_allow_list_order() {
    let config = BuildConfig {
        current_language: Some("fr".to_owned()),
        published_languages: parse_list("nl,fr,en,de"),
        language_display_names: names(&[
            ("de", "Deutsch"),
            ("en", "English"),
            ("fr", "Français"),
            ("nl", "Nederlands"),
        ]),
        ..remote_config()
    };
    let page = PageRequest::new("intro", "/build/html/14.0/fr");
    let urls = derive_alternate_urls(&page, &config);

    let codes: Vec<&str> = urls.alternate_languages.iter().map(|l| l.hreflang.as_str()).collect();
    assert_eq!(codes, vec!["nl", "x-default", "de"]);
}

#[test]
fn context_receives_all_keys() {
    let page = PageRequest::new("intro", "/build/html/14.0/fr");
    let context = derive_alternate_urls(&page, &remote_config()).to_context();

    for key in [
        "canonical",
        "alternate_versions",
        "alternate_languages",
        "version_display_name",
        "language",
    ] {
        assert!(context.contains_key(key), "missing context key {key}");
    }
}
