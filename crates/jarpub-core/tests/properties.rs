use std::collections::BTreeMap;
use std::io::Write;

use jarpub_core::properties::{
    load_properties_file, parse_override, ConfigurationSet, PropertySource,
};
use tempfile::NamedTempFile;

fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn load_properties_file_with_comments_and_separators() {
    let mut tmp = NamedTempFile::new().unwrap();
    write!(
        tmp,
        "# comment line\n\
         gitlabUrl=https://gitlab.example.com\n\
         \n\
         ! bang comment\n\
         signingKeyId : ABCD1234\n\
         kotlinVersion  =  1.9.24\n\
         emptyKey\n"
    )
    .unwrap();
    tmp.flush().unwrap();

    let props = load_properties_file(tmp.path()).unwrap();
    assert_eq!(
        props.get("gitlabUrl"),
        Some(&"https://gitlab.example.com".to_string())
    );
    assert_eq!(props.get("signingKeyId"), Some(&"ABCD1234".to_string()));
    assert_eq!(props.get("kotlinVersion"), Some(&"1.9.24".to_string()));
    assert_eq!(props.get("emptyKey"), Some(&String::new()));
    assert_eq!(props.len(), 4);
}

fn load_str(content: &str) -> BTreeMap<String, String> {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(content.as_bytes()).unwrap();
    tmp.flush().unwrap();
    load_properties_file(tmp.path()).unwrap()
}

#[test]
fn load_properties_file_decodes_escaped_url() {
    let props = load_str("gitlabUrl=https\\://gitlab.example.com\n");
    assert_eq!(
        props.get("gitlabUrl").map(String::as_str),
        Some("https://gitlab.example.com")
    );
}

#[test]
fn load_properties_file_decodes_windows_path() {
    let props = load_str(r"signingKeyFile=C:\\keys\\release.asc");
    assert_eq!(
        props.get("signingKeyFile").map(String::as_str),
        Some(r"C:\keys\release.asc")
    );
}

#[test]
fn load_properties_file_joins_continued_lines() {
    let props = load_str(
        "org.gradle.jvmargs=-Xmx2g \\\n    -Dfile.encoding=UTF-8\nsigningKeyId=ABCD1234\n",
    );
    assert_eq!(
        props.get("org.gradle.jvmargs").map(String::as_str),
        Some("-Xmx2g -Dfile.encoding=UTF-8")
    );
    assert!(!props.contains_key("-Dfile.encoding"));
    assert_eq!(props.len(), 2);
}

#[test]
fn load_properties_file_even_backslashes_do_not_continue() {
    let props = load_str("JAVA_HOME_X86=C:\\\\jdk\\\\\nTEST_JDK=17\n");
    assert_eq!(
        props.get("JAVA_HOME_X86").map(String::as_str),
        Some(r"C:\jdk\")
    );
    assert_eq!(props.get("TEST_JDK").map(String::as_str), Some("17"));
}

#[test]
fn load_properties_file_comment_lines_do_not_continue() {
    let props = load_str("# trailing backslash \\\nTEST_JDK=17\n");
    assert_eq!(props.get("TEST_JDK").map(String::as_str), Some("17"));
    assert_eq!(props.len(), 1);
}

#[test]
fn load_properties_file_escaped_key_and_unicode() {
    let props = load_str("pom\\ name=Object\\u0042ox\\tJava\n");
    assert_eq!(
        props.get("pom name").map(String::as_str),
        Some("ObjectBox\tJava")
    );
}

#[test]
fn load_properties_file_rejects_malformed_unicode_escape() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"gitlabUrl=\\u12G4\n").unwrap();
    tmp.flush().unwrap();
    let err = load_properties_file(tmp.path()).unwrap_err();
    assert!(err.to_string().contains("Malformed"));
}

#[test]
fn load_properties_file_nonexistent_path_returns_empty_map() {
    let path = std::path::Path::new("/nonexistent/path/to/gradle.properties");
    let props = load_properties_file(path).unwrap();
    assert!(props.is_empty());
}

#[test]
fn parse_override_splits_on_first_equals() {
    let (k, v) = parse_override("gitlabUrl=https://host/?a=b").unwrap();
    assert_eq!(k, "gitlabUrl");
    assert_eq!(v, "https://host/?a=b");
}

#[test]
fn parse_override_rejects_missing_equals() {
    assert!(parse_override("gitlabUrl").is_err());
}

#[test]
fn parse_override_rejects_missing_name() {
    assert!(parse_override("=value").is_err());
}

#[test]
fn blank_values_are_absent() {
    let config = ConfigurationSet::from_pairs([("gitlabUrl", ""), ("signingKeyId", "   ")]);
    assert_eq!(config.get("gitlabUrl"), None);
    assert!(!config.contains("signingKeyId"));
    assert!(config.is_empty());
    assert_eq!(config.source("gitlabUrl"), None);
}

#[test]
fn is_true_requires_exact_lowercase() {
    let config = ConfigurationSet::from_pairs([("A", "true"), ("B", "TRUE"), ("C", "1")]);
    assert!(config.is_true("A"));
    assert!(!config.is_true("B"));
    assert!(!config.is_true("C"));
    assert!(!config.is_true("missing"));
}

#[test]
fn layers_override_in_precedence_order() {
    let mut file = BTreeMap::new();
    file.insert("gitlabUrl".to_string(), "https://from-file".to_string());
    file.insert("signingKeyId".to_string(), "FILEKEY".to_string());
    file.insert("TEST_JDK".to_string(), "11".to_string());

    let config = ConfigurationSet::builder()
        .file_properties(file)
        .environment(env(&[
            ("ORG_GRADLE_PROJECT_gitlabUrl", "https://from-env"),
            ("TEST_JDK", "17"),
        ]))
        .overrides([("TEST_JDK", "21")])
        .build();

    assert_eq!(config.get("gitlabUrl"), Some("https://from-env"));
    assert_eq!(
        config.source("gitlabUrl"),
        Some(PropertySource::GradleEnvironment)
    );
    assert_eq!(config.get("signingKeyId"), Some("FILEKEY"));
    assert_eq!(config.source("signingKeyId"), Some(PropertySource::File));
    assert_eq!(config.get("TEST_JDK"), Some("21"));
    assert_eq!(config.source("TEST_JDK"), Some(PropertySource::CommandLine));
}

#[test]
fn plain_variables_only_supply_test_run_keys() {
    let config = ConfigurationSet::builder()
        .environment(env(&[
            ("gitlabUrl", "https://gitlab.example.com"),
            ("gitlabPublishToken", "verbatim"),
            ("signingPassword", "hunter2"),
            ("JAVA_HOME_X86", r"C:\jdk-x86"),
        ]))
        .build();
    assert!(!config.contains("gitlabUrl"));
    assert!(!config.contains("gitlabPublishToken"));
    assert!(!config.contains("signingPassword"));
    assert_eq!(config.get("JAVA_HOME_X86"), Some(r"C:\jdk-x86"));
    assert_eq!(
        config.source("JAVA_HOME_X86"),
        Some(PropertySource::Environment)
    );
    assert_eq!(config.len(), 1);
}

#[test]
fn gradle_prefix_beats_verbatim_variable() {
    let config = ConfigurationSet::builder()
        .environment(env(&[
            ("ORG_GRADLE_PROJECT_TEST_JDK", "21"),
            ("TEST_JDK", "17"),
            ("ORG_GRADLE_PROJECT_gitlabPublishToken", "prefixed"),
        ]))
        .build();
    assert_eq!(config.get("TEST_JDK"), Some("21"));
    assert_eq!(config.get("gitlabPublishToken"), Some("prefixed"));
    assert_eq!(
        config.source("gitlabPublishToken"),
        Some(PropertySource::GradleEnvironment)
    );
}

#[test]
fn bare_gradle_prefix_is_ignored() {
    let config = ConfigurationSet::builder()
        .environment(env(&[("ORG_GRADLE_PROJECT_", "x")]))
        .build();
    assert!(config.is_empty());
}

#[test]
fn debug_output_hides_values() {
    let config = ConfigurationSet::from_pairs([("gitlabPublishToken", "glpat-secret")]);
    let debug = format!("{config:?}");
    assert!(debug.contains("gitlabPublishToken"));
    assert!(!debug.contains("glpat-secret"));
}

#[test]
fn user_file_overrides_build_file() {
    let mut build = BTreeMap::new();
    build.insert("gitlabUrl".to_string(), "https://build".to_string());
    let mut user = BTreeMap::new();
    user.insert("gitlabUrl".to_string(), "https://user".to_string());

    let config = ConfigurationSet::builder()
        .file_properties(build)
        .user_file_properties(user)
        .build();
    assert_eq!(config.get("gitlabUrl"), Some("https://user"));
    assert_eq!(config.source("gitlabUrl"), Some(PropertySource::UserFile));
}
