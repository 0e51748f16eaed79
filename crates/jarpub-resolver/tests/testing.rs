use std::path::PathBuf;

use jarpub_core::host::HostInfo;
use jarpub_core::properties::ConfigurationSet;
use jarpub_core::settings::TestSettings;
use jarpub_resolver::testing::{resolve_test_execution, select_jvm};
use jarpub_resolver::toolchain::{JdkVersion, JvmSelection};
use jarpub_util::errors::JarpubError;

const TREE: &str = "io.objectbox.tree.*";

fn linux() -> HostInfo {
    HostInfo::new("Linux")
}

#[test]
fn x86_flag_wins_over_everything() {
    let config = ConfigurationSet::from_pairs([
        ("TEST_WITH_JAVA_X86", "true"),
        ("JAVA_HOME_X86", r"C:\Program Files (x86)\Java\jdk1.8.0"),
        ("TEST_JDK", "17"),
    ]);
    let jvm = select_jvm(&config).unwrap();
    assert_eq!(
        jvm,
        JvmSelection::Executable {
            path: PathBuf::from(r"C:\Program Files (x86)\Java\jdk1.8.0\bin\java.exe")
        }
    );
}

#[test]
fn x86_flag_ignores_malformed_jdk_version() {
    let config = ConfigurationSet::from_pairs([
        ("TEST_WITH_JAVA_X86", "true"),
        ("JAVA_HOME_X86", r"C:\jdk-x86"),
        ("TEST_JDK", "seventeen"),
    ]);
    assert!(matches!(
        select_jvm(&config).unwrap(),
        JvmSelection::Executable { .. }
    ));
}

#[test]
fn x86_flag_without_home_is_an_error() {
    let config = ConfigurationSet::from_pairs([("TEST_WITH_JAVA_X86", "true")]);
    let err = select_jvm(&config).unwrap_err();
    assert!(matches!(err, JarpubError::Toolchain { .. }));
    assert!(err.to_string().contains("JAVA_HOME_X86"), "got: {err}");
}

#[test]
fn x86_flag_other_than_true_is_ignored() {
    let config = ConfigurationSet::from_pairs([
        ("TEST_WITH_JAVA_X86", "false"),
        ("JAVA_HOME_X86", r"C:\jdk-x86"),
        ("TEST_JDK", "11"),
    ]);
    assert_eq!(
        select_jvm(&config).unwrap(),
        JvmSelection::Toolchain {
            version: JdkVersion::new(11)
        }
    );
}

#[test]
fn test_jdk_selects_toolchain() {
    let config = ConfigurationSet::from_pairs([("TEST_JDK", "21")]);
    assert_eq!(
        select_jvm(&config).unwrap(),
        JvmSelection::Toolchain {
            version: JdkVersion::new(21)
        }
    );
}

#[test]
fn non_numeric_test_jdk_is_an_error() {
    let config = ConfigurationSet::from_pairs([("TEST_JDK", "temurin-17")]);
    let err = select_jvm(&config).unwrap_err();
    assert!(matches!(err, JarpubError::Toolchain { .. }));
    assert!(err.to_string().contains("TEST_JDK"), "got: {err}");
}

#[test]
fn no_override_uses_default() {
    let config = ConfigurationSet::default();
    assert_eq!(select_jvm(&config).unwrap(), JvmSelection::Default);
}

#[test]
fn tree_tests_excluded_off_linux() {
    let config = ConfigurationSet::default();
    let settings = TestSettings::default();
    for os in ["Windows 10", "Mac OS X", "FreeBSD"] {
        let test =
            resolve_test_execution(&config, &settings, &HostInfo::new(os), &[]).unwrap();
        assert!(test.filter.excludes_pattern(TREE), "{os}");
        assert!(!test.filter.matches("io.objectbox.tree.TreeTest"), "{os}");
        assert!(test.filter.matches("io.objectbox.BoxStoreTest"), "{os}");
    }
}

#[test]
fn tree_tests_included_on_linux() {
    let config = ConfigurationSet::default();
    let settings = TestSettings::default();
    for os in ["Linux", "linux", "GNU/Linux"] {
        let test =
            resolve_test_execution(&config, &settings, &HostInfo::new(os), &[]).unwrap();
        assert!(test.filter.exclude.is_empty(), "{os}");
        assert!(test.filter.matches("io.objectbox.tree.TreeTest"), "{os}");
    }
}

#[test]
fn include_patterns_are_carried() {
    let config = ConfigurationSet::default();
    let include = vec!["io.objectbox.query.*".to_string()];
    let test =
        resolve_test_execution(&config, &TestSettings::default(), &linux(), &include).unwrap();
    assert_eq!(test.filter.include, include);
    assert!(test.filter.matches("io.objectbox.query.QueryTest"));
    assert!(!test.filter.matches("io.objectbox.BoxTest"));
}

#[test]
fn custom_linux_only_patterns() {
    let settings = TestSettings {
        linux_only: vec!["com.acme.native.*".to_string()],
    };
    let test = resolve_test_execution(
        &ConfigurationSet::default(),
        &settings,
        &HostInfo::new("Windows 11"),
        &[],
    )
    .unwrap();
    assert_eq!(test.filter.exclude, vec!["com.acme.native.*"]);
    assert!(test.filter.matches("io.objectbox.tree.TreeTest"));
}

#[test]
fn resolution_error_propagates_from_jvm_selection() {
    let config = ConfigurationSet::from_pairs([("TEST_JDK", "x")]);
    assert!(resolve_test_execution(&config, &TestSettings::default(), &linux(), &[]).is_err());
}
