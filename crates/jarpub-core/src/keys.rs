//! Well-known property keys.
//!
//! Gradle project properties use camelCase and can also be supplied through
//! `ORG_GRADLE_PROJECT_<key>` environment variables. The test-run keys are
//! plain environment variables read verbatim.

/// Base URL of the GitLab instance, e.g. `https://gitlab.example.com`.
pub const GITLAB_URL: &str = "gitlabUrl";
/// Token with permission to publish to the GitLab package registry.
pub const GITLAB_PUBLISH_TOKEN: &str = "gitlabPublishToken";
/// Optional header name for the publish token (e.g. `Job-Token` on CI).
pub const GITLAB_PUBLISH_TOKEN_NAME: &str = "gitlabPublishTokenName";
/// Token used to read internal-only dependencies from the group registry.
pub const GITLAB_PRIVATE_TOKEN: &str = "gitlabPrivateToken";
/// Optional header name for the read token.
pub const GITLAB_TOKEN_NAME: &str = "gitlabTokenName";

pub const SIGNING_KEY_ID: &str = "signingKeyId";
/// Path to an ASCII-armored PGP private key.
pub const SIGNING_KEY_FILE: &str = "signingKeyFile";
pub const SIGNING_PASSWORD: &str = "signingPassword";

/// JDK major version to run tests with.
pub const TEST_JDK: &str = "TEST_JDK";
/// Run tests with the 32-bit JVM (`true` to enable).
pub const TEST_WITH_JAVA_X86: &str = "TEST_WITH_JAVA_X86";
/// Home of the 32-bit JDK, used when [`TEST_WITH_JAVA_X86`] is set.
pub const JAVA_HOME_X86: &str = "JAVA_HOME_X86";

/// Prefix Gradle strips from environment variables to form project properties.
pub const GRADLE_ENV_PREFIX: &str = "ORG_GRADLE_PROJECT_";

/// Keys also read from plain environment variables of the same name.
///
/// Everything else reaches the configuration from the environment only
/// through [`GRADLE_ENV_PREFIX`].
pub const ENV_KEYS: &[&str] = &[TEST_JDK, TEST_WITH_JAVA_X86, JAVA_HOME_X86];

/// Description of a property jarpub knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownKey {
    pub name: &'static str,
    pub secret: bool,
    pub purpose: &'static str,
}

/// Every property that influences resolution, in display order.
pub const KNOWN_KEYS: &[KnownKey] = &[
    KnownKey {
        name: GITLAB_URL,
        secret: false,
        purpose: "GitLab base URL",
    },
    KnownKey {
        name: GITLAB_PUBLISH_TOKEN,
        secret: true,
        purpose: "publish token",
    },
    KnownKey {
        name: GITLAB_PUBLISH_TOKEN_NAME,
        secret: false,
        purpose: "publish token header",
    },
    KnownKey {
        name: GITLAB_PRIVATE_TOKEN,
        secret: true,
        purpose: "dependency read token",
    },
    KnownKey {
        name: GITLAB_TOKEN_NAME,
        secret: false,
        purpose: "dependency token header",
    },
    KnownKey {
        name: SIGNING_KEY_ID,
        secret: false,
        purpose: "PGP key id",
    },
    KnownKey {
        name: SIGNING_KEY_FILE,
        secret: false,
        purpose: "PGP key file",
    },
    KnownKey {
        name: SIGNING_PASSWORD,
        secret: true,
        purpose: "PGP key passphrase",
    },
    KnownKey {
        name: TEST_JDK,
        secret: false,
        purpose: "test JDK version",
    },
    KnownKey {
        name: TEST_WITH_JAVA_X86,
        secret: false,
        purpose: "test on 32-bit JVM",
    },
    KnownKey {
        name: JAVA_HOME_X86,
        secret: false,
        purpose: "32-bit JDK home",
    },
];

/// Whether values of `key` must be masked in output.
pub fn is_secret(key: &str) -> bool {
    KNOWN_KEYS.iter().any(|k| k.secret && k.name == key)
}
