// system-tests/src/config/schema.rs
// ============================================================================
// Module: Settings Schema
// Description: Declarative table of every environment-backed test setting.
// Purpose: Keep key, source variable, default, and coercion in one place.
// Dependencies: std
// ============================================================================

// ============================================================================
// SECTION: Constants
// ============================================================================

/// API version the tests target. Not overridable from the environment.
pub const API_VERSION: &str = "v1";

// ============================================================================
// SECTION: Keys
// ============================================================================

/// Keys for every resolved setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKey {
    /// Deployment label of the target environment.
    Env,
    /// Base URL of the PDF store API.
    BaseUrl,
    /// Base URL of the frontend served alongside the API.
    FrontendUrl,
    /// Whether browser sessions run headless.
    Headless,
    /// Pause inserted before each request, in milliseconds.
    SlowMo,
    /// Browser-level timeout, in milliseconds.
    E2eTimeout,
    /// Database URL used by the service under test.
    DatabaseUrl,
    /// Log filter for the test process.
    LogLevel,
    /// Route log output through the test harness capture.
    CaptureLogs,
    /// Run latency gates.
    EnablePerformanceTests,
    /// Run concurrent load tests.
    EnableStressTests,
    /// Run response shape checks.
    EnableContractTests,
    /// API key sent with every request.
    ApiKey,
    /// Delete uploaded files after a passing test.
    CleanupAfterTests,
    /// Keep uploaded files and artifacts after a failing test.
    PreserveFailedTestData,
    /// Per-request HTTP timeout, in seconds.
    TestTimeout,
    /// Retries for transient HTTP send failures.
    MaxRetries,
    /// Delay between HTTP retries, in seconds.
    RetryDelay,
    /// Latency budget for performance tests, in milliseconds.
    PerfMaxResponseMs,
    /// Concurrent uploads issued by stress tests.
    StressConcurrency,
}

impl SettingKey {
    /// Returns the canonical setting key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Env => "TEST_ENV",
            Self::BaseUrl => "TEST_BASE_URL",
            Self::FrontendUrl => "TEST_FRONTEND_URL",
            Self::Headless => "E2E_HEADLESS",
            Self::SlowMo => "E2E_SLOW_MO",
            Self::E2eTimeout => "E2E_TIMEOUT",
            Self::DatabaseUrl => "TEST_DATABASE_URL",
            Self::LogLevel => "TEST_LOG_LEVEL",
            Self::CaptureLogs => "CAPTURE_LOGS",
            Self::EnablePerformanceTests => "ENABLE_PERFORMANCE_TESTS",
            Self::EnableStressTests => "ENABLE_STRESS_TESTS",
            Self::EnableContractTests => "ENABLE_CONTRACT_TESTS",
            Self::ApiKey => "TEST_API_KEY",
            Self::CleanupAfterTests => "CLEANUP_AFTER_TESTS",
            Self::PreserveFailedTestData => "PRESERVE_FAILED_TEST_DATA",
            Self::TestTimeout => "TEST_TIMEOUT",
            Self::MaxRetries => "MAX_RETRIES",
            Self::RetryDelay => "RETRY_DELAY",
            Self::PerfMaxResponseMs => "PERF_MAX_RESPONSE_MS",
            Self::StressConcurrency => "STRESS_CONCURRENCY",
        }
    }
}

// ============================================================================
// SECTION: Schema Types
// ============================================================================

/// Conversion applied to a raw environment string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Value is used verbatim.
    Text,
    /// Exactly `true` is true; every other string is false.
    Bool,
    /// Base-10 signed integer; surrounding whitespace is ignored.
    Integer,
    /// Decimal floating point; surrounding whitespace is ignored.
    Float,
}

impl Coercion {
    /// Returns a short name for the accepted form, used in error messages.
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Float => "number",
        }
    }
}

/// Typed default used when the environment variable is absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// String default.
    Text(&'static str),
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Integer(i64),
    /// Floating point default.
    Float(f64),
}

/// One row of the settings schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingSpec {
    /// Key the resolved value is stored under.
    pub key: SettingKey,
    /// Environment variable consulted for an override.
    pub env_var: &'static str,
    /// Value used when the variable is absent.
    pub default: DefaultValue,
    /// Conversion applied to an override.
    pub coercion: Coercion,
    /// Value must not be written to artifacts or logs.
    pub secret: bool,
}

impl SettingSpec {
    /// Declares a setting whose environment variable matches its key.
    const fn new(key: SettingKey, default: DefaultValue, coercion: Coercion) -> Self {
        Self {
            key,
            env_var: key.as_str(),
            default,
            coercion,
            secret: false,
        }
    }

    /// Marks the setting as secret.
    const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }
}

// ============================================================================
// SECTION: Schema
// ============================================================================

/// Every setting the resolver knows about, in resolution order.
pub const SETTINGS: [SettingSpec; 20] = [
    SettingSpec::new(SettingKey::Env, DefaultValue::Text("local"), Coercion::Text),
    SettingSpec::new(
        SettingKey::BaseUrl,
        DefaultValue::Text("http://localhost:8000"),
        Coercion::Text,
    ),
    SettingSpec::new(
        SettingKey::FrontendUrl,
        DefaultValue::Text("http://localhost:5173"),
        Coercion::Text,
    ),
    SettingSpec::new(SettingKey::Headless, DefaultValue::Bool(true), Coercion::Bool),
    SettingSpec::new(SettingKey::SlowMo, DefaultValue::Integer(0), Coercion::Integer),
    SettingSpec::new(SettingKey::E2eTimeout, DefaultValue::Integer(30_000), Coercion::Integer),
    SettingSpec::new(
        SettingKey::DatabaseUrl,
        DefaultValue::Text("sqlite:///./test.db"),
        Coercion::Text,
    ),
    SettingSpec::new(SettingKey::LogLevel, DefaultValue::Text("INFO"), Coercion::Text),
    SettingSpec::new(SettingKey::CaptureLogs, DefaultValue::Bool(false), Coercion::Bool),
    SettingSpec::new(SettingKey::EnablePerformanceTests, DefaultValue::Bool(true), Coercion::Bool),
    SettingSpec::new(SettingKey::EnableStressTests, DefaultValue::Bool(false), Coercion::Bool),
    SettingSpec::new(SettingKey::EnableContractTests, DefaultValue::Bool(true), Coercion::Bool),
    SettingSpec::new(SettingKey::ApiKey, DefaultValue::Text("test-api-key"), Coercion::Text)
        .secret(),
    SettingSpec::new(SettingKey::CleanupAfterTests, DefaultValue::Bool(true), Coercion::Bool),
    SettingSpec::new(SettingKey::PreserveFailedTestData, DefaultValue::Bool(true), Coercion::Bool),
    SettingSpec::new(SettingKey::TestTimeout, DefaultValue::Integer(30), Coercion::Integer),
    SettingSpec::new(SettingKey::MaxRetries, DefaultValue::Integer(3), Coercion::Integer),
    SettingSpec::new(SettingKey::RetryDelay, DefaultValue::Float(1.0), Coercion::Float),
    SettingSpec::new(SettingKey::PerfMaxResponseMs, DefaultValue::Integer(1000), Coercion::Integer),
    SettingSpec::new(SettingKey::StressConcurrency, DefaultValue::Integer(10), Coercion::Integer),
];
