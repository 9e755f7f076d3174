/*!
 * primitive-ext Self-Test Program
 *
 * Runs the library against a set of known vectors and reports the outcome.
 *
 * - Test vectors come from an embedded JSON config, optionally replaced by
 *   the file named in `PRIMITIVE_EXT_TEST_CONFIG`
 * - Results are printed and, when `PRIMITIVE_EXT_RESULTS_DIR` is set, saved
 *   as `rust-results.json` in that directory
 * - Logging goes through `tracing`; set `RUST_LOG=debug` for details
 */

#![warn(clippy::all, clippy::pedantic)]
#![forbid(unsafe_code)]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use primitive_ext::{
    crypto::{self, HexCase},
    similarity_score, unordered_equal,
    utils::{bytes, strings, time},
};

/* Embedded default configuration */
const DEFAULT_CONFIG_JSON: &str = r#"{
  "tests": {
    "unorderedEqual": [
      { "a": ["test1", "test2", "test3"], "b": ["test3", "test1", "test2"], "expected": true },
      { "a": ["a", "a", "b"], "b": ["a", "b", "b"], "expected": false },
      { "a": ["x", "x"], "b": ["x"], "expected": false },
      { "a": [], "b": [], "expected": true }
    ],
    "similarity": [
      { "a": ["t1", "t2", "t3", "t4", "t5", "t6"], "b": ["w1", "w2", "w3", "t4", "t5", "t6"], "expected": 0.5 },
      { "a": ["t1", "t2", "dup", "dup"], "b": ["t1", "t2", "dup", "dup", "dup"], "expected": 1.0 },
      { "a": [], "b": [], "expected": 0.0 }
    ],
    "hashing": {
      "input": "test",
      "md5": "098f6bcd4621d373cade4e832627b4f6",
      "sha1": "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3",
      "sha256": "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
    },
    "bcrypt": { "input": "test string to hash", "wrong": "not the same string", "cost": 4 },
    "fileSize": [
      { "bytes": 0, "expected": "0 B" },
      { "bytes": 1536, "expected": "1.5 KB" },
      { "bytes": 20971520, "expected": "20 MB" }
    ],
    "base64": { "input": "Hello World", "padded": "SGVsbG8gV29ybGQ=", "unpadded": "SGVsbG8gV29ybGQ" },
    "email": { "valid": ["email@example.com"], "invalid": ["email@baddomain", "doubleat@@toomuch.com"] },
    "unixTime": { "seconds": 1556977020, "rfc3339": "2019-05-04T13:37:00.000+00:00" }
  }
}"#;

#[derive(Debug, Deserialize)]
struct UnorderedCase {
    a: Vec<String>,
    b: Vec<String>,
    expected: bool,
}

#[derive(Debug, Deserialize)]
struct SimilarityCase {
    a: Vec<String>,
    b: Vec<String>,
    expected: f64,
}

#[derive(Debug, Deserialize)]
struct FileSizeCase {
    bytes: u64,
    expected: String,
}

/* Result structures */
#[derive(Debug, Clone, Serialize)]
struct CheckResult {
    name: String,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Debug, Serialize)]
struct TestResults {
    library: String,
    version: String,
    timestamp: String,
    checks: Vec<CheckResult>,
    #[serde(rename = "allPassed")]
    all_passed: bool,
}

/* Configuration loader */
struct ConfigLoader {
    config: Value,
}

impl ConfigLoader {
    fn new(config_path: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(path) if Path::new(path).exists() => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Cannot open config file: {path}"))?;
                serde_json::from_str(&content).context("Failed to parse JSON configuration")?
            }
            // Fall back to embedded config if no file is given or it doesn't exist
            _ => serde_json::from_str(DEFAULT_CONFIG_JSON)
                .context("Failed to parse embedded configuration")?,
        };

        Ok(Self { config })
    }

    fn get_value(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.config, |current, key| current.get(key))
    }

    fn get_string(&self, path: &str) -> Option<String> {
        self.get_value(path)?.as_str().map(str::to_string)
    }

    fn get_typed<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self
            .get_value(path)
            .with_context(|| format!("Missing config key: {path}"))?;
        serde_json::from_value(value.clone()).with_context(|| format!("Malformed config key: {path}"))
    }
}

/* Main test runner */
struct SelfTestRunner {
    config: ConfigLoader,
    checks: Vec<CheckResult>,
}

impl SelfTestRunner {
    fn new() -> Result<Self> {
        let config_path = std::env::var("PRIMITIVE_EXT_TEST_CONFIG").ok();
        let config = ConfigLoader::new(config_path.as_deref())?;
        Ok(Self { config, checks: Vec::new() })
    }

    fn record(&mut self, name: impl Into<String>, passed: bool, detail: Option<String>) {
        let name = name.into();
        let status = if passed { "✅ PASS".green() } else { "❌ FAIL".red() };
        println!("  {status}: {name}");
        if let (false, Some(detail)) = (passed, detail.as_deref()) {
            println!("    {}", detail.red());
        }
        debug!("check {} passed={}", name, passed);
        self.checks.push(CheckResult { name, passed, detail });
    }

    fn run_all_tests(&mut self) -> Result<()> {
        println!("{}", "primitive-ext self-test".blue().bold());

        self.test_unordered_equal()?;
        self.test_similarity()?;
        self.test_hashing();
        self.test_bcrypt();
        self.test_file_size()?;
        self.test_base64();
        self.test_email()?;
        self.test_unix_time();

        Ok(())
    }

    fn test_unordered_equal(&mut self) -> Result<()> {
        let cases: Vec<UnorderedCase> = self.config.get_typed("tests.unorderedEqual")?;
        for (i, case) in cases.iter().enumerate() {
            let forward = unordered_equal(&case.a, &case.b);
            let backward = unordered_equal(&case.b, &case.a);
            let passed = forward == case.expected && backward == case.expected;
            self.record(
                format!("unorderedEqual[{i}]"),
                passed,
                Some(format!("expected {}, got {forward}/{backward}", case.expected)),
            );
        }
        Ok(())
    }

    fn test_similarity(&mut self) -> Result<()> {
        let cases: Vec<SimilarityCase> = self.config.get_typed("tests.similarity")?;
        for (i, case) in cases.iter().enumerate() {
            let score = similarity_score(&case.a, &case.b);
            let passed = (score - case.expected).abs() < 0.001;
            self.record(
                format!("similarity[{i}]"),
                passed,
                Some(format!("expected {}, got {score}", case.expected)),
            );
        }
        Ok(())
    }

    fn test_hashing(&mut self) {
        let input = self.config.get_string("tests.hashing.input").unwrap_or_default();
        let digests: [(&str, fn(&str, HexCase) -> String); 3] =
            [("md5", crypto::md5), ("sha1", crypto::sha1), ("sha256", crypto::sha256)];

        for (name, digest) in digests {
            let expected = self
                .config
                .get_string(&format!("tests.hashing.{name}"))
                .unwrap_or_default();
            let actual = digest(&input, HexCase::Lower);
            let passed = actual == expected && digest(&input, HexCase::Upper) == expected.to_uppercase();
            self.record(format!("hashing.{name}"), passed, Some(format!("got {actual}")));
        }
    }

    fn test_bcrypt(&mut self) {
        let input = self.config.get_string("tests.bcrypt.input").unwrap_or_default();
        let wrong = self.config.get_string("tests.bcrypt.wrong").unwrap_or_default();
        let cost = self
            .config
            .get_value("tests.bcrypt.cost")
            .and_then(Value::as_u64)
            .and_then(|c| u32::try_from(c).ok())
            .unwrap_or(crypto::DEFAULT_BCRYPT_COST);

        let plain = crypto::bcrypt_hash(&input, cost).and_then(|hash| {
            Ok(crypto::bcrypt_verify(&hash, &input)? && !crypto::bcrypt_verify(&hash, &wrong)?)
        });
        let enhanced = crypto::bcrypt_hash_enhanced(&input, cost).and_then(|hash| {
            Ok(crypto::bcrypt_verify_enhanced(&hash, &input)?
                && !crypto::bcrypt_verify_enhanced(&hash, &wrong)?)
        });

        for (name, outcome) in [("bcrypt", plain), ("bcrypt.enhanced", enhanced)] {
            match outcome {
                Ok(passed) => self.record(name, passed, Some("verify mismatch".to_string())),
                Err(e) => self.record(name, false, Some(e.to_string())),
            }
        }
    }

    fn test_file_size(&mut self) -> Result<()> {
        let cases: Vec<FileSizeCase> = self.config.get_typed("tests.fileSize")?;
        for case in cases {
            let actual = bytes::file_size_string(case.bytes);
            let passed = actual == case.expected;
            self.record(
                format!("fileSize[{}]", case.bytes),
                passed,
                Some(format!("expected {}, got {actual}", case.expected)),
            );
        }
        Ok(())
    }

    fn test_base64(&mut self) {
        let input = self.config.get_string("tests.base64.input").unwrap_or_default();
        let padded = self.config.get_string("tests.base64.padded").unwrap_or_default();
        let unpadded = self.config.get_string("tests.base64.unpadded").unwrap_or_default();

        let encoded = bytes::to_base64_string(input.as_bytes(), false);
        let trimmed = bytes::to_base64_string(input.as_bytes(), true);
        let decoded = bytes::from_base64_string(&trimmed)
            .ok()
            .and_then(|raw| bytes::utf8_get_string(&raw).ok());

        let url = bytes::to_base64_url_string(input.as_bytes());
        let url_decoded = bytes::from_base64_url_string(&url).ok();

        let passed = encoded == padded
            && trimmed == unpadded
            && decoded.as_deref() == Some(input.as_str())
            && url_decoded.as_deref() == Some(input.as_bytes());
        self.record("base64", passed, Some(format!("got {encoded} / {trimmed} / {url}")));
    }

    fn test_email(&mut self) -> Result<()> {
        let valid: Vec<String> = self.config.get_typed("tests.email.valid")?;
        let invalid: Vec<String> = self.config.get_typed("tests.email.invalid")?;

        let wrong: Vec<&String> = valid
            .iter()
            .filter(|email| !strings::is_valid_email(email))
            .chain(invalid.iter().filter(|email| strings::is_valid_email(email)))
            .collect();
        self.record("email", wrong.is_empty(), Some(format!("misclassified: {wrong:?}")));
        Ok(())
    }

    fn test_unix_time(&mut self) {
        let seconds = self
            .config
            .get_value("tests.unixTime.seconds")
            .and_then(Value::as_i64)
            .unwrap_or_default();
        let expected = self.config.get_string("tests.unixTime.rfc3339").unwrap_or_default();

        match time::from_unix_time_seconds(seconds) {
            Ok(dt) => {
                let actual = time::to_rfc3339_string(&dt);
                let passed = actual == expected && time::to_unix_time_seconds(&dt) == seconds;
                self.record("unixTime", passed, Some(format!("got {actual}")));
            }
            Err(e) => self.record("unixTime", false, Some(e.to_string())),
        }
    }

    fn results(&self) -> TestResults {
        TestResults {
            library: "primitive-ext".to_string(),
            version: primitive_ext::VERSION.to_string(),
            timestamp: time::to_rfc3339_string(&Utc::now()),
            checks: self.checks.clone(),
            all_passed: self.checks.iter().all(|c| c.passed),
        }
    }

    fn save_results(&self, results: &TestResults) -> Result<()> {
        let Ok(results_dir) = std::env::var("PRIMITIVE_EXT_RESULTS_DIR") else {
            return Ok(());
        };

        fs::create_dir_all(&results_dir)
            .with_context(|| format!("Failed to create results directory: {results_dir}"))?;

        let results_path = Path::new(&results_dir).join("rust-results.json");
        let json_output =
            serde_json::to_string_pretty(results).context("Failed to serialize results")?;
        fs::write(&results_path, json_output)
            .with_context(|| format!("Cannot create results file: {}", results_path.display()))?;

        info!("Results saved to {}", results_path.display());
        Ok(())
    }

    fn display_summary(results: &TestResults) {
        let passed = results.checks.iter().filter(|c| c.passed).count();
        let total = results.checks.len();
        let line = format!("Checks Passed: {passed}/{total}");
        if results.all_passed {
            println!("\n{}", line.green());
        } else {
            println!("\n{}", line.red());
            for check in results.checks.iter().filter(|c| !c.passed) {
                println!("  - {}", check.name);
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut runner = SelfTestRunner::new().context("Failed to initialize test runner")?;
    runner.run_all_tests().context("Test execution failed")?;

    let results = runner.results();
    runner.save_results(&results)?;
    SelfTestRunner::display_summary(&results);

    if !results.all_passed {
        std::process::exit(1);
    }
    Ok(())
}
