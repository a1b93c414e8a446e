//! Service and PHP-FPM process probing.
//!
//! [`ProcessProbe`] is the seam between the dashboard and the process
//! table: [`SystemProbe`] asks the operating system, [`FixtureProbe`]
//! answers from canned command lines in tests.
//!
//! The free functions here turn probe answers into a [`ServiceStatus`].
//! Probe failures (spawn errors, timeouts, bad exit codes) are logged and
//! reported as [`ServiceStatus::NotRunning`].

pub mod fixture;
pub mod status;
pub mod system;

pub use fixture::{process_name, FixtureProbe};
pub use status::ServiceStatus;
pub use system::{parse_ps_output, SystemProbe};

use crate::error::Result;

/// Read-only access to the process table.
pub trait ProcessProbe: Send + Sync {
    /// Whether at least one process whose name contains `name` is running.
    fn is_running(&self, name: &str) -> Result<bool>;

    /// Full command lines of the running processes.
    fn command_lines(&self) -> Result<Vec<String>>;
}

/// Whether a command line belongs to a PHP process of `version`.
///
/// The line must mention `php` and contain the version label verbatim;
/// the dot is literal, so `8.3` does not match `813`.
pub fn mentions_php_version(command_line: &str, version: &str) -> bool {
    command_line.contains("php") && command_line.contains(version)
}

/// Status of the process named `process_name`.
pub fn is_process_running(probe: &dyn ProcessProbe, process_name: &str) -> ServiceStatus {
    match probe.is_running(process_name) {
        Ok(running) => ServiceStatus::from_running(running),
        Err(e) => {
            tracing::warn!("Treating {} as not running: {}", process_name, e);
            ServiceStatus::NotRunning
        }
    }
}

/// Status of the PHP-FPM pool for `version`.
pub fn is_php_fpm_running(probe: &dyn ProcessProbe, version: &str) -> ServiceStatus {
    php_fpm_statuses(probe, std::slice::from_ref(&version))
        .pop()
        .map(|(_, status)| status)
        .unwrap_or(ServiceStatus::NotRunning)
}

/// Status of every PHP-FPM version, from a single process-table snapshot.
pub fn php_fpm_statuses<S: AsRef<str>>(
    probe: &dyn ProcessProbe,
    versions: &[S],
) -> Vec<(String, ServiceStatus)> {
    let lines = probe.command_lines().unwrap_or_else(|e| {
        tracing::warn!("Treating all PHP-FPM pools as not running: {}", e);
        Vec::new()
    });

    versions
        .iter()
        .map(|version| {
            let version = version.as_ref();
            let running = lines
                .iter()
                .any(|line| mentions_php_version(line, version));
            (version.to_string(), ServiceStatus::from_running(running))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> FixtureProbe {
        FixtureProbe::new()
            .with_process("nginx: master process /opt/homebrew/opt/nginx/bin/nginx -g daemon off;")
            .with_process("php-fpm: master process (/opt/homebrew/etc/php/8.3/php-fpm.conf)")
            .with_process("/opt/homebrew/opt/mailpit/bin/mailpit")
    }

    #[test]
    fn literal_dot_matching() {
        assert!(mentions_php_version("php-fpm: pool www (8.3)", "8.3"));
        assert!(!mentions_php_version("/usr/local/bin/php813-worker", "8.3"));
        assert!(!mentions_php_version("/usr/sbin/nginx 8.3", "8.3"));
    }

    #[test]
    fn named_services_follow_process_table() {
        let probe = stack();

        assert_eq!(is_process_running(&probe, "nginx"), ServiceStatus::Running);
        assert_eq!(is_process_running(&probe, "mailpit"), ServiceStatus::Running);
        assert_eq!(is_process_running(&probe, "mariadbd"), ServiceStatus::NotRunning);
    }

    #[test]
    fn php_fpm_follows_version_label() {
        let probe = stack();

        assert_eq!(is_php_fpm_running(&probe, "8.3"), ServiceStatus::Running);
        assert_eq!(is_php_fpm_running(&probe, "7.4"), ServiceStatus::NotRunning);
    }

    #[test]
    fn php_fpm_does_not_match_digits_without_dot() {
        let probe = FixtureProbe::new().with_process("/usr/local/bin/php813-worker --serve");

        assert_eq!(is_php_fpm_running(&probe, "8.3"), ServiceStatus::NotRunning);
    }

    #[test]
    fn php_fpm_statuses_keep_input_order() {
        let probe = stack();

        let statuses = php_fpm_statuses(&probe, &["8.3", "7.4"]);

        assert_eq!(
            statuses,
            [
                ("8.3".to_string(), ServiceStatus::Running),
                ("7.4".to_string(), ServiceStatus::NotRunning),
            ]
        );
    }

    #[test]
    fn probe_failure_is_not_running() {
        let probe = FixtureProbe::failing();

        assert_eq!(is_process_running(&probe, "nginx"), ServiceStatus::NotRunning);
        assert_eq!(is_php_fpm_running(&probe, "8.3"), ServiceStatus::NotRunning);
    }
}
