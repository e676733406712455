//! One-shot diagnostic: print the identifier of the host's default audio
//! input device as a decimal integer, or the failure status on stderr.
//!
//! Takes no arguments and no flags. Exit code 0 on success (including the
//! "no default device" identifier 0), 1 on failure. Process termination
//! happens only here; the library layers propagate `Result` to the caller.

use std::io::Write;

use micprobe_core::{AudioHost, DeviceQuery};
use micprobe_coreaudio::SystemHost;

/// Run one query against `host`, writing the outcome to the given streams.
/// Returns the process exit code so tests can drive this without spawning.
fn run<H: AudioHost>(host: H, out: &mut impl Write, err: &mut impl Write) -> i32 {
    let query = DeviceQuery::new(host);
    match query.default_input_device() {
        Ok(device) => {
            if device.is_unset() {
                tracing::debug!("no default input device configured");
            }
            let _ = writeln!(out, "{device}");
            0
        }
        Err(e) => {
            // Raw host status when there is one, otherwise the error text.
            match e.status() {
                Some(status) => {
                    let _ = writeln!(err, "Error: {status}");
                }
                None => {
                    let _ = writeln!(err, "Error: {e}");
                }
            }
            1
        }
    }
}

fn main() {
    // Logs go to stderr so stdout stays machine-readable.
    #[cfg(debug_assertions)]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    #[cfg(not(debug_assertions))]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let code = run(
        SystemHost::new(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use micprobe_core::{DeviceId, QueryError};

    struct MockHost {
        device: Result<u32, i32>,
    }

    impl AudioHost for MockHost {
        fn default_input_device(&self) -> Result<DeviceId, QueryError> {
            self.device.map(DeviceId::new).map_err(QueryError::Host)
        }

        fn nominal_sample_rate(&self, _device: DeviceId) -> Result<f64, QueryError> {
            Ok(48000.0)
        }
    }

    #[test]
    fn test_success_prints_decimal_id_and_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(MockHost { device: Ok(7) }, &mut out, &mut err);
        assert_eq!(code, 0);
        assert_eq!(out, b"7\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_unset_device_still_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(MockHost { device: Ok(0) }, &mut out, &mut err);
        assert_eq!(code, 0);
        assert_eq!(out, b"0\n");
    }

    #[test]
    fn test_failure_prints_status_to_stderr_and_exits_one() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(MockHost { device: Err(-50) }, &mut out, &mut err);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, b"Error: -50\n");
    }

    struct UnsupportedHost;

    impl AudioHost for UnsupportedHost {
        fn default_input_device(&self) -> Result<DeviceId, QueryError> {
            Err(QueryError::PlatformNotSupported("test platform".to_string()))
        }

        fn nominal_sample_rate(&self, _device: DeviceId) -> Result<f64, QueryError> {
            Err(QueryError::PlatformNotSupported("test platform".to_string()))
        }
    }

    #[test]
    fn test_non_host_errors_print_their_message() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(UnsupportedHost, &mut out, &mut err);
        assert_eq!(code, 1);
        let text = String::from_utf8(err).unwrap();
        assert!(text.starts_with("Error: "));
        assert!(text.contains("test platform"));
    }
}
