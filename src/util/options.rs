//! Workload configuration through environment variables.
//!
//! Defaults can be overridden with `CONTEND_`-prefixed environment
//! variables, for example `CONTEND_WORKERS=4
//! CONTEND_INCREMENTS_PER_WORKER=50000 cargo bench`. A value that does not
//! parse or does not validate warns on stderr and the default stays in
//! place; configuration never aborts a run.

use crate::harness::Workload;

/// The default number of increments each worker performs.
pub const DEFAULT_INCREMENTS_PER_WORKER: usize = 100_000;

/// Tunable knobs for the workloads driven by the benches, and by anything
/// else that wants an environment-driven [`Workload`].
pub struct Options {
    /// Number of worker threads driving one shared counter. Must be
    /// positive. Defaults to the number of CPUs.
    pub workers: usize,
    /// Number of increments each worker performs. Must be positive.
    pub increments_per_worker: usize,
}

impl Options {
    /// Set an option from its name (lower case, without the env var prefix)
    /// and an unparsed value. Returns false and leaves the option unchanged
    /// if the value cannot be parsed or fails validation.
    pub fn set_from_str(&mut self, s: &str, val: &str) -> bool {
        match s {
            "workers" => set_positive(&mut self.workers, s, val),
            "increments_per_worker" => set_positive(&mut self.increments_per_worker, s, val),
            _ => panic!("Invalid Options key"),
        }
    }

    /// The workload the current options describe.
    pub fn workload(&self) -> Workload {
        Workload::new(self.workers, self.increments_per_worker)
    }
}

fn set_positive(option: &mut usize, s: &str, val: &str) -> bool {
    if let Ok(parsed) = val.parse::<usize>() {
        let is_valid = parsed > 0;
        if is_valid {
            // Only set value if valid.
            *option = parsed;
        } else {
            eprintln!(
                "Warn: unable to set {}={:?}. Invalid value. Default value will be used.",
                s,
                val
            );
        }
        is_valid
    } else {
        eprintln!(
            "Warn: unable to set {}={:?}. Cant parse value. Default value will be used.",
            s,
            val
        );
        false
    }
}

impl Default for Options {
    fn default() -> Self {
        let mut options = Options {
            workers: num_cpus::get(),
            increments_per_worker: DEFAULT_INCREMENTS_PER_WORKER,
        };

        // If we have env vars that start with CONTEND_ and match any option
        // (such as CONTEND_WORKERS), we set the option to its value (if it
        // is a valid value). Otherwise, use the default value.
        const PREFIX: &str = "CONTEND_";
        for (key, val) in std::env::vars() {
            // strip the prefix, and get the lower case string
            if let Some(rest_of_key) = key.strip_prefix(PREFIX) {
                let lowercase: &str = &rest_of_key.to_lowercase();
                match lowercase {
                    "workers" | "increments_per_worker" => {
                        options.set_from_str(lowercase, &val);
                    }
                    _ => {}
                }
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_util::{serial_test, with_cleanup};

    #[test]
    fn no_env_var() {
        serial_test(|| {
            let options = Options::default();
            assert_eq!(options.workers, num_cpus::get());
            assert_eq!(options.increments_per_worker, DEFAULT_INCREMENTS_PER_WORKER);
        })
    }

    #[test]
    fn with_valid_env_var() {
        serial_test(|| {
            with_cleanup(
                || {
                    std::env::set_var("CONTEND_INCREMENTS_PER_WORKER", "4096");

                    let options = Options::default();
                    assert_eq!(options.increments_per_worker, 4096);
                },
                || {
                    std::env::remove_var("CONTEND_INCREMENTS_PER_WORKER");
                },
            )
        })
    }

    #[test]
    fn with_multiple_valid_env_vars() {
        serial_test(|| {
            with_cleanup(
                || {
                    std::env::set_var("CONTEND_WORKERS", "3");
                    std::env::set_var("CONTEND_INCREMENTS_PER_WORKER", "4096");

                    let options = Options::default();
                    assert_eq!(options.workers, 3);
                    assert_eq!(options.increments_per_worker, 4096);
                },
                || {
                    std::env::remove_var("CONTEND_WORKERS");
                    std::env::remove_var("CONTEND_INCREMENTS_PER_WORKER");
                },
            )
        })
    }

    #[test]
    fn with_invalid_env_var_value() {
        serial_test(|| {
            with_cleanup(
                || {
                    // invalid value, we cannot parse the value, so use the default value
                    std::env::set_var("CONTEND_WORKERS", "abc");

                    let options = Options::default();
                    assert_eq!(options.workers, num_cpus::get());
                },
                || {
                    std::env::remove_var("CONTEND_WORKERS");
                },
            )
        })
    }

    #[test]
    fn with_zero_env_var_value() {
        serial_test(|| {
            with_cleanup(
                || {
                    // zero parses but fails validation, so use the default value
                    std::env::set_var("CONTEND_WORKERS", "0");

                    let options = Options::default();
                    assert_eq!(options.workers, num_cpus::get());
                },
                || {
                    std::env::remove_var("CONTEND_WORKERS");
                },
            )
        })
    }

    #[test]
    fn with_invalid_env_var_key() {
        serial_test(|| {
            with_cleanup(
                || {
                    // invalid key, so nothing is set
                    std::env::set_var("CONTEND_ABC", "42");

                    let options = Options::default();
                    assert_eq!(options.increments_per_worker, DEFAULT_INCREMENTS_PER_WORKER);
                },
                || {
                    std::env::remove_var("CONTEND_ABC");
                },
            )
        })
    }

    #[test]
    fn workload_mirrors_the_options() {
        let options = Options {
            workers: 4,
            increments_per_worker: 100,
        };
        assert_eq!(options.workload(), Workload::new(4, 100));
    }
}
