use rand::distr::{Alphanumeric, SampleString};

pub mod item;

pub mod job;

pub mod step;

/// Generates a random name consisting of alphanumeric characters.
///
/// Used as a fallback when a job is built without an explicit name.
fn build_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}
