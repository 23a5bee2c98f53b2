/// This module provides a tasklet for removing stale fixture files from a
/// target directory.
pub mod clean;
