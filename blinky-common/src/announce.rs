// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Startup announcement printed by the images that have a console.

use core::fmt;

/// Placeholder the project generator replaces with the project name.
pub const PROJECT_NAME_TOKEN: &str = "{{PROJECT_NAME}}";

/// Formats as `<project-name> starting...`.
#[derive(Debug, Clone, Copy)]
pub struct Announcement<'a>(pub &'a str);

impl fmt::Display for Announcement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} starting...", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Announcement<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str} starting...", self.0)
    }
}

/// False while `name` is empty or still carries the generator token.
pub fn is_substituted(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(PROJECT_NAME_TOKEN)
}

/// Pick the project name baked into an image: the build-time environment
/// value, else the generator-substituted file, skipping any candidate that
/// is empty or still the raw token. `None` means the caller falls back to
/// its package name.
pub fn resolve_project_name<'a>(env: Option<&'a str>, file: Option<&'a str>) -> Option<&'a str> {
    [env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| is_substituted(name))
}
