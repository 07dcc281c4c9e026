//! Launchable-file classification

/// Length every launchable suffix has, dot included
pub const SUFFIX_LEN: usize = 4;

/// Classifies filenames as launchable programs by suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableFilter {
    suffixes: Vec<String>,
}

impl ExecutableFilter {
    /// Creates a filter; the first suffix is the primary one
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `filename` names a launchable program
    ///
    /// The name must be at least [`SUFFIX_LEN`] bytes long and end with one
    /// of the suffixes, compared without regard to ASCII case.
    pub fn is_executable(&self, filename: &str) -> bool {
        let bytes = filename.as_bytes();
        if bytes.len() < SUFFIX_LEN {
            return false;
        }
        self.suffixes.iter().any(|suffix| {
            let suffix = suffix.as_bytes();
            bytes.len() >= suffix.len()
                && bytes[bytes.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
        })
    }

    /// Suffix appended to shell command names
    pub fn primary_suffix(&self) -> &str {
        self.suffixes.first().map(String::as_str).unwrap_or_default()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for ExecutableFilter {
    fn default() -> Self {
        Self::new([".elf", ".bin"])
    }
}
