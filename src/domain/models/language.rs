use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
    Java,
    Cpp,
    Unknown,
}

impl Language {
    /// Detects the language from the file name suffix.
    ///
    /// The match is case-sensitive: `B.JAVA` is `Unknown`.
    pub fn detect(filename: &str) -> Self {
        if filename.ends_with(".py") {
            Language::Python
        } else if filename.ends_with(".java") {
            Language::Java
        } else if [".cpp", ".cc", ".cxx"]
            .iter()
            .any(|suffix| filename.ends_with(suffix))
        {
            Language::Cpp
        } else {
            Language::Unknown
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Language::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
