use serde::Serialize;

/// Programming languages the downstream scanner knows how to analyze.
///
/// The variant set is the complete supported vocabulary; the serialized form
/// is the exact name GitHub's linguist reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    Go,
    Python,
    Dockerfile,
    Java,
    TypeScript,
    JavaScript,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 6] = [
        Language::Go,
        Language::Python,
        Language::Dockerfile,
        Language::Java,
        Language::TypeScript,
        Language::JavaScript,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::Python => "Python",
            Language::Dockerfile => "Dockerfile",
            Language::Java => "Java",
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Maps a language name as reported by GitHub. Matching is exact and
    /// case-sensitive; unknown names yield `None`.
    pub fn from_github_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.as_str() == name)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
