mod supported_languages;

pub use supported_languages::SupportedLanguages;
