pub const DEFAULT_TRANSCRIPT_LANGUAGE: &str = "en";
pub const DEFAULT_YTDLP_PROGRAM: &str = "yt-dlp";
pub const DEFAULT_YTDLP_RETRIES: u32 = 10;

pub const LANGS_ENV_VAR: &str = "YTFRAG_LANGS";
pub const YTDLP_ENV_VAR: &str = "YTFRAG_YTDLP";
pub const YTDLP_RETRIES_ENV_VAR: &str = "YTFRAG_YTDLP_RETRIES";

/// Knobs handed to the transcript and metadata collaborators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Transcript languages in order of preference.
    pub transcript_languages: Vec<String>,
    pub ytdlp_program: String,
    pub ytdlp_retries: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            transcript_languages: vec![DEFAULT_TRANSCRIPT_LANGUAGE.to_string()],
            ytdlp_program: DEFAULT_YTDLP_PROGRAM.to_string(),
            ytdlp_retries: DEFAULT_YTDLP_RETRIES,
        }
    }
}

impl LoaderConfig {
    /// Defaults overlaid with `YTFRAG_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(langs) = var(LANGS_ENV_VAR) {
            let langs = parse_languages(&langs);
            if !langs.is_empty() {
                self.transcript_languages = langs;
            }
        }
        if let Some(program) = var(YTDLP_ENV_VAR) {
            self.ytdlp_program = program;
        }
        if let Some(retries) = var(YTDLP_RETRIES_ENV_VAR).and_then(|s| s.parse().ok()) {
            self.ytdlp_retries = retries;
        }
        self
    }
}

/// Split a comma separated language list, dropping blanks.
pub fn parse_languages(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
