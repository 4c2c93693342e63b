use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub whisper: WhisperSettings,
    pub llm: LlmSettings,
    pub search: SearchSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub api_key: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub environment: String,
    pub json_format: bool,
}

impl LoggingSettings {
    /// `LOG_FORMAT=json` (any casing) selects structured output; everything
    /// else stays human-readable.
    pub fn json_format_from(raw: Option<&str>) -> bool {
        raw.is_some_and(|value| value.eq_ignore_ascii_case("json"))
    }
}

impl Settings {
    /// Builds settings from the environment. Missing credentials are left
    /// empty here; the initialization supervisor reports them, so the server
    /// still starts and answers "not ready" instead of crashing.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            whisper: WhisperSettings {
                api_key: env_or("WHISPER_API_KEY", ""),
                base_url: std::env::var("WHISPER_BASE_URL").ok(),
                model: std::env::var("WHISPER_MODEL").ok(),
                language: std::env::var("WHISPER_LANGUAGE").ok(),
            },
            llm: LlmSettings {
                api_key: env_or("GROQ_API_KEY", ""),
                base_url: std::env::var("GROQ_BASE_URL").ok(),
                model: std::env::var("GROQ_MODEL").ok(),
                temperature: std::env::var("GROQ_TEMPERATURE")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(0.7),
            },
            search: SearchSettings {
                api_key: env_or("SERPER_API_KEY", ""),
                base_url: std::env::var("SERPER_BASE_URL").ok(),
            },
            logging: LoggingSettings {
                environment: env_or("APP_ENV", "development"),
                json_format: LoggingSettings::json_format_from(
                    std::env::var("LOG_FORMAT").ok().as_deref(),
                ),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
