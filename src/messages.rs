use std::str::FromStr;

/// Language of the alerts shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// User-facing alert texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub empty_question: &'static str,
    pub request_failed: &'static str,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                empty_question: "Please ask a question",
                request_failed: "An error occurred while processing the question",
            },
            Locale::Ru => Self {
                empty_question: "Пожалуйста, задайте вопрос",
                request_failed: "Во время обработки вопроса произошла ошибка",
            },
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
