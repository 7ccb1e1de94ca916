use serde::Serialize;

pub const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Clone, Debug, Serialize)]
pub struct Example {
    pub question: &'static str,
    pub about_me: &'static str,
}

/// Declarative description of the chat widget, rendered by the page at load.
#[derive(Clone, Debug, Serialize)]
pub struct UiConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub question_label: &'static str,
    pub question_placeholder: &'static str,
    pub about_me_label: &'static str,
    pub default_about_me: &'static str,
    pub clear_label: &'static str,
    pub examples: Vec<Example>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Your Personal Financial Assistant",
            description: "Ask me any financial or crypto market questions, and I will do my best to answer them.",
            question_label: "Financial question",
            question_placeholder: "Ask me a financial question",
            about_me_label: "About me",
            default_about_me: "I am a student and I have some money that I want to invest.",
            clear_label: "Clear",
            examples: vec![
                Example {
                    question: "What's your opinion on investing in startup companies?",
                    about_me: "I am a 30 year old graphic designer. I want to invest in something with potential for high returns.",
                },
                Example {
                    question: "What's your opinion on investing in AI-related companies?",
                    about_me: "I'm a 25 year old entrepreneur interested in emerging technologies. I'm willing to take calculated risks for potential high returns.",
                },
                Example {
                    question: "Do you think advancements in gene therapy are impacting biotech company valuations?",
                    about_me: "I'm a 31 year old scientist. I'm curious about the potential of biotech investments.",
                }
            ],
        }
    }
}
