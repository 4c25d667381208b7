use crate::remote::prompt::{SYSTEM_PROMPT, user_message};
use crate::remote::report_parser::parse_report;
use crate::{ANALYZE_IMAGE, GatewayError, RemoteFunction, Result as GatewayErrorResult};

use async_trait::async_trait;
use log::{debug, error, info};
use mv_config::GatewayConfig;
use mv_core::{AnalysisReport, AnalyzeRequest, Envelope};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// `analyze-image` backed by an OpenAI-compatible chat completions gateway
pub struct GatewayAnalyzer {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    api_key_env: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl GatewayAnalyzer {
    /// Build from config, reading the API key from the configured env var
    pub fn from_config(config: &GatewayConfig) -> GatewayErrorResult<Self> {
        Self::new(config, config.api_key())
    }

    /// Build with an explicit API key
    ///
    /// A missing key is reported per request, not here.
    pub fn new(config: &GatewayConfig, api_key: Option<String>) -> GatewayErrorResult<Self> {
        let client = ReqwestClient::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key_env: config.api_key_env.clone(),
            api_key,
            client,
        })
    }

    /// Run one analysis against the gateway
    pub async fn analyze(&self, request: &AnalyzeRequest) -> GatewayErrorResult<AnalysisReport> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::missing_api_key(&self.api_key_env))?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
                },
                ChatMessage {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text {
                            text: user_message(request),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: request.image.clone(),
                            },
                        },
                    ]),
                },
            ],
            temperature: self.temperature,
        };

        info!(
            "Analyzing {} image for '{}' with {}",
            request.imaging_type, request.patient_name, self.model
        );

        let response = self
            .client
            .post(format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("AI gateway error: {} {}", status.as_u16(), text);
            return Err(GatewayError::from_status(status.as_u16()));
        }

        let text = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&text)?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(GatewayError::empty_response)?;

        debug!("AI gateway answered with {} characters", content.len());
        Ok(parse_report(&content))
    }

    /// Dispatch a named function call; only `analyze-image` exists.
    pub async fn call(
        &self,
        name: &str,
        request: &AnalyzeRequest,
    ) -> GatewayErrorResult<AnalysisReport> {
        if name != ANALYZE_IMAGE {
            return Err(GatewayError::unknown_function(name));
        }
        self.analyze(request).await
    }
}

#[async_trait]
impl RemoteFunction for GatewayAnalyzer {
    async fn invoke(&self, name: &str, request: &AnalyzeRequest) -> Envelope<AnalysisReport> {
        match self.call(name, request).await {
            Ok(report) => Envelope::ok(report),
            Err(e) => {
                error!("analyze-image failed: {}", e);
                Envelope::err(e.user_message())
            }
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
