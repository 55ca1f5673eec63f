use crate::config::Config;
use crate::error::EvalError;
use crate::rubric::{self, RubricVariant};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs, ResponseFormat,
    },
};

/// Client for the external analysis model. Holds the connection settings for
/// the process lifetime; one instance serves every request.
pub struct AnalysisClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f64,
}

impl AnalysisClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(&config.api_base);

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Send the built instruction to the model and return the raw response
    /// text. Exactly one outbound call; failures are terminal for the
    /// attempt and are never retried here.
    pub async fn request_analysis(
        &self,
        rubric: RubricVariant,
        instruction: &str,
    ) -> Result<String, EvalError> {
        let request = self.build_request(rubric, instruction)?;
        let response = self.client.chat().create(request).await?;

        let content = match response.choices.first() {
            Some(choice) => choice.message.content.clone().unwrap_or_default(),
            None => String::new(),
        };

        if content.trim().is_empty() {
            return Err(EvalError::EmptyResponse);
        }

        Ok(content)
    }

    /// Build the two-message exchange: the evaluator persona as the system
    /// role and the instruction as the user role, constrained to a single
    /// JSON object response.
    fn build_request(
        &self,
        rubric: RubricVariant,
        instruction: &str,
    ) -> Result<CreateChatCompletionRequest, EvalError> {
        let system_message = ChatCompletionRequestSystemMessageArgs::default()
            .content(rubric::system_prompt(rubric).to_string())
            .build()?
            .into();

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(instruction.to_string())
            .build()?
            .into();

        Ok(CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([system_message, user_message])
            .temperature(self.temperature as f32)
            .response_format(ResponseFormat::JsonObject)
            .build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(api_base: String) -> Config {
        Config {
            api_key: "sk-test".to_string(),
            model: "gpt-4".to_string(),
            temperature: 0.3,
            api_base,
            app_title: "test".to_string(),
            debug: false,
        }
    }

    fn completion_body(content: &str) -> String {
        serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 1700000000u32,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
        })
        .to_string()
    }

    #[test]
    fn test_build_request_carries_model_and_temperature() {
        let client = AnalysisClient::new(&test_config("http://localhost:9".to_string()));
        let request = client
            .build_request(RubricVariant::Advanced, "instruction")
            .unwrap();

        assert_eq!(request.model, "gpt-4");
        assert_eq!(request.temperature, Some(0.3));
        assert_eq!(request.messages.len(), 2);
        assert!(matches!(
            request.response_format,
            Some(ResponseFormat::JsonObject)
        ));
    }

    #[tokio::test]
    async fn test_request_analysis_returns_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(r#"{"skor": 82}"#))
            .create_async()
            .await;

        let client = AnalysisClient::new(&test_config(server.url()));
        let content = client
            .request_analysis(RubricVariant::Advanced, "instruction")
            .await
            .unwrap();

        assert_eq!(content, r#"{"skor": 82}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_analysis_api_rejection() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "param": null, "code": "invalid_api_key"}}"#,
            )
            .create_async()
            .await;

        let client = AnalysisClient::new(&test_config(server.url()));
        let result = client
            .request_analysis(RubricVariant::Basic, "instruction")
            .await;

        assert!(matches!(result, Err(EvalError::Api(m)) if m.contains("API key")));
    }

    #[tokio::test]
    async fn test_request_analysis_blank_content_is_empty_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("  \n"))
            .create_async()
            .await;

        let client = AnalysisClient::new(&test_config(server.url()));
        let result = client
            .request_analysis(RubricVariant::Advanced, "instruction")
            .await;

        assert!(matches!(result, Err(EvalError::EmptyResponse)));
    }
}
