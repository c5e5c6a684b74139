use std::sync::Arc;

use rest_client::{Params, Transport};

use super::{send, CommandParams, Gender, SentenceLocale};
use crate::Result;

/// Starts collecting DTMF digits on a call, with an optional prompt
///
/// The request returns immediately. Results are read later through
/// [`Call::gather`](crate::Call::gather) or delivered to the call's
/// callback URL by the service.
///
/// ```rust,ignore
/// call.gather_builder()?
///     .max_digits(5)
///     .prompt_file_url("https://example.com/menu.wav")
///     .create()?;
/// ```
#[derive(Debug)]
#[must_use = "builders do nothing until create() is called"]
pub struct GatherBuilder {
    transport: Arc<dyn Transport>,
    uri: String,
    params: CommandParams,
    prompt: CommandParams,
}

impl GatherBuilder {
    pub(crate) fn new(transport: Arc<dyn Transport>, uri: String) -> Self {
        Self {
            transport,
            uri,
            params: CommandParams::new(),
            prompt: CommandParams::new(),
        }
    }

    pub fn max_digits(mut self, max_digits: u32) -> Self {
        self.params.set_number("maxDigits", max_digits);
        self
    }

    /// Seconds to wait between digits
    pub fn inter_digit_timeout(mut self, seconds: u32) -> Self {
        self.params.set_number("interDigitTimeout", seconds);
        self
    }

    pub fn terminating_digits(mut self, digits: impl Into<String>) -> Self {
        self.params.set_text("terminatingDigits", digits);
        self
    }

    pub fn suppress_dtmf(mut self, suppress: bool) -> Self {
        self.params.set_flag("suppressDtmf", suppress);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.params.set_text("tag", tag);
        self
    }

    pub fn prompt_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.prompt.set_text("sentence", sentence);
        self
    }

    pub fn prompt_gender(mut self, gender: Gender) -> Self {
        self.prompt.set_text("gender", gender.as_str());
        self
    }

    pub fn prompt_locale(mut self, locale: SentenceLocale) -> Self {
        self.prompt.set_text("locale", locale.rest_value());
        self
    }

    pub fn prompt_file_url(mut self, file_url: impl Into<String>) -> Self {
        self.prompt.set_text("fileUrl", file_url);
        self
    }

    pub fn prompt_loop_enabled(mut self, loop_enabled: bool) -> Self {
        self.prompt.set_flag("loopEnabled", loop_enabled);
        self
    }

    pub fn prompt_bargeable(mut self, bargeable: bool) -> Self {
        self.prompt.set_flag("bargeable", bargeable);
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Request body: flat gather settings plus the `prompt` group, if any
    pub fn body(&self) -> Params {
        let mut body = self.params.clone();
        body.set_group("prompt", self.prompt.clone());
        body.into_map()
    }

    /// Start the gather. Fire-and-forget: no refresh follows.
    pub fn create(self) -> Result<()> {
        send(&self.transport, &self.uri, &self.body())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_client::RestClient;
    use rest_client::RestClientConfig;
    use serde_json::json;

    fn builder() -> GatherBuilder {
        let transport: Arc<dyn Transport> = Arc::new(RestClient::new(&RestClientConfig::new("u-1")));
        GatherBuilder::new(transport, "calls/c-1/gather".to_string())
    }

    #[test]
    fn test_body_with_prompt_group() {
        let body = builder()
            .max_digits(5)
            .inter_digit_timeout(3)
            .terminating_digits("#")
            .suppress_dtmf(true)
            .prompt_sentence("Hello")
            .prompt_bargeable(false)
            .body();

        assert_eq!(
            serde_json::Value::Object(body),
            json!({
                "maxDigits": "5",
                "interDigitTimeout": "3",
                "terminatingDigits": "#",
                "suppressDtmf": "true",
                "prompt": { "sentence": "Hello", "bargeable": "false" }
            })
        );
    }

    #[test]
    fn test_body_without_prompt() {
        let body = builder().tag("survey").body();
        assert_eq!(body.get("tag"), Some(&json!("survey")));
        assert!(body.get("prompt").is_none());
    }
}
