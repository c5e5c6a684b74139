use rest_client::Params;

use super::{send_transition, CommandParams, Gender, SentenceLocale};
use crate::resource::ResourceNode;
use crate::{CallTransition, Result};

/// Transfers a call to another number
///
/// Optional whisper audio is played to the transfer target before the
/// parties are connected. After the write the call is re-read, so its
/// state reflects what the service accepted.
///
/// ```rust,ignore
/// call.transfer("+15551234567")?
///     .transfer_caller_id("+15557654321")
///     .whisper_sentence("Incoming transfer")
///     .create()?;
/// ```
#[derive(Debug)]
#[must_use = "builders do nothing until create() is called"]
pub struct TransferBuilder<'a> {
    call: &'a ResourceNode,
    uri: String,
    params: CommandParams,
    whisper_audio: CommandParams,
}

impl<'a> TransferBuilder<'a> {
    pub(crate) fn new(call: &'a ResourceNode, uri: String, transfer_to: impl Into<String>) -> Self {
        let mut params = CommandParams::new();
        params.set_text("transferTo", transfer_to);
        Self {
            call,
            uri,
            params,
            whisper_audio: CommandParams::new(),
        }
    }

    pub fn callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.params.set_text("callbackUrl", callback_url);
        self
    }

    pub fn transfer_caller_id(mut self, caller_id: impl Into<String>) -> Self {
        self.params.set_text("transferCallerId", caller_id);
        self
    }

    pub fn whisper_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.whisper_audio.set_text("sentence", sentence);
        self
    }

    pub fn whisper_gender(mut self, gender: Gender) -> Self {
        self.whisper_audio.set_text("gender", gender.as_str());
        self
    }

    pub fn whisper_locale(mut self, locale: SentenceLocale) -> Self {
        self.whisper_audio.set_text("locale", locale.rest_value());
        self
    }

    pub fn whisper_voice(mut self, voice: impl Into<String>) -> Self {
        self.whisper_audio.set_text("voice", voice);
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Request body: `state=transferring`, the transfer settings and the
    /// `whisperAudio` group, if any
    pub fn body(&self) -> Params {
        let mut body = self.params.clone();
        body.set_text("state", CallTransition::Transferring.as_str());
        body.set_group("whisperAudio", self.whisper_audio.clone());
        body.into_map()
    }

    /// Send the transfer, then refresh the call
    pub fn create(self) -> Result<()> {
        tracing::info!(
            "Transferring {} to {}",
            self.uri,
            self.params.get_str("transferTo").unwrap_or_default()
        );
        send_transition(self.call, &self.uri, &self.body())
    }
}
