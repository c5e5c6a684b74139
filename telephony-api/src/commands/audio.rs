use std::fmt;
use std::sync::Arc;

use rest_client::{Params, Transport};

use super::{send, CommandParams};
use crate::Result;

/// Voice gender for spoken sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locale used to speak a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceLocale {
    AmericanEnglish,
    BritishEnglish,
    Spanish,
    French,
    German,
    Italian,
}

impl SentenceLocale {
    /// Value the service expects for this locale
    pub fn rest_value(&self) -> &'static str {
        match self {
            SentenceLocale::AmericanEnglish => "en_US",
            SentenceLocale::BritishEnglish => "en_UK",
            SentenceLocale::Spanish => "es_MX",
            SentenceLocale::French => "fr_FR",
            SentenceLocale::German => "de_DE",
            SentenceLocale::Italian => "it_IT",
        }
    }
}

impl fmt::Display for SentenceLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rest_value())
    }
}

/// Plays an audio file or speaks a sentence on a call or bridge
///
/// File URL and sentence are independent; if both are set the service
/// decides which one wins. Setting either to an empty string stops the
/// corresponding playback.
///
/// ```rust,ignore
/// call.audio()?.sentence("Hello").gender(Gender::Female).create()?;
/// ```
#[derive(Debug)]
#[must_use = "builders do nothing until create() is called"]
pub struct AudioBuilder {
    transport: Arc<dyn Transport>,
    uri: String,
    params: CommandParams,
}

impl AudioBuilder {
    pub(crate) fn new(transport: Arc<dyn Transport>, uri: String) -> Self {
        Self {
            transport,
            uri,
            params: CommandParams::new(),
        }
    }

    pub fn file_url(mut self, file_url: impl Into<String>) -> Self {
        self.params.set_text("fileUrl", file_url);
        self
    }

    pub fn sentence(mut self, sentence: impl Into<String>) -> Self {
        self.params.set_text("sentence", sentence);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.params.set_text("gender", gender.as_str());
        self
    }

    pub fn locale(mut self, locale: SentenceLocale) -> Self {
        self.params.set_text("locale", locale.rest_value());
        self
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.params.set_text("voice", voice);
        self
    }

    pub fn loop_enabled(mut self, loop_enabled: bool) -> Self {
        self.params.set_flag("loopEnabled", loop_enabled);
        self
    }

    /// Target URI, fixed when the builder was created
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Request body that `create()` will send
    pub fn body(&self) -> Params {
        self.params.as_map().clone()
    }

    /// Send the command. Does not refresh the owning resource.
    pub fn create(self) -> Result<()> {
        send(&self.transport, &self.uri, self.params.as_map())?;
        Ok(())
    }
}
