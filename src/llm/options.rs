pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Sampling parameters sent along with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CallOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Leaves both parameters to the server defaults.
    pub fn unset() -> Self {
        Self {
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn merge_options(&mut self, incoming_options: CallOptions) {
        self.temperature = incoming_options.temperature.or(self.temperature);
        self.max_tokens = incoming_options.max_tokens.or(self.max_tokens);
    }
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            temperature: Some(DEFAULT_TEMPERATURE),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
        }
    }
}
