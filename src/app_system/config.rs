use super::ConfigError;

pub const CHANNEL_BUFFER_ENV: &str = "USER_SERVICE_CHANNEL_BUFFER";
pub const QUEUE_CAPACITY_ENV: &str = "USER_SERVICE_QUEUE_CAPACITY";

/// Sizing for the message queue actor. Both values are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    channel_buffer: usize,
    queue_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            queue_capacity: 1024,
        }
    }
}

impl SystemConfig {
    pub fn new(channel_buffer: usize, queue_capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            channel_buffer: ensure_positive(CHANNEL_BUFFER_ENV, channel_buffer)?,
            queue_capacity: ensure_positive(QUEUE_CAPACITY_ENV, queue_capacity)?,
        })
    }

    /// Bound of the request channel between clients and the actor.
    pub fn channel_buffer(&self) -> usize {
        self.channel_buffer
    }

    /// Maximum number of messages held before enqueues are rejected.
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Defaults overridden by `USER_SERVICE_CHANNEL_BUFFER` and
    /// `USER_SERVICE_QUEUE_CAPACITY` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            channel_buffer: parse_positive(CHANNEL_BUFFER_ENV, lookup(CHANNEL_BUFFER_ENV))?
                .unwrap_or(defaults.channel_buffer),
            queue_capacity: parse_positive(QUEUE_CAPACITY_ENV, lookup(QUEUE_CAPACITY_ENV))?
                .unwrap_or(defaults.queue_capacity),
        })
    }
}

// tokio::sync::mpsc::channel panics on a zero buffer.
fn ensure_positive(key: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue { key, value: value.to_string() });
    }
    Ok(value)
}

fn parse_positive(key: &'static str, raw: Option<String>) -> Result<Option<usize>, ConfigError> {
    let Some(value) = raw else {
        return Ok(None);
    };
    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(Some(parsed)),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
