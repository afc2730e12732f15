//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Destination could not be resolved or the datagram socket could not be opened
    #[error("Failed to set up UDP channel to '{address}': {source}")]
    ChannelSetup {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Rendered log text was not a JSON object
    #[error("Unable to decode log string as a JSON object: {source}")]
    Decode {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// Enriched record could not be serialized
    #[error("Unable to encode log record: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// Datagram write failed or was incomplete
    #[error("Unable to send log line: wrote {written}/{expected} bytes: {source}")]
    Transmit {
        written: usize,
        expected: usize,
        #[source]
        source: std::io::Error,
    },

    /// JSON error outside of the hook pipeline (e.g. config parsing)
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a channel setup error for the given destination
    pub fn channel_setup(address: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::ChannelSetup {
            address: address.into(),
            source,
        }
    }

    /// Create a decode error carrying the offending raw text
    pub fn decode(raw: impl Into<String>, source: serde_json::Error) -> Self {
        LoggerError::Decode {
            raw: raw.into(),
            source,
        }
    }

    pub fn encode(source: serde_json::Error) -> Self {
        LoggerError::Encode { source }
    }

    /// Create a transmit error with the number of bytes written before failure
    pub fn transmit(written: usize, expected: usize, source: std::io::Error) -> Self {
        LoggerError::Transmit {
            written,
            expected,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such host");
        let err = LoggerError::channel_setup("nowhere:9999", io_err);
        assert!(matches!(err, LoggerError::ChannelSetup { .. }));
        assert!(err.to_string().contains("nowhere:9999"));
    }

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "short write");
        let err = LoggerError::transmit(3, 10, io_err);
        assert_eq!(
            err.to_string(),
            "Unable to send log line: wrote 3/10 bytes: short write"
        );
    }

    #[test]
    fn test_decode_error_keeps_raw_text() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = LoggerError::decode("not json", source);

        match err {
            LoggerError::Decode { raw, .. } => assert_eq!(raw, "not json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = LoggerError::transmit(0, 5, io_err);
        assert!(err.source().is_some());
    }
}
