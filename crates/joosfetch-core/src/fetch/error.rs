//! The one recoverable failure class of a page fetch.

use thiserror::Error;

/// Any condition that prevents a successful HTTP response: transport errors
/// (DNS, connect, TLS, transfer timeout) and non-2xx statuses alike.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error before a complete response arrived.
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// The server answered with a non-success status.
    #[error("HTTP {code}")]
    Status { code: u32 },
}

impl FetchError {
    /// True for transfer timeouts. Used for log detail only; every fetch
    /// error is handled the same way.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport(e) if e.is_operation_timedout())
    }

    /// True when the host could not be resolved or reached.
    pub fn is_connection(&self) -> bool {
        match self {
            FetchError::Transport(e) => {
                e.is_couldnt_connect()
                    || e.is_couldnt_resolve_host()
                    || e.is_couldnt_resolve_proxy()
                    || e.is_recv_error()
                    || e.is_send_error()
                    || e.is_got_nothing()
            }
            FetchError::Status { .. } => false,
        }
    }

    /// HTTP status code, if the server responded at all.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Status { code } => Some(*code),
            FetchError::Transport(_) => None,
        }
    }
}

/// Maps a response code to `Ok` for 2xx and `FetchError::Status` otherwise.
pub(crate) fn check_status(code: u32) -> Result<(), FetchError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(FetchError::Status { code })
    }
}
