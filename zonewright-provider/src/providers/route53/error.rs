//! Route 53 error-code mapping

use crate::error::ProviderError;

use super::Route53Provider;
use super::types::{ErrorResponse, InvalidChangeBatch};

impl Route53Provider {
    /// Maps a non-2xx response body to a [`ProviderError`].
    ///
    /// Route 53 uses two error envelopes: the standard `ErrorResponse`
    /// document, and a dedicated `InvalidChangeBatch` root for change-batch
    /// rejections. Anything that parses as neither becomes `Unknown` with
    /// the raw body attached.
    pub(crate) fn map_api_error(
        &self,
        status: u16,
        body: &str,
        zone_id: Option<&str>,
    ) -> ProviderError {
        if let Ok(envelope) = quick_xml::de::from_str::<ErrorResponse>(body) {
            let code = envelope.error.code.unwrap_or_default();
            let message = envelope.error.message.unwrap_or_default();
            return self.map_error_code(&code, message, zone_id);
        }

        if let Ok(rejection) = quick_xml::de::from_str::<InvalidChangeBatch>(body) {
            return ProviderError::ChangeRejected {
                provider: self.provider_name().to_string(),
                raw_message: rejection.messages.entries.join("; "),
            };
        }

        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: None,
            raw_message: format!("HTTP {status}: {body}"),
        }
    }

    fn map_error_code(
        &self,
        code: &str,
        message: String,
        zone_id: Option<&str>,
    ) -> ProviderError {
        let provider = self.provider_name().to_string();
        match code {
            "Throttling" | "ThrottlingException" | "PriorRequestNotComplete" => {
                ProviderError::RateLimited {
                    provider,
                    retry_after: None,
                    raw_message: Some(message),
                }
            }
            "InvalidClientTokenId"
            | "InvalidAccessKeyId"
            | "SignatureDoesNotMatch"
            | "MissingAuthenticationToken"
            | "ExpiredToken" => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(message),
            },
            "AccessDenied" | "AccessDeniedException" => ProviderError::PermissionDenied {
                provider,
                raw_message: Some(message),
            },
            "NoSuchHostedZone" => ProviderError::ZoneNotFound {
                provider,
                zone_id: zone_id.unwrap_or("<unspecified>").to_string(),
                raw_message: Some(message),
            },
            "InvalidChangeBatch" | "InvalidInput" => ProviderError::ChangeRejected {
                provider,
                raw_message: message,
            },
            _ => ProviderError::Unknown {
                provider,
                raw_code: Some(code.to_string()),
                raw_message: message,
            },
        }
    }
}
