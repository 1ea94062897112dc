//! Route 53 HTTP request methods

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::{ROUTE53_HOST, Route53Provider};

impl Route53Provider {
    pub(crate) fn provider_name(&self) -> &'static str {
        "route53"
    }

    /// Executes a signed GET and decodes the XML response.
    ///
    /// `query` must already be percent-encoded; `zone_id` is attached to
    /// zone-scoped error mappings.
    pub(crate) async fn get_xml<T>(
        &self,
        path: &str,
        query: &str,
        zone_id: Option<&str>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let headers = vec![
            ("Host".to_string(), ROUTE53_HOST.to_string()),
            ("X-Amz-Date".to_string(), amz_date.clone()),
        ];
        let authorization = self.sign("GET", path, query, &headers, "", &amz_date);

        let url = if query.is_empty() {
            format!("https://{ROUTE53_HOST}{path}")
        } else {
            format!("https://{ROUTE53_HOST}{path}?{query}")
        };

        let request = self
            .client
            .get(&url)
            .header("Host", ROUTE53_HOST)
            .header("X-Amz-Date", &amz_date)
            .header("Authorization", authorization);

        let (status, body) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            &url,
            self.max_retries,
        )
        .await?;

        if !(200..300).contains(&status) {
            return Err(self.map_api_error(status, &body, zone_id));
        }
        HttpUtils::parse_xml(&body, self.provider_name())
    }

    /// Executes a signed POST with an XML payload and decodes the XML
    /// response.
    pub(crate) async fn post_xml<T>(
        &self,
        path: &str,
        payload: String,
        zone_id: Option<&str>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let headers = vec![
            ("Content-Type".to_string(), "application/xml".to_string()),
            ("Host".to_string(), ROUTE53_HOST.to_string()),
            ("X-Amz-Date".to_string(), amz_date.clone()),
        ];
        let authorization = self.sign("POST", path, "", &headers, &payload, &amz_date);

        let url = format!("https://{ROUTE53_HOST}{path}");
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/xml")
            .header("Host", ROUTE53_HOST)
            .header("X-Amz-Date", &amz_date)
            .header("Authorization", authorization)
            .body(payload);

        let (status, body) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "POST",
            &url,
            self.max_retries,
        )
        .await?;

        if !(200..300).contains(&status) {
            return Err(self.map_api_error(status, &body, zone_id));
        }
        HttpUtils::parse_xml(&body, self.provider_name())
    }
}
