//! The DHPO client proper: one method per service operation.

use dhpo_core::{
    CheckNewPriorAuthorizationsResponse, DownloadTransactionFileResponse,
    NewPriorAuthorizationsResponse, NewTransactionsResponse, SearchQuery,
    SearchTransactionsResponse, SetTransactionDownloadedResponse, UploadTransactionResponse,
};
use dhpo_xml::Document;
use url::Url;

use crate::config::DhpoConfig;
use crate::envelope;
use crate::error::SoapError;

/// Client for the DHPO `ValidateTransactions` service.
///
/// Credentials travel inside every request body, so the client captures
/// them once at construction. One instance owns one pooled HTTP
/// transport; processes that need lazy construction share it through
/// [`crate::SharedDhpoClient`].
pub struct DhpoClient {
    http: reqwest::Client,
    endpoint: Url,
    login: String,
    password: String,
}

impl DhpoClient {
    /// Build a client from connection settings.
    ///
    /// The production service still negotiates old TLS on some paths, so
    /// the transport accepts the full protocol range instead of the
    /// modern-only default.
    pub fn new(config: &DhpoConfig) -> Result<Self, SoapError> {
        let http = reqwest::Client::builder()
            .min_tls_version(reqwest::tls::Version::TLS_1_0)
            .timeout(config.timeout)
            .build()
            .map_err(SoapError::Connect)?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            login: config.login.clone(),
            password: config.password.clone(),
        })
    }

    /// Endpoint requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch transactions that have not been downloaded yet.
    pub async fn get_new_transactions(&self) -> Result<NewTransactionsResponse, SoapError> {
        let fields = self.call("GetNewTransactions", &self.credentials()).await?;
        Ok(NewTransactionsResponse {
            result: fields.result_code("GetNewTransactionsResult")?,
            xml_transaction: parse_payload(
                "GetNewTransactions",
                "xmlTransaction",
                fields.text("xmlTransaction"),
            ),
            error_message: fields.string("errorMessage"),
        })
    }

    /// Fetch prior authorization transactions that have not been downloaded yet.
    pub async fn get_new_prior_authorizations(
        &self,
    ) -> Result<NewPriorAuthorizationsResponse, SoapError> {
        let fields = self
            .call("GetNewPriorAuthorizationTransactions", &self.credentials())
            .await?;
        Ok(NewPriorAuthorizationsResponse {
            result: fields.result_code("GetNewPriorAuthorizationTransactionsResult")?,
            xml_transaction: parse_payload(
                "GetNewPriorAuthorizationTransactions",
                "xmlTransaction",
                fields.text("xmlTransaction"),
            ),
            error_message: fields.string("errorMessage"),
        })
    }

    /// Upload a transaction file. The content is base64-encoded on the wire.
    pub async fn upload_transaction(
        &self,
        content: &[u8],
        file_name: &str,
    ) -> Result<UploadTransactionResponse, SoapError> {
        let encoded =
            base64::Engine::encode(&base64::engine::general_purpose::STANDARD, content);
        let fields = self
            .call(
                "UploadTransaction",
                &[
                    ("login", self.login.as_str()),
                    ("pwd", self.password.as_str()),
                    ("fileContent", encoded.as_str()),
                    ("fileName", file_name),
                ],
            )
            .await?;
        Ok(UploadTransactionResponse {
            result: fields.result_code("UploadTransactionResult")?,
            error_message: fields.string("errorMessage"),
            error_report: fields.string("errorReport"),
        })
    }

    /// Download a transaction file by its ID.
    pub async fn download_transaction_file(
        &self,
        file_id: &str,
    ) -> Result<DownloadTransactionFileResponse, SoapError> {
        let fields = self
            .call(
                "DownloadTransactionFile",
                &[
                    ("login", self.login.as_str()),
                    ("pwd", self.password.as_str()),
                    ("fileId", file_id),
                ],
            )
            .await?;
        Ok(DownloadTransactionFileResponse {
            result: fields.result_code("DownloadTransactionFileResult")?,
            file_name: fields.string("fileName"),
            file: parse_payload("DownloadTransactionFile", "file", fields.text("file")),
            error_message: fields.string("errorMessage"),
        })
    }

    /// Ask whether new prior authorization transactions are waiting.
    pub async fn check_new_prior_authorizations(
        &self,
    ) -> Result<CheckNewPriorAuthorizationsResponse, SoapError> {
        let fields = self
            .call(
                "CheckForNewPriorAuthorizationTransactions",
                &self.credentials(),
            )
            .await?;
        Ok(CheckNewPriorAuthorizationsResponse {
            result: fields
                .result_code("CheckForNewPriorAuthorizationTransactionsResult")?,
            error_message: fields.string("errorMessage"),
        })
    }

    /// Mark a transaction as downloaded.
    ///
    /// The service declares this parameter as `fieldId`, not `fileId`.
    /// The misspelling is part of the contract and is kept on the wire.
    pub async fn set_transaction_downloaded(
        &self,
        file_id: &str,
    ) -> Result<SetTransactionDownloadedResponse, SoapError> {
        let fields = self
            .call(
                "SetTransactionDownloaded",
                &[
                    ("login", self.login.as_str()),
                    ("pwd", self.password.as_str()),
                    ("fieldId", file_id),
                ],
            )
            .await?;
        Ok(SetTransactionDownloadedResponse {
            result: fields.result_code("SetTransactionDownloadedResult")?,
            error_message: fields.string("errorMessage"),
        })
    }

    /// Search transactions matching an already-validated query.
    pub async fn search_transactions(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchTransactionsResponse, SoapError> {
        let direction = query.direction.code().to_string();
        let transaction_id = query.transaction_type.code().to_string();
        let status = query.status.code().to_string();
        let min_records = query.min_record_count.to_string();
        let max_records = query.max_record_count.to_string();

        let mut params: Vec<(&str, &str)> = vec![
            ("login", self.login.as_str()),
            ("pwd", self.password.as_str()),
            ("direction", direction.as_str()),
            ("transactionID", transaction_id.as_str()),
            ("TransactionStatus", status.as_str()),
            ("minRecordCount", min_records.as_str()),
            ("maxRecordCount", max_records.as_str()),
        ];

        // Unset filters are left out of the envelope entirely
        let filters = [
            ("callerLicense", query.caller_license.as_deref()),
            ("ePartner", query.e_partner.as_deref()),
            ("transactionFileName", query.transaction_file_name.as_deref()),
            ("transactionFromDate", query.transaction_from_date.as_deref()),
            ("transactionToDate", query.transaction_to_date.as_deref()),
        ];
        for (name, value) in filters {
            if let Some(value) = value {
                params.push((name, value));
            }
        }

        let fields = self.call("SearchTransactions", &params).await?;
        Ok(SearchTransactionsResponse {
            result: fields.result_code("SearchTransactionsResult")?,
            found_transactions: parse_payload(
                "SearchTransactions",
                "foundTransactions",
                fields.text("foundTransactions"),
            ),
            error_message: fields.string("errorMessage"),
        })
    }

    fn credentials(&self) -> [(&str, &str); 2] {
        [
            ("login", self.login.as_str()),
            ("pwd", self.password.as_str()),
        ]
    }

    async fn call(
        &self,
        operation: &str,
        params: &[(&str, &str)],
    ) -> Result<envelope::ResponseFields, SoapError> {
        let request = envelope::build_request(operation, params);

        tracing::debug!(operation, endpoint = %self.endpoint, "calling DHPO");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", envelope::soap_action(operation))
            .body(request)
            .send()
            .await
            .map_err(SoapError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(SoapError::Transport)?;

        if !status.is_success() {
            // ASMX reports faults with HTTP 500 and a fault envelope
            return Err(
                envelope::decode_fault(&body).unwrap_or(SoapError::UnexpectedStatus(status))
            );
        }

        envelope::decode_response(operation, &body)
    }
}

/// Parse an XML payload field leniently.
///
/// The service embeds whole documents as text inside result fields and
/// occasionally returns content that does not parse. That is not a
/// protocol failure: the parse error is logged and the payload comes
/// back as `None`, leaving the rest of the record intact.
fn parse_payload(operation: &str, field: &str, raw: Option<&str>) -> Option<Document> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    match dhpo_xml::parse(raw) {
        Ok(document) => Some(document),
        Err(error) => {
            tracing::error!(operation, field, %error, "discarding unparseable XML payload");
            None
        }
    }
}
