use serde::{Deserialize, Serialize};

// ============ Record Types ============

/// DNS record type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
/// Parsing via [`FromStr`](std::str::FromStr) is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// Start of authority record.
    Soa,
    /// IPv6 address record.
    Aaaa,
    /// IPv4 address record.
    A,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Pointer (reverse lookup) record.
    Ptr,
    /// Service locator record.
    Srv,
    /// Sender policy framework record (legacy, superseded by TXT).
    Spf,
}

impl RecordType {
    /// Returns the uppercase wire name of this record type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Soa => "SOA",
            Self::Aaaa => "AAAA",
            Self::A => "A",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Spf => "SPF",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized record type string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record type: {0}")]
pub struct UnknownRecordType(pub String);

impl std::str::FromStr for RecordType {
    type Err = UnknownRecordType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SOA" => Ok(Self::Soa),
            "AAAA" => Ok(Self::Aaaa),
            "A" => Ok(Self::A),
            "TXT" => Ok(Self::Txt),
            "NS" => Ok(Self::Ns),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "PTR" => Ok(Self::Ptr),
            "SRV" => Ok(Self::Srv),
            "SPF" => Ok(Self::Spf),
            _ => Err(UnknownRecordType(s.to_string())),
        }
    }
}

// ============ Zone & Record Types ============

/// A hosted zone as returned by the provider.
///
/// Immutable snapshot; the `id` is opaque and passed back verbatim on
/// record-set and change-batch requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Provider-specific zone identifier.
    pub id: String,
    /// Fully-qualified zone name (e.g. `"example.com."`).
    pub name: String,
}

/// A single value within a resource record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Record value (address, target hostname, text, ...).
    pub value: String,
}

/// Alias payload pointing a record at another provider-managed resource
/// instead of carrying literal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasTarget {
    /// Hosted zone of the alias target.
    pub hosted_zone_id: String,
    /// DNS name of the alias target.
    pub dns_name: String,
    /// Whether the provider should health-check the target.
    pub evaluate_target_health: bool,
}

/// One DNS record set within a zone.
///
/// Identity for matching purposes is the `(name, record_type)` pair; the
/// payload (`ttl`, `resource_records` or `alias_target`) is application
/// data and never used as an identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecordSet {
    /// Fully-qualified record name.
    pub name: String,
    /// Record type.
    pub record_type: RecordType,
    /// Time to live in seconds. Absent on alias records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    /// Literal record values. Empty on alias records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_records: Vec<ResourceRecord>,
    /// Alias payload, mutually exclusive with literal values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<AliasTarget>,
}

impl ResourceRecordSet {
    /// Creates a value-carrying record set.
    #[must_use]
    pub fn with_values(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u64,
        values: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl: Some(ttl),
            resource_records: values
                .into_iter()
                .map(|value| ResourceRecord { value })
                .collect(),
            alias_target: None,
        }
    }
}

// ============ Record Page Types ============

/// Parameters for one record-set page request.
///
/// The `start_record_name`/`start_record_type` pair is the enumeration
/// cursor: feed a page's `next_record_name`/`next_record_type` back here
/// to continue past a truncated response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetRequest {
    /// Zone to enumerate.
    pub hosted_zone_id: String,
    /// First record name to return, in provider collation order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_record_name: Option<String>,
    /// First record type to return at `start_record_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_record_type: Option<RecordType>,
    /// Page size cap. Provider default applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

impl RecordSetRequest {
    /// Creates a request for the first page of a zone's record sets.
    #[must_use]
    pub fn new(hosted_zone_id: impl Into<String>) -> Self {
        Self {
            hosted_zone_id: hosted_zone_id.into(),
            ..Self::default()
        }
    }

    /// Positions the request at a continuation cursor.
    #[must_use]
    pub fn starting_at(mut self, name: impl Into<String>, record_type: Option<RecordType>) -> Self {
        self.start_record_name = Some(name.into());
        self.start_record_type = record_type;
        self
    }

    /// Caps the number of record sets returned in this page.
    #[must_use]
    pub fn max_items(mut self, max: u32) -> Self {
        self.max_items = Some(max);
        self
    }
}

/// One page of a zone's record sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetPage {
    /// Record sets in provider order.
    pub record_sets: Vec<ResourceRecordSet>,
    /// Whether more record sets follow this page.
    pub is_truncated: bool,
    /// Name of the first record set of the next page, when truncated.
    pub next_record_name: Option<String>,
    /// Type of the first record set of the next page, when truncated.
    pub next_record_type: Option<RecordType>,
}

// ============ Change Batch Types ============

/// Action applied to one record set within a change batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Create a record set that must not already exist.
    Create,
    /// Delete a record set that must match current state exactly.
    Delete,
    /// Create or overwrite in one step.
    Upsert,
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
            Self::Upsert => "UPSERT",
        })
    }
}

/// One action + record set pair within a change batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    /// What to do with the record set.
    pub action: ChangeAction,
    /// The record set the action applies to.
    pub resource_record_set: ResourceRecordSet,
}

impl Change {
    /// A `CREATE` change for the given record set.
    #[must_use]
    pub fn create(resource_record_set: ResourceRecordSet) -> Self {
        Self {
            action: ChangeAction::Create,
            resource_record_set,
        }
    }

    /// A `DELETE` change for the given record set.
    #[must_use]
    pub fn delete(resource_record_set: ResourceRecordSet) -> Self {
        Self {
            action: ChangeAction::Delete,
            resource_record_set,
        }
    }
}

/// An atomic set of record changes submitted against one zone.
///
/// The provider applies all changes or none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeBatch {
    /// Free-text audit comment attached to the batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Ordered changes.
    pub changes: Vec<Change>,
}

/// Propagation state of a submitted change batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeStatus {
    /// Accepted, still propagating to the provider's name servers.
    Pending,
    /// Propagated everywhere.
    Insync,
}

/// Provider acknowledgement of a change batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Provider-assigned change identifier.
    pub id: String,
    /// Propagation state at submission time.
    pub status: ChangeStatus,
    /// When the provider accepted the batch.
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

// ============ Credential Types ============

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// AWS credentials for the Route 53 provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route53Credentials {
    /// AWS Access Key ID.
    pub access_key_id: String,
    /// AWS Secret Access Key.
    pub secret_access_key: String,
    /// Signing region. Route 53 is a global service; defaults to
    /// `us-east-1` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Route53Credentials {
    /// Construct credentials from a flat key-value map, validating
    /// required fields.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is
    /// missing or empty.
    pub fn from_map(
        map: &std::collections::HashMap<String, String>,
    ) -> std::result::Result<Self, CredentialValidationError> {
        Ok(Self {
            access_key_id: Self::required_field(map, "accessKeyId", "Access Key ID")?,
            secret_access_key: Self::required_field(map, "secretAccessKey", "Secret Access Key")?,
            region: map.get("region").filter(|v| !v.trim().is_empty()).cloned(),
        })
    }

    /// Load credentials from the conventional AWS environment variables
    /// (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, optional
    /// `AWS_REGION`).
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError::MissingField`] when a
    /// required variable is unset, [`EmptyField`](CredentialValidationError::EmptyField)
    /// when set but blank.
    pub fn from_env() -> std::result::Result<Self, CredentialValidationError> {
        let required = |var: &str, label: &str| match std::env::var(var) {
            Err(_) => Err(CredentialValidationError::MissingField {
                field: var.to_string(),
                label: label.to_string(),
            }),
            Ok(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                field: var.to_string(),
                label: label.to_string(),
            }),
            Ok(v) => Ok(v),
        };

        Ok(Self {
            access_key_id: required("AWS_ACCESS_KEY_ID", "AWS Access Key ID")?,
            secret_access_key: required("AWS_SECRET_ACCESS_KEY", "AWS Secret Access Key")?,
            region: std::env::var("AWS_REGION")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }

    fn required_field(
        map: &std::collections::HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> std::result::Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.clone()),
        }
    }
}
