//! Shared bot configuration contracts used by the client state container and
//! its persistence and UI collaborators.
//!
//! This crate is intentionally runtime-agnostic. It defines the serializable
//! shape of bot configuration documents, recent-bot list entries, connected
//! services, and session endpoint overrides without depending on store or UI
//! internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lightweight, persisted reference to a bot configuration file.
///
/// Recent-bot list entries exist independently of whether the configuration is
/// currently loaded; `path` is the identity key within the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotInfo {
    /// Name shown in recent-bot listings.
    pub display_name: String,
    /// Path of the backing configuration file, unique per entry.
    pub path: String,
    /// Secret the file's protected fields were encrypted with; the persisted
    /// list stores an explicit `null` for unencrypted bots.
    pub secret: Option<String>,
}

/// Full bot configuration plus the runtime-attached file location.
///
/// The persisted document carries `name`, `description`, `secretKey`, and
/// `services`. `path` records where the document was loaded from and
/// `overrides` holds session-only connection state; neither is part of the
/// stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfigWithPath {
    /// Display name of the bot.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Secret key used to encrypt protected service fields, `null` for
    /// unencrypted configurations.
    #[serde(default)]
    pub secret_key: Option<String>,
    /// Connected services in configuration order.
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
    /// Location of the backing file, attached at load time; absent for
    /// configurations that were never written to disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Session-only endpoint overrides; never derived from the persisted
    /// document and absent (not `null`) on the wire when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<BotConfigOverrides>,
}

impl BotConfigWithPath {
    /// Creates a minimal configuration with no services, secret, or overrides.
    pub fn new(name: impl Into<String>, path: Option<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            secret_key: None,
            services: Vec::new(),
            path,
            overrides: None,
        }
    }

    /// Parses a configuration document and attaches the path it was loaded
    /// from.
    ///
    /// Session overrides are cleared even if the raw document carried an
    /// `overrides` field; they only ever originate from the running session.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the document is not valid JSON
    /// or does not match the configuration shape.
    pub fn from_document(raw: &str, path: Option<String>) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.path = path;
        config.overrides = None;
        Ok(config)
    }

    /// Serializes the persisted portion of the configuration, excluding the
    /// runtime-attached path and session overrides.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when serialization fails.
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        let mut persisted = self.clone();
        persisted.path = None;
        persisted.overrides = None;
        serde_json::to_string_pretty(&persisted)
    }
}

/// Session-scoped override set, keyed by the service family it applies to.
///
/// Only endpoint overrides exist today; the wrapper keeps the wire shape
/// (`overrides.endpoint`) stable should other families be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfigOverrides {
    /// Endpoint connection overrides.
    pub endpoint: EndpointOverride,
}

/// Partial, session-only override of endpoint connection fields.
///
/// Populated while debugging against a non-persisted endpoint (for example a
/// temporarily tunneled URL); unset fields fall through to the persisted
/// service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointOverride {
    /// Replacement endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Replacement application id for the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Replacement application password for the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_password: Option<String>,
    /// Replacement service id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl EndpointOverride {
    /// Applies the set override fields over a persisted endpoint service,
    /// leaving the remaining fields untouched.
    pub fn apply_to(&self, service: &EndpointService) -> EndpointService {
        let mut merged = service.clone();
        if let Some(endpoint) = &self.endpoint {
            merged.endpoint = endpoint.clone();
        }
        if let Some(app_id) = &self.app_id {
            merged.app_id = app_id.clone();
        }
        if let Some(app_password) = &self.app_password {
            merged.app_password = app_password.clone();
        }
        if let Some(id) = &self.id {
            merged.id = id.clone();
        }
        merged
    }
}

/// One connected service of a bot configuration.
///
/// Internally tagged by the `type` token used in configuration documents. The
/// state container treats services opaquely; UI and tooling match on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServiceDescriptor {
    /// Messaging endpoint the client connects to.
    Endpoint(EndpointService),
    /// Hosted bot channel registration.
    Abs(AzureBotService),
    /// Language-understanding application.
    Luis(LuisService),
    /// Knowledge-base question answering service.
    Qna(QnaMakerService),
    /// Dispatch application routing across child language models.
    Dispatch(DispatchService),
    /// Plain file attached to the configuration.
    File(FileService),
}

impl ServiceDescriptor {
    /// Returns the flat kind discriminant.
    pub const fn kind(&self) -> ServiceKind {
        match self {
            Self::Endpoint(_) => ServiceKind::Endpoint,
            Self::Abs(_) => ServiceKind::Abs,
            Self::Luis(_) => ServiceKind::Luis,
            Self::Qna(_) => ServiceKind::Qna,
            Self::Dispatch(_) => ServiceKind::Dispatch,
            Self::File(_) => ServiceKind::File,
        }
    }

    /// Returns the service id.
    pub fn id(&self) -> &str {
        match self {
            Self::Endpoint(service) => &service.id,
            Self::Abs(service) => &service.id,
            Self::Luis(service) => &service.id,
            Self::Qna(service) => &service.id,
            Self::Dispatch(service) => &service.id,
            Self::File(service) => &service.id,
        }
    }

    /// Returns the service display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Endpoint(service) => &service.name,
            Self::Abs(service) => &service.name,
            Self::Luis(service) => &service.name,
            Self::Qna(service) => &service.name,
            Self::Dispatch(service) => &service.name,
            Self::File(service) => &service.name,
        }
    }
}

/// Flat discriminant for [`ServiceDescriptor`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceKind {
    /// `endpoint` services.
    Endpoint,
    /// `abs` services.
    Abs,
    /// `luis` services.
    Luis,
    /// `qna` services.
    Qna,
    /// `dispatch` services.
    Dispatch,
    /// `file` services.
    File,
}

impl ServiceKind {
    /// Returns the stable `type` token used in configuration documents.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Endpoint => "endpoint",
            Self::Abs => "abs",
            Self::Luis => "luis",
            Self::Qna => "qna",
            Self::Dispatch => "dispatch",
            Self::File => "file",
        }
    }
}

/// Error returned when a service `type` token is not part of the known
/// taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service type `{token}`")]
pub struct UnknownServiceKind {
    /// The rejected token.
    pub token: String,
}

impl FromStr for ServiceKind {
    type Err = UnknownServiceKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "endpoint" => Ok(Self::Endpoint),
            "abs" => Ok(Self::Abs),
            "luis" => Ok(Self::Luis),
            "qna" => Ok(Self::Qna),
            "dispatch" => Ok(Self::Dispatch),
            "file" => Ok(Self::File),
            _ => Err(UnknownServiceKind {
                token: raw.to_string(),
            }),
        }
    }
}

/// Messaging endpoint service entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointService {
    /// Stable service id within the configuration.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Application id used to authenticate against the endpoint; empty for
    /// unauthenticated local bots.
    #[serde(default)]
    pub app_id: String,
    /// Application password paired with `app_id`.
    #[serde(default)]
    pub app_password: String,
    /// Endpoint URL.
    pub endpoint: String,
}

/// Hosted bot channel registration entry (`abs`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureBotService {
    /// Stable service id within the configuration.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Tenant the registration lives in.
    pub tenant_id: String,
    /// Subscription the registration lives in.
    pub subscription_id: String,
    /// Resource group of the registration.
    pub resource_group: String,
    /// Registered service name.
    pub service_name: String,
}

/// Language-understanding application entry (`luis`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuisService {
    /// Stable service id within the configuration.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Application id of the language model.
    pub app_id: String,
    /// Authoring key.
    pub authoring_key: String,
    /// Subscription key used at runtime.
    pub subscription_key: String,
    /// Published application version.
    pub version: String,
    /// Hosting region.
    pub region: String,
}

/// Knowledge-base question answering service entry (`qna`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QnaMakerService {
    /// Stable service id within the configuration.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Knowledge-base id.
    pub kb_id: String,
    /// Subscription key used for authoring.
    pub subscription_key: String,
    /// Endpoint key used at runtime.
    pub endpoint_key: String,
    /// Hostname of the hosted knowledge base.
    pub hostname: String,
}

/// Dispatch application entry (`dispatch`) routing across child models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchService {
    /// Stable service id within the configuration.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Application id of the dispatch model.
    pub app_id: String,
    /// Authoring key.
    pub authoring_key: String,
    /// Subscription key used at runtime.
    pub subscription_key: String,
    /// Published application version.
    pub version: String,
    /// Ids of the child services the dispatch model routes to.
    #[serde(default)]
    pub service_ids: Vec<String>,
}

/// Plain file attachment entry (`file`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileService {
    /// Stable service id within the configuration.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Path of the attached file.
    pub file_path: String,
}
