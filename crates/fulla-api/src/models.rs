//! DigitalOcean API models.
//!
//! Typed structs for the payloads the client touches. Fields the client
//! never interprets (region/size/image sub-objects, network blocks) stay as
//! `serde_json::Value` to survive provider-side schema drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account details, populated in one shot from `GET account`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Maximum number of droplets the account may create.
    pub droplet_limit: u64,
    /// Account email address.
    pub email: String,
    /// Opaque account identifier.
    pub uuid: String,
    /// Whether the email address has been verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    /// Account status (active, warning, locked).
    pub status: String,
    /// Human-readable detail accompanying the status.
    #[serde(default)]
    pub status_message: String,
}

/// Envelope around [`Account`] as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountResponse {
    /// The account payload.
    pub account: Account,
}

/// A droplet (virtual machine instance) as returned by the API.
///
/// Droplets are always fetched fresh; nothing is persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Droplet {
    /// Droplet identifier.
    pub id: u64,
    /// Droplet name.
    pub name: String,
    /// Memory in MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    /// Virtual CPU count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpus: Option<u64>,
    /// Disk size in GiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    /// Lifecycle status (new, active, off, archive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Whether the droplet is locked pending an event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Enabled feature names (backups, ipv6, private_networking).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    /// Region sub-object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<serde_json::Value>,
    /// Size sub-object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<serde_json::Value>,
    /// Size slug convenience field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_slug: Option<String>,
    /// Image sub-object the droplet was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<serde_json::Value>,
    /// Network configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<serde_json::Value>,
    /// Backup identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_ids: Option<Vec<u64>>,
    /// Snapshot identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_ids: Option<Vec<u64>>,
}

/// Envelope for `GET droplets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropletsResponse {
    /// Droplets on this page.
    pub droplets: Vec<Droplet>,
    /// Pagination links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Server-reported totals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Envelope for `POST droplets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDropletResponse {
    /// The newly created droplet.
    pub droplet: Droplet,
}

/// An image (distribution, snapshot, or backup) as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// Image identifier.
    pub id: u64,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short human-readable identifier; null for user snapshots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Base distribution name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    /// Whether the image is publicly available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Region slugs the image is available in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    /// Image kind (snapshot, backup, base).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Minimum disk size in GiB required to use the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_disk_size: Option<u64>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Image {
    /// Whether `reference` names this image by slug or by numeric id.
    #[must_use]
    pub fn matches(&self, reference: &str) -> bool {
        self.slug.as_deref() == Some(reference) || self.id.to_string() == reference
    }
}

/// One page of the `GET images` listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesPage {
    /// Images on this page.
    pub images: Vec<Image>,
    /// Pagination links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Server-reported totals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// An SSH key registered on the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SshKey {
    /// Key identifier.
    pub id: u64,
    /// Key fingerprint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Full public key material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Envelope for `GET account/keys`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SshKeysResponse {
    /// Registered keys.
    pub ssh_keys: Vec<SshKey>,
    /// Pagination links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Server-reported totals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Server-reported listing metadata.
///
/// The total is reported by the server and is not cross-checked against the
/// accompanying list length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    /// Total number of items across all pages.
    pub total: u64,
}

/// Pagination links block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Links {
    /// Page links; absent entirely on single-page listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
}

/// Page link URLs. The provider encodes page numbers in the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pages {
    /// First page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Previous page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Next page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Last page URL; omitted when only one page exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// Request payload for droplet creation.
///
/// The provider rejects requests where the boolean-ish optionals are encoded
/// as anything but JSON literals, so `backups`, `ipv6`, `private_networking`,
/// and `user_data` are always serialized — `None` becomes a literal `null`
/// rather than being omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateDropletRequest {
    /// Droplet name.
    pub name: String,
    /// Region slug (e.g. `nyc3`).
    pub region: String,
    /// Size slug (e.g. `512mb`).
    pub size: String,
    /// Image slug or numeric id, validated against the image listing.
    pub image: String,
    /// SSH key ids or fingerprints to install.
    pub ssh_keys: Vec<serde_json::Value>,
    /// Enable automated backups.
    pub backups: Option<bool>,
    /// Enable IPv6.
    pub ipv6: Option<bool>,
    /// Enable private networking.
    pub private_networking: Option<bool>,
    /// Cloud-init user data.
    pub user_data: Option<String>,
}

impl CreateDropletRequest {
    /// Create a request with the required fields; the optionals default to
    /// `null` on the wire.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        size: impl Into<String>,
        image: impl Into<String>,
        ssh_keys: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            size: size.into(),
            image: image.into(),
            ssh_keys,
            backups: None,
            ipv6: None,
            private_networking: None,
            user_data: None,
        }
    }

    /// Enable or disable automated backups.
    #[must_use]
    pub const fn with_backups(mut self, enabled: bool) -> Self {
        self.backups = Some(enabled);
        self
    }

    /// Enable or disable IPv6.
    #[must_use]
    pub const fn with_ipv6(mut self, enabled: bool) -> Self {
        self.ipv6 = Some(enabled);
        self
    }

    /// Enable or disable private networking.
    #[must_use]
    pub const fn with_private_networking(mut self, enabled: bool) -> Self {
        self.private_networking = Some(enabled);
        self
    }

    /// Attach cloud-init user data.
    #[must_use]
    pub fn with_user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = Some(user_data.into());
        self
    }
}

/// Request payload for droplet actions (`POST droplets/{id}/actions`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropletActionRequest {
    /// Action type understood by the provider.
    #[serde(rename = "type")]
    pub kind: String,
}

impl DropletActionRequest {
    /// The reboot action.
    #[must_use]
    pub fn reboot() -> Self {
        Self {
            kind: "reboot".to_string(),
        }
    }
}

/// An action (asynchronous provider-side event) on a resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    /// Action identifier.
    pub id: u64,
    /// Progress status (in-progress, completed, errored).
    pub status: String,
    /// Action type (reboot, power_off, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Start timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Completion timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Identifier of the resource acted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<u64>,
    /// Kind of the resource acted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Region slug the action ran in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_slug: Option<String>,
}

/// Envelope around [`Action`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    /// The action payload.
    pub action: Action,
}
