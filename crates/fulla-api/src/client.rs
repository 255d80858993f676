//! Resource operations over the DigitalOcean API.

use crate::models::{
    Account, AccountResponse, Action, ActionResponse, CreateDropletRequest, CreateDropletResponse,
    Droplet, DropletActionRequest, DropletsResponse, Image, ImagesPage, SshKey, SshKeysResponse,
};
use crate::Result;
use fulla_core::config::Settings;
use fulla_core::{ApiClient, Error};

/// Client for droplet, image, and account operations.
///
/// Every operation issues one blocking-style request at a time and is
/// all-or-nothing: errors propagate to the caller, nothing retries or
/// recovers locally.
#[derive(Debug, Clone)]
pub struct DropletsClient {
    inner: ApiClient,
}

impl DropletsClient {
    /// Wrap an existing transport.
    #[must_use]
    pub fn new(inner: ApiClient) -> Self {
        Self { inner }
    }

    /// Construct a client from loaded [`Settings`].
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(ApiClient::from_settings(settings)?))
    }

    /// Fetch account details.
    pub async fn get_account(&self) -> Result<Account> {
        let response: AccountResponse = self.inner.get_json("account").await?;
        Ok(response.account)
    }

    /// List droplets together with the server-reported total.
    ///
    /// The total comes from `meta.total` and is not cross-checked against
    /// the list length.
    pub async fn list_droplets(&self) -> Result<(Vec<Droplet>, u64)> {
        let response: DropletsResponse = self.inner.get_json("droplets").await?;
        let total = response
            .meta
            .map(|meta| meta.total)
            .ok_or_else(|| Error::Decode("droplet listing has no meta.total".to_string()))?;
        Ok((response.droplets, total))
    }

    /// List all available images, following pagination.
    ///
    /// Fetches page 1, reads the last page number out of `links.pages.last`,
    /// then fetches pages 2..=last sequentially and concatenates the results
    /// in page order. Single-page listings omit the `last` link entirely and
    /// yield just the first page.
    pub async fn list_images(&self) -> Result<Vec<Image>> {
        let first: ImagesPage = self.inner.get_json("images?page=1").await?;

        let last_page = first
            .links
            .as_ref()
            .and_then(|links| links.pages.as_ref())
            .and_then(|pages| pages.last.as_deref())
            .map(last_page_number)
            .transpose()?;

        let mut images = first.images;
        let Some(last_page) = last_page else {
            return Ok(images);
        };

        for page in 2..=last_page {
            let next: ImagesPage = self.inner.get_json(&format!("images?page={page}")).await?;
            images.extend(next.images);
        }

        Ok(images)
    }

    /// List the account's SSH keys together with the server-reported total.
    pub async fn list_ssh_keys(&self) -> Result<(Vec<SshKey>, u64)> {
        let response: SshKeysResponse = self.inner.get_json("account/keys").await?;
        let total = response
            .meta
            .map(|meta| meta.total)
            .ok_or_else(|| Error::Decode("key listing has no meta.total".to_string()))?;
        Ok((response.ssh_keys, total))
    }

    /// Create a droplet.
    ///
    /// The requested image is first validated against the full image listing;
    /// when nothing matches, no POST is issued and [`Error::UnknownImage`] is
    /// returned.
    pub async fn create_droplet(&self, request: &CreateDropletRequest) -> Result<Droplet> {
        let images = self.list_images().await?;
        let Some(image) = resolve_image(&images, &request.image) else {
            tracing::warn!(image = %request.image, "no image matches slug or id");
            return Err(Error::UnknownImage(request.image.clone()));
        };
        tracing::debug!(image_id = image.id, "resolved image");

        let response: CreateDropletResponse = self.inner.post_json("droplets", request).await?;
        Ok(response.droplet)
    }

    /// Delete a droplet. Success responses carry no payload to inspect.
    pub async fn delete_droplet(&self, droplet_id: u64) -> Result<()> {
        self.inner.delete(&format!("droplets/{droplet_id}")).await
    }

    /// Reboot a droplet, returning the resulting action.
    pub async fn reboot_droplet(&self, droplet_id: u64) -> Result<Action> {
        let response: ActionResponse = self
            .inner
            .post_json(
                &format!("droplets/{droplet_id}/actions"),
                &DropletActionRequest::reboot(),
            )
            .await?;
        Ok(response.action)
    }
}

/// Find the image named by `reference` (slug or numeric id).
///
/// When several images match, the last one in listing order wins; the scan
/// keeps overwriting its candidate instead of stopping at the first hit.
#[must_use]
pub fn resolve_image<'a>(images: &'a [Image], reference: &str) -> Option<&'a Image> {
    let mut candidate = None;
    for image in images {
        if image.matches(reference) {
            candidate = Some(image);
        }
    }
    candidate
}

/// Extract the final page number from a `links.pages.last` URL.
///
/// The provider encodes it as the value after the last `=` in the query
/// string (e.g. `https://api.digitalocean.com/v2/images?page=3`).
fn last_page_number(link: &str) -> Result<u32> {
    let suffix = link.rsplit('=').next().unwrap_or_default();
    suffix.parse().map_err(|_| {
        Error::Pagination(format!("cannot parse last page number from `{link}`"))
    })
}
