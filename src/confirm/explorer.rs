//! Block explorer links for addresses.
//!
//! Links are only built and opened here; nothing is fetched from the explorer.

use color_eyre::Result;

use crate::domain::{Currency, ExplorerView};

/// The preferred explorer of a currency.
#[must_use]
pub fn default_explorer_view(currency: &Currency) -> Option<&ExplorerView> {
    currency.explorer_views.first()
}

/// The explorer called `name` (ignoring case), else the default one.
#[must_use]
pub fn explorer_view_named<'a>(currency: &'a Currency, name: Option<&str>) -> Option<&'a ExplorerView> {
    name.and_then(|name| {
        currency
            .explorer_views
            .iter()
            .find(|view| view.name.eq_ignore_ascii_case(name))
    })
    .or_else(|| {
        if let Some(name) = name {
            tracing::debug!("No explorer named {name} for {}, using the default", currency.id);
        }
        default_explorer_view(currency)
    })
}

/// URL of an address page, if the explorer has an address template.
#[must_use]
pub fn address_explorer(view: &ExplorerView, address: &str) -> Option<String> {
    view.address
        .as_deref()
        .map(|template| template.replace("$address", address))
}

/// URL of `address` on the currency's default explorer.
#[must_use]
pub fn address_url(currency: &Currency, address: &str) -> Option<String> {
    default_explorer_view(currency).and_then(|view| address_explorer(view, address))
}

/// Opens `address` in the system browser.
///
/// # Arguments
///
/// * `currency` - Currency whose explorers are used
/// * `address` - Address to show
/// * `preferred` - Explorer name to use when the currency has it
///
/// # Errors
///
/// Returns an error if the browser could not be launched.
///
/// # Returns
///
/// `Ok(false)` when the chosen explorer has no link for addresses.
pub fn open_address_in_explorer(
    currency: &Currency,
    address: &str,
    preferred: Option<&str>,
) -> Result<bool> {
    let Some(url) =
        explorer_view_named(currency, preferred).and_then(|view| address_explorer(view, address))
    else {
        tracing::debug!("No explorer link for {address} on {}", currency.id);
        return Ok(false);
    };
    tracing::info!("Opening {url}");
    open::that(&url)?;
    Ok(true)
}

// ============================================================================
// Tests
// ============================================================================
