//! Query-string rendering for request structs.
//!
//! Request fields carry their wire names through `#[serde(rename)]` and skip
//! themselves when unset, so serializing a request yields exactly the keys the
//! caller filled in, in declaration order.

use reqwest::Url;
use serde::{Serialize, Serializer};

/// Appends the set fields of `params` to the query of `url`.
///
/// Pairs are written through [`Url::query_pairs_mut`], which inserts the
/// separators itself, so an existing query such as `appid=X&output=json` is
/// extended with `&key=value` and never produces `?&` or `&&`.
///
/// Values are form-encoded (`application/x-www-form-urlencoded`), so a space
/// is written as `+` rather than `%20`. YOLP decodes both the same way.
///
/// # Errors
///
/// Returns a `serde_urlencoded` error if `params` is not a flat struct of
/// scalar values.
pub fn append_params<P>(url: &mut Url, params: &P) -> Result<(), serde_urlencoded::ser::Error>
where
    P: Serialize + ?Sized,
{
    let mut pairs = url.query_pairs_mut();
    params.serialize(serde_urlencoded::Serializer::new(&mut pairs))?;
    Ok(())
}

/// Renders the set fields of `params` as a standalone query string (no `?`).
///
/// # Errors
///
/// Returns a `serde_urlencoded` error if `params` is not a flat struct of
/// scalar values.
pub fn to_query_string<P>(params: &P) -> Result<String, serde_urlencoded::ser::Error>
where
    P: Serialize + ?Sized,
{
    serde_urlencoded::to_string(params)
}

/// Writes an `f64` in its shortest round-trip decimal form (`35.0` → `35`).
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// [`decimal`] for optional fields; pair with `skip_serializing_if`.
#[allow(clippy::ref_option)]
pub(crate) fn decimal_opt<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_none(),
    }
}
