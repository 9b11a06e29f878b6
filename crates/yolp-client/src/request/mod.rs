//! Request parameter models.
//!
//! Every field maps to one query parameter; `None` fields are left out of the
//! query string entirely. Documented numeric ranges are published as
//! constants on each request type and are not enforced here; the remote API
//! rejects out-of-range values itself.

/// `Display` for wire-token enums, delegating to their `as_str`.
macro_rules! display_via_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

mod geocoder;
mod local_search;
mod reverse_geocoder;

pub use geocoder::{
    GeoCoderAddressLevel, GeoCoderAddressRange, GeoCoderDatum, GeoCoderEncoding, GeoCoderRequest,
    GeoCoderSort, YdfDetailLevel,
};
pub use local_search::{LocalSearchDetail, LocalSearchRequest, LocalSearchSmoking, LocalSearchSort};
pub use reverse_geocoder::ReverseGeoCoderRequest;
