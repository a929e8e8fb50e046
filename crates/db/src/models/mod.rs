//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

use serde::{Deserialize, Deserializer};

pub mod brand;
pub mod product;

/// Deserialize a present field into `Some(value)`, keeping an explicit JSON
/// `null` as `Some(None)`.
///
/// Combined with `#[serde(default)]`, an absent field stays `None`, which lets
/// patch DTOs tell "leave unchanged" apart from "clear".
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
