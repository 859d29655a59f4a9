use serde::{Deserialize, Deserializer};

/// Explicit PATCH semantics for one field.
///
/// - `Unset`: field omitted, keep the stored value
/// - `Null`: explicit `null`, clear a nullable column
/// - `Value(v)`: replace with `v`
///
/// Pair with `#[serde(default)]` so an omitted field stays `Unset`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PatchField<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }

    /// `None` when unset, `Some(None)` for an explicit null.
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }
}

impl<'de, T> Deserialize<'de> for PatchField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        })
    }
}
