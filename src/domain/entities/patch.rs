use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Field semantics for PUT/PATCH request bodies.
///
/// - `Keep` → key absent, field untouched
/// - `Clear` → key explicitly `null`
/// - `Set` → key present with a value
///
/// Combined with `#[serde(default)]` on the request struct, a missing JSON
/// key deserializes to `Keep` and an explicit `null` to `Clear`, so updates
/// are merges: anything the client does not mention retains its prior value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|opt| match opt {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => serializer.serialize_some(value),
            Patch::Keep | Patch::Clear => serializer.serialize_none(),
        }
    }
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Reference to the inner value, if `Set`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Clone> Patch<T> {
    /// Merge into an optional field: `Clear` empties it, `Set` replaces it.
    pub fn apply_to(&self, slot: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Clear => *slot = None,
            Patch::Set(value) => *slot = Some(value.clone()),
        }
    }

    /// Merge into a required field: only `Set` replaces it. A `Clear` on a
    /// required field is ignored rather than leaving the record malformed.
    pub fn overwrite(&self, slot: &mut T) {
        if let Patch::Set(value) = self {
            *slot = value.clone();
        }
    }
}
