// ABOUTME: Phantom-typed identifiers for engine objects and stored records.
// ABOUTME: Keeps image ids, node keys, and environment keys from being mixed up.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Marker types for phantom type parameters.
/// Using empty enums prevents instantiation and requires no trait bounds.
pub enum ImageMarker {}
pub enum NodeMarker {}
pub enum EnvironmentMarker {}
pub enum ComposeProjectMarker {}

/// Opaque string identifier assigned by the container engine.
#[must_use = "IDs reference resources and should not be ignored"]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Numeric primary key of a stored record.
#[must_use = "keys reference records and should not be ignored"]
pub struct Key<T> {
    value: u64,
    _marker: PhantomData<T>,
}

impl<T> Key<T> {
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn get(&self) -> u64 {
        self.value
    }
}

impl<T> Copy for Key<T> {}

// T is only a marker, so derives would wrongly require T: Trait.
macro_rules! marker_impls {
    ($ty:ident, $inner:ty, $clone:expr) => {
        impl<T> std::fmt::Debug for $ty<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($ty)).field(&self.value).finish()
            }
        }

        impl<T> Clone for $ty<T> {
            fn clone(&self) -> Self {
                let clone: fn(&$inner) -> $inner = $clone;
                Self {
                    value: clone(&self.value),
                    _marker: PhantomData,
                }
            }
        }

        impl<T> PartialEq for $ty<T> {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl<T> Eq for $ty<T> {}

        impl<T> Hash for $ty<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.value.hash(state);
            }
        }

        impl<T> std::fmt::Display for $ty<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }

        impl<T> Serialize for $ty<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.value.serialize(serializer)
            }
        }

        impl<'de, T> Deserialize<'de> for $ty<T> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <$inner>::deserialize(deserializer)?;
                Ok(Self {
                    value,
                    _marker: PhantomData,
                })
            }
        }
    };
}

marker_impls!(Id, String, String::clone);
marker_impls!(Key, u64, |v| *v);

pub type ImageId = Id<ImageMarker>;
pub type NodeKey = Key<NodeMarker>;
pub type EnvironmentKey = Key<EnvironmentMarker>;
pub type ComposeProjectKey = Key<ComposeProjectMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_id_serializes_as_plain_string() {
        let id = ImageId::new("sha256:abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"sha256:abc\"");
    }

    #[test]
    fn key_serializes_as_plain_number() {
        let key = NodeKey::new(7);
        assert_eq!(serde_json::to_string(&key).unwrap(), "7");
        let back: NodeKey = serde_json::from_str("7").unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn empty_image_id_is_detected() {
        assert!(ImageId::new("").is_empty());
        assert!(!ImageId::new("abc").is_empty());
    }
}
