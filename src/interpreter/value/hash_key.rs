use crate::interpreter::value::core::Value;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// The kind component of a [`HashKey`].
///
/// Keeping the kind separate means distinct-typed but equal-printing values
/// (`1` and `"1"`) occupy distinct hash-map slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyKind {
    /// A boolean key.
    Boolean,
    /// An integer key.
    Integer,
    /// A double key.
    Double,
    /// A string key.
    Str,
}

/// A hash-map key: the value's kind plus a 64-bit hash of its contents.
///
/// Keys order by kind first and hash second, which gives hash values a
/// stable, deterministic rendering order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashKey {
    /// The key's kind tag.
    pub kind: KeyKind,
    /// The 64-bit hash of the key's contents.
    pub hash: u64,
}

impl HashKey {
    /// Derives the hash key for a value, if the value supports hashing.
    ///
    /// Hashable kinds are integers (reinterpreted as unsigned), doubles
    /// (truncated to unsigned), booleans (0/1) and strings (FNV-1a 64-bit).
    /// Any other kind returns `None`; callers report those as unusable keys.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{core::Value, hash_key::HashKey};
    ///
    /// let one = HashKey::from_value(&Value::Integer(1)).unwrap();
    /// let one_text = HashKey::from_value(&Value::Str("1".to_string())).unwrap();
    ///
    /// assert_ne!(one, one_text);
    /// assert_eq!(one, HashKey::from_value(&Value::Integer(1)).unwrap());
    /// ```
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(Self { kind: KeyKind::Integer,
                                             hash: *i as u64, }),
            Value::Double { value, .. } => Some(Self { kind: KeyKind::Double,
                                                       hash: *value as u64, }),
            Value::Boolean(b) => Some(Self { kind: KeyKind::Boolean,
                                             hash: u64::from(*b), }),
            Value::Str(text) => Some(Self { kind: KeyKind::Str,
                                            hash: fnv1a_64(text.as_bytes()), }),
            _ => None,
        }
    }
}

/// Hashes bytes with 64-bit FNV-1a.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
