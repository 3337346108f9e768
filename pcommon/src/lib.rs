//! Shared primitives for the parley workspace crates.
//!
//! ```rust
//! use pcommon::{GenerationOptions, RegistryBuilder, SessionId};
//!
//! let session = SessionId::from("session-1");
//! let registry = RegistryBuilder::new().entry("alpha", 1_u32).build();
//! let options = GenerationOptions::default().with_temperature(0.3);
//!
//! assert_eq!(session.as_str(), "session-1");
//! assert_eq!(registry.get("alpha"), Some(&1));
//! assert_eq!(options.temperature, Some(0.3));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use pcommon::BoxFuture;
    //!
    //! fn word_count<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.split_whitespace().count() })
    //! }
    //!
    //! let _future = word_count("hello there");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Session identifiers.
    //!
    //! ```rust
    //! use pcommon::SessionId;
    //!
    //! let first = SessionId::next();
    //! let second = SessionId::next();
    //! assert_ne!(first, second);
    //! assert!(first.as_str().starts_with("session-"));
    //! ```

    use std::fmt::{Display, Formatter};
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SessionId(String);

    impl SessionId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        /// Allocates a process-unique id of the form `session-<n>`.
        pub fn next() -> Self {
            let sequence = NEXT_SESSION.fetch_add(1, Ordering::Relaxed);
            Self(format!("session-{sequence}"))
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for SessionId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for SessionId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for SessionId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub mod model {
    //! Sampling settings applied by chat model adapters.
    //!
    //! ```rust
    //! use pcommon::GenerationOptions;
    //!
    //! let options = GenerationOptions::default()
    //!     .with_temperature(0.2)
    //!     .with_max_tokens(512);
    //!
    //! assert_eq!(options.temperature, Some(0.2));
    //! assert_eq!(options.max_tokens, Some(512));
    //! assert!(options.validate().is_ok());
    //! ```

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct GenerationOptions {
        pub temperature: Option<f32>,
        pub max_tokens: Option<u32>,
    }

    impl GenerationOptions {
        pub fn with_temperature(mut self, temperature: f32) -> Self {
            self.temperature = Some(temperature);
            self
        }

        pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
            self.max_tokens = Some(max_tokens);
            self
        }

        /// Returns a static description of the first violated bound, if any.
        pub fn validate(&self) -> Result<(), &'static str> {
            if let Some(max_tokens) = self.max_tokens
                && max_tokens == 0
            {
                return Err("max_tokens must be greater than zero");
            }

            if let Some(temperature) = self.temperature
                && !(0.0..=2.0).contains(&temperature)
            {
                return Err("temperature must be in the inclusive range 0.0..=2.0");
            }

            Ok(())
        }
    }
}

pub mod registry {
    //! Write-once registry map: entries are added on the builder, and the built
    //! registry only supports lookups.
    //!
    //! ```rust
    //! use pcommon::RegistryBuilder;
    //!
    //! let registry = RegistryBuilder::new()
    //!     .entry("alpha".to_string(), 1_u32)
    //!     .entry("beta".to_string(), 2_u32)
    //!     .build();
    //!
    //! assert_eq!(registry.get("beta"), Some(&2));
    //! assert!(!registry.contains_key("gamma"));
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct RegistryBuilder<K, V> {
        items: HashMap<K, V>,
    }

    impl<K, V> Default for RegistryBuilder<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                items: HashMap::new(),
            }
        }
    }

    impl<K, V> RegistryBuilder<K, V>
    where
        K: Eq + Hash,
    {
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds or replaces an entry. The last registration for a key wins.
        pub fn entry(mut self, key: K, value: V) -> Self {
            self.items.insert(key, value);
            self
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            self.items.insert(key, value)
        }

        pub fn build(self) -> Registry<K, V> {
            Registry { items: self.items }
        }
    }

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        items: HashMap<K, V>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                items: HashMap::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash,
    {
        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.get(key)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.contains_key(key)
        }

        pub fn keys(&self) -> impl Iterator<Item = &K> {
            self.items.keys()
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }
}

pub use context::SessionId;
pub use future::BoxFuture;
pub use model::GenerationOptions;
pub use registry::{Registry, RegistryBuilder};

#[cfg(test)]
mod tests {
    use super::{GenerationOptions, Registry, RegistryBuilder, SessionId};

    #[test]
    fn session_ids_round_trip_and_stay_unique() {
        let named = SessionId::new("session-a");
        assert_eq!(named.as_str(), "session-a");
        assert_eq!(named.to_string(), "session-a");

        let first = SessionId::next();
        let second = SessionId::next();
        assert_ne!(first, second);
    }

    #[test]
    fn generation_options_reject_out_of_range_values() {
        let too_hot = GenerationOptions::default().with_temperature(2.5);
        assert!(too_hot.validate().is_err());

        let no_tokens = GenerationOptions::default().with_max_tokens(0);
        assert!(no_tokens.validate().is_err());

        assert!(GenerationOptions::default().validate().is_ok());
    }

    #[test]
    fn registry_builder_keeps_last_registration_per_key() {
        let mut builder = RegistryBuilder::new().entry("alpha", 1_u32);
        let replaced = builder.insert("alpha", 3);
        assert_eq!(replaced, Some(1));

        let registry = builder.entry("beta", 2).build();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("alpha"), Some(&3));

        let mut keys = registry.keys().copied().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, vec!["alpha", "beta"]);
    }

    #[test]
    fn default_registry_is_empty() {
        let registry = Registry::<String, u32>::default();
        assert!(registry.is_empty());
        assert!(!registry.contains_key("alpha"));
    }
}
