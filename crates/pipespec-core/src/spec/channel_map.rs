//! Mapa resuelto de channels con lookup por alias.
//!
//! Guarda sólo las entradas canónicas; un alias se resuelve consultando el
//! índice alias → canónico cuando el nombre no está en el store. La entrada
//! devuelta es la misma `Arc<Channel>` que la canónica.
use std::ops::Index;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::model::Channel;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelMap {
    entries: IndexMap<String, Arc<Channel>>,
    aliases: IndexMap<String, String>,
}

impl ChannelMap {
    pub(crate) fn new(entries: IndexMap<String, Arc<Channel>>, aliases: IndexMap<String, String>) -> Self {
        Self { entries, aliases }
    }

    /// Busca por nombre canónico o por alias.
    pub fn get(&self, name: &str) -> Option<&Arc<Channel>> {
        self.entries
            .get(name)
            .or_else(|| self.aliases.get(name).and_then(|canonical| self.entries.get(canonical)))
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Nombre canónico al que se resuelve `name`, si hay entrada.
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.entries.contains_key(name) {
            return Some(name);
        }
        self.aliases
            .get(name)
            .filter(|canonical| self.entries.contains_key(canonical.as_str()))
            .map(String::as_str)
    }

    /// Entradas canónicas en orden de declaración.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Channel>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Aliases cuya entrada canónica existe.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .filter(|(_, canonical)| self.entries.contains_key(canonical.as_str()))
            .map(|(a, c)| (a.as_str(), c.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Número de entradas canónicas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for ChannelMap {
    type Output = Arc<Channel>;

    fn index(&self, name: &str) -> &Arc<Channel> {
        match self.get(name) {
            Some(c) => c,
            None => panic!("no channel named '{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_without_canonical_entry_is_absent() {
        let mut aliases = IndexMap::new();
        aliases.insert("alias".to_string(), "canonical".to_string());
        let map = ChannelMap::new(IndexMap::new(), aliases);
        assert!(map.get("alias").is_none());
        assert_eq!(map.aliases().count(), 0);
        assert_eq!(map.canonical_name("alias"), None);
    }
}
