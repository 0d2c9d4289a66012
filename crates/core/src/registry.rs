use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    config::LoaderConfig,
    error::{FragmentError, Result},
    loader::TranscriptLoader,
    types::Fragment,
};

/// Tag under which the YouTube transcript loader is registered.
pub const YOUTUBE_TAG: &str = "yt";

#[async_trait(?Send)]
pub trait FragmentLoader {
    async fn load(&self, argument: &str) -> Result<Fragment>;
}

/// Lookup table from fragment tag (the part before `:`) to its loader.
#[derive(Default)]
pub struct LoaderRegistry {
    table: HashMap<String, Box<dyn FragmentLoader>>,
}

impl LoaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        tag: impl Into<String>,
        loader: impl FragmentLoader + 'static,
    ) -> Result<()> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(FragmentError::Registration {
                reason: "empty tag".to_string(),
            });
        }
        if tag.contains(':') {
            return Err(FragmentError::Registration {
                reason: format!("tag {tag:?} contains ':'"),
            });
        }
        if self.table.contains_key(&tag) {
            return Err(FragmentError::Registration {
                reason: format!("duplicate tag {tag:?}"),
            });
        }

        self.table.insert(tag, Box::new(loader));
        Ok(())
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.table.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Load a `<tag>:<argument>` reference through the matching loader.
    pub async fn load(&self, reference: &str) -> Result<Fragment> {
        let (tag, argument) = split_reference(reference)?;
        let loader = self
            .table
            .get(tag)
            .ok_or_else(|| FragmentError::UnknownLoader {
                tag: tag.to_string(),
            })?;

        tracing::debug!(tag, argument, "dispatching fragment loader");
        loader.load(argument).await
    }
}

/// Split `yt:https://...` into `("yt", "https://...")` at the first colon.
pub fn split_reference(reference: &str) -> Result<(&str, &str)> {
    match reference.split_once(':') {
        Some((tag, argument)) if !tag.is_empty() => Ok((tag, argument)),
        _ => Err(FragmentError::MalformedReference {
            reference: reference.to_string(),
        }),
    }
}

/// Register the loaders this crate provides.
pub fn register_fragment_loaders(
    registry: &mut LoaderRegistry,
    config: &LoaderConfig,
) -> Result<()> {
    registry.register(YOUTUBE_TAG, TranscriptLoader::from_config(config))
}
