use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Body;
use crate::error::{KundaliError, KundaliResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::KundaliEngine;

/// Pairwise compound relationship tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairRelation {
    GreatFriend,
    Friend,
    Neutral,
    Enemy,
    GreatEnemy,
}

impl PairRelation {
    #[must_use]
    pub const fn is_friendly(self) -> bool {
        matches!(self, PairRelation::GreatFriend | PairRelation::Friend)
    }

    #[must_use]
    pub const fn is_hostile(self) -> bool {
        matches!(self, PairRelation::Enemy | PairRelation::GreatEnemy)
    }
}

/// Pairwise aspect polarity delivered by the relation service. Values the
/// service adds later fold into `Unknown` instead of failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairAspect {
    Benefic,
    Malefic,
    Unknown,
}

impl<'de> Deserialize<'de> for PairAspect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "benefic" => Self::Benefic,
            "malefic" => Self::Malefic,
            _ => Self::Unknown,
        })
    }
}

/// Wire entry for one aspects-matrix pair: `{"type": "benefic"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairAspectEntry {
    #[serde(rename = "type")]
    pub aspect: PairAspect,
}

/// Wire form: maps keyed by `Sun-Moon` style pair names. `IndexMap`
/// preserves service order for stable snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationMatricesPayload {
    #[serde(default)]
    pub friendship_matrix: IndexMap<String, PairRelation>,
    #[serde(default)]
    pub aspects_matrix: IndexMap<String, PairAspectEntry>,
}

impl RelationMatricesPayload {
    pub fn from_json_str(raw: &str) -> KundaliResult<Self> {
        serde_json::from_str(raw).map_err(|error| KundaliError::InvalidPayload(error.to_string()))
    }
}

/// Normalized pairwise lookups keyed by body pair, order independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationMatrices {
    friendship: IndexMap<(Body, Body), PairRelation>,
    aspects: IndexMap<(Body, Body), PairAspect>,
}

impl RelationMatrices {
    /// Normalizes a wire payload. Keys naming bodies the engine does not
    /// know are dropped, so a service covering extra points degrades to
    /// the known set instead of failing.
    #[must_use]
    pub fn from_payload(payload: RelationMatricesPayload) -> Self {
        let mut matrices = Self::default();
        for (key, relation) in payload.friendship_matrix {
            match parse_pair_key(&key) {
                Some(pair) => {
                    matrices.friendship.insert(pair, relation);
                }
                None => debug!(key = %key, "dropping unknown friendship pair"),
            }
        }
        for (key, entry) in payload.aspects_matrix {
            match parse_pair_key(&key) {
                Some(pair) => {
                    matrices.aspects.insert(pair, entry.aspect);
                }
                None => debug!(key = %key, "dropping unknown aspect pair"),
            }
        }
        matrices
    }

    #[must_use]
    pub fn friendship_between(&self, a: Body, b: Body) -> Option<PairRelation> {
        self.friendship.get(&ordered_pair(a, b)).copied()
    }

    #[must_use]
    pub fn aspect_between(&self, a: Body, b: Body) -> Option<PairAspect> {
        self.aspects.get(&ordered_pair(a, b)).copied()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.friendship.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.friendship.is_empty() && self.aspects.is_empty()
    }
}

fn ordered_pair(a: Body, b: Body) -> (Body, Body) {
    if a <= b { (a, b) } else { (b, a) }
}

fn parse_pair_key(key: &str) -> Option<(Body, Body)> {
    let (left, right) = key.split_once('-')?;
    let a = Body::from_name(left)?;
    let b = Body::from_name(right)?;
    Some(ordered_pair(a, b))
}

/// Ticket tying one async relation fetch to the engine state it was
/// started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationFetchToken(pub(super) u64);

impl<R: Renderer> KundaliEngine<R> {
    /// Marks the start of one async relation fetch and returns its
    /// ticket. Completions carrying anything but the newest ticket are
    /// discarded, so overlapping fetches resolve last-write-wins.
    pub fn begin_relation_fetch(&mut self) -> RelationFetchToken {
        self.core.runtime.matrix_generation += 1;
        debug!(
            generation = self.core.runtime.matrix_generation,
            "relation fetch started"
        );
        RelationFetchToken(self.core.runtime.matrix_generation)
    }

    /// Applies one fetch outcome; returns whether matrices were updated.
    ///
    /// A failed fetch keeps the previous matrices untouched (friendship
    /// highlighting simply stays unavailable until a later fetch lands).
    pub fn complete_relation_fetch(
        &mut self,
        token: RelationFetchToken,
        outcome: KundaliResult<RelationMatricesPayload>,
    ) -> bool {
        if token.0 != self.core.runtime.matrix_generation {
            debug!(
                token = token.0,
                current = self.core.runtime.matrix_generation,
                "stale relation fetch dropped"
            );
            return false;
        }
        match outcome {
            Ok(payload) => {
                let matrices = RelationMatrices::from_payload(payload);
                let pair_count = matrices.pair_count();
                debug!(pair_count, "relation matrices loaded");
                self.core.runtime.matrices = Some(matrices);
                self.emit_chart_event(&ChartEvent::RelationMatricesLoaded { pair_count });
                true
            }
            Err(error) => {
                warn!(%error, "relation fetch failed; keeping previous matrices");
                false
            }
        }
    }

    #[must_use]
    pub fn relation_matrices(&self) -> Option<&RelationMatrices> {
        self.core.runtime.matrices.as_ref()
    }

    #[must_use]
    pub fn matrices_loaded(&self) -> bool {
        self.core.runtime.matrices.is_some()
    }

    /// Drops loaded matrices and invalidates in-flight fetches. Called
    /// whenever chart data changes underneath them.
    pub(super) fn invalidate_relation_matrices(&mut self) {
        self.core.runtime.matrix_generation += 1;
        if self.core.runtime.matrices.take().is_some() {
            debug!("relation matrices invalidated");
        }
    }
}
