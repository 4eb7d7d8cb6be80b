use std::collections::{HashMap, HashSet};

use super::ArmId;
use crate::error::{BanditError, Result};

/// Maps arm ids to their dense position in canonical order
#[derive(Debug, Clone, PartialEq)]
pub struct ArmIndex {
    ids: Vec<ArmId>,
    positions: HashMap<ArmId, usize>,
}

impl ArmIndex {
    /// Build the index for a canonical id list
    ///
    /// **Errors** if `ids` contains a duplicate
    pub fn new(ids: &[ArmId]) -> Result<Self> {
        let mut positions = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if positions.insert(id.clone(), i).is_some() {
                return Err(BanditError::DuplicateArmId(id.clone()));
            }
        }
        Ok(Self {
            ids: ids.to_vec(),
            positions,
        })
    }

    /// The canonical ids, in order
    pub fn ids(&self) -> &[ArmId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Position of a single arm
    pub fn position(&self, arm: &ArmId) -> Result<usize> {
        self.positions
            .get(arm)
            .copied()
            .ok_or_else(|| BanditError::UnknownArm {
                arm: arm.clone(),
                known: self.ids.clone(),
            })
    }

    /// Positions of a batch of arms, in the same order as `arms`
    ///
    /// `arms` may be any subset of the canonical ids in any order, but must not repeat an id.
    pub fn positions(&self, arms: &[ArmId]) -> Result<Vec<usize>> {
        let mut seen = HashSet::with_capacity(arms.len());
        if let Some(dup) = arms.iter().find(|&arm| !seen.insert(arm)) {
            return Err(BanditError::DuplicateArmId(dup.clone()));
        }
        arms.iter().map(|arm| self.position(arm)).collect()
    }

    /// Whether `arms` is exactly the canonical list, by value and order
    pub fn is_canonical(&self, arms: &[ArmId]) -> bool {
        self.ids == arms
    }
}
