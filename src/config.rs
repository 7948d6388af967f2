// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::MiningError;
use std::fmt;
use std::str::FromStr;

/// The mining strategies. All of them produce the same support map for the
/// same input and thresholds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Level-wise Apriori counting through the cross-linked index.
    CrossLinked,
    /// Level-wise Apriori with a hash-bucket pre-filter before exact counting.
    HashPruned,
    /// Depth-first tid-set intersection.
    Eclat,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 3] {
        [
            Algorithm::CrossLinked,
            Algorithm::HashPruned,
            Algorithm::Eclat,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::CrossLinked => "apriori-index",
            Algorithm::HashPruned => "apriori-hash",
            Algorithm::Eclat => "eclat",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Algorithm {
        Algorithm::CrossLinked
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MiningError;
    fn from_str(s: &str) -> Result<Algorithm, MiningError> {
        Algorithm::all()
            .iter()
            .find(|algorithm| algorithm.name() == s)
            .cloned()
            .ok_or_else(|| MiningError::UnknownAlgorithm(s.to_owned()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MiningConfig {
    pub min_support: f64,
    pub min_confidence: f64,
    pub algorithm: Algorithm,
}

impl MiningConfig {
    pub fn new(
        min_support: f64,
        min_confidence: f64,
        algorithm: Algorithm,
    ) -> Result<MiningConfig, MiningError> {
        // Written as negations so NaN is rejected too.
        if !(min_support > 0.0 && min_support <= 1.0) {
            return Err(MiningError::InvalidMinSupport(min_support));
        }
        if !(min_confidence >= 0.0 && min_confidence <= 1.0) {
            return Err(MiningError::InvalidMinConfidence(min_confidence));
        }
        Ok(MiningConfig {
            min_support,
            min_confidence,
            algorithm,
        })
    }

    /// Number of transactions an itemset must appear in to be frequent.
    /// Never less than one.
    pub fn min_support_count(&self, num_transactions: usize) -> u32 {
        let count = (self.min_support * num_transactions as f64).ceil() as u32;
        count.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{Algorithm, MiningConfig};
    use crate::error::MiningError;

    #[test]
    fn test_min_support_count() {
        let config = MiningConfig::new(0.4, 0.5, Algorithm::Eclat).unwrap();
        assert_eq!(config.min_support_count(5), 2);
        assert_eq!(config.min_support_count(6), 3);
        // Rounds up to at least one occurrence.
        let config = MiningConfig::new(0.0001, 0.5, Algorithm::Eclat).unwrap();
        assert_eq!(config.min_support_count(10), 1);
        assert_eq!(config.min_support_count(0), 1);
        let config = MiningConfig::new(1.0, 0.0, Algorithm::Eclat).unwrap();
        assert_eq!(config.min_support_count(7), 7);
    }

    #[test]
    fn test_threshold_validation() {
        for &bad in &[0.0, -0.1, 1.5, std::f64::NAN] {
            match MiningConfig::new(bad, 0.5, Algorithm::CrossLinked) {
                Err(MiningError::InvalidMinSupport(_)) => {}
                other => panic!("expected InvalidMinSupport, got {:?}", other),
            }
        }
        for &bad in &[-0.01, 1.01, std::f64::NAN] {
            match MiningConfig::new(0.5, bad, Algorithm::CrossLinked) {
                Err(MiningError::InvalidMinConfidence(_)) => {}
                other => panic!("expected InvalidMinConfidence, got {:?}", other),
            }
        }
        assert!(MiningConfig::new(1.0, 0.0, Algorithm::HashPruned).is_ok());
        assert!(MiningConfig::new(0.01, 1.0, Algorithm::HashPruned).is_ok());
    }

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in Algorithm::all().iter() {
            assert_eq!(&algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!("fpgrowth".parse::<Algorithm>().is_err());
    }
}
